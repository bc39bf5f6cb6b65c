//! URL render styles
//!
//! Three encodings cover the built-in providers:
//!
//! ## Segmented
//! ```text
//! {base}/tr:h-100,w-200,e-grayscale,c-force,f-webp{prefix}{source}
//! ```
//!
//! ## Flat-prefixed
//! ```text
//! {base}/w_200,c_fill,g_auto:faces{prefix}{source}
//! {base}/t_{named}{prefix}{source}
//! ```
//!
//! ## Query string
//! ```text
//! {base}{prefix}{source}?w=200&fit=crop
//! ```

use crate::config::CdnConfig;
use crate::error::CdnError;

use super::args::{ArgValue, TransformArgs};
use super::catalog::{ArgSpec, Catalog, Encoding, Group};

/// Argument that short-circuits flat-prefixed rendering
pub const NAMED_TRANSFORMATION_ARG: &str = "transformation";

/// Argument that rewrites the file extension in flat-prefixed rendering
pub const FORMAT_ARG: &str = "format";

/// Format value that leaves the source extension untouched
pub const AUTO_FORMAT: &str = "auto";

/// How a provider lays the transform out in the URL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStyle {
    /// `tr:` bundle of primary args, then secondary pieces, comma-joined
    Segmented,
    /// `prefix_value` pieces, comma-joined, with named-transformation and
    /// format-extension special cases
    FlatPrefixed,
    /// `prefix=value` query parameters in caller order
    QueryString,
}

impl RenderStyle {
    /// Render the final URL for `source_url`
    pub fn render(
        &self,
        catalog: &Catalog,
        cdn: &CdnConfig,
        source_url: &str,
        args: &TransformArgs,
    ) -> Result<String, CdnError> {
        match self {
            RenderStyle::Segmented => render_segmented(catalog, cdn, source_url, args),
            RenderStyle::FlatPrefixed => render_flat(catalog, cdn, source_url, args),
            RenderStyle::QueryString => render_query(catalog, cdn, source_url, args),
        }
    }
}

/// Resolve every caller arg against the catalog and sort into declaration order
fn resolve_ordered<'a>(
    catalog: &Catalog,
    args: &'a TransformArgs,
) -> Result<Vec<(&'static ArgSpec, &'a ArgValue)>, CdnError> {
    let mut resolved = resolve_in_caller_order(catalog, args)?;
    resolved.sort_by_key(|(spec, _)| catalog.position(spec.name).unwrap_or(usize::MAX));
    Ok(resolved)
}

fn resolve_in_caller_order<'a>(
    catalog: &Catalog,
    args: &'a TransformArgs,
) -> Result<Vec<(&'static ArgSpec, &'a ArgValue)>, CdnError> {
    args.iter()
        .map(|(name, value)| {
            let spec = catalog
                .lookup(name)
                .ok_or_else(|| CdnError::UnknownArgument {
                    provider: catalog.provider.to_string(),
                    name: name.to_string(),
                })?;
            value.check(spec)?;
            Ok((spec, value))
        })
        .collect()
}

fn piece(spec: &ArgSpec, value: &ArgValue, separator: char) -> String {
    match spec.encoding {
        Encoding::Flag => spec.wire_prefix.to_string(),
        Encoding::Pair => format!("{}{}{}", spec.wire_prefix, separator, value),
    }
}

fn assemble(cdn: &CdnConfig, segment: &str, source_url: &str) -> String {
    format!(
        "{}{}{}{}",
        cdn.base_url, segment, cdn.image_prefix, source_url
    )
}

fn render_segmented(
    catalog: &Catalog,
    cdn: &CdnConfig,
    source_url: &str,
    args: &TransformArgs,
) -> Result<String, CdnError> {
    let resolved = resolve_ordered(catalog, args)?;

    let mut bundle = Vec::new();
    let mut pieces = Vec::new();
    for (spec, value) in resolved {
        match spec.group {
            Group::Primary => bundle.push(piece(spec, value, '-')),
            Group::Secondary | Group::None => pieces.push(piece(spec, value, '-')),
        }
    }

    if !bundle.is_empty() {
        pieces.insert(0, format!("tr:{}", bundle.join(",")));
    }

    let segment = if pieces.is_empty() {
        String::new()
    } else {
        format!("/{}", pieces.join(","))
    };

    Ok(assemble(cdn, &segment, source_url))
}

fn render_flat(
    catalog: &Catalog,
    cdn: &CdnConfig,
    source_url: &str,
    args: &TransformArgs,
) -> Result<String, CdnError> {
    // A named transformation replaces every other argument, checked or not
    if let (Some(named), Some(spec)) = (
        args.get(NAMED_TRANSFORMATION_ARG),
        catalog.lookup(NAMED_TRANSFORMATION_ARG),
    ) {
        named.check(spec)?;
        let segment = format!("/t_{}", named);
        return Ok(assemble(cdn, &segment, source_url));
    }

    let resolved = resolve_ordered(catalog, args)?;
    let mut pieces = Vec::new();
    let mut source = source_url.to_string();
    for (spec, value) in resolved {
        if spec.name == FORMAT_ARG {
            let format = value.to_string();
            if format != AUTO_FORMAT {
                source = replace_extension(source_url, &format);
            }
            continue;
        }
        pieces.push(piece(spec, value, '_'));
    }

    let segment = if pieces.is_empty() {
        String::new()
    } else {
        format!("/{}", pieces.join(","))
    };

    Ok(assemble(cdn, &segment, &source))
}

fn render_query(
    catalog: &Catalog,
    cdn: &CdnConfig,
    source_url: &str,
    args: &TransformArgs,
) -> Result<String, CdnError> {
    let resolved = resolve_in_caller_order(catalog, args)?;
    let url = assemble(cdn, "", source_url);

    if resolved.is_empty() {
        return Ok(url);
    }

    let query: Vec<String> = resolved
        .iter()
        .map(|(spec, value)| {
            let value = value.to_string();
            format!(
                "{}={}",
                urlencoding::encode(spec.wire_prefix),
                urlencoding::encode(&value)
            )
        })
        .collect();

    Ok(format!("{}?{}", url, query.join("&")))
}

/// Swap the extension of the last path segment, appending one if absent
///
/// Any `?query` or `#fragment` suffix is carried over untouched.
pub fn replace_extension(source_url: &str, format: &str) -> String {
    let split_at = source_url.find(['?', '#']).unwrap_or(source_url.len());
    let (path, suffix) = source_url.split_at(split_at);

    let name_start = path.rfind('/').map(|i| i + 1).unwrap_or(0);
    let stem_end = match path[name_start..].rfind('.') {
        Some(0) | None => path.len(),
        Some(dot) => name_start + dot,
    };

    format!("{}.{}{}", &path[..stem_end], format, suffix)
}
