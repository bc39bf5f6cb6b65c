// Transformer registry module

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use crate::config::{CdnConfig, PASSTHROUGH_PRESET};
use crate::error::CdnError;
use crate::transform::providers::{cloudinary, imagekit, imgix};
use crate::transform::{CatalogTransformer, RenderStyle, Transformer};

static BUILTINS: OnceLock<HashMap<&'static str, CatalogTransformer>> = OnceLock::new();

/// Process-wide preset table, built on first use and never mutated
pub fn builtins() -> &'static HashMap<&'static str, CatalogTransformer> {
    BUILTINS.get_or_init(|| {
        HashMap::from([
            (
                imagekit::PRESET,
                CatalogTransformer::new(&imagekit::CATALOG, RenderStyle::Segmented),
            ),
            (
                cloudinary::PRESET,
                CatalogTransformer::new(&cloudinary::CATALOG, RenderStyle::FlatPrefixed),
            ),
            (
                imgix::PRESET,
                CatalogTransformer::new(&imgix::CATALOG, RenderStyle::QueryString),
            ),
        ])
    })
}

/// Look up a built-in transformer by preset identifier
pub fn lookup(preset: &str) -> Option<&'static CatalogTransformer> {
    builtins().get(preset)
}

/// Sorted list of registered preset identifiers
pub fn preset_names() -> Vec<&'static str> {
    let mut names: Vec<_> = builtins().keys().copied().collect();
    names.sort_unstable();
    names
}

/// Resolve the transformer for `cdn`
///
/// A preset wins over a custom transformer. `Ok(None)` means the explicit
/// `none` preset: resolvers pass stored values through untouched.
///
/// # Errors
///
/// - `UnknownPreset` if the preset is not registered
/// - `Config` if the selected transformer fails its own validation
/// - `Config` if neither a preset nor a custom transformer is supplied
pub fn select(cdn: &CdnConfig) -> Result<Option<Arc<dyn Transformer>>, CdnError> {
    match (&cdn.preset, &cdn.transformer) {
        (Some(preset), custom) => {
            if custom.is_some() {
                tracing::warn!(
                    preset = %preset,
                    "Both a preset and a custom transformer are configured; using the preset"
                );
            }

            if preset == PASSTHROUGH_PRESET {
                tracing::info!("CDN transforms disabled, source URLs pass through");
                return Ok(None);
            }

            let builtin = lookup(preset).ok_or_else(|| CdnError::UnknownPreset(preset.clone()))?;
            builtin.validate()?;
            tracing::info!(preset = %preset, "Selected built-in CDN transformer");
            let transformer: Arc<dyn Transformer> = Arc::new(*builtin);
            Ok(Some(transformer))
        }
        (None, Some(custom)) => {
            custom.validate()?;
            tracing::info!(transformer = custom.name(), "Selected custom CDN transformer");
            Ok(Some(Arc::clone(custom)))
        }
        (None, None) => Err(CdnError::config(format!(
            "cdn requires either a preset ({}, or '{}') or a custom transformer",
            preset_names().join(", "),
            PASSTHROUGH_PRESET
        ))),
    }
}
