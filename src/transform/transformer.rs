//! Transformer capability contract

use std::fmt;

use crate::config::CdnConfig;
use crate::error::CdnError;

use super::args::TransformArgs;
use super::catalog::{Catalog, EnumType};
use super::style::RenderStyle;

/// One resolver argument: name and schema type name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverArg {
    pub name: String,
    pub type_name: String,
}

impl ResolverArg {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
        }
    }
}

/// Maps uniform transform arguments onto one provider's URL syntax
///
/// Built-in providers and caller-supplied transformers both implement this.
/// The schema hooks default to "nothing to declare" so a custom transformer
/// only has to render.
///
/// # Examples
///
/// ```
/// use image_cdn::{CdnConfig, CdnError, TransformArgs, Transformer};
///
/// struct Passthrough;
///
/// impl Transformer for Passthrough {
///     fn name(&self) -> &str {
///         "passthrough"
///     }
///
///     fn render(
///         &self,
///         cdn: &CdnConfig,
///         source_url: &str,
///         _args: &TransformArgs,
///     ) -> Result<String, CdnError> {
///         Ok(format!("{}{}{}", cdn.base_url, cdn.image_prefix, source_url))
///     }
/// }
/// ```
pub trait Transformer: Send + Sync {
    /// Identifier used in logs and error messages
    fn name(&self) -> &str;

    /// Enum types to declare before resolvers are registered
    fn schema_types(&self) -> Vec<EnumType> {
        Vec::new()
    }

    /// Arguments exposed on every bound field
    fn resolver_args(&self) -> Vec<ResolverArg> {
        Vec::new()
    }

    /// Startup self-check, run once when the transformer is selected
    fn validate(&self) -> Result<(), CdnError> {
        Ok(())
    }

    /// Build the final URL; must be a pure function of its inputs
    fn render(
        &self,
        cdn: &CdnConfig,
        source_url: &str,
        args: &TransformArgs,
    ) -> Result<String, CdnError>;
}

/// Transformer driven by a static catalog and a render style
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct CatalogTransformer {
    catalog: &'static Catalog,
    style: RenderStyle,
}

impl CatalogTransformer {
    pub const fn new(catalog: &'static Catalog, style: RenderStyle) -> Self {
        Self { catalog, style }
    }

    pub fn catalog(&self) -> &'static Catalog {
        self.catalog
    }

    pub fn style(&self) -> RenderStyle {
        self.style
    }
}

impl fmt::Debug for CatalogTransformer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogTransformer")
            .field("provider", &self.catalog.provider)
            .field("style", &self.style)
            .field("args", &self.catalog.list_args().len())
            .finish()
    }
}

impl Transformer for CatalogTransformer {
    fn name(&self) -> &str {
        self.catalog.provider
    }

    fn schema_types(&self) -> Vec<EnumType> {
        self.catalog
            .enum_specs()
            .into_iter()
            .map(|spec| spec.to_type())
            .collect()
    }

    fn resolver_args(&self) -> Vec<ResolverArg> {
        self.catalog
            .list_args()
            .iter()
            .map(|spec| ResolverArg::new(spec.name, spec.kind.type_name()))
            .collect()
    }

    /// Argument names and wire prefixes must be unique within the catalog
    fn validate(&self) -> Result<(), CdnError> {
        self.catalog.check_unique().map_err(CdnError::Config)
    }

    fn render(
        &self,
        cdn: &CdnConfig,
        source_url: &str,
        args: &TransformArgs,
    ) -> Result<String, CdnError> {
        tracing::debug!(
            provider = self.catalog.provider,
            args = args.len(),
            source_url = source_url,
            "Rendering CDN URL"
        );
        self.style.render(self.catalog, cdn, source_url, args)
    }
}
