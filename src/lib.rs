// Image CDN URL rewriting library
//
// Turns site-relative image paths into CDN transform URLs for ImageKit,
// Cloudinary, imgix, or a caller-supplied transformer.

pub mod binding;
pub mod config;
pub mod error;
pub mod logging;
pub mod registry;
pub mod transform;

use std::sync::Arc;

pub use binding::{FieldResolver, ResolveInfo, SchemaHost};
pub use config::{CdnConfig, FieldBindingSpec, MissingSource, PluginConfig, SiteConfig};
pub use error::CdnError;
pub use transform::{ArgValue, TransformArgs, Transformer};

/// Validated plugin: configuration plus the transformer selected at startup
///
/// Construction performs every startup check, so a bad preset or missing
/// transformer fails here rather than on the first query.
///
/// # Examples
///
/// ```
/// use image_cdn::{CdnConfig, ImageCdn, PluginConfig, TransformArgs};
///
/// let config = PluginConfig::new(
///     CdnConfig::new("https://ik.imagekit.io/demo").with_preset("imageKit"),
/// );
/// let cdn = ImageCdn::new(config).unwrap();
///
/// let args = TransformArgs::new().with("width", 400);
/// assert_eq!(
///     cdn.render("/img/a.jpg", &args).unwrap(),
///     "https://ik.imagekit.io/demo/tr:w-400/img/a.jpg"
/// );
/// ```
#[derive(Clone)]
pub struct ImageCdn {
    config: PluginConfig,
    transformer: Option<Arc<dyn Transformer>>,
}

impl ImageCdn {
    pub fn new(config: PluginConfig) -> Result<Self, CdnError> {
        config.validate()?;
        let transformer = registry::select(&config.cdn)?;
        Ok(Self {
            config,
            transformer,
        })
    }

    /// Load, validate, and select from a YAML configuration file
    pub fn from_file<P: AsRef<std::path::Path>>(
        path: P,
        custom: Option<Arc<dyn Transformer>>,
    ) -> Result<Self, CdnError> {
        let mut config = PluginConfig::from_file(path)?;
        config.cdn.transformer = custom;
        Self::new(config)
    }

    pub fn config(&self) -> &PluginConfig {
        &self.config
    }

    /// Selected transformer, `None` for passthrough
    pub fn transformer(&self) -> Option<&Arc<dyn Transformer>> {
        self.transformer.as_ref()
    }

    /// Render a source URL directly, outside any host
    pub fn render(&self, source_url: &str, args: &TransformArgs) -> Result<String, CdnError> {
        match &self.transformer {
            None => Ok(source_url.to_string()),
            Some(transformer) => transformer.render(&self.config.cdn, source_url, args),
        }
    }

    /// One-shot registration of enum types and field resolvers with `host`
    pub fn register(&self, host: &mut dyn SchemaHost) -> Result<(), CdnError> {
        binding::register(host, &self.config, self.transformer.clone())
    }
}
