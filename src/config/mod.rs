// Configuration module

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use std::sync::{Arc, OnceLock};

use crate::error::CdnError;
use crate::transform::Transformer;

/// Preset value that opts out of transformation entirely
pub const PASSTHROUGH_PRESET: &str = "none";

static ENV_PATTERN: OnceLock<Regex> = OnceLock::new();

fn env_pattern() -> &'static Regex {
    ENV_PATTERN.get_or_init(|| {
        Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("env pattern is a valid regex")
    })
}

/// Top-level plugin options
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginConfig {
    #[serde(default)]
    pub site: SiteConfig,
    pub cdn: CdnConfig,
    /// Fields that get CDN-aware resolvers, in registration order
    #[serde(default)]
    pub types: Vec<FieldBindingSpec>,
    /// What a resolver does when the stored source value is absent
    #[serde(default)]
    pub missing_source: MissingSource,
}

/// The site whose absolute URLs are stored in content
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    /// Prefix stripped from stored values before rendering (empty = none)
    #[serde(default)]
    pub base_url: String,
}

/// CDN endpoint and transformer selection
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CdnConfig {
    /// CDN origin, e.g. `https://ik.imagekit.io/demo`
    pub base_url: String,

    /// Path segment inserted between the transform string and the source
    #[serde(default)]
    pub image_prefix: String,

    /// Built-in provider identifier (`imageKit`, `cloudinary`, `imgix`, or
    /// `none` for passthrough)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,

    /// Caller-supplied transformer, used when no preset is set
    #[serde(skip)]
    pub transformer: Option<Arc<dyn Transformer>>,
}

impl CdnConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_image_prefix(mut self, image_prefix: impl Into<String>) -> Self {
        self.image_prefix = image_prefix.into();
        self
    }

    pub fn with_preset(mut self, preset: impl Into<String>) -> Self {
        self.preset = Some(preset.into());
        self
    }

    pub fn with_transformer(mut self, transformer: Arc<dyn Transformer>) -> Self {
        self.transformer = Some(transformer);
        self
    }
}

impl fmt::Debug for CdnConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CdnConfig")
            .field("base_url", &self.base_url)
            .field("image_prefix", &self.image_prefix)
            .field("preset", &self.preset)
            .field(
                "transformer",
                &self.transformer.as_ref().map(|t| t.name().to_string()),
            )
            .finish()
    }
}

/// Behavior when a bound field's stored value is null or missing
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum MissingSource {
    /// Fail the resolve with `CdnError::MissingSource`
    #[default]
    Error,
    /// Resolve to `null`
    ReturnNull,
}

/// One content-graph field that gets a CDN-aware resolver
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FieldBindingSpec {
    pub type_name: String,
    pub source_field: String,
    /// `parent.child`: the URL lives at `child` inside the object at `parent`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_field_path: Option<String>,
}

impl FieldBindingSpec {
    pub fn new(type_name: impl Into<String>, source_field: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            source_field: source_field.into(),
            source_field_path: None,
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.source_field_path = Some(path.into());
        self
    }

    /// Child key for nested bindings
    pub fn nested_child(&self) -> Option<&str> {
        self.source_field_path
            .as_deref()
            .and_then(|path| path.split_once('.'))
            .map(|(_, child)| child)
    }

    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.type_name.trim().is_empty() {
            return Err(format!(
                "Binding for field '{}' has empty typeName",
                self.source_field
            ));
        }

        if self.source_field.trim().is_empty() {
            return Err(format!(
                "Binding on type '{}' has empty sourceField",
                self.type_name
            ));
        }

        if let Some(path) = &self.source_field_path {
            let parts: Vec<&str> = path.split('.').collect();
            if parts.len() != 2 || parts.iter().any(|p| p.is_empty()) {
                return Err(format!(
                    "{}.{}: sourceFieldPath '{}' must have the form 'parent.child'",
                    self.type_name, self.source_field, path
                ));
            }
            if parts[0] != self.source_field {
                return Err(format!(
                    "{}.{}: sourceFieldPath '{}' must start with the source field",
                    self.type_name, self.source_field, path
                ));
            }
        }

        Ok(())
    }
}

impl PluginConfig {
    pub fn new(cdn: CdnConfig) -> Self {
        Self {
            site: SiteConfig::default(),
            cdn,
            types: Vec::new(),
            missing_source: MissingSource::default(),
        }
    }

    pub fn with_site_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.site.base_url = base_url.into();
        self
    }

    pub fn with_binding(mut self, binding: FieldBindingSpec) -> Self {
        self.types.push(binding);
        self
    }

    pub fn with_missing_source(mut self, missing_source: MissingSource) -> Self {
        self.missing_source = missing_source;
        self
    }

    /// Parse YAML, replacing `${VAR_NAME}` with environment variable values
    pub fn from_yaml_with_env(yaml: &str) -> Result<Self, CdnError> {
        let re = env_pattern();

        // Check that all referenced environment variables exist
        for caps in re.captures_iter(yaml) {
            let var_name = &caps[1];
            std::env::var(var_name).map_err(|_| {
                CdnError::ConfigFile(format!(
                    "Environment variable '{}' is referenced but not set",
                    var_name
                ))
            })?;
        }

        let substituted = re.replace_all(yaml, |caps: &regex::Captures| {
            std::env::var(&caps[1]).unwrap_or_default()
        });

        serde_yaml::from_str(&substituted).map_err(|e| CdnError::ConfigFile(e.to_string()))
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CdnError> {
        let yaml = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            CdnError::ConfigFile(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        Self::from_yaml_with_env(&yaml)
    }

    /// Startup validation; transformer resolution is checked by the registry
    pub fn validate(&self) -> Result<(), CdnError> {
        if self.cdn.base_url.trim().is_empty() {
            return Err(CdnError::config("cdn.baseUrl cannot be empty"));
        }

        let mut seen = HashSet::new();
        for binding in &self.types {
            binding.validate().map_err(CdnError::Config)?;

            if !seen.insert((&binding.type_name, &binding.source_field)) {
                return Err(CdnError::Config(format!(
                    "Duplicate binding for '{}.{}'",
                    binding.type_name, binding.source_field
                )));
            }
        }

        Ok(())
    }
}
