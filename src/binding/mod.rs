//! Field binding: CDN-aware resolvers for content-graph fields
//!
//! The host schema is reached only through [`SchemaHost`]. Registration is a
//! single pass: enum types first, then one resolver per configured binding.
//!
//! A resolver reads the stored URL under the requested response key (so
//! aliased fields work), strips the site base URL, and hands the result to
//! the selected transformer.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::config::{CdnConfig, FieldBindingSpec, MissingSource, PluginConfig};
use crate::error::{describe_json, CdnError};
use crate::transform::{EnumType, ResolverArg, TransformArgs, Transformer};

/// Host schema registration surface
pub trait SchemaHost {
    /// Declare enum types used by resolver arguments
    fn register_enum_types(&mut self, types: Vec<EnumType>);

    /// Attach `resolver` to `type_name.field_name`
    fn register_field_resolver(&mut self, type_name: &str, field_name: &str, resolver: FieldResolver);
}

/// Per-call resolution info supplied by the host
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolveInfo {
    /// Key the field is requested under (the alias, if one is used)
    pub response_key: String,
}

impl ResolveInfo {
    pub fn new(response_key: impl Into<String>) -> Self {
        Self {
            response_key: response_key.into(),
        }
    }
}

struct Binding {
    spec: FieldBindingSpec,
    site_base_url: String,
    cdn: CdnConfig,
    transformer: Option<Arc<dyn Transformer>>,
    missing_source: MissingSource,
}

/// Resolver for one bound field
#[derive(Clone)]
pub struct FieldResolver {
    args: Vec<ResolverArg>,
    binding: Arc<Binding>,
}

impl fmt::Debug for FieldResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldResolver")
            .field("type_name", &self.binding.spec.type_name)
            .field("source_field", &self.binding.spec.source_field)
            .field("args", &self.args.len())
            .finish()
    }
}

impl FieldResolver {
    /// Build a resolver for `spec`
    ///
    /// # Errors
    ///
    /// `Config` if the binding spec is malformed (empty names, or a source
    /// path that is not `sourceField.child`).
    pub fn new(
        spec: FieldBindingSpec,
        config: &PluginConfig,
        transformer: Option<Arc<dyn Transformer>>,
    ) -> Result<Self, CdnError> {
        spec.validate().map_err(CdnError::Config)?;

        let args = transformer
            .as_ref()
            .map(|t| t.resolver_args())
            .unwrap_or_default();

        Ok(Self {
            args,
            binding: Arc::new(Binding {
                spec,
                site_base_url: config.site.base_url.clone(),
                cdn: config.cdn.clone(),
                transformer,
                missing_source: config.missing_source,
            }),
        })
    }

    /// Argument schema exposed on the field
    pub fn args(&self) -> &[ResolverArg] {
        &self.args
    }

    pub fn spec(&self) -> &FieldBindingSpec {
        &self.binding.spec
    }

    /// Resolve with host-shaped arguments (a JSON object)
    pub fn resolve(&self, parent: &Value, args: &Value, info: &ResolveInfo) -> Result<Value, CdnError> {
        let args = TransformArgs::from_json(args)?;
        self.resolve_with(parent, &args, info)
    }

    /// Resolve with already-typed arguments
    pub fn resolve_with(
        &self,
        parent: &Value,
        args: &TransformArgs,
        info: &ResolveInfo,
    ) -> Result<Value, CdnError> {
        let spec = &self.binding.spec;
        let key = if info.response_key.is_empty() {
            spec.source_field.as_str()
        } else {
            info.response_key.as_str()
        };

        let raw = match parent.get(key) {
            None | Some(Value::Null) => return self.missing(),
            Some(value) => value,
        };

        let Some(child) = spec.nested_child() else {
            return self.render_value(raw, args);
        };

        let Value::Object(object) = raw else {
            return Err(self.malformed(raw));
        };

        let mut copy = object.clone();
        match object.get(child) {
            None | Some(Value::Null) => {
                if self.binding.missing_source == MissingSource::Error {
                    return self.missing();
                }
            }
            Some(value) => {
                let rendered = self.render_value(value, args)?;
                copy.insert(child.to_string(), rendered);
            }
        }

        Ok(Value::Object(copy))
    }

    fn render_value(&self, value: &Value, args: &TransformArgs) -> Result<Value, CdnError> {
        let Value::String(stored) = value else {
            return Err(self.malformed(value));
        };

        let binding = &self.binding;
        let source_url = strip_base_url(stored, &binding.site_base_url);

        match &binding.transformer {
            None => Ok(Value::String(source_url.to_string())),
            Some(transformer) => transformer
                .render(&binding.cdn, source_url, args)
                .map(Value::String),
        }
    }

    fn missing(&self) -> Result<Value, CdnError> {
        match self.binding.missing_source {
            MissingSource::ReturnNull => Ok(Value::Null),
            MissingSource::Error => Err(CdnError::MissingSource {
                type_name: self.binding.spec.type_name.clone(),
                field: self.binding.spec.source_field.clone(),
            }),
        }
    }

    fn malformed(&self, value: &Value) -> CdnError {
        CdnError::MalformedSource {
            type_name: self.binding.spec.type_name.clone(),
            field: self.binding.spec.source_field.clone(),
            found: describe_json(value),
        }
    }
}

/// Remove the site base URL from the front of a stored value
pub fn strip_base_url<'a>(stored: &'a str, base_url: &str) -> &'a str {
    if base_url.is_empty() {
        return stored;
    }
    stored.strip_prefix(base_url).unwrap_or(stored)
}

/// Register enum types and one resolver per configured binding
///
/// Every resolver is built before the host is touched, so a bad binding
/// leaves the host schema unchanged.
pub fn register(
    host: &mut dyn SchemaHost,
    config: &PluginConfig,
    transformer: Option<Arc<dyn Transformer>>,
) -> Result<(), CdnError> {
    let resolvers = config
        .types
        .iter()
        .map(|spec| FieldResolver::new(spec.clone(), config, transformer.clone()))
        .collect::<Result<Vec<_>, _>>()?;

    if let Some(t) = &transformer {
        host.register_enum_types(t.schema_types());
    }

    for resolver in resolvers {
        let spec = resolver.spec().clone();
        host.register_field_resolver(&spec.type_name, &spec.source_field, resolver);
    }

    tracing::info!(
        bindings = config.types.len(),
        transformer = transformer.as_ref().map(|t| t.name()).unwrap_or("none"),
        "Registered CDN field resolvers"
    );
    Ok(())
}
