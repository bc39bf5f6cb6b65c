// Field binding tests: registration pass and resolver behavior

use std::sync::Arc;

use image_cdn::transform::EnumType;
use image_cdn::{
    CdnConfig, CdnError, FieldBindingSpec, FieldResolver, ImageCdn, MissingSource, PluginConfig,
    ResolveInfo, SchemaHost, TransformArgs, Transformer,
};
use serde_json::{json, Value};

/// Host double that records every registration call
#[derive(Default)]
struct RecordingHost {
    enum_calls: usize,
    enum_types: Vec<EnumType>,
    resolvers: Vec<(String, String, FieldResolver)>,
}

impl SchemaHost for RecordingHost {
    fn register_enum_types(&mut self, types: Vec<EnumType>) {
        self.enum_calls += 1;
        self.enum_types.extend(types);
    }

    fn register_field_resolver(&mut self, type_name: &str, field_name: &str, resolver: FieldResolver) {
        self.resolvers
            .push((type_name.to_string(), field_name.to_string(), resolver));
    }
}

impl RecordingHost {
    fn resolver(&self, type_name: &str, field_name: &str) -> &FieldResolver {
        self.resolvers
            .iter()
            .find(|(t, f, _)| t == type_name && f == field_name)
            .map(|(_, _, r)| r)
            .expect("resolver should be registered")
    }
}

/// Custom transformer that concatenates base, prefix, and source
struct ConcatTransformer;

impl Transformer for ConcatTransformer {
    fn name(&self) -> &str {
        "concat"
    }

    fn render(
        &self,
        cdn: &CdnConfig,
        source_url: &str,
        _args: &TransformArgs,
    ) -> Result<String, CdnError> {
        Ok(format!("{}{}{}", cdn.base_url, cdn.image_prefix, source_url))
    }
}

fn registered(config: PluginConfig) -> RecordingHost {
    let cdn = ImageCdn::new(config).expect("config should be valid");
    let mut host = RecordingHost::default();
    cdn.register(&mut host).expect("registration should succeed");
    host
}

fn imagekit_config() -> PluginConfig {
    PluginConfig::new(CdnConfig::new("https://ik.imagekit.io/demo").with_preset("imageKit"))
        .with_site_base_url("https://site.com")
}

#[test]
fn test_resolves_full_custom_cdn_url() {
    let config = PluginConfig::new(
        CdnConfig::new("http://example.com")
            .with_image_prefix("/")
            .with_transformer(Arc::new(ConcatTransformer)),
    )
    .with_binding(FieldBindingSpec::new("Post", "featured"));

    let host = registered(config);
    let parent = json!({ "featured": "image.jpg" });
    let value = host
        .resolver("Post", "featured")
        .resolve(&parent, &json!({}), &ResolveInfo::new(""))
        .unwrap();

    assert_eq!(value, json!("http://example.com/image.jpg"));
}

#[test]
fn test_custom_transformer_declares_nothing() {
    let config = PluginConfig::new(
        CdnConfig::new("http://example.com").with_transformer(Arc::new(ConcatTransformer)),
    )
    .with_binding(FieldBindingSpec::new("Post", "featured"));

    let host = registered(config);
    assert_eq!(host.enum_calls, 1);
    assert!(host.enum_types.is_empty());
    assert!(host.resolver("Post", "featured").args().is_empty());
}

#[test]
fn test_registration_declares_enums_once_then_resolvers_in_order() {
    let config = imagekit_config()
        .with_binding(FieldBindingSpec::new("Post", "featured"))
        .with_binding(FieldBindingSpec::new("Author", "avatar"));

    let host = registered(config);
    assert_eq!(host.enum_calls, 1);
    assert_eq!(host.enum_types.len(), 5);

    let fields: Vec<_> = host
        .resolvers
        .iter()
        .map(|(t, f, _)| format!("{}.{}", t, f))
        .collect();
    assert_eq!(fields, vec!["Post.featured", "Author.avatar"]);
    assert_eq!(host.resolver("Author", "avatar").args().len(), 15);
}

#[test]
fn test_resolver_strips_site_base_url_and_transforms() {
    let host = registered(imagekit_config().with_binding(FieldBindingSpec::new("Post", "featured")));
    let parent = json!({ "featured": "https://site.com/uploads/a.jpg" });

    let value = host
        .resolver("Post", "featured")
        .resolve(
            &parent,
            &json!({ "width": 300, "crop": "at_max", "blur": null }),
            &ResolveInfo::new("featured"),
        )
        .unwrap();

    assert_eq!(
        value,
        json!("https://ik.imagekit.io/demo/tr:w-300,c-at_max/uploads/a.jpg")
    );
}

#[test]
fn test_resolver_uses_alias_response_key() {
    let host = registered(imagekit_config().with_binding(FieldBindingSpec::new("Post", "featured")));
    let parent = json!({
        "featured": "https://site.com/original.jpg",
        "hero": "https://site.com/uploads/hero.jpg"
    });

    let value = host
        .resolver("Post", "featured")
        .resolve(&parent, &json!({ "height": 80 }), &ResolveInfo::new("hero"))
        .unwrap();

    assert_eq!(
        value,
        json!("https://ik.imagekit.io/demo/tr:h-80/uploads/hero.jpg")
    );
}

#[test]
fn test_nested_binding_replaces_only_child() {
    let config = imagekit_config()
        .with_binding(FieldBindingSpec::new("Post", "cover").with_path("cover.src"));
    let host = registered(config);
    let parent = json!({
        "cover": { "src": "https://site.com/c.jpg", "alt": "Cover", "width": 1200 }
    });

    let value = host
        .resolver("Post", "cover")
        .resolve(&parent, &json!({ "width": 300 }), &ResolveInfo::new("cover"))
        .unwrap();

    assert_eq!(
        value,
        json!({
            "src": "https://ik.imagekit.io/demo/tr:w-300/c.jpg",
            "alt": "Cover",
            "width": 1200
        })
    );
    // Parent record is untouched
    assert_eq!(parent["cover"]["src"], json!("https://site.com/c.jpg"));
}

#[test]
fn test_passthrough_preset_returns_stripped_value() {
    let config = PluginConfig::new(CdnConfig::new("https://cdn.example.com").with_preset("none"))
        .with_site_base_url("https://site.com")
        .with_binding(FieldBindingSpec::new("Post", "featured"));

    let host = registered(config);
    assert_eq!(host.enum_calls, 0);

    let resolver = host.resolver("Post", "featured");
    assert!(resolver.args().is_empty());
    let value = resolver
        .resolve(
            &json!({ "featured": "https://site.com/a.jpg" }),
            &Value::Null,
            &ResolveInfo::default(),
        )
        .unwrap();
    assert_eq!(value, json!("/a.jpg"));
}

#[test]
fn test_missing_source_errors_by_default() {
    let host = registered(imagekit_config().with_binding(FieldBindingSpec::new("Post", "featured")));
    let resolver = host.resolver("Post", "featured");

    for parent in [json!({ "featured": null }), json!({})] {
        let err = resolver
            .resolve(&parent, &json!({}), &ResolveInfo::new("featured"))
            .unwrap_err();
        assert_eq!(
            err,
            CdnError::MissingSource {
                type_name: "Post".to_string(),
                field: "featured".to_string(),
            }
        );
    }
}

#[test]
fn test_missing_source_can_resolve_to_null() {
    let config = imagekit_config()
        .with_missing_source(MissingSource::ReturnNull)
        .with_binding(FieldBindingSpec::new("Post", "featured"))
        .with_binding(FieldBindingSpec::new("Post", "cover").with_path("cover.src"));
    let host = registered(config);

    let value = host
        .resolver("Post", "featured")
        .resolve(&json!({ "featured": null }), &json!({}), &ResolveInfo::new("featured"))
        .unwrap();
    assert_eq!(value, Value::Null);

    let value = host
        .resolver("Post", "cover")
        .resolve(
            &json!({ "cover": { "alt": "No image" } }),
            &json!({}),
            &ResolveInfo::new("cover"),
        )
        .unwrap();
    assert_eq!(value, json!({ "alt": "No image" }));
}

#[test]
fn test_non_string_source_is_malformed() {
    let host = registered(imagekit_config().with_binding(FieldBindingSpec::new("Post", "featured")));
    let err = host
        .resolver("Post", "featured")
        .resolve(&json!({ "featured": 42 }), &json!({}), &ResolveInfo::new("featured"))
        .unwrap_err();
    assert!(matches!(err, CdnError::MalformedSource { ref found, .. } if found == "number"));
}

#[test]
fn test_unknown_argument_surfaces_from_resolver() {
    let host = registered(imagekit_config().with_binding(FieldBindingSpec::new("Post", "featured")));
    let err = host
        .resolver("Post", "featured")
        .resolve(
            &json!({ "featured": "/a.jpg" }),
            &json!({ "w": 10 }),
            &ResolveInfo::new("featured"),
        )
        .unwrap_err();
    assert!(matches!(err, CdnError::UnknownArgument { .. }));
}

#[test]
fn test_resolver_rejects_malformed_binding_spec() {
    let config = imagekit_config();

    let too_deep = FieldBindingSpec::new("Post", "cover").with_path("cover.a.b");
    let err = FieldResolver::new(too_deep, &config, None).unwrap_err();
    assert!(matches!(err, CdnError::Config(_)), "got {err:?}");
    assert!(err.is_startup_error());

    let empty = FieldBindingSpec::new("Post", "");
    assert!(FieldResolver::new(empty, &config, None).is_err());

    let nested = FieldBindingSpec::new("Post", "cover").with_path("cover.src");
    assert!(FieldResolver::new(nested, &config, None).is_ok());
}
