// URL rendering tests for the built-in providers

use image_cdn::registry;
use image_cdn::transform::{ArgValue, CatalogTransformer, ResolverArg};
use image_cdn::{CdnConfig, CdnError, TransformArgs, Transformer};
use rstest::rstest;

fn builtin(preset: &str) -> &'static CatalogTransformer {
    registry::lookup(preset).expect("preset should be registered")
}

fn render(preset: &str, cdn: &CdnConfig, source: &str, args: TransformArgs) -> String {
    builtin(preset)
        .render(cdn, source, &args)
        .expect("render should succeed")
}

#[rstest]
#[case("imageKit")]
#[case("cloudinary")]
#[case("imgix")]
fn test_empty_args_emit_no_transform_segment(#[case] preset: &str) {
    let cdn = CdnConfig::new("https://cdn.example.com").with_image_prefix("/media");
    let url = render(preset, &cdn, "/img/photo.jpg", TransformArgs::new());
    assert_eq!(url, "https://cdn.example.com/media/img/photo.jpg");
}

#[rstest]
#[case("imageKit")]
#[case("cloudinary")]
#[case("imgix")]
fn test_render_is_repeatable(#[case] preset: &str) {
    let cdn = CdnConfig::new("https://cdn.example.com");
    let first = render(preset, &cdn, "/a.jpg", TransformArgs::new());
    for _ in 0..3 {
        assert_eq!(render(preset, &cdn, "/a.jpg", TransformArgs::new()), first);
    }
}

// Segmented (ImageKit)

#[test]
fn test_segmented_bundles_primary_then_secondary() {
    let cdn = CdnConfig::new("http://x");
    let args = TransformArgs::new().with("crop", "force").with("height", 100);
    assert_eq!(
        render("imageKit", &cdn, "/img.jpg", args),
        "http://x/tr:h-100,c-force/img.jpg"
    );
}

#[test]
fn test_segmented_follows_catalog_order() {
    let cdn = CdnConfig::new("https://ik.imagekit.io/demo");
    let args = TransformArgs::new()
        .with("sharpen", true)
        .with("width", 400)
        .with("rotate", 90)
        .with("focus", "top_left")
        .with("cropMode", "pad_resize");
    assert_eq!(
        render("imageKit", &cdn, "/a.png", args),
        "https://ik.imagekit.io/demo/tr:rt-90,w-400,e-sharpen,cm-pad_resize,fo-top_left/a.png"
    );
}

#[test]
fn test_segmented_flag_renders_on_presence_regardless_of_value() {
    let cdn = CdnConfig::new("http://x");
    let args = TransformArgs::new().with("grayscale", false);
    assert_eq!(render("imageKit", &cdn, "/a.jpg", args), "http://x/tr:e-grayscale/a.jpg");
}

#[test]
fn test_segmented_secondary_only_has_no_bundle() {
    let cdn = CdnConfig::new("http://x").with_image_prefix("/p");
    let args = TransformArgs::new()
        .with("progressive", true)
        .with("format", "webp");
    assert_eq!(
        render("imageKit", &cdn, "/a.jpg", args),
        "http://x/f-webp,pr-true/p/a.jpg"
    );
}

#[test]
fn test_segmented_rotate_accepts_auto_token() {
    let cdn = CdnConfig::new("http://x");
    let args = TransformArgs::new().with("rotate", "auto");
    assert_eq!(render("imageKit", &cdn, "/a.jpg", args), "http://x/tr:rt-auto/a.jpg");
}

// Flat-prefixed (Cloudinary)

#[test]
fn test_flat_named_transformation_short_circuits() {
    let cdn = CdnConfig::new("https://res.cloudinary.com/demo/image/upload").with_image_prefix("/");
    let args = TransformArgs::new()
        .with("width", 10)
        .with("transformation", "foo");
    assert_eq!(
        render("cloudinary", &cdn, "a/b.jpg", args),
        "https://res.cloudinary.com/demo/image/upload/t_foo/a/b.jpg"
    );
}

#[test]
fn test_flat_named_transformation_ignores_mistyped_siblings() {
    let cdn = CdnConfig::new("https://res.cloudinary.com/demo/image/upload").with_image_prefix("/");
    let args = TransformArgs::new()
        .with("transformation", "foo")
        .with("width", "wide")
        .with("gravity", "sideways");
    assert_eq!(
        render("cloudinary", &cdn, "a/b.jpg", args),
        "https://res.cloudinary.com/demo/image/upload/t_foo/a/b.jpg"
    );
}

#[test]
fn test_flat_format_rewrites_extension() {
    let cdn = CdnConfig::new("https://res.cloudinary.com/demo/image/upload").with_image_prefix("/");
    let url = render(
        "cloudinary",
        &cdn,
        "a/b.jpg",
        TransformArgs::new().with("format", "png"),
    );
    assert_eq!(url, "https://res.cloudinary.com/demo/image/upload/a/b.png");
    assert!(url.ends_with("/b.png"));
}

#[test]
fn test_flat_auto_format_leaves_source_untouched() {
    let cdn = CdnConfig::new("https://res.cloudinary.com/demo/image/upload").with_image_prefix("/");
    let url = render(
        "cloudinary",
        &cdn,
        "a/b.jpg",
        TransformArgs::new().with("format", "auto"),
    );
    assert_eq!(url, "https://res.cloudinary.com/demo/image/upload/a/b.jpg");
}

#[test]
fn test_flat_pieces_follow_catalog_order_and_keep_colons() {
    let cdn = CdnConfig::new("https://res.cloudinary.com/demo/image/upload");
    let args = TransformArgs::new()
        .with("gravity", "auto:faces")
        .with("format", "webp")
        .with("crop", "fill")
        .with("width", 300)
        .with("dpr", 2.0)
        .with("effect", "blur:300");
    assert_eq!(
        render("cloudinary", &cdn, "/a/b.jpg", args),
        "https://res.cloudinary.com/demo/image/upload/w_300,c_fill,g_auto:faces,dpr_2,e_blur:300/a/b.webp"
    );
}

// Query string (imgix)

#[test]
fn test_query_string_appends_params() {
    let cdn = CdnConfig::new("https://demo.imgix.net").with_image_prefix("/");
    let args = TransformArgs::new().with("w", 100).with("h", 50);
    assert_eq!(
        render("imgix", &cdn, "img.png", args),
        "https://demo.imgix.net/img.png?w=100&h=50"
    );
}

#[test]
fn test_query_string_keeps_caller_order() {
    let cdn = CdnConfig::new("https://demo.imgix.net");
    let args = TransformArgs::new().with("h", 50).with("w", 100);
    assert_eq!(
        render("imgix", &cdn, "/img.png", args),
        "https://demo.imgix.net/img.png?h=50&w=100"
    );
}

#[test]
fn test_query_string_percent_encodes_values() {
    let cdn = CdnConfig::new("https://demo.imgix.net");
    let args = TransformArgs::new()
        .with("crop", "faces,center")
        .with("bg", "#fff")
        .with("fpX", 0.5);
    assert_eq!(
        render("imgix", &cdn, "/img.png", args),
        "https://demo.imgix.net/img.png?crop=faces%2Ccenter&bg=%23fff&fp-x=0.5"
    );
}

// Argument checks

#[test]
fn test_unknown_argument_fails_at_render() {
    let cdn = CdnConfig::new("http://x");
    let args = TransformArgs::new().with("zoom", 2);
    let err = builtin("imageKit").render(&cdn, "/a.jpg", &args).unwrap_err();
    assert_eq!(
        err,
        CdnError::UnknownArgument {
            provider: "imageKit".to_string(),
            name: "zoom".to_string(),
        }
    );
}

#[rstest]
#[case("imageKit", "crop", ArgValue::Str("squash".into()))]
#[case("imageKit", "width", ArgValue::Str("100".into()))]
#[case("cloudinary", "width", ArgValue::Float(1.5))]
#[case("imgix", "fm", ArgValue::Str("bmp".into()))]
fn test_mismatched_value_shape_is_rejected(
    #[case] preset: &str,
    #[case] name: &str,
    #[case] value: ArgValue,
) {
    let cdn = CdnConfig::new("http://x");
    let args = TransformArgs::new().with(name, value);
    let err = builtin(preset).render(&cdn, "/a.jpg", &args).unwrap_err();
    assert!(matches!(err, CdnError::InvalidArgument { .. }), "got {err:?}");
}

#[test]
fn test_enum_literal_type_must_match() {
    let cdn = CdnConfig::new("http://x");

    let quoted = TransformArgs::new().with("rotate", "90");
    let err = builtin("imageKit").render(&cdn, "/a.jpg", &quoted).unwrap_err();
    assert!(matches!(err, CdnError::InvalidArgument { .. }), "got {err:?}");

    let numeric = TransformArgs::new().with("rotate", 90);
    assert_eq!(render("imageKit", &cdn, "/a.jpg", numeric), "http://x/tr:rt-90/a.jpg");
}

// Schema surface

#[test]
fn test_imagekit_schema_surface() {
    let transformer = builtin("imageKit");

    let names: Vec<String> = transformer
        .schema_types()
        .into_iter()
        .map(|t| t.name)
        .collect();
    assert_eq!(
        names,
        vec![
            "CDNImageRotate",
            "CDNImageCrop",
            "CDNImageCropMode",
            "CDNImageFocus",
            "CDNImageFormat",
        ]
    );

    let args = transformer.resolver_args();
    assert_eq!(args.len(), 15);
    assert!(args.contains(&ResolverArg::new("width", "Int")));
    assert!(args.contains(&ResolverArg::new("radius", "String")));
    assert!(args.contains(&ResolverArg::new("crop", "CDNImageCrop")));
    assert!(args.contains(&ResolverArg::new("progressive", "Boolean")));
}

#[test]
fn test_rotate_enum_keeps_numeric_literals() {
    let rotate = builtin("imageKit")
        .schema_types()
        .into_iter()
        .find(|t| t.name == "CDNImageRotate")
        .unwrap();
    let labels: Vec<_> = rotate.values.iter().map(|v| v.label.as_str()).collect();
    assert_eq!(labels, vec!["_0", "_90", "_180", "_270", "_360", "auto"]);
    assert!(rotate.values[1].numeric);
    assert_eq!(rotate.values[1].value, "90");
    assert!(!rotate.values[5].numeric);
}
