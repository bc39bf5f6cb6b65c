//! ImageKit catalog (segmented style)
//!
//! ```text
//! https://ik.imagekit.io/demo/tr:rt-90,h-300,w-400,e-grayscale,c-at_max,fo-top/img/photo.jpg
//! ```

use crate::transform::catalog::{ArgSpec, Catalog, EnumSpec, EnumValue, ValueKind};

pub const PRESET: &str = "imageKit";

pub const CROP: EnumSpec = EnumSpec {
    name: "CDNImageCrop",
    values: &[
        EnumValue::text("MAINTAIN", "maintain_ratio"),
        EnumValue::text("FORCE", "force"),
        EnumValue::text("AT_LEAST", "at_least"),
        EnumValue::text("AT_MAX", "at_max"),
    ],
};

pub const CROP_MODE: EnumSpec = EnumSpec {
    name: "CDNImageCropMode",
    values: &[
        EnumValue::text("RESIZE", "resize"),
        EnumValue::text("EXTRACT", "extract"),
        EnumValue::text("PAD_EXTRACT", "pad_extract"),
        EnumValue::text("PAD_RESIZE", "pad_resize"),
    ],
};

pub const ROTATE: EnumSpec = EnumSpec {
    name: "CDNImageRotate",
    values: &[
        EnumValue::int("_0", 0),
        EnumValue::int("_90", 90),
        EnumValue::int("_180", 180),
        EnumValue::int("_270", 270),
        EnumValue::int("_360", 360),
        EnumValue::text("auto", "auto"),
    ],
};

pub const FORMAT: EnumSpec = EnumSpec {
    name: "CDNImageFormat",
    values: &[
        EnumValue::text("AUTO", "auto"),
        EnumValue::text("WEBP", "webp"),
        EnumValue::text("JPG", "jpg"),
        EnumValue::text("JPEG", "jpeg"),
        EnumValue::text("PNG", "png"),
    ],
};

pub const FOCUS: EnumSpec = EnumSpec {
    name: "CDNImageFocus",
    values: &[
        EnumValue::text("AUTO", "auto"),
        EnumValue::text("CENTER", "center"),
        EnumValue::text("TOP", "top"),
        EnumValue::text("LEFT", "left"),
        EnumValue::text("BOTTOM", "bottom"),
        EnumValue::text("RIGHT", "right"),
        EnumValue::text("TOP_LEFT", "top_left"),
        EnumValue::text("TOP_RIGHT", "top_right"),
        EnumValue::text("BOTTOM_LEFT", "bottom_left"),
        EnumValue::text("BOTTOM_RIGHT", "bottom_right"),
    ],
};

const ARGS: &[ArgSpec] = &[
    // Bundled under tr:
    ArgSpec::new("rotate", "rt", ValueKind::Enum(&ROTATE)).primary(),
    ArgSpec::new("height", "h", ValueKind::Int).primary(),
    ArgSpec::new("width", "w", ValueKind::Int).primary(),
    ArgSpec::new("quality", "q", ValueKind::Int).primary(),
    ArgSpec::new("blur", "bl", ValueKind::Int).primary(),
    ArgSpec::new("trimEdges", "t", ValueKind::Int).primary(),
    ArgSpec::new("radius", "r", ValueKind::String).primary(),
    // Enhancement
    ArgSpec::new("grayscale", "e-grayscale", ValueKind::Boolean)
        .primary()
        .flag(),
    ArgSpec::new("contrast", "e-contrast", ValueKind::Boolean)
        .primary()
        .flag(),
    ArgSpec::new("sharpen", "e-sharpen", ValueKind::Boolean)
        .primary()
        .flag(),
    // Cropping
    ArgSpec::new("crop", "c", ValueKind::Enum(&CROP)).secondary(),
    ArgSpec::new("cropMode", "cm", ValueKind::Enum(&CROP_MODE)).secondary(),
    ArgSpec::new("focus", "fo", ValueKind::Enum(&FOCUS)).secondary(),
    // Format
    ArgSpec::new("format", "f", ValueKind::Enum(&FORMAT)).secondary(),
    ArgSpec::new("progressive", "pr", ValueKind::Boolean).secondary(),
];

pub static CATALOG: Catalog = Catalog::new(PRESET, ARGS);
