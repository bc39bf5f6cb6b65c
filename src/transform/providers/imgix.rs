//! imgix catalog (query-string style)
//!
//! Argument names are the service's own parameter names wherever those are
//! valid schema identifiers, so values pass straight through.
//!
//! ```text
//! https://demo.imgix.net/img/photo.jpg?w=400&h=300&fit=crop&crop=faces%2Ccenter
//! ```

use crate::transform::catalog::{ArgSpec, Catalog, EnumSpec, EnumValue, ValueKind};

pub const PRESET: &str = "imgix";

pub const FIT: EnumSpec = EnumSpec {
    name: "CDNImageFit",
    values: &[
        EnumValue::text("CLAMP", "clamp"),
        EnumValue::text("CLIP", "clip"),
        EnumValue::text("CROP", "crop"),
        EnumValue::text("FACEAREA", "facearea"),
        EnumValue::text("FILL", "fill"),
        EnumValue::text("FILLMAX", "fillmax"),
        EnumValue::text("MAX", "max"),
        EnumValue::text("MIN", "min"),
        EnumValue::text("SCALE", "scale"),
    ],
};

pub const FORMAT: EnumSpec = EnumSpec {
    name: "CDNImageFormat",
    values: &[
        EnumValue::text("AVIF", "avif"),
        EnumValue::text("GIF", "gif"),
        EnumValue::text("JP2", "jp2"),
        EnumValue::text("JPG", "jpg"),
        EnumValue::text("JXR", "jxr"),
        EnumValue::text("PJPG", "pjpg"),
        EnumValue::text("PNG", "png"),
        EnumValue::text("PNG8", "png8"),
        EnumValue::text("PNG32", "png32"),
        EnumValue::text("WEBP", "webp"),
    ],
};

pub const FLIP: EnumSpec = EnumSpec {
    name: "CDNImageFlip",
    values: &[
        EnumValue::text("H", "h"),
        EnumValue::text("V", "v"),
        EnumValue::text("HV", "hv"),
    ],
};

pub const TRIM: EnumSpec = EnumSpec {
    name: "CDNImageTrim",
    values: &[
        EnumValue::text("AUTO", "auto"),
        EnumValue::text("COLOR", "color"),
    ],
};

const ARGS: &[ArgSpec] = &[
    ArgSpec::new("w", "w", ValueKind::Int),
    ArgSpec::new("h", "h", ValueKind::Int),
    ArgSpec::new("fit", "fit", ValueKind::Enum(&FIT)),
    ArgSpec::new("crop", "crop", ValueKind::String),
    ArgSpec::new("fm", "fm", ValueKind::Enum(&FORMAT)),
    ArgSpec::new("q", "q", ValueKind::Int),
    ArgSpec::new("auto", "auto", ValueKind::String),
    ArgSpec::new("dpr", "dpr", ValueKind::Float),
    ArgSpec::new("blur", "blur", ValueKind::Int),
    ArgSpec::new("sharp", "sharp", ValueKind::Int),
    ArgSpec::new("rot", "rot", ValueKind::Int),
    ArgSpec::new("flip", "flip", ValueKind::Enum(&FLIP)),
    ArgSpec::new("bg", "bg", ValueKind::String),
    ArgSpec::new("trim", "trim", ValueKind::Enum(&TRIM)),
    ArgSpec::new("sat", "sat", ValueKind::Int),
    ArgSpec::new("bri", "bri", ValueKind::Int),
    ArgSpec::new("con", "con", ValueKind::Int),
    ArgSpec::new("mono", "mono", ValueKind::String),
    // Focal point, used with crop=focalpoint
    ArgSpec::new("fpX", "fp-x", ValueKind::Float),
    ArgSpec::new("fpY", "fp-y", ValueKind::Float),
    ArgSpec::new("fpZ", "fp-z", ValueKind::Float),
];

pub static CATALOG: Catalog = Catalog::new(PRESET, ARGS);
