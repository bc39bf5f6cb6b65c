//! Cloudinary catalog (flat-prefixed style)
//!
//! ```text
//! https://res.cloudinary.com/demo/image/upload/w_400,c_fill,g_auto:faces/sample.jpg
//! https://res.cloudinary.com/demo/image/upload/t_thumbnail/sample.jpg
//! ```

use crate::transform::catalog::{ArgSpec, Catalog, EnumSpec, EnumValue, ValueKind};

pub const PRESET: &str = "cloudinary";

pub const CROP: EnumSpec = EnumSpec {
    name: "CDNImageCrop",
    values: &[
        EnumValue::text("SCALE", "scale"),
        EnumValue::text("FIT", "fit"),
        EnumValue::text("LIMIT", "limit"),
        EnumValue::text("MFIT", "mfit"),
        EnumValue::text("FILL", "fill"),
        EnumValue::text("LFILL", "lfill"),
        EnumValue::text("PAD", "pad"),
        EnumValue::text("LPAD", "lpad"),
        EnumValue::text("MPAD", "mpad"),
        EnumValue::text("FILL_PAD", "fill_pad"),
        EnumValue::text("CROP", "crop"),
        EnumValue::text("THUMB", "thumb"),
        EnumValue::text("IMAGGA_CROP", "imagga_crop"),
        EnumValue::text("IMAGGA_SCALE", "imagga_scale"),
    ],
};

pub const GRAVITY: EnumSpec = EnumSpec {
    name: "CDNImageGravity",
    values: &[
        EnumValue::text("NORTH_WEST", "north_west"),
        EnumValue::text("NORTH", "north"),
        EnumValue::text("NORTH_EAST", "north_east"),
        EnumValue::text("WEST", "west"),
        EnumValue::text("CENTER", "center"),
        EnumValue::text("EAST", "east"),
        EnumValue::text("SOUTH_WEST", "south_west"),
        EnumValue::text("SOUTH", "south"),
        EnumValue::text("SOUTH_EAST", "south_east"),
        EnumValue::text("XY_CENTER", "xy_center"),
        EnumValue::text("FACE", "face"),
        EnumValue::text("FACE_CENTER", "face:center"),
        EnumValue::text("FACES", "faces"),
        EnumValue::text("FACES_CENTER", "faces:center"),
        EnumValue::text("AUTO", "auto"),
        EnumValue::text("AUTO_FACES", "auto:faces"),
        EnumValue::text("AUTO_SUBJECT", "auto:subject"),
        EnumValue::text("AUTO_CLASSIC", "auto:classic"),
    ],
};

pub const FORMAT: EnumSpec = EnumSpec {
    name: "CDNImageFormat",
    values: &[
        EnumValue::text("AUTO", "auto"),
        EnumValue::text("WEBP", "webp"),
        EnumValue::text("AVIF", "avif"),
        EnumValue::text("JPG", "jpg"),
        EnumValue::text("PNG", "png"),
        EnumValue::text("GIF", "gif"),
    ],
};

const ARGS: &[ArgSpec] = &[
    ArgSpec::new("transformation", "t", ValueKind::String),
    // Size and crop
    ArgSpec::new("width", "w", ValueKind::Int),
    ArgSpec::new("height", "h", ValueKind::Int),
    ArgSpec::new("crop", "c", ValueKind::Enum(&CROP)),
    ArgSpec::new("gravity", "g", ValueKind::Enum(&GRAVITY)),
    ArgSpec::new("aspectRatio", "ar", ValueKind::String),
    ArgSpec::new("x", "x", ValueKind::Int),
    ArgSpec::new("y", "y", ValueKind::Int),
    ArgSpec::new("zoom", "z", ValueKind::Float),
    // Delivery
    ArgSpec::new("quality", "q", ValueKind::String),
    ArgSpec::new("dpr", "dpr", ValueKind::Float),
    // Appearance
    ArgSpec::new("radius", "r", ValueKind::String),
    ArgSpec::new("angle", "a", ValueKind::Int),
    ArgSpec::new("effect", "e", ValueKind::String),
    ArgSpec::new("opacity", "o", ValueKind::Int),
    ArgSpec::new("border", "bo", ValueKind::String),
    ArgSpec::new("background", "b", ValueKind::String),
    ArgSpec::new("defaultImage", "d", ValueKind::String),
    ArgSpec::new("flags", "fl", ValueKind::String),
    // Rewrites the source extension instead of emitting f_
    ArgSpec::new("format", "f", ValueKind::Enum(&FORMAT)),
];

pub static CATALOG: Catalog = Catalog::new(PRESET, ARGS);
