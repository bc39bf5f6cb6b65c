//! Image transform catalogs and URL rendering
//!
//! Provides the pieces every transformer is built from:
//! - Declarative per-provider argument catalogs
//! - Caller argument values with shape checks
//! - Three render styles (segmented, flat-prefixed, query string)
//! - The [`Transformer`] trait implemented by built-in and custom providers

pub mod args;
pub mod catalog;
pub mod providers;
pub mod style;
pub mod transformer;

pub use args::{ArgValue, TransformArgs};
pub use catalog::{
    ArgSpec, Catalog, Encoding, EnumLiteral, EnumSpec, EnumType, EnumTypeValue, EnumValue, Group,
    ValueKind,
};
pub use style::{replace_extension, RenderStyle};
pub use transformer::{CatalogTransformer, ResolverArg, Transformer};
