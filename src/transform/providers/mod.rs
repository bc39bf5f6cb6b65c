//! Built-in provider catalogs

pub mod cloudinary;
pub mod imagekit;
pub mod imgix;
