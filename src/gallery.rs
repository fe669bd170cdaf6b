pub mod loader;
pub mod manifest;
pub mod source;
