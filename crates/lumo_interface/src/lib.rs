pub mod loader;
pub mod media;
pub mod reveal;
