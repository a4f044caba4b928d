pub mod image_loader;

pub use image_loader::{collect_image_paths, list_image_files};
