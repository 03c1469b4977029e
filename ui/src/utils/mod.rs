pub mod colors;
pub mod image_data;
