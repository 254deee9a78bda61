pub mod colour;
pub mod complex;
pub mod coordinate_mapping;
pub mod pixel_buffer;
pub mod point;
