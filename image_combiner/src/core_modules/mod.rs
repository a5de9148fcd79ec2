pub mod canvas;
pub mod color;
pub mod dimensions;
pub mod image_io;
pub mod pixel;
