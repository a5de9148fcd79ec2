// THEORY:
// The accumulation pipeline turns N (image, color) pairs into one picture. Each
// input acts like a colored light: its per-pixel brightness scales its assigned
// color, and every input's light is added onto a shared float canvas.
//
// Stages:
// 1.  **Sizing**: decode every input once to find the largest width and height.
// 2.  **Folding**: decode each input again and add `color * brightness` into the
//     canvas over that input's own bounds, top-left aligned. Canvas pixels no
//     input covers stay black.
// 3.  **Flattening**: render the canvas to 16-bit RGB (clamping) and write it out
//     as JPEG.
//
// Because folding is pure addition the input order never changes the result.

use crate::core_modules::canvas::Canvas;
use crate::core_modules::color::FloatColor;
use crate::core_modules::dimensions::max_dimensions;
use crate::core_modules::image_io::{load_image, save_jpeg};
use crate::core_modules::pixel::pixel::brightness;
use crate::error::Result;
use image::DynamicImage;
use log::info;
use std::path::{Path, PathBuf};

/// One input image and the color its brightness is painted with.
#[derive(Debug, Clone, PartialEq)]
pub struct InputDescriptor {
    pub path: PathBuf,
    pub color: FloatColor,
}

impl InputDescriptor {
    pub fn new(path: impl Into<PathBuf>, color: FloatColor) -> Self {
        Self {
            path: path.into(),
            color,
        }
    }
}

/// Everything the accumulation tool needs for one run.
#[derive(Debug, Clone)]
pub struct AccumulateConfig {
    /// Inputs in command-line order.
    pub inputs: Vec<InputDescriptor>,
    /// Where the JPEG is written.
    pub output: PathBuf,
    /// JPEG quality, 1..=100.
    pub quality: u8,
}

/// Adds `color * brightness(pixel)` for every pixel of `image` into `canvas`.
/// Pixels beyond the canvas are dropped by the canvas itself.
pub fn accumulate_into(canvas: &mut Canvas, image: &DynamicImage, color: FloatColor) {
    let pixels = image.to_rgba16();
    for (x, y, pixel) in pixels.enumerate_pixels() {
        canvas.add(x, y, color * brightness(pixel));
    }
}

/// Sizes, allocates and fills a canvas from `inputs`.
pub fn accumulate(inputs: &[InputDescriptor]) -> Result<Canvas> {
    let paths: Vec<&Path> = inputs.iter().map(|input| input.path.as_path()).collect();
    let size = max_dimensions(&paths)?;
    info!("Combining images into a {size} image.");

    let mut canvas = Canvas::new(size.width, size.height)?;
    for (i, input) in inputs.iter().enumerate() {
        info!("Adding image {} using {}...", i + 1, input.path.display());
        let image = load_image(&input.path)?;
        accumulate_into(&mut canvas, &image, input.color);
    }
    Ok(canvas)
}

/// Runs the whole tool: accumulate, flatten, encode.
pub fn run(config: &AccumulateConfig) -> Result<()> {
    let canvas = accumulate(&config.inputs)?;
    let flattened = DynamicImage::ImageRgb16(canvas.render());
    save_jpeg(&config.output, &flattened, config.quality)?;
    info!("Wrote {}", config.output.display());
    Ok(())
}
