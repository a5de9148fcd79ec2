// THEORY:
// The `Canvas` is the accumulator behind the color-accumulation tool. It is a
// fixed-size, row-major grid of `FloatColor`s that starts out black and only
// ever grows by addition. Inputs of any size are folded in top-left aligned;
// writes that fall outside the grid are dropped silently, so a caller never
// has to clip an input to the canvas before adding it.
//
// Nothing is clamped while accumulating. `render` is the single place where the
// float sums are turned into 16-bit pixels, and that is where saturation happens.

use crate::core_modules::color::FloatColor;
use crate::error::{CombinerError, Result};
use image::{ImageBuffer, Rgb};

pub type Rgb16Image = ImageBuffer<Rgb<u16>, Vec<u16>>;

/// A floating-point accumulation grid with fixed dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    /// The width of the canvas in pixels.
    width: u32,
    /// The height of the canvas in pixels.
    height: u32,
    /// Row-major pixel storage, `width * height` entries.
    pixels: Vec<FloatColor>,
}

impl Canvas {
    /// Creates a black canvas. Both dimensions must be non-zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(CombinerError::EmptyCanvas { width, height });
        }
        Ok(Self {
            width,
            height,
            pixels: vec![FloatColor::BLACK; width as usize * height as usize],
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Adds `color` to the pixel at (x, y). Out-of-bounds coordinates are ignored.
    pub fn add(&mut self, x: u32, y: u32, color: FloatColor) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] += color;
        }
    }

    /// The accumulated, unclamped color at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Option<FloatColor> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Flattens the canvas into a 16-bit RGB image, clamping every channel.
    pub fn render(&self) -> Rgb16Image {
        let width = self.width as usize;
        ImageBuffer::from_fn(self.width, self.height, |x, y| {
            self.pixels[y as usize * width + x as usize].to_rgb16()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: FloatColor = FloatColor::new(1.0, 0.0, 0.0);

    #[test]
    fn zero_sized_canvas_is_rejected() {
        assert!(matches!(
            Canvas::new(0, 4),
            Err(CombinerError::EmptyCanvas { width: 0, height: 4 })
        ));
        assert!(Canvas::new(4, 0).is_err());
    }

    #[test]
    fn starts_black() {
        let canvas = Canvas::new(3, 2).unwrap();
        for y in 0..2 {
            for x in 0..3 {
                assert_eq!(canvas.get(x, y), Some(FloatColor::BLACK));
            }
        }
    }

    #[test]
    fn out_of_bounds_add_is_ignored() {
        let mut canvas = Canvas::new(2, 2).unwrap();
        let before = canvas.clone();
        canvas.add(2, 0, RED);
        canvas.add(0, 2, RED);
        canvas.add(u32::MAX, u32::MAX, RED);
        assert_eq!(canvas, before);
        assert_eq!(canvas.get(2, 0), None);
    }

    #[test]
    fn adds_accumulate_and_render_saturates() {
        let mut canvas = Canvas::new(2, 1).unwrap();
        canvas.add(0, 0, RED);
        canvas.add(0, 0, RED);
        assert_eq!(canvas.get(0, 0), Some(FloatColor::new(2.0, 0.0, 0.0)));

        let image = canvas.render();
        assert_eq!(image.dimensions(), (2, 1));
        assert_eq!(*image.get_pixel(0, 0), Rgb([u16::MAX, 0, 0]));
        assert_eq!(*image.get_pixel(1, 0), Rgb([0, 0, 0]));
    }
}
