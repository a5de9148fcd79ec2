// THEORY:
// The output canvas must be large enough for every input, so before anything is
// combined each file is decoded once just to learn its size. The pixel data is
// thrown away immediately; the combining pass decodes the file again. Holding
// one decoded image at a time keeps peak memory at roughly one input plus the
// canvas, whatever the number of inputs.

use crate::core_modules::image_io::load_image;
use crate::error::{CombinerError, Result};
use log::info;
use std::fmt;
use std::path::Path;

/// A width and height in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Component-wise maximum, which is not necessarily either input.
    pub fn max(self, other: Dimensions) -> Dimensions {
        Dimensions::new(self.width.max(other.width), self.height.max(other.height))
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Folds a set of sizes into the smallest size that contains all of them.
pub fn fold_dimensions<I>(sizes: I) -> Dimensions
where
    I: IntoIterator<Item = Dimensions>,
{
    sizes.into_iter().fold(Dimensions::default(), Dimensions::max)
}

/// Decodes every file in order and returns the maximum width and height seen.
///
/// Stops at the first file that fails to open or decode.
pub fn max_dimensions<P: AsRef<Path>>(image_files: &[P]) -> Result<Dimensions> {
    if image_files.is_empty() {
        return Err(CombinerError::NoInputs);
    }

    let sizes = image_files
        .iter()
        .map(|file| {
            let path = file.as_ref();
            info!("Getting dimensions for {}...", path.display());
            load_image(path).map(|image| Dimensions::new(image.width(), image.height()))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(fold_dimensions(sizes))
}
