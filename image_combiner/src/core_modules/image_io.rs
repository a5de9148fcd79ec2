//! Decoding inputs and encoding the JPEG output.
//!
//! Every file handle lives only as long as the call that opened it.

use crate::error::{CombinerError, Result};
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageError, ImageReader};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Output quality used by both tools.
pub const DEFAULT_JPEG_QUALITY: u8 = 100;

/// Opens `path`, sniffs the format from its contents, and decodes it.
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    let reader = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|source| CombinerError::Open {
            path: path.to_path_buf(),
            source,
        })?;

    reader.decode().map_err(|source| match source {
        ImageError::Unsupported(_) => CombinerError::UnknownFormat {
            path: path.to_path_buf(),
            source,
        },
        _ => CombinerError::Decode {
            path: path.to_path_buf(),
            source,
        },
    })
}

/// Writes `image` to `path` as a baseline JPEG.
///
/// JPEG is 8 bits per channel, so 16-bit data is narrowed and alpha dropped.
/// The output file is created before encoding starts and is left behind if
/// encoding fails. The buffered writer is flushed here so a failed write is
/// reported instead of being lost on drop.
pub fn save_jpeg(path: &Path, image: &DynamicImage, quality: u8) -> Result<()> {
    let output = File::create(path).map_err(|source| CombinerError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(output);
    let encode_error = |source| CombinerError::Encode {
        path: path.to_path_buf(),
        source,
    };

    image
        .to_rgb8()
        .write_with_encoder(JpegEncoder::new_with_quality(&mut writer, quality))
        .map_err(encode_error)?;
    writer
        .flush()
        .map_err(|e| encode_error(ImageError::IoError(e)))
}
