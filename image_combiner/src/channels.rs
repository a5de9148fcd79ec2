// THEORY:
// The channel pipeline builds one RGB picture out of up to three separate
// exposures, one per channel. Each input is collapsed to grayscale and that
// value is written verbatim into its channel of a 16-bit output image. There
// is no float accumulation here and no normalization: the grayscale value is
// already a valid 16-bit channel sample.
//
// Input position decides the channel (0 = red, 1 = green, 2 = blue). A pass
// only writes its own channel, and only inside its own image's bounds, so the
// other two channels of every pixel are exactly what earlier passes left.

use crate::core_modules::dimensions::max_dimensions;
use crate::core_modules::image_io::{load_image, save_jpeg};
use crate::core_modules::pixel::pixel::grayscale;
use crate::error::{CombinerError, Result};
use image::{DynamicImage, ImageBuffer, Rgba};
use log::info;
use std::fmt;
use std::path::{Path, PathBuf};

pub type Rgba16Image = ImageBuffer<Rgba<u16>, Vec<u16>>;

const MAX_CHANNELS: usize = 3;

/// One of the three color channels of the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    pub const ALL: [Channel; MAX_CHANNELS] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Position of this channel inside an RGBA pixel.
    pub fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        }
    }
}

impl TryFrom<usize> for Channel {
    type Error = CombinerError;

    fn try_from(index: usize) -> Result<Self> {
        Channel::ALL
            .get(index)
            .copied()
            .ok_or(CombinerError::BadChannel { index })
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Everything the channel tool needs for one run.
#[derive(Debug, Clone)]
pub struct ChannelConfig {
    pub red: PathBuf,
    pub green: PathBuf,
    pub blue: PathBuf,
    pub output: PathBuf,
    /// JPEG quality, 1..=100.
    pub quality: u8,
}

impl ChannelConfig {
    /// Builds a config from optional inputs, failing on the first one missing.
    pub fn new(
        red: Option<PathBuf>,
        green: Option<PathBuf>,
        blue: Option<PathBuf>,
        output: Option<PathBuf>,
        quality: u8,
    ) -> Result<Self> {
        let require = |path: Option<PathBuf>, channel: Channel| {
            path.filter(|p| !p.as_os_str().is_empty())
                .ok_or(CombinerError::MissingChannel {
                    channel: channel.name(),
                })
        };
        let red = require(red, Channel::Red)?;
        let green = require(green, Channel::Green)?;
        let blue = require(blue, Channel::Blue)?;
        let output = output
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or(CombinerError::MissingOutput)?;
        Ok(Self {
            red,
            green,
            blue,
            output,
            quality,
        })
    }

    /// Inputs in channel order.
    pub fn inputs(&self) -> [&Path; MAX_CHANNELS] {
        [&self.red, &self.green, &self.blue]
    }
}

/// Writes the grayscale of every pixel of `image` into `channel` of `dest`.
/// Pixels of `image` that fall outside `dest` are skipped.
pub fn set_channel(dest: &mut Rgba16Image, image: &DynamicImage, channel: Channel) {
    let source = image.to_rgba16();
    let index = channel.index();
    for (x, y, pixel) in source.enumerate_pixels() {
        if let Some(target) = dest.get_pixel_mut_checked(x, y) {
            target.0[index] = grayscale(pixel);
        }
    }
}

/// Builds the combined image. Input `i` feeds channel `i`; at most three inputs.
pub fn combine_channels<P: AsRef<Path>>(image_files: &[P]) -> Result<Rgba16Image> {
    if image_files.len() > MAX_CHANNELS {
        return Err(CombinerError::TooManyChannels {
            count: image_files.len(),
        });
    }

    let size = max_dimensions(image_files)?;
    info!("Combining images into a {size} image.");

    let mut combined = Rgba16Image::new(size.width, size.height);
    for (i, file) in image_files.iter().enumerate() {
        let channel = Channel::try_from(i)?;
        let path = file.as_ref();
        info!("Setting channel {} ({channel}) using {}...", i + 1, path.display());
        let image = load_image(path)?;
        set_channel(&mut combined, &image, channel);
    }
    Ok(combined)
}

/// Runs the whole tool: combine, flatten, encode.
pub fn run(config: &ChannelConfig) -> Result<()> {
    let combined = combine_channels(&config.inputs())?;
    save_jpeg(
        &config.output,
        &DynamicImage::ImageRgba16(combined),
        config.quality,
    )?;
    info!("Wrote {}", config.output.display());
    Ok(())
}
