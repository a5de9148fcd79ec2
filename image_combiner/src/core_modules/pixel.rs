// THEORY (single-pixel scalars):
// Both tools reduce each input pixel to one number before folding it into the
// output. They differ only in the numeric domain of that number:
//
// - Brightness (accumulation tool): mean of R, G, B normalized to 0.0..=1.0.
//   It is the weight applied to the input's assigned `FloatColor`.
// - Grayscale (channel tool): mean of R, G, B kept in the 16-bit integer domain
//   and written straight into an output channel. It is never normalized.
//
// Pixels always arrive as `Rgba<u16>` (the decoder widens 8-bit data by 257),
// so an 8-bit PNG and a 16-bit PNG of the same picture give the same answers.
// Color channels are premultiplied by alpha first, so a fully transparent pixel
// contributes nothing whatever its color. No weighting: R, G and B count equally.

pub mod pixel {
    use image::Rgba;

    pub type Brightness = f64;
    pub type Grayscale = u16;

    const MAX_CHANNEL: u32 = u16::MAX as u32;

    /// Scales a straight-alpha channel by `alpha / 65535`, truncating.
    #[inline]
    fn premultiply(channel: u16, alpha: u16) -> u32 {
        channel as u32 * alpha as u32 / MAX_CHANNEL
    }

    #[inline]
    fn channel_sum(pixel: &Rgba<u16>) -> u32 {
        let Rgba([r, g, b, a]) = *pixel;
        premultiply(r, a) + premultiply(g, a) + premultiply(b, a)
    }

    /// Normalized brightness in 0.0..=1.0.
    /// - (R + G + B) / 3 / 65535, computed in floating point.
    #[inline]
    pub fn brightness(pixel: &Rgba<u16>) -> Brightness {
        channel_sum(pixel) as Brightness / (3 * MAX_CHANNEL) as Brightness
    }

    /// Unnormalized grayscale, (R + G + B) / 3 with integer division.
    #[inline]
    pub fn grayscale(pixel: &Rgba<u16>) -> Grayscale {
        (channel_sum(pixel) / 3) as Grayscale
    }
}
