// THEORY:
// `image_combiner` is the shared library behind two small command-line tools:
//
// - `image_combiner` (this crate's binary) paints each input's brightness with an
//   assigned color and sums the results on a floating-point canvas.
// - `channel_combiner` (its own crate) writes up to three grayscale inputs into
//   the red, green and blue channels of one image.
//
// The two tools share decoding, encoding, the dimension scan and the CLI/config
// types, but not their combining logic: `accumulate` and `channels` are separate
// pipelines on purpose. The low-level value types live in `core_modules`.

pub mod accumulate;
pub mod channels;
pub mod cli;
pub mod core_modules;
pub mod error;
pub mod logging;

pub use accumulate::{AccumulateConfig, InputDescriptor};
pub use channels::{Channel, ChannelConfig};
pub use core_modules::canvas::Canvas;
pub use core_modules::color::FloatColor;
pub use core_modules::dimensions::Dimensions;
pub use error::{CombinerError, Result};
