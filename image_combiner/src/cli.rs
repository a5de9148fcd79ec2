//! Command-line surfaces of both tools and their conversion into run configs.

use crate::accumulate::{AccumulateConfig, InputDescriptor};
use crate::channels::ChannelConfig;
use crate::core_modules::color::parse_color;
use crate::core_modules::image_io::DEFAULT_JPEG_QUALITY;
use crate::error::{CombinerError, Result};
use clap::error::ErrorKind;
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

/// Long flags that are also accepted with a single leading dash.
const SINGLE_DASH_LONG_FLAGS: &[&str] = &["output", "quality"];

#[derive(Parser, Debug)]
#[command(
    name = "image_combiner",
    version,
    about = "Paints each image's brightness with a color and adds the results into one JPEG",
    override_usage = "image_combiner [OPTIONS] <IMAGE> <COLOR> [<IMAGE> <COLOR>...] <OUTPUT>"
)]
pub struct AccumulateArgs {
    /// Alternating image paths and colors (SVG name, rrggbb or rrrrggggbbbb),
    /// followed by the output path.
    #[arg(value_name = "ARGS", num_args = 1.., required = true)]
    pub args: Vec<String>,

    /// JPEG quality of the output, 1-100.
    #[arg(long, default_value_t = DEFAULT_JPEG_QUALITY, value_parser = clap::value_parser!(u8).range(1..=100))]
    pub quality: u8,
}

impl AccumulateArgs {
    /// Splits the positional list into (image, color) pairs and the output path.
    pub fn into_config(self) -> Result<AccumulateConfig> {
        let count = self.args.len();
        if count < 3 || count % 2 == 0 {
            return Err(CombinerError::WrongArgumentCount { count });
        }

        let (pairs, output) = self.args.split_at(count - 1);
        let inputs = pairs
            .chunks_exact(2)
            .map(|pair| parse_color(&pair[1]).map(|color| InputDescriptor::new(&pair[0], color)))
            .collect::<Result<Vec<_>>>()?;

        Ok(AccumulateConfig {
            inputs,
            output: PathBuf::from(&output[0]),
            quality: self.quality,
        })
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "channel_combiner",
    version,
    about = "Combines three images into one JPEG, using each input as a different color channel"
)]
pub struct ChannelArgs {
    /// The image to use for the R channel.
    #[arg(short = 'r', value_name = "PATH")]
    pub red: Option<PathBuf>,

    /// The image to use for the G channel.
    #[arg(short = 'g', value_name = "PATH")]
    pub green: Option<PathBuf>,

    /// The image to use for the B channel.
    #[arg(short = 'b', value_name = "PATH")]
    pub blue: Option<PathBuf>,

    /// The filename to create. Output files will be JPEG-format.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// JPEG quality of the output, 1-100.
    #[arg(long, default_value_t = DEFAULT_JPEG_QUALITY, value_parser = clap::value_parser!(u8).range(1..=100))]
    pub quality: u8,
}

impl ChannelArgs {
    pub fn into_config(self) -> Result<ChannelConfig> {
        ChannelConfig::new(self.red, self.green, self.blue, self.output, self.quality)
    }
}

/// Rewrites `-output x` / `-output=x` into the `--output` form clap expects.
pub fn expand_single_dash_long_flags<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            let Some(text) = arg.to_str() else {
                return arg;
            };
            let Some(rest) = text.strip_prefix('-').filter(|r| !r.starts_with('-')) else {
                return arg;
            };
            let name = rest.split('=').next().unwrap_or(rest);
            if SINGLE_DASH_LONG_FLAGS.contains(&name) {
                OsString::from(format!("-{text}"))
            } else {
                arg
            }
        })
        .collect()
}

/// Prints a clap failure to stdout. Help and version output are not failures.
pub fn report_parse_error(error: clap::Error) -> ExitCode {
    match error.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = error.print();
            ExitCode::SUCCESS
        }
        _ => {
            println!("{error}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_modules::color::FloatColor;

    fn accumulate_config(args: &[&str]) -> Result<AccumulateConfig> {
        let argv = std::iter::once("image_combiner").chain(args.iter().copied());
        AccumulateArgs::try_parse_from(argv).unwrap().into_config()
    }

    fn channel_config(args: &[&str]) -> std::result::Result<Result<ChannelConfig>, clap::Error> {
        let argv = expand_single_dash_long_flags(
            std::iter::once("channel_combiner").chain(args.iter().copied()),
        );
        ChannelArgs::try_parse_from(argv).map(ChannelArgs::into_config)
    }

    #[test]
    fn pairs_then_output() {
        let config = accumulate_config(&["a.png", "red", "b.png", "#00ff00", "out.jpg"]).unwrap();
        assert_eq!(
            config.inputs,
            vec![
                InputDescriptor::new("a.png", FloatColor::new(1.0, 0.0, 0.0)),
                InputDescriptor::new("b.png", FloatColor::new(0.0, 1.0, 0.0)),
            ]
        );
        assert_eq!(config.output, PathBuf::from("out.jpg"));
        assert_eq!(config.quality, DEFAULT_JPEG_QUALITY);
    }

    #[test]
    fn even_or_short_argument_lists_are_rejected() {
        let cases: [&[&str]; 3] = [
            &["a.png"],
            &["a.png", "red"],
            &["a.png", "red", "b.png", "out.jpg"],
        ];
        for args in cases {
            match accumulate_config(args) {
                Err(CombinerError::WrongArgumentCount { count }) => assert_eq!(count, args.len()),
                other => panic!("{args:?} should be rejected, got {other:?}"),
            }
        }
        assert!(AccumulateArgs::try_parse_from(["image_combiner"]).is_err());
    }

    #[test]
    fn bad_color_is_reported_with_its_token() {
        let err = accumulate_config(&["a.png", "xyz123", "out.jpg"]).unwrap_err();
        assert!(err.is_usage_error());
        assert!(err.to_string().contains("xyz123"));
    }

    #[test]
    fn quality_is_bounded() {
        let parse = |q: &str| {
            AccumulateArgs::try_parse_from(["image_combiner", "--quality", q, "a", "red", "o"])
        };
        assert_eq!(parse("90").unwrap().quality, 90);
        assert!(parse("0").is_err());
        assert!(parse("101").is_err());
    }

    #[test]
    fn channel_flags_single_dash_output() {
        let config = channel_config(&["-r", "r.png", "-g", "g.png", "-b", "b.png", "-output", "o.jpg"])
            .unwrap()
            .unwrap();
        assert_eq!(config.red, PathBuf::from("r.png"));
        assert_eq!(config.green, PathBuf::from("g.png"));
        assert_eq!(config.blue, PathBuf::from("b.png"));
        assert_eq!(config.output, PathBuf::from("o.jpg"));

        let config = channel_config(&["-r", "r", "-g", "g", "-b", "b", "--output=o.jpg"])
            .unwrap()
            .unwrap();
        assert_eq!(config.output, PathBuf::from("o.jpg"));
    }

    #[test]
    fn missing_channel_flag_is_rejected() {
        let result = channel_config(&["-r", "r.png", "-b", "b.png", "-output", "o.jpg"]).unwrap();
        assert!(matches!(
            result,
            Err(CombinerError::MissingChannel { channel: "green" })
        ));

        let result = channel_config(&["-r", "r.png", "-g", "g.png", "-b", "b.png"]).unwrap();
        assert!(matches!(result, Err(CombinerError::MissingOutput)));
    }

    #[test]
    fn extra_channel_flags_are_rejected() {
        assert!(channel_config(&["-r", "a", "-g", "b", "-b", "c", "-a", "d", "-output", "o"]).is_err());
        assert!(channel_config(&["-r", "a", "-r", "b", "-g", "c", "-b", "d", "-output", "o"]).is_err());
    }

    #[test]
    fn only_known_flags_are_expanded() {
        let expanded = expand_single_dash_long_flags(["prog", "-output=x", "-r", "--output", "-o", "-quality"]);
        let expected: Vec<OsString> = ["prog", "--output=x", "-r", "--output", "-o", "--quality"]
            .into_iter()
            .map(OsString::from)
            .collect();
        assert_eq!(expanded, expected);
    }
}
