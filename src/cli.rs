use std::ffi::OsString;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

use crate::config::LabelerConfig;
use crate::keybindings::KeyBindings;

const ABOUT: &str = "\
This is a program to create bit mask images from a reference image
using user inputted bounding boxes. Multiple bit masks can be created
at once using different 'brushes'. Each brush will output a
separate (disjoint) bit mask image once saved. All arguments besides
the ones listed below are treated as file paths to images.";

#[derive(Parser, Debug, PartialEq)]
#[command(
    name = "boulder-labeler",
    about = ABOUT,
    after_help = KeyBindings::default().help(),
    args_override_self = true
)]
pub struct Cli {
    /// The output directory to save files to
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        default_value = ".",
        allow_hyphen_values = true
    )]
    pub output: PathBuf,

    /// Images to label, in order
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

impl Cli {
    /// Parses the process arguments. `None` when no arguments were given.
    pub fn from_env() -> Option<Result<Cli, clap::Error>> {
        Self::parse_args(std::env::args_os())
    }

    pub fn parse_args<I, T>(args: I) -> Option<Result<Cli, clap::Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        if args.len() < 2 {
            return None;
        }
        Some(arrange_args(args).and_then(Cli::try_parse_from))
    }

    pub fn config(&self) -> LabelerConfig {
        LabelerConfig::default().with_output_dir(&self.output)
    }
}

/// Moves the known flags in front and every other argument behind `--`.
///
/// Anything that is not `-h`, `--help` or an output flag is a file, even when
/// it starts with `-`. `-output` is accepted as a spelling of `--output`.
fn arrange_args(args: Vec<OsString>) -> Result<Vec<OsString>, clap::Error> {
    let mut args = args.into_iter();
    let mut flags: Vec<OsString> = args.next().into_iter().collect();
    let mut files = Vec::new();

    while let Some(arg) = args.next() {
        let text = arg.to_string_lossy().into_owned();
        match text.as_str() {
            "-h" | "--help" => flags.push(arg),
            "-o" | "--output" | "-output" => {
                let Some(dir) = args.next() else {
                    return Err(Cli::command().error(
                        ErrorKind::InvalidValue,
                        "a value is required for '--output <DIR>' but none was supplied",
                    ));
                };
                flags.push(OsString::from("--output"));
                flags.push(dir);
            }
            _ if text.starts_with("--output=") => flags.push(arg),
            _ => files.push(arg),
        }
    }

    flags.push(OsString::from("--"));
    flags.extend(files);
    Ok(flags)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Option<Result<Cli, clap::Error>> {
        Cli::parse_args(args.iter().copied())
    }

    #[test]
    fn test_no_arguments() {
        assert!(parse(&["labeler"]).is_none());
    }

    #[test]
    fn test_files_in_order_with_default_output() {
        let cli = parse(&["labeler", "b.png", "a.png"]).unwrap().unwrap();
        assert_eq!(cli.output, PathBuf::from("."));
        assert_eq!(cli.files, vec![PathBuf::from("b.png"), PathBuf::from("a.png")]);
    }

    #[test]
    fn test_output_spellings() {
        for flag in ["-o", "--output", "-output"] {
            let cli = parse(&["labeler", flag, "masks", "x.jpg"]).unwrap().unwrap();
            assert_eq!(cli.output, PathBuf::from("masks"), "flag {flag}");
            assert_eq!(cli.files, vec![PathBuf::from("x.jpg")]);
        }
    }

    #[test]
    fn test_last_output_wins() {
        let cli = parse(&["labeler", "-o", "first", "x.jpg", "-o", "second"])
            .unwrap()
            .unwrap();
        assert_eq!(cli.output, PathBuf::from("second"));
        assert_eq!(cli.config().output_dir, PathBuf::from("second"));
    }

    #[test]
    fn test_dash_prefixed_file_is_a_file() {
        let cli = parse(&["labeler", "-scan.png"]).unwrap().unwrap();
        assert_eq!(cli.files, vec![PathBuf::from("-scan.png")]);
        assert_eq!(cli.output, PathBuf::from("."));
    }

    #[test]
    fn test_dash_prefixed_file_keeps_its_place() {
        let cli = parse(&["labeler", "a.png", "-scan.png", "-o", "d", "b.png"])
            .unwrap()
            .unwrap();
        assert_eq!(
            cli.files,
            vec![
                PathBuf::from("a.png"),
                PathBuf::from("-scan.png"),
                PathBuf::from("b.png")
            ]
        );
        assert_eq!(cli.output, PathBuf::from("d"));
    }

    #[test]
    fn test_unknown_flags_are_files() {
        for arg in ["-V", "--version", "-x"] {
            let cli = parse(&["labeler", arg]).unwrap().unwrap();
            assert_eq!(cli.files, vec![PathBuf::from(arg)], "arg {arg}");
        }
    }

    #[test]
    fn test_output_value_may_start_with_dash() {
        let cli = parse(&["labeler", "-o", "-masks", "x.png"]).unwrap().unwrap();
        assert_eq!(cli.output, PathBuf::from("-masks"));
        assert_eq!(cli.files, vec![PathBuf::from("x.png")]);

        let cli = parse(&["labeler", "--output=out", "x.png"]).unwrap().unwrap();
        assert_eq!(cli.output, PathBuf::from("out"));
    }

    #[test]
    fn test_output_without_value_fails() {
        let err = parse(&["labeler", "x.jpg", "-o"]).unwrap().unwrap_err();
        assert_ne!(err.kind(), clap::error::ErrorKind::DisplayHelp);
        assert_ne!(err.exit_code(), 0);
    }

    #[test]
    fn test_help_short_circuits() {
        for flag in ["-h", "--help"] {
            let err = parse(&["labeler", "x.jpg", flag]).unwrap().unwrap_err();
            assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
            assert!(err.to_string().contains("Key binds"));
        }
    }
}
