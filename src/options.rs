//! Parsing Options.
//!
//! * `-i <file>`: read the map from `<file>` instead of standard input
//! * `-c`: only check whether the input map is colored correctly
//! * `-n <num>`: how many colors may be used (default 4)

use std::path::PathBuf;

use clap::{Arg, ArgAction, Command, value_parser};

use crate::error::ConfigError;
use crate::palette::Palette;

pub const DEFAULT_COLORS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
  #[default]
  Text,
  Json,
}

fn make_options_parser() -> Command {
  Command::new("mapcol")
    .about("Colors a map so that no two neighbouring countries share a color")
    .version(env!("CARGO_PKG_VERSION"))
    .arg(
      Arg::new("input")
        .short('i')
        .long("input")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Read the map from FILE instead of standard input"),
    )
    .arg(
      Arg::new("check")
        .short('c')
        .long("check")
        .action(ArgAction::SetTrue)
        .help("Only check whether the input map is colored correctly"),
    )
    .arg(
      Arg::new("colors")
        .short('n')
        .long("colors")
        .value_name("NUM")
        .value_parser(value_parser!(usize))
        .default_value("4")
        .help("How many colors may be used"),
    )
    .arg(
      Arg::new("palette")
        .short('p')
        .long("palette")
        .value_name("COLORS")
        .value_delimiter(',')
        .help("Comma separated color names to use instead of the default palette"),
    )
    .arg(
      Arg::new("format")
        .short('f')
        .long("format")
        .default_value("text")
        .value_parser(["text", "json"])
        .help("Output format of a colored map"),
    )
    .arg(
      Arg::new("quiet")
        .short('q')
        .long("quiet")
        .action(ArgAction::SetTrue)
        .help("Do not show search progress"),
    )
}

#[derive(Debug, Clone)]
pub struct Options {
  /// `None` reads standard input.
  pub input: Option<PathBuf>,
  pub check_only: bool,
  pub n_colors: usize,
  pub palette: Palette,
  pub format: OutputFormat,
  pub quiet: bool,
}

impl Default for Options {
  fn default() -> Self {
    Options {
      input: None,
      check_only: false,
      n_colors: DEFAULT_COLORS,
      palette: Palette::default(),
      format: OutputFormat::Text,
      quiet: false,
    }
  }
}

#[derive(Debug, thiserror::Error)]
pub enum OptionsError {
  #[error(transparent)]
  Args(#[from] clap::Error),
  #[error(transparent)]
  Config(#[from] ConfigError),
}

impl Options {
  /// `args` includes the binary name.
  pub fn parse_from_args<I, T>(args: I) -> Result<Self, OptionsError>
  where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
  {
    let matches = make_options_parser().try_get_matches_from(args)?;

    let palette = match matches.get_many::<String>("palette") {
      Some(names) => Palette::from_names(names.cloned())?,
      None => Palette::default(),
    };

    let n_colors = matches.get_one::<usize>("colors").copied().unwrap_or(DEFAULT_COLORS);
    if n_colors == 0 || n_colors > palette.len() {
      return Err(ConfigError::ColorCount { requested: n_colors, max: palette.len() }.into());
    }

    let format = match matches.get_one::<String>("format").map(String::as_str) {
      Some("json") => OutputFormat::Json,
      _ => OutputFormat::Text,
    };

    Ok(Options {
      input: matches.get_one::<PathBuf>("input").cloned(),
      check_only: matches.get_flag("check"),
      n_colors,
      palette,
      format,
      quiet: matches.get_flag("quiet"),
    })
  }
}
