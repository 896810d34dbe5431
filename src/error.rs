use std::path::PathBuf;

use thiserror::Error;

/// Problems found while turning text into a `Map`.
#[derive(Debug, Error)]
pub enum ParseError {
  #[error("line {line}: invalid character {found:?}")]
  InvalidCharacter { line: usize, found: char },
  #[error("line {line}: word longer than {max} characters")]
  WordTooLong { line: usize, max: usize },
  #[error("too many countries (at most {max})")]
  TooManyCountries { max: usize },
  #[error("line {line}: expected a color and a country name")]
  MissingName { line: usize },
  #[error("line {line}: unknown color {color:?}")]
  UnknownColor { line: usize, color: String },
  #[error("line {line}: country {name:?} is defined twice")]
  DuplicateCountry { line: usize, name: String },
  #[error("io error")]
  Io(#[from] std::io::Error),
}

/// The two format rules a parsed map has to satisfy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructureError {
  /// Rule A: every neighbour has its own line.
  #[error("country {country:?} borders unknown country {neighbour:?}")]
  UnknownNeighbour { country: String, neighbour: String },
  /// Rule B: borders are mutual.
  #[error("country {country:?} borders {neighbour:?}, but not the other way around")]
  Asymmetric { country: String, neighbour: String },
}

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("invalid number of colors: {requested} (expected 1 to {max})")]
  ColorCount { requested: usize, max: usize },
  #[error("palette is empty")]
  EmptyPalette,
  #[error("invalid palette color {0:?}")]
  PaletteColor(String),
  #[error("palette lists {0:?} more than once")]
  DuplicatePaletteColor(String),
  #[error("invalid percentage {name}: {value} (expected 0 to 100)")]
  Percentage { name: &'static str, value: u32 },
  #[error("cannot generate {requested} countries (at most {max})")]
  CountryCount { requested: usize, max: usize },
  #[error("cannot open input file {path:?}")]
  Input {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },
}

#[derive(Debug, Error)]
pub enum MapError {
  #[error(transparent)]
  Config(#[from] ConfigError),
  #[error("cannot read map")]
  Parse(#[from] ParseError),
  #[error("map is invalid (format rules weren't met)")]
  Structure(#[from] StructureError),
}
