use std::collections::HashSet;

use crate::error::ConfigError;
use crate::parse::{is_word, MAX_WORD};

/// Text marker for a country that has no color yet.
pub const NO_COLOR: &str = "nocolor";

const DEFAULT_COLORS: [&str; 10] = [
  "red", "green", "blue", "yellow", "orange",
  "violet", "cyan", "pink", "brown", "grey",
];

/// Position of a color inside its `Palette`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Color(usize);

impl Color {
  pub fn new(index: usize) -> Self {
    Color(index)
  }

  pub fn index(self) -> usize {
    self.0
  }
}

/// Ordered set of color names. A run may only use a prefix of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
  names: Vec<String>,
}

impl Default for Palette {
  fn default() -> Self {
    Palette { names: DEFAULT_COLORS.iter().map(|c| c.to_string()).collect() }
  }
}

impl Palette {
  pub fn from_names<I, S>(names: I) -> Result<Self, ConfigError>
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    let names: Vec<String> = names.into_iter().map(Into::into).collect();
    if names.is_empty() {
      return Err(ConfigError::EmptyPalette);
    }

    let mut seen = HashSet::new();
    for name in &names {
      if name == NO_COLOR || name.len() > MAX_WORD || !is_word(name) {
        return Err(ConfigError::PaletteColor(name.clone()));
      }
      if !seen.insert(name.as_str()) {
        return Err(ConfigError::DuplicatePaletteColor(name.clone()));
      }
    }
    Ok(Palette { names })
  }

  pub fn len(&self) -> usize {
    self.names.len()
  }

  pub fn is_empty(&self) -> bool {
    self.names.is_empty()
  }

  pub fn name(&self, color: Color) -> &str {
    &self.names[color.0]
  }

  pub fn find(&self, name: &str) -> Option<Color> {
    self.names.iter().position(|n| n == name).map(Color)
  }
}
