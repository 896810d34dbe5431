//! Reads maps in the line format
//!
//! ```text
//! <color|nocolor> <country> [<neighbour> ...]
//! ```
//!
//! Words are separated by one or more spaces or tabs and may only contain
//! ASCII letters, digits and `_`. Every country that appears as a neighbour
//! should have its own line, and borders should be mutual; those two rules are
//! checked afterwards by `validity`.

use std::io::BufRead;

use log::debug;

use crate::error::ParseError;
use crate::map::{Country, Map};
use crate::palette::{Palette, NO_COLOR};

pub const MAX_WORD: usize = 64;
pub const MAX_COUNTRIES: usize = 4096;

fn is_word_char(ch: char) -> bool {
  ch.is_ascii_alphanumeric() || ch == '_'
}

fn is_whitespace(ch: char) -> bool {
  ch == ' ' || ch == '\t'
}

pub(crate) fn is_word(s: &str) -> bool {
  !s.is_empty() && s.chars().all(is_word_char)
}

fn split_words(line: &str, line_no: usize) -> Result<Vec<&str>, ParseError> {
  if let Some(found) = line.chars().find(|&c| !is_word_char(c) && !is_whitespace(c)) {
    return Err(ParseError::InvalidCharacter { line: line_no, found });
  }

  let words: Vec<&str> = line.split(is_whitespace).filter(|w| !w.is_empty()).collect();
  if words.iter().any(|w| w.len() > MAX_WORD) {
    return Err(ParseError::WordTooLong { line: line_no, max: MAX_WORD });
  }
  Ok(words)
}

/// Returns the map description represented as an adjacency list.
pub fn read_map<R: BufRead>(reader: R, palette: &Palette) -> Result<Map, ParseError> {
  let mut map = Map::new();

  for (i, line) in reader.lines().enumerate() {
    let line = line?;
    let line_no = i + 1;
    if map.len() >= MAX_COUNTRIES {
      return Err(ParseError::TooManyCountries { max: MAX_COUNTRIES });
    }

    let words = split_words(line.strip_suffix('\r').unwrap_or(&line), line_no)?;
    let [color, name, neighbours @ ..] = words.as_slice() else {
      return Err(ParseError::MissingName { line: line_no });
    };

    let mut country = Country::new(*name).with_neighbours(neighbours.iter().copied());
    if *color != NO_COLOR {
      let color = palette.find(color).ok_or_else(|| ParseError::UnknownColor {
        line: line_no,
        color: color.to_string(),
      })?;
      country = country.with_color(color);
    }

    map.push(country).map_err(|c| ParseError::DuplicateCountry { line: line_no, name: c.name })?;
  }

  debug!("read {} countries", map.len());
  Ok(map)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::palette::Color;

  fn parse(text: &str) -> Result<Map, ParseError> {
    read_map(text.as_bytes(), &Palette::default())
  }

  #[test]
  fn reads_colors_names_and_neighbours() {
    let map = parse("red A B C\nnocolor B  A\t\tC\nnocolor C A B\n").unwrap();
    assert_eq!(map.len(), 3);
    assert_eq!(map.color(0), Some(Color::new(0)));
    assert_eq!(map.color(1), None);
    assert_eq!(map.neighbours(1), ["A".to_string(), "C".to_string()]);
  }

  #[test]
  fn tolerates_crlf_trailing_blanks_and_missing_final_newline() {
    let map = parse("nocolor A B \r\nnocolor B A").unwrap();
    assert_eq!(map.len(), 2);
    assert_eq!(map.neighbours(0), ["B".to_string()]);
  }

  #[test]
  fn isolated_country_has_no_neighbours() {
    let map = parse("nocolor Lonely\n").unwrap();
    assert_eq!(map.degree(0), 0);
  }

  #[test]
  fn rejects_invalid_characters() {
    let err = parse("nocolor A B\nnocolor B-1 A\n").unwrap_err();
    assert!(matches!(err, ParseError::InvalidCharacter { line: 2, found: '-' }));
  }

  #[test]
  fn rejects_long_words() {
    let text = format!("nocolor {}\n", "x".repeat(MAX_WORD + 1));
    assert!(matches!(parse(&text), Err(ParseError::WordTooLong { line: 1, .. })));

    let text = format!("nocolor {}\n", "x".repeat(MAX_WORD));
    assert!(parse(&text).is_ok());
  }

  #[test]
  fn rejects_too_many_countries() {
    let text: String = (0..=MAX_COUNTRIES).map(|i| format!("nocolor C{i}\n")).collect();
    assert!(matches!(parse(&text), Err(ParseError::TooManyCountries { .. })));
  }

  #[test]
  fn rejects_lines_without_a_name() {
    assert!(matches!(parse("red\n"), Err(ParseError::MissingName { line: 1 })));
    assert!(matches!(parse("nocolor A\n\n"), Err(ParseError::MissingName { line: 2 })));
  }

  #[test]
  fn rejects_unknown_colors_and_duplicates() {
    assert!(matches!(parse("purple A\n"), Err(ParseError::UnknownColor { .. })));
    assert!(matches!(
      parse("nocolor A\nred A\n"),
      Err(ParseError::DuplicateCountry { line: 2, .. })
    ));
  }
}
