use std::collections::HashMap;
use std::fmt;

use crate::palette::{Color, Palette, NO_COLOR};

/// One line of the input: a country, its color slot and its borders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Country {
  pub color: Option<Color>,
  pub name: String,
  pub neighbours: Vec<String>,
}

impl Country {
  pub fn new(name: impl Into<String>) -> Self {
    Country { color: None, name: name.into(), neighbours: Vec::new() }
  }

  pub fn with_color(mut self, color: Color) -> Self {
    self.color = Some(color);
    self
  }

  pub fn with_neighbours<I, S>(mut self, neighbours: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.neighbours.extend(neighbours.into_iter().map(Into::into));
    self
  }
}

/// Adjacency-list map. Countries keep their input order; indices are
/// dense and never change once a country has been pushed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Map {
  countries: Vec<Country>,
  index: HashMap<String, usize>,
}

impl Map {
  pub fn new() -> Self {
    Self::default()
  }

  /// Appends a country. Hands it back if the name is already taken.
  pub fn push(&mut self, country: Country) -> Result<usize, Country> {
    if self.index.contains_key(&country.name) {
      return Err(country);
    }
    let ix = self.countries.len();
    self.index.insert(country.name.clone(), ix);
    self.countries.push(country);
    Ok(ix)
  }

  pub fn len(&self) -> usize {
    self.countries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.countries.is_empty()
  }

  pub fn countries(&self) -> &[Country] {
    &self.countries
  }

  pub fn name(&self, country: usize) -> &str {
    &self.countries[country].name
  }

  pub fn color(&self, country: usize) -> Option<Color> {
    self.countries[country].color
  }

  pub fn neighbours(&self, country: usize) -> &[String] {
    &self.countries[country].neighbours
  }

  pub fn degree(&self, country: usize) -> usize {
    self.countries[country].neighbours.len()
  }

  pub fn has_neighbours(&self, country: usize) -> bool {
    self.degree(country) > 0
  }

  pub fn is_uncolored(&self, country: usize) -> bool {
    self.color(country).is_none()
  }

  pub fn paint(&mut self, country: usize, color: Color) {
    self.countries[country].color = Some(color);
  }

  pub fn unpaint(&mut self, country: usize) {
    self.countries[country].color = None;
  }

  pub fn find_country(&self, name: &str) -> Option<usize> {
    self.index.get(name).copied()
  }

  /// Renders the map in the input format, one country per line.
  pub fn display<'a>(&'a self, palette: &'a Palette) -> MapDisplay<'a> {
    MapDisplay { map: self, palette }
  }
}

pub struct MapDisplay<'a> {
  map: &'a Map,
  palette: &'a Palette,
}

impl fmt::Display for MapDisplay<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for country in &self.map.countries {
      let color = country.color.map_or(NO_COLOR, |c| self.palette.name(c));
      write!(f, "{} {}", color, country.name)?;
      for neighbour in &country.neighbours {
        write!(f, " {}", neighbour)?;
      }
      writeln!(f)?;
    }
    Ok(())
  }
}
