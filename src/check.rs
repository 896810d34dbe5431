use log::warn;
use thiserror::Error;

use crate::map::Map;
use crate::palette::Palette;
use crate::solve::{can_color, CheckMode};

/// First reason a given coloring is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColoringViolation {
  #[error("neighbours {country:?} and {neighbour:?} are both {color}")]
  Conflict { country: String, neighbour: String, color: String },
  #[error("more than {n_colors} colors used ({country:?} is {color})")]
  OverBudget { country: String, color: String, n_colors: usize },
}

/// Checks whatever is colored in `map`: no two neighbours may share a color
/// and only the first `n_colors` colors of `palette` may appear. Uncolored
/// countries are skipped.
pub fn check_coloring(
  map: &Map,
  palette: &Palette,
  n_colors: usize,
) -> Result<(), ColoringViolation> {
  for country in 0..map.len() {
    let Some(color) = map.color(country) else {
      continue;
    };

    if !can_color(map, country, color, CheckMode::Verify) {
      let neighbour = map
        .neighbours(country)
        .iter()
        .find(|n| map.find_country(n).and_then(|ix| map.color(ix)) == Some(color))
        .cloned()
        .unwrap_or_default();
      return Err(ColoringViolation::Conflict {
        country: map.name(country).to_string(),
        neighbour,
        color: palette.name(color).to_string(),
      });
    }

    if n_colors < palette.len() && color.index() >= n_colors {
      return Err(ColoringViolation::OverBudget {
        country: map.name(country).to_string(),
        color: palette.name(color).to_string(),
        n_colors,
      });
    }
  }

  Ok(())
}

pub fn is_valid_coloring(map: &Map, palette: &Palette, n_colors: usize) -> bool {
  match check_coloring(map, palette, n_colors) {
    Ok(()) => true,
    Err(violation @ ColoringViolation::OverBudget { .. }) => {
      warn!("{violation}");
      false
    }
    Err(_) => false,
  }
}
