use indicatif::ProgressBar;
use log::debug;

use crate::heuristic::degree_order;
use crate::map::Map;
use crate::palette::{Color, Palette};

/// How `can_color` treats a country that already has a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckMode {
  /// Colored countries are not candidates.
  Search,
  /// Re-check the color a country already has.
  Verify,
}

/// Returns true if `country` may take `color` without sharing it with a
/// colored neighbour.
pub fn can_color(map: &Map, country: usize, color: Color, mode: CheckMode) -> bool {
  if mode == CheckMode::Search && !map.is_uncolored(country) {
    return false;
  }

  // Degree 0 is always colorable
  if !map.has_neighbours(country) {
    return true;
  }

  !map
    .neighbours(country)
    .iter()
    .filter_map(|name| map.find_country(name))
    .any(|neighbour| map.color(neighbour) == Some(color))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchOutcome {
  pub colored: bool,
  pub assignments: u64,
  pub backtracks: u64,
}

/// Colors every uncolored country with one of the first `n_colors` colors of
/// `palette` so that no two neighbours share a color. Countries that are
/// already colored keep their color and act as fixed constraints.
///
/// On failure the map is left exactly as it was.
pub fn color_map(map: &mut Map, palette: &Palette, n_colors: usize) -> bool {
  let order = degree_order(map);
  let n_colors = n_colors.min(palette.len());
  color_map_with(map, n_colors, &order, &ProgressBar::hidden()).colored
}

/// Backtracking search over the uncolored countries of `order`.
///
/// The search keeps its own stack instead of recursing: `pending[depth]` is
/// the country being decided at that depth and `next[depth]` the first color
/// still worth trying for it. Every country above `depth` is uncolored.
pub fn color_map_with(
  map: &mut Map,
  n_colors: usize,
  order: &[usize],
  pb: &ProgressBar,
) -> SearchOutcome {
  let pending: Vec<usize> = order.iter().copied().filter(|&c| map.is_uncolored(c)).collect();
  let mut next = vec![0usize; pending.len()];
  let mut outcome = SearchOutcome::default();
  let mut depth = 0;

  while depth < pending.len() {
    let country = pending[depth];
    let candidate = (next[depth]..n_colors)
      .map(Color::new)
      .find(|&color| can_color(map, country, color, CheckMode::Search));

    match candidate {
      Some(color) => {
        map.paint(country, color);
        outcome.assignments += 1;
        pb.inc(1);

        next[depth] = color.index() + 1;
        depth += 1;
        if depth < pending.len() {
          next[depth] = 0;
        }
      }
      None => {
        if depth == 0 {
          debug!(
            "search exhausted after {} assignments, {} backtracks",
            outcome.assignments, outcome.backtracks
          );
          return outcome;
        }
        // Backtrack
        depth -= 1;
        map.unpaint(pending[depth]);
        outcome.backtracks += 1;
      }
    }
  }

  debug!(
    "colored {} countries after {} assignments, {} backtracks",
    pending.len(),
    outcome.assignments,
    outcome.backtracks
  );
  outcome.colored = true;
  outcome
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::map::Country;

  fn ring(n: usize) -> Map {
    let mut map = Map::new();
    for i in 0..n {
      let prev = format!("R{}", (i + n - 1) % n);
      let next = format!("R{}", (i + 1) % n);
      map.push(Country::new(format!("R{i}")).with_neighbours([prev, next])).unwrap();
    }
    map
  }

  fn adjacent_colors_differ(map: &Map) -> bool {
    (0..map.len()).all(|c| {
      map.neighbours(c)
        .iter()
        .filter_map(|n| map.find_country(n))
        .all(|n| map.color(n) != map.color(c))
    })
  }

  #[test]
  fn can_color_checks_neighbours() {
    let mut map = ring(3);
    map.paint(1, Color::new(0));
    assert!(!can_color(&map, 0, Color::new(0), CheckMode::Search));
    assert!(can_color(&map, 0, Color::new(1), CheckMode::Search));
    // already colored
    assert!(!can_color(&map, 1, Color::new(1), CheckMode::Search));
    assert!(can_color(&map, 1, Color::new(0), CheckMode::Verify));
  }

  #[test]
  fn even_ring_takes_two_colors() {
    let mut map = ring(6);
    assert!(color_map(&mut map, &Palette::default(), 2));
    assert!((0..6).all(|c| map.color(c).is_some_and(|col| col.index() < 2)));
    assert!(adjacent_colors_differ(&map));
  }

  #[test]
  fn odd_ring_needs_three_colors() {
    let mut map = ring(5);
    assert!(!color_map(&mut map, &Palette::default(), 2));
    assert!((0..5).all(|c| map.is_uncolored(c)));

    assert!(color_map(&mut map, &Palette::default(), 3));
    assert!(adjacent_colors_differ(&map));
  }

  #[test]
  fn precolored_countries_are_kept() {
    let mut map = ring(4);
    map.paint(2, Color::new(1));
    assert!(color_map(&mut map, &Palette::default(), 2));
    assert_eq!(map.color(2), Some(Color::new(1)));
    assert_eq!(map.color(0), Some(Color::new(1)));
    assert!(adjacent_colors_differ(&map));
  }

  #[test]
  fn failure_restores_precolored_map() {
    let mut map = ring(5);
    map.paint(0, Color::new(0));
    let before = map.clone();
    assert!(!color_map(&mut map, &Palette::default(), 2));
    assert_eq!(map, before);
  }

  #[test]
  fn search_reports_backtracking() {
    // Path A - B - C - D. Coloring both ends first with the same color leaves
    // no room for C, so D has to be revisited.
    let mut map = Map::new();
    map.push(Country::new("A").with_neighbours(["B"])).unwrap();
    map.push(Country::new("B").with_neighbours(["A", "C"])).unwrap();
    map.push(Country::new("C").with_neighbours(["B", "D"])).unwrap();
    map.push(Country::new("D").with_neighbours(["C"])).unwrap();

    let outcome = color_map_with(&mut map, 2, &[0, 3, 1, 2], &ProgressBar::hidden());
    assert_eq!(outcome, SearchOutcome { colored: true, assignments: 6, backtracks: 2 });
    assert_eq!(map.color(3), Some(Color::new(1)));
    assert!(adjacent_colors_differ(&map));
  }

  #[test]
  fn no_colors_means_no_coloring() {
    let mut map = ring(2);
    assert!(!color_map(&mut map, &Palette::default(), 0));
  }

  #[test]
  fn empty_map_is_trivially_colored() {
    let mut map = Map::new();
    assert!(color_map(&mut map, &Palette::default(), 1));
  }
}
