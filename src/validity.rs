use crate::error::StructureError;
use crate::map::Map;

/// Checks the format rules on a parsed map:
///
/// * (A) each country that appears as a neighbour has its own line;
/// * (B) if K borders L, then L borders K.
///
/// Stops at the first violation.
pub fn check_map(map: &Map) -> Result<(), StructureError> {
  for country in 0..map.len() {
    let name = map.name(country);

    for neighbour in map.neighbours(country) {
      let Some(other) = map.find_country(neighbour) else {
        return Err(StructureError::UnknownNeighbour {
          country: name.to_string(),
          neighbour: neighbour.clone(),
        });
      };

      if !map.neighbours(other).iter().any(|n| n == name) {
        return Err(StructureError::Asymmetric {
          country: name.to_string(),
          neighbour: neighbour.clone(),
        });
      }
    }
  }

  Ok(())
}

pub fn is_map_valid(map: &Map) -> bool {
  check_map(map).is_ok()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::map::Country;

  fn map_of(lines: &[(&str, &[&str])]) -> Map {
    let mut map = Map::new();
    for (name, neighbours) in lines {
      map.push(Country::new(*name).with_neighbours(neighbours.iter().copied())).unwrap();
    }
    map
  }

  #[test]
  fn symmetric_map_is_valid() {
    let map = map_of(&[("A", &["B", "C"]), ("B", &["A"]), ("C", &["A"]), ("D", &[])]);
    assert_eq!(check_map(&map), Ok(()));
    assert!(is_map_valid(&map));
  }

  #[test]
  fn unknown_neighbour_breaks_rule_a() {
    let map = map_of(&[("A", &["B"]), ("B", &["A", "Z"])]);
    assert_eq!(
      check_map(&map),
      Err(StructureError::UnknownNeighbour { country: "B".into(), neighbour: "Z".into() })
    );
  }

  #[test]
  fn one_sided_border_breaks_rule_b() {
    let map = map_of(&[("C", &["D"]), ("D", &[])]);
    assert_eq!(
      check_map(&map),
      Err(StructureError::Asymmetric { country: "C".into(), neighbour: "D".into() })
    );
  }

  #[test]
  fn validation_is_repeatable() {
    let map = map_of(&[("C", &["D"]), ("D", &[])]);
    let first = is_map_valid(&map);
    assert_eq!(first, is_map_valid(&map));
    assert!(!first);
  }
}
