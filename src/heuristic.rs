use crate::map::Map;

/// Country indices, most borders first. High degree countries are the most
/// constrained ones, so coloring them early prunes the search sooner.
/// Countries with the same degree keep their input order.
pub fn degree_order(map: &Map) -> Vec<usize> {
  let mut order: Vec<usize> = (0..map.len()).collect();
  order.sort_by_key(|&country| std::cmp::Reverse(map.degree(country)));
  order
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::map::Country;

  #[test]
  fn sorts_by_descending_degree() {
    let mut map = Map::new();
    map.push(Country::new("A").with_neighbours(["B"])).unwrap();
    map.push(Country::new("B").with_neighbours(["A", "C", "D"])).unwrap();
    map.push(Country::new("C").with_neighbours(["B"])).unwrap();
    map.push(Country::new("D").with_neighbours(["B"])).unwrap();
    map.push(Country::new("E")).unwrap();

    assert_eq!(degree_order(&map), vec![1, 0, 2, 3, 4]);
  }

  #[test]
  fn empty_map_has_empty_order() {
    assert!(degree_order(&Map::new()).is_empty());
  }
}
