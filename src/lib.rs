//! Map coloring: give every country of a map one of a limited number of
//! colors so that no two neighbouring countries share a color.

pub mod check;
pub mod error;
pub mod export;
pub mod generate;
pub mod heuristic;
pub mod map;
pub mod options;
pub mod palette;
pub mod parse;
pub mod solve;
pub mod validity;

pub use check::{check_coloring, is_valid_coloring, ColoringViolation};
pub use error::{ConfigError, MapError, ParseError, StructureError};
pub use heuristic::degree_order;
pub use map::{Country, Map};
pub use palette::{Color, Palette, NO_COLOR};
pub use parse::read_map;
pub use solve::{can_color, color_map, color_map_with, CheckMode, SearchOutcome};
pub use validity::{check_map, is_map_valid};
