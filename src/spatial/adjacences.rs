//! Named neighbour-enumeration orders
//!
//! Each ordering fixes the sequence in which neighbours of a cell are
//! visited. Reading order runs left to right, top to bottom; the clockwise
//! and counterclockwise variants both start at `UP`.

use crate::spatial::directions::{
    DOWN, DOWN_LEFT, DOWN_RIGHT, Direction, LEFT, Position, RIGHT, UP, UP_LEFT, UP_RIGHT, step,
};

/// A fixed sequence of directions
pub type AdjacencyOrdering = &'static [Direction];

/// All eight neighbours in reading order
pub const ALL: AdjacencyOrdering = &[
    UP_LEFT, UP, UP_RIGHT, LEFT, RIGHT, DOWN_LEFT, DOWN, DOWN_RIGHT,
];

/// All eight neighbours clockwise
pub const ALL_CW: AdjacencyOrdering = &[
    UP, UP_RIGHT, RIGHT, DOWN_RIGHT, DOWN, DOWN_LEFT, LEFT, UP_LEFT,
];

/// All eight neighbours counterclockwise
pub const ALL_CCW: AdjacencyOrdering = &[
    UP, UP_LEFT, LEFT, DOWN_LEFT, DOWN, DOWN_RIGHT, RIGHT, UP_RIGHT,
];

/// The four orthogonal neighbours in reading order
pub const ORTHOGONAL: AdjacencyOrdering = &[UP, LEFT, RIGHT, DOWN];

/// The four orthogonal neighbours clockwise
pub const ORTHOGONAL_CW: AdjacencyOrdering = &[UP, RIGHT, DOWN, LEFT];

/// The four orthogonal neighbours counterclockwise
pub const ORTHOGONAL_CCW: AdjacencyOrdering = &[UP, LEFT, DOWN, RIGHT];

/// The four diagonal neighbours in reading order
pub const DIAGONAL: AdjacencyOrdering = &[UP_LEFT, UP_RIGHT, DOWN_LEFT, DOWN_RIGHT];

/// The four diagonal neighbours clockwise
pub const DIAGONAL_CW: AdjacencyOrdering = &[UP_RIGHT, DOWN_RIGHT, DOWN_LEFT, UP_LEFT];

/// The four diagonal neighbours counterclockwise
pub const DIAGONAL_CCW: AdjacencyOrdering = &[UP_LEFT, DOWN_LEFT, DOWN_RIGHT, UP_RIGHT];

/// Every ordering paired with its constant name
pub const NAMED: [(&str, AdjacencyOrdering); 9] = [
    ("ALL", ALL),
    ("ALL_CW", ALL_CW),
    ("ALL_CCW", ALL_CCW),
    ("ORTHOGONAL", ORTHOGONAL),
    ("ORTHOGONAL_CW", ORTHOGONAL_CW),
    ("ORTHOGONAL_CCW", ORTHOGONAL_CCW),
    ("DIAGONAL", DIAGONAL),
    ("DIAGONAL_CW", DIAGONAL_CW),
    ("DIAGONAL_CCW", DIAGONAL_CCW),
];

/// Look up an ordering by its constant name
pub fn by_name(name: &str) -> Option<AdjacencyOrdering> {
    NAMED
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, ordering)| *ordering)
}

/// Positions adjacent to `position`, in the sequence fixed by `ordering`
///
/// No bounds are applied; callers clip against their own grid.
pub fn neighbours(position: Position, ordering: AdjacencyOrdering) -> Vec<Position> {
    ordering
        .iter()
        .map(|direction| step(position, *direction))
        .collect()
}
