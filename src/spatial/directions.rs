//! Compass directions as unit steps on the grid
//!
//! A direction is an `[dx, dy]` pair. Positive `dx` moves toward higher
//! column indices, positive `dy` toward higher row indices, so `UP` is
//! `[0, -1]`.

/// Grid position as `[x, y]` (column, row)
pub type Position = [i32; 2];

/// One step toward a neighbouring cell, as `[dx, dy]`
pub type Direction = [i32; 2];

/// One step up
pub const UP: Direction = [0, -1];
/// One step right, one step up
pub const UP_RIGHT: Direction = [1, -1];
/// One step right
pub const RIGHT: Direction = [1, 0];
/// One step right, one step down
pub const DOWN_RIGHT: Direction = [1, 1];
/// One step down
pub const DOWN: Direction = [0, 1];
/// One step left, one step down
pub const DOWN_LEFT: Direction = [-1, 1];
/// One step left
pub const LEFT: Direction = [-1, 0];
/// One step left, one step up
pub const UP_LEFT: Direction = [-1, -1];

/// All eight directions, clockwise starting at `UP`
pub const ALL: [Direction; 8] = [
    UP, UP_RIGHT, RIGHT, DOWN_RIGHT, DOWN, DOWN_LEFT, LEFT, UP_LEFT,
];

/// Move a position one step in the given direction
pub const fn step(position: Position, direction: Direction) -> Position {
    [position[0] + direction[0], position[1] + direction[1]]
}

/// Look up a direction by its constant name (`"UP_LEFT"`, `"DOWN"`, ...)
pub fn by_name(name: &str) -> Option<Direction> {
    match name {
        "UP" => Some(UP),
        "UP_RIGHT" => Some(UP_RIGHT),
        "RIGHT" => Some(RIGHT),
        "DOWN_RIGHT" => Some(DOWN_RIGHT),
        "DOWN" => Some(DOWN),
        "DOWN_LEFT" => Some(DOWN_LEFT),
        "LEFT" => Some(LEFT),
        "UP_LEFT" => Some(UP_LEFT),
        _ => None,
    }
}
