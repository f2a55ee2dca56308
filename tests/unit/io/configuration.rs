//! Tests for configuration constants

#[cfg(test)]
mod tests {
    use gridl::io::configuration::{
        BLANK_CELL, CELL_SEPARATOR, DEFAULT_COLUMNS, DEFAULT_ROWS, MAX_GRID_DIMENSION,
        RANDOM_CELL_LIMIT,
    };

    // Tests the default grid fits within the dimension limit
    // Verified by raising the defaults above the limit
    #[test]
    fn test_defaults_within_limit() {
        assert!((1..=MAX_GRID_DIMENSION).contains(&DEFAULT_COLUMNS));
        assert!((1..=MAX_GRID_DIMENSION).contains(&DEFAULT_ROWS));
    }

    // Tests random fills have more than one possible value
    // Verified by setting the limit to one
    #[test]
    fn test_random_limit() {
        assert!(RANDOM_CELL_LIMIT > 1);
    }

    // Tests the blank placeholder cannot be confused with the separator
    // Verified by using a space as the placeholder
    #[test]
    fn test_rendering_symbols() {
        assert!(!BLANK_CELL.is_empty());
        assert!(!BLANK_CELL.contains(CELL_SEPARATOR));
    }
}
