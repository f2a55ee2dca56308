//! Tests for raw array cloning, empty-shape correction, freezing and validation

#[cfg(test)]
mod tests {
    use gridl::GridError;
    use gridl::spatial::array2d::{
        clone_array2d, correct_empty_array2d, flatten, get_column_count, get_row_count,
        shallow_freeze_array2d, unflatten, validate_grid_array,
    };

    fn shape_reason<T>(result: Result<T, GridError>) -> String {
        match result {
            Err(GridError::InvalidGridShape { reason }) => reason,
            Err(other) => unreachable!("Expected InvalidGridShape, got {other}"),
            Ok(_) => unreachable!("Expected InvalidGridShape, got Ok"),
        }
    }

    // Tests the clone owns new rows that can change without touching the source
    // Verified by returning rows that share storage with the source
    #[test]
    fn test_clone_is_independent() {
        let original = vec![vec![1, 2], vec![3, 4]];
        let mut copy = clone_array2d(&original);

        if let Some(cell) = copy.first_mut().and_then(|row| row.first_mut()) {
            *cell = 9;
        }
        copy.push(vec![5, 6]);

        assert_eq!(original, vec![vec![1, 2], vec![3, 4]]);
        assert_eq!(copy.len(), 3);
    }

    // Tests arrays without rows or with only empty rows become the empty array
    // Verified by keeping empty rows
    #[test]
    fn test_correct_empty_array2d() {
        assert!(correct_empty_array2d(Vec::<Vec<u8>>::new()).is_empty());
        assert!(correct_empty_array2d(vec![Vec::<u8>::new(), Vec::new()]).is_empty());
        assert_eq!(
            correct_empty_array2d(vec![vec![1], vec![2]]),
            vec![vec![1], vec![2]]
        );
    }

    // Tests row and column counts, including the empty array
    // Verified by reading the column count from the last row
    #[test]
    fn test_counts() {
        let array = vec![vec![1, 2, 3], vec![4, 5, 6]];
        assert_eq!(get_column_count(&array), 3);
        assert_eq!(get_row_count(&array), 2);

        let empty: Vec<Vec<u8>> = Vec::new();
        assert_eq!(get_column_count(&empty), 0);
        assert_eq!(get_row_count(&empty), 0);
    }

    // Tests freezing keeps the row-major layout
    // Verified by transposing the shape
    #[test]
    fn test_shallow_freeze_keeps_layout() {
        let frozen = shallow_freeze_array2d(vec![vec![1, 2, 3], vec![4, 5, 6]]);
        assert!(frozen.is_ok());

        if let Ok(array) = frozen {
            assert_eq!(array.dim(), (2, 3));
            assert_eq!(array.get((1, 2)).copied(), Some(6));
            assert_eq!(array.get((0, 1)).copied(), Some(2));
        }
    }

    // Tests ragged rows cannot be frozen
    // Verified by padding short rows instead of failing
    #[test]
    fn test_shallow_freeze_rejects_ragged_rows() {
        let reason = shape_reason(shallow_freeze_array2d(vec![vec![1, 2], vec![3]]));
        assert!(reason.contains("row 1"), "unexpected reason: {reason}");
    }

    // Tests validation names the violated property
    // Verified by accepting an empty first row
    #[test]
    fn test_validate_grid_array() {
        assert!(validate_grid_array(&[vec![1, 2], vec![3, 4]]).is_ok());

        let empty: Vec<Vec<u8>> = Vec::new();
        assert!(shape_reason(validate_grid_array(&empty)).contains("at least one row"));

        let empty_row: Vec<Vec<u8>> = vec![Vec::new()];
        assert!(shape_reason(validate_grid_array(&empty_row)).contains("at least one cell"));

        let ragged = vec![vec![1, 2], vec![3, 4, 5]];
        let reason = shape_reason(validate_grid_array(&ragged));
        assert!(reason.contains("row 1 has 3 cells"), "unexpected reason: {reason}");
    }

    // Tests flatten and unflatten use row-major order
    // Verified by flattening column by column
    #[test]
    fn test_flatten_and_unflatten() {
        assert_eq!(flatten(vec![vec![1, 2], vec![3, 4]]), vec![1, 2, 3, 4]);
        assert_eq!(
            unflatten(&[1, 2, 3, 4, 5], 2),
            vec![vec![1, 2], vec![3, 4], vec![5]]
        );
        assert!(unflatten(&[1, 2], 0).is_empty());
    }
}
