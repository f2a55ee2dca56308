//! Tests for operation values and argument extraction

#[cfg(test)]
mod tests {
    use gridl::GridError;
    use gridl::engine::value::{Value, position_arg};

    // Tests accessors only answer for their own variant
    // Verified by returning the count from as_position
    #[test]
    fn test_accessors() {
        let count: Value<u8> = Value::Count(3);
        assert_eq!(count.as_count(), Some(3));
        assert_eq!(count.as_position(), None);
        assert_eq!(count.as_bool(), None);

        let position: Value<u8> = Value::Position([1, 2]);
        assert_eq!(position.as_position(), Some([1, 2]));

        assert_eq!(Value::<u8>::Bool(true).as_bool(), Some(true));
        assert_eq!(Value::Cell(7_u8).into_cell(), Some(7));
        assert_eq!(Value::List(vec![1_u8, 2]).into_list(), Some(vec![1, 2]));
        assert_eq!(Value::Rows(vec![vec![1_u8]]).into_rows(), Some(vec![vec![1]]));
        assert_eq!(Value::<u8>::Unit.into_cell(), None);
    }

    // Tests variant names used in error messages
    // Verified by naming Rows as list
    #[test]
    fn test_kind() {
        assert_eq!(Value::<u8>::Unit.kind(), "unit");
        assert_eq!(Value::<u8>::Position([0, 0]).kind(), "position");
        assert_eq!(Value::<u8>::List(Vec::new()).kind(), "list");
        assert_eq!(Value::<u8>::Rows(Vec::new()).kind(), "rows");
    }

    // Tests position arguments are read by index and rejected otherwise
    // Verified by reading argument 0 regardless of the requested index
    #[test]
    fn test_position_arg() {
        let args: Vec<Value<u8>> = vec![Value::Count(1), Value::Position([4, 5])];

        assert_eq!(position_arg("goto", &args, 1), Ok([4, 5]));

        match position_arg("goto", &args, 0) {
            Err(GridError::InvalidArgument { operation, reason }) => {
                assert_eq!(operation, "goto");
                assert!(reason.contains("got count"), "unexpected reason: {reason}");
            }
            other => unreachable!("Expected InvalidArgument, got {other:?}"),
        }

        match position_arg("goto", &args, 2) {
            Err(GridError::InvalidArgument { reason, .. }) => {
                assert!(reason.contains("missing"), "unexpected reason: {reason}");
            }
            other => unreachable!("Expected InvalidArgument, got {other:?}"),
        }
    }
}
