//! Tests for the default state and navigation plugins

#[cfg(test)]
mod tests {
    use gridl::engine::builtin::{NAVIGATION_PLUGIN, STATE_PLUGIN, default_plugins};
    use gridl::engine::instance::Instance;
    use gridl::engine::value::Value;
    use gridl::spatial::directions::{DOWN_RIGHT, LEFT};
    use gridl::{GridError, instance_of};

    fn sample() -> Instance<char> {
        let Ok(instance) = instance_of(vec![vec!['a', 'b', 'c'], vec!['d', 'e', 'f']]) else {
            unreachable!("Construction should succeed");
        };
        instance
    }

    // Tests the default set registers state before navigation
    // Verified by registering navigation first
    #[test]
    fn test_default_plugin_order() {
        let registry = default_plugins::<char>();
        assert_eq!(
            registry.names().collect::<Vec<_>>(),
            vec![STATE_PLUGIN, NAVIGATION_PLUGIN]
        );
        assert_eq!(NAVIGATION_PLUGIN, "navigating");
    }

    // Tests the state readers report shape, cells and position
    // Verified by swapping the rows and columns readers
    #[test]
    fn test_state_readers() {
        let instance = sample();

        assert_eq!(instance.call("rows", &[]), Ok(Value::Count(2)));
        assert_eq!(instance.call("columns", &[]), Ok(Value::Count(3)));
        assert_eq!(instance.call("size", &[]), Ok(Value::Count(6)));
        assert_eq!(instance.call("position", &[]), Ok(Value::Position([0, 0])));
        assert_eq!(
            instance.call("data", &[]),
            Ok(Value::List(vec!['a', 'b', 'c', 'd', 'e', 'f']))
        );
        assert_eq!(
            instance.call("to_array2d", &[]),
            Ok(Value::Rows(vec![vec!['a', 'b', 'c'], vec!['d', 'e', 'f']]))
        );
    }

    // Tests the bound names in binding order
    // Verified by binding navigation before the readers
    #[test]
    fn test_operation_names() {
        assert_eq!(
            sample().operation_names(),
            vec!["rows", "columns", "size", "data", "position", "to_array2d", "goto", "walk"]
        );
    }

    // Tests goto moves without clipping to the grid
    // Verified by clamping the target into the grid
    #[test]
    fn test_goto() {
        let instance = sample();

        assert!(instance.apply("goto", &[Value::Position([1, 1])]).is_ok());
        assert_eq!(instance.call("position", &[]), Ok(Value::Position([1, 1])));

        assert!(instance.apply("goto", &[Value::Position([-4, 9])]).is_ok());
        assert_eq!(instance.call("position", &[]), Ok(Value::Position([-4, 9])));
    }

    // Tests walk steps from the current position
    // Verified by stepping from the origin every time
    #[test]
    fn test_walk() {
        let instance = sample();

        let walked = instance
            .apply("walk", &[Value::Position(DOWN_RIGHT)])
            .and_then(|chained| chained.apply("walk", &[Value::Position(DOWN_RIGHT)]))
            .and_then(|chained| chained.apply("walk", &[Value::Position(LEFT)]));
        assert!(walked.is_ok());

        assert_eq!(instance.call("position", &[]), Ok(Value::Position([1, 2])));
    }

    // Tests navigation rejects missing or mistyped arguments
    // Verified by defaulting to the origin
    #[test]
    fn test_navigation_arguments() {
        let instance = sample();

        assert!(matches!(
            instance.call("goto", &[]),
            Err(GridError::InvalidArgument {
                operation: "goto",
                ..
            })
        ));
        assert!(matches!(
            instance.call("walk", &[Value::Count(1)]),
            Err(GridError::InvalidArgument {
                operation: "walk",
                ..
            })
        ));
        assert_eq!(instance.call("position", &[]), Ok(Value::Position([0, 0])));
    }
}
