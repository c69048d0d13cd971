/// Builds a [`Value`](crate::Value) from a JSON-like literal.
///
/// ```rust
/// use conftext::conf;
///
/// let value = conf!({
///     "name": "Alice",
///     "age": 30,
///     "tags": ["admin", "user"],
///     "extra": null
/// });
/// assert!(value.is_table());
/// ```
#[macro_export]
macro_rules! conf {
    // Handle null
    (null) => {
        $crate::Value::Null
    };

    // Handle true
    (true) => {
        $crate::Value::Bool(true)
    };

    // Handle false
    (false) => {
        $crate::Value::Bool(false)
    };

    // Handle empty list
    ([]) => {
        $crate::Value::List(vec![])
    };

    // Handle non-empty list
    ([ $($elem:tt),* $(,)? ]) => {
        $crate::Value::List(vec![$($crate::conf!($elem)),*])
    };

    // Handle empty table
    ({}) => {
        $crate::Value::Table($crate::Table::new())
    };

    // Handle non-empty table
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut table = $crate::Table::new();
        $(
            table.insert($key.to_string(), $crate::conf!($value));
        )*
        $crate::Value::Table(table)
    }};

    // Fallback: any expression convertible into a Value
    ($other:expr) => {
        $crate::Value::from($other)
    };
}
