/// Construct [`Values`][crate::Values] using a keyword argument like syntax.
///
/// Each entry is `name: value` where the value is either a list literal of
/// strings `[...]` or any expression that converts into a
/// [`Value`][crate::Value].
///
/// # Examples
///
/// ```
/// let values = uri_template::values! {
///     host: "example.com",
///     path: ["a", "b"],
///     empty: [],
///     page: 2,
/// };
/// assert_eq!(values.len(), 4);
/// ```
#[macro_export]
macro_rules! values {
    () => {
        $crate::Values::new()
    };
    ($($tt:tt)+) => {{
        let mut values = $crate::Values::new();
        $crate::_values!(@entries values $($tt)+);
        values
    }};
}

#[macro_export]
#[doc(hidden)]
macro_rules! _values {
    // Done.
    (@entries $values:ident) => {};

    // Next value is a list literal.
    (@entries $values:ident $key:ident : [$($elem:expr),* $(,)?] $(, $($rest:tt)*)?) => {
        let _ = $values.insert(
            stringify!($key),
            $crate::Value::List(::std::vec![$(::std::string::String::from($elem)),*]),
        );
        $crate::_values!(@entries $values $($($rest)*)?);
    };

    // Next value is an expression.
    (@entries $values:ident $key:ident : $value:expr $(, $($rest:tt)*)?) => {
        let _ = $values.insert(stringify!($key), $crate::Value::from($value));
        $crate::_values!(@entries $values $($($rest)*)?);
    };
}
