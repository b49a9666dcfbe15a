/// Version string reported by the CLI and the outbound HTTP user agent.
pub fn folio_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Asserts that a value matches a pattern, panicking with the value's debug
/// representation otherwise.
#[macro_export]
macro_rules! assert_matches {
    ($value:expr, $($pattern:tt)+) => {
        match $value {
            $($pattern)+ => {}
            other => ::core::panic!(
                "expected `{}`, got {other:?}",
                ::core::stringify!($($pattern)+),
            ),
        }
    };
}
