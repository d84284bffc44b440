/// Numeric placeholder token recognized in rename patterns.
pub const NUMBER_TOKEN: &str = "[N]";

/// Substitute the first occurrence of [`NUMBER_TOKEN`] in `pattern` with the
/// base-10 rendering of `number`.
///
/// A pattern without the token is returned unchanged; any occurrence after
/// the first is left literal. Negative numbers keep their leading minus and
/// no zero padding is applied.
pub fn apply_pattern(pattern: &str, number: i64) -> String {
    pattern.replacen(NUMBER_TOKEN, &number.to_string(), 1)
}
