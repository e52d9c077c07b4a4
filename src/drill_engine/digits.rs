//! Small digit helpers shared by the generator, validator and grid.

/// Units digit of `n`.
pub fn units(n: u8) -> u8 {
    n % 10
}

/// Render `n` as a zero-padded two-character string ("07", "42").
pub fn padded2(n: u8) -> String {
    format!("{:02}", n)
}

/// Keep ASCII digits only, at most `capacity` of them.
///
/// Anything else is silently dropped, so a stray letter becomes an empty cell.
pub fn sanitize(raw: &str, capacity: usize) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit())
        .take(capacity)
        .collect()
}
