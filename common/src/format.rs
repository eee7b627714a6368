//! Display helpers for the users table.

/// Splits a display name into `(first, last)` at the first space.
///
/// - `"Ada Lovelace"` gives `("Ada", "Lovelace")`.
/// - A name without a space is all first name: `"Plato"` gives `("Plato", "")`.
/// - Anything after the first space stays in the last name:
///   `"Mrs. Dennis Schulist"` gives `("Mrs.", "Dennis Schulist")`.
/// - A leading space leaves the first name empty: `" Lovelace"` gives
///   `("", "Lovelace")`.
pub fn split_name(full_name: &str) -> (&str, &str) {
    full_name.split_once(' ').unwrap_or((full_name, ""))
}
