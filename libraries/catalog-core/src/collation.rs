//! Name collation
//!
//! Genre names are unique under an English, case- and accent-insensitive
//! comparison. Rather than asking the database for a locale-aware collation,
//! each name is reduced to a key and the keys are compared ordinally:
//! lowercased, canonically decomposed, then combining marks dropped.

use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Reduce a name to its comparison key
///
/// Two names collate equal exactly when their keys are equal.
pub fn collation_key(name: &str) -> String {
    name.chars()
        .flat_map(char::to_lowercase)
        .collect::<String>()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect()
}
