//! Form field validation
//!
//! A submitted name goes through the same chain every time: trim, length
//! check, then HTML escaping. The escaped value is what gets stored and what
//! gets echoed back when the form is shown again, whether or not it passed.

use serde::Serialize;

/// Minimum number of characters a name must have after trimming
pub const MIN_NAME_LEN: usize = 3;

/// A single validation failure attached to a form field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Form field the error belongs to
    pub field: String,
    /// Sanitized value that was submitted
    pub value: String,
    /// Human readable message
    pub message: String,
}

/// Outcome of validating a name field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameValidation {
    /// The sanitized name is acceptable
    Valid(String),
    /// The name was rejected; `name` keeps the sanitized input for re-display
    Invalid {
        /// Sanitized input, shown again in the form
        name: String,
        /// What was wrong with it
        errors: Vec<FieldError>,
    },
}

impl NameValidation {
    /// The sanitized name regardless of outcome
    pub fn name(&self) -> &str {
        match self {
            Self::Valid(name) | Self::Invalid { name, .. } => name,
        }
    }

    /// Whether the name passed
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }
}

/// Validate and sanitize the `name` form field
///
/// `message` is reported when the trimmed value is shorter than
/// [`MIN_NAME_LEN`] characters.
pub fn validate_name(raw: &str, message: &str) -> NameValidation {
    let trimmed = raw.trim();
    let name = escape(trimmed);

    if trimmed.chars().count() < MIN_NAME_LEN {
        return NameValidation::Invalid {
            errors: vec![FieldError {
                field: "name".to_string(),
                value: name.clone(),
                message: message.to_string(),
            }],
            name,
        };
    }

    NameValidation::Valid(name)
}

/// Replace markup-significant characters with HTML entities
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '/' => out.push_str("&#x2F;"),
            '\\' => out.push_str("&#x5C;"),
            '`' => out.push_str("&#96;"),
            _ => out.push(c),
        }
    }
    out
}
