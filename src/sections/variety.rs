//! Character variety section - scores lowercase, uppercase, digits and
//! special characters independently.

use secrecy::{ExposeSecret, SecretString};

use super::SectionReport;

const CLASS_BONUS: i64 = 15;

/// Which character classes appear in a password.
///
/// Classing is ASCII-based: anything outside `[A-Za-z0-9]`, including
/// non-ASCII characters, counts as special.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharClasses {
    pub lower: bool,
    pub upper: bool,
    pub digit: bool,
    pub special: bool,
}

impl CharClasses {
    /// Scans the password once and records which classes occur.
    pub fn of(password: &str) -> Self {
        let mut classes = Self::default();
        for c in password.chars() {
            if c.is_ascii_lowercase() {
                classes.lower = true;
            } else if c.is_ascii_uppercase() {
                classes.upper = true;
            } else if c.is_ascii_digit() {
                classes.digit = true;
            } else {
                classes.special = true;
            }
        }
        classes
    }
}

/// +15 for each character class present; one suggestion per missing class,
/// in lowercase, uppercase, digit, special order.
pub fn variety_section(password: &SecretString) -> SectionReport {
    let classes = CharClasses::of(password.expose_secret());

    let checks = [
        (classes.lower, "Add lowercase letters."),
        (classes.upper, "Add uppercase letters."),
        (classes.digit, "Add numbers."),
        (classes.special, "Add special characters."),
    ];

    let mut report = SectionReport::clean();
    for (present, suggestion) in checks {
        if present {
            report.delta += CLASS_BONUS;
        } else {
            report.suggestions.push(suggestion.to_string());
        }
    }
    report
}
