//! Brute-force crack-time estimation.

use crate::sections::CharClasses;

/// Assumed attacker throughput in guesses per second.
const GUESSES_PER_SECOND: f64 = 1e10;

/// Unit ladder: report in the first unit whose threshold the value stays
/// under, otherwise divide and move up. Values past centuries are reported
/// in millennia whatever their magnitude.
const UNITS: [(&str, f64); 6] = [
    ("seconds", 60.0),
    ("minutes", 60.0),
    ("hours", 24.0),
    ("days", 365.0),
    ("years", 100.0),
    ("centuries", 10.0),
];

/// Effective alphabet an attacker must search: fixed contributions per
/// character class present (26 lowercase, 26 uppercase, 10 digits, 32
/// special), not the count of distinct characters actually used.
pub(crate) fn effective_alphabet_size(password: &str) -> u32 {
    let classes = CharClasses::of(password);
    let mut size = 0;
    if classes.lower {
        size += 26;
    }
    if classes.upper {
        size += 26;
    }
    if classes.digit {
        size += 10;
    }
    if classes.special {
        size += 32;
    }
    size
}

/// Estimates the brute-force time for `password` as a magnitude-plus-unit
/// string, e.g. `"3.21 years"`.
///
/// The search space is `alphabet ^ length`, computed in `f64`: a 128-char
/// password over the full 94-char alphabet is ~1e253, well inside `f64`
/// range. An empty password has an empty search space and reports as
/// `"0.00 seconds"`.
pub fn estimate_crack_time(password: &str) -> String {
    let alphabet = effective_alphabet_size(password) as f64;
    let length = password.chars().count() as i32;
    let combinations = alphabet.powi(length);

    let mut value = combinations / GUESSES_PER_SECOND;
    for (unit, threshold) in UNITS {
        if value < threshold {
            return format!("{value:.2} {unit}");
        }
        value /= threshold;
    }
    format!("{value:.2} millennia")
}
