//! Length section - scores the password's length bucket.

use secrecy::{ExposeSecret, SecretString};

use super::SectionReport;

/// Scores password length: nothing under 6 characters, +10 under 8, +20
/// under 12, +40 from 12 up. Length is counted in characters (code points),
/// not bytes.
pub fn length_section(password: &SecretString) -> SectionReport {
    let len = password.expose_secret().chars().count();
    if len < 6 {
        SectionReport::flagged(0, "Use at least 6 characters.")
    } else if len < 8 {
        SectionReport::flagged(10, "Try using 8 or more characters.")
    } else if len < 12 {
        SectionReport::scored(20)
    } else {
        SectionReport::scored(40)
    }
}
