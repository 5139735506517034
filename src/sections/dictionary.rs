//! Dictionary section - checks the password against the common-password set.

use secrecy::{ExposeSecret, SecretString};

use super::SectionReport;
use crate::dictionary::CommonPasswordSet;

const LEAK_PENALTY: i64 = -20;

/// -20 and a warning when the password, lowercased, is in the set.
pub fn dictionary_section(
    password: &SecretString,
    common: &CommonPasswordSet,
) -> SectionReport {
    if common.contains(password.expose_secret()) {
        SectionReport::flagged(
            LEAK_PENALTY,
            "This password is too common or has been leaked!",
        )
    } else {
        SectionReport::clean()
    }
}
