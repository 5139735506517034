//! Pattern section - detects repeated and sequential character runs.

use secrecy::{ExposeSecret, SecretString};

use super::SectionReport;

/// Sliding-window length for sequential-run detection.
pub const SEQUENCE_WINDOW: usize = 3;

const PATTERN_PENALTY: i64 = -10;

/// True when any character occurs 3 or more times consecutively.
pub fn has_repeated_run(password: &str) -> bool {
    let mut prev: Option<char> = None;
    let mut run = 1;
    for c in password.chars() {
        if Some(c) == prev {
            run += 1;
            if run >= 3 {
                return true;
            }
        } else {
            prev = Some(c);
            run = 1;
        }
    }
    false
}

/// True when any window of `window_len` consecutive characters has code
/// points stepping by exactly +1 (ascending) or exactly -1 (descending)
/// throughout the window.
///
/// Operates on raw code points: "abc", "123" and "cba" match, while
/// cross-class windows like "9ab" do not. No alphabet wrap-around.
pub fn has_sequential_run(password: &str, window_len: usize) -> bool {
    if window_len < 2 {
        return false;
    }
    let codes: Vec<i64> = password.chars().map(|c| c as i64).collect();
    codes.windows(window_len).any(|w| {
        w.windows(2).all(|p| p[1] - p[0] == 1) || w.windows(2).all(|p| p[1] - p[0] == -1)
    })
}

/// -10 for a repeated run and -10 for a sequential run; both can apply.
pub fn pattern_section(password: &SecretString) -> SectionReport {
    let pwd = password.expose_secret();

    let mut report = SectionReport::clean();
    if has_repeated_run(pwd) {
        report.merge(SectionReport::flagged(
            PATTERN_PENALTY,
            "Avoid repeated characters.",
        ));
    }
    if has_sequential_run(pwd, SEQUENCE_WINDOW) {
        report.merge(SectionReport::flagged(
            PATTERN_PENALTY,
            "Avoid sequential characters like abc or 123.",
        ));
    }
    report
}
