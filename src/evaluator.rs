//! Password strength evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};

use crate::assessment::{PasswordAssessment, StrengthLabel};
use crate::crack_time::estimate_crack_time;
use crate::dictionary::CommonPasswordSet;
use crate::sections::{
    dictionary_section, length_section, pattern_section, variety_section, SectionReport,
};

const SCORE_MIN: i64 = 0;
const SCORE_MAX: i64 = 100;

/// Evaluates passwords against an injected common-password set.
///
/// The evaluator holds no state beyond the immutable set, so one instance
/// can be shared across threads and calls freely.
#[derive(Debug, Clone, Default)]
pub struct StrengthEvaluator {
    common: CommonPasswordSet,
}

impl StrengthEvaluator {
    /// Creates an evaluator over `common`. Use [`CommonPasswordSet::empty`]
    /// to evaluate without a leak check.
    pub fn new(common: CommonPasswordSet) -> Self {
        Self { common }
    }

    /// The injected common-password set.
    pub fn common_passwords(&self) -> &CommonPasswordSet {
        &self.common
    }

    /// Evaluates `password` and returns the full assessment.
    ///
    /// Total over any string input: empty, very long and non-ASCII
    /// passwords all produce a well-defined assessment. Sections run in
    /// suggestion order (length, character classes, patterns, leak check);
    /// their deltas are summed and clamped to `0..=100`, while the leak
    /// outcome overrides the score-derived label.
    pub fn evaluate(&self, password: &SecretString) -> PasswordAssessment {
        let mut report = SectionReport::clean();
        report.merge(length_section(password));
        report.merge(variety_section(password));
        report.merge(pattern_section(password));

        let leak = dictionary_section(password, &self.common);
        let leaked = !leak.is_clean();
        report.merge(leak);

        let score = report.delta.clamp(SCORE_MIN, SCORE_MAX) as u8;
        let label = StrengthLabel::from_score(score, leaked);

        #[cfg(feature = "tracing")]
        tracing::debug!("evaluation complete: score {} label {}", score, label);

        let raw = password.expose_secret();
        PasswordAssessment {
            password: SecretString::new(raw.to_string().into()),
            score,
            label,
            color: label.color(),
            crack_time: estimate_crack_time(raw),
            suggestions: report.suggestions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::ColorTag;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    fn evaluator_with(words: &[&str]) -> StrengthEvaluator {
        StrengthEvaluator::new(CommonPasswordSet::from_words(words.iter().copied()))
    }

    fn evaluator() -> StrengthEvaluator {
        evaluator_with(&["password", "123456", "qwerty", "admin"])
    }

    #[test]
    fn test_evaluate_empty_password() {
        let assessment = evaluator().evaluate(&secret(""));

        assert_eq!(assessment.score, 0);
        assert_eq!(assessment.label, StrengthLabel::VeryWeak);
        assert_eq!(assessment.color, ColorTag::Red);
        assert_eq!(assessment.crack_time, "0.00 seconds");
        assert_eq!(assessment.suggestions[0], "Use at least 6 characters.");
        // Length plus the four missing classes
        assert_eq!(assessment.suggestions.len(), 5);
    }

    #[test]
    fn test_evaluate_leaked_password() {
        let assessment = evaluator().evaluate(&secret("password"));

        // +20 length, +15 lowercase, -20 leaked
        assert_eq!(assessment.score, 15);
        assert_eq!(assessment.label, StrengthLabel::Leaked);
        assert_eq!(assessment.color, ColorTag::Red);
        assert_eq!(
            assessment.suggestions,
            vec![
                "Add uppercase letters.",
                "Add numbers.",
                "Add special characters.",
                "This password is too common or has been leaked!",
            ]
        );
    }

    #[test]
    fn test_leak_overrides_high_score() {
        let evaluator = evaluator_with(&["tr0ub4dor&3"]);
        let assessment = evaluator.evaluate(&secret("Tr0ub4dor&3"));

        assert_eq!(assessment.label, StrengthLabel::Leaked);
        assert_eq!(assessment.color, ColorTag::Red);
    }

    #[test]
    fn test_evaluate_mixed_class_password() {
        let assessment = evaluator().evaluate(&secret("Tr0ub4dor&3"));

        // +20 length (11 chars), +60 variety, no patterns, not leaked
        assert_eq!(assessment.score, 80);
        assert_eq!(assessment.label, StrengthLabel::VeryGood);
        assert!(assessment.suggestions.is_empty());
    }

    #[test]
    fn test_evaluate_strong_password() {
        let assessment = evaluator().evaluate(&secret("Xk9#mQ2$vL5&pR8!"));

        // +40 length, +60 variety, clean patterns
        assert_eq!(assessment.score, 100);
        assert_eq!(assessment.label, StrengthLabel::Strong);
        assert_eq!(assessment.color, ColorTag::Lime);
        assert!(assessment.suggestions.is_empty());
    }

    #[test]
    fn test_evaluate_sequence_penalty() {
        let assessment = evaluator().evaluate(&secret("VeryStrongPassword123!@#"));

        // +40 length, +60 variety, -10 for the "123" run
        assert_eq!(assessment.score, 90);
        assert_eq!(assessment.label, StrengthLabel::Strong);
        assert_eq!(
            assessment.suggestions,
            vec!["Avoid sequential characters like abc or 123."]
        );
    }

    #[test]
    fn test_evaluate_clamps_negative_total() {
        let evaluator = evaluator_with(&["abc"]);
        let assessment = evaluator.evaluate(&secret("abc"));

        // +15 lowercase, -10 sequence, -20 leaked: clamped up to zero
        assert_eq!(assessment.score, 0);
        assert_eq!(assessment.label, StrengthLabel::Leaked);
    }

    #[test]
    fn test_score_bounds_hold() {
        let evaluator = evaluator();
        let long = "aB3!".repeat(64);
        let passwords = [
            "",
            "a",
            "aaa",
            "password",
            "abc123",
            "Tr0ub4dor&3",
            "Xk9#mQ2$vL5&pR8!",
            "päss wörd 😀😀😀",
            long.as_str(),
        ];

        for pwd in passwords {
            let assessment = evaluator.evaluate(&secret(pwd));
            assert!(assessment.score <= 100, "score out of bounds for '{pwd}'");
        }
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let evaluator = evaluator();
        let first = evaluator.evaluate(&secret("MyP@ssw0rd!"));
        let second = evaluator.evaluate(&secret("MyP@ssw0rd!"));

        assert_eq!(first.score, second.score);
        assert_eq!(first.label, second.label);
        assert_eq!(first.color, second.color);
        assert_eq!(first.crack_time, second.crack_time);
        assert_eq!(first.suggestions, second.suggestions);
    }

    #[test]
    fn test_password_echoed_unmodified() {
        let assessment = evaluator().evaluate(&secret("QwErTy!  "));
        assert_eq!(assessment.password.expose_secret(), "QwErTy!  ");
    }

    #[test]
    fn test_crack_time_escalates_with_strength() {
        let evaluator = evaluator();

        let weak = evaluator.evaluate(&secret("a"));
        assert!(weak.crack_time.ends_with("seconds"), "got {}", weak.crack_time);

        let strong = evaluator.evaluate(&secret("Xk9#mQ2$vL5&pR8!"));
        assert!(
            strong.crack_time.ends_with("millennia"),
            "got {}",
            strong.crack_time
        );
    }

    #[test]
    fn test_evaluate_without_leak_check() {
        let evaluator = StrengthEvaluator::new(CommonPasswordSet::empty());
        let assessment = evaluator.evaluate(&secret("password"));

        // +20 length, +15 lowercase; no leak penalty without a word list
        assert_eq!(assessment.score, 35);
        assert_eq!(assessment.label, StrengthLabel::Weak);
    }

    #[test]
    fn test_length_bonus_monotonic_same_classes() {
        let evaluator = evaluator();
        // Same single class, no repeated or sequential runs
        let short = evaluator.evaluate(&secret("zxvtrp"));
        let medium = evaluator.evaluate(&secret("zxvtrpnl"));
        let long = evaluator.evaluate(&secret("zxvtrpnljhfd"));

        assert!(short.score <= medium.score);
        assert!(medium.score <= long.score);
    }
}
