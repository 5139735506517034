//! Assessment output types.

use std::fmt;

use secrecy::SecretString;

/// Qualitative strength level, derived from the clamped score and the
/// leak-check outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StrengthLabel {
    /// The password appears in the common-password set.
    Leaked,
    VeryWeak,
    Weak,
    Good,
    VeryGood,
    Strong,
}

impl StrengthLabel {
    /// Derives the label from a clamped score. Leak status takes precedence
    /// over every score bucket.
    ///
    /// Buckets are half-open and lower-inclusive: `< 30` Very Weak, `< 50`
    /// Weak, `< 70` Good, `< 90` Very Good, else Strong.
    pub fn from_score(score: u8, leaked: bool) -> Self {
        if leaked {
            StrengthLabel::Leaked
        } else if score < 30 {
            StrengthLabel::VeryWeak
        } else if score < 50 {
            StrengthLabel::Weak
        } else if score < 70 {
            StrengthLabel::Good
        } else if score < 90 {
            StrengthLabel::VeryGood
        } else {
            StrengthLabel::Strong
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthLabel::Leaked => "leaked",
            StrengthLabel::VeryWeak => "Very Weak",
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Good => "Good",
            StrengthLabel::VeryGood => "Very Good",
            StrengthLabel::Strong => "Strong",
        }
    }

    /// The color tag paired with this label.
    pub fn color(&self) -> ColorTag {
        match self {
            StrengthLabel::Leaked | StrengthLabel::VeryWeak => ColorTag::Red,
            StrengthLabel::Weak => ColorTag::Orange,
            StrengthLabel::Good => ColorTag::Yellow,
            StrengthLabel::VeryGood => ColorTag::LightGreen,
            StrengthLabel::Strong => ColorTag::Lime,
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Symbolic color for rendering a [`StrengthLabel`]. Consumers map these to
/// whatever their UI toolkit understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorTag {
    Red,
    Orange,
    Yellow,
    LightGreen,
    Lime,
}

impl ColorTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorTag::Red => "red",
            ColorTag::Orange => "orange",
            ColorTag::Yellow => "yellow",
            ColorTag::LightGreen => "lightgreen",
            ColorTag::Lime => "lime",
        }
    }
}

impl fmt::Display for ColorTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Full result of evaluating a single password.
#[derive(Debug)]
pub struct PasswordAssessment {
    /// The input, echoed back unmodified. Stays a [`SecretString`] so debug
    /// output remains redacted.
    pub password: SecretString,
    /// Clamped to `0..=100`.
    pub score: u8,
    pub label: StrengthLabel,
    /// Always `label.color()`.
    pub color: ColorTag,
    /// Human-readable magnitude plus unit, e.g. `"3.21 years"`.
    pub crack_time: String,
    /// Improvement hints in check order (length, character classes,
    /// patterns, leak check), not severity order. Empty means nothing to
    /// improve.
    pub suggestions: Vec<String>,
}
