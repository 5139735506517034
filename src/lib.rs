//! Password strength assessment library
//!
//! Turns a password into a structured assessment: a 0-100 score, a
//! qualitative strength label with a paired color tag, a brute-force
//! crack-time estimate and a list of improvement suggestions.
//!
//! # Features
//!
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PASSMETER_WORDLIST_PATH`: Custom path to the common-password word
//!   list (default: `./assets/common-passwords.txt`)
//!
//! # Example
//!
//! ```rust,no_run
//! use passmeter::{CommonPasswordSet, StrengthEvaluator, default_wordlist_path};
//! use secrecy::SecretString;
//!
//! // Load the word list once at startup. A missing or unreadable file
//! // degrades to an empty set and the leak check stays negative.
//! let common = CommonPasswordSet::load_or_empty(default_wordlist_path());
//! let evaluator = StrengthEvaluator::new(common);
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let assessment = evaluator.evaluate(&password);
//!
//! println!("Score: {} / 100", assessment.score);
//! println!("Strength: {} ({})", assessment.label, assessment.color);
//! println!("Crack time: {}", assessment.crack_time);
//! for suggestion in &assessment.suggestions {
//!     println!("- {suggestion}");
//! }
//! ```

// Internal modules
mod assessment;
mod crack_time;
mod dictionary;
mod evaluator;
mod sections;

// Public API
pub use assessment::{ColorTag, PasswordAssessment, StrengthLabel};
pub use crack_time::estimate_crack_time;
pub use dictionary::{default_wordlist_path, CommonPasswordSet, DictionaryError};
pub use evaluator::StrengthEvaluator;
