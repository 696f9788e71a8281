//! Translation error taxonomy.
//!
//! Validation errors (`UnsupportedLanguage`, `NoTargetLanguage`, `NotActive`)
//! are answered directly to the requester and never open an error thread.
//! Model-class errors (`DetectionFailed`, `ModelFailure`, `UnsupportedPair`)
//! are the ones a source-language correction can plausibly fix, so they are
//! the only ones that enter the retry-via-reply protocol.

use thiserror::Error;

/// Failures produced by the translation pipeline.
///
/// `Display` messages are user-facing: they are posted verbatim as chat
/// replies and error reports.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    /// A language code outside the supported table was supplied.
    #[error(
        "Unknown language code '{0}'. Run the languages command to see all supported codes."
    )]
    UnsupportedLanguage(String),

    /// No explicit target, no live session, and no stored user default.
    #[error(
        "No target language. Set a default with the setlanguage command or pass a target explicitly."
    )]
    NoTargetLanguage,

    /// The model could not confidently identify the source language.
    #[error("Could not detect the language of the text.")]
    DetectionFailed,

    /// The model errored or returned empty output.
    #[error("The translation model failed: {0}")]
    ModelFailure(String),

    /// The model has no path for the requested language pair.
    #[error("No translation path for {source_lang} -> {target}.")]
    UnsupportedPair { source_lang: String, target: String },

    /// Stop requested for a channel with no live session.
    #[error("Live translation is not active in this channel.")]
    NotActive,
}

impl TranslateError {
    /// Whether this failure enters the retry-via-reply protocol.
    ///
    /// Validation errors are answered inline instead; a corrected source
    /// language could not fix them.
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::DetectionFailed | Self::ModelFailure(_) | Self::UnsupportedPair { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_class_errors_are_retryable() {
        assert!(TranslateError::DetectionFailed.is_retryable());
        assert!(TranslateError::ModelFailure("boom".to_string()).is_retryable());
        assert!(
            TranslateError::UnsupportedPair {
                source_lang: "so".to_string(),
                target: "en".to_string(),
            }
            .is_retryable()
        );
    }

    #[test]
    fn test_validation_errors_are_not_retryable() {
        assert!(!TranslateError::UnsupportedLanguage("xx".to_string()).is_retryable());
        assert!(!TranslateError::NoTargetLanguage.is_retryable());
        assert!(!TranslateError::NotActive.is_retryable());
    }

    #[test]
    fn test_unsupported_pair_display_names_both_codes() {
        let err = TranslateError::UnsupportedPair {
            source_lang: "so".to_string(),
            target: "en".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("so"));
        assert!(msg.contains("en"));
    }
}
