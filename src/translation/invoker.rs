//! The translation model seam.
//!
//! [`Translator`] is the single boundary between the bot core and the
//! external model. The core never retries a failed call internally; retry is
//! user-driven through the error-thread protocol.

use async_trait::async_trait;

use crate::error::TranslateError;

/// Source language for a translation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Detect the source language before translating.
    Auto,
    /// Translate from this validated code, bypassing detection.
    Code(String),
}

impl Source {
    /// Returns the explicit code, if any.
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Auto => None,
            Self::Code(code) => Some(code),
        }
    }
}

/// A completed translation.
///
/// `source` is the effective source code: the explicit one, or the detected
/// one on the auto path. Callers use it to notice requests whose text is
/// already in the target language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translated {
    pub source: String,
    pub target: String,
    pub text: String,
}

/// Black-box interface to the translation model.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translates `text` into `target`.
    ///
    /// With [`Source::Auto`], detection runs first and an unconfident result
    /// is [`TranslateError::DetectionFailed`]. A pair the model has no path
    /// for is [`TranslateError::UnsupportedPair`]; everything else the model
    /// gets wrong is [`TranslateError::ModelFailure`].
    async fn translate(
        &self,
        text: &str,
        source: Source,
        target: &str,
    ) -> Result<Translated, TranslateError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_code_accessor() {
        assert_eq!(Source::Auto.code(), None);
        assert_eq!(Source::Code("de".to_string()).code(), Some("de"));
    }
}
