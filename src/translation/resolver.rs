//! Language resolution for translation requests.
//!
//! Produces the effective `(source, target)` pair for a request from the
//! explicit arguments, the channel's live session, and the user's stored
//! default. Pure: validation only, no state mutation.

use super::invoker::Source;
use super::language::validate_language;
use crate::error::TranslateError;

/// Effective languages for one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLanguages {
    pub source: Source,
    pub target: String,
}

/// Resolves the language pair for a request.
///
/// Source: an explicit code is validated; none means auto-detect.
/// Target: explicit > live-session target > user default; every candidate is
/// validated; with none available the request fails with
/// [`TranslateError::NoTargetLanguage`].
///
/// A request with both languages explicit never consults the live session or
/// the user default.
pub fn resolve(
    explicit_source: Option<&str>,
    explicit_target: Option<&str>,
    live_target: Option<&str>,
    user_default: Option<&str>,
) -> Result<ResolvedLanguages, TranslateError> {
    let source = match explicit_source {
        Some(code) => {
            validate_language(code)?;
            Source::Code(code.to_string())
        }
        None => Source::Auto,
    };

    let target = explicit_target
        .or(live_target)
        .or(user_default)
        .ok_or(TranslateError::NoTargetLanguage)?;
    validate_language(target)?;

    Ok(ResolvedLanguages {
        source,
        target: target.to_string(),
    })
}
