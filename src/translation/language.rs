//! Language code validation and supported languages.

use crate::error::TranslateError;
use crate::ui::Style;

/// Supported language codes (ISO 639-1) and their names.
///
/// This is the fixed set the bot accepts anywhere a code appears: command
/// arguments, user defaults, live session targets, and retry corrections.
pub const SUPPORTED_LANGUAGES: &[(&str, &str)] = &[
    ("ar", "Arabic"),
    ("cs", "Czech"),
    ("de", "German"),
    ("en", "English"),
    ("es", "Spanish"),
    ("fi", "Finnish"),
    ("fr", "French"),
    ("hi", "Hindi"),
    ("hu", "Hungarian"),
    ("id", "Indonesian"),
    ("it", "Italian"),
    ("ja", "Japanese"),
    ("ko", "Korean"),
    ("nl", "Dutch"),
    ("pl", "Polish"),
    ("pt", "Portuguese"),
    ("ro", "Romanian"),
    ("ru", "Russian"),
    ("sv", "Swedish"),
    ("th", "Thai"),
    ("tl", "Tagalog"),
    ("tr", "Turkish"),
    ("zh", "Chinese (Simplified)"),
];

/// Returns `true` if the code is in the supported table.
pub fn is_supported(lang: &str) -> bool {
    SUPPORTED_LANGUAGES.iter().any(|(code, _)| *code == lang)
}

/// Returns the display name for a supported code.
pub fn display_name(lang: &str) -> Option<&'static str> {
    SUPPORTED_LANGUAGES
        .iter()
        .find(|(code, _)| *code == lang)
        .map(|(_, name)| *name)
}

/// Validates that the given language code is supported.
///
/// # Errors
///
/// Returns [`TranslateError::UnsupportedLanguage`] if the code is not in the
/// supported table. The check is pure and side-effect-free.
pub fn validate_language(lang: &str) -> Result<(), TranslateError> {
    if is_supported(lang) {
        Ok(())
    } else {
        Err(TranslateError::UnsupportedLanguage(lang.to_string()))
    }
}

/// Parses free text as a single language code, if that is all it contains.
///
/// Used on replies inside error threads: `"de"` (any ASCII case, surrounding
/// whitespace ignored) parses; anything longer is ordinary chat.
pub fn parse_code(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed.contains(char::is_whitespace) {
        return None;
    }
    let code = trimmed.to_ascii_lowercase();
    is_supported(&code).then_some(code)
}

/// Formats the supported table as chat-ready lines.
pub fn format_languages() -> String {
    SUPPORTED_LANGUAGES
        .iter()
        .map(|(code, name)| format!("`{code}`: {name}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Prints all supported language codes to stdout.
pub fn print_languages() {
    println!("{}", Style::header("Supported language codes (ISO 639-1)"));
    for (code, name) in SUPPORTED_LANGUAGES {
        println!("  {:5} {}", Style::code(code), Style::secondary(name));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_language_valid() {
        assert!(validate_language("ja").is_ok());
        assert!(validate_language("en").is_ok());
        assert!(validate_language("zh").is_ok());
    }

    #[test]
    fn test_validate_language_invalid() {
        assert!(matches!(
            validate_language("xx"),
            Err(TranslateError::UnsupportedLanguage(code)) if code == "xx"
        ));
        assert!(validate_language("").is_err());
        assert!(validate_language("JP").is_err()); // Case sensitive
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("de"), Some("German"));
        assert_eq!(display_name("xx"), None);
    }

    #[test]
    fn test_parse_code_accepts_bare_codes() {
        assert_eq!(parse_code("de"), Some("de".to_string()));
        assert_eq!(parse_code("  FR "), Some("fr".to_string()));
    }

    #[test]
    fn test_parse_code_rejects_chat_text() {
        assert_eq!(parse_code("good morning"), None);
        assert_eq!(parse_code("try de please"), None);
        assert_eq!(parse_code("xx"), None);
        assert_eq!(parse_code(""), None);
    }

    #[test]
    fn test_format_languages_lists_every_code() {
        let formatted = format_languages();
        for (code, name) in SUPPORTED_LANGUAGES {
            assert!(formatted.contains(code));
            assert!(formatted.contains(name));
        }
    }
}
