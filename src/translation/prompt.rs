pub const TRANSLATE_PROMPT_TEMPLATE: &str = "You are a translator. Translate the following text from {source_language} to {target_language}. \
     Output only the translated text without any explanations. \
     Preserve the original formatting including blank lines and whitespace.";

pub const DETECT_PROMPT: &str = "Identify the language of the following text. \
     Reply with only the ISO 639-1 code (for example 'en' or 'ja'). \
     If you cannot identify the language confidently, reply with 'und'.";

#[allow(clippy::literal_string_with_formatting_args)]
pub fn build_translate_prompt(source_language: &str, target_language: &str) -> String {
    // {source_language}/{target_language} are placeholders for string
    // replacement, not format arguments
    TRANSLATE_PROMPT_TEMPLATE
        .replace("{source_language}", source_language)
        .replace("{target_language}", target_language)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_translate_prompt() {
        let prompt = build_translate_prompt("German", "Japanese");
        assert!(prompt.contains("German"));
        assert!(prompt.contains("Japanese"));
        assert!(prompt.contains("Translate the following text"));
    }

    #[test]
    fn test_translate_prompt_template_has_placeholders() {
        assert!(TRANSLATE_PROMPT_TEMPLATE.contains("{source_language}"));
        assert!(TRANSLATE_PROMPT_TEMPLATE.contains("{target_language}"));
    }

    #[test]
    fn test_detect_prompt_requests_bare_code() {
        assert!(DETECT_PROMPT.contains("ISO 639-1"));
        assert!(DETECT_PROMPT.contains("und"));
    }
}
