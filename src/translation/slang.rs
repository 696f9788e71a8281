//! Slang substitution layer.
//!
//! Rewrites recognized slang tokens to their canonical-language phrases
//! before translation (so the model sees canonical text) and back after
//! translation (so the result reads naturally in the target language).
//!
//! Matching is longest-match, ASCII-case-insensitive, and bounded by word
//! boundaries. A language without a table is a no-op pass-through.

use std::collections::HashMap;

/// Substitution direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// slang -> canonical phrase, applied before translation.
    Inbound,
    /// canonical phrase -> slang, applied after translation.
    Outbound,
}

/// A built-in slang entry: `(slang, canonical)`.
type BuiltinEntry = (&'static str, &'static str);

/// Built-in per-language tables. Config `[slang.<lang>]` entries are merged
/// on top and win on conflicts.
pub const BUILTIN_SLANG: &[(&str, &[BuiltinEntry])] = &[
    (
        "en",
        &[
            ("brb", "be right back"),
            ("btw", "by the way"),
            ("idk", "I do not know"),
            ("imo", "in my opinion"),
            ("gonna", "going to"),
            ("wanna", "want to"),
            ("lol", "that is funny"),
            ("thx", "thanks"),
        ],
    ),
    (
        "es",
        &[
            ("pq", "porque"),
            ("tqm", "te quiero mucho"),
            ("finde", "fin de semana"),
        ],
    ),
    (
        "fr",
        &[
            ("bcp", "beaucoup"),
            ("stp", "s'il te plait"),
            ("mdr", "c'est très drôle"),
        ],
    ),
    (
        "de",
        &[("kp", "kein Problem"), ("vllt", "vielleicht")],
    ),
];

/// One language's substitution table.
#[derive(Debug, Clone, Default)]
pub struct SlangTable {
    /// `(slang, canonical)` pairs, longest slang form first.
    entries: Vec<(String, String)>,
}

impl SlangTable {
    fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        // An empty form can never match anything; drop it here so the
        // matcher can assume every pattern advances the scan.
        let mut entries: Vec<(String, String)> = pairs
            .into_iter()
            .filter(|(slang, canonical)| !slang.is_empty() && !canonical.is_empty())
            .collect();
        entries.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(&b.0)));
        Self { entries }
    }

    fn apply(&self, text: &str, direction: Direction) -> String {
        let patterns: Vec<(&str, &str)> = match direction {
            Direction::Inbound => self
                .entries
                .iter()
                .map(|(slang, canonical)| (slang.as_str(), canonical.as_str()))
                .collect(),
            Direction::Outbound => {
                let mut pairs: Vec<(&str, &str)> = self
                    .entries
                    .iter()
                    .map(|(slang, canonical)| (canonical.as_str(), slang.as_str()))
                    .collect();
                pairs.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(&b.0)));
                pairs
            }
        };

        replace_phrases(text, &patterns)
    }
}

/// Longest-match phrase replacement at word boundaries.
///
/// `patterns` must be sorted longest pattern first so that "be right back"
/// wins over "be right".
fn replace_phrases(text: &str, patterns: &[(&str, &str)]) -> String {
    let mut output = String::with_capacity(text.len());
    let mut i = 0;

    while i < text.len() {
        let matched = at_word_start(text, i)
            .then(|| {
                patterns.iter().find_map(|(pattern, replacement)| {
                    matches_at(text, i, pattern).then_some((pattern.len(), *replacement))
                })
            })
            .flatten();

        if let Some((len, replacement)) = matched {
            output.push_str(replacement);
            i += len;
        } else {
            let ch = text[i..].chars().next().unwrap_or('\u{fffd}');
            output.push(ch);
            i += ch.len_utf8();
        }
    }

    output
}

fn at_word_start(text: &str, i: usize) -> bool {
    text[..i]
        .chars()
        .next_back()
        .is_none_or(|c| !c.is_alphanumeric())
}

fn matches_at(text: &str, i: usize, pattern: &str) -> bool {
    let end = i + pattern.len();
    let Some(candidate) = text.get(i..end) else {
        return false;
    };
    if !candidate.eq_ignore_ascii_case(pattern) {
        return false;
    }
    // Right boundary: the match may not run into a word.
    text[end..].chars().next().is_none_or(|c| !c.is_alphanumeric())
}

/// All per-language slang tables, loaded once at startup and shared
/// read-only across handlers.
#[derive(Debug, Clone, Default)]
pub struct SlangBook {
    tables: HashMap<String, SlangTable>,
}

impl SlangBook {
    /// Builds the book from the built-in tables plus config extras; config
    /// entries override built-ins with the same slang form.
    pub fn load(extra: &HashMap<String, HashMap<String, String>>) -> Self {
        let mut tables = HashMap::new();

        for (lang, entries) in BUILTIN_SLANG {
            let mut merged: HashMap<String, String> = entries
                .iter()
                .map(|(slang, canonical)| ((*slang).to_string(), (*canonical).to_string()))
                .collect();
            if let Some(overrides) = extra.get(*lang) {
                merged.extend(overrides.clone());
            }
            tables.insert((*lang).to_string(), SlangTable::from_pairs(merged));
        }

        for (lang, entries) in extra {
            tables
                .entry(lang.clone())
                .or_insert_with(|| SlangTable::from_pairs(entries.clone()));
        }

        Self { tables }
    }

    /// Returns the languages that have a table, sorted.
    pub fn languages(&self) -> Vec<&str> {
        let mut langs: Vec<&str> = self.tables.keys().map(String::as_str).collect();
        langs.sort_unstable();
        langs
    }

    /// Returns a language's `(slang, canonical)` pairs, longest first.
    pub fn entries(&self, lang: &str) -> &[(String, String)] {
        self.tables
            .get(lang)
            .map_or(&[], |table| table.entries.as_slice())
    }

    /// Applies substitution for `lang` in the given direction.
    ///
    /// A language without a table returns the text unchanged. Idempotent on
    /// text containing no recognized terms.
    pub fn apply(&self, text: &str, lang: &str, direction: Direction) -> String {
        self.tables
            .get(lang)
            .map_or_else(|| text.to_string(), |table| table.apply(text, direction))
    }
}
