//! BIP39 wordlist languages and the table mapping locale codes onto them.

use alloc::{collections::BTreeMap, string::String};
use core::fmt;

pub mod english;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Language {
    English,
    Spanish,
    Japanese,
    Italian,
    ChineseSimplified,
    ChineseTraditional,
    Korean,
    French,
}

impl Language {
    pub const ALL: [Language; 8] = [
        Language::English,
        Language::Spanish,
        Language::Japanese,
        Language::Italian,
        Language::ChineseSimplified,
        Language::ChineseTraditional,
        Language::Korean,
        Language::French,
    ];

    /// Name of the wordlist resource for this language, as the BIP39
    /// reference repository names its files.
    pub const fn resource_name(self) -> &'static str {
        match self {
            Language::English => "english",
            Language::Spanish => "spanish",
            Language::Japanese => "japanese",
            Language::Italian => "italian",
            Language::ChineseSimplified => "chinese_simplified",
            Language::ChineseTraditional => "chinese_traditional",
            Language::Korean => "korean",
            Language::French => "french",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.resource_name())
    }
}

/// Locale code to [`Language`] lookup table.
///
/// Codes are matched case-insensitively with `_` read as `-`. A tag with
/// subtags falls back to shorter prefixes, so `zh-Hant-TW` tries `zh-hant-tw`,
/// then `zh-hant`, then `zh`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleTable {
    entries: BTreeMap<String, Language>,
}

impl LocaleTable {
    /// Creates a table with no entries.
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Adds or replaces the mapping for `code`.
    pub fn with(mut self, code: &str, language: Language) -> Self {
        self.entries.insert(normalize_tag(code), language);
        self
    }

    pub fn resolve(&self, locale: &str) -> Option<Language> {
        let mut tag = normalize_tag(locale);
        loop {
            if let Some(language) = self.entries.get(&tag) {
                return Some(*language);
            }
            let cut = tag.rfind('-')?;
            tag.truncate(cut);
        }
    }
}

impl Default for LocaleTable {
    fn default() -> Self {
        Self::empty()
            .with("en", Language::English)
            .with("es", Language::Spanish)
            .with("ja", Language::Japanese)
            .with("jp", Language::Japanese)
            .with("it", Language::Italian)
            .with("zh", Language::ChineseSimplified)
            .with("zh-Hans", Language::ChineseSimplified)
            .with("zh-Hant", Language::ChineseTraditional)
            .with("ko", Language::Korean)
            .with("fr", Language::French)
    }
}

fn normalize_tag(code: &str) -> String {
    code.trim().replace('_', "-").to_ascii_lowercase()
}

#[cfg(test)]
mod tests_languages {
    use super::*;
    use alloc::{string::ToString, vec::Vec};

    #[test]
    fn test_resource_names_are_distinct() {
        let mut names: Vec<_> = Language::ALL.iter().map(|l| l.resource_name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Language::ALL.len());
        assert_eq!(Language::ChineseTraditional.to_string(), "chinese_traditional");
    }

    #[test]
    fn test_default_table() {
        let table = LocaleTable::default();
        assert_eq!(table.resolve("en"), Some(Language::English));
        assert_eq!(table.resolve("es"), Some(Language::Spanish));
        assert_eq!(table.resolve("ja"), Some(Language::Japanese));
        assert_eq!(table.resolve("jp"), Some(Language::Japanese));
        assert_eq!(table.resolve("it"), Some(Language::Italian));
        assert_eq!(table.resolve("ko"), Some(Language::Korean));
        assert_eq!(table.resolve("fr"), Some(Language::French));
        assert_eq!(table.resolve("zh"), Some(Language::ChineseSimplified));
        assert_eq!(table.resolve("zh-Hans"), Some(Language::ChineseSimplified));
        assert_eq!(table.resolve("zh-Hant"), Some(Language::ChineseTraditional));
    }

    #[test]
    fn test_resolve_falls_back_to_shorter_tags() {
        let table = LocaleTable::default();
        assert_eq!(table.resolve("en-US"), Some(Language::English));
        assert_eq!(table.resolve("en_GB"), Some(Language::English));
        assert_eq!(table.resolve("zh-Hant-TW"), Some(Language::ChineseTraditional));
        assert_eq!(table.resolve("zh-CN"), Some(Language::ChineseSimplified));
        assert_eq!(table.resolve("FR-ca"), Some(Language::French));
    }

    #[test]
    fn test_resolve_unknown() {
        let table = LocaleTable::default();
        assert_eq!(table.resolve("de"), None);
        assert_eq!(table.resolve("de-DE"), None);
        assert_eq!(table.resolve(""), None);
        assert_eq!(LocaleTable::empty().resolve("en"), None);
    }

    #[test]
    fn test_with_overrides() {
        let table = LocaleTable::default().with("pt-BR", Language::Spanish);
        assert_eq!(table.resolve("pt-br"), Some(Language::Spanish));
        assert_eq!(table.resolve("pt"), None);

        let table = table.with("en", Language::French);
        assert_eq!(table.resolve("en-US"), Some(Language::French));
    }

    #[test]
    fn test_english_wordlist_shape() {
        assert_eq!(english::WORDS.len(), 2048);
        assert_eq!(english::WORDS[0], "abandon");
        assert_eq!(english::WORDS[3], "about");
        assert_eq!(english::WORDS[2047], "zoo");
        assert!(english::WORDS.windows(2).all(|pair| pair[0] < pair[1]));
    }
}
