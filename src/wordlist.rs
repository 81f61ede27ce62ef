use alloc::{collections::BTreeSet, string::String};

use crate::{
    errors::Bip39Error,
    languages::{english, Language, LocaleTable},
};

pub const WORDLIST_LEN: usize = 2048;

/// An ordered list of 2048 words; position `i` encodes word index `i`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wordlist<'a> {
    language: Language,
    words: &'a [&'a str; WORDLIST_LEN],
}

impl Wordlist<'static> {
    pub fn english() -> Self {
        Wordlist {
            language: Language::English,
            words: &english::WORDS,
        }
    }
}

impl<'a> Wordlist<'a> {
    /// Wraps a caller supplied dictionary, rejecting it if any word repeats.
    pub fn new(language: Language, words: &'a [&'a str; WORDLIST_LEN]) -> Result<Self, Bip39Error> {
        let mut seen = BTreeSet::new();
        for (i, word) in words.iter().enumerate() {
            if !seen.insert(*word) {
                return Err(Bip39Error::DuplicateWord(i));
            }
        }
        Ok(Self { language, words })
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn words(&self) -> &'a [&'a str; WORDLIST_LEN] {
        self.words
    }

    pub fn word_at(&self, index: usize) -> Result<&'a str, Bip39Error> {
        self.words
            .get(index)
            .copied()
            .ok_or(Bip39Error::WordIndexOutOfRange(index))
    }
}

/// Source of wordlists keyed by locale code.
pub trait WordlistProvider {
    fn lookup(&self, locale: &str) -> Result<Wordlist<'_>, Bip39Error>;
}

/// The wordlists compiled into this crate, selected through a [`LocaleTable`].
#[derive(Debug, Clone, Default)]
pub struct BundledWordlists {
    locales: LocaleTable,
}

impl BundledWordlists {
    pub fn new(locales: LocaleTable) -> Self {
        Self { locales }
    }

    pub fn language(&self, language: Language) -> Result<Wordlist<'static>, Bip39Error> {
        match language {
            Language::English => Ok(Wordlist::english()),
            other => {
                tracing::warn!(language = %other, "wordlist is not bundled");
                Err(Bip39Error::WordlistUnavailable(other.resource_name()))
            }
        }
    }
}

impl WordlistProvider for BundledWordlists {
    fn lookup(&self, locale: &str) -> Result<Wordlist<'_>, Bip39Error> {
        let Some(language) = self.locales.resolve(locale) else {
            tracing::warn!(locale, "no wordlist mapped for locale");
            return Err(Bip39Error::UnknownLocale(String::from(locale)));
        };
        tracing::debug!(locale, language = %language, "resolved wordlist");
        self.language(language)
    }
}
