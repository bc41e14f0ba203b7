//! Text normalization: lower-casing, character filtering, stopword removal and stemming

use rust_stemmers::{Algorithm, Stemmer};
use std::collections::HashSet;
use std::ops::Deref;

/// Punctuation kept inside tokens so that `c++`, `c#` and `node.js` survive
const KEPT_PUNCTUATION: &[char] = &['-', '/', '+', '#', '.', '@', '_', '(', ')'];

/// Ordered, stemmed tokens of one document. Duplicates are preserved.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TokenSequence(Vec<String>);

impl TokenSequence {
    pub fn into_inner(self) -> Vec<String> {
        self.0
    }

    /// Number of positions where `phrase` appears as consecutive tokens
    pub fn count_phrase(&self, phrase: &[String]) -> usize {
        if phrase.is_empty() || phrase.len() > self.0.len() {
            return 0;
        }
        self.0.windows(phrase.len()).filter(|w| *w == phrase).count()
    }
}

impl Deref for TokenSequence {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<String>> for TokenSequence {
    fn from(tokens: Vec<String>) -> Self {
        Self(tokens)
    }
}

pub struct TextPreprocessor {
    stop_words: HashSet<&'static str>,
    stemmer: Stemmer,
}

impl Default for TextPreprocessor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextPreprocessor {
    pub fn new() -> Self {
        Self {
            stop_words: Self::create_stop_words(),
            stemmer: Stemmer::create(Algorithm::English),
        }
    }

    /// Normalize raw text into a stemmed token sequence
    pub fn preprocess(&self, text: &str) -> TokenSequence {
        let cleaned = Self::clean_text(text);

        let tokens = cleaned
            .split_whitespace()
            .filter(|word| !self.stop_words.contains(*word))
            .map(|word| self.stemmer.stem(word).into_owned())
            .collect();

        TokenSequence(tokens)
    }

    /// Stem a multi-word phrase the same way document tokens are stemmed
    pub fn stem_phrase(&self, phrase: &str) -> Vec<String> {
        self.preprocess(phrase).into_inner()
    }

    /// Lower-case and replace disallowed characters with spaces
    pub fn clean_text(text: &str) -> String {
        text.to_lowercase()
            .chars()
            .map(|c| {
                if c.is_alphanumeric() || c.is_whitespace() || KEPT_PUNCTUATION.contains(&c) {
                    c
                } else {
                    ' '
                }
            })
            .collect()
    }

    /// Standard English stopword list (NLTK corpus)
    fn create_stop_words() -> HashSet<&'static str> {
        [
            "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're",
            "you've", "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him",
            "his", "himself", "she", "she's", "her", "hers", "herself", "it", "it's", "its",
            "itself", "they", "them", "their", "theirs", "themselves", "what", "which", "who",
            "whom", "this", "that", "that'll", "these", "those", "am", "is", "are", "was", "were",
            "be", "been", "being", "have", "has", "had", "having", "do", "does", "did", "doing",
            "a", "an", "the", "and", "but", "if", "or", "because", "as", "until", "while", "of",
            "at", "by", "for", "with", "about", "against", "between", "into", "through", "during",
            "before", "after", "above", "below", "to", "from", "up", "down", "in", "out", "on",
            "off", "over", "under", "again", "further", "then", "once", "here", "there", "when",
            "where", "why", "how", "all", "any", "both", "each", "few", "more", "most", "other",
            "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than", "too", "very",
            "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now", "d",
            "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't",
            "didn", "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven",
            "haven't", "isn", "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn",
            "needn't", "shan", "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren",
            "weren't", "won", "won't", "wouldn", "wouldn't",
        ]
        .into_iter()
        .collect()
    }
}
