//! In-memory configuration tables consumed by the analyzers.
//!
//! Tables are loaded by external collaborators (typically from JSON via
//! serde) and passed into the core already parsed. The core validates only
//! the structural invariants it depends on: non-empty tables and ascending
//! readability boundaries. Full schema validation stays with the loader.
//!
//! Built-in defaults are embedded as constants so the analyzers work out of
//! the box without any resource files on disk.
//!
//! # Examples
//!
//! ```
//! use shrike::config::StopwordTable;
//!
//! let table = StopwordTable::new()
//!     .with_language("en", ["the", "and", "of"])
//!     .with_language("es", ["el", "la", "de"]);
//!
//! assert_eq!(table.len(), 2);
//! assert!(table.get("en").unwrap().contains("the"));
//! ```

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ShrikeError};

/// Default English positive sentiment keywords.
const DEFAULT_POSITIVE_WORDS: &[&str] = &[
    "amazing",
    "awesome",
    "beautiful",
    "best",
    "brilliant",
    "delightful",
    "enjoy",
    "excellent",
    "fantastic",
    "good",
    "great",
    "happy",
    "helpful",
    "impressive",
    "love",
    "nice",
    "outstanding",
    "perfect",
    "pleasant",
    "positive",
    "recommend",
    "reliable",
    "smooth",
    "solid",
    "success",
    "superb",
    "useful",
    "wonderful",
];

/// Default English negative sentiment keywords.
const DEFAULT_NEGATIVE_WORDS: &[&str] = &[
    "annoying",
    "awful",
    "bad",
    "broken",
    "confusing",
    "disappointing",
    "dreadful",
    "fail",
    "failure",
    "hate",
    "horrible",
    "mediocre",
    "mess",
    "negative",
    "painful",
    "poor",
    "problem",
    "sad",
    "slow",
    "terrible",
    "ugly",
    "unreliable",
    "useless",
    "worst",
    "wrong",
];

const DEFAULT_ENGLISH_STOPWORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "from", "has", "have", "if",
    "in", "is", "it", "not", "of", "on", "or", "that", "the", "their", "then", "there", "these",
    "they", "this", "to", "was", "were", "will", "with",
];

const DEFAULT_SPANISH_STOPWORDS: &[&str] = &[
    "con", "de", "del", "el", "ella", "en", "es", "esta", "este", "la", "las", "lo", "los", "mas",
    "no", "para", "pero", "por", "que", "se", "si", "sin", "son", "su", "sus", "un", "una", "y",
];

const DEFAULT_FRENCH_STOPWORDS: &[&str] = &[
    "au", "avec", "ce", "ces", "dans", "de", "des", "du", "elle", "en", "est", "et", "il", "je",
    "la", "le", "les", "mais", "ne", "pas", "pour", "que", "qui", "se", "son", "sur", "un", "une",
];

const DEFAULT_GERMAN_STOPWORDS: &[&str] = &[
    "auch", "auf", "aus", "das", "dem", "den", "der", "des", "die", "ein", "eine", "er", "es",
    "ist", "mit", "nicht", "sich", "sie", "sind", "und", "von", "wie", "zu",
];

const DEFAULT_ITALIAN_STOPWORDS: &[&str] = &[
    "che", "con", "da", "dei", "del", "della", "di", "e", "gli", "il", "in", "la", "le", "lo",
    "ma", "non", "per", "piu", "si", "sono", "un", "una", "uno",
];

const DEFAULT_PORTUGUESE_STOPWORDS: &[&str] = &[
    "ao", "as", "com", "da", "das", "de", "do", "dos", "e", "em", "mais", "mas", "nao", "no",
    "os", "ou", "para", "por", "que", "se", "sem", "um", "uma",
];

/// Positive/negative keyword sets used by the sentiment analyzer.
///
/// The table is read-only for the lifetime of a run; the analyzers never
/// mutate it.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SentimentLexicon {
    /// Words counted as positive hits.
    pub positive: AHashSet<String>,
    /// Words counted as negative hits.
    pub negative: AHashSet<String>,
}

impl SentimentLexicon {
    /// Create a lexicon from explicit word lists.
    pub fn from_words<I, J, S, T>(positive: I, negative: J) -> Self
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = T>,
        S: Into<String>,
        T: Into<String>,
    {
        SentimentLexicon {
            positive: positive.into_iter().map(|s| s.into()).collect(),
            negative: negative.into_iter().map(|s| s.into()).collect(),
        }
    }

    /// The built-in English lexicon.
    pub fn english() -> Self {
        Self::from_words(
            DEFAULT_POSITIVE_WORDS.iter().copied(),
            DEFAULT_NEGATIVE_WORDS.iter().copied(),
        )
    }

    /// Check that at least one class has keywords.
    pub fn validate(&self) -> Result<()> {
        if self.positive.is_empty() && self.negative.is_empty() {
            return Err(ShrikeError::configuration(
                "sentiment lexicon has no keywords",
            ));
        }
        Ok(())
    }
}

/// Stopword set for a single language.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LanguageStopwords {
    /// Language code, e.g. "en".
    pub code: String,
    /// The stopword set.
    pub words: AHashSet<String>,
}

/// Ordered mapping from language code to stopword set.
///
/// Declaration order doubles as the tie-break priority for language
/// detection, so the table is a list rather than a map.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StopwordTable {
    entries: Vec<LanguageStopwords>,
}

impl StopwordTable {
    /// Create an empty table.
    pub fn new() -> Self {
        StopwordTable::default()
    }

    /// Append a language to the table. Appending an existing code replaces
    /// its word set but keeps its original priority position.
    pub fn with_language<I, S>(mut self, code: &str, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: AHashSet<String> = words.into_iter().map(|s| s.into()).collect();
        if let Some(entry) = self.entries.iter_mut().find(|e| e.code == code) {
            entry.words = words;
        } else {
            self.entries.push(LanguageStopwords {
                code: code.to_string(),
                words,
            });
        }
        self
    }

    /// The built-in six-language table (en, es, fr, de, it, pt), in that
    /// priority order.
    pub fn builtin() -> Self {
        StopwordTable::new()
            .with_language("en", DEFAULT_ENGLISH_STOPWORDS.iter().copied())
            .with_language("es", DEFAULT_SPANISH_STOPWORDS.iter().copied())
            .with_language("fr", DEFAULT_FRENCH_STOPWORDS.iter().copied())
            .with_language("de", DEFAULT_GERMAN_STOPWORDS.iter().copied())
            .with_language("it", DEFAULT_ITALIAN_STOPWORDS.iter().copied())
            .with_language("pt", DEFAULT_PORTUGUESE_STOPWORDS.iter().copied())
    }

    /// Get the stopword set for a language code.
    pub fn get(&self, code: &str) -> Option<&AHashSet<String>> {
        self.entries
            .iter()
            .find(|e| e.code == code)
            .map(|e| &e.words)
    }

    /// Iterate over (code, words) in priority order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AHashSet<String>)> {
        self.entries.iter().map(|e| (e.code.as_str(), &e.words))
    }

    /// Number of configured languages.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no languages are configured.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check that at least one language with a non-empty word set exists.
    pub fn validate(&self) -> Result<()> {
        if self.entries.iter().all(|e| e.words.is_empty()) {
            return Err(ShrikeError::configuration(
                "stopword table has no usable language entries",
            ));
        }
        Ok(())
    }
}

/// A single readability band: scores up to and including `upper` map to
/// `label`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReadabilityBand {
    /// Inclusive upper bound for this band.
    pub upper: f64,
    /// Category label, e.g. "easy".
    pub label: String,
}

/// Ordered readability thresholds plus sentence segmentation settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ReadabilityConfig {
    /// Ascending score boundaries. The first band whose `upper` is >= the
    /// computed score determines the category.
    pub boundaries: Vec<ReadabilityBand>,
    /// Label for scores above the highest boundary.
    pub catch_all: String,
    /// Characters treated as sentence terminators in the raw text.
    pub sentence_terminators: Vec<char>,
}

impl ReadabilityConfig {
    /// Create a config from (upper bound, label) pairs and a catch-all
    /// label, validating that boundaries are non-empty and ascending.
    pub fn new<S: Into<String>>(boundaries: Vec<(f64, S)>, catch_all: S) -> Result<Self> {
        let config = ReadabilityConfig {
            boundaries: boundaries
                .into_iter()
                .map(|(upper, label)| ReadabilityBand {
                    upper,
                    label: label.into(),
                })
                .collect(),
            catch_all: catch_all.into(),
            sentence_terminators: vec!['.', '!', '?'],
        };
        config.validate()?;
        Ok(config)
    }

    /// Replace the sentence terminator set.
    pub fn with_sentence_terminators(mut self, terminators: Vec<char>) -> Self {
        self.sentence_terminators = terminators;
        self
    }

    /// The built-in low/medium/high banding.
    pub fn builtin() -> Self {
        ReadabilityConfig {
            boundaries: vec![
                ReadabilityBand {
                    upper: 16.0,
                    label: "low".to_string(),
                },
                ReadabilityBand {
                    upper: 24.0,
                    label: "medium".to_string(),
                },
            ],
            catch_all: "high".to_string(),
            sentence_terminators: vec!['.', '!', '?'],
        }
    }

    /// Check structural invariants: non-empty boundary list, strictly
    /// ascending bounds, non-empty terminator set.
    pub fn validate(&self) -> Result<()> {
        if self.boundaries.is_empty() {
            return Err(ShrikeError::configuration(
                "readability config has no boundaries",
            ));
        }
        for pair in self.boundaries.windows(2) {
            if pair[1].upper <= pair[0].upper {
                return Err(ShrikeError::configuration(format!(
                    "readability boundaries must be ascending: {} followed by {}",
                    pair[0].upper, pair[1].upper
                )));
            }
        }
        if self.sentence_terminators.is_empty() {
            return Err(ShrikeError::configuration(
                "readability config has no sentence terminators",
            ));
        }
        Ok(())
    }
}

impl Default for ReadabilityConfig {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Bundle of all analyzer configuration, passed to [`AnalyzerRunner`].
///
/// [`AnalyzerRunner`]: crate::analyze::AnalyzerRunner
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Sentiment keyword sets.
    pub sentiment: SentimentLexicon,
    /// Stopword table for language detection.
    pub stopwords: StopwordTable,
    /// Readability banding.
    pub readability: ReadabilityConfig,
    /// How many top tokens the frequency analyzer reports.
    pub top_n: usize,
    /// Minimum confidence below which language detection reports "unknown".
    pub min_language_confidence: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            sentiment: SentimentLexicon::english(),
            stopwords: StopwordTable::builtin(),
            readability: ReadabilityConfig::builtin(),
            top_n: 10,
            min_language_confidence: 0.1,
        }
    }
}

impl AnalysisConfig {
    /// Validate every table the analyzers depend on.
    pub fn validate(&self) -> Result<()> {
        self.sentiment.validate()?;
        self.stopwords.validate()?;
        self.readability.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_validate() {
        AnalysisConfig::default().validate().unwrap();
    }

    #[test]
    fn test_stopword_table_priority_order() {
        let table = StopwordTable::builtin();
        let codes: Vec<&str> = table.iter().map(|(code, _)| code).collect();
        assert_eq!(codes, vec!["en", "es", "fr", "de", "it", "pt"]);
    }

    #[test]
    fn test_stopword_table_replace_keeps_position() {
        let table = StopwordTable::new()
            .with_language("en", ["the"])
            .with_language("es", ["el"])
            .with_language("en", ["a", "an"]);

        let codes: Vec<&str> = table.iter().map(|(code, _)| code).collect();
        assert_eq!(codes, vec!["en", "es"]);
        assert_eq!(table.get("en").unwrap().len(), 2);
    }

    #[test]
    fn test_readability_rejects_unordered_boundaries() {
        let result = ReadabilityConfig::new(vec![(20.0, "medium"), (10.0, "easy")], "hard");
        assert!(result.is_err());
    }

    #[test]
    fn test_readability_rejects_empty_boundaries() {
        let result = ReadabilityConfig::new(Vec::<(f64, &str)>::new(), "hard");
        assert!(result.is_err());
    }

    #[test]
    fn test_sentiment_lexicon_from_json() {
        let json = r#"{"positive": ["good"], "negative": ["bad"]}"#;
        let lexicon: SentimentLexicon = serde_json::from_str(json).unwrap();
        assert!(lexicon.positive.contains("good"));
        assert!(lexicon.negative.contains("bad"));
        lexicon.validate().unwrap();
    }

    #[test]
    fn test_stopword_table_from_json_preserves_order() {
        let json = r#"[
            {"code": "fr", "words": ["le", "la"]},
            {"code": "en", "words": ["the"]}
        ]"#;
        let table: StopwordTable = serde_json::from_str(json).unwrap();
        let codes: Vec<&str> = table.iter().map(|(code, _)| code).collect();
        assert_eq!(codes, vec!["fr", "en"]);
    }
}
