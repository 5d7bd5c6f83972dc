use super::{DependencyRole, LinguisticAnalyzer, ParsedSentence};
use crate::error::{RadstructError, Result};
use regex::Regex;
use std::sync::OnceLock;

/// Longest document accepted by default, in characters
pub const DEFAULT_MAX_CHARS: usize = 1_000_000;

/// Verbs and copulas that head a clause in short radiology captions
const CLAUSE_HEADS: &[&str] = &[
    "is",
    "are",
    "was",
    "were",
    "be",
    "been",
    "seen",
    "noted",
    "identified",
    "shows",
    "show",
    "demonstrates",
    "demonstrated",
    "appears",
    "appear",
    "remains",
    "remain",
    "suggests",
    "suggest",
    "has",
    "have",
];

const DETERMINERS: &[&str] = &["the", "a", "an", "this", "these", "that", "those"];
const NEGATIONS: &[&str] = &["no", "not", "without", "none", "neither", "nor"];
const AUXILIARIES: &[&str] = &["is", "are", "was", "were", "be", "been", "has", "have", "had"];

/// Deterministic sentence splitter and shallow dependency parser
///
/// Sentences end at a run of `.`, `!` or `?` followed by whitespace (or the
/// end of the text), and at line breaks. Each sentence gets a flat parse: the
/// first clause-heading verb (or else the first word) is the ROOT and every
/// other token depends on it, so the ROOT subtree spans the sentence in order.
///
/// # Example
///
/// ```
/// use radstruct_core::{LinguisticAnalyzer, RuleBasedAnalyzer};
///
/// let sentences = RuleBasedAnalyzer::default()
///     .analyze("No pneumothorax is seen. Lungs are clear.")
///     .unwrap();
///
/// assert_eq!(sentences.len(), 2);
/// assert_eq!(sentences[0].text(), "No pneumothorax is seen.");
/// assert_eq!(sentences[0].roots(), vec![2]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleBasedAnalyzer {
    max_chars: usize,
}

impl Default for RuleBasedAnalyzer {
    fn default() -> Self {
        Self {
            max_chars: DEFAULT_MAX_CHARS,
        }
    }
}

impl RuleBasedAnalyzer {
    /// Sets the longest accepted document, in characters
    pub fn with_max_chars(mut self, max_chars: usize) -> Self {
        self.max_chars = max_chars;
        self
    }

    /// Returns the longest accepted document, in characters
    pub fn max_chars(&self) -> usize {
        self.max_chars
    }

    fn parse_sentence(&self, text: &str) -> Result<ParsedSentence> {
        let words = tokenize(text);
        let root = find_root(&words);

        let entries = words
            .iter()
            .enumerate()
            .map(|(i, word)| {
                if Some(i) == root {
                    (*word, DependencyRole::Root, None)
                } else {
                    (*word, guess_role(word), root)
                }
            })
            .collect();

        ParsedSentence::from_heads(text, entries)
    }
}

impl LinguisticAnalyzer for RuleBasedAnalyzer {
    fn analyze(&self, text: &str) -> Result<Vec<ParsedSentence>> {
        let length = text.chars().count();
        if length > self.max_chars {
            return Err(RadstructError::AnalyzerFailure(format!(
                "text of {} characters exceeds maximum length of {}",
                length, self.max_chars
            )));
        }

        split_sentences(text)
            .into_iter()
            .map(|sentence| self.parse_sentence(sentence))
            .collect()
    }
}

/// Splits text into trimmed, non-empty sentences
fn split_sentences(text: &str) -> Vec<&str> {
    static BOUNDARY: OnceLock<Regex> = OnceLock::new();
    let re = BOUNDARY.get_or_init(|| {
        Regex::new(r"[.!?]+(?:\s+|$)|\n+").expect("Failed to compile regex")
    });

    let mut sentences = Vec::new();
    let mut start = 0;
    for boundary in re.find_iter(text) {
        sentences.push(&text[start..boundary.end()]);
        start = boundary.end();
    }
    sentences.push(&text[start..]);

    sentences
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Splits a sentence into words, decimal numbers and punctuation marks
fn tokenize(sentence: &str) -> Vec<&str> {
    static TOKEN: OnceLock<Regex> = OnceLock::new();
    let re = TOKEN.get_or_init(|| {
        Regex::new(r"\p{N}+(?:[.,]\p{N}+)+|[\p{L}\p{N}]+(?:['\-][\p{L}\p{N}]+)*|[^\s\p{L}\p{N}]")
            .expect("Failed to compile regex")
    });

    re.find_iter(sentence).map(|m| m.as_str()).collect()
}

fn is_word(token: &str) -> bool {
    token.chars().any(char::is_alphanumeric)
}

fn find_root(words: &[&str]) -> Option<usize> {
    words
        .iter()
        .position(|w| CLAUSE_HEADS.contains(&w.to_lowercase().as_str()))
        .or_else(|| words.iter().position(|w| is_word(w)))
        .or(if words.is_empty() { None } else { Some(0) })
}

fn guess_role(word: &str) -> DependencyRole {
    let lower = word.to_lowercase();
    if !is_word(word) {
        DependencyRole::Punctuation
    } else if DETERMINERS.contains(&lower.as_str()) {
        DependencyRole::Determiner
    } else if NEGATIONS.contains(&lower.as_str()) {
        DependencyRole::Negation
    } else if AUXILIARIES.contains(&lower.as_str()) {
        DependencyRole::Auxiliary
    } else {
        DependencyRole::Modifier
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root_text(sentence: &ParsedSentence) -> String {
        let root = sentence.roots()[0];
        sentence
            .subtree(root)
            .map(|t| t.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn test_split_sentences() {
        assert_eq!(
            split_sentences("The heart size is normal. No pneumothorax is seen."),
            vec!["The heart size is normal.", "No pneumothorax is seen."]
        );
        assert_eq!(
            split_sentences("Stable lines\nNo effusion!  Clear?"),
            vec!["Stable lines", "No effusion!", "Clear?"]
        );
    }

    #[test]
    fn test_split_keeps_decimals_together() {
        assert_eq!(
            split_sentences("A 2.5 cm nodule is seen. Otherwise clear."),
            vec!["A 2.5 cm nodule is seen.", "Otherwise clear."]
        );
    }

    #[test]
    fn test_split_blank_text() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   \n\n  ").is_empty());
        assert!(split_sentences("...").len() == 1);
    }

    #[test]
    fn test_tokenize() {
        assert_eq!(
            tokenize("Air-space opacity, 2.5 cm; patient's."),
            vec!["Air-space", "opacity", ",", "2.5", "cm", ";", "patient's", "."]
        );
    }

    #[test]
    fn test_root_is_first_clause_head() {
        let sentences = RuleBasedAnalyzer::default()
            .analyze("The heart size is normal.")
            .unwrap();

        assert_eq!(sentences.len(), 1);
        let sentence = &sentences[0];
        assert_eq!(sentence.roots(), vec![3]);
        assert_eq!(sentence.tokens()[0].dependency, DependencyRole::Determiner);
        assert_eq!(sentence.tokens()[5].dependency, DependencyRole::Punctuation);
        assert_eq!(root_text(sentence), "The heart size is normal .");
    }

    #[test]
    fn test_root_falls_back_to_first_word() {
        let sentences = RuleBasedAnalyzer::default()
            .analyze("- Mild cardiomegaly")
            .unwrap();

        let sentence = &sentences[0];
        assert_eq!(sentence.roots(), vec![1]);
        assert_eq!(root_text(sentence), "- Mild cardiomegaly");
    }

    #[test]
    fn test_punctuation_only_sentence_has_root() {
        let sentences = RuleBasedAnalyzer::default().analyze("...").unwrap();
        assert_eq!(sentences[0].roots(), vec![0]);
    }

    #[test]
    fn test_rejects_overlong_text() {
        let analyzer = RuleBasedAnalyzer::default().with_max_chars(10);
        let err = analyzer.analyze("Lungs are clear bilaterally.").unwrap_err();
        assert!(err.is_analyzer_failure());

        assert!(analyzer.analyze("Clear.").is_ok());
    }

    #[test]
    fn test_empty_text_has_no_sentences() {
        assert!(RuleBasedAnalyzer::default().analyze("").unwrap().is_empty());
    }
}
