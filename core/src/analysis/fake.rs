//! Hand-built analyzer for tests

use super::{DependencyRole, LinguisticAnalyzer, ParsedSentence, Token};
use crate::error::{RadstructError, Result};

/// Returns canned sentences, or fails on demand
pub(crate) struct FakeAnalyzer {
    sentences: Vec<ParsedSentence>,
    fail: bool,
}

impl FakeAnalyzer {
    pub(crate) fn new(sentences: Vec<ParsedSentence>) -> Self {
        Self {
            sentences,
            fail: false,
        }
    }

    pub(crate) fn failing() -> Self {
        Self {
            sentences: Vec::new(),
            fail: true,
        }
    }
}

impl LinguisticAnalyzer for FakeAnalyzer {
    fn analyze(&self, _text: &str) -> Result<Vec<ParsedSentence>> {
        if self.fail {
            return Err(RadstructError::AnalyzerFailure(
                "forced failure".to_string(),
            ));
        }
        Ok(self.sentences.clone())
    }
}

/// Sentence whose first token is the ROOT and heads every other token
pub(crate) fn flat_sentence(text: &str) -> ParsedSentence {
    let words: Vec<&str> = text.split_whitespace().collect();
    let entries = words
        .iter()
        .enumerate()
        .map(|(i, word)| {
            if i == 0 {
                (*word, DependencyRole::Root, None)
            } else {
                (*word, DependencyRole::Modifier, Some(0))
            }
        })
        .collect();
    ParsedSentence::from_heads(text, entries).unwrap()
}

/// Sentence with no ROOT-labeled token
pub(crate) fn rootless_sentence(text: &str) -> ParsedSentence {
    let tokens = text
        .split_whitespace()
        .enumerate()
        .map(|(i, word)| Token::new(word, DependencyRole::Modifier, vec![i]))
        .collect();
    ParsedSentence::new(text, tokens).unwrap()
}
