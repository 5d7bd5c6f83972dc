//! Linguistic analysis seam
//!
//! The extraction core consumes sentence segmentation and dependency parses
//! through the [`LinguisticAnalyzer`] trait. A deterministic
//! [`RuleBasedAnalyzer`] ships with the crate; other parsers plug in by
//! implementing the trait.

mod rule_based;

#[cfg(test)]
pub(crate) mod fake;

pub use rule_based::{RuleBasedAnalyzer, DEFAULT_MAX_CHARS};

use crate::error::{RadstructError, Result};
use std::fmt;
use std::ops::Range;

/// Largest total subtree size `ParsedSentence::from_heads` will materialize
///
/// Deep head chains need quadratic storage; beyond this the parse is
/// rejected as an analyzer failure.
pub const MAX_SUBTREE_ENTRIES: usize = 4_000_000;

/// Syntactic function of a token within its sentence
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DependencyRole {
    Root,
    Subject,
    Object,
    Modifier,
    Determiner,
    Auxiliary,
    Negation,
    Punctuation,
    /// Any label outside the closed set above, kept verbatim
    Other(String),
}

impl DependencyRole {
    /// Returns whether this is the sentence root
    pub fn is_root(&self) -> bool {
        matches!(self, DependencyRole::Root)
    }

    /// Parses a dependency label as emitted by common parsers
    ///
    /// Matching is case-insensitive. Unrecognized labels become [`DependencyRole::Other`].
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "root" => DependencyRole::Root,
            "nsubj" | "nsubjpass" | "csubj" | "subject" => DependencyRole::Subject,
            "dobj" | "obj" | "pobj" | "iobj" | "attr" | "object" => DependencyRole::Object,
            "amod" | "advmod" | "nmod" | "compound" | "acomp" | "prep" | "modifier" => {
                DependencyRole::Modifier
            }
            "det" | "determiner" => DependencyRole::Determiner,
            "aux" | "auxpass" | "cop" | "auxiliary" => DependencyRole::Auxiliary,
            "neg" | "negation" => DependencyRole::Negation,
            "punct" | "punctuation" => DependencyRole::Punctuation,
            _ => DependencyRole::Other(label.trim().to_string()),
        }
    }

    /// Returns the label for display
    pub fn label(&self) -> &str {
        match self {
            DependencyRole::Root => "ROOT",
            DependencyRole::Subject => "nsubj",
            DependencyRole::Object => "obj",
            DependencyRole::Modifier => "mod",
            DependencyRole::Determiner => "det",
            DependencyRole::Auxiliary => "aux",
            DependencyRole::Negation => "neg",
            DependencyRole::Punctuation => "punct",
            DependencyRole::Other(label) => label,
        }
    }
}

impl fmt::Display for DependencyRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One token of a parsed sentence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Surface text
    pub text: String,

    /// Dependency role assigned by the analyzer
    pub dependency: DependencyRole,

    /// Indices of the token's subtree (itself included) within the owning
    /// sentence, in the analyzer's iteration order
    pub subtree: Vec<usize>,
}

impl Token {
    /// Creates a token with an explicit subtree order
    pub fn new(text: impl Into<String>, dependency: DependencyRole, subtree: Vec<usize>) -> Self {
        Self {
            text: text.into(),
            dependency,
            subtree,
        }
    }
}

/// A sentence with its raw text and ordered tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSentence {
    text: String,
    tokens: Vec<Token>,
}

impl ParsedSentence {
    /// Creates a sentence from tokens carrying explicit subtrees
    ///
    /// # Errors
    ///
    /// Returns an analyzer failure if a subtree references a token outside
    /// the sentence.
    pub fn new(text: impl Into<String>, tokens: Vec<Token>) -> Result<Self> {
        let len = tokens.len();
        for (i, token) in tokens.iter().enumerate() {
            if let Some(bad) = token.subtree.iter().find(|&&j| j >= len) {
                return Err(RadstructError::AnalyzerFailure(format!(
                    "token {} subtree references index {} of {}",
                    i, bad, len
                )));
            }
        }
        Ok(Self {
            text: text.into(),
            tokens,
        })
    }

    /// Creates a sentence from head indices
    ///
    /// Each entry is `(surface, role, head)`; a `None` head (or a token that is
    /// its own head) marks a tree root. Subtrees are computed in left-to-right
    /// order.
    ///
    /// # Errors
    ///
    /// Returns an analyzer failure if a head is out of range, the heads
    /// contain a cycle, or the tree is too deep to materialize (see
    /// [`MAX_SUBTREE_ENTRIES`]).
    pub fn from_heads<S: Into<String>>(
        text: impl Into<String>,
        entries: Vec<(S, DependencyRole, Option<usize>)>,
    ) -> Result<Self> {
        let len = entries.len();
        let mut children = vec![Vec::new(); len];
        let mut tree_roots = Vec::new();
        for (i, (_, _, head)) in entries.iter().enumerate() {
            match head {
                Some(h) if *h >= len => {
                    return Err(RadstructError::AnalyzerFailure(format!(
                        "token {} has head {} outside sentence of {} tokens",
                        i, h, len
                    )));
                }
                Some(h) if *h != i => children[*h].push(i),
                _ => tree_roots.push(i),
            }
        }

        let (order, spans) = in_order_spans(&tree_roots, &children);
        if order.len() != len {
            return Err(RadstructError::AnalyzerFailure(
                "dependency heads contain a cycle".to_string(),
            ));
        }

        let entries_needed: usize = spans.iter().map(|span| span.len()).sum();
        if entries_needed > MAX_SUBTREE_ENTRIES {
            return Err(RadstructError::AnalyzerFailure(format!(
                "parse of {} tokens is too deep ({} subtree entries, limit {})",
                len, entries_needed, MAX_SUBTREE_ENTRIES
            )));
        }

        let tokens = entries
            .into_iter()
            .zip(spans)
            .map(|((surface, dependency, _), span)| Token {
                text: surface.into(),
                dependency,
                subtree: order[span].to_vec(),
            })
            .collect();

        Ok(Self {
            text: text.into(),
            tokens,
        })
    }

    /// Raw sentence text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Tokens in sentence order
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Iterates over the subtree of a token in the analyzer's order
    ///
    /// Yields nothing for an out-of-range index.
    pub fn subtree(&self, index: usize) -> impl Iterator<Item = &Token> + '_ {
        self.tokens
            .get(index)
            .map(|token| token.subtree.as_slice())
            .unwrap_or(&[])
            .iter()
            .filter_map(move |&j| self.tokens.get(j))
    }

    /// Indices of every token labeled ROOT
    pub fn roots(&self) -> Vec<usize> {
        self.tokens
            .iter()
            .enumerate()
            .filter(|(_, token)| token.dependency.is_root())
            .map(|(i, _)| i)
            .collect()
    }
}

/// Walk step for the explicit-stack traversal
enum Step {
    Enter(usize),
    Emit(usize),
    Exit(usize),
}

/// In-order walk (left dependents, the node, then right dependents) of every
/// tree, without recursion
///
/// Returns the visit order and, per token, the span of `order` holding its
/// subtree. Tokens unreachable from a tree root (head cycles) get an empty
/// span and are missing from `order`.
fn in_order_spans(
    tree_roots: &[usize],
    children: &[Vec<usize>],
) -> (Vec<usize>, Vec<Range<usize>>) {
    let mut order = Vec::with_capacity(children.len());
    let mut spans = vec![0..0; children.len()];
    let mut stack = Vec::new();

    for &root in tree_roots {
        stack.push(Step::Enter(root));
        while let Some(step) = stack.pop() {
            match step {
                Step::Enter(node) => {
                    spans[node].start = order.len();
                    stack.push(Step::Exit(node));
                    let split = children[node].partition_point(|&child| child < node);
                    for &child in children[node][split..].iter().rev() {
                        stack.push(Step::Enter(child));
                    }
                    stack.push(Step::Emit(node));
                    for &child in children[node][..split].iter().rev() {
                        stack.push(Step::Enter(child));
                    }
                }
                Step::Emit(node) => order.push(node),
                Step::Exit(node) => spans[node].end = order.len(),
            }
        }
    }

    (order, spans)
}

/// Sentence segmentation and dependency parsing capability
///
/// Implementations must be shareable across threads; the extraction core
/// calls [`analyze`](LinguisticAnalyzer::analyze) once per document.
pub trait LinguisticAnalyzer: Send + Sync {
    /// Segments `text` into sentences and parses each one
    ///
    /// Any error is treated as an analyzer failure for the whole document.
    fn analyze(&self, text: &str) -> Result<Vec<ParsedSentence>>;
}

impl<A: LinguisticAnalyzer + ?Sized> LinguisticAnalyzer for Box<A> {
    fn analyze(&self, text: &str) -> Result<Vec<ParsedSentence>> {
        (**self).analyze(text)
    }
}

impl<A: LinguisticAnalyzer + ?Sized> LinguisticAnalyzer for std::sync::Arc<A> {
    fn analyze(&self, text: &str) -> Result<Vec<ParsedSentence>> {
        (**self).analyze(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("ROOT", DependencyRole::Root)]
    #[case("root", DependencyRole::Root)]
    #[case("nsubj", DependencyRole::Subject)]
    #[case("dobj", DependencyRole::Object)]
    #[case("amod", DependencyRole::Modifier)]
    #[case("det", DependencyRole::Determiner)]
    #[case("neg", DependencyRole::Negation)]
    #[case("punct", DependencyRole::Punctuation)]
    #[case("xcomp", DependencyRole::Other("xcomp".to_string()))]
    fn test_role_from_str(#[case] label: &str, #[case] expected: DependencyRole) {
        assert_eq!(DependencyRole::from_str(label), expected);
    }

    #[rstest]
    #[case(DependencyRole::Root, "ROOT")]
    #[case(DependencyRole::Subject, "nsubj")]
    #[case(DependencyRole::Punctuation, "punct")]
    #[case(DependencyRole::Other("xcomp".to_string()), "xcomp")]
    fn test_role_label_round_trips(#[case] role: DependencyRole, #[case] label: &str) {
        assert_eq!(role.label(), label);
        assert_eq!(role.to_string(), label);
        assert_eq!(DependencyRole::from_str(label), role);
    }

    fn head_chain(len: usize) -> Vec<(String, DependencyRole, Option<usize>)> {
        (0..len)
            .map(|i| {
                if i + 1 == len {
                    (format!("w{}", i), DependencyRole::Root, None)
                } else {
                    (format!("w{}", i), DependencyRole::Modifier, Some(i + 1))
                }
            })
            .collect()
    }

    #[test]
    fn test_from_heads_deep_chain_is_rejected_without_overflow() {
        let err = ParsedSentence::from_heads("chain", head_chain(100_000)).unwrap_err();
        assert!(err.is_analyzer_failure());
    }

    #[test]
    fn test_from_heads_moderate_chain() {
        let sentence = ParsedSentence::from_heads("chain", head_chain(1_000)).unwrap();

        assert_eq!(sentence.roots(), vec![999]);
        let root_subtree: Vec<usize> = sentence.tokens()[999].subtree.clone();
        assert_eq!(root_subtree, (0..1_000).collect::<Vec<_>>());
        assert_eq!(sentence.tokens()[0].subtree, vec![0]);
        assert_eq!(sentence.tokens()[500].subtree.len(), 501);
    }

    #[test]
    fn test_from_heads_wide_sentence() {
        // Flat parse: every token hangs off the first one
        let entries: Vec<_> = (0..100_000)
            .map(|i| {
                if i == 0 {
                    ("w", DependencyRole::Root, None)
                } else {
                    ("w", DependencyRole::Modifier, Some(0))
                }
            })
            .collect();

        let sentence = ParsedSentence::from_heads("wide", entries).unwrap();
        assert_eq!(sentence.subtree(0).count(), 100_000);
        assert_eq!(sentence.tokens()[42].subtree, vec![42]);
    }

    #[test]
    fn test_from_heads_mixed_left_and_right_dependents() {
        // "small left pleural effusion" headed by "effusion", "left" modifies "pleural"
        let sentence = ParsedSentence::from_heads(
            "small left pleural effusion",
            vec![
                ("small", DependencyRole::Modifier, Some(3)),
                ("left", DependencyRole::Modifier, Some(2)),
                ("pleural", DependencyRole::Modifier, Some(3)),
                ("effusion", DependencyRole::Root, None),
            ],
        )
        .unwrap();

        assert_eq!(sentence.tokens()[3].subtree, vec![0, 1, 2, 3]);
        assert_eq!(sentence.tokens()[2].subtree, vec![1, 2]);
    }

    #[test]
    fn test_from_heads_subtrees_in_sentence_order() {
        // "No pneumothorax is seen ."  with "seen" as root
        let sentence = ParsedSentence::from_heads(
            "No pneumothorax is seen.",
            vec![
                ("No", DependencyRole::Determiner, Some(1)),
                ("pneumothorax", DependencyRole::Subject, Some(3)),
                ("is", DependencyRole::Auxiliary, Some(3)),
                ("seen", DependencyRole::Root, None),
                (".", DependencyRole::Punctuation, Some(3)),
            ],
        )
        .unwrap();

        assert_eq!(sentence.roots(), vec![3]);
        let root_text: Vec<_> = sentence.subtree(3).map(|t| t.text.as_str()).collect();
        assert_eq!(root_text, vec!["No", "pneumothorax", "is", "seen", "."]);

        let subject_text: Vec<_> = sentence.subtree(1).map(|t| t.text.as_str()).collect();
        assert_eq!(subject_text, vec!["No", "pneumothorax"]);
    }

    #[test]
    fn test_from_heads_self_head_is_root() {
        let sentence = ParsedSentence::from_heads(
            "Normal",
            vec![("Normal", DependencyRole::Root, Some(0))],
        )
        .unwrap();
        assert_eq!(sentence.tokens()[0].subtree, vec![0]);
    }

    #[test]
    fn test_from_heads_rejects_out_of_range_head() {
        let err = ParsedSentence::from_heads(
            "bad",
            vec![("bad", DependencyRole::Root, Some(4))],
        )
        .unwrap_err();
        assert!(err.is_analyzer_failure());
    }

    #[test]
    fn test_from_heads_rejects_cycle() {
        let err = ParsedSentence::from_heads(
            "a b",
            vec![
                ("a", DependencyRole::Modifier, Some(1)),
                ("b", DependencyRole::Modifier, Some(0)),
            ],
        )
        .unwrap_err();
        assert!(err.is_analyzer_failure());
    }

    #[test]
    fn test_new_keeps_explicit_subtree_order() {
        let sentence = ParsedSentence::new(
            "size heart",
            vec![
                Token::new("size", DependencyRole::Root, vec![1, 0]),
                Token::new("heart", DependencyRole::Modifier, vec![1]),
            ],
        )
        .unwrap();

        let text: Vec<_> = sentence.subtree(0).map(|t| t.text.as_str()).collect();
        assert_eq!(text, vec!["heart", "size"]);
    }

    #[test]
    fn test_new_rejects_dangling_subtree() {
        let err = ParsedSentence::new(
            "x",
            vec![Token::new("x", DependencyRole::Root, vec![0, 7])],
        )
        .unwrap_err();
        assert!(err.is_analyzer_failure());
    }

    #[test]
    fn test_subtree_out_of_range_is_empty() {
        let sentence = ParsedSentence::new("", vec![]).unwrap();
        assert_eq!(sentence.subtree(3).count(), 0);
    }
}
