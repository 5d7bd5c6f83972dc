use crate::analysis::ParsedSentence;

/// Extracts the clause text headed by every ROOT token of a sentence
///
/// Each clause is the surface text of the ROOT's subtree, joined with
/// single spaces in the order the analyzer yields the subtree. That order
/// is not necessarily the sentence's left-to-right order and is kept as is.
///
/// # Returns
///
/// One clause per ROOT token, in token order; empty when the sentence has
/// no ROOT token.
pub fn extract_clauses(sentence: &ParsedSentence) -> Vec<String> {
    sentence
        .roots()
        .into_iter()
        .map(|root| subtree_text(sentence, root))
        .collect()
}

fn subtree_text(sentence: &ParsedSentence, index: usize) -> String {
    sentence
        .subtree(index)
        .map(|token| token.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
