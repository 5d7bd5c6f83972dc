use crate::types::{Category, SynonymSet, ALL_CATEGORIES};

/// Finds the categories a sentence is relevant to
///
/// A category matches when its lower-cased name, or any of its synonym
/// phrases, occurs as a substring of `sentence_lower`. Matching is plain
/// substring search, so "cardiomegaly" also matches inside
/// "noncardiomegaly".
///
/// # Arguments
///
/// * `sentence_lower` - Sentence text, already lower-cased
/// * `synonyms` - Label catalog
///
/// # Returns
///
/// Matching categories in catalog order (possibly empty)
pub fn match_categories(sentence_lower: &str, synonyms: &SynonymSet) -> Vec<Category> {
    ALL_CATEGORIES
        .iter()
        .copied()
        .filter(|category| matches_category(sentence_lower, *category, synonyms))
        .collect()
}

/// Checks a single category against a lower-cased sentence
pub fn matches_category(sentence_lower: &str, category: Category, synonyms: &SynonymSet) -> bool {
    sentence_lower.contains(&category.name().to_lowercase())
        || synonyms
            .synonyms(category)
            .iter()
            .any(|phrase| sentence_lower.contains(phrase.as_str()))
}
