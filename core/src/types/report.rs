use super::category::{Category, ALL_CATEGORIES};

/// Value reported for a category when no sentence mentions it
pub const NO_RELEVANT_INFORMATION: &str = "No relevant information";

/// Finalized per-category observations for one document
///
/// Always holds exactly one value per category, in catalog order. Each value
/// is either extracted text or [`NO_RELEVANT_INFORMATION`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StructuredReport {
    values: Vec<String>,
}

impl StructuredReport {
    /// Report where every category carries the placeholder
    pub fn empty() -> Self {
        Self {
            values: vec![NO_RELEVANT_INFORMATION.to_string(); ALL_CATEGORIES.len()],
        }
    }

    /// Builds a report from raw per-category text in catalog order
    ///
    /// Each value is trimmed; blank values become the placeholder.
    pub(crate) fn from_raw(raw: Vec<String>) -> Self {
        debug_assert_eq!(raw.len(), ALL_CATEGORIES.len());
        let values = raw
            .into_iter()
            .map(|text| {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    NO_RELEVANT_INFORMATION.to_string()
                } else {
                    trimmed.to_string()
                }
            })
            .collect();
        Self { values }
    }

    /// Returns the finalized text for a category
    pub fn get(&self, category: Category) -> &str {
        &self.values[category.index()]
    }

    /// Returns whether a category received any extracted text
    pub fn has_information(&self, category: Category) -> bool {
        self.get(category) != NO_RELEVANT_INFORMATION
    }

    /// Iterates over (category, text) pairs in catalog order
    pub fn iter(&self) -> impl Iterator<Item = (Category, &str)> + '_ {
        ALL_CATEGORIES
            .iter()
            .copied()
            .zip(self.values.iter().map(String::as_str))
    }

    /// Categories that received extracted text, in catalog order
    pub fn found(&self) -> Vec<Category> {
        self.iter()
            .filter(|(category, _)| self.has_information(*category))
            .map(|(category, _)| category)
            .collect()
    }

    /// Returns whether every category carries the placeholder
    pub fn has_no_information(&self) -> bool {
        self.found().is_empty()
    }

    /// Returns (display name, text) pairs in catalog order
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        self.iter()
            .map(|(category, text)| (category.name(), text.to_string()))
            .collect()
    }

    /// Number of entries, always the size of the category catalog
    pub fn len(&self) -> usize {
        self.values.len()
    }
}

#[cfg(feature = "json")]
impl serde::Serialize for StructuredReport {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (category, text) in self.iter() {
            map.serialize_entry(category.name(), text)?;
        }
        map.end()
    }
}
