use super::category::{Category, ALL_CATEGORIES};

/// Built-in synonym phrases per category, in catalog order
const DEFAULT_SYNONYMS: [(Category, &[&str]); 14] = [
    (
        Category::EnlargedCardiomediastinum,
        &[
            "cardiomediastinal enlargement",
            "enlargement of the cardiac silhouette",
            "shift of the mediastinal structures",
        ],
    ),
    (
        Category::Cardiomegaly,
        &["enlarged heart", "moderate cardiomegaly", "heart size is normal"],
    ),
    (
        Category::LungOpacity,
        &["lung densities", "pulmonary opacities"],
    ),
    (Category::LungLesion, &["pulmonary lesion"]),
    (
        Category::Edema,
        &[
            "fluid retention",
            "pulmonary vascular congestion",
            "vascular engorgement",
        ],
    ),
    (
        Category::Consolidation,
        &[
            "pulmonary consolidation",
            "air-space opacity",
            "consolidation",
        ],
    ),
    (
        Category::Pneumonia,
        &["lung infection", "no evidence of pneumonia"],
    ),
    (
        Category::Atelectasis,
        &["partial lung collapse", "atelectatic changes"],
    ),
    (
        Category::Pneumothorax,
        &["collapsed lung", "no definite pneumothorax"],
    ),
    (
        Category::PleuralEffusion,
        &["pleural fluid", "pleural thickening"],
    ),
    (Category::PleuralOther, &["pleural abnormalities"]),
    (Category::Fracture, &["bone fractures"]),
    (
        Category::SupportDevices,
        &["endotracheal tube", "central catheter"],
    ),
    (
        Category::NoFinding,
        &["lungs are clear", "normal", "unremarkable"],
    ),
];

/// Label catalog with per-category synonym phrases
///
/// Built once and shared read-only (typically behind an `Arc`) by every
/// extraction call. Phrases are stored lower-cased, in insertion order.
///
/// # Example
///
/// ```
/// use radstruct_core::{Category, SynonymSet};
///
/// let synonyms = SynonymSet::default().add_synonym(Category::Fracture, "Rib Fracture");
///
/// assert!(synonyms
///     .synonyms(Category::Fracture)
///     .contains(&"rib fracture".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynonymSet {
    phrases: Vec<Vec<String>>,
}

impl Default for SynonymSet {
    fn default() -> Self {
        let mut set = Self::empty();
        for (category, phrases) in DEFAULT_SYNONYMS.iter() {
            set.phrases[category.index()] = phrases.iter().map(|p| p.to_lowercase()).collect();
        }
        set
    }
}

impl SynonymSet {
    /// Creates a catalog with no synonyms; only category names will match
    pub fn empty() -> Self {
        Self {
            phrases: vec![Vec::new(); ALL_CATEGORIES.len()],
        }
    }

    /// Returns the lower-cased synonym phrases registered for a category
    pub fn synonyms(&self, category: Category) -> &[String] {
        &self.phrases[category.index()]
    }

    /// Replaces the synonym list of a category
    pub fn with_synonyms<I, S>(mut self, category: Category, phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.phrases[category.index()] = phrases
            .into_iter()
            .map(|p| p.as_ref().to_lowercase())
            .collect();
        self
    }

    /// Appends one synonym phrase to a category
    pub fn add_synonym(mut self, category: Category, phrase: &str) -> Self {
        self.phrases[category.index()].push(phrase.to_lowercase());
        self
    }

    /// Total number of registered synonym phrases
    pub fn len(&self) -> usize {
        self.phrases.iter().map(Vec::len).sum()
    }

    /// Returns whether no synonym phrases are registered
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Loads synonym overrides from a JSON object on top of the defaults
    ///
    /// The object maps category display names to arrays of phrases. Listed
    /// categories replace their default lists; others keep the defaults.
    #[cfg(feature = "json")]
    pub fn from_json_str(json: &str) -> crate::error::Result<Self> {
        use crate::error::RadstructError;
        use std::collections::BTreeMap;

        let overrides: BTreeMap<String, Vec<String>> = serde_json::from_str(json)?;

        let mut set = Self::default();
        for (name, phrases) in overrides {
            let category =
                Category::from_str(&name).ok_or(RadstructError::InvalidCategory(name))?;
            set = set.with_synonyms(category, phrases);
        }
        Ok(set)
    }

    /// Loads synonym overrides from a JSON file
    #[cfg(feature = "json")]
    pub fn from_json_file(path: &std::path::Path) -> crate::error::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}
