use std::fmt;

/// Clinical finding category reported on by every structured report
///
/// Variant order is the catalog order and drives output presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    EnlargedCardiomediastinum,
    Cardiomegaly,
    LungOpacity,
    LungLesion,
    Edema,
    Consolidation,
    Pneumonia,
    Atelectasis,
    Pneumothorax,
    PleuralEffusion,
    PleuralOther,
    Fracture,
    SupportDevices,
    NoFinding,
}

/// All categories in catalog order
pub const ALL_CATEGORIES: [Category; 14] = [
    Category::EnlargedCardiomediastinum,
    Category::Cardiomegaly,
    Category::LungOpacity,
    Category::LungLesion,
    Category::Edema,
    Category::Consolidation,
    Category::Pneumonia,
    Category::Atelectasis,
    Category::Pneumothorax,
    Category::PleuralEffusion,
    Category::PleuralOther,
    Category::Fracture,
    Category::SupportDevices,
    Category::NoFinding,
];

impl Category {
    /// Returns the display name used as the report key
    pub fn name(&self) -> &'static str {
        match self {
            Category::EnlargedCardiomediastinum => "Enlarged Cardiomediastinum",
            Category::Cardiomegaly => "Cardiomegaly",
            Category::LungOpacity => "Lung Opacity",
            Category::LungLesion => "Lung Lesion",
            Category::Edema => "Edema",
            Category::Consolidation => "Consolidation",
            Category::Pneumonia => "Pneumonia",
            Category::Atelectasis => "Atelectasis",
            Category::Pneumothorax => "Pneumothorax",
            Category::PleuralEffusion => "Pleural Effusion",
            Category::PleuralOther => "Pleural Other",
            Category::Fracture => "Fracture",
            Category::SupportDevices => "Support Devices",
            Category::NoFinding => "No Finding",
        }
    }

    /// Returns the position of this category in catalog order
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Parses a category from its display name
    ///
    /// Matching ignores case and surrounding whitespace.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        let wanted = s.trim();
        ALL_CATEGORIES
            .iter()
            .copied()
            .find(|category| category.name().eq_ignore_ascii_case(wanted))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
