use std::collections::HashSet;

use super::model::DetectedLabel;

/// Names that count as "an animal" when the classifier reports them.
pub const DEFAULT_ANIMAL_LABELS: [&str; 6] = ["cat", "dog", "cow", "animal", "mammal", "bird"];

/// The configured animal vocabulary. Membership is case-insensitive.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimalVocabulary {
    names: HashSet<String>,
}

impl AnimalVocabulary {
    /// Build from any list of names. Blank entries are dropped, the rest are
    /// trimmed and lowercased.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names = names
            .into_iter()
            .map(|name| name.as_ref().trim().to_lowercase())
            .filter(|name| !name.is_empty())
            .collect();
        Self { names }
    }

    /// Parse a comma separated list, e.g. `"cat, dog,bird"`.
    pub fn from_csv(csv: &str) -> Self {
        Self::new(csv.split(','))
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.names.contains(&label.trim().to_lowercase())
    }

    /// True when at least one detected label is in the vocabulary.
    /// An empty detection never counts.
    pub fn is_animal_detected(&self, labels: &[DetectedLabel]) -> bool {
        labels.iter().any(|label| self.contains(&label.name))
    }
}

impl Default for AnimalVocabulary {
    fn default() -> Self {
        Self::new(DEFAULT_ANIMAL_LABELS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detected(names: &[&str]) -> Vec<DetectedLabel> {
        names.iter().map(|n| DetectedLabel::new(*n, 92.5)).collect()
    }

    #[test]
    fn test_cat_among_other_labels_is_accepted() {
        let vocabulary = AnimalVocabulary::default();
        assert!(vocabulary.is_animal_detected(&detected(&["Cat", "Tree"])));
    }

    #[test]
    fn test_plants_are_rejected() {
        let vocabulary = AnimalVocabulary::default();
        assert!(!vocabulary.is_animal_detected(&detected(&["Tree", "Plant"])));
    }

    #[test]
    fn test_empty_detection_is_rejected() {
        let vocabulary = AnimalVocabulary::default();
        assert!(!vocabulary.is_animal_detected(&[]));
    }

    #[test]
    fn test_membership_ignores_case() {
        let vocabulary = AnimalVocabulary::default();
        assert!(vocabulary.contains("DOG"));
        assert!(vocabulary.contains("Mammal"));
        assert!(!vocabulary.contains("Car"));
    }

    #[test]
    fn test_vocabulary_is_configurable() {
        let vocabulary = AnimalVocabulary::from_csv(" Goat, , yak ");
        assert_eq!(vocabulary.len(), 2);
        assert!(vocabulary.is_animal_detected(&detected(&["Yak"])));
        assert!(!vocabulary.is_animal_detected(&detected(&["Dog"])));
    }

    #[test]
    fn test_blank_csv_gives_empty_vocabulary() {
        assert!(AnimalVocabulary::from_csv(" , ").is_empty());
    }
}
