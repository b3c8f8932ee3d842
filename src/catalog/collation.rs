use std::cmp::Ordering;

use icu_collator::{Collator, CollatorOptions};
use tracing::warn;

/// Orders product names with the Unicode collation algorithm under the root
/// locale.
///
/// Accents, letters and punctuation all follow CLDR root order. Spaces and
/// punctuation are non-ignorable, so `"Item 2"` sorts before `"item1"`. Names
/// that only differ in case put lowercase first. Identical names compare
/// `Equal`, which leaves them in their incoming order under a stable sort.
pub struct NameCollator {
    collator: Option<Collator>,
}

impl NameCollator {
    pub fn new() -> Self {
        let collator = Collator::try_new(&Default::default(), CollatorOptions::new())
            .map_err(|err| warn!(error = %err, "Root collation unavailable, ordering names by code point"))
            .ok();
        Self { collator }
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        match &self.collator {
            Some(collator) => collator.compare(a, b),
            None => a.cmp(b),
        }
    }
}

impl Default for NameCollator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(names: &[&str]) -> Vec<String> {
        let collator = NameCollator::new();
        let mut names: Vec<String> = names.iter().map(|name| name.to_string()).collect();
        names.sort_by(|a, b| collator.compare(a, b));
        names
    }

    #[test]
    fn test_case_insensitive_primary_order() {
        let collator = NameCollator::new();
        assert_eq!(collator.compare("apple", "Banana"), Ordering::Less);
        assert_eq!(collator.compare("Banana", "apple"), Ordering::Greater);
        assert_eq!(collator.compare("Apple", "apricot"), Ordering::Less);
    }

    #[test]
    fn test_lowercase_first_when_only_case_differs() {
        let collator = NameCollator::new();
        assert_eq!(collator.compare("apple", "Apple"), Ordering::Less);
        assert_eq!(collator.compare("Apple", "apple"), Ordering::Greater);
    }

    #[test]
    fn test_identical_names_are_equal() {
        let collator = NameCollator::new();
        assert_eq!(collator.compare("Desk Lamp", "Desk Lamp"), Ordering::Equal);
        assert_eq!(collator.compare("", ""), Ordering::Equal);
    }

    #[test]
    fn test_prefix_sorts_first() {
        let collator = NameCollator::new();
        assert_eq!(collator.compare("Lamp", "Lamp Shade"), Ordering::Less);
        assert_eq!(collator.compare("Apple Pie", "Applesauce"), Ordering::Less);
    }

    #[test]
    fn test_accents_sort_next_to_their_base_letter() {
        assert_eq!(
            sorted(&["Fudge", "Éclair", "Donut", "rose", "résumé", "resume", "Resume"]),
            vec!["Donut", "Éclair", "Fudge", "resume", "Resume", "résumé", "rose"]
        );
    }

    #[test]
    fn test_mixed_accents_punctuation_and_case() {
        let names = [
            "Éclair", "Fudge", "Donut", "apple", "Apple", "item_1", "item1", "Item~", "Item 2",
            "résumé", "resume", "Resume", "rose",
        ];
        assert_eq!(
            sorted(&names),
            vec![
                "apple", "Apple", "Donut", "Éclair", "Fudge", "Item 2", "item_1", "Item~", "item1",
                "resume", "Resume", "résumé", "rose",
            ]
        );
    }
}
