use std::collections::BTreeMap;

use crate::catalog::types::Prompt;

/// Read-only prompt set, built once at startup and shared by reference.
///
/// Lookups never fail: an unknown id yields `None`, an unknown category an
/// empty list. Catalog order is the insertion order of the source file and is
/// the tie-break order for recommendations.
#[derive(Debug, Clone, Default)]
pub struct PromptCatalog {
    prompts: Vec<Prompt>,
    by_id: BTreeMap<String, usize>,
}

impl PromptCatalog {
    /// Later duplicates of an id shadow nothing: the loader rejects duplicate
    /// ids before construction, so `new` keeps the first occurrence.
    pub fn new(prompts: Vec<Prompt>) -> Self {
        let mut by_id = BTreeMap::new();
        for (position, prompt) in prompts.iter().enumerate() {
            by_id.entry(prompt.id.clone()).or_insert(position);
        }
        Self { prompts, by_id }
    }

    pub fn get(&self, id: &str) -> Option<&Prompt> {
        self.by_id.get(id).map(|position| &self.prompts[*position])
    }

    pub fn by_category(&self, category: &str) -> Vec<&Prompt> {
        let wanted = category.trim().to_lowercase();
        self.prompts
            .iter()
            .filter(|prompt| prompt.category.trim().to_lowercase() == wanted)
            .collect()
    }

    pub fn by_subcategory(&self, subcategory: &str) -> Vec<&Prompt> {
        let wanted = subcategory.trim().to_lowercase();
        self.prompts
            .iter()
            .filter(|prompt| {
                prompt
                    .subcategory
                    .as_deref()
                    .is_some_and(|sub| sub.trim().to_lowercase() == wanted)
            })
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Prompt> {
        self.prompts.iter()
    }

    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }
}
