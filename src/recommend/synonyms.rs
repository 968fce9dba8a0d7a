use std::collections::{BTreeMap, BTreeSet};

/// Splits normalized text into lowercase alphanumeric tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|character: char| !character.is_alphanumeric())
        .filter(|token| !token.is_empty())
        .map(|token| token.to_string())
        .collect()
}

/// Persona/stage vocabulary matcher. Each group holds a canonical term plus
/// its aliases; two terms match when they are equal, share a token, or share
/// a group. The table contents are a product decision and come from config,
/// with the defaults below as the built-in vocabulary.
#[derive(Debug, Clone)]
pub struct SynonymTable {
    groups: Vec<BTreeSet<String>>,
}

impl SynonymTable {
    pub fn new(groups_by_canonical: &BTreeMap<String, Vec<String>>) -> Self {
        let mut groups = Vec::new();
        for (canonical, aliases) in groups_by_canonical {
            let mut group = BTreeSet::new();
            group.insert(canonical.trim().to_lowercase());
            for alias in aliases {
                let alias = alias.trim().to_lowercase();
                if !alias.is_empty() {
                    group.insert(alias);
                }
            }
            groups.push(group);
        }
        Self { groups }
    }

    pub fn default_groups() -> BTreeMap<String, Vec<String>> {
        let seed: &[(&str, &[&str])] = &[
            ("vp", &["vp of sales", "vice president", "vice president of sales"]),
            ("discovery", &["qualification", "disco call"]),
            ("sdr", &["bdr", "sales development", "business development"]),
            ("ae", &["account executive"]),
            ("cro", &["chief revenue officer"]),
            ("founder", &["ceo", "owner"]),
            ("prospecting", &["outbound", "cold outreach"]),
            ("negotiation", &["closing", "procurement"]),
            ("renewal", &["retention", "churn"]),
            ("demo", &["presentation", "product walkthrough"]),
        ];
        seed.iter()
            .map(|(canonical, aliases)| {
                (
                    canonical.to_string(),
                    aliases.iter().map(|alias| alias.to_string()).collect(),
                )
            })
            .collect()
    }

    /// Case-insensitive token match between a prompt tag and a context term.
    pub fn matches(&self, tag: &str, term: &str) -> bool {
        let tag_aliases = self.aliases_of(tag);
        let term_aliases = self.aliases_of(term);
        tag_aliases
            .intersection(&term_aliases)
            .next()
            .is_some()
    }

    fn aliases_of(&self, term: &str) -> BTreeSet<String> {
        let mut aliases = BTreeSet::new();
        let normalized = term.trim().to_lowercase();
        if normalized.is_empty() {
            return aliases;
        }
        aliases.insert(normalized.clone());
        for token in tokenize(&normalized) {
            aliases.insert(token);
        }

        let seeds: Vec<String> = aliases.iter().cloned().collect();
        for group in &self.groups {
            if seeds.iter().any(|seed| group.contains(seed)) {
                aliases.extend(group.iter().cloned());
            }
        }
        aliases
    }
}

impl Default for SynonymTable {
    fn default() -> Self {
        Self::new(&Self::default_groups())
    }
}
