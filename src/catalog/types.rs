use serde::{Deserialize, Serialize};

pub type PromptId = String;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

/// A stored sales/GTM template. Loaded once at startup, never mutated.
///
/// The `body` carries `[BRACKET]` placeholder variables the caller fills in
/// before use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    pub id: PromptId,
    pub title: String,
    pub description: String,
    pub body: String,
    pub category: String,
    #[serde(default)]
    pub subcategory: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
}

impl Prompt {
    /// Distinct `[BRACKET]` placeholder names in the body, in order of first
    /// appearance. Unterminated brackets are ignored.
    pub fn variables(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        let mut rest = self.body.as_str();

        while let Some(open) = rest.find('[') {
            rest = &rest[open + 1..];
            let Some(close) = rest.find(']') else {
                break;
            };
            let name = rest[..close].trim();
            if !name.is_empty() && !names.iter().any(|known| known == name) {
                names.push(name.to_string());
            }
            rest = &rest[close + 1..];
        }

        names
    }
}
