use serde::{Deserialize, Serialize};

use crate::catalog::types::Prompt;

pub const MIN_LIMIT: usize = 1;
pub const DEFAULT_LIMIT: usize = 5;
pub const MAX_LIMIT: usize = 20;

/// Request-scoped ranking hints. Every field is optional, but at least one
/// must be non-empty for a recommendation request to be valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deal_stage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub persona: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

impl RecommendContext {
    /// Lowercased, trimmed copy with blank fields collapsed to `None`. All
    /// matching and the context echoed to callers operate on this form.
    pub fn normalized(&self) -> Self {
        Self {
            deal_stage: normalize_field(&self.deal_stage),
            persona: normalize_field(&self.persona),
            industry: normalize_field(&self.industry),
            company_size: normalize_field(&self.company_size),
            context: normalize_field(&self.context),
        }
    }

    pub fn is_empty(&self) -> bool {
        let normalized = self.normalized();
        normalized.deal_stage.is_none()
            && normalized.persona.is_none()
            && normalized.industry.is_none()
            && normalized.company_size.is_none()
            && normalized.context.is_none()
    }
}

fn normalize_field(field: &Option<String>) -> Option<String> {
    field
        .as_deref()
        .map(|value| value.trim().to_lowercase())
        .filter(|value| !value.is_empty())
}

/// Signal weights in integer weight units. The difficulty tie-break is
/// deliberately smaller than any signal weight so it can only reorder prompts
/// with equal signal scores, never promote an unmatched prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendWeights {
    pub industry: u32,
    pub persona: u32,
    pub stage: u32,
    pub context_token: u32,
}

impl Default for RecommendWeights {
    fn default() -> Self {
        Self {
            industry: 300,
            persona: 200,
            stage: 200,
            context_token: 50,
        }
    }
}

/// A scored catalog prompt, derived fresh per request and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(flatten)]
    pub prompt: Prompt,
    pub relevance_score: u32,
    pub relevance_reason: String,
}

pub fn clamp_limit(requested: Option<i64>) -> usize {
    let Some(requested) = requested else {
        return DEFAULT_LIMIT;
    };
    if requested < MIN_LIMIT as i64 {
        return MIN_LIMIT;
    }
    if requested > MAX_LIMIT as i64 {
        return MAX_LIMIT;
    }
    requested as usize
}
