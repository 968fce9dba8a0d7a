use std::sync::Arc;

use crate::{
    catalog::{store::PromptCatalog, types::{Difficulty, Prompt}},
    recommend::{
        error::{RecommendError, invalid_request},
        synonyms::{SynonymTable, tokenize},
        types::{RecommendContext, RecommendWeights, Recommendation, clamp_limit},
    },
};

// Small enough that it can only break ties between prompts whose signal
// scores are equal (every signal weight is far larger).
fn difficulty_bonus(difficulty: Option<Difficulty>) -> u32 {
    match difficulty {
        Some(Difficulty::Beginner) => 3,
        Some(Difficulty::Intermediate) => 2,
        Some(Difficulty::Advanced) => 1,
        None => 0,
    }
}

/// Pure, synchronous ranking over an injected read-only catalog. Safe to
/// share across concurrent callers; every call is independent.
#[derive(Debug, Clone)]
pub struct RecommendEngine {
    catalog: Arc<PromptCatalog>,
    weights: RecommendWeights,
    synonyms: SynonymTable,
    min_token_len: usize,
}

impl RecommendEngine {
    pub fn new(
        catalog: Arc<PromptCatalog>,
        weights: RecommendWeights,
        synonyms: SynonymTable,
        min_token_len: usize,
    ) -> Self {
        Self {
            catalog,
            weights,
            synonyms,
            min_token_len,
        }
    }

    pub fn catalog(&self) -> &PromptCatalog {
        &self.catalog
    }

    /// Scores every catalog prompt against `context` and returns at most
    /// `limit` (clamped) recommendations, sorted by descending score with
    /// ties kept in catalog order. Prompts with no matching signal are
    /// dropped, so an unmatched context yields an empty list.
    pub fn recommend(
        &self,
        context: &RecommendContext,
        limit: Option<i64>,
    ) -> Result<Vec<Recommendation>, RecommendError> {
        let resolved = context.normalized();
        if context.is_empty() {
            return Err(invalid_request(
                "recommendation context must set at least one field",
            ));
        }
        let limit = clamp_limit(limit);

        let mut ranked: Vec<Recommendation> = Vec::new();
        for prompt in self.catalog.iter() {
            if let Some(recommendation) = self.score_prompt(prompt, &resolved) {
                ranked.push(recommendation);
            }
        }

        // sort_by is stable: equal scores keep catalog order.
        ranked.sort_by(|a, b| b.relevance_score.cmp(&a.relevance_score));
        ranked.truncate(limit);
        Ok(ranked)
    }

    fn score_prompt(
        &self,
        prompt: &Prompt,
        resolved: &RecommendContext,
    ) -> Option<Recommendation> {
        let mut score = 0u32;
        let mut reasons: Vec<String> = Vec::new();

        if let Some(industry) = resolved.industry.as_deref()
            && self.industry_matches(prompt, industry)
        {
            score += self.weights.industry;
            reasons.push(format!("matches industry: {industry}"));
        }

        if let Some(persona) = resolved.persona.as_deref()
            && self.any_tag_matches(prompt, persona)
        {
            score += self.weights.persona;
            reasons.push(format!("matches persona: {persona}"));
        }

        if let Some(stage) = resolved.deal_stage.as_deref()
            && self.any_tag_matches(prompt, stage)
        {
            score += self.weights.stage;
            reasons.push(format!("matches stage: {stage}"));
        }

        if let Some(free_text) = resolved.context.as_deref() {
            let mentioned = self.mentioned_tokens(prompt, free_text);
            if !mentioned.is_empty() {
                score += self.weights.context_token * mentioned.len() as u32;
                reasons.push(format!("mentions: {}", mentioned.join(", ")));
            }
        }

        if score == 0 {
            return None;
        }
        score += difficulty_bonus(prompt.difficulty);

        Some(Recommendation {
            prompt: prompt.clone(),
            relevance_score: score,
            relevance_reason: reasons.join("; "),
        })
    }

    fn industry_matches(&self, prompt: &Prompt, industry: &str) -> bool {
        if prompt.category.trim().to_lowercase().contains(industry) {
            return true;
        }
        if prompt
            .subcategory
            .as_deref()
            .is_some_and(|sub| sub.trim().to_lowercase().contains(industry))
        {
            return true;
        }
        prompt
            .tags
            .iter()
            .any(|tag| tag.trim().to_lowercase() == industry)
    }

    fn any_tag_matches(&self, prompt: &Prompt, term: &str) -> bool {
        prompt.tags.iter().any(|tag| self.synonyms.matches(tag, term))
    }

    fn mentioned_tokens(&self, prompt: &Prompt, free_text: &str) -> Vec<String> {
        let haystack = format!(
            "{} {}",
            prompt.title.to_lowercase(),
            prompt.description.to_lowercase()
        );
        let mut mentioned: Vec<String> = Vec::new();
        for token in tokenize(free_text) {
            if token.len() < self.min_token_len {
                continue;
            }
            if haystack.contains(&token) && !mentioned.contains(&token) {
                mentioned.push(token);
            }
        }
        mentioned
    }
}
