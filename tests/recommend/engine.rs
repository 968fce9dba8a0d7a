use promptdeck::recommend::{RecommendContext, RecommendErrorKind};

use crate::common::{engine_over, prompt, with_description};

#[test]
fn saas_vp_scenario_surfaces_tagged_prompt_with_both_reasons() {
    let engine = engine_over(vec![
        prompt("p-call", "VP Discovery Call", "Sales", &["saas", "vp", "discovery"]),
        prompt("p-other", "Churn Save Call", "Customer Success", &["renewal"]),
    ]);
    let context = RecommendContext {
        industry: Some("saas".to_string()),
        persona: Some("vp".to_string()),
        ..RecommendContext::default()
    };

    let results = engine.recommend(&context, Some(5)).expect("context is valid");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].prompt.id, "p-call");
    assert!(results[0].relevance_reason.contains("saas"));
    assert!(results[0].relevance_reason.contains("vp"));
}

#[test]
fn free_text_with_no_mention_anywhere_returns_empty() {
    let engine = engine_over(vec![
        prompt("p1", "Cold Email Opener", "Outbound", &["sdr"]),
        prompt("p2", "Demo Storyline", "SaaS", &["demo"]),
    ]);
    let context = RecommendContext {
        context: Some("renewal negotiation".to_string()),
        ..RecommendContext::default()
    };

    let results = engine.recommend(&context, None).expect("context is valid");
    assert!(results.is_empty());
}

#[test]
fn free_text_tokens_score_and_are_listed_in_the_reason() {
    let engine = engine_over(vec![with_description(
        prompt("p1", "Renewal Negotiation Plan", "Customer Success", &[]),
        "Prepares a renewal negotiation with procurement.",
    )]);
    let context = RecommendContext {
        context: Some("Renewal negotiation tips".to_string()),
        ..RecommendContext::default()
    };

    let results = engine.recommend(&context, None).expect("context is valid");
    assert_eq!(results.len(), 1);
    assert!(results[0].relevance_reason.contains("mentions:"));
    assert!(results[0].relevance_reason.contains("renewal"));
    assert!(results[0].relevance_reason.contains("negotiation"));
}

#[test]
fn stage_matches_through_synonym_table() {
    let engine = engine_over(vec![prompt(
        "p1",
        "Qualification Scorecard",
        "Sales Ops",
        &["qualification"],
    )]);
    let context = RecommendContext {
        deal_stage: Some("Discovery".to_string()),
        ..RecommendContext::default()
    };

    let results = engine.recommend(&context, None).expect("context is valid");
    assert_eq!(results.len(), 1);
    assert!(results[0].relevance_reason.contains("matches stage: discovery"));
}

#[test]
fn industry_matches_category_substring_case_insensitively() {
    let engine = engine_over(vec![prompt("p1", "Plant Intro", "Manufacturing", &[])]);
    let context = RecommendContext {
        industry: Some("  MANUFACTURING ".to_string()),
        ..RecommendContext::default()
    };

    let results = engine.recommend(&context, None).expect("context is valid");
    assert_eq!(results.len(), 1);
}

#[test]
fn company_size_alone_is_valid_but_scores_nothing() {
    let engine = engine_over(vec![prompt("p1", "Cold Email", "Outbound", &["smb"])]);
    let context = RecommendContext {
        company_size: Some("smb".to_string()),
        ..RecommendContext::default()
    };

    let results = engine.recommend(&context, None).expect("context is valid");
    assert!(results.is_empty());
}

#[test]
fn all_empty_context_is_rejected_as_invalid_request() {
    let engine = engine_over(vec![prompt("p1", "Cold Email", "Outbound", &[])]);
    let context = RecommendContext {
        persona: Some("   ".to_string()),
        ..RecommendContext::default()
    };

    let err = engine
        .recommend(&context, None)
        .expect_err("blank-only context is a caller error");
    assert_eq!(err.kind, RecommendErrorKind::InvalidRequest);
}

#[test]
fn empty_catalog_returns_empty_list_not_an_error() {
    let engine = engine_over(vec![]);
    let context = RecommendContext {
        industry: Some("saas".to_string()),
        ..RecommendContext::default()
    };

    let results = engine.recommend(&context, None).expect("context is valid");
    assert!(results.is_empty());
}

#[test]
fn recommend_is_idempotent_for_identical_inputs() {
    let engine = engine_over(vec![
        prompt("p1", "VP Discovery Call", "SaaS", &["saas", "vp"]),
        prompt("p2", "Demo Storyline", "SaaS", &["demo", "saas"]),
    ]);
    let context = RecommendContext {
        industry: Some("saas".to_string()),
        ..RecommendContext::default()
    };

    let first = engine.recommend(&context, Some(5)).expect("context is valid");
    let second = engine.recommend(&context, Some(5)).expect("context is valid");
    assert_eq!(first, second);
}
