use promptdeck::recommend::{MAX_LIMIT, RecommendContext};

use crate::common::{engine_over, prompt};

fn saas_catalog(size: usize) -> Vec<promptdeck::catalog::Prompt> {
    (0..size)
        .map(|index| {
            prompt(
                &format!("p{index}"),
                &format!("Prompt {index}"),
                "SaaS",
                &["saas"],
            )
        })
        .collect()
}

fn saas_context() -> RecommendContext {
    RecommendContext {
        industry: Some("saas".to_string()),
        ..RecommendContext::default()
    }
}

#[test]
fn default_limit_is_five() {
    let engine = engine_over(saas_catalog(12));
    let results = engine.recommend(&saas_context(), None).expect("valid");
    assert_eq!(results.len(), 5);
}

#[test]
fn limit_below_one_is_clamped_to_one() {
    let engine = engine_over(saas_catalog(4));
    let results = engine.recommend(&saas_context(), Some(0)).expect("valid");
    assert_eq!(results.len(), 1);
    let results = engine.recommend(&saas_context(), Some(-7)).expect("valid");
    assert_eq!(results.len(), 1);
}

#[test]
fn limit_above_twenty_is_clamped_to_twenty() {
    let engine = engine_over(saas_catalog(30));
    let results = engine.recommend(&saas_context(), Some(100)).expect("valid");
    assert_eq!(results.len(), MAX_LIMIT);
}

#[test]
fn result_never_exceeds_catalog_size() {
    let engine = engine_over(saas_catalog(3));
    let results = engine.recommend(&saas_context(), Some(20)).expect("valid");
    assert_eq!(results.len(), 3);
}
