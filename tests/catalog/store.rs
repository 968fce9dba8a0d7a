use promptdeck::catalog::{Prompt, PromptCatalog};

fn prompt(id: &str, category: &str, subcategory: Option<&str>) -> Prompt {
    Prompt {
        id: id.to_string(),
        title: format!("title {id}"),
        description: String::new(),
        body: String::new(),
        category: category.to_string(),
        subcategory: subcategory.map(|sub| sub.to_string()),
        tags: vec![],
        difficulty: None,
    }
}

#[test]
fn get_returns_none_for_unknown_id() {
    let catalog = PromptCatalog::new(vec![prompt("p1", "SaaS", None)]);
    assert!(catalog.get("p1").is_some());
    assert!(catalog.get("missing").is_none());
}

#[test]
fn by_category_is_case_insensitive_and_empty_for_unknown() {
    let catalog = PromptCatalog::new(vec![
        prompt("p1", "SaaS", None),
        prompt("p2", "Outbound", None),
        prompt("p3", "saas", None),
    ]);
    let saas: Vec<&str> = catalog
        .by_category("SAAS")
        .iter()
        .map(|p| p.id.as_str())
        .collect();
    assert_eq!(saas, vec!["p1", "p3"]);
    assert!(catalog.by_category("fintech").is_empty());
}

#[test]
fn by_subcategory_skips_prompts_without_one() {
    let catalog = PromptCatalog::new(vec![
        prompt("p1", "SaaS", Some("Discovery")),
        prompt("p2", "SaaS", None),
    ]);
    let discovery: Vec<&str> = catalog
        .by_subcategory("discovery")
        .iter()
        .map(|p| p.id.as_str())
        .collect();
    assert_eq!(discovery, vec!["p1"]);
}

#[test]
fn empty_catalog_reports_empty() {
    let catalog = PromptCatalog::new(vec![]);
    assert!(catalog.is_empty());
    assert_eq!(catalog.len(), 0);
    assert_eq!(catalog.iter().count(), 0);
}
