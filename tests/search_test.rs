#[path = "common/mod.rs"]
mod common;

use common::SlateTest;
use serde_json::Value;

fn items(json: &Value) -> Vec<String> {
    json["products"]
        .as_array()
        .expect("products array")
        .iter()
        .map(|p| p["Item"].as_str().unwrap_or_default().to_string())
        .collect()
}

// ============================================================================
// Search command tests
// ============================================================================

#[test]
fn test_search_empty_term_returns_everything_in_order() {
    let slate = SlateTest::with_sample_catalog();

    let json = slate.run_json(&["search"]);
    assert_eq!(
        items(&json),
        vec!["100", "8006", "8006A", "201", "202", "300", ""]
    );
    assert_eq!(json["total"], 7);
}

#[test]
fn test_search_description_is_case_insensitive() {
    let slate = SlateTest::with_sample_catalog();

    let json = slate.run_json(&["search", "rolling TRAY"]);
    assert_eq!(items(&json), vec!["201", "202"]);
}

#[test]
fn test_search_item_is_case_sensitive() {
    let slate = SlateTest::with_sample_catalog();

    assert_eq!(items(&slate.run_json(&["search", "8006A"])), vec!["8006A"]);
    assert!(items(&slate.run_json(&["search", "8006a"])).is_empty());
}

#[test]
fn test_search_matches_upc() {
    let slate = SlateTest::with_sample_catalog();

    let json = slate.run_json(&["search", "7"]);
    assert_eq!(items(&json), vec!["201"]);
    assert_eq!(json["products"][0]["UPC"], "012345678");
}

#[test]
fn test_search_with_page_filter() {
    let slate = SlateTest::with_sample_catalog();

    let json = slate.run_json(&["search", "--page", "2"]);
    assert_eq!(items(&json), vec!["8006A", "201", "202"]);
    assert_eq!(json["page"], "2");

    let json = slate.run_json(&["search", "pipe", "--page", "1"]);
    assert_eq!(items(&json), vec!["8006"]);
}

#[test]
fn test_search_page_filter_is_exact() {
    let slate = SlateTest::with_sample_catalog();

    // "1" must not pick up page "10"
    let json = slate.run_json(&["search", "-p", "1"]);
    assert_eq!(items(&json), vec!["100", "8006"]);
}

#[test]
fn test_search_resolves_images() {
    let slate = SlateTest::with_sample_catalog();

    let json = slate.run_json(&["search", "tray"]);
    let products = json["products"].as_array().unwrap();
    assert_eq!(products[0]["image"], "Page2_201_Rolling_Tray_Large.jpg");
    assert_eq!(
        products[0]["image_url"],
        "images/Page2_201_Rolling_Tray_Large.jpg"
    );
    assert_eq!(products[1]["image"], "Page2_201_202_Tray_Combo.png");
}

#[test]
fn test_search_prefix_family_does_not_share_image() {
    let slate = SlateTest::with_sample_catalog();

    let json = slate.run_json(&["search", "Glass Pipe"]);
    let products = json["products"].as_array().unwrap();
    assert_eq!(products[0]["image"], "Page1_8006_Glass_Pipe_4in.png");
    assert!(products[1]["image"].is_null());
}

#[test]
fn test_search_applies_configured_exclusions() {
    let slate = SlateTest::with_sample_catalog();
    slate.write_config("exclusions:\n  items: [\"100\"]\n  item_prefix: \"8006\"\n");

    let json = slate.run_json(&["search"]);
    assert_eq!(items(&json), vec!["201", "202", "300", ""]);

    // A direct item search still cannot reach an excluded product
    assert!(items(&slate.run_json(&["search", "8006A"])).is_empty());
}

#[test]
fn test_search_no_results_text() {
    let slate = SlateTest::with_sample_catalog();

    let output = slate.run_success(&["search", "no such product"]);
    assert!(output.contains("No products found"));
    assert!(output.contains("Try adjusting your search or category filter."));
}

#[test]
fn test_search_grid_text_output() {
    let slate = SlateTest::with_sample_catalog();

    let output = slate.run_success(&["search", "tray"]);
    assert!(output.contains("#201"));
    assert!(output.contains("#202"));
    assert!(output.contains("Showing 2 products"));
}

#[test]
fn test_search_list_text_output() {
    let slate = SlateTest::with_sample_catalog();

    let output = slate.run_success(&["search", "--view", "list", "--page", "10"]);
    assert!(output.contains("Grinder 4pc Aluminum"));
    assert!(output.contains("SRP"));
    assert!(output.contains("Showing 2 products in Page 10"));
}

#[test]
fn test_search_limit() {
    let slate = SlateTest::with_sample_catalog();

    let json = slate.run_json(&["search", "--limit", "2"]);
    assert_eq!(items(&json), vec!["100", "8006"]);
    assert_eq!(json["total"], 7);

    let output = slate.run_success(&["search", "--limit", "2"]);
    assert!(output.contains("Showing 7 products (first 2 shown)"));
}

#[test]
fn test_search_limit_zero_still_reports_matches() {
    let slate = SlateTest::with_sample_catalog();

    let json = slate.run_json(&["search", "--limit", "0"]);
    assert!(items(&json).is_empty());
    assert_eq!(json["total"], 7);

    let output = slate.run_success(&["search", "--limit", "0"]);
    assert!(!output.contains("No products found"));
    assert!(output.contains("Showing 7 products (first 0 shown)"));
}

#[test]
fn test_search_invalid_view_mode() {
    let slate = SlateTest::with_sample_catalog();

    let stderr = slate.run_failure(&["search", "--view", "table"]);
    assert!(stderr.contains("Invalid view mode"));
}

#[test]
fn test_search_missing_catalog() {
    let slate = SlateTest::new();

    let stderr = slate.run_failure(&["search", "tray"]);
    assert!(stderr.contains("catalog not found"));
}

#[test]
fn test_search_malformed_catalog() {
    let slate = SlateTest::new();
    slate.write_catalog("{ \"products\": [ ");

    let stderr = slate.run_failure(&["search"]);
    assert!(stderr.contains("failed to parse catalog"));
}

#[test]
fn test_search_catalog_override() {
    let slate = SlateTest::new();
    let path = common::fixtures::fixture_path("catalog.json");

    let json = slate.run_json(&["search", "grinder", "--catalog", path.to_str().unwrap()]);
    assert_eq!(items(&json), vec!["300"]);
}

#[test]
fn test_search_alias() {
    let slate = SlateTest::with_sample_catalog();

    let json = slate.run_json(&["s", "grinder"]);
    assert_eq!(items(&json), vec!["300"]);
}
