use postcheck::prompt::{
    SUMMARY_END_TAG, SUMMARY_START_TAG, build_summary_prompt, extract_report,
};

#[test]
fn test_extract_report_unwraps_delimited_payload() {
    let raw = "noise<summary>REPORT</summary>trailer";
    assert_eq!(extract_report(raw), "REPORT");
}

#[test]
fn test_extract_report_passes_through_undelimited_response() {
    let raw = "### Summary of SW7 2BU\n\nPlain response with no tags.";
    assert_eq!(extract_report(raw), raw);
}

#[test]
fn test_extract_report_requires_both_tags() {
    // A lone start tag is not a delimited payload
    let only_start = "prefix<summary>rest of the text";
    assert_eq!(extract_report(only_start), only_start);

    // A lone end tag is not a delimited payload either
    let only_end = "some text</summary>suffix";
    assert_eq!(extract_report(only_end), only_end);
}

#[test]
fn test_extract_report_preserves_inner_text_exactly() {
    let raw = format!("{SUMMARY_START_TAG}\n  report body\n{SUMMARY_END_TAG}");
    assert_eq!(extract_report(&raw), "\n  report body\n");
}

#[test]
fn test_prompt_embeds_corpus_verbatim() {
    let corpus = "Population: 327 residents  Broadband: Ultrafast";
    let prompt = build_summary_prompt(corpus);

    assert!(
        prompt.contains(corpus),
        "Prompt should contain the corpus unchanged"
    );
    assert!(
        prompt.contains("<area_description>") && prompt.contains("</area_description>"),
        "Corpus should sit between the area_description tags"
    );
}

#[test]
fn test_prompt_states_required_categories_and_rules() {
    let prompt = build_summary_prompt("corpus");

    for category in [
        "general characteristics",
        "amenities",
        "Demographics",
        "Economic activity",
        "Housing types",
        "Housing tenure",
        "Household deprivation",
        "Crime",
        "Notable statistics",
    ] {
        assert!(
            prompt.to_lowercase().contains(&category.to_lowercase()),
            "Prompt should require the {category} category"
        );
    }

    assert!(
        prompt.contains("exceed 100%"),
        "Prompt should state the proportional-rescaling rule"
    );
    assert!(
        prompt.contains(SUMMARY_START_TAG) && prompt.contains(SUMMARY_END_TAG),
        "Prompt should instruct the model to wrap the report in summary tags"
    );
}
