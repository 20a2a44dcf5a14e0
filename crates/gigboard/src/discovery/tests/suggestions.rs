use super::common::job;
use crate::discovery::domain::JobCategory;
use crate::discovery::suggest::suggest;

#[test]
fn empty_or_whitespace_query_yields_no_suggestions() {
    let jobs = vec![job("a", "React dashboard", JobCategory::WebDevelopment, 1_000, 0)];
    assert!(suggest("", &jobs, &JobCategory::ALL).is_empty());
    assert!(suggest("   ", &jobs, &JobCategory::ALL).is_empty());
}

#[test]
fn titles_come_before_category_labels() {
    let jobs = vec![
        job("a", "Web scraping script", JobCategory::SoftwareDevelopment, 1_000, 0),
        job("b", "Logo design", JobCategory::GraphicDesign, 2_000, 1),
    ];

    let suggestions = suggest("web", &jobs, &JobCategory::ALL);
    assert_eq!(suggestions.first().map(String::as_str), Some("Web scraping script"));
    assert!(suggestions.contains(&"Web Development".to_string()));
}

#[test]
fn suggestions_never_contain_duplicates() {
    // Two identical titles, and a title equal to a category label.
    let jobs = vec![
        job("a", "Graphic Design", JobCategory::GraphicDesign, 1_000, 0),
        job("b", "Graphic Design", JobCategory::GraphicDesign, 2_000, 1),
        job("c", "Motion design reel", JobCategory::MotionGraphics, 3_000, 2),
    ];

    let suggestions = suggest("design", &jobs, &JobCategory::ALL);
    let mut deduped = suggestions.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(suggestions.len(), deduped.len(), "duplicates in {suggestions:?}");
    assert_eq!(
        suggestions
            .iter()
            .filter(|suggestion| suggestion.as_str() == "Graphic Design")
            .count(),
        1
    );
}

#[test]
fn matching_is_case_insensitive_substring() {
    let jobs = vec![job("a", "Amharic TRANSLATION gig", JobCategory::TranslationAndLocalization, 1_000, 0)];
    let suggestions = suggest("translat", &jobs, &JobCategory::ALL);
    assert!(suggestions.contains(&"Amharic TRANSLATION gig".to_string()));
    assert!(suggestions.contains(&"Translation & Localization".to_string()));
}
