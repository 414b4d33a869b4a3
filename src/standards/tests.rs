use crate::types::CompareFilter;

use super::*;

fn names<'a>(topics: &[&'a ComparisonTopic]) -> Vec<&'a str> {
    topics.iter().map(|t| t.name.as_str()).collect()
}

fn ids_of<'a>(standards: &[&'a Standard]) -> Vec<&'a str> {
    standards.iter().map(|s| s.id.as_str()).collect()
}

#[test]
fn datasets_parse_and_are_nonempty() {
    let standards = load_standards().expect("standards dataset");
    let topics = load_comparison_topics().expect("topics dataset");
    assert_eq!(standards.len(), 3);
    assert_eq!(topics.len(), 5);
}

#[test]
fn standard_ids_are_unique() {
    let mut ids: Vec<&str> = STANDARDS.iter().map(|s| s.id.as_str()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), STANDARDS.len());
}

#[test]
fn every_standard_has_key_points_and_topics() {
    for s in STANDARDS.iter() {
        assert!(!s.key_points.is_empty(), "{} has no key points", s.id);
        assert!(!s.topics.is_empty(), "{} has no topics", s.id);
    }
}

#[test]
fn empty_query_returns_all_in_table_order() {
    let all = filter_standards(&STANDARDS, "");
    assert_eq!(all.len(), STANDARDS.len());
    let ids: Vec<&str> = all.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["pmbok", "prince2", "iso"]);
}

#[test]
fn search_returns_subset_without_duplicates() {
    for query in ["", "a", "management", "zzz-no-such-thing"] {
        let matches = filter_standards(&STANDARDS, query);
        assert!(matches.len() <= STANDARDS.len());
        let mut ids: Vec<&str> = matches.iter().map(|s| s.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), matches.len(), "duplicate result for {query:?}");
    }
}

#[test]
fn search_is_case_insensitive() {
    let lower = ids_of(&filter_standards(&STANDARDS, "pmbok"));
    let upper = ids_of(&filter_standards(&STANDARDS, "PMBOK"));
    assert_eq!(lower, upper);
    assert!(lower.contains(&"pmbok"));
}

#[test]
fn risk_query_matches_standards_with_a_risk_topic() {
    // PRINCE2 and ISO both list "Risk Management"; PMBOK covers risk under the
    // Uncertainty Performance Domain, which the substring does not hit.
    let matches = ids_of(&filter_standards(&STANDARDS, "risk"));
    assert_eq!(matches, vec!["prince2", "iso"]);
}

#[test]
fn full_name_and_description_are_searched() {
    let by_full_name = filter_standards(&STANDARDS, "controlled environments");
    assert_eq!(ids_of(&by_full_name), vec!["prince2"]);

    let by_description = filter_standards(&STANDARDS, "portfolio management");
    assert!(ids_of(&by_description).contains(&"iso"));
}

#[test]
fn no_match_yields_empty_result() {
    assert!(filter_standards(&STANDARDS, "agile manifesto").is_empty());
}

#[test]
fn all_filter_passes_every_topic_in_source_order() {
    let all = filter_topics(&COMPARISON_TOPICS, CompareFilter::All);
    assert_eq!(
        names(&all),
        vec![
            "Risk Management",
            "Stakeholder Engagement",
            "Quality Assurance",
            "Change Control",
            "Project Governance",
        ]
    );
}

#[test]
fn similarities_filter_passes_only_high() {
    let similar = filter_topics(&COMPARISON_TOPICS, CompareFilter::Similarities);
    assert_eq!(names(&similar), vec!["Risk Management", "Stakeholder Engagement"]);
    assert!(similar.iter().all(|t| t.similarity == Similarity::High));
}

#[test]
fn differences_filter_passes_only_low() {
    let different = filter_topics(&COMPARISON_TOPICS, CompareFilter::Differences);
    assert_eq!(names(&different), vec!["Project Governance"]);
    assert!(different.iter().all(|t| t.similarity == Similarity::Low));
}

#[test]
fn medium_topics_appear_under_all_only() {
    let medium: Vec<&str> = COMPARISON_TOPICS
        .iter()
        .filter(|t| t.similarity == Similarity::Medium)
        .map(|t| t.name.as_str())
        .collect();
    assert_eq!(medium, vec!["Quality Assurance", "Change Control"]);

    for filter in [CompareFilter::Similarities, CompareFilter::Differences] {
        let shown = filter_topics(&COMPARISON_TOPICS, filter);
        assert!(shown.iter().all(|t| t.similarity != Similarity::Medium));
    }
}

#[test]
fn filters_are_idempotent() {
    let a = filter_standards(&STANDARDS, "Quality");
    let b = filter_standards(&STANDARDS, "Quality");
    assert_eq!(ids_of(&a), ids_of(&b));

    let x = filter_topics(&COMPARISON_TOPICS, CompareFilter::Similarities);
    let y = filter_topics(&COMPARISON_TOPICS, CompareFilter::Similarities);
    assert_eq!(names(&x), names(&y));
}
