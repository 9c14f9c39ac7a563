//! Integration tests for the ATS scoring pipeline

use ats_scorer::scoring::scorer::{calculate_ats_score, calculate_enhanced_ats_score, AtsScorer};
use ats_scorer::{Config, MatchType};

fn keywords(list: &[&str]) -> Vec<String> {
    list.iter().map(|k| k.to_string()).collect()
}

fn sample_resume() -> String {
    std::fs::read_to_string("tests/fixtures/sample_resume.md").unwrap()
}

fn sample_keywords() -> Vec<String> {
    let raw = std::fs::read_to_string("tests/fixtures/keywords.txt").unwrap();
    raw.lines()
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty())
        .collect()
}

#[tokio::test]
async fn test_idempotence() {
    let resume = sample_resume();
    let keyword_list = sample_keywords();

    let first = calculate_enhanced_ats_score(&resume, &keyword_list).await;
    let second = calculate_enhanced_ats_score(&resume, &keyword_list).await;

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_score_bounds() {
    let inputs = [
        ("", vec![]),
        ("plain text", keywords(&["python"])),
        (
            "Skills:\nPython React AWS Docker Terraform PostgreSQL",
            keywords(&["Python", "React", "AWS", "Docker", "Terraform", "PostgreSQL"]),
        ),
    ];

    for (resume, keyword_list) in inputs {
        let result = calculate_enhanced_ats_score(resume, &keyword_list).await;
        assert!(result.score <= 100);
    }
}

#[tokio::test]
async fn test_empty_input_contract() {
    let empty_both = calculate_enhanced_ats_score("", &[]).await;
    assert_eq!(empty_both.score, 0);
    assert!(!empty_both.recommendations.is_empty());

    let empty_keywords = calculate_enhanced_ats_score("a valid resume text", &[]).await;
    assert_eq!(empty_keywords.score, 0);
    assert!(!empty_keywords.recommendations.is_empty());

    let whitespace_resume = calculate_enhanced_ats_score("   \n  ", &keywords(&["python"])).await;
    assert_eq!(whitespace_resume.score, 0);
    assert_eq!(whitespace_resume.missing_keywords, keywords(&["python"]));
}

#[tokio::test]
async fn test_missing_keyword_completeness() {
    let resume = "Skills:\nPython and React in production";
    let keyword_list = keywords(&["Python", "terraform", "elasticsearch", "cobol"]);

    let result = calculate_enhanced_ats_score(resume, &keyword_list).await;

    for absent in ["terraform", "elasticsearch", "cobol"] {
        assert!(
            result.missing_keywords.contains(&absent.to_string()),
            "{} should be reported missing",
            absent
        );
    }
}

#[tokio::test]
async fn test_related_terms_do_not_satisfy_keywords() {
    // "container" relates to "docker" conceptually, but the keyword itself
    // is absent and no variation appears, so it must be reported missing
    let resume = "Shipped services as container images";
    let result = calculate_enhanced_ats_score(resume, &keywords(&["docker"])).await;

    assert!(result.matched_keywords.is_empty());
    assert!(result.partial_matches.is_empty());
    assert!(result.missing_keywords.contains(&"docker".to_string()));
}

#[tokio::test]
async fn test_exact_match_guarantee() {
    let resume = "Skills:\nPython, React and daily AWS work";
    let result = calculate_enhanced_ats_score(&resume, &keywords(&["Python", "React", "AWS"])).await;

    for keyword in ["Python", "React", "AWS"] {
        let m = result
            .matched_keywords
            .iter()
            .find(|m| m.keyword == keyword)
            .unwrap_or_else(|| panic!("{} should be matched", keyword));
        assert_eq!(m.match_type, MatchType::Exact);
        assert!(!result.missing_keywords.contains(&keyword.to_string()));
    }
}

#[tokio::test]
async fn test_noise_keywords_do_not_inflate_score() {
    let resume = "Experience:\nStrong experience with the best skills";
    let result =
        calculate_enhanced_ats_score(resume, &keywords(&["experience", "strong", "the"])).await;

    assert_eq!(result.score, 0);
    assert!(result.matched_keywords.is_empty());
    assert!(result.partial_matches.is_empty());
}

#[tokio::test]
async fn test_truncation_clips_late_keywords() {
    // Filler past the 10k char cap, keyword only after the cap
    let mut resume = "word ".repeat(2100); // 10,500 chars
    resume.push_str("terraform");

    let result = calculate_enhanced_ats_score(&resume, &keywords(&["terraform"])).await;

    assert!(result.matched_keywords.is_empty());
    assert!(result.partial_matches.is_empty());
    assert!(result.missing_keywords.contains(&"terraform".to_string()));
}

#[tokio::test]
async fn test_sample_resume_scenario() {
    let resume = "# Jane Doe\n\n### SKILLS\nPython, React, AWS\n\n### EXPERIENCE\nBuilt scalable APIs.";
    let keyword_list = keywords(&["Python", "React", "AWS", "Kubernetes", "communication"]);

    let result = calculate_enhanced_ats_score(resume, &keyword_list).await;

    assert!(result.score > 0);
    for keyword in ["Python", "React", "AWS"] {
        let m = result
            .matched_keywords
            .iter()
            .find(|m| m.keyword == keyword)
            .unwrap_or_else(|| panic!("{} should be matched", keyword));
        assert_eq!(m.match_type, MatchType::Exact);
        // Matches land in a skills-flavored section with a boosted multiplier
        assert!(m.section.as_deref().unwrap_or("").contains("skills"));
        assert!(m.score > 1.0);
    }
    assert!(result.missing_keywords.contains(&"Kubernetes".to_string()));
    assert!(result.missing_keywords.contains(&"communication".to_string()));
}

#[tokio::test]
async fn test_synonym_normalization_scenario() {
    let resume = "I have shipped javascript services for years";
    let result = calculate_enhanced_ats_score(resume, &keywords(&["js"])).await;

    let m = result
        .matched_keywords
        .iter()
        .find(|m| m.keyword == "js")
        .expect("normalized keyword should match exactly");
    assert_eq!(m.match_type, MatchType::Exact);
    assert!(result.missing_keywords.is_empty());
}

#[tokio::test]
async fn test_keyword_cap_scenario() {
    // 40 keywords, every one present in the resume text
    let keyword_list: Vec<String> = (0..40).map(|i| format!("skillword{:02}", i)).collect();
    let resume = format!("Skills:\n{}", keyword_list.join(" "));

    let result = calculate_enhanced_ats_score(&resume, &keyword_list).await;

    assert_eq!(result.total_keywords, 40);
    let all_reported: Vec<&String> = result
        .matched_keywords
        .iter()
        .chain(result.partial_matches.iter())
        .map(|m| &m.keyword)
        .chain(result.missing_keywords.iter())
        .collect();

    for late in &keyword_list[30..] {
        assert!(
            !all_reported.contains(&late),
            "{} is past the cap and should be absent everywhere",
            late
        );
    }
    assert_eq!(result.matched_keywords.len(), 30);
}

#[tokio::test]
async fn test_fixture_resume_end_to_end() {
    let resume = sample_resume();
    let keyword_list = sample_keywords();

    let result = calculate_enhanced_ats_score(&resume, &keyword_list).await;

    assert!(result.score > 0);
    assert!(result
        .matched_keywords
        .iter()
        .any(|m| m.keyword == "Python" && m.match_type == MatchType::Exact));
    // "Kubernetes" only appears as its "k8s" variation
    assert!(result
        .partial_matches
        .iter()
        .any(|m| m.keyword == "Kubernetes"));
    assert!(result.missing_keywords.contains(&"communication".to_string()));
    assert!(!result.sections_detected.is_empty());
    assert!(!result.recommendations.is_empty());
}

#[tokio::test]
async fn test_timeout_produces_error_sentinel() {
    let mut config = Config::default();
    config.processing.time_budget_ms = 0;
    let scorer = AtsScorer::with_config(&config);

    let result = scorer
        .calculate_score(&sample_resume(), &sample_keywords())
        .await;

    assert_eq!(result.score, 0);
    assert!(result
        .recommendations
        .iter()
        .any(|r| r.contains("timeout")));
}

#[tokio::test]
async fn test_legacy_result_shape() {
    let resume = sample_resume();
    let keyword_list = sample_keywords();

    let enhanced = calculate_enhanced_ats_score(&resume, &keyword_list).await;
    let legacy = calculate_ats_score(&resume, &keyword_list).await;

    assert_eq!(legacy.score, enhanced.score);
    assert_eq!(legacy.total_keywords, enhanced.total_keywords);
    assert_eq!(legacy.missing_keywords, enhanced.missing_keywords);
    assert_eq!(legacy.recommendations, enhanced.recommendations);

    let flattened: Vec<String> = enhanced
        .matched_keywords
        .iter()
        .map(|m| m.keyword.clone())
        .collect();
    assert_eq!(legacy.matched_keywords, flattened);
}
