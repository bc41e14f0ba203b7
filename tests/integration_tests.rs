//! Integration tests for the resume assessor

use resume_assessor::advisory::salary::{format_currency, score_multiplier};
use resume_assessor::config::{OutputFormat, SalaryBand, ScoringConfig};
use resume_assessor::input::manager::InputManager;
use resume_assessor::output::formatter::{save_report_to_file, ReportGenerator};
use resume_assessor::processing::classifier::ExperienceTier;
use resume_assessor::processing::taxonomy::{Industry, KeywordTaxonomy};
use resume_assessor::{analyze, AnalysisEngine, AssessorError, Config};
use std::path::Path;
use tempfile::TempDir;

const SENIOR_RESUME: &str = "Principal Engineer\n\
    Experience: 10 years of professional work experience.\n\
    - Led platform work as technical lead for 3 years.\n\
    - Developed and managed distributed systems; responsible for hiring.\n\
    - Held a leadership role and a staff position after 6 years of employment.\n\
    - Worked with product leads on roadmap planning for 2 years.\n\
    - Managed the on-call rotation for 4 years and mentored engineers for 7 years.\n\
    Skills: Python, Go, Kubernetes, PostgreSQL, Leadership, Communication\n";

const HEALTHCARE_RESUME: &str = "Registered nurse providing patient care in a large hospital. \
    Clinical nursing experience with medical treatment plans, therapy coordination and \
    physician rounds. Compassionate and detail oriented.";

const MINIMAL_HEALTHCARE_RESUME: &str = "Nurse delivering patient care on a night ward. \
    Clinical nurse focused on patient care, clinical rounds and bedside patient care for every patient.";

const UNQUANTIFIED_RESUME: &str = "Jordan Lee\n\
    Customer service associate at a neighborhood store.\n\
    Helped guests with returns, handled the register and kept shelves tidy.\n\
    Friendly, reliable and eager to learn new things.\n";

async fn fixture_text(name: &str) -> String {
    InputManager::new()
        .extract_text(&Path::new("tests/fixtures").join(name))
        .await
        .unwrap()
}

#[tokio::test]
async fn test_text_extraction_from_txt() {
    let text = fixture_text("sample_resume.txt").await;

    assert!(text.contains("John Doe"));
    assert!(text.contains("Senior Software Engineer"));
    assert!(text.contains("Node.js"));
}

#[tokio::test]
async fn test_text_extraction_from_markdown() {
    let text = fixture_text("sample_resume.md").await;

    assert!(text.contains("John Doe"));
    assert!(text.contains("- Led a team of 5 developers delivering a React dashboard"));
    assert!(!text.contains("**"));
    assert!(!text.contains("##"));
}

#[tokio::test]
async fn test_caching_functionality() {
    let mut manager = InputManager::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let first = manager.extract_text(path).await.unwrap();
    assert_eq!(manager.cache_size(), 1);

    let second = manager.extract_text(path).await.unwrap();
    assert_eq!(first, second);
    assert_eq!(manager.cache_size(), 1);

    manager.clear_cache();
    assert_eq!(manager.cache_size(), 0);
}

#[tokio::test]
async fn test_cache_disabled() {
    let mut manager = InputManager::new().with_cache(false);
    manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();
    assert_eq!(manager.cache_size(), 0);
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let mut manager = InputManager::new();
    let result = manager
        .extract_text(Path::new("tests/fixtures/unsupported.xyz"))
        .await;

    match result {
        Err(AssessorError::UnsupportedFormat(message)) => assert!(message.contains("pdf")),
        other => panic!("expected UnsupportedFormat, got {:?}", other),
    }
}

#[tokio::test]
async fn test_missing_file_is_validation_error() {
    let mut manager = InputManager::new();
    let err = manager
        .extract_text(Path::new("tests/fixtures/does_not_exist.txt"))
        .await
        .unwrap_err();
    assert!(err.is_validation());
}

#[tokio::test]
async fn test_fixture_end_to_end() {
    let text = fixture_text("sample_resume.txt").await;
    let report = analyze(&text).unwrap();

    let scores = &report.scores;
    for score in [
        scores.overall,
        scores.skills,
        scores.experience,
        scores.education,
        scores.projects,
        scores.achievements,
        scores.formatting,
    ] {
        assert!(score <= 100);
    }

    assert_eq!(report.experience_level, ExperienceTier::Senior);
    assert!(report.primary_skills.len() <= 8);
    assert!(report.detailed_recommendations.len() <= 6);
    assert!(report.roadmap.len() <= 6);
    assert!(!report.target_roles.is_empty() && report.target_roles.len() <= 8);
    assert!(report.target_roles.contains(&"Professional".to_string()));
    assert!(report.target_roles.contains(&"Specialist".to_string()));
    assert!(report.primary_skills.contains(&"react".to_string()));
}

#[test]
fn test_analysis_is_deterministic() {
    let engine = AnalysisEngine::new(&Config::default()).unwrap();

    let first = engine.analyze(SENIOR_RESUME).unwrap();
    let second = engine.analyze(SENIOR_RESUME).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_minimum_length_boundary() {
    let err = analyze(&"a".repeat(99)).unwrap_err();
    assert!(err.is_validation());

    let err = analyze("").unwrap_err();
    assert!(err.is_validation());

    assert!(analyze(&"a".repeat(100)).is_ok());
}

#[test]
fn test_overall_is_weighted_sum_of_sections() {
    let report = analyze(SENIOR_RESUME).unwrap();

    let expected = report.scores.sections().overall(&ScoringConfig::default());
    assert_eq!(report.scores.overall, expected);
}

#[test]
fn test_senior_scenario() {
    let report = analyze(SENIOR_RESUME).unwrap();

    let year_mentions = regex::Regex::new(r"\b\d+ years\b")
        .unwrap()
        .find_iter(SENIOR_RESUME)
        .map(|m| m.as_str())
        .collect::<std::collections::HashSet<_>>();
    assert!(year_mentions.len() >= 5);

    assert!(report.scores.experience >= 80);
    assert_eq!(report.experience_level, ExperienceTier::Senior);

    let multiplier = score_multiplier(report.scores.overall);
    let low = (125_000.0 * multiplier).round() as u64;
    let high = (185_000.0 * multiplier).round() as u64;
    assert!(high <= 185_000);

    let bounds: Vec<u64> = report
        .salary_expectation
        .range
        .split(" - ")
        .map(|part| part.trim_start_matches('$').replace(',', "").parse().unwrap())
        .collect();
    assert_eq!(bounds, vec![low, high]);
    assert_eq!(
        report.salary_expectation.range,
        format!("{} - {}", format_currency(low), format_currency(high))
    );
    assert!(report.salary_expectation.justification.contains("Senior Level"));
}

#[test]
fn test_healthcare_scenario() {
    let report = analyze(HEALTHCARE_RESUME).unwrap();
    let profile = KeywordTaxonomy::global().profile(Industry::Healthcare);

    assert!(report.roadmap.len() >= 4);
    assert_eq!(report.roadmap[..3], profile.roadmap[..3]);
    assert_eq!(
        report.roadmap.last().map(|item| item.title.as_str()),
        Some("Continuous Professional Development")
    );
    assert!(report.executive_summary.contains("the healthcare industry"));
}

#[test]
fn test_minimal_healthcare_scenario() {
    let report = analyze(MINIMAL_HEALTHCARE_RESUME).unwrap();
    let profile = KeywordTaxonomy::global().profile(Industry::Healthcare);

    assert_eq!(report.roadmap[..3], profile.roadmap[..3]);
    assert!(report.executive_summary.contains("the healthcare industry"));
}

#[test]
fn test_quantification_recommendation_comes_first() {
    let report = analyze(UNQUANTIFIED_RESUME).unwrap();

    let first = &report.detailed_recommendations[0];
    assert_eq!(first.problem, "No quantified achievements found in your resume");
    assert!(report.high_priority_recommendations().count() >= 1);
}

#[test]
fn test_custom_salary_bands() {
    let mut config = Config::default();
    config
        .salary
        .bands
        .insert("senior".to_string(), SalaryBand { min: 200_000, max: 300_000 });

    let report = AnalysisEngine::new(&config)
        .unwrap()
        .analyze(SENIOR_RESUME)
        .unwrap();

    let multiplier = score_multiplier(report.scores.overall);
    let low = (200_000_f64 * multiplier).round() as u64;
    assert!(report
        .salary_expectation
        .range
        .starts_with(&format_currency(low)));
}

#[test]
fn test_config_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");

    let mut config = Config::default();
    config.scoring.skills_weight = 0.4;
    config.output.format = OutputFormat::Json;
    config.save_to(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_invalid_config_file_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is = not [valid").unwrap();

    assert!(matches!(
        Config::load_from(&path),
        Err(AssessorError::Configuration(_))
    ));
}

#[test]
fn test_report_saved_as_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out").join("report.json");

    let report = analyze(SENIOR_RESUME).unwrap();
    let json = ReportGenerator::new()
        .generate_report(&report, OutputFormat::Json)
        .unwrap();
    save_report_to_file(&json, &path).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["experienceLevel"], "Senior Level");
    assert_eq!(value["scores"]["overall"], report.scores.overall);
    assert!(value["salaryExpectation"]["range"].is_string());
}
