//! Output formatters: console, JSON, Markdown and HTML renderings of an assessment

use crate::advisory::recommendations::Priority;
use crate::advisory::roadmap::RoadmapItemType;
use crate::config::{OutputConfig, OutputFormat};
use crate::error::{AssessorError, Result};
use crate::output::report::AnalysisReport;
use askama::Template;
use colored::{Color, Colorize};
use std::path::Path;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Recommendations shown when console output is not detailed
const SUMMARY_RECOMMENDATION_COUNT: usize = 3;

/// Trait for rendering an assessment report
pub trait OutputFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Terminal output with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter {
    include_metadata: bool,
}

pub struct HtmlFormatter {
    include_styles: bool,
}

/// Dispatches a report to the formatter for the requested format
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
    html_formatter: HtmlFormatter,
}

fn priority_label(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "High",
        Priority::Medium => "Medium",
        Priority::Low => "Low",
    }
}

fn item_type_label(item_type: RoadmapItemType) -> &'static str {
    match item_type {
        RoadmapItemType::Learn => "learn",
        RoadmapItemType::Project => "project",
        RoadmapItemType::Milestone => "milestone",
    }
}

fn score_label(score: u8) -> &'static str {
    match score {
        90..=100 => "EXCELLENT",
        80..=89 => "VERY GOOD",
        70..=79 => "GOOD",
        60..=69 => "FAIR",
        50..=59 => "BELOW AVG",
        _ => "POOR",
    }
}

/// Ten-cell bar for a 0-100 score
fn score_bar(score: u8) -> String {
    let filled = (score.min(100) as usize + 5) / 10;
    format!("{}{}", "█".repeat(filled), "░".repeat(10 - filled))
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let (prefix, color) = match level {
            1 => ("█", Color::Blue),
            2 => ("▓", Color::Green),
            _ => ("▒", Color::Yellow),
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score_badge(&self, score: u8) -> String {
        let label = score_label(score);
        if !self.use_colors {
            return format!("[{}]", label);
        }

        let color = match score {
            80..=100 => Color::Green,
            60..=79 => Color::Yellow,
            _ => Color::Red,
        };
        format!("[{}]", label.color(color).bold())
    }

    fn format_priority_icon(&self, priority: Priority) -> &'static str {
        match (self.use_colors, priority) {
            (true, Priority::High) => "⚠️ ",
            (true, Priority::Medium) => "📋",
            (true, Priority::Low) => "💡",
            (false, Priority::High) => "[*]",
            (false, Priority::Medium) => "[-]",
            (false, Priority::Low) => "[+]",
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let mut output = String::new();
        let scores = &report.scores;

        output.push_str(&self.format_header("RESUME CAREER ASSESSMENT", 1));
        output.push_str(&format!(
            "Generated: {}\n",
            chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        ));

        // Summary
        output.push_str(&self.format_header("Executive Summary", 2));
        output.push_str(&format!(
            "Overall Score: {}/100 {}\n",
            scores.overall,
            self.format_score_badge(scores.overall)
        ));
        output.push_str(&format!(
            "Experience Level: {}\n",
            self.colorize(&report.experience_level.to_string(), Color::Cyan)
        ));
        output.push_str(&format!("Verdict: {}\n\n", self.colorize(report.verdict(), Color::Cyan)));
        output.push_str(&format!("{}\n", report.executive_summary));

        // Scores
        output.push_str(&self.format_header("Section Scores", 3));
        for (section, score) in scores.sections().named() {
            output.push_str(&format!("  {:<13} {} {:>3}\n", section, score_bar(score), score));
        }

        if !report.strengths.is_empty() {
            output.push_str(&self.format_header("Strengths", 3));
            for strength in &report.strengths {
                output.push_str(&format!("  • {}\n", self.colorize(strength, Color::Green)));
            }
        }

        if !report.weaknesses.is_empty() {
            output.push_str(&self.format_header("Areas for Improvement", 3));
            for weakness in &report.weaknesses {
                output.push_str(&format!("  • {}\n", self.colorize(weakness, Color::Yellow)));
            }
        }

        if !report.primary_skills.is_empty() {
            output.push_str(&self.format_header("Primary Skills", 3));
            output.push_str(&format!("  {}\n", report.primary_skills.join(", ")));
        }

        // Recommendations
        if !report.detailed_recommendations.is_empty() {
            output.push_str(&self.format_header("Recommendations", 2));
            let shown = if self.detailed {
                report.detailed_recommendations.len()
            } else {
                SUMMARY_RECOMMENDATION_COUNT
            };

            for (i, rec) in report.detailed_recommendations.iter().take(shown).enumerate() {
                output.push_str(&format!(
                    "{}. {} {} {}\n",
                    i + 1,
                    self.format_priority_icon(rec.priority),
                    self.colorize(&rec.problem, Color::White),
                    self.colorize(&format!("({})", priority_label(rec.priority)), Color::BrightBlack)
                ));
                output.push_str(&format!("   {}\n", rec.solution));
                if self.detailed {
                    output.push_str(&format!(
                        "   Impact: {}\n",
                        self.colorize(&rec.expected_impact, Color::Green)
                    ));
                }
            }

            let hidden = report.detailed_recommendations.len().saturating_sub(shown);
            if hidden > 0 {
                output.push_str(&format!(
                    "   ... {} more (use --detailed to see all)\n",
                    hidden
                ));
            }
        }

        // Roadmap
        if !report.roadmap.is_empty() {
            output.push_str(&self.format_header("Career Roadmap", 2));
            for (i, step) in report.roadmap.iter().enumerate() {
                output.push_str(&format!(
                    "{}. [{}] {}\n",
                    i + 1,
                    item_type_label(step.item_type),
                    self.colorize(&step.title, Color::White)
                ));
                if self.detailed {
                    output.push_str(&format!("   {}\n", step.description));
                }
            }
        }

        if !report.target_roles.is_empty() {
            output.push_str(&self.format_header("Target Roles", 2));
            for role in &report.target_roles {
                output.push_str(&format!("  • {}\n", role));
            }
        }

        output.push_str(&self.format_header("Salary Expectation", 2));
        output.push_str(&format!(
            "{}\n",
            self.colorize(&report.salary_expectation.range, Color::Green)
        ));
        output.push_str(&format!("{}\n", report.salary_expectation.justification));

        output.push_str(&format!("\nGenerated by resume-assessor v{}\n", VERSION));

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let mut content = String::new();
        let scores = &report.scores;

        content.push_str("# Resume Career Assessment\n\n");
        if self.include_metadata {
            content.push_str(&format!(
                "*Generated {} by resume-assessor v{}*\n\n",
                chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC"),
                VERSION
            ));
        }

        content.push_str("## Executive Summary\n\n");
        content.push_str(&format!(
            "**Overall Score:** {}/100 ({})  \n**Experience Level:** {}  \n**Verdict:** {}\n\n",
            scores.overall,
            score_label(scores.overall),
            report.experience_level,
            report.verdict()
        ));
        content.push_str(&format!("{}\n\n", report.executive_summary));

        content.push_str("## Section Scores\n\n| Section | Score |\n|---------|-------|\n");
        for (section, score) in scores.sections().named() {
            content.push_str(&format!("| {} | {} |\n", section, score));
        }
        content.push('\n');

        if !report.strengths.is_empty() {
            content.push_str("## Strengths\n\n");
            for strength in &report.strengths {
                content.push_str(&format!("- {}\n", strength));
            }
            content.push('\n');
        }

        if !report.weaknesses.is_empty() {
            content.push_str("## Areas for Improvement\n\n");
            for weakness in &report.weaknesses {
                content.push_str(&format!("- {}\n", weakness));
            }
            content.push('\n');
        }

        if !report.primary_skills.is_empty() {
            content.push_str("## Primary Skills\n\n");
            content.push_str(&format!("{}\n\n", report.primary_skills.join(", ")));
        }

        if !report.detailed_recommendations.is_empty() {
            content.push_str("## Recommendations\n\n");
            for (i, rec) in report.detailed_recommendations.iter().enumerate() {
                content.push_str(&format!(
                    "### {}. {} ({} priority)\n\n",
                    i + 1,
                    rec.problem,
                    priority_label(rec.priority)
                ));
                content.push_str(&format!("{}\n\n", rec.solution));
                content.push_str(&format!("*Expected impact:* {}\n\n", rec.expected_impact));
            }
        }

        if !report.roadmap.is_empty() {
            content.push_str("## Career Roadmap\n\n");
            for (i, step) in report.roadmap.iter().enumerate() {
                content.push_str(&format!(
                    "{}. **{}** `{}`: {}\n",
                    i + 1,
                    step.title,
                    item_type_label(step.item_type),
                    step.description
                ));
            }
            content.push('\n');
        }

        if !report.target_roles.is_empty() {
            content.push_str("## Target Roles\n\n");
            for role in &report.target_roles {
                content.push_str(&format!("- {}\n", role));
            }
            content.push('\n');
        }

        content.push_str("## Salary Expectation\n\n");
        content.push_str(&format!(
            "**{}**\n\n{}\n",
            report.salary_expectation.range, report.salary_expectation.justification
        ));

        Ok(content)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

struct HtmlScore {
    name: String,
    value: u8,
}

struct HtmlRecommendation {
    priority_class: &'static str,
    priority: &'static str,
    problem: String,
    solution: String,
    impact: String,
}

struct HtmlRoadmapStep {
    kind: &'static str,
    title: String,
    description: String,
}

/// Askama template for HTML output
#[derive(Template)]
#[template(source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Resume Career Assessment</title>
    {% if include_styles %}
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            line-height: 1.6;
            color: #333;
            max-width: 900px;
            margin: 0 auto;
            padding: 20px;
            background: #f8f9fa;
        }
        .container { background: white; padding: 30px; border-radius: 8px; box-shadow: 0 2px 10px rgba(0,0,0,0.1); }
        .header { text-align: center; margin-bottom: 30px; border-bottom: 3px solid #007acc; padding-bottom: 20px; }
        .score-badge { display: inline-block; padding: 8px 16px; border-radius: 20px; font-weight: bold; color: white; margin-left: 10px; }
        .score-excellent { background: #28a745; }
        .score-good { background: #17a2b8; }
        .score-fair { background: #ffc107; color: #000; }
        .score-poor { background: #dc3545; }
        .section h2 { color: #007acc; border-bottom: 2px solid #e9ecef; padding-bottom: 10px; }
        .score-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(160px, 1fr)); gap: 15px; }
        .score-item { background: #f8f9fa; padding: 15px; border-radius: 6px; border-left: 4px solid #007acc; }
        .recommendation { padding: 15px; margin: 10px 0; border-radius: 6px; border-left: 4px solid #17a2b8; background: #f8f9fa; }
        .priority-high { border-left-color: #dc3545; }
        .priority-medium { border-left-color: #ffc107; }
        .priority-low { border-left-color: #28a745; }
        .step-type { font-size: 0.8em; text-transform: uppercase; color: #6c757d; }
        .salary { font-size: 1.4em; font-weight: bold; color: #28a745; }
        .metadata { background: #e9ecef; padding: 15px; border-radius: 6px; margin-top: 30px; font-size: 0.9em; color: #6c757d; }
    </style>
    {% endif %}
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>Resume Career Assessment</h1>
            <p>Generated: {{ generated_at }}</p>
        </div>

        <div class="section">
            <h2>Executive Summary</h2>
            <h3>Overall Score: {{ overall_score }}/100 <span class="score-badge {{ score_class }}">{{ score_label }}</span></h3>
            <p><strong>Experience Level:</strong> {{ experience_level }}</p>
            <p><strong>Verdict:</strong> {{ verdict }}</p>
            <p>{{ executive_summary }}</p>
        </div>

        <div class="section">
            <h2>Section Scores</h2>
            <div class="score-grid">
                {% for score in section_scores %}
                <div class="score-item"><h4>{{ score.name }}</h4><p><strong>{{ score.value }}</strong>/100</p></div>
                {% endfor %}
            </div>
        </div>

        {% if has_strengths %}
        <div class="section">
            <h2>Strengths</h2>
            <ul>{% for strength in strengths %}<li>{{ strength }}</li>{% endfor %}</ul>
        </div>
        {% endif %}

        {% if has_weaknesses %}
        <div class="section">
            <h2>Areas for Improvement</h2>
            <ul>{% for weakness in weaknesses %}<li>{{ weakness }}</li>{% endfor %}</ul>
        </div>
        {% endif %}

        {% if has_primary_skills %}
        <div class="section">
            <h2>Primary Skills</h2>
            <p>{{ primary_skills }}</p>
        </div>
        {% endif %}

        {% if has_recommendations %}
        <div class="section">
            <h2>Recommendations</h2>
            {% for rec in recommendations %}
            <div class="recommendation priority-{{ rec.priority_class }}">
                <h4>{{ rec.problem }} ({{ rec.priority }})</h4>
                <p>{{ rec.solution }}</p>
                <p><em>Expected impact:</em> {{ rec.impact }}</p>
            </div>
            {% endfor %}
        </div>
        {% endif %}

        <div class="section">
            <h2>Career Roadmap</h2>
            <ol>
            {% for step in roadmap %}
                <li><span class="step-type">{{ step.kind }}</span> <strong>{{ step.title }}</strong><br>{{ step.description }}</li>
            {% endfor %}
            </ol>
        </div>

        <div class="section">
            <h2>Target Roles</h2>
            <ul>{% for role in target_roles %}<li>{{ role }}</li>{% endfor %}</ul>
        </div>

        <div class="section">
            <h2>Salary Expectation</h2>
            <p class="salary">{{ salary_range }}</p>
            <p>{{ salary_justification }}</p>
        </div>

        <div class="metadata">
            <p><strong>Generated by resume-assessor v{{ version }}</strong></p>
        </div>
    </div>
</body>
</html>"#, ext = "html")]
struct HtmlTemplate {
    include_styles: bool,
    generated_at: String,
    overall_score: u8,
    score_class: &'static str,
    score_label: &'static str,
    experience_level: String,
    verdict: &'static str,
    executive_summary: String,
    section_scores: Vec<HtmlScore>,
    strengths: Vec<String>,
    has_strengths: bool,
    weaknesses: Vec<String>,
    has_weaknesses: bool,
    primary_skills: String,
    has_primary_skills: bool,
    recommendations: Vec<HtmlRecommendation>,
    has_recommendations: bool,
    roadmap: Vec<HtmlRoadmapStep>,
    target_roles: Vec<String>,
    salary_range: String,
    salary_justification: String,
    version: &'static str,
}

impl HtmlFormatter {
    pub fn new(include_styles: bool) -> Self {
        Self { include_styles }
    }

    fn create_template_data(&self, report: &AnalysisReport) -> HtmlTemplate {
        let overall = report.scores.overall;
        let (score_class, score_label) = match overall {
            90..=100 => ("score-excellent", "Excellent"),
            70..=89 => ("score-good", "Good"),
            50..=69 => ("score-fair", "Fair"),
            _ => ("score-poor", "Poor"),
        };

        let section_scores = report
            .scores
            .sections()
            .named()
            .iter()
            .map(|(name, value)| HtmlScore {
                name: name.to_string(),
                value: *value,
            })
            .collect();

        let recommendations = report
            .detailed_recommendations
            .iter()
            .map(|rec| {
                let priority = priority_label(rec.priority);
                HtmlRecommendation {
                    priority_class: match rec.priority {
                        Priority::High => "high",
                        Priority::Medium => "medium",
                        Priority::Low => "low",
                    },
                    priority,
                    problem: rec.problem.clone(),
                    solution: rec.solution.clone(),
                    impact: rec.expected_impact.clone(),
                }
            })
            .collect();

        let roadmap = report
            .roadmap
            .iter()
            .map(|step| HtmlRoadmapStep {
                kind: item_type_label(step.item_type),
                title: step.title.clone(),
                description: step.description.clone(),
            })
            .collect();

        HtmlTemplate {
            include_styles: self.include_styles,
            generated_at: chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            overall_score: overall,
            score_class,
            score_label,
            experience_level: report.experience_level.to_string(),
            verdict: report.verdict(),
            executive_summary: report.executive_summary.clone(),
            section_scores,
            strengths: report.strengths.clone(),
            has_strengths: !report.strengths.is_empty(),
            weaknesses: report.weaknesses.clone(),
            has_weaknesses: !report.weaknesses.is_empty(),
            primary_skills: report.primary_skills.join(", "),
            has_primary_skills: !report.primary_skills.is_empty(),
            recommendations,
            has_recommendations: !report.detailed_recommendations.is_empty(),
            roadmap,
            target_roles: report.target_roles.clone(),
            salary_range: report.salary_expectation.range.clone(),
            salary_justification: report.salary_expectation.justification.clone(),
            version: VERSION,
        }
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        self.create_template_data(report)
            .render()
            .map_err(|e| AssessorError::OutputFormatting(e.to_string()))
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Html
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, false, true, true, true)
    }

    pub fn with_options(
        use_colors: bool,
        detailed: bool,
        pretty_json: bool,
        include_metadata: bool,
        include_html_styles: bool,
    ) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
            html_formatter: HtmlFormatter::new(include_html_styles),
        }
    }

    pub fn from_config(output: &OutputConfig) -> Self {
        Self::with_options(output.color_output, output.detailed, true, true, true)
    }

    pub fn generate_report(&self, report: &AnalysisReport, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
            OutputFormat::Html => self.html_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: OutputFormat, resume_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(resume_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    let extension = match format {
        OutputFormat::Console => "txt",
        OutputFormat::Json => "json",
        OutputFormat::Markdown => "md",
        OutputFormat::Html => "html",
    };

    format!("{}_assessment{}.{}", base_name, timestamp_suffix, extension)
}
