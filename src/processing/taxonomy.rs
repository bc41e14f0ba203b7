//! Static keyword tables: industry keyword groups, skill categories, industry profiles
//! (detection indicators, roadmap and role templates) and section pattern lists

use crate::advisory::roadmap::{RoadmapItem, RoadmapItemType};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;

static TAXONOMY: Lazy<KeywordTaxonomy> = Lazy::new(KeywordTaxonomy::build);

/// Skill category that does not count toward the technical-category maximum
pub const SOFT_SKILLS_CATEGORY: &str = "soft_skills";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Industry {
    Technology,
    Business,
    Healthcare,
    Education,
    Engineering,
    Creative,
    Service,
    Legal,
    Government,
    Finance,
    General,
}

impl Industry {
    /// Iteration order used by industry detection; earlier entries win ties
    pub const DETECTION_ORDER: [Industry; 10] = [
        Industry::Technology,
        Industry::Business,
        Industry::Healthcare,
        Industry::Education,
        Industry::Engineering,
        Industry::Creative,
        Industry::Service,
        Industry::Legal,
        Industry::Government,
        Industry::Finance,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Industry::Technology => "technology",
            Industry::Business => "business",
            Industry::Healthcare => "healthcare",
            Industry::Education => "education",
            Industry::Engineering => "engineering",
            Industry::Creative => "creative",
            Industry::Service => "service",
            Industry::Legal => "legal",
            Industry::Government => "government",
            Industry::Finance => "finance",
            Industry::General => "general",
        }
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Industry::Technology => "Technology",
            Industry::Business => "Business",
            Industry::Healthcare => "Healthcare",
            Industry::Education => "Education",
            Industry::Engineering => "Engineering",
            Industry::Creative => "Creative",
            Industry::Service => "Service",
            Industry::Legal => "Legal",
            Industry::Government => "Government",
            Industry::Finance => "Finance",
            Industry::General => "General",
        };
        write!(f, "{}", name)
    }
}

/// Remove internal whitespace so multi-word keywords can be compared against single tokens
pub fn clean_keyword(keyword: &str) -> String {
    keyword.split_whitespace().collect()
}

/// Loose match used for keyword groups: either side may contain the other
pub fn bidirectional_match(token: &str, cleaned_keyword: &str) -> bool {
    token.contains(cleaned_keyword) || cleaned_keyword.contains(token)
}

/// Named keyword list with its whitespace-stripped match forms precomputed
#[derive(Debug, Clone)]
pub struct KeywordGroup {
    pub name: String,
    pub keywords: Vec<String>,
    cleaned: Vec<String>,
}

impl KeywordGroup {
    pub fn new(name: &str, keywords: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            cleaned: keywords.iter().map(|k| clean_keyword(k)).collect(),
        }
    }

    /// True when the token bidirectionally matches any keyword of the group
    pub fn matches_token(&self, token: &str) -> bool {
        self.cleaned.iter().any(|k| bidirectional_match(token, k))
    }

    /// Number of tokens that match the group
    pub fn count_matching_tokens(&self, tokens: &[String]) -> usize {
        tokens.iter().filter(|t| self.matches_token(t)).count()
    }

    /// Number of keywords that have at least one matching token
    pub fn count_matched_keywords(&self, tokens: &[String]) -> usize {
        self.cleaned
            .iter()
            .filter(|k| tokens.iter().any(|t| bidirectional_match(t, k)))
            .count()
    }

    /// Number of tokens containing any keyword (one direction only)
    pub fn count_containing_tokens(&self, tokens: &[String]) -> usize {
        tokens
            .iter()
            .filter(|t| self.cleaned.iter().any(|k| t.contains(k.as_str())))
            .count()
    }
}

#[derive(Debug, Clone)]
pub struct IndustryProfile {
    pub industry: Industry,
    pub indicators: KeywordGroup,
    pub roadmap: Vec<RoadmapItem>,
    pub roles: Vec<String>,
}

impl IndustryProfile {
    pub fn new(
        industry: Industry,
        indicators: &[&str],
        roadmap: Vec<RoadmapItem>,
        roles: &[&str],
    ) -> Self {
        Self {
            industry,
            indicators: KeywordGroup::new(industry.key(), indicators),
            roadmap,
            roles: roles.iter().map(|r| r.to_string()).collect(),
        }
    }
}

/// Token patterns counted by simple containment for each resume section
#[derive(Debug, Clone)]
pub struct SectionPatterns {
    pub skills: Vec<String>,
    pub experience: Vec<String>,
    pub education: Vec<String>,
    pub projects: Vec<String>,
    pub achievements: Vec<String>,
    pub quantification: Vec<String>,
}

/// Count tokens that contain at least one of the patterns
pub fn count_pattern_tokens(tokens: &[String], patterns: &[String]) -> usize {
    tokens
        .iter()
        .filter(|t| patterns.iter().any(|p| t.contains(p.as_str())))
        .count()
}

#[derive(Debug, Clone)]
pub struct KeywordTaxonomy {
    pub industry_keywords: Vec<KeywordGroup>,
    pub skill_categories: Vec<KeywordGroup>,
    /// Profiles in `Industry::DETECTION_ORDER`
    pub profiles: Vec<IndustryProfile>,
    pub general: IndustryProfile,
    pub patterns: SectionPatterns,
}

impl Default for KeywordTaxonomy {
    fn default() -> Self {
        Self::build()
    }
}

impl KeywordTaxonomy {
    /// Process-wide shared taxonomy, built on first use
    pub fn global() -> &'static KeywordTaxonomy {
        &TAXONOMY
    }

    pub fn profile(&self, industry: Industry) -> &IndustryProfile {
        self.profiles
            .iter()
            .find(|p| p.industry == industry)
            .unwrap_or(&self.general)
    }

    pub fn technical_categories(&self) -> impl Iterator<Item = &KeywordGroup> {
        self.skill_categories
            .iter()
            .filter(|c| c.name != SOFT_SKILLS_CATEGORY)
    }

    fn build() -> Self {
        Self {
            industry_keywords: Self::default_industry_keywords(),
            skill_categories: Self::default_skill_categories(),
            profiles: Self::default_profiles(),
            general: Self::general_profile(),
            patterns: Self::default_section_patterns(),
        }
    }

    fn default_industry_keywords() -> Vec<KeywordGroup> {
        vec![
            KeywordGroup::new("frontend", &[
                "react", "javascript", "typescript", "html", "css", "vue", "angular", "redux",
                "webpack", "tailwind",
            ]),
            KeywordGroup::new("backend", &[
                "node.js", "python", "java", "api", "microservices", "sql", "django", "spring",
                "express", "graphql",
            ]),
            KeywordGroup::new("fullstack", &[
                "full stack", "mern", "rest api", "frontend", "backend", "deployment",
                "web application", "mean stack",
            ]),
            KeywordGroup::new("mobile", &[
                "android", "ios", "swift", "kotlin", "flutter", "react native", "mobile app",
                "xcode",
            ]),
            KeywordGroup::new("data_science", &[
                "machine learning", "data analysis", "pandas", "numpy", "tensorflow", "pytorch",
                "statistics", "visualization", "deep learning", "scikit-learn",
            ]),
            KeywordGroup::new("devops", &[
                "docker", "kubernetes", "aws", "ci/cd", "terraform", "jenkins", "linux",
                "monitoring", "azure", "ansible",
            ]),
            KeywordGroup::new("cybersecurity", &[
                "security", "penetration testing", "firewall", "encryption", "siem",
                "vulnerability", "incident response", "threat",
            ]),
            KeywordGroup::new("product_management", &[
                "roadmap", "stakeholder", "product strategy", "user research", "agile", "scrum",
                "prioritization", "kpi",
            ]),
            KeywordGroup::new("design", &[
                "figma", "sketch", "ui/ux", "wireframe", "prototype", "user experience", "adobe",
                "typography",
            ]),
            KeywordGroup::new("marketing", &[
                "seo", "content marketing", "social media", "campaign", "analytics", "branding",
                "email marketing", "crm",
            ]),
        ]
    }

    fn default_skill_categories() -> Vec<KeywordGroup> {
        vec![
            KeywordGroup::new("programming_languages", &[
                "python", "javascript", "java", "typescript", "c++", "c#", "golang", "rust", "ruby",
                "php", "swift", "kotlin",
            ]),
            KeywordGroup::new("web_frameworks", &[
                "react", "angular", "vue", "django", "flask", "spring", "express", "next.js",
                "rails", "laravel",
            ]),
            KeywordGroup::new("databases", &[
                "sql", "mysql", "postgresql", "mongodb", "redis", "oracle", "sqlite", "dynamodb",
                "cassandra", "elasticsearch",
            ]),
            KeywordGroup::new("cloud_devops", &[
                "aws", "azure", "gcp", "docker", "kubernetes", "terraform", "jenkins", "ci/cd",
                "ansible", "linux",
            ]),
            KeywordGroup::new("data_analytics", &[
                "pandas", "numpy", "tableau", "excel", "power bi", "tensorflow", "pytorch", "spark",
                "statistics", "machine learning",
            ]),
            KeywordGroup::new(SOFT_SKILLS_CATEGORY, &[
                "leadership", "communication", "teamwork", "problem solving", "collaboration",
                "mentoring", "negotiation", "presentation",
            ]),
        ]
    }

    fn default_section_patterns() -> SectionPatterns {
        let strings = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();

        SectionPatterns {
            skills: strings(&[
                "skill", "profici", "expert", "technolog", "languag", "framework", "tool",
                "competen", "softwar",
            ]),
            experience: strings(&[
                "experi", "work", "employ", "job", "posit", "role", "manag", "lead", "led",
                "develop", "respons", "intern",
            ]),
            education: strings(&[
                "educ", "degre", "bachelor", "master", "phd", "univers", "colleg", "diploma",
                "graduat", "school", "academ", "certif", "gpa",
            ]),
            projects: strings(&[
                "project", "built", "build", "creat", "implement", "launch", "portfolio", "github",
                "prototyp", "hackathon",
            ]),
            achievements: strings(&[
                "achiev", "award", "recogn", "improv", "increas", "reduc", "save", "deliv", "won",
                "exceed", "optim", "accomplish", "honor",
            ]),
            quantification: strings(&[
                "percent", "million", "billion", "thousand", "increas", "decreas", "reduc",
                "improv", "grew", "revenu", "save", "doubl",
            ]),
        }
    }

    fn default_profiles() -> Vec<IndustryProfile> {
        use RoadmapItemType::{Learn, Milestone, Project};

        vec![
            IndustryProfile::new(
                Industry::Technology,
                &[
                    "software", "programming", "developer", "computer science", "coding",
                    "database", "cloud", "javascript", "python", "devops", "cybersecurity",
                    "machine learning",
                ],
                vec![
                    RoadmapItem::new(
                        "Cloud Architecture Fundamentals",
                        Learn,
                        "Deepen your cloud platform skills (AWS, Azure or GCP) and study scalable system design.",
                    ),
                    RoadmapItem::new(
                        "Build a Production-Grade Side Project",
                        Project,
                        "Ship an end-to-end application with CI/CD, automated tests and monitoring to showcase engineering depth.",
                    ),
                    RoadmapItem::new(
                        "Contribute to Open Source",
                        Milestone,
                        "Land regular contributions to a well-known open-source project to build public credibility.",
                    ),
                ],
                &[
                    "Software Engineer",
                    "Full Stack Developer",
                    "Cloud Solutions Architect",
                    "DevOps Engineer",
                ],
            ),
            IndustryProfile::new(
                Industry::Business,
                &[
                    "business", "management", "strategy", "operations", "sales", "marketing",
                    "consulting", "stakeholder", "revenue", "budget", "client", "negotiation",
                ],
                vec![
                    RoadmapItem::new(
                        "Business Analytics and Strategy",
                        Learn,
                        "Build fluency in financial modeling, market analysis and data-driven decision making.",
                    ),
                    RoadmapItem::new(
                        "Lead a Process Improvement Initiative",
                        Project,
                        "Own a cross-functional initiative that measurably improves cost, speed or quality.",
                    ),
                    RoadmapItem::new(
                        "Earn a PMP or MBA Credential",
                        Milestone,
                        "Formalize your management expertise with a recognized credential.",
                    ),
                ],
                &[
                    "Business Analyst",
                    "Operations Manager",
                    "Project Manager",
                    "Management Consultant",
                ],
            ),
            IndustryProfile::new(
                Industry::Healthcare,
                &[
                    "healthcare", "patient", "clinical", "nurse", "nursing", "medical", "hospital",
                    "physician", "treatment", "diagnosis", "pharmacy", "therapy",
                ],
                vec![
                    RoadmapItem::new(
                        "Advanced Clinical Certification",
                        Learn,
                        "Pursue a specialty certification such as ACLS or CCRN in your clinical area.",
                    ),
                    RoadmapItem::new(
                        "Quality Improvement Project",
                        Project,
                        "Lead a unit-level initiative that improves patient outcomes or safety metrics.",
                    ),
                    RoadmapItem::new(
                        "Charge or Lead Clinical Role",
                        Milestone,
                        "Take on charge, preceptor or lead responsibilities to demonstrate clinical leadership.",
                    ),
                ],
                &[
                    "Registered Nurse",
                    "Clinical Coordinator",
                    "Healthcare Administrator",
                    "Patient Care Manager",
                ],
            ),
            IndustryProfile::new(
                Industry::Education,
                &[
                    "teaching", "teacher", "curriculum", "classroom", "students", "lesson",
                    "instruction", "tutoring", "pedagogy", "school", "academic", "learning",
                ],
                vec![
                    RoadmapItem::new(
                        "Instructional Design and EdTech",
                        Learn,
                        "Learn modern instructional design methods and digital learning platforms.",
                    ),
                    RoadmapItem::new(
                        "Develop a Curriculum Module",
                        Project,
                        "Design, deliver and evaluate a complete unit with measurable learning outcomes.",
                    ),
                    RoadmapItem::new(
                        "Advanced Teaching Credential",
                        Milestone,
                        "Earn an advanced certification or graduate degree in education.",
                    ),
                ],
                &[
                    "Teacher",
                    "Instructional Designer",
                    "Curriculum Developer",
                    "Academic Coordinator",
                ],
            ),
            IndustryProfile::new(
                Industry::Engineering,
                &[
                    "mechanical", "electrical", "civil", "autocad", "manufacturing", "structural",
                    "solidworks", "engineering", "prototype", "circuit", "hvac", "thermodynamics",
                ],
                vec![
                    RoadmapItem::new(
                        "Advanced CAD and Simulation Tools",
                        Learn,
                        "Master simulation and analysis tooling used in your engineering discipline.",
                    ),
                    RoadmapItem::new(
                        "Design and Prototype a System",
                        Project,
                        "Take a design from requirements through prototype and test, documenting results.",
                    ),
                    RoadmapItem::new(
                        "Professional Engineer License",
                        Milestone,
                        "Prepare for and pass the PE exam or your region's equivalent licensure.",
                    ),
                ],
                &[
                    "Mechanical Engineer",
                    "Design Engineer",
                    "Project Engineer",
                    "Manufacturing Engineer",
                ],
            ),
            IndustryProfile::new(
                Industry::Creative,
                &[
                    "design", "creative", "graphic", "photoshop", "illustrator", "branding",
                    "visual", "artwork", "video", "photography", "content", "writing",
                ],
                vec![
                    RoadmapItem::new(
                        "Advanced Design Tools",
                        Learn,
                        "Expand into motion, 3D or interactive design tools that complement your craft.",
                    ),
                    RoadmapItem::new(
                        "Build a Professional Portfolio",
                        Project,
                        "Curate case studies that show your process from brief to final result.",
                    ),
                    RoadmapItem::new(
                        "Land a Signature Client Project",
                        Milestone,
                        "Deliver a high-visibility project that becomes the centerpiece of your portfolio.",
                    ),
                ],
                &[
                    "Graphic Designer",
                    "Content Creator",
                    "Art Director",
                    "Brand Designer",
                ],
            ),
            IndustryProfile::new(
                Industry::Service,
                &[
                    "customer", "hospitality", "retail", "restaurant", "service", "guest",
                    "front desk", "sales associate", "cashier", "reservations", "food", "store",
                ],
                vec![
                    RoadmapItem::new(
                        "Customer Experience Management",
                        Learn,
                        "Study service design, conflict resolution and customer satisfaction metrics.",
                    ),
                    RoadmapItem::new(
                        "Improve a Service Workflow",
                        Project,
                        "Identify a recurring customer pain point and implement a measurable fix.",
                    ),
                    RoadmapItem::new(
                        "Move into Team Supervision",
                        Milestone,
                        "Take on shift lead or supervisor responsibilities.",
                    ),
                ],
                &[
                    "Customer Service Representative",
                    "Guest Relations Coordinator",
                    "Store Manager",
                    "Client Success Associate",
                ],
            ),
            IndustryProfile::new(
                Industry::Legal,
                &[
                    "legal", "law", "attorney", "litigation", "paralegal", "contract", "compliance",
                    "court", "counsel", "regulatory", "intellectual property", "case",
                ],
                vec![
                    RoadmapItem::new(
                        "Legal Research and Technology",
                        Learn,
                        "Become proficient with e-discovery and legal research platforms.",
                    ),
                    RoadmapItem::new(
                        "Author a Compliance Guide",
                        Project,
                        "Write practical guidance on a regulatory area relevant to your practice.",
                    ),
                    RoadmapItem::new(
                        "Bar Admission or Paralegal Certification",
                        Milestone,
                        "Secure the credential that unlocks the next level of legal practice.",
                    ),
                ],
                &[
                    "Paralegal",
                    "Legal Analyst",
                    "Compliance Officer",
                    "Associate Attorney",
                ],
            ),
            IndustryProfile::new(
                Industry::Government,
                &[
                    "government", "public", "policy", "federal", "municipal", "agency",
                    "administration", "public sector", "legislation", "regulation", "civic",
                    "military",
                ],
                vec![
                    RoadmapItem::new(
                        "Public Policy Analysis",
                        Learn,
                        "Develop skills in policy evaluation, budgeting and program assessment.",
                    ),
                    RoadmapItem::new(
                        "Lead a Community Program",
                        Project,
                        "Plan and run a public program with clear outcome measures.",
                    ),
                    RoadmapItem::new(
                        "Senior Civil Service Grade",
                        Milestone,
                        "Target promotion to a senior grade or a supervisory appointment.",
                    ),
                ],
                &[
                    "Policy Analyst",
                    "Program Coordinator",
                    "Public Administrator",
                    "Government Relations Specialist",
                ],
            ),
            IndustryProfile::new(
                Industry::Finance,
                &[
                    "finance", "financial", "accounting", "audit", "investment", "banking", "tax",
                    "portfolio", "ledger", "cpa", "risk", "budgeting",
                ],
                vec![
                    RoadmapItem::new(
                        "Financial Modeling and Valuation",
                        Learn,
                        "Strengthen modeling, forecasting and valuation techniques.",
                    ),
                    RoadmapItem::new(
                        "Build an Investment Analysis Model",
                        Project,
                        "Create a complete model for a real company and present your recommendation.",
                    ),
                    RoadmapItem::new(
                        "CFA or CPA Certification",
                        Milestone,
                        "Earn the professional designation that matches your finance track.",
                    ),
                ],
                &[
                    "Financial Analyst",
                    "Accountant",
                    "Investment Analyst",
                    "Risk Analyst",
                ],
            ),
        ]
    }

    fn general_profile() -> IndustryProfile {
        use RoadmapItemType::{Learn, Milestone, Project};

        IndustryProfile::new(
            Industry::General,
            &[],
            vec![
                RoadmapItem::new(
                    "Core Professional Skills",
                    Learn,
                    "Strengthen communication, data literacy and project management fundamentals.",
                ),
                RoadmapItem::new(
                    "Lead a Visible Project",
                    Project,
                    "Own a project end to end and document its measurable results.",
                ),
                RoadmapItem::new(
                    "Earn an Industry Certification",
                    Milestone,
                    "Choose a target field and complete its entry-level certification.",
                ),
            ],
            &["Project Coordinator", "Operations Associate", "Business Analyst"],
        )
    }
}
