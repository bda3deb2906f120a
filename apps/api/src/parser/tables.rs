//! Static keyword tables driving skill, field, issuer, and role resolution.
//!
//! All lookups are case-insensitive substring checks against these fixed
//! lists; the lists are ordered, and extraction preserves that order so
//! parser output is deterministic.

use crate::models::resume::Proficiency;

/// Known technical skills, matched as lowercase substrings of the resume text.
pub const TECHNICAL_SKILLS: &[&str] = &[
    // Programming languages
    "python",
    "javascript",
    "typescript",
    "java",
    "c++",
    "c#",
    "ruby",
    "go",
    "rust",
    "php",
    "swift",
    "kotlin",
    "scala",
    "r",
    "matlab",
    "perl",
    "bash",
    "shell",
    // ML / AI
    "tensorflow",
    "pytorch",
    "keras",
    "scikit-learn",
    "pandas",
    "numpy",
    "scipy",
    "opencv",
    "nltk",
    "spacy",
    "huggingface",
    "transformers",
    "bert",
    "gpt",
    "machine learning",
    "deep learning",
    "neural networks",
    "nlp",
    "computer vision",
    // Web development
    "react",
    "angular",
    "vue",
    "next.js",
    "node.js",
    "express",
    "django",
    "flask",
    "fastapi",
    "spring",
    "rails",
    "laravel",
    "html",
    "css",
    "sass",
    "tailwind",
    // Databases
    "sql",
    "mysql",
    "postgresql",
    "mongodb",
    "redis",
    "elasticsearch",
    "cassandra",
    "dynamodb",
    "firebase",
    "sqlite",
    "oracle",
    "neo4j",
    // Cloud & DevOps
    "aws",
    "azure",
    "gcp",
    "docker",
    "kubernetes",
    "terraform",
    "ansible",
    "jenkins",
    "gitlab ci",
    "github actions",
    "circleci",
    "prometheus",
    "grafana",
    // Tools
    "git",
    "jira",
    "confluence",
    "figma",
    "postman",
    "swagger",
    "webpack",
    "vite",
    "jupyter",
    "vs code",
    "intellij",
    "tableau",
    "power bi",
    "excel",
];

/// Known soft skills.
pub const SOFT_SKILLS: &[&str] = &[
    "leadership",
    "communication",
    "teamwork",
    "problem solving",
    "critical thinking",
    "time management",
    "adaptability",
    "creativity",
    "collaboration",
    "project management",
    "agile",
    "scrum",
    "mentoring",
    "presentation",
    "negotiation",
    "analytical",
];

/// Proficiency tiers checked against the context window around a skill
/// mention. Ordered strongest first; the first tier with a matching marker
/// wins, otherwise proficiency defaults to intermediate.
pub const PROFICIENCY_TIERS: &[(Proficiency, &[&str])] = &[
    (
        Proficiency::Expert,
        &["expert", "advanced", "senior", "5+ years", "lead"],
    ),
    (
        Proficiency::Advanced,
        &["proficient", "3+ years", "experienced"],
    ),
    (
        Proficiency::Beginner,
        &["familiar", "basic", "beginner", "learning"],
    ),
];

/// Field-of-study resolution table: (canonical field, trigger keywords).
pub const FIELD_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "Computer Science",
        &["computer science", "cs", "computing", "informatics"],
    ),
    ("Data Science", &["data science", "analytics", "data analytics"]),
    ("Engineering", &["engineering", "engineer"]),
    ("Business", &["business", "mba", "management", "administration"]),
    (
        "Mathematics",
        &["mathematics", "math", "statistics", "applied math"],
    ),
];

pub const DEFAULT_FIELD: &str = "General Studies";

/// Certification issuer resolution: (trigger substring, issuer). First hit wins.
pub const CERT_ISSUERS: &[(&str, &str)] = &[
    ("aws", "Amazon Web Services"),
    ("azure", "Microsoft"),
    ("gcp", "Google"),
    ("google", "Google"),
    ("pmp", "PMI"),
    ("tensorflow", "Google"),
    ("kubernetes", "CNCF"),
    ("cka", "CNCF"),
];

pub const DEFAULT_ISSUER: &str = "Issuing Authority";

/// Role inference from skill names when no work experience was extracted:
/// (role, skill-name substrings). First rule with any hit wins.
pub const ROLE_RULES: &[(&str, &[&str])] = &[
    ("Data/ML Professional", &["ml", "machine learning", "data"]),
    ("Frontend Developer", &["frontend", "react", "vue"]),
    ("Backend Developer", &["backend", "node", "python"]),
    ("DevOps Engineer", &["devops", "cloud", "aws"]),
];

pub const DEFAULT_ROLE: &str = "Software Professional";

/// Words that disqualify a line from being treated as the candidate name.
pub const NAME_BLOCKLIST: &[&str] = &[
    "resume",
    "cv",
    "curriculum",
    "email",
    "phone",
    "address",
    "@",
];
