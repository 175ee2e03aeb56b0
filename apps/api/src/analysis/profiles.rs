//! Fixed keyword tables. Built into the binary and never mutated.

/// A job role and the keywords that represent it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobProfile {
    pub role: &'static str,
    pub keywords: &'static [&'static str],
}

/// A résumé section and the keywords that signal its presence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionKeywordSet {
    pub section: &'static str,
    pub keywords: &'static [&'static str],
}

/// Table order is significant: it breaks ties between equally scored roles.
pub static JOB_PROFILES: &[JobProfile] = &[
    JobProfile {
        role: "Data Scientist",
        keywords: &[
            "python",
            "machine learning",
            "data analysis",
            "statistics",
            "model",
            "pandas",
            "numpy",
            "scikit-learn",
        ],
    },
    JobProfile {
        role: "Project Manager",
        keywords: &[
            "project",
            "management",
            "team",
            "planning",
            "stakeholder",
            "agile",
            "scrum",
            "delivery",
        ],
    },
    JobProfile {
        role: "Software Engineer",
        keywords: &[
            "software",
            "development",
            "programming",
            "system",
            "debugging",
            "java",
            "c++",
            "python",
            "api",
        ],
    },
    JobProfile {
        role: "Business Analyst",
        keywords: &[
            "business",
            "analysis",
            "requirement",
            "process",
            "stakeholder",
            "excel",
            "report",
            "analytics",
        ],
    },
    JobProfile {
        role: "UI/UX Designer",
        keywords: &[
            "design",
            "ui",
            "ux",
            "user experience",
            "figma",
            "adobe",
            "prototype",
            "wireframe",
        ],
    },
    JobProfile {
        role: "DevOps Engineer",
        keywords: &[
            "devops",
            "ci/cd",
            "aws",
            "azure",
            "docker",
            "kubernetes",
            "infrastructure",
            "automation",
        ],
    },
];

/// Section order here is the order of keys in the JSON report.
pub static SECTION_KEYWORDS: &[SectionKeywordSet] = &[
    SectionKeywordSet {
        section: "Education",
        keywords: &[
            "education",
            "degree",
            "university",
            "bachelor",
            "master",
            "school",
        ],
    },
    SectionKeywordSet {
        section: "Experience",
        keywords: &[
            "experience",
            "work",
            "internship",
            "employment",
            "job",
            "position",
        ],
    },
    SectionKeywordSet {
        section: "Skills",
        keywords: &[
            "skills",
            "proficient",
            "expertise",
            "technologies",
            "languages",
            "tools",
        ],
    },
    SectionKeywordSet {
        section: "Projects",
        keywords: &["project", "portfolio"],
    },
    SectionKeywordSet {
        section: "Certifications",
        keywords: &["certification", "certified", "certificate"],
    },
];
