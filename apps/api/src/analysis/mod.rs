// Résumé analysis pipeline.
// Extraction -> section scores -> total, and extraction -> role ranking,
// combined into one AnalysisReport per upload.

pub mod extract;
pub mod handlers;
pub mod models;
pub mod profiles;
pub mod recommend;
pub mod sections;

use std::path::PathBuf;

use tracing::{debug, warn};

use crate::analysis::extract::extract_text_in;
use crate::analysis::models::AnalysisReport;
use crate::analysis::profiles::JOB_PROFILES;
use crate::analysis::recommend::RoleRecommender;
use crate::analysis::sections::{score_sections, total_score};
use crate::errors::AppError;

/// Process-wide scoring pipeline. Read-only after construction, so one
/// instance is shared by every request.
#[derive(Debug, Clone)]
pub struct Analyzer {
    recommender: RoleRecommender,
    top_n: usize,
    scratch_dir: PathBuf,
}

impl Analyzer {
    pub fn new(top_n: usize) -> Self {
        Self {
            recommender: RoleRecommender::new(JOB_PROFILES),
            top_n,
            scratch_dir: std::env::temp_dir(),
        }
    }

    /// Directory for transient DOCX scratch files.
    pub fn with_scratch_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.scratch_dir = dir.into();
        self
    }

    pub fn role_count(&self) -> usize {
        self.recommender.role_count()
    }

    /// Extracts text from an uploaded file and scores it.
    ///
    /// Parse failures, unsupported extensions and blank documents all surface
    /// as `UnsupportedOrEmptyContent`.
    pub fn analyze(&self, filename: &str, bytes: &[u8]) -> Result<AnalysisReport, AppError> {
        let text = extract_text_in(filename, bytes, &self.scratch_dir).unwrap_or_else(|e| {
            warn!(filename, error = %e, "Text extraction failed");
            String::new()
        });
        if text.trim().is_empty() {
            return Err(AppError::UnsupportedOrEmptyContent);
        }
        self.analyze_text(&text)
    }

    pub fn analyze_text(&self, text: &str) -> Result<AnalysisReport, AppError> {
        let section_scores = score_sections(text);
        let total = total_score(&section_scores)?;
        let job_recommendations = self.recommender.recommend(text, self.top_n);
        debug!(total_score = total, "Resume scored");

        Ok(AnalysisReport {
            total_score: total,
            section_scores,
            job_recommendations,
        })
    }
}
