//! Section presence scoring.
//!
//! Each section's raw score is the number of keyword occurrences in the
//! lowercased text (plain substring counts, not word-boundary aware), scaled
//! by 20 and capped at 100.

use crate::analysis::models::SectionScores;
use crate::analysis::profiles::{SectionKeywordSet, SECTION_KEYWORDS};
use crate::errors::AppError;

const POINTS_PER_HIT: usize = 20;
const MAX_SECTION_SCORE: usize = 100;

/// Scores `text` against the built-in section table.
pub fn score_sections(text: &str) -> SectionScores {
    score_sections_with(text, SECTION_KEYWORDS)
}

pub fn score_sections_with(text: &str, sections: &[SectionKeywordSet]) -> SectionScores {
    let lowered = text.to_lowercase();
    sections
        .iter()
        .map(|set| {
            let hits: usize = set
                .keywords
                .iter()
                .map(|kw| lowered.matches(kw).count())
                .sum();
            let score = hits.saturating_mul(POINTS_PER_HIT).min(MAX_SECTION_SCORE);
            (set.section, score as u32)
        })
        .collect()
}

/// Mean of all section scores, truncated toward zero.
pub fn total_score(scores: &SectionScores) -> Result<u32, AppError> {
    if scores.is_empty() {
        return Err(AppError::InvalidInput(
            "Cannot aggregate an empty section report".to_string(),
        ));
    }
    let sum: f64 = scores.values().map(f64::from).sum();
    Ok((sum / scores.len() as f64) as u32)
}
