//! Role recommendation via TF-IDF.
//!
//! The corpus for one request is every job profile (keywords joined by a
//! space) plus the lowercased résumé text as the last document. IDF weights
//! are fitted over that corpus, so scores are relative to the résumé being
//! ranked. Document vectors are L2-normalised before the dot product.

use std::collections::{BTreeMap, HashMap};

use regex::Regex;

use crate::analysis::models::RoleRecommendation;
use crate::analysis::profiles::JobProfile;

/// Word tokens of two or more word characters.
const TOKEN_PATTERN: &str = r"\b\w\w+\b";

/// Lowercasing word tokenizer. Compiled once, shared read-only across requests.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    pattern: Regex,
}

impl Tokenizer {
    pub fn new() -> Self {
        Self {
            // The pattern is a literal; failure here is a programming error.
            pattern: Regex::new(TOKEN_PATTERN).expect("token pattern is valid"),
        }
    }

    pub fn tokenize<'a>(&'a self, text: &'a str) -> impl Iterator<Item = String> + 'a {
        self.pattern
            .find_iter(text)
            .map(|m| m.as_str().to_lowercase())
    }
}

/// Sparse TF-IDF rows for a jointly fitted corpus. Rows are ordered maps so
/// float accumulation order, and therefore output, is reproducible.
#[derive(Debug, Clone)]
pub struct TfIdfMatrix {
    rows: Vec<BTreeMap<usize, f64>>,
}

impl TfIdfMatrix {
    /// Fits vocabulary and smoothed IDF over `documents`, then builds one
    /// L2-normalised row per document.
    ///
    /// idf(t) = ln((1 + n) / (1 + df(t))) + 1
    pub fn fit_transform<S: AsRef<str>>(tokenizer: &Tokenizer, documents: &[S]) -> Self {
        let counts: Vec<BTreeMap<String, usize>> = documents
            .iter()
            .map(|doc| {
                let mut tf = BTreeMap::new();
                for token in tokenizer.tokenize(doc.as_ref()) {
                    *tf.entry(token).or_insert(0) += 1;
                }
                tf
            })
            .collect();

        // Sorted vocabulary, one column per distinct term.
        let mut document_frequency: BTreeMap<&str, usize> = BTreeMap::new();
        for tf in &counts {
            for term in tf.keys() {
                *document_frequency.entry(term.as_str()).or_insert(0) += 1;
            }
        }
        let n = documents.len() as f64;
        let columns: HashMap<&str, (usize, f64)> = document_frequency
            .iter()
            .enumerate()
            .map(|(column, (term, df))| {
                let idf = ((1.0 + n) / (1.0 + *df as f64)).ln() + 1.0;
                (*term, (column, idf))
            })
            .collect();

        let rows = counts
            .iter()
            .map(|tf| {
                let mut row: BTreeMap<usize, f64> = tf
                    .iter()
                    .map(|(term, count)| {
                        let (column, idf) = columns[term.as_str()];
                        (column, *count as f64 * idf)
                    })
                    .collect();
                let norm = row.values().map(|w| w * w).sum::<f64>().sqrt();
                if norm > 0.0 {
                    row.values_mut().for_each(|w| *w /= norm);
                }
                row
            })
            .collect();

        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Dot product of rows `a` and `b`.
    pub fn dot(&self, a: usize, b: usize) -> f64 {
        let (small, large) = if self.rows[a].len() <= self.rows[b].len() {
            (&self.rows[a], &self.rows[b])
        } else {
            (&self.rows[b], &self.rows[a])
        };
        small
            .iter()
            .filter_map(|(column, w)| large.get(column).map(|other| w * other))
            .fold(0.0, |acc, product| acc + product)
    }
}

/// Ranks job profiles against résumé text. Built once at startup.
#[derive(Debug, Clone)]
pub struct RoleRecommender {
    tokenizer: Tokenizer,
    roles: Vec<&'static str>,
    profile_documents: Vec<String>,
}

impl RoleRecommender {
    pub fn new(profiles: &[JobProfile]) -> Self {
        Self {
            tokenizer: Tokenizer::new(),
            roles: profiles.iter().map(|p| p.role).collect(),
            profile_documents: profiles.iter().map(|p| p.keywords.join(" ")).collect(),
        }
    }

    pub fn role_count(&self) -> usize {
        self.roles.len()
    }

    /// Raw dot-product similarity of every role, in table order.
    pub fn raw_scores(&self, text: &str) -> Vec<f64> {
        let mut corpus: Vec<&str> = self.profile_documents.iter().map(String::as_str).collect();
        let resume = text.to_lowercase();
        corpus.push(&resume);

        let matrix = TfIdfMatrix::fit_transform(&self.tokenizer, &corpus);
        let resume_row = matrix.len() - 1;
        (0..self.roles.len())
            .map(|row| matrix.dot(row, resume_row))
            .collect()
    }

    /// Top `top_n` roles by descending similarity. Ties keep table order.
    pub fn recommend(&self, text: &str, top_n: usize) -> Vec<RoleRecommendation> {
        let scores = self.raw_scores(text);
        let mut ranked: Vec<(usize, f64)> = scores.into_iter().enumerate().collect();
        // `sort_by` is stable, so equal scores stay in table order.
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

        ranked
            .into_iter()
            .take(top_n)
            .map(|(idx, raw)| RoleRecommendation {
                role: self.roles[idx].to_string(),
                score: round2(raw * 100.0),
            })
            .collect()
    }
}

/// Two decimals, exact halves to even.
fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::profiles::JOB_PROFILES;

    fn recommender() -> RoleRecommender {
        RoleRecommender::new(JOB_PROFILES)
    }

    #[test]
    fn test_tokenizer_drops_single_characters() {
        let tokenizer = Tokenizer::new();
        let tokens: Vec<_> = tokenizer.tokenize("C++ and CI/CD on AWS, a UI").collect();
        assert_eq!(tokens, vec!["and", "ci", "cd", "on", "aws", "ui"]);
    }

    #[test]
    fn test_tokenizer_splits_hyphenated_words() {
        let tokenizer = Tokenizer::new();
        let tokens: Vec<_> = tokenizer.tokenize("scikit-learn").collect();
        assert_eq!(tokens, vec!["scikit", "learn"]);
    }

    #[test]
    fn test_identical_documents_have_unit_similarity() {
        let tokenizer = Tokenizer::new();
        let matrix = TfIdfMatrix::fit_transform(&tokenizer, &["rust tokio axum", "rust tokio axum"]);
        assert!((matrix.dot(0, 1) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_disjoint_documents_have_zero_similarity() {
        let tokenizer = Tokenizer::new();
        let matrix = TfIdfMatrix::fit_transform(&tokenizer, &["rust tokio", "python pandas"]);
        assert_eq!(matrix.dot(0, 1), 0.0);
    }

    #[test]
    fn test_smoothed_idf_weights() {
        // Three documents; "shared" appears in all, "rare" in one.
        // idf(shared) = ln(4/4) + 1 = 1, idf(rare) = ln(4/2) + 1.
        let tokenizer = Tokenizer::new();
        let matrix =
            TfIdfMatrix::fit_transform(&tokenizer, &["shared rare", "shared", "shared"]);
        let rare_idf = 2.0_f64.ln() + 1.0;
        let norm = (1.0 + rare_idf * rare_idf).sqrt();
        // Row 0 against row 1 ("shared" only, unit weight after normalising).
        assert!((matrix.dot(0, 1) - 1.0 / norm).abs() < 1e-12);
    }

    #[test]
    fn test_empty_document_is_zero_vector() {
        let tokenizer = Tokenizer::new();
        let matrix = TfIdfMatrix::fit_transform(&tokenizer, &["python", "!!"]);
        assert_eq!(matrix.dot(0, 1), 0.0);
        assert_eq!(matrix.dot(1, 1), 0.0);
    }

    #[test]
    fn test_no_overlap_returns_table_order_with_zero_scores() {
        let recs = recommender().recommend("zzz qqq xxxx", 3);
        let roles: Vec<_> = recs.iter().map(|r| r.role.as_str()).collect();
        assert_eq!(
            roles,
            vec!["Data Scientist", "Project Manager", "Software Engineer"]
        );
        assert!(recs.iter().all(|r| r.score == 0.0));
    }

    #[test]
    fn test_devops_resume_ranks_devops_first() {
        let text = "Built CI/CD pipelines with Docker and Kubernetes on AWS and Azure. \
                    Infrastructure automation for DevOps teams.";
        let recs = recommender().recommend(text, 3);
        assert_eq!(recs[0].role, "DevOps Engineer");
        assert!(recs[0].score > 0.0);
        assert!(recs[0].score >= recs[1].score);
        assert!(recs[1].score >= recs[2].score);
    }

    #[test]
    fn test_data_science_resume_ranks_data_scientist_first() {
        let text = "Python, pandas, numpy, scikit-learn, statistics and machine learning model work";
        let recs = recommender().recommend(text, 3);
        assert_eq!(recs[0].role, "Data Scientist");
    }

    #[test]
    fn test_scores_rounded_to_two_decimals() {
        let recs = recommender().recommend("python api development and agile delivery", 6);
        assert_eq!(recs.len(), 6);
        for rec in recs {
            let scaled = rec.score * 100.0;
            assert!((scaled - scaled.round()).abs() < 1e-6, "{} not rounded", rec.score);
            assert!(rec.score >= 0.0);
            assert!(rec.score <= 100.0 + 1e-9);
        }
    }

    #[test]
    fn test_round2_sends_exact_halves_to_even() {
        assert_eq!(round2(12.125), 12.12);
        assert_eq!(round2(12.375), 12.38);
        assert_eq!(round2(33.3333), 33.33);
        assert_eq!(round2(0.0), 0.0);
    }

    #[test]
    fn test_top_n_larger_than_table_returns_every_role() {
        let recs = recommender().recommend("python", 10);
        assert_eq!(recs.len(), JOB_PROFILES.len());
    }

    #[test]
    fn test_equal_profiles_keep_table_order() {
        let profiles = [
            JobProfile {
                role: "Zeta",
                keywords: &["rust", "tokio"],
            },
            JobProfile {
                role: "Alpha",
                keywords: &["rust", "tokio"],
            },
            JobProfile {
                role: "Gamma",
                keywords: &["golang"],
            },
        ];
        let recs = RoleRecommender::new(&profiles).recommend("rust", 3);
        let roles: Vec<_> = recs.iter().map(|r| r.role.as_str()).collect();
        assert_eq!(roles, vec!["Zeta", "Alpha", "Gamma"]);
        assert_eq!(recs[0].score, recs[1].score);
        assert_eq!(recs[2].score, 0.0);
    }

    #[test]
    fn test_zero_scores_are_not_negative_zero() {
        let recs = recommender().recommend("zzz", 1);
        assert!(recs[0].score.is_sign_positive());
    }

    #[test]
    fn test_recommendation_is_deterministic() {
        let text = "Software development in Java and Python, REST API debugging";
        let r = recommender();
        assert_eq!(r.recommend(text, 3), r.recommend(text, 3));
    }
}
