use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// Presence score for every configured section, kept in table order.
/// Serializes as a JSON object `{ "Education": 40, ... }`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionScores {
    entries: Vec<(String, u32)>,
}

impl SectionScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a section, replacing the score if the name is already present.
    pub fn insert(&mut self, section: impl Into<String>, score: u32) {
        let section = section.into();
        match self.entries.iter_mut().find(|(name, _)| *name == section) {
            Some(entry) => entry.1 = score,
            None => self.entries.push((section, score)),
        }
    }

    #[cfg(test)]
    pub fn get(&self, section: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|(name, _)| name == section)
            .map(|(_, score)| *score)
    }

    pub fn values(&self) -> impl Iterator<Item = u32> + '_ {
        self.entries.iter().map(|(_, score)| *score)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, u32)> for SectionScores {
    fn from_iter<I: IntoIterator<Item = (S, u32)>>(iter: I) -> Self {
        let mut scores = SectionScores::new();
        for (section, score) in iter {
            scores.insert(section, score);
        }
        scores
    }
}

impl Serialize for SectionScores {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (section, score) in &self.entries {
            map.serialize_entry(section, score)?;
        }
        map.end()
    }
}

/// One ranked job role. `score` is the TF-IDF dot product × 100, two decimals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoleRecommendation {
    pub role: String,
    pub score: f64,
}

/// The full response body for a successful analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub total_score: u32,
    pub section_scores: SectionScores,
    pub job_recommendations: Vec<RoleRecommendation>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_scores_serialize_in_insertion_order() {
        let scores: SectionScores = [("Skills", 20), ("Education", 100), ("Projects", 0)]
            .into_iter()
            .collect();
        let json = serde_json::to_string(&scores).unwrap();
        assert_eq!(json, r#"{"Skills":20,"Education":100,"Projects":0}"#);
    }

    #[test]
    fn test_insert_replaces_existing_section() {
        let mut scores = SectionScores::new();
        scores.insert("Education", 20);
        scores.insert("Education", 60);
        assert_eq!(scores.len(), 1);
        assert_eq!(scores.get("Education"), Some(60));
        assert_eq!(scores.get("Skills"), None);
    }

    #[test]
    fn test_report_json_shape() {
        let report = AnalysisReport {
            total_score: 44,
            section_scores: [("Education", 40)].into_iter().collect(),
            job_recommendations: vec![RoleRecommendation {
                role: "Data Scientist".to_string(),
                score: 12.5,
            }],
        };
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["total_score"], 44);
        assert_eq!(value["section_scores"]["Education"], 40);
        assert_eq!(value["job_recommendations"][0]["role"], "Data Scientist");
        assert_eq!(value["job_recommendations"][0]["score"], 12.5);
    }
}
