use serde::{Deserialize, Serialize};

/// A structured patient testimonial, either from the static mock catalog or
/// freshly extracted from grounded model output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    pub author: String,
    /// Star rating as found in the source; the extractor does not clamp or
    /// validate the 1–5 range.
    pub rating: u8,
    pub text: String,
    /// Free-text recency label ("2 months ago", "Recent", ...).
    pub date: String,
    pub source: ReviewSource,
    /// Attribution link, present for externally sourced reviews only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReviewSource {
    Google,
    Direct,
}

/// Best-effort sentiment/theme digest of a review set, produced by a second,
/// strictly-JSON-prompted model call. Diagnostics only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiReviewAnalysis {
    pub sentiment_score: f64,
    pub summary: Vec<String>,
    pub key_themes: Vec<KeyTheme>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyTheme {
    pub theme: String,
    pub count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_tags_serialize_verbatim() {
        assert_eq!(serde_json::to_string(&ReviewSource::Google).unwrap(), "\"Google\"");
        assert_eq!(serde_json::to_string(&ReviewSource::Direct).unwrap(), "\"Direct\"");
    }

    #[test]
    fn url_is_omitted_when_absent() {
        let review = Review {
            id: "3".into(),
            author: "Emily R.".into(),
            rating: 4,
            text: "Great experience.".into(),
            date: "3 months ago".into(),
            source: ReviewSource::Direct,
            url: None,
        };
        let json = serde_json::to_string(&review).unwrap();
        assert!(!json.contains("\"url\""));
    }

    #[test]
    fn analysis_deserializes_from_camel_case() {
        let json = r#"{
            "sentimentScore": 0.92,
            "summary": ["Warm and practical care."],
            "keyThemes": [{"theme": "anxiety", "count": 2}]
        }"#;
        let analysis: AiReviewAnalysis = serde_json::from_str(json).unwrap();
        assert!((analysis.sentiment_score - 0.92).abs() < f64::EPSILON);
        assert_eq!(analysis.key_themes[0].theme, "anxiety");
    }
}
