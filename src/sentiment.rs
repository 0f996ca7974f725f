//! Keyword-membership sentiment classification.
//!
//! This is deliberately not an NLP model: a record is tagged by
//! case-insensitive substring membership against two fixed keyword lists.
//! Negative keywords take precedence — one negative hit overrides any number
//! of positive hits, so a story about a "skandal" stays Negative even when it
//! also mentions "pertumbuhan".

use crate::models::Sentiment;

/// Classifies title/snippet pairs against fixed positive and negative
/// keyword lists. Lists are lowercased once at construction.
#[derive(Debug, Clone)]
pub struct SentimentClassifier {
    positive: Vec<String>,
    negative: Vec<String>,
}

impl SentimentClassifier {
    pub fn new(positive: &[String], negative: &[String]) -> Self {
        Self {
            positive: positive.iter().map(|k| k.to_lowercase()).collect(),
            negative: negative.iter().map(|k| k.to_lowercase()).collect(),
        }
    }

    /// Assign a sentiment to a title/snippet pair.
    ///
    /// Precedence is deterministic: any negative keyword in either field
    /// short-circuits to Negative, then any positive keyword yields Positive,
    /// otherwise Neutral.
    pub fn classify(&self, title: &str, snippet: &str) -> Sentiment {
        let title = title.to_lowercase();
        let snippet = snippet.to_lowercase();

        if Self::any_match(&self.negative, &title, &snippet) {
            Sentiment::Negative
        } else if Self::any_match(&self.positive, &title, &snippet) {
            Sentiment::Positive
        } else {
            Sentiment::Neutral
        }
    }

    fn any_match(keywords: &[String], title: &str, snippet: &str) -> bool {
        keywords
            .iter()
            .any(|k| title.contains(k.as_str()) || snippet.contains(k.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::KeywordConfig;

    fn classifier() -> SentimentClassifier {
        let keywords = KeywordConfig::default();
        SentimentClassifier::new(&keywords.positive, &keywords.negative)
    }

    #[test]
    fn test_negative_precedence_over_positive() {
        let c = classifier();
        // Both a positive ("pertumbuhan") and a negative ("skandal") keyword
        // are present; negative must win regardless of match counts.
        let sentiment = c.classify(
            "Skandal di tengah pertumbuhan perusahaan",
            "Pertumbuhan laba, inovasi, dan kerja sama dibayangi skandal.",
        );
        assert_eq!(sentiment, Sentiment::Negative);
    }

    #[test]
    fn test_positive_only() {
        let c = classifier();
        let sentiment = c.classify(
            "Perusahaan raih penghargaan inovasi",
            "Penghargaan diberikan atas inovasi produk.",
        );
        assert_eq!(sentiment, Sentiment::Positive);
    }

    #[test]
    fn test_neutral_when_no_keyword_matches() {
        let c = classifier();
        let sentiment = c.classify("Rapat umum pemegang saham", "Agenda rutin tahunan.");
        assert_eq!(sentiment, Sentiment::Neutral);
    }

    #[test]
    fn test_case_insensitive_matching() {
        let c = classifier();
        assert_eq!(c.classify("KEBANGKRUTAN mengancam", ""), Sentiment::Negative);
        assert_eq!(c.classify("", "EKSPANSI ke tiga provinsi"), Sentiment::Positive);
    }

    #[test]
    fn test_keyword_in_snippet_only() {
        let c = classifier();
        let sentiment = c.classify(
            "Kabar terbaru dari perseroan",
            "Regulator membuka investigasi atas laporan keuangan.",
        );
        assert_eq!(sentiment, Sentiment::Negative);
    }

    #[test]
    fn test_custom_keyword_lists() {
        let c = SentimentClassifier::new(
            &["baik".to_string()],
            &["buruk".to_string()],
        );
        assert_eq!(c.classify("kabar baik", ""), Sentiment::Positive);
        assert_eq!(c.classify("kabar baik dan buruk", ""), Sentiment::Negative);
        assert_eq!(c.classify("kabar biasa", ""), Sentiment::Neutral);
    }
}
