//! Pure combination step: folds the lexical statistics and the extraction
//! sub-scores into the fixed-order rubric table. Row order matches the
//! rubric's presentation order and never changes.

use serde::Serialize;

use super::lexical::LexicalStats;
use super::types::ExtractionResult;

/// One rubric line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreRow {
    pub category: String,
    pub metric: String,
    pub score: u32,
    pub max: u32,
}

fn row(category: &str, metric: impl Into<String>, score: u32, max: u32) -> ScoreRow {
    ScoreRow {
        category: category.to_string(),
        metric: metric.into(),
        score,
        max,
    }
}

/// Build the eight fixed-order rubric rows; maxima sum to 100.
pub fn build_breakdown(stats: &LexicalStats, extraction: &ExtractionResult) -> Vec<ScoreRow> {
    let key_details = extraction.basic_details.score() + extraction.extra_details.score();

    vec![
        row("Content", "Salutation", extraction.salutation.score(), 5),
        row("Content", "Key Details", key_details, 20),
        row("Content", "Flow", extraction.flow.score(), 5),
        row(
            "Speech Rate",
            format!(
                "{} WPM ({})",
                stats.words_per_minute, stats.speed_category
            ),
            stats.speed_score,
            10,
        ),
        row(
            "Language",
            "Grammar",
            extraction.grammar.score(stats.word_count),
            10,
        ),
        row("Language", "Vocabulary", stats.vocabulary_score, 10),
        row("Clarity", "Fillers", stats.clarity_score, 15),
        row(
            "Engagement",
            extraction.engagement.sentiment_label.to_string(),
            extraction.engagement.score(),
            15,
        ),
    ]
}

/// Total score is the plain sum of the achieved row scores.
pub fn total_score(rows: &[ScoreRow]) -> u32 {
    rows.iter().map(|r| r.score).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::lexical::{analyze_lexical, AlphabeticTokenizer};
    use crate::pipeline::types::{
        BasicDetails, Engagement, ExtraDetails, FlowSequence, GrammarAnalysis, Salutation,
        SalutationLevel, Sentiment,
    };

    fn sample_extraction() -> ExtractionResult {
        ExtractionResult {
            salutation: Salutation {
                phrase_used: "Hello everyone".into(),
                level: SalutationLevel::Good,
            },
            basic_details: BasicDetails {
                name: Some("Asha".into()),
                age: Some("12".into()),
                ..Default::default()
            },
            extra_details: ExtraDetails::default(),
            flow: FlowSequence {
                is_order_followed: true,
            },
            grammar: GrammarAnalysis::default(),
            engagement: Engagement {
                sentiment_label: Sentiment::Positive,
                positivity_probability: 0.95,
            },
        }
    }

    fn sample_stats() -> LexicalStats {
        analyze_lexical(
            &AlphabeticTokenizer,
            "Hello everyone, myself Asha, I am 12 years old. Thank you.",
            30.0,
        )
    }

    #[test]
    fn rows_follow_rubric_order() {
        let rows = build_breakdown(&sample_stats(), &sample_extraction());
        let metrics: Vec<&str> = rows.iter().map(|r| r.metric.as_str()).collect();
        assert_eq!(
            metrics,
            vec![
                "Salutation",
                "Key Details",
                "Flow",
                "20 WPM (Too Slow)",
                "Grammar",
                "Vocabulary",
                "Fillers",
                "Positive",
            ]
        );
        let categories: Vec<&str> = rows.iter().map(|r| r.category.as_str()).collect();
        assert_eq!(
            categories,
            vec![
                "Content",
                "Content",
                "Content",
                "Speech Rate",
                "Language",
                "Language",
                "Clarity",
                "Engagement",
            ]
        );
    }

    #[test]
    fn row_maxima_sum_to_one_hundred() {
        let rows = build_breakdown(&sample_stats(), &sample_extraction());
        assert_eq!(rows.len(), 8);
        assert_eq!(rows.iter().map(|r| r.max).sum::<u32>(), 100);
    }

    #[test]
    fn total_is_sum_of_row_scores() {
        let rows = build_breakdown(&sample_stats(), &sample_extraction());
        let total = total_score(&rows);
        assert_eq!(total, rows.iter().map(|r| r.score).sum::<u32>());
        assert!(total <= 100);
        // Scenario A: 4 + 8 + 5 + 2 + 10 + 10 + 15 + 15
        assert_eq!(total, 69);
    }

    #[test]
    fn key_details_combines_basic_and_extra() {
        let mut extraction = sample_extraction();
        extraction.extra_details.ambition = Some("pilot".into());
        let rows = build_breakdown(&sample_stats(), &extraction);
        let key_details = rows.iter().find(|r| r.metric == "Key Details").unwrap();
        assert_eq!(key_details.score, 8 + 2);
        assert_eq!(key_details.max, 20);
    }
}
