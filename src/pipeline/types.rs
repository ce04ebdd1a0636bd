//! Structured extraction contract: the shape the remote LLM response must
//! conform to, plus each section's sub-score rule. Every sub-score is a
//! pure function of its own section's fields — no section depends on
//! another section's data.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::AnalysisError;

/// Remote extraction abstraction (allows mocking).
pub trait ExtractionClient {
    /// Send the transcript with the schema prompt and return the raw
    /// response text, to be parsed and validated by the caller.
    fn complete(&self, system_prompt: &str, prompt: &str) -> Result<String, AnalysisError>;
}

/// Complete structured extraction for one transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub salutation: Salutation,
    pub basic_details: BasicDetails,
    pub extra_details: ExtraDetails,
    pub flow: FlowSequence,
    pub grammar: GrammarAnalysis,
    pub engagement: Engagement,
}

/// Qualitative tiers for the opening phrase, ordered worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SalutationLevel {
    #[serde(rename = "No Salutation")]
    NoSalutation,
    Normal,
    Good,
    Excellent,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Salutation {
    /// The exact opening phrase, possibly empty.
    pub phrase_used: String,
    pub level: SalutationLevel,
}

impl Salutation {
    /// Fixed tier-to-score table; max 5.
    pub fn score(&self) -> u32 {
        match self.level {
            SalutationLevel::NoSalutation => 0,
            SalutationLevel::Normal => 2,
            SalutationLevel::Good => 4,
            SalutationLevel::Excellent => 5,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BasicDetails {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub age: Option<String>,
    #[serde(default)]
    pub school_class: Option<Vec<String>>,
    #[serde(default)]
    pub family: Option<String>,
    #[serde(default)]
    pub hobbies: Option<Vec<String>>,
}

impl BasicDetails {
    /// 4 points per non-empty field; max 20.
    pub fn score(&self) -> u32 {
        let found = [
            present_text(&self.name),
            present_text(&self.age),
            present_list(&self.school_class),
            present_text(&self.family),
            present_list(&self.hobbies),
        ];
        4 * found.iter().filter(|p| **p).count() as u32
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtraDetails {
    #[serde(default)]
    pub about_family: Option<String>,
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(default)]
    pub ambition: Option<String>,
    #[serde(default)]
    pub unique_fact: Option<String>,
    #[serde(default)]
    pub strengths: Option<Vec<String>>,
}

impl ExtraDetails {
    /// 2 points per non-empty field; max 10.
    pub fn score(&self) -> u32 {
        let found = [
            present_text(&self.about_family),
            present_text(&self.origin),
            present_text(&self.ambition),
            present_text(&self.unique_fact),
            present_list(&self.strengths),
        ];
        2 * found.iter().filter(|p| **p).count() as u32
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlowSequence {
    pub is_order_followed: bool,
}

impl FlowSequence {
    /// 5 if the expected logical order was followed, else 0.
    pub fn score(&self) -> u32 {
        if self.is_order_followed {
            5
        } else {
            0
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrammarError {
    pub error_text: String,
    pub correction: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GrammarAnalysis {
    #[serde(default)]
    pub errors: Vec<GrammarError>,
}

impl GrammarAnalysis {
    /// Error-density rubric rule; max 10. The penalty saturates once
    /// errors reach word_count / 10, and an empty transcript scores 0.
    pub fn score(&self, word_count: usize) -> u32 {
        if word_count == 0 {
            return 0;
        }
        let density = (10.0 * self.errors.len() as f64) / word_count as f64;
        let raw = 1.0 - density.min(1.0);
        if raw >= 0.9 {
            10
        } else if raw >= 0.7 {
            8
        } else if raw >= 0.5 {
            6
        } else if raw >= 0.3 {
            4
        } else {
            2
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Sentiment::Positive => "Positive",
            Sentiment::Neutral => "Neutral",
            Sentiment::Negative => "Negative",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Engagement {
    pub sentiment_label: Sentiment,
    /// Probability the speech lands positively, in [0, 1].
    pub positivity_probability: f64,
}

impl Engagement {
    /// Fixed probability-band table; max 15.
    pub fn score(&self) -> u32 {
        let p = self.positivity_probability;
        if p >= 0.9 {
            15
        } else if p >= 0.7 {
            12
        } else if p >= 0.5 {
            9
        } else if p >= 0.3 {
            6
        } else {
            3
        }
    }
}

fn present_text(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|s| !s.trim().is_empty())
}

fn present_list(field: &Option<Vec<String>>) -> bool {
    field.as_ref().is_some_and(|items| !items.is_empty())
}
