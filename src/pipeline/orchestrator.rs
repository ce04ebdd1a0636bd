//! Sequences the full analysis: credential validation, lexical statistics,
//! the extraction round trip, aggregation, and report rendering. Any
//! failure short-circuits the run; there is no partial result and no retry.

use std::sync::Arc;

use super::aggregate::{build_breakdown, total_score, ScoreRow};
use super::groq::GroqClient;
use super::lexical::{analyze_lexical, Tokenizer};
use super::parser::parse_extraction_response;
use super::prompt::{build_extraction_prompt, EXTRACTION_SYSTEM_PROMPT};
use super::types::ExtractionClient;
use super::AnalysisError;

/// Successful analysis: the summary text, the ordered rubric rows, and the
/// rendered report artifact. Constructed once per invocation.
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    pub total_score: u32,
    pub summary: String,
    pub rows: Vec<ScoreRow>,
    pub html: String,
}

/// Drives one transcript through the scoring pipeline. Owns its data
/// exclusively per invocation; the tokenizer is the shared read-only
/// handle loaded at process start.
pub struct SpeechAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
    client: Box<dyn ExtractionClient + Send + Sync>,
}

impl SpeechAnalyzer {
    pub fn new(
        tokenizer: Arc<dyn Tokenizer>,
        client: Box<dyn ExtractionClient + Send + Sync>,
    ) -> Self {
        Self { tokenizer, client }
    }

    /// Analyze one transcript start to finish.
    pub fn analyze(
        &self,
        transcript: &str,
        duration_seconds: f64,
    ) -> Result<AnalysisReport, AnalysisError> {
        let _span = tracing::info_span!("analyze_speech", duration_seconds).entered();

        // Step 1: lexical statistics (pure arithmetic, cannot fail)
        let stats = analyze_lexical(self.tokenizer.as_ref(), transcript, duration_seconds);
        tracing::debug!(
            word_count = stats.word_count,
            wpm = stats.words_per_minute,
            filler_rate = stats.filler_rate_percent,
            "Lexical statistics computed"
        );

        // Step 2: request the structured extraction
        let prompt = build_extraction_prompt(transcript);
        let raw_response = self.client.complete(EXTRACTION_SYSTEM_PROMPT, &prompt)?;

        // Step 3: brace-span recovery, then strict schema parse
        let extraction = parse_extraction_response(&raw_response)?;

        // Step 4: fixed-order rubric rows and total
        let rows = build_breakdown(&stats, &extraction);
        let total = total_score(&rows);
        tracing::info!(total, "Analysis complete");

        // Step 5: render the report artifact
        let html = super::report::render_report(total, &stats, &rows, &extraction);

        let summary = format!(
            "Final Score: {total}/100\nSpeed: {} WPM ({})\nTone: {}",
            stats.words_per_minute, stats.speed_category, extraction.engagement.sentiment_label
        );

        Ok(AnalysisReport {
            total_score: total,
            summary,
            rows,
            html,
        })
    }
}

/// Core entry point: validate the credential, then run the pipeline against
/// the production extraction service. A blank credential fails before any
/// work begins.
pub fn analyze(
    tokenizer: Arc<dyn Tokenizer>,
    credential: &str,
    transcript: &str,
    duration_seconds: f64,
) -> Result<AnalysisReport, AnalysisError> {
    if credential.trim().is_empty() {
        return Err(AnalysisError::MissingCredential);
    }

    let client = GroqClient::new(credential);
    SpeechAnalyzer::new(tokenizer, Box::new(client)).analyze(transcript, duration_seconds)
}
