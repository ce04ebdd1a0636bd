//! Locally computed lexical statistics: word count, speech rate,
//! vocabulary richness, and filler-word rate. Pure arithmetic — the
//! degenerate cases (empty transcript, non-positive duration) produce
//! neutral scores instead of errors.

use std::fmt;

use regex::Regex;
use serde::Serialize;

/// Hesitation markers penalized in clarity scoring.
const FILLER_WORDS: &[&str] = &["um", "uh", "like", "you know", "so", "actually"];

/// Word tokenization abstraction — the only NLP capability the pipeline
/// needs. Loaded once at startup and shared read-only across analyses.
pub trait Tokenizer: Send + Sync {
    /// Split text into purely alphabetic word tokens.
    fn alphabetic_words(&self, text: &str) -> Vec<String>;
}

/// Default tokenizer: splits on any non-alphabetic character.
#[derive(Debug, Default)]
pub struct AlphabeticTokenizer;

impl Tokenizer for AlphabeticTokenizer {
    fn alphabetic_words(&self, text: &str) -> Vec<String> {
        text.split(|c: char| !c.is_alphabetic())
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Speech rate band derived from words-per-minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SpeedCategory {
    TooFast,
    Fast,
    Ideal,
    Slow,
    TooSlow,
}

impl fmt::Display for SpeedCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SpeedCategory::TooFast => "Too Fast",
            SpeedCategory::Fast => "Fast",
            SpeedCategory::Ideal => "Ideal",
            SpeedCategory::Slow => "Slow",
            SpeedCategory::TooSlow => "Too Slow",
        };
        f.write_str(label)
    }
}

/// Lexical statistics computed once per analysis, never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct LexicalStats {
    pub word_count: usize,
    pub words_per_minute: u32,
    pub speed_category: SpeedCategory,
    pub speed_score: u32,
    pub type_token_ratio: f64,
    pub vocabulary_score: u32,
    pub filler_count: usize,
    pub filler_rate_percent: f64,
    pub clarity_score: u32,
}

/// Compute all lexical statistics from the raw transcript and its duration.
pub fn analyze_lexical(
    tokenizer: &dyn Tokenizer,
    transcript: &str,
    duration_seconds: f64,
) -> LexicalStats {
    let words = tokenizer.alphabetic_words(transcript);
    let word_count = words.len();

    let words_per_minute = if duration_seconds > 0.0 {
        ((word_count as f64 / duration_seconds) * 60.0).round() as u32
    } else {
        0
    };
    let (speed_category, speed_score) = speed_band(words_per_minute);

    let type_token_ratio = if word_count > 0 {
        let distinct: std::collections::HashSet<String> =
            words.iter().map(|w| w.to_lowercase()).collect();
        distinct.len() as f64 / word_count as f64
    } else {
        0.0
    };
    let vocabulary_score = vocabulary_band(type_token_ratio);

    let filler_count = count_fillers(transcript);
    let filler_rate_percent = if word_count > 0 {
        round2((filler_count as f64 / word_count as f64) * 100.0)
    } else {
        0.0
    };
    let clarity_score = if filler_rate_percent <= 3.0 { 15 } else { 12 };

    LexicalStats {
        word_count,
        words_per_minute,
        speed_category,
        speed_score,
        type_token_ratio,
        vocabulary_score,
        filler_count,
        filler_rate_percent,
        clarity_score,
    }
}

/// Fixed rubric bands over words-per-minute, inclusive on the stated bounds.
fn speed_band(wpm: u32) -> (SpeedCategory, u32) {
    match wpm {
        161.. => (SpeedCategory::TooFast, 2),
        141..=160 => (SpeedCategory::Fast, 6),
        111..=140 => (SpeedCategory::Ideal, 10),
        81..=110 => (SpeedCategory::Slow, 6),
        _ => (SpeedCategory::TooSlow, 2),
    }
}

fn vocabulary_band(type_token_ratio: f64) -> u32 {
    if type_token_ratio >= 0.9 {
        10
    } else if type_token_ratio >= 0.7 {
        8
    } else {
        6
    }
}

/// Case-insensitive whole-word filler matches over the raw transcript.
/// "you know" is matched as a two-word phrase.
fn count_fillers(transcript: &str) -> usize {
    let pattern = format!(r"(?i)\b(?:{})\b", FILLER_WORDS.join("|"));
    let re = Regex::new(&pattern).expect("invalid filler pattern");
    re.find_iter(transcript).count()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(transcript: &str, duration: f64) -> LexicalStats {
        analyze_lexical(&AlphabeticTokenizer, transcript, duration)
    }

    #[test]
    fn counts_only_alphabetic_tokens() {
        let words = AlphabeticTokenizer.alphabetic_words("I am 12 years old.");
        assert_eq!(words, vec!["I", "am", "years", "old"]);
    }

    #[test]
    fn speed_band_boundaries_are_exact() {
        assert_eq!(speed_band(161), (SpeedCategory::TooFast, 2));
        assert_eq!(speed_band(160), (SpeedCategory::Fast, 6));
        assert_eq!(speed_band(141), (SpeedCategory::Fast, 6));
        assert_eq!(speed_band(140), (SpeedCategory::Ideal, 10));
        assert_eq!(speed_band(111), (SpeedCategory::Ideal, 10));
        assert_eq!(speed_band(110), (SpeedCategory::Slow, 6));
        assert_eq!(speed_band(81), (SpeedCategory::Slow, 6));
        assert_eq!(speed_band(80), (SpeedCategory::TooSlow, 2));
    }

    #[test]
    fn non_positive_duration_means_rate_undefined() {
        for duration in [0.0, -5.0] {
            let s = stats("one two three four five", duration);
            assert_eq!(s.words_per_minute, 0);
            assert_eq!(s.speed_category, SpeedCategory::TooSlow);
            assert_eq!(s.speed_score, 2);
        }
    }

    #[test]
    fn empty_transcript_produces_neutral_scores() {
        let s = stats("", 60.0);
        assert_eq!(s.word_count, 0);
        assert_eq!(s.words_per_minute, 0);
        assert_eq!(s.type_token_ratio, 0.0);
        assert_eq!(s.vocabulary_score, 6);
        assert_eq!(s.filler_rate_percent, 0.0);
        assert_eq!(s.clarity_score, 15);
    }

    #[test]
    fn wpm_is_rounded() {
        // 11 words in 30 seconds = 22 WPM
        let s = stats("one two three four five six seven eight nine ten eleven", 30.0);
        assert_eq!(s.word_count, 11);
        assert_eq!(s.words_per_minute, 22);
    }

    #[test]
    fn type_token_ratio_folds_case() {
        let s = stats("Hello hello HELLO world", 60.0);
        assert_eq!(s.word_count, 4);
        assert!((s.type_token_ratio - 0.5).abs() < f64::EPSILON);
        assert_eq!(s.vocabulary_score, 6);
    }

    #[test]
    fn vocabulary_bands() {
        assert_eq!(vocabulary_band(0.95), 10);
        assert_eq!(vocabulary_band(0.9), 10);
        assert_eq!(vocabulary_band(0.7), 8);
        assert_eq!(vocabulary_band(0.69), 6);
    }

    #[test]
    fn fillers_match_whole_words_case_insensitively() {
        assert_eq!(count_fillers("Um, I was like, you know, SO nervous"), 4);
        // No match inside larger words
        assert_eq!(count_fillers("umbrella also unlike"), 0);
    }

    #[test]
    fn filler_rate_drives_clarity_score() {
        // 1 filler in 5 words = 20% > 3% threshold
        let noisy = stats("um one two three four", 60.0);
        assert_eq!(noisy.filler_count, 1);
        assert!((noisy.filler_rate_percent - 20.0).abs() < f64::EPSILON);
        assert_eq!(noisy.clarity_score, 12);

        let clean = stats("one two three four five", 60.0);
        assert_eq!(clean.filler_count, 0);
        assert_eq!(clean.clarity_score, 15);
    }

    #[test]
    fn filler_rate_rounds_to_two_decimals() {
        // 1 filler in 3 words = 33.333...% -> 33.33
        let s = stats("um one two", 60.0);
        assert!((s.filler_rate_percent - 33.33).abs() < f64::EPSILON);
    }
}
