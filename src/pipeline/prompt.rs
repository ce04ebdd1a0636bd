pub const EXTRACTION_SYSTEM_PROMPT: &str = r#"
You are an expert linguistic evaluator and speech coach. Your ONLY role is to
analyze the provided speech transcript and extract structured data about the
speaker's content, grammar, and engagement.

RULES — ABSOLUTE, NO EXCEPTIONS:
1. Extract ONLY information explicitly stated in the transcript.
2. NEVER invent details the speaker did not mention.
3. If a field is unclear or missing, output null for that field.
4. Quote the opening phrase verbatim from the transcript.
5. List every grammar error with its correction and a short reason.
6. Output MUST be a single valid JSON object matching the requested schema,
   with no surrounding commentary.
"#;

/// Build the extraction prompt for a specific transcript.
pub fn build_extraction_prompt(transcript: &str) -> String {
    format!(
        r#"<transcript>
{transcript}
</transcript>

Analyze the above speech transcript and fill in the following JSON structure.
For any field not present in the speech, use null.

{{
  "salutation": {{
    "phrase_used": "the exact opening phrase, or empty string",
    "level": "No Salutation | Normal | Good | Excellent"
  }},
  "basic_details": {{
    "name": "speaker's name or null",
    "age": "speaker's age or null",
    "school_class": ["class, section or role"],
    "family": "family mention or null",
    "hobbies": ["hobby1", "hobby2"]
  }},
  "extra_details": {{
    "about_family": "details about the family or null",
    "origin": "where the speaker is from or null",
    "ambition": "what the speaker wants to become or null",
    "unique_fact": "one unique fact shared or null",
    "strengths": ["strength1", "strength2"]
  }},
  "flow": {{
    "is_order_followed": true
  }},
  "grammar": {{
    "errors": [
      {{
        "error_text": "the incorrect phrase as spoken",
        "correction": "the corrected phrase",
        "reason": "short explanation"
      }}
    ]
  }},
  "engagement": {{
    "sentiment_label": "Positive | Neutral | Negative",
    "positivity_probability": 0.0
  }}
}}
"#
    )
}
