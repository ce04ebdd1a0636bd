//! Static HTML report rendering. Pure presentation of already-derived data:
//! identical inputs produce byte-identical output, absent fields render as
//! an explicit placeholder, and every extraction-supplied string is
//! HTML-escaped before it reaches the document.

use super::aggregate::ScoreRow;
use super::lexical::LexicalStats;
use super::types::ExtractionResult;

const NOT_MENTIONED: &str = "<em>Not mentioned</em>";

/// Render the complete self-contained report document.
pub fn render_report(
    total_score: u32,
    stats: &LexicalStats,
    rows: &[ScoreRow],
    extraction: &ExtractionResult,
) -> String {
    let score_rows: String = rows
        .iter()
        .map(|r| {
            format!(
                "<tr><td>{}</td><td>{}</td><td><strong>{}</strong> / {}</td></tr>",
                escape_html(&r.category),
                escape_html(&r.metric),
                r.score,
                r.max
            )
        })
        .collect();

    let grammar_html = render_grammar_section(extraction);

    let basic = &extraction.basic_details;
    let extra = &extraction.extra_details;

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Speech Analysis Report</title>
  <style>
    body {{ font-family: 'Segoe UI', Roboto, Helvetica, Arial, sans-serif; background: #f4f7f6; margin: 0; padding: 40px; color: #333; }}
    .container {{ max-width: 900px; margin: auto; background: white; padding: 40px; border-radius: 15px; box-shadow: 0 10px 25px rgba(0,0,0,0.05); }}
    h1 {{ text-align: center; color: #2c3e50; margin-bottom: 10px; }}
    .summary {{ text-align: center; font-size: 1.2em; color: #7f8c8d; margin-bottom: 30px; }}
    .score-container {{ text-align: center; margin-bottom: 40px; }}
    .big-score {{ font-size: 4em; font-weight: 800; color: #6c5ce7; display: block; line-height: 1; }}
    .score-label {{ font-size: 1em; text-transform: uppercase; letter-spacing: 1px; color: #a29bfe; }}
    h2 {{ border-bottom: 2px solid #f1f2f6; padding-bottom: 10px; margin-top: 40px; color: #2d3436; }}
    table {{ width: 100%; border-collapse: collapse; margin-bottom: 20px; }}
    th {{ text-align: left; background: #f8f9fa; padding: 12px; color: #636e72; }}
    td {{ padding: 12px; border-bottom: 1px solid #eee; }}
    .details-grid {{ display: grid; grid-template-columns: 1fr 1fr; gap: 20px; }}
    .detail-card {{ border: 1px solid #dfe6e9; border-radius: 8px; padding: 20px; }}
    .detail-card h3 {{ margin-top: 0; color: #6c5ce7; font-size: 1.1em; }}
    .detail-row {{ margin-bottom: 10px; display: flex; justify-content: space-between; }}
    .detail-label {{ font-weight: 600; color: #636e72; }}
    .detail-val {{ text-align: right; color: #2d3436; max-width: 60%; }}
    .grammar-box {{ background: #fff0f0; border-left: 4px solid #ff7675; padding: 15px; margin-bottom: 15px; border-radius: 4px; }}
    .success-box {{ background: #e3fcef; border-left: 4px solid #00b894; padding: 15px; color: #00b894; font-weight: bold; }}
    .wrong {{ text-decoration: line-through; color: #7f8c8d; }}
    .right {{ color: #27ae60; font-weight: bold; }}
    .reason {{ font-style: italic; color: #636e72; font-size: 0.9em; margin-top: 5px; }}
  </style>
</head>
<body>
  <div class="container">
    <h1>Speech Analysis Report</h1>
    <div class="summary">
      Speed: <strong>{wpm} WPM</strong> ({speed_category}) &bull; Tone: <strong>{sentiment}</strong>
    </div>

    <div class="score-container">
      <span class="big-score">{total_score}</span>
      <span class="score-label">Total Score / 100</span>
    </div>

    <h2>Score Breakdown</h2>
    <table>
      <thead><tr><th>Category</th><th>Metric</th><th>Score</th></tr></thead>
      <tbody>{score_rows}</tbody>
    </table>

    <h2>Content Details</h2>
    <div class="details-grid">
      <div class="detail-card">
        <h3>Basic Information</h3>
        <div class="detail-row"><span class="detail-label">Opening:</span> <span class="detail-val">{opening}</span></div>
        <div class="detail-row"><span class="detail-label">Name:</span> <span class="detail-val">{name}</span></div>
        <div class="detail-row"><span class="detail-label">Age:</span> <span class="detail-val">{age}</span></div>
        <div class="detail-row"><span class="detail-label">Class/Role:</span> <span class="detail-val">{school_class}</span></div>
        <div class="detail-row"><span class="detail-label">Hobbies:</span> <span class="detail-val">{hobbies}</span></div>
      </div>

      <div class="detail-card">
        <h3>Deeper Insights</h3>
        <div class="detail-row"><span class="detail-label">Family Context:</span> <span class="detail-val">{family}</span></div>
        <div class="detail-row"><span class="detail-label">About Family:</span> <span class="detail-val">{about_family}</span></div>
        <div class="detail-row"><span class="detail-label">Origin:</span> <span class="detail-val">{origin}</span></div>
        <div class="detail-row"><span class="detail-label">Ambition:</span> <span class="detail-val">{ambition}</span></div>
        <div class="detail-row"><span class="detail-label">Unique Fact:</span> <span class="detail-val">{unique_fact}</span></div>
        <div class="detail-row"><span class="detail-label">Strengths:</span> <span class="detail-val">{strengths}</span></div>
      </div>
    </div>

    <h2>Grammar Feedback</h2>
    {grammar_html}
  </div>
</body>
</html>
"#,
        wpm = stats.words_per_minute,
        speed_category = escape_html(&stats.speed_category.to_string()),
        sentiment = extraction.engagement.sentiment_label,
        total_score = total_score,
        score_rows = score_rows,
        opening = format_text(Some(&extraction.salutation.phrase_used)),
        name = format_text(basic.name.as_ref()),
        age = format_text(basic.age.as_ref()),
        school_class = format_list(basic.school_class.as_deref()),
        hobbies = format_list(basic.hobbies.as_deref()),
        family = format_text(basic.family.as_ref()),
        about_family = format_text(extra.about_family.as_ref()),
        origin = format_text(extra.origin.as_ref()),
        ambition = format_text(extra.ambition.as_ref()),
        unique_fact = format_text(extra.unique_fact.as_ref()),
        strengths = format_list(extra.strengths.as_deref()),
        grammar_html = grammar_html,
    )
}

fn render_grammar_section(extraction: &ExtractionResult) -> String {
    if extraction.grammar.errors.is_empty() {
        return "<div class='success-box'>Great job! No major grammar errors detected.</div>"
            .to_string();
    }

    extraction
        .grammar
        .errors
        .iter()
        .map(|err| {
            format!(
                "<div class='grammar-box'>\
                 <p><strong>Wrong:</strong> <span class=\"wrong\">{}</span></p>\
                 <p><strong>Right:</strong> <span class=\"right\">{}</span></p>\
                 <p class=\"reason\">{}</p>\
                 </div>",
                escape_html(&err.error_text),
                escape_html(&err.correction),
                escape_html(&err.reason)
            )
        })
        .collect()
}

/// Text field: escaped value, or the placeholder when absent or blank.
fn format_text(field: Option<&String>) -> String {
    match field {
        Some(value) if !value.trim().is_empty() => escape_html(value),
        _ => NOT_MENTIONED.to_string(),
    }
}

/// List field: comma-joined escaped values, or the placeholder when empty.
fn format_list(field: Option<&[String]>) -> String {
    match field {
        Some(items) if !items.is_empty() => escape_html(&items.join(", ")),
        _ => NOT_MENTIONED.to_string(),
    }
}

fn escape_html(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
