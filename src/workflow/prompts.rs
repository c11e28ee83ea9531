//! Prompt construction for the two summarizer calls.
//!
//! Sources are serialized deterministically so prompt construction can
//! be tested without invoking the generation capability.

use crate::types::SourceRecord;

/// Build the search query for a research pass: the topic, with the
/// previous rejection reason appended when present.
pub fn search_query(topic: &str, feedback: Option<&str>) -> String {
    match feedback {
        Some(feedback) => format!("{topic}. Improve research based on feedback: {feedback}"),
        None => topic.to_string(),
    }
}

/// Serialize a source batch as numbered blocks, in input order.
pub fn render_sources(sources: &[SourceRecord]) -> String {
    let mut out = String::new();
    for (i, source) in sources.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!(
            "{}. {}\n   URL: {}\n   {}\n",
            i + 1,
            source.title,
            source.url,
            source.content
        ));
    }
    out
}

/// Prompt instructing the summarizer to condense sources into notes.
pub fn summary_prompt(sources: &[SourceRecord]) -> String {
    format!(
        r#"Summarize the following research into clear bullet-point notes.
Include facts and figures where possible.

SOURCES:
{}"#,
        render_sources(sources)
    )
}

/// Prompt instructing the summarizer to compose the final report.
pub fn report_prompt(topic: &str, notes: &str) -> String {
    format!(
        r#"Write a professional Markdown research report.

Topic:
{topic}

Research Notes:
{notes}

Requirements:
- Use headings
- Use bullet points where suitable
- Include source citations"#
    )
}
