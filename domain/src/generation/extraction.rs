//! Question/answer text extraction from generation output.
//!
//! These functions turn an unpredictable [`GenerationOutput`] into usable
//! text. They are pure domain logic, no I/O, just an ordered chain of
//! strategies where the first success wins:
//!
//! | Tier | Source | Accepts |
//! |------|--------|---------|
//! | 1 | primary `content` field | any non-empty text, trimmed |
//! | 2 | `reasoning` field | a quoted substring ending in `?`, or in `.` with >10 chars |
//! | 3 | stringified raw payload | a `content='…'` or `"content": "…"` pattern |
//!
//! `None` means no tier produced text; the caller decides what that costs.
//! There is deliberately no canned fallback question here: fabricated
//! content would be indistinguishable from a real generation downstream.

use crate::generation::output::GenerationOutput;

/// Extract follow-up question text. Runs the full strategy chain, including
/// the quoted-question search over the reasoning field.
pub fn extract_question(output: &GenerationOutput) -> Option<String> {
    direct_content(output)
        .or_else(|| quoted_sentence_in_reasoning(output))
        .or_else(|| content_pattern_in_dump(output))
}

/// Extract answer text. Answers come back as the primary content or not at
/// all; reasoning commentary never holds a quotable answer, so that tier is
/// skipped.
pub fn extract_answer(output: &GenerationOutput) -> Option<String> {
    direct_content(output).or_else(|| content_pattern_in_dump(output))
}

/// Tier 1: a non-empty primary content field, trimmed.
fn direct_content(output: &GenerationOutput) -> Option<String> {
    let content = output.content.as_deref()?.trim();
    if content.is_empty() {
        return None;
    }
    Some(content.to_string())
}

/// Tier 2: models that answer inside their reasoning usually quote the
/// question they intend to ask. Take the first quoted span that reads like
/// a sentence: ends in `?`, or ends in `.` and is longer than trivia.
fn quoted_sentence_in_reasoning(output: &GenerationOutput) -> Option<String> {
    let reasoning = output.reasoning.as_deref()?;
    first_plausible_quote(reasoning)
}

/// Tier 3: stringify the whole raw payload and look for a content field in
/// either debug (`content='…'`) or JSON (`"content": "…"`) notation.
fn content_pattern_in_dump(output: &GenerationOutput) -> Option<String> {
    let dump = output.raw.to_string();

    for pattern in ["content='", "\"content\": \"", "\"content\":\""] {
        let Some(start) = dump.find(pattern) else {
            continue;
        };
        let rest = &dump[start + pattern.len()..];
        let terminator = if pattern.starts_with("content='") { '\'' } else { '"' };
        if let Some(end) = find_unescaped(rest, terminator) {
            let candidate = unescape_json_fragment(&rest[..end]);
            let candidate = candidate.trim();
            if !candidate.is_empty() {
                return Some(candidate.to_string());
            }
        }
    }
    None
}

/// Scan `text` for quoted spans (single or double quotes) and return the
/// first one that plausibly is a full sentence.
fn first_plausible_quote(text: &str) -> Option<String> {
    for quote in ['"', '\''] {
        let mut rest = text;
        while let Some(open) = rest.find(quote) {
            let after_open = &rest[open + 1..];
            let Some(close) = after_open.find(quote) else {
                break;
            };
            let span = after_open[..close].trim();
            if is_plausible_sentence(span) {
                return Some(span.to_string());
            }
            rest = &after_open[close + 1..];
        }
    }
    None
}

fn is_plausible_sentence(span: &str) -> bool {
    span.ends_with('?') || (span.ends_with('.') && span.len() > 10)
}

/// Position of the first `terminator` in `s` not preceded by a backslash.
fn find_unescaped(s: &str, terminator: char) -> Option<usize> {
    let mut escaped = false;
    for (i, c) in s.char_indices() {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == terminator {
            return Some(i);
        }
    }
    None
}

/// Undo the escapes `serde_json::Value::to_string` introduces.
fn unescape_json_fragment(s: &str) -> String {
    s.replace("\\\"", "\"")
        .replace("\\n", "\n")
        .replace("\\\\", "\\")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direct_content_wins_and_is_trimmed() {
        let output = GenerationOutput::from_text("  What drove that decision?  ");
        assert_eq!(
            extract_question(&output).as_deref(),
            Some("What drove that decision?")
        );
    }

    #[test]
    fn blank_content_falls_through_to_reasoning() {
        let mut output = GenerationOutput::from_reasoning(
            r#"The user answered about deadlines. A good probe would be "How do you prioritize when everything is urgent?" since it digs deeper."#,
        );
        output.content = Some("   ".to_string());
        assert_eq!(
            extract_question(&output).as_deref(),
            Some("How do you prioritize when everything is urgent?")
        );
    }

    #[test]
    fn reasoning_quote_must_look_like_a_sentence() {
        // Short quoted fragments and non-sentence quotes are skipped.
        let output = GenerationOutput::from_reasoning(
            r#"They mentioned "agile" and "scrum". I should ask "What does your sprint retrospective look like?" next."#,
        );
        assert_eq!(
            extract_question(&output).as_deref(),
            Some("What does your sprint retrospective look like?")
        );
    }

    #[test]
    fn reasoning_accepts_long_declarative_quote() {
        let output = GenerationOutput::from_reasoning(
            r#"I will ask them: 'Describe the hardest bug you shipped to production.' to probe further."#,
        );
        assert_eq!(
            extract_question(&output).as_deref(),
            Some("Describe the hardest bug you shipped to production.")
        );
    }

    #[test]
    fn dump_pattern_is_the_last_resort() {
        let output = GenerationOutput::opaque(serde_json::json!({
            "choices": [{ "message": { "content": "Which project are you proudest of?" } }]
        }));
        assert_eq!(
            extract_question(&output).as_deref(),
            Some("Which project are you proudest of?")
        );
    }

    #[test]
    fn dump_pattern_handles_python_style_repr() {
        let output = GenerationOutput::opaque(serde_json::json!({
            "dump": "Message(role='assistant', content='Can you walk me through that launch?')"
        }));
        assert_eq!(
            extract_question(&output).as_deref(),
            Some("Can you walk me through that launch?")
        );
    }

    #[test]
    fn dump_pattern_unescapes_embedded_quotes() {
        let output = GenerationOutput::opaque(serde_json::json!({
            "message": { "content": "What does \"done\" mean to your team?" }
        }));
        assert_eq!(
            extract_question(&output).as_deref(),
            Some(r#"What does "done" mean to your team?"#)
        );
    }

    #[test]
    fn nothing_extractable_returns_none() {
        let output = GenerationOutput::opaque(serde_json::json!({ "error": "upstream 502" }));
        assert_eq!(extract_question(&output), None);
        assert_eq!(extract_answer(&output), None);
    }

    #[test]
    fn answers_skip_the_reasoning_tier() {
        let output = GenerationOutput::from_reasoning(
            r#"The employee would likely say "I focus on testing first." here."#,
        );
        assert_eq!(extract_answer(&output), None);
        // extract_question still finds the quoted sentence.
        assert!(extract_question(&output).is_some());
    }
}
