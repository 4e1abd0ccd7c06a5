//! Typed parsing of provider responses.
//!
//! The Responses API does not place generated text in a single uniform
//! location: depending on the response type it arrives either as a direct
//! `output_text` payload or nested inside `output` items and their content
//! blocks. Both shapes are modeled explicitly here and tried in order
//! instead of probing fields at runtime.

use serde::Deserialize;

use crate::ports::ProviderError;

/// Wire representation of a provider response.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderResponse {
    /// Shape (a): direct text payload, preferred when non-empty.
    #[serde(default)]
    pub output_text: Option<OutputText>,

    /// Shape (b): ordered output items walked when (a) is absent or empty.
    #[serde(default)]
    pub output: Vec<OutputItem>,
}

/// Direct text payload: a single string or a list of lines.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OutputText {
    Single(String),
    Lines(Vec<String>),
}

/// One output item carrying ordered content blocks.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputItem {
    #[serde(default)]
    pub content: Vec<ContentBlock>,
}

/// One content block, optionally carrying text.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentBlock {
    #[serde(default)]
    pub text: Option<TextPayload>,
}

/// A content block's text, either plain or wrapped one level deeper.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TextPayload {
    Plain(String),
    Wrapped { value: String },
}

impl TextPayload {
    fn as_str(&self) -> &str {
        match self {
            TextPayload::Plain(text) => text,
            TextPayload::Wrapped { value } => value,
        }
    }
}

/// Normalizes a provider response into a single plain-text string.
///
/// Prefers the direct `output_text` when it is present and non-empty after
/// trimming; otherwise collects every non-empty text in the nested output,
/// in traversal order, joined by newlines. A fully empty result is an
/// extraction failure, never a valid empty completion.
pub fn extract_text(response: &ProviderResponse) -> Result<String, ProviderError> {
    if let Some(direct) = &response.output_text {
        let text = match direct {
            OutputText::Single(text) => text.trim().to_string(),
            OutputText::Lines(lines) => lines.join("\n").trim().to_string(),
        };
        if !text.is_empty() {
            return Ok(text);
        }
    }

    let collected: Vec<&str> = response
        .output
        .iter()
        .flat_map(|item| item.content.iter())
        .filter_map(|block| block.text.as_ref())
        .map(TextPayload::as_str)
        .filter(|text| !text.is_empty())
        .collect();

    let text = collected.join("\n").trim().to_string();
    if text.is_empty() {
        return Err(ProviderError::EmptyCompletion);
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> ProviderResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn direct_text_is_returned_trimmed() {
        let response = parse(r#"{"output_text": "  olá  "}"#);
        assert_eq!(extract_text(&response).unwrap(), "olá");
    }

    #[test]
    fn direct_text_list_is_joined_with_newlines() {
        let response = parse(r#"{"output_text": ["primeira", "segunda"]}"#);
        assert_eq!(extract_text(&response).unwrap(), "primeira\nsegunda");
    }

    #[test]
    fn empty_direct_text_falls_back_to_nested_output() {
        let response = parse(
            r#"{"output_text": "", "output": [{"content": [{"text": "do bloco"}]}]}"#,
        );
        assert_eq!(extract_text(&response).unwrap(), "do bloco");
    }

    #[test]
    fn nested_blocks_are_collected_in_traversal_order() {
        let response = parse(
            r#"{"output": [
                {"content": [{"text": "primeira"}, {"text": "segunda"}]},
                {"content": [{"text": "terceira"}]}
            ]}"#,
        );
        assert_eq!(
            extract_text(&response).unwrap(),
            "primeira\nsegunda\nterceira"
        );
    }

    #[test]
    fn wrapped_text_values_are_unwrapped() {
        let response = parse(
            r#"{"output": [{"content": [{"text": {"value": "embrulhado"}}]}]}"#,
        );
        assert_eq!(extract_text(&response).unwrap(), "embrulhado");
    }

    #[test]
    fn blocks_without_text_are_skipped() {
        let response = parse(
            r#"{"output": [{"content": [{}, {"text": ""}, {"text": "útil"}]}]}"#,
        );
        assert_eq!(extract_text(&response).unwrap(), "útil");
    }

    #[test]
    fn empty_response_is_an_extraction_failure() {
        let response = parse(r#"{}"#);
        assert!(matches!(
            extract_text(&response),
            Err(ProviderError::EmptyCompletion)
        ));

        let response = parse(r#"{"output_text": "", "output": []}"#);
        assert!(matches!(
            extract_text(&response),
            Err(ProviderError::EmptyCompletion)
        ));
    }

    #[test]
    fn whitespace_only_response_is_an_extraction_failure() {
        let response = parse(r#"{"output_text": "   "}"#);
        assert!(matches!(
            extract_text(&response),
            Err(ProviderError::EmptyCompletion)
        ));
    }
}
