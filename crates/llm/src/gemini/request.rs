//! Request and response bodies of the `generateContent` API

use crate::{Author, Content};
use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

/// The request body
#[derive(Debug, Clone, Serialize)]
pub struct Request {
    /// The history followed by the new user message
    pub contents: Vec<Content>,
}

impl Request {
    /// Append `message` as a user entry after `history`
    pub fn new(history: &[Content], message: &str) -> Self {
        let mut contents = Vec::with_capacity(history.len() + 1);
        contents.extend_from_slice(history);
        contents.push(Content::text(Author::User, message));
        Self { contents }
    }
}

/// The response body
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    /// Generated candidates
    #[serde(default)]
    pub candidates: Vec<Candidate>,

    /// Feedback on the prompt, set when it was blocked
    pub prompt_feedback: Option<PromptFeedback>,

    /// Error object returned in place of candidates
    pub error: Option<ApiError>,
}

/// One generated candidate
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// The generated content
    pub content: Option<CandidateContent>,

    /// Why generation stopped
    pub finish_reason: Option<String>,
}

/// The content of a candidate
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CandidateContent {
    /// The content parts
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

/// A response part; non-text parts carry no `text`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResponsePart {
    /// The text of the part
    pub text: Option<String>,
}

/// Prompt feedback
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    /// Why the prompt was blocked
    pub block_reason: Option<String>,
}

/// An API error object
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiError {
    /// Error message
    pub message: String,
}

impl Response {
    /// The text of the first candidate, all text parts concatenated.
    pub fn text(self) -> Result<String> {
        if let Some(err) = self.error {
            bail!("Gemini API error: {}", err.message);
        }

        let Some(candidate) = self.candidates.into_iter().next() else {
            if let Some(reason) = self.prompt_feedback.and_then(|f| f.block_reason) {
                bail!("prompt blocked: {reason}");
            }
            bail!("no candidates in Gemini response");
        };

        let texts: Vec<String> = candidate
            .content
            .map(|c| c.parts)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|p| p.text)
            .collect();
        if texts.is_empty() {
            match candidate.finish_reason {
                Some(reason) => bail!("no text in Gemini response (finish reason: {reason})"),
                None => bail!("no text in Gemini response"),
            }
        }

        Ok(texts.concat())
    }
}
