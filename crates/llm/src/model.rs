//! The remote chat model seam

use crate::Content;
use anyhow::Result;

/// A remote chat-completion model.
///
/// The transport hands over the prior conversation as role-tagged history
/// plus one new message and expects the reply text back.
pub trait Model: Send + Sync {
    /// Submit `message` against `history` and return the reply text
    fn send_message(
        &self,
        history: &[Content],
        message: &str,
    ) -> impl Future<Output = Result<String>> + Send;
}
