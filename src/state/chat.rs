#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::net::types::Message;

/// A locally echoed send result, not yet confirmed by a poll.
///
/// Carries a provisional client-side id so an echo can be dropped the moment
/// the canonical server copy shows up in a feed replacement.
#[derive(Clone, Debug, PartialEq)]
pub struct PendingEcho {
    pub local_id: uuid::Uuid,
    pub message: Message,
}

/// State for the chat view: the server-defined message list plus pending
/// optimistic echoes. Owned by the active chat view instance.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChatState {
    pub messages: Vec<Message>,
    pub pending: Vec<PendingEcho>,
    pub load_error: Option<String>,
    pub loaded: bool,
}

impl ChatState {
    /// Replace the list with a successful poll result and clear any previous
    /// load error.
    ///
    /// Pending echoes are reconciled against the new list: an echo whose
    /// server id appears in the feed is dropped in favor of the canonical
    /// entry, and echoes without a server id are dropped outright since the
    /// feed is authoritative and they can never be matched.
    pub fn apply_feed(&mut self, feed: Vec<Message>) {
        self.pending.retain(|echo| match &echo.message.id {
            Some(id) => !feed.iter().any(|message| message.id.as_ref() == Some(id)),
            None => false,
        });
        self.messages = feed;
        self.load_error = None;
        self.loaded = true;
    }

    /// Record a failed poll cycle. The existing list stays untouched.
    pub fn feed_failed(&mut self, error: String) {
        self.load_error = Some(error);
    }

    /// Append a successful send result as a pending echo.
    pub fn push_echo(&mut self, message: Message) {
        self.pending.push(PendingEcho {
            local_id: uuid::Uuid::new_v4(),
            message,
        });
    }

    /// Messages in display order: the canonical list followed by pending
    /// echoes.
    pub fn visible(&self) -> Vec<Message> {
        self.messages
            .iter()
            .chain(self.pending.iter().map(|echo| &echo.message))
            .cloned()
            .collect()
    }
}

/// Validate a draft for submission. Returns the trimmed text, or `None` for
/// an empty or whitespace-only draft, which must not reach the network.
pub fn normalized_draft(text: &str) -> Option<&str> {
    let trimmed = text.trim();
    if trimmed.is_empty() { None } else { Some(trimmed) }
}
