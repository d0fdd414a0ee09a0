//! Chat-side entry point: decide whether to answer and with which meme.

use crate::app::CaptionSelector;
use crate::domain::{ChatConfig, ChatMessage, TriggerPolicy, build_transcript};
use crate::ports::CaptionOracle;

/// Answers triggering chat messages with a meme URL.
pub struct MemeResponder<O: CaptionOracle> {
    selector: CaptionSelector<O>,
    policy: TriggerPolicy,
    history_limit: usize,
}

impl<O: CaptionOracle> MemeResponder<O> {
    pub fn new(
        selector: CaptionSelector<O>,
        bot_user_id: impl Into<String>,
        chat: &ChatConfig,
    ) -> Self {
        Self {
            selector,
            policy: TriggerPolicy::new(bot_user_id, chat.trigger_phrase.as_str()),
            history_limit: chat.history_limit,
        }
    }

    /// Reply for `message`, or `None` if it does not ask for a meme.
    ///
    /// `history` holds the channel's preceding messages, newest first.
    pub fn respond(&self, message: &ChatMessage, history: &[ChatMessage]) -> Option<String> {
        if !self.policy.is_triggered(message) {
            return None;
        }

        let transcript = build_transcript(message, history, self.history_limit, &self.policy);
        tracing::info!(author = %message.author, lines = transcript.lines().count(), "meme requested");
        Some(self.selector.select_and_encode(&transcript))
    }
}
