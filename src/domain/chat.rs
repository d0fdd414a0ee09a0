//! Trigger detection and transcript windows for chat hosts.
//!
//! Hosts translate their platform messages into [`ChatMessage`]; nothing here
//! talks to a chat service.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A chat message as seen by the bot.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Display name used as the transcript speaker.
    pub author: String,
    pub author_id: String,
    pub content: String,
    #[serde(default)]
    pub author_is_bot: bool,
    /// User ids mentioned in the message.
    #[serde(default)]
    pub mentions: Vec<String>,
    /// Display names for mentioned user ids, used when rendering transcripts.
    #[serde(default)]
    pub mention_names: BTreeMap<String, String>,
}

impl ChatMessage {
    pub fn new(author: impl Into<String>, content: impl Into<String>) -> Self {
        let author = author.into();
        Self { author_id: author.clone(), author, content: content.into(), ..Default::default() }
    }

    pub fn with_author_id(mut self, author_id: impl Into<String>) -> Self {
        self.author_id = author_id.into();
        self
    }

    pub fn mentioning(mut self, user_id: impl Into<String>) -> Self {
        self.mentions.push(user_id.into());
        self
    }

    /// Mention a user whose `<@id>` token should read as `@name` in transcripts.
    pub fn mentioning_named(
        mut self,
        user_id: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        let user_id = user_id.into();
        self.mention_names.insert(user_id.clone(), name.into());
        self.mentions.push(user_id);
        self
    }

    pub fn from_bot(mut self) -> Self {
        self.author_is_bot = true;
        self
    }
}

/// Decides which messages ask the bot for a meme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerPolicy {
    bot_user_id: String,
    phrase: String,
}

impl TriggerPolicy {
    pub fn new(bot_user_id: impl Into<String>, phrase: impl Into<String>) -> Self {
        Self { bot_user_id: bot_user_id.into(), phrase: phrase.into().trim().to_lowercase() }
    }

    pub fn is_triggered(&self, message: &ChatMessage) -> bool {
        if message.author_is_bot || message.author_id == self.bot_user_id {
            return false;
        }
        self.mentions_bot(message) || self.contains_phrase(&message.content)
    }

    fn mentions_bot(&self, message: &ChatMessage) -> bool {
        message.mentions.iter().any(|id| id == &self.bot_user_id)
    }

    fn contains_phrase(&self, content: &str) -> bool {
        !self.phrase.is_empty() && content.to_lowercase().contains(&self.phrase)
    }

    /// True when the message is nothing but the trigger phrase.
    fn is_bare_phrase(&self, content: &str) -> bool {
        content.trim().to_lowercase() == self.phrase
    }

    /// Rewrite `<@id>` and `<@!id>` tokens: the bot's own are dropped, other
    /// users become `@name` when known and are dropped otherwise.
    fn rewrite_mentions(&self, content: &str, names: &BTreeMap<String, String>) -> String {
        let mut out = String::with_capacity(content.len());
        let mut rest = content;

        while let Some(start) = rest.find("<@") {
            out.push_str(&rest[..start]);
            let tail = &rest[start + 2..];
            let id_part = tail.strip_prefix('!').unwrap_or(tail);
            let digits = id_part.find(|c: char| !c.is_ascii_digit()).unwrap_or(id_part.len());

            if digits == 0 || !id_part[digits..].starts_with('>') {
                out.push_str("<@");
                rest = tail;
                continue;
            }

            let id = &id_part[..digits];
            rest = &id_part[digits + 1..];
            match names.get(id) {
                Some(name) if id != self.bot_user_id => {
                    out.push('@');
                    out.push_str(name);
                }
                _ => {
                    if out.ends_with(' ') {
                        rest = rest.trim_start_matches(' ');
                    }
                }
            }
        }

        out.push_str(rest);
        out.trim().to_string()
    }
}

/// Render the conversation window passed to the caption selector.
///
/// `history` is newest first, as chat history endpoints return it. At most
/// `limit` history messages are considered; bot messages and bare trigger
/// phrases are skipped. The triggering message is always the last line unless
/// it carries no text besides the trigger itself.
pub fn build_transcript(
    trigger: &ChatMessage,
    history: &[ChatMessage],
    limit: usize,
    policy: &TriggerPolicy,
) -> String {
    let mut lines: Vec<String> = history
        .iter()
        .take(limit)
        .filter(|msg| !msg.author_is_bot && msg.author_id != policy.bot_user_id)
        .filter_map(|msg| transcript_line(msg, policy))
        .collect();
    lines.reverse();

    if let Some(line) = transcript_line(trigger, policy) {
        lines.push(line);
    }

    lines.join("\n")
}

fn transcript_line(message: &ChatMessage, policy: &TriggerPolicy) -> Option<String> {
    let text = policy.rewrite_mentions(&message.content, &message.mention_names);
    if text.is_empty() || policy.is_bare_phrase(&text) {
        return None;
    }
    Some(format!("{}: {}", message.author, text))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOT: &str = "1326647991620341781";

    fn policy() -> TriggerPolicy {
        TriggerPolicy::new(BOT, "Meme this")
    }

    #[test]
    fn mention_triggers() {
        let msg = ChatMessage::new("greywether", format!("<@{BOT}> cats vs dogs")).mentioning(BOT);
        assert!(policy().is_triggered(&msg));
    }

    #[test]
    fn phrase_triggers_case_insensitively() {
        assert!(policy().is_triggered(&ChatMessage::new("greywether", "ok MEME THIS")));
        assert!(!policy().is_triggered(&ChatMessage::new("greywether", "memes are great")));
    }

    #[test]
    fn bots_never_trigger() {
        let msg = ChatMessage::new("other-bot", "meme this").from_bot();
        assert!(!policy().is_triggered(&msg));

        let own = ChatMessage::new("memebot", "meme this").with_author_id(BOT);
        assert!(!policy().is_triggered(&own));
    }

    #[test]
    fn empty_phrase_only_allows_mentions() {
        let policy = TriggerPolicy::new(BOT, "  ");
        assert!(!policy.is_triggered(&ChatMessage::new("a", "anything")));
        assert!(policy.is_triggered(&ChatMessage::new("a", "hi").mentioning(BOT)));
    }

    #[test]
    fn transcript_is_oldest_first_and_ends_with_trigger() {
        let history = vec![
            ChatMessage::new("bob", "definitely tabs"),
            ChatMessage::new("alice", "tabs or spaces?"),
        ];
        let trigger = ChatMessage::new("carol", format!("<@{BOT}> settle this")).mentioning(BOT);

        let transcript = build_transcript(&trigger, &history, 5, &policy());
        assert_eq!(transcript, "alice: tabs or spaces?\nbob: definitely tabs\ncarol: settle this");
    }

    #[test]
    fn transcript_skips_bots_and_bare_triggers() {
        let history = vec![
            ChatMessage::new("memebot", "https://api.memegen.link/images/drake/a/b.png")
                .with_author_id(BOT),
            ChatMessage::new("helper", "beep").from_bot(),
            ChatMessage::new("alice", "meme this"),
            ChatMessage::new("alice", "I keep getting distracted by meme bots"),
        ];
        let trigger = ChatMessage::new("alice", "  Meme this ");

        let transcript = build_transcript(&trigger, &history, 5, &policy());
        assert_eq!(transcript, "alice: I keep getting distracted by meme bots");
    }

    #[test]
    fn transcript_respects_history_limit() {
        let history: Vec<_> =
            (0..10).rev().map(|i| ChatMessage::new("user", format!("message {i}"))).collect();
        let trigger = ChatMessage::new("user", "meme this");

        let transcript = build_transcript(&trigger, &history, 3, &policy());
        assert_eq!(transcript, "user: message 7\nuser: message 8\nuser: message 9");
    }

    #[test]
    fn strips_nickname_mentions() {
        let trigger = ChatMessage::new("dave", format!("<@!{BOT}>   cats > dogs")).mentioning(BOT);
        assert_eq!(build_transcript(&trigger, &[], 5, &policy()), "dave: cats > dogs");
    }

    #[test]
    fn other_mentions_use_display_names() {
        let trigger = ChatMessage::new("erin", format!("<@{BOT}> <@99> says <@!77> is wrong"))
            .mentioning(BOT)
            .mentioning_named("99", "frank")
            .mentioning_named("77", "gina");
        let transcript = build_transcript(&trigger, &[], 5, &policy());
        assert_eq!(transcript, "erin: @frank says @gina is wrong");
    }

    #[test]
    fn unnamed_mentions_are_dropped() {
        let history = vec![ChatMessage::new("bob", "ask <@123> about it")];
        let trigger = ChatMessage::new("alice", "meme this");
        assert_eq!(build_transcript(&trigger, &history, 5, &policy()), "bob: ask about it");
    }

    #[test]
    fn non_mention_angle_brackets_survive() {
        let trigger = ChatMessage::new("alice", "a <@b> c <@12 d");
        assert_eq!(build_transcript(&trigger, &[], 5, &policy()), "alice: a <@b> c <@12 d");
    }
}
