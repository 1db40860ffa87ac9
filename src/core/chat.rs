//! Rule-based chat assistant
//!
//! The assistant answers a handful of common questions from a fixed table of
//! canned responses. Free-text input is matched by substring containment, the
//! quick-question chips by exact key. Both modes share the same table and the
//! same fallback reply.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Simulated "thinking" time before the assistant replies
pub const CHAT_REPLY_DELAY_MS: u32 = 1000;

/// First message shown when the widget is opened
pub const GREETING: &str = "👋 Hi! I'm your SoftSell assistant. How can I help you today?";

/// Shortcut chips shown under the greeting
pub const QUICK_QUESTIONS: [&str; 4] = [
    "How do I sell my license?",
    "What types of licenses do you accept?",
    "How long does the process take?",
    "How do I get paid?",
];

/// Reply used when nothing in the table matches
pub const DEFAULT_REPLY: &str = "I'm here to help! You can ask me about selling licenses, accepted software types, payment methods, or the selling process. You can also upload your license directly through our platform.";

/// A trigger phrase and the reply it selects
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CannedResponse {
    /// Lower-case phrase
    pub trigger: &'static str,
    pub reply: &'static str,
}

/// Trigger phrases in match priority order
pub const CANNED_RESPONSES: [CannedResponse; 4] = [
    CannedResponse {
        trigger: "how do i sell my license",
        reply: "To sell your license, simply click the 'Upload License' button above, submit your license details, and our team will review it within 24 hours.",
    },
    CannedResponse {
        trigger: "what types of licenses do you accept",
        reply: "We accept licenses for major software including Adobe Creative Cloud, Microsoft Office, Autodesk Suite, Salesforce, SAP, and Oracle.",
    },
    CannedResponse {
        trigger: "how long does the process take",
        reply: "The entire process typically takes 3-5 business days. We provide license valuation within 24 hours of submission.",
    },
    CannedResponse {
        trigger: "how do i get paid",
        reply: "Once your license is sold, you'll receive payment through your preferred method (bank transfer, PayPal, or crypto). Payments are processed within 3 business days.",
    },
];

/// How user input is compared against trigger phrases
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchMode {
    /// Input contains the trigger anywhere (free-text entry)
    Substring,
    /// Input is the trigger, ignoring case and a trailing question mark (quick questions)
    Exact,
}

/// Ordered lookup table with a fallback reply
#[derive(Clone, Copy, Debug)]
pub struct ResponseTable {
    entries: &'static [CannedResponse],
    fallback: &'static str,
}

impl Default for ResponseTable {
    fn default() -> Self {
        Self::new(&CANNED_RESPONSES, DEFAULT_REPLY)
    }
}

impl ResponseTable {
    pub fn new(entries: &'static [CannedResponse], fallback: &'static str) -> Self {
        Self { entries, fallback }
    }

    pub fn fallback(&self) -> &'static str {
        self.fallback
    }

    /// Pick a reply for the input. The first matching entry wins.
    pub fn respond(&self, input: &str, mode: MatchMode) -> &'static str {
        let question = input.to_lowercase();
        let matched = match mode {
            MatchMode::Substring => self
                .entries
                .iter()
                .find(|entry| question.contains(entry.trigger)),
            MatchMode::Exact => {
                let key = question.trim().trim_end_matches('?').trim_end();
                self.entries.iter().find(|entry| entry.trigger == key)
            }
        };

        matched.map(|entry| entry.reply).unwrap_or(self.fallback)
    }
}

/// One entry in the transcript
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub text: String,
    pub is_bot: bool,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(text, false)
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self::new(text, true)
    }

    fn new(text: impl Into<String>, is_bot: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            is_bot,
            timestamp: Utc::now(),
        }
    }

    /// Local time label, e.g. "14:05"
    pub fn time_label(&self) -> String {
        self.timestamp
            .with_timezone(&chrono::Local)
            .format("%H:%M")
            .to_string()
    }
}

/// A question waiting for its delayed reply
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingReply {
    pub question: String,
    pub mode: MatchMode,
}

impl PendingReply {
    pub fn resolve(&self, table: &ResponseTable) -> &'static str {
        table.respond(&self.question, self.mode)
    }
}

/// Open/closed state plus the running transcript
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChatSession {
    open: bool,
    transcript: Vec<ChatMessage>,
    awaiting: usize,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    /// Open the widget, greeting the visitor the first time
    pub fn open(&mut self) {
        self.open = true;
        if self.transcript.is_empty() {
            self.transcript.push(ChatMessage::bot(GREETING));
        }
    }

    /// Close the widget; the transcript is kept for the next open
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Quick-question chips are offered while only the greeting is shown
    pub fn shows_quick_questions(&self) -> bool {
        self.transcript.len() == 1
    }

    /// Whether a reply is still being "typed"
    pub fn is_awaiting_reply(&self) -> bool {
        self.awaiting > 0
    }

    /// Record free-text input. Blank input is ignored.
    pub fn submit_text(&mut self, text: &str) -> Option<PendingReply> {
        if text.trim().is_empty() {
            return None;
        }
        Some(self.ask(text, MatchMode::Substring))
    }

    /// Record a quick-question click
    pub fn ask_quick(&mut self, question: &str) -> PendingReply {
        self.ask(question, MatchMode::Exact)
    }

    fn ask(&mut self, text: &str, mode: MatchMode) -> PendingReply {
        self.transcript.push(ChatMessage::user(text));
        self.awaiting += 1;
        PendingReply {
            question: text.to_string(),
            mode,
        }
    }

    /// Append the bot reply for a pending question
    pub fn deliver(&mut self, pending: &PendingReply, table: &ResponseTable) {
        self.awaiting = self.awaiting.saturating_sub(1);
        self.transcript.push(ChatMessage::bot(pending.resolve(table)));
    }
}
