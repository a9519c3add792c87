use super::prompt::{ANALYST_PERSONA, dataset_seed};
use crate::backend::ChatMessage;

/// Append-only conversation, seeded with the analyst persona and the
/// dataset, then one question and one answer per exchange.
#[derive(Debug, Clone)]
pub struct History {
    messages: Vec<ChatMessage>,
}

impl History {
    pub fn seeded(dataset: &str) -> Self {
        Self {
            messages: vec![
                ChatMessage::system(ANALYST_PERSONA),
                ChatMessage::user(dataset_seed(dataset)),
            ],
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// The conversation so far followed by `question`; does not record it.
    pub fn request_for(&self, question: &str) -> Vec<ChatMessage> {
        let mut request = Vec::with_capacity(self.len() + 1);
        request.extend_from_slice(self.messages());
        request.push(ChatMessage::user(question));
        request
    }

    pub fn record_exchange(&mut self, question: &str, answer: &str) {
        self.messages.push(ChatMessage::user(question));
        self.messages.push(ChatMessage::assistant(answer));
    }
}
