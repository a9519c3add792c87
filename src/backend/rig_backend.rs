use super::{ChatMessage, CompletionBackend, Role};
use crate::error::BackendError;
use async_trait::async_trait;
use rig::{
    client::CompletionClient,
    completion::{Chat, Message},
};
use tracing::debug;

/// A role-tagged conversation reshaped into what a rig agent consumes:
/// system text as the preamble, the trailing user turn as the prompt and
/// everything in between as chat history.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct AgentRequest {
    pub preamble: String,
    pub history: Vec<ChatMessage>,
    pub prompt: String,
}

impl AgentRequest {
    pub fn from_messages(messages: &[ChatMessage]) -> Result<Self, BackendError> {
        let (last, earlier) = messages
            .split_last()
            .ok_or_else(|| BackendError::InvalidRequest("no messages".to_string()))?;

        if last.role != Role::User {
            return Err(BackendError::InvalidRequest(
                "last message must come from the user".to_string(),
            ));
        }

        let preamble = earlier
            .iter()
            .filter(|m| m.role == Role::System)
            .map(|m| m.content.as_str())
            .collect::<Vec<_>>()
            .join("\n\n");

        let history = earlier
            .iter()
            .filter(|m| m.role != Role::System)
            .cloned()
            .collect();

        Ok(Self {
            preamble,
            history,
            prompt: last.content.clone(),
        })
    }
}

pub struct RigBackend<C: CompletionClient> {
    client: C,
    model: String,
}

impl<C: CompletionClient> RigBackend<C> {
    pub fn new(client: C, model: &str) -> Self {
        Self {
            client,
            model: model.to_string(),
        }
    }
}

#[async_trait]
impl<C> CompletionBackend for RigBackend<C>
where
    C: CompletionClient + Send + Sync,
    C::CompletionModel: 'static,
{
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, BackendError> {
        let request = AgentRequest::from_messages(messages)?;
        debug!(
            "Sending completion request to {} ({} messages)",
            self.model,
            messages.len()
        );

        let mut builder = self.client.agent(self.model.as_str());
        if !request.preamble.is_empty() {
            builder = builder.preamble(&request.preamble);
        }
        let agent = builder.build();

        let history: Vec<Message> = request
            .history
            .into_iter()
            .map(|m| match m.role {
                Role::Assistant => Message::assistant(m.content),
                _ => Message::user(m.content),
            })
            .collect();

        let response = agent
            .chat(request.prompt, history)
            .await
            .map_err(|e| BackendError::Provider(e.to_string()))?;

        Ok(response.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_messages_become_the_preamble() {
        let messages = vec![
            ChatMessage::system("persona"),
            ChatMessage::user("dataset"),
            ChatMessage::user("question"),
        ];
        let request = AgentRequest::from_messages(&messages).unwrap();

        assert_eq!(request.preamble, "persona");
        assert_eq!(request.history, vec![ChatMessage::user("dataset")]);
        assert_eq!(request.prompt, "question");
    }

    #[test]
    fn history_keeps_turn_order() {
        let messages = vec![
            ChatMessage::system("persona"),
            ChatMessage::user("dataset"),
            ChatMessage::user("q1"),
            ChatMessage::assistant("a1"),
            ChatMessage::user("q2"),
        ];
        let request = AgentRequest::from_messages(&messages).unwrap();

        assert_eq!(
            request.history,
            vec![
                ChatMessage::user("dataset"),
                ChatMessage::user("q1"),
                ChatMessage::assistant("a1"),
            ]
        );
        assert_eq!(request.prompt, "q2");
    }

    #[test]
    fn single_user_message_has_no_preamble() {
        let request = AgentRequest::from_messages(&[ChatMessage::user("hi")]).unwrap();
        assert!(request.preamble.is_empty());
        assert!(request.history.is_empty());
    }

    #[test]
    fn rejects_empty_conversation() {
        assert!(matches!(
            AgentRequest::from_messages(&[]),
            Err(BackendError::InvalidRequest(_))
        ));
    }

    #[test]
    fn rejects_conversation_ending_with_assistant() {
        let messages = vec![ChatMessage::user("q"), ChatMessage::assistant("a")];
        assert!(matches!(
            AgentRequest::from_messages(&messages),
            Err(BackendError::InvalidRequest(_))
        ));
    }
}
