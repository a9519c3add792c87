use super::history::History;
use super::prompt::single_turn_prompt;
use super::questions::Questions;
use crate::backend::{ChatMessage, CompletionBackend};
use crate::error::{BackendError, StageError};
use std::io::Write;
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncBufRead;
use tracing::{debug, info, warn};

#[derive(Debug, Clone)]
pub enum QaMode {
    /// Every request carries the whole conversation so far.
    Stateful(History),
    /// Every request is built from scratch and refuses off-topic questions.
    Stateless,
}

pub struct QaSession {
    dataset: String,
    mode: QaMode,
}

impl QaSession {
    pub fn new(dataset: String, retain_history: bool) -> Self {
        let mode = if retain_history {
            QaMode::Stateful(History::seeded(&dataset))
        } else {
            QaMode::Stateless
        };
        Self { dataset, mode }
    }

    pub fn mode(&self) -> &QaMode {
        &self.mode
    }

    /// One request/response exchange. A failed request leaves the history
    /// untouched.
    pub async fn ask(
        &mut self,
        backend: &dyn CompletionBackend,
        question: &str,
    ) -> Result<String, BackendError> {
        match &mut self.mode {
            QaMode::Stateful(history) => {
                let request = history.request_for(question);
                let answer = backend.complete(&request).await?;
                history.record_exchange(question, &answer);
                debug!("Conversation history now holds {} messages", history.len());
                Ok(answer)
            }
            QaMode::Stateless => {
                let request = [ChatMessage::user(single_turn_prompt(
                    &self.dataset,
                    question,
                ))];
                backend.complete(&request).await
            }
        }
    }
}

pub async fn run_session<R, W>(
    backend: &dyn CompletionBackend,
    session: &mut QaSession,
    questions: &mut Questions<R>,
    out: &mut W,
) -> Result<(), StageError>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    writeln!(
        out,
        "\nFaça perguntas sobre vendas e mercado (digite '{}' para encerrar):",
        questions.sentinel()
    )?;

    let mut answered = 0usize;
    loop {
        write!(out, "Pergunta: ")?;
        out.flush()?;

        let Some(question) = questions.next().await? else {
            break;
        };

        match session.ask(backend, &question).await {
            Ok(answer) => {
                answered += 1;
                writeln!(out, "Resposta: {}", answer)?;
            }
            Err(e) => {
                warn!("Question failed: {}", e);
                writeln!(out, "Erro ao processar a pergunta: {}", e)?;
            }
        }
    }

    writeln!(out, "\nEncerrando análise.")?;
    info!("Q&A session closed after {} answered questions", answered);
    Ok(())
}

/// Loads the dataset at `path` and runs a session over it.
pub async fn ask_about_file<R, W>(
    backend: &dyn CompletionBackend,
    path: &Path,
    retain_history: bool,
    questions: &mut Questions<R>,
    out: &mut W,
) -> Result<(), StageError>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let dataset = fs::read_to_string(path)
        .await
        .map_err(|source| StageError::DatasetRead {
            path: path.to_path_buf(),
            source,
        })?;

    let mut session = QaSession::new(dataset, retain_history);
    match session.mode() {
        QaMode::Stateful(history) => info!(
            "Starting Q&A session with history ({} seed messages)",
            history.len()
        ),
        QaMode::Stateless => info!("Starting Q&A session without history"),
    }
    run_session(backend, &mut session, questions, out).await
}
