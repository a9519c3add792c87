use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Invalid completion request: {0}")]
    InvalidRequest(String),
    #[error("Completion failed: {0}")]
    Provider(String),
}

#[derive(Debug, Error)]
pub enum StageError {
    #[error("Erro ao gerar o arquivo JSON com a LLM: {0}")]
    Generation(String),
    #[error("Erro ao carregar o arquivo JSON para perguntas ({}): {source}", .path.display())]
    DatasetRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
