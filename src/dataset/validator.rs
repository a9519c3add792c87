use serde::de::IgnoredAny;
use std::path::Path;
use tokio::fs;
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    Valid,
    Invalid(String),
}

impl Validation {
    #[cfg(test)]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// Syntactic check only: any JSON value passes, whatever its shape.
pub fn validate_text(text: &str) -> Validation {
    match serde_json::from_str::<IgnoredAny>(text) {
        Ok(_) => Validation::Valid,
        Err(e) => Validation::Invalid(e.to_string()),
    }
}

pub async fn validate_file(path: &Path) -> Validation {
    match fs::read_to_string(path).await {
        Ok(content) => validate_text(&content),
        Err(e) => {
            warn!("Failed to read {} for validation: {}", path.display(), e);
            Validation::Invalid(format!(
                "Erro ao validar o arquivo JSON {}: {}",
                path.display(),
                e
            ))
        }
    }
}
