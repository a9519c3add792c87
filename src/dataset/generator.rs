use super::prompt::{DATA_ASSISTANT_PERSONA, build_generation_prompt};
use super::schema::DatasetSchema;
use crate::backend::{ChatMessage, CompletionBackend};
use crate::error::StageError;
use std::path::Path;
use tokio::fs;
use tracing::info;

/// Asks the backend for a dataset and writes the reply to `path` as is.
pub async fn generate(
    backend: &dyn CompletionBackend,
    schema: &DatasetSchema,
    path: &Path,
) -> Result<(), StageError> {
    let messages = [
        ChatMessage::system(DATA_ASSISTANT_PERSONA),
        ChatMessage::user(build_generation_prompt(schema)),
    ];

    info!("Requesting {} sales records", schema.record_count);
    let response = backend
        .complete(&messages)
        .await
        .map_err(|e| StageError::Generation(e.to_string()))?;

    fs::write(path, &response)
        .await
        .map_err(|e| StageError::Generation(format!("{}: {}", path.display(), e)))?;

    info!("Wrote {} bytes to {}", response.len(), path.display());
    Ok(())
}

/// Breaks the first `"produto":` line at or after line `from_line` by
/// multiplying its commas.
#[cfg(test)]
pub(crate) fn corrupt_record(text: &str, from_line: usize) -> String {
    let mut lines: Vec<String> = text.lines().map(String::from).collect();
    if let Some(line) = lines
        .iter_mut()
        .skip(from_line)
        .find(|l| l.contains("\"produto\":"))
    {
        *line = line.replace(',', ",,,,");
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::testing::ScriptedBackend;
    use crate::dataset::validator::validate_text;
    use crate::error::BackendError;

    const REPLY: &str = "[\n  {\"data\": \"01-02-2024\", \"produto\": \"Areia\", \"quantidade\": 12}\n]";

    #[tokio::test]
    async fn writes_reply_byte_for_byte() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vendas.json");
        let backend = ScriptedBackend::replying(&[REPLY]);

        generate(&backend, &DatasetSchema::default(), &path)
            .await
            .unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), REPLY);
    }

    #[tokio::test]
    async fn overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vendas.json");
        std::fs::write(&path, "old content that is much longer than the reply").unwrap();
        let backend = ScriptedBackend::replying(&["[]"]);

        generate(&backend, &DatasetSchema::default(), &path)
            .await
            .unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
    }

    #[tokio::test]
    async fn sends_persona_and_prompt() {
        let dir = tempfile::tempdir().unwrap();
        let backend = ScriptedBackend::replying(&["[]"]);

        generate(&backend, &DatasetSchema::default(), &dir.path().join("v.json"))
            .await
            .unwrap();

        let requests = backend.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0][0], ChatMessage::system(DATA_ASSISTANT_PERSONA));
        assert!(requests[0][1].content.contains("exatamente 20 objetos"));
    }

    #[tokio::test]
    async fn backend_failure_is_a_generation_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vendas.json");
        let backend =
            ScriptedBackend::new([Err(BackendError::Provider("rate limited".to_string()))]);

        let err = generate(&backend, &DatasetSchema::default(), &path)
            .await
            .unwrap_err();

        assert!(matches!(err, StageError::Generation(ref msg) if msg.contains("rate limited")));
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn unwritable_path_is_a_generation_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("vendas.json");
        let backend = ScriptedBackend::replying(&["[]"]);

        let err = generate(&backend, &DatasetSchema::default(), &path)
            .await
            .unwrap_err();

        assert!(matches!(err, StageError::Generation(_)));
    }

    #[test]
    fn corrupted_record_fails_validation() {
        let text = (1..=8)
            .map(|i| format!("  {{\"produto\": \"Tijolo\", \"quantidade\": {}}}", i))
            .collect::<Vec<_>>()
            .join(",\n");
        let text = format!("[\n{}\n]", text);
        assert!(validate_text(&text).is_valid());

        let corrupted = corrupt_record(&text, 5);
        assert!(!validate_text(&corrupted).is_valid());
        assert_eq!(corrupted.lines().filter(|l| l.contains(",,,,")).count(), 1);
        assert!(corrupted.lines().nth(5).unwrap().contains(",,,,"));
    }
}
