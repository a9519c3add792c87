use crate::backend::CompletionBackend;
use crate::config::Config;
use crate::dataset::{self, Validation};
use crate::error::StageError;
use crate::qa::{self, Questions};
use std::io::Write;
use tokio::io::AsyncBufRead;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    InvalidDataset,
}

/// Generates the dataset, validates it and, only if it is valid JSON,
/// answers questions read from `input`.
pub async fn run<R, W>(
    config: &Config,
    backend: &dyn CompletionBackend,
    input: R,
    out: &mut W,
) -> Result<Outcome, StageError>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    dataset::generate(backend, &config.schema, &config.output_path).await?;
    writeln!(out, "Arquivo JSON gerado em: {}", config.output_path.display())?;

    match dataset::validate_file(&config.output_path).await {
        Validation::Valid => {
            info!("Dataset at {} is valid JSON", config.output_path.display());
            writeln!(out, "JSON validado com sucesso!")?;
        }
        Validation::Invalid(diagnostic) => {
            warn!("Dataset failed validation: {}", diagnostic);
            writeln!(out, "Erro na validação do JSON:\n{}", diagnostic)?;
            writeln!(
                out,
                "Não é possível fazer perguntas porque o JSON é inválido."
            )?;
            return Ok(Outcome::InvalidDataset);
        }
    }

    let mut questions = Questions::new(input, &config.sentinel);
    qa::ask_about_file(
        backend,
        &config.output_path,
        config.retain_history,
        &mut questions,
        out,
    )
    .await?;

    Ok(Outcome::Completed)
}

/// Single console line for an error that ends the run.
pub fn report_fatal<W: Write>(err: &StageError, out: &mut W) {
    let _ = writeln!(out, "Erro geral: {}", err);
    let _ = out.flush();
}
