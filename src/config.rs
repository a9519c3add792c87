use crate::dataset::{DatasetSchema, OptionalField};
use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    api: ApiConfig,
    dataset: DatasetConfig,
    qa: QaConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct ApiConfig {
    provider: String,
    url: Option<String>,
    model: String,
    key_env: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            provider: "openai".to_string(),
            url: None,
            model: "gpt-4o-mini".to_string(),
            key_env: "OPENAI_API_KEY".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct DatasetConfig {
    output_path: String,
    record_count: usize,
    optional_fields: Vec<OptionalField>,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        let schema = DatasetSchema::default();
        Self {
            output_path: "vendas_geradas_llm.json".to_string(),
            record_count: schema.record_count,
            optional_fields: schema.optional_fields,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
struct QaConfig {
    retain_history: bool,
    sentinel: String,
}

impl Default for QaConfig {
    fn default() -> Self {
        Self {
            retain_history: true,
            sentinel: "sair".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    OpenAi,
    Anthropic,
    Gemini,
}

impl Provider {
    fn parse(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "openai" => Ok(Self::OpenAi),
            "anthropic" => Ok(Self::Anthropic),
            "gemini" => Ok(Self::Gemini),
            other => bail!("Unknown API provider: {}", other),
        }
    }

    fn default_url(self) -> &'static str {
        match self {
            Self::OpenAi => "https://api.openai.com/v1",
            Self::Anthropic => "https://api.anthropic.com",
            Self::Gemini => "https://generativelanguage.googleapis.com",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_provider: Provider,
    pub api_key: String,
    pub api_url: String,
    pub model: String,
    pub output_path: PathBuf,
    pub schema: DatasetSchema,
    pub retain_history: bool,
    pub sentinel: String,
}

impl Config {
    /// Reads `path` if it exists (defaults otherwise) and resolves the API
    /// key from the environment variable the file names.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = if path.exists() {
            std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?
        } else {
            String::new()
        };

        let config_file = parse(&content)?;
        let api_key = resolve_key(&config_file.api.key_env)?;
        Self::build(config_file, api_key)
    }

    #[cfg(test)]
    pub fn from_str_with_key(content: &str, api_key: &str) -> Result<Self> {
        Self::build(parse(content)?, api_key.to_string())
    }

    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_file(Path::new(DEFAULT_CONFIG_PATH))
    }

    fn build(config_file: ConfigFile, api_key: String) -> Result<Self> {
        let provider = Provider::parse(&config_file.api.provider)?;
        if config_file.dataset.record_count == 0 {
            bail!("dataset.record_count must be at least 1");
        }
        if config_file.qa.sentinel.trim().is_empty() {
            bail!("qa.sentinel must not be empty");
        }

        Ok(Self {
            api_provider: provider,
            api_key,
            api_url: config_file
                .api
                .url
                .unwrap_or_else(|| provider.default_url().to_string()),
            model: config_file.api.model,
            output_path: config_file.dataset.output_path.into(),
            schema: DatasetSchema {
                record_count: config_file.dataset.record_count,
                optional_fields: config_file.dataset.optional_fields,
            },
            retain_history: config_file.qa.retain_history,
            sentinel: config_file.qa.sentinel.trim().to_string(),
        })
    }
}

fn parse(content: &str) -> Result<ConfigFile> {
    toml::from_str(content).context("Failed to parse config file")
}

fn resolve_key(key_env: &str) -> Result<String> {
    match std::env::var(key_env) {
        Ok(key) if !key.trim().is_empty() => Ok(key),
        _ => bail!(
            "A chave da API '{}' não foi encontrada. Verifique o arquivo .env.",
            key_env
        ),
    }
}
