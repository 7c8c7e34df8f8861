use crate::error::LingvecError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable prefix (e.g. `LINGVEC_SERVER_PORT`)
pub const ENV_PREFIX: &str = "LINGVEC";

/// Which inference backend produces embeddings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmbeddingBackend {
    /// Ollama HTTP API (`/api/embeddings`)
    Ollama,
    /// In-process ONNX models (fastembed)
    Local,
}

/// How encoders are assigned to languages.
///
/// The layout fixes the output dimensionality, so it is chosen explicitly
/// at startup and never inferred from the models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModelLayout {
    /// One model per language
    PerLanguage,
    /// A single multilingual model shared by both languages
    Multilingual,
}

/// Lingvec application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Server bind address
    pub server_host: String,

    /// Server port
    pub server_port: u16,

    /// Number of HTTP worker threads
    pub workers: usize,

    /// Maximum accepted JSON body size in bytes
    pub max_payload_bytes: usize,

    /// Log directory
    pub log_dir: PathBuf,

    /// Log level
    pub log_level: String,

    /// Chinese stopword list, one word per line
    pub zh_stopwords_path: PathBuf,

    /// Optional English stopword list; the bundled list is used when unset
    pub en_stopwords_path: Option<PathBuf>,

    /// Embedding backend
    pub embedding_backend: EmbeddingBackend,

    /// Model layout
    pub model_layout: ModelLayout,

    /// English model name (backend default when unset)
    pub en_model: Option<String>,

    /// Chinese model name (backend default when unset)
    pub zh_model: Option<String>,

    /// Shared model name for the multilingual layout
    pub multilingual_model: Option<String>,

    /// Ollama API base URL
    pub ollama_base_url: String,

    /// HTTP timeout for backend requests
    pub request_timeout_secs: u64,

    /// Cache directory for locally downloaded model weights
    pub model_cache_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_host: "0.0.0.0".to_string(),
            server_port: 4999,
            workers: default_workers(),
            max_payload_bytes: 4 * 1024 * 1024,
            log_dir: PathBuf::from("./log"),
            log_level: "info".to_string(),
            zh_stopwords_path: PathBuf::from("resources/stopwords-zh.txt"),
            en_stopwords_path: None,
            embedding_backend: EmbeddingBackend::Ollama,
            model_layout: ModelLayout::PerLanguage,
            en_model: None,
            zh_model: None,
            multilingual_model: None,
            ollama_base_url: "http://localhost:11434".to_string(),
            request_timeout_secs: 60,
            model_cache_dir: None,
        }
    }
}

fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(2)
}

impl AppConfig {
    /// Load configuration: defaults, then optional config file, then
    /// `LINGVEC_*` environment variables.
    pub fn load(path: Option<&Path>) -> Result<Self, LingvecError> {
        let mut builder = config::Config::builder();

        if let Some(path) = path {
            if !path.exists() {
                return Err(LingvecError::config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            builder = builder.add_source(config::File::from(path));
        }

        let settings = builder
            .add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()
            .map_err(|e| LingvecError::config(format!("Failed to read configuration: {}", e)))?;

        let config: AppConfig = settings
            .try_deserialize()
            .map_err(|e| LingvecError::config(format!("Invalid configuration: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Ensure required directories exist, create if not
    pub fn ensure_directories(&self) -> Result<(), LingvecError> {
        if !self.log_dir.exists() {
            std::fs::create_dir_all(&self.log_dir).map_err(|e| {
                LingvecError::config(format!(
                    "Failed to create directory {}: {}",
                    self.log_dir.display(),
                    e
                ))
            })?;
        }

        Ok(())
    }

    /// Get server bind address (host:port)
    pub fn server_bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// English model name, falling back to the backend default
    pub fn english_model(&self) -> &str {
        self.en_model.as_deref().unwrap_or(match self.embedding_backend {
            EmbeddingBackend::Ollama => "all-minilm",
            EmbeddingBackend::Local => "all-minilm-l6-v2",
        })
    }

    /// Chinese model name, falling back to the backend default
    pub fn chinese_model(&self) -> &str {
        self.zh_model.as_deref().unwrap_or(match self.embedding_backend {
            EmbeddingBackend::Ollama => "bge-m3",
            EmbeddingBackend::Local => "bge-small-zh-v1.5",
        })
    }

    /// Multilingual model name, falling back to the backend default
    pub fn shared_model(&self) -> &str {
        self.multilingual_model
            .as_deref()
            .unwrap_or(match self.embedding_backend {
                EmbeddingBackend::Ollama => "bge-m3",
                EmbeddingBackend::Local => "paraphrase-multilingual-minilm-l12-v2",
            })
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), LingvecError> {
        if self.server_port == 0 {
            return Err(LingvecError::config("Server port cannot be 0"));
        }

        if self.workers == 0 {
            return Err(LingvecError::config("Worker count cannot be 0"));
        }

        if self.max_payload_bytes == 0 {
            return Err(LingvecError::config("Payload limit cannot be 0"));
        }

        let models = match self.model_layout {
            ModelLayout::PerLanguage => vec![self.english_model(), self.chinese_model()],
            ModelLayout::Multilingual => vec![self.shared_model()],
        };
        if models.iter().any(|m| m.trim().is_empty()) {
            return Err(LingvecError::config("Model name cannot be empty"));
        }

        if self.embedding_backend == EmbeddingBackend::Ollama
            && !self.ollama_base_url.starts_with("http://")
            && !self.ollama_base_url.starts_with("https://")
        {
            return Err(LingvecError::config(
                "Ollama base URL must start with http:// or https://",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::sync::Mutex;

    // Serializes tests that read LINGVEC_* from the process environment
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server_port, 4999);
        assert_eq!(config.embedding_backend, EmbeddingBackend::Ollama);
        assert_eq!(config.model_layout, ModelLayout::PerLanguage);
        assert!(config.workers > 0);
    }

    #[test]
    fn test_server_bind_address() {
        let config = AppConfig::default();
        assert_eq!(config.server_bind_address(), "0.0.0.0:4999");
    }

    #[test]
    fn test_model_defaults_follow_backend() {
        let mut config = AppConfig::default();
        assert_eq!(config.english_model(), "all-minilm");

        config.embedding_backend = EmbeddingBackend::Local;
        assert_eq!(config.english_model(), "all-minilm-l6-v2");
        assert_eq!(config.chinese_model(), "bge-small-zh-v1.5");

        config.zh_model = Some("custom-zh".to_string());
        assert_eq!(config.chinese_model(), "custom-zh");
    }

    #[test]
    fn test_validate() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());

        let mut invalid_config = AppConfig::default();
        invalid_config.server_port = 0;
        assert!(invalid_config.validate().is_err());

        let mut invalid_config = AppConfig::default();
        invalid_config.en_model = Some("  ".to_string());
        assert!(invalid_config.validate().is_err());

        let mut invalid_config = AppConfig::default();
        invalid_config.ollama_base_url = "localhost:11434".to_string();
        assert!(invalid_config.validate().is_err());
    }

    #[test]
    fn test_multilingual_layout_ignores_per_language_models() {
        let mut config = AppConfig::default();
        config.model_layout = ModelLayout::Multilingual;
        config.en_model = Some(String::new());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_file() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "server_port = 5100\nembedding_backend = \"local\"\nmodel_layout = \"multilingual\""
        )
        .unwrap();

        let config = AppConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.server_port, 5100);
        assert_eq!(config.embedding_backend, EmbeddingBackend::Local);
        assert_eq!(config.model_layout, ModelLayout::Multilingual);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_env_overrides_file_and_defaults() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "server_port = 5100\nembedding_backend = \"local\"").unwrap();

        std::env::set_var("LINGVEC_SERVER_PORT", "5300");
        std::env::set_var("LINGVEC_MODEL_LAYOUT", "multilingual");

        let from_file = AppConfig::load(Some(file.path()));
        let from_env_only = AppConfig::load(None);

        std::env::remove_var("LINGVEC_SERVER_PORT");
        std::env::remove_var("LINGVEC_MODEL_LAYOUT");

        let config = from_file.unwrap();
        assert_eq!(config.server_port, 5300);
        assert_eq!(config.model_layout, ModelLayout::Multilingual);
        assert_eq!(config.embedding_backend, EmbeddingBackend::Local);

        let config = from_env_only.unwrap();
        assert_eq!(config.server_port, 5300);
        assert_eq!(config.model_layout, ModelLayout::Multilingual);
        assert_eq!(config.embedding_backend, EmbeddingBackend::Ollama);
    }

    #[test]
    fn test_load_missing_file() {
        let result = AppConfig::load(Some(Path::new("/nonexistent/lingvec.toml")));
        assert!(matches!(result, Err(LingvecError::Config(_))));
    }
}
