pub mod config;
pub mod error;
pub mod logger;

// Re-export commonly used types
pub use config::{AppConfig, EmbeddingBackend, ModelLayout};
pub use error::LingvecError;
pub type Result<T> = std::result::Result<T, LingvecError>;
