use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lingvec_common::{logger, AppConfig};
use lingvec_text::{Language, Stopwords, Tokenizer};
use lingvec_vector::{cosine_similarity, EmbeddingPipeline};
use std::path::{Path, PathBuf};

/// Find project root by looking for .git directory
fn find_project_root() -> Option<PathBuf> {
    let mut current_dir = std::env::current_dir().ok()?;

    loop {
        if current_dir.join(".git").exists() {
            return Some(current_dir);
        }

        if !current_dir.pop() {
            break;
        }
    }

    None
}

/// Load .env file from project root
fn load_dotenv_from_project_root() {
    if let Some(root) = find_project_root() {
        let env_path = root.join(".env");
        if env_path.exists() {
            dotenv::from_path(&env_path).ok();
        }
    } else {
        // Fallback to default dotenv behavior
        dotenv::dotenv().ok();
    }
}

#[derive(Parser)]
#[command(name = "lingvec")]
#[command(about = "Lingvec - English/Chinese text embedding and similarity service", long_about = None)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to
        #[arg(long)]
        port: Option<u16>,
    },

    /// Print the normalized text the encoder would receive
    Tokenize {
        /// Language tag (en or zh)
        #[arg(long, default_value = "en")]
        lang: String,

        text: String,
    },

    /// Embed text and print the vector as JSON
    Embed {
        /// Language tag (en or zh)
        #[arg(long, default_value = "en")]
        lang: String,

        text: String,
    },

    /// Cosine similarity of two JSON arrays stored in files
    Similarity { first: PathBuf, second: PathBuf },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    load_dotenv_from_project_root();

    let mut config = AppConfig::load(cli.config.as_deref())?;

    match cli.command {
        Some(Commands::Serve { host, port }) => {
            // Override with CLI arguments
            if let Some(host) = host {
                config.server_host = host;
            }
            if let Some(port) = port {
                config.server_port = port;
            }
            config.validate()?;
            serve(config).await?;
        }
        None => serve(config).await?,
        Some(Commands::Tokenize { lang, text }) => {
            logger::setup_console_logging(&config.log_level)?;

            let lang: Language = lang.parse()?;
            let stopwords =
                Stopwords::load(config.en_stopwords_path.as_deref(), &config.zh_stopwords_path)?;
            let tokens = Tokenizer::new(stopwords).tokenize(&text, lang)?;
            println!("{}", tokens.to_text());
        }
        Some(Commands::Embed { lang, text }) => {
            logger::setup_console_logging(&config.log_level)?;

            let lang: Language = lang.parse()?;
            let pipeline = EmbeddingPipeline::initialize(&config).await?;
            let embedding = pipeline.embed(&text, lang).await?;

            eprintln!("dimension: {}", embedding.len());
            println!("{}", serde_json::to_string(&embedding)?);
        }
        Some(Commands::Similarity { first, second }) => {
            let a = read_vector(&first)?;
            let b = read_vector(&second)?;
            println!("{}", cosine_similarity(&a, &b)?);
        }
    }

    Ok(())
}

async fn serve(config: AppConfig) -> Result<()> {
    config.ensure_directories()?;
    logger::setup_logging(&config.log_dir, &config.log_level)?;

    tracing::info!("Lingvec starting...");
    tracing::info!("  Bind: {}", config.server_bind_address());
    tracing::info!("  Backend: {:?}", config.embedding_backend);
    tracing::info!("  Layout: {:?}", config.model_layout);

    lingvec_server::start_server(config).await?;
    Ok(())
}

fn read_vector(path: &Path) -> Result<Vec<f32>> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&data).with_context(|| format!("{} is not a JSON number array", path.display()))
}
