//! Glance CLI - ask a vision model about a few images.

#![allow(clippy::print_stdout, clippy::print_stderr)] // CLI program intentionally uses stdout

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use glance::ImageDetail;
use glance::openai::OpenAI;
use glance_cli::config::{self, Settings};
use glance_cli::error::Result;
use glance_cli::input::{DEFAULT_MESSAGE, ImageArg, MAX_IMAGES};
use glance_cli::render::render;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Glance - send a prompt and images to a multimodal chat model
#[derive(Parser)]
#[command(name = "glance")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Configuration file path
    #[arg(short, long, env = "GLANCE_CONFIG")]
    config: Option<PathBuf>,

    /// Prompt sent ahead of the images
    #[arg(short, long, default_value = DEFAULT_MESSAGE)]
    message: String,

    /// Image to include: a file path, `file:<path>`, `url:<url>`, or any URL
    #[arg(short, long = "image", value_name = "SOURCE", num_args = 1)]
    images: Vec<ImageArg>,

    /// Model to use (overrides config and OPENAI_MODEL)
    #[arg(short = 'M', long)]
    model: Option<String>,

    /// API base URL (overrides config and OPENAI_BASE_URL)
    #[arg(long)]
    base_url: Option<String>,

    /// Maximum output tokens
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    max_tokens: Option<u32>,

    /// Request timeout in seconds (default: wait indefinitely)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    timeout: Option<u64>,

    /// Image detail level: low, high or auto
    #[arg(long)]
    detail: Option<ImageDetail>,

    /// Print the request body instead of sending it
    #[arg(long)]
    dry_run: bool,
}

impl Cli {
    fn flag_settings(&self) -> Settings {
        Settings {
            model: self.model.clone(),
            base_url: self.base_url.clone(),
            max_tokens: self.max_tokens,
            timeout_secs: self.timeout,
            image_detail: self.detail,
        }
    }
}

fn main() -> ExitCode {
    // A missing .env file is fine; the variables may come from the shell.
    let dotenv = dotenvy::dotenv();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Ok(path) = dotenv {
        tracing::debug!(path = %path.display(), "loaded .env file");
    }

    let rt = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            eprintln!("failed to create tokio runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    match rt.block_on(run(cli)) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Initialize logging with the given verbosity level.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => Level::ERROR,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "glance_cli={level},glance={level},{}",
            if verbosity >= 3 { "debug" } else { "warn" }
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbosity >= 2)
        .init();
}

/// Main async entry point.
async fn run(cli: Cli) -> Result<ExitCode> {
    let file = match &cli.config {
        Some(path) => config::load_config_from(path).await?,
        None => config::load_config().await?,
    };
    let flags = cli.flag_settings();
    let resolved = if cli.dry_run {
        config::resolve_for_preview(&file, &flags)?
    } else {
        config::resolve(&file, &flags)?
    };
    let client = OpenAI::new(resolved)?;

    tracing::info!(
        model = client.model(),
        images = cli.images.len(),
        max_images = MAX_IMAGES,
        "generating response"
    );

    if cli.dry_run {
        let request = glance_cli::preview(&client, &cli.message, &cli.images).await?;
        println!("{}", serde_json::to_string_pretty(&request)?);
        return Ok(ExitCode::SUCCESS);
    }

    let outcome = glance_cli::ask(&client, &cli.message, &cli.images).await?;
    let success = render(&outcome, &mut std::io::stdout().lock(), &mut std::io::stderr().lock())?;

    Ok(if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
