//! Subcommands and their arguments.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use crisislens_core::settings::env_keys;

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the web server with the analysis form and `POST /analyze`
    Serve(ServeArgs),

    /// Submit an image to a running server and print the report
    Analyze(AnalyzeArgs),
}

/// Arguments for `serve`. Unset flags fall back to the environment.
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Address to bind
    #[arg(long, env = env_keys::HOST)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = env_keys::PORT)]
    pub port: Option<u16>,

    /// Serve `index.html` and `/static` from this directory instead of the built-in page
    #[arg(long, env = env_keys::STATIC_DIR)]
    pub static_dir: Option<PathBuf>,

    /// Allowed CORS origin (repeatable or comma-separated); any origin when unset
    #[arg(long = "cors-origin", env = env_keys::CORS_ORIGINS, value_delimiter = ',')]
    pub cors_origins: Vec<String>,
}

/// Arguments for `analyze`.
#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// JPEG or PNG image to analyze
    pub image: PathBuf,

    /// Text context sent with the image
    #[arg(short, long, default_value = "")]
    pub text: String,

    /// Base URL of the CrisisLens server
    #[arg(short, long, env = env_keys::SERVER_URL)]
    pub server: Option<String>,
}
