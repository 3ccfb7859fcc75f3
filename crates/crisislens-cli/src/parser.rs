//! Main CLI parser and top-level argument handling.

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface for CrisisLens.
#[derive(Debug, Parser)]
#[command(name = "crisislens")]
#[command(about = "Analyze crisis photos with a vision model")]
#[command(version)]
pub struct Cli {
    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::path::PathBuf;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_serve_overrides() {
        let cli = Cli::parse_from([
            "crisislens",
            "serve",
            "--host",
            "0.0.0.0",
            "--port",
            "9000",
            "--static-dir",
            "./web",
            "--cors-origin",
            "https://a.example,https://b.example",
        ]);
        let Commands::Serve(args) = cli.command else {
            panic!("expected serve");
        };
        assert_eq!(args.host.as_deref(), Some("0.0.0.0"));
        assert_eq!(args.port, Some(9000));
        assert_eq!(args.static_dir, Some(PathBuf::from("./web")));
        assert_eq!(args.cors_origins, ["https://a.example", "https://b.example"]);
    }

    #[test]
    fn test_analyze_args() {
        let cli = Cli::parse_from([
            "crisislens",
            "-v",
            "analyze",
            "photo.jpg",
            "--text",
            "flooded street",
            "--server",
            "http://localhost:9000",
        ]);
        assert!(cli.verbose);
        let Commands::Analyze(args) = cli.command else {
            panic!("expected analyze");
        };
        assert_eq!(args.image, PathBuf::from("photo.jpg"));
        assert_eq!(args.text, "flooded street");
        assert_eq!(args.server.as_deref(), Some("http://localhost:9000"));
    }

    #[test]
    fn test_analyze_text_defaults_to_empty() {
        let cli = Cli::parse_from(["crisislens", "analyze", "photo.png"]);
        let Commands::Analyze(args) = cli.command else {
            panic!("expected analyze");
        };
        assert!(args.text.is_empty());
    }

    #[test]
    fn test_analyze_requires_image() {
        assert!(Cli::try_parse_from(["crisislens", "analyze"]).is_err());
    }
}
