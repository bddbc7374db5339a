//! docsite CLI
//!
//! Renders the documentation header and table of contents to static HTML and
//! serves a preview.
//!
//! This is the binary entry point. The library functionality is in `lib.rs`.

use clap::Parser;
use color_eyre::eyre::Result;

/// Command-line interface for docsite.
#[derive(Parser)]
#[command(
    name = "docsite",
    version,
    about = "Render documentation site chrome"
)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "docsite.toml")]
    config: std::path::PathBuf,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(clap::Subcommand)]
enum Commands {
    /// Render header, table of contents and stylesheet
    Render {
        /// Table of contents JSON file
        #[arg(short, long)]
        toc: std::path::PathBuf,
        /// Output directory
        #[arg(short, long, default_value = "public")]
        output: std::path::PathBuf,
        /// Path of the page being rendered, highlights its navigation link
        #[arg(long, default_value = "/")]
        path: String,
    },
    /// Validate configuration and table of contents
    Check {
        /// Table of contents JSON file
        #[arg(short, long)]
        toc: Option<std::path::PathBuf>,
        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },
    /// Serve rendered output for preview
    Serve {
        /// Directory to serve
        #[arg(short, long, default_value = "public")]
        dir: std::path::PathBuf,
        /// Port to listen on
        #[arg(short, long, default_value_t = 3000)]
        port: u16,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    docsite::init_tracing(cli.verbose);

    match cli.command {
        Commands::Render { toc, output, path } => {
            docsite::cmd::render::run(&cli.config, &toc, &output, &path)?;
        }
        Commands::Check { toc, strict } => {
            docsite::cmd::check::run(&cli.config, toc.as_deref(), strict)?;
        }
        Commands::Serve { dir, port } => {
            docsite::cmd::serve::run(&dir, port).await?;
        }
    }

    Ok(())
}
