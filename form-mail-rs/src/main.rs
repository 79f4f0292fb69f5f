//! form-mail: compose and export form-notification email layouts
//!
//! # Usage
//!
//! ```bash
//! # Export the stored service-request layout as HTML
//! form-mail render --output notification.html
//!
//! # Render an imported JSON layout as the thank-you variant
//! form-mail render --input layout.json --variant thank-you
//!
//! # Print the preview element tree
//! form-mail preview --variant thank-you
//!
//! # Save the stored thank-you layout for import elsewhere
//! form-mail export --variant thank-you > thank-you.json
//!
//! # Serve the editor API
//! form-mail --config form-mail.toml serve
//! ```

use anyhow::Context;
use clap::{Parser, Subcommand};
use form_mail_rs::api::ApiServer;
use form_mail_rs::config::{AppConfig, LoggingConfig};
use form_mail_rs::render::EmailRenderer;
use form_mail_rs::store::SessionStore;
use form_mail_rs::template::{gallery, presets, TemplateConfig};
use form_mail_rs::Variant;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_CONFIG_FILE: &str = "form-mail.toml";

#[derive(Parser)]
#[command(name = "form-mail")]
#[command(about = "Compose and export form-notification email layouts", long_about = None)]
struct Cli {
    /// Application config file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the export markup
    Render {
        /// JSON layout to render instead of the stored session
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// service-request or thank-you
        #[arg(short, long, default_value = "service-request")]
        variant: String,
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Copyright year (defaults to the current year)
        #[arg(long)]
        year: Option<i32>,
    },
    /// Print the preview element tree as JSON
    Preview {
        #[arg(short, long)]
        input: Option<PathBuf>,
        #[arg(short, long, default_value = "service-request")]
        variant: String,
    },
    /// Print a stored variant's layout as JSON, ready to import elsewhere
    Export {
        #[arg(short, long, default_value = "service-request")]
        variant: String,
    },
    /// Print a variant's default layout as JSON
    Defaults {
        #[arg(short, long, default_value = "service-request")]
        variant: String,
    },
    /// List the template gallery
    Templates,
    /// List the color presets
    Presets,
    /// Serve the editor API
    Serve,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    init_logging(&config.logging);

    match cli.command {
        Commands::Render {
            input,
            variant,
            output,
            year,
        } => {
            let variant: Variant = variant.parse()?;
            let layout = load_layout(&config, input.as_deref(), variant)?;
            let html = match year {
                Some(year) => EmailRenderer::render_export_markup_for_year(&layout, year),
                None => EmailRenderer::render_export_markup(&layout),
            };

            match output {
                Some(path) => {
                    std::fs::write(&path, &html)
                        .with_context(|| format!("writing {}", path.display()))?;
                    info!("Wrote {} bytes to {}", html.len(), path.display());
                }
                None => print!("{}", html),
            }
        }
        Commands::Preview { input, variant } => {
            let variant: Variant = variant.parse()?;
            let layout = load_layout(&config, input.as_deref(), variant)?;
            let tree = EmailRenderer::render_preview(&layout);
            println!("{}", serde_json::to_string_pretty(&tree)?);
        }
        Commands::Export { variant } => {
            let variant: Variant = variant.parse()?;
            let session = SessionStore::new(&config.storage.session_path).load();
            println!("{}", session.export_json(variant)?);
        }
        Commands::Defaults { variant } => {
            let variant: Variant = variant.parse()?;
            println!("{}", variant.default_config().to_json_pretty()?);
        }
        Commands::Templates => {
            for (index, template) in gallery().iter().enumerate() {
                println!("{:>2}  {}", index, template.name);
            }
        }
        Commands::Presets => {
            for preset in presets() {
                println!("{:<10}  {}", preset.name, preset.font_family);
            }
        }
        Commands::Serve => {
            let store = SessionStore::new(&config.storage.session_path);
            let session = store.load();
            let server = ApiServer::new(session, Some(store), config.server.listen_addr.clone());
            server.run().await?;
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> anyhow::Result<AppConfig> {
    let config = match path {
        Some(path) => AppConfig::from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
            AppConfig::from_file(DEFAULT_CONFIG_FILE)?
        }
        None => AppConfig::default(),
    };
    Ok(config)
}

fn init_logging(config: &LoggingConfig) {
    // stdout carries rendered output, logs go to stderr
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "form_mail_rs={level},form_mail={level},tower_http={level}",
            level = config.level
        ))
    });
    let registry = tracing_subscriber::registry().with(filter);

    if config.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
            .init();
    }
}

/// Layout from an imported file, or from the stored session
fn load_layout(
    config: &AppConfig,
    input: Option<&Path>,
    variant: Variant,
) -> anyhow::Result<TemplateConfig> {
    match input {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            let layout = TemplateConfig::from_json(&json, &variant.default_config())
                .with_context(|| format!("importing {}", path.display()))?;
            info!("Imported {} from {}", variant, path.display());
            Ok(layout)
        }
        None => {
            let session = SessionStore::new(&config.storage.session_path).load();
            Ok(session.get(variant).clone())
        }
    }
}
