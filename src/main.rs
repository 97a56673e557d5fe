//! Lugares CLI
//!
//! Loads one page of the site against the configured backend and prints
//! what each container would show, or runs an admin action.

use anyhow::{anyhow, bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use lugares::controller::Page;
use lugares::{
    Config, Confirm, DeleteOutcome, HtmlRenderer, LoggingConfig, PageController, PageView, PlaceForm,
    PlaceId,
};

#[derive(Parser)]
#[command(name = "lugares")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "BH Experiências places catalogue client")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file (default: standard locations, then environment)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// API base URL, overrides the config file
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Html, global = true)]
    format: OutputFormat,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Html,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a page, e.g. "index.html" or "detalhes.html?id=3"
    Page {
        identity: String,
    },

    /// Register a new place
    Create {
        /// JSON file with the form fields
        #[arg(long)]
        file: Option<PathBuf>,
        /// Field assignments in field=value format
        #[arg(short, long = "set")]
        set: Vec<String>,
    },

    /// Edit a place; only the given fields change
    Edit {
        id: String,
        /// Field assignments in field=value format
        #[arg(short, long = "set")]
        set: Vec<String>,
    },

    /// Delete a place
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Commands::Config { output } = &cli.command {
        return write_default_config(output.as_ref());
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_first(&Config::default_paths())?,
    };
    if let Some(url) = cli.api_url {
        config.api.base_url = url;
    }

    init_tracing(&config.logging);
    tracing::debug!(base_url = %config.api.base_url, "Using backend");

    let mut controller =
        PageController::from_config(&config).context("Failed to build HTTP client")?;

    match cli.command {
        Commands::Page { identity } => {
            let page = Page::resolve(&identity);
            if let Page::Unknown { name } = &page {
                tracing::warn!(page = %name, "Unrecognized page, nothing to load");
            }
            let view = controller.load(&page).await;
            emit(&controller, &view, cli.format)?;
        }

        Commands::Create { file, set } => {
            let mut form = match file {
                Some(path) => {
                    let content = std::fs::read_to_string(&path)
                        .with_context(|| format!("Failed to read {:?}", path))?;
                    serde_json::from_str::<PlaceForm>(&content)
                        .with_context(|| format!("Invalid form file {:?}", path))?
                }
                None => PlaceForm {
                    destaque: "false".to_string(),
                    ..Default::default()
                },
            };
            for raw in &set {
                let (field, value) = parse_assignment(raw)?;
                form.set(field, value)?;
            }

            controller.load(&Page::Admin).await;
            let today = chrono::Utc::now().date_naive();
            let result = controller.submit_create(form, today).await;
            finish(&controller, result.map_err(|r| r.error), cli.format)?;
        }

        Commands::Edit { id, set } => {
            let id = PlaceId::from(id.as_str());
            controller.load(&Page::Admin).await;

            let mut edit = controller
                .begin_edit(&id)
                .ok_or_else(|| anyhow!("Place {} not found", id))?;
            for raw in &set {
                let (field, value) = parse_assignment(raw)?;
                edit.set(field, value)?;
            }

            let result = controller.save_edit(&id, edit).await;
            finish(&controller, result.map_err(|r| r.error), cli.format)?;
        }

        Commands::Delete { id, yes } => {
            let id = PlaceId::from(id.as_str());
            controller.load(&Page::Admin).await;

            let mut assume_yes = |_: &str| true;
            let mut ask = |prompt: &str| ask_stdin(prompt);
            let confirm: &mut dyn Confirm = if yes { &mut assume_yes } else { &mut ask };

            match controller.delete_place(&id, confirm).await {
                Ok(DeleteOutcome::Deleted(list)) => {
                    emit(&controller, &PageView::Admin { list }, cli.format)?
                }
                Ok(DeleteOutcome::Cancelled) => eprintln!("Cancelled"),
                Ok(DeleteOutcome::NotMirrored) => bail!("Place {} not found", id),
                Err(e) => {
                    emit_notification(&controller);
                    return Err(e.into());
                }
            }
        }

        Commands::Config { .. } => unreachable!("handled before loading config"),
    }

    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("lugares={}", logging.level)));
    let registry = tracing_subscriber::registry().with(filter);

    if logging.format == "json" {
        registry
            .with(fmt::layer().json().with_writer(io::stderr))
            .init();
    } else {
        registry.with(fmt::layer().with_writer(io::stderr)).init();
    }
}

fn write_default_config(output: Option<&PathBuf>) -> anyhow::Result<()> {
    let config = lugares::config::generate_default_config();

    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, &config)?;
            println!("Config written to {:?}", path);
        }
        None => print!("{}", config),
    }
    Ok(())
}

fn parse_assignment(raw: &str) -> anyhow::Result<(&str, &str)> {
    raw.split_once('=')
        .ok_or_else(|| anyhow!("Expected field=value, got {:?}", raw))
}

/// Print the refreshed admin list, or the notification and the error
fn finish<E>(
    controller: &PageController,
    result: Result<lugares::view::AdminListView, E>,
    format: OutputFormat,
) -> anyhow::Result<()>
where
    E: std::error::Error + Send + Sync + 'static,
{
    match result {
        Ok(list) => emit(controller, &PageView::Admin { list }, format),
        Err(e) => {
            emit_notification(controller);
            Err(e.into())
        }
    }
}

fn emit(controller: &PageController, view: &PageView, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            let body = serde_json::json!({
                "view": view,
                "notification": controller.client().notifier().current(),
            });
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
        OutputFormat::Html => {
            let output = controller.render(view, &HtmlRenderer);
            if let Some(title) = &output.title {
                println!("<!-- title: {} -->", title);
            }
            for container in &output.containers {
                println!("<!-- #{} -->\n{}", container.id, container.html);
            }
            if let Some(chart) = &output.chart {
                println!("<!-- chart -->\n{}", serde_json::to_string_pretty(chart)?);
            }
            if let Some(map) = &output.map {
                println!("<!-- map -->\n{}", serde_json::to_string_pretty(map)?);
            }
        }
    }
    Ok(())
}

fn emit_notification(controller: &PageController) {
    if let Some(notification) = controller.client().notifier().current() {
        eprintln!("[{}] {}", notification.level.as_str(), notification.message);
    }
}

fn ask_stdin(prompt: &str) -> bool {
    eprint!("{} [s/N] ", prompt);
    let _ = io::stderr().flush();

    let mut answer = String::new();
    if io::stdin().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(
        answer.trim().to_lowercase().as_str(),
        "s" | "sim" | "y" | "yes"
    )
}
