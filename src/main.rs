use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use mentorix_client::assessment::{AssessmentLifecycle, FormFields, HttpScoringService};
use mentorix_client::config::{Config, ConfigOverrides};
use mentorix_client::endpoint::{clear_override, load_override, resolve_endpoint, save_override};
use mentorix_client::health::probe_health;
use mentorix_client::output::render_json;
use mentorix_client::progress::actions::{apply_course_action, show_progress};
use mentorix_client::progress::{CourseStatus, ProgressStore};
use mentorix_client::render::console::OutputFormat;
use mentorix_client::render::{ConsoleRenderer, Renderer};
use mentorix_client::storage::{SqliteStorage, StoragePort};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "mentorix",
    about = "Career-risk self-assessment and course progress tracker"
)]
struct Cli {
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Scoring service address; beats any persisted override
    #[arg(long = "service-url", env = "MENTORIX_SERVICE_URL")]
    service_url: Option<String>,
    #[arg(long)]
    db: Option<PathBuf>,
    #[arg(long = "timeout-secs")]
    timeout_secs: Option<u64>,
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    output: OutputFormat,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Check the scoring service, then submit one assessment
    Assess(AssessArgs),
    /// Check whether the scoring service is reachable
    Health,
    /// Inspect or update progress on recommended courses
    Progress {
        #[command(subcommand)]
        action: ProgressCommand,
    },
    Config {
        #[arg(long)]
        init: bool,
        #[arg(long)]
        show: bool,
        #[arg(long = "set-endpoint")]
        set_endpoint: Option<String>,
        #[arg(long = "clear-endpoint")]
        clear_endpoint: bool,
    },
}

/// Raw answers; parsing happens inside the assessment lifecycle.
#[derive(Debug, Clone, Args)]
struct AssessArgs {
    #[arg(long, default_value = "")]
    cgpa: String,
    #[arg(long, default_value = "")]
    backlogs: String,
    #[arg(long = "tech", default_value = "")]
    tech_interest: String,
    #[arg(long = "core", default_value = "")]
    core_interest: String,
    #[arg(long = "mgmt", default_value = "")]
    management_interest: String,
    #[arg(long, default_value = "")]
    confidence: String,
    #[arg(long = "changes", default_value = "")]
    career_changes: String,
    #[arg(long = "time", default_value = "")]
    decision_time: String,
}

impl From<AssessArgs> for FormFields {
    fn from(value: AssessArgs) -> Self {
        Self {
            cgpa: value.cgpa,
            backlogs: value.backlogs,
            tech_interest: value.tech_interest,
            core_interest: value.core_interest,
            management_interest: value.management_interest,
            confidence: value.confidence,
            career_changes: value.career_changes,
            decision_time: value.decision_time,
        }
    }
}

#[derive(Debug, Subcommand)]
enum ProgressCommand {
    Show,
    Start { title: String },
    Complete { title: String },
    Reset { title: String },
    Clear,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(Config::default_path);
    let mut config = Config::load(Some(&config_path))?;
    config.apply_overrides(ConfigOverrides {
        db_path: cli.db.clone(),
        timeout_secs: cli.timeout_secs,
    });

    let storage: Arc<dyn StoragePort> = Arc::new(SqliteStorage::open(&config.resolved_db_path())?);
    let renderer = Arc::new(ConsoleRenderer::new(cli.output));
    let progress = ProgressStore::new(storage.clone());

    match cli.command {
        Commands::Assess(args) => {
            let endpoint = effective_endpoint(cli.service_url.as_deref(), storage.as_ref(), &config);
            let service = Arc::new(HttpScoringService::new(&endpoint, &config.service)?);
            let lifecycle = AssessmentLifecycle::new(service.clone(), progress, renderer.clone());
            let form = FormFields::from(args);
            let (_, outcome) = tokio::join!(
                probe_health(service.as_ref(), renderer.as_ref()),
                lifecycle.submit(&form)
            );
            info!(?outcome, "assessment finished");
        }
        Commands::Health => {
            let endpoint = effective_endpoint(cli.service_url.as_deref(), storage.as_ref(), &config);
            let service = HttpScoringService::new(&endpoint, &config.service)?;
            let status = probe_health(&service, renderer.as_ref()).await;
            match cli.output {
                OutputFormat::Json => println!("{}", render_json("health", &status)?),
                _ => println!("{endpoint}: {status:?}"),
            }
        }
        Commands::Progress { action } => {
            handle_progress_command(action, &progress, renderer.as_ref())?;
        }
        Commands::Config {
            init,
            show,
            set_endpoint,
            clear_endpoint,
        } => {
            handle_config_command(
                &config,
                &config_path,
                storage.as_ref(),
                init,
                show,
                set_endpoint.as_deref(),
                clear_endpoint,
            )?;
        }
    }

    Ok(())
}

fn effective_endpoint(explicit: Option<&str>, storage: &dyn StoragePort, config: &Config) -> String {
    let persisted = load_override(storage);
    resolve_endpoint(explicit, persisted.as_deref(), &config.service.url)
}

fn handle_progress_command(
    action: ProgressCommand,
    progress: &ProgressStore,
    renderer: &dyn Renderer,
) -> Result<()> {
    match action {
        ProgressCommand::Show => {
            show_progress(progress, renderer);
        }
        ProgressCommand::Start { title } => {
            apply_course_action(progress, renderer, &title, CourseStatus::Started)?;
        }
        ProgressCommand::Complete { title } => {
            apply_course_action(progress, renderer, &title, CourseStatus::Completed)?;
        }
        ProgressCommand::Reset { title } => {
            apply_course_action(progress, renderer, &title, CourseStatus::NotStarted)?;
        }
        ProgressCommand::Clear => {
            progress.clear()?;
            renderer.render_metrics(&progress.metrics());
        }
    }
    Ok(())
}

fn handle_config_command(
    config: &Config,
    config_path: &Path,
    storage: &dyn StoragePort,
    init: bool,
    show: bool,
    set_endpoint: Option<&str>,
    clear_endpoint: bool,
) -> Result<()> {
    if init {
        Config::write_template(config_path)?;
        println!("Wrote config template to {}", config_path.display());
    }
    if let Some(url) = set_endpoint {
        let saved = save_override(storage, url)?;
        println!("Persisted endpoint override: {saved}");
    }
    if clear_endpoint {
        clear_override(storage)?;
        println!("Cleared endpoint override");
    }
    let changed = init || set_endpoint.is_some() || clear_endpoint;
    if show || !changed {
        println!("{}", render_json("config", config)?);
        if let Some(url) = load_override(storage) {
            println!("Endpoint override: {url}");
        }
    }
    Ok(())
}
