//! CLI entrypoint for deep-insight
//!
//! Wires all layers together with dependency injection: seed data into the
//! in-memory store, the OpenRouter gateway as the text generator, and the
//! simulation/interview use cases behind the subcommands.

mod args;
mod live;
mod report;
mod seed;

use anyhow::{Context, Result, bail};
use args::{Cli, Command, OutputFormat};
use clap::Parser;
use insight_application::{
    InterviewLogger, InterviewStore, NoInterviewLogger, SimulateInterviewsUseCase,
};
use insight_domain::Employee;
use insight_infrastructure::{
    ConfigLoader, FileConfig, JsonlInterviewLogger, MemoryStore, OpenRouterGateway,
};
use report::ConsoleProgress;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let config = ConfigLoader::load(cli.config.as_ref())
        .map_err(|e| anyhow::anyhow!("configuration error: {e}"))?;
    let params = config.engine_params();

    let (store, business) = seed::load(&cli.seed).await?;
    info!(business = %business.name, "seed data loaded");

    // === Dependency Injection ===
    let gateway = Arc::new(build_gateway(&config)?);
    let logger = build_logger(cli.transcript_log.clone().or(config.transcript_log.clone()));

    match cli.command {
        Command::Simulate => {
            let simulate = SimulateInterviewsUseCase::new(store, gateway, params)
                .with_logger(logger);
            let result = if cli.output == OutputFormat::Text {
                simulate
                    .run_for_business_with_progress(business.id, &ConsoleProgress)
                    .await?
            } else {
                simulate.run_for_business(business.id).await?
            };

            match cli.output {
                OutputFormat::Text => println!("{}", report::business_text(&result)),
                OutputFormat::Json => println!("{}", report::json(&result)?),
            }
        }

        Command::SimulateEmployee { email } => {
            let employee = find_employee(&store, &business.id, &email).await?;
            let simulate = SimulateInterviewsUseCase::new(store, gateway, params)
                .with_logger(logger);
            let result = simulate.run_for_employee(employee.id, None).await?;

            match cli.output {
                OutputFormat::Text => println!("{}", report::employee_text(&result)),
                OutputFormat::Json => println!("{}", report::json(&result)?),
            }
        }

        Command::Interview { email } => {
            let employee = find_employee(&store, &business.id, &email).await?;
            live::run(store, gateway, params, &employee).await?;
        }
    }

    Ok(())
}

fn build_gateway(config: &FileConfig) -> Result<OpenRouterGateway> {
    let api_key = config.api_key().with_context(|| {
        format!(
            "no API key found; set the {} environment variable",
            config.api_key_env
        )
    })?;
    OpenRouterGateway::new(
        &config.model,
        api_key,
        &config.base_url,
        Duration::from_secs(config.gateway_timeout_secs),
    )
    .map_err(|e| anyhow::anyhow!("gateway setup failed: {e}"))
}

fn build_logger(path: Option<PathBuf>) -> Arc<dyn InterviewLogger> {
    match path.and_then(JsonlInterviewLogger::new) {
        Some(logger) => {
            info!(path = %logger.path().display(), "writing interview transcripts");
            Arc::new(logger)
        }
        None => Arc::new(NoInterviewLogger),
    }
}

async fn find_employee(
    store: &MemoryStore,
    business_id: &insight_domain::BusinessId,
    email: &str,
) -> Result<Employee> {
    let employees = store.list_employees(*business_id).await?;
    match employees.into_iter().find(|e| e.email == email) {
        Some(employee) => Ok(employee),
        None => bail!("no employee with email {email} in the seed file"),
    }
}
