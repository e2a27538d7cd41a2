use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pr_body_check::config::Config;
use pr_body_check::effects::{GitHubEffect, GitHubInterpreter, GitHubResponse};
use pr_body_check::github::OctocrabClient;
use pr_body_check::orchestrator::{self, CheckSettings, RunOutcome};
use pr_body_check::webhooks::parse_event;

#[tokio::main]
async fn main() {
    let config = Config::from_env();
    let debug = config.as_ref().is_ok_and(|c| c.debug);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                if debug {
                    "pr_body_check=debug".into()
                } else {
                    "pr_body_check=info".into()
                }
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let result = match config.context("reading action configuration") {
        Ok(config) => check(config).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(outcome) if outcome.is_success() => {}
        Ok(outcome) => {
            if let Some(command) = outcome.error_command() {
                println!("{command}");
            }
            std::process::exit(1);
        }
        Err(e) => {
            tracing::error!(error = ?e, "PR body check could not run");
            println!("{}", orchestrator::error_command(&format!("{e:#}")));
            std::process::exit(1);
        }
    }
}

async fn check(config: Config) -> anyhow::Result<RunOutcome> {
    let payload = tokio::fs::read(&config.event_path)
        .await
        .with_context(|| format!("reading event payload {}", config.event_path.display()))?;
    let event = parse_event(&payload).context("parsing event payload")?;

    let settings = CheckSettings::from_config(&config);

    let outcome = match &event {
        Some(event) => {
            let repo = event
                .repo
                .clone()
                .or_else(|| config.repo.clone())
                .context("no repository in the event payload and GITHUB_REPOSITORY is unset")?;
            tracing::info!(repo = %repo, pr = %event.pr.number, action = ?event.action, "Checking pull request");

            let client = OctocrabClient::from_token(config.token.clone(), repo)
                .context("building GitHub client")?;
            orchestrator::run(&client, &settings, Some(&event.pr)).await
        }
        None => orchestrator::run(&Offline, &settings, None).await,
    };

    match &config.output_path {
        Some(path) => outcome
            .write_outputs(path)
            .with_context(|| format!("writing outputs to {}", path.display()))?,
        None => {
            for (name, value) in outcome.outputs() {
                tracing::info!(output = name, value, "Step output");
            }
        }
    }

    Ok(outcome)
}

/// Stands in for the GitHub client when the event has no pull request, in
/// which case the run makes no calls.
struct Offline;

impl GitHubInterpreter for Offline {
    type Error = &'static str;

    async fn interpret(&self, _effect: GitHubEffect) -> Result<GitHubResponse, Self::Error> {
        Err("no pull request to act on")
    }
}
