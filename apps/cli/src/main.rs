use std::{sync::Arc, time::Duration};

use anyhow::Result;
use clap::Parser;
use client_core::{
    HttpPredictionBackend, RawInput, SubmissionController, SubmissionOutcome, SubmitError,
};

mod config;

/// Submit one set of session metrics to the risk prediction service and
/// print the returned classification. Fields are taken as raw text; the core
/// validator decides what they mean.
#[derive(Parser, Debug)]
struct Args {
    /// Base URL of the prediction service; overrides config file and env.
    #[arg(long)]
    api_base: Option<String>,
    #[arg(long)]
    bet: String,
    #[arg(long)]
    total_games: String,
    #[arg(long)]
    total_profit: String,
    #[arg(long)]
    total_losses: String,
    #[arg(long)]
    cashed_out: String,
    /// One of: logreg, randforest, gradboost, svm_rbf, mlp.
    #[arg(long)]
    model: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    let args = Args::parse();

    let mut settings = config::load_settings();
    if let Some(api_base) = args.api_base {
        settings.api_base = api_base;
    }
    config::validate_api_base(&settings.api_base)?;

    let timeout = settings.request_timeout_secs.map(Duration::from_secs);
    let backend = HttpPredictionBackend::new(settings.api_base, timeout)?;
    let controller = SubmissionController::new(Arc::new(backend));

    let raw = RawInput {
        bet: args.bet,
        total_games: args.total_games,
        total_profit: args.total_profit,
        total_losses: args.total_losses,
        cashed_out: args.cashed_out,
        model_name: args.model,
    };

    match controller.submit(raw).await {
        SubmissionOutcome::Completed(assessment) => {
            println!(
                "Risk tier: {} ({:.1}% confidence)",
                assessment.tier, assessment.confidence_percent
            );
            Ok(())
        }
        SubmissionOutcome::Failed(SubmitError::Validation(fields)) => {
            eprintln!("Invalid input:");
            for field in &fields {
                eprintln!("  {field}");
            }
            std::process::exit(2);
        }
        SubmissionOutcome::Failed(err) => {
            eprintln!("Submission failed: {err}");
            std::process::exit(1);
        }
        // A single submission has nothing to supersede it.
        SubmissionOutcome::Superseded => Ok(()),
    }
}
