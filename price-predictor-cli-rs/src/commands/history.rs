//! History Command Implementation

use std::io::Write;
use std::process::ExitCode;

use clap::Args;
use prediction_sdk::presenter::HistoryView;
use prediction_sdk::services::prediction::DEFAULT_HISTORY_LIMIT;
use tracing::warn;

use crate::{AppContext, CliResult, EXIT_REQUEST_FAILED};

/// Show recent estimates recorded for a locality
#[derive(Args, Debug, Clone)]
pub struct HistoryCommand {
    /// Locality name
    pub locality: String,

    /// Maximum number of estimates to show
    #[arg(long, default_value_t = DEFAULT_HISTORY_LIMIT)]
    pub limit: u32,

    /// Print the raw history as JSON
    #[arg(long)]
    pub json: bool,
}

impl HistoryCommand {
    /// Execute the history command
    pub async fn run(&self, ctx: &AppContext, out: &mut dyn Write) -> CliResult<ExitCode> {
        if !ctx.settings.catalog.localities.contains(&self.locality) {
            warn!(locality = %self.locality, "locality is not in the configured catalog");
        }

        match ctx.client.history(&self.locality, self.limit).await {
            Ok(history) if self.json => {
                writeln!(out, "{}", serde_json::to_string_pretty(&history)?)?;
                Ok(ExitCode::SUCCESS)
            }
            Ok(history) => {
                writeln!(out, "{}", HistoryView::from_history(&self.locality, &history))?;
                Ok(ExitCode::SUCCESS)
            }
            Err(e) => {
                eprintln!("{}", e.message());
                Ok(ExitCode::from(EXIT_REQUEST_FAILED))
            }
        }
    }
}
