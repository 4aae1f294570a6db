//! Health Command Implementation

use std::io::Write;
use std::process::ExitCode;

use clap::Args;
use prediction_sdk::ServiceClient;

use crate::{AppContext, CliResult, EXIT_REQUEST_FAILED};

/// Check that the prediction service answers and reports itself healthy
#[derive(Args, Debug, Clone, Default)]
pub struct HealthCommand {}

impl HealthCommand {
    pub async fn run(&self, ctx: &AppContext, out: &mut dyn Write) -> CliResult<ExitCode> {
        let client = &ctx.client;

        if client.health_check().await? {
            writeln!(out, "{} ({}): healthy", client.name(), client.base_url())?;
            Ok(ExitCode::SUCCESS)
        } else {
            writeln!(out, "{} ({}): unhealthy", client.name(), client.base_url())?;
            Ok(ExitCode::from(EXIT_REQUEST_FAILED))
        }
    }
}
