//! Localities Command Implementation

use std::io::Write;
use std::process::ExitCode;

use clap::Args;
use property_types::PredictorSettings;

use crate::CliResult;

/// List the supported localities, one per line
#[derive(Args, Debug, Clone, Default)]
pub struct LocalitiesCommand {}

impl LocalitiesCommand {
    pub fn run(&self, settings: &PredictorSettings, out: &mut dyn Write) -> CliResult<ExitCode> {
        for name in settings.catalog.localities.iter() {
            writeln!(out, "{}", name)?;
        }
        Ok(ExitCode::SUCCESS)
    }
}
