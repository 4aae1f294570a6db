//! Predict Command Implementation

use std::io::Write;
use std::process::ExitCode;

use clap::Args;
use input_validation::InputCollector;
use prediction_sdk::presenter::PredictionView;
use prediction_sdk::{PredictionSession, SubmissionOutcome};
use property_types::{PropertyDraft, PropertyField};
use tracing::info;

use crate::{AppContext, CliResult, EXIT_INVALID_INPUT, EXIT_REQUEST_FAILED};

/// Estimate the price of a property
///
/// # Example
///
/// ```bash
/// price-predictor predict --locality Kharghar --bhk 2 --area 950 --floor 3 --total-floors 10 --gym
/// ```
#[derive(Args, Debug, Clone)]
pub struct PredictCommand {
    /// Locality name, exactly as listed by `localities`
    #[arg(long)]
    pub locality: String,

    /// Bedroom-hall-kitchen count (1 to 5)
    #[arg(long, allow_negative_numbers = true)]
    pub bhk: i64,

    /// Carpet area in square feet (at least 300)
    #[arg(long = "area", allow_negative_numbers = true)]
    pub carpet_area_sqft: f64,

    /// Floor of the unit
    #[arg(long, allow_negative_numbers = true)]
    pub floor: Option<i32>,

    /// Floors in the building
    #[arg(long, allow_negative_numbers = true)]
    pub total_floors: Option<i32>,

    /// Building age in years
    #[arg(long = "age", allow_negative_numbers = true)]
    pub building_age_years: Option<f64>,

    #[arg(long)]
    pub lift: bool,

    #[arg(long)]
    pub parking: bool,

    #[arg(long)]
    pub gym: bool,

    #[arg(long)]
    pub swimming_pool: bool,

    #[arg(long)]
    pub gated_society: bool,

    #[arg(long)]
    pub cctv: bool,

    /// Print the raw result as JSON
    #[arg(long)]
    pub json: bool,
}

impl PredictCommand {
    /// The form state these arguments describe
    pub fn draft(&self) -> PropertyDraft {
        let mut draft = PropertyDraft::new()
            .locality(self.locality.clone())
            .bhk(self.bhk)
            .carpet_area(self.carpet_area_sqft);

        draft.floor_number = self.floor;
        draft.total_floors = self.total_floors;
        draft.building_age_years = self.building_age_years;

        for (field, on) in [
            (PropertyField::Lift, self.lift),
            (PropertyField::Parking, self.parking),
            (PropertyField::Gym, self.gym),
            (PropertyField::SwimmingPool, self.swimming_pool),
            (PropertyField::GatedSociety, self.gated_society),
            (PropertyField::Cctv, self.cctv),
        ] {
            draft.set_amenity(field, on);
        }

        draft
    }

    /// Execute the predict command
    pub async fn run(&self, ctx: &AppContext, out: &mut dyn Write) -> CliResult<ExitCode> {
        let collector = InputCollector::new(ctx.settings.catalog.localities.clone());
        let session = PredictionSession::new(ctx.client.clone(), collector).with_draft(self.draft());

        match session.submit().await? {
            SubmissionOutcome::Predicted(result) => {
                if self.json {
                    writeln!(out, "{}", serde_json::to_string_pretty(&result)?)?;
                } else {
                    writeln!(out, "{}", PredictionView::from_result(&result))?;
                }
                info!(id = %result.id, "prediction displayed");
                Ok(ExitCode::SUCCESS)
            }
            SubmissionOutcome::Invalid(errors) => {
                for error in &errors {
                    eprintln!("{}", error);
                }
                Ok(ExitCode::from(EXIT_INVALID_INPUT))
            }
            SubmissionOutcome::Failed(message) => {
                eprintln!("{}", message);
                Ok(ExitCode::from(EXIT_REQUEST_FAILED))
            }
        }
    }
}
