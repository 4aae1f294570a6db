use std::io::Write;
use std::time::Duration;

use clap::Parser;
use prediction_sdk::config::{ConfigProvider, BASE_URL_KEY, TIMEOUT_KEY};
use price_predictor_cli::{Cli, Commands};

#[test]
fn cli_parses_predict_flags() {
    let cli = Cli::parse_from([
        "price-predictor",
        "predict",
        "--locality",
        "CBD Belapur",
        "--bhk",
        "3",
        "--area",
        "1250.5",
        "--floor",
        "-1",
        "--total-floors",
        "14",
        "--age",
        "4.5",
        "--lift",
        "--swimming-pool",
        "--json",
    ]);

    let Commands::Predict(cmd) = cli.command else {
        panic!("expected predict");
    };
    assert_eq!(cmd.locality, "CBD Belapur");
    assert_eq!(cmd.bhk, 3);
    assert_eq!(cmd.carpet_area_sqft, 1250.5);
    assert_eq!(cmd.floor, Some(-1));
    assert_eq!(cmd.total_floors, Some(14));
    assert_eq!(cmd.building_age_years, Some(4.5));
    assert!(cmd.json);

    let draft = cmd.draft();
    assert_eq!(draft.bhk, Some(3));
    assert!(draft.lift);
    assert!(draft.swimming_pool);
    assert!(!draft.parking);
    assert_eq!(draft.floor_number, Some(-1));
}

#[test]
fn cli_requires_core_predict_fields() {
    assert!(Cli::try_parse_from(["price-predictor", "predict", "--locality", "Vashi", "--bhk", "2"]).is_err());
    assert!(Cli::try_parse_from(["price-predictor", "predict", "--bhk", "2", "--area", "900"]).is_err());
}

#[test]
fn cli_global_flags_after_subcommand() {
    let cli = Cli::parse_from([
        "price-predictor",
        "history",
        "Vashi",
        "--base-url",
        "http://predict.example.com/api/v1",
        "--timeout",
        "1500ms",
    ]);

    assert_eq!(cli.base_url.as_deref(), Some("http://predict.example.com/api/v1"));
    assert_eq!(cli.timeout, Some(Duration::from_millis(1500)));

    let Commands::History(cmd) = cli.command else {
        panic!("expected history");
    };
    assert_eq!(cmd.locality, "Vashi");
    assert_eq!(cmd.limit, 10);
    assert!(!cmd.json);
}

#[test]
fn cli_rejects_bad_timeout() {
    assert!(Cli::try_parse_from(["price-predictor", "--timeout", "soon", "health"]).is_err());
    assert!(Cli::try_parse_from(["price-predictor", "--timeout", "0s", "health"]).is_err());
    assert!(Cli::try_parse_from(["price-predictor", "--timeout", "307445734561825861m", "health"]).is_err());
    assert!(Cli::try_parse_from(["price-predictor", "--timeout", "45", "health"]).is_ok());
}

#[test]
fn cli_overrides_only_contain_given_flags() {
    let cli = Cli::parse_from(["price-predictor", "localities"]);
    assert!(cli.overrides().is_empty());

    let cli = Cli::parse_from(["price-predictor", "--base-url", "http://flag/api/v1", "--timeout", "2s", "health"]);
    let overrides = cli.overrides();
    assert_eq!(overrides.get_string(BASE_URL_KEY).unwrap(), "http://flag/api/v1");
    assert_eq!(overrides.get_string(TIMEOUT_KEY).unwrap(), "2000ms");
}

#[test]
fn cli_flags_override_settings_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[service]\nbase_url = \"http://file.example.com/api/v1\"\ntimeout_seconds = 12\n"
    )
    .unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let cli = Cli::parse_from(["price-predictor", "--config", &path, "--timeout", "3s", "health"]);
    let settings = cli.load_settings().unwrap();
    let config = cli.service_config(&settings).unwrap();
    assert_eq!(config.timeout, Duration::from_secs(3));

    let cli = Cli::parse_from([
        "price-predictor",
        "--config",
        &path,
        "--base-url",
        "http://flag.example.com/api/v1",
        "health",
    ]);
    let config = cli.service_config(&cli.load_settings().unwrap()).unwrap();
    assert_eq!(config.base_url, "http://flag.example.com/api/v1");
}

#[test]
fn cli_missing_explicit_config_is_an_error() {
    let cli = Cli::parse_from(["price-predictor", "--config", "/definitely/not/here.toml", "localities"]);
    assert!(cli.load_settings().is_err());
}
