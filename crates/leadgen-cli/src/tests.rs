use std::path::{Path, PathBuf};

use leadgen_core::{Environment, LEAD_COLUMNS};
use leadgen_generator::LeadTable;

use super::*;

fn test_config(output_dir: &Path) -> AppConfig {
    AppConfig {
        env: Environment::Test,
        bind_addr: "127.0.0.1:0".parse().expect("socket addr"),
        log_level: "info".to_string(),
        output_dir: output_dir.to_path_buf(),
        catalog_path: None,
        max_batch_size: 500,
        preview_rows: 10,
        rate_limit_per_minute: 0,
    }
}

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["leadgen-cli"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn parses_generate_with_all_flags() {
    let cli = Cli::try_parse_from([
        "leadgen-cli",
        "generate",
        "--count",
        "12",
        "--industries",
        "SaaS, Fintech",
        "--locations",
        "Pune",
        "--sizes",
        "5-50",
        "--titles",
        "CTO",
        "--output-dir",
        "/tmp/leads",
    ])
    .expect("expected valid cli args");

    let Some(Commands::Generate {
        count,
        industries,
        output_dir,
        ..
    }) = cli.command
    else {
        panic!("expected generate command");
    };
    assert_eq!(count.as_deref(), Some("12"));
    assert_eq!(industries.as_deref(), Some("SaaS, Fintech"));
    assert_eq!(output_dir, Some(PathBuf::from("/tmp/leads")));
}

#[test]
fn parses_generate_without_flags() {
    let cli = Cli::try_parse_from(["leadgen-cli", "generate"]).expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Generate {
            count: None,
            industries: None,
            locations: None,
            sizes: None,
            titles: None,
            output_dir: None,
        })
    ));
}

#[test]
fn parses_inspect_with_file() {
    let cli = Cli::try_parse_from(["leadgen-cli", "inspect", "--file", "leads.xlsx"])
        .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Inspect {
            file: Some(_),
            output_dir: None,
        })
    ));
}

#[test]
fn unknown_subcommand_is_rejected() {
    assert!(Cli::try_parse_from(["leadgen-cli", "serve"]).is_err());
}

#[test]
fn build_request_uses_plain_defaults_for_missing_flags() {
    let catalog = Catalog::builtin();
    let request = generate::build_request(&generate::GenerateArgs::default(), &catalog, 500)
        .expect("request");

    assert_eq!(request.count(), 50);
    assert_eq!(request.industries(), ["Digital Marketing", "SaaS", "Real Estate"]);
    assert_eq!(request.locations(), ["Mumbai", "Bangalore", "Delhi"]);
    assert_eq!(request.sizes(), ["5-50", "50-200"]);
    assert_eq!(request.titles(), catalog.titles.as_slice());
}

#[test]
fn build_request_splits_and_coerces() {
    let args = generate::GenerateArgs {
        count: Some("abc".to_string()),
        industries: Some(" SaaS ,, Fintech ".to_string()),
        locations: Some(String::new()),
        ..generate::GenerateArgs::default()
    };
    let catalog = Catalog::builtin();
    let request = generate::build_request(&args, &catalog, 500).expect("request");

    assert_eq!(request.count(), 50);
    assert_eq!(request.industries(), ["SaaS", "Fintech"]);
    assert_eq!(request.locations(), catalog.locations.as_slice());
}

#[test]
fn build_request_clamps_oversized_batch() {
    let args = generate::GenerateArgs {
        count: Some("501".to_string()),
        ..generate::GenerateArgs::default()
    };
    let request =
        generate::build_request(&args, &Catalog::builtin(), 500).expect("clamped request");
    assert_eq!(request.count(), 500);
}

#[test]
fn generate_then_inspect_latest() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = test_config(dir.path());
    let args = generate::GenerateArgs {
        count: Some("4".to_string()),
        locations: Some("Jaipur".to_string()),
        ..generate::GenerateArgs::default()
    };

    let outcome = generate::run_generate(&config, &Catalog::builtin(), &args, dir.path())
        .expect("generate");
    assert_eq!(outcome.leads.len(), 4);
    assert_eq!(outcome.telemetry.features_processed, 56);

    let resolved = inspect::resolve_workbook(None, dir.path()).expect("latest workbook");
    assert_eq!(resolved, outcome.artifact.path);
    inspect::run_inspect(None, dir.path(), config.preview_rows).expect("inspect");
}

#[test]
fn inspect_without_workbooks_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = inspect::run_inspect(None, dir.path(), 10).expect_err("nothing to inspect");
    assert!(err.to_string().contains("run `generate` first"));
}

#[test]
fn preview_renders_header_and_bounded_rows() {
    let mut row = vec![String::new(); LEAD_COLUMNS.len()];
    row[3] = "Priya Menon".to_string();
    row[9] = "SaaS Startup".to_string();
    let table = LeadTable {
        headers: LEAD_COLUMNS.map(String::from).to_vec(),
        rows: vec![row; 3],
    };

    let lines = inspect::render_preview(&table, 2);
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("FULL NAME"));
    assert!(lines[1].starts_with("Priya Menon"));
    assert!(lines[1].contains("SaaS Startup"));
}

#[test]
fn preview_skips_missing_columns() {
    let table = LeadTable {
        headers: vec!["Full Name".to_string()],
        rows: vec![vec!["Only Name".to_string()]],
    };
    let lines = inspect::render_preview(&table, 5);
    assert_eq!(lines, vec!["FULL NAME".to_string(), "Only Name".to_string()]);
}
