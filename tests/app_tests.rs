use anyhow::Result;
use clap::Parser;

use wordcut::app::args::Args;
use wordcut::app::{App, TruncationRecord};
use wordcut::config::Config;

fn run_app(argv: &[&str], config: &Config, stdin: &str) -> Result<String> {
    let args = Args::try_parse_from(argv)?;
    let app = App::new(&args, config)?;
    let mut out = Vec::new();
    app.run(stdin.as_bytes(), &mut out)?;
    Ok(String::from_utf8(out)?)
}

#[test]
fn test_inline_text() -> Result<()> {
    let out = run_app(
        &["wordcut", "-l", "15", "Hello", "world,", "this", "is", "a", "test."],
        &Config::default(),
        "",
    )?;
    assert_eq!(out, "Hello world…\n");
    Ok(())
}

#[test]
fn test_stdin_text_without_trailing_newline() -> Result<()> {
    let out = run_app(
        &["wordcut", "--limit", "14"],
        &Config::default(),
        "This is great. Really.\n",
    )?;
    assert_eq!(out, "This is great.\n");
    Ok(())
}

#[test]
fn test_per_line_mode() -> Result<()> {
    let input = "short line\nThe quick brown fox jumps\n";
    let out = run_app(&["wordcut", "-l", "10", "--lines"], &Config::default(), input)?;
    assert_eq!(out, "short line\nThe quick…\n");
    Ok(())
}

#[test]
fn test_json_records() -> Result<()> {
    let out = run_app(
        &["wordcut", "-l", "9", "--json", "The quick brown"],
        &Config::default(),
        "",
    )?;
    let record: serde_json::Value = serde_json::from_str(out.trim_end())?;
    assert_eq!(record["input"], "The quick brown");
    assert_eq!(record["output"], "The quick…");
    assert_eq!(record["truncated"], true);
    Ok(())
}

#[test]
fn test_config_supplies_defaults() -> Result<()> {
    let config = Config {
        default_limit: Some(12),
        separator: '_',
        per_line: false,
        json: false,
    };
    let out = run_app(&["wordcut", "alpha_beta_gamma"], &config, "")?;
    assert_eq!(out, "alpha_beta…\n");

    // Flags win over config
    let out = run_app(&["wordcut", "-l", "4", "-s", " ", "ab cd_ef"], &config, "")?;
    assert_eq!(out, "ab…\n");

    let args = Args::try_parse_from(["wordcut", "-l", "4", "-s", " "])?;
    let app = App::new(&args, &config)?;
    assert_eq!(app.truncator().limit(), 4);
    assert_eq!(app.truncator().options().separator, ' ');
    Ok(())
}

#[test]
fn test_process_reports_truncation() -> Result<()> {
    let args = Args::try_parse_from(["wordcut", "-l", "5", "--lines"])?;
    let app = App::new(&args, &Config::default())?;

    let records = app.process("fits\nthis does not");
    assert_eq!(
        records,
        vec![
            TruncationRecord {
                input: "fits".to_string(),
                output: "fits".to_string(),
                truncated: false,
            },
            TruncationRecord {
                input: "this does not".to_string(),
                output: "this…".to_string(),
                truncated: true,
            },
        ]
    );
    Ok(())
}

#[test]
fn test_invalid_arguments_are_rejected() -> Result<()> {
    let config = Config::default();

    let args = Args::try_parse_from(["wordcut", "hello"])?;
    assert!(App::new(&args, &config).is_err());

    let args = Args::try_parse_from(["wordcut", "-l", "-3", "hello"])?;
    let err = App::new(&args, &config).err().expect("negative limit must fail");
    assert!(format!("{:#}", err).contains("must not be negative"));

    let args = Args::try_parse_from(["wordcut", "-l", "5", "-s", "ab", "hello"])?;
    let err = App::new(&args, &config).err().expect("long separator must fail");
    assert!(format!("{:#}", err).contains("single character"));

    Ok(())
}

#[test]
fn test_zero_default_limit_blames_config() -> Result<()> {
    let config = Config {
        default_limit: Some(0),
        ..Config::default()
    };

    let args = Args::try_parse_from(["wordcut", "hello"])?;
    let err = App::new(&args, &config).err().expect("zero limit must fail");
    let message = format!("{:#}", err);
    assert!(message.contains("Invalid default_limit in config"));
    assert!(!message.contains("--limit"));

    // A flag value still takes precedence and is reported as the flag
    let args = Args::try_parse_from(["wordcut", "-l", "0", "hello"])?;
    let err = App::new(&args, &config).err().expect("zero limit must fail");
    assert!(format!("{:#}", err).contains("Invalid --limit"));

    Ok(())
}
