//! json-junit CLI
//!
//! Entry point for the `json-junit` command-line tool. Flags mirror the
//! `PLUGIN_*` environment variables so the tool runs unchanged as a CI
//! pipeline plugin.

use clap::{ArgAction, Parser};
use json_junit::config::ConfigError;
use json_junit::{
    ConvertError, Converter, DocumentSource, EffectiveConfig, ExitCode, TracingObserver,
};
use serde_json::{json, Value};
use std::path::PathBuf;
use std::process;
use tracing::metadata::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter
const LOG_ENV: &str = "JSON_JUNIT_LOG";

#[derive(Parser)]
#[command(name = "json-junit")]
#[command(about = "Convert JSON fields to JUnit XML format", version)]
struct Cli {
    /// Name of the JSON file
    #[arg(long = "json_file_name", env = "PLUGIN_JSON_FILE_NAME")]
    json_file_name: Option<String>,

    /// Direct JSON content
    #[arg(long = "json_content", env = "PLUGIN_JSON_CONTENT")]
    json_content: Option<String>,

    /// Name of the report, used for the output file name
    #[arg(long = "test_name", env = "PLUGIN_TEST_NAME")]
    test_name: Option<String>,

    /// Key (or literal) of the suite description
    #[arg(long = "test_description", env = "PLUGIN_TEST_DESCRIPTION")]
    test_description: Option<String>,

    /// Key (or literal) of the suite time
    #[arg(long = "test_junit_time", env = "PLUGIN_TEST_JUNIT_TIME")]
    test_junit_time: Option<String>,

    /// Key (or literal) of the suite name
    #[arg(long = "test_junit_name", env = "PLUGIN_TEST_JUNIT_NAME")]
    test_junit_name: Option<String>,

    /// Key of the case list ("." when the document itself is the list)
    #[arg(long = "test_junit_list", env = "PLUGIN_TEST_JUNIT_LIST")]
    test_junit_list: Option<String>,

    /// Key of the case name
    #[arg(long = "test_junit_list_name", env = "PLUGIN_TEST_JUNIT_LIST_NAME")]
    test_junit_list_name: Option<String>,

    /// Key of the case class name
    #[arg(long = "test_junit_list_class_name", env = "PLUGIN_TEST_JUNIT_LIST_CLASS_NAME")]
    test_junit_list_class_name: Option<String>,

    /// Key of the failure message, or "outer[].inner" for a list of messages
    #[arg(long = "test_junit_list_failure", env = "PLUGIN_TEST_JUNIT_LIST_FAILURE")]
    test_junit_list_failure: Option<String>,

    /// Key of the case time
    #[arg(long = "test_junit_list_time", env = "PLUGIN_TEST_JUNIT_LIST_TIME")]
    test_junit_list_time: Option<String>,

    /// Boolean entry field that disables failure checks for that entry
    #[arg(long = "test_junit_skip_field", env = "PLUGIN_TEST_JUNIT_SKIP_FIELD")]
    test_junit_skip_field: Option<String>,

    /// The document is a list of suites
    #[arg(
        long = "nested_json_list",
        env = "PLUGIN_NESTED_JSON_LIST",
        action = ArgAction::Set,
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    nested_json_list: Option<bool>,

    /// Fail the execution on errors
    #[arg(
        long = "fail_on_errors",
        env = "PLUGIN_FAIL_ON_ERRORS",
        action = ArgAction::Set,
        num_args = 0..=1,
        default_missing_value = "true"
    )]
    fail_on_errors: Option<bool>,

    /// Directory for the generated report (default: current directory)
    #[arg(long = "output_dir", env = "PLUGIN_OUTPUT_DIR")]
    output_dir: Option<String>,

    /// TOML file with default settings, keyed like the flags
    #[arg(long, short = 'c', env = "PLUGIN_CONFIG")]
    config: Option<PathBuf>,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    print_config: bool,

    /// Do not echo the generated XML to stdout
    #[arg(long, short = 'q')]
    quiet: bool,
}

impl Cli {
    /// CLI layer for the config merge; unset flags are null and keep the
    /// value from lower layers. An explicit `false` overrides them.
    fn overrides(&self) -> Value {
        json!({
            "json_file_name": self.json_file_name,
            "json_content": self.json_content,
            "test_name": self.test_name,
            "test_description": self.test_description,
            "test_junit_time": self.test_junit_time,
            "test_junit_name": self.test_junit_name,
            "test_junit_list": self.test_junit_list,
            "test_junit_list_name": self.test_junit_list_name,
            "test_junit_list_class_name": self.test_junit_list_class_name,
            "test_junit_list_failure": self.test_junit_list_failure,
            "test_junit_list_time": self.test_junit_list_time,
            "test_junit_skip_field": self.test_junit_skip_field,
            "nested_json_list": self.nested_json_list,
            "fail_on_errors": self.fail_on_errors,
            "output_dir": self.output_dir,
        })
    }
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let code = match run(&cli) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            let kind = e.kind();
            tracing::error!(kind = kind.description(), "conversion failed");
            eprintln!("Error: {}", e);
            kind.exit_code()
        }
    };

    process::exit(code.as_i32());
}

fn init_tracing() {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .with_env_var(LOG_ENV)
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<(), ConvertError> {
    let effective = EffectiveConfig::build(cli.config.as_deref(), Some(cli.overrides()))?;
    if cli.print_config {
        println!("{}", effective.to_json().map_err(ConfigError::from)?);
        return Ok(());
    }

    let settings = effective.settings()?;
    let source = DocumentSource::from_settings(&settings)?;
    let converter = Converter::from_settings(&settings)?;
    tracing::debug!(config = %effective.config, "effective configuration");

    let outcome = converter.run(&source, &mut TracingObserver)?;
    if !cli.quiet {
        println!("{}", outcome.xml);
    }

    outcome.check_policy(converter.fail_on_errors)
}
