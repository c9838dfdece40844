//! deskcalc - replay calculator key presses and print the display

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use serde::Serialize;

use libdeskcalc::input::parse_sequence;
use libdeskcalc::logging::LoggingConfig;
use libdeskcalc::{CalcError, Calculator, CalculatorState, Config, DeskcalcError, Result};

#[derive(Parser, Debug)]
#[command(name = "deskcalc")]
#[command(version, about = "Replay calculator key presses and print the display")]
#[command(long_about = r#"Replay calculator key presses and print the display.

Keys are pressed one at a time, exactly as on the keypad: there is no
operator precedence, each operator applies to the running result.

EXAMPLES:
    deskcalc 2 + 3 =            # 5
    deskcalc '10 ÷ 4 ='         # 2.5
    deskcalc 1+2*3=             # 9 (running result, not precedence)
    deskcalc 16 sqrt            # 4
    echo '5 ÷ 0 =' | deskcalc   # error on stderr, exit code 2
    deskcalc --steps 12 bs 5 =  # display after every key
    deskcalc --format json 9 x² # full calculator state as JSON

KEYS:
    0-9 .          digits and decimal point (numbers like 12.5 expand)
    + - * / x × ÷  operators
    = enter        equals
    c esc clear    clear all
    ce             clear entry
    bs backspace   remove last character
    sq x²          square
    sqrt √         square root
    % pct          percentage
    inv 1/x        inverse

EXIT CODES:
    0 - Success
    1 - Configuration or I/O error
    2 - A calculation failed (the rest of the keys are still applied)
    3 - Unknown key

ENVIRONMENT:
    DESKCALC_CONFIG       config file path
    DESKCALC_LOG_LEVEL    log level, overrides [logging] level (default: error)
    DESKCALC_LOG_FORMAT   text, json or pretty, overrides [logging] format
"#)]
struct Cli {
    /// Keys to press (reads from stdin if not provided)
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    keys: Vec<String>,

    /// Output format
    #[arg(short, long, default_value = "text", value_name = "FORMAT")]
    #[arg(value_parser = ["text", "json"])]
    format: String,

    /// Show the display after every key
    #[arg(short, long)]
    steps: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Config file (defaults to ~/.config/deskcalc/config.toml)
    #[arg(short, long, value_name = "PATH", env = "DESKCALC_CONFIG")]
    config: Option<PathBuf>,
}

/// Display after a single key
#[derive(Debug, Serialize)]
struct Step {
    key: String,
    display: String,
    expression: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Everything printed at the end of a run
#[derive(Debug, Serialize)]
struct Report {
    display: String,
    expression: String,
    state: CalculatorState,
    errors: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    steps: Vec<Step>,
}

fn main() {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    };

    // Only errors unless config or env ask for more; calculation failures
    // are printed anyway
    let logging = LoggingConfig::from_section(&config.logging, "error", cli.verbose);
    if let Err(e) = logging.init() {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }

    let (report, last_error) = match run(&cli) {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    };

    match render(&report, &cli) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }

    if let Some(e) = last_error {
        std::process::exit(DeskcalcError::Calc(e).exit_code());
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    match &cli.config {
        Some(path) if path.exists() => Config::load_from_path(path),
        Some(_) => Ok(Config::default()),
        None => Config::load(),
    }
}

fn read_script(cli: &Cli) -> Result<String> {
    if !cli.keys.is_empty() {
        return Ok(cli.keys.join(" "));
    }

    let mut script = String::new();
    std::io::stdin().read_to_string(&mut script)?;
    Ok(script)
}

/// Press every key, collecting errors without stopping
fn run(cli: &Cli) -> Result<(Report, Option<CalcError>)> {
    let script = read_script(cli)?;
    let actions = parse_sequence(&script)?;
    tracing::debug!("Replaying {} keys", actions.len());

    let mut calc = Calculator::new();
    let mut errors = Vec::new();
    let mut steps = Vec::new();
    let mut last_error = None;

    for action in actions {
        let result = calc.dispatch(action);
        if let Err(ref e) = result {
            eprintln!("Error: {}", e);
            errors.push(e.to_string());
        }

        if cli.steps {
            steps.push(Step {
                key: action.label(),
                display: calc.display().to_string(),
                expression: calc.expression(),
                error: result.as_ref().err().map(|e| e.to_string()),
            });
        }

        if let Err(e) = result {
            last_error = Some(e);
        }
    }

    let report = Report {
        display: calc.display().to_string(),
        expression: calc.expression(),
        state: calc.into_state(),
        errors,
        steps,
    };

    Ok((report, last_error))
}

fn render(report: &Report, cli: &Cli) -> anyhow::Result<String> {
    if cli.format == "json" {
        return serde_json::to_string_pretty(report).context("Failed to serialize result");
    }

    let mut lines: Vec<String> = report
        .steps
        .iter()
        .map(|step| {
            if step.expression.is_empty() {
                format!("{:>4}  {}", step.key, step.display)
            } else {
                format!("{:>4}  {}  [{}]", step.key, step.display, step.expression)
            }
        })
        .collect();
    lines.push(report.display.clone());

    Ok(lines.join("\n"))
}
