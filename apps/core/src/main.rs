// Engage Query CLI
// Reads analytics questions and prints one JSON descriptor per question.

use clap::Parser;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use tracing::{error, info};

use engage_query::logging::init_tracing;
use engage_query::{AppError, FixedClock, InterpreterConfig, QueryInterpreter};

#[derive(Parser)]
#[command(name = "engage-query")]
#[command(version)]
#[command(about = "Interpret HCP engagement analytics questions as JSON query descriptors")]
#[command(long_about = None)]
struct Cli {
    /// Questions to interpret; reads one question per stdin line when omitted
    questions: Vec<String>,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Print only the intent label
    #[arg(long)]
    intent_only: bool,

    /// Year used for timeframes without an explicit year
    #[arg(long, value_parser = clap::value_parser!(i32).range(2000..=2100))]
    year: Option<i32>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match InterpreterConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    init_tracing(config.log_format);

    let interpreter = build_interpreter(&cli, &config);
    let stdout = io::stdout();

    match run(&cli, &interpreter, io::stdin().lock(), &mut stdout.lock()) {
        Ok(count) => {
            info!("Interpreted {} question(s)", count);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// `--year` wins over the configured reference year
fn build_interpreter(cli: &Cli, config: &InterpreterConfig) -> QueryInterpreter {
    match cli.year {
        Some(year) => QueryInterpreter::with_clock(FixedClock(year)),
        None => config.interpreter(),
    }
}

/// Interpret positional questions, or every non-blank line of `input` when
/// there are none. Returns the number of questions written to `out`.
fn run(
    cli: &Cli,
    interpreter: &QueryInterpreter,
    input: impl BufRead,
    out: &mut impl Write,
) -> anyhow::Result<usize> {
    let mut count = 0;

    if cli.questions.is_empty() {
        for line in input.lines() {
            let line = line.map_err(AppError::from)?;
            if line.trim().is_empty() {
                continue;
            }
            emit(cli, interpreter, &line, out)?;
            count += 1;
        }
    } else {
        for question in &cli.questions {
            emit(cli, interpreter, question, out)?;
            count += 1;
        }
    }

    Ok(count)
}

fn emit(
    cli: &Cli,
    interpreter: &QueryInterpreter,
    question: &str,
    out: &mut impl Write,
) -> Result<(), AppError> {
    let descriptor = interpreter.parse(question);

    if cli.intent_only {
        writeln!(out, "{}", descriptor.intent)?;
    } else if cli.pretty {
        writeln!(out, "{}", serde_json::to_string_pretty(&descriptor)?)?;
    } else {
        writeln!(out, "{}", serde_json::to_string(&descriptor)?)?;
    }

    Ok(())
}
