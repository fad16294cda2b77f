use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, warn};
use rpnsolve::{Solver, SolverConfig, parse_problem};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// rpnsolve - Combine numbers with + - * / to reach a target
#[derive(Parser, Debug)]
#[command(name = "rpnsolve")]
#[command(
    about = "Find an arithmetic expression over the given numbers that equals the target (the last number)"
)]
#[command(version)]
pub struct CliArgs {
    /// Operands followed by the target, e.g. `4 4 4 4 24`. Prompts when empty.
    #[arg(allow_hyphen_values = true)]
    pub tokens: Vec<String>,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,

    /// Search orderings in parallel
    #[arg(short, long)]
    pub parallel: bool,
}

/// Read one line of whitespace-separated tokens
pub fn read_tokens<R: BufRead>(mut reader: R) -> Result<Vec<String>> {
    let mut line = String::new();
    reader
        .read_line(&mut line)
        .context("Failed to read input line")?;
    Ok(line.split_whitespace().map(str::to_string).collect())
}

fn prompt_tokens() -> Result<Vec<String>> {
    print!("> ");
    io::stdout().flush().context("Failed to flush prompt")?;
    read_tokens(io::stdin().lock())
}

/// The question line printed before searching
pub fn format_question(tokens: &[String]) -> String {
    match tokens.split_last() {
        Some((target, operands)) => format!("Q. [{}] = {}", operands.join(", "), target),
        None => String::from("Q. []"),
    }
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let args = CliArgs::parse();

    init_logging(&args.log_level)?;

    let tokens = if args.tokens.is_empty() {
        prompt_tokens()?
    } else {
        args.tokens
    };

    let problem = parse_problem(tokens.as_slice()).context("Invalid input")?;
    println!("{}", format_question(&tokens));

    info!(
        "Searching for {} from {} values",
        problem.target,
        problem.values.len()
    );

    let solver = Solver::new(SolverConfig {
        parallel: args.parallel,
    });
    match solver
        .find_solution(&problem.target, &problem.values)
        .context("Search failed")?
    {
        Some(solution) => println!("{}", solution),
        None => {
            warn!("No matching expression found");
            println!("Case Failed");
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_tokens() {
        let result = read_tokens("  1 2  3/4\t24\n".as_bytes());
        assert!(result.is_ok());
        if let Ok(tokens) = result {
            assert_eq!(tokens, vec!["1", "2", "3/4", "24"]);
        }

        let result = read_tokens("".as_bytes());
        assert!(result.is_ok());
        if let Ok(tokens) = result {
            assert!(tokens.is_empty());
        }
    }

    #[test]
    fn test_format_question() {
        let tokens: Vec<String> = ["4", "4", "4", "4", "24"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(format_question(&tokens), "Q. [4, 4, 4, 4] = 24");
        assert_eq!(format_question(&[]), "Q. []");
    }

    #[test]
    fn test_cli_args_parsing() {
        let args = CliArgs::try_parse_from(["rpnsolve", "-p", "1", "-3", "1/2", "5"]);
        assert!(args.is_ok());
        if let Ok(args) = args {
            assert_eq!(args.tokens, vec!["1", "-3", "1/2", "5"]);
            assert!(args.parallel);
            assert!(matches!(args.log_level, LogLevel::Warn));
        }
    }

    #[test]
    fn test_cli_args_without_tokens() {
        let args = CliArgs::try_parse_from(["rpnsolve", "--log-level", "debug"]);
        assert!(args.is_ok());
        if let Ok(args) = args {
            assert!(args.tokens.is_empty());
            assert!(!args.parallel);
            assert!(matches!(args.log_level, LogLevel::Debug));
        }
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            LogLevel::Error.to_log_level_filter(),
            log::LevelFilter::Error
        );
        assert_eq!(LogLevel::Warn.to_log_level_filter(), log::LevelFilter::Warn);
        assert_eq!(LogLevel::Info.to_log_level_filter(), log::LevelFilter::Info);
        assert_eq!(
            LogLevel::Debug.to_log_level_filter(),
            log::LevelFilter::Debug
        );
        assert_eq!(
            LogLevel::Trace.to_log_level_filter(),
            log::LevelFilter::Trace
        );
    }
}
