use calc_rs::evaluate;
use clap::Parser;
use std::io::Write;
use std::process::ExitCode;

/// Simple calculator: evaluates arithmetic expressions line by line.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Evaluate this expression once and exit instead of starting a session.
    #[arg(allow_hyphen_values = true)]
    expression: Option<String>,

    /// Word that ends the session, compared case-insensitively.
    #[arg(long, default_value = "exit")]
    exit_keyword: String,

    /// Do not print the banner or the prompt.
    #[arg(short, long)]
    quiet: bool,
}

fn report(line: &str) -> bool {
    match evaluate(line) {
        Ok(value) => {
            println!("Result: {}", value);
            true
        },
        Err(e) => {
            println!("Error: Invalid expression. {}", e);
            false
        },
    }
}

fn prompt(quiet: bool) -> std::io::Result<()> {
    if !quiet {
        print!("Enter arithmetic expression: ");
        std::io::stdout().flush()?;
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    if let Some(expression) = &args.expression {
        return if report(expression) { ExitCode::SUCCESS } else { ExitCode::FAILURE };
    }

    let exit_keyword = args.exit_keyword.trim().to_lowercase();
    if !args.quiet {
        println!("Simple Calculator. Type '{}' to quit.", exit_keyword);
    }

    if let Err(e) = prompt(args.quiet) {
        log::error!("could not write prompt: {}", e);
        return ExitCode::FAILURE;
    }

    for line in std::io::stdin().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                log::error!("could not read input: {}", e);
                return ExitCode::FAILURE;
            },
        };

        if line.trim().to_lowercase() == exit_keyword {
            break;
        }

        report(&line);

        if let Err(e) = prompt(args.quiet) {
            log::error!("could not write prompt: {}", e);
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
