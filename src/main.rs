//! Interactive calculator for four-operator integer arithmetic.

use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    if args.len() >= 2 && (args[1] == "--help" || args[1] == "-h") {
        eprintln!("Usage: calc [expression]");
        eprintln!();
        eprintln!("Without arguments, starts an interactive prompt.");
        eprintln!("With arguments, evaluates them as a single expression");
        eprintln!("and prints the result.");
        eprintln!();
        eprintln!("Examples:");
        eprintln!("  calc");
        eprintln!("  calc '3 + 4 * 2'");
        eprintln!("  calc 10 / 4");
        return ExitCode::from(2);
    }

    if args.len() < 2 {
        return repl();
    }

    eval_once(&args[1..].join(" "))
}

/// Evaluate one expression and print the raw result.
fn eval_once(input: &str) -> ExitCode {
    match calc_rs::eval_str(input) {
        Ok(value) => {
            println!("{value}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Prompt-evaluate-print loop. Every error is reported and the loop
/// continues; only the exit directive or end of stdin terminates it.
fn repl() -> ExitCode {
    let mut line = String::new();

    loop {
        print!("Enter an expression (or 'exit' to quit): ");
        let _ = io::stdout().flush();

        line.clear();
        match io::stdin().read_line(&mut line) {
            Ok(0) => {
                // stdin closed
                println!("Exiting.");
                return ExitCode::SUCCESS;
            }
            Ok(_) => {}
            Err(e) => {
                eprintln!("Error: {e}");
                return ExitCode::FAILURE;
            }
        }

        let input = line.trim();
        if input.eq_ignore_ascii_case("exit") {
            println!("Exiting.");
            return ExitCode::SUCCESS;
        }

        match calc_rs::eval_str(input) {
            Ok(value) => println!("Result: {value}"),
            Err(e) => println!("Error: {e}"),
        }
    }
}
