// ============================================================================
// Pi Console
// Interactive shell around the estimator: prompt, validate, print, repeat
// ============================================================================

use pi_estimator::prelude::*;
use std::io::{self, BufRead, Write};

fn prompt(text: &str) -> Option<String> {
    print!("{text}");
    io::stdout().flush().ok()?;
    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim().to_string()),
    }
}

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt::init();

    let estimator = PiEstimator::new();
    let max_digits = estimator.config().max_digits;

    println!("Welcome to the pi calculator!");

    loop {
        println!("\nHow many digits of pi would you like to calculate?");
        let input = match prompt(&format!("Input any integer between 1 and {max_digits}: ")) {
            Some(line) => line,
            None => return,
        };

        let digits: u32 = match input.parse() {
            Ok(d) => d,
            Err(_) => {
                println!("You must input an integer. Try again.");
                continue;
            },
        };

        if digits < 1 || digits > max_digits {
            println!("That number is out of range. Try again.");
            continue;
        }

        println!("\nOK, calculating {digits} digits of pi...\n");
        match estimator.estimate(digits) {
            Ok(pi) => println!("Pi is approximately: {pi}\n"),
            Err(e) => {
                println!("Could not estimate pi: {e}. Try again.");
                continue;
            },
        }

        loop {
            match prompt("Would you like to calculate again? y/n ") {
                Some(answer) if answer.eq_ignore_ascii_case("y") => {
                    println!("\nYay pi!");
                    break;
                },
                Some(answer) if answer.eq_ignore_ascii_case("n") => {
                    println!("\nGoodbye!");
                    return;
                },
                Some(_) => println!("Please input 'y' or 'n'. Try again.\n"),
                None => return,
            }
        }
    }
}
