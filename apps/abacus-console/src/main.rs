//! Interactive terminal front-end for the Abacus calculator.
//!
//! Each input line is a sequence of key presses; after processing the line
//! the display, the pending operation and any error are re-rendered.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use calculator_sdk::{HttpCalculator, Operation};
use clap::Parser;
use colored::Colorize;
use keypad::Keypad;
use tracing_subscriber::EnvFilter;
use url::Url;

/// Abacus Console - keypad front-end for the calculator API
#[derive(Parser)]
#[command(name = "abacus-console")]
#[command(about = "Abacus Console - keypad front-end for the calculator API")]
#[command(version)]
struct Cli {
    /// Base URL of the abacus-server instance
    #[arg(short, long, default_value = "http://127.0.0.1:8087")]
    server_url: Url,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init()
        .ok();

    let cli = Cli::parse();
    let client = HttpCalculator::new(cli.server_url);
    let mut keypad = Keypad::new();

    println!("{}", "Abacus console".bold());
    println!("keys: 0-9 . + - * / = c (clear) q (quit)");
    render(&keypad)?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        for key in line.chars() {
            match key {
                'q' | 'Q' => return Ok(()),
                '0'..='9' => keypad.press_digit(key),
                '.' => keypad.press_point(),
                '+' => keypad.press_operation(Operation::Add),
                '-' => keypad.press_operation(Operation::Subtract),
                '*' | 'x' | 'X' => keypad.press_operation(Operation::Multiply),
                '/' => keypad.press_operation(Operation::Divide),
                '=' => keypad.press_equals(&client).await,
                'c' | 'C' => keypad.press_clear(),
                other if other.is_whitespace() => {}
                other => println!("{}", format!("ignored key {other:?}").dimmed()),
            }
        }
        render(&keypad)?;
    }

    Ok(())
}

/// Re-render the calculator: status line, display, error.
fn render(keypad: &Keypad) -> Result<()> {
    if let Some((first, op)) = keypad.pending() {
        println!("{}", format!("  {first} {op}").dimmed());
    }
    println!("  {}", keypad.display().bold());
    if let Some(error) = keypad.error() {
        println!("  {}", error.red());
    }
    print!("> ");
    io::stdout().flush()?;
    Ok(())
}
