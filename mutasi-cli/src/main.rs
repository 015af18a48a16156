use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use mutasi_ingest::{ScanConfig, parse_statement};
use mutasi_report::{Summary, write_csv_file};

mod extract;

#[derive(Parser, Debug)]
#[command(name = "mutasi", version, about = "BCA mutasi statement parser")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse a statement and print the transaction table
    Parse {
        /// Statement input: extracted text, or a PDF (converted via pdftotext)
        input: PathBuf,

        /// Also write the transactions as CSV to this path
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Print the parse result as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Parse a statement and print totals plus the category breakdown
    Summary {
        /// Statement input: extracted text, or a PDF (converted via pdftotext)
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Parse { input, csv, json } => {
            let stmt = load_and_parse(&input)?;

            if json {
                println!("{}", serde_json::to_string_pretty(&stmt)?);
            } else {
                print_owner(&stmt.owner);
                println!("Parsed {} transactions from {}\n", stmt.transactions.len(), input.display());
                for t in &stmt.transactions {
                    let amount = t
                        .amount
                        .map(|a| format!("{:.2}", a))
                        .unwrap_or_else(|| "-".to_string());
                    println!(
                        "{:<5} | {:>14} {:<2} | {:<24} | {:<14} | {}",
                        t.date,
                        amount,
                        direction_code(t.direction),
                        t.counterparty.as_deref().unwrap_or("-"),
                        t.category.label(),
                        t.description
                    );
                }
            }

            if let Some(csv_path) = csv {
                write_csv_file(&csv_path, &stmt)?;
                eprintln!("\nWrote CSV to {}", csv_path.display());
            }
        }

        Command::Summary { input } => {
            let stmt = load_and_parse(&input)?;
            print_owner(&stmt.owner);

            let summary = Summary::build(&stmt);
            println!("Total out: Rp {:.0}", summary.total_out);
            println!("Total in:  Rp {:.0}", summary.total_in);
            println!("Net:       Rp {:.0}\n", summary.net);

            println!("Spending by category:");
            for b in &summary.by_category {
                println!(
                    "- {:<14} | count={:<3} | total=Rp {:.0}",
                    b.category.label(),
                    b.count,
                    b.total
                );
            }
        }
    }

    Ok(())
}

fn load_and_parse(input: &PathBuf) -> Result<mutasi_core::Statement> {
    if !input.exists() {
        bail!("input not found: {}", input.display());
    }
    let doc = extract::load_document(input)
        .with_context(|| format!("extracting {}", input.display()))?;
    Ok(parse_statement(&doc, &ScanConfig::default()))
}

fn print_owner(owner: &Option<String>) {
    match owner {
        Some(name) => println!("Account owner: {}\n", name),
        None => println!("Account owner: not found\n"),
    }
}

fn direction_code(direction: mutasi_core::Direction) -> &'static str {
    match direction {
        mutasi_core::Direction::Debit => "DB",
        mutasi_core::Direction::Credit => "CR",
        mutasi_core::Direction::Unknown => "??",
    }
}
