use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use paisa_core::{time, Direction, ParseContext, TransactionRecord};
use paisa_ingest::parse;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "paisa",
    version,
    about = "Parse UPI notification messages into transaction records"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse a single pasted message and print the record
    Paste {
        /// The notification text, quoted
        message: String,

        /// Account or phone identifier the record belongs to
        #[arg(long)]
        account: String,

        /// Record timestamp: RFC 3339, or "YYYY-MM-DD HH:MM" local time
        #[arg(long)]
        at: Option<String>,

        /// IANA timezone used to resolve naive --at values
        #[arg(long, default_value = "Asia/Kolkata")]
        tz: String,

        /// Print the record as JSON instead of a summary line
        #[arg(long)]
        json: bool,
    },

    /// Parse one message per line from a text file
    Batch {
        /// Path to a text file, one notification per line
        #[arg(long)]
        file: PathBuf,

        /// Account or phone identifier the records belong to
        #[arg(long)]
        account: String,

        /// Write records as CSV to this path instead of printing summaries
        #[arg(long)]
        csv: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Paste {
            message,
            account,
            at,
            tz,
            json,
        } => paste(&message, account, at.as_deref(), &tz, json),
        Command::Batch { file, account, csv } => batch(&file, account, csv.as_deref()),
    }
}

fn paste(message: &str, account: String, at: Option<&str>, tz: &str, json: bool) -> Result<()> {
    let mut ctx = ParseContext::new(account);
    if let Some(raw) = at {
        ctx = ctx.with_timestamp(time::parse_timestamp(raw, tz)?);
    }

    let record = parse(message, &ctx)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        println!("{}", summary_line(&record));
    }
    Ok(())
}

fn batch(file: &Path, account: String, csv_out: Option<&Path>) -> Result<()> {
    let content =
        fs::read_to_string(file).with_context(|| format!("reading {}", file.display()))?;

    let ctx = ParseContext::new(account);
    let mut records = Vec::new();
    let mut failed = 0usize;

    for (lineno, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match parse(line, &ctx) {
            Ok(record) => records.push(record),
            Err(err) => {
                failed += 1;
                eprintln!("line {}: {err}", lineno + 1);
            }
        }
    }

    match csv_out {
        Some(path) => write_csv(path, &records)?,
        None => {
            for record in &records {
                println!("{}", summary_line(record));
            }
        }
    }

    eprintln!("parsed {} of {} messages", records.len(), records.len() + failed);
    if failed > 0 {
        bail!("{failed} message(s) could not be parsed");
    }
    Ok(())
}

fn write_csv(path: &Path, records: &[TransactionRecord]) -> Result<()> {
    let mut wtr =
        csv::Writer::from_path(path).with_context(|| format!("creating {}", path.display()))?;
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

fn summary_line(record: &TransactionRecord) -> String {
    let sign = match record.direction {
        Direction::Credit => '+',
        Direction::Debit => '-',
    };
    format!(
        "{} {}Rs.{} [{}] {}",
        record.timestamp.format("%Y-%m-%d %H:%M"),
        sign,
        record.amount,
        record.account_id,
        record.title(),
    )
}
