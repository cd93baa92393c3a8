use clap::{Args, Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use qrisgen::application::checkout::Checkout;
use qrisgen::application::injector::verify_checksum;
use qrisgen::domain::amount::Amount;
use qrisgen::domain::ports::MerchantConfigBox;
use qrisgen::domain::tlv::parse;
use qrisgen::infrastructure::in_memory::InMemoryConfigSource;
use qrisgen::infrastructure::json_file::JsonFileConfigSource;
use qrisgen::interfaces::csv::order_reader::OrderReader;
use qrisgen::interfaces::csv::payload_writer::PayloadWriter;
use std::fs::{self, File};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Embed an amount into the merchant's static payload
    Generate {
        /// Transaction amount, e.g. 50000
        #[arg(long)]
        amount: Amount,

        #[command(flatten)]
        source: PayloadSource,
    },
    /// Check the trailing checksum of a payload
    Verify { payload: String },
    /// List the fields of a payload
    Inspect {
        payload: String,

        /// Print the fields as JSON
        #[arg(long)]
        json: bool,
    },
    /// Generate a payload for every order in a CSV file (order,amount)
    Batch {
        /// Input orders CSV file
        input: PathBuf,

        #[command(flatten)]
        source: PayloadSource,
    },
}

/// Where the merchant's static payload comes from.
#[derive(Args)]
#[group(required = true, multiple = false)]
struct PayloadSource {
    /// Static payload given inline
    #[arg(long)]
    payload: Option<String>,

    /// File containing the static payload
    #[arg(long)]
    payload_file: Option<PathBuf>,

    /// JSON merchant configuration carrying `qris_static`
    #[arg(long)]
    config: Option<PathBuf>,
}

impl PayloadSource {
    fn into_config_source(self) -> Result<MerchantConfigBox> {
        if let Some(payload) = self.payload {
            return Ok(Box::new(InMemoryConfigSource::from_payload(payload.trim())));
        }
        if let Some(path) = self.payload_file {
            let contents = fs::read_to_string(path).into_diagnostic()?;
            return Ok(Box::new(InMemoryConfigSource::from_payload(
                contents.trim(),
            )));
        }
        if let Some(path) = self.config {
            return Ok(Box::new(JsonFileConfigSource::new(path)));
        }
        Err(miette::miette!("no static payload source given"))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    // stdout carries payloads and CSV; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Command::Generate { amount, source } => {
            let checkout = Checkout::new(source.into_config_source()?);
            println!("{}", checkout.dynamic_payload(&amount)?);
        }
        Command::Verify { payload } => {
            verify_checksum(payload.trim())?;
            println!("OK");
        }
        Command::Inspect { payload, json } => {
            let fields = parse(payload.trim())?;
            if json {
                println!("{}", serde_json::to_string_pretty(&fields).into_diagnostic()?);
            } else {
                for field in &fields {
                    println!("{}\t{:02}\t{}", field.tag, field.value.len(), field.value);
                }
            }
        }
        Command::Batch { input, source } => {
            // One config load for the whole run.
            let checkout = Checkout::new(source.into_config_source()?).prepare()?;

            let file = File::open(input).into_diagnostic()?;
            let reader = OrderReader::new(file);
            let stdout = io::stdout();
            let mut writer = PayloadWriter::new(stdout.lock());
            for order_result in reader.orders() {
                match order_result {
                    // A failure here comes from the merchant payload, not the row.
                    Ok(order) => writer.write(&checkout.process_order(order)?)?,
                    Err(e) => tracing::warn!("Error reading order: {}", e),
                }
            }
            writer.flush()?;
        }
    }

    Ok(())
}
