extern crate tokio;

mod cli;

use std::process::ExitCode;

use clap::Parser;
use log::error;
use prep::{Driver, Pipeline, Record, Resources};

use crate::cli::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_filter()))
        .init();

    let config = match cli.config() {
        Ok(config) => config,
        Err(error) => {
            error!("{error}");
            return ExitCode::FAILURE;
        }
    };

    // Resource failures abort before any line is read.
    let pipeline = match Resources::load(&config)
        .and_then(|resources| Pipeline::from_config(&resources, &config))
    {
        Ok(pipeline) => pipeline,
        Err(error) => {
            error!("Initialization failed: {error}");
            return ExitCode::FAILURE;
        }
    };

    let records = Driver::new(pipeline).run(&config.input).await;

    if cli.json {
        match serde_json::to_string_pretty(&records) {
            Ok(json) => println!("{json}"),
            Err(error) => {
                error!("Serialization failed: {error}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        report(&records);
    }

    ExitCode::SUCCESS
}

fn report(records: &[Record]) {
    records.iter().for_each(|record| println!("\n{record}"));
    println!("\n--- Processing Complete ---");
}
