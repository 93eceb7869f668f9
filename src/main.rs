#![doc = include_str!("../README.md")]

mod api;
mod cli;
mod core;
mod fmt;
mod prelude;
mod quantity;
mod tables;

use std::io::stdin;

use clap::{Parser, crate_version};

use crate::{
    cli::{Args, Command, calculate, prices, session},
    prelude::*,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().with_writer(std::io::stderr).init();
    info!(version = crate_version!(), "starting…");

    let args = Args::parse();
    let mut provider = args.source.try_new_provider()?;

    match args.command {
        Command::Prices => {
            prices(&mut provider, args.json).await?;
        }
        Command::Calculate(calculate_args) => {
            calculate(&mut provider, &calculate_args, args.json).await?;
        }
        Command::Session => {
            session(&mut provider, stdin().lock(), args.json).await?;
        }
    }

    info!("done!");
    Ok(())
}
