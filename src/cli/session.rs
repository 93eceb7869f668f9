use std::io::BufRead;

use clap::Parser;

use crate::{
    api::PriceSource,
    cli::calculate::{CalculateArgs, calculate},
    core::provider::PriceProvider,
    prelude::*,
};

/// Run a calculation for every line in the `input`, reusing the `provider` between them.
#[instrument(skip_all)]
pub async fn session<S: PriceSource>(
    provider: &mut PriceProvider<S>,
    input: impl BufRead,
    json: bool,
) -> Result {
    let mut n_calculations = 0_usize;
    for line in input.lines() {
        let line = line.context("failed to read the input")?;
        let Some(args) = parse_line(&line) else {
            continue;
        };
        match args {
            Line::Quit => break,
            Line::Calculate(Ok(args)) => {
                calculate(provider, &args, json).await?;
                n_calculations += 1;
            }
            Line::Calculate(Err(error)) => {
                error.print().context("failed to print the usage error")?;
            }
        }
    }
    info!(n_calculations, "session finished");
    Ok(())
}

enum Line {
    Calculate(Result<CalculateArgs, clap::Error>),
    Quit,
}

fn parse_line(line: &str) -> Option<Line> {
    let line = line.trim();
    match line {
        "" => None,
        "quit" | "exit" => Some(Line::Quit),
        _ => Some(Line::Calculate(CalculateArgs::try_parse_from(
            std::iter::once("calculate").chain(line.split_whitespace()),
        ))),
    }
}
