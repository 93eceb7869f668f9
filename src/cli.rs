mod calculate;
mod prices;
mod session;
mod source;

use clap::{Parser, Subcommand};

pub use self::{
    calculate::{CalculateArgs, calculate},
    prices::prices,
    session::session,
    source::SourceArgs,
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[clap(flatten)]
    pub source: SourceArgs,

    /// Print JSON instead of the human-readable tables.
    #[clap(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the current fuel prices.
    Prices,

    /// Calculate the EV payback period.
    Calculate(Box<CalculateArgs>),

    /// Read `calculate` arguments line by line from the standard input and calculate each of them.
    ///
    /// The fuel prices are fetched at most once per cache window for the whole session.
    Session,
}
