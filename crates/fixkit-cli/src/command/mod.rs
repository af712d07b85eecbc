use clap::{Parser, Subcommand};
use fixkit_core::{Toolkit, TracingTracer};

use self::{
    convert::ConvertArg, free_memory::FreeMemoryArg, shift::ShiftArg, sort::SortArg,
    stats::StatsArg,
};
use crate::util;

mod convert;
mod free_memory;
mod shift;
mod sort;
mod stats;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Log every toolkit call to stderr
    #[arg(long, short, global = true)]
    verbose: bool,
    /// What operation to run
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Minimum, maximum, mean and range of a buffer
    Stats(#[clap(flatten)] StatsArg),
    /// Sort a buffer into ascending order
    Sort(#[clap(flatten)] SortArg),
    /// Insert a value at one end of a buffer, evicting the other end
    Shift(#[clap(flatten)] ShiftArg),
    /// Convert temperatures between Celsius and Fahrenheit
    Convert(#[clap(flatten)] ConvertArg),
    /// Estimate free memory on this platform
    FreeMemory(#[clap(flatten)] FreeMemoryArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    util::init_tracing(args.verbose);
    tracing::debug!(version = fixkit_core::VERSION, "fixkit starting");

    let toolkit = Toolkit::new(&TracingTracer);
    match &args.mode {
        Mode::Stats(arg) => stats::run(arg, &toolkit)?,
        Mode::Sort(arg) => sort::run(arg, &toolkit)?,
        Mode::Shift(arg) => shift::run(arg, &toolkit)?,
        Mode::Convert(arg) => convert::run(arg, &toolkit)?,
        Mode::FreeMemory(arg) => free_memory::run(arg)?,
    }
    Ok(())
}
