use std::{path::PathBuf, str::FromStr};

use anyhow::Context as _;
use fixkit_core::{Numeric, Toolkit, Tracer};
use serde::Serialize;

use crate::util::{self, Output, ValuesArg, dispatch_kind};

/// End of the buffer that receives the new value.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, derive_more::FromStr)]
pub(crate) enum ShiftEnd {
    Front,
    #[default]
    Back,
}

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct ShiftArg {
    #[clap(flatten)]
    pub(crate) values: ValuesArg,
    /// End to insert at (`front` evicts the last value, `back` evicts the first)
    #[arg(long, default_value = "back")]
    pub(crate) at: ShiftEnd,
    /// Value to insert
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) value: String,
    /// Output file path
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct ShiftReport<T> {
    buffer: Vec<T>,
    evicted: T,
}

pub(crate) fn run(arg: &ShiftArg, toolkit: &Toolkit<'_, impl Tracer>) -> anyhow::Result<()> {
    let report = dispatch_kind!(arg.values.kind, shift(arg, toolkit))?;
    Output::save_json(&report, arg.output.as_deref())
}

fn shift<T>(
    arg: &ShiftArg,
    toolkit: &Toolkit<'_, impl Tracer>,
) -> anyhow::Result<serde_json::Value>
where
    T: Numeric + FromStr + Serialize + serde::de::DeserializeOwned,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let mut buffer = arg.values.load::<T>()?;
    let value = util::parse_value::<T>(arg.values.kind, &arg.value)?;
    let evicted = match arg.at {
        ShiftEnd::Front => toolkit.shift_insert_front(&mut buffer, value),
        ShiftEnd::Back => toolkit.shift_insert_back(&mut buffer, value),
    }
    .context("Failed to insert value")?;
    Ok(serde_json::to_value(ShiftReport { buffer, evicted })?)
}
