use std::{path::PathBuf, str::FromStr};

use fixkit_core::{Numeric, Toolkit, Tracer};
use serde::Serialize;

use crate::util::{Output, ValuesArg, dispatch_kind};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct SortArg {
    #[clap(flatten)]
    pub(crate) values: ValuesArg,
    /// Output file path
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

pub(crate) fn run(arg: &SortArg, toolkit: &Toolkit<'_, impl Tracer>) -> anyhow::Result<()> {
    let sorted = dispatch_kind!(arg.values.kind, sorted(&arg.values, toolkit))?;
    Output::save_json(&sorted, arg.output.as_deref())
}

fn sorted<T>(
    values: &ValuesArg,
    toolkit: &Toolkit<'_, impl Tracer>,
) -> anyhow::Result<serde_json::Value>
where
    T: Numeric + FromStr + Serialize + serde::de::DeserializeOwned,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let mut buffer = values.load::<T>()?;
    toolkit.sort_ascending(&mut buffer);
    Ok(serde_json::to_value(buffer)?)
}
