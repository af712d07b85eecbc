use std::path::PathBuf;

use anyhow::Context as _;
use fixkit_platform::{MemInfoProbe, MemoryProbe, default_probe};
use serde::Serialize;

use crate::util::Output;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct FreeMemoryArg {
    /// Read a meminfo-format file instead of probing the running platform
    #[arg(long)]
    pub(crate) meminfo: Option<PathBuf>,
    /// Output file path
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct FreeMemoryReport {
    free_bytes: usize,
}

pub(crate) fn run(arg: &FreeMemoryArg) -> anyhow::Result<()> {
    let probe: Box<dyn MemoryProbe> = match &arg.meminfo {
        Some(path) => Box::new(MemInfoProbe::new(path)),
        None => default_probe(),
    };
    let free_bytes = probe
        .free_memory()
        .context("Failed to estimate free memory")?;
    tracing::info!(free_bytes, "estimated free memory");
    Output::save_json(&FreeMemoryReport { free_bytes }, arg.output.as_deref())
}
