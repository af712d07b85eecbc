use std::{path::PathBuf, str::FromStr};

use anyhow::Context as _;
use fixkit_core::{ArrayStats, Numeric, Toolkit, Tracer};
use serde::Serialize;

use crate::util::{ElementKind, Output, ValuesArg, dispatch_kind};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct StatsArg {
    #[clap(flatten)]
    pub(crate) values: ValuesArg,
    /// Output file path
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

#[derive(Debug, Serialize)]
struct StatsReport<T> {
    kind: ElementKind,
    count: usize,
    #[serde(flatten)]
    stats: ArrayStats<T>,
}

pub(crate) fn run(arg: &StatsArg, toolkit: &Toolkit<'_, impl Tracer>) -> anyhow::Result<()> {
    let report = dispatch_kind!(arg.values.kind, report(arg, toolkit))?;
    Output::save_json(&report, arg.output.as_deref())
}

fn report<T>(
    arg: &StatsArg,
    toolkit: &Toolkit<'_, impl Tracer>,
) -> anyhow::Result<serde_json::Value>
where
    T: Numeric + FromStr + Serialize + serde::de::DeserializeOwned,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let values = arg.values.load::<T>()?;
    let stats = toolkit
        .stats(&values)
        .with_context(|| format!("Failed to compute statistics of {} values", values.len()))?;
    let report = StatsReport {
        kind: arg.values.kind,
        count: values.len(),
        stats,
    };
    Ok(serde_json::to_value(report)?)
}

#[cfg(test)]
mod tests {
    use fixkit_core::NoTrace;

    use super::*;

    fn stats_arg(kind: ElementKind, values: &[&str]) -> StatsArg {
        StatsArg {
            values: ValuesArg {
                kind,
                input: None,
                values: values.iter().map(|v| (*v).to_owned()).collect(),
            },
            output: None,
        }
    }

    #[test]
    fn test_report_for_integer_buffer() {
        let arg = stats_arg(ElementKind::I32, &["3", "1", "4", "1", "5"]);
        let report = report::<i32>(&arg, &Toolkit::new(&NoTrace)).unwrap();
        assert_eq!(
            report,
            serde_json::json!({
                "kind": "i32",
                "count": 5,
                "min": 1,
                "max": 5,
                "mean": 2.8,
                "range": 4,
            })
        );
    }

    #[test]
    fn test_empty_buffer_is_an_error() {
        let arg = stats_arg(ElementKind::F64, &[]);
        let err = report::<f64>(&arg, &Toolkit::new(&NoTrace)).unwrap_err();
        assert!(err.to_string().contains("Failed to compute statistics"));
    }

    #[test]
    fn test_run_writes_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stats.json");
        let mut arg = stats_arg(ElementKind::U64, &["10", "30"]);
        arg.output = Some(path.clone());

        run(&arg, &Toolkit::untraced()).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(written["mean"], 20.0);
        assert_eq!(written["range"], 20);
    }
}
