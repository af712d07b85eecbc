use std::path::PathBuf;

use fixkit_core::{TemperatureUnit, Toolkit, Tracer};
use serde::Serialize;

use crate::util::Output;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct ConvertArg {
    /// Unit of the given temperatures
    #[arg(long, default_value = "celsius")]
    pub(crate) from: TemperatureUnit,
    /// Unit to convert to
    #[arg(long, default_value = "fahrenheit")]
    pub(crate) to: TemperatureUnit,
    /// Lowest acceptable converted value
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) low: Option<f64>,
    /// Highest acceptable converted value
    #[arg(long, allow_negative_numbers = true)]
    pub(crate) high: Option<f64>,
    /// Temperatures to convert
    #[arg(required = true, allow_negative_numbers = true)]
    pub(crate) temperatures: Vec<f64>,
    /// Output file path
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

#[derive(Debug, PartialEq, Serialize)]
struct Conversion {
    from: TemperatureUnit,
    to: TemperatureUnit,
    input: f64,
    output: f64,
}

pub(crate) fn run(arg: &ConvertArg, toolkit: &Toolkit<'_, impl Tracer>) -> anyhow::Result<()> {
    let conversions = convert(arg, toolkit);
    Output::save_json(&conversions, arg.output.as_deref())
}

fn convert(arg: &ConvertArg, toolkit: &Toolkit<'_, impl Tracer>) -> Vec<Conversion> {
    let low = arg.low.unwrap_or(f64::NEG_INFINITY);
    let high = arg.high.unwrap_or(f64::INFINITY);

    arg.temperatures
        .iter()
        .map(|&input| {
            let output = match (arg.from, arg.to) {
                (TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit) => {
                    toolkit.celsius_to_fahrenheit(input, low, high)
                }
                (TemperatureUnit::Fahrenheit, TemperatureUnit::Celsius) => {
                    toolkit.fahrenheit_to_celsius(input, low, high)
                }
                (from, to) => from.convert(to, input, low, high),
            };
            Conversion {
                from: arg.from,
                to: arg.to,
                input,
                output,
            }
        })
        .collect()
}
