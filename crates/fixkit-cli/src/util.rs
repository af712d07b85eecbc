use std::{
    fmt,
    fs::File,
    io::{self, BufWriter, StdoutLock, Write as _},
    path::{Path, PathBuf},
    str::FromStr,
};

use anyhow::Context;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
pub enum Output {
    Stdout {
        writer: StdoutLock<'static>,
    },
    File {
        writer: BufWriter<File>,
        path: PathBuf,
    },
}

impl Output {
    pub fn save_json<T>(value: &T, output_path: Option<&Path>) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        let mut output = Output::from_output_path(output_path)?;
        output.write_json(value)
    }

    pub fn from_output_path(output_path: Option<&Path>) -> anyhow::Result<Self> {
        match output_path {
            Some(path) => Output::open(path),
            None => Ok(Output::stdout()),
        }
    }

    pub fn stdout() -> Self {
        Output::Stdout {
            writer: io::stdout().lock(),
        }
    }

    pub fn open(path: &Path) -> anyhow::Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        Ok(Output::File {
            writer: BufWriter::new(file),
            path: path.to_owned(),
        })
    }

    pub fn display_path(&self) -> String {
        match self {
            Output::Stdout { .. } => "stdout".to_string(),
            Output::File { path, .. } => path.display().to_string(),
        }
    }

    pub fn write_json<T>(&mut self, value: T) -> anyhow::Result<()>
    where
        T: serde::Serialize,
    {
        serde_json::to_writer_pretty(&mut *self, &value)
            .with_context(|| format!("Failed to write JSON to {}", self.display_path()))?;
        writeln!(&mut *self).with_context(|| {
            format!(
                "Failed to write newline after JSON to {}",
                self.display_path()
            )
        })?;
        self.flush()
            .with_context(|| format!("Failed to flush output to {}", self.display_path()))?;
        Ok(())
    }
}

impl io::Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Stdout { writer } => writer.write(buf),
            Output::File { writer, .. } => writer.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Stdout { writer } => writer.flush(),
            Output::File { writer, .. } => writer.flush(),
        }
    }
}

pub fn read_json_file<T, P>(file_kind: &str, path: P) -> anyhow::Result<T>
where
    T: serde::de::DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open {} file: {}", file_kind, path.display()))?;

    let reader = io::BufReader::new(file);
    let value = serde_json::from_reader(reader).with_context(|| {
        format!(
            "Failed to parse {} JSON file: {}",
            file_kind,
            path.display()
        )
    })?;

    Ok(value)
}

/// Installs the stderr log subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `debug` when verbose, `info` if not.
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Element type of the buffer a command operates on.
#[derive(
    Default,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    derive_more::Display,
    derive_more::FromStr,
)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    #[display("i32")]
    I32,
    #[display("i64")]
    I64,
    #[display("u32")]
    U32,
    #[display("u64")]
    U64,
    #[display("f32")]
    F32,
    #[default]
    #[display("f64")]
    F64,
}

/// Buffer values given on the command line and/or in a JSON array file.
#[derive(Default, Debug, Clone, clap::Args)]
pub struct ValuesArg {
    /// Element type of the buffer
    #[arg(long, default_value = "f64")]
    pub kind: ElementKind,
    /// JSON file holding an array of values, read before any positional values
    #[arg(long)]
    pub input: Option<PathBuf>,
    /// Buffer values
    #[arg(allow_negative_numbers = true)]
    pub values: Vec<String>,
}

impl ValuesArg {
    /// Loads the buffer as element type `T`.
    pub fn load<T>(&self) -> anyhow::Result<Vec<T>>
    where
        T: FromStr + serde::de::DeserializeOwned,
        T::Err: std::error::Error + Send + Sync + 'static,
    {
        let mut buffer = match &self.input {
            Some(path) => read_json_file::<Vec<T>, _>("values", path)?,
            None => Vec::new(),
        };
        for value in &self.values {
            buffer.push(parse_value(self.kind, value)?);
        }
        Ok(buffer)
    }
}

pub fn parse_value<T>(kind: impl fmt::Display, text: &str) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    text.parse()
        .with_context(|| format!("Invalid {kind} value: {text:?}"))
}

/// Calls `$func::<T>($args..)` with `T` matching an [`ElementKind`].
macro_rules! dispatch_kind {
    ($kind:expr, $func:ident($($args:expr),* $(,)?)) => {
        match $kind {
            $crate::util::ElementKind::I32 => $func::<i32>($($args),*),
            $crate::util::ElementKind::I64 => $func::<i64>($($args),*),
            $crate::util::ElementKind::U32 => $func::<u32>($($args),*),
            $crate::util::ElementKind::U64 => $func::<u64>($($args),*),
            $crate::util::ElementKind::F32 => $func::<f32>($($args),*),
            $crate::util::ElementKind::F64 => $func::<f64>($($args),*),
        }
    };
}

pub(crate) use dispatch_kind;

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use super::*;

    fn values_arg(kind: ElementKind, values: &[&str]) -> ValuesArg {
        ValuesArg {
            kind,
            input: None,
            values: values.iter().map(|v| (*v).to_owned()).collect(),
        }
    }

    #[test]
    fn test_element_kind_parses_lowercase_names() {
        assert_eq!("i32".parse::<ElementKind>().unwrap(), ElementKind::I32);
        assert_eq!("u64".parse::<ElementKind>().unwrap(), ElementKind::U64);
        assert_eq!("f32".parse::<ElementKind>().unwrap(), ElementKind::F32);
        assert!("i128".parse::<ElementKind>().is_err());
        assert_eq!(ElementKind::default().to_string(), "f64");
    }

    #[test]
    fn test_load_positional_values() {
        let arg = values_arg(ElementKind::I32, &["3", "-1", "4"]);
        assert_eq!(arg.load::<i32>().unwrap(), [3, -1, 4]);
    }

    #[test]
    fn test_load_rejects_values_of_wrong_kind() {
        let arg = values_arg(ElementKind::U32, &["-1"]);
        let err = arg.load::<u32>().unwrap_err();
        assert!(err.to_string().contains("Invalid u32 value"));
    }

    #[test]
    fn test_load_file_then_positional_values() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[1.5, 2.5]").unwrap();

        let mut arg = values_arg(ElementKind::F64, &["3.5"]);
        arg.input = Some(file.path().to_owned());
        assert_eq!(arg.load::<f64>().unwrap(), [1.5, 2.5, 3.5]);
    }

    #[test]
    fn test_load_reports_unparsable_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"{\"not\": \"an array\"}").unwrap();

        let mut arg = values_arg(ElementKind::F64, &[]);
        arg.input = Some(file.path().to_owned());
        let err = arg.load::<f64>().unwrap_err();
        assert!(err.to_string().contains("Failed to parse values JSON file"));
    }
}
