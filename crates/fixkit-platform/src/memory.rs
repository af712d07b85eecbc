use std::{
    fs, io,
    path::{Path, PathBuf},
};

/// Source of a free-memory estimate for the running platform.
///
/// The unit is bytes for every implementation in this crate. What "free"
/// means is platform-defined: the gap between heap and stack on a bare-metal
/// microcontroller, the kernel's available-memory estimate on Linux.
pub trait MemoryProbe {
    fn free_memory(&self) -> Result<usize, ProbeError>;
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum ProbeError {
    #[display("free-memory probing is not supported on this platform")]
    Unsupported,
    #[display("failed to read {}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[display("no MemAvailable entry found")]
    Missing,
    #[display("malformed MemAvailable line: {line:?}")]
    Malformed { line: String },
}

/// Probe for platforms without a free-memory equivalent.
#[derive(Default, Debug, Clone, Copy)]
pub struct UnsupportedProbe;

impl MemoryProbe for UnsupportedProbe {
    fn free_memory(&self) -> Result<usize, ProbeError> {
        Err(ProbeError::Unsupported)
    }
}

/// Heap and stack markers of a single-address-space microcontroller.
///
/// The heap grows upward from `heap_start`; `heap_break` is the current top of
/// the heap, or `None` before the first allocation. The stack grows downward
/// toward it, and `stack_pointer` is its current end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreakMarkers {
    pub heap_start: usize,
    pub heap_break: Option<usize>,
    pub stack_pointer: usize,
}

impl BreakMarkers {
    /// Bytes between the top of the heap and the end of the stack.
    ///
    /// Zero when the stack has already run into the heap.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixkit_platform::BreakMarkers;
    ///
    /// let markers = BreakMarkers {
    ///     heap_start: 0x0200,
    ///     heap_break: None,
    ///     stack_pointer: 0x08f0,
    /// };
    /// assert_eq!(markers.free_gap(), 0x06f0);
    /// ```
    #[must_use]
    pub fn free_gap(&self) -> usize {
        let heap_top = self.heap_break.unwrap_or(self.heap_start);
        self.stack_pointer.saturating_sub(heap_top)
    }
}

/// Probe that estimates free memory from [`BreakMarkers`].
///
/// `read_markers` is supplied by the board support code, which knows where
/// its linker places the heap symbols and how to read the stack pointer.
#[derive(Debug, Clone)]
pub struct MarkerProbe<F> {
    read_markers: F,
}

impl<F> MarkerProbe<F>
where
    F: Fn() -> BreakMarkers,
{
    pub fn new(read_markers: F) -> Self {
        Self { read_markers }
    }
}

impl<F> MemoryProbe for MarkerProbe<F>
where
    F: Fn() -> BreakMarkers,
{
    fn free_memory(&self) -> Result<usize, ProbeError> {
        Ok((self.read_markers)().free_gap())
    }
}

/// Probe reading `MemAvailable` from a Linux `meminfo` file.
#[derive(Debug, Clone)]
pub struct MemInfoProbe {
    path: PathBuf,
}

impl Default for MemInfoProbe {
    fn default() -> Self {
        Self::new("/proc/meminfo")
    }
}

impl MemInfoProbe {
    pub fn new<P>(path: P) -> Self
    where
        P: Into<PathBuf>,
    {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl MemoryProbe for MemInfoProbe {
    fn free_memory(&self) -> Result<usize, ProbeError> {
        let text = fs::read_to_string(&self.path).map_err(|source| ProbeError::Read {
            path: self.path.clone(),
            source,
        })?;
        let available = parse_meminfo(&text)?;
        tracing::debug!(path = %self.path.display(), available, "read available memory");
        Ok(available)
    }
}

/// Extracts the `MemAvailable` entry of `meminfo` text, in bytes.
///
/// Values without a unit are taken as bytes; `kB` values are scaled by 1024.
///
/// # Examples
///
/// ```
/// use fixkit_platform::parse_meminfo;
///
/// let text = "MemTotal:       16314172 kB\nMemAvailable:    8123456 kB\n";
/// assert_eq!(parse_meminfo(text).unwrap(), 8_123_456 * 1024);
/// ```
pub fn parse_meminfo(text: &str) -> Result<usize, ProbeError> {
    let (line, rest) = text
        .lines()
        .find_map(|line| line.strip_prefix("MemAvailable:").map(|rest| (line, rest)))
        .ok_or(ProbeError::Missing)?;
    let malformed = || ProbeError::Malformed {
        line: line.to_owned(),
    };

    let mut fields = rest.split_whitespace();
    let value = fields
        .next()
        .and_then(|v| v.parse::<usize>().ok())
        .ok_or_else(malformed)?;
    let scale = match fields.next() {
        None => 1,
        Some("kB") => 1024,
        Some(_) => return Err(malformed()),
    };
    value.checked_mul(scale).ok_or_else(malformed)
}

/// The best available probe for the platform this was compiled for.
#[must_use]
pub fn default_probe() -> Box<dyn MemoryProbe> {
    if cfg!(target_os = "linux") {
        Box::new(MemInfoProbe::default())
    } else {
        Box::new(UnsupportedProbe)
    }
}
