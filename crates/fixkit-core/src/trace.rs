//! Injected trace output for toolkit calls.
//!
//! A [`Tracer`] is handed to a [`Toolkit`] explicitly; nothing in this crate
//! writes trace output through global state. Choose [`NoTrace`] to compile the
//! calls down to nothing, [`TracingTracer`] to route through the `tracing`
//! ecosystem, or [`WriteTracer`] to write lines to any byte sink such as a
//! serial port wrapper.

use std::{
    fmt,
    io::{self, Write as _},
    sync::{Mutex, PoisonError},
};

use num_traits::Float;

use crate::{
    Numeric,
    shift::{self, EmptyBufferError},
    sort,
    stats::{ArrayStats, StatsError},
    temperature,
};

/// Destination for trace messages emitted by toolkit operations.
pub trait Tracer {
    /// Whether messages are wanted at all.
    ///
    /// Callers skip formatting entirely when this returns `false`.
    fn enabled(&self) -> bool {
        true
    }

    /// Records one message produced while running `operation`.
    fn trace(&self, operation: &'static str, message: fmt::Arguments<'_>);

    /// Pushes any buffered output to the underlying sink.
    fn flush(&self) {}
}

impl<R> Tracer for &R
where
    R: Tracer + ?Sized,
{
    fn enabled(&self) -> bool {
        (**self).enabled()
    }

    fn trace(&self, operation: &'static str, message: fmt::Arguments<'_>) {
        (**self).trace(operation, message);
    }

    fn flush(&self) {
        (**self).flush();
    }
}

/// Tracer that discards everything.
#[derive(Default, Debug, Clone, Copy)]
pub struct NoTrace;

impl Tracer for NoTrace {
    fn enabled(&self) -> bool {
        false
    }

    fn trace(&self, _operation: &'static str, _message: fmt::Arguments<'_>) {}
}

/// Tracer that emits `DEBUG` events with target `fixkit`.
#[derive(Default, Debug, Clone, Copy)]
pub struct TracingTracer;

impl Tracer for TracingTracer {
    fn enabled(&self) -> bool {
        tracing::enabled!(target: "fixkit", tracing::Level::DEBUG)
    }

    fn trace(&self, operation: &'static str, message: fmt::Arguments<'_>) {
        tracing::debug!(target: "fixkit", operation, "{message}");
    }
}

/// Tracer that writes `operation: message` lines to a byte sink.
///
/// Write errors are dropped; tracing never changes the outcome of an operation.
///
/// # Example
///
/// ```
/// use fixkit_core::{Toolkit, WriteTracer};
///
/// let tracer = WriteTracer::new(Vec::new());
/// let mut buf = [3, 1, 2];
/// Toolkit::new(&tracer).sort_ascending(&mut buf);
///
/// let output = String::from_utf8(tracer.into_inner()).unwrap();
/// assert!(output.starts_with("sort_ascending: "));
/// ```
#[derive(Debug, Default)]
pub struct WriteTracer<W> {
    sink: Mutex<W>,
}

impl<W> WriteTracer<W>
where
    W: io::Write,
{
    pub fn new(sink: W) -> Self {
        Self {
            sink: Mutex::new(sink),
        }
    }

    /// Returns the sink, including everything written to it.
    pub fn into_inner(self) -> W {
        self.sink.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W> Tracer for WriteTracer<W>
where
    W: io::Write,
{
    fn trace(&self, operation: &'static str, message: fmt::Arguments<'_>) {
        let mut sink = self.sink.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = writeln!(sink, "{operation}: {message}");
    }

    fn flush(&self) {
        let mut sink = self.sink.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = sink.flush();
    }
}

/// Toolkit operations bound to an injected [`Tracer`].
///
/// Each method forwards to the free function of the same name and reports
/// its input and outcome to the tracer. Results are identical to the
/// untraced functions.
#[derive(Debug)]
pub struct Toolkit<'a, R: ?Sized> {
    tracer: &'a R,
}

impl Toolkit<'static, NoTrace> {
    /// Toolkit that traces nothing.
    #[must_use]
    pub fn untraced() -> Self {
        Self { tracer: &NoTrace }
    }
}

impl<'a, R> Toolkit<'a, R>
where
    R: Tracer + ?Sized,
{
    pub fn new(tracer: &'a R) -> Self {
        Self { tracer }
    }

    #[must_use]
    pub fn tracer(&self) -> &'a R {
        self.tracer
    }

    fn emit(&self, operation: &'static str, message: fmt::Arguments<'_>) {
        if self.tracer.enabled() {
            self.tracer.trace(operation, message);
        }
    }

    pub fn stats<T>(&self, values: &[T]) -> Result<ArrayStats<T>, StatsError>
    where
        T: Numeric,
    {
        let result = ArrayStats::new(values);
        self.emit("stats", format_args!("{} values -> {result:?}", values.len()));
        result
    }

    pub fn shift_insert_front<T>(&self, buf: &mut [T], value: T) -> Result<T, EmptyBufferError>
    where
        T: Copy + fmt::Debug,
    {
        let result = shift::shift_insert_front(buf, value);
        self.emit(
            "shift_insert_front",
            format_args!("inserted {value:?}, evicted {result:?}"),
        );
        result
    }

    pub fn shift_insert_back<T>(&self, buf: &mut [T], value: T) -> Result<T, EmptyBufferError>
    where
        T: Copy + fmt::Debug,
    {
        let result = shift::shift_insert_back(buf, value);
        self.emit(
            "shift_insert_back",
            format_args!("inserted {value:?}, evicted {result:?}"),
        );
        result
    }

    pub fn sort_ascending<T>(&self, buf: &mut [T])
    where
        T: Numeric,
    {
        sort::sort_ascending(buf);
        self.emit("sort_ascending", format_args!("{buf:?}"));
    }

    pub fn celsius_to_fahrenheit<T>(&self, celsius: T, low: T, high: T) -> T
    where
        T: Float + fmt::Debug,
    {
        let fahrenheit = temperature::celsius_to_fahrenheit(celsius, low, high);
        self.emit(
            "celsius_to_fahrenheit",
            format_args!("{celsius:?} C -> {fahrenheit:?} F in [{low:?}, {high:?}]"),
        );
        fahrenheit
    }

    pub fn fahrenheit_to_celsius<T>(&self, fahrenheit: T, low: T, high: T) -> T
    where
        T: Float + fmt::Debug,
    {
        let celsius = temperature::fahrenheit_to_celsius(fahrenheit, low, high);
        self.emit(
            "fahrenheit_to_celsius",
            format_args!("{fahrenheit:?} F -> {celsius:?} C in [{low:?}, {high:?}]"),
        );
        celsius
    }

    /// Flushes the tracer's sink.
    pub fn flush(&self) {
        self.tracer.flush();
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[derive(Default)]
    struct CountingTracer {
        enabled: bool,
        calls: Cell<usize>,
    }

    impl Tracer for CountingTracer {
        fn enabled(&self) -> bool {
            self.enabled
        }

        fn trace(&self, _operation: &'static str, _message: fmt::Arguments<'_>) {
            self.calls.set(self.calls.get() + 1);
        }
    }

    fn lines(tracer: WriteTracer<Vec<u8>>) -> Vec<String> {
        String::from_utf8(tracer.into_inner())
            .unwrap()
            .lines()
            .map(str::to_owned)
            .collect()
    }

    #[test]
    fn test_write_tracer_records_each_operation() {
        let tracer = WriteTracer::new(Vec::new());
        let toolkit = Toolkit::new(&tracer);

        let mut buf = [5, 3, 4, 1, 2];
        toolkit.sort_ascending(&mut buf);
        let stats = toolkit.stats(&buf).unwrap();
        toolkit.shift_insert_back(&mut buf, 6).unwrap();
        toolkit.celsius_to_fahrenheit(100.0_f32, 0.0, 300.0);
        toolkit.flush();

        assert_eq!(stats.mean, 3.0);
        assert_eq!(buf, [2, 3, 4, 5, 6]);

        let lines = lines(tracer);
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "sort_ascending: [1, 2, 3, 4, 5]");
        assert!(lines[1].starts_with("stats: 5 values -> Ok("));
        assert_eq!(lines[2], "shift_insert_back: inserted 6, evicted Ok(1)");
        assert_eq!(
            lines[3],
            "celsius_to_fahrenheit: 100.0 C -> 212.0 F in [0.0, 300.0]"
        );
    }

    #[test]
    fn test_errors_are_traced_and_returned() {
        let tracer = WriteTracer::new(Vec::new());
        let toolkit = Toolkit::new(&tracer);

        let mut empty: [f32; 0] = [];
        assert_eq!(
            toolkit.shift_insert_front(&mut empty, 1.0),
            Err(EmptyBufferError)
        );
        assert_eq!(toolkit.stats::<f32>(&[]), Err(StatsError::Empty));

        let lines = lines(tracer);
        assert_eq!(
            lines,
            [
                "shift_insert_front: inserted 1.0, evicted Err(EmptyBufferError)",
                "stats: 0 values -> Err(Empty)",
            ]
        );
    }

    #[test]
    fn test_disabled_tracer_receives_nothing() {
        let tracer = CountingTracer::default();
        let toolkit = Toolkit::new(&tracer);
        toolkit.fahrenheit_to_celsius(212.0_f64, -100.0, 100.0);
        assert_eq!(tracer.calls.get(), 0);

        let tracer = CountingTracer {
            enabled: true,
            ..CountingTracer::default()
        };
        let toolkit = Toolkit::new(&tracer);
        toolkit.fahrenheit_to_celsius(212.0_f64, -100.0, 100.0);
        assert_eq!(tracer.calls.get(), 1);
    }

    #[test]
    fn test_untraced_matches_free_functions() {
        let toolkit = Toolkit::untraced();
        assert_eq!(
            toolkit.celsius_to_fahrenheit(-1000.0_f32, 0.0, 100.0),
            temperature::celsius_to_fahrenheit(-1000.0_f32, 0.0, 100.0)
        );
        assert_eq!(toolkit.stats(&[1_u8, 2, 3]), ArrayStats::new(&[1_u8, 2, 3]));
    }

    #[test]
    fn test_tracing_tracer_without_subscriber_is_disabled() {
        assert!(!TracingTracer.enabled());
        Toolkit::new(&TracingTracer).stats(&[1.0_f64]).unwrap();
    }
}
