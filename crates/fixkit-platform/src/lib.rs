//! Platform-bound probes for the fixkit toolkit.
//!
//! The toolkit itself is portable; anything that depends on the memory layout
//! or operating system of the target lives here behind a capability trait, so
//! callers pick the implementation for their platform.

pub use self::memory::*;

mod memory;
