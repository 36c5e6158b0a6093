//! Wall-clock port for submission timestamps.
//!
//! The submission record carries a human-readable timestamp. Injecting the
//! clock lets tests pin time instead of parsing `Local::now()` output.

/// Source of the human-readable wall-clock timestamp.
pub trait Clock: Send + Sync + 'static {
    /// Current local time, formatted for display.
    fn timestamp(&self) -> String;
}

/// Production clock backed by `chrono::Local`.
#[derive(Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn timestamp(&self) -> String {
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

/// Clock returning a fixed timestamp, for deterministic tests.
#[derive(Clone)]
pub struct FixedClock(pub String);

impl Clock for FixedClock {
    fn timestamp(&self) -> String {
        self.0.clone()
    }
}
