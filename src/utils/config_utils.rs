use std::sync::atomic::{AtomicBool, Ordering};

// Each flag is read independently; nothing makes a pair of reads consistent
// with a concurrent writer.
static PANIC_WITH_VALUES: AtomicBool = AtomicBool::new(false);
static DISABLE_PANIC: AtomicBool = AtomicBool::new(false);

/// Include the whole map in the diagnostic when a key is missing.
pub fn panic_with_values() -> bool {
    PANIC_WITH_VALUES.load(Ordering::Relaxed)
}

/// Returns the previous value.
pub fn set_panic_with_values(value: bool) -> bool {
    PANIC_WITH_VALUES.swap(value, Ordering::Relaxed)
}

/// Return `None` instead of panicking when a key is missing.
pub fn disable_panic() -> bool {
    DISABLE_PANIC.load(Ordering::Relaxed)
}

/// Returns the previous value.
pub fn set_disable_panic(value: bool) -> bool {
    DISABLE_PANIC.swap(value, Ordering::Relaxed)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    pub panic_with_values: bool,
    pub disable_panic: bool,
}

impl Config {
    pub fn new(panic_with_values: bool, disable_panic: bool) -> Self {
        Config {
            panic_with_values,
            disable_panic,
        }
    }

    /// Snapshot of the process-wide flags.
    pub fn global() -> Self {
        Config::new(panic_with_values(), disable_panic())
    }

    /// Writes both fields to the process-wide flags and returns what they were.
    pub fn apply_global(self) -> Self {
        Config::new(
            set_panic_with_values(self.panic_with_values),
            set_disable_panic(self.disable_panic),
        )
    }

    pub fn with_panic_with_values(mut self, value: bool) -> Self {
        self.panic_with_values = value;
        self
    }

    pub fn with_disable_panic(mut self, value: bool) -> Self {
        self.disable_panic = value;
        self
    }
}
