use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard};

use lazy_static::lazy_static;
use log::{error, log_enabled, Level};

type Output = Box<dyn Write + Send>;

lazy_static! {
    static ref OUTPUT: Mutex<Output> = Mutex::new(Box::new(LogOutput));
}

/// Default sink: the `log` facade when a logger is listening, stderr otherwise.
pub struct LogOutput;

impl Write for LogOutput {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if log_enabled!(Level::Error) {
            error!("{}", String::from_utf8_lossy(buf).trim_end());
            Ok(buf.len())
        } else {
            io::stderr().write(buf)
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()
    }
}

fn output() -> MutexGuard<'static, Output> {
    // A panic while the sink was held must not silence later diagnostics.
    OUTPUT.lock().unwrap_or_else(|e| e.into_inner())
}

/// Replaces the diagnostic sink, returning the one it replaced.
pub fn set_output(writer: Output) -> Output {
    std::mem::replace(&mut *output(), writer)
}

/// A sink that drops everything.
pub fn discard() -> Output {
    Box::new(io::sink())
}

/// Restores the previous sink when dropped.
pub struct OutputGuard {
    previous: Option<Output>,
}

impl Drop for OutputGuard {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            set_output(previous);
        }
    }
}

pub fn redirect_output(writer: Output) -> OutputGuard {
    OutputGuard {
        previous: Some(set_output(writer)),
    }
}

fn write_output(message: &str) {
    let mut out = output();
    let _ = out.write_all(message.as_bytes());
    let _ = out.flush();
}

/// Writes `message` to the sink and panics with it as the payload.
pub fn fatal(message: String) -> ! {
    write_output(&message);
    panic!("{}", message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::test_utils::{lock_global_state, panic_message, SharedBuffer};
    use std::panic::catch_unwind;

    #[test]
    fn fatal_writes_then_panics_with_message() {
        let _guard = lock_global_state();
        let buffer = SharedBuffer::default();
        let _output = redirect_output(Box::new(buffer.clone()));

        let result = catch_unwind(|| fatal("boom\n".to_string()));

        assert_eq!(panic_message(result.unwrap_err()), "boom\n");
        assert_eq!(buffer.contents(), "boom\n");
    }

    #[test]
    fn guard_restores_previous_output() {
        let _guard = lock_global_state();
        let outer = SharedBuffer::default();
        let inner = SharedBuffer::default();

        let _outer_output = redirect_output(Box::new(outer.clone()));
        {
            let _inner_output = redirect_output(Box::new(inner.clone()));
            write_output("first");
        }
        write_output("second");

        assert_eq!(inner.contents(), "first");
        assert_eq!(outer.contents(), "second");
    }

    #[test]
    fn set_output_hands_back_replaced_sink() {
        let _guard = lock_global_state();
        let buffer = SharedBuffer::default();

        let original = set_output(Box::new(buffer.clone()));
        let mut replaced = set_output(original);
        replaced.write_all(b"direct").unwrap();

        assert_eq!(buffer.contents(), "direct");
    }

    struct CapturingLogger {
        records: Mutex<Vec<String>>,
    }

    impl log::Log for CapturingLogger {
        fn enabled(&self, metadata: &log::Metadata) -> bool {
            metadata.level() <= Level::Error
        }

        fn log(&self, record: &log::Record) {
            if self.enabled(record.metadata()) {
                let mut records = self.records.lock().unwrap_or_else(|e| e.into_inner());
                records.push(record.args().to_string());
            }
        }

        fn flush(&self) {}
    }

    lazy_static! {
        static ref LOGGER: CapturingLogger = CapturingLogger {
            records: Mutex::new(Vec::new()),
        };
    }

    #[test]
    fn default_output_forwards_once_to_installed_logger() {
        let _guard = lock_global_state();
        // Only this test installs a logger; everything else redirects the sink.
        let _ = log::set_logger(&*LOGGER);
        log::set_max_level(log::LevelFilter::Error);

        let written = LogOutput.write(b"key \"k\" not found in Map (0x1)\n").unwrap();

        assert_eq!(written, 31);
        let records = LOGGER.records.lock().unwrap();
        assert_eq!(records.as_slice(), ["key \"k\" not found in Map (0x1)"]);
    }

    #[test]
    fn discard_accepts_writes() {
        let mut sink = discard();
        sink.write_all(b"ignored").unwrap();
    }
}
