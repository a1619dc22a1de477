use std::io::Write;

/// Where user-facing status goes. Injected so tests can capture or silence it.
pub trait Reporter: Send + Sync {
    /// A full line on stdout.
    fn line(&self, message: &str);

    /// Stdout without a newline, for lines overwritten in place.
    fn transient(&self, message: &str);

    /// A message on stderr.
    fn error(&self, message: &str);
}

pub struct Console;

impl Reporter for Console {
    fn line(&self, message: &str) {
        let mut stdout = std::io::stdout().lock();
        let _ = writeln!(stdout, "{}", message);
        let _ = stdout.flush();
    }

    fn transient(&self, message: &str) {
        let mut stdout = std::io::stdout().lock();
        let _ = write!(stdout, "{}", message);
        let _ = stdout.flush();
    }

    fn error(&self, message: &str) {
        let _ = writeln!(std::io::stderr().lock(), "{}", message);
    }
}

/// Discards everything.
pub struct Quiet;

impl Reporter for Quiet {
    fn line(&self, _message: &str) {}
    fn transient(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
}
