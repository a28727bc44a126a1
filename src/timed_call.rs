//! Timed call wrapper
//!
//! Runs a fallible operation, measures how long it took, and folds both
//! outcomes into a single [`TimedResult`] so callers can inspect success,
//! value, error text and latency without matching on error types.

use std::fmt::Display;
use std::time::Instant;

/// Outcome of a timed operation
///
/// Either the operation's value or the text of its failure, together with
/// the wall-clock time spent until the operation returned.
#[derive(Debug, Clone, PartialEq)]
pub struct TimedResult<T> {
    /// The value on success, or the failure message
    pub result: Result<T, String>,
    /// Elapsed wall-clock time in milliseconds
    pub elapsed_ms: u64,
}

impl<T> TimedResult<T> {
    /// Returns true if the operation produced a value
    pub fn success(&self) -> bool {
        self.result.is_ok()
    }

    /// Returns the value if the operation succeeded
    pub fn value(&self) -> Option<&T> {
        self.result.as_ref().ok()
    }

    /// Returns the failure message if the operation failed
    pub fn error_message(&self) -> Option<&str> {
        self.result.as_ref().err().map(String::as_str)
    }

    /// Consumes the result and returns the value, if any
    pub fn into_value(self) -> Option<T> {
        self.result.ok()
    }
}

/// Executes `operation` and measures its elapsed time
///
/// This never fails: an `Err` returned by the operation is converted to its
/// display string and stored in the result alongside the time spent up to
/// the failure.
///
/// # Examples
///
/// ```
/// use addon_probe::timed;
///
/// let ok = timed(|| Ok::<_, String>(42));
/// assert!(ok.success());
/// assert_eq!(ok.value(), Some(&42));
///
/// let failed = timed(|| Err::<u32, _>("connection refused"));
/// assert_eq!(failed.error_message(), Some("connection refused"));
/// ```
pub fn timed<T, E, F>(operation: F) -> TimedResult<T>
where
    F: FnOnce() -> Result<T, E>,
    E: Display,
{
    let start = Instant::now();
    let result = operation().map_err(|e| e.to_string());

    TimedResult {
        result,
        elapsed_ms: start.elapsed().as_millis() as u64,
    }
}
