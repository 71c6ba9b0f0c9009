//! The signal description operation.
//!
//! This is the one behavioral guarantee of the crate: for any integer signal
//! number, a non-empty description can be produced. Platforms whose native
//! facility may return a null result, platforms that only carry a static
//! signal table, and platforms with neither all end up at the same fixed
//! fallback text.

use std::ffi::c_int;
use std::fmt;

use crate::platform;

/// Fallback text used when no platform facility recognizes a signal number.
///
/// Callers print the numeric signal value alongside the description, so the
/// fallback does not repeat the number.
pub const UNRECOGNIZED_SIGNAL: &str = "unrecognized signal";

/// Return a displayable description of the given signal number.
///
/// Any integer is a valid input; negative, zero and out-of-range values all
/// resolve to the fallback text unless the platform facility claims them.
/// The call itself cannot fail and performs no work: the platform lookup
/// happens each time the returned value is formatted.
///
/// # Examples
///
/// ```
/// use sigdesc::describe;
///
/// // 2 is SIGINT on every platform that numbers signals at all.
/// let text = describe(2).to_string();
/// assert!(!text.is_empty());
/// ```
pub fn describe(signum: c_int) -> SignalDescription {
    SignalDescription { signum }
}

/// A signal number paired with its lazily-resolved description.
///
/// Formatting this value writes the platform's description of the signal, or
/// [`UNRECOGNIZED_SIGNAL`] when no facility recognizes the number. The
/// platform string is borrowed only for the duration of the write and is
/// never copied, matching the underlying facility's contract that its buffer
/// is only valid until the next call.
///
/// # Thread Safety
///
/// The value itself is `Copy + Send + Sync`; it holds no platform data.
/// Whether the native facility tolerates overlapping calls from several
/// threads is a property of the platform's libc, not of this type.
///
/// # Example
///
/// ```
/// let description = sigdesc::describe(11);
///
/// // Format it as often as needed; nothing to release afterwards.
/// let first = description.to_string();
/// let second = description.to_string();
/// assert_eq!(first, second);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SignalDescription {
    signum: c_int,
}

impl SignalDescription {
    /// The signal number this description was requested for.
    ///
    /// Diagnostic output should include it next to the description text,
    /// since the text alone may be ambiguous across platforms.
    pub fn signum(&self) -> c_int {
        self.signum
    }
}

impl fmt::Display for SignalDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        platform::with_description(self.signum, |text| {
            f.write_str(text.unwrap_or(UNRECOGNIZED_SIGNAL))
        })
    }
}
