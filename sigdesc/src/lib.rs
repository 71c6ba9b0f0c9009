//! Human-readable descriptions for Unix signal numbers.
//!
//! [`describe`] turns any integer signal number into a printable description,
//! regardless of platform support: Unix targets ask the native `strsignal(3)`
//! facility, Windows targets consult a built-in table of the C-runtime
//! signals, and every other target (and every number no facility recognizes)
//! falls back to the fixed text `"unrecognized signal"`. The lookup cannot
//! fail and never produces an empty result.
//!
//! Callers are expected to print the numeric value together with the
//! description, since the text alone can be ambiguous across platforms:
//!
//! ```
//! use sigdesc::describe;
//!
//! let signum = 6;
//! println!("child exited on signal {signum}: {}", describe(signum));
//! ```

mod describe;
mod name;
mod platform;

pub use crate::describe::{describe, SignalDescription, UNRECOGNIZED_SIGNAL};
pub use crate::name::{from_name, name};

///
/// Expose all items required in virtually any consumer of this crate
///
/// ```
/// use sigdesc::prelude::*;
/// ```
pub mod prelude {
    pub use crate::describe::{describe, SignalDescription, UNRECOGNIZED_SIGNAL};
    pub use crate::name::{from_name, name};
}
