//! Platform backends for the description lookup.
//!
//! Exactly one backend is compiled in, selected by target capability:
//!
//! - `strsignal`: Unix targets, wrapping the native `strsignal(3)` facility
//! - `siglist`: Windows targets, a static table of the C-runtime signals
//! - `unsupported`: every other target; lookups always miss
//!
//! Resolving the choice at build time means a single lookup can never mix
//! data from two platform sources: where the native facility exists, the
//! static table is not even compiled.
//!
//! Every backend exposes the same interface,
//! `with_description(signum, closure)`, handing the closure a borrowed view
//! of the platform's text scoped to the call, or `None` on a miss. The
//! shared fallback text lives with the caller, not here.

#[cfg(unix)]
mod strsignal;
#[cfg(unix)]
pub(crate) use strsignal::with_description;

#[cfg(windows)]
mod siglist;
#[cfg(windows)]
pub(crate) use siglist::with_description;

#[cfg(not(any(unix, windows)))]
mod unsupported;
#[cfg(not(any(unix, windows)))]
pub(crate) use unsupported::with_description;
