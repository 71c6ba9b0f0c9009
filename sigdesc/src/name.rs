//! Signal-name lookup.
//!
//! Companion tables to the description lookup: the conventional `SIGxxx`
//! identifiers for the signals a target is known to define. Unlike the
//! descriptions, these are crate-owned data on every platform, so the
//! results are `'static` and the tables double as the list of names the
//! inverse lookup accepts.

use std::ffi::c_int;

struct Details {
    signum: c_int,
    name: &'static str,
}

#[cfg(unix)]
macro_rules! s {
    ($name:ident) => {
        Details {
            signum: libc::$name,
            name: stringify!($name),
        }
    };
}

// The portable POSIX set; numbering comes from libc for the target, so the
// same table serves Linux, the BSDs, macOS and the Solaris family.
#[cfg(unix)]
const DETAILS: &[Details] = &[
    s!(SIGABRT),
    s!(SIGALRM),
    s!(SIGBUS),
    s!(SIGCHLD),
    s!(SIGCONT),
    s!(SIGFPE),
    s!(SIGHUP),
    s!(SIGILL),
    s!(SIGINT),
    s!(SIGIO),
    s!(SIGKILL),
    s!(SIGPIPE),
    s!(SIGPROF),
    s!(SIGQUIT),
    s!(SIGSEGV),
    s!(SIGSTOP),
    s!(SIGSYS),
    s!(SIGTERM),
    s!(SIGTRAP),
    s!(SIGTSTP),
    s!(SIGTTIN),
    s!(SIGTTOU),
    s!(SIGURG),
    s!(SIGUSR1),
    s!(SIGUSR2),
    s!(SIGVTALRM),
    s!(SIGWINCH),
    s!(SIGXCPU),
    s!(SIGXFSZ),
];

// The C-runtime signals, numbered per MSVC `signal.h`.
#[cfg(windows)]
const DETAILS: &[Details] = &[
    Details { signum: 2, name: "SIGINT" },
    Details { signum: 4, name: "SIGILL" },
    Details { signum: 8, name: "SIGFPE" },
    Details { signum: 11, name: "SIGSEGV" },
    Details { signum: 15, name: "SIGTERM" },
    Details { signum: 21, name: "SIGBREAK" },
    Details { signum: 22, name: "SIGABRT" },
];

#[cfg(not(any(unix, windows)))]
const DETAILS: &[Details] = &[];

/// Conventional name of a signal number, e.g. `Some("SIGTERM")`.
///
/// Only signals the target is known to define have names; for anything else
/// this returns `None`. Note that [`describe`](crate::describe) may still
/// have a description for numbers without a name here, since the native
/// facility knows more signals than the portable set.
///
/// # Examples
///
/// ```
/// use sigdesc::name;
///
/// if let Some(text) = name(15) {
///     assert_eq!(text, "SIGTERM");
/// }
/// assert_eq!(name(142), None);
/// ```
pub fn name(signum: c_int) -> Option<&'static str> {
    DETAILS.iter().find(|d| d.signum == signum).map(|d| d.name)
}

/// Signal number for a `SIGxxx` name.
///
/// Matching is ASCII case-insensitive and the `SIG` prefix is optional, so
/// `"SIGINT"`, `"sigint"` and `"INT"` all resolve to the same number.
///
/// # Examples
///
/// ```
/// use sigdesc::from_name;
///
/// assert_eq!(from_name("sigterm"), from_name("TERM"));
/// assert_eq!(from_name("no-such-signal"), None);
/// ```
pub fn from_name(query: &str) -> Option<c_int> {
    DETAILS
        .iter()
        .find(|d| matches_name(d.name, query))
        .map(|d| d.signum)
}

fn matches_name(full: &'static str, query: &str) -> bool {
    full.eq_ignore_ascii_case(query)
        || full
            .strip_prefix("SIG")
            .is_some_and(|short| short.eq_ignore_ascii_case(query))
}
