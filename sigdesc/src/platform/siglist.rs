/// Static-table backend for targets without a native describe facility.
///
/// The C runtime on Windows defines a handful of signal numbers but no
/// `strsignal`, so the crate carries its own description table, indexed by
/// signal number the way `sys_siglist` is. Numbers the runtime leaves
/// undefined stay `None` and fall through to the caller's fallback text.
use std::ffi::c_int;

/// Number of signal slots, per MSVC `signal.h`.
const NSIG: usize = 23;

const SIGLIST: [Option<&str>; NSIG] = [
    None,                               // 0
    None,                               // 1
    Some("Interrupt"),                  // 2  SIGINT
    None,                               // 3
    Some("Illegal instruction"),        // 4  SIGILL
    None,                               // 5
    None,                               // 6
    None,                               // 7
    Some("Floating point exception"),   // 8  SIGFPE
    None,                               // 9
    None,                               // 10
    Some("Segmentation fault"),         // 11 SIGSEGV
    None,                               // 12
    None,                               // 13
    None,                               // 14
    Some("Terminated"),                 // 15 SIGTERM
    None,                               // 16
    None,                               // 17
    None,                               // 18
    None,                               // 19
    None,                               // 20
    Some("Ctrl-Break"),                 // 21 SIGBREAK
    Some("Aborted"),                    // 22 SIGABRT
];

/// Call `f` with the table entry for `signum`, or `None` when the number is
/// out of range or lands on a gap.
pub(crate) fn with_description<R>(signum: c_int, f: impl FnOnce(Option<&str>) -> R) -> R {
    let entry = usize::try_from(signum)
        .ok()
        .filter(|&index| index > 0)
        .and_then(|index| SIGLIST.get(index))
        .copied()
        .flatten();
    f(entry)
}
