/// Native-facility backend wrapping `strsignal(3)`.
use std::ffi::{c_char, c_int, CStr};

extern "C" {
    // POSIX.1-2008; present on every Unix target this crate builds for.
    fn strsignal(signum: c_int) -> *mut c_char;
}

/// Call `f` with the platform's description of `signum`, or `None` when the
/// facility has nothing usable.
///
/// The borrow handed to the closure lasts only for the call: the platform is
/// allowed to reuse the returned buffer on a later `strsignal` invocation,
/// so the text is never handed out directly.
pub(crate) fn with_description<R>(signum: c_int, f: impl FnOnce(Option<&str>) -> R) -> R {
    // SAFETY: `strsignal` accepts any signal number and returns either NULL
    // or a pointer into libc-owned storage; it never returns a dangling
    // pointer.
    let ptr = unsafe { strsignal(signum) };
    if ptr.is_null() {
        return f(None);
    }
    // SAFETY: the pointer is non-NULL and addresses a NUL-terminated string
    // that stays valid at least until the next `strsignal` call on this
    // thread, which cannot happen while `f` runs.
    let text = unsafe { CStr::from_ptr(ptr) };
    // Signal descriptions are plain ASCII on real platforms; anything else
    // is treated as a miss rather than a panic.
    f(text.to_str().ok())
}
