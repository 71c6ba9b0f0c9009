//! Unix integration test: describe the signal that terminated a real child
//! process, the way exit-status decoders consume this crate.

#![cfg(unix)]

use sigdesc::prelude::*;
use std::os::unix::process::ExitStatusExt;
use std::process::Command;

#[test]
#[allow(clippy::expect_used, clippy::panic)] // Integration tests can panic on infra failures
fn test_child_termination_signal_is_described() {
    for expected in [libc::SIGKILL, libc::SIGTERM] {
        // The shell signals itself, so the parent observes a signal exit.
        let status = Command::new("sh")
            .arg("-c")
            .arg(format!("kill -{expected} $$"))
            .status()
            .expect("failed to spawn child shell");

        let signum = status
            .signal()
            .unwrap_or_else(|| panic!("child did not exit on a signal: {status:?}"));
        assert_eq!(signum, expected);

        let text = describe(signum).to_string();
        assert!(!text.is_empty());
        assert_ne!(text, UNRECOGNIZED_SIGNAL);
        assert!(name(signum).is_some(), "signal {signum} should have a name");
    }
}
