//! Exit handling: signal handlers and terminal restore on abnormal exit.
//!
//! The [`TerminalSession`](crate::terminal::TerminalSession) guard restores the
//! terminal on normal return and on panic. Signals and `process::exit` skip
//! destructors, so the same restore runs from `atexit` as well.

/// Show cursor, stop mouse reporting, leave the alternate screen.
const RESTORE_SEQUENCE: &[u8] =
    b"\x1b[0m\x1b[?25h\x1b[?1006l\x1b[?1015l\x1b[?1003l\x1b[?1002l\x1b[?1000l\x1b[?1049l";

/// Reset terminal to sane state using termios directly
fn reset_terminal_termios() {
    unsafe {
        let mut termios: libc::termios = std::mem::zeroed();
        if libc::tcgetattr(0, &mut termios) == 0 {
            termios.c_oflag |= libc::OPOST | libc::ONLCR;
            termios.c_lflag |= libc::ICANON | libc::ECHO | libc::ISIG;
            libc::tcsetattr(0, libc::TCSANOW, &termios);
        }
    }
}

/// Terminal modes and escape state back to normal. Async-signal-safe.
fn restore_terminal() {
    reset_terminal_termios();
    // Escape codes only make sense on a tty
    unsafe {
        if libc::isatty(1) == 1 {
            libc::write(
                1,
                RESTORE_SEQUENCE.as_ptr() as *const libc::c_void,
                RESTORE_SEQUENCE.len(),
            );
        }
    }
}

extern "C" fn cleanup_on_exit() {
    restore_terminal();
}

/// Signal handler for SIGINT/SIGTERM/SIGHUP - exit cleanly, atexit handles cleanup
extern "C" fn signal_handler(_: libc::c_int) {
    unsafe { libc::exit(130) }
}

/// Crash handler for SIGSEGV/SIGABRT - restore the terminal, then re-raise for core dump
extern "C" fn crash_handler(sig: libc::c_int) {
    restore_terminal();
    unsafe {
        libc::signal(sig, libc::SIG_DFL);
        libc::raise(sig);
    }
}

/// Install all signal handlers and register atexit cleanup.
/// Call this early in main().
pub fn install_handlers() {
    unsafe {
        libc::atexit(cleanup_on_exit);
        for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
            libc::signal(sig, signal_handler as *const () as libc::sighandler_t);
        }
        for sig in [libc::SIGSEGV, libc::SIGABRT] {
            libc::signal(sig, crash_handler as *const () as libc::sighandler_t);
        }
    }
}

/// Keep this process out of core dumps and ptrace attach by other users.
pub fn harden() {
    #[cfg(target_os = "linux")]
    unsafe {
        libc::prctl(libc::PR_SET_DUMPABLE, 0);
    }
}
