// exec.rs

use std::ffi::CString;

use nix::sys::wait::{waitpid, WaitPidFlag, WaitStatus};
use nix::unistd::{execvp, fork, ForkResult, Pid};

/// Forks and runs one external command, blocking until it terminates.
/// Failures are reported on stderr; none of them end the interpreter.
pub fn run_external(args: &[String]) {
    match unsafe { fork() } {
        Ok(ForkResult::Child) => exec_image(args),
        Ok(ForkResult::Parent { child }) => reap(child),
        Err(err) => eprintln!("wsh: fork: {}", err),
    }
}

/// Replaces the current process image with `args[0]`, searching PATH and
/// passing the whole vector as argv. Only runs in a forked child; on
/// failure the child leaves with status 127 and never unwinds back into
/// the caller's loop.
pub fn exec_image(args: &[String]) -> ! {
    let cmd = CString::new(args[0].as_str()).unwrap_or_default();
    let argv: Vec<CString> = args
        .iter()
        .map(|arg| CString::new(arg.as_str()).unwrap_or_default())
        .collect();
    let _ = execvp(&cmd, &argv);
    eprintln!("wsh: command not found: {}", args[0]);
    unsafe { libc::_exit(127) }
}

/// Waits until `child` exits or dies to a signal. A stopped child is not
/// terminal, so the wait keeps going past it.
pub fn reap(child: Pid) {
    loop {
        match waitpid(child, Some(WaitPidFlag::WUNTRACED)) {
            Ok(WaitStatus::Exited(..)) | Ok(WaitStatus::Signaled(..)) | Err(_) => break,
            _ => {}
        }
    }
}
