// pipeline.rs

use std::os::unix::io::RawFd;

use nix::unistd::{close, dup2, fork, pipe, ForkResult, Pid};

use crate::error::ShellError;
use crate::exec::{exec_image, reap};
use crate::parser;
use crate::vars::VarStore;

/// Runs `segments` as one pipeline, at least two stages, wiring stage i's
/// stdout to stage i+1's stdin. Each stage tokenizes its own segment inside
/// its child. A pipe or fork failure here is fatal to the interpreter.
pub fn run(segments: &[&str], vars: &VarStore) -> Result<(), ShellError> {
    let mut pipes: Vec<(RawFd, RawFd)> = Vec::with_capacity(segments.len() - 1);
    for _ in 0..segments.len() - 1 {
        match pipe() {
            Ok(ends) => pipes.push(ends),
            Err(err) => {
                close_all(&pipes);
                return Err(ShellError::Pipe(err));
            }
        }
    }

    let mut children: Vec<Pid> = Vec::with_capacity(segments.len());
    for (i, segment) in segments.iter().enumerate() {
        match unsafe { fork() } {
            Ok(ForkResult::Child) => {
                if i > 0 {
                    dup2(pipes[i - 1].0, 0).ok();
                }
                if i < segments.len() - 1 {
                    dup2(pipes[i].1, 1).ok();
                }
                // Duplicated or not, every original pipe end gets closed
                // here; a leaked write end would hold a reader open forever.
                close_all(&pipes);
                let args = parser::tokenize(segment, vars);
                if args.is_empty() {
                    unsafe { libc::_exit(0) };
                }
                exec_image(&args);
            }
            Ok(ForkResult::Parent { child }) => children.push(child),
            Err(err) => {
                close_all(&pipes);
                return Err(ShellError::Fork(err));
            }
        }
    }

    // The last stage only sees EOF once the parent's copies are gone too.
    close_all(&pipes);
    for child in children {
        reap(child);
    }
    Ok(())
}

fn close_all(pipes: &[(RawFd, RawFd)]) {
    for (read_end, write_end) in pipes {
        close(*read_end).ok();
        close(*write_end).ok();
    }
}
