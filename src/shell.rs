// shell.rs

use std::io::{self, Write};

use crate::builtins::{self, Dispatch};
use crate::error::ShellError;
use crate::exec;
use crate::history::History;
use crate::parser;
use crate::pipeline;
use crate::vars::VarStore;

/// Interpreter state shared by both front ends. One instance lives for the
/// whole session and is threaded through every line by mutable reference.
pub struct Shell {
    pub vars: VarStore,
    pub history: History,
    pub should_exit: bool,
}

impl Shell {
    pub fn new() -> Self {
        Self {
            vars: VarStore::new(),
            history: History::new(),
            should_exit: false,
        }
    }

    /// Runs one raw line to completion: pipe split, then builtin dispatch
    /// or process launch. Recoverable failures are reported where they
    /// happen; only pipeline setup failures come back as errors. External
    /// single commands are the only lines recorded in the history log.
    pub fn execute_line(&mut self, line: &str) -> Result<(), ShellError> {
        let segments = parser::split_pipeline(line);
        match segments.len() {
            0 => Ok(()),
            1 => self.run_single(line, segments[0]),
            _ => pipeline::run(&segments, &self.vars),
        }
    }

    fn run_single(&mut self, line: &str, segment: &str) -> Result<(), ShellError> {
        let args = parser::tokenize(segment, &self.vars);
        if args.is_empty() {
            return Ok(());
        }
        if let Dispatch::Handled = builtins::dispatch(self, &args, &mut io::stdout()) {
            let _ = io::stdout().flush();
            return Ok(());
        }
        self.history.push(line);
        exec::run_external(&args);
        Ok(())
    }
}
