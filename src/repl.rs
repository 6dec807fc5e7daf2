// repl.rs

use anyhow::{Context, Result};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{CompletionType, Config, Editor};

use crate::completion::ShellHelper;
use crate::shell::Shell;

pub fn run(shell: &mut Shell) -> Result<()> {
    let config = Config::builder()
        .completion_type(CompletionType::List)
        .build();
    let mut rl: Editor<ShellHelper, DefaultHistory> =
        Editor::with_config(config).context("cannot create line editor")?;
    rl.set_helper(Some(ShellHelper::new()));
    loop {
        match rl.readline("wsh> ") {
            Ok(line) => {
                // Arrow-key recall only; the interpreter's own log lives in
                // Shell and neither one is written to disk.
                let _ = rl.add_history_entry(line.as_str());
                shell.execute_line(&line)?;
                if shell.should_exit {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err).context("cannot read input"),
        }
    }
    Ok(())
}
