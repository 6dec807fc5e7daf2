// batch.rs

use std::fs::File;
use std::io::{BufRead, BufReader};

use anyhow::{Context, Result};

use crate::shell::Shell;

/// Runs every line of the script through the same core the interactive
/// loop uses. An unreadable script is fatal; the commands inside it fail
/// or succeed on their own without stopping the run.
pub fn run(shell: &mut Shell, path: &str) -> Result<()> {
    let file = File::open(path).with_context(|| format!("cannot open batch file: {}", path))?;
    let reader = BufReader::new(file);
    for line in reader.lines() {
        let line = line.with_context(|| format!("cannot read batch file: {}", path))?;
        shell.execute_line(&line)?;
        if shell.should_exit {
            break;
        }
    }
    Ok(())
}
