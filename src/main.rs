// main.rs

mod batch;
mod builtins;
mod completion;
mod error;
mod exec;
mod history;
mod parser;
mod pipeline;
mod repl;
mod shell;
mod vars;

use std::env;
use std::process;

use crate::shell::Shell;

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let mut shell = Shell::new();
    let result = match args.first() {
        None => repl::run(&mut shell),
        // Anything after the script name is ignored.
        Some(script) => batch::run(&mut shell, script),
    };
    if let Err(err) = result {
        eprintln!("wsh: {:#}", err);
        process::exit(1);
    }
}
