// builtins.rs

use std::env;
use std::io::Write;

use crate::shell::Shell;

pub const BUILTINS: [&str; 6] = ["cd", "exit", "export", "local", "vars", "history"];

pub enum Dispatch {
    NotBuiltin,
    Handled,
}

/// Tries `args` against the builtin table before any process is forked.
/// Listings go to `out`; diagnostics go to stderr. A handled command never
/// stops the loop by itself; even `exit` only raises the flag the loops
/// check between lines.
pub fn dispatch(shell: &mut Shell, args: &[String], out: &mut dyn Write) -> Dispatch {
    if args.is_empty() {
        return Dispatch::Handled;
    }
    match args[0].as_str() {
        "cd" => cd(args),
        "exit" => shell.should_exit = true,
        "export" => export(args),
        "local" => local(shell, args),
        "vars" => vars(shell, out),
        "history" => history(shell, args, out),
        _ => return Dispatch::NotBuiltin,
    }
    Dispatch::Handled
}

fn cd(args: &[String]) {
    match args.get(1) {
        Some(target) => {
            if let Err(err) = env::set_current_dir(target) {
                eprintln!("wsh: cd: {}: {}", target, err);
            }
        }
        None => eprintln!("wsh: cd: expected argument"),
    }
}

fn export(args: &[String]) {
    let assignment = match args.get(1) {
        Some(a) => a,
        None => {
            eprintln!("wsh: export: expected name=value");
            return;
        }
    };
    let (name, value) = split_assignment(assignment);
    // set_var and remove_var panic on interior NUL bytes.
    if name.is_empty() || name.contains('\0') || value.contains('\0') {
        eprintln!("wsh: export: invalid assignment: {}", assignment);
        return;
    }
    if value.is_empty() {
        env::remove_var(name);
    } else {
        env::set_var(name, value);
    }
}

fn local(shell: &mut Shell, args: &[String]) {
    let assignment = match args.get(1) {
        Some(a) => a,
        None => {
            eprintln!("wsh: local: expected name=value");
            return;
        }
    };
    let (name, value) = split_assignment(assignment);
    if name.is_empty() {
        eprintln!("wsh: local: invalid assignment: {}", assignment);
        return;
    }
    if value.is_empty() {
        shell.vars.unset(name);
    } else {
        shell.vars.set(name, value);
    }
}

// Split on the first '='; a bare name or an empty value means unset.
fn split_assignment(assignment: &str) -> (&str, &str) {
    match assignment.split_once('=') {
        Some((name, value)) => (name, value),
        None => (assignment, ""),
    }
}

fn vars(shell: &Shell, out: &mut dyn Write) {
    for (name, value) in shell.vars.iter() {
        let _ = writeln!(out, "{}={}", name, value);
    }
}

fn history(shell: &mut Shell, args: &[String], out: &mut dyn Write) {
    if args.len() == 1 {
        for (i, line) in shell.history.iter().enumerate() {
            let _ = writeln!(out, "{}) {}", i + 1, line);
        }
        return;
    }
    if args[1] == "set" {
        match args.get(2) {
            Some(size) => match size.parse::<usize>() {
                Ok(capacity) => shell.history.resize(capacity),
                Err(_) => eprintln!("wsh: history: invalid size: {}", size),
            },
            None => eprintln!("wsh: history: expected size"),
        }
        return;
    }
    // Recall displays the stored line; it does not run it again.
    match args[1].parse::<usize>() {
        Ok(n) if n > 0 => match shell.history.get(n - 1) {
            Some(line) => {
                let _ = writeln!(out, "Executing: {}", line);
            }
            None => eprintln!("wsh: history: no such command"),
        },
        _ => eprintln!("wsh: history: invalid index: {}", args[1]),
    }
}
