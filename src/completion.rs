// completion.rs

use std::os::unix::fs::PermissionsExt;

use itertools::Itertools;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::{ValidationContext, ValidationResult, Validator};
use rustyline::{Context, Helper};

use crate::builtins::BUILTINS;

pub struct ShellHelper;

impl ShellHelper {
    pub fn new() -> Self {
        Self
    }
}

impl Completer for ShellHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> Result<(usize, Vec<Pair>), ReadlineError> {
        let prefix = &line[..pos];
        let mut names: Vec<String> = BUILTINS
            .iter()
            .filter(|builtin| builtin.starts_with(prefix))
            .map(|builtin| builtin.to_string())
            .collect();
        names.extend(path_executables(prefix));
        let completions = names
            .into_iter()
            .sorted()
            .dedup()
            .map(|name| Pair {
                display: name.clone(),
                replacement: format!("{} ", name),
            })
            .collect();
        Ok((0, completions))
    }
}

fn path_executables(prefix: &str) -> Vec<String> {
    let mut names = Vec::new();
    let path_var = match std::env::var("PATH") {
        Ok(v) => v,
        Err(_) => return names,
    };
    for dir in path_var.split(':') {
        let entries = match std::fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(_) => continue,
        };
        for entry in entries.flatten() {
            let name = match entry.file_name().into_string() {
                Ok(name) => name,
                Err(_) => continue,
            };
            if !name.starts_with(prefix) {
                continue;
            }
            if let Ok(meta) = entry.metadata() {
                if meta.is_file() && meta.permissions().mode() & 0o111 != 0 {
                    names.push(name);
                }
            }
        }
    }
    names
}

impl Hinter for ShellHelper {
    type Hint = String;

    fn hint(&self, _line: &str, _pos: usize, _ctx: &Context<'_>) -> Option<String> {
        None
    }
}

impl Highlighter for ShellHelper {}

impl Validator for ShellHelper {
    fn validate(&self, _ctx: &mut ValidationContext) -> Result<ValidationResult, ReadlineError> {
        Ok(ValidationResult::Valid(None))
    }
}

impl Helper for ShellHelper {}
