// parser.rs

use std::env;

use crate::vars::VarStore;

const DELIM: &[char] = &[' ', '\t', '\r', '\n', '\x07'];

/// Splits a raw line into argument tokens and resolves variables. Runs of
/// delimiters collapse, so no empty token comes out of the split itself;
/// an unset `$name` still expands to an empty-string token.
pub fn tokenize(line: &str, vars: &VarStore) -> Vec<String> {
    line.split(DELIM)
        .filter(|tok| !tok.is_empty())
        .map(|tok| expand(tok, vars))
        .collect()
}

/// A token starting with `$` is replaced wholesale: environment first,
/// then the shell-local store, else empty. `$` anywhere else is literal.
fn expand(token: &str, vars: &VarStore) -> String {
    match token.strip_prefix('$') {
        Some(name) => env::var(name)
            .ok()
            .or_else(|| vars.get(name).map(str::to_string))
            .unwrap_or_default(),
        None => token.to_string(),
    }
}

/// Splits a line on `|`, dropping empty and whitespace-only segments.
/// Segments stay raw; each one is tokenized later, pipeline segments
/// inside their own child process.
pub fn split_pipeline(line: &str) -> Vec<&str> {
    line.split('|')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .collect()
}
