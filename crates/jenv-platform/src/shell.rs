//! POSIX shell helpers.

/// Quote `s` as a single POSIX shell word.
pub fn quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', r"'\''"))
}

/// An `export` line that sets `var` to `value` when evaluated by a POSIX shell.
pub fn export_line(var: &str, value: &str) -> String {
    format!("export {var}={}", quote(value))
}

pub fn unset_line(var: &str) -> String {
    format!("unset {var}")
}
