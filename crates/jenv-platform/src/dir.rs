use crate::env::EnvSnapshot;
use std::path::PathBuf;

/// The user's home directory according to `env`.
///
/// `HOME` (or `USERPROFILE` on Windows) from the snapshot wins; the account
/// database is consulted only when the snapshot has neither.
pub fn user_home(env: &EnvSnapshot) -> Option<PathBuf> {
    let var = if cfg!(windows) { "USERPROFILE" } else { "HOME" };
    match env.get_non_empty(var) {
        Some(home) => Some(PathBuf::from(home)),
        None => home::home_dir(),
    }
}

/// `%ProgramFiles%` from `env`.
pub fn program_files(env: &EnvSnapshot) -> Option<PathBuf> {
    ["ProgramW6432", "ProgramFiles"]
        .iter()
        .find_map(|var| env.get_non_empty(var))
        .map(PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_home_from_snapshot() {
        let var = if cfg!(windows) { "USERPROFILE" } else { "HOME" };
        let env = EnvSnapshot::new().with(var, "/home/someone");
        assert_eq!(user_home(&env), Some(PathBuf::from("/home/someone")));
    }

    #[test]
    fn test_program_files_from_snapshot() {
        assert_eq!(program_files(&EnvSnapshot::new()), None);
        let env = EnvSnapshot::new()
            .with("ProgramFiles", "C:\\Program Files (x86)")
            .with("ProgramW6432", "C:\\Program Files");
        assert_eq!(program_files(&env), Some(PathBuf::from("C:\\Program Files")));
    }
}
