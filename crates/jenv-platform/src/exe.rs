//! Platform executable naming.

use std::env::consts::EXE_SUFFIX;

/// The Java launcher's tool name.
pub const JAVA: &str = "java";

/// File name of `tool` on this platform (`java` or `java.exe`).
pub fn exe_name(tool: &str) -> String {
    format!("{tool}{EXE_SUFFIX}")
}

/// The launcher file name looked up under `<home>/bin`.
pub fn java_launcher() -> String {
    exe_name(JAVA)
}

/// Map a file name found in a JDK `bin` directory to a tool name.
///
/// Unix tools carry no extension, so names containing `.` (`jmc.ini`, `libjli.so`)
/// are rejected. On Windows only `.exe` files count and the suffix is stripped.
pub fn tool_name(file_name: &str) -> Option<String> {
    if cfg!(windows) {
        let lower = file_name.to_ascii_lowercase();
        let stem = lower.strip_suffix(".exe")?;
        (!stem.is_empty()).then(|| file_name[..stem.len()].to_string())
    } else {
        (!file_name.is_empty() && !file_name.contains('.') && !file_name.starts_with('-'))
            .then(|| file_name.to_string())
    }
}
