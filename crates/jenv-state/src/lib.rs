//! Persistent jenv state.
//!
//! ```text
//! $JENV_DIR (default ~/.jenv)
//! ├── config.toml   optional settings
//! ├── version       global selector
//! ├── paths         custom search paths, one per line
//! ├── shims/        generated tool shims
//! └── versions/     JDKs placed under jenv's root
//! ```
//!
//! Local selectors live in `.jenv-version` files anywhere in the filesystem; the shell
//! selector is the `JENV_VERSION` variable.

pub use self::error::{Error, Result};
pub use self::layout::{JenvHome, LOCAL_FILE, ROOT_VAR, SHELL_VAR};
pub use self::paths::CustomPaths;
pub use self::selector::{MAX_WALK_DEPTH, Scope, Selector, VersionStore};
pub use self::settings::Settings;

mod error;
mod layout;
mod paths;
mod selector;
mod settings;
