use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("no installed JDK matches '{value}'")]
    NotFound { value: String },

    #[error("'{value}' matches more than one JDK: {}", candidates.join(", "))]
    Ambiguous {
        value: String,
        candidates: Vec<String>,
    },

    #[error("{origin} selects '{value}', which is not usable: {reason}")]
    InvalidSelector {
        origin: String,
        value: String,
        reason: String,
    },

    #[error("no JDK selected: set one with `jenv global`, `jenv local` or `jenv shell`")]
    NoVersionConfigured,

    #[error(transparent)]
    State(#[from] jenv_state::Error),
}

impl ResolveError {
    pub fn exit_code(&self) -> i32 {
        match self {
            ResolveError::NotFound { .. } => 10,
            ResolveError::Ambiguous { .. } => 11,
            ResolveError::InvalidSelector { .. } => 12,
            ResolveError::NoVersionConfigured => 15,
            ResolveError::State(jenv_state::Error::Persist(_)) => 16,
            ResolveError::State(_) => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, ResolveError>;
