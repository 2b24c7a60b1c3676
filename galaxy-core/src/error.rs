use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised at the configuration and viewport boundaries.
///
/// The numeric core never fails: degenerate interactions are skipped rather
/// than reported. Everything here comes from callers handing the engine a
/// name, a value or a file it cannot use.
#[derive(Debug, Error)]
pub enum Error {
    /// A settings field was addressed by a name that does not exist.
    #[error("unknown setting '{0}'")]
    UnknownSetting(String),

    /// A settings field was given a value of the wrong kind.
    #[error("setting '{name}' expects a {expected} value")]
    SettingType {
        name: &'static str,
        expected: &'static str,
    },

    /// Viewport dimensions must be finite and strictly positive.
    #[error("invalid viewport {width}x{height}")]
    InvalidViewport { width: f32, height: f32 },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("malformed settings file: {0}")]
    Json(#[from] serde_json::Error),
}
