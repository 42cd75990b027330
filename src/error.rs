//! Error types.
//!
//! `ChartError` covers failures inside a render pass (bad parameter input,
//! violated generator invariants). `AppError` is the binary's boundary type:
//! an exit code plus a human-readable message.

/// A failure inside the generation/render pipeline.
///
/// A render pass that returns an error performs no visual mutation: the
/// previously rendered scene stays intact and the caller decides how to
/// surface the message.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartError {
    /// A parameter produced a NaN or infinite effective value.
    ///
    /// Out-of-domain but finite input is *not* an error; the parameter's
    /// scale silently clamps it.
    Validation(String),
    /// A generator invariant was violated (e.g., derived point count <= 0).
    Generation(String),
}

impl std::fmt::Display for ChartError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChartError::Validation(msg) => write!(f, "invalid parameter: {msg}"),
            ChartError::Generation(msg) => write!(f, "generation failed: {msg}"),
        }
    }
}

impl std::error::Error for ChartError {}

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

impl From<ChartError> for AppError {
    fn from(err: ChartError) -> Self {
        let code = match err {
            ChartError::Validation(_) => 2,
            ChartError::Generation(_) => 3,
        };
        AppError::new(code, err.to_string())
    }
}
