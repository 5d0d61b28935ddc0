use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("{0}")]
    Usage(String),

    #[error("{0}")]
    Transport(String),

    #[error("GitHub API error: {0}")]
    Api(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Pagination did not finish after {0} pages, aborting")]
    PageLimit(usize),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("{0}")]
    Unknown(String),
}

pub type ExportResult<T> = Result<T, ExportError>;

pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> ExportResult<T>;
    fn with_context<F>(self, f: F) -> ExportResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::error::Error + 'static,
{
    fn context(self, msg: &str) -> ExportResult<T> {
        self.map_err(|e| ExportError::Unknown(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> ExportResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| ExportError::Unknown(format!("{}: {}", f(), e)))
    }
}

impl<T> ErrorContext<T> for Option<T> {
    fn context(self, msg: &str) -> ExportResult<T> {
        self.ok_or_else(|| ExportError::Unknown(msg.to_string()))
    }

    fn with_context<F>(self, f: F) -> ExportResult<T>
    where
        F: FnOnce() -> String,
    {
        self.ok_or_else(|| ExportError::Unknown(f()))
    }
}

#[macro_export]
macro_rules! export_error {
    ($error_type:ident, $msg:expr) => {
        $crate::error::ExportError::$error_type($msg.to_string())
    };
    ($error_type:ident, $fmt:expr, $($arg:tt)*) => {
        $crate::error::ExportError::$error_type(format!($fmt, $($arg)*))
    };
}
