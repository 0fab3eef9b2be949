use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OkapiErrorKind {
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OkapiError {
    pub kind: OkapiErrorKind,
    pub msg: String,
}

impl OkapiError {
    pub fn new(kind: OkapiErrorKind, msg: &str) -> Self {
        OkapiError {
            kind,
            msg: String::from(msg),
        }
    }

    pub fn error(msg: &str) -> Self {
        Self::new(OkapiErrorKind::Error, msg)
    }

    pub fn warning(msg: &str) -> Self {
        Self::new(OkapiErrorKind::Warning, msg)
    }

    pub fn is_warning(&self) -> bool {
        return self.kind == OkapiErrorKind::Warning;
    }
}

impl fmt::Display for OkapiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            OkapiErrorKind::Warning => write!(f, "Warning: {}", self.msg),
            OkapiErrorKind::Error => write!(f, "Error: {}", self.msg),
        }
    }
}

impl std::error::Error for OkapiError {}

impl From<std::io::Error> for OkapiError {
    fn from(value: std::io::Error) -> Self {
        return OkapiError::error(&value.to_string());
    }
}

impl From<serde_json::Error> for OkapiError {
    fn from(value: serde_json::Error) -> Self {
        let msg = format!("Scene description: {}", value);
        return OkapiError::error(&msg);
    }
}

impl From<rayon::ThreadPoolBuildError> for OkapiError {
    fn from(value: rayon::ThreadPoolBuildError) -> Self {
        let msg = format!("Couldn't create render thread pool: {}", value);
        return OkapiError::error(&msg);
    }
}

impl<T> From<std::sync::PoisonError<T>> for OkapiError {
    fn from(_value: std::sync::PoisonError<T>) -> Self {
        return OkapiError::error("Film lock poisoned by a panicking render task.");
    }
}
