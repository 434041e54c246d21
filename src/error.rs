use std::{error::Error, fmt, sync::Arc};

/// Failure surfaced by the application shell: a stable key, the context it
/// happened in, and the library error underneath.
#[derive(Debug, Clone)]
pub struct ViewerError {
    pub key: &'static str,
    pub context: Vec<(&'static str, String)>,
    pub cause: Option<Arc<dyn Error + Send + Sync>>,
}

impl ViewerError {
    pub fn new(key: &'static str) -> Self {
        Self {
            key,
            context: Vec::new(),
            cause: None,
        }
    }

    pub fn with_arg(mut self, name: &'static str, value: impl ToString) -> Self {
        self.context.push((name, value.to_string()));
        self
    }

    fn caused_by(mut self, cause: impl Error + Send + Sync + 'static) -> Self {
        self.cause = Some(Arc::new(cause));
        self
    }
}

impl fmt::Display for ViewerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key)?;
        if !self.context.is_empty() {
            let pairs: Vec<String> = self.context.iter().map(|(k, v)| format!("{k}={v}")).collect();
            write!(f, " [{}]", pairs.join(", "))?;
        }
        if let Some(cause) = &self.cause {
            write!(f, ": {cause}")?;
        }
        Ok(())
    }
}

impl Error for ViewerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.cause.as_deref().map(|c| c as &(dyn Error + 'static))
    }
}

impl From<confy::ConfyError> for ViewerError {
    fn from(err: confy::ConfyError) -> Self {
        ViewerError::new("settings").caused_by(err)
    }
}

impl From<winit::error::OsError> for ViewerError {
    fn from(err: winit::error::OsError) -> Self {
        ViewerError::new("window-create").caused_by(err)
    }
}

impl From<winit::error::EventLoopError> for ViewerError {
    fn from(err: winit::error::EventLoopError) -> Self {
        ViewerError::new("event-loop").caused_by(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_keeps_context_order() {
        let err = ViewerError::new("settings")
            .with_arg("section", "appearance")
            .with_arg("app", "objvis-rs");
        assert_eq!(err.to_string(), "settings [section=appearance, app=objvis-rs]");
        assert!(err.source().is_none());
    }

    #[test]
    fn event_loop_error_is_the_source() {
        let err = ViewerError::from(winit::error::EventLoopError::ExitFailure(3));
        assert_eq!(err.key, "event-loop");
        let source = err.source().map(|s| s.to_string());
        assert_eq!(source, Some(winit::error::EventLoopError::ExitFailure(3).to_string()));
        assert!(err.to_string().starts_with("event-loop: "));
    }
}
