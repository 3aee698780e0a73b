use thiserror::Error;

pub type BoxedError = Box<dyn std::error::Error + Send + Sync>;

/// An overlay component failed while annotating a render-pass frame.
#[derive(Debug, Error)]
pub enum ComponentError {
    #[error("component {component} failed: {source}")]
    Failed {
        component: String,
        #[source]
        source: BoxedError,
    },

    #[error("component {component} panicked: {message}")]
    Panicked { component: String, message: String },
}

impl ComponentError {
    pub fn failed(component: impl Into<String>, source: impl Into<BoxedError>) -> Self {
        Self::Failed {
            component: component.into(),
            source: source.into(),
        }
    }

    #[must_use]
    pub fn component(&self) -> &str {
        match self {
            Self::Failed { component, .. } | Self::Panicked { component, .. } => component,
        }
    }
}
