use thiserror::Error;

/// The one way a configuration build can fail: an option refused to apply.
///
/// The builder hands back whatever the failing option reported, unchanged.
/// Nothing is retried and nothing is collected from later options.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("server option failed: {0}")]
    OptionFailed(String),
}

impl ConfigError {
    pub fn option_failed(reason: impl Into<String>) -> Self {
        Self::OptionFailed(reason.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_reason() {
        let err = ConfigError::option_failed("pool size rejected");
        assert_eq!(err.to_string(), "server option failed: pool size rejected");
    }
}
