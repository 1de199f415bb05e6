use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("missing value for flag -{flag}")]
    MissingValue { flag: String },

    #[error("unknown platform: {0}")]
    UnknownPlatform(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ResolveError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let missing = ResolveError::MissingValue {
            flag: "output".to_string(),
        };
        assert_eq!(missing.to_string(), "missing value for flag -output");
        assert_eq!(
            ResolveError::UnknownPlatform("Dreamcast".to_string()).to_string(),
            "unknown platform: Dreamcast"
        );
        assert_eq!(
            ResolveError::Config("bad".to_string()).to_string(),
            "Configuration error: bad"
        );
    }

    #[test]
    fn test_wraps_into_anyhow() {
        let err: anyhow::Error = ResolveError::Config("bad".to_string()).into();
        assert!(matches!(
            err.downcast_ref::<ResolveError>(),
            Some(ResolveError::Config(_))
        ));
    }
}
