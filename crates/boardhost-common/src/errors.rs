use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("path error: {0}")]
    PathError(String),

    #[error("{op} failed: {message}")]
    NativeCall { op: &'static str, message: String },

    #[error("window {0:#x} no longer exists")]
    WindowGone(u64),

    #[error("not supported: {0}")]
    NotSupported(String),
}

impl PlatformError {
    pub fn native(op: &'static str, message: impl Into<String>) -> Self {
        Self::NativeCall {
            op,
            message: message.into(),
        }
    }
}

/// Failure to start a viewer process. The only failure surfaced to the user
/// synchronously.
#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    #[error("{viewer} executable not found")]
    ExecutableMissing { viewer: String },

    #[error("failed to start {viewer}: {source}")]
    Spawn {
        viewer: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to stage isolated copy of {viewer}: {message}")]
    Staging { viewer: String, message: String },
}

/// A native manipulation step failed while embedding a resolved window.
#[derive(Debug, thiserror::Error)]
pub enum EmbedError {
    #[error("host window is not attached")]
    NotAttached,

    #[error("embedding step '{step}' failed: {source}")]
    NativeStep {
        step: &'static str,
        #[source]
        source: PlatformError,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum BoardhostError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error(transparent)]
    Launch(#[from] LaunchError),

    #[error(transparent)]
    Embed(#[from] EmbedError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ValidationError("resolver.attempts = 0".into());
        assert_eq!(
            err.to_string(),
            "config validation error: resolver.attempts = 0"
        );
    }

    #[test]
    fn native_call_display_names_the_operation() {
        let err = PlatformError::native("SetParent", "access denied");
        assert_eq!(err.to_string(), "SetParent failed: access denied");

        let err = PlatformError::WindowGone(0x1f2e);
        assert_eq!(err.to_string(), "window 0x1f2e no longer exists");
    }

    #[test]
    fn launch_error_names_the_viewer() {
        let err = LaunchError::ExecutableMissing {
            viewer: "FlexBoardView".into(),
        };
        assert_eq!(err.to_string(), "FlexBoardView executable not found");

        let err = LaunchError::Spawn {
            viewer: "BoardViewer".into(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().starts_with("failed to start BoardViewer"));
    }

    #[test]
    fn embed_error_keeps_native_source() {
        let err = EmbedError::NativeStep {
            step: "reparent",
            source: PlatformError::native("SetParent", "invalid handle"),
        };
        assert!(err.to_string().contains("reparent"));
        let source = std::error::Error::source(&err).unwrap();
        assert!(source.to_string().contains("invalid handle"));
    }

    #[test]
    fn boardhost_error_from_variants() {
        let err: BoardhostError = ConfigError::ParseError("bad toml".into()).into();
        assert!(matches!(err, BoardhostError::Config(_)));

        let err: BoardhostError = LaunchError::ExecutableMissing {
            viewer: "SumatraPDF".into(),
        }
        .into();
        assert!(matches!(err, BoardhostError::Launch(_)));
        assert!(err.to_string().contains("SumatraPDF"));

        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: BoardhostError = io_err.into();
        assert!(matches!(err, BoardhostError::Io(_)));
    }
}
