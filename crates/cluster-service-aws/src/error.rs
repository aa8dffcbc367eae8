use aws_sdk_rds::error::ProvideErrorMetadata;
use thiserror::Error;

/// A failed provider API call.
///
/// Carries the AWS error code when the service returned one. The message is
/// the full source chain, since SDK errors often have terse `Display` impls.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ProviderError {
    pub code: Option<String>,
    pub message: String,
}

impl ProviderError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }

    pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: message.into(),
        }
    }

    /// Capture an SDK error, prefixed with the failing operation.
    pub fn from_sdk<E>(operation: &str, err: &E) -> Self
    where
        E: std::error::Error + ProvideErrorMetadata,
    {
        Self {
            code: err.code().map(String::from),
            message: format!("{operation} failed: {}", format_err_chain(err)),
        }
    }
}

/// Failure inside a single action engine. Every variant aborts the engine
/// call; no partial report is returned.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to list resources")]
    Discovery {
        cluster_id: String,
        source: ProviderError,
    },

    #[error("failed to list tags for {resource_id}")]
    TagLookup {
        cluster_id: String,
        resource_id: String,
        source: ProviderError,
    },

    #[error("failed to remove deletion protection on {resource_id}")]
    Remediation {
        cluster_id: String,
        resource_id: String,
        source: ProviderError,
    },

    #[error("failed to delete {resource_id}")]
    Deletion {
        cluster_id: String,
        resource_id: String,
        source: ProviderError,
    },
}

impl EngineError {
    pub fn cluster_id(&self) -> &str {
        match self {
            Self::Discovery { cluster_id, .. }
            | Self::TagLookup { cluster_id, .. }
            | Self::Remediation { cluster_id, .. }
            | Self::Deletion { cluster_id, .. } => cluster_id,
        }
    }

    /// The resource being processed, if the failure was resource-specific.
    pub fn resource_id(&self) -> Option<&str> {
        match self {
            Self::Discovery { .. } => None,
            Self::TagLookup { resource_id, .. }
            | Self::Remediation { resource_id, .. }
            | Self::Deletion { resource_id, .. } => Some(resource_id),
        }
    }

    pub fn provider_error(&self) -> &ProviderError {
        match self {
            Self::Discovery { source, .. }
            | Self::TagLookup { source, .. }
            | Self::Remediation { source, .. }
            | Self::Deletion { source, .. } => source,
        }
    }
}

/// Caller-facing error: the engine that failed and the cluster it ran for.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("{engine} failed for cluster {cluster_id}")]
    Engine {
        engine: String,
        cluster_id: String,
        source: EngineError,
    },
}

impl ClientError {
    pub fn engine(&self) -> &str {
        match self {
            Self::Engine { engine, .. } => engine,
        }
    }
}

/// Walk the full error chain and join all causes into one string.
///
/// AWS SDK errors often have terse `Display` impls (e.g. "service error")
/// but useful detail in the source chain.
pub fn format_err_chain(err: &dyn std::error::Error) -> String {
    let mut msg = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        msg.push_str(": ");
        msg.push_str(&cause.to_string());
        source = cause.source();
    }
    msg
}
