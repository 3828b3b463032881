use caseview_core_types::{RequestId, TraceId};
use thiserror::Error;

/// Result type alias using the canonical `ExError`
pub type Result<T> = std::result::Result<T, ExError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable code that the REST layer can surface verbatim
/// and that tests can assert on without matching message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    /// Malformed caller input: unknown task status, unresolvable container
    InvalidInput,
    /// A single-entity lookup found nothing
    NotFound,
    /// Configuration could not be parsed
    InvalidConfig,
    Serialization,

    // Raised by backend implementations and passed through untouched
    Persistence,
    ExternalService,
    Timeout,
    Unauthorised,
    Forbidden,

    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::ExternalService => "ERR_EXTERNAL_SERVICE",
            ExErrorKind::Timeout => "ERR_TIMEOUT",
            ExErrorKind::Unauthorised => "ERR_UNAUTHORISED",
            ExErrorKind::Forbidden => "ERR_FORBIDDEN",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification (`kind`) for programmatic handling plus optional
/// context fields that are filled in as the error travels outward.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    container_id: Option<String>,
    request_id: Option<RequestId>,
    trace_id: Option<TraceId>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            container_id: None,
            request_id: None,
            trace_id: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add the id of the entity the failure concerns (case id, definition id, ...)
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    pub fn with_container_id(mut self, id: impl Into<String>) -> Self {
        self.container_id = Some(id.into());
        self
    }

    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    pub fn with_trace_id(mut self, trace_id: TraceId) -> Self {
        self.trace_id = Some(trace_id);
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    pub fn container_id(&self) -> Option<&str> {
        self.container_id.as_deref()
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    pub fn trace_id(&self) -> Option<&TraceId> {
        self.trace_id.as_ref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn source_error(&self) -> Option<&ExError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(container_id) = &self.container_id {
            write!(f, " (container_id: {})", container_id)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        if let Some(request_id) = &self.request_id {
            write!(f, " (request_id: {})", request_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Domain failures raised by the query facade
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CaseViewError {
    #[error("Case definition {container_id} : {case_definition_id} not found")]
    CaseDefinitionNotFound {
        container_id: String,
        case_definition_id: String,
    },

    #[error("Process definition {container_id} : {process_id} not found")]
    ProcessDefinitionNotFound {
        container_id: String,
        process_id: String,
    },

    /// A task status name that is not a known enumerant
    #[error("Unknown task status: {status}")]
    UnknownTaskStatus { status: String },

    /// The container locator could not resolve the supplied id or alias
    #[error("Container {container_id} is not available to serve requests")]
    UnknownContainer { container_id: String },

    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl From<CaseViewError> for ExError {
    fn from(err: CaseViewError) -> Self {
        let message = err.to_string();
        match err {
            CaseViewError::CaseDefinitionNotFound {
                container_id,
                case_definition_id,
            } => ExError::new(ExErrorKind::NotFound)
                .with_container_id(container_id)
                .with_entity_id(case_definition_id)
                .with_message(message),

            CaseViewError::ProcessDefinitionNotFound {
                container_id,
                process_id,
            } => ExError::new(ExErrorKind::NotFound)
                .with_container_id(container_id)
                .with_entity_id(process_id)
                .with_message(message),

            CaseViewError::UnknownTaskStatus { status } => ExError::new(ExErrorKind::InvalidInput)
                .with_op("normalize_task_status")
                .with_entity_id(status)
                .with_message(message),

            CaseViewError::UnknownContainer { container_id } => {
                ExError::new(ExErrorKind::InvalidInput)
                    .with_op("resolve_container")
                    .with_container_id(container_id)
                    .with_message(message)
            }

            CaseViewError::InvalidConfig { .. } => {
                ExError::new(ExErrorKind::InvalidConfig).with_message(message)
            }

            CaseViewError::Serialization { .. } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}

impl From<serde_json::Error> for CaseViewError {
    fn from(err: serde_json::Error) -> Self {
        CaseViewError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for CaseViewError {
    fn from(err: toml::de::Error) -> Self {
        CaseViewError::InvalidConfig {
            reason: err.to_string(),
        }
    }
}
