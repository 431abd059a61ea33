use thiserror::Error;

/// Result type alias using AssetError
pub type Result<T> = std::result::Result<T, AssetError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// This taxonomy provides a stable, structured classification of all errors
/// in AssetX. Each kind maps to a stable error code that can be used for
/// programmatic error handling, testing, and CLI output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Contract preconditions
    InvalidInput,
    NotFound,
    AlreadyExists,

    // Integration/IO
    Io,
    Serialization,
    Persistence,
    ChecksumMismatch,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::AlreadyExists => "ERR_ALREADY_EXISTS",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::ChecksumMismatch => "ERR_CHECKSUM_MISMATCH",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification for programmatic handling plus enough context
/// (operation, entity id, message) to debug a failure from a log line.
#[derive(Debug, Clone, PartialEq)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context
    pub fn with_entity_id(mut self, id: impl Into<String>) -> Self {
        self.entity_id = Some(id.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: ExError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the entity ID context, if any
    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
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
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
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

/// Error taxonomy for asset contract operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AssetError {
    /// Create targeted an id that is already present
    #[error("The asset {asset_id} already exists")]
    AlreadyExists { asset_id: String },

    /// Read, update or delete targeted an id that is absent
    #[error("The asset {asset_id} does not exist")]
    NotFound { asset_id: String },

    /// Asset id failed validation (empty)
    #[error("Invalid asset id: {reason}")]
    InvalidAssetId { reason: String },

    /// Function name or argument list did not match a contract transaction
    #[error("Invalid invocation: {reason}")]
    InvalidInvocation { reason: String },

    /// Stored bytes could not be decoded, or a record could not be encoded
    #[error("Serialization failed for asset {asset_id}: {reason}")]
    Serialization { asset_id: String, reason: String },

    /// Failure reported by the state backend, passed through untouched
    #[error(transparent)]
    Backend(#[from] ExError),
}

impl AssetError {
    /// The asset id this error refers to, if any
    pub fn asset_id(&self) -> Option<&str> {
        match self {
            AssetError::AlreadyExists { asset_id }
            | AssetError::NotFound { asset_id }
            | AssetError::Serialization { asset_id, .. } => Some(asset_id),
            AssetError::Backend(err) => err.entity_id(),
            AssetError::InvalidAssetId { .. } | AssetError::InvalidInvocation { .. } => None,
        }
    }
}

/// Conversion from AssetError to ExError
///
/// Backend errors come back out exactly as they went in.
impl From<AssetError> for ExError {
    fn from(err: AssetError) -> Self {
        let message = err.to_string();
        match err {
            AssetError::AlreadyExists { asset_id } => ExError::new(ExErrorKind::AlreadyExists)
                .with_entity_id(asset_id)
                .with_message(message),

            AssetError::NotFound { asset_id } => ExError::new(ExErrorKind::NotFound)
                .with_entity_id(asset_id)
                .with_message(message),

            AssetError::InvalidAssetId { .. } => ExError::new(ExErrorKind::InvalidInput)
                .with_op("validate_asset_id")
                .with_message(message),

            AssetError::InvalidInvocation { .. } => ExError::new(ExErrorKind::InvalidInput)
                .with_op("invoke")
                .with_message(message),

            AssetError::Serialization { asset_id, .. } => {
                ExError::new(ExErrorKind::Serialization)
                    .with_entity_id(asset_id)
                    .with_message(message)
            }

            AssetError::Backend(inner) => inner,
        }
    }
}
