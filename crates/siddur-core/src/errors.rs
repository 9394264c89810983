use thiserror::Error;

/// Result type alias using SiddurError
pub type Result<T> = std::result::Result<T, SiddurError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// This taxonomy provides a stable, structured classification of all errors
/// in the Siddur workspace. Each kind maps to a stable error code that can be
/// used for programmatic error handling, testing, and user-facing reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Classification
    DateOutOfRange,
    CalendarProvider,

    // Assembly
    UnsupportedServiceType,
    NoApplicableVariant,

    // Catalog validation (reported, never fatal)
    ChunkNotInCatalog,

    // Input/Config
    InvalidInput,
    InvalidConfig,
    NotFound,

    // Integration/IO
    Io,
    Serialization,
    Persistence,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::DateOutOfRange => "ERR_DATE_OUT_OF_RANGE",
            ExErrorKind::CalendarProvider => "ERR_CALENDAR_PROVIDER",
            ExErrorKind::UnsupportedServiceType => "ERR_UNSUPPORTED_SERVICE_TYPE",
            ExErrorKind::NoApplicableVariant => "ERR_NO_APPLICABLE_VARIANT",
            ExErrorKind::ChunkNotInCatalog => "ERR_CHUNK_NOT_IN_CATALOG",
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries the classification kind plus the date/service combination the
/// failure belongs to, so callers can surface both verbatim.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    civil_date: Option<String>,
    service: Option<String>,
    section: Option<String>,
    chunk_id: Option<String>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            civil_date: None,
            service: None,
            section: None,
            chunk_id: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add civil date context
    pub fn with_civil_date(mut self, date: impl Into<String>) -> Self {
        self.civil_date = Some(date.into());
        self
    }

    /// Add service context
    pub fn with_service(mut self, service: impl Into<String>) -> Self {
        self.service = Some(service.into());
        self
    }

    /// Add section context
    pub fn with_section(mut self, section: impl Into<String>) -> Self {
        self.section = Some(section.into());
        self
    }

    /// Add chunk id context
    pub fn with_chunk_id(mut self, chunk_id: impl Into<String>) -> Self {
        self.chunk_id = Some(chunk_id.into());
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

    /// Get the civil date context, if any
    pub fn civil_date(&self) -> Option<&str> {
        self.civil_date.as_deref()
    }

    /// Get the service context, if any
    pub fn service(&self) -> Option<&str> {
        self.service.as_deref()
    }

    /// Get the section context, if any
    pub fn section(&self) -> Option<&str> {
        self.section.as_deref()
    }

    /// Get the chunk id context, if any
    pub fn chunk_id(&self) -> Option<&str> {
        self.chunk_id.as_deref()
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
        if let Some(date) = &self.civil_date {
            write!(f, " (date: {})", date)?;
        }
        if let Some(service) = &self.service {
            write!(f, " (service: {})", service)?;
        }
        if let Some(section) = &self.section {
            write!(f, " (section: {})", section)?;
        }
        if let Some(chunk_id) = &self.chunk_id {
            write!(f, " (chunk: {})", chunk_id)?;
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

/// Error taxonomy for classification and assembly
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SiddurError {
    // ===== Classification Errors =====
    /// Civil date outside the configured supported span
    #[error("Date {date} is outside the supported range {start}..={end}")]
    DateOutOfRange {
        date: String,
        start: String,
        end: String,
    },

    /// The calendar provider could not resolve a date
    #[error("Calendar provider failed for {date}: {message}")]
    CalendarProvider { date: String, message: String },

    // ===== Assembly Errors =====
    /// No section table registered for the service
    #[error("No section table for service {service}")]
    UnsupportedServiceType { service: String },

    /// A mandatory variant section matched no rule (rule table gap)
    #[error("No applicable variant for section '{section}' in {service}")]
    NoApplicableVariant { service: String, section: String },

    // ===== Catalog Errors =====
    /// Emitted chunk is absent from the catalog (validation only)
    #[error("Chunk not in catalog: {chunk}")]
    ChunkNotInCatalog { chunk: String },

    // ===== Input Errors =====
    /// Invalid input (e.g. a condition context violating its invariants)
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },

    /// Invalid configuration
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    // ===== Generic Errors =====
    /// Serialization error
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl From<SiddurError> for ExError {
    fn from(err: SiddurError) -> Self {
        match err {
            SiddurError::DateOutOfRange { date, start, end } => {
                ExError::new(ExErrorKind::DateOutOfRange)
                    .with_op("classify")
                    .with_civil_date(date)
                    .with_message(format!("Supported range is {}..={}", start, end))
            }

            SiddurError::CalendarProvider { date, message } => {
                ExError::new(ExErrorKind::CalendarProvider)
                    .with_op("to_lunar")
                    .with_civil_date(date)
                    .with_message(message)
            }

            SiddurError::UnsupportedServiceType { service } => {
                ExError::new(ExErrorKind::UnsupportedServiceType)
                    .with_op("assemble")
                    .with_service(service)
                    .with_message("Service has no section table")
            }

            SiddurError::NoApplicableVariant { service, section } => {
                ExError::new(ExErrorKind::NoApplicableVariant)
                    .with_op("assemble")
                    .with_service(service)
                    .with_section(section)
                    .with_message("Mandatory variant section matched no rule")
            }

            SiddurError::ChunkNotInCatalog { chunk } => {
                ExError::new(ExErrorKind::ChunkNotInCatalog)
                    .with_op("validate_plan")
                    .with_chunk_id(chunk)
                    .with_message("Chunk not in catalog")
            }

            SiddurError::InvalidInput { reason } => {
                ExError::new(ExErrorKind::InvalidInput).with_message(reason)
            }

            SiddurError::InvalidConfig { reason } => ExError::new(ExErrorKind::InvalidConfig)
                .with_op("load_config")
                .with_message(reason),

            SiddurError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
        }
    }
}

/// Conversion from serde_json::Error to SiddurError
impl From<serde_json::Error> for SiddurError {
    fn from(err: serde_json::Error) -> Self {
        SiddurError::Serialization {
            message: err.to_string(),
        }
    }
}
