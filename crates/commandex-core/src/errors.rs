use commandex_core_types::RequestId;
use thiserror::Error;

/// Result type alias using CommandexError
pub type Result<T> = std::result::Result<T, CommandexError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code used in log events, notifications
/// and tests. Codes never change once published.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Validation
    InvalidInput,
    InvalidConfig,

    // Store
    NotFound,
    AlreadyExists,

    // Integration/IO
    Io,
    Serialization,
    /// The workbench runtime is gone (shut down or crashed)
    Unavailable,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::AlreadyExists => "ERR_ALREADY_EXISTS",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Unavailable => "ERR_UNAVAILABLE",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Classification plus context fields, built up with the `with_*` methods.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    command_name: Option<String>,
    goal_id: Option<String>,
    request_id: Option<RequestId>,
    message: String,
    source: Option<Box<ExError>>,
}

impl ExError {
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            command_name: None,
            goal_id: None,
            request_id: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add the name of the command involved
    pub fn with_command_name(mut self, name: impl Into<String>) -> Self {
        self.command_name = Some(name.into());
        self
    }

    /// Add the goal id involved
    pub fn with_goal_id(mut self, goal_id: impl Into<String>) -> Self {
        self.goal_id = Some(goal_id.into());
        self
    }

    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
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

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    pub fn command_name(&self) -> Option<&str> {
        self.command_name.as_deref()
    }

    pub fn goal_id(&self) -> Option<&str> {
        self.goal_id.as_deref()
    }

    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
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
        if let Some(name) = &self.command_name {
            write!(f, " (command: {})", name)?;
        }
        if let Some(goal_id) = &self.goal_id {
            write!(f, " (goal: {})", goal_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|s| s as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Error taxonomy for command store, registry and configuration operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommandexError {
    // ===== Store Errors =====
    /// No command with this name in the store
    #[error("Command not found: {name}")]
    CommandNotFound { name: String },

    /// Another command already uses this name
    #[error("Command already exists: {name}")]
    CommandAlreadyExists { name: String },

    // ===== Validation Errors =====
    /// Command name is empty or whitespace-only
    #[error("Invalid command name: {reason}")]
    InvalidCommandName { reason: String },

    /// Command type id is empty
    #[error("Command {name} has no type")]
    MissingCommandType { name: String },

    /// Goal id or label is empty
    #[error("Invalid goal: {reason}")]
    InvalidGoal { reason: String },

    // ===== Configuration Errors =====
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    // ===== Generic Errors =====
    /// Serialization error (JSON/TOML encoding or decoding)
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl From<CommandexError> for ExError {
    fn from(err: CommandexError) -> Self {
        match err {
            CommandexError::CommandNotFound { name } => ExError::new(ExErrorKind::NotFound)
                .with_command_name(name)
                .with_message("Command not found"),
            CommandexError::CommandAlreadyExists { name } => {
                ExError::new(ExErrorKind::AlreadyExists)
                    .with_command_name(name)
                    .with_message("Command already exists")
            }
            CommandexError::InvalidCommandName { reason } => {
                ExError::new(ExErrorKind::InvalidInput)
                    .with_message(format!("Invalid command name: {}", reason))
            }
            CommandexError::MissingCommandType { name } => ExError::new(ExErrorKind::InvalidInput)
                .with_command_name(name)
                .with_message("Command type cannot be empty"),
            CommandexError::InvalidGoal { reason } => ExError::new(ExErrorKind::InvalidInput)
                .with_message(format!("Invalid goal: {}", reason)),
            CommandexError::InvalidConfig { reason } => {
                ExError::new(ExErrorKind::InvalidConfig).with_message(reason)
            }
            CommandexError::Serialization { message } => {
                ExError::new(ExErrorKind::Serialization).with_message(message)
            }
            CommandexError::Internal { message } => {
                ExError::new(ExErrorKind::Internal).with_message(message)
            }
        }
    }
}

impl From<serde_json::Error> for CommandexError {
    fn from(err: serde_json::Error) -> Self {
        CommandexError::Serialization {
            message: err.to_string(),
        }
    }
}
