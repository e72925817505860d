//! Route error types
//!
//! `RouteRequestError` is the error surfaced to callers when a route request
//! (create, join, terminate) fails. It carries a stable numeric result code so
//! it can be reported across process boundaries.

/// Result code of a route request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum ResultCode {
    /// Unknown failure
    UnknownError = 0,
    /// Request succeeded
    Ok = 1,
    /// Request did not complete in time
    TimedOut = 2,
    /// No route with the given ID
    RouteNotFound = 3,
    /// No sink with the given ID
    SinkNotFound = 4,
    /// Requesting origin is not allowed
    InvalidOrigin = 5,
    /// Request and route disagree on incognito state
    IncognitoMismatch = 6,
    /// No provider can handle the source
    NoSupportedProvider = 7,
    /// Request was cancelled
    Cancelled = 8,
    /// A route for the presentation already exists
    RouteAlreadyExists = 9,
}

impl ResultCode {
    /// Get the numeric value
    pub fn as_u32(self) -> u32 {
        self as u32
    }

    /// Get the snake-case name
    pub fn name(self) -> &'static str {
        match self {
            ResultCode::UnknownError => "unknown_error",
            ResultCode::Ok => "ok",
            ResultCode::TimedOut => "timed_out",
            ResultCode::RouteNotFound => "route_not_found",
            ResultCode::SinkNotFound => "sink_not_found",
            ResultCode::InvalidOrigin => "invalid_origin",
            ResultCode::IncognitoMismatch => "incognito_mismatch",
            ResultCode::NoSupportedProvider => "no_supported_provider",
            ResultCode::Cancelled => "cancelled",
            ResultCode::RouteAlreadyExists => "route_already_exists",
        }
    }
}

impl TryFrom<u32> for ResultCode {
    type Error = u32;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        let code = match value {
            0 => ResultCode::UnknownError,
            1 => ResultCode::Ok,
            2 => ResultCode::TimedOut,
            3 => ResultCode::RouteNotFound,
            4 => ResultCode::SinkNotFound,
            5 => ResultCode::InvalidOrigin,
            6 => ResultCode::IncognitoMismatch,
            7 => ResultCode::NoSupportedProvider,
            8 => ResultCode::Cancelled,
            9 => ResultCode::RouteAlreadyExists,
            other => return Err(other),
        };
        Ok(code)
    }
}

impl std::fmt::Display for ResultCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned by a failed route request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRequestError {
    code: ResultCode,
    message: String,
    details: Option<String>,
}

impl RouteRequestError {
    /// Create a new route request error
    pub fn new(code: ResultCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Attach a detailed message
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Get the result code
    pub fn code(&self) -> ResultCode {
        self.code
    }

    /// Get the message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the detailed message, if any
    pub fn details(&self) -> Option<&str> {
        self.details.as_deref()
    }

    /// Check if the code reports success
    pub fn is_success(&self) -> bool {
        self.code == ResultCode::Ok
    }
}

impl std::fmt::Display for RouteRequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Route request failed ({}): {}", self.code, self.message)?;
        if let Some(details) = &self.details {
            write!(f, " ({})", details)?;
        }
        Ok(())
    }
}

impl std::error::Error for RouteRequestError {}

/// Error returned when a string is not an encoded route ID
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteIdParseError {
    input: String,
}

impl RouteIdParseError {
    pub(super) fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
        }
    }

    /// Get the rejected input
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl std::fmt::Display for RouteIdParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid route ID: {}", self.input)
    }
}

impl std::error::Error for RouteIdParseError {}
