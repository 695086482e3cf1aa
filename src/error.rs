//! Error handling module for the pallet wizard
//!
//! Provides centralized error handling with proper error types using thiserror.
//! All errors in the application should use these types for consistency.

use thiserror::Error;

/// Main error type for the pallet wizard
#[derive(Error, Debug)]
pub enum WizardError {
    /// Step 1: the entered code is not a recognized pallet type
    #[error("invalid pallet type")]
    InvalidPalletType,

    /// Step 2: a token is not a comma-separated height,weight pair
    #[error("invalid input format. Use 'height,weight' for each pallet")]
    MalformedPair,

    /// Step 2: the height field is not a finite decimal number
    #[error("invalid height input")]
    InvalidHeight,

    /// Step 2: the weight field is not a finite decimal number
    #[error("invalid weight input")]
    InvalidWeight,

    /// IO errors (terminal setup, event reads)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal/UI errors
    #[error("Terminal error: {0}")]
    Terminal(String),
}

/// Result type alias for wizard operations
pub type Result<T> = std::result::Result<T, WizardError>;

impl WizardError {
    /// Create a terminal error
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }

    /// Whether the wizard can recover by re-prompting on the current step.
    ///
    /// All user-input errors are recoverable; IO and terminal failures
    /// abort the session.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::InvalidPalletType | Self::MalformedPair | Self::InvalidHeight | Self::InvalidWeight
        )
    }
}
