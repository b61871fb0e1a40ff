//! Chiprush client.
//!
//! Talks to the external balance ledger (the authority for every balance) and
//! owns the player session's predicted balance. The policy throughout is
//! "optimistic, never block": a failed ledger call degrades to local state
//! with a warning, never to a user-facing error.

pub mod ledger;
pub mod session;

pub use ledger::{LedgerBackend, SupabaseLedger};
pub use session::PlayerSession;

use thiserror::Error;

/// Error type for ledger operations.
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),
    #[error("failed: {status}: {body}")]
    FailedWithBody {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),
}

/// Result type for ledger operations.
pub type Result<T> = std::result::Result<T, LedgerError>;
