//! Error types for parse and query operations.
//!
//! Walk control flow (skip / abort) never appears here; those travel as
//! ordinary [`Flow`](crate::walk::Flow) values on the success channel.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SoupError>;

#[derive(Debug, Error)]
pub enum SoupError {
    /// An erroring lookup was invoked on an absent node.
    #[error("not allow to find on a blank node")]
    InvalidInput,

    /// A `find` matched nothing; `selector` names the requested query.
    #[error("not found element `{selector}`")]
    NotFound { selector: String },

    /// The reader handed to the parser failed.
    #[error("parse error: {0}")]
    Parse(#[from] std::io::Error),
}
