//! Error type shared by the engine and the command line front end.

use thiserror::Error;

/// Errors surfaced before or around a game.
///
/// Rule evaluation itself never fails; these cover bad input and a
/// display sink that stops accepting output.
#[derive(Debug, Error)]
pub enum GameError {
    /// A command line argument is not a valid integer.
    #[error("invalid value '{value}' for {name}: expected an integer")]
    InvalidArgument { name: &'static str, value: String },

    /// Player or dice counts outside the playable range.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The display sink failed to write.
    #[error("output error: {0}")]
    Output(#[from] std::io::Error),
}
