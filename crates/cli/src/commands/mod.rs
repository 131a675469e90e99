//! CLI command implementations.
//!
//! Each command runs one action creator against the store and prints the
//! slice it updated. A slice that ends up holding an error is reported as a
//! failed command.

pub mod cart;
pub mod catalog;
pub mod orders;
pub mod products;
pub mod user;

use serde::Serialize;
use thiserror::Error;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The backend rejected the request or could not be reached.
    #[error("{0}")]
    Failed(String),

    /// The cart has nothing to order.
    #[error("Your cart is empty")]
    EmptyCart,

    /// Checkout needs a choice that has not been made yet.
    #[error("No {0} saved; run `shop cart {1}` first")]
    MissingCheckoutStep(&'static str, &'static str),

    #[error("Failed to encode output: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to encode output: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Print `value` as pretty JSON on stdout.
#[allow(clippy::print_stdout)]
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CommandError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print `slice`, then turn a recorded failure into a command error.
pub fn report<T: Serialize>(slice: &T, error: Option<&String>) -> Result<(), CommandError> {
    print_json(slice)?;
    match error {
        Some(message) => Err(CommandError::Failed(message.clone())),
        None => Ok(()),
    }
}
