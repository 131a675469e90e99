//! Sample catalog output.

use shopfront_core::catalog::seed_products;

use super::{CommandError, print_json};
use crate::Format;

/// Print the sample catalog in `format`.
#[allow(clippy::print_stdout)]
pub fn print(format: Format) -> Result<(), CommandError> {
    let products = seed_products();
    match format {
        Format::Json => print_json(&products)?,
        Format::Yaml => print!("{}", serde_yaml::to_string(&products)?),
    }
    Ok(())
}
