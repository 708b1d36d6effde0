//! PIN hashing.

use clap::Args;

use jobsite_auth::PinHasher;
use jobsite_core::error::AppError;

use crate::output::{self, OutputFormat};

/// Arguments for `hash-pin`
#[derive(Debug, Args)]
pub struct HashPinArgs {
    /// Plaintext PIN
    pub pin: String,
}

/// Print the Argon2id PHC string for a PIN.
pub fn execute(args: &HashPinArgs, format: OutputFormat) -> Result<(), AppError> {
    if args.pin.is_empty() {
        return Err(AppError::validation("PIN must not be empty"));
    }
    let hash = PinHasher::new().hash_pin(&args.pin)?;
    output::print_fields(&[("hash", hash)], format);
    Ok(())
}
