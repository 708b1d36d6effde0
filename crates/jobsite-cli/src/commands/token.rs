//! Session token inspection.

use chrono::Utc;
use clap::Args;

use jobsite_auth::SessionResolver;
use jobsite_core::error::AppError;
use jobsite_entity::PrincipalKind;

use crate::output::{self, OutputFormat};

/// Arguments for `inspect-token`
#[derive(Debug, Args)]
pub struct InspectTokenArgs {
    /// Compact JWT
    pub token: String,

    /// Namespace the token must belong to (admin or contractor)
    #[arg(long)]
    pub expect: Option<String>,
}

/// Verify a token with the configured secret and print its claims.
///
/// Unlike the HTTP surface, this reports the precise rejection reason.
pub fn execute(args: &InspectTokenArgs, config_path: &str, format: OutputFormat) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;
    let secret = config.signing_secret()?;
    let resolver = SessionResolver::new(&secret);
    let expect = args
        .expect
        .as_deref()
        .map(str::parse::<PrincipalKind>)
        .transpose()?;

    let claims = resolver
        .decode_claims(&args.token)
        .map_err(|e| AppError::validation(format!("Token rejected: {e}")))?;

    let status = match resolver.resolve_at(&args.token, expect, Utc::now()) {
        Ok(_) => "valid".to_string(),
        Err(e) => e.to_string(),
    };

    output::print_fields(
        &[
            ("status", status),
            ("subject", claims.sub.to_string()),
            ("company", claims.company_id.to_string()),
            ("role", claims.role.to_string()),
            ("name", claims.principal.display_name().to_string()),
            ("employee_id", claims.principal.employee_id().to_string()),
            ("issued_at", claims.issued_at().to_rfc3339()),
            ("expires_at", claims.expires_at().to_rfc3339()),
        ],
        format,
    );
    Ok(())
}
