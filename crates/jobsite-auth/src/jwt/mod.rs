//! Session token issuing and resolution.

pub mod claims;
pub mod decoder;
pub mod encoder;

pub use claims::Claims;
pub use decoder::{ResolvedSession, SessionResolver};
pub use encoder::{IssuedToken, TokenIssuer};
