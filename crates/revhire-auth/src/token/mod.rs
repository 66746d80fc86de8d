//! Bearer token issuance and decoding.

pub mod claims;
pub mod issuer;

pub use claims::Claims;
pub use issuer::{AccessToken, TokenIssuer};
