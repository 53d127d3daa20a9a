//! Authentication utilities
//!
//! Session tokens (JWT) and the external identity verification seam.

mod identity;
mod jwt;

pub use identity::{
    GoogleIdentityProvider, IdentityProvider, StaticIdentityProvider, VerifiedIdentity,
};
pub use jwt::{Claims, JwtService, TokenPair, TokenType};
