//! Refresh token repository seam.
//!
//! The in-memory implementation ships unconditionally: it backs the
//! integration tests (compiled without `cfg(test)` on this crate) and local
//! development until a persistent implementation is wired in.

pub mod r#trait {
    pub use super::trait_::*;
}
#[path = "trait.rs"]
mod trait_;

pub mod mock;


pub use mock::InMemoryRefreshTokenRepository;
pub use r#trait::RefreshTokenRepository;
