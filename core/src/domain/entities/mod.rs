//! Domain entities representing core business objects.

pub mod device;
pub mod logout;
pub mod principal;
pub mod token;


// Re-export commonly used types
pub use device::{DeviceIdentity, DeviceType};
pub use logout::LogoutRecord;
pub use principal::{AuthenticatedPrincipal, Principal};
pub use token::{Claims, IssuedRefreshToken, RefreshToken};
