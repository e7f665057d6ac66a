//! Services is a core layer for the app business logic like
//! validation and transactional updates.

pub mod columns;
pub mod error;
pub mod offers;
pub mod system;
pub mod types;

pub use self::columns::*;
pub use self::error::*;
pub use self::offers::*;
pub use self::system::*;
pub use self::types::*;
