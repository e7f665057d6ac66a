//! Repos is a module responsible for interacting with postgres db

pub mod columns;
pub mod error;
pub mod offer_values;
pub mod offers;
pub mod repo_factory;
pub mod types;

pub use self::columns::*;
pub use self::error::*;
pub use self::offer_values::*;
pub use self::offers::*;
pub use self::repo_factory::*;
pub use self::types::*;
