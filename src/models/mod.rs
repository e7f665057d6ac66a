//! Models contains all structures that are used in different
//! modules of the app

pub mod cell;
pub mod column;
pub mod currency;
pub mod field_kind;
pub mod offer;
pub mod offer_value;
pub mod validation_rules;

pub use self::cell::*;
pub use self::column::*;
pub use self::currency::*;
pub use self::field_kind::*;
pub use self::offer::*;
pub use self::offer_value::*;
pub use self::validation_rules::*;
