pub mod checked;
pub mod ops;

pub use crate::domain::model::{Name, NamePolicy};
pub use crate::domain::ports::PolicyProvider;
pub use crate::utils::error::Result;
