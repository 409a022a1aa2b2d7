pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{LoggingConfig, NameConfig};
pub use core::checked::CheckedNameList;
pub use core::ops::{
    count_total_characters, every_n_person, everyone_has_letter, filter_by_length, initials,
    people_with_position, someone_has_letter, sort_by_first_name, sort_by_last_name,
};
pub use domain::model::{parse_names, MultiTokenPolicy, Name, NamePolicy, SingleTokenPolicy};
pub use domain::ports::PolicyProvider;
pub use utils::error::{NameListError, Result};
