use crate::domain::model::NamePolicy;

pub trait PolicyProvider: Send + Sync {
    fn name_policy(&self) -> NamePolicy;
}

impl PolicyProvider for NamePolicy {
    fn name_policy(&self) -> NamePolicy {
        *self
    }
}
