use crate::core::ops;
use crate::core::PolicyProvider;
use crate::domain::model::{parse_names, Name, NamePolicy};
use crate::utils::error::Result;
use crate::utils::validation::validate_single_char;

/// 先依政策驗證名單，再執行與 [`ops`] 相同的操作
pub struct CheckedNameList<P: PolicyProvider> {
    policy: P,
}

impl<P: PolicyProvider> CheckedNameList<P> {
    pub fn new(policy: P) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> NamePolicy {
        self.policy.name_policy()
    }

    fn parse<'a, S: AsRef<str>>(&self, op: &str, people: &'a [S]) -> Result<Vec<Name<'a>>> {
        let policy = self.policy();
        let names = parse_names(people, &policy).inspect_err(|e| {
            tracing::warn!("{} rejected input: {}", op, e);
        })?;
        tracing::debug!("{}: {} names accepted ({:?})", op, names.len(), policy);
        Ok(names)
    }

    pub fn filter_by_length<S: AsRef<str>>(&self, people: &[S], length: usize) -> Result<Vec<String>> {
        self.parse("filter_by_length", people)?;
        let kept = ops::filter_by_length(people, length);
        tracing::debug!("filter_by_length: kept {} of {}", kept.len(), people.len());
        Ok(kept)
    }

    pub fn every_n_person<S: AsRef<str>>(&self, people: &[S], n: usize) -> Result<Vec<String>> {
        self.parse("every_n_person", people)?;
        Ok(ops::every_n_person(people, n))
    }

    pub fn initials<S: AsRef<str>>(&self, people: &[S]) -> Result<Vec<String>> {
        let names = self.parse("initials", people)?;
        Ok(names.iter().map(Name::initials).collect())
    }

    pub fn people_with_position<S: AsRef<str>>(&self, people: &[S]) -> Result<Vec<String>> {
        self.parse("people_with_position", people)?;
        Ok(ops::people_with_position(people))
    }

    pub fn sort_by_first_name<S: AsRef<str>>(&self, people: &[S]) -> Result<Vec<String>> {
        self.parse("sort_by_first_name", people)?;
        Ok(ops::sort_by_first_name(people))
    }

    /// 姓氏鍵值依設定的 multi_token 政策決定
    pub fn sort_by_last_name<S: AsRef<str>>(&self, people: &[S]) -> Result<Vec<String>> {
        let mut names = self.parse("sort_by_last_name", people)?;
        ops::sort_names_by_last(&mut names);
        Ok(names.into_iter().map(|name| name.raw.to_string()).collect())
    }

    pub fn count_total_characters<S: AsRef<str>>(&self, people: &[S]) -> Result<usize> {
        self.parse("count_total_characters", people)?;
        Ok(ops::count_total_characters(people))
    }

    pub fn everyone_has_letter<S: AsRef<str>>(&self, people: &[S], letter: &str) -> Result<bool> {
        validate_single_char("letter", letter)?;
        self.parse("everyone_has_letter", people)?;
        Ok(ops::everyone_has_letter(people, letter))
    }

    pub fn someone_has_letter<S: AsRef<str>>(&self, people: &[S], letter: &str) -> Result<bool> {
        validate_single_char("letter", letter)?;
        self.parse("someone_has_letter", people)?;
        Ok(ops::someone_has_letter(people, letter))
    }
}
