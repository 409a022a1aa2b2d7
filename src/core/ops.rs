//! Permissive list operations over full-name strings.
//!
//! Inputs are borrowed, so none of these functions can change the caller's
//! list. Malformed names never cause a panic or an error here; see
//! [`crate::core::checked`] for the validated variants.

use crate::domain::model::Name;

/// 保留字元數（含空白）嚴格大於 `length` 的名字
pub fn filter_by_length<S: AsRef<str>>(people: &[S], length: usize) -> Vec<String> {
    people
        .iter()
        .filter(|person| person.as_ref().chars().count() > length)
        .map(|person| person.as_ref().to_string())
        .collect()
}

/// Every `n`th person by position, starting at index 0. `n == 0` returns a copy.
///
/// ```
/// use name_list_ops::every_n_person;
///
/// let people = ["Matt", "Kim", "Kanye", "Obama", "Hans"];
/// assert_eq!(every_n_person(&people, 2), vec!["Matt", "Kanye", "Hans"]);
/// ```
pub fn every_n_person<S: AsRef<str>>(people: &[S], n: usize) -> Vec<String> {
    let step = n.max(1);
    people
        .iter()
        .step_by(step)
        .map(|person| person.as_ref().to_string())
        .collect()
}

/// 每個人的縮寫，例如 "Kanye West" -> "KW"
pub fn initials<S: AsRef<str>>(people: &[S]) -> Vec<String> {
    people
        .iter()
        .map(|person| Name::split_lenient(person.as_ref()).initials())
        .collect()
}

/// `"{index}: {name}"` for every person, 0-based.
pub fn people_with_position<S: AsRef<str>>(people: &[S]) -> Vec<String> {
    people
        .iter()
        .enumerate()
        .map(|(index, person)| format!("{}: {}", index, person.as_ref()))
        .collect()
}

/// 依完整字串排序（等同於先比名字）
pub fn sort_by_first_name<S: AsRef<str>>(people: &[S]) -> Vec<String> {
    let mut sorted: Vec<String> = people.iter().map(|p| p.as_ref().to_string()).collect();
    sorted.sort();
    sorted
}

/// Sorts by the text after the first space, then by first name.
pub fn sort_by_last_name<S: AsRef<str>>(people: &[S]) -> Vec<String> {
    let mut names: Vec<Name<'_>> = people
        .iter()
        .map(|person| Name::split_lenient(person.as_ref()))
        .collect();
    sort_names_by_last(&mut names);
    names.into_iter().map(|name| name.raw.to_string()).collect()
}

pub(crate) fn sort_names_by_last(names: &mut [Name<'_>]) {
    names.sort_by(|a, b| {
        a.last_or_empty()
            .cmp(b.last_or_empty())
            .then_with(|| a.first.cmp(b.first))
    });
}

pub fn count_total_characters<S: AsRef<str>>(people: &[S]) -> usize {
    people.iter().map(|person| person.as_ref().chars().count()).sum()
}

/// 是否每個人的名字都含有 `letter`（區分大小寫）；空名單為 true
pub fn everyone_has_letter<S: AsRef<str>>(people: &[S], letter: &str) -> bool {
    people.iter().all(|person| person.as_ref().contains(letter))
}

/// 是否至少一個人的名字含有 `letter`（區分大小寫）；空名單為 false
pub fn someone_has_letter<S: AsRef<str>>(people: &[S], letter: &str) -> bool {
    people.iter().any(|person| person.as_ref().contains(letter))
}
