use crate::utils::error::{NameListError, Result};
use serde::{Deserialize, Serialize};

/// 沒有空白的名字（例如 "Cher"）該如何處理
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SingleTokenPolicy {
    /// 解析成功，姓氏為空
    #[default]
    Allow,
    Reject,
}

/// 三段以上的名字（例如 "Billy Bob Thornton"）該如何處理
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MultiTokenPolicy {
    /// 第一個空白之後的全部內容都算姓氏
    #[default]
    RestIsLast,
    /// 只取第二段作為姓氏
    SecondToken,
    Reject,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NamePolicy {
    #[serde(default)]
    pub single_token: SingleTokenPolicy,
    #[serde(default)]
    pub multi_token: MultiTokenPolicy,
}

impl NamePolicy {
    pub fn lenient() -> Self {
        Self {
            single_token: SingleTokenPolicy::Allow,
            multi_token: MultiTokenPolicy::RestIsLast,
        }
    }

    pub fn strict() -> Self {
        Self {
            single_token: SingleTokenPolicy::Reject,
            multi_token: MultiTokenPolicy::Reject,
        }
    }
}

/// 借用原始字串的「名 姓」解析結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Name<'a> {
    pub raw: &'a str,
    pub first: &'a str,
    pub last: Option<&'a str>,
}

impl<'a> Name<'a> {
    /// Splits on the first space. Never fails; empty parts are kept as-is.
    pub fn split_lenient(raw: &'a str) -> Self {
        match raw.split_once(' ') {
            Some((first, last)) => Self {
                raw,
                first,
                last: Some(last),
            },
            None => Self {
                raw,
                first: raw,
                last: None,
            },
        }
    }

    pub fn parse(raw: &'a str, policy: &NamePolicy) -> std::result::Result<Self, String> {
        if raw.is_empty() {
            return Err("name is empty".to_string());
        }

        let name = Self::split_lenient(raw);
        if name.first.is_empty() {
            return Err("first name is empty".to_string());
        }

        let Some(rest) = name.last else {
            return match policy.single_token {
                SingleTokenPolicy::Allow => Ok(name),
                SingleTokenPolicy::Reject => Err("missing last name".to_string()),
            };
        };

        if rest.split(' ').any(str::is_empty) {
            return Err("contains an empty token".to_string());
        }

        match rest.split_once(' ') {
            None => Ok(name),
            Some((second, _)) => match policy.multi_token {
                MultiTokenPolicy::RestIsLast => Ok(name),
                MultiTokenPolicy::SecondToken => Ok(Self {
                    last: Some(second),
                    ..name
                }),
                MultiTokenPolicy::Reject => Err(format!(
                    "expected two tokens, got {}",
                    raw.split(' ').count()
                )),
            },
        }
    }

    /// 各部分的第一個字元（保留大小寫）
    pub fn initials(&self) -> String {
        self.first
            .chars()
            .next()
            .into_iter()
            .chain(self.last.and_then(|last| last.chars().next()))
            .collect()
    }

    pub fn last_or_empty(&self) -> &'a str {
        self.last.unwrap_or("")
    }
}

/// 解析整份名單，回報第一個不合格名字的位置
pub fn parse_names<'a, S: AsRef<str>>(
    people: &'a [S],
    policy: &NamePolicy,
) -> Result<Vec<Name<'a>>> {
    people
        .iter()
        .enumerate()
        .map(|(index, person)| {
            let raw = person.as_ref();
            Name::parse(raw, policy).map_err(|reason| NameListError::MalformedName {
                index,
                name: raw.to_string(),
                reason,
            })
        })
        .collect()
}
