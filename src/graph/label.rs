//! 顶点标签
//!
//! 顶点使用 A–Z 单字母标签，最多 26 个

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// 标签字母表
pub const ALPHABET: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// 顶点数量上限
pub const MAX_VERTICES: usize = ALPHABET.len();

/// 顶点标签（保证为大写 ASCII 字母）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Label(char);

impl Label {
    /// 从字符创建标签，小写字母会被转换为大写
    pub fn new(c: char) -> Result<Self> {
        let upper = c.to_ascii_uppercase();
        if upper.is_ascii_uppercase() {
            Ok(Self(upper))
        } else {
            Err(Error::ParseError(format!("标签必须是 A-Z 的字母: {:?}", c)))
        }
    }

    pub fn as_char(&self) -> char {
        self.0
    }

    /// 在字母表中的位置（A = 0）
    pub fn index(&self) -> usize {
        (self.0 as u8 - b'A') as usize
    }
}

impl TryFrom<char> for Label {
    type Error = Error;

    fn try_from(c: char) -> Result<Self> {
        Self::new(c)
    }
}

impl From<Label> for char {
    fn from(label: Label) -> Self {
        label.0
    }
}

impl FromStr for Label {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::new(c),
            _ => Err(Error::ParseError(format!("标签必须是单个字母: {:?}", s))),
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 分配下一个未使用的标签（按 A→Z 顺序）
pub fn next_label<I>(existing: I) -> Result<Label>
where
    I: IntoIterator<Item = Label>,
{
    let taken: HashSet<Label> = existing.into_iter().collect();
    ALPHABET
        .iter()
        .map(|&c| Label(c))
        .find(|label| !taken.contains(label))
        .ok_or(Error::CapacityExceeded(MAX_VERTICES))
}
