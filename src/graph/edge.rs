//! 边定义
//!
//! 无向带权边，按字母顺序规范化端点方向

use super::label::Label;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 边权重
pub type Weight = u32;

/// 最小边权重
pub const MIN_WEIGHT: Weight = 1;

/// 最大边权重
pub const MAX_WEIGHT: Weight = 999;

/// 规范化的边键：`src` 总是字母顺序较小的一端
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeKey {
    pub src: Label,
    pub dest: Label,
}

impl EdgeKey {
    /// 规范化两个端点的顺序
    pub fn canonical(a: Label, b: Label) -> Self {
        if a <= b {
            Self { src: a, dest: b }
        } else {
            Self { src: b, dest: a }
        }
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.src, self.dest)
    }
}

/// 边
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// 源顶点（字母顺序较小）
    src: Label,
    /// 目标顶点
    dest: Label,
    /// 权重
    weight: Weight,
}

impl Edge {
    /// 创建边，端点按字母顺序规范化
    pub fn new(a: Label, b: Label, weight: Weight) -> Self {
        let key = EdgeKey::canonical(a, b);
        Self {
            src: key.src,
            dest: key.dest,
            weight,
        }
    }

    pub fn src(&self) -> Label {
        self.src
    }

    pub fn dest(&self) -> Label {
        self.dest
    }

    pub fn weight(&self) -> Weight {
        self.weight
    }

    pub fn key(&self) -> EdgeKey {
        EdgeKey {
            src: self.src,
            dest: self.dest,
        }
    }

    /// 边是否与顶点关联
    pub fn touches(&self, label: Label) -> bool {
        self.src == label || self.dest == label
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}:{}", self.src, self.dest, self.weight)
    }
}
