//! 顶点定义

use super::label::Label;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 画布坐标
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// 欧几里得距离
    pub fn distance(&self, other: &Position) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// 顶点
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    /// 顶点标签
    label: Label,
    /// 画布位置
    position: Position,
}

impl Vertex {
    pub fn new(label: Label, position: Position) -> Self {
        Self { label, position }
    }

    /// 获取顶点标签
    pub fn label(&self) -> Label {
        self.label
    }

    /// 获取顶点位置
    pub fn position(&self) -> Position {
        self.position
    }
}
