//! 画布配置
//!
//! 顶点放置检查使用的画布尺寸和顶点半径

use serde::{Deserialize, Serialize};

/// 默认画布宽度
pub const DEFAULT_WIDTH: f64 = 786.0;

/// 默认画布高度
pub const DEFAULT_HEIGHT: f64 = 480.0;

/// 默认顶点半径
pub const DEFAULT_RADIUS: f64 = 20.0;

/// 图存储配置
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// 画布宽度
    pub width: f64,
    /// 画布高度
    pub height: f64,
    /// 顶点半径 R，两个顶点圆心距离必须大于 2R
    pub radius: f64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            radius: DEFAULT_RADIUS,
        }
    }
}

impl StoreConfig {
    /// 位置是否在画布内（四周留出一个半径的边距）
    pub fn contains(&self, x: f64, y: f64) -> bool {
        let r = self.radius;
        x >= r && x <= self.width - r && y >= r && y <= self.height - r
    }

    /// 两个顶点之间的最小圆心距离（不含）
    pub fn min_separation(&self) -> f64 {
        self.radius * 2.0
    }
}
