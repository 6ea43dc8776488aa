//! MSTGraph - 交互式最小生成树图核心
//!
//! 在最多 26 个带标签顶点上构建带权无向图，并用 Kruskal 算法计算：
//! - 顶点标签分配与放置检查
//! - 边的规范化、去重与按权重稳定排序
//! - 路径压缩 + 按秩合并的并查集
//! - 最小生成树（森林）及总权重

pub mod algorithm;
pub mod cli;
pub mod config;
pub mod error;
pub mod graph;

// 重导出常用类型
pub use algorithm::{DisjointSet, MstEngine, MstResult};
pub use config::StoreConfig;
pub use error::{Error, Result};
pub use graph::{Edge, EdgeKey, GraphSnapshot, GraphStore, Label, Position, Vertex, Weight};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
