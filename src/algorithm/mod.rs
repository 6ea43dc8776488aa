//! 图算法模块
//!
//! 包含并查集和 Kruskal 最小生成树算法

mod disjoint_set;
mod kruskal;

pub use disjoint_set::DisjointSet;
pub use kruskal::{MstEngine, MstResult};
