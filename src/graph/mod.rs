//! 图核心模块
//!
//! 定义顶点、边、标签分配和图存储

mod edge;
mod label;
mod store;
mod vertex;

pub use edge::{Edge, EdgeKey, Weight, MAX_WEIGHT, MIN_WEIGHT};
pub use label::{next_label, Label, ALPHABET, MAX_VERTICES};
pub use store::{GraphSnapshot, GraphStore};
pub use vertex::{Position, Vertex};
