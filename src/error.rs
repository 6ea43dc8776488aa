//! 错误类型定义

use crate::graph::Label;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("顶点数量已达上限 ({0})")]
    CapacityExceeded(usize),

    #[error("无效的顶点位置: {0}")]
    InvalidPlacement(String),

    #[error("无效的边: {0}")]
    InvalidEdge(String),

    #[error("未找到: {0}")]
    NotFound(String),

    #[error("图中没有顶点或边")]
    EmptyGraph,

    #[error("图中存在未连接的顶点: {0}")]
    DisconnectedVertex(Label),

    #[error("并查集中不存在节点: {0}")]
    UnknownNode(String),

    #[error("解析错误: {0}")]
    ParseError(String),

    #[error("序列化错误: {0}")]
    SerializationError(String),
}
