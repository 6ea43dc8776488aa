//! 图存储
//!
//! 保存当前的顶点集合与边集合，维护以下不变量：
//! - 顶点标签唯一，最多 26 个顶点
//! - 边按规范化的 (src, dest) 去重，重复插入覆盖旧边
//! - 边集合始终按权重升序排列，同权重按插入顺序（稳定排序）
//!
//! 每个命令要么完全成功，要么不改变存储。

use super::edge::{Edge, EdgeKey, Weight, MAX_WEIGHT, MIN_WEIGHT};
use super::label::{next_label, Label, MAX_VERTICES};
use super::vertex::{Position, Vertex};
use crate::algorithm::{MstEngine, MstResult};
use crate::config::StoreConfig;
use crate::error::{Error, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// 图的不可变快照
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub vertices: Vec<Vertex>,
    pub edges: Vec<Edge>,
}

/// 图存储
#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    /// 画布配置
    config: StoreConfig,
    /// 标签 -> 顶点（保持插入顺序）
    vertices: IndexMap<Label, Vertex>,
    /// 按权重升序排列的边
    edges: Vec<Edge>,
}

impl GraphStore {
    /// 创建空的图存储
    pub fn new(config: StoreConfig) -> Self {
        Self {
            config,
            vertices: IndexMap::new(),
            edges: Vec::new(),
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    // ==================== 顶点操作 ====================

    /// 在指定位置添加顶点，自动分配下一个未使用的标签
    pub fn add_vertex(&mut self, position: Position) -> Result<Vertex> {
        if self.vertices.len() >= MAX_VERTICES {
            return Err(Error::CapacityExceeded(MAX_VERTICES));
        }
        self.check_placement(position)?;

        let label = next_label(self.vertices.keys().copied())?;
        let vertex = Vertex::new(label, position);
        self.vertices.insert(label, vertex.clone());

        debug!(%label, %position, "添加顶点");
        Ok(vertex)
    }

    /// 检查位置是否在画布内且不与已有顶点重叠
    fn check_placement(&self, position: Position) -> Result<()> {
        if !self.config.contains(position.x, position.y) {
            return Err(Error::InvalidPlacement(format!("{} 超出画布范围", position)));
        }

        let min = self.config.min_separation();
        if let Some(other) = self
            .vertices
            .values()
            .find(|v| v.position().distance(&position) <= min)
        {
            return Err(Error::InvalidPlacement(format!(
                "{} 与顶点 {} 重叠",
                position,
                other.label()
            )));
        }

        Ok(())
    }

    /// 删除顶点及其所有关联的边
    pub fn remove_vertex(&mut self, label: Label) -> Result<()> {
        if self.vertices.shift_remove(&label).is_none() {
            return Err(Error::NotFound(format!("顶点 {} 不存在", label)));
        }

        let before = self.edges.len();
        self.edges.retain(|e| !e.touches(label));

        debug!(%label, removed_edges = before - self.edges.len(), "删除顶点");
        Ok(())
    }

    /// 获取顶点
    pub fn vertex(&self, label: Label) -> Option<&Vertex> {
        self.vertices.get(&label)
    }

    /// 按插入顺序遍历顶点
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> + '_ {
        self.vertices.values()
    }

    /// 顶点副本
    pub fn list_vertices(&self) -> Vec<Vertex> {
        self.vertices.values().cloned().collect()
    }

    pub fn contains_vertex(&self, label: Label) -> bool {
        self.vertices.contains_key(&label)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    // ==================== 边操作 ====================

    /// 添加边；相同端点的旧边会被覆盖
    pub fn add_edge(&mut self, src: Label, dest: Label, weight: Weight) -> Result<Edge> {
        if src == dest {
            return Err(Error::InvalidEdge(format!("不允许自环: {}-{}", src, dest)));
        }
        if !(MIN_WEIGHT..=MAX_WEIGHT).contains(&weight) {
            return Err(Error::InvalidEdge(format!(
                "权重 {} 超出范围 [{}, {}]",
                weight, MIN_WEIGHT, MAX_WEIGHT
            )));
        }
        for label in [src, dest] {
            if !self.contains_vertex(label) {
                return Err(Error::InvalidEdge(format!("顶点 {} 不存在", label)));
            }
        }

        let edge = Edge::new(src, dest, weight);
        let key = edge.key();
        let before = self.edges.len();
        self.edges.retain(|e| e.key() != key);
        let replaced = before != self.edges.len();

        self.edges.push(edge);
        self.sort_edges();

        debug!(%edge, replaced, "添加边");
        Ok(edge)
    }

    /// 删除与 (src, dest, weight) 完全匹配的边
    ///
    /// 端点按给定方向比较，不做规范化：`B A 5` 不会匹配存储的 `A-B:5`。
    pub fn remove_edge(&mut self, src: Label, dest: Label, weight: Weight) -> Result<()> {
        let before = self.edges.len();
        self.edges
            .retain(|e| !(e.src() == src && e.dest() == dest && e.weight() == weight));

        if self.edges.len() == before {
            return Err(Error::NotFound(format!(
                "不存在边 {}-{}:{}",
                src, dest, weight
            )));
        }

        debug!(%src, %dest, weight, "删除边");
        Ok(())
    }

    /// 按规范化键查找边
    pub fn edge(&self, key: EdgeKey) -> Option<&Edge> {
        self.edges.iter().find(|e| e.key() == key)
    }

    /// 按权重升序排列的边
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// 边副本（按权重升序）
    pub fn list_edges(&self) -> Vec<Edge> {
        self.edges.clone()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// 边两端顶点的位置（用于绘制线段）
    pub fn edge_endpoints(&self, edge: &Edge) -> Option<(Position, Position)> {
        let a = self.vertex(edge.src())?.position();
        let b = self.vertex(edge.dest())?.position();
        Some((a, b))
    }

    /// 稳定排序，同权重保持插入顺序
    fn sort_edges(&mut self) {
        self.edges.sort_by_key(|e| e.weight());
    }

    // ==================== 整体操作 ====================

    /// 清空所有顶点和边
    pub fn clear_all(&mut self) {
        self.vertices.clear();
        self.edges.clear();
        debug!("清空图");
    }

    /// 图中是否没有任何顶点
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// 计算最小生成树（森林）
    pub fn compute_mst(&self) -> Result<MstResult> {
        MstEngine::new(self).compute()
    }

    /// 获取快照
    pub fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot {
            vertices: self.list_vertices(),
            edges: self.list_edges(),
        }
    }
}
