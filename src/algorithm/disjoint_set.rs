//! 并查集（不相交集合）
//!
//! 路径压缩 + 按秩合并，用于 Kruskal 算法中检测环

use crate::error::{Error, Result};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// 集合节点
#[derive(Debug, Clone, Copy)]
struct Node<T> {
    parent: T,
    rank: u32,
}

/// 并查集
#[derive(Debug, Clone)]
pub struct DisjointSet<T> {
    nodes: HashMap<T, Node<T>>,
}

impl<T> Default for DisjointSet<T> {
    fn default() -> Self {
        Self {
            nodes: HashMap::new(),
        }
    }
}

impl<T> DisjointSet<T>
where
    T: Copy + Eq + Hash + Debug,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册节点为单元素集合；已存在的节点保持不变
    pub fn make_set(&mut self, node: T) {
        self.nodes.entry(node).or_insert(Node {
            parent: node,
            rank: 0,
        });
    }

    /// 查找根节点，并将路径上所有节点直接指向根
    pub fn find(&mut self, node: T) -> Result<T> {
        let mut root = node;
        loop {
            let parent = self.parent(root)?;
            if parent == root {
                break;
            }
            root = parent;
        }

        let mut current = node;
        while current != root {
            let entry = self
                .nodes
                .get_mut(&current)
                .ok_or_else(|| Error::UnknownNode(format!("{:?}", current)))?;
            current = std::mem::replace(&mut entry.parent, root);
        }

        Ok(root)
    }

    /// 合并两个节点所在的集合
    ///
    /// 已在同一集合时返回 `false`。秩较低的根挂到秩较高的根下；
    /// 秩相同时 `a` 的根成为父节点，其秩加一。
    pub fn union(&mut self, a: T, b: T) -> Result<bool> {
        let root_a = self.find(a)?;
        let root_b = self.find(b)?;
        if root_a == root_b {
            return Ok(false);
        }

        let rank_a = self.rank(root_a)?;
        let rank_b = self.rank(root_b)?;
        let (parent, child) = if rank_a < rank_b {
            (root_b, root_a)
        } else {
            (root_a, root_b)
        };

        if let Some(node) = self.nodes.get_mut(&child) {
            node.parent = parent;
        }
        if rank_a == rank_b {
            if let Some(node) = self.nodes.get_mut(&parent) {
                node.rank += 1;
            }
        }

        Ok(true)
    }

    /// 两个节点是否在同一集合
    pub fn same_set(&mut self, a: T, b: T) -> Result<bool> {
        Ok(self.find(a)? == self.find(b)?)
    }

    /// 节点的秩
    pub fn rank(&self, node: T) -> Result<u32> {
        self.nodes
            .get(&node)
            .map(|n| n.rank)
            .ok_or_else(|| Error::UnknownNode(format!("{:?}", node)))
    }

    pub fn contains(&self, node: T) -> bool {
        self.nodes.contains_key(&node)
    }

    /// 已注册的节点数量
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn parent(&self, node: T) -> Result<T> {
        self.nodes
            .get(&node)
            .map(|n| n.parent)
            .ok_or_else(|| Error::UnknownNode(format!("{:?}", node)))
    }
}

impl<T> FromIterator<T> for DisjointSet<T>
where
    T: Copy + Eq + Hash + Debug,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        for node in iter {
            set.make_set(node);
        }
        set
    }
}
