//! Kruskal 最小生成树算法
//!
//! 按权重升序处理边，借助并查集跳过会形成环的边。
//! 图存储已保证边有序（同权重按插入顺序），因此结果是确定的。

use super::disjoint_set::DisjointSet;
use crate::error::{Error, Result};
use crate::graph::{Edge, GraphStore, Label};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{info, warn};

/// 最小生成树结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MstResult {
    /// 按选中顺序排列的边
    pub selected_edges: Vec<Edge>,
    /// 总权重
    pub total_cost: u32,
    /// 计算时的顶点数
    pub vertex_count: usize,
}

impl MstResult {
    /// 边是否被选入生成树
    pub fn contains(&self, edge: &Edge) -> bool {
        self.selected_edges.contains(edge)
    }

    /// 将边划分为 (选中, 未选中)，各自保持原顺序
    pub fn partition(&self, edges: &[Edge]) -> (Vec<Edge>, Vec<Edge>) {
        edges.iter().partition(|e| self.contains(e))
    }

    /// 是否连通了所有顶点（选中 |V| - 1 条边）
    ///
    /// 连通性预检查只确认每个顶点至少有一条边，多个连通分量时
    /// 这里会返回 `false`，结果只是一片生成森林。
    pub fn is_spanning_tree(&self) -> bool {
        self.selected_edges.len() + 1 == self.vertex_count
    }
}

/// 最小生成树计算引擎
pub struct MstEngine<'a> {
    store: &'a GraphStore,
}

impl<'a> MstEngine<'a> {
    /// 创建引擎实例
    pub fn new(store: &'a GraphStore) -> Self {
        Self { store }
    }

    /// 运行 Kruskal 算法
    pub fn compute(&self) -> Result<MstResult> {
        let vertex_count = self.store.vertex_count();
        let edges = self.store.edges();

        if vertex_count == 0 || edges.is_empty() {
            return Err(Error::EmptyGraph);
        }
        if let Some(label) = self.find_unconnected_vertex() {
            return Err(Error::DisconnectedVertex(label));
        }

        let mut subsets: DisjointSet<Label> =
            self.store.vertices().map(|v| v.label()).collect();
        let target = vertex_count - 1;
        let mut selected_edges = Vec::with_capacity(target);
        let mut total_cost = 0;

        for edge in edges {
            if selected_edges.len() == target {
                break;
            }

            // 根相同说明会形成环
            if subsets.union(edge.src(), edge.dest())? {
                selected_edges.push(*edge);
                total_cost += edge.weight();
            }
        }

        let result = MstResult {
            selected_edges,
            total_cost,
            vertex_count,
        };

        if result.is_spanning_tree() {
            info!(
                edges = result.selected_edges.len(),
                cost = result.total_cost,
                "最小生成树计算完成"
            );
        } else {
            warn!(
                edges = result.selected_edges.len(),
                vertices = vertex_count,
                cost = result.total_cost,
                "图包含多个连通分量，结果为生成森林"
            );
        }

        Ok(result)
    }

    /// 查找不出现在任何边中的顶点（按插入顺序返回第一个）
    fn find_unconnected_vertex(&self) -> Option<Label> {
        let touched: HashSet<Label> = self
            .store
            .edges()
            .iter()
            .flat_map(|e| [e.src(), e.dest()])
            .collect();

        self.store
            .vertices()
            .map(|v| v.label())
            .find(|label| !touched.contains(label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Position;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn l(c: char) -> Label {
        Label::new(c).unwrap()
    }

    fn store_with_vertices(n: usize) -> GraphStore {
        let mut store = GraphStore::default();
        for i in 0..n {
            let x = 30.0 + (i % 10) as f64 * 50.0;
            let y = 30.0 + (i / 10) as f64 * 50.0;
            store.add_vertex(Position::new(x, y)).unwrap();
        }
        store
    }

    fn triangle() -> GraphStore {
        let mut store = store_with_vertices(3);
        store.add_edge(l('A'), l('B'), 1).unwrap();
        store.add_edge(l('B'), l('C'), 2).unwrap();
        store.add_edge(l('A'), l('C'), 3).unwrap();
        store
    }

    fn names(edges: &[Edge]) -> Vec<String> {
        edges.iter().map(|e| e.to_string()).collect()
    }

    #[test]
    fn test_kruskal_triangle() {
        let result = triangle().compute_mst().unwrap();

        assert_eq!(names(&result.selected_edges), vec!["A-B:1", "B-C:2"]);
        assert_eq!(result.total_cost, 3);
        assert!(result.is_spanning_tree());
    }

    #[test]
    fn test_cycle_edge_rejected() {
        let mut store = store_with_vertices(4);
        store.add_edge(l('A'), l('B'), 1).unwrap();
        store.add_edge(l('B'), l('C'), 2).unwrap();
        store.add_edge(l('A'), l('C'), 3).unwrap();
        store.add_edge(l('C'), l('D'), 4).unwrap();

        let result = store.compute_mst().unwrap();

        assert_eq!(names(&result.selected_edges), vec!["A-B:1", "B-C:2", "C-D:4"]);
        assert_eq!(result.total_cost, 7);

        let a_c = Edge::new(l('A'), l('C'), 3);
        assert!(!result.contains(&a_c));
        let (selected, rest) = result.partition(store.edges());
        assert_eq!(selected, result.selected_edges);
        assert_eq!(rest, vec![a_c]);
    }

    #[test]
    fn test_empty_graph() {
        let store = GraphStore::default();
        assert_eq!(store.compute_mst(), Err(Error::EmptyGraph));

        let store = store_with_vertices(2);
        assert_eq!(store.compute_mst(), Err(Error::EmptyGraph));
    }

    #[test]
    fn test_disconnected_vertex() {
        let mut store = store_with_vertices(3);
        store.add_edge(l('A'), l('B'), 1).unwrap();

        assert_eq!(
            store.compute_mst(),
            Err(Error::DisconnectedVertex(l('C')))
        );
    }

    #[test]
    fn test_disjoint_components_yield_forest() {
        // 两个不相交的三角形能通过预检查，结果只是生成森林
        let mut store = store_with_vertices(6);
        store.add_edge(l('A'), l('B'), 1).unwrap();
        store.add_edge(l('B'), l('C'), 2).unwrap();
        store.add_edge(l('A'), l('C'), 3).unwrap();
        store.add_edge(l('D'), l('E'), 4).unwrap();
        store.add_edge(l('E'), l('F'), 5).unwrap();
        store.add_edge(l('D'), l('F'), 6).unwrap();

        let result = store.compute_mst().unwrap();

        assert_eq!(
            names(&result.selected_edges),
            vec!["A-B:1", "B-C:2", "D-E:4", "E-F:5"]
        );
        assert_eq!(result.total_cost, 12);
        assert_eq!(result.vertex_count, 6);
        assert!(!result.is_spanning_tree());
    }

    #[test]
    fn test_tie_break_by_insertion_order() {
        let mut store = store_with_vertices(3);
        store.add_edge(l('B'), l('C'), 1).unwrap();
        store.add_edge(l('A'), l('C'), 1).unwrap();
        store.add_edge(l('A'), l('B'), 1).unwrap();

        let result = store.compute_mst().unwrap();
        assert_eq!(names(&result.selected_edges), vec!["B-C:1", "A-C:1"]);
    }

    #[test]
    fn test_stops_after_v_minus_one() {
        let mut store = store_with_vertices(3);
        store.add_edge(l('A'), l('B'), 1).unwrap();
        store.add_edge(l('B'), l('C'), 2).unwrap();
        store.add_edge(l('A'), l('C'), 2).unwrap();

        let result = store.compute_mst().unwrap();
        assert_eq!(result.selected_edges.len(), 2);
        assert_eq!(result.total_cost, 3);
    }

    #[test]
    fn test_deterministic_replay() {
        let build = || {
            let mut store = store_with_vertices(5);
            let commands = [
                ('A', 'B', 4),
                ('C', 'B', 4),
                ('D', 'A', 2),
                ('E', 'D', 4),
                ('C', 'E', 2),
                ('A', 'E', 4),
            ];
            for (s, d, w) in commands {
                store.add_edge(l(s), l(d), w).unwrap();
            }
            store.compute_mst().unwrap()
        };

        let first = build();
        let second = build();
        assert_eq!(first, second);
        assert_eq!(
            names(&first.selected_edges),
            vec!["A-D:2", "C-E:2", "A-B:4", "B-C:4"]
        );
        assert_eq!(first.total_cost, 12);
    }

    #[test]
    fn test_result_serialization() {
        let result = triangle().compute_mst().unwrap();
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["total_cost"], 3);
        assert_eq!(json["selected_edges"][1]["dest"], "C");
    }

    /// 穷举所有 |V|-1 条边的子集，找到最小的生成树权重
    fn brute_force_cost(vertex_count: usize, edges: &[Edge]) -> Option<u32> {
        let mut best: Option<u32> = None;
        for mask in 0u32..(1 << edges.len()) {
            if mask.count_ones() as usize != vertex_count - 1 {
                continue;
            }
            let chosen: Vec<&Edge> = edges
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, e)| e)
                .collect();

            let mut ds: DisjointSet<Label> = edges
                .iter()
                .flat_map(|e| [e.src(), e.dest()])
                .collect();
            let acyclic = chosen
                .iter()
                .all(|e| ds.union(e.src(), e.dest()).unwrap());
            if acyclic {
                let cost: u32 = chosen.iter().map(|e| e.weight()).sum();
                best = Some(best.map_or(cost, |b| b.min(cost)));
            }
        }
        best
    }

    #[test]
    fn test_matches_brute_force_on_random_graphs() {
        let mut rng = StdRng::seed_from_u64(0x6b72_7573);

        for _ in 0..40 {
            let n = rng.gen_range(2..=6);
            let mut store = store_with_vertices(n);
            let labels: Vec<Label> = store.vertices().map(|v| v.label()).collect();

            // 先连成一条链保证连通，再随机加边
            for pair in labels.windows(2) {
                store
                    .add_edge(pair[0], pair[1], rng.gen_range(1..=20))
                    .unwrap();
            }
            for _ in 0..rng.gen_range(0..6) {
                let a = labels[rng.gen_range(0..n)];
                let b = labels[rng.gen_range(0..n)];
                if a != b {
                    store.add_edge(a, b, rng.gen_range(1..=20)).unwrap();
                }
            }

            let result = store.compute_mst().unwrap();
            assert!(result.is_spanning_tree());
            assert_eq!(
                Some(result.total_cost),
                brute_force_cost(n, store.edges())
            );
        }
    }
}
