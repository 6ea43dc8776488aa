//! 结果打印器
//!
//! 以表格形式输出顶点、边和最小生成树结果

use crate::algorithm::MstResult;
use crate::graph::{Edge, Vertex};
use prettytable::{format, Cell, Row, Table};

/// 结果打印器
pub struct Printer {
    format: format::TableFormat,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

impl Printer {
    pub fn new() -> Self {
        Self {
            format: *format::consts::FORMAT_BOX_CHARS,
        }
    }

    /// 纯 ASCII 边框（用于不支持 Unicode 的终端）
    pub fn ascii() -> Self {
        Self {
            format: *format::consts::FORMAT_DEFAULT,
        }
    }

    /// 顶点表
    pub fn vertex_table(&self, vertices: &[Vertex]) -> String {
        if vertices.is_empty() {
            return "画布上没有顶点\n".to_string();
        }

        let rows = vertices
            .iter()
            .map(|v| {
                let p = v.position();
                vec![v.label().to_string(), p.x.to_string(), p.y.to_string()]
            })
            .collect::<Vec<_>>();

        self.format_table(&["Vertex", "X", "Y"], &rows)
    }

    /// 边表；给出 MST 结果时额外标记选中的边
    pub fn edge_table(&self, edges: &[Edge], mst: Option<&MstResult>) -> String {
        if edges.is_empty() {
            return "画布上没有边\n".to_string();
        }

        let rows = edges
            .iter()
            .map(|e| {
                let mut row = vec![
                    e.src().to_string(),
                    e.dest().to_string(),
                    e.weight().to_string(),
                ];
                if let Some(result) = mst {
                    let mark = if result.contains(e) { "*" } else { "" };
                    row.push(mark.to_string());
                }
                row
            })
            .collect::<Vec<_>>();

        if mst.is_some() {
            self.format_table(&["Src", "Dest", "Weight", "MST"], &rows)
        } else {
            self.format_table(&["Src", "Dest", "Weight"], &rows)
        }
    }

    /// MST 总权重行
    pub fn mst_summary(&self, result: &MstResult) -> String {
        let mut out = format!("MST Cost: {}\n", result.total_cost);
        if !result.is_spanning_tree() {
            out.push_str(&format!(
                "注意: 只选中了 {} 条边（{} 个顶点），图不连通，结果为生成森林\n",
                result.selected_edges.len(),
                result.vertex_count
            ));
        }
        out
    }

    fn format_table(&self, columns: &[&str], rows: &[Vec<String>]) -> String {
        let mut table = Table::new();
        table.set_format(self.format);

        table.set_titles(Row::new(columns.iter().map(|c| Cell::new(c)).collect()));
        for row_data in rows {
            let cells: Vec<Cell> = row_data.iter().map(|v| Cell::new(v)).collect();
            table.add_row(Row::new(cells));
        }

        table.to_string()
    }
}
