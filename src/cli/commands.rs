//! 控制台命令处理
//!
//! 将一行输入解析为图操作命令并在图存储上执行

use crate::cli::printer::Printer;
use crate::error::{Error, Result};
use crate::graph::{GraphStore, Label, Position, Weight};

/// 控制台命令
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    AddVertex(Position),
    RemoveVertex(Label),
    AddEdge(Label, Label, Weight),
    RemoveEdge(Label, Label, Weight),
    Clear,
    Mst,
    Vertices,
    Edges,
    Show,
    Export,
    Help,
    Quit,
}

/// 控制台命令执行结果
#[derive(Debug, PartialEq)]
pub enum CommandResult {
    /// 继续运行
    Continue,
    /// 退出程序
    Exit,
    /// 显示消息
    Message(String),
    /// 错误
    Error(String),
}

/// 解析一行输入
pub fn parse_command(input: &str) -> Result<Command> {
    let parts: Vec<&str> = input.split_whitespace().collect();
    let Some((cmd, args)) = parts.split_first() else {
        return Err(Error::ParseError("空命令".to_string()));
    };

    let command = match cmd.to_lowercase().as_str() {
        "vertex" | "v" => {
            let [x, y] = expect_args::<2>(args, "vertex <x> <y>")?;
            Command::AddVertex(Position::new(parse_coord(x)?, parse_coord(y)?))
        }
        "remove-vertex" | "rv" => {
            let [label] = expect_args::<1>(args, "remove-vertex <顶点>")?;
            Command::RemoveVertex(label.parse()?)
        }
        "edge" | "e" => {
            let (src, dest, weight) = parse_edge_args(args, "edge <源> <目标> <权重>")?;
            Command::AddEdge(src, dest, weight)
        }
        "remove-edge" | "re" => {
            let (src, dest, weight) = parse_edge_args(args, "remove-edge <源> <目标> <权重>")?;
            Command::RemoveEdge(src, dest, weight)
        }
        "clear" => Command::Clear,
        "mst" | "kruskal" => Command::Mst,
        "vertices" => Command::Vertices,
        "edges" => Command::Edges,
        "show" | "stats" => Command::Show,
        "export" => Command::Export,
        "help" | "h" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => {
            return Err(Error::ParseError(format!(
                "未知命令: {}。输入 'help' 查看帮助。",
                other
            )))
        }
    };

    Ok(command)
}

fn expect_args<'a, const N: usize>(args: &[&'a str], usage: &str) -> Result<[&'a str; N]> {
    <[&str; N]>::try_from(args).map_err(|_| Error::ParseError(format!("用法: {}", usage)))
}

fn parse_coord(s: &str) -> Result<f64> {
    s.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| Error::ParseError(format!("无效的坐标: {}", s)))
}

fn parse_edge_args(args: &[&str], usage: &str) -> Result<(Label, Label, Weight)> {
    let [src, dest, weight] = expect_args::<3>(args, usage)?;
    let src: Label = src.parse()?;
    let dest: Label = dest.parse()?;
    if src == dest {
        return Err(Error::ParseError("源顶点和目标顶点不能相同".to_string()));
    }
    let weight = weight
        .parse::<Weight>()
        .map_err(|_| Error::ParseError(format!("无效的权重: {}", weight)))?;
    Ok((src, dest, weight))
}

/// 解析并执行一行命令
pub fn execute_command(input: &str, store: &mut GraphStore, printer: &Printer) -> CommandResult {
    if input.trim().is_empty() {
        return CommandResult::Continue;
    }

    match parse_command(input) {
        Ok(command) => run(command, store, printer),
        Err(e) => CommandResult::Error(e.to_string()),
    }
}

fn run(command: Command, store: &mut GraphStore, printer: &Printer) -> CommandResult {
    let outcome = match command {
        Command::Quit => return CommandResult::Exit,
        Command::Help => Ok(help_text()),
        Command::AddVertex(position) => store
            .add_vertex(position)
            .map(|v| format!("已添加顶点 {} {}", v.label(), v.position())),
        Command::RemoveVertex(label) => store
            .remove_vertex(label)
            .map(|_| format!("已删除顶点 {}", label)),
        Command::AddEdge(src, dest, weight) => store
            .add_edge(src, dest, weight)
            .map(|e| format!("已添加边 {}", e)),
        Command::RemoveEdge(src, dest, weight) => store
            .remove_edge(src, dest, weight)
            .map(|_| format!("已删除边 {}-{}:{}", src, dest, weight)),
        Command::Clear => {
            store.clear_all();
            Ok("已清空画布".to_string())
        }
        Command::Mst => store.compute_mst().map(|result| {
            format!(
                "{}{}",
                printer.edge_table(store.edges(), Some(&result)),
                printer.mst_summary(&result)
            )
        }),
        Command::Vertices => Ok(printer.vertex_table(&store.list_vertices())),
        Command::Edges => Ok(printer.edge_table(store.edges(), None)),
        Command::Show => Ok(format!(
            "{}{}顶点数: {}  边数: {}\n",
            printer.vertex_table(&store.list_vertices()),
            printer.edge_table(store.edges(), None),
            store.vertex_count(),
            store.edge_count()
        )),
        Command::Export => serde_json::to_string_pretty(&store.snapshot())
            .map_err(|e| Error::SerializationError(e.to_string())),
    };

    match outcome {
        Ok(message) => CommandResult::Message(message),
        Err(e) => CommandResult::Error(e.to_string()),
    }
}

pub fn help_text() -> String {
    r#"
╔═══════════════════════════════════════════════════════════════╗
║                     MSTGraph 命令帮助                         ║
╠═══════════════════════════════════════════════════════════════╣
║ vertex, v <x> <y>              在 (x, y) 添加顶点             ║
║ remove-vertex, rv <L>          删除顶点及其所有边             ║
║ edge, e <S> <D> <W>            添加/覆盖边，权重 1-999        ║
║ remove-edge, re <S> <D> <W>    删除完全匹配的边               ║
║ clear                          清空画布                       ║
║ mst, kruskal                   计算最小生成树                 ║
║ vertices | edges | show        显示顶点/边                    ║
║ export                         以 JSON 输出当前图             ║
║ help, h, ?                     显示帮助                       ║
║ quit, exit, q                  退出程序                       ║
╚═══════════════════════════════════════════════════════════════╝
"#
    .to_string()
}
