//! MSTGraph CLI 工具
//!
//! 交互式命令行界面

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use mstgraph::cli::{execute_command, CommandCompleter, CommandResult, Printer};
use mstgraph::config::{DEFAULT_HEIGHT, DEFAULT_RADIUS, DEFAULT_WIDTH};
use mstgraph::{GraphStore, StoreConfig};
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::Editor;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "mstgraph-cli")]
#[command(about = "MSTGraph 最小生成树命令行工具")]
struct Args {
    /// 画布宽度
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: f64,

    /// 画布高度
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: f64,

    /// 顶点半径
    #[arg(short, long, default_value_t = DEFAULT_RADIUS)]
    radius: f64,

    /// 执行以 ';' 分隔的命令后退出
    #[arg(short = 'e', long)]
    execute: Option<String>,

    /// 历史记录文件
    #[arg(long)]
    history: Option<PathBuf>,

    /// 使用 ASCII 表格边框
    #[arg(long)]
    ascii: bool,

    /// 日志级别（RUST_LOG 优先）
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(&args.log_level);

    let config = StoreConfig {
        width: args.width,
        height: args.height,
        radius: args.radius,
    };
    let mut store = GraphStore::new(config);
    let printer = if args.ascii {
        Printer::ascii()
    } else {
        Printer::new()
    };
    debug!(?config, "图存储已创建");

    // 单次执行模式
    if let Some(script) = args.execute {
        for line in script.split(';') {
            if report(execute_command(line, &mut store, &printer)) {
                break;
            }
        }
        return Ok(());
    }

    println!("MSTGraph CLI - Kruskal 最小生成树");
    println!("=================================");
    println!(
        "画布: {} x {}, 顶点半径 {}",
        config.width, config.height, config.radius
    );
    println!("\n输入 'help' 查看命令列表，'quit' 退出\n");

    let mut rl: Editor<CommandCompleter, DefaultHistory> =
        Editor::new().context("无法初始化行编辑器")?;
    rl.set_helper(Some(CommandCompleter::new()));

    let history = args.history.or_else(default_history_path);
    if let Some(path) = &history {
        // 首次运行时历史文件不存在
        let _ = rl.load_history(path);
    }

    loop {
        match rl.readline("mstgraph> ") {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = rl.add_history_entry(line.as_str());
                }
                if report(execute_command(&line, &mut store, &printer)) {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e).context("读取输入失败"),
        }
    }

    if let Some(path) = &history {
        if let Err(e) = rl.save_history(path) {
            debug!(error = %e, path = %path.display(), "保存历史记录失败");
        }
    }

    println!("再见！");
    Ok(())
}

/// 打印命令结果，返回是否退出
fn report(result: CommandResult) -> bool {
    match result {
        CommandResult::Continue => false,
        CommandResult::Exit => true,
        CommandResult::Message(msg) => {
            print!("{}", msg);
            if !msg.ends_with('\n') {
                println!();
            }
            false
        }
        CommandResult::Error(err) => {
            eprintln!("{} {}", "错误:".red().bold(), err.red());
            false
        }
    }
}

fn default_history_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".mstgraph_history"))
}

fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
