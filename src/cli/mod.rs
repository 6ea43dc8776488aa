//! 终端交互层
//!
//! 命令解析、结果打印和 Tab 补全

pub mod commands;
pub mod completer;
pub mod printer;

pub use commands::{execute_command, parse_command, Command, CommandResult};
pub use completer::CommandCompleter;
pub use printer::Printer;
