//! 命令补全器
//!
//! 基于 rustyline 实现 Tab 补全功能

use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

/// 命令关键字列表
const COMMANDS: &[&str] = &[
    "vertex",
    "remove-vertex",
    "edge",
    "remove-edge",
    "clear",
    "mst",
    "kruskal",
    "vertices",
    "edges",
    "show",
    "export",
    "help",
    "quit",
    "exit",
];

/// MSTGraph CLI 补全器
#[derive(Default)]
pub struct CommandCompleter;

impl CommandCompleter {
    pub fn new() -> Self {
        Self
    }

    /// 以 `prefix` 开头的命令（不区分大小写）
    pub fn candidates(prefix: &str) -> Vec<&'static str> {
        let prefix = prefix.to_lowercase();
        COMMANDS
            .iter()
            .copied()
            .filter(|cmd| cmd.starts_with(&prefix))
            .collect()
    }
}

impl Completer for CommandCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line_to_cursor = &line[..pos];

        // 只补全第一个单词
        if line_to_cursor.trim_start().contains(char::is_whitespace) {
            return Ok((pos, vec![]));
        }

        let word = line_to_cursor.trim_start();
        let start_pos = pos - word.len();
        let completions = Self::candidates(word)
            .into_iter()
            .map(|cmd| Pair {
                display: cmd.to_string(),
                replacement: cmd.to_string(),
            })
            .collect();

        Ok((start_pos, completions))
    }
}

impl Hinter for CommandCompleter {
    type Hint = String;
}

impl Highlighter for CommandCompleter {}

impl Validator for CommandCompleter {}

impl Helper for CommandCompleter {}
