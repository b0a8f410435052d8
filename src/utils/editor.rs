//! # 外部编辑器
//!
//! 启动用户配置的编辑器编辑临时文件，并同步等待其退出。
//! 编辑器继承当前进程的 stdin/stdout/stderr。
//!
//! ## 依赖关系
//! - 被 `commands/edit.rs` 使用
//! - 无外部模块依赖

use crate::error::{EditdirError, Result};

use std::path::Path;
use std::process::Command;
use tracing::debug;

/// 默认编辑器
pub const DEFAULT_EDITOR: &str = "vi";

/// 编辑器命令（程序 + 附加参数）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Editor {
    program: String,
    args: Vec<String>,
}

impl Editor {
    /// 解析编辑器命令，如 `vi` 或 `code --wait`
    pub fn from_command(command: &str) -> Result<Self> {
        let mut parts = command.split_whitespace().map(str::to_string);
        let program = parts.next().ok_or(EditdirError::EditorNotConfigured)?;
        Ok(Editor {
            program,
            args: parts.collect(),
        })
    }

    /// 用于日志和错误信息的完整命令
    pub fn command_line(&self, path: &Path) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line.push(' ');
        line.push_str(&path.display().to_string());
        line
    }

    /// 编辑文件，非零退出视为失败
    pub fn edit(&self, path: &Path) -> Result<()> {
        let command = self.command_line(path);
        debug!(%command, "Launching editor");

        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(path)
            .status()
            .map_err(|e| EditdirError::EditorLaunch {
                command: command.clone(),
                source: e,
            })?;

        if !status.success() {
            return Err(EditdirError::EditorFailed {
                command,
                code: status.code(),
                status: status.to_string(),
            });
        }

        Ok(())
    }
}
