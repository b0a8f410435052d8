//! # 条目数据模型
//!
//! 一个条目对应原始列表中的一个文件：ID、原路径、新路径、状态。
//!
//! ## ID 约定
//! ID 在快照时按原始列表位置从 1 开始分配，之后不再改变，
//! 是原始列表与编辑后列表之间唯一的关联键。编辑后的列表可以重排、删行，
//! 只要 ID 保留即可。ID 0 不会出现在原始列表中。
//!
//! ## 依赖关系
//! - 被 `models/entry_set.rs`, `parsers/` 和 `commands/` 使用
//! - 无外部模块依赖

use std::fmt;

/// 列表中新路径首尾去掉的字符；制表符属于路径内容
pub const PATH_TRIM_CHARS: &[char] = &[' ', '\r', '\n'];

/// 名称能否原样写入列表并被读回
///
/// 空名、含换行或首尾有空格的名称，读回时会变成另一个路径。
pub fn is_listable(name: &str) -> bool {
    !name.is_empty()
        && !name.contains(['\r', '\n'])
        && name.trim_matches(PATH_TRIM_CHARS) == name
}

/// 条目状态，提示对该条目应采取的动作
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    /// 默认状态，不做任何事
    #[default]
    Ignore,
    /// 行无法解析
    Error,
    /// 用户要求放弃整个操作
    Cancel,
    /// 条目有新路径
    Rename,
    /// 条目在编辑后的列表中缺失
    Delete,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Ignore => write!(f, "Ignore"),
            Status::Error => write!(f, "Error"),
            Status::Cancel => write!(f, "Cancel"),
            Status::Rename => write!(f, "Rename"),
            Status::Delete => write!(f, "Delete"),
        }
    }
}

/// 单个条目
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Entry {
    /// 原始列表中的位置（从 1 开始）
    pub id: u64,

    /// 原路径，创建后不再修改
    pub path: String,

    /// 新路径，仅在对账找到对应编辑条目时填写
    pub new_path: String,

    /// 状态
    pub status: Status,

    /// 解析错误原因（仅 `Status::Error`）
    pub error: Option<String>,
}

impl Entry {
    /// 创建快照条目
    pub fn new(id: u64, path: impl Into<String>) -> Self {
        Entry {
            id,
            path: path.into(),
            ..Default::default()
        }
    }

    /// 只带状态的条目（忽略行、取消行）
    pub fn with_status(status: Status) -> Self {
        Entry {
            status,
            ..Default::default()
        }
    }

    /// 解析失败的条目
    pub fn error(reason: impl Into<String>) -> Self {
        Entry {
            status: Status::Error,
            error: Some(reason.into()),
            ..Default::default()
        }
    }

    pub fn mark_rename(&mut self, new_path: impl Into<String>) {
        self.new_path = new_path.into();
        self.status = Status::Rename;
    }

    pub fn mark_delete(&mut self) {
        self.new_path.clear();
        self.status = Status::Delete;
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} '{}' -> '{}' Status: {}",
            self.id, self.path, self.new_path, self.status
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entry_is_ignore() {
        let e = Entry::new(3, "a.txt");
        assert_eq!(e.status, Status::Ignore);
        assert!(e.new_path.is_empty());
        assert!(e.error.is_none());
    }

    #[test]
    fn test_entry_display() {
        let mut e = Entry::new(2, "file 2.txt");
        e.mark_rename("file TWO.txt");
        assert_eq!(e.to_string(), "2 'file 2.txt' -> 'file TWO.txt' Status: Rename");
    }

    #[test]
    fn test_is_listable() {
        assert!(is_listable("file 2.txt"));
        assert!(is_listable("a\t"));
        assert!(is_listable("#hash"));
        assert!(!is_listable(""));
        assert!(!is_listable("a "));
        assert!(!is_listable(" a"));
        assert!(!is_listable("a\nb"));
        assert!(!is_listable("a\rb"));
    }

    #[test]
    fn test_mark_delete_clears_new_path() {
        let mut e = Entry::new(1, "a");
        e.mark_rename("b");
        e.mark_delete();
        assert_eq!(e.status, Status::Delete);
        assert_eq!(e.to_string(), "1 'a' -> '' Status: Delete");
    }
}
