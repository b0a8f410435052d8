//! # 数据模型模块
//!
//! 定义条目、状态和按 ID 索引的条目集合。
//!
//! ## 依赖关系
//! - 被 `parsers/` 和 `commands/` 使用
//! - 子模块: entry, entry_set

pub mod entry;
pub mod entry_set;

pub use entry::{is_listable, Entry, Status, PATH_TRIM_CHARS};
pub use entry_set::EntrySet;
