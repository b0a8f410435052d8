//! # 解析器模块
//!
//! 可编辑列表的生成与解析。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: line, listing

pub mod line;
pub mod listing;

pub use listing::{load_edited_list, render_scratch, LoadOutcome};
