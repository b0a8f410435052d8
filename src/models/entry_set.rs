//! # 条目集合与对账
//!
//! `EntrySet` 是 ID -> 条目 的映射，按 ID 升序迭代。
//! 原始集合由目录快照创建；编辑后的集合每次运行由编辑文本重新解析得到。
//!
//! ## 对账（`update`）
//! 对原始集合中的每个条目：
//! - 编辑集合中有同 ID 条目 -> `Rename`，新路径取编辑条目的路径
//! - 没有 -> `Delete`，新路径为空
//!
//! 原始条目永不移除，缺失用状态表示。
//!
//! ## 依赖关系
//! - 被 `parsers/listing.rs` 和 `commands/edit.rs` 使用
//! - 使用 `models/entry.rs`

use super::entry::{Entry, Status, PATH_TRIM_CHARS};
use std::collections::BTreeMap;

/// ID -> 条目
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntrySet {
    entries: BTreeMap<u64, Entry>,
}

/// 对账结果统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub renamed: usize,
    pub unchanged: usize,
    pub deleted: usize,
}

impl EntrySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// 从文件名序列创建原始集合，ID 为从 1 开始的位置
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries = names
            .into_iter()
            .enumerate()
            .map(|(pos, name)| {
                let id = pos as u64 + 1;
                (id, Entry::new(id, name))
            })
            .collect();
        Self { entries }
    }

    /// 从每行一个路径的文本创建原始集合，行号即 ID
    ///
    /// 路径首尾空格被去掉，空行跳过（其行号不分配给任何条目）。
    pub fn from_lines(text: &str) -> Self {
        let mut set = Self::new();
        for (idx, line) in text.lines().enumerate() {
            let name = line.trim_matches(PATH_TRIM_CHARS);
            if name.is_empty() {
                continue;
            }
            let id = idx as u64 + 1;
            set.insert(Entry::new(id, name));
        }
        set
    }

    /// 插入条目，返回同 ID 的旧条目（后写覆盖先写）
    pub fn insert(&mut self, entry: Entry) -> Option<Entry> {
        self.entries.insert(entry.id, entry)
    }

    pub fn get(&self, id: u64) -> Option<&Entry> {
        self.entries.get(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 按 ID 升序迭代
    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.values()
    }

    /// 用编辑后的集合更新本集合的新路径与状态
    ///
    /// 返回编辑集合中存在、但本集合中没有的 ID（升序）。
    /// 这些 ID 不影响对账结果，由调用方决定如何提示。
    pub fn update(&mut self, edited: &EntrySet) -> Vec<u64> {
        for (id, entry) in self.entries.iter_mut() {
            match edited.get(*id) {
                Some(e) => entry.mark_rename(e.path.clone()),
                None => entry.mark_delete(),
            }
        }

        edited
            .entries
            .keys()
            .filter(|id| !self.entries.contains_key(*id))
            .copied()
            .collect()
    }

    /// 统计对账结果；路径未变的 `Rename` 计入 `unchanged`
    pub fn summary(&self) -> Summary {
        let mut summary = Summary::default();
        for entry in self.iter() {
            match entry.status {
                Status::Rename if entry.new_path == entry.path => summary.unchanged += 1,
                Status::Rename => summary.renamed += 1,
                Status::Delete => summary.deleted += 1,
                _ => {}
            }
        }
        summary
    }
}
