//! # 编辑行解析器
//!
//! 将编辑后文本中的一行解析为条目。
//!
//! ## 行格式
//! ```text
//! # 注释                    -> Ignore
//! (空行)                    -> Ignore
//! cancel... / abort...      -> Cancel（不区分大小写）
//! <ID><空格><新路径>         -> Rename
//! 其他                      -> Error
//! ```
//!
//! ID 必须位于行首（前面不能有空格），只在第一个空格处切分，
//! 新路径内部的连续空格原样保留。
//!
//! ## 依赖关系
//! - 被 `parsers/listing.rs` 使用
//! - 使用 `models/entry.rs`

use crate::models::{Entry, Status, PATH_TRIM_CHARS};

/// 判断空行、注释、取消行时去掉的空白；新路径只去掉 `PATH_TRIM_CHARS`
const TRIM_CHARS: &[char] = &[' ', '\t', '\r', '\n'];

/// 取消整个操作的关键字
const CANCEL_KEYWORDS: &[&str] = &["cancel", "abort"];

/// 解析一行编辑文本
pub fn parse_line(line: &str) -> Entry {
    let trimmed = line.trim_matches(TRIM_CHARS);
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Entry::with_status(Status::Ignore);
    }

    let lowered = trimmed.to_lowercase();
    if CANCEL_KEYWORDS.iter().any(|k| lowered.starts_with(k)) {
        return Entry::with_status(Status::Cancel);
    }

    // 只去掉行尾换行符，行首空格会让 ID 解析失败
    let raw = line.trim_end_matches(['\r', '\n']);
    let Some((id_token, rest)) = raw.split_once(' ') else {
        return Entry::error("missing space between ID and new path");
    };

    let id: u64 = match id_token.parse() {
        Ok(id) => id,
        Err(e) => return Entry::error(format!("error reading line number: {}", e)),
    };

    let path = rest.trim_matches(PATH_TRIM_CHARS);
    if path.is_empty() {
        return Entry::error("missing new path");
    }

    let mut entry = Entry::new(id, path);
    entry.status = Status::Rename;
    entry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line_non_rename_status() {
        let cases = [
            ("", Status::Ignore),
            ("   ", Status::Ignore),
            ("\t \r\n", Status::Ignore),
            ("#", Status::Ignore),
            ("###", Status::Ignore),
            (" ##", Status::Ignore),
            ("# 1 looks like an entry", Status::Ignore),
            ("cancel", Status::Cancel),
            ("abort", Status::Cancel),
            ("  CANCEL everything", Status::Cancel),
            ("Abort\r\n", Status::Cancel),
            ("cancelled", Status::Cancel),
            ("bad line", Status::Error),
        ];

        for (line, want) in cases {
            let e = parse_line(line);
            assert_eq!(e.status, want, "line: {:?}", line);
        }
    }

    #[test]
    fn test_parse_line_trimmed() {
        let e = parse_line("2   file   a.txt   ");
        assert_eq!(e.status, Status::Rename);
        assert!(e.error.is_none());
        assert_eq!(e.id, 2);
        assert_eq!(e.path, "file   a.txt");
    }

    #[test]
    fn test_parse_line_unix_newline_end() {
        let e = parse_line("2 file   a.txt\n");
        assert_eq!(e.status, Status::Rename);
        assert_eq!(e.id, 2);
        assert_eq!(e.path, "file   a.txt");
    }

    #[test]
    fn test_parse_line_windows_newline_end() {
        let e = parse_line("2 file   a.txt\r\n");
        assert_eq!(e.status, Status::Rename);
        assert!(e.error.is_none());
        assert_eq!(e.id, 2);
        assert_eq!(e.path, "file   a.txt");
    }

    #[test]
    fn test_parse_line_keeps_tabs_in_path() {
        let e = parse_line("2 a\t");
        assert_eq!(e.status, Status::Rename);
        assert_eq!(e.path, "a\t");

        let e = parse_line("3 \tb  \r\n");
        assert_eq!(e.path, "\tb");
    }

    #[test]
    fn test_parse_line_tricky_chars() {
        for name in ["file with ?", "file with *", "file: colon", "#not a comment"] {
            let e = parse_line(&format!("5 {}", name));
            assert_eq!(e.status, Status::Rename);
            assert_eq!(e.path, name);
        }
    }

    #[test]
    fn test_parse_line_errors() {
        for line in [
            "bad line",
            "12",
            "12\n",
            "12 ",
            "12    \r\n",
            " 2 leading space",
            "-1 negative",
            "1x name",
        ] {
            let e = parse_line(line);
            assert_eq!(e.status, Status::Error, "line: {:?}", line);
            assert!(e.error.is_some(), "line: {:?}", line);
            assert_eq!(e.id, 0);
        }
    }

    #[test]
    fn test_parse_line_error_reason_mentions_integer() {
        let e = parse_line("bad line");
        assert!(e.error.unwrap().contains("invalid digit"));
    }
}
