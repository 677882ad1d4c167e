//! 结构化凭证记录文件
//!
//! 隧道端点和代理登录后端共用的行式方言：
//!
//! ```text
//! # 注释从未被引号包住的 # 开始
//! [[user]]
//! username = "alice"
//! password = "s3cret\"quoted\""
//!
//! [[user]]
//! username = "bob"
//! password = "hunter2"
//! ```
//!
//! 记录由标记行引入，其后的 `key = "value"` 赋值行属于该记录，
//! 直到下一个标记行或文件结束。写入前整体校验，校验失败不落盘。

use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use log::debug;

use crate::error::{CoreError, CoreResult};
use crate::types::StructuredRecord;
use crate::utils::credentials::is_valid_username;

/// 默认记录标记行
pub const DEFAULT_MARKER: &str = "[[user]]";

/// 从文件加载记录（文件不存在视为空集）
pub fn load_records(path: &Path) -> CoreResult<Vec<StructuredRecord>> {
    load_records_with_marker(path, DEFAULT_MARKER)
}

/// 从文件加载记录，使用自定义标记行
pub fn load_records_with_marker(path: &Path, marker: &str) -> CoreResult<Vec<StructuredRecord>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!("record file {} missing, treating as empty", path.display());
            return Ok(Vec::new());
        }
        Err(err) => return Err(err.into()),
    };
    parse_records(&content, marker, &path.display().to_string())
}

/// 校验并写回整个记录集（写临时文件后原子改名）
pub fn save_records(path: &Path, records: &[StructuredRecord]) -> CoreResult<()> {
    save_records_with_marker(path, records, DEFAULT_MARKER)
}

/// 校验并写回整个记录集，使用自定义标记行
pub fn save_records_with_marker(
    path: &Path,
    records: &[StructuredRecord],
    marker: &str,
) -> CoreResult<()> {
    // 校验失败在写入任何字节之前返回，原文件保持不变
    let content = serialize_records(records, marker)?;

    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| CoreError::Storage(format!("invalid record path: {}", path.display())))?;
    let tmp = path.with_file_name(format!("{file_name}.tmp"));

    fs::write(&tmp, content)?;
    fs::rename(&tmp, path)?;
    debug!("wrote {} record(s) to {}", records.len(), path.display());
    Ok(())
}

/// 解析方言文本为排序后的记录列表
pub fn parse_records(
    input: &str,
    marker: &str,
    context: &str,
) -> CoreResult<Vec<StructuredRecord>> {
    let mut records: Vec<StructuredRecord> = Vec::new();
    let mut current: Option<Partial> = None;

    for raw in input.lines() {
        let line = strip_comment(raw).trim();
        if line.is_empty() {
            continue;
        }

        if line == marker {
            if let Some(partial) = current.take() {
                records.push(partial.finish(context)?);
            }
            current = Some(Partial::new(records.len() + 1));
            continue;
        }

        // 记录之外的行没有归属，忽略
        let Some(ref mut partial) = current else {
            continue;
        };

        if let Some((key, value)) = split_assignment(line) {
            match key {
                "username" => partial.username = Some(unquote(value, context)?),
                "password" => partial.password = Some(unquote(value, context)?),
                // 记录内的其他赋值行忽略
                _ => {}
            }
        }
    }

    if let Some(partial) = current.take() {
        records.push(partial.finish(context)?);
    }

    check_duplicates(&records, |message| CoreError::Parse {
        path: context.to_string(),
        message,
    })?;

    records.sort_by_key(|r| r.username.to_lowercase());
    Ok(records)
}

/// 校验并序列化记录集（输出即 `parse_records` 的有效输入）
pub fn serialize_records(records: &[StructuredRecord], marker: &str) -> CoreResult<String> {
    validate_records(records)?;

    let mut sorted: Vec<&StructuredRecord> = records.iter().collect();
    sorted.sort_by_key(|r| r.username.to_lowercase());

    let mut out = String::new();
    for (index, record) in sorted.iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        out.push_str(marker);
        out.push('\n');
        out.push_str(&format!("username = \"{}\"\n", escape(&record.username)));
        out.push_str(&format!("password = \"{}\"\n", escape(&record.password)));
    }
    Ok(out)
}

/// 写入前的整体校验：字符集、非空口令、大小写不敏感唯一
pub fn validate_records(records: &[StructuredRecord]) -> CoreResult<()> {
    for record in records {
        if !is_valid_username(&record.username) {
            return Err(CoreError::Validation(format!(
                "invalid username {:?}: allowed characters are A-Z a-z 0-9 . _ -",
                record.username
            )));
        }
        if record.password.is_empty() {
            return Err(CoreError::Validation(format!(
                "record {:?} has an empty password",
                record.username
            )));
        }
    }
    check_duplicates(records, CoreError::Validation)
}

/// 记录构建中间态
struct Partial {
    ordinal: usize,
    username: Option<String>,
    password: Option<String>,
}

impl Partial {
    fn new(ordinal: usize) -> Self {
        Self {
            ordinal,
            username: None,
            password: None,
        }
    }

    fn finish(self, context: &str) -> CoreResult<StructuredRecord> {
        let username = match self.username {
            Some(name) if !name.is_empty() => name,
            _ => {
                return Err(CoreError::Parse {
                    path: context.to_string(),
                    message: format!("record #{} is missing a username", self.ordinal),
                })
            }
        };
        match self.password {
            Some(password) if !password.is_empty() => Ok(StructuredRecord { username, password }),
            _ => Err(CoreError::Parse {
                path: context.to_string(),
                message: format!("record {username:?} has an empty password"),
            }),
        }
    }
}

fn check_duplicates<F>(records: &[StructuredRecord], make_error: F) -> CoreResult<()>
where
    F: Fn(String) -> CoreError,
{
    let mut seen = HashSet::new();
    for record in records {
        if !seen.insert(record.username.to_lowercase()) {
            return Err(make_error(format!(
                "duplicate username {:?} (usernames are case-insensitive)",
                record.username
            )));
        }
    }
    Ok(())
}

/// 截掉从未被引号包住的 `#` 开始的注释
fn strip_comment(line: &str) -> &str {
    let mut in_quotes = false;
    let mut escaped = false;
    for (idx, ch) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' if in_quotes => escaped = true,
            '"' => in_quotes = !in_quotes,
            '#' if !in_quotes => return &line[..idx],
            _ => {}
        }
    }
    line
}

/// 把 `key = value` 拆成键和原始值
fn split_assignment(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once('=')?;
    Some((key.trim(), value.trim()))
}

/// 去掉包围引号并处理转义序列
fn unquote(value: &str, context: &str) -> CoreResult<String> {
    let inner = value
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .filter(|_| value.len() >= 2)
        .ok_or_else(|| CoreError::Parse {
            path: context.to_string(),
            message: format!("expected a quoted string, got {value:?}"),
        })?;

    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('\\') => out.push('\\'),
            Some('"') => out.push('"'),
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            other => {
                return Err(CoreError::Parse {
                    path: context.to_string(),
                    message: format!("invalid escape sequence in {value:?} ({other:?})"),
                })
            }
        }
    }
    Ok(out)
}

/// `unquote` 的逆操作
fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            _ => out.push(ch),
        }
    }
    out
}
