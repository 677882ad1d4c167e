//! 行模式降级渲染
//!
//! 非终端输入（管道、重定向）或原始模式获取失败时，提示层
//! 退回到一次性编号列表加整行读取。这里只负责列表本身。

use std::io::{self, Write};

use proxyctl_core::Selectable;

use crate::i18n::Messages;
use crate::model::SelectRow;

/// 打印编号的行列表（菜单和单选共用）
pub fn numbered_rows<W: Write, T: SelectRow>(out: &mut W, rows: &[T]) -> io::Result<()> {
    let mut current_section: Option<&str> = None;
    for (index, row) in rows.iter().enumerate() {
        if let Some(section) = row.section() {
            if current_section != Some(section) {
                writeln!(out, "{section}")?;
                current_section = Some(section);
            }
        }
        writeln!(out, "{:>2}) {}", index + 1, row.title())?;
    }
    out.flush()
}

/// 打印编号的实体列表，编号 0 保留给手动输入
pub fn numbered_entities<W: Write, E: Selectable>(
    out: &mut W,
    entities: &[E],
    messages: &Messages,
) -> io::Result<()> {
    for (index, entity) in entities.iter().enumerate() {
        writeln!(out, "{:>2}) {}", index + 1, entity.summary())?;
    }
    writeln!(out, "{}", messages.fallback.manual_option)?;
    out.flush()
}
