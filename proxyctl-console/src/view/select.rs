//! 选择引擎渲染

use std::io::{self, Write};

use crossterm::{queue, style::Print};
use unicode_width::UnicodeWidthStr;

use crate::i18n::Messages;
use crate::model::{SelectRow, SelectState};

/// 选中行的标记
const MARKER: &str = ">>";

/// 绘制菜单或单选列表，返回绘制的行数
///
/// 相邻同组的行归并在一个分组标题下；快捷键在标题右侧对齐
/// 显示；列表之后是选中行的说明、未提交的数字缓冲和按键帮助。
pub fn render_select<W: Write, T: SelectRow>(
    out: &mut W,
    state: &SelectState<'_, T>,
    messages: &Messages,
) -> io::Result<usize> {
    let mut lines = 0;
    let title_width = state
        .rows
        .iter()
        .map(|row| row.title().width())
        .max()
        .unwrap_or(0);

    let mut current_section: Option<&str> = None;
    for (index, row) in state.rows.iter().enumerate() {
        if let Some(section) = row.section() {
            if current_section != Some(section) {
                queue!(out, Print(format!("{section}\r\n")))?;
                lines += 1;
                current_section = Some(section);
            }
        }

        let marker = if index == state.selected { MARKER } else { "  " };
        let pad = " ".repeat(title_width.saturating_sub(row.title().width()));
        let shortcut = match row.shortcut() {
            Some(ch) => format!("  [{ch}]"),
            None => String::new(),
        };
        queue!(
            out,
            Print(format!(
                "{marker} {:>2}) {}{pad}{shortcut}\r\n",
                index + 1,
                row.title()
            ))
        )?;
        lines += 1;
    }

    if let Some(row) = state.selected_row() {
        if !row.hint().is_empty() {
            queue!(out, Print(format!("   {}\r\n", row.hint())))?;
            lines += 1;
        }
    }
    if !state.pending_digits.is_empty() {
        queue!(
            out,
            Print(format!(
                "   {}{}\r\n",
                messages.menu.jump_label, state.pending_digits
            ))
        )?;
        lines += 1;
    }
    queue!(out, Print(format!("   {}\r\n", messages.prompt.key_help)))?;
    lines += 1;

    out.flush()?;
    Ok(lines)
}
