//! 过滤选择器渲染

use std::io::{self, Write};

use crossterm::{queue, style::Print};
use proxyctl_core::Selectable;

use crate::i18n::Messages;
use crate::model::PickerState;

const MARKER: &str = ">>";

/// 绘制过滤选择器，返回绘制的行数
///
/// 第一行是过滤串，之后最多一页可见结果；结果超过一页时
/// 追加页脚，最后是手动输入提示和按键帮助。
pub fn render_picker<W: Write, E: Selectable>(
    out: &mut W,
    state: &PickerState<'_, E>,
    messages: &Messages,
) -> io::Result<usize> {
    let mut lines = 0;

    queue!(
        out,
        Print(format!("{}{}\r\n", messages.picker.filter_label, state.query))
    )?;
    lines += 1;

    if state.filtered.is_empty() {
        queue!(out, Print(format!("   {}\r\n", messages.picker.no_match)))?;
        lines += 1;
    } else {
        for (offset, &entity_index) in state.visible().iter().enumerate() {
            let position = state.page_start + offset;
            let marker = if position == state.selected { MARKER } else { "  " };
            let entity = &state.entities()[entity_index];
            queue!(out, Print(format!("{marker} {}\r\n", entity.summary())))?;
            lines += 1;
        }
        if state.overflows() {
            let start = state.page_start + 1;
            let end = state.page_start + state.visible().len();
            let footer = (messages.picker.page_footer)(start, end, state.filtered.len());
            queue!(out, Print(format!("   {footer}\r\n")))?;
            lines += 1;
        }
    }

    queue!(out, Print(format!("   {}\r\n", messages.picker.manual_hint)))?;
    queue!(out, Print(format!("   {}\r\n", messages.prompt.key_help)))?;
    lines += 2;

    out.flush()?;
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;
    use crate::model::PAGE_ROWS;
    use proxyctl_core::TunnelUser;

    fn users(n: usize) -> Vec<TunnelUser> {
        (0..n)
            .map(|i| TunnelUser {
                username: format!("user{i:02}"),
                password: "p".to_string(),
            })
            .collect()
    }

    #[test]
    fn one_page_has_no_footer() {
        let list = users(3);
        let state = PickerState::new(&list);
        let mut buf = Vec::new();
        let lines = render_picker(&mut buf, &state, Language::EnUs.messages()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains(">> user00"));
        assert!(!text.contains("showing"));
        assert_eq!(lines, 1 + 3 + 2);
    }

    #[test]
    fn overflow_shows_a_bounded_window_and_footer() {
        let list = users(30);
        let state = PickerState::new(&list);
        let mut buf = Vec::new();
        let lines = render_picker(&mut buf, &state, Language::EnUs.messages()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("user00"));
        assert!(!text.contains("user12"), "only one page is drawn");
        assert!(text.contains("(showing 1\u{2013}12 of 30)"));
        assert_eq!(lines, 1 + PAGE_ROWS + 1 + 2);
    }

    #[test]
    fn empty_results_show_the_no_match_line() {
        let list = users(2);
        let mut state = PickerState::new(&list);
        state.set_query("nobody");
        let mut buf = Vec::new();
        render_picker(&mut buf, &state, Language::EnUs.messages()).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("no matching entries"));
    }
}
