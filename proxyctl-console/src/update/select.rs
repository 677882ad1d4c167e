//! 选择引擎的按键转移

use crate::event::Key;
use crate::model::{SelectRow, SelectState};

/// 一次按键转移的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectStep {
    /// 继续循环（重绘后等待下一个按键）
    Continue,
    /// 终态：确定选中给定索引的行
    Chosen(usize),
    /// 终态：用户取消
    Canceled,
}

/// 处理一个按键
///
/// 导航键清空数字缓冲；数字键累积并实时预览；Enter 提交缓冲
/// 或当前选中项；快捷字母立即终态返回。
pub fn select_step<T: SelectRow>(state: &mut SelectState<'_, T>, key: Key) -> SelectStep {
    match key {
        Key::Up => {
            state.pending_digits.clear();
            state.select_previous();
            SelectStep::Continue
        }
        Key::Down => {
            state.pending_digits.clear();
            state.select_next();
            SelectStep::Continue
        }
        Key::Home => {
            state.pending_digits.clear();
            state.select_first();
            SelectStep::Continue
        }
        Key::End => {
            state.pending_digits.clear();
            state.select_last();
            SelectStep::Continue
        }
        Key::Backspace => {
            state.pending_digits.pop();
            SelectStep::Continue
        }
        Key::Enter => commit(state),
        Key::Quit => SelectStep::Canceled,
        Key::Char(ch) => char_step(state, ch),
        _ => SelectStep::Continue,
    }
}

fn char_step<T: SelectRow>(state: &mut SelectState<'_, T>, ch: char) -> SelectStep {
    if ch.is_ascii_digit() {
        push_digit(state, ch);
        return SelectStep::Continue;
    }
    match ch {
        'k' => {
            state.pending_digits.clear();
            state.select_previous();
            SelectStep::Continue
        }
        'j' => {
            state.pending_digits.clear();
            state.select_next();
            SelectStep::Continue
        }
        'q' => SelectStep::Canceled,
        _ => match shortcut_index(state, ch) {
            Some(index) => SelectStep::Chosen(index),
            None => SelectStep::Continue,
        },
    }
}

fn push_digit<T: SelectRow>(state: &mut SelectState<'_, T>, digit: char) {
    // 缓冲已到项数位宽时先清空再累积
    if state.pending_digits.len() >= state.digit_width() {
        state.pending_digits.clear();
    }
    state.pending_digits.push(digit);

    // 合法的 1 基索引立即预览，不提交
    if let Ok(n) = state.pending_digits.parse::<usize>() {
        if (1..=state.rows.len()).contains(&n) {
            state.selected = n - 1;
        }
    }
}

fn commit<T: SelectRow>(state: &mut SelectState<'_, T>) -> SelectStep {
    if state.pending_digits.is_empty() {
        if state.rows.is_empty() {
            return SelectStep::Continue;
        }
        return SelectStep::Chosen(state.selected);
    }
    let parsed = state.pending_digits.parse::<usize>();
    state.pending_digits.clear();
    match parsed {
        Ok(n) if (1..=state.rows.len()).contains(&n) => SelectStep::Chosen(n - 1),
        // 无效缓冲：清空并继续循环
        _ => SelectStep::Continue,
    }
}

fn shortcut_index<T: SelectRow>(state: &SelectState<'_, T>, ch: char) -> Option<usize> {
    state
        .rows
        .iter()
        .position(|row| row.shortcut().is_some_and(|s| s.eq_ignore_ascii_case(&ch)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MenuItem;

    fn menu(n: usize) -> Vec<MenuItem> {
        const TITLES: [&str; 12] = [
            "t0", "t1", "t2", "t3", "t4", "t5", "t6", "t7", "t8", "t9", "t10", "t11",
        ];
        const KEYS: [&str; 12] = [
            "k0", "k1", "k2", "k3", "k4", "k5", "k6", "k7", "k8", "k9", "k10", "k11",
        ];
        (0..n)
            .map(|i| MenuItem {
                section: "main",
                key: KEYS[i],
                shortcut: None,
                title: TITLES[i],
                hint: "",
            })
            .collect()
    }

    #[test]
    fn digits_preview_then_enter_commits() {
        let rows = menu(12);
        let mut state = SelectState::new(&rows);

        assert_eq!(select_step(&mut state, Key::Char('1')), SelectStep::Continue);
        assert_eq!(state.selected, 0, "1 previews the first item");
        assert_eq!(select_step(&mut state, Key::Char('2')), SelectStep::Continue);
        assert_eq!(state.selected, 11, "12 previews the twelfth item");
        assert_eq!(
            select_step(&mut state, Key::Enter),
            SelectStep::Chosen(11)
        );
    }

    #[test]
    fn invalid_digits_reset_and_keep_looping() {
        let rows = menu(3);
        let mut state = SelectState::new(&rows);

        assert_eq!(select_step(&mut state, Key::Char('9')), SelectStep::Continue);
        assert_eq!(state.selected, 0, "9 is out of range, no preview");
        assert_eq!(select_step(&mut state, Key::Enter), SelectStep::Continue);
        assert!(state.pending_digits.is_empty(), "buffer cleared");
        assert_eq!(
            select_step(&mut state, Key::Enter),
            SelectStep::Chosen(0),
            "empty buffer commits the current selection"
        );
    }

    #[test]
    fn digit_buffer_resets_at_digit_width() {
        let rows = menu(9); // 位宽 1
        let mut state = SelectState::new(&rows);
        select_step(&mut state, Key::Char('4'));
        assert_eq!(state.pending_digits, "4");
        select_step(&mut state, Key::Char('7'));
        assert_eq!(state.pending_digits, "7", "previous digit dropped");
        assert_eq!(state.selected, 6);
    }

    #[test]
    fn backspace_edits_digit_buffer() {
        let rows = menu(12);
        let mut state = SelectState::new(&rows);
        select_step(&mut state, Key::Char('1'));
        select_step(&mut state, Key::Char('2'));
        select_step(&mut state, Key::Backspace);
        assert_eq!(state.pending_digits, "1");
    }

    #[test]
    fn navigation_clears_digit_buffer() {
        let rows = menu(12);
        let mut state = SelectState::new(&rows);
        select_step(&mut state, Key::Char('1'));
        select_step(&mut state, Key::Down);
        assert!(state.pending_digits.is_empty());
    }

    #[test]
    fn vi_keys_move_with_wraparound() {
        let rows = menu(3);
        let mut state = SelectState::new(&rows);
        select_step(&mut state, Key::Char('k'));
        assert_eq!(state.selected, 2);
        select_step(&mut state, Key::Char('j'));
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn quit_key_and_q_cancel() {
        let rows = menu(3);
        let mut state = SelectState::new(&rows);
        assert_eq!(select_step(&mut state, Key::Quit), SelectStep::Canceled);
        assert_eq!(
            select_step(&mut state, Key::Char('q')),
            SelectStep::Canceled
        );
    }

    #[test]
    fn shortcut_letter_is_terminal_case_insensitive() {
        let mut rows = menu(3);
        rows[2].shortcut = Some('t');
        let mut state = SelectState::new(&rows);
        assert_eq!(
            select_step(&mut state, Key::Char('T')),
            SelectStep::Chosen(2)
        );
    }

    #[test]
    fn unmatched_input_is_ignored() {
        let rows = menu(3);
        let mut state = SelectState::new(&rows);
        assert_eq!(select_step(&mut state, Key::Char('x')), SelectStep::Continue);
        assert_eq!(select_step(&mut state, Key::Unknown), SelectStep::Continue);
        assert_eq!(select_step(&mut state, Key::Left), SelectStep::Continue);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn home_and_end_jump() {
        let rows = menu(5);
        let mut state = SelectState::new(&rows);
        select_step(&mut state, Key::End);
        assert_eq!(state.selected, 4);
        select_step(&mut state, Key::Home);
        assert_eq!(state.selected, 0);
    }
}
