//! 过滤选择器的按键转移

use proxyctl_core::Selectable;

use crate::event::Key;
use crate::model::PickerState;

/// 一次按键转移的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerStep {
    /// 继续循环
    Continue,
    /// 终态：选中原列表中给定索引的实体
    Chosen(usize),
    /// 终态：切换到手动输入
    ManualEntry,
    /// 终态：用户取消
    Canceled,
}

/// 处理一个按键
///
/// `i` 切换到手动输入，`j`/`k`/`q` 保留给导航和取消，其余可打印
/// 字符都进入过滤串。
pub fn picker_step<E: Selectable>(state: &mut PickerState<'_, E>, key: Key) -> PickerStep {
    match key {
        Key::Up => {
            state.select_previous();
            PickerStep::Continue
        }
        Key::Down => {
            state.select_next();
            PickerStep::Continue
        }
        Key::Home => {
            state.select_first();
            PickerStep::Continue
        }
        Key::End => {
            state.select_last();
            PickerStep::Continue
        }
        Key::Backspace => {
            state.pop_query();
            PickerStep::Continue
        }
        Key::Enter => match state.selected_entry() {
            Some((index, _)) => PickerStep::Chosen(index),
            // 空结果时 Enter 无效
            None => PickerStep::Continue,
        },
        Key::Quit => PickerStep::Canceled,
        Key::Char(ch) => char_step(state, ch),
        _ => PickerStep::Continue,
    }
}

fn char_step<E: Selectable>(state: &mut PickerState<'_, E>, ch: char) -> PickerStep {
    match ch {
        'q' => PickerStep::Canceled,
        'i' => PickerStep::ManualEntry,
        'k' => {
            state.select_previous();
            PickerStep::Continue
        }
        'j' => {
            state.select_next();
            PickerStep::Continue
        }
        _ => {
            state.push_query(ch);
            PickerStep::Continue
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proxyctl_core::TunnelUser;

    fn users(names: &[&str]) -> Vec<TunnelUser> {
        names
            .iter()
            .map(|name| TunnelUser {
                username: (*name).to_string(),
                password: "p".to_string(),
            })
            .collect()
    }

    #[test]
    fn typed_characters_extend_the_query() {
        let list = users(&["alice01", "alice02", "bob"]);
        let mut state = PickerState::new(&list);
        for ch in "al".chars() {
            assert_eq!(picker_step(&mut state, Key::Char(ch)), PickerStep::Continue);
        }
        assert_eq!(state.query, "al");
        assert_eq!(state.filtered, vec![0, 1]);
    }

    #[test]
    fn enter_returns_the_original_index() {
        let list = users(&["zoe", "alice01", "alice02"]);
        let mut state = PickerState::new(&list);
        state.set_query("alice");
        assert_eq!(picker_step(&mut state, Key::Char('j')), PickerStep::Continue);
        assert_eq!(picker_step(&mut state, Key::Enter), PickerStep::Chosen(2));
    }

    #[test]
    fn enter_on_a_single_match_returns_it() {
        let list = users(&["alice01", "alice02"]);
        let mut state = PickerState::new(&list);
        state.set_query("alice0");
        assert_eq!(state.filtered.len(), 2);
        state.set_query("alice01");
        assert_eq!(state.filtered.len(), 1);
        assert_eq!(picker_step(&mut state, Key::Enter), PickerStep::Chosen(0));
    }

    #[test]
    fn enter_on_empty_results_keeps_looping() {
        let list = users(&["alice"]);
        let mut state = PickerState::new(&list);
        state.set_query("nobody");
        assert_eq!(picker_step(&mut state, Key::Enter), PickerStep::Continue);
    }

    #[test]
    fn reserved_keys_do_not_touch_the_query() {
        let list = users(&["alice", "bob"]);
        let mut state = PickerState::new(&list);
        assert_eq!(picker_step(&mut state, Key::Char('i')), PickerStep::ManualEntry);
        assert_eq!(picker_step(&mut state, Key::Char('q')), PickerStep::Canceled);
        assert!(state.query.is_empty());
    }

    #[test]
    fn backspace_pops_the_query() {
        let list = users(&["alice", "bob"]);
        let mut state = PickerState::new(&list);
        state.set_query("bo");
        picker_step(&mut state, Key::Backspace);
        assert_eq!(state.query, "b");
        assert_eq!(state.filtered, vec![1]);
    }

    #[test]
    fn ctrl_c_cancels() {
        let list = users(&["alice"]);
        let mut state = PickerState::new(&list);
        assert_eq!(picker_step(&mut state, Key::Quit), PickerStep::Canceled);
    }
}
