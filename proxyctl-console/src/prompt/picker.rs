//! 实体选择提示

use std::io::{self, BufRead, Read, Write};

use crossterm::{
    cursor::MoveUp,
    queue,
    terminal::{Clear, ClearType},
};
use proxyctl_core::Selectable;

use crate::error::ConsoleResult;
use crate::event::KeyDecoder;
use crate::i18n::Messages;
use crate::model::PickerState;
use crate::update::{picker_step, PickerStep};
use crate::util::{stdin_is_tty, RawModeSession};
use crate::view::{numbered_entities, render_picker};

use super::menu::read_trimmed_line;

/// 实体选择的终态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerOutcome {
    /// 选中实体在加载列表中的索引
    Chosen(usize),
    /// 用户要求改为手动输入标识
    ManualEntry,
    Canceled,
}

/// 运行实体选择器
///
/// 调用方拿到 [`PickerOutcome::ManualEntry`] 后自行读取标识并
/// 交给解析器。
pub fn run_entity_picker<E: Selectable>(
    title: &str,
    entities: &[E],
    messages: &Messages,
) -> ConsoleResult<PickerOutcome> {
    if stdin_is_tty() {
        if let Ok(session) = RawModeSession::acquire() {
            let mut out = io::stdout();
            // 标题留在循环重绘区之外
            write!(out, "{title}\r\n")?;
            let mut state = PickerState::new(entities);
            let result = picker_loop(&mut io::stdin(), &mut out, &mut state, messages);
            session.release();
            return result;
        }
        log::debug!("raw mode unavailable, falling back to line input");
    }
    let stdin = io::stdin();
    let mut out = io::stdout();
    writeln!(out, "{title}")?;
    picker_fallback(&mut stdin.lock(), &mut out, entities, messages)
}

/// 原始模式循环，每个按键之后原地重绘
pub(crate) fn picker_loop<R: Read, W: Write, E: Selectable>(
    input: &mut R,
    out: &mut W,
    state: &mut PickerState<'_, E>,
    messages: &Messages,
) -> ConsoleResult<PickerOutcome> {
    let mut decoder = KeyDecoder::new(input);
    let mut drawn = render_picker(out, state, messages)?;
    loop {
        let key = decoder.next_key()?;
        let step = picker_step(state, key);
        erase(out, drawn)?;
        match step {
            PickerStep::Continue => {
                drawn = render_picker(out, state, messages)?;
            }
            PickerStep::Chosen(index) => return Ok(PickerOutcome::Chosen(index)),
            PickerStep::ManualEntry => return Ok(PickerOutcome::ManualEntry),
            PickerStep::Canceled => {
                writeln!(out, "{}\r", messages.prompt.canceled)?;
                out.flush()?;
                return Ok(PickerOutcome::Canceled);
            }
        }
    }
}

/// 行模式降级：编号列表，0 号是手动输入
pub(crate) fn picker_fallback<R: BufRead, W: Write, E: Selectable>(
    input: &mut R,
    out: &mut W,
    entities: &[E],
    messages: &Messages,
) -> ConsoleResult<PickerOutcome> {
    numbered_entities(out, entities, messages)?;
    loop {
        write!(out, "{}", messages.fallback.enter_number)?;
        out.flush()?;
        let line = read_trimmed_line(input)?;
        if line.eq_ignore_ascii_case("q") {
            return Ok(PickerOutcome::Canceled);
        }
        match line.parse::<usize>() {
            Ok(0) => return Ok(PickerOutcome::ManualEntry),
            Ok(n) if n <= entities.len() => return Ok(PickerOutcome::Chosen(n - 1)),
            _ => writeln!(out, "{}", messages.fallback.invalid_input)?,
        }
    }
}

fn erase<W: Write>(out: &mut W, drawn: usize) -> io::Result<()> {
    if drawn > 0 {
        queue!(out, MoveUp(drawn as u16), Clear(ClearType::FromCursorDown))?;
        out.flush()?;
    }
    Ok(())
}
