//! 菜单和单选提示

use std::io::{self, BufRead, Read, Write};

use crossterm::{
    cursor::MoveUp,
    queue,
    terminal::{Clear, ClearType},
};

use crate::error::{ConsoleError, ConsoleResult};
use crate::event::KeyDecoder;
use crate::i18n::Messages;
use crate::model::{MenuItem, OptionItem, SelectRow, SelectState};
use crate::update::{select_step, SelectStep};
use crate::util::{stdin_is_tty, RawModeSession};
use crate::view::{numbered_rows, render_select};

/// 菜单提示的终态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOutcome {
    /// 选中项的动作标识
    Chosen(&'static str),
    Canceled,
}

/// 单选提示的终态
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionOutcome {
    /// 选中项的值
    Chosen(String),
    Canceled,
}

/// 运行主菜单
pub fn run_menu(items: &[MenuItem], messages: &Messages) -> ConsoleResult<MenuOutcome> {
    let chosen = run_select(None, items, 0, messages)?;
    Ok(match chosen {
        Some(index) => MenuOutcome::Chosen(items[index].key),
        None => MenuOutcome::Canceled,
    })
}

/// 运行单选提示
pub fn run_option_prompt(
    title: &str,
    options: &[OptionItem],
    default_index: usize,
    messages: &Messages,
) -> ConsoleResult<OptionOutcome> {
    let chosen = run_select(Some(title), options, default_index, messages)?;
    Ok(match chosen {
        Some(index) => OptionOutcome::Chosen(options[index].value.clone()),
        None => OptionOutcome::Canceled,
    })
}

/// 两类提示共用的驱动：`Some(index)` 为选中，`None` 为取消
fn run_select<T: SelectRow>(
    title: Option<&str>,
    rows: &[T],
    default_index: usize,
    messages: &Messages,
) -> ConsoleResult<Option<usize>> {
    if stdin_is_tty() {
        if let Ok(session) = RawModeSession::acquire() {
            let mut out = io::stdout();
            if let Some(title) = title {
                // 标题留在循环重绘区之外
                write!(out, "{title}\r\n")?;
            }
            let mut state = SelectState::with_selected(rows, default_index);
            let result = select_loop(&mut io::stdin(), &mut out, &mut state, messages);
            session.release();
            return result;
        }
        log::debug!("raw mode unavailable, falling back to line input");
    }
    let stdin = io::stdin();
    let mut out = io::stdout();
    if let Some(title) = title {
        writeln!(out, "{title}")?;
    }
    select_fallback(&mut stdin.lock(), &mut out, rows, messages)
}

/// 原始模式循环，每个按键之后原地重绘
pub(crate) fn select_loop<R: Read, W: Write, T: SelectRow>(
    input: &mut R,
    out: &mut W,
    state: &mut SelectState<'_, T>,
    messages: &Messages,
) -> ConsoleResult<Option<usize>> {
    let mut decoder = KeyDecoder::new(input);
    let mut drawn = render_select(out, state, messages)?;
    loop {
        let key = decoder.next_key()?;
        let step = select_step(state, key);
        erase(out, drawn)?;
        match step {
            SelectStep::Continue => {
                drawn = render_select(out, state, messages)?;
            }
            SelectStep::Chosen(index) => return Ok(Some(index)),
            SelectStep::Canceled => {
                writeln!(out, "{}\r", messages.prompt.canceled)?;
                out.flush()?;
                return Ok(None);
            }
        }
    }
}

/// 行模式降级：编号列表加整行读取
pub(crate) fn select_fallback<R: BufRead, W: Write, T: SelectRow>(
    input: &mut R,
    out: &mut W,
    rows: &[T],
    messages: &Messages,
) -> ConsoleResult<Option<usize>> {
    numbered_rows(out, rows)?;
    loop {
        write!(out, "{}", messages.fallback.enter_number)?;
        out.flush()?;
        let line = read_trimmed_line(input)?;
        if line.eq_ignore_ascii_case("q") {
            return Ok(None);
        }
        match line.parse::<usize>() {
            Ok(n) if (1..=rows.len()).contains(&n) => return Ok(Some(n - 1)),
            _ => writeln!(out, "{}", messages.fallback.invalid_input)?,
        }
    }
}

/// 读一行并去掉行尾空白，EOF 视为输入流关闭
pub(crate) fn read_trimmed_line<R: BufRead>(input: &mut R) -> ConsoleResult<String> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(ConsoleError::InputClosed);
    }
    Ok(line.trim_end().to_string())
}

fn erase<W: Write>(out: &mut W, drawn: usize) -> io::Result<()> {
    if drawn > 0 {
        queue!(out, MoveUp(drawn as u16), Clear(ClearType::FromCursorDown))?;
        out.flush()?;
    }
    Ok(())
}
