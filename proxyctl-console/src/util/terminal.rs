//! 终端原始模式的获取和恢复

use std::io::{self, Write};

use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode},
    tty::IsTty,
};

use crate::error::ConsoleResult;

/// 标准输入是否接在终端上
///
/// 管道或重定向输入时返回 `false`，提示层据此降级到行模式。
pub fn stdin_is_tty() -> bool {
    io::stdin().is_tty()
}

/// 原始模式会话
///
/// 构造时进入原始模式并隐藏光标，Drop 时恢复。提示循环把它
/// 放在栈上，提前 return 或 panic 展开都能把终端还回去。
#[derive(Debug)]
pub struct RawModeSession {
    active: bool,
}

impl RawModeSession {
    pub fn acquire() -> ConsoleResult<Self> {
        enable_raw_mode()?;
        if let Err(err) = execute!(io::stdout(), Hide) {
            // 光标隐藏失败时不要把终端留在原始模式里
            let _ = disable_raw_mode();
            return Err(err.into());
        }
        Ok(Self { active: true })
    }

    /// 显式恢复，等价于 Drop，便于在循环结束后立刻还原再打印
    pub fn release(mut self) {
        self.restore();
    }

    fn restore(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        let _ = execute!(io::stdout(), Show);
        let _ = disable_raw_mode();
        let _ = io::stdout().flush();
    }
}

impl Drop for RawModeSession {
    fn drop(&mut self) {
        self.restore();
    }
}
