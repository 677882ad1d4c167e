//! 原始输入解码器
//!
//! 把终端字节流逐字节解码成逻辑按键事件。转义序列按最长匹配
//! 处理；无法识别的后续字节被消费并产出 [`Key::Unknown`]，
//! 不会重新放回流里。除单个多字节序列所需之外没有任何缓冲，
//! 每次最多阻塞在一个 read 调用上。

use std::io::{ErrorKind, Read};

use crate::error::{ConsoleError, ConsoleResult};

/// 逻辑按键事件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    Enter,
    Backspace,
    /// Ctrl-C / Ctrl-D：无条件立即取消，区别于普通的"未选择"
    Quit,
    Char(char),
    Unknown,
}

/// 逐字节按键解码器
pub struct KeyDecoder<R: Read> {
    input: R,
}

impl<R: Read> KeyDecoder<R> {
    pub fn new(input: R) -> Self {
        Self { input }
    }

    /// 读取并解码下一个按键
    ///
    /// 流结束或读取失败返回 [`ConsoleError::InputClosed`]，
    /// 调用方必须把它当作当前交互操作的隐式取消。
    pub fn next_key(&mut self) -> ConsoleResult<Key> {
        let byte = self.read_byte()?;
        let key = match byte {
            b'\r' | b'\n' => Key::Enter,
            0x03 | 0x04 => Key::Quit,
            0x08 | 0x7f => Key::Backspace,
            0x1b => self.decode_escape()?,
            0x20..=0x7e => Key::Char(char::from(byte)),
            _ => Key::Unknown,
        };
        Ok(key)
    }

    /// 解码 ESC 之后的序列
    fn decode_escape(&mut self) -> ConsoleResult<Key> {
        let second = self.read_byte()?;
        if second != b'[' && second != b'O' {
            return Ok(Key::Unknown);
        }
        let third = self.read_byte()?;
        Ok(match third {
            b'A' => Key::Up,
            b'B' => Key::Down,
            b'C' => Key::Right,
            b'D' => Key::Left,
            b'H' => Key::Home,
            b'F' => Key::End,
            b'1' | b'7' => self.expect_tilde(Key::Home)?,
            b'4' | b'8' => self.expect_tilde(Key::End)?,
            _ => Key::Unknown,
        })
    }

    fn expect_tilde(&mut self, key: Key) -> ConsoleResult<Key> {
        if self.read_byte()? == b'~' {
            Ok(key)
        } else {
            Ok(Key::Unknown)
        }
    }

    fn read_byte(&mut self) -> ConsoleResult<u8> {
        let mut buf = [0u8; 1];
        match self.input.read_exact(&mut buf) {
            Ok(()) => Ok(buf[0]),
            Err(err) if err.kind() == ErrorKind::UnexpectedEof => Err(ConsoleError::InputClosed),
            Err(err) => Err(err.into()),
        }
    }
}
