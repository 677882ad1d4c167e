//! 终端工具

mod terminal;

pub use terminal::{stdin_is_tty, RawModeSession};
