//! 界面渲染
//!
//! 所有渲染函数都写到泛型 `Write`，返回实际绘制的行数，
//! 提示循环据此上移光标重绘。原始模式下行尾必须是 `\r\n`。

mod fallback;
mod picker;
mod select;

pub use fallback::{numbered_entities, numbered_rows};
pub use picker::render_picker;
pub use select::render_select;
