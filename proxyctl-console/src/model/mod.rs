//! 交互状态模型

mod picker;
mod select;

pub use picker::{PickerState, PAGE_ROWS};
pub use select::{MenuItem, OptionItem, SelectRow, SelectState};
