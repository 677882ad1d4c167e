//! 按键到状态转移

mod picker;
mod select;

pub use picker::{picker_step, PickerStep};
pub use select::{select_step, SelectStep};
