//! 交互提示入口
//!
//! 每个提示都先尝试原始模式；标准输入不是终端或原始模式
//! 获取失败时降级到行模式（编号列表 + 整行读取）。两条路径
//! 的终态语义一致。

mod menu;
mod picker;

pub use menu::{run_menu, run_option_prompt, MenuOutcome, OptionOutcome};
pub use picker::{run_entity_picker, PickerOutcome};
