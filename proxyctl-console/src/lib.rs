//! Proxyctl Console
//!
//! ## 架构
//!
//! 交互层采用 Elm Architecture (TEA) 模式，但渲染的是行内提示
//! 而不是备用屏幕：
//! - **Model**: 选择和过滤状态 (`model/`)
//! - **Update**: 按键到状态转移 (`update/`)
//! - **View**: 列表渲染，写到泛型 `Write` (`view/`)
//! - **Event**: 逐字节按键解码 (`event/`)
//!
//! `prompt/` 把四者接成可直接调用的提示：
//!
//! ```text
//! run_menu / run_option_prompt / run_entity_picker
//!     stdin 是终端？
//!         是 → RawModeSession::acquire()   // util/terminal.rs
//!               循环 { 读键 → 转移 → 原地重绘 }
//!               Drop 时恢复终端
//!         否 → 编号列表 + 整行读取（语义一致的降级路径）
//! ```
//!
//! 所有循环都泛型于 `Read`/`Write`，测试用 `Cursor` 喂字节流。
//! 界面文本通过显式传入的 `&Messages` 取得（`i18n/`），没有全局
//! 当前语言。

pub mod error;
pub mod event;
pub mod i18n;
pub mod model;
pub mod prompt;
pub mod update;
pub mod util;
pub mod view;

// Re-export common types
pub use error::{ConsoleError, ConsoleResult};
pub use event::Key;
pub use i18n::{Language, Messages};
pub use model::{MenuItem, OptionItem, PickerState, SelectState};
pub use prompt::{
    run_entity_picker, run_menu, run_option_prompt, MenuOutcome, OptionOutcome, PickerOutcome,
};
pub use util::RawModeSession;
