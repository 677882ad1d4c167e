//! 核心抽象 Trait

mod directory;
mod selectable;

pub use directory::{IdFormat, PanelApi, UserDirectory};
pub use selectable::Selectable;
