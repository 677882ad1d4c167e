//! 核心类型定义

mod record;
mod user;

pub use record::StructuredRecord;
pub use user::{PanelUser, ProxyLoginUser, TunnelUser, UserKind};
