//! 用户目录的后端适配器
//!
//! 三个后端实现同一个 [`UserDirectory`](crate::traits::UserDirectory)：
//! 面板目录走管理 API 客户端，隧道和代理登录目录走结构化
//! 记录文件。每次加载都是新快照。

mod panel;
mod proxy_login;
mod tunnel;

pub use panel::PanelDirectory;
pub use proxy_login::{ProxyLoginFile, PROXY_LOGIN_MARKER};
pub use tunnel::TunnelUserFile;
