//! 面板账户目录

use crate::error::CoreResult;
use crate::traits::{IdFormat, PanelApi, UserDirectory};
use crate::types::{PanelUser, UserKind};

/// 包装面板管理 API 客户端的目录
///
/// HTTP 客户端在核心之外实现 [`PanelApi`]；这里只做目录语义
/// 的适配，不缓存。
pub struct PanelDirectory<C> {
    client: C,
}

impl<C: PanelApi> PanelDirectory<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }
}

impl<C: PanelApi> UserDirectory for PanelDirectory<C> {
    type User = PanelUser;

    fn kind(&self) -> UserKind {
        UserKind::Panel
    }

    fn id_format(&self) -> IdFormat {
        IdFormat::Uuid
    }

    fn load_all(&self) -> CoreResult<Vec<PanelUser>> {
        let users = self.client.list_users()?;
        log::debug!("panel directory loaded {} users", users.len());
        Ok(users)
    }

    fn save_all(&self, users: &[PanelUser]) -> CoreResult<()> {
        log::info!("replacing panel directory with {} users", users.len());
        self.client.replace_users(users)
    }
}
