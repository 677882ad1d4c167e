//! 用户目录抽象 Trait

use uuid::Uuid;

use crate::error::CoreResult;
use crate::traits::Selectable;
use crate::types::{PanelUser, UserKind};

/// 主键 ID 的语法格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdFormat {
    /// UUID 形式的主键
    Uuid,
    /// 没有独立主键（显示名即标识）
    None,
}

impl IdFormat {
    /// 判断标识符在语法上是否像该格式的主键
    pub fn matches(self, identifier: &str) -> bool {
        match self {
            IdFormat::Uuid => Uuid::parse_str(identifier).is_ok(),
            IdFormat::None => false,
        }
    }
}

/// 用户目录 Trait
///
/// 后端实现见 [`crate::backend`]：面板目录包装管理 API 客户端，
/// 隧道和代理登录目录是记录文件。
///
/// 每次 `load_all` 都返回独立的新快照，核心层不做缓存；
/// 其他进程的修改在下一次加载时可见。
pub trait UserDirectory {
    /// 目录中的用户类型
    type User: Selectable;

    /// 后端类别
    fn kind(&self) -> UserKind;

    /// 该后端主键的语法格式
    fn id_format(&self) -> IdFormat;

    /// 加载全部用户
    fn load_all(&self) -> CoreResult<Vec<Self::User>>;

    /// 以完整列表覆盖写回（没有部分更新 API）
    fn save_all(&self, users: &[Self::User]) -> CoreResult<()>;
}

/// 面板管理 API 客户端 Trait
///
/// HTTP 实现位于本核心之外，核心只依赖此接口。
pub trait PanelApi {
    /// 列出全部面板账户
    fn list_users(&self) -> CoreResult<Vec<PanelUser>>;

    /// 以完整列表覆盖面板账户
    fn replace_users(&self, users: &[PanelUser]) -> CoreResult<()>;
}
