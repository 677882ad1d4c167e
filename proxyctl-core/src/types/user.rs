//! 用户实体类型定义

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 受管后端类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserKind {
    /// 中央面板账户
    Panel,
    /// 隧道端点凭证
    Tunnel,
    /// SOCKS / 中继登录
    ProxyLogin,
}

impl UserKind {
    /// 用于日志和错误消息的固定英文标签
    pub fn label(self) -> &'static str {
        match self {
            UserKind::Panel => "panel",
            UserKind::Tunnel => "tunnel",
            UserKind::ProxyLogin => "proxy-login",
        }
    }
}

/// 面板账户（管理 API 返回的 JSON 结构）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelUser {
    /// 账户 ID (UUID)
    pub id: String,
    /// 账户名称
    pub username: String,
    /// 访问令牌
    pub password: String,
    /// 是否启用
    #[serde(default = "enabled_default")]
    pub enabled: bool,
    /// 创建时间
    #[serde(rename = "createdAt")]
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(with = "crate::utils::datetime::option")]
    pub created_at: Option<DateTime<Utc>>,
}

fn enabled_default() -> bool {
    true
}

/// 隧道端点凭证对
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TunnelUser {
    /// 登录名
    pub username: String,
    /// 口令
    pub password: String,
}

/// SOCKS / 中继登录凭证对
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyLoginUser {
    /// 登录名
    pub username: String,
    /// 口令
    pub password: String,
}
