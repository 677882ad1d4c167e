//! 可选择实体能力接口
//!
//! 三种用户类型共享同一套匹配语义：解析器和选择器只依赖本接口，
//! 不关心实体来自哪个后端。

use crate::types::{PanelUser, ProxyLoginUser, TunnelUser};

/// 可被解析器和选择器处理的实体能力
pub trait Selectable {
    /// 显示名称（持久化后保证非空）
    fn display_name(&self) -> &str;

    /// 主键 ID（部分后端没有独立主键）
    fn primary_id(&self) -> Option<&str> {
        None
    }

    /// 凭证密文
    fn secret(&self) -> &str;

    /// 启用状态（部分后端不区分）
    fn enabled(&self) -> Option<bool> {
        None
    }

    /// 渲染为 `name(id)` 形式，用于歧义候选列表
    fn summary(&self) -> String {
        match self.primary_id() {
            Some(id) => format!("{}({id})", self.display_name()),
            None => self.display_name().to_string(),
        }
    }
}

impl Selectable for PanelUser {
    fn display_name(&self) -> &str {
        &self.username
    }

    fn primary_id(&self) -> Option<&str> {
        Some(&self.id)
    }

    fn secret(&self) -> &str {
        &self.password
    }

    fn enabled(&self) -> Option<bool> {
        Some(self.enabled)
    }
}

impl Selectable for TunnelUser {
    fn display_name(&self) -> &str {
        &self.username
    }

    fn secret(&self) -> &str {
        &self.password
    }
}

impl Selectable for ProxyLoginUser {
    fn display_name(&self) -> &str {
        &self.username
    }

    fn secret(&self) -> &str {
        &self.password
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_includes_primary_id_when_present() {
        let user = PanelUser {
            id: "u1".to_string(),
            username: "bob".to_string(),
            password: "p".to_string(),
            enabled: true,
            created_at: None,
        };
        assert_eq!(user.summary(), "bob(u1)");
    }

    #[test]
    fn summary_falls_back_to_name() {
        let user = TunnelUser {
            username: "bob".to_string(),
            password: "p".to_string(),
        };
        assert_eq!(user.summary(), "bob");
    }
}
