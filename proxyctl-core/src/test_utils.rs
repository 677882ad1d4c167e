//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::cell::RefCell;

use crate::error::CoreResult;
use crate::traits::{IdFormat, PanelApi, Selectable, UserDirectory};
use crate::types::{PanelUser, UserKind};

// ===== MockPanelApi =====

pub struct MockPanelApi {
    users: RefCell<Vec<PanelUser>>,
}

impl MockPanelApi {
    pub fn new(users: Vec<PanelUser>) -> Self {
        Self {
            users: RefCell::new(users),
        }
    }

    pub fn stored(&self) -> Vec<PanelUser> {
        self.users.borrow().clone()
    }
}

impl PanelApi for MockPanelApi {
    fn list_users(&self) -> CoreResult<Vec<PanelUser>> {
        Ok(self.users.borrow().clone())
    }

    fn replace_users(&self, users: &[PanelUser]) -> CoreResult<()> {
        *self.users.borrow_mut() = users.to_vec();
        Ok(())
    }
}

// ===== InMemoryDirectory =====

/// 内存目录，用于测试 `resolve_in` 等目录级逻辑
pub struct InMemoryDirectory<E> {
    kind: UserKind,
    id_format: IdFormat,
    users: RefCell<Vec<E>>,
}

impl<E: Clone> InMemoryDirectory<E> {
    pub fn new(kind: UserKind, id_format: IdFormat, users: Vec<E>) -> Self {
        Self {
            kind,
            id_format,
            users: RefCell::new(users),
        }
    }
}

impl<E: Selectable + Clone> UserDirectory for InMemoryDirectory<E> {
    type User = E;

    fn kind(&self) -> UserKind {
        self.kind
    }

    fn id_format(&self) -> IdFormat {
        self.id_format
    }

    fn load_all(&self) -> CoreResult<Vec<E>> {
        Ok(self.users.borrow().clone())
    }

    fn save_all(&self, users: &[E]) -> CoreResult<()> {
        *self.users.borrow_mut() = users.to_vec();
        Ok(())
    }
}

// ===== 工厂方法 =====

/// 创建测试用面板账户
pub fn panel_user(id: &str, username: &str) -> PanelUser {
    PanelUser {
        id: id.to_string(),
        username: username.to_string(),
        password: "test-secret".to_string(),
        enabled: true,
        created_at: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::resolve_in;

    #[test]
    fn resolve_in_loads_a_fresh_snapshot() {
        let dir = InMemoryDirectory::new(
            UserKind::Panel,
            IdFormat::Uuid,
            vec![panel_user("u1", "alice")],
        );
        let hit = resolve_in(&dir, "alice").expect("resolves");
        assert_eq!(hit.id, "u1");

        // 目录内容变化后，下一次解析看到新快照
        dir.save_all(&[panel_user("u2", "bob")]).expect("save");
        let err = resolve_in(&dir, "alice").expect_err("alice is gone");
        assert!(matches!(err, crate::error::CoreError::NotFound(_)));
    }
}
