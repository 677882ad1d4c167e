//! 标识符解析
//!
//! 把操作员手输的标识符解析为唯一的一个用户。固定的四级优先顺序：
//!
//! 1. 标识符在语法上符合该后端的主键格式 → 只做主键精确查找，
//!    未命中直接 `NotFound`，不再回退到名称匹配
//! 2. 显示名称精确匹配（大小写不敏感）
//! 3. 显示名称子串匹配（大小写不敏感；无独立主键的后端同时匹配 ID 字段）
//! 4. 多于一个命中 → `Ambiguous`，零命中 → `NotFound`
//!
//! 这一顺序保证操作员既可以输入完整主键，也可以输入好记的名称片段。

use log::debug;

use crate::error::{CoreError, CoreResult};
use crate::traits::{IdFormat, Selectable, UserDirectory};

/// 歧义列表最多展示的候选数
const MAX_CANDIDATES: usize = 5;

/// 在给定实体快照中解析标识符
pub fn resolve<'a, E: Selectable>(
    identifier: &str,
    entities: &'a [E],
    id_format: IdFormat,
) -> CoreResult<&'a E> {
    let identifier = identifier.trim();
    if identifier.is_empty() {
        return Err(CoreError::EmptyIdentifier);
    }

    // 1. 主键语法命中：精确查找，未命中不回退
    if id_format.matches(identifier) {
        return lookup_by_id(identifier, entities);
    }

    let needle = identifier.to_lowercase();

    // 2. 名称精确匹配
    let exact: Vec<&E> = entities
        .iter()
        .filter(|e| e.display_name().to_lowercase() == needle)
        .collect();
    match exact.len() {
        1 => return Ok(exact[0]),
        0 => {}
        _ => return Err(ambiguous(identifier, &exact)),
    }

    // 3. 子串匹配
    let partial: Vec<&E> = entities
        .iter()
        .filter(|e| {
            e.display_name().to_lowercase().contains(&needle)
                || (id_format == IdFormat::None
                    && e.primary_id()
                        .is_some_and(|id| id.to_lowercase().contains(&needle)))
        })
        .collect();
    match partial.len() {
        1 => Ok(partial[0]),
        0 => Err(CoreError::NotFound(identifier.to_string())),
        _ => Err(ambiguous(identifier, &partial)),
    }
}

/// 在目录的最新快照中解析标识符
pub fn resolve_in<D>(directory: &D, identifier: &str) -> CoreResult<D::User>
where
    D: UserDirectory,
    D::User: Clone,
{
    let users = directory.load_all()?;
    debug!(
        "resolving {:?} against {} {} user(s)",
        identifier,
        users.len(),
        directory.kind().label()
    );
    resolve(identifier, &users, directory.id_format()).cloned()
}

fn lookup_by_id<'a, E: Selectable>(identifier: &str, entities: &'a [E]) -> CoreResult<&'a E> {
    entities
        .iter()
        .find(|e| {
            e.primary_id()
                .is_some_and(|id| id.eq_ignore_ascii_case(identifier))
        })
        .ok_or_else(|| CoreError::NotFound(identifier.to_string()))
}

fn ambiguous<E: Selectable>(identifier: &str, matches: &[&E]) -> CoreError {
    CoreError::Ambiguous {
        identifier: identifier.to_string(),
        candidates: matches
            .iter()
            .take(MAX_CANDIDATES)
            .map(|e| e.summary())
            .collect(),
        more: matches.len().saturating_sub(MAX_CANDIDATES),
    }
}
