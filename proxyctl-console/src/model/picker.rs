//! 过滤选择器状态
//!
//! 在实体列表上维护 `{query, selected, page_start}`。`selected`
//! 指向当前过滤结果，不是完整列表；任何过滤变化之后都被夹回
//! `[0, len(filtered)-1]`（结果为空时停在 0）。

use proxyctl_core::Selectable;

/// 固定翻页窗口行数
pub const PAGE_ROWS: usize = 12;

/// 过滤选择器状态（一次调用期间有效）
#[derive(Debug)]
pub struct PickerState<'a, E> {
    entities: &'a [E],
    /// 增量过滤串
    pub query: String,
    /// 命中实体在原列表中的索引，按加载顺序
    pub filtered: Vec<usize>,
    /// 在 `filtered` 中的选中位置
    pub selected: usize,
    /// 可见窗口在 `filtered` 中的起点
    pub page_start: usize,
}

impl<'a, E: Selectable> PickerState<'a, E> {
    pub fn new(entities: &'a [E]) -> Self {
        Self {
            entities,
            query: String::new(),
            filtered: (0..entities.len()).collect(),
            selected: 0,
            page_start: 0,
        }
    }

    /// 原始实体列表
    pub fn entities(&self) -> &'a [E] {
        self.entities
    }

    /// 追加一个过滤字符并重算结果
    pub fn push_query(&mut self, ch: char) {
        self.query.push(ch);
        self.refilter();
    }

    /// 删除最后一个过滤字符（按码位，不是字节）并重算结果
    pub fn pop_query(&mut self) {
        self.query.pop();
        self.refilter();
    }

    /// 整体替换过滤串
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.refilter();
    }

    /// 当前选中的实体及其在原列表中的索引
    pub fn selected_entry(&self) -> Option<(usize, &'a E)> {
        let index = *self.filtered.get(self.selected)?;
        Some((index, &self.entities[index]))
    }

    /// 上移（空结果时无操作）
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
        self.adjust_window();
    }

    /// 下移（空结果时无操作）
    pub fn select_next(&mut self) {
        if !self.filtered.is_empty() && self.selected < self.filtered.len() - 1 {
            self.selected += 1;
        }
        self.adjust_window();
    }

    /// 跳到过滤结果的第一项
    pub fn select_first(&mut self) {
        self.selected = 0;
        self.adjust_window();
    }

    /// 跳到过滤结果的最后一项
    pub fn select_last(&mut self) {
        self.selected = self.filtered.len().saturating_sub(1);
        self.adjust_window();
    }

    /// 可见窗口内的实体索引
    pub fn visible(&self) -> &[usize] {
        let end = (self.page_start + PAGE_ROWS).min(self.filtered.len());
        &self.filtered[self.page_start..end]
    }

    /// 结果是否超过一页
    pub fn overflows(&self) -> bool {
        self.filtered.len() > PAGE_ROWS
    }

    fn refilter(&mut self) {
        let needle = self.query.to_lowercase();
        self.filtered = self
            .entities
            .iter()
            .enumerate()
            .filter(|(_, e)| {
                needle.is_empty()
                    || e.display_name().to_lowercase().contains(&needle)
                    || e.primary_id()
                        .is_some_and(|id| id.to_lowercase().contains(&needle))
            })
            .map(|(i, _)| i)
            .collect();

        // 夹回选中位置
        if self.filtered.is_empty() {
            self.selected = 0;
        } else if self.selected >= self.filtered.len() {
            self.selected = self.filtered.len() - 1;
        }
        self.adjust_window();
    }

    /// 让选中行保持在窗口内，且窗口不越过结果末尾
    fn adjust_window(&mut self) {
        if self.selected < self.page_start {
            self.page_start = self.selected;
        }
        if self.selected + 1 > self.page_start + PAGE_ROWS {
            self.page_start = self.selected + 1 - PAGE_ROWS;
        }
        let max_start = self.filtered.len().saturating_sub(PAGE_ROWS);
        if self.page_start > max_start {
            self.page_start = max_start;
        }
    }
}
