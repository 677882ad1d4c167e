//! 选择引擎状态
//!
//! 菜单和单选提示共用同一个状态机：`{rows, selected, pending_digits}`。
//! 菜单项带分组和快捷键；单选项只有标题和说明。

/// 菜单项
///
/// 菜单在一次实例化中定义完毕，文本都是静态的。
#[derive(Debug, Clone)]
pub struct MenuItem {
    /// 分组标题（渲染时相邻同组项归并显示）
    pub section: &'static str,
    /// 返回给调用方的动作标识
    pub key: &'static str,
    /// 单字母快捷键（大小写不敏感）
    pub shortcut: Option<char>,
    /// 显示标题
    pub title: &'static str,
    /// 选中时显示的说明
    pub hint: &'static str,
}

/// 单选项（无分组、无快捷键）
#[derive(Debug, Clone)]
pub struct OptionItem {
    /// 返回给调用方的值
    pub value: String,
    /// 显示标题
    pub title: String,
    /// 选中时显示的说明
    pub hint: String,
}

impl OptionItem {
    pub fn new(
        value: impl Into<String>,
        title: impl Into<String>,
        hint: impl Into<String>,
    ) -> Self {
        Self {
            value: value.into(),
            title: title.into(),
            hint: hint.into(),
        }
    }
}

/// 选择引擎可渲染行的能力接口
pub trait SelectRow {
    fn title(&self) -> &str;

    fn hint(&self) -> &str;

    fn shortcut(&self) -> Option<char> {
        None
    }

    fn section(&self) -> Option<&str> {
        None
    }
}

impl SelectRow for MenuItem {
    fn title(&self) -> &str {
        self.title
    }

    fn hint(&self) -> &str {
        self.hint
    }

    fn shortcut(&self) -> Option<char> {
        self.shortcut
    }

    fn section(&self) -> Option<&str> {
        Some(self.section)
    }
}

impl SelectRow for OptionItem {
    fn title(&self) -> &str {
        &self.title
    }

    fn hint(&self) -> &str {
        &self.hint
    }
}

/// 选择引擎状态
#[derive(Debug)]
pub struct SelectState<'a, T> {
    /// 全部行
    pub rows: &'a [T],
    /// 当前选中的索引
    pub selected: usize,
    /// 数字快跳的未提交缓冲
    pub pending_digits: String,
}

impl<'a, T: SelectRow> SelectState<'a, T> {
    /// 创建初始状态（选中第一项）
    pub fn new(rows: &'a [T]) -> Self {
        Self::with_selected(rows, 0)
    }

    /// 创建初始状态并指定默认选中项（越界时退回 0）
    pub fn with_selected(rows: &'a [T], default_index: usize) -> Self {
        let selected = if default_index < rows.len() {
            default_index
        } else {
            0
        };
        Self {
            rows,
            selected,
            pending_digits: String::new(),
        }
    }

    /// 当前选中的行
    pub fn selected_row(&self) -> Option<&'a T> {
        self.rows.get(self.selected)
    }

    /// 项数的十进制位宽，用于数字缓冲的重置阈值
    pub fn digit_width(&self) -> usize {
        self.rows.len().to_string().len()
    }

    /// 上移一项，从第一项回绕到最后一项
    pub fn select_previous(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        self.selected = (self.selected + self.rows.len() - 1) % self.rows.len();
    }

    /// 下移一项，从最后一项回绕到第一项
    pub fn select_next(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        self.selected = (self.selected + 1) % self.rows.len();
    }

    /// 跳到第一项
    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    /// 跳到最后一项
    pub fn select_last(&mut self) {
        self.selected = self.rows.len().saturating_sub(1);
    }
}
