//! 翻译键定义
//!
//! 定义所有界面文本的结构体，提供编译期类型检查。
//! 文本按提示类型分类：`prompt.*` 跨提示复用，`menu.*`、
//! `picker.*`、`fallback.*` 归属各自的交互界面。

/// 所有界面文本的根结构
pub struct Messages {
    /// 跨提示复用的文本
    pub prompt: PromptTexts,
    /// 菜单界面文本
    pub menu: MenuTexts,
    /// 过滤选择器文本
    pub picker: PickerTexts,
    /// 行模式降级文本
    pub fallback: FallbackTexts,
}

/// 跨提示复用的文本
pub struct PromptTexts {
    /// 底部操作提示（原始模式）
    pub key_help: &'static str,
    /// 取消提示
    pub cancel_hint: &'static str,
    /// 取消后的回显
    pub canceled: &'static str,
}

/// 菜单界面文本
pub struct MenuTexts {
    /// 数字缓冲前缀，如 "jump: "
    pub jump_label: &'static str,
}

/// 过滤选择器文本
pub struct PickerTexts {
    /// 过滤串前缀
    pub filter_label: &'static str,
    /// 无匹配结果
    pub no_match: &'static str,
    /// 手动输入提示（`i` 键）
    pub manual_hint: &'static str,
    /// 翻页页脚，占位 {start} {end} {total}
    pub page_footer: fn(start: usize, end: usize, total: usize) -> String,
}

/// 行模式降级文本
pub struct FallbackTexts {
    /// 编号列表后的输入提示
    pub enter_number: &'static str,
    /// 选择器里编号 0 的含义
    pub manual_option: &'static str,
    /// 无效输入的回显
    pub invalid_input: &'static str,
}
