//! 简体中文文本 (zh-CN)

use super::keys::{FallbackTexts, MenuTexts, Messages, PickerTexts, PromptTexts};

pub const MESSAGES: Messages = Messages {
    prompt: PromptTexts {
        key_help: "↑/↓/j/k 移动 · 数字跳转 · Enter 确认 · q 取消",
        cancel_hint: "按 q 取消",
        canceled: "已取消",
    },

    menu: MenuTexts {
        jump_label: "跳转: ",
    },

    picker: PickerTexts {
        filter_label: "过滤: ",
        no_match: "没有匹配的条目",
        manual_hint: "按 i 手动输入名称",
        page_footer: |start, end, total| format!("（显示第 {start}\u{2013}{end} 项，共 {total} 项）"),
    },

    fallback: FallbackTexts {
        enter_number: "输入编号，或 q 取消: ",
        manual_option: "0) 手动输入名称",
        invalid_input: "无效输入，请重试",
    },
};
