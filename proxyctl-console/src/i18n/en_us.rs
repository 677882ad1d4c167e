//! 英文文本 (en-US)

use super::keys::{FallbackTexts, MenuTexts, Messages, PickerTexts, PromptTexts};

pub const MESSAGES: Messages = Messages {
    prompt: PromptTexts {
        key_help: "↑/↓/j/k move · digits jump · Enter select · q cancel",
        cancel_hint: "q to cancel",
        canceled: "canceled",
    },

    menu: MenuTexts {
        jump_label: "jump: ",
    },

    picker: PickerTexts {
        filter_label: "filter: ",
        no_match: "no matching entries",
        manual_hint: "i to type a name manually",
        page_footer: |start, end, total| format!("(showing {start}\u{2013}{end} of {total})"),
    },

    fallback: FallbackTexts {
        enter_number: "enter a number, or q to cancel: ",
        manual_option: "0) enter a name manually",
        invalid_input: "invalid choice, try again",
    },
};
