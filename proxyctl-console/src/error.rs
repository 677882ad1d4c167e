//! 控制台层错误类型

use thiserror::Error;

/// 交互层错误
///
/// 取消（`q`/Ctrl-C）和请求手动输入不是错误，它们通过各自的
/// Outcome 枚举返回；这里只剩真正的失败。
#[derive(Error, Debug)]
pub enum ConsoleError {
    /// 输入流结束或不可读（视为隐式取消）
    #[error("input stream closed")]
    InputClosed,

    /// 终端 I/O 错误
    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),
}

/// 交互层结果别名
pub type ConsoleResult<T> = Result<T, ConsoleError>;
