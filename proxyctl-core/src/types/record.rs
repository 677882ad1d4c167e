//! 结构化凭证记录类型

/// 一条持久化的凭证记录
///
/// 写入时校验：用户名符合允许字符集、口令非空、
/// 用户名在整个文件内大小写不敏感地唯一。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuredRecord {
    /// 登录名
    pub username: String,
    /// 口令
    pub password: String,
}

impl StructuredRecord {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}
