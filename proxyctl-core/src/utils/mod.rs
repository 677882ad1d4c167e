//! 工具模块

pub mod credentials;
pub mod datetime;
