//! 输入事件层

mod decoder;

pub use decoder::{Key, KeyDecoder};
