//! 凭证工具
//!
//! 用户名字符集校验（记录存储和各后端共用）以及新建凭证时的
//! 随机令牌生成。

use rand::Rng;

/// 判断用户名是否只含允许字符：`A-Z a-z 0-9 . _ -`，且非空
pub fn is_valid_username(username: &str) -> bool {
    !username.is_empty()
        && username
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '.' | '_' | '-'))
}

/// 生成指定长度的随机字母数字令牌
pub fn generate_token(len: usize) -> String {
    let mut rng = rand::rng();
    (0..len)
        .map(|_| char::from(rng.sample(rand::distr::Alphanumeric)))
        .collect()
}
