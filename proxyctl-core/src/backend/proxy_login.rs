//! 代理登录凭证目录（记录文件后端）

use std::path::PathBuf;

use crate::error::CoreResult;
use crate::records::{load_records_with_marker, save_records_with_marker};
use crate::traits::{IdFormat, UserDirectory};
use crate::types::{ProxyLoginUser, StructuredRecord, UserKind};

/// 代理登录记录的标记行
pub const PROXY_LOGIN_MARKER: &str = "[[login]]";

/// 以 `[[login]]` 记录文件存储的代理登录目录
pub struct ProxyLoginFile {
    path: PathBuf,
}

impl ProxyLoginFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl UserDirectory for ProxyLoginFile {
    type User = ProxyLoginUser;

    fn kind(&self) -> UserKind {
        UserKind::ProxyLogin
    }

    fn id_format(&self) -> IdFormat {
        IdFormat::None
    }

    fn load_all(&self) -> CoreResult<Vec<ProxyLoginUser>> {
        let users: Vec<ProxyLoginUser> = load_records_with_marker(&self.path, PROXY_LOGIN_MARKER)?
            .into_iter()
            .map(|record| ProxyLoginUser {
                username: record.username,
                password: record.password,
            })
            .collect();
        log::debug!(
            "proxy login file {} loaded {} logins",
            self.path.display(),
            users.len()
        );
        Ok(users)
    }

    fn save_all(&self, users: &[ProxyLoginUser]) -> CoreResult<()> {
        let records: Vec<StructuredRecord> = users
            .iter()
            .map(|user| StructuredRecord::new(&user.username, &user.password))
            .collect();
        log::info!(
            "writing {} proxy logins to {}",
            records.len(),
            self.path.display()
        );
        save_records_with_marker(&self.path, &records, PROXY_LOGIN_MARKER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::resolve_in;

    #[test]
    fn uses_the_login_marker_on_disk() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("logins.conf");
        let backend = ProxyLoginFile::new(&path);
        backend
            .save_all(&[ProxyLoginUser {
                username: "relay-1".to_string(),
                password: "s3cret".to_string(),
            }])
            .expect("save");

        let text = std::fs::read_to_string(&path).expect("read");
        assert!(text.contains("[[login]]"));
        assert!(!text.contains("[[user]]"));
    }

    #[test]
    fn substring_resolution_works_against_the_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let backend = ProxyLoginFile::new(dir.path().join("logins.conf"));
        backend
            .save_all(&[
                ProxyLoginUser {
                    username: "relay-east".to_string(),
                    password: "a".to_string(),
                },
                ProxyLoginUser {
                    username: "portal".to_string(),
                    password: "b".to_string(),
                },
            ])
            .expect("save");

        let hit = resolve_in(&backend, "east").expect("unique substring");
        assert_eq!(hit.username, "relay-east");
    }
}
