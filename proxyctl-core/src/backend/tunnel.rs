//! 隧道端点凭证目录（记录文件后端）

use std::path::PathBuf;

use crate::error::CoreResult;
use crate::records::{load_records, save_records};
use crate::traits::{IdFormat, UserDirectory};
use crate::types::{StructuredRecord, TunnelUser, UserKind};

/// 以 `[[user]]` 记录文件存储的隧道用户目录
pub struct TunnelUserFile {
    path: PathBuf,
}

impl TunnelUserFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl UserDirectory for TunnelUserFile {
    type User = TunnelUser;

    fn kind(&self) -> UserKind {
        UserKind::Tunnel
    }

    fn id_format(&self) -> IdFormat {
        IdFormat::None
    }

    fn load_all(&self) -> CoreResult<Vec<TunnelUser>> {
        let users: Vec<TunnelUser> = load_records(&self.path)?
            .into_iter()
            .map(|record| TunnelUser {
                username: record.username,
                password: record.password,
            })
            .collect();
        log::debug!(
            "tunnel user file {} loaded {} users",
            self.path.display(),
            users.len()
        );
        Ok(users)
    }

    fn save_all(&self, users: &[TunnelUser]) -> CoreResult<()> {
        let records: Vec<StructuredRecord> = users
            .iter()
            .map(|user| StructuredRecord::new(&user.username, &user.password))
            .collect();
        log::info!(
            "writing {} tunnel users to {}",
            records.len(),
            self.path.display()
        );
        save_records(&self.path, &records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_an_empty_directory() {
        let dir = tempfile::tempdir().expect("tempdir");
        let backend = TunnelUserFile::new(dir.path().join("tunnel.conf"));
        assert!(backend.load_all().expect("load").is_empty());
    }

    #[test]
    fn save_then_load_round_trips_sorted() {
        let dir = tempfile::tempdir().expect("tempdir");
        let backend = TunnelUserFile::new(dir.path().join("tunnel.conf"));
        backend
            .save_all(&[
                TunnelUser {
                    username: "zoe".to_string(),
                    password: "p1".to_string(),
                },
                TunnelUser {
                    username: "Alice".to_string(),
                    password: "p2".to_string(),
                },
            ])
            .expect("save");

        let loaded = backend.load_all().expect("load");
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].username, "Alice", "sorted case-insensitively");
        assert_eq!(loaded[1].username, "zoe");
    }
}
