//! Persistent blob store: one opaque byte blob per domain file.
//!
//! Knows nothing about cache semantics. The single guarantee it provides is
//! that a reader observes either the previous blob or the fully-new blob,
//! never a partial write: writes go to a temp file in the same directory and
//! are renamed over the target.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use log::warn;
use sha2::{Digest, Sha256};
use tempfile::NamedTempFile;

use crate::domain::Domain;
use crate::error::Result;

pub(crate) struct BlobStore {
    dir: PathBuf,
}

impl BlobStore {
    /// Opens a blob store rooted at `dir`, creating the directory if needed.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Opens a blob store in a per-user subdirectory of `base_dir`.
    ///
    /// The subdirectory is named by the SHA-256 hex digest of the user's
    /// session token, so cached data from one user is never visible after
    /// switching to another and the token itself never lands on disk.
    pub fn scoped_to_user(base_dir: impl AsRef<Path>, user_token: &str) -> Result<Self> {
        let digest = Sha256::digest(user_token.as_bytes());
        let name: String = digest.iter().map(|b| format!("{:02x}", b)).collect();
        Self::new(base_dir.as_ref().join(name))
    }

    fn path(&self, domain: Domain) -> PathBuf {
        self.dir.join(domain.file_name())
    }

    /// Reads the blob for `domain`. A domain that was never written is
    /// absent, not an error; unexpected read failures are logged and also
    /// reported as absent so a damaged file degrades to a cache miss.
    pub fn read(&self, domain: Domain) -> Option<Vec<u8>> {
        match fs::read(self.path(domain)) {
            Ok(bytes) => Some(bytes),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => None,
            Err(err) => {
                warn!("failed to read cache blob {}: {}", domain, err);
                None
            }
        }
    }

    /// Atomically replaces the blob for `domain`.
    pub fn write(&self, domain: Domain, bytes: &[u8]) -> Result<()> {
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(bytes)?;
        tmp.as_file().sync_all()?;
        tmp.persist(self.path(domain)).map_err(|err| err.error)?;
        Ok(())
    }

    /// Removes every domain blob under this store's directory.
    pub fn invalidate(&self) -> Result<()> {
        match fs::remove_dir_all(&self.dir) {
            Ok(()) => {}
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(err) => return Err(err.into()),
        }
        fs::create_dir_all(&self.dir)?;
        Ok(())
    }
}
