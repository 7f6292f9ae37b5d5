//! Persistent flag storage
//!
//! The `Fx75`/`Fx85` opcodes round-trip a 16-byte vector through the host.
//! Here it lives in a small file next to the ROM; a missing or malformed
//! file reads as nothing, which the core treats as all-zero.

use log::warn;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// File-backed store for the persistent 16-byte flag vector
pub struct FlagFile {
    path: PathBuf,
}

impl FlagFile {
    /// Stores flags at the given path (conventionally `<rom>.flags`)
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Reads the vector back, if a valid one was ever saved
    pub fn load(&self) -> Option<[u8; 16]> {
        match fs::read(&self.path) {
            Ok(bytes) if bytes.len() >= 16 => {
                let mut out = [0; 16];
                out.copy_from_slice(&bytes[..16]);
                Some(out)
            }
            Ok(_) => {
                warn!("flag file {:?} is truncated, ignoring", self.path);
                None
            }
            Err(e) if e.kind() == ErrorKind::NotFound => None,
            Err(e) => {
                warn!("failed to read flag file {:?}: {e}", self.path);
                None
            }
        }
    }

    /// Writes the vector, logging on failure
    pub fn save(&self, flags: [u8; 16]) {
        if let Err(e) = fs::write(&self.path, flags) {
            warn!("failed to write flag file {:?}: {e}", self.path);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn scratch(name: &str) -> PathBuf {
        let mut p = std::env::temp_dir();
        p.push(format!("magpie-flags-{}-{name}", std::process::id()));
        p
    }

    #[test]
    fn round_trips_a_vector() {
        let path = scratch("roundtrip");
        let store = FlagFile::new(path.clone());
        assert_eq!(store.load(), None);

        let flags = [7u8; 16];
        store.save(flags);
        assert_eq!(store.load(), Some(flags));
        let _ = fs::remove_file(path);
    }

    #[test]
    fn short_file_reads_as_nothing() {
        let path = scratch("short");
        fs::write(&path, [1, 2, 3]).unwrap();
        let store = FlagFile::new(path.clone());
        assert_eq!(store.load(), None);
        let _ = fs::remove_file(path);
    }
}
