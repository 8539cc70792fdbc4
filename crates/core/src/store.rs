//! Read-only backing store for page contents.

use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::Path;

use crate::addr::PAGE_SIZE;
use crate::error::SimError;

/// File-backed page store, logically partitioned into consecutive
/// `PAGE_SIZE`-byte pages. Never written.
pub struct BackingStore {
    file: File,
}

impl BackingStore {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, SimError> {
        let file = File::open(path).map_err(|source| SimError::BackingStore {
            page: None,
            source,
        })?;
        Ok(Self { file })
    }

    /// Positioned read of page `page` at byte offset `page * PAGE_SIZE`.
    ///
    /// A short read (truncated store, page index past the end) is fatal:
    /// the frame the caller is filling would otherwise hold undefined
    /// bytes.
    pub fn read_page(&mut self, page: u16) -> Result<[u8; PAGE_SIZE], SimError> {
        let offset = page as u64 * PAGE_SIZE as u64;
        let mut buf = [0u8; PAGE_SIZE];

        self.file
            .seek(SeekFrom::Start(offset))
            .and_then(|_| self.file.read_exact(&mut buf))
            .map_err(|source| SimError::BackingStore {
                page: Some(page),
                source: if source.kind() == io::ErrorKind::UnexpectedEof {
                    io::Error::new(
                        io::ErrorKind::UnexpectedEof,
                        format!("short read at offset {}", offset),
                    )
                } else {
                    source
                },
            })?;

        Ok(buf)
    }
}
