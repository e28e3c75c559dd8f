// SPDX-License-Identifier: MIT

//! A pre-opened descriptor for one whitelisted path.
//!
//! The descriptor is opened once, during warmup, while `open` still works.
//! After activation the path-open trap hands out duplicates of it.  The
//! cached descriptor itself never leaves this type, so a caller closing its
//! copy cannot invalidate the cache.

use std::{
    ffi::{CStr, CString},
    os::{
        fd::{AsRawFd, FromRawFd, OwnedFd},
        unix::ffi::OsStrExt,
    },
    path::Path,
    sync::OnceLock,
};

use nix::{errno::Errno, libc};

use crate::runtime::error::SandboxError;

/// Flags that may accompany `O_RDONLY` in an accepted request.
const TOLERATED_FLAGS: libc::c_int = libc::O_CLOEXEC | libc::O_LARGEFILE;

#[derive(Debug)]
pub struct CachedOpen {
    path: CString,
    /// Written once by the first opener; `None` records a failed open.
    slot: OnceLock<Option<OwnedFd>>,
}

impl CachedOpen {
    pub fn new(path: impl AsRef<Path>) -> Result<Self, SandboxError> {
        Ok(CachedOpen {
            path: CString::new(path.as_ref().as_os_str().as_bytes())?,
            slot: OnceLock::new(),
        })
    }

    pub fn path(&self) -> &CStr {
        &self.path
    }

    /// Perform the real open if nobody has yet.  Returns whether a
    /// descriptor is cached.
    pub fn warm(&self) -> bool {
        self.cached().is_some()
    }

    /// Whether the one real open has already happened, successful or not.
    pub fn is_warm(&self) -> bool {
        self.slot.get().is_some()
    }

    fn cached(&self) -> Option<&OwnedFd> {
        self.slot
            .get_or_init(|| {
                let fd = unsafe { libc::open(self.path.as_ptr(), libc::O_RDONLY | libc::O_CLOEXEC) };
                if fd < 0 {
                    None
                } else {
                    Some(unsafe { OwnedFd::from_raw_fd(fd) })
                }
            })
            .as_ref()
    }

    /// Serve an `open(path, flags)` request.
    ///
    /// Only a read-only open of the whitelisted path succeeds; the result is
    /// a fresh duplicate positioned at offset zero.  Duplicates share their
    /// offset with the cache, so a caller should finish with one before
    /// asking for the next.
    pub fn open(&self, path: &CStr, flags: libc::c_int) -> Result<OwnedFd, Errno> {
        if path != self.path.as_c_str() {
            return Err(Errno::ENOENT);
        }
        if flags & !TOLERATED_FLAGS != libc::O_RDONLY {
            return Err(Errno::EACCES);
        }
        let Some(cached) = self.cached() else {
            return Err(Errno::ENOENT);
        };

        let cmd = if flags & libc::O_CLOEXEC != 0 {
            libc::F_DUPFD_CLOEXEC
        } else {
            libc::F_DUPFD
        };
        let dup = unsafe { libc::fcntl(cached.as_raw_fd(), cmd, 0) };
        if dup < 0 {
            return Err(Errno::ENOMEM);
        }
        let dup = unsafe { OwnedFd::from_raw_fd(dup) };
        if unsafe { libc::lseek(dup.as_raw_fd(), 0, libc::SEEK_SET) } < 0 {
            // Dropping the duplicate closes it.
            return Err(Errno::ENOMEM);
        }
        Ok(dup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{
        fs::File,
        io::{Read, Write},
    };

    fn whitelisted(content: &[u8]) -> (tempfile::NamedTempFile, CachedOpen, CString) {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(content).expect("write temp file");
        file.flush().expect("flush temp file");
        let cache = CachedOpen::new(file.path()).expect("cache");
        let path = CString::new(file.path().as_os_str().as_bytes()).expect("no nul");
        (file, cache, path)
    }

    fn read_all(fd: OwnedFd) -> Vec<u8> {
        let mut buf = Vec::new();
        File::from(fd).read_to_end(&mut buf).expect("read dup");
        buf
    }

    #[test]
    fn repeated_opens_start_from_the_beginning() {
        let (_file, cache, path) = whitelisted(b"<driconf/>");
        assert!(!cache.is_warm());
        assert!(cache.warm());
        assert!(cache.is_warm());

        for _ in 0..3 {
            let fd = cache.open(&path, libc::O_RDONLY).expect("cached open");
            assert_eq!(read_all(fd), b"<driconf/>");
        }
    }

    #[test]
    fn duplicates_are_independent_descriptors() {
        let (_file, cache, path) = whitelisted(b"abc");
        let a = cache.open(&path, libc::O_RDONLY).expect("first");
        let b = cache.open(&path, libc::O_RDONLY).expect("second");
        assert_ne!(a.as_raw_fd(), b.as_raw_fd());
        drop(a);
        // The cache survives callers closing their copies.
        assert_eq!(read_all(b), b"abc");
        let c = cache.open(&path, libc::O_RDONLY).expect("third");
        assert_eq!(read_all(c), b"abc");
    }

    #[test]
    fn first_open_can_happen_lazily() {
        let (_file, cache, path) = whitelisted(b"lazy");
        let fd = cache.open(&path, libc::O_RDONLY).expect("lazy open");
        assert!(cache.is_warm());
        assert_eq!(read_all(fd), b"lazy");
    }

    #[test]
    fn other_paths_are_not_found() {
        let (_file, cache, _path) = whitelisted(b"x");
        cache.warm();
        let other = CString::new("/etc/passwd").expect("no nul");
        for _ in 0..3 {
            assert_eq!(cache.open(&other, libc::O_RDONLY).err(), Some(Errno::ENOENT));
        }
    }

    #[test]
    fn write_access_is_refused() {
        let (_file, cache, path) = whitelisted(b"x");
        for flags in [libc::O_WRONLY, libc::O_RDWR, libc::O_RDONLY | libc::O_CREAT, libc::O_RDONLY | libc::O_TRUNC] {
            assert_eq!(cache.open(&path, flags).err(), Some(Errno::EACCES), "flags {flags:#x}");
        }
        assert!(cache.open(&path, libc::O_RDONLY | libc::O_LARGEFILE).is_ok());
    }

    #[test]
    fn close_on_exec_follows_the_request() {
        let (_file, cache, path) = whitelisted(b"x");
        let plain = cache.open(&path, libc::O_RDONLY).expect("plain");
        let cloexec = cache.open(&path, libc::O_RDONLY | libc::O_CLOEXEC).expect("cloexec");
        let fd_flags = |fd: &OwnedFd| unsafe { libc::fcntl(fd.as_raw_fd(), libc::F_GETFD) };
        assert_eq!(fd_flags(&plain) & libc::FD_CLOEXEC, 0);
        assert_eq!(fd_flags(&cloexec) & libc::FD_CLOEXEC, libc::FD_CLOEXEC);
    }

    #[test]
    fn failed_warmup_degrades_to_not_found() {
        let dir = tempfile::tempdir().expect("temp dir");
        let missing = dir.path().join("drirc");
        let cache = CachedOpen::new(&missing).expect("cache");
        assert!(!cache.warm());
        assert!(cache.is_warm());
        let path = CString::new(missing.as_os_str().as_bytes()).expect("no nul");
        assert_eq!(cache.open(&path, libc::O_RDONLY).err(), Some(Errno::ENOENT));

        // Creating the file later does not revive the cache.
        File::create(&missing).expect("create");
        assert_eq!(cache.open(&path, libc::O_RDONLY).err(), Some(Errno::ENOENT));
    }

    #[test]
    fn interior_nul_is_rejected() {
        assert!(CachedOpen::new("/etc/dri\0rc").is_err());
    }
}
