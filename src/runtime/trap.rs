// SPDX-License-Identifier: MIT

//! Handlers for trapped syscalls.
//!
//! Both handlers run inside the SIGSYS handler.  They must not allocate,
//! lock, log or panic.  A handler's return value is the trapped call's
//! result: a descriptor or zero on success, the negated errno on failure.

use std::{ffi::CStr, fmt::Display, os::fd::IntoRawFd};

use nix::libc;

use crate::runtime::cache::CachedOpen;
use crate::syscalls::SyscallNumber;

/// Syscall numbers are folded below this before encoding.
pub const CRASH_SYSCALL_CEILING: u64 = 1024;

const ARG0_SHIFT: u32 = 12;
const ARG1_SHIFT: u32 = 20;
const SYSCALL_MASK: u64 = CRASH_SYSCALL_CEILING - 1;
const ENCODED_MASK: u64 = (0xff << ARG1_SHIFT) | (0xff << ARG0_SHIFT) | SYSCALL_MASK;

/// The address the crash handler faults on.
///
/// Bits 0..10 hold the syscall number modulo [`CRASH_SYSCALL_CEILING`],
/// bits 12..20 the low byte of the first argument and bits 20..28 the low
/// byte of the second.  Everything stays below 256MiB, away from anything
/// normally mapped.
pub const fn crash_address(nr: SyscallNumber, arg0: u64, arg1: u64) -> usize {
    let syscall = (nr as u32 as u64) & SYSCALL_MASK;
    (syscall | ((arg0 & 0xff) << ARG0_SHIFT) | ((arg1 & 0xff) << ARG1_SHIFT)) as usize
}

/// What a crash-handler fault address says about the offending call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrashReport {
    /// The syscall number modulo [`CRASH_SYSCALL_CEILING`].
    pub syscall: u16,
    pub arg0_low: u8,
    pub arg1_low: u8,
}

/// Recover the report from a fault address.  `None` if the address could
/// not have come from [`crash_address`].
pub fn decode_crash_address(addr: u64) -> Option<CrashReport> {
    if addr & !ENCODED_MASK != 0 {
        return None;
    }
    Some(CrashReport {
        syscall: (addr & SYSCALL_MASK) as u16,
        arg0_low: ((addr >> ARG0_SHIFT) & 0xff) as u8,
        arg1_low: ((addr >> ARG1_SHIFT) & 0xff) as u8,
    })
}

impl Display for CrashReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "syscall {} (mod {}), arg0 low byte {:#04x}, arg1 low byte {:#04x}",
            self.syscall, CRASH_SYSCALL_CEILING, self.arg0_low, self.arg1_low
        )
    }
}

/// Fault on the encoded address, then on the bare syscall number, then
/// exit.  Never returns.
pub fn crash(nr: SyscallNumber, arg0: u64, arg1: u64) -> ! {
    let addr = crash_address(nr, arg0, arg1);
    unsafe {
        std::ptr::with_exposed_provenance_mut::<u8>(addr).write_volatile(0);
        std::ptr::with_exposed_provenance_mut::<u8>(addr & 0xfff).write_volatile(0);
    }
    loop {
        unsafe { libc::_exit(1) };
    }
}

/// Emulate `open(pathname, flags)` from the whitelist cache.
///
/// # Safety
/// `pathname` must be null or point to a NUL-terminated string, as the
/// kernel would require of the real call.
pub unsafe fn path_open(cache: Option<&CachedOpen>, pathname: *const libc::c_char, flags: u64) -> isize {
    if pathname.is_null() {
        return -(libc::ENOENT as isize);
    }
    serve(cache, unsafe { CStr::from_ptr(pathname) }, flags)
}

/// Emulate `openat(dirfd, pathname, flags)` from the whitelist cache.
///
/// A relative path is only looked up when `dirfd` is `AT_FDCWD`.
///
/// # Safety
/// Same as [`path_open`].
pub unsafe fn path_openat(
    cache: Option<&CachedOpen>,
    dirfd: libc::c_int,
    pathname: *const libc::c_char,
    flags: u64,
) -> isize {
    if pathname.is_null() {
        return -(libc::ENOENT as isize);
    }
    let path = unsafe { CStr::from_ptr(pathname) };
    if dirfd != libc::AT_FDCWD && path.to_bytes().first() != Some(&b'/') {
        return -(libc::ENOENT as isize);
    }
    serve(cache, path, flags)
}

fn serve(cache: Option<&CachedOpen>, path: &CStr, flags: u64) -> isize {
    // Filling the cache here would issue the very call being emulated.
    let Some(cache) = cache.filter(|c| c.is_warm()) else {
        return -(libc::ENOENT as isize);
    };
    match cache.open(path, flags as libc::c_int) {
        Ok(fd) => fd.into_raw_fd() as isize,
        Err(errno) => -(errno as i32 as isize),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::ffi::CString;
    use std::os::fd::{FromRawFd, OwnedFd};

    #[test]
    fn known_layout() {
        assert_eq!(crash_address(101, 0, 0), 101);
        assert_eq!(crash_address(2, 0x1234, 0xff), 0x0ff3_4002);
        // 1025 folds onto 1.
        assert_eq!(crash_address(1025, 0, 0), 1);
        assert_eq!(crash_address(-1, 0, 0), 0x3ff);
    }

    #[test]
    fn foreign_addresses_are_rejected() {
        assert_eq!(decode_crash_address(0x7fff_0000_0000), None);
        assert_eq!(decode_crash_address(0x400), None);
        assert_eq!(decode_crash_address(0x1000_0000), None);
        assert!(decode_crash_address(0).is_some());
    }

    #[test]
    fn report_display() {
        let report = decode_crash_address(crash_address(16, 0x5401, 7) as u64).expect("decodes");
        assert_eq!(report.to_string(), "syscall 16 (mod 1024), arg0 low byte 0x01, arg1 low byte 0x07");
    }

    #[test]
    fn path_open_without_cache() {
        let path = CString::new("/etc/drirc").expect("no nul");
        let ret = unsafe { path_open(None, path.as_ptr(), libc::O_RDONLY as u64) };
        assert_eq!(ret, -(libc::ENOENT as isize));
    }

    #[test]
    fn path_open_hands_back_descriptors() {
        let file = tempfile::NamedTempFile::new().expect("temp file");
        let cache = CachedOpen::new(file.path()).expect("cache");
        assert!(cache.warm());
        let path = CString::new(file.path().to_str().expect("utf8 temp path")).expect("no nul");

        let fd = unsafe { path_open(Some(&cache), path.as_ptr(), libc::O_RDONLY as u64) };
        assert!(fd >= 0, "open emulation failed with {fd}");
        drop(unsafe { OwnedFd::from_raw_fd(fd as i32) });

        let other = CString::new("/etc/passwd").expect("no nul");
        let ret = unsafe { path_open(Some(&cache), other.as_ptr(), libc::O_RDONLY as u64) };
        assert_eq!(ret, -(libc::ENOENT as isize));
        let ret = unsafe { path_open(Some(&cache), std::ptr::null(), libc::O_RDONLY as u64) };
        assert_eq!(ret, -(libc::ENOENT as isize));
    }

    #[test]
    fn path_open_never_fills_the_cache() {
        let file = tempfile::NamedTempFile::new().expect("temp file");
        let cache = CachedOpen::new(file.path()).expect("cache");
        let path = CString::new(file.path().to_str().expect("utf8 temp path")).expect("no nul");

        let ret = unsafe { path_open(Some(&cache), path.as_ptr(), libc::O_RDONLY as u64) };
        assert_eq!(ret, -(libc::ENOENT as isize));
        assert!(!cache.is_warm());
    }

    #[test]
    fn path_openat_resolves_from_the_working_directory() {
        let file = tempfile::NamedTempFile::new().expect("temp file");
        let cache = CachedOpen::new(file.path()).expect("cache");
        assert!(cache.warm());
        let path = CString::new(file.path().to_str().expect("utf8 temp path")).expect("no nul");
        let flags = (libc::O_RDONLY | libc::O_CLOEXEC) as u64;

        let fd = unsafe { path_openat(Some(&cache), libc::AT_FDCWD, path.as_ptr(), flags) };
        assert!(fd >= 0, "openat emulation failed with {fd}");
        drop(unsafe { OwnedFd::from_raw_fd(fd as i32) });

        // An absolute path ignores the directory descriptor.
        let fd = unsafe { path_openat(Some(&cache), 0, path.as_ptr(), flags) };
        assert!(fd >= 0, "openat emulation failed with {fd}");
        drop(unsafe { OwnedFd::from_raw_fd(fd as i32) });

        let relative = CString::new("drirc").expect("no nul");
        let ret = unsafe { path_openat(Some(&cache), 0, relative.as_ptr(), flags) };
        assert_eq!(ret, -(libc::ENOENT as isize));
        let ret = unsafe { path_openat(Some(&cache), libc::AT_FDCWD, path.as_ptr(), libc::O_RDWR as u64) };
        assert_eq!(ret, -(libc::EACCES as isize));
    }

    proptest! {
        #[test]
        fn decode_recovers_encoded_parts(nr in any::<i32>(), arg0 in any::<u64>(), arg1 in any::<u64>()) {
            let addr = crash_address(nr, arg0, arg1);
            let report = decode_crash_address(addr as u64);
            prop_assert_eq!(report, Some(CrashReport {
                syscall: (nr as u32 % CRASH_SYSCALL_CEILING as u32) as u16,
                arg0_low: arg0 as u8,
                arg1_low: arg1 as u8,
            }));
            prop_assert!(addr < 0x1000_0000);
        }
    }
}
