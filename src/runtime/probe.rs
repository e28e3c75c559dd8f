// SPDX-License-Identifier: MIT

//! Side-effect free check for seccomp filter support.

use std::fmt::Display;

use nix::libc;

use crate::syscalls::Arch;

/// What the running kernel and library can do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupportStatus {
    /// Filters can be installed.  `api_level` is libseccomp's.
    Available { api_level: u32 },
    /// This crate has no syscall table for the build target.
    UnsupportedArch,
    /// The kernel lacks `SECCOMP_MODE_FILTER`.
    KernelUnsupported,
}

impl SupportStatus {
    pub fn is_available(&self) -> bool {
        matches!(self, SupportStatus::Available { .. })
    }
}

impl Display for SupportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SupportStatus::Available { api_level } => write!(f, "available (libseccomp api level {api_level})"),
            SupportStatus::UnsupportedArch => f.write_str("unsupported architecture"),
            SupportStatus::KernelUnsupported => f.write_str("kernel does not support seccomp filters"),
        }
    }
}

/// Probe without changing any process state.
pub fn probe_support() -> SupportStatus {
    if Arch::native().is_none() {
        return SupportStatus::UnsupportedArch;
    }
    if !kernel_has_filter_mode() {
        return SupportStatus::KernelUnsupported;
    }
    SupportStatus::Available { api_level: libseccomp::get_api() }
}

/// Ask for filter mode with a null program.  A kernel that knows the mode
/// rejects the pointer with `EFAULT` before touching anything; one that
/// does not answers `EINVAL`.
fn kernel_has_filter_mode() -> bool {
    let ret = unsafe {
        libc::prctl(
            libc::PR_SET_SECCOMP,
            libc::SECCOMP_MODE_FILTER as libc::c_ulong,
            std::ptr::null::<libc::c_void>(),
            0 as libc::c_ulong,
            0 as libc::c_ulong,
        )
    };
    ret < 0 && nix::errno::Errno::last() == nix::errno::Errno::EFAULT
}
