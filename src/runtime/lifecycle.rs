// SPDX-License-Identifier: MIT

//! The one-way sandbox lifecycle: Uninstalled, then Warmed, then Active.
//!
//! Warmup acquires everything the trap handlers need while the process can
//! still open files and load libraries.  Activation installs the filter and
//! cannot be undone.  A process has exactly one [`Lifecycle`], reached with
//! [`Lifecycle::process`]; tests build their own to drive a fake installer.

use std::{
    ffi::CString,
    fmt::Display,
    os::unix::ffi::OsStrExt,
    sync::{
        OnceLock,
        atomic::{AtomicU8, Ordering},
    },
};

use nix::libc;
use tracing::{info, warn};

use crate::policy::{Policy, PolicyKind};
use crate::runtime::{config::GpuOptions, error::SandboxError, install::FilterInstaller};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SandboxState {
    Uninstalled,
    Warmed,
    Active,
}

impl Display for SandboxState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            SandboxState::Uninstalled => "uninstalled",
            SandboxState::Warmed => "warmed",
            SandboxState::Active => "active",
        })
    }
}

const UNINSTALLED: u8 = 0;
const WARMED: u8 = 1;
const ACTIVE: u8 = 2;
/// Installation in progress; reported as Warmed.
const ACTIVATING: u8 = 3;

pub struct Lifecycle {
    state: AtomicU8,
    policy: OnceLock<Policy>,
}

static PROCESS: Lifecycle = Lifecycle::new();

impl Lifecycle {
    pub const fn new() -> Self {
        Lifecycle {
            state: AtomicU8::new(UNINSTALLED),
            policy: OnceLock::new(),
        }
    }

    /// The lifecycle of this process.
    pub fn process() -> &'static Lifecycle {
        &PROCESS
    }

    pub fn state(&self) -> SandboxState {
        match self.state.load(Ordering::Acquire) {
            UNINSTALLED => SandboxState::Uninstalled,
            ACTIVE => SandboxState::Active,
            _ => SandboxState::Warmed,
        }
    }

    /// The policy that was activated, once Active.
    pub fn active_policy(&self) -> Option<&Policy> {
        self.policy.get()
    }

    /// Acquire what `policy`'s trap handlers need.  Safe to repeat before
    /// activation; policies that need nothing just move the state along.
    pub fn warmup(&self, policy: &Policy, gpu: &GpuOptions) -> Result<(), SandboxError> {
        match self.state.compare_exchange(UNINSTALLED, WARMED, Ordering::AcqRel, Ordering::Acquire) {
            Ok(_) | Err(WARMED) => {}
            Err(_) => {
                return Err(SandboxError::InvalidTransition {
                    from: SandboxState::Active,
                    to: SandboxState::Warmed,
                });
            }
        }

        if let Some(cache) = policy.cached_open() {
            if !cache.warm() {
                warn!(path = ?cache.path(), "whitelisted path could not be opened; emulated opens will fail");
            }
        }
        if policy.kind() == (PolicyKind::Gpu { hw_video_decode: true }) {
            preload_library(gpu.video_driver_path.as_os_str().as_bytes());
        }
        info!(policy = %policy.kind(), arch = %policy.arch(), "sandbox warmed");
        Ok(())
    }

    /// Install `policy` and enter the Active state for good.
    pub fn activate(&self, policy: &Policy, installer: &dyn FilterInstaller) -> Result<(), SandboxError> {
        match self.state.compare_exchange(WARMED, ACTIVATING, Ordering::AcqRel, Ordering::Acquire) {
            Ok(_) => {}
            Err(UNINSTALLED) => {
                return Err(SandboxError::InvalidTransition {
                    from: SandboxState::Uninstalled,
                    to: SandboxState::Active,
                });
            }
            Err(_) => return Err(SandboxError::AlreadyActive),
        }

        if let Err(e) = installer.install(policy) {
            self.state.store(WARMED, Ordering::Release);
            return Err(e);
        }
        // Nobody else can get past the exchange above, so the cell is empty.
        let _ = self.policy.set(policy.clone());
        self.state.store(ACTIVE, Ordering::Release);
        info!(policy = %policy.kind(), arch = %policy.arch(), "sandbox active");
        Ok(())
    }
}

impl Default for Lifecycle {
    fn default() -> Self {
        Lifecycle::new()
    }
}

/// Map a shared object for good, so a later `dlopen` from inside the
/// sandbox finds it already loaded.
fn preload_library(path: &[u8]) {
    let Ok(cpath) = CString::new(path) else {
        warn!("driver path contains a NUL byte; not preloaded");
        return;
    };
    let handle = unsafe { libc::dlopen(cpath.as_ptr(), libc::RTLD_NOW | libc::RTLD_GLOBAL | libc::RTLD_NODELETE) };
    if handle.is_null() {
        warn!(path = ?cpath, "video driver could not be preloaded");
    } else {
        info!(path = ?cpath, "video driver preloaded");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::cache::CachedOpen;
    use crate::syscalls::Arch;
    use std::cell::RefCell;

    /// Records what it was asked to install instead of touching the kernel.
    #[derive(Default)]
    struct RecordingInstaller {
        installed: RefCell<Vec<PolicyKind>>,
        fail: bool,
    }

    impl FilterInstaller for RecordingInstaller {
        fn install(&self, policy: &Policy) -> Result<(), SandboxError> {
            if self.fail {
                return Err(SandboxError::Seccomp("refused".to_string()));
            }
            self.installed.borrow_mut().push(policy.kind());
            Ok(())
        }
    }

    fn denylist() -> Policy {
        Policy::new(PolicyKind::PtraceDenylist, Arch::X86_64)
    }

    #[test]
    fn forward_transitions() {
        let life = Lifecycle::new();
        let installer = RecordingInstaller::default();
        assert_eq!(life.state(), SandboxState::Uninstalled);
        life.warmup(&denylist(), &GpuOptions::default()).expect("warmup");
        assert_eq!(life.state(), SandboxState::Warmed);
        // Warmup is repeatable before activation.
        life.warmup(&denylist(), &GpuOptions::default()).expect("second warmup");
        life.activate(&denylist(), &installer).expect("activate");
        assert_eq!(life.state(), SandboxState::Active);
        assert_eq!(*installer.installed.borrow(), vec![PolicyKind::PtraceDenylist]);
        assert_eq!(life.active_policy().map(Policy::kind), Some(PolicyKind::PtraceDenylist));
    }

    #[test]
    fn activate_requires_warmup() {
        let life = Lifecycle::new();
        let installer = RecordingInstaller::default();
        match life.activate(&denylist(), &installer) {
            Err(SandboxError::InvalidTransition { from, to }) => {
                assert_eq!(from, SandboxState::Uninstalled);
                assert_eq!(to, SandboxState::Active);
            }
            other => panic!("unexpected: {other:?}"),
        }
        assert!(installer.installed.borrow().is_empty());
    }

    #[test]
    fn active_is_terminal() {
        let life = Lifecycle::new();
        let installer = RecordingInstaller::default();
        life.warmup(&denylist(), &GpuOptions::default()).expect("warmup");
        life.activate(&denylist(), &installer).expect("activate");

        let allow_all = Policy::new(PolicyKind::AllowAll, Arch::X86_64);
        assert!(matches!(life.activate(&allow_all, &installer), Err(SandboxError::AlreadyActive)));
        assert!(matches!(
            life.warmup(&allow_all, &GpuOptions::default()),
            Err(SandboxError::InvalidTransition { from: SandboxState::Active, .. })
        ));
        assert_eq!(life.state(), SandboxState::Active);
        assert_eq!(installer.installed.borrow().len(), 1);
        assert_eq!(life.active_policy().map(Policy::kind), Some(PolicyKind::PtraceDenylist));
    }

    #[test]
    fn failed_install_stays_warmed() {
        let life = Lifecycle::new();
        let installer = RecordingInstaller { fail: true, ..Default::default() };
        life.warmup(&denylist(), &GpuOptions::default()).expect("warmup");
        assert!(matches!(life.activate(&denylist(), &installer), Err(SandboxError::Seccomp(_))));
        assert_eq!(life.state(), SandboxState::Warmed);
        assert!(life.active_policy().is_none());
    }

    #[test]
    fn gpu_warmup_fills_the_cache() {
        let file = tempfile::NamedTempFile::new().expect("temp file");
        let gpu = GpuOptions { whitelist_path: file.path().to_path_buf(), ..GpuOptions::default() };
        let policy = Policy::new(PolicyKind::Gpu { hw_video_decode: false }, Arch::X86_64)
            .with_cached_open(CachedOpen::new(&gpu.whitelist_path).expect("cache"));
        let life = Lifecycle::new();
        life.warmup(&policy, &gpu).expect("warmup");
        assert!(policy.cached_open().expect("cache attached").is_warm());
    }

    #[test]
    fn missing_driver_does_not_fail_warmup() {
        let dir = tempfile::tempdir().expect("temp dir");
        let gpu = GpuOptions {
            video_driver_path: dir.path().join("missing_drv_video.so"),
            ..GpuOptions::default()
        };
        let policy = Policy::new(PolicyKind::Gpu { hw_video_decode: true }, Arch::X86_64);
        Lifecycle::new().warmup(&policy, &gpu).expect("warmup");
    }
}
