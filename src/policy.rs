// SPDX-License-Identifier: MIT

//! Per-role syscall policies.
//!
//! A [`Policy`] is a total function from a syscall number to a [`Decision`].
//! It is evaluated in three steps: numbers outside the architecture's valid
//! range are refused with `ENOSYS`, then the role's overrides are consulted,
//! and whatever is left falls through to the baseline classification of the
//! number's [`SemanticSet`](crate::syscalls::SemanticSet).

pub mod baseline;
mod roles;

use std::{fmt::Display, sync::Arc};

use nix::libc;

use crate::runtime::cache::CachedOpen;
use crate::syscalls::{Arch, SyscallNumber};

/// Handlers a trapped syscall can be routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrapKind {
    /// Deliberate, diagnosable crash.  Never returns to the caller.
    Crash,
    /// `open` emulation restricted to the cached whitelisted path.
    PathOpen,
    /// The same emulation for `openat` relative to the working directory.
    PathOpenAt,
}


/// What happens when the process issues one syscall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    /// The real call runs.
    Allow,
    /// The call is refused with this errno without reaching the kernel.
    Errno(i32),
    /// Control is diverted to a handler in this process.
    Trap(TrapKind),
}

impl Decision {
    pub const ENOSYS: Decision = Decision::Errno(libc::ENOSYS);
}

impl Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Decision::Allow => f.write_str("allow"),
            Decision::Errno(code) => match errno_name(*code) {
                Some(name) => write!(f, "errno({name})"),
                None => write!(f, "errno({code})"),
            },
            Decision::Trap(TrapKind::Crash) => f.write_str("trap(crash)"),
            Decision::Trap(TrapKind::PathOpen) => f.write_str("trap(path-open)"),
            Decision::Trap(TrapKind::PathOpenAt) => f.write_str("trap(path-openat)"),
        }
    }
}

fn errno_name(code: i32) -> Option<&'static str> {
    Some(match code {
        libc::ENOENT => "ENOENT",
        libc::EPERM => "EPERM",
        libc::EACCES => "EACCES",
        libc::ENOTTY => "ENOTTY",
        libc::ENOMEM => "ENOMEM",
        libc::ENOSYS => "ENOSYS",
        _ => return None,
    })
}

/// The named policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicyKind {
    /// The baseline alone, with no role overrides.
    Baseline,
    /// GPU process.  With hardware video decode the driver needs a real
    /// `open`; without it, `open` and `openat` are emulated for the
    /// whitelisted path.
    Gpu { hw_video_decode: bool },
    /// Out-of-process plugin host.
    PluginHost,
    /// Everything in range except debugging and cross-process memory access.
    PtraceDenylist,
    /// Everything in range.  Fallback and testing only.
    AllowAll,
}

impl PolicyKind {
    pub fn name(self) -> &'static str {
        match self {
            PolicyKind::Baseline => "baseline",
            PolicyKind::Gpu { .. } => "gpu",
            PolicyKind::PluginHost => "plugin-host",
            PolicyKind::PtraceDenylist => "ptrace-denylist",
            PolicyKind::AllowAll => "allow-all",
        }
    }

    /// Whether evaluating this policy can trap to a path-open handler.
    pub fn needs_path_open(self) -> bool {
        matches!(self, PolicyKind::Gpu { hw_video_decode: false })
    }
}

impl Display for PolicyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A policy bound to an architecture, plus the context its trap handlers
/// consume.
#[derive(Debug, Clone)]
pub struct Policy {
    kind: PolicyKind,
    arch: Arch,
    path_open: Option<Arc<CachedOpen>>,
}

impl Policy {
    pub fn new(kind: PolicyKind, arch: Arch) -> Self {
        Policy { kind, arch, path_open: None }
    }

    /// Attach the cache the path-open handlers serve from.
    pub fn with_cached_open(mut self, cache: CachedOpen) -> Self {
        self.path_open = Some(Arc::new(cache));
        self
    }

    pub fn kind(&self) -> PolicyKind {
        self.kind
    }

    pub fn arch(&self) -> Arch {
        self.arch
    }

    /// The whitelisted-path cache, if one was attached.
    pub fn cached_open(&self) -> Option<&CachedOpen> {
        self.path_open.as_deref()
    }

    /// The one decision for `nr`.
    pub fn evaluate(&self, nr: SyscallNumber) -> Decision {
        if !self.arch.in_range(nr) {
            return Decision::ENOSYS;
        }
        if let Some(decision) = roles::override_for(self.kind, self.arch, nr) {
            return decision;
        }
        baseline::decide(self.arch.classify(nr))
    }

    /// Every number in the valid range with its decision, in order.
    pub fn decisions(&self) -> impl Iterator<Item = (SyscallNumber, Decision)> + '_ {
        (self.arch.min_syscall()..=self.arch.max_syscall()).map(|nr| (nr, self.evaluate(nr)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syscalls::SemanticSet;
    use proptest::prelude::*;

    const ARCHES: [Arch; 2] = [Arch::X86_64, Arch::X86];
    const KINDS: [PolicyKind; 6] = [
        PolicyKind::Baseline,
        PolicyKind::Gpu { hw_video_decode: false },
        PolicyKind::Gpu { hw_video_decode: true },
        PolicyKind::PluginHost,
        PolicyKind::PtraceDenylist,
        PolicyKind::AllowAll,
    ];

    fn nr(arch: Arch, name: &str) -> SyscallNumber {
        arch.number_of(name)
            .unwrap_or_else(|| panic!("{name} not in the {arch} table"))
    }

    #[test]
    fn every_policy_is_total_over_the_range() {
        for arch in ARCHES {
            for kind in KINDS {
                let policy = Policy::new(kind, arch);
                let count = policy.decisions().count();
                assert_eq!(count as i32, arch.max_syscall() - arch.min_syscall() + 1);
            }
        }
    }

    #[test]
    fn one_past_the_max_is_enosys_for_every_role() {
        for arch in ARCHES {
            for kind in KINDS {
                let policy = Policy::new(kind, arch);
                assert_eq!(policy.evaluate(arch.max_syscall() + 1), Decision::ENOSYS, "{kind} on {arch}");
                assert_eq!(policy.evaluate(-1), Decision::ENOSYS, "{kind} on {arch}");
            }
        }
    }

    #[test]
    fn baseline_buckets_do_not_overlap() {
        // Each set lands in exactly one of allowed, emulated or watched.
        for arch in ARCHES {
            for s in arch.table() {
                let allowed = baseline::is_allowed(s.set);
                let emulated = baseline::emulated_errno(s.set).is_some();
                let watched = baseline::is_watched(s.set);
                let hits = [allowed, emulated, watched].iter().filter(|b| **b).count();
                assert_eq!(hits, 1, "{} ({:?}) on {arch}", s.name, s.set);
            }
        }
    }

    #[test]
    fn gpu_ioctl_allowed_plugin_ioctl_enotty() {
        for arch in ARCHES {
            let ioctl = nr(arch, "ioctl");
            assert_eq!(Policy::new(PolicyKind::Baseline, arch).evaluate(ioctl), Decision::Trap(TrapKind::Crash));
            for hw in [false, true] {
                let gpu = Policy::new(PolicyKind::Gpu { hw_video_decode: hw }, arch);
                assert_eq!(gpu.evaluate(ioctl), Decision::Allow);
            }
            let plugin = Policy::new(PolicyKind::PluginHost, arch);
            assert_eq!(plugin.evaluate(ioctl), Decision::Errno(libc::ENOTTY));
        }
    }

    #[test]
    fn plugin_host_ptrace_is_fatal() {
        for arch in ARCHES {
            let plugin = Policy::new(PolicyKind::PluginHost, arch);
            assert_eq!(plugin.evaluate(nr(arch, "ptrace")), Decision::Trap(TrapKind::Crash));
        }
    }

    #[test]
    fn plugin_host_extras() {
        let arch = Arch::X86_64;
        let plugin = Policy::new(PolicyKind::PluginHost, arch);
        for name in ["sched_getaffinity", "sched_setscheduler", "times", "shmget", "shmat", "shmdt", "shmctl"] {
            assert_eq!(plugin.evaluate(nr(arch, name)), Decision::Allow, "{name}");
        }
        assert_eq!(plugin.evaluate(nr(arch, "socket")), Decision::Errno(libc::EACCES));
        // Other advanced scheduler calls stay watched.
        assert_eq!(plugin.evaluate(nr(arch, "sched_setaffinity")), Decision::Trap(TrapKind::Crash));

        let x86 = Policy::new(PolicyKind::PluginHost, Arch::X86);
        assert_eq!(x86.evaluate(nr(Arch::X86, "socket")), Decision::Trap(TrapKind::Crash));
        assert_eq!(x86.evaluate(nr(Arch::X86, "shmget")), Decision::Trap(TrapKind::Crash));
    }

    #[test]
    fn gpu_open_depends_on_video_decode() {
        for arch in ARCHES {
            let open = nr(arch, "open");
            let emulated = Policy::new(PolicyKind::Gpu { hw_video_decode: false }, arch);
            assert_eq!(emulated.evaluate(open), Decision::Trap(TrapKind::PathOpen));
            let real = Policy::new(PolicyKind::Gpu { hw_video_decode: true }, arch);
            assert_eq!(real.evaluate(open), Decision::Allow);
            assert_eq!(emulated.evaluate(nr(arch, "openat")), Decision::Trap(TrapKind::PathOpenAt));
            assert_eq!(real.evaluate(nr(arch, "openat")), Decision::Allow);
            // The rest of path access keeps the baseline answer.
            assert_eq!(emulated.evaluate(nr(arch, "openat2")), Decision::Errno(libc::ENOENT));
            assert_eq!(emulated.evaluate(nr(arch, "stat")), Decision::Errno(libc::ENOENT));
            assert_eq!(emulated.evaluate(nr(arch, "eventfd2")), Decision::Allow);
        }
        let gpu = Policy::new(PolicyKind::Gpu { hw_video_decode: false }, Arch::X86_64);
        assert_eq!(gpu.evaluate(nr(Arch::X86_64, "socket")), Decision::Errno(libc::EACCES));
    }

    #[test]
    fn only_gpu_without_decode_traps_to_path_open() {
        for arch in ARCHES {
            for kind in KINDS {
                let traps = Policy::new(kind, arch)
                    .decisions()
                    .any(|(_, d)| matches!(d, Decision::Trap(TrapKind::PathOpen | TrapKind::PathOpenAt)));
                assert_eq!(traps, kind.needs_path_open(), "{kind} on {arch}");
            }
        }
    }

    #[test]
    fn thread_start_runs_under_every_policy() {
        let setup = [
            "clone", "mmap", "mprotect", "munmap", "madvise", "set_robust_list", "sigaltstack",
            "sched_getaffinity", "rt_sigprocmask", "futex", "exit",
        ];
        for arch in ARCHES {
            for kind in KINDS {
                let policy = Policy::new(kind, arch);
                for name in setup {
                    assert_eq!(policy.evaluate(nr(arch, name)), Decision::Allow, "{name}: {kind} on {arch}");
                }
                // libc retries these through the older path on ENOSYS.
                for name in ["clone3", "rseq"] {
                    let d = policy.evaluate(nr(arch, name));
                    assert!(matches!(d, Decision::Allow | Decision::Errno(libc::ENOSYS)), "{name}: {kind} on {arch}");
                }
            }
        }
    }

    #[test]
    fn ptrace_denylist() {
        for arch in ARCHES {
            let policy = Policy::new(PolicyKind::PtraceDenylist, arch);
            for name in ["migrate_pages", "move_pages", "process_vm_readv", "process_vm_writev", "ptrace"] {
                assert_eq!(policy.evaluate(nr(arch, name)), Decision::Trap(TrapKind::Crash), "{name}");
            }
            let denied = policy.decisions().filter(|(_, d)| *d != Decision::Allow).count();
            assert_eq!(denied, 5);
        }
    }

    #[test]
    fn allow_all_allows_the_range() {
        for arch in ARCHES {
            let policy = Policy::new(PolicyKind::AllowAll, arch);
            assert!(policy.decisions().all(|(_, d)| d == Decision::Allow));
        }
    }

    #[test]
    fn baseline_emulates_filesystem_access() {
        let arch = Arch::X86_64;
        let policy = Policy::new(PolicyKind::Baseline, arch);
        assert_eq!(policy.evaluate(nr(arch, "open")), Decision::Errno(libc::ENOENT));
        assert_eq!(policy.evaluate(nr(arch, "getcwd")), Decision::Errno(libc::ENOENT));
        assert_eq!(policy.evaluate(nr(arch, "umask")), Decision::Errno(libc::EPERM));
        assert_eq!(policy.evaluate(nr(arch, "ftruncate")), Decision::Errno(libc::EPERM));
        assert_eq!(policy.evaluate(nr(arch, "read")), Decision::Allow);
        assert_eq!(policy.evaluate(nr(arch, "futex")), Decision::Allow);
        assert_eq!(policy.evaluate(nr(arch, "mount")), Decision::Trap(TrapKind::Crash));
        // Allocated gaps behave like the kernel: not implemented.
        assert_eq!(policy.evaluate(335), Decision::ENOSYS);
        assert_eq!(SemanticSet::Unimplemented, arch.classify(335));
    }

    proptest! {
        #[test]
        fn evaluate_never_panics(raw in any::<i32>()) {
            for arch in ARCHES {
                for kind in KINDS {
                    let d = Policy::new(kind, arch).evaluate(raw);
                    if !arch.in_range(raw) {
                        prop_assert_eq!(d, Decision::ENOSYS);
                    }
                }
            }
        }

        #[test]
        fn overrides_never_leak_into_unrelated_numbers(idx in 0usize..374) {
            // A number none of the roles mention decides like the baseline.
            let arch = Arch::X86_64;
            let table = arch.table();
            let s = table[idx % table.len()];
            let named = [
                "ioctl", "open", "openat", "socket", "times", "sched_getaffinity",
                "sched_setscheduler", "eventfd", "eventfd2",
            ];
            prop_assume!(!named.contains(&s.name));
            prop_assume!(s.set != SemanticSet::SysVSharedMemory);
            let base = Policy::new(PolicyKind::Baseline, arch).evaluate(s.nr);
            for kind in [PolicyKind::Gpu { hw_video_decode: false }, PolicyKind::PluginHost] {
                prop_assert_eq!(Policy::new(kind, arch).evaluate(s.nr), base);
            }
        }
    }
}
