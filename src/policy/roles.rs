// SPDX-License-Identifier: MIT

//! Role overrides, consulted before the baseline.
//!
//! Overrides match on the syscall's name from the architecture table, so
//! the same rule holds on both architectures without hard-coded numbers.
//! Callers have already rejected out-of-range numbers.

use nix::libc;

use super::{Decision, PolicyKind, TrapKind};
use crate::syscalls::{Arch, SemanticSet, Sysno, SyscallNumber};

/// Cross-process inspection and page migration.
const PTRACE_DENYLIST: &[&str] = &[
    "migrate_pages",
    "move_pages",
    "process_vm_readv",
    "process_vm_writev",
    "ptrace",
];

pub(super) fn override_for(kind: PolicyKind, arch: Arch, nr: SyscallNumber) -> Option<Decision> {
    let entry = arch.lookup(nr);
    match kind {
        PolicyKind::Baseline => None,
        PolicyKind::Gpu { hw_video_decode } => gpu(arch, entry?, hw_video_decode),
        PolicyKind::PluginHost => plugin_host(arch, entry?),
        PolicyKind::PtraceDenylist => Some(match entry {
            Some(s) if PTRACE_DENYLIST.contains(&s.name) => Decision::Trap(TrapKind::Crash),
            _ => Decision::Allow,
        }),
        PolicyKind::AllowAll => Some(Decision::Allow),
    }
}

fn gpu(arch: Arch, s: &Sysno, hw_video_decode: bool) -> Option<Decision> {
    match s.name {
        "ioctl" => Some(Decision::Allow),
        // Binary drivers probe the network; pretend it is forbidden.
        "socket" if arch == Arch::X86_64 => Some(Decision::Errno(libc::EACCES)),
        "open" | "openat" if hw_video_decode => Some(Decision::Allow),
        "open" => Some(Decision::Trap(TrapKind::PathOpen)),
        "openat" => Some(Decision::Trap(TrapKind::PathOpenAt)),
        _ if s.set == SemanticSet::EventFd => Some(Decision::Allow),
        _ => None,
    }
}

fn plugin_host(arch: Arch, s: &Sysno) -> Option<Decision> {
    match s.name {
        "sched_getaffinity" | "sched_setscheduler" | "times" => Some(Decision::Allow),
        // Denies the plugin's hardware access probe without crashing it.
        "ioctl" => Some(Decision::Errno(libc::ENOTTY)),
        "socket" if arch == Arch::X86_64 => Some(Decision::Errno(libc::EACCES)),
        _ if arch == Arch::X86_64 && s.set == SemanticSet::SysVSharedMemory => Some(Decision::Allow),
        _ => None,
    }
}
