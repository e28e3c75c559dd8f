// SPDX-License-Identifier: MIT

//! The baseline every sandboxed process starts from.
//!
//! Sets are split into three buckets.  Allowed sets run for real.  Path
//! access, the current directory, umask and destructive descriptor calls
//! are refused with a plausible errno.  Everything else is watched: it
//! crashes the process through the trap handler, so a call nobody has
//! reasoned about shows up in a crash report instead of quietly working.

use nix::libc;

use super::{Decision, TrapKind};
use crate::syscalls::SemanticSet;

/// Sets that run unrestricted under the baseline.
pub fn is_allowed(set: SemanticSet) -> bool {
    use SemanticSet::*;
    matches!(
        set,
        AddressSpace
            | BasicScheduler
            | Epoll
            | FdStat
            | FdOperation
            | GeneralIo
            | PipeOrSocketPair
            | Gettime
            | Prctl
            | ProcessLifecycle
            | SignalHandling
            | Futex
            | SimpleIdentity
            | KernelInternal
            | Kill
    )
}

/// The errno returned in place of the real call, for emulated sets.
pub fn emulated_errno(set: SemanticSet) -> Option<i32> {
    use SemanticSet::*;
    match set {
        FileSystemPath | CurrentDirectory => Some(libc::ENOENT),
        Umask | FdDestructive => Some(libc::EPERM),
        LibcFallback | Unimplemented => Some(libc::ENOSYS),
        _ => None,
    }
}

/// Sets that trap to the crash handler.
pub fn is_watched(set: SemanticSet) -> bool {
    !is_allowed(set) && emulated_errno(set).is_none()
}

pub fn decide(set: SemanticSet) -> Decision {
    if is_allowed(set) {
        return Decision::Allow;
    }
    match emulated_errno(set) {
        Some(code) => Decision::Errno(code),
        None => Decision::Trap(TrapKind::Crash),
    }
}
