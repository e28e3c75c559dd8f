// SPDX-License-Identifier: MIT

//! The SIGSYS handler that runs trapped syscalls.
//!
//! When the filter returns `SECCOMP_RET_TRAP` the kernel skips the call and
//! raises SIGSYS on the calling thread.  The handler reads the syscall
//! number and the first three arguments from the saved registers, asks the
//! active policy which trap applies, and writes the handler's result into
//! the return-value register so the interrupted code sees it as the
//! syscall's result.

use std::{
    ptr,
    sync::atomic::{AtomicPtr, Ordering},
};

use nix::{
    libc,
    sys::signal::{SaFlags, SigAction, SigHandler, SigSet, Signal, sigaction},
};

use crate::policy::{Decision, Policy, TrapKind};
use crate::runtime::{error::SandboxError, trap};
use crate::syscalls::SyscallNumber;

/// `si_code` for signals raised by a seccomp filter.
const SYS_SECCOMP: libc::c_int = 1;

/// The policy the handler consults.  Null until armed; leaked for good once
/// a filter has loaded.
static TRAP_POLICY: AtomicPtr<Policy> = AtomicPtr::new(ptr::null_mut());

/// A handler armed ahead of a filter load.  Dropping it keeps the handler;
/// [`Armed::disarm`] undoes [`arm`] when the load fails.
#[must_use]
pub struct Armed {
    previous: SigAction,
}

/// Publish `policy` to the handler and install the handler.
pub fn arm(policy: &Policy) -> Result<Armed, SandboxError> {
    let published = Box::into_raw(Box::new(policy.clone()));
    if TRAP_POLICY
        .compare_exchange(ptr::null_mut(), published, Ordering::AcqRel, Ordering::Acquire)
        .is_err()
    {
        drop(unsafe { Box::from_raw(published) });
        return Err(SandboxError::AlreadyActive);
    }
    let action = SigAction::new(
        SigHandler::SigAction(handle_sigsys),
        // A second trapped call from inside the handler must still be seen.
        SaFlags::SA_SIGINFO | SaFlags::SA_NODEFER,
        SigSet::empty(),
    );
    match unsafe { sigaction(Signal::SIGSYS, &action) } {
        Ok(previous) => Ok(Armed { previous }),
        Err(e) => {
            unpublish();
            Err(e.into())
        }
    }
}

impl Armed {
    /// Restore the previous SIGSYS disposition and forget the policy.
    pub fn disarm(self) -> Result<(), SandboxError> {
        unsafe { sigaction(Signal::SIGSYS, &self.previous) }?;
        unpublish();
        Ok(())
    }
}

fn unpublish() {
    let published = TRAP_POLICY.swap(ptr::null_mut(), Ordering::AcqRel);
    if !published.is_null() {
        drop(unsafe { Box::from_raw(published) });
    }
}

/// Run the trap `nr` maps to.  Only crash and path-open can be reached from
/// the kernel; any other answer means the filter and the policy disagree,
/// which is treated like a watched call.
fn dispatch(policy: &Policy, nr: SyscallNumber, args: [u64; 3]) -> isize {
    let [arg0, arg1, arg2] = args;
    match policy.evaluate(nr) {
        Decision::Trap(TrapKind::PathOpen) => unsafe {
            trap::path_open(policy.cached_open(), arg0 as usize as *const libc::c_char, arg1)
        },
        Decision::Trap(TrapKind::PathOpenAt) => unsafe {
            trap::path_openat(
                policy.cached_open(),
                arg0 as libc::c_int,
                arg1 as usize as *const libc::c_char,
                arg2,
            )
        },
        Decision::Trap(TrapKind::Crash) | Decision::Allow | Decision::Errno(_) => trap::crash(nr, arg0, arg1),
    }
}

extern "C" fn handle_sigsys(sig: libc::c_int, info: *mut libc::siginfo_t, context: *mut libc::c_void) {
    if sig != libc::SIGSYS || info.is_null() || context.is_null() {
        trap::crash(-1, 0, 0);
    }
    if unsafe { (*info).si_code } != SYS_SECCOMP {
        trap::crash(-1, 0, 0);
    }
    let Some(policy) = (unsafe { TRAP_POLICY.load(Ordering::Acquire).as_ref() }) else {
        trap::crash(-1, 0, 0);
    };
    unsafe { regs::run(policy, context as *mut libc::ucontext_t) };
}

#[cfg(target_arch = "x86_64")]
mod regs {
    use super::*;

    pub(super) unsafe fn run(policy: &Policy, ucontext: *mut libc::ucontext_t) {
        let gregs = unsafe { &mut (*ucontext).uc_mcontext.gregs };
        let nr = gregs[libc::REG_RAX as usize] as SyscallNumber;
        let args = [
            gregs[libc::REG_RDI as usize] as u64,
            gregs[libc::REG_RSI as usize] as u64,
            gregs[libc::REG_RDX as usize] as u64,
        ];
        gregs[libc::REG_RAX as usize] = dispatch(policy, nr, args) as libc::greg_t;
    }
}

#[cfg(target_arch = "x86")]
mod regs {
    use super::*;

    pub(super) unsafe fn run(policy: &Policy, ucontext: *mut libc::ucontext_t) {
        let gregs = unsafe { &mut (*ucontext).uc_mcontext.gregs };
        let nr = gregs[libc::REG_EAX as usize] as SyscallNumber;
        let args = [
            gregs[libc::REG_EBX as usize] as u32 as u64,
            gregs[libc::REG_ECX as usize] as u32 as u64,
            gregs[libc::REG_EDX as usize] as u32 as u64,
        ];
        gregs[libc::REG_EAX as usize] = dispatch(policy, nr, args) as libc::greg_t;
    }
}

#[cfg(not(any(target_arch = "x86_64", target_arch = "x86")))]
mod regs {
    use super::*;

    // No syscall table, so no filter is ever armed here.
    pub(super) unsafe fn run(_policy: &Policy, _ucontext: *mut libc::ucontext_t) {
        trap::crash(-1, 0, 0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::PolicyKind;
    use crate::runtime::cache::CachedOpen;
    use crate::syscalls::Arch;
    use std::ffi::CString;
    use std::os::fd::{FromRawFd, OwnedFd};

    fn ptr_arg(path: &CString) -> u64 {
        path.as_ptr() as usize as u64
    }

    #[test]
    fn dispatch_serves_path_open() {
        let file = tempfile::NamedTempFile::new().expect("temp file");
        let arch = Arch::X86_64;
        let policy = Policy::new(PolicyKind::Gpu { hw_video_decode: false }, arch)
            .with_cached_open(CachedOpen::new(file.path()).expect("cache"));
        assert!(policy.cached_open().is_some_and(CachedOpen::warm));
        let open = arch.number_of("open").expect("open");
        let openat = arch.number_of("openat").expect("openat");
        let path = CString::new(file.path().to_str().expect("utf8")).expect("no nul");
        let rdonly = libc::O_RDONLY as u64;

        let fd = dispatch(&policy, open, [ptr_arg(&path), rdonly, 0]);
        assert!(fd >= 0);
        drop(unsafe { OwnedFd::from_raw_fd(fd as i32) });

        // openat carries the directory first and the flags third.
        let fd = dispatch(&policy, openat, [libc::AT_FDCWD as u64, ptr_arg(&path), rdonly]);
        assert!(fd >= 0);
        drop(unsafe { OwnedFd::from_raw_fd(fd as i32) });

        let other = CString::new("/etc/shadow").expect("no nul");
        let ret = dispatch(&policy, open, [ptr_arg(&other), rdonly, 0]);
        assert_eq!(ret, -(libc::ENOENT as isize));
        let ret = dispatch(&policy, openat, [libc::AT_FDCWD as u64, ptr_arg(&other), rdonly]);
        assert_eq!(ret, -(libc::ENOENT as isize));
    }
}
