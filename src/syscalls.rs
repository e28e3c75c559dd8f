// SPDX-License-Identifier: MIT

//! Classification of the kernel's syscall numbers into semantic sets.
//!
//! Each supported architecture has one table, ordered by syscall number,
//! that assigns every implemented number to exactly one [`SemanticSet`].
//! Numbers without a table entry, including anything outside the
//! architecture's valid range, classify as [`SemanticSet::Unimplemented`].
//!
//! The numbering is not portable between architectures: `open` is 2 on
//! x86_64 and 5 on i386.  Both tables are always compiled so they can be
//! inspected from any host, but only [`Arch::native`] is ever installed.

mod x86;
mod x86_64;

use std::fmt::Display;

/// The raw syscall number as the kernel reports it to a filter.
pub type SyscallNumber = i32;

/// Architectures with a syscall table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arch {
    X86_64,
    X86,
}

/// Named group of related syscalls.
///
/// The policies are written against these sets rather than against raw
/// numbers.  Every entry in an architecture table belongs to exactly one set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SemanticSet {
    /// brk, mmap, mprotect, munmap, madvise, mlock, munlock.
    AddressSpace,
    /// mremap, msync, mincore, protection keys, userfaultfd and friends.
    AddressSpaceAdvanced,
    /// sched_yield, pause, nanosleep, sched_getaffinity.
    BasicScheduler,
    /// Priorities, affinity, scheduler parameters, I/O priorities.
    AdvancedScheduler,
    /// getpriority, setpriority, nice.
    Priority,
    /// epoll_create, epoll_create1, epoll_ctl, epoll_wait.
    Epoll,
    /// The legacy and signal-masking epoll variants.
    EpollAdvanced,
    /// fstat on an already open descriptor.
    FdStat,
    /// fsync, flock, fadvise, fstatfs: descriptor scoped, not yet vetted.
    FdFilesystemMisc,
    /// ftruncate, getdents, fchmod, fchown, fallocate.
    FdDestructive,
    /// close, dup*, fcntl, shutdown, close_range.
    FdOperation,
    /// read/write family on already open descriptors.
    GeneralIo,
    /// ioctl, positional and vectored I/O, splice, sendfile.
    IoAdvanced,
    /// pipe, pipe2, socketpair.
    PipeOrSocketPair,
    /// socket, bind, connect, listen, accept.
    SocketCreation,
    /// getsockopt, setsockopt, getsockname, getpeername.
    SocketInformation,
    /// The i386 socket multiplexer.
    SocketCall,
    /// Syscalls that reach the filesystem through a path.
    FileSystemPath,
    /// getcwd, chdir, fchdir.
    CurrentDirectory,
    /// umask.
    Umask,
    /// clock_gettime, gettimeofday, time.
    Gettime,
    /// Setting, adjusting or sleeping on clocks.
    ClockControl,
    /// alarm, getitimer, setitimer.
    Timer,
    /// POSIX timers and timerfd.
    AdvancedTimer,
    /// prctl.
    Prctl,
    /// arch_prctl.
    ArchPrctl,
    /// clone, exit, exit_group, wait4, waitid, waitpid.
    ProcessLifecycle,
    /// fork, vfork, unshare, setns, thread area setup.
    ProcessLifecycleAdvanced,
    /// clone3 and rseq.  libc tries them first and falls back to an older
    /// path when they fail with `ENOSYS`.
    LibcFallback,
    /// rt_sigaction, rt_sigprocmask, rt_sigreturn, sigaltstack and their
    /// i386 forms.
    SignalHandling,
    /// Pending, queued, suspended and fd-delivered signals.
    SignalAdvanced,
    /// kill, tkill, tgkill.
    Kill,
    /// futex and the robust list.
    Futex,
    /// Identity and credential getters.
    SimpleIdentity,
    /// Identity and credential setters, I/O port privileges.
    PrivilegeChange,
    /// setpgid, getpgrp, setsid, getpgid.
    ProcessGroupOrSession,
    /// restart_syscall.
    KernelInternal,
    /// reboot, syslog, kexec, host names, bpf.
    Admin,
    /// Loading and unloading kernel modules.
    KernelModule,
    /// chroot, pivot_root, sync.
    GlobalFsViewChange,
    /// mount, swap, quota and the new mount API.
    FsControl,
    /// Memory placement policies.
    Numa,
    /// POSIX message queues.
    MessageQueue,
    /// Resource limits, usage and personality.
    GlobalProcessEnvironment,
    /// ptrace and cross-process memory access.
    Debug,
    /// uname, sysinfo, sysfs and mount listings.
    GlobalSystemStatus,
    /// eventfd, eventfd2.
    EventFd,
    /// Linux AIO and io_uring.
    AsyncIo,
    /// Kernel keyring.
    KeyManagement,
    /// System V semaphores.
    SysVSemaphores,
    /// System V shared memory.
    SysVSharedMemory,
    /// System V message queues.
    SysVMessageQueue,
    /// The i386 System V multiplexer.
    SysVIpc,
    /// inotify.
    Inotify,
    /// fanotify.
    FaNotify,
    /// Extended attributes.
    ExtendedAttributes,
    /// seccomp, landlock and LSM attribute calls.
    SecurityControl,
    /// Calls still waiting for a proper home.
    Misc,
    /// Numbers reserved for calls the kernel never implemented.
    Obscure,
    /// Numbers with no syscall behind them on this architecture.
    Unimplemented,
}

/// One row of an architecture table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sysno {
    pub nr: SyscallNumber,
    pub name: &'static str,
    pub set: SemanticSet,
}

impl Sysno {
    pub(crate) const fn new(nr: SyscallNumber, name: &'static str, set: SemanticSet) -> Self {
        Sysno { nr, name, set }
    }
}

impl Arch {
    /// The architecture this crate was compiled for, if it has a table.
    pub const fn native() -> Option<Arch> {
        if cfg!(target_arch = "x86_64") {
            Some(Arch::X86_64)
        } else if cfg!(target_arch = "x86") {
            Some(Arch::X86)
        } else {
            None
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Arch::X86_64 => "x86_64",
            Arch::X86 => "x86",
        }
    }

    /// Parse the names used by `name()`, plus the common aliases.
    pub fn from_name(name: &str) -> Option<Arch> {
        match name {
            "x86_64" | "amd64" => Some(Arch::X86_64),
            "x86" | "i386" | "i686" => Some(Arch::X86),
            _ => None,
        }
    }

    /// All rows for this architecture, ordered by number.
    pub fn table(self) -> &'static [Sysno] {
        match self {
            Arch::X86_64 => x86_64::TABLE,
            Arch::X86 => x86::TABLE,
        }
    }

    /// Lowest valid syscall number.
    pub fn min_syscall(self) -> SyscallNumber {
        0
    }

    /// Highest valid syscall number.
    pub fn max_syscall(self) -> SyscallNumber {
        match self {
            Arch::X86_64 => x86_64::MAX_SYSCALL,
            Arch::X86 => x86::MAX_SYSCALL,
        }
    }

    pub fn in_range(self, nr: SyscallNumber) -> bool {
        nr >= self.min_syscall() && nr <= self.max_syscall()
    }

    pub fn lookup(self, nr: SyscallNumber) -> Option<&'static Sysno> {
        if !self.in_range(nr) {
            return None;
        }
        let table = self.table();
        table
            .binary_search_by_key(&nr, |s| s.nr)
            .ok()
            .map(|idx| &table[idx])
    }

    /// Find the number for a syscall name on this architecture.
    pub fn number_of(self, name: &str) -> Option<SyscallNumber> {
        self.table().iter().find(|s| s.name == name).map(|s| s.nr)
    }

    /// The one set the number belongs to.
    pub fn classify(self, nr: SyscallNumber) -> SemanticSet {
        match self.lookup(nr) {
            Some(s) => s.set,
            None => SemanticSet::Unimplemented,
        }
    }
}

impl Display for Arch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
