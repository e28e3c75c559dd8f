// SPDX-License-Identifier: MIT

//! x86_64 syscall table, from `arch/x86/entry/syscalls/syscall_64.tbl`.
//!
//! 335 through 423 were never allocated; x32 calls start at 512 and are
//! outside the valid range of a 64-bit filter.

use super::SemanticSet::*;
use super::{Sysno, SyscallNumber};

pub(crate) const MAX_SYSCALL: SyscallNumber = 462;

pub(crate) const TABLE: &[Sysno] = &[
    Sysno::new(0, "read",                      GeneralIo),
    Sysno::new(1, "write",                     GeneralIo),
    Sysno::new(2, "open",                      FileSystemPath),
    Sysno::new(3, "close",                     FdOperation),
    Sysno::new(4, "stat",                      FileSystemPath),
    Sysno::new(5, "fstat",                     FdStat),
    Sysno::new(6, "lstat",                     FileSystemPath),
    Sysno::new(7, "poll",                      GeneralIo),
    Sysno::new(8, "lseek",                     GeneralIo),
    Sysno::new(9, "mmap",                      AddressSpace),
    Sysno::new(10, "mprotect",                 AddressSpace),
    Sysno::new(11, "munmap",                   AddressSpace),
    Sysno::new(12, "brk",                      AddressSpace),
    Sysno::new(13, "rt_sigaction",             SignalHandling),
    Sysno::new(14, "rt_sigprocmask",           SignalHandling),
    Sysno::new(15, "rt_sigreturn",             SignalHandling),
    Sysno::new(16, "ioctl",                    IoAdvanced),
    Sysno::new(17, "pread64",                  IoAdvanced),
    Sysno::new(18, "pwrite64",                 IoAdvanced),
    Sysno::new(19, "readv",                    GeneralIo),
    Sysno::new(20, "writev",                   GeneralIo),
    Sysno::new(21, "access",                   FileSystemPath),
    Sysno::new(22, "pipe",                     PipeOrSocketPair),
    Sysno::new(23, "select",                   GeneralIo),
    Sysno::new(24, "sched_yield",              BasicScheduler),
    Sysno::new(25, "mremap",                   AddressSpaceAdvanced),
    Sysno::new(26, "msync",                    AddressSpaceAdvanced),
    Sysno::new(27, "mincore",                  AddressSpaceAdvanced),
    Sysno::new(28, "madvise",                  AddressSpace),
    Sysno::new(29, "shmget",                   SysVSharedMemory),
    Sysno::new(30, "shmat",                    SysVSharedMemory),
    Sysno::new(31, "shmctl",                   SysVSharedMemory),
    Sysno::new(32, "dup",                      FdOperation),
    Sysno::new(33, "dup2",                     FdOperation),
    Sysno::new(34, "pause",                    BasicScheduler),
    Sysno::new(35, "nanosleep",                BasicScheduler),
    Sysno::new(36, "getitimer",                Timer),
    Sysno::new(37, "alarm",                    Timer),
    Sysno::new(38, "setitimer",                Timer),
    Sysno::new(39, "getpid",                   SimpleIdentity),
    Sysno::new(40, "sendfile",                 IoAdvanced),
    Sysno::new(41, "socket",                   SocketCreation),
    Sysno::new(42, "connect",                  SocketCreation),
    Sysno::new(43, "accept",                   SocketCreation),
    Sysno::new(44, "sendto",                   GeneralIo),
    Sysno::new(45, "recvfrom",                 GeneralIo),
    Sysno::new(46, "sendmsg",                  GeneralIo),
    Sysno::new(47, "recvmsg",                  GeneralIo),
    Sysno::new(48, "shutdown",                 FdOperation),
    Sysno::new(49, "bind",                     SocketCreation),
    Sysno::new(50, "listen",                   SocketCreation),
    Sysno::new(51, "getsockname",              SocketInformation),
    Sysno::new(52, "getpeername",              SocketInformation),
    Sysno::new(53, "socketpair",               PipeOrSocketPair),
    Sysno::new(54, "setsockopt",               SocketInformation),
    Sysno::new(55, "getsockopt",               SocketInformation),
    Sysno::new(56, "clone",                    ProcessLifecycle),
    Sysno::new(57, "fork",                     ProcessLifecycleAdvanced),
    Sysno::new(58, "vfork",                    ProcessLifecycleAdvanced),
    Sysno::new(59, "execve",                   FileSystemPath),
    Sysno::new(60, "exit",                     ProcessLifecycle),
    Sysno::new(61, "wait4",                    ProcessLifecycle),
    Sysno::new(62, "kill",                     Kill),
    Sysno::new(63, "uname",                    GlobalSystemStatus),
    Sysno::new(64, "semget",                   SysVSemaphores),
    Sysno::new(65, "semop",                    SysVSemaphores),
    Sysno::new(66, "semctl",                   SysVSemaphores),
    Sysno::new(67, "shmdt",                    SysVSharedMemory),
    Sysno::new(68, "msgget",                   SysVMessageQueue),
    Sysno::new(69, "msgsnd",                   SysVMessageQueue),
    Sysno::new(70, "msgrcv",                   SysVMessageQueue),
    Sysno::new(71, "msgctl",                   SysVMessageQueue),
    Sysno::new(72, "fcntl",                    FdOperation),
    Sysno::new(73, "flock",                    FdFilesystemMisc),
    Sysno::new(74, "fsync",                    FdFilesystemMisc),
    Sysno::new(75, "fdatasync",                FdFilesystemMisc),
    Sysno::new(76, "truncate",                 FileSystemPath),
    Sysno::new(77, "ftruncate",                FdDestructive),
    Sysno::new(78, "getdents",                 FdDestructive),
    Sysno::new(79, "getcwd",                   CurrentDirectory),
    Sysno::new(80, "chdir",                    CurrentDirectory),
    Sysno::new(81, "fchdir",                   CurrentDirectory),
    Sysno::new(82, "rename",                   FileSystemPath),
    Sysno::new(83, "mkdir",                    FileSystemPath),
    Sysno::new(84, "rmdir",                    FileSystemPath),
    Sysno::new(85, "creat",                    FileSystemPath),
    Sysno::new(86, "link",                     FileSystemPath),
    Sysno::new(87, "unlink",                   FileSystemPath),
    Sysno::new(88, "symlink",                  FileSystemPath),
    Sysno::new(89, "readlink",                 FileSystemPath),
    Sysno::new(90, "chmod",                    FileSystemPath),
    Sysno::new(91, "fchmod",                   FdDestructive),
    Sysno::new(92, "chown",                    FileSystemPath),
    Sysno::new(93, "fchown",                   FdDestructive),
    Sysno::new(94, "lchown",                   FileSystemPath),
    Sysno::new(95, "umask",                    Umask),
    Sysno::new(96, "gettimeofday",             Gettime),
    Sysno::new(97, "getrlimit",                GlobalProcessEnvironment),
    Sysno::new(98, "getrusage",                GlobalProcessEnvironment),
    Sysno::new(99, "sysinfo",                  GlobalSystemStatus),
    Sysno::new(100, "times",                   GlobalProcessEnvironment),
    Sysno::new(101, "ptrace",                  Debug),
    Sysno::new(102, "getuid",                  SimpleIdentity),
    Sysno::new(103, "syslog",                  Admin),
    Sysno::new(104, "getgid",                  SimpleIdentity),
    Sysno::new(105, "setuid",                  PrivilegeChange),
    Sysno::new(106, "setgid",                  PrivilegeChange),
    Sysno::new(107, "geteuid",                 SimpleIdentity),
    Sysno::new(108, "getegid",                 SimpleIdentity),
    Sysno::new(109, "setpgid",                 ProcessGroupOrSession),
    Sysno::new(110, "getppid",                 SimpleIdentity),
    Sysno::new(111, "getpgrp",                 ProcessGroupOrSession),
    Sysno::new(112, "setsid",                  ProcessGroupOrSession),
    Sysno::new(113, "setreuid",                PrivilegeChange),
    Sysno::new(114, "setregid",                PrivilegeChange),
    Sysno::new(115, "getgroups",               SimpleIdentity),
    Sysno::new(116, "setgroups",               PrivilegeChange),
    Sysno::new(117, "setresuid",               PrivilegeChange),
    Sysno::new(118, "getresuid",               SimpleIdentity),
    Sysno::new(119, "setresgid",               PrivilegeChange),
    Sysno::new(120, "getresgid",               SimpleIdentity),
    Sysno::new(121, "getpgid",                 ProcessGroupOrSession),
    Sysno::new(122, "setfsuid",                PrivilegeChange),
    Sysno::new(123, "setfsgid",                PrivilegeChange),
    Sysno::new(124, "getsid",                  SimpleIdentity),
    Sysno::new(125, "capget",                  SimpleIdentity),
    Sysno::new(126, "capset",                  PrivilegeChange),
    Sysno::new(127, "rt_sigpending",           SignalAdvanced),
    Sysno::new(128, "rt_sigtimedwait",         SignalAdvanced),
    Sysno::new(129, "rt_sigqueueinfo",         SignalAdvanced),
    Sysno::new(130, "rt_sigsuspend",           SignalAdvanced),
    Sysno::new(131, "sigaltstack",             SignalHandling),
    Sysno::new(132, "utime",                   FileSystemPath),
    Sysno::new(133, "mknod",                   FileSystemPath),
    Sysno::new(134, "uselib",                  FileSystemPath),
    Sysno::new(135, "personality",             GlobalProcessEnvironment),
    Sysno::new(136, "ustat",                   FileSystemPath),
    Sysno::new(137, "statfs",                  FileSystemPath),
    Sysno::new(138, "fstatfs",                 FdFilesystemMisc),
    Sysno::new(139, "sysfs",                   GlobalSystemStatus),
    Sysno::new(140, "getpriority",             Priority),
    Sysno::new(141, "setpriority",             Priority),
    Sysno::new(142, "sched_setparam",          AdvancedScheduler),
    Sysno::new(143, "sched_getparam",          AdvancedScheduler),
    Sysno::new(144, "sched_setscheduler",      AdvancedScheduler),
    Sysno::new(145, "sched_getscheduler",      AdvancedScheduler),
    Sysno::new(146, "sched_get_priority_max",  AdvancedScheduler),
    Sysno::new(147, "sched_get_priority_min",  AdvancedScheduler),
    Sysno::new(148, "sched_rr_get_interval",   AdvancedScheduler),
    Sysno::new(149, "mlock",                   AddressSpace),
    Sysno::new(150, "munlock",                 AddressSpace),
    Sysno::new(151, "mlockall",                AddressSpaceAdvanced),
    Sysno::new(152, "munlockall",              AddressSpaceAdvanced),
    Sysno::new(153, "vhangup",                 Misc),
    Sysno::new(154, "modify_ldt",              AddressSpaceAdvanced),
    Sysno::new(155, "pivot_root",              GlobalFsViewChange),
    Sysno::new(156, "_sysctl",                 GlobalSystemStatus),
    Sysno::new(157, "prctl",                   Prctl),
    Sysno::new(158, "arch_prctl",              ArchPrctl),
    Sysno::new(159, "adjtimex",                ClockControl),
    Sysno::new(160, "setrlimit",               GlobalProcessEnvironment),
    Sysno::new(161, "chroot",                  GlobalFsViewChange),
    Sysno::new(162, "sync",                    GlobalFsViewChange),
    Sysno::new(163, "acct",                    GlobalProcessEnvironment),
    Sysno::new(164, "settimeofday",            ClockControl),
    Sysno::new(165, "mount",                   FsControl),
    Sysno::new(166, "umount2",                 FsControl),
    Sysno::new(167, "swapon",                  FsControl),
    Sysno::new(168, "swapoff",                 FsControl),
    Sysno::new(169, "reboot",                  Admin),
    Sysno::new(170, "sethostname",             Admin),
    Sysno::new(171, "setdomainname",           Admin),
    Sysno::new(172, "iopl",                    PrivilegeChange),
    Sysno::new(173, "ioperm",                  PrivilegeChange),
    Sysno::new(174, "create_module",           KernelModule),
    Sysno::new(175, "init_module",             KernelModule),
    Sysno::new(176, "delete_module",           KernelModule),
    Sysno::new(177, "get_kernel_syms",         KernelModule),
    Sysno::new(178, "query_module",            KernelModule),
    Sysno::new(179, "quotactl",                FsControl),
    Sysno::new(180, "nfsservctl",              FsControl),
    Sysno::new(181, "getpmsg",                 Obscure),
    Sysno::new(182, "putpmsg",                 Obscure),
    Sysno::new(183, "afs_syscall",             Obscure),
    Sysno::new(184, "tuxcall",                 Obscure),
    Sysno::new(185, "security",                Obscure),
    Sysno::new(186, "gettid",                  SimpleIdentity),
    Sysno::new(187, "readahead",               AddressSpaceAdvanced),
    Sysno::new(188, "setxattr",                ExtendedAttributes),
    Sysno::new(189, "lsetxattr",               ExtendedAttributes),
    Sysno::new(190, "fsetxattr",               ExtendedAttributes),
    Sysno::new(191, "getxattr",                ExtendedAttributes),
    Sysno::new(192, "lgetxattr",               ExtendedAttributes),
    Sysno::new(193, "fgetxattr",               ExtendedAttributes),
    Sysno::new(194, "listxattr",               ExtendedAttributes),
    Sysno::new(195, "llistxattr",              ExtendedAttributes),
    Sysno::new(196, "flistxattr",              ExtendedAttributes),
    Sysno::new(197, "removexattr",             ExtendedAttributes),
    Sysno::new(198, "lremovexattr",            ExtendedAttributes),
    Sysno::new(199, "fremovexattr",            ExtendedAttributes),
    Sysno::new(200, "tkill",                   Kill),
    Sysno::new(201, "time",                    Gettime),
    Sysno::new(202, "futex",                   Futex),
    Sysno::new(203, "sched_setaffinity",       AdvancedScheduler),
    Sysno::new(204, "sched_getaffinity",       BasicScheduler),
    Sysno::new(205, "set_thread_area",         ProcessLifecycleAdvanced),
    Sysno::new(206, "io_setup",                AsyncIo),
    Sysno::new(207, "io_destroy",              AsyncIo),
    Sysno::new(208, "io_getevents",            AsyncIo),
    Sysno::new(209, "io_submit",               AsyncIo),
    Sysno::new(210, "io_cancel",               AsyncIo),
    Sysno::new(211, "get_thread_area",         ProcessLifecycleAdvanced),
    Sysno::new(212, "lookup_dcookie",          FileSystemPath),
    Sysno::new(213, "epoll_create",            Epoll),
    Sysno::new(214, "epoll_ctl_old",           EpollAdvanced),
    Sysno::new(215, "epoll_wait_old",          EpollAdvanced),
    Sysno::new(216, "remap_file_pages",        AddressSpaceAdvanced),
    Sysno::new(217, "getdents64",              FdDestructive),
    Sysno::new(218, "set_tid_address",         ProcessLifecycleAdvanced),
    Sysno::new(219, "restart_syscall",         KernelInternal),
    Sysno::new(220, "semtimedop",              SysVSemaphores),
    Sysno::new(221, "fadvise64",               FdFilesystemMisc),
    Sysno::new(222, "timer_create",            AdvancedTimer),
    Sysno::new(223, "timer_settime",           AdvancedTimer),
    Sysno::new(224, "timer_gettime",           AdvancedTimer),
    Sysno::new(225, "timer_getoverrun",        AdvancedTimer),
    Sysno::new(226, "timer_delete",            AdvancedTimer),
    Sysno::new(227, "clock_settime",           ClockControl),
    Sysno::new(228, "clock_gettime",           Gettime),
    Sysno::new(229, "clock_getres",            ClockControl),
    Sysno::new(230, "clock_nanosleep",         ClockControl),
    Sysno::new(231, "exit_group",              ProcessLifecycle),
    Sysno::new(232, "epoll_wait",              Epoll),
    Sysno::new(233, "epoll_ctl",               Epoll),
    Sysno::new(234, "tgkill",                  Kill),
    Sysno::new(235, "utimes",                  FileSystemPath),
    Sysno::new(236, "vserver",                 Obscure),
    Sysno::new(237, "mbind",                   Numa),
    Sysno::new(238, "set_mempolicy",           Numa),
    Sysno::new(239, "get_mempolicy",           Numa),
    Sysno::new(240, "mq_open",                 MessageQueue),
    Sysno::new(241, "mq_unlink",               MessageQueue),
    Sysno::new(242, "mq_timedsend",            MessageQueue),
    Sysno::new(243, "mq_timedreceive",         MessageQueue),
    Sysno::new(244, "mq_notify",               MessageQueue),
    Sysno::new(245, "mq_getsetattr",           MessageQueue),
    Sysno::new(246, "kexec_load",              Admin),
    Sysno::new(247, "waitid",                  ProcessLifecycle),
    Sysno::new(248, "add_key",                 KeyManagement),
    Sysno::new(249, "request_key",             KeyManagement),
    Sysno::new(250, "keyctl",                  KeyManagement),
    Sysno::new(251, "ioprio_set",              AdvancedScheduler),
    Sysno::new(252, "ioprio_get",              AdvancedScheduler),
    Sysno::new(253, "inotify_init",            Inotify),
    Sysno::new(254, "inotify_add_watch",       Inotify),
    Sysno::new(255, "inotify_rm_watch",        Inotify),
    Sysno::new(256, "migrate_pages",           Numa),
    Sysno::new(257, "openat",                  FileSystemPath),
    Sysno::new(258, "mkdirat",                 FileSystemPath),
    Sysno::new(259, "mknodat",                 FileSystemPath),
    Sysno::new(260, "fchownat",                FileSystemPath),
    Sysno::new(261, "futimesat",               FileSystemPath),
    Sysno::new(262, "newfstatat",              FileSystemPath),
    Sysno::new(263, "unlinkat",                FileSystemPath),
    Sysno::new(264, "renameat",                FileSystemPath),
    Sysno::new(265, "linkat",                  FileSystemPath),
    Sysno::new(266, "symlinkat",               FileSystemPath),
    Sysno::new(267, "readlinkat",              FileSystemPath),
    Sysno::new(268, "fchmodat",                FileSystemPath),
    Sysno::new(269, "faccessat",               FileSystemPath),
    Sysno::new(270, "pselect6",                GeneralIo),
    Sysno::new(271, "ppoll",                   GeneralIo),
    Sysno::new(272, "unshare",                 ProcessLifecycleAdvanced),
    Sysno::new(273, "set_robust_list",         Futex),
    Sysno::new(274, "get_robust_list",         Futex),
    Sysno::new(275, "splice",                  IoAdvanced),
    Sysno::new(276, "tee",                     IoAdvanced),
    Sysno::new(277, "sync_file_range",         FdFilesystemMisc),
    Sysno::new(278, "vmsplice",                IoAdvanced),
    Sysno::new(279, "move_pages",              Numa),
    Sysno::new(280, "utimensat",               FileSystemPath),
    Sysno::new(281, "epoll_pwait",             EpollAdvanced),
    Sysno::new(282, "signalfd",                SignalAdvanced),
    Sysno::new(283, "timerfd_create",          AdvancedTimer),
    Sysno::new(284, "eventfd",                 EventFd),
    Sysno::new(285, "fallocate",               FdDestructive),
    Sysno::new(286, "timerfd_settime",         AdvancedTimer),
    Sysno::new(287, "timerfd_gettime",         AdvancedTimer),
    Sysno::new(288, "accept4",                 SocketCreation),
    Sysno::new(289, "signalfd4",               SignalAdvanced),
    Sysno::new(290, "eventfd2",                EventFd),
    Sysno::new(291, "epoll_create1",           Epoll),
    Sysno::new(292, "dup3",                    FdOperation),
    Sysno::new(293, "pipe2",                   PipeOrSocketPair),
    Sysno::new(294, "inotify_init1",           Inotify),
    Sysno::new(295, "preadv",                  IoAdvanced),
    Sysno::new(296, "pwritev",                 IoAdvanced),
    Sysno::new(297, "rt_tgsigqueueinfo",       SignalAdvanced),
    Sysno::new(298, "perf_event_open",         Misc),
    Sysno::new(299, "recvmmsg",                IoAdvanced),
    Sysno::new(300, "fanotify_init",           FaNotify),
    Sysno::new(301, "fanotify_mark",           FaNotify),
    Sysno::new(302, "prlimit64",               GlobalProcessEnvironment),
    Sysno::new(303, "name_to_handle_at",       Misc),
    Sysno::new(304, "open_by_handle_at",       Misc),
    Sysno::new(305, "clock_adjtime",           ClockControl),
    Sysno::new(306, "syncfs",                  Misc),
    Sysno::new(307, "sendmmsg",                IoAdvanced),
    Sysno::new(308, "setns",                   ProcessLifecycleAdvanced),
    Sysno::new(309, "getcpu",                  Numa),
    Sysno::new(310, "process_vm_readv",        Debug),
    Sysno::new(311, "process_vm_writev",       Debug),
    Sysno::new(312, "kcmp",                    Debug),
    Sysno::new(313, "finit_module",            KernelModule),
    Sysno::new(314, "sched_setattr",           AdvancedScheduler),
    Sysno::new(315, "sched_getattr",           AdvancedScheduler),
    Sysno::new(316, "renameat2",               FileSystemPath),
    Sysno::new(317, "seccomp",                 SecurityControl),
    Sysno::new(318, "getrandom",               Misc),
    Sysno::new(319, "memfd_create",            Misc),
    Sysno::new(320, "kexec_file_load",         Admin),
    Sysno::new(321, "bpf",                     Admin),
    Sysno::new(322, "execveat",                FileSystemPath),
    Sysno::new(323, "userfaultfd",             AddressSpaceAdvanced),
    Sysno::new(324, "membarrier",              Misc),
    Sysno::new(325, "mlock2",                  AddressSpaceAdvanced),
    Sysno::new(326, "copy_file_range",         IoAdvanced),
    Sysno::new(327, "preadv2",                 IoAdvanced),
    Sysno::new(328, "pwritev2",                IoAdvanced),
    Sysno::new(329, "pkey_mprotect",           AddressSpaceAdvanced),
    Sysno::new(330, "pkey_alloc",              AddressSpaceAdvanced),
    Sysno::new(331, "pkey_free",               AddressSpaceAdvanced),
    Sysno::new(332, "statx",                   FileSystemPath),
    Sysno::new(333, "io_pgetevents",           AsyncIo),
    Sysno::new(334, "rseq",                    LibcFallback),
    Sysno::new(424, "pidfd_send_signal",       SignalAdvanced),
    Sysno::new(425, "io_uring_setup",          AsyncIo),
    Sysno::new(426, "io_uring_enter",          AsyncIo),
    Sysno::new(427, "io_uring_register",       AsyncIo),
    Sysno::new(428, "open_tree",               FsControl),
    Sysno::new(429, "move_mount",              FsControl),
    Sysno::new(430, "fsopen",                  FsControl),
    Sysno::new(431, "fsconfig",                FsControl),
    Sysno::new(432, "fsmount",                 FsControl),
    Sysno::new(433, "fspick",                  FsControl),
    Sysno::new(434, "pidfd_open",              ProcessLifecycleAdvanced),
    Sysno::new(435, "clone3",                  LibcFallback),
    Sysno::new(436, "close_range",             FdOperation),
    Sysno::new(437, "openat2",                 FileSystemPath),
    Sysno::new(438, "pidfd_getfd",             Debug),
    Sysno::new(439, "faccessat2",              FileSystemPath),
    Sysno::new(440, "process_madvise",         Debug),
    Sysno::new(441, "epoll_pwait2",            EpollAdvanced),
    Sysno::new(442, "mount_setattr",           FsControl),
    Sysno::new(443, "quotactl_fd",             FsControl),
    Sysno::new(444, "landlock_create_ruleset", SecurityControl),
    Sysno::new(445, "landlock_add_rule",       SecurityControl),
    Sysno::new(446, "landlock_restrict_self",  SecurityControl),
    Sysno::new(447, "memfd_secret",            AddressSpaceAdvanced),
    Sysno::new(448, "process_mrelease",        Debug),
    Sysno::new(449, "futex_waitv",             Futex),
    Sysno::new(450, "set_mempolicy_home_node", Numa),
    Sysno::new(451, "cachestat",               FdFilesystemMisc),
    Sysno::new(452, "fchmodat2",               FileSystemPath),
    Sysno::new(453, "map_shadow_stack",        AddressSpaceAdvanced),
    Sysno::new(454, "futex_wake",              Futex),
    Sysno::new(455, "futex_wait",              Futex),
    Sysno::new(456, "futex_requeue",           Futex),
    Sysno::new(457, "statmount",               GlobalSystemStatus),
    Sysno::new(458, "listmount",               GlobalSystemStatus),
    Sysno::new(459, "lsm_get_self_attr",       SecurityControl),
    Sysno::new(460, "lsm_set_self_attr",       SecurityControl),
    Sysno::new(461, "lsm_list_modules",        SecurityControl),
    Sysno::new(462, "mseal",                   AddressSpaceAdvanced),
];
