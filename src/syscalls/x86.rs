// SPDX-License-Identifier: MIT

//! i386 syscall table, from `arch/x86/entry/syscalls/syscall_32.tbl`.
//!
//! Sockets and System V IPC were first only reachable through the
//! `socketcall` and `ipc` multiplexers; the direct entry points came later
//! and sit in their own number blocks.  The 403..=423 block holds the
//! 64-bit `time_t` variants.

use super::SemanticSet::*;
use super::{Sysno, SyscallNumber};

pub(crate) const MAX_SYSCALL: SyscallNumber = 462;

pub(crate) const TABLE: &[Sysno] = &[
    Sysno::new(0, "restart_syscall",                KernelInternal),
    Sysno::new(1, "exit",                           ProcessLifecycle),
    Sysno::new(2, "fork",                           ProcessLifecycleAdvanced),
    Sysno::new(3, "read",                           GeneralIo),
    Sysno::new(4, "write",                          GeneralIo),
    Sysno::new(5, "open",                           FileSystemPath),
    Sysno::new(6, "close",                          FdOperation),
    Sysno::new(7, "waitpid",                        ProcessLifecycle),
    Sysno::new(8, "creat",                          FileSystemPath),
    Sysno::new(9, "link",                           FileSystemPath),
    Sysno::new(10, "unlink",                        FileSystemPath),
    Sysno::new(11, "execve",                        FileSystemPath),
    Sysno::new(12, "chdir",                         CurrentDirectory),
    Sysno::new(13, "time",                          Gettime),
    Sysno::new(14, "mknod",                         FileSystemPath),
    Sysno::new(15, "chmod",                         FileSystemPath),
    Sysno::new(16, "lchown",                        FileSystemPath),
    Sysno::new(17, "break",                         Obscure),
    Sysno::new(18, "oldstat",                       FileSystemPath),
    Sysno::new(19, "lseek",                         GeneralIo),
    Sysno::new(20, "getpid",                        SimpleIdentity),
    Sysno::new(21, "mount",                         FsControl),
    Sysno::new(22, "umount",                        FsControl),
    Sysno::new(23, "setuid",                        PrivilegeChange),
    Sysno::new(24, "getuid",                        SimpleIdentity),
    Sysno::new(25, "stime",                         ClockControl),
    Sysno::new(26, "ptrace",                        Debug),
    Sysno::new(27, "alarm",                         Timer),
    Sysno::new(28, "oldfstat",                      FdFilesystemMisc),
    Sysno::new(29, "pause",                         BasicScheduler),
    Sysno::new(30, "utime",                         FileSystemPath),
    Sysno::new(31, "stty",                          Obscure),
    Sysno::new(32, "gtty",                          Obscure),
    Sysno::new(33, "access",                        FileSystemPath),
    Sysno::new(34, "nice",                          Priority),
    Sysno::new(35, "ftime",                         ClockControl),
    Sysno::new(36, "sync",                          GlobalFsViewChange),
    Sysno::new(37, "kill",                          Kill),
    Sysno::new(38, "rename",                        FileSystemPath),
    Sysno::new(39, "mkdir",                         FileSystemPath),
    Sysno::new(40, "rmdir",                         FileSystemPath),
    Sysno::new(41, "dup",                           FdOperation),
    Sysno::new(42, "pipe",                          PipeOrSocketPair),
    Sysno::new(43, "times",                         GlobalProcessEnvironment),
    Sysno::new(44, "prof",                          Obscure),
    Sysno::new(45, "brk",                           AddressSpace),
    Sysno::new(46, "setgid",                        PrivilegeChange),
    Sysno::new(47, "getgid",                        SimpleIdentity),
    Sysno::new(48, "signal",                        SignalAdvanced),
    Sysno::new(49, "geteuid",                       SimpleIdentity),
    Sysno::new(50, "getegid",                       SimpleIdentity),
    Sysno::new(51, "acct",                          GlobalProcessEnvironment),
    Sysno::new(52, "umount2",                       FsControl),
    Sysno::new(53, "lock",                          Obscure),
    Sysno::new(54, "ioctl",                         IoAdvanced),
    Sysno::new(55, "fcntl",                         FdOperation),
    Sysno::new(56, "mpx",                           Obscure),
    Sysno::new(57, "setpgid",                       ProcessGroupOrSession),
    Sysno::new(58, "ulimit",                        GlobalProcessEnvironment),
    Sysno::new(59, "oldolduname",                   GlobalSystemStatus),
    Sysno::new(60, "umask",                         Umask),
    Sysno::new(61, "chroot",                        GlobalFsViewChange),
    Sysno::new(62, "ustat",                         FileSystemPath),
    Sysno::new(63, "dup2",                          FdOperation),
    Sysno::new(64, "getppid",                       SimpleIdentity),
    Sysno::new(65, "getpgrp",                       ProcessGroupOrSession),
    Sysno::new(66, "setsid",                        ProcessGroupOrSession),
    Sysno::new(67, "sigaction",                     SignalHandling),
    Sysno::new(68, "sgetmask",                      SignalAdvanced),
    Sysno::new(69, "ssetmask",                      SignalAdvanced),
    Sysno::new(70, "setreuid",                      PrivilegeChange),
    Sysno::new(71, "setregid",                      PrivilegeChange),
    Sysno::new(72, "sigsuspend",                    SignalAdvanced),
    Sysno::new(73, "sigpending",                    SignalAdvanced),
    Sysno::new(74, "sethostname",                   Admin),
    Sysno::new(75, "setrlimit",                     GlobalProcessEnvironment),
    Sysno::new(76, "getrlimit",                     GlobalProcessEnvironment),
    Sysno::new(77, "getrusage",                     GlobalProcessEnvironment),
    Sysno::new(78, "gettimeofday",                  Gettime),
    Sysno::new(79, "settimeofday",                  ClockControl),
    Sysno::new(80, "getgroups",                     SimpleIdentity),
    Sysno::new(81, "setgroups",                     PrivilegeChange),
    Sysno::new(82, "select",                        GeneralIo),
    Sysno::new(83, "symlink",                       FileSystemPath),
    Sysno::new(84, "oldlstat",                      FileSystemPath),
    Sysno::new(85, "readlink",                      FileSystemPath),
    Sysno::new(86, "uselib",                        FileSystemPath),
    Sysno::new(87, "swapon",                        FsControl),
    Sysno::new(88, "reboot",                        Admin),
    Sysno::new(89, "readdir",                       FdDestructive),
    Sysno::new(90, "mmap",                          AddressSpace),
    Sysno::new(91, "munmap",                        AddressSpace),
    Sysno::new(92, "truncate",                      FileSystemPath),
    Sysno::new(93, "ftruncate",                     FdDestructive),
    Sysno::new(94, "fchmod",                        FdDestructive),
    Sysno::new(95, "fchown",                        FdDestructive),
    Sysno::new(96, "getpriority",                   Priority),
    Sysno::new(97, "setpriority",                   Priority),
    Sysno::new(98, "profil",                        Obscure),
    Sysno::new(99, "statfs",                        FileSystemPath),
    Sysno::new(100, "fstatfs",                      FdFilesystemMisc),
    Sysno::new(101, "ioperm",                       PrivilegeChange),
    Sysno::new(102, "socketcall",                   SocketCall),
    Sysno::new(103, "syslog",                       Admin),
    Sysno::new(104, "setitimer",                    Timer),
    Sysno::new(105, "getitimer",                    Timer),
    Sysno::new(106, "stat",                         FileSystemPath),
    Sysno::new(107, "lstat",                        FileSystemPath),
    Sysno::new(108, "fstat",                        FdStat),
    Sysno::new(109, "olduname",                     GlobalSystemStatus),
    Sysno::new(110, "iopl",                         PrivilegeChange),
    Sysno::new(111, "vhangup",                      Misc),
    Sysno::new(112, "idle",                         Obscure),
    Sysno::new(113, "vm86old",                      AddressSpaceAdvanced),
    Sysno::new(114, "wait4",                        ProcessLifecycle),
    Sysno::new(115, "swapoff",                      FsControl),
    Sysno::new(116, "sysinfo",                      GlobalSystemStatus),
    Sysno::new(117, "ipc",                          SysVIpc),
    Sysno::new(118, "fsync",                        FdFilesystemMisc),
    Sysno::new(119, "sigreturn",                    SignalHandling),
    Sysno::new(120, "clone",                        ProcessLifecycle),
    Sysno::new(121, "setdomainname",                Admin),
    Sysno::new(122, "uname",                        GlobalSystemStatus),
    Sysno::new(123, "modify_ldt",                   AddressSpaceAdvanced),
    Sysno::new(124, "adjtimex",                     ClockControl),
    Sysno::new(125, "mprotect",                     AddressSpace),
    Sysno::new(126, "sigprocmask",                  SignalHandling),
    Sysno::new(127, "create_module",                KernelModule),
    Sysno::new(128, "init_module",                  KernelModule),
    Sysno::new(129, "delete_module",                KernelModule),
    Sysno::new(130, "get_kernel_syms",              KernelModule),
    Sysno::new(131, "quotactl",                     FsControl),
    Sysno::new(132, "getpgid",                      ProcessGroupOrSession),
    Sysno::new(133, "fchdir",                       CurrentDirectory),
    Sysno::new(134, "bdflush",                      Admin),
    Sysno::new(135, "sysfs",                        GlobalSystemStatus),
    Sysno::new(136, "personality",                  GlobalProcessEnvironment),
    Sysno::new(137, "afs_syscall",                  Obscure),
    Sysno::new(138, "setfsuid",                     PrivilegeChange),
    Sysno::new(139, "setfsgid",                     PrivilegeChange),
    Sysno::new(140, "_llseek",                      GeneralIo),
    Sysno::new(141, "getdents",                     FdDestructive),
    Sysno::new(142, "_newselect",                   GeneralIo),
    Sysno::new(143, "flock",                        FdFilesystemMisc),
    Sysno::new(144, "msync",                        AddressSpaceAdvanced),
    Sysno::new(145, "readv",                        GeneralIo),
    Sysno::new(146, "writev",                       GeneralIo),
    Sysno::new(147, "getsid",                       SimpleIdentity),
    Sysno::new(148, "fdatasync",                    FdFilesystemMisc),
    Sysno::new(149, "_sysctl",                      GlobalSystemStatus),
    Sysno::new(150, "mlock",                        AddressSpace),
    Sysno::new(151, "munlock",                      AddressSpace),
    Sysno::new(152, "mlockall",                     AddressSpaceAdvanced),
    Sysno::new(153, "munlockall",                   AddressSpaceAdvanced),
    Sysno::new(154, "sched_setparam",               AdvancedScheduler),
    Sysno::new(155, "sched_getparam",               AdvancedScheduler),
    Sysno::new(156, "sched_setscheduler",           AdvancedScheduler),
    Sysno::new(157, "sched_getscheduler",           AdvancedScheduler),
    Sysno::new(158, "sched_yield",                  BasicScheduler),
    Sysno::new(159, "sched_get_priority_max",       AdvancedScheduler),
    Sysno::new(160, "sched_get_priority_min",       AdvancedScheduler),
    Sysno::new(161, "sched_rr_get_interval",        AdvancedScheduler),
    Sysno::new(162, "nanosleep",                    BasicScheduler),
    Sysno::new(163, "mremap",                       AddressSpaceAdvanced),
    Sysno::new(164, "setresuid",                    PrivilegeChange),
    Sysno::new(165, "getresuid",                    SimpleIdentity),
    Sysno::new(166, "vm86",                         AddressSpaceAdvanced),
    Sysno::new(167, "query_module",                 KernelModule),
    Sysno::new(168, "poll",                         GeneralIo),
    Sysno::new(169, "nfsservctl",                   FsControl),
    Sysno::new(170, "setresgid",                    PrivilegeChange),
    Sysno::new(171, "getresgid",                    SimpleIdentity),
    Sysno::new(172, "prctl",                        Prctl),
    Sysno::new(173, "rt_sigreturn",                 SignalHandling),
    Sysno::new(174, "rt_sigaction",                 SignalHandling),
    Sysno::new(175, "rt_sigprocmask",               SignalHandling),
    Sysno::new(176, "rt_sigpending",                SignalAdvanced),
    Sysno::new(177, "rt_sigtimedwait",              SignalAdvanced),
    Sysno::new(178, "rt_sigqueueinfo",              SignalAdvanced),
    Sysno::new(179, "rt_sigsuspend",                SignalAdvanced),
    Sysno::new(180, "pread64",                      IoAdvanced),
    Sysno::new(181, "pwrite64",                     IoAdvanced),
    Sysno::new(182, "chown",                        FileSystemPath),
    Sysno::new(183, "getcwd",                       CurrentDirectory),
    Sysno::new(184, "capget",                       SimpleIdentity),
    Sysno::new(185, "capset",                       PrivilegeChange),
    Sysno::new(186, "sigaltstack",                  SignalHandling),
    Sysno::new(187, "sendfile",                     IoAdvanced),
    Sysno::new(188, "getpmsg",                      Obscure),
    Sysno::new(189, "putpmsg",                      Obscure),
    Sysno::new(190, "vfork",                        ProcessLifecycleAdvanced),
    Sysno::new(191, "ugetrlimit",                   GlobalProcessEnvironment),
    Sysno::new(192, "mmap2",                        AddressSpace),
    Sysno::new(193, "truncate64",                   FileSystemPath),
    Sysno::new(194, "ftruncate64",                  FdDestructive),
    Sysno::new(195, "stat64",                       FileSystemPath),
    Sysno::new(196, "lstat64",                      FileSystemPath),
    Sysno::new(197, "fstat64",                      FdStat),
    Sysno::new(198, "lchown32",                     FileSystemPath),
    Sysno::new(199, "getuid32",                     SimpleIdentity),
    Sysno::new(200, "getgid32",                     SimpleIdentity),
    Sysno::new(201, "geteuid32",                    SimpleIdentity),
    Sysno::new(202, "getegid32",                    SimpleIdentity),
    Sysno::new(203, "setreuid32",                   PrivilegeChange),
    Sysno::new(204, "setregid32",                   PrivilegeChange),
    Sysno::new(205, "getgroups32",                  SimpleIdentity),
    Sysno::new(206, "setgroups32",                  PrivilegeChange),
    Sysno::new(207, "fchown32",                     FdDestructive),
    Sysno::new(208, "setresuid32",                  PrivilegeChange),
    Sysno::new(209, "getresuid32",                  SimpleIdentity),
    Sysno::new(210, "setresgid32",                  PrivilegeChange),
    Sysno::new(211, "getresgid32",                  SimpleIdentity),
    Sysno::new(212, "chown32",                      FileSystemPath),
    Sysno::new(213, "setuid32",                     PrivilegeChange),
    Sysno::new(214, "setgid32",                     PrivilegeChange),
    Sysno::new(215, "setfsuid32",                   PrivilegeChange),
    Sysno::new(216, "setfsgid32",                   PrivilegeChange),
    Sysno::new(217, "pivot_root",                   GlobalFsViewChange),
    Sysno::new(218, "mincore",                      AddressSpaceAdvanced),
    Sysno::new(219, "madvise",                      AddressSpace),
    Sysno::new(220, "getdents64",                   FdDestructive),
    Sysno::new(221, "fcntl64",                      FdOperation),
    Sysno::new(224, "gettid",                       SimpleIdentity),
    Sysno::new(225, "readahead",                    AddressSpaceAdvanced),
    Sysno::new(226, "setxattr",                     ExtendedAttributes),
    Sysno::new(227, "lsetxattr",                    ExtendedAttributes),
    Sysno::new(228, "fsetxattr",                    ExtendedAttributes),
    Sysno::new(229, "getxattr",                     ExtendedAttributes),
    Sysno::new(230, "lgetxattr",                    ExtendedAttributes),
    Sysno::new(231, "fgetxattr",                    ExtendedAttributes),
    Sysno::new(232, "listxattr",                    ExtendedAttributes),
    Sysno::new(233, "llistxattr",                   ExtendedAttributes),
    Sysno::new(234, "flistxattr",                   ExtendedAttributes),
    Sysno::new(235, "removexattr",                  ExtendedAttributes),
    Sysno::new(236, "lremovexattr",                 ExtendedAttributes),
    Sysno::new(237, "fremovexattr",                 ExtendedAttributes),
    Sysno::new(238, "tkill",                        Kill),
    Sysno::new(239, "sendfile64",                   IoAdvanced),
    Sysno::new(240, "futex",                        Futex),
    Sysno::new(241, "sched_setaffinity",            AdvancedScheduler),
    Sysno::new(242, "sched_getaffinity",            BasicScheduler),
    Sysno::new(243, "set_thread_area",              ProcessLifecycleAdvanced),
    Sysno::new(244, "get_thread_area",              ProcessLifecycleAdvanced),
    Sysno::new(245, "io_setup",                     AsyncIo),
    Sysno::new(246, "io_destroy",                   AsyncIo),
    Sysno::new(247, "io_getevents",                 AsyncIo),
    Sysno::new(248, "io_submit",                    AsyncIo),
    Sysno::new(249, "io_cancel",                    AsyncIo),
    Sysno::new(250, "fadvise64",                    FdFilesystemMisc),
    Sysno::new(252, "exit_group",                   ProcessLifecycle),
    Sysno::new(253, "lookup_dcookie",               FileSystemPath),
    Sysno::new(254, "epoll_create",                 Epoll),
    Sysno::new(255, "epoll_ctl",                    Epoll),
    Sysno::new(256, "epoll_wait",                   Epoll),
    Sysno::new(257, "remap_file_pages",             AddressSpaceAdvanced),
    Sysno::new(258, "set_tid_address",              ProcessLifecycleAdvanced),
    Sysno::new(259, "timer_create",                 AdvancedTimer),
    Sysno::new(260, "timer_settime",                AdvancedTimer),
    Sysno::new(261, "timer_gettime",                AdvancedTimer),
    Sysno::new(262, "timer_getoverrun",             AdvancedTimer),
    Sysno::new(263, "timer_delete",                 AdvancedTimer),
    Sysno::new(264, "clock_settime",                ClockControl),
    Sysno::new(265, "clock_gettime",                Gettime),
    Sysno::new(266, "clock_getres",                 ClockControl),
    Sysno::new(267, "clock_nanosleep",              ClockControl),
    Sysno::new(268, "statfs64",                     FileSystemPath),
    Sysno::new(269, "fstatfs64",                    FdFilesystemMisc),
    Sysno::new(270, "tgkill",                       Kill),
    Sysno::new(271, "utimes",                       FileSystemPath),
    Sysno::new(272, "fadvise64_64",                 FdFilesystemMisc),
    Sysno::new(273, "vserver",                      Obscure),
    Sysno::new(274, "mbind",                        Numa),
    Sysno::new(275, "get_mempolicy",                Numa),
    Sysno::new(276, "set_mempolicy",                Numa),
    Sysno::new(277, "mq_open",                      MessageQueue),
    Sysno::new(278, "mq_unlink",                    MessageQueue),
    Sysno::new(279, "mq_timedsend",                 MessageQueue),
    Sysno::new(280, "mq_timedreceive",              MessageQueue),
    Sysno::new(281, "mq_notify",                    MessageQueue),
    Sysno::new(282, "mq_getsetattr",                MessageQueue),
    Sysno::new(283, "kexec_load",                   Admin),
    Sysno::new(284, "waitid",                       ProcessLifecycle),
    Sysno::new(286, "add_key",                      KeyManagement),
    Sysno::new(287, "request_key",                  KeyManagement),
    Sysno::new(288, "keyctl",                       KeyManagement),
    Sysno::new(289, "ioprio_set",                   AdvancedScheduler),
    Sysno::new(290, "ioprio_get",                   AdvancedScheduler),
    Sysno::new(291, "inotify_init",                 Inotify),
    Sysno::new(292, "inotify_add_watch",            Inotify),
    Sysno::new(293, "inotify_rm_watch",             Inotify),
    Sysno::new(294, "migrate_pages",                Numa),
    Sysno::new(295, "openat",                       FileSystemPath),
    Sysno::new(296, "mkdirat",                      FileSystemPath),
    Sysno::new(297, "mknodat",                      FileSystemPath),
    Sysno::new(298, "fchownat",                     FileSystemPath),
    Sysno::new(299, "futimesat",                    FileSystemPath),
    Sysno::new(300, "fstatat64",                    FileSystemPath),
    Sysno::new(301, "unlinkat",                     FileSystemPath),
    Sysno::new(302, "renameat",                     FileSystemPath),
    Sysno::new(303, "linkat",                       FileSystemPath),
    Sysno::new(304, "symlinkat",                    FileSystemPath),
    Sysno::new(305, "readlinkat",                   FileSystemPath),
    Sysno::new(306, "fchmodat",                     FileSystemPath),
    Sysno::new(307, "faccessat",                    FileSystemPath),
    Sysno::new(308, "pselect6",                     GeneralIo),
    Sysno::new(309, "ppoll",                        GeneralIo),
    Sysno::new(310, "unshare",                      ProcessLifecycleAdvanced),
    Sysno::new(311, "set_robust_list",              Futex),
    Sysno::new(312, "get_robust_list",              Futex),
    Sysno::new(313, "splice",                       IoAdvanced),
    Sysno::new(314, "sync_file_range",              FdFilesystemMisc),
    Sysno::new(315, "tee",                          IoAdvanced),
    Sysno::new(316, "vmsplice",                     IoAdvanced),
    Sysno::new(317, "move_pages",                   Numa),
    Sysno::new(318, "getcpu",                       Numa),
    Sysno::new(319, "epoll_pwait",                  EpollAdvanced),
    Sysno::new(320, "utimensat",                    FileSystemPath),
    Sysno::new(321, "signalfd",                     SignalAdvanced),
    Sysno::new(322, "timerfd_create",               AdvancedTimer),
    Sysno::new(323, "eventfd",                      EventFd),
    Sysno::new(324, "fallocate",                    FdDestructive),
    Sysno::new(325, "timerfd_settime",              AdvancedTimer),
    Sysno::new(326, "timerfd_gettime",              AdvancedTimer),
    Sysno::new(327, "signalfd4",                    SignalAdvanced),
    Sysno::new(328, "eventfd2",                     EventFd),
    Sysno::new(329, "epoll_create1",                Epoll),
    Sysno::new(330, "dup3",                         FdOperation),
    Sysno::new(331, "pipe2",                        PipeOrSocketPair),
    Sysno::new(332, "inotify_init1",                Inotify),
    Sysno::new(333, "preadv",                       IoAdvanced),
    Sysno::new(334, "pwritev",                      IoAdvanced),
    Sysno::new(335, "rt_tgsigqueueinfo",            SignalAdvanced),
    Sysno::new(336, "perf_event_open",              Misc),
    Sysno::new(337, "recvmmsg",                     IoAdvanced),
    Sysno::new(338, "fanotify_init",                FaNotify),
    Sysno::new(339, "fanotify_mark",                FaNotify),
    Sysno::new(340, "prlimit64",                    GlobalProcessEnvironment),
    Sysno::new(341, "name_to_handle_at",            Misc),
    Sysno::new(342, "open_by_handle_at",            Misc),
    Sysno::new(343, "clock_adjtime",                ClockControl),
    Sysno::new(344, "syncfs",                       Misc),
    Sysno::new(345, "sendmmsg",                     IoAdvanced),
    Sysno::new(346, "setns",                        ProcessLifecycleAdvanced),
    Sysno::new(347, "process_vm_readv",             Debug),
    Sysno::new(348, "process_vm_writev",            Debug),
    Sysno::new(349, "kcmp",                         Debug),
    Sysno::new(350, "finit_module",                 KernelModule),
    Sysno::new(351, "sched_setattr",                AdvancedScheduler),
    Sysno::new(352, "sched_getattr",                AdvancedScheduler),
    Sysno::new(353, "renameat2",                    FileSystemPath),
    Sysno::new(354, "seccomp",                      SecurityControl),
    Sysno::new(355, "getrandom",                    Misc),
    Sysno::new(356, "memfd_create",                 Misc),
    Sysno::new(357, "bpf",                          Admin),
    Sysno::new(358, "execveat",                     FileSystemPath),
    Sysno::new(359, "socket",                       SocketCreation),
    Sysno::new(360, "socketpair",                   PipeOrSocketPair),
    Sysno::new(361, "bind",                         SocketCreation),
    Sysno::new(362, "connect",                      SocketCreation),
    Sysno::new(363, "listen",                       SocketCreation),
    Sysno::new(364, "accept4",                      SocketCreation),
    Sysno::new(365, "getsockopt",                   SocketInformation),
    Sysno::new(366, "setsockopt",                   SocketInformation),
    Sysno::new(367, "getsockname",                  SocketInformation),
    Sysno::new(368, "getpeername",                  SocketInformation),
    Sysno::new(369, "sendto",                       GeneralIo),
    Sysno::new(370, "sendmsg",                      GeneralIo),
    Sysno::new(371, "recvfrom",                     GeneralIo),
    Sysno::new(372, "recvmsg",                      GeneralIo),
    Sysno::new(373, "shutdown",                     FdOperation),
    Sysno::new(374, "userfaultfd",                  AddressSpaceAdvanced),
    Sysno::new(375, "membarrier",                   Misc),
    Sysno::new(376, "mlock2",                       AddressSpaceAdvanced),
    Sysno::new(377, "copy_file_range",              IoAdvanced),
    Sysno::new(378, "preadv2",                      IoAdvanced),
    Sysno::new(379, "pwritev2",                     IoAdvanced),
    Sysno::new(380, "pkey_mprotect",                AddressSpaceAdvanced),
    Sysno::new(381, "pkey_alloc",                   AddressSpaceAdvanced),
    Sysno::new(382, "pkey_free",                    AddressSpaceAdvanced),
    Sysno::new(383, "statx",                        FileSystemPath),
    Sysno::new(384, "arch_prctl",                   ArchPrctl),
    Sysno::new(385, "io_pgetevents",                AsyncIo),
    Sysno::new(386, "rseq",                         LibcFallback),
    Sysno::new(393, "semget",                       SysVSemaphores),
    Sysno::new(394, "semctl",                       SysVSemaphores),
    Sysno::new(395, "shmget",                       SysVSharedMemory),
    Sysno::new(396, "shmctl",                       SysVSharedMemory),
    Sysno::new(397, "shmat",                        SysVSharedMemory),
    Sysno::new(398, "shmdt",                        SysVSharedMemory),
    Sysno::new(399, "msgget",                       SysVMessageQueue),
    Sysno::new(400, "msgsnd",                       SysVMessageQueue),
    Sysno::new(401, "msgrcv",                       SysVMessageQueue),
    Sysno::new(402, "msgctl",                       SysVMessageQueue),
    Sysno::new(403, "clock_gettime64",              Gettime),
    Sysno::new(404, "clock_settime64",              ClockControl),
    Sysno::new(405, "clock_adjtime64",              ClockControl),
    Sysno::new(406, "clock_getres_time64",          ClockControl),
    Sysno::new(407, "clock_nanosleep_time64",       ClockControl),
    Sysno::new(408, "timer_gettime64",              AdvancedTimer),
    Sysno::new(409, "timer_settime64",              AdvancedTimer),
    Sysno::new(410, "timerfd_gettime64",            AdvancedTimer),
    Sysno::new(411, "timerfd_settime64",            AdvancedTimer),
    Sysno::new(412, "utimensat_time64",             FileSystemPath),
    Sysno::new(413, "pselect6_time64",              GeneralIo),
    Sysno::new(414, "ppoll_time64",                 GeneralIo),
    Sysno::new(416, "io_pgetevents_time64",         AsyncIo),
    Sysno::new(417, "recvmmsg_time64",              IoAdvanced),
    Sysno::new(418, "mq_timedsend_time64",          MessageQueue),
    Sysno::new(419, "mq_timedreceive_time64",       MessageQueue),
    Sysno::new(420, "semtimedop_time64",            SysVSemaphores),
    Sysno::new(421, "rt_sigtimedwait_time64",       SignalAdvanced),
    Sysno::new(422, "futex_time64",                 Futex),
    Sysno::new(423, "sched_rr_get_interval_time64", AdvancedScheduler),
    Sysno::new(424, "pidfd_send_signal",            SignalAdvanced),
    Sysno::new(425, "io_uring_setup",               AsyncIo),
    Sysno::new(426, "io_uring_enter",               AsyncIo),
    Sysno::new(427, "io_uring_register",            AsyncIo),
    Sysno::new(428, "open_tree",                    FsControl),
    Sysno::new(429, "move_mount",                   FsControl),
    Sysno::new(430, "fsopen",                       FsControl),
    Sysno::new(431, "fsconfig",                     FsControl),
    Sysno::new(432, "fsmount",                      FsControl),
    Sysno::new(433, "fspick",                       FsControl),
    Sysno::new(434, "pidfd_open",                   ProcessLifecycleAdvanced),
    Sysno::new(435, "clone3",                       LibcFallback),
    Sysno::new(436, "close_range",                  FdOperation),
    Sysno::new(437, "openat2",                      FileSystemPath),
    Sysno::new(438, "pidfd_getfd",                  Debug),
    Sysno::new(439, "faccessat2",                   FileSystemPath),
    Sysno::new(440, "process_madvise",              Debug),
    Sysno::new(441, "epoll_pwait2",                 EpollAdvanced),
    Sysno::new(442, "mount_setattr",                FsControl),
    Sysno::new(443, "quotactl_fd",                  FsControl),
    Sysno::new(444, "landlock_create_ruleset",      SecurityControl),
    Sysno::new(445, "landlock_add_rule",            SecurityControl),
    Sysno::new(446, "landlock_restrict_self",       SecurityControl),
    Sysno::new(447, "memfd_secret",                 AddressSpaceAdvanced),
    Sysno::new(448, "process_mrelease",             Debug),
    Sysno::new(449, "futex_waitv",                  Futex),
    Sysno::new(450, "set_mempolicy_home_node",      Numa),
    Sysno::new(451, "cachestat",                    FdFilesystemMisc),
    Sysno::new(452, "fchmodat2",                    FileSystemPath),
    Sysno::new(454, "futex_wake",                   Futex),
    Sysno::new(455, "futex_wait",                   Futex),
    Sysno::new(456, "futex_requeue",                Futex),
    Sysno::new(457, "statmount",                    GlobalSystemStatus),
    Sysno::new(458, "listmount",                    GlobalSystemStatus),
    Sysno::new(459, "lsm_get_self_attr",            SecurityControl),
    Sysno::new(460, "lsm_set_self_attr",            SecurityControl),
    Sysno::new(461, "lsm_list_modules",             SecurityControl),
    Sysno::new(462, "mseal",                        AddressSpaceAdvanced),
];
