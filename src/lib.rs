//! # grackle-bpf
//!
//! A process-wide seccomp-bpf policy engine.  Each process role gets a
//! policy that allows, refuses with an errno, or traps every syscall, and
//! the policy is installed once, irreversibly, early in the process.

#[cfg(not(target_os = "linux"))]
compile_error!("gracklebpf filters Linux syscalls and only builds for Linux");

pub mod logging;
pub mod policy;
pub mod runtime;
pub mod syscalls;

pub use policy::{Decision, Policy, PolicyKind, TrapKind};
pub use runtime::{
    StartOutcome,
    config::{ProcessRole, SandboxFlags},
    error::SandboxError,
    start_sandbox,
};
