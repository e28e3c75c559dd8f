// SPDX-License-Identifier: MIT

//! Turns a process role into an active syscall filter.
//!
//! `start_sandbox` is the main entry point.  It decides from the launch
//! switches whether the filter is wanted for this role, probes the kernel,
//! selects the role's policy, warms it up and activates it.  Every path
//! that leaves the process unfiltered comes back as
//! [`StartOutcome::Disabled`] with the reason; nothing fails open silently.

pub mod cache;
pub mod config;
pub mod error;
pub mod install;
pub mod lifecycle;
pub mod probe;
pub mod sigsys;
pub mod trap;

use std::fmt::Display;

use tracing::{info, warn};

use crate::policy::{Policy, PolicyKind};
use crate::syscalls::Arch;
use cache::CachedOpen;
use config::{GpuOptions, ProcessRole, SandboxFlags};
use error::SandboxError;
use install::{FilterInstaller, SeccompInstaller};
use lifecycle::{Lifecycle, SandboxState};
use probe::SupportStatus;

/// Whether the filter is wanted at all.
pub fn desired(flags: &SandboxFlags) -> bool {
    !flags.no_sandbox && !flags.disable_seccomp_filter
}

/// Whether `role` opts into the filter.
pub fn should_enable(role: ProcessRole, flags: &SandboxFlags) -> bool {
    match role {
        ProcessRole::Gpu => !flags.disable_gpu_sandbox,
        ProcessRole::Renderer | ProcessRole::Worker | ProcessRole::PluginHost => true,
    }
}

/// The policy kind `role` runs under.
pub fn select_policy_kind(role: ProcessRole, flags: &SandboxFlags) -> PolicyKind {
    match role {
        ProcessRole::Gpu if flags.gpu_denylist_by_default && !flags.enable_gpu_sandbox => PolicyKind::PtraceDenylist,
        ProcessRole::Gpu => PolicyKind::Gpu { hw_video_decode: flags.hw_video_decode_enabled() },
        ProcessRole::PluginHost => PolicyKind::PluginHost,
        ProcessRole::Renderer | ProcessRole::Worker => PolicyKind::PtraceDenylist,
    }
}

/// Build the policy for `role` on `arch`, with its trap context attached.
pub fn select_policy(
    role: ProcessRole,
    flags: &SandboxFlags,
    gpu: &GpuOptions,
    arch: Arch,
) -> Result<Policy, SandboxError> {
    let kind = select_policy_kind(role, flags);
    let policy = Policy::new(kind, arch);
    if kind.needs_path_open() {
        return Ok(policy.with_cached_open(CachedOpen::new(&gpu.whitelist_path)?));
    }
    Ok(policy)
}

/// Why the process runs without a filter.
#[derive(Debug)]
pub enum DisabledReason {
    /// `--no-sandbox` or `--disable-seccomp-filter-sandbox`.
    NotDesired,
    /// The role's own opt-out switch.
    RoleOptOut(ProcessRole),
    Unsupported(SupportStatus),
    /// Selection, warmup or installation failed.
    Failed(SandboxError),
}

impl Display for DisabledReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DisabledReason::NotDesired => f.write_str("disabled by switch"),
            DisabledReason::RoleOptOut(role) => write!(f, "disabled for {role}"),
            DisabledReason::Unsupported(status) => write!(f, "{status}"),
            DisabledReason::Failed(e) => write!(f, "failed: {e}"),
        }
    }
}

#[derive(Debug)]
pub enum StartOutcome {
    Active(PolicyKind),
    Disabled(DisabledReason),
}

impl StartOutcome {
    pub fn is_active(&self) -> bool {
        matches!(self, StartOutcome::Active(_))
    }
}

/// Start the filter for this process with the default GPU resources.
pub fn start_sandbox(role: ProcessRole, flags: &SandboxFlags) -> StartOutcome {
    start_sandbox_with(
        Lifecycle::process(),
        &SeccompInstaller,
        probe::probe_support(),
        role,
        flags,
        &GpuOptions::default(),
    )
}

/// [`start_sandbox`] with every collaborator supplied by the caller.
pub fn start_sandbox_with(
    lifecycle: &Lifecycle,
    installer: &dyn FilterInstaller,
    support: SupportStatus,
    role: ProcessRole,
    flags: &SandboxFlags,
    gpu: &GpuOptions,
) -> StartOutcome {
    let outcome = try_start(lifecycle, installer, support, role, flags, gpu);
    match &outcome {
        StartOutcome::Active(kind) => info!(role = %role, policy = %kind, "syscall filter started"),
        StartOutcome::Disabled(reason) => warn!(role = %role, %reason, "running without a syscall filter"),
    }
    outcome
}

fn try_start(
    lifecycle: &Lifecycle,
    installer: &dyn FilterInstaller,
    support: SupportStatus,
    role: ProcessRole,
    flags: &SandboxFlags,
    gpu: &GpuOptions,
) -> StartOutcome {
    if !desired(flags) {
        return StartOutcome::Disabled(DisabledReason::NotDesired);
    }
    if !should_enable(role, flags) {
        return StartOutcome::Disabled(DisabledReason::RoleOptOut(role));
    }
    if !support.is_available() {
        return StartOutcome::Disabled(DisabledReason::Unsupported(support));
    }
    let Some(arch) = Arch::native() else {
        return StartOutcome::Disabled(DisabledReason::Unsupported(SupportStatus::UnsupportedArch));
    };
    if lifecycle.state() == SandboxState::Active {
        return StartOutcome::Disabled(DisabledReason::Failed(SandboxError::AlreadyActive));
    }
    let started = select_policy(role, flags, gpu, arch).and_then(|policy| {
        lifecycle.warmup(&policy, gpu)?;
        lifecycle.activate(&policy, installer)?;
        Ok(policy.kind())
    });
    match started {
        Ok(kind) => StartOutcome::Active(kind),
        Err(e) => StartOutcome::Disabled(DisabledReason::Failed(e)),
    }
}
