// SPDX-License-Identifier: MIT

//! Compile a [`Policy`] into a kernel filter and load it.

use libseccomp::{ScmpAction, ScmpFilterAttr, ScmpFilterContext, ScmpSyscall};
use tracing::{debug, warn};

use crate::policy::{Decision, Policy};
use crate::runtime::{error::SandboxError, sigsys};
use crate::syscalls::Arch;

/// Installs a policy as the process's syscall filter.
pub trait FilterInstaller {
    /// Install and enable `policy`.  On success every thread in the process,
    /// including the caller, is filtered.
    fn install(&self, policy: &Policy) -> Result<(), SandboxError>;
}

/// The default action of every compiled filter.  Numbers without a rule,
/// including everything outside the table, get `ENOSYS`.
const DEFAULT_DECISION: Decision = Decision::ENOSYS;

/// Installs filters through libseccomp.
#[derive(Debug, Default, Clone, Copy)]
pub struct SeccompInstaller;

impl FilterInstaller for SeccompInstaller {
    fn install(&self, policy: &Policy) -> Result<(), SandboxError> {
        if Arch::native() != Some(policy.arch()) {
            return Err(SandboxError::UnsupportedArch);
        }
        let filter = build_filter(policy)?;
        load_with_handler(policy, || Ok(filter.load()?))
    }
}

/// Arm the SIGSYS handler for `policy`, then run `load`.  A failed load
/// leaves the handler and the published policy as they were before.
pub(crate) fn load_with_handler(
    policy: &Policy,
    load: impl FnOnce() -> Result<(), SandboxError>,
) -> Result<(), SandboxError> {
    // The handler must be in place before the first trapped call.
    let armed = sigsys::arm(policy)?;
    if let Err(e) = load() {
        if let Err(undo) = armed.disarm() {
            warn!(error = %undo, "SIGSYS handler could not be restored");
        }
        return Err(e);
    }
    Ok(())
}

fn action_for(decision: Decision) -> ScmpAction {
    match decision {
        Decision::Allow => ScmpAction::Allow,
        Decision::Errno(code) => ScmpAction::Errno(code),
        Decision::Trap(_) => ScmpAction::Trap,
    }
}

/// Build the filter for `policy` without loading it.
///
/// Only numbers with a table entry get a rule; unallocated numbers inside
/// the range fall to the default, which matches what the kernel would
/// answer for them anyway.
pub fn build_filter(policy: &Policy) -> Result<ScmpFilterContext, SandboxError> {
    let mut ctx = ScmpFilterContext::new(action_for(DEFAULT_DECISION))?;
    let mut rules = 0usize;
    for s in policy.arch().table() {
        let decision = policy.evaluate(s.nr);
        if decision == DEFAULT_DECISION {
            continue;
        }
        debug!(syscall = s.name, nr = s.nr, %decision, "filter rule");
        ctx.add_rule(action_for(decision), ScmpSyscall::from(s.nr))?;
        rules += 1;
    }
    ctx.set_filter_attr(ScmpFilterAttr::CtlTsync, 1)?;
    debug!(policy = %policy.kind(), arch = %policy.arch(), rules, "filter compiled");
    Ok(ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::PolicyKind;

    #[test]
    fn actions_mirror_decisions() {
        assert_eq!(action_for(Decision::Allow), ScmpAction::Allow);
        assert_eq!(action_for(Decision::Errno(13)), ScmpAction::Errno(13));
        assert_eq!(action_for(Decision::Trap(crate::policy::TrapKind::PathOpen)), ScmpAction::Trap);
    }

    #[test]
    fn foreign_arch_is_refused() {
        let foreign = match Arch::native() {
            Some(Arch::X86) => Arch::X86_64,
            _ => Arch::X86,
        };
        let policy = Policy::new(PolicyKind::AllowAll, foreign);
        assert!(matches!(SeccompInstaller.install(&policy), Err(SandboxError::UnsupportedArch)));
    }

    #[test]
    #[cfg(any(target_arch = "x86_64", target_arch = "x86"))]
    fn native_policies_compile() {
        let arch = Arch::native().expect("native table");
        for kind in [
            PolicyKind::Baseline,
            PolicyKind::Gpu { hw_video_decode: false },
            PolicyKind::PluginHost,
            PolicyKind::PtraceDenylist,
            PolicyKind::AllowAll,
        ] {
            assert!(build_filter(&Policy::new(kind, arch)).is_ok(), "{kind}");
        }
    }
}
