// SPDX-License-Identifier: MIT

//! Read-only inputs from the process launcher: the role and the switches.

use std::{fmt::Display, path::PathBuf, str::FromStr};

use crate::runtime::error::SandboxError;

/// The kind of process being sandboxed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProcessRole {
    Renderer,
    Worker,
    Gpu,
    /// Out-of-process plugin host.
    PluginHost,
}

impl ProcessRole {
    /// The process-type string the launcher passes.
    pub fn process_type(self) -> &'static str {
        match self {
            ProcessRole::Renderer => "renderer",
            ProcessRole::Worker => "worker",
            ProcessRole::Gpu => "gpu-process",
            ProcessRole::PluginHost => "ppapi",
        }
    }
}

impl FromStr for ProcessRole {
    type Err = SandboxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "renderer" => Ok(ProcessRole::Renderer),
            "worker" => Ok(ProcessRole::Worker),
            "gpu-process" => Ok(ProcessRole::Gpu),
            "ppapi" => Ok(ProcessRole::PluginHost),
            other => Err(SandboxError::UnknownRole(other.to_string())),
        }
    }
}

impl Display for ProcessRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.process_type())
    }
}

pub const NO_SANDBOX: &str = "--no-sandbox";
pub const DISABLE_SECCOMP_FILTER_SANDBOX: &str = "--disable-seccomp-filter-sandbox";
pub const DISABLE_GPU_SANDBOX: &str = "--disable-gpu-sandbox";
pub const ENABLE_GPU_SANDBOX: &str = "--enable-gpu-sandbox";
pub const DISABLE_ACCELERATED_VIDEO_DECODE: &str = "--disable-accelerated-video-decode";

/// Switches that steer policy selection.  Never mutated by the sandbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SandboxFlags {
    /// Every sandbox layer is off.
    pub no_sandbox: bool,
    /// Only the syscall filter is off.
    pub disable_seccomp_filter: bool,
    pub disable_gpu_sandbox: bool,
    /// Use the GPU policy even where the denylist is the platform default.
    pub enable_gpu_sandbox: bool,
    pub disable_accelerated_video_decode: bool,
    /// Platform bit: the GPU process gets the ptrace denylist unless
    /// `enable_gpu_sandbox` is set.
    pub gpu_denylist_by_default: bool,
    /// Platform bit: accelerated video decode is on unless disabled.
    pub accelerated_video_decode_default: bool,
}

impl SandboxFlags {
    /// Parse launch switches.  Anything unrecognized is ignored, as are
    /// `--switch=value` forms of the boolean switches.
    pub fn from_switches<I, S>(switches: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut flags = SandboxFlags::default();
        for switch in switches {
            match switch.as_ref() {
                NO_SANDBOX => flags.no_sandbox = true,
                DISABLE_SECCOMP_FILTER_SANDBOX => flags.disable_seccomp_filter = true,
                DISABLE_GPU_SANDBOX => flags.disable_gpu_sandbox = true,
                ENABLE_GPU_SANDBOX => flags.enable_gpu_sandbox = true,
                DISABLE_ACCELERATED_VIDEO_DECODE => flags.disable_accelerated_video_decode = true,
                _ => {}
            }
        }
        flags
    }

    /// Set the platform defaults that no switch controls.
    pub fn with_platform(mut self, gpu_denylist_by_default: bool, accelerated_video_decode_default: bool) -> Self {
        self.gpu_denylist_by_default = gpu_denylist_by_default;
        self.accelerated_video_decode_default = accelerated_video_decode_default;
        self
    }

    pub fn hw_video_decode_enabled(&self) -> bool {
        self.accelerated_video_decode_default && !self.disable_accelerated_video_decode
    }
}

pub const DEFAULT_WHITELIST_PATH: &str = "/etc/drirc";
pub const DEFAULT_VIDEO_DRIVER_PATH: &str = "/usr/lib64/va/drivers/i965_drv_video.so";

/// Resources the GPU policy acquires during warmup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GpuOptions {
    /// The one path the `open` emulation serves.
    pub whitelist_path: PathBuf,
    /// Shared object preloaded when accelerated video decode is on.
    pub video_driver_path: PathBuf,
}

impl Default for GpuOptions {
    fn default() -> Self {
        GpuOptions {
            whitelist_path: PathBuf::from(DEFAULT_WHITELIST_PATH),
            video_driver_path: PathBuf::from(DEFAULT_VIDEO_DRIVER_PATH),
        }
    }
}
