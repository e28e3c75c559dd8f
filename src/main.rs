// SPDX-License-Identifier: MIT

//! `gracklebpf`: inspect the syscall policies without installing them.

use std::io::Write;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand};
use tracing::debug;

use gracklebpf::policy::Policy;
use gracklebpf::runtime::{
    config::{GpuOptions, ProcessRole, SandboxFlags},
    probe, select_policy, trap,
};
use gracklebpf::syscalls::Arch;

#[derive(Parser)]
#[command(name = "gracklebpf", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the decision for every syscall number of a role's policy.
    Dump {
        /// renderer, worker, gpu-process or ppapi.
        #[arg(long)]
        role: String,
        /// x86_64 or x86.  Defaults to the build target.
        #[arg(long)]
        arch: Option<String>,
        /// Build the GPU policy with accelerated video decode on.
        #[arg(long)]
        hw_video_decode: bool,
        /// Ask for the stricter GPU policy on platforms that default to the
        /// ptrace denylist.
        #[arg(long)]
        enable_gpu_sandbox: bool,
    },
    /// Report whether this kernel can run seccomp filters.
    Probe,
    /// Decode a crash handler fault address.
    DecodeCrash {
        /// Hex (0x-prefixed) or decimal.
        address: String,
    },
}

fn main() -> anyhow::Result<()> {
    gracklebpf::logging::init_cli();
    let cli = Cli::parse();

    match cli.command {
        Command::Dump { role, arch, hw_video_decode, enable_gpu_sandbox } => {
            handle_dump(&role, arch.as_deref(), hw_video_decode, enable_gpu_sandbox)
        }
        Command::Probe => {
            println!("{}", probe::probe_support());
            Ok(())
        }
        Command::DecodeCrash { address } => handle_decode(&address),
    }
}

fn handle_dump(role: &str, arch: Option<&str>, hw_video_decode: bool, enable_gpu_sandbox: bool) -> anyhow::Result<()> {
    let role: ProcessRole = role.parse()?;
    let arch = match arch {
        Some(name) => Arch::from_name(name).with_context(|| format!("unknown architecture {name:?}"))?,
        None => Arch::native().context("no syscall table for this build target; pass --arch")?,
    };
    let mut flags = SandboxFlags::default().with_platform(false, hw_video_decode);
    flags.enable_gpu_sandbox = enable_gpu_sandbox;
    let policy = select_policy(role, &flags, &GpuOptions::default(), arch)?;
    debug!(role = %role, policy = %policy.kind(), arch = %arch, "dumping policy");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "# {} policy for {} on {}", policy.kind(), role, arch)?;
    for (nr, decision) in policy.decisions() {
        writeln!(out, "{nr:>4} {:<28} {decision}", syscall_name(&policy, nr))?;
    }
    let past = arch.max_syscall() + 1;
    writeln!(out, "{past:>4} {:<28} {}", "(out of range)", policy.evaluate(past))?;
    Ok(())
}

fn syscall_name(policy: &Policy, nr: i32) -> &'static str {
    policy.arch().lookup(nr).map_or("-", |s| s.name)
}

fn handle_decode(address: &str) -> anyhow::Result<()> {
    let parsed = match address.strip_prefix("0x").or_else(|| address.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => address.parse::<u64>(),
    }
    .with_context(|| format!("not an address: {address:?}"))?;
    let Some(report) = trap::decode_crash_address(parsed) else {
        bail!("{parsed:#x} was not produced by the crash handler");
    };
    println!("{report}");
    Ok(())
}
