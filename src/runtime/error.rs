// SPDX-License-Identifier: MIT

//! Common error type.
//!

use std::ffi::NulError;

use crate::runtime::lifecycle::SandboxState;

#[derive(Debug, thiserror::Error)]
pub enum SandboxError {
    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),

    /// libseccomp refused to build or load the filter.
    #[error("seccomp filter failure: {0}")]
    Seccomp(String),

    #[error("no syscall table for this architecture")]
    UnsupportedArch,

    #[error("cannot move the sandbox from {from} to {to}")]
    InvalidTransition { from: SandboxState, to: SandboxState },

    #[error("the sandbox is already active in this process")]
    AlreadyActive,

    #[error("unknown process role: {0:?}")]
    UnknownRole(String),
}

impl From<nix::Error> for SandboxError {
    fn from(e: nix::Error) -> Self {
        SandboxError::Io(std::io::Error::from(e))
    }
}

impl From<libseccomp::error::SeccompError> for SandboxError {
    fn from(e: libseccomp::error::SeccompError) -> Self {
        SandboxError::Seccomp(e.to_string())
    }
}

impl From<NulError> for SandboxError {
    fn from(e: NulError) -> Self {
        SandboxError::Io(std::io::Error::new(std::io::ErrorKind::InvalidFilename, e))
    }
}

impl From<SandboxError> for std::io::Error {
    fn from(e: SandboxError) -> Self {
        match e {
            SandboxError::Io(e) => e,
            SandboxError::UnknownRole(_) => std::io::Error::new(std::io::ErrorKind::InvalidInput, e),
            SandboxError::UnsupportedArch => std::io::Error::new(std::io::ErrorKind::Unsupported, e),
            _ => std::io::Error::other(e),
        }
    }
}
