// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// MAC verification error
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MacError {
    /// Expected tag length is outside 1..=32 bytes
    #[error("expected tag length is outside 1..=32 bytes")]
    TagLength,
    /// Computed MAC does not match the expected tag
    #[error("MAC verification failed")]
    Verify,
}
