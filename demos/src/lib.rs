// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared setup for the Understory demos.

use tracing_subscriber::EnvFilter;

/// Install a formatting `tracing` subscriber filtered by `RUST_LOG`.
///
/// Defaults to `understory_sectioned_list=debug` when `RUST_LOG` is unset, so
/// unresolved notifications and out-of-range queries are visible.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("understory_sectioned_list=debug"));
    // A subscriber may already be installed when demos are composed.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
