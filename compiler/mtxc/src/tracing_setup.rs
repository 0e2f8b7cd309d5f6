//! Tracing subscriber installation for the `mtx` binary.
//!
//! - `MTX_LOG`: an `EnvFilter` directive (`debug`, `mtx_eval=trace`, ...).
//!   Nothing is installed when it is unset or invalid.
//! - `MTX_LOG_TREE`: any value switches to an indented span tree.
//!
//! Output goes to stderr so it never mixes with program output.

use std::sync::Once;

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Install the global subscriber. Later calls do nothing.
pub fn init_tracing() {
    INIT.call_once(|| {
        let Ok(filter) = EnvFilter::try_from_env("MTX_LOG") else {
            return;
        };

        let installed = if std::env::var_os("MTX_LOG_TREE").is_some() {
            let tree = tracing_tree::HierarchicalLayer::new(2)
                .with_targets(true)
                .with_writer(std::io::stderr);
            tracing_subscriber::registry()
                .with(filter)
                .with(tree)
                .try_init()
                .is_ok()
        } else {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(true)
                .with_writer(std::io::stderr)
                .try_init()
                .is_ok()
        };

        if installed {
            tracing::debug!("tracing initialized");
        }
    });
}
