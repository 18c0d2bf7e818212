//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use bookshop_commerce::prelude::*;

use crate::config::{ShopConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: ShopConfig,
    /// Where the configuration came from, if a file was found.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = match config_path {
            Some(path) => {
                let path = resolve_path(&cwd, path);
                (ShopConfig::load(&path)?, Some(path))
            }
            None => match find_config(&cwd) {
                Some(path) => (ShopConfig::load(&path)?, Some(path)),
                None => (ShopConfig::default(), None),
            },
        };

        tracing::debug!(config = ?config_path, "loaded configuration");
        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    pub fn currency(&self) -> Currency {
        self.config.store.currency
    }

    /// Format an amount for display.
    pub fn money(&self, amount: f64) -> String {
        Money::from_decimal(amount, self.currency()).display()
    }

    /// A fresh cart using the configured quantity policy.
    pub fn new_cart(&self) -> CartStore {
        CartStore::with_policy(self.config.checkout.quantity_policy)
    }

    /// Open checkout for a cart using the configured validation and timeout.
    pub fn begin_checkout(&self, cart: &CartStore) -> CheckoutFlow {
        let flow = CheckoutFlow::begin(cart, self.config.checkout.validation);
        match self.config.checkout.submit_timeout() {
            Some(timeout) => flow.with_submit_timeout(timeout),
            None => flow,
        }
    }

    /// Order sink recording into `book` with the configured latency.
    pub fn order_sink(&self, book: &OrderBook) -> SimulatedOrderSink {
        SimulatedOrderSink::with_latency(book.clone(), self.config.checkout.submit_latency())
    }
}

/// Find a config file in the directory tree.
fn find_config(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        for name in CONFIG_FILE_NAMES {
            let candidate = current.join(name);
            if candidate.is_file() {
                return Some(candidate);
            }
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Resolve a path relative to the working directory.
fn resolve_path(cwd: &Path, path: &str) -> PathBuf {
    let path = PathBuf::from(path);
    if path.is_absolute() {
        path
    } else {
        cwd.join(path)
    }
}
