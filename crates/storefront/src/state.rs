//! Application root.
//!
//! [`Storefront`] owns the configuration and the storage service. Managers
//! are cheap borrowed views over the storage and are handed out on demand.

use crate::config::StorefrontConfig;
use crate::error::Result;
use crate::seed;
use crate::services::{AuthManager, CartManager, CheckoutService, OrderManager, ProductManager};
use crate::storage::{FileBackend, Notices, StorageBackend, StorageService};

/// The storefront application.
#[derive(Debug)]
pub struct Storefront {
    config: StorefrontConfig,
    storage: StorageService,
}

impl Storefront {
    /// Open the profile in `config.data_file`.
    ///
    /// Installs seed data into an empty profile when `config.seed` is set.
    ///
    /// # Errors
    ///
    /// Returns an error if the data file exists but can't be read, or if
    /// seed data can't be built.
    pub fn open(config: &StorefrontConfig) -> Result<Self> {
        let backend = FileBackend::open(&config.data_file, config.storage_quota_bytes)?;
        tracing::info!(path = %backend.path().display(), "Opened data file");
        Self::with_backend(backend, config)
    }

    /// Build a storefront over an arbitrary backend.
    ///
    /// # Errors
    ///
    /// Returns an error if seed data can't be built.
    pub fn with_backend(backend: impl StorageBackend + 'static, config: &StorefrontConfig) -> Result<Self> {
        let storefront = Self {
            config: config.clone(),
            storage: StorageService::new(backend, config.namespace.clone()),
        };
        if config.seed {
            storefront.install_seed()?;
        }
        Ok(storefront)
    }

    /// An empty, unseeded in-memory storefront.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            config: StorefrontConfig {
                seed: false,
                ..StorefrontConfig::default()
            },
            storage: StorageService::in_memory(),
        }
    }

    /// Replace the sink for user-visible notices.
    #[must_use]
    pub fn with_notices(mut self, notices: impl Notices + 'static) -> Self {
        self.storage = self.storage.with_notices(notices);
        self
    }

    /// Install seed data if the catalogue is empty.
    ///
    /// # Errors
    ///
    /// Returns an error if a seed account can't be built.
    pub fn install_seed(&self) -> Result<bool> {
        Ok(seed::install_if_empty(&self.storage)?)
    }

    /// Delete everything in this storefront's namespace.
    pub fn reset(&self) {
        tracing::info!(namespace = self.storage.namespace(), "Clearing storefront data");
        self.storage.clear();
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub const fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    /// Get a reference to the storage service.
    #[must_use]
    pub const fn storage(&self) -> &StorageService {
        &self.storage
    }

    /// Product catalogue.
    #[must_use]
    pub const fn products(&self) -> ProductManager<'_> {
        ProductManager::new(&self.storage)
    }

    /// The profile's cart.
    #[must_use]
    pub const fn cart(&self) -> CartManager<'_> {
        CartManager::new(&self.storage)
    }

    /// Order history.
    #[must_use]
    pub const fn orders(&self) -> OrderManager<'_> {
        OrderManager::new(&self.storage)
    }

    /// Accounts and the current session.
    #[must_use]
    pub fn auth(&self) -> AuthManager<'_> {
        AuthManager::new(&self.storage, self.config.session_ttl())
    }

    /// Checkout over the current cart and session.
    #[must_use]
    pub fn checkout(&self) -> CheckoutService<'_> {
        CheckoutService::new(self.auth(), self.cart(), self.orders())
    }
}
