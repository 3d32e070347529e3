//! Expansion-deck discovery: driver descriptors and the registry that runs
//! one-time initialization.

use heapless::Vec;

use crate::{Error, Result};

/// Identity and resource claims a deck driver registers with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeckInfo {
    /// Vendor id from the deck's identification memory; 0 when absent.
    pub vid: u8,
    /// Product id from the deck's identification memory; 0 when absent.
    pub pid: u8,
    /// Registration name, unique per registry.
    pub name: &'static str,
    /// Bitmask of shared peripherals the deck claims; 0 claims nothing.
    pub used_periph: u32,
    /// Bitmask of GPIO pins the deck claims; 0 claims nothing.
    pub used_gpio: u32,
}

/// A pluggable expansion-deck driver.
pub trait DeckDriver: Sync {
    /// The driver's descriptor.
    fn info(&self) -> &DeckInfo;

    /// One-time initialization entry point. The registry calls it exactly
    /// once at system start, strictly before any runtime traffic reaches
    /// the driver.
    fn init(&self);

    /// Self-test, run after init. Drivers without one pass trivially.
    fn test(&self) -> bool {
        true
    }
}

/// Fixed-capacity table of discovered deck drivers.
pub struct DeckRegistry<const N: usize> {
    drivers: Vec<&'static dyn DeckDriver, N>,
}

impl<const N: usize> DeckRegistry<N> {
    /// Empty registry.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            drivers: Vec::new(),
        }
    }

    /// Register a discovered driver.
    ///
    /// # Errors
    ///
    /// [`Error::DeckAlreadyRegistered`] if a driver of the same name is
    /// present, [`Error::DeckRegistryFull`] when capacity is exhausted.
    pub fn register(&mut self, driver: &'static dyn DeckDriver) -> Result<()> {
        let name = driver.info().name;
        if self.find(name).is_some() {
            return Err(Error::DeckAlreadyRegistered { name });
        }
        self.drivers.push(driver).map_err(|_| Error::DeckRegistryFull)
    }

    /// Run every registered driver's init, in registration order.
    pub fn init_all(&self) {
        for driver in &self.drivers {
            debug!("deck {} init", driver.info().name);
            driver.init();
        }
    }

    /// Run every driver's self-test; `true` when all pass.
    pub fn test_all(&self) -> bool {
        self.drivers.iter().all(|driver| driver.test())
    }

    /// Look up a registered driver by name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&'static dyn DeckDriver> {
        self.drivers
            .iter()
            .copied()
            .find(|driver| driver.info().name == name)
    }

    /// Number of registered drivers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.drivers.len()
    }

    /// `true` when nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.drivers.is_empty()
    }
}

impl<const N: usize> Default for DeckRegistry<N> {
    fn default() -> Self {
        Self::new()
    }
}
