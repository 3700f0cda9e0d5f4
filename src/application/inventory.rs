//! Inventory queries used by `instances` and `ips`.

use crate::domain::entities::Instance;
use crate::domain::ports::InventoryProvider;
use crate::error::ShipitResult;

pub struct InventoryQuery<I: InventoryProvider> {
    inventory: I,
}

impl<I: InventoryProvider> InventoryQuery<I> {
    pub fn new(inventory: I) -> Self {
        Self { inventory }
    }

    pub fn instances(&self, region: &str) -> ShipitResult<Vec<Instance>> {
        self.inventory.running_instances(region)
    }

    /// Public addresses of the running fleet; instances without one are left out
    pub fn ips(&self, region: &str) -> ShipitResult<Vec<String>> {
        Ok(self
            .instances(region)?
            .into_iter()
            .filter_map(|i| i.public_ip)
            .collect())
    }
}
