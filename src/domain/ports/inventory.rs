//! Inventory port - lists the running fleet of a region.

use crate::domain::entities::Instance;
use crate::error::ShipitResult;

/// Cloud provider instance inventory.
pub trait InventoryProvider {
    /// Instances in state `running` in `region`, in provider order.
    ///
    /// Any provider failure is `ShipitError::Provider`.
    fn running_instances(&self, region: &str) -> ShipitResult<Vec<Instance>>;
}

impl<T: InventoryProvider + ?Sized> InventoryProvider for &T {
    fn running_instances(&self, region: &str) -> ShipitResult<Vec<Instance>> {
        (**self).running_instances(region)
    }
}
