//! Total physical volume of a shipment, from volumes the shop already
//! reports. Independent of the packing path: no unit conversion, no
//! eligibility check.

use boxpack_core::ShipmentItem;

/// Sum of each shippable line's reported total volume plus the volume of
/// every extra option, whether or not the line itself is shippable.
pub fn total_volume(items: &[ShipmentItem]) -> f64 {
    items
        .iter()
        .map(|item| {
            let line = if item.is_shippable() {
                item.total_volume
            } else {
                0.0
            };
            let extras: f64 = item.auxiliary_items.iter().map(|extra| extra.volume).sum();
            line + extras
        })
        .sum()
}
