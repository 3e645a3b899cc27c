use std::collections::HashMap;
use std::f64::consts::PI;

use crate::config::constants::PIN_OFFSET_RADIUS;
use crate::data::geo::{GeoPoint, Plottable};

/// A map marker position resolved for one entity. Entities that did not
/// collide keep their original position; colliding ones get a spread
/// position on a circle around the shared point.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPin<'a, T> {
    pub entity: &'a T,
    pub position: GeoPoint,
}

impl<'a, T: Plottable> ResolvedPin<'a, T> {
    pub fn id(&self) -> i64 {
        self.entity.pin_id()
    }
}

// Grouping key: exact bit patterns of the raw coordinates. Two positions
// differing by any sub-epsilon amount are distinct groups and never spread,
// even if visually indistinguishable.
fn position_key(position: &GeoPoint) -> (u64, u64) {
    (position.latitude.to_bits(), position.longitude.to_bits())
}

/// Spread entities sharing an exact coordinate pair evenly around that point
/// so every plottable entity renders at a distinct position.
///
/// Entities without a usable position (latitude or longitude missing, zero,
/// or NaN) are silently dropped. A collision group of n entities is placed at
/// angles 2*pi*i/n on a circle of radius `PIN_OFFSET_RADIUS`, in encounter
/// order, so the spread points stay centered on the original coordinate.
///
/// Output order is group first-encounter order, not input order; callers
/// must not rely on the two matching once collisions exist.
pub fn resolve_pins<T: Plottable>(entities: &[T]) -> Vec<ResolvedPin<'_, T>> {
    let mut group_order: Vec<(u64, u64)> = Vec::new();
    let mut groups: HashMap<(u64, u64), Vec<(&T, GeoPoint)>> = HashMap::new();

    for entity in entities {
        let position = match entity.plot_position() {
            Some(p) => p,
            None => continue,
        };
        let key = position_key(&position);
        let group = groups.entry(key).or_insert_with(|| {
            group_order.push(key);
            Vec::new()
        });
        group.push((entity, position));
    }

    let mut resolved = Vec::with_capacity(entities.len());

    for key in group_order {
        let group = &groups[&key];
        if let [(entity, position)] = group.as_slice() {
            resolved.push(ResolvedPin {
                entity: *entity,
                position: *position,
            });
            continue;
        }

        let count = group.len() as f64;
        for (index, (entity, position)) in group.iter().enumerate() {
            let angle = (index as f64 / count) * 2.0 * PI;
            resolved.push(ResolvedPin {
                entity: *entity,
                position: GeoPoint::new(
                    position.latitude + angle.cos() * PIN_OFFSET_RADIUS,
                    position.longitude + angle.sin() * PIN_OFFSET_RADIUS,
                ),
            });
        }
    }

    resolved
}
