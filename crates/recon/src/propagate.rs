use mechbay_core::{ChassisData, TroopSpace, Unit};

/// Copy derived base-chassis attributes from base to variant.
///
/// Exactly one arm applies per pair; mixed-category pairs (which the
/// resolver's compatibility checks should already rule out) are a no-op.
pub fn propagate_chassis(base: &Unit, variant: &mut Unit) {
    match (&base.data, &mut variant.data) {
        (
            ChassisData::Ground { heat_sinks, .. },
            ChassisData::Ground { base_chassis_heat_sinks, .. },
        )
        | (
            ChassisData::Aerospace { heat_sinks, .. },
            ChassisData::Aerospace { base_chassis_heat_sinks, .. },
        ) => {
            *base_chassis_heat_sinks = *heat_sinks;
        }
        (
            ChassisData::Vehicle {
                troop_capacity: base_capacity,
                base_chassis_turret_weight: base_turret,
                base_chassis_turret2_weight: base_turret2,
                ..
            },
            ChassisData::Vehicle {
                troop_capacity,
                base_chassis_turret_weight,
                base_chassis_turret2_weight,
                transporters,
            },
        ) => {
            // Troop space beyond the chassis baseline is carried as a
            // chassis-fixed allocation sized to the excess.
            if *troop_capacity > *base_capacity {
                transporters.push(TroopSpace {
                    capacity: *troop_capacity - *base_capacity,
                    chassis_fixed: true,
                });
            }
            *base_chassis_turret_weight = *base_turret;
            *base_chassis_turret2_weight = *base_turret2;
        }
        _ => {}
    }
}
