use serde::{Deserialize, Serialize};

/// Equipment slot on a unit. `Unlocated` is the sentinel for equipment
/// that occupies no slot (ammo in storage, dumped items) and is never
/// touched by reconciliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Location {
    Unlocated,
    // Mobile-ground slots
    Head,
    CenterTorso,
    LeftTorso,
    RightTorso,
    LeftArm,
    RightArm,
    LeftLeg,
    RightLeg,
    // Vehicle slots
    Body,
    Front,
    LeftSide,
    RightSide,
    Rear,
    Turret,
    SecondTurret,
    // Aerospace slots
    Nose,
    LeftWing,
    RightWing,
    Aft,
    Fuselage,
}

impl Location {
    pub fn is_located(&self) -> bool {
        *self != Location::Unlocated
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Unlocated => "None",
            Self::Head => "Head",
            Self::CenterTorso => "Center Torso",
            Self::LeftTorso => "Left Torso",
            Self::RightTorso => "Right Torso",
            Self::LeftArm => "Left Arm",
            Self::RightArm => "Right Arm",
            Self::LeftLeg => "Left Leg",
            Self::RightLeg => "Right Leg",
            Self::Body => "Body",
            Self::Front => "Front",
            Self::LeftSide => "Left Side",
            Self::RightSide => "Right Side",
            Self::Rear => "Rear",
            Self::Turret => "Turret",
            Self::SecondTurret => "Second Turret",
            Self::Nose => "Nose",
            Self::LeftWing => "Left Wing",
            Self::RightWing => "Right Wing",
            Self::Aft => "Aft",
            Self::Fuselage => "Fuselage",
        };
        write!(f, "{name}")
    }
}
