//! Movement rates per turn, from agility bonus and size.

/// Size of an average human; movement is measured relative to it.
pub const AVERAGE_SIZE: i32 = 4;

/// Movement rates in metres.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase", default)
)]
pub struct Movement {
    pub half: i32,
    pub full: i32,
    pub charge: i32,
    pub run: i32,
}

impl Movement {
    /// Rates for an agility bonus and size: half = AB + size - 4, then ×2, ×3, ×6.
    pub const fn compute(agility_bonus: i32, size: i32) -> Self {
        let half = agility_bonus.saturating_add(size).saturating_sub(AVERAGE_SIZE);
        Self {
            half,
            full: half.saturating_mul(2),
            charge: half.saturating_mul(3),
            run: half.saturating_mul(6),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_size_moves_at_agility_bonus() {
        assert_eq!(
            Movement::compute(3, AVERAGE_SIZE),
            Movement {
                half: 3,
                full: 6,
                charge: 9,
                run: 18,
            }
        );
    }

    #[test]
    fn size_shifts_every_rate() {
        let hulking = Movement::compute(3, 5);
        assert_eq!(hulking.half, 4);
        assert_eq!(hulking.run, 24);
    }
}
