// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Coil names and the full-step phase table.
//!
//! | Phase | Energized pair |
//! | ----- | -------------- |
//! | 0 | A1 + A2 |
//! | 1 | A2 + B1 |
//! | 2 | B1 + B2 |
//! | 3 | B2 + A1 |

/// One of the four coil control lines.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Coil {
    A1,
    A2,
    B1,
    B2,
}

impl Coil {
    pub const ALL: [Coil; 4] = [Coil::A1, Coil::A2, Coil::B1, Coil::B2];
}

/// Index into the phase table. Always in `0..4`.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct Phase(u8);

impl Phase {
    pub const COUNT: u8 = 4;

    pub const ALL: [Phase; 4] = [Phase(0), Phase(1), Phase(2), Phase(3)];

    /// Build a phase from any integer, reduced mod 4.
    #[inline]
    pub const fn new(index: u8) -> Self {
        Self(index % Self::COUNT)
    }

    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// The phase one clockwise step after this one.
    #[inline]
    pub const fn next(self) -> Self {
        Self((self.0 + 1) % Self::COUNT)
    }

    /// The two coils this phase drives.
    pub const fn pair(self) -> (Coil, Coil) {
        match self.0 {
            0 => (Coil::A1, Coil::A2),
            1 => (Coil::A2, Coil::B1),
            2 => (Coil::B1, Coil::B2),
            _ => (Coil::B2, Coil::A1),
        }
    }

    /// Whether `coil` is part of this phase's pair.
    #[inline]
    pub fn drives(self, coil: Coil) -> bool {
        let (first, second) = self.pair();
        coil == first || coil == second
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_steps_return_to_start() {
        for start in Phase::ALL {
            let mut phase = start;
            for _ in 0..Phase::COUNT {
                phase = phase.next();
            }
            assert_eq!(phase, start);
        }
    }

    #[test]
    fn out_of_range_index_wraps() {
        assert_eq!(Phase::new(4), Phase::new(0));
        assert_eq!(Phase::new(7).index(), 3);
        assert_eq!(Phase::new(255).index(), 3);
    }

    #[test]
    fn every_phase_drives_exactly_two_coils() {
        for phase in Phase::ALL {
            let driven = Coil::ALL.iter().filter(|&&c| phase.drives(c)).count();
            assert_eq!(driven, 2, "{:?}", phase);
        }
    }

    #[test]
    fn consecutive_phases_share_one_coil() {
        for phase in Phase::ALL {
            let next = phase.next();
            let shared = Coil::ALL
                .iter()
                .filter(|&&c| phase.drives(c) && next.drives(c))
                .count();
            assert_eq!(shared, 1);
        }
    }

    #[test]
    fn table_matches_wiring() {
        assert_eq!(Phase::new(0).pair(), (Coil::A1, Coil::A2));
        assert_eq!(Phase::new(1).pair(), (Coil::A2, Coil::B1));
        assert_eq!(Phase::new(2).pair(), (Coil::B1, Coil::B2));
        assert_eq!(Phase::new(3).pair(), (Coil::B2, Coil::A1));
    }
}
