//! Physical constants and the standard atomic mass table
//!
//! The constants are built as exact decimals, so that the precise layer does
//! not inherit any binary rounding from them.

use crate::numeric::{decimal, Float, Precise};

/// Proton rest mass (kg)
pub fn proton_rest_mass() -> Precise {
    decimal(167_262_192, -35)
}

/// Elementary charge (C)
pub fn elementary_charge() -> Precise {
    decimal(160_217_663, -27)
}

/// Speed of light in vacuum (m/s)
pub fn speed_of_light() -> Precise {
    decimal(299_792_458, 0)
}

/// Joules in one MeV
pub fn joules_per_mev() -> Precise {
    &elementary_charge() * &decimal(1, 6)
}

/// Volts in one GV
pub fn volts_per_gv() -> Precise {
    decimal(1, 9)
}

/// Number of elements covered by the atomic mass table
pub const NUM_ELEMENTS: usize = 92;

/// Standard atomic masses, indexed by atomic number minus one
#[rustfmt::skip]
const ATOMIC_MASSES: [Float; NUM_ELEMENTS] = [
      1.0,   4.0,   6.9,   9.0,  10.8,  12.0,  14.0,  16.0,  19.0,  20.2,
     23.0,  24.3,  27.0,  28.1,  31.0,  32.1,  35.4,  39.9,  39.1,  40.1,
     44.9,  47.9,  50.9,  52.0,  54.9,  55.8,  58.9,  58.7,  63.5,  65.4,
     69.7,  72.6,  74.9,  79.0,  79.9,  83.8,  85.5,  87.6,  88.9,  91.2,
     92.9,  95.9,  97.0, 101.0, 102.9, 106.4, 107.9, 112.4, 114.8, 118.7,
    121.8, 127.6, 126.9, 131.3, 132.9, 137.3, 138.9, 140.1, 140.9, 144.2,
    145.0, 150.4, 152.0, 157.3, 158.3, 162.5, 164.9, 167.3, 168.9, 173.0,
    175.0, 178.5, 180.9, 183.9, 186.2, 190.2, 192.2, 195.1, 197.0, 200.6,
    204.4, 207.2, 209.0, 209.0, 210.0, 222.0, 223.0, 226.0, 227.0, 232.0,
    231.0, 238.0,
];

/// Standard atomic mass of an element, in atomic mass units
///
/// Negative atomic numbers denote the electron, which is given a mass of 1.0
/// in this convention. Atomic numbers above 92, and zero, are not supported
/// and yield 0.0.
///
pub fn atomic_mass(atomic_number: i32) -> Float {
    if atomic_number < 0 {
        return 1.0;
    }
    usize::try_from(atomic_number)
        .ok()
        .and_then(|z| z.checked_sub(1))
        .and_then(|idx| ATOMIC_MASSES.get(idx).copied())
        .unwrap_or(0.0)
}
