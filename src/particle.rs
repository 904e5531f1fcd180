//! Particle species and the attributes derived from them

use crate::{
    constants::{atomic_mass, elementary_charge, joules_per_mev, proton_rest_mass, speed_of_light},
    numeric::{functions::*, narrow, widen, Float, Precise},
};

use num_traits::Zero;

use std::fmt::{self, Display};

/// Species of the particles being converted
///
/// The mass is expressed in units of the proton rest mass and the charge in
/// units of the elementary charge. Both are plain numbers so that exotic
/// species (partially ionized nuclei, antiparticles...) can be described.
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    /// Mass number (proton masses)
    pub mass_au: Float,

    /// Charge number (elementary charges, negative for negative particles)
    pub charge_au: Float,
}
//
impl Particle {
    /// Proton (or hydrogen nucleus)
    pub const PROTON: Self = Self::new(1.0, 1.0);

    /// Alpha particle (helium nucleus)
    pub const ALPHA: Self = Self::new(4.0, 2.0);

    /// Describe a species from its mass and charge numbers
    pub const fn new(mass_au: Float, charge_au: Float) -> Self {
        Self { mass_au, charge_au }
    }

    /// Fully ionized nucleus of a given atomic number
    ///
    /// Negative atomic numbers follow the electron convention of
    /// [`atomic_mass`], with a charge of -1. Atomic numbers outside of the
    /// table produce a massless species, which callers can detect by checking
    /// `mass_au == 0.0`.
    ///
    pub fn nucleus(atomic_number: i32) -> Self {
        let charge_au = if atomic_number < 0 {
            -1.0
        } else {
            atomic_number as Float
        };
        Self::new(atomic_mass(atomic_number), charge_au)
    }

    /// Compute the charge and rest energy of this species
    pub fn attributes(&self) -> ParticleAttributes {
        determine_particle_attributes(self.mass_au, self.charge_au)
    }
}
//
impl Default for Particle {
    fn default() -> Self {
        Self::PROTON
    }
}
//
impl Display for Particle {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "A={} Z={}", self.mass_au, self.charge_au)
    }
}

/// Absolute charge and rest energy of a particle species
///
/// These are recomputed for every conversion from the species description.
/// A `None` field means that the corresponding species number could not be
/// represented (NaN or infinite).
///
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleAttributes {
    /// Signed particle charge (C)
    pub charge: Option<Precise>,

    /// Particle rest energy m₀c² (J)
    pub rest_energy: Option<Precise>,
}
//
impl ParticleAttributes {
    /// Magnitude of the particle charge (C), which is what rigidity uses
    pub fn absolute_charge(&self) -> Option<Precise> {
        self.charge.as_ref().map(Precise::abs)
    }

    /// Whether the charge is zero, making rigidity meaningless
    pub fn is_neutral(&self) -> bool {
        self.charge.as_ref().map_or(false, Zero::is_zero)
    }

    /// Rest energy in MeV, narrowed for display purposes
    pub fn rest_energy_mev(&self) -> Float {
        let mev = self
            .rest_energy
            .as_ref()
            .and_then(|e| div(e, &joules_per_mev()));
        narrow(mev.as_ref())
    }
}

/// Derive the charge (C) and rest energy (J) of a species from its mass
/// number and charge number, in decimal precision
pub fn determine_particle_attributes(mass_au: Float, charge_au: Float) -> ParticleAttributes {
    let rest_mass = widen(mass_au).map(|m| &m * &proton_rest_mass());
    ParticleAttributes {
        charge: widen(charge_au).map(|z| &z * &elementary_charge()),
        rest_energy: rest_mass.map(|m| &m * &sqr(&speed_of_light())),
    }
}
