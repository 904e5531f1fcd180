//! Pointwise conversions between kinetic energy and magnetic rigidity
//!
//! Both directions go through the relativistic invariant
//! `E_tot² = (pc)² + E_rest²`, with rigidity defined as `pc / |q|`. Rigidity
//! therefore never depends on the sign of the particle charge.

use crate::{
    constants::{joules_per_mev, volts_per_gv},
    numeric::{functions::*, narrow, widen, Precise},
    particle::{Particle, ParticleAttributes},
    scheduling,
    series::{series, IntoSeries, Series},
};

use log::{debug, warn};
use num_traits::Zero;

/// Total energy (J) of a particle of given kinetic energy (MeV)
pub(crate) fn total_energy(kinetic_energy_mev: &Precise, rest_energy: &Precise) -> Precise {
    &(kinetic_energy_mev * &joules_per_mev()) + rest_energy
}

/// Momentum times c (J) of a particle of given total energy (J)
///
/// Undefined when the total energy is below the rest energy in magnitude,
/// which happens for sufficiently negative kinetic energies.
///
pub(crate) fn momentum_energy(total_energy: &Precise, rest_energy: &Precise) -> Option<Precise> {
    sqrt(&(&sqr(total_energy) - &sqr(rest_energy)))
}

/// Rigidity (GV) of a particle of given kinetic energy (MeV)
pub(crate) fn rigidity_from_energy(
    kinetic_energy_mev: &Precise,
    attributes: &ParticleAttributes,
) -> Option<Precise> {
    let rest_energy = attributes.rest_energy.as_ref()?;
    let charge = attributes.absolute_charge()?;
    let total = total_energy(kinetic_energy_mev, rest_energy);
    let pc = momentum_energy(&total, rest_energy)?;
    div(&pc, &charge).and_then(|rigidity| div(&rigidity, &volts_per_gv()))
}

/// Kinetic energy (MeV) of a particle of given rigidity (GV)
///
/// `E_tot - E_rest` is evaluated as `(pc)² / (E_tot + E_rest)`, which is the
/// same quantity without the cancellation, and exactly zero at zero rigidity.
///
pub(crate) fn energy_from_rigidity(
    rigidity_gv: &Precise,
    attributes: &ParticleAttributes,
) -> Option<Precise> {
    let rest_energy = attributes.rest_energy.as_ref()?;
    let charge = attributes.absolute_charge()?;
    let pc2 = sqr(&(&(rigidity_gv * &charge) * &volts_per_gv()));
    if pc2.is_zero() {
        return Some(Precise::zero());
    }
    let total = sqrt(&(&pc2 + &sqr(rest_energy)))?;
    let kinetic_energy = div(&pc2, &(&total + rest_energy))?;
    div(&kinetic_energy, &joules_per_mev())
}

/// Log the conversion being performed, and complain about neutral species
pub(crate) fn announce(
    what: &str,
    num_rows: usize,
    particle: Particle,
    attributes: &ParticleAttributes,
) {
    debug!("Converting {} {} for particle {}", num_rows, what, particle);
    if attributes.is_neutral() {
        warn!("Particle {} has no charge, so its rigidity is undefined", particle);
    }
}

/// Convert particle kinetic energies (MeV) into rigidities (GV)
///
/// Kinetic energies so negative that the total energy falls below the rest
/// energy yield NaN, as does a neutral particle. Other rows are unaffected.
///
pub fn energy_to_rigidity(kinetic_energy_mev: impl IntoSeries, particle: Particle) -> Series {
    let energies = series(kinetic_energy_mev);
    let attributes = particle.attributes();
    announce("energies to rigidities", energies.len(), particle, &attributes);
    scheduling::map_rows(&energies, |&energy| {
        let rigidity = widen(energy).and_then(|e| rigidity_from_energy(&e, &attributes));
        narrow(rigidity.as_ref())
    })
    .into_iter()
    .collect()
}

/// Convert particle rigidities (GV) into kinetic energies (MeV)
///
/// Any finite rigidity has a well-defined, non-negative kinetic energy. The
/// sign of the rigidity is irrelevant since only `(pc)²` enters the result.
///
pub fn rigidity_to_energy(rigidity_gv: impl IntoSeries, particle: Particle) -> Series {
    let rigidities = series(rigidity_gv);
    let attributes = particle.attributes();
    announce("rigidities to energies", rigidities.len(), particle, &attributes);
    scheduling::map_rows(&rigidities, |&rigidity| {
        let energy = widen(rigidity).and_then(|r| energy_from_rigidity(&r, &attributes));
        narrow(energy.as_ref())
    })
    .into_iter()
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::{reals, Float};

    #[test]
    fn reference_proton_rigidities() {
        let rigidities = energy_to_rigidity([250.0, 578.5, 1056.8, 5123.9], Particle::PROTON);
        assert_eq!(rigidities.rounded(2), series([0.73, 1.19, 1.76, 5.99]));
    }

    #[test]
    fn reference_round_trip() {
        let energies = [250.0, 578.5, 1056.8, 5123.9];
        let rigidities = energy_to_rigidity(energies, Particle::PROTON);
        let back = rigidity_to_energy(&rigidities, Particle::PROTON);
        assert_eq!(back.rounded(1), series(energies));
    }

    #[test]
    fn low_energy_is_not_lost_to_cancellation() {
        // 1 eV protons: non-relativistic limit R = sqrt(2 m T) / q
        let rigidity = energy_to_rigidity(1e-6, Particle::PROTON)[0];
        let expected = (2.0 * 938.272_088 * 1e-6 as Float).sqrt() / 1000.0;
        assert!(((rigidity - expected) / expected).abs() < 1e-6);
        let energy = rigidity_to_energy(rigidity, Particle::PROTON)[0];
        assert!(((energy - 1e-6) / 1e-6).abs() < 1e-5);
    }

    #[test]
    fn zero_energy_is_zero_rigidity() {
        assert_eq!(energy_to_rigidity(0, Particle::PROTON)[0], 0.0);
        assert_eq!(rigidity_to_energy(0, Particle::PROTON)[0], 0.0);
    }

    #[test]
    fn scalar_and_sequence_agree() {
        let scalar = energy_to_rigidity(1000.0, Particle::ALPHA);
        let sequence = energy_to_rigidity([1000.0], Particle::ALPHA);
        assert_eq!(scalar.len(), 1);
        assert_eq!(scalar, sequence);
    }

    #[test]
    fn charge_sign_is_irrelevant() {
        let energies = [10.0, 100.0, 1000.0];
        let positive = energy_to_rigidity(energies, Particle::new(1.0, 1.0));
        let negative = energy_to_rigidity(energies, Particle::new(1.0, -1.0));
        assert_eq!(positive, negative);
        let back = rigidity_to_energy(&negative, Particle::new(1.0, -1.0));
        assert_eq!(back, rigidity_to_energy(&positive, Particle::PROTON));
    }

    #[test]
    fn rigidity_sign_is_irrelevant() {
        let forward = rigidity_to_energy([1.5, 3.0], Particle::PROTON);
        let backward = rigidity_to_energy([-1.5, -3.0], Particle::PROTON);
        assert_eq!(forward, backward);
        assert!(forward.iter().all(|&e| e > 0.0));
    }

    #[test]
    fn unphysical_energies_are_nan() {
        // Total energy below the rest energy makes (pc)² negative
        let rigidities = energy_to_rigidity([-500.0, 100.0], Particle::PROTON);
        assert!(rigidities[0].is_nan());
        assert!(rigidities[1] > 0.0);

        let rigidities = energy_to_rigidity([reals::NAN, reals::INFINITY, 1.0], Particle::PROTON);
        assert!(rigidities[0].is_nan());
        assert!(rigidities[1].is_nan());
        assert!(!rigidities[2].is_nan());
    }

    #[test]
    fn neutral_particles_have_no_rigidity() {
        let rigidities = energy_to_rigidity([1.0, 10.0], Particle::new(1.0, 0.0));
        assert!(rigidities.iter().all(|r| r.is_nan()));
        let energies = rigidity_to_energy([1.0, 10.0], Particle::new(1.0, 0.0));
        assert!(energies.iter().all(|&e| e == 0.0));
    }

    #[test]
    fn massless_particles() {
        // For massless particles, pc = E so R[GV] = E[MeV] / (1000 Z)
        let rigidities = energy_to_rigidity([1000.0, 2000.0], Particle::new(0.0, 2.0));
        assert!((rigidities[0] - 0.5).abs() < 1e-9);
        assert!((rigidities[1] - 1.0).abs() < 1e-9);
    }

    #[test]
    fn empty_input() {
        assert!(energy_to_rigidity(Vec::<Float>::new(), Particle::PROTON).is_empty());
        assert!(rigidity_to_energy(Series::default(), Particle::PROTON).is_empty());
    }
}
