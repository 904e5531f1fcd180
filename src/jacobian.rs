//! Derivative of kinetic energy with respect to rigidity
//!
//! Differential fluxes transform between energy and rigidity coordinates
//! through the change of variables rule `j_R(R) = j_E(E) · |dE/dR|`. With
//! `R = pc / |q|` and `dE/dp = v = βc`, this derivative is `β |q|`.

use crate::{
    constants::{joules_per_mev, volts_per_gv},
    conversion::{momentum_energy, total_energy},
    numeric::{functions::*, narrow, widen, Precise},
    particle::ParticleAttributes,
    scheduling,
    series::{series, IntoSeries, Series},
};

use num_traits::Zero;

/// dKE/dR (MeV/GV) of a particle of given kinetic energy (MeV)
///
/// This is zero for particles at rest, and undefined for neutral particles
/// (which have no rigidity) or when the kinetic energy is unphysical.
///
pub(crate) fn dke_over_dr_at(
    kinetic_energy_mev: &Precise,
    attributes: &ParticleAttributes,
) -> Option<Precise> {
    let rest_energy = attributes.rest_energy.as_ref()?;
    let charge = attributes.absolute_charge().filter(|q| !q.is_zero())?;
    let total = total_energy(kinetic_energy_mev, rest_energy);
    let pc = momentum_energy(&total, rest_energy)?;
    let beta = div(&pc, &total)?;
    div(&(&(&beta * &charge) * &volts_per_gv()), &joules_per_mev())
}

/// Compute dKE/dR (MeV/GV) at each given kinetic energy (MeV)
///
/// The particle attributes are typically obtained from
/// [`Particle::attributes`](crate::Particle::attributes). Undefined rows are
/// reported as NaN.
///
pub fn dke_over_dr(
    kinetic_energy_mev: impl IntoSeries,
    attributes: &ParticleAttributes,
) -> Series {
    let energies = series(kinetic_energy_mev);
    scheduling::map_rows(&energies, |&energy| {
        let jacobian = widen(energy).and_then(|e| dke_over_dr_at(&e, attributes));
        narrow(jacobian.as_ref())
    })
    .into_iter()
    .collect()
}
