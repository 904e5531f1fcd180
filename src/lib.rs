//! Rigidity tools: conversions between particle energy and rigidity
//!
//!
//! # Introduction (for the physicist)
//!
//! Charged particles moving through magnetic fields, such as cosmic rays
//! entering the geomagnetic field, are naturally described by their magnetic
//! rigidity R = pc / |q|, expressed in GV. Detectors and models, on the other
//! hand, often speak in terms of kinetic energy per particle, in MeV.
//!
//! This library converts kinetic energies into rigidities and back, for any
//! particle species described by its mass number and charge number. It also
//! converts differential flux spectra between the two coordinates. The flux
//! within each interval is conserved, so densities get multiplied by the
//! Jacobian dKE/dR = β |q| instead of being copied over.
//!
//!
//! # Introduction (for the numerical guy)
//!
//! At low kinetic energy, the total energy of a particle is very close to its
//! rest energy and `E_tot² - E_rest²` cancels catastrophically in double
//! precision. All intermediate computations are therefore carried out on
//! arbitrary-precision decimals, and results are only narrowed to floating
//! point when they are handed back to the caller.
//!
//!
//! # Introduction (for the computer guy)
//!
//! Every conversion is a pure function of its inputs and of one input row, so
//! there is no state to share. Inputs can be scalars or any sequence of
//! numbers (see [`IntoSeries`]). Numerical domain problems, like a negative
//! squared momentum or a neutral particle, show up as NaN in the affected rows
//! only. Structural problems, like spectrum columns of different lengths, are
//! reported as errors before any computation happens.
//!
//! Build-time features select single precision outputs (`f32`) and parallel
//! processing of large inputs (`multi-threading`).

#![warn(missing_docs)]

pub mod config;
pub mod constants;
mod conversion;
mod jacobian;
pub mod numeric;
mod particle;
mod scheduling;
mod series;
pub mod spectrum;

pub use crate::{
    config::Configuration,
    constants::atomic_mass,
    conversion::{energy_to_rigidity, rigidity_to_energy},
    jacobian::dke_over_dr,
    numeric::Float,
    particle::{determine_particle_attributes, Particle, ParticleAttributes},
    series::{series, IntoSeries, Scalar, Series},
    spectrum::{
        energy_spec_to_rigidity_spec, rigidity_spec_to_energy_spec, EnergySpectrum,
        RigiditySpectrum, Spectrum,
    },
};

/// We'll use eyre's type-erased result type throughout the library
pub type Result<T> = eyre::Result<T>;
