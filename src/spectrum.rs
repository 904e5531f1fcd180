//! Flux spectra, and their conversion between energy and rigidity coordinates
//!
//! A spectrum pairs each abscissa value with a differential flux density. The
//! conversion conserves the flux within each interval, which is why densities
//! are scaled by the Jacobian dKE/dR instead of being copied over.

use crate::{
    conversion::{announce, energy_from_rigidity, rigidity_from_energy},
    jacobian::dke_over_dr_at,
    numeric::{functions::div, narrow, widen, Float},
    particle::Particle,
    scheduling,
    series::{series, IntoSeries, Series},
    Result,
};

use eyre::ensure;
use log::trace;

use std::{
    fmt::{self, Display},
    marker::PhantomData,
};

/// Coordinate system in which a spectrum is expressed
pub trait Coordinate {
    /// Name of the abscissa column
    const ABSCISSA: &'static str;

    /// Name of the density column
    const DENSITY: &'static str;
}

/// Rigidity coordinates (GV)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rigidity {}
//
impl Coordinate for Rigidity {
    const ABSCISSA: &'static str = "Rigidity";
    const DENSITY: &'static str = "Rigidity distribution values";
}

/// Kinetic energy coordinates (MeV)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Energy {}
//
impl Coordinate for Energy {
    const ABSCISSA: &'static str = "Energy";
    const DENSITY: &'static str = "Energy distribution values";
}

/// Two-column table of abscissa values and their flux densities
///
/// Rows appear in the order of the input rows they were computed from.
///
#[derive(Clone, Debug, PartialEq)]
pub struct Spectrum<C: Coordinate> {
    abscissa: Series,
    density: Series,
    coordinate: PhantomData<C>,
}

/// Spectrum in rigidity space
pub type RigiditySpectrum = Spectrum<Rigidity>;

/// Spectrum in kinetic energy space
pub type EnergySpectrum = Spectrum<Energy>;
//
impl<C: Coordinate> Spectrum<C> {
    /// Build a spectrum from (abscissa, density) rows
    pub fn from_rows(rows: impl IntoIterator<Item = (Float, Float)>) -> Self {
        let (abscissa, density): (Vec<Float>, Vec<Float>) = rows.into_iter().unzip();
        Self {
            abscissa: Series::new(abscissa),
            density: Series::new(density),
            coordinate: PhantomData,
        }
    }

    /// Abscissa column
    pub fn abscissa(&self) -> &Series {
        &self.abscissa
    }

    /// Density column
    pub fn density(&self) -> &Series {
        &self.density
    }

    /// Look up a column by its name
    pub fn column(&self, name: &str) -> Option<&Series> {
        if name == C::ABSCISSA {
            Some(&self.abscissa)
        } else if name == C::DENSITY {
            Some(&self.density)
        } else {
            None
        }
    }

    /// Iterate over (abscissa, density) rows
    pub fn rows(&self) -> impl Iterator<Item = (Float, Float)> + '_ {
        self.abscissa
            .iter()
            .copied()
            .zip(self.density.iter().copied())
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.abscissa.len()
    }

    /// Truth that there are no rows
    pub fn is_empty(&self) -> bool {
        self.abscissa.is_empty()
    }

    /// Split the table into its (abscissa, density) columns
    pub fn into_columns(self) -> (Series, Series) {
        (self.abscissa, self.density)
    }
}
//
impl Spectrum<Rigidity> {
    /// Rigidities (GV)
    pub fn rigidity(&self) -> &Series {
        &self.abscissa
    }

    /// Flux densities per unit rigidity
    pub fn rigidity_distribution_values(&self) -> &Series {
        &self.density
    }
}
//
impl Spectrum<Energy> {
    /// Kinetic energies (MeV)
    pub fn energy(&self) -> &Series {
        &self.abscissa
    }

    /// Flux densities per unit kinetic energy
    pub fn energy_distribution_values(&self) -> &Series {
        &self.density
    }
}
//
impl<C: Coordinate> Display for Spectrum<C> {
    /// Tab-separated table with a header line
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(fmt, "{}\t{}", C::ABSCISSA, C::DENSITY)?;
        for (abscissa, density) in self.rows() {
            writeln!(fmt, "{}\t{}", abscissa, density)?;
        }
        Ok(())
    }
}

/// Pair up two columns, which must have the same length
fn zip_columns(abscissa: &Series, density: &Series) -> Result<Vec<(Float, Float)>> {
    ensure!(
        abscissa.len() == density.len(),
        "Spectrum columns are misaligned ({} abscissa values, {} densities)",
        abscissa.len(),
        density.len()
    );
    Ok(abscissa
        .iter()
        .copied()
        .zip(density.iter().copied())
        .collect())
}

/// Convert a kinetic energy spectrum (MeV, flux per MeV) into a rigidity
/// spectrum (GV, flux per GV)
///
/// Both inputs must have the same number of values, with matching indices.
/// Rows which cannot be converted are emitted as NaN without affecting the
/// other rows.
///
pub fn energy_spec_to_rigidity_spec(
    kinetic_energy_mev: impl IntoSeries,
    flux_per_energy: impl IntoSeries,
    particle: Particle,
) -> Result<RigiditySpectrum> {
    let rows = zip_columns(&series(kinetic_energy_mev), &series(flux_per_energy))?;
    let attributes = particle.attributes();
    announce("energy spectrum rows", rows.len(), particle, &attributes);
    let converted = scheduling::map_rows(&rows, |&(energy, flux)| {
        let energy = widen(energy);
        let rigidity = energy
            .as_ref()
            .and_then(|e| rigidity_from_energy(e, &attributes));
        let jacobian = energy
            .as_ref()
            .and_then(|e| dke_over_dr_at(e, &attributes));
        let density = jacobian.zip(widen(flux)).map(|(j, f)| &j * &f);
        (narrow(rigidity.as_ref()), narrow(density.as_ref()))
    });
    Ok(Spectrum::from_rows(converted))
}

/// Convert a rigidity spectrum (GV, flux per GV) into a kinetic energy
/// spectrum (MeV, flux per MeV)
///
/// Both inputs must have the same number of values, with matching indices.
/// At zero rigidity, dKE/dR vanishes and the energy density is undefined: such
/// rows get a NaN density, the other rows are converted normally.
///
pub fn rigidity_spec_to_energy_spec(
    rigidity_gv: impl IntoSeries,
    flux_per_rigidity: impl IntoSeries,
    particle: Particle,
) -> Result<EnergySpectrum> {
    let rows = zip_columns(&series(rigidity_gv), &series(flux_per_rigidity))?;
    let attributes = particle.attributes();
    announce("rigidity spectrum rows", rows.len(), particle, &attributes);
    let converted = scheduling::map_rows(&rows, |&(rigidity, flux)| {
        let energy = widen(rigidity).and_then(|r| energy_from_rigidity(&r, &attributes));
        let jacobian = energy
            .as_ref()
            .and_then(|e| dke_over_dr_at(e, &attributes));
        let density = jacobian
            .zip(widen(flux))
            .and_then(|(j, f)| div(&f, &j));
        if density.is_none() {
            trace!("Energy density is undefined at rigidity {} GV", rigidity);
        }
        (narrow(energy.as_ref()), narrow(density.as_ref()))
    });
    Ok(Spectrum::from_rows(converted))
}
