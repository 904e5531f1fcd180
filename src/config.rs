//! Mechanism for loading the particle species to be converted from a file

use crate::{numeric::Float, particle::Particle, Result};

use eyre::{ensure, eyre, Report, WrapErr};
use log::{info, warn};

use std::{fs, path::Path, str::FromStr};

/// Keyword which requests that the species be derived from an atomic number
const AUTO_MASS: &str = "auto";

/// Conversion configuration
///
/// In this simple file format, the first whitespace-delimited token of each
/// non-blank line is a configuration item, and everything after it on the line
/// is a free-form comment. Items are, in order:
///
/// - `mass_au`: mass number, or `auto` to derive the species from the next
///   item
/// - `charge_au`: charge number, or the atomic number of a fully ionized
///   nucleus if the mass number was `auto`
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Configuration {
    /// Species of the particles being converted
    pub particle: Particle,
}
//
impl Configuration {
    /// Load the configuration from a file, check it, and log it
    pub fn load(file_name: impl AsRef<Path>) -> Result<Self> {
        let file_name = file_name.as_ref();
        let config_str = fs::read_to_string(file_name)
            .wrap_err_with(|| format!("Failed to read {}", file_name.display()))?;
        let config = config_str.parse::<Self>()?;
        info!(
            "Loaded configuration from {}: {}",
            file_name.display(),
            config.particle
        );
        Ok(config)
    }
}
//
impl FromStr for Configuration {
    type Err = Report;

    /// Parse and check the configuration
    fn from_str(config_str: &str) -> Result<Self> {
        // Configuration items are the first non-whitespace chunk of text on
        // each line. Blank lines are ignored.
        let mut config_iter = config_str
            .lines()
            .filter_map(|line| line.split_whitespace().next());

        // This closure fetches the next configuration item, tagging it with
        // the name of the field which it is supposed to fill, and handling
        // unexpected end-of-file too.
        let mut next_item = |name: &'static str| -> Result<ConfigItem> {
            config_iter
                .next()
                .map(|data| ConfigItem::new(name, data))
                .ok_or_else(|| eyre!("Missing configuration of {}", name))
        };

        // Decode the configuration items into a particle species
        let mass_item = next_item("mass_au")?;
        let particle = if mass_item.data.eq_ignore_ascii_case(AUTO_MASS) {
            let atomic_number = next_item("atomic_number")?.parse::<i32>()?;
            let particle = Particle::nucleus(atomic_number);
            ensure!(
                particle.mass_au > 0.0,
                "Atomic number {} is not supported",
                atomic_number
            );
            particle
        } else {
            Particle::new(
                mass_item.parse::<Float>()?,
                next_item("charge_au")?.parse::<Float>()?,
            )
        };

        // Mass must be physical, the charge merely finite
        ensure!(
            particle.mass_au.is_finite() && particle.mass_au >= 0.0,
            "Mass number must be a non-negative number, got {}",
            particle.mass_au
        );
        ensure!(
            particle.charge_au.is_finite(),
            "Charge number must be finite, got {}",
            particle.charge_au
        );

        // Neutral species are accepted, but every rigidity will be NaN
        if particle.charge_au == 0.0 {
            warn!("Configured particle {} is neutral", particle);
        }

        Ok(Self { particle })
    }
}

/// A value from the configuration file, tagged with the struct field which it
/// is supposed to map for error reporting purposes.
struct ConfigItem<'data> {
    name: &'static str,
    data: &'data str,
}
//
impl<'data> ConfigItem<'data> {
    /// Build a config item from a struct field tag and raw iterator data
    fn new(name: &'static str, data: &'data str) -> Self {
        Self { name, data }
    }

    /// Parse this data using Rust's standard parsing logic
    fn parse<T: FromStr>(self) -> Result<T>
    where
        <T as FromStr>::Err: std::error::Error + Send + Sync + 'static,
    {
        self.data
            .parse::<T>()
            .wrap_err_with(|| format!("Could not parse configuration of {}", self.name))
    }
}
