//! Reference values for the public conversion interface

use rigidity_tools::{
    atomic_mass, dke_over_dr, energy_spec_to_rigidity_spec, energy_to_rigidity,
    rigidity_spec_to_energy_spec, rigidity_to_energy, series, Configuration, Float, Particle,
    Series,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn round_to(x: Float, decimals: i32) -> Float {
    let scale = (10.0 as Float).powi(decimals);
    (x * scale).round() / scale
}

#[test]
fn atomic_masses() {
    assert_eq!(atomic_mass(12), 24.3);
    assert_eq!(atomic_mass(-1), 1.0);
    assert_eq!(atomic_mass(93), 0.0);
}

#[test]
fn rigidity_conversion() {
    init_logging();
    let energies = [250.0, 578.5, 1056.8, 5123.9];
    let rigidities = energy_to_rigidity(energies, Particle::new(1.0, 1.0));
    assert_eq!(rigidities.rounded(2).into_vec(), vec![0.73, 1.19, 1.76, 5.99]);
}

#[test]
fn rigidity_and_energy_conversion() {
    init_logging();
    let energies = [250.0, 578.5, 1056.8, 5123.9];
    let rigidities = energy_to_rigidity(energies, Particle::PROTON);
    let back = rigidity_to_energy(rigidities, Particle::PROTON);
    assert_eq!(back.rounded(1), series(energies));
}

#[test]
fn energy_spec_to_rigidity_spec_reference() {
    init_logging();
    let spectrum = energy_spec_to_rigidity_spec(
        [1000, 2000, 3000, 4000, 5000],
        [1.0, 0.5, 0.2, 0.1, 0.01],
        Particle::PROTON,
    )
    .unwrap();
    let rigidity = spectrum.column("Rigidity").unwrap();
    let density = spectrum.column("Rigidity distribution values").unwrap();
    assert_eq!(round_to(rigidity[2], 2), 3.82);
    assert_eq!(round_to(density[2], 2), 194.24);
}

#[test]
fn rigidity_spec_to_energy_spec_from_linspace() {
    init_logging();
    let rigidities: Series = (0..19).map(|i| i as Float * 10.0 / 18.0).collect();
    let spectrum =
        rigidity_spec_to_energy_spec(&rigidities, &rigidities, Particle::PROTON).unwrap();
    assert_eq!(spectrum.len(), rigidities.len());
    assert!(spectrum.energy_distribution_values()[0].is_nan());
    assert!(spectrum.energy_distribution_values()[1..]
        .iter()
        .all(|d| d.is_finite()));
}

#[test]
fn both_spectral_conversions() {
    init_logging();
    let energies = [1000, 2000, 3000, 4000, 5000];
    let fluxes = [1.0, 0.5, 0.2, 0.1, 0.01];
    for particle in [Particle::PROTON, Particle::ALPHA, Particle::nucleus(26)] {
        let rigidity = energy_spec_to_rigidity_spec(energies, fluxes, particle).unwrap();
        let energy = rigidity_spec_to_energy_spec(
            rigidity.rigidity(),
            rigidity.rigidity_distribution_values(),
            particle,
        )
        .unwrap();
        assert_eq!(energy.energy().rounded(2), series(energies));
        assert_eq!(energy.energy_distribution_values().rounded(2), series(fluxes));
    }
}

#[test]
fn flux_is_conserved_between_coordinates() {
    // Integrate the same power law over the same physical interval in both
    // coordinate systems with the trapezoidal rule
    init_logging();
    let energies: Series = (0..=2000).map(|i| 100.0 + i as Float).collect();
    let fluxes: Series = energies.iter().map(|e| e.powf(-2.7)).collect();
    let spectrum = energy_spec_to_rigidity_spec(&energies, &fluxes, Particle::ALPHA).unwrap();

    let trapezoid = |xs: &[Float], ys: &[Float]| -> Float {
        xs.windows(2)
            .zip(ys.windows(2))
            .map(|(x, y)| 0.5 * (x[1] - x[0]) * (y[0] + y[1]))
            .sum()
    };
    let energy_flux = trapezoid(&energies, &fluxes);
    let rigidity_flux = trapezoid(
        spectrum.rigidity(),
        spectrum.rigidity_distribution_values(),
    );
    assert!(((rigidity_flux - energy_flux) / energy_flux).abs() < 1e-3);
}

#[test]
fn jacobian_is_exposed() {
    let attributes = Particle::PROTON.attributes();
    let jacobian = dke_over_dr([0.0, 3000.0], &attributes);
    assert_eq!(jacobian[0], 0.0);
    assert_eq!(round_to(jacobian[1], 1), 971.2);
}

#[test]
fn configured_species() {
    init_logging();
    let config = "auto   atomic number follows\n2\n"
        .parse::<Configuration>()
        .unwrap();
    let from_config = energy_to_rigidity(1000.0, config.particle);
    let explicit = energy_to_rigidity(1000.0, Particle::ALPHA);
    assert_eq!(from_config, explicit);
}
