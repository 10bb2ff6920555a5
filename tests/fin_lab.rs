use approx::assert_relative_eq;
use twine_core::Model;
use twine_fin::models::thermal::fin::{
    BoundaryConditions, ConfigError, DomainError, ExperimentConfig, FinError, FinExperiment,
    FinGeometry, FinInput, Material, MeasurementConfig, Parameter, ProbePosition, ProfileConfig,
    Shape, compute_fin_result,
};
use uom::si::{
    f64::{HeatTransfer, Length},
    heat_transfer::watt_per_square_meter_kelvin,
    length::meter,
    thermodynamic_temperature::degree_celsius,
};

/// Parses the selections a host UI would hand over as strings.
fn select(shape: &str, material: &str) -> Result<(FinGeometry, Material), FinError> {
    let shape: Shape = shape.parse()?;
    let material: Material = material.parse()?;
    Ok((FinGeometry::lab_default(shape), material))
}

#[test]
fn every_lab_selection_produces_a_reading() {
    for shape in ["rectangular", "cylindrical", "conical"] {
        for material in ["aluminum", "copper", "steel"] {
            let (geometry, material) = select(shape, material).unwrap();
            let result = compute_fin_result(
                &geometry,
                material,
                &BoundaryConditions::default(),
                ProbePosition::from_millimeters(40.0),
            )
            .unwrap();

            let exact = result.exact_temperature.get::<degree_celsius>();
            let measured = result.simulated_temperature.get::<degree_celsius>();
            assert!(exact > 25.0 && exact < 100.0, "{shape}/{material}: {exact}");
            assert!((measured - exact).abs() <= 0.03 * exact + 1e-9);
            assert_eq!(result.profile.len(), ProfileConfig::DEFAULT_SAMPLES);
        }
    }
}

#[test]
fn rectangular_aluminum_reference_case() {
    let geometry = FinGeometry::Rectangular {
        length: Length::new::<meter>(0.1),
        thickness: Length::new::<meter>(0.005),
    };
    let boundary = BoundaryConditions::default();

    let at = |x: f64| {
        compute_fin_result(
            &geometry,
            Material::Aluminum,
            &boundary,
            ProbePosition::new(Length::new::<meter>(x)),
        )
        .unwrap()
    };

    let base = at(0.0);
    assert_relative_eq!(base.exact_temperature.get::<degree_celsius>(), 100.0, epsilon = 1e-9);

    let tip = at(0.1);
    let m_l = tip.characteristic_parameter * 0.1;
    assert_relative_eq!(m_l, 1.3968, epsilon = 1e-4);
    assert_relative_eq!(
        tip.exact_temperature.get::<degree_celsius>(),
        25.0 + 75.0 / m_l.cosh(),
        epsilon = 1e-9
    );
}

#[test]
fn moving_the_probe_back_repeats_the_reading() {
    let experiment = FinExperiment::default();
    let input_at = |mm: f64| FinInput {
        probe_position: ProbePosition::from_millimeters(mm),
        ..FinInput::default()
    };

    let first = experiment.call(&input_at(40.0)).unwrap();
    let elsewhere = experiment.call(&input_at(70.0)).unwrap();
    let again = experiment.call(&input_at(40.0)).unwrap();

    assert_eq!(first.simulated_temperature, again.simulated_temperature);
    assert_ne!(first.simulated_temperature, elsewhere.simulated_temperature);
}

#[test]
fn unknown_selections_fail_fast() {
    assert_eq!(
        select("rectangular", "brass").unwrap_err(),
        FinError::Config(ConfigError::UnknownMaterial("brass".into()))
    );
    assert_eq!(
        select("hexagonal", "steel").unwrap_err(),
        FinError::Config(ConfigError::UnknownShape("hexagonal".into()))
    );
}

#[test]
fn zero_convection_is_rejected_for_every_shape() {
    let boundary = BoundaryConditions {
        convection_coefficient: HeatTransfer::new::<watt_per_square_meter_kelvin>(0.0),
        ..BoundaryConditions::default()
    };

    for shape in [Shape::Rectangular, Shape::Cylindrical, Shape::Conical] {
        let err = compute_fin_result(
            &FinGeometry::lab_default(shape),
            Material::Aluminum,
            &boundary,
            ProbePosition::from_millimeters(10.0),
        )
        .unwrap_err();

        match err {
            FinError::Domain(DomainError::InvalidParameter { parameter, .. }) => {
                assert_eq!(parameter, Parameter::ConvectionCoefficient);
            }
            other => panic!("expected a domain error, got {other:?}"),
        }
    }
}

#[test]
fn noiseless_experiment_reads_exactly() {
    let experiment = FinExperiment::new(ExperimentConfig {
        measurement: MeasurementConfig::new(0.0, MeasurementConfig::DEFAULT_SEED_SCALE).unwrap(),
        ..ExperimentConfig::default()
    });

    let result = experiment.call(&FinInput::default()).unwrap();
    assert_relative_eq!(
        result.simulated_temperature.get::<degree_celsius>(),
        result.exact_temperature.get::<degree_celsius>(),
        epsilon = 1e-9
    );
}

#[test]
fn tip_entered_in_millimetres_is_accepted() {
    for length_cm in 1..=100_u32 {
        let length = Length::new::<meter>(f64::from(length_cm) / 100.0);
        let geometry = FinGeometry::Rectangular {
            length,
            thickness: Length::new::<meter>(0.005),
        };
        let tip = ProbePosition::from_millimeters(f64::from(length_cm) * 10.0);

        let result = compute_fin_result(
            &geometry,
            Material::Aluminum,
            &BoundaryConditions::default(),
            tip,
        );
        assert!(result.is_ok(), "L = {length_cm} cm: {result:?}");
    }
}
