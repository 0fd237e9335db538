//! Section records assembled from tabulated data, and the derived quantities
//! computed from them
use approx::assert_relative_eq;
use girder_core::{
    density, Density, DimensionsAndProperties, Kilogram, Metre, Millimetre, QuantityError,
    RadiusOfGyration, SectionCategory, SectionError, SectionGeometry, SectionTable, SteelSection,
    SurfaceArea, Volume,
};

#[ctor::ctor]
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// UB 203x133x25, 6 m long, in millimetres and kilograms
fn ub_203x133x25() -> SteelSection<Millimetre<f64>, Kilogram<f64>> {
    let geometry = SectionGeometry {
        mass_per_metre_length: 25.1,
        cross_sectional_area: 32.0,
        surface_area_per_metre: 0.915,
        surface_area_per_tonne: 36.5,
        web_thickness: 5.7,
        flange_thickness: 7.8,
        root_radius: 7.6,
        depth_between_fillets: 172.4,
        end_clearance_for_detailing: 5.0,
        longitudinal_notch_dimension: 70.0,
        vertical_notch_dimension: 16.0,
        radius_of_gyration: RadiusOfGyration { yy: 8.56, zz: 3.1 },
    };
    let properties = DimensionsAndProperties::new(
        Millimetre::new(203.2),
        Millimetre::new(133.2),
        Millimetre::new(6000.0),
        Kilogram::new(150.6),
        geometry,
    );
    SteelSection::universal_beam("203x133x25", false, properties)
}

#[test]
fn test_record_keeps_one_unit_system() {
    let ub = ub_203x133x25();
    let props = ub.properties();

    assert_eq!(ub.to_string(), "Universal Beam");
    assert_relative_eq!(props.depth().to_metre().value(), 0.2032, max_relative = 1e-15);
    assert_relative_eq!(props.total_mass().to_tonne().value(), 0.1506, max_relative = 1e-15);

    let w = props.linear_mass().unwrap().convert::<Kilogram<f64>, Metre<f64>>();
    assert_relative_eq!(w.value(), 25.1, epsilon = 1e-9);
    assert_relative_eq!(w.value(), props.geometry().mass_per_metre_length, epsilon = 1e-9);
}

#[test]
fn test_surface_area_ratios_from_geometry() {
    let ub = ub_203x133x25();
    let props = ub.properties();

    // Painted perimeter of 915 mm per metre run
    let coated = SurfaceArea::<Millimetre<f64>>::new(915.0 * props.length().value());
    let per_metre = coated.per_metre(props.length()).unwrap();
    assert_relative_eq!(per_metre, props.geometry().surface_area_per_metre, epsilon = 1e-12);

    let per_tonne = SurfaceArea::<Metre<f64>>::new(per_metre * 6.0)
        .per_tonne(props.total_mass())
        .unwrap();
    assert_relative_eq!(per_tonne, 36.454, epsilon = 1e-3);
    assert_relative_eq!(per_tonne, props.geometry().surface_area_per_tonne, epsilon = 0.1);
}

#[test]
fn test_density_of_a_member() {
    let ub = ub_203x133x25();
    let props = ub.properties();

    // 32 cm² = 3200 mm²
    let area = SurfaceArea::<Millimetre<f64>>::new(3200.0);
    let volume = Volume::from_area(area, props.length()).convert::<Metre<f64>>();
    let rho = density(props.total_mass(), volume).unwrap();
    assert_relative_eq!(rho.value(), 7843.75, epsilon = 1e-9);
    assert!(rho < Density::steel());
    assert_relative_eq!(rho.mass_of(volume).value(), 150.6, max_relative = 1e-12);

    let nothing = density(props.total_mass(), Volume::<Metre<f64>>::new(0.0));
    assert_eq!(nothing, Err(QuantityError::ZeroVolume));
}

#[test]
fn test_table_lookup() {
    let mut table = SectionTable::new();
    table.insert(ub_203x133x25()).unwrap();

    let found = table.get("203x133x25").unwrap();
    assert_eq!(found.category(), SectionCategory::UniversalBeam);
    assert_eq!(found.properties().geometry().radius_of_gyration.yy, 8.56);

    assert_eq!(
        table.insert(ub_203x133x25()),
        Err(SectionError::DuplicateDesignation("203x133x25".to_string()))
    );
    assert_eq!(
        table.get("254x146x31").unwrap_err().to_string(),
        "no section with designation '254x146x31'"
    );
}

#[test]
fn test_record_deserialises_from_tabulated_json() {
    let json = r#"{
        "designation": "203x203x46",
        "category": "UC",
        "isNonStandard": false,
        "properties": {
            "depth": 203.2,
            "width": 203.6,
            "length": 1.0,
            "totalMass": 46.1,
            "massPerMetreLength": 46.1,
            "crossSectionalArea": 58.7,
            "surfaceAreaPerMetre": 1.19,
            "surfaceAreaPerTonne": 25.8,
            "webThickness": 7.2,
            "flangeThickness": 11.0,
            "rootRadius": 10.2,
            "depthBetweenFillets": 160.8,
            "endClearanceForDetailing": 6.0,
            "longitudinalNotchDimension": 110.0,
            "verticalNotchDimension": 22.0,
            "radiusOfGyration": { "yy": 8.82, "zz": 5.13 }
        }
    }"#;

    let uc: SteelSection<Millimetre<f64>, Kilogram<f64>> = serde_json::from_str(json).unwrap();
    assert_eq!(uc.designation(), "203x203x46");
    assert_eq!(uc.to_string(), "Universal Column");
    assert_eq!(uc.properties().width(), Millimetre::new(203.6));
    assert_eq!(uc.properties().total_mass(), Kilogram::new(46.1));
    assert_eq!(uc.properties().geometry().flange_thickness, 11.0);

    let round_trip: SteelSection<Millimetre<f64>, Kilogram<f64>> =
        serde_json::from_str(&serde_json::to_string(&uc).unwrap()).unwrap();
    assert_eq!(round_trip, uc);
}
