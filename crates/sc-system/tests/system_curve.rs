//! System-curve behaviour of whole pipelines.

use proptest::prelude::*;
use sc_components::{Elevation, FrictionMethod, PipeSection, SAMPLE_COUNT, SectionParams};
use sc_core::{Tolerances, UnitSystem, nearly_equal};
use sc_system::{Pipeline, SystemError};

fn reference_section() -> PipeSection {
    PipeSection::new(
        "reference",
        SectionParams::new(100.0, 0.5, 0.0002, 1.1e-5, vec![0.5], 10.0),
    )
    .unwrap()
}

#[test]
fn reference_scenario_is_monotonic() {
    let mut pipeline = Pipeline::new();
    pipeline.add(reference_section());

    let curve = pipeline
        .evaluate(10.0, FrictionMethod::Serghide, UnitSystem::Imperial)
        .unwrap();

    assert_eq!(curve.len(), SAMPLE_COUNT);
    assert_eq!(curve.points()[SAMPLE_COUNT - 1].flow_rate, 10.0);
    assert!(curve.points()[0].tdh() > 0.0);
    assert!(
        curve
            .points()
            .windows(2)
            .all(|w| w[1].tdh() > w[0].tdh() && w[1].flow_rate > w[0].flow_rate)
    );
}

#[test]
fn pipeline_target_overrides_section_targets() {
    // Section sized for 10, pipeline evaluated at 4: shared range ends at 4.
    let pipeline = Pipeline::from_sections(vec![reference_section()]);
    let curve = pipeline
        .evaluate(4.0, FrictionMethod::Serghide, UnitSystem::Imperial)
        .unwrap();
    assert_eq!(curve.points()[SAMPLE_COUNT - 1].flow_rate, 4.0);
}

#[test]
fn static_and_pressure_shift_the_curve() {
    let base = Pipeline::from_sections(vec![reference_section()]);
    let lifted = Pipeline::from_sections(vec![
        PipeSection::new(
            "lifted",
            SectionParams::new(100.0, 0.5, 0.0002, 1.1e-5, vec![0.5], 10.0)
                .with_elevation(Elevation::point(0.0, 20.0))
                .with_pressures(0.0, 10.0),
        )
        .unwrap(),
    ]);

    let units = UnitSystem::Imperial;
    let c0 = base.evaluate(10.0, FrictionMethod::Serghide, units).unwrap();
    let c1 = lifted.evaluate(10.0, FrictionMethod::Serghide, units).unwrap();
    for (a, b) in c0.iter().zip(c1.iter()) {
        assert!((b.tdh() - a.tdh() - (20.0 + 23.1)).abs() < 1e-9);
    }
}

#[test]
fn metric_and_imperial_differ_only_by_constants() {
    let pipeline = Pipeline::from_sections(vec![reference_section()]);
    let imperial = pipeline
        .evaluate(10.0, FrictionMethod::Serghide, UnitSystem::Imperial)
        .unwrap();
    let metric = pipeline
        .evaluate(10.0, FrictionMethod::Serghide, UnitSystem::Metric)
        .unwrap();
    // Pure friction/minor head scales with 1/g.
    let ratio = UnitSystem::Imperial.gravity() / UnitSystem::Metric.gravity();
    for (m, i) in metric.iter().zip(imperial.iter()) {
        assert!((m.tdh() / i.tdh() - ratio).abs() < 1e-9);
    }
}

#[test]
fn capillary_curve_at_tiny_target_stays_consistent() {
    let capillary = PipeSection::new(
        "capillary",
        SectionParams::new(1.0, 1e-3, 0.0, 1e-6, vec![0.5], 1e-8),
    )
    .unwrap();
    let pipeline = Pipeline::from_sections(vec![capillary]);

    let curve = pipeline
        .evaluate(1e-8, FrictionMethod::Serghide, UnitSystem::Metric)
        .unwrap();
    let per_section = pipeline
        .evaluate_sections(1e-8, FrictionMethod::Serghide, UnitSystem::Metric)
        .unwrap();

    assert_eq!(curve.len(), SAMPLE_COUNT);
    assert_eq!(curve.points()[0].flow_rate, 1e-8 / SAMPLE_COUNT as f64);
    assert_eq!(curve.points()[SAMPLE_COUNT - 1].flow_rate, 1e-8);
    for (point, head) in curve.iter().zip(&per_section[0]) {
        assert_eq!(point.flow_rate, head.flow_rate);
        assert_eq!(point.max_tdh, head.max_tdh());
    }
    assert!(curve.points().windows(2).all(|w| w[1].tdh() > w[0].tdh()));
}

#[test]
fn section_management_errors() {
    let mut pipeline = Pipeline::new();
    assert!(matches!(
        pipeline.evaluate(10.0, FrictionMethod::Serghide, UnitSystem::Metric),
        Err(SystemError::EmptyPipeline)
    ));
    assert_eq!(
        pipeline.remove_at(0).unwrap_err(),
        SystemError::IndexOutOfRange { index: 0, len: 0 }
    );
}

fn arb_section() -> impl Strategy<Value = PipeSection> {
    (
        1.0_f64..500.0,
        0.05_f64..2.0,
        0.0_f64..0.001,
        1e-6_f64..1e-4,
        prop::collection::vec(0.0_f64..5.0, 1..4),
        -20.0_f64..20.0,
    )
        .prop_map(|(length, diameter, roughness, nu, ks, lift)| {
            PipeSection::new(
                "arb",
                SectionParams::new(length, diameter, roughness, nu, ks, 10.0)
                    .with_elevation(Elevation::point(0.0, lift)),
            )
            .unwrap()
        })
}

proptest! {
    #[test]
    fn section_order_does_not_change_curve(
        sections in prop::collection::vec(arb_section(), 1..6),
        target in 0.1_f64..50.0,
    ) {
        let forward = Pipeline::from_sections(sections.clone());
        let reversed: Pipeline = sections.into_iter().rev().collect();

        let a = forward.evaluate(target, FrictionMethod::Serghide, UnitSystem::Imperial).unwrap();
        let b = reversed.evaluate(target, FrictionMethod::Serghide, UnitSystem::Imperial).unwrap();

        prop_assert_eq!(a.len(), b.len());
        let tol = Tolerances { abs: 1e-9, rel: 1e-9 };
        for (p, q) in a.iter().zip(b.iter()) {
            prop_assert_eq!(p.flow_rate, q.flow_rate);
            prop_assert!(nearly_equal(p.max_tdh, q.max_tdh, tol));
            prop_assert!(nearly_equal(p.min_tdh, q.min_tdh, tol));
        }
    }

    #[test]
    fn shuffled_sections_give_same_curve(
        (sections, shuffled) in prop::collection::vec(arb_section(), 1..6)
            .prop_flat_map(|sections| (Just(sections.clone()), Just(sections).prop_shuffle())),
        target in 0.1_f64..50.0,
    ) {
        let original = Pipeline::from_sections(sections);
        let permuted = Pipeline::from_sections(shuffled);

        let a = original.evaluate(target, FrictionMethod::Serghide, UnitSystem::Metric).unwrap();
        let b = permuted.evaluate(target, FrictionMethod::Serghide, UnitSystem::Metric).unwrap();

        let tol = Tolerances { abs: 1e-9, rel: 1e-9 };
        for (p, q) in a.iter().zip(b.iter()) {
            prop_assert_eq!(p.flow_rate, q.flow_rate);
            prop_assert!(nearly_equal(p.max_tdh, q.max_tdh, tol));
            prop_assert!(nearly_equal(p.min_tdh, q.min_tdh, tol));
        }
    }

    #[test]
    fn curve_length_matches_range(
        sections in prop::collection::vec(arb_section(), 1..4),
        target in 0.1_f64..50.0,
    ) {
        let pipeline = Pipeline::from_sections(sections);
        let curve = pipeline.evaluate(target, FrictionMethod::Serghide, UnitSystem::Metric).unwrap();
        prop_assert_eq!(curve.len(), SAMPLE_COUNT);
    }
}
