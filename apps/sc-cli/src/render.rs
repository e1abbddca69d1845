//! Text renderings of system curves and section breakdowns.

use std::fmt::Write as _;

use clap::ValueEnum;
use sc_components::SectionHead;
use sc_core::UnitSystem;
use sc_system::SystemCurve;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Csv,
    Json,
}

#[derive(Debug, Serialize)]
struct CurveRow {
    flow_rate: f64,
    max_tdh: f64,
    min_tdh: f64,
}

#[derive(Debug, Serialize)]
struct CurveDocument<'a> {
    unit_system: UnitSystem,
    banded: bool,
    points: Vec<CurveRow>,
    #[serde(skip_serializing_if = "Option::is_none")]
    project: Option<&'a str>,
}

pub fn render_curve(
    curve: &SystemCurve,
    units: UnitSystem,
    format: OutputFormat,
    project_name: Option<&str>,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Table => Ok(curve_table(curve, units)),
        OutputFormat::Csv => Ok(curve_csv(curve)),
        OutputFormat::Json => {
            let doc = CurveDocument {
                unit_system: units,
                banded: curve.is_banded(),
                points: curve
                    .iter()
                    .map(|p| CurveRow {
                        flow_rate: p.flow_rate,
                        max_tdh: p.max_tdh,
                        min_tdh: p.min_tdh,
                    })
                    .collect(),
                project: project_name,
            };
            let mut out = serde_json::to_string_pretty(&doc)?;
            out.push('\n');
            Ok(out)
        }
    }
}

fn curve_csv(curve: &SystemCurve) -> String {
    let mut csv = String::from("flow_rate,max_tdh,min_tdh\n");
    for p in curve {
        let _ = writeln!(csv, "{},{},{}", p.flow_rate, p.max_tdh, p.min_tdh);
    }
    csv
}

fn curve_table(curve: &SystemCurve, units: UnitSystem) -> String {
    let flow = format!("Q [{}]", units.flow_label());
    let mut out = String::new();
    if curve.is_banded() {
        let max = format!("TDH max [{}]", units.length_label());
        let min = format!("TDH min [{}]", units.length_label());
        let _ = writeln!(out, "{flow:>14}  {max:>14}  {min:>14}");
        for p in curve {
            let _ = writeln!(
                out,
                "{:>14.4}  {:>14.4}  {:>14.4}",
                p.flow_rate, p.max_tdh, p.min_tdh
            );
        }
    } else {
        let tdh = format!("TDH [{}]", units.length_label());
        let _ = writeln!(out, "{flow:>14}  {tdh:>14}");
        for p in curve {
            let _ = writeln!(out, "{:>14.4}  {:>14.4}", p.flow_rate, p.tdh());
        }
    }
    out
}

pub fn breakdown_table(heads: &[SectionHead], units: UnitSystem) -> String {
    let banded = heads.iter().any(|h| h.static_max != h.static_min);
    let length = units.length_label();
    let mut out = String::new();
    let _ = write!(
        out,
        "{:>12} {:>12} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10}",
        format!("Q [{}]", units.flow_label()),
        "Re",
        "f",
        "static",
        "pressure",
        "velocity",
        "major",
        "minor",
    );
    if banded {
        let max = format!("TDH max [{length}]");
        let min = format!("TDH min [{length}]");
        let _ = writeln!(out, " {max:>14} {min:>14}");
    } else {
        let tdh = format!("TDH [{length}]");
        let _ = writeln!(out, " {tdh:>12}");
    }

    for h in heads {
        let static_col = if h.static_max == h.static_min {
            format!("{:.3}", h.static_max)
        } else {
            format!("{:.2}..{:.2}", h.static_min, h.static_max)
        };
        let _ = write!(
            out,
            "{:>12.4} {:>12.0} {:>10.5} {:>10} {:>10.3} {:>10.3} {:>10.3} {:>10.3}",
            h.flow_rate,
            h.reynolds,
            h.friction_factor,
            static_col,
            h.pressure,
            h.velocity,
            h.major,
            h.minor,
        );
        if banded {
            let _ = writeln!(out, " {:>14.3} {:>14.3}", h.max_tdh(), h.min_tdh());
        } else {
            let _ = writeln!(out, " {:>12.3}", h.max_tdh());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use sc_components::{Elevation, FrictionMethod, PipeSection, SectionParams};
    use sc_system::Pipeline;

    fn curve() -> SystemCurve {
        let pipeline = Pipeline::from_sections(vec![
            PipeSection::new(
                "a",
                SectionParams::new(100.0, 0.5, 0.0002, 1.1e-5, vec![0.5], 10.0),
            )
            .unwrap(),
        ]);
        pipeline
            .evaluate(10.0, FrictionMethod::Serghide, UnitSystem::Imperial)
            .unwrap()
    }

    #[test]
    fn csv_has_header_and_one_row_per_point() {
        let csv = render_curve(&curve(), UnitSystem::Imperial, OutputFormat::Csv, None).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "flow_rate,max_tdh,min_tdh");
        assert_eq!(lines.len(), 21);
        assert!(lines[20].starts_with("10,"));
    }

    #[test]
    fn json_is_parseable() {
        let json = render_curve(
            &curve(),
            UnitSystem::Imperial,
            OutputFormat::Json,
            Some("demo"),
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["unit_system"], "imperial");
        assert_eq!(value["project"], "demo");
        assert_eq!(value["points"].as_array().unwrap().len(), 20);
    }

    #[test]
    fn table_uses_unit_labels() {
        let table =
            render_curve(&curve(), UnitSystem::Imperial, OutputFormat::Table, None).unwrap();
        assert!(table.contains("TDH [ft]"));
        assert_eq!(table.lines().count(), 21);
    }

    fn breakdown(elevation: Elevation) -> String {
        let pipeline = Pipeline::from_sections(vec![
            PipeSection::new(
                "riser",
                SectionParams::new(100.0, 0.5, 0.0002, 1.1e-5, vec![0.5], 10.0)
                    .with_elevation(elevation),
            )
            .unwrap(),
        ]);
        let mut per_section = pipeline
            .evaluate_sections(10.0, FrictionMethod::Serghide, UnitSystem::Metric)
            .unwrap();
        breakdown_table(&per_section.remove(0), UnitSystem::Metric)
    }

    #[test]
    fn banded_breakdown_shows_both_totals() {
        let table = breakdown(Elevation::band(0.0, 2.0, 30.0, 34.0).unwrap());
        let header = table.lines().next().unwrap();
        assert!(header.contains("TDH max [m]"));
        assert!(header.contains("TDH min [m]"));
        assert_eq!(table.lines().count(), 21);

        // max and min totals differ by the static spread of 34 - 28 = 6
        let last: Vec<f64> = table
            .lines()
            .last()
            .unwrap()
            .split_whitespace()
            .rev()
            .take(2)
            .map(|v| v.parse().unwrap())
            .collect();
        assert!((last[1] - last[0] - 6.0).abs() < 1e-2);
    }

    #[test]
    fn point_breakdown_has_single_total() {
        let table = breakdown(Elevation::point(0.0, 10.0));
        let header = table.lines().next().unwrap();
        assert!(header.contains("TDH [m]"));
        assert!(!header.contains("TDH min"));
    }
}
