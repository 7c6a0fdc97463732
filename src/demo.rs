//! Demo scenarios
//!
//! Walks through the vector operations with the configured inputs and
//! renders one line per result. Dynamic-vector size failures are part of
//! the output rather than an abort, since showing them is the point.

use std::fmt::Display;

use vecmath_core::{angle_deg, cross, distance, DVecd, Vector3d};

use crate::config::AppConfig;

/// Formats values with the configured precision
struct Printer {
    precision: Option<usize>,
}

impl Printer {
    fn show<D: Display>(&self, value: &D) -> String {
        match self.precision {
            Some(precision) => format!("{:.*}", precision, value),
            None => value.to_string(),
        }
    }

    fn show_result<D: Display>(&self, result: &vecmath_core::Result<D>) -> String {
        match result {
            Ok(value) => self.show(value),
            Err(e) => format!("error: {}", e),
        }
    }
}

/// Run every scenario and return the rendered lines
pub fn run(config: &AppConfig) -> vecmath_core::Result<Vec<String>> {
    let printer = Printer {
        precision: config.display.precision,
    };
    let scenario = &config.scenario;
    let v = DVecd::from(scenario.vector.clone());
    let w = DVecd::from(scenario.other.clone());
    let m = DVecd::from(scenario.mismatched.clone());
    let s = scenario.scale;

    log::info!(
        "Running demo with sizes v={}, w={}, m={}",
        v.size(),
        w.size(),
        m.size()
    );

    let mut lines = vec![
        format!("v = {}", printer.show(&v)),
        format!("w = {}", printer.show(&w)),
        format!("v + w = {}", printer.show_result(&(&v + &w))),
        format!("v - w = {}", printer.show_result(&(&v - &w))),
        format!("v . w = {}", printer.show_result(&v.dot(&w))),
        format!("v * {} = {}", s, printer.show(&(&v * s))),
        format!("|v| = {}", printer.show(&v.magnitude())),
        format!("unit(v) = {}", printer.show(&v.unit())),
        format!("|unit(v)| = {}", printer.show(&v.unit().magnitude())),
        format!("distance(v, w) = {}", printer.show_result(&distance(&v, &w))),
        format!("angle(v, w) = {} deg", printer.show_result(&angle_deg(&v, &w))),
    ];

    let mismatched = &v + &m;
    if let Err(e) = &mismatched {
        log::debug!("Expected failure for mismatched operands: {}", e);
    }
    lines.push(format!("v + m = {}", printer.show_result(&mismatched)));

    let x = Vector3d::unit_x();
    let y = Vector3d::unit_y();
    let diagonal = x + y;
    lines.push(format!("x × y = {}", printer.show(&cross(&x, &y))));
    lines.push(format!("distance(x, y) = {}", printer.show(&distance(&x, &y)?)));
    lines.push(format!(
        "angle(x + y, x) = {} deg",
        printer.show(&angle_deg(&diagonal, &x)?)
    ));

    log::info!("Demo produced {} lines", lines.len());
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line<'a>(lines: &'a [String], prefix: &str) -> &'a str {
        lines
            .iter()
            .find(|l| l.starts_with(prefix))
            .map(String::as_str)
            .unwrap_or_else(|| panic!("missing line starting with {:?}", prefix))
    }

    #[test]
    fn test_default_scenario() {
        let lines = run(&AppConfig::default()).unwrap();
        assert_eq!(line(&lines, "v = "), "v = [1, 2, 3, 4]");
        assert_eq!(line(&lines, "v + w"), "v + w = [3, 5, 7, 9]");
        assert_eq!(line(&lines, "v - w"), "v - w = [-1, -1, -1, -1]");
        assert_eq!(line(&lines, "v . w"), "v . w = 40");
        assert_eq!(line(&lines, "v * 2"), "v * 2 = [2, 4, 6, 8]");
        assert_eq!(line(&lines, "distance(v, w)"), "distance(v, w) = 2");
        assert_eq!(line(&lines, "x × y"), "x × y = [0, 0, 1]");
    }

    #[test]
    fn test_mismatch_is_reported() {
        let lines = run(&AppConfig::default()).unwrap();
        let mismatch = line(&lines, "v + m");
        assert!(mismatch.contains("error: vector size mismatch"));
        assert!(mismatch.contains("lhs.size() = 4"));
        assert!(mismatch.contains("rhs.size() = 3"));
    }

    #[test]
    fn test_precision_applies_to_every_value() {
        let mut config = AppConfig::default();
        config.display.precision = Some(2);
        let lines = run(&config).unwrap();
        assert_eq!(line(&lines, "v = "), "v = [1.00, 2.00, 3.00, 4.00]");
        assert_eq!(line(&lines, "distance(x, y)"), "distance(x, y) = 1.41");
        assert_eq!(line(&lines, "angle(x + y, x)"), "angle(x + y, x) = 45.00 deg");
        assert_eq!(line(&lines, "|unit(v)|"), "|unit(v)| = 1.00");
    }

    #[test]
    fn test_empty_vectors() {
        let mut config = AppConfig::default();
        config.scenario.vector.clear();
        config.scenario.other.clear();
        let lines = run(&config).unwrap();
        assert_eq!(line(&lines, "v = "), "v = []");
        assert_eq!(line(&lines, "v + w"), "v + w = []");
        assert_eq!(line(&lines, "|v|"), "|v| = 0");
    }
}
