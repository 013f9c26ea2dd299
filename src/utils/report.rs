// src/utils/report.rs

use crate::model::{Element, Shells};

const MISSING: &str = "N/A";

/// "12.34 unit", or N/A when the property is unknown.
pub fn format_quantity(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(v) if v.is_finite() => {
            if unit.is_empty() {
                format!("{}", v)
            } else {
                format!("{} {}", v, unit)
            }
        }
        _ => MISSING.to_string(),
    }
}

fn or_missing(text: &str) -> String {
    if text.trim().is_empty() {
        MISSING.to_string()
    } else {
        text.to_string()
    }
}

/// Rows for the "Properties" block of the detail panel.
pub fn property_rows(element: &Element) -> Vec<(&'static str, String)> {
    vec![
        ("Electron Configuration", or_missing(&element.electron_configuration)),
        ("Electronegativity", format_quantity(element.electronegativity, "")),
        ("Atomic Radius", format_quantity(element.atomic_radius, "pm")),
        ("Ionization Energy", format_quantity(element.ionization_energy, "eV")),
        ("Density", format_quantity(element.density, "g/cm³")),
        ("Melting Point", format_quantity(element.melting_point, "K")),
        ("Boiling Point", format_quantity(element.boiling_point, "K")),
        ("Category", element.category.label()),
        ("Discovered by", or_missing(&element.discovered_by)),
    ]
}

/// Lines shown in the hover tooltip (plain text, caller escapes).
pub fn tooltip_lines(element: &Element) -> [String; 3] {
    [
        element.name.clone(),
        format!("Atomic Number: {}", element.atomic_number),
        "Click for details".to_string(),
    ]
}

/// Console text logged when an element is selected.
pub fn element_summary(element: &Element, shells: &Shells) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{} ({}), Z={}, {} u\n",
        element.name, element.symbol, element.atomic_number, element.atomic_mass
    ));
    out.push_str(&format!(
        "  Configuration: {}\n",
        or_missing(&element.electron_configuration)
    ));
    out.push_str(&format!("  Shells:        {}", shells));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{shells, ElementTable};

    #[test]
    fn test_format_quantity() {
        assert_eq!(format_quantity(Some(7.874), "g/cm³"), "7.874 g/cm³");
        assert_eq!(format_quantity(Some(2.2), ""), "2.2");
        assert_eq!(format_quantity(None, "K"), "N/A");
        assert_eq!(format_quantity(Some(f64::NAN), "K"), "N/A");
    }

    #[test]
    fn test_property_rows_mark_unknown_values() {
        let table = ElementTable::builtin().unwrap();
        let og = table.get(118).unwrap();
        let rows = property_rows(og);
        assert_eq!(rows.len(), 9);
        let density = rows.iter().find(|(k, _)| *k == "Density").unwrap();
        assert_eq!(density.1, "N/A");
        let cat = rows.iter().find(|(k, _)| *k == "Category").unwrap();
        assert_eq!(cat.1, "noble gas");
    }

    #[test]
    fn test_summary_includes_shell_breakdown() {
        let table = ElementTable::builtin().unwrap();
        let ar = table.get(18).unwrap();
        let sh = shells::derive(&ar.electron_configuration, ar.atomic_number);
        let text = element_summary(ar, &sh);
        assert!(text.starts_with("Argon (Ar), Z=18"));
        assert!(text.ends_with("K2 L8 M8"));
    }

    #[test]
    fn test_tooltip_lines() {
        let table = ElementTable::builtin().unwrap();
        let lines = tooltip_lines(table.get(1).unwrap());
        assert_eq!(lines[0], "Hydrogen");
        assert_eq!(lines[1], "Atomic Number: 1");
    }
}
