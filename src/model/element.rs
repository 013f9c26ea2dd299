// src/model/element.rs

use serde::{Deserialize, Serialize};
use std::fmt;

/// One record of the periodic table. Field names follow the camelCase keys
/// of the bundled `elements.json`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    pub atomic_number: u32,
    pub symbol: String,
    pub name: String,
    pub atomic_mass: f64,
    pub category: ElementCategory,
    #[serde(default)]
    pub electron_configuration: String,

    // Display-only physical properties
    pub electronegativity: Option<f64>,
    pub atomic_radius: Option<f64>,
    pub ionization_energy: Option<f64>,
    pub density: Option<f64>,
    pub melting_point: Option<f64>,
    pub boiling_point: Option<f64>,

    #[serde(default)]
    pub discovered_by: String,
    #[serde(default)]
    pub description: String,

    // 1-based grid placement
    pub xpos: u32,
    pub ypos: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ElementCategory {
    Nonmetal,
    NobleGas,
    AlkaliMetal,
    AlkalineEarthMetal,
    Metalloid,
    PostTransitionMetal,
    TransitionMetal,
    Lanthanide,
    Actinide,
    Halogen,
}

impl ElementCategory {
    /// Legend order.
    pub const ALL: [ElementCategory; 10] = [
        ElementCategory::Nonmetal,
        ElementCategory::NobleGas,
        ElementCategory::AlkaliMetal,
        ElementCategory::AlkalineEarthMetal,
        ElementCategory::Metalloid,
        ElementCategory::PostTransitionMetal,
        ElementCategory::TransitionMetal,
        ElementCategory::Lanthanide,
        ElementCategory::Actinide,
        ElementCategory::Halogen,
    ];

    /// The kebab-case tag, also used as the CSS class of grid cells.
    pub fn tag(&self) -> &'static str {
        match self {
            ElementCategory::Nonmetal => "nonmetal",
            ElementCategory::NobleGas => "noble-gas",
            ElementCategory::AlkaliMetal => "alkali-metal",
            ElementCategory::AlkalineEarthMetal => "alkaline-earth-metal",
            ElementCategory::Metalloid => "metalloid",
            ElementCategory::PostTransitionMetal => "post-transition-metal",
            ElementCategory::TransitionMetal => "transition-metal",
            ElementCategory::Lanthanide => "lanthanide",
            ElementCategory::Actinide => "actinide",
            ElementCategory::Halogen => "halogen",
        }
    }

    /// Human readable label ("alkali metal").
    pub fn label(&self) -> String {
        self.tag().replace('-', " ")
    }
}

impl fmt::Display for ElementCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_tags_round_trip_through_serde() {
        for cat in ElementCategory::ALL {
            let json = serde_json::to_string(&cat).unwrap();
            assert_eq!(json, format!("\"{}\"", cat.tag()));
            let back: ElementCategory = serde_json::from_str(&json).unwrap();
            assert_eq!(back, cat);
        }
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let res: Result<ElementCategory, _> = serde_json::from_str("\"rare-earth\"");
        assert!(res.is_err());
    }

    #[test]
    fn test_label_replaces_every_hyphen() {
        assert_eq!(ElementCategory::AlkalineEarthMetal.label(), "alkaline earth metal");
        assert_eq!(ElementCategory::Halogen.label(), "halogen");
    }

    #[test]
    fn test_element_parses_with_nulls() {
        let json = r#"{
            "atomicNumber": 2, "symbol": "He", "name": "Helium", "atomicMass": 4.0026,
            "category": "noble-gas", "electronConfiguration": "1s2",
            "electronegativity": null, "atomicRadius": 120, "ionizationEnergy": 24.587,
            "density": 0.0001785, "meltingPoint": 0.95, "boilingPoint": 4.22,
            "discoveredBy": "Pierre Janssen", "description": "Inert gas.",
            "xpos": 18, "ypos": 1
        }"#;
        let el: Element = serde_json::from_str(json).unwrap();
        assert_eq!(el.atomic_number, 2);
        assert_eq!(el.category, ElementCategory::NobleGas);
        assert_eq!(el.electronegativity, None);
        assert_eq!(el.atomic_radius, Some(120.0));
    }
}
