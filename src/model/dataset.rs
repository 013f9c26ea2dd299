// src/model/dataset.rs

use super::element::Element;
use std::collections::HashSet;
use thiserror::Error;

const BUILTIN_ELEMENTS: &str = include_str!("../../assets/elements.json");

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("malformed element data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("element data is empty")]
    Empty,
    #[error("element '{symbol}' has atomic number 0")]
    ZeroAtomicNumber { symbol: String },
    #[error("atomic number {0} appears more than once")]
    DuplicateAtomicNumber(u32),
    #[error("element {atomic_number} has a zero grid coordinate ({xpos}, {ypos})")]
    InvalidPosition { atomic_number: u32, xpos: u32, ypos: u32 },
    #[error("elements {first} and {second} share grid cell ({xpos}, {ypos})")]
    OverlappingCells {
        first: u32,
        second: u32,
        xpos: u32,
        ypos: u32,
    },
}

/// The read-only element dataset, sorted by atomic number.
#[derive(Debug, Clone)]
pub struct ElementTable {
    elements: Vec<Element>,
}

impl ElementTable {
    /// Loads the table bundled into the binary.
    pub fn builtin() -> Result<Self, DatasetError> {
        Self::from_json(BUILTIN_ELEMENTS)
    }

    pub fn from_json(text: &str) -> Result<Self, DatasetError> {
        let elements: Vec<Element> = serde_json::from_str(text)?;
        Self::from_elements(elements)
    }

    pub fn from_elements(mut elements: Vec<Element>) -> Result<Self, DatasetError> {
        if elements.is_empty() {
            return Err(DatasetError::Empty);
        }

        elements.sort_by_key(|e| e.atomic_number);

        let mut numbers = HashSet::new();
        let mut cells: Vec<((u32, u32), u32)> = Vec::with_capacity(elements.len());

        for el in &elements {
            if el.atomic_number == 0 {
                return Err(DatasetError::ZeroAtomicNumber {
                    symbol: el.symbol.clone(),
                });
            }
            if !numbers.insert(el.atomic_number) {
                return Err(DatasetError::DuplicateAtomicNumber(el.atomic_number));
            }
            if el.xpos == 0 || el.ypos == 0 {
                return Err(DatasetError::InvalidPosition {
                    atomic_number: el.atomic_number,
                    xpos: el.xpos,
                    ypos: el.ypos,
                });
            }
            if let Some((_, other)) = cells.iter().find(|(cell, _)| *cell == (el.xpos, el.ypos)) {
                return Err(DatasetError::OverlappingCells {
                    first: *other,
                    second: el.atomic_number,
                    xpos: el.xpos,
                    ypos: el.ypos,
                });
            }
            cells.push(((el.xpos, el.ypos), el.atomic_number));
        }

        Ok(Self { elements })
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterates in ascending atomic number.
    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter()
    }

    pub fn get(&self, atomic_number: u32) -> Option<&Element> {
        self.elements
            .binary_search_by_key(&atomic_number, |e| e.atomic_number)
            .ok()
            .map(|idx| &self.elements[idx])
    }

    /// Case-insensitive symbol lookup ("fe", "Fe", "FE").
    pub fn by_symbol(&self, symbol: &str) -> Option<&Element> {
        self.elements
            .iter()
            .find(|e| e.symbol.eq_ignore_ascii_case(symbol.trim()))
    }

    /// (columns, rows) spanned by the 1-based grid coordinates.
    pub fn grid_size(&self) -> (u32, u32) {
        let cols = self.elements.iter().map(|e| e.xpos).max().unwrap_or(0);
        let rows = self.elements.iter().map(|e| e.ypos).max().unwrap_or(0);
        (cols, rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::element::ElementCategory;
    use crate::model::shells;

    fn record(z: u32, symbol: &str, x: u32, y: u32) -> Element {
        Element {
            atomic_number: z,
            symbol: symbol.to_string(),
            name: symbol.to_string(),
            atomic_mass: z as f64 * 2.0,
            category: ElementCategory::Nonmetal,
            electron_configuration: String::new(),
            electronegativity: None,
            atomic_radius: None,
            ionization_energy: None,
            density: None,
            melting_point: None,
            boiling_point: None,
            discovered_by: String::new(),
            description: String::new(),
            xpos: x,
            ypos: y,
        }
    }

    #[test]
    fn test_builtin_table_has_all_118_elements() {
        let table = ElementTable::builtin().expect("bundled data must load");
        assert_eq!(table.len(), 118);
        assert!(!table.is_empty());
        for (i, el) in table.iter().enumerate() {
            assert_eq!(el.atomic_number as usize, i + 1);
        }
        assert_eq!(table.grid_size(), (18, 10));
    }

    #[test]
    fn test_builtin_configurations_match_atomic_numbers() {
        // Every bundled configuration should decode directly, never via the fallback path.
        let table = ElementTable::builtin().unwrap();
        for el in table.iter() {
            let parsed = shells::parse(&el.electron_configuration, el.atomic_number);
            assert!(
                parsed.is_ok(),
                "{} ({}): {:?}",
                el.symbol,
                el.electron_configuration,
                parsed
            );
        }
    }

    #[test]
    fn test_lookup_by_number_and_symbol() {
        let table = ElementTable::builtin().unwrap();
        assert_eq!(table.get(26).map(|e| e.symbol.as_str()), Some("Fe"));
        assert_eq!(table.by_symbol("au").map(|e| e.atomic_number), Some(79));
        assert!(table.get(0).is_none());
        assert!(table.get(119).is_none());
        assert!(table.by_symbol("Xx").is_none());
    }

    #[test]
    fn test_f_block_sits_below_main_table() {
        let table = ElementTable::builtin().unwrap();
        let la = table.get(57).unwrap();
        let lr = table.get(103).unwrap();
        assert_eq!((la.xpos, la.ypos), (3, 9));
        assert_eq!((lr.xpos, lr.ypos), (17, 10));
        assert_eq!(table.get(72).map(|e| (e.xpos, e.ypos)), Some((4, 6)));
    }

    #[test]
    fn test_records_are_sorted_on_load() {
        let table =
            ElementTable::from_elements(vec![record(2, "He", 18, 1), record(1, "H", 1, 1)]).unwrap();
        let order: Vec<u32> = table.iter().map(|e| e.atomic_number).collect();
        assert_eq!(order, vec![1, 2]);
    }

    #[test]
    fn test_validation_errors() {
        assert!(matches!(ElementTable::from_elements(vec![]), Err(DatasetError::Empty)));
        assert!(matches!(
            ElementTable::from_elements(vec![record(0, "X", 1, 1)]),
            Err(DatasetError::ZeroAtomicNumber { .. })
        ));
        assert!(matches!(
            ElementTable::from_elements(vec![record(1, "H", 1, 1), record(1, "H", 2, 1)]),
            Err(DatasetError::DuplicateAtomicNumber(1))
        ));
        assert!(matches!(
            ElementTable::from_elements(vec![record(1, "H", 0, 1)]),
            Err(DatasetError::InvalidPosition { .. })
        ));
        assert!(matches!(
            ElementTable::from_elements(vec![record(1, "H", 1, 1), record(2, "He", 1, 1)]),
            Err(DatasetError::OverlappingCells { first: 1, second: 2, .. })
        ));
        assert!(matches!(
            ElementTable::from_json("{ not json"),
            Err(DatasetError::Parse(_))
        ));
    }
}
