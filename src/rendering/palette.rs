// src/rendering/palette.rs
// Category colours shared by the grid stylesheet, the legend and the detail header.

use crate::model::ElementCategory;

pub fn category_hex(category: ElementCategory) -> &'static str {
    match category {
        ElementCategory::Nonmetal => "#76FF03",
        ElementCategory::NobleGas => "#2979FF",
        ElementCategory::AlkaliMetal => "#FF5722",
        ElementCategory::AlkalineEarthMetal => "#FFAB00",
        ElementCategory::Metalloid => "#00BCD4",
        ElementCategory::PostTransitionMetal => "#8D6E63",
        ElementCategory::TransitionMetal => "#FF4081",
        ElementCategory::Lanthanide => "#7C4DFF",
        ElementCategory::Actinide => "#B388FF",
        ElementCategory::Halogen => "#00E676",
    }
}

/// Parses "#RRGGBB" into 0..1 components.
pub fn parse_hex(hex: &str) -> Option<(f64, f64, f64)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |i: usize| {
        u8::from_str_radix(&digits[i..i + 2], 16)
            .ok()
            .map(|v| v as f64 / 255.0)
    };
    Some((channel(0)?, channel(2)?, channel(4)?))
}

/// CSS class carrying a category's background colour.
pub fn category_class(category: ElementCategory) -> String {
    format!("cat-{}", category.tag())
}

/// Application stylesheet: grid cells, legend swatches and detail header tile.
pub fn stylesheet() -> String {
    let mut css = String::from(
        "
        .element-cell {
            border-radius: 4px;
            border: 2px solid transparent;
            padding: 2px;
            min-width: 54px;
            min-height: 54px;
            color: #111111;
        }
        .element-cell .cell-number { font-size: 9px; }
        .element-cell .cell-symbol { font-size: 18px; font-weight: bold; }
        .element-cell .cell-name { font-size: 7px; }
        .element-cell.hovered { border-color: rgba(255, 255, 255, 0.8); }
        .element-cell.selected { border-color: #ffffff; box-shadow: 0 0 6px 2px rgba(255, 255, 255, 0.6); }
        .symbol-tile {
            font-size: 32px;
            font-weight: bold;
            min-width: 80px;
            min-height: 80px;
            border-radius: 6px;
            color: #111111;
        }
        .legend-swatch { min-width: 14px; min-height: 14px; border-radius: 3px; }
        .legend-dot { min-width: 12px; min-height: 12px; border-radius: 6px; }
        .nucleus-dot { background-color: #ff4000; }
        .electron-dot { background-color: #00aaff; }
        ",
    );

    for cat in ElementCategory::ALL {
        css.push_str(&format!(
            ".{} {{ background-color: {}; }}\n",
            category_class(cat),
            category_hex(cat)
        ));
    }
    css
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_hex("#FF0000"), Some((1.0, 0.0, 0.0)));
        assert_eq!(parse_hex("#ffffff"), Some((1.0, 1.0, 1.0)));
        assert_eq!(parse_hex("FF0000"), None);
        assert_eq!(parse_hex("#FF00"), None);
        assert_eq!(parse_hex("#GG0000"), None);
    }

    #[test]
    fn test_every_category_has_a_valid_colour() {
        for cat in ElementCategory::ALL {
            assert!(parse_hex(category_hex(cat)).is_some(), "{:?}", cat);
        }
    }

    #[test]
    fn test_stylesheet_covers_all_categories() {
        let css = stylesheet();
        for cat in ElementCategory::ALL {
            assert!(css.contains(&format!(".cat-{} ", cat.tag())));
        }
    }
}
