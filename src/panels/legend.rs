// src/panels/legend.rs

use crate::model::ElementCategory;
use crate::rendering::palette::category_class;
use gtk4::prelude::*;
use gtk4::{Align, Box as GtkBox, FlowBox, Label, Orientation, SelectionMode};

/// Strip of category colour swatches shown above the table.
pub fn build() -> FlowBox {
    let flow = FlowBox::builder()
        .selection_mode(SelectionMode::None)
        .max_children_per_line(10)
        .column_spacing(12)
        .row_spacing(4)
        .halign(Align::Center)
        .build();

    for cat in ElementCategory::ALL {
        let item = GtkBox::new(Orientation::Horizontal, 6);

        let swatch = GtkBox::new(Orientation::Horizontal, 0);
        swatch.add_css_class("legend-swatch");
        swatch.add_css_class(&category_class(cat));
        swatch.set_valign(Align::Center);

        item.append(&swatch);
        item.append(&Label::new(Some(&cat.label())));
        flow.insert(&item, -1);
    }

    flow
}
