//! A row of color swatches, one of which is selected.

use egui::{
    Align, Align2, Color32, FontId, Layout, Response, Sense, Stroke, StrokeKind, Ui, Vec2,
    WidgetInfo, WidgetType,
};
use qrstudio_business::ColorOption;
use qrstudio_business::palette::find_option;

use crate::utils::colors::{BORDER_COLOR, to_color32};

/// Side length of a swatch.
const SWATCH_SIZE: f32 = 40.0;

/// Horizontal gap between swatches.
const SWATCH_SPACING: f32 = 12.0;

/// A single clickable swatch. The selected one carries a check mark.
pub fn color_swatch(ui: &mut Ui, option: &ColorOption, selected: bool) -> Response {
    let (rect, response) = ui.allocate_exact_size(Vec2::splat(SWATCH_SIZE), Sense::click());

    if ui.is_rect_visible(rect) {
        let painter = ui.painter();
        painter.rect_filled(rect, 1.0, to_color32(option.color));
        painter.rect_stroke(rect, 1.0, Stroke::new(1.0, BORDER_COLOR), StrokeKind::Inside);
        if selected {
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                "✓",
                FontId::proportional(18.0),
                Color32::WHITE,
            );
        }
    }

    response.widget_info(|| {
        WidgetInfo::selected(WidgetType::RadioButton, ui.is_enabled(), selected, option.label)
    });
    response.on_hover_text(option.label)
}

/// Shows `options` as a centered row of swatches and updates `selected` on click.
///
/// A `selected` value that is not one of `options` shows no check mark.
/// Returns true when the selection changed.
pub fn color_selector(ui: &mut Ui, options: &[ColorOption], selected: &mut ColorOption) -> bool {
    let current = find_option(options, selected.label).copied();
    let mut changed = false;

    let count = options.len() as f32;
    let row_width = count * SWATCH_SIZE + (count - 1.0).max(0.0) * SWATCH_SPACING;

    ui.allocate_ui_with_layout(
        Vec2::new(row_width, SWATCH_SIZE),
        Layout::left_to_right(Align::Center),
        |ui| {
            ui.spacing_mut().item_spacing.x = SWATCH_SPACING;
            for option in options {
                let is_selected = current == Some(*option);
                if color_swatch(ui, option, is_selected).clicked() && !is_selected {
                    log::debug!("color selected: {}", option.label);
                    *selected = *option;
                    changed = true;
                }
            }
        },
    );

    changed
}

#[cfg(test)]
mod tests {
    use egui_kittest::Harness;
    use kittest::Queryable;
    use qrstudio_business::CODE_COLORS;
    use qrstudio_business::palette::{BLACK, WHITE};

    use super::*;

    #[test]
    fn test_every_option_is_labelled() {
        let harness = Harness::new_ui_state(
            |ui, selected: &mut ColorOption| {
                color_selector(ui, &CODE_COLORS, selected);
            },
            CODE_COLORS[0],
        );

        for option in &CODE_COLORS {
            assert!(
                harness.query_by_label(option.label).is_some(),
                "swatch '{}' should be present",
                option.label
            );
        }
    }

    #[test]
    fn test_click_changes_selection() {
        let mut harness = Harness::new_ui_state(
            |ui, selected: &mut ColorOption| {
                color_selector(ui, &CODE_COLORS, selected);
            },
            CODE_COLORS[0],
        );

        harness.get_by_label("Blue").click();
        harness.step();

        assert_eq!(harness.state().label, "Blue");
    }

    #[test]
    fn test_selection_from_other_list_can_be_replaced() {
        let mut harness = Harness::new_ui_state(
            |ui, selected: &mut ColorOption| {
                color_selector(ui, &CODE_COLORS, selected);
            },
            WHITE,
        );

        harness.get_by_label("Black").click();
        harness.step();

        assert_eq!(*harness.state(), BLACK);
    }

    #[test]
    fn test_row_is_centered() {
        let harness = Harness::builder()
            .with_size(Vec2::new(600.0, 100.0))
            .build_ui_state(
                |ui, selected: &mut ColorOption| {
                    ui.with_layout(Layout::top_down(Align::Center), |ui| {
                        color_selector(ui, &CODE_COLORS, selected);
                    });
                },
                CODE_COLORS[0],
            );

        let first = harness.get_by_label("Black").rect();
        let last = harness.get_by_label("Magenta").rect();
        let left_gap = first.left();
        let right_gap = 600.0 - last.right();
        assert!(
            (left_gap - right_gap).abs() < 20.0,
            "row should be centered, gaps were {left_gap} and {right_gap}"
        );
        assert!(left_gap > 100.0, "row should not hug the left edge");
    }
}
