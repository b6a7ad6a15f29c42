use eframe::egui::{Color32, Id, LayerId, Order::Tooltip, RichText, Ui};

#[allow(deprecated)]
use eframe::egui::show_tooltip_at_pointer;

use egui_plot::{Axis, AxisHints, HPlacement, MarkerShape, Plot, PlotPoints, PlotUi, Points, VPlacement};

use crate::analysis::{ScatterData, build_scatter, padded_domain};
use crate::config::plot::PLOT_CONFIG;
use crate::models::{OptionRecord, OptionType, PlotField, ScatterPoint};
use crate::ui::ui_text::UI_TEXT;

/// Render one record list as a CE/PE scatter chart: summary counts, padded
/// axes labeled per field, two colored marker series, hover tooltip.
///
/// The pipeline runs from scratch every frame; it is O(n) over the record
/// list and carries no cache.
pub(crate) fn show_scatter(
    ui: &mut Ui,
    records: &[OptionRecord],
    x_field: PlotField,
    y_field: PlotField,
) {
    let data = build_scatter(records, x_field, y_field);

    if data.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.label(
                RichText::new(&UI_TEXT.placeholder_no_points)
                    .color(PLOT_CONFIG.color_placeholder)
                    .heading(),
            );
        });
        return;
    }

    render_summary(ui, &data);

    // Both domains exist here: data is non-empty, so each axis has at least
    // one finite value.
    let x_domain = padded_domain(data.x_values());
    let y_domain = padded_domain(data.y_values());

    Plot::new("option_scatter")
        .custom_x_axes(vec![field_axis_x(x_field)])
        .custom_y_axes(vec![field_axis_y(y_field)])
        .label_formatter(|_, _| String::new())
        .allow_double_click_reset(false)
        .allow_scroll(false)
        .allow_drag(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            if let (Some(xd), Some(yd)) = (x_domain, y_domain) {
                plot_ui.set_plot_bounds_x(xd.min..=xd.max);
                plot_ui.set_plot_bounds_y(yd.min..=yd.max);
            }

            for series in &data.series {
                let markers: Vec<[f64; 2]> =
                    series.points.iter().map(|p| [p.x, p.y]).collect();
                plot_ui.points(
                    Points::new(series.option_type.to_string(), PlotPoints::new(markers))
                        .color(series_color(series.option_type))
                        .radius(PLOT_CONFIG.marker_radius)
                        .shape(MarkerShape::Circle),
                );
            }

            hover_tooltip(plot_ui, &data, x_field, y_field);
        });
}

fn render_summary(ui: &mut Ui, data: &ScatterData) {
    ui.horizontal(|ui| {
        ui.label(
            RichText::new(format!(
                "{} {}",
                UI_TEXT.label_calls,
                data.count_for(OptionType::CE)
            ))
            .color(PLOT_CONFIG.ce_color),
        );
        ui.label(
            RichText::new(format!(
                "{} {}",
                UI_TEXT.label_puts,
                data.count_for(OptionType::PE)
            ))
            .color(PLOT_CONFIG.pe_color),
        );
        ui.label(
            RichText::new(format!("{} {}", UI_TEXT.label_total, data.total_points()))
                .color(PLOT_CONFIG.color_summary),
        );
    });
}

fn series_color(option_type: OptionType) -> Color32 {
    match option_type {
        OptionType::CE => PLOT_CONFIG.ce_color,
        _ => PLOT_CONFIG.pe_color,
    }
}

fn field_axis_x(field: PlotField) -> AxisHints<'static> {
    AxisHints::new(Axis::X)
        .label(field.label())
        .formatter(move |mark, _range| field.format(mark.value))
        .placement(VPlacement::Bottom)
}

fn field_axis_y(field: PlotField) -> AxisHints<'static> {
    AxisHints::new_y()
        .label(field.label())
        .formatter(move |mark, _range| field.format(mark.value))
        .placement(HPlacement::Left)
}

/// Manual hit test: nearest marker within the pick radius, measured in
/// screen space so picking feels the same at any zoom level. Ties go to the
/// earlier point in draw order.
fn hover_tooltip(plot_ui: &mut PlotUi, data: &ScatterData, x_field: PlotField, y_field: PlotField) {
    let Some(cursor) = plot_ui.response().hover_pos() else {
        return;
    };

    let mut best: Option<(f32, &ScatterPoint)> = None;
    for series in &data.series {
        for point in &series.points {
            let screen = plot_ui.screen_from_plot(egui_plot::PlotPoint::new(point.x, point.y));
            let dist = screen.distance(cursor);
            if dist <= PLOT_CONFIG.pick_radius_px && best.is_none_or(|(d, _)| dist < d) {
                best = Some((dist, point));
            }
        }
    }
    let Some((_, point)) = best else { return };

    let tooltip_layer = LayerId::new(Tooltip, Id::new("scatter_tooltips"));

    #[allow(deprecated)]
    show_tooltip_at_pointer(
        plot_ui.ctx(),
        tooltip_layer,
        Id::new(("scatter_tip", point.index)),
        |ui: &mut Ui| {
            ui.label(
                RichText::new(format!("{} {}", point.symbol, point.option_type))
                    .strong()
                    .color(series_color(point.option_type)),
            );
            ui.separator();
            tooltip_row(
                ui,
                &UI_TEXT.tip_strike,
                &PlotField::StrikePrice.format(point.strike),
            );
            tooltip_row(ui, &UI_TEXT.tip_type, &point.option_type.to_string());
            tooltip_row(ui, x_field.label(), &x_field.format(point.x));
            tooltip_row(ui, y_field.label(), &y_field.format(point.y));
            tooltip_row(
                ui,
                &UI_TEXT.tip_premium,
                &PlotField::LastPrice.format(point.premium),
            );
            if let Some(iv) = point.iv {
                tooltip_row(
                    ui,
                    &UI_TEXT.tip_iv,
                    &PlotField::ImpliedVolatility.format(iv),
                );
            }
            tooltip_row(ui, &UI_TEXT.tip_expiry, &point.expiry);
        },
    );
}

fn tooltip_row(ui: &mut Ui, label: &str, value: &str) {
    ui.horizontal(|ui| {
        ui.label(
            RichText::new(format!("{}:", label))
                .small()
                .color(PLOT_CONFIG.color_tooltip_subdued),
        );
        ui.label(RichText::new(value).small());
    });
}
