// File: crates/ticker-chart-core/src/chart.rs
// Summary: Headless rendering of a Layout to PNG/RGBA using Skia CPU raster surfaces.

use std::io::Write;
use std::path::Path;

use skia_safe as skia;

use crate::config::ChartStyle;
use crate::error::ChartError;
use crate::geometry::{header_rect, plot_rect, RectF};
use crate::layout::{Layout, PriceBadge};
use crate::scale::PlotScales;
use crate::text::{Anchor, TextShaper};
use crate::theme::Theme;

/// Matplotlib-style major tick length in points.
const TICK_LENGTH_PT: f32 = 3.5;
/// Gap between a tick mark and its label in points.
const TICK_PAD_PT: f32 = 3.5;

/// Render `layout` and return the encoded PNG.
pub fn render_to_png_bytes(layout: &Layout, style: &ChartStyle) -> Result<Vec<u8>, ChartError> {
    let mut surface = draw_surface(layout, style)?;
    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or(ChartError::Encode)?;
    Ok(data.as_bytes().to_vec())
}

/// Render `layout` to a PNG file, creating parent directories as needed.
///
/// The image is fully encoded before the file is opened, so a rendering
/// failure never leaves a partial file behind.
pub fn render_to_png(
    layout: &Layout,
    style: &ChartStyle,
    output_png_path: impl AsRef<Path>,
) -> Result<(), ChartError> {
    let bytes = render_to_png_bytes(layout, style)?;
    let path = output_png_path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut file = std::fs::File::create(path)?;
    file.write_all(&bytes)?;
    file.flush()?;
    log::info!("wrote {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}

/// Render `layout` to unpremultiplied RGBA8 pixels. Returns `(pixels, width, height)`.
pub fn render_to_rgba8(layout: &Layout, style: &ChartStyle) -> Result<(Vec<u8>, i32, i32), ChartError> {
    let mut surface = draw_surface(layout, style)?;
    let (w, h) = style.pixel_size();
    let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
    let row_bytes = w as usize * 4;
    let mut pixels = vec![0u8; row_bytes * h as usize];
    if !surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
        return Err(ChartError::Readback);
    }
    Ok((pixels, w, h))
}

fn draw_surface(layout: &Layout, style: &ChartStyle) -> Result<skia::Surface, ChartError> {
    let theme = style.resolve_theme()?;
    let (width, height) = style.pixel_size();
    let mut surface = skia::surfaces::raster_n32_premul((width, height))
        .ok_or(ChartError::Surface { width, height })?;

    let canvas = surface.canvas();
    canvas.clear(theme.background);

    let plot = plot_rect(style);
    let scales = PlotScales::new(plot, layout.x_range, layout.y_range);
    let shaper = TextShaper::new();

    draw_grid(canvas, layout, &scales, plot, style, &theme);
    draw_area_and_line(canvas, layout, &scales, plot, style, &theme);
    draw_spines(canvas, plot, style, &theme);
    draw_tick_labels(canvas, &shaper, layout, &scales, plot, style, &theme);
    draw_header(canvas, &shaper, &layout.title, style, &theme);
    if let Some(badge) = &layout.badge {
        draw_badge(canvas, &shaper, badge, &scales, style, &theme);
    }

    Ok(surface)
}

// ---- helpers ----------------------------------------------------------------

fn to_skia(r: RectF) -> skia::Rect {
    skia::Rect::from_ltrb(r.left, r.top, r.right, r.bottom)
}

fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    paint
}

fn fill_paint(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color);
    paint
}

/// Vertical grid lines at the date label positions, never at session edges.
fn draw_grid(
    canvas: &skia::Canvas,
    layout: &Layout,
    scales: &PlotScales,
    plot: RectF,
    style: &ChartStyle,
    theme: &Theme,
) {
    let paint = stroke_paint(theme.grid, style.pt(style.grid_width_pt));
    for &pos in &layout.tick_positions {
        let x = scales.x.to_px(pos);
        canvas.draw_line((x, plot.top), (x, plot.bottom), &paint);
    }
}

fn draw_area_and_line(
    canvas: &skia::Canvas,
    layout: &Layout,
    scales: &PlotScales,
    plot: RectF,
    style: &ChartStyle,
    theme: &Theme,
) {
    let data = &layout.curve.points;
    if data.len() < 2 {
        return;
    }

    canvas.save();
    canvas.clip_rect(to_skia(plot), skia::ClipOp::Intersect, true);

    let mut line = skia::Path::new();
    line.move_to(scales.point(data[0].0, data[0].1));
    for &(x, y) in data.iter().skip(1) {
        line.line_to(scales.point(x, y));
    }

    // Area between the curve and the baseline.
    let base_px = scales.y.to_px(layout.y_baseline);
    let mut area = line.clone();
    area.line_to((scales.x.to_px(data[data.len() - 1].0), base_px));
    area.line_to((scales.x.to_px(data[0].0), base_px));
    area.close();

    let mut fill = fill_paint(theme.area_fill);
    fill.set_alpha_f(style.fill_opacity);
    canvas.draw_path(&area, &fill);

    let mut stroke = stroke_paint(theme.line_stroke, style.pt(style.line_width_pt));
    stroke.set_stroke_cap(skia::paint::Cap::Round);
    stroke.set_stroke_join(skia::paint::Join::Round);
    canvas.draw_path(&line, &stroke);

    canvas.restore();
}

/// Left and bottom axis lines only; the top and right are left open.
fn draw_spines(canvas: &skia::Canvas, plot: RectF, style: &ChartStyle, theme: &Theme) {
    let paint = stroke_paint(theme.axis_line, style.pt(style.spine_width_pt));
    canvas.draw_line((plot.left, plot.bottom), (plot.right, plot.bottom), &paint);
    canvas.draw_line((plot.left, plot.top), (plot.left, plot.bottom), &paint);
}

fn draw_tick_labels(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    layout: &Layout,
    scales: &PlotScales,
    plot: RectF,
    style: &ChartStyle,
    theme: &Theme,
) {
    let tick_len = style.pt(TICK_LENGTH_PT);
    let pad = style.pt(TICK_PAD_PT);
    let marks = stroke_paint(theme.axis_line, style.pt(style.spine_width_pt) * 0.5);

    let x_size = style.pt(style.x_label_size_pt);
    for (pos, label) in layout.tick_positions.iter().zip(&layout.tick_labels) {
        let x = scales.x.to_px(*pos);
        canvas.draw_line((x, plot.bottom), (x, plot.bottom + tick_len), &marks);
        let y = plot.bottom + tick_len + pad + x_size * 0.5;
        shaper.draw(canvas, label, x, y, Anchor::Center, x_size, theme.tick_label, true);
    }

    let y_size = style.pt(style.y_label_size_pt);
    for tick in &layout.y_ticks {
        let y = scales.y.to_px(tick.value);
        canvas.draw_line((plot.left - tick_len, y), (plot.left, y), &marks);
        if tick.visible {
            let x = plot.left - tick_len - pad;
            shaper.draw(canvas, &tick.label, x, y, Anchor::Right, y_size, theme.tick_label, false);
        }
    }
}

fn draw_header(canvas: &skia::Canvas, shaper: &TextShaper, title: &str, style: &ChartStyle, theme: &Theme) {
    let (w, h) = style.pixel_size();
    let bar = header_rect(style);
    let radius = style.header_radius * w as f32;

    let shadow = bar.offset(style.header_shadow_offset * w as f32, style.header_shadow_offset * h as f32);
    let shadow_rr = skia::RRect::new_rect_xy(to_skia(shadow), radius, radius);
    canvas.draw_rrect(shadow_rr, &fill_paint(theme.header_shadow));

    let bar_rr = skia::RRect::new_rect_xy(to_skia(bar), radius, radius);
    canvas.draw_rrect(bar_rr, &fill_paint(theme.header));

    let x = w as f32 * 0.03;
    let y = (bar.top + bar.bottom) * 0.5;
    shaper.draw(canvas, title, x, y, Anchor::Left, style.pt(style.title_size_pt), theme.header_text, true);
}

/// Circle with arrow, price and date. Rising prices put the arrow on top,
/// falling prices put it at the bottom.
fn draw_badge(
    canvas: &skia::Canvas,
    shaper: &TextShaper,
    badge: &PriceBadge,
    scales: &PlotScales,
    style: &ChartStyle,
    theme: &Theme,
) {
    let (cx, cy) = scales.point(badge.x, badge.y);
    let r = scales.y.len_px(badge.radius);
    if !(r > 0.0) {
        return;
    }

    let body = if badge.up { theme.badge_up } else { theme.badge_down };
    canvas.draw_circle((cx, cy), r, &fill_paint(body));
    canvas.draw_circle((cx, cy), r, &stroke_paint(theme.badge_outline, style.pt(1.5)));

    let arrow_size = style.pt(10.0);
    let price_size = style.pt(9.0);
    let date_size = style.pt(7.0);
    let offset = r * 0.35;
    let (arrow_y, date_y) = if badge.up { (cy - offset, cy + offset) } else { (cy + offset, cy - offset) };

    shaper.draw(canvas, badge.arrow(), cx, arrow_y, Anchor::Center, arrow_size, theme.badge_accent, true);
    shaper.draw(canvas, &badge.price_label(), cx, cy, Anchor::Center, price_size, theme.badge_text, true);
    shaper.draw(canvas, &badge.date_label, cx, date_y, Anchor::Center, date_size, theme.badge_accent, true);
}
