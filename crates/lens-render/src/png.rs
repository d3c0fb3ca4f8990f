//! Raster (PNG) scatter plot drawn with plotters into an RGB buffer.
//!
//! Same content as the SVG output: title caption, both curves, the
//! center-of-mass cross, both lens components, and a legend naming them.

use crate::format::plot_title;
use crate::plot::{PlotFrame, CAUSTIC_COLOR, CRITICAL_COLOR, PANEL_COLOR, Z1_COLOR, Z2_COLOR};
use image::RgbImage;
use lens_types::config::RenderConfig;
use lens_types::error::{LensError, LensResult};
use lens_types::state::{CurveSet, PlanePoint};
use plotters::prelude::*;
use std::path::Path;

/// Pixel radius of the lens-component markers.
const MARKER_SIZE: i32 = 6;

fn rgb(color: [u8; 3]) -> RGBColor {
    RGBColor(color[0], color[1], color[2])
}

fn render_err<E: std::fmt::Display>(e: E) -> LensError {
    LensError::Render(e.to_string())
}

pub fn render_png(curves: &CurveSet, cfg: &RenderConfig) -> LensResult<RgbImage> {
    if cfg.width == 0 || cfg.height == 0 {
        return Err(LensError::Render(format!(
            "image size must be non-zero, got {}x{}",
            cfg.width, cfg.height
        )));
    }
    let frame = PlotFrame::fit(curves, cfg.width, cfg.height);
    let mut buf = vec![0u8; cfg.width as usize * cfg.height as usize * 3];
    draw_chart(curves, cfg, &frame, &mut buf)?;

    RgbImage::from_raw(cfg.width, cfg.height, buf)
        .ok_or_else(|| LensError::Render("pixel buffer does not match image size".to_string()))
}

fn draw_chart(
    curves: &CurveSet,
    cfg: &RenderConfig,
    frame: &PlotFrame,
    buf: &mut [u8],
) -> LensResult<()> {
    let root = BitMapBackend::with_buffer(buf, (cfg.width, cfg.height)).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(plot_title(&curves.lens), ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(frame.x_min..frame.x_max, frame.y_min..frame.y_max)
        .map_err(render_err)?;

    chart
        .plotting_area()
        .fill(&rgb(PANEL_COLOR))
        .map_err(render_err)?;
    chart
        .configure_mesh()
        .bold_line_style(WHITE.stroke_width(1))
        .light_line_style(WHITE.mix(0.4).stroke_width(1))
        .x_desc("x")
        .y_desc("y")
        .draw()
        .map_err(render_err)?;

    let radius = (cfg.point_radius.round() as i32).max(1);
    let critical = rgb(CRITICAL_COLOR);
    let caustic = rgb(CAUSTIC_COLOR);
    chart
        .draw_series(
            curves
                .points
                .iter()
                .map(|p| p.critical)
                .filter(PlanePoint::is_finite)
                .map(|p| Circle::new((p.x, p.y), radius, critical.filled())),
        )
        .map_err(render_err)?
        .label("critical curve")
        .legend(move |(x, y)| Circle::new((x + 10, y), 4, critical.filled()));
    chart
        .draw_series(
            curves
                .points
                .iter()
                .map(|p| p.caustic)
                .filter(PlanePoint::is_finite)
                .map(|p| Circle::new((p.x, p.y), radius, caustic.filled())),
        )
        .map_err(render_err)?
        .label("caustic")
        .legend(move |(x, y)| Circle::new((x + 10, y), 4, caustic.filled()));

    let markers = curves.markers();
    let com = markers.center_of_mass;
    chart
        .draw_series(std::iter::once(Cross::new(
            (com.x, com.y),
            MARKER_SIZE,
            BLACK.stroke_width(2),
        )))
        .map_err(render_err)?
        .label("COM")
        .legend(|(x, y)| Cross::new((x + 10, y), 5, BLACK.stroke_width(2)));
    for (p, color, label) in [(markers.z1, Z1_COLOR, "z1"), (markers.z2, Z2_COLOR, "z2")] {
        let color = rgb(color);
        chart
            .draw_series(std::iter::once(Circle::new(
                (p.x, p.y),
                MARKER_SIZE,
                color.filled(),
            )))
            .map_err(render_err)?
            .label(label)
            .legend(move |(x, y)| Circle::new((x + 10, y), 5, color.filled()));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(render_err)?;

    root.present().map_err(render_err)?;
    Ok(())
}

pub fn write_png(curves: &CurveSet, cfg: &RenderConfig, path: &Path) -> LensResult<()> {
    let img = render_png(curves, cfg)?;
    img.save(path)
        .map_err(|e| LensError::Render(format!("failed to write '{}': {e}", path.display())))
}
