// ─────────────────────────────────────────────────────────────────────
// SCPN Lensing — SVG Scatter
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Labeled SVG scatter plot of critical and caustic curves.

use crate::format::{format_g, plot_title};
use crate::plot::{
    hex, PlotFrame, CAUSTIC_COLOR, CRITICAL_COLOR, PANEL_COLOR, Z1_COLOR, Z2_COLOR,
};
use lens_types::config::RenderConfig;
use lens_types::state::{CurveSet, PlanePoint};

pub fn render_svg(curves: &CurveSet, cfg: &RenderConfig) -> String {
    let frame = PlotFrame::fit(curves, cfg.width, cfg.height);
    let (left, right) = (frame.plot_left(), frame.plot_right());
    let (top, bottom) = (frame.plot_top(), frame.plot_bottom());
    let mut out = String::with_capacity(64 * (2 * curves.len() + 64));

    push_line(&mut out, &format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}" style="background:white">"##,
        cfg.width, cfg.height, cfg.width, cfg.height
    ));
    push_line(&mut out, &format!(
        r##"  <rect x="{left:.1}" y="{top:.1}" width="{:.1}" height="{:.1}" fill="{}"/>"##,
        right - left,
        bottom - top,
        hex(PANEL_COLOR)
    ));

    // Grid and tick labels
    for x in frame.x_ticks() {
        let (px, _) = frame.to_pixel(PlanePoint::new(x, frame.y_min));
        push_line(&mut out, &format!(
            r##"  <line x1="{px:.1}" y1="{top:.1}" x2="{px:.1}" y2="{bottom:.1}" stroke="white" stroke-width="1"/>
  <text x="{px:.1}" y="{:.1}" text-anchor="middle" font-size="14" fill="#555555">{}</text>"##,
            bottom + 20.0,
            format_g(x, 3)
        ));
    }
    for y in frame.y_ticks() {
        let (_, py) = frame.to_pixel(PlanePoint::new(frame.x_min, y));
        push_line(&mut out, &format!(
            r##"  <line x1="{left:.1}" y1="{py:.1}" x2="{right:.1}" y2="{py:.1}" stroke="white" stroke-width="1"/>
  <text x="{:.1}" y="{:.1}" text-anchor="end" font-size="14" fill="#555555">{}</text>"##,
            left - 8.0,
            py + 5.0,
            format_g(y, 3)
        ));
    }

    write_scatter(
        &mut out,
        &frame,
        curves.points.iter().map(|p| p.critical),
        CRITICAL_COLOR,
        cfg.point_radius,
    );
    write_scatter(
        &mut out,
        &frame,
        curves.points.iter().map(|p| p.caustic),
        CAUSTIC_COLOR,
        cfg.point_radius,
    );

    // Markers
    let markers = curves.markers();
    let (cx, cy) = frame.to_pixel(markers.center_of_mass);
    push_line(&mut out, &format!(
        r##"  <path d="M{:.1},{:.1} L{:.1},{:.1} M{:.1},{:.1} L{:.1},{:.1}" stroke="black" stroke-width="2"/>"##,
        cx - 6.0,
        cy - 6.0,
        cx + 6.0,
        cy + 6.0,
        cx - 6.0,
        cy + 6.0,
        cx + 6.0,
        cy - 6.0
    ));
    for (p, color) in [(markers.z1, Z1_COLOR), (markers.z2, Z2_COLOR)] {
        let (px, py) = frame.to_pixel(p);
        push_line(&mut out, &format!(
            r##"  <circle cx="{px:.1}" cy="{py:.1}" r="6" fill="{}"/>"##,
            hex(color)
        ));
    }

    // Legend
    let lx = right - 110.0;
    let ly = top + 15.0;
    push_line(&mut out, &format!(
        r##"  <rect x="{:.1}" y="{:.1}" width="100" height="80" fill="white" stroke="#CCCCCC"/>
  <path d="M{:.1},{:.1} L{:.1},{:.1} M{:.1},{:.1} L{:.1},{:.1}" stroke="black" stroke-width="2"/>
  <text x="{:.1}" y="{:.1}" font-size="14" fill="#333333">COM</text>
  <circle cx="{:.1}" cy="{:.1}" r="6" fill="{}"/>
  <text x="{:.1}" y="{:.1}" font-size="14" fill="#333333">z1</text>
  <circle cx="{:.1}" cy="{:.1}" r="6" fill="{}"/>
  <text x="{:.1}" y="{:.1}" font-size="14" fill="#333333">z2</text>"##,
        lx - 5.0,
        ly - 10.0,
        lx + 4.0,
        ly + 4.0,
        lx + 16.0,
        ly + 16.0,
        lx + 4.0,
        ly + 16.0,
        lx + 16.0,
        ly + 4.0,
        lx + 30.0,
        ly + 15.0,
        lx + 10.0,
        ly + 35.0,
        hex(Z1_COLOR),
        lx + 30.0,
        ly + 40.0,
        lx + 10.0,
        ly + 58.0,
        hex(Z2_COLOR),
        lx + 30.0,
        ly + 63.0
    ));

    push_line(&mut out, &format!(
        r##"  <text x="{:.1}" y="{:.1}" text-anchor="middle" font-size="18" fill="#333333">{}</text>
</svg>"##,
        frame.width / 2.0,
        top - 20.0,
        plot_title(&curves.lens)
    ));
    out
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}

fn write_scatter(
    out: &mut String,
    frame: &PlotFrame,
    points: impl Iterator<Item = PlanePoint>,
    color: [u8; 3],
    radius: f64,
) {
    push_line(out, &format!(r##"  <g fill="{}">"##, hex(color)));
    for p in points.filter(PlanePoint::is_finite) {
        let (px, py) = frame.to_pixel(p);
        push_line(out, &format!(r##"    <circle cx="{px:.2}" cy="{py:.2}" r="{radius}"/>"##));
    }
    out.push_str("  </g>\n");
}
