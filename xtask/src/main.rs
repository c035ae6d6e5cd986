use axial::axis::RecordingTarget;
use axial::{
    AxisActor, AxisPosition, AxisSpec, AxisType, Bounds, Drawable, MatrixViewport, RenderPass,
    TickLocation, Viewport,
};
use camino::Utf8PathBuf;
use glam::{DMat4, DVec3, dvec3};
use rayon::prelude::*;
use std::fmt::Write as _;
use std::fs;

const SIZE: f64 = 240.0;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: cargo run -p xtask -- <command> [OUT]");
        eprintln!("Commands:");
        eprintln!("  dump       Write tick points of every axis configuration as text");
        eprintln!("  gallery    Generate an HTML page drawing every axis configuration");
        std::process::exit(1);
    }

    let out = args.get(2).map(Utf8PathBuf::from);
    match args[1].as_str() {
        "dump" => dump(out.unwrap_or_else(|| target_dir().join("axial-dump.txt"))),
        "gallery" => gallery(out.unwrap_or_else(|| target_dir().join("axial-gallery.html"))),
        _ => {
            eprintln!("Unknown command: {}", args[1]);
            std::process::exit(1);
        }
    }
}

fn target_dir() -> Utf8PathBuf {
    Utf8PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../target")
}

/// One cell of the configuration grid.
#[derive(Debug, Clone, Copy)]
struct Case {
    axis_type: AxisType,
    position: AxisPosition,
    location: TickLocation,
}

impl Case {
    fn name(&self) -> String {
        format!("{:?}-{:?}-{:?}", self.axis_type, self.position, self.location)
    }
}

fn cases() -> Vec<Case> {
    let mut out = Vec::new();
    for axis_type in AxisType::ALL {
        for position in AxisPosition::ALL {
            for location in TickLocation::ALL {
                out.push(Case { axis_type, position, location });
            }
        }
    }
    out
}

fn bounds() -> Bounds {
    Bounds::new(0.0, 10.0, 0.0, 10.0, 0.0, 10.0)
}

/// Endpoints of the box edge an axis of `case` runs along.
fn edge(case: &Case) -> (DVec3, DVec3) {
    let b = bounds().0;
    let frame = axial::axis::AxisFrame::new(case.axis_type, case.position);
    let mut p1 = DVec3::ZERO;
    for (axis, mult) in [(frame.perp_a, frame.mult_a), (frame.perp_b, frame.mult_b)] {
        p1[axis] = if mult < 0.0 { b[2 * axis] } else { b[2 * axis + 1] };
    }
    let mut p2 = p1;
    p2[frame.sweep] = b[2 * frame.sweep + 1];
    (p1, p2)
}

fn build(case: &Case, viewport: &MatrixViewport) -> (AxisActor, RecordingTarget) {
    let (p1, p2) = edge(case);
    let spec = AxisSpec::default()
        .with_points(p1, p2)
        .with_range(0.0, 10.0)
        .with_bounds(bounds())
        .with_type(case.axis_type, case.position)
        .with_tick_location(case.location)
        .with_major(0.0, 2.5)
        .with_minor(0.0, 0.5)
        .with_gridline_lengths([10.0, 10.0, 10.0]);
    let mut axis = AxisActor::with_spec(spec).expect("grid cases are valid");
    axis.set_labels(&["0", "2.5", "5", "7.5", "10"]);
    axis.set_title(&format!("{:?}", case.axis_type));
    axis.update_visibility(|v| v.gridlines = true);

    let mut target = RecordingTarget::default();
    axis.render_opaque(viewport, &mut target);
    (axis, target)
}

/// Isometric-ish view of the 0..10 cube.
fn viewport() -> MatrixViewport {
    let view = DMat4::look_at_rh(dvec3(30.0, 20.0, 40.0), dvec3(5.0, 5.0, 5.0), DVec3::Y);
    let proj = DMat4::orthographic_rh_gl(-12.0, 12.0, -12.0, 12.0, 0.1, 200.0);
    MatrixViewport::new(proj * view, SIZE, SIZE)
}

fn dump(out: Utf8PathBuf) {
    let vp = viewport();
    let sections: Vec<String> = cases()
        .par_iter()
        .map(|case| {
            let (axis, _) = build(case, &vp);
            let t = axis.tick_points();
            let mut s = String::new();
            writeln!(s, "== {}", case.name()).unwrap();
            for (what, points) in [
                ("minor", &t.minor),
                ("major", &t.major),
                ("gridlines", &t.gridlines),
                ("gridpolys", &t.gridpolys),
            ] {
                writeln!(s, "{what}: {}", points.len() / 4).unwrap();
                for group in points.chunks(4) {
                    let line: Vec<String> = group
                        .iter()
                        .map(|p| format!("({:.3} {:.3} {:.3})", p.x, p.y, p.z))
                        .collect();
                    writeln!(s, "  {}", line.join(" ")).unwrap();
                }
            }
            for label in axis.labels().iter().take(axis.labels_built()) {
                let p = label.billboard.position;
                writeln!(s, "label {:>4}: ({:.3} {:.3} {:.3})", label.text, p.x, p.y, p.z).unwrap();
            }
            let p = axis.title().billboard.position;
            writeln!(s, "title: ({:.3} {:.3} {:.3})", p.x, p.y, p.z).unwrap();
            s
        })
        .collect();

    write_output(&out, &sections.join("\n"));
}

fn gallery(out: Utf8PathBuf) {
    let vp = viewport();
    let cards: Vec<String> = cases()
        .par_iter()
        .map(|case| {
            let (axis, target) = build(case, &vp);
            card(case, &axis, &target, &vp)
        })
        .collect();

    let mut html = String::new();
    html.push_str(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>Axis gallery</title>
    <style>
        body { font-family: system-ui, sans-serif; margin: 0; padding: 24px; background: #eee; color: #333; }
        h1 { font-weight: 600; font-size: 20px; margin: 0 0 24px 0; }
        .grid { display: flex; flex-wrap: wrap; gap: 16px; }
        .card { background: white; border-radius: 8px; box-shadow: 0 1px 3px rgba(0,0,0,0.08); padding: 8px; }
        .card h2 { font-size: 12px; font-weight: 500; margin: 0 0 4px 0; font-family: ui-monospace, monospace; }
        svg text { font-size: 9px; }
    </style>
</head>
<body>
<h1>Axis gallery</h1>
<div class="grid">
"#,
    );
    for c in &cards {
        html.push_str(c);
    }
    html.push_str("</div>\n</body></html>\n");

    write_output(&out, &html);
}

fn card(case: &Case, axis: &AxisActor, target: &RecordingTarget, vp: &MatrixViewport) -> String {
    // display y grows upward; SVG y grows downward
    let to_svg = |p: DVec3| {
        let d = vp.world_to_display(p);
        (d.x, SIZE - d.y)
    };

    let mut body = String::new();
    for drawable in target.in_pass(RenderPass::Opaque) {
        match drawable {
            Drawable::Lines(lines) => {
                for (a, b) in lines.segment_points() {
                    let (x1, y1) = to_svg(a);
                    let (x2, y2) = to_svg(b);
                    write!(
                        body,
                        r#"<line x1="{x1:.1}" y1="{y1:.1}" x2="{x2:.1}" y2="{y2:.1}" stroke="black" stroke-width="0.6"/>"#
                    )
                    .unwrap();
                }
            }
            Drawable::Billboard(text) => {
                let (x, y) = to_svg(text.position);
                let anchor = if text.auto_center { "middle" } else { "start" };
                write!(
                    body,
                    r#"<text x="{x:.1}" y="{y:.1}" text-anchor="{anchor}">{}</text>"#,
                    html_escape(&text.text)
                )
                .unwrap();
            }
            Drawable::Polys(_) | Drawable::Overlay(_) => {}
        }
    }

    format!(
        r#"<div class="card">
    <h2>{} ({} labels)</h2>
    <svg width="{SIZE}" height="{SIZE}" viewBox="0 0 {SIZE} {SIZE}">{body}</svg>
</div>
"#,
        case.name(),
        axis.labels_built(),
    )
}

fn write_output(out: &Utf8PathBuf, contents: &str) {
    if let Some(dir) = out.parent() {
        fs::create_dir_all(dir).expect("Failed to create output directory");
    }
    fs::write(out, contents).expect("Failed to write output");
    println!("Generated {out}");
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
