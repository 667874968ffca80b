//! Frequency distribution plot of the top tokens.

use super::{escape_xml, RenderedImage, SvgCanvas};
use crate::analysis::FrequencyTable;

/// Tokens shown by default.
pub const DEFAULT_TOP_N: usize = 20;

const WIDTH: u32 = 1000;
const HEIGHT: u32 = 500;
const MARGIN_LEFT: f64 = 70.0;
const MARGIN_RIGHT: f64 = 30.0;
const MARGIN_TOP: f64 = 30.0;
const MARGIN_BOTTOM: f64 = 130.0;
const LINE_COLOR: &str = "#1f77b4";

/// Plot the `top_n` most frequent tokens as a non-cumulative line with bars.
pub fn render_frequency_plot(table: &FrequencyTable, top_n: usize) -> RenderedImage {
    let mut canvas = SvgCanvas::new(WIDTH, HEIGHT, "white");
    let top = table.most_common(top_n);

    let plot_w = f64::from(WIDTH) - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_h = f64::from(HEIGHT) - MARGIN_TOP - MARGIN_BOTTOM;
    let x_axis = MARGIN_TOP + plot_h;

    canvas.push(format_args!(
        r#"<line x1="{MARGIN_LEFT}" y1="{x_axis}" x2="{:.1}" y2="{x_axis}" stroke="black"/>"#,
        MARGIN_LEFT + plot_w
    ));
    canvas.push(format_args!(
        r#"<line x1="{MARGIN_LEFT}" y1="{MARGIN_TOP}" x2="{MARGIN_LEFT}" y2="{x_axis}" stroke="black"/>"#
    ));
    canvas.push(format_args!(
        r#"<text x="20" y="{:.1}" font-family="sans-serif" font-size="14" transform="rotate(-90 20 {:.1})" text-anchor="middle">Counts</text>"#,
        MARGIN_TOP + plot_h / 2.0,
        MARGIN_TOP + plot_h / 2.0
    ));
    canvas.push(format_args!(
        r#"<text x="{:.1}" y="{}" font-family="sans-serif" font-size="14" text-anchor="middle">Samples</text>"#,
        MARGIN_LEFT + plot_w / 2.0,
        HEIGHT - 10
    ));

    let Some(&(_, max_count)) = top.first() else {
        return canvas.finish();
    };

    let y_max = nice_ceiling(max_count);
    let y_of = |count: u64| x_axis - plot_h * count as f64 / y_max as f64;
    for tick in ticks(y_max) {
        let y = y_of(tick);
        canvas.push(format_args!(
            r##"<line x1="{MARGIN_LEFT}" y1="{y:.1}" x2="{:.1}" y2="{y:.1}" stroke="#dddddd"/>"##,
            MARGIN_LEFT + plot_w
        ));
        canvas.push(format_args!(
            r#"<text x="{:.1}" y="{:.1}" font-family="sans-serif" font-size="12" text-anchor="end">{tick}</text>"#,
            MARGIN_LEFT - 6.0,
            y + 4.0
        ));
    }

    let step = plot_w / top.len() as f64;
    let bar_w = step * 0.6;
    let mut points = Vec::with_capacity(top.len());
    for (i, (word, count)) in top.iter().enumerate() {
        let cx = MARGIN_LEFT + step * (i as f64 + 0.5);
        let y = y_of(*count);
        points.push(format!("{cx:.1},{y:.1}"));
        canvas.push(format_args!(
            r#"<rect class="bar" x="{:.1}" y="{y:.1}" width="{bar_w:.1}" height="{:.1}" fill="{LINE_COLOR}" fill-opacity="0.25"><title>{}: {count}</title></rect>"#,
            cx - bar_w / 2.0,
            x_axis - y,
            escape_xml(word)
        ));
        canvas.push(format_args!(
            r#"<text class="label" x="{cx:.1}" y="{:.1}" font-family="sans-serif" font-size="12" transform="rotate(-90 {cx:.1} {:.1})" text-anchor="end">{}</text>"#,
            x_axis + 8.0,
            x_axis + 8.0,
            escape_xml(word)
        ));
    }
    canvas.push(format_args!(
        r#"<polyline points="{}" fill="none" stroke="{LINE_COLOR}" stroke-width="2"/>"#,
        points.join(" ")
    ));

    canvas.finish()
}

/// Round up to 1, 2 or 5 times a power of ten.
fn nice_ceiling(value: u64) -> u64 {
    let mut magnitude = 1;
    loop {
        for factor in [1, 2, 5] {
            if factor * magnitude >= value {
                return factor * magnitude;
            }
        }
        magnitude *= 10;
    }
}

fn ticks(y_max: u64) -> Vec<u64> {
    let step = (y_max / 5).max(1);
    (0..=y_max).step_by(step as usize).collect()
}
