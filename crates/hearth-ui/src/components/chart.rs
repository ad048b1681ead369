//! Server-rendered SVG charts: line, bar, area, pie and donut
//!
//! Cartesian kinds share one plot frame (gridlines, y-axis ticks, x labels).
//! Pie and donut plot the first series against the labels.

use crate::region::{Region, SwapWidget};
use hearth_html::prelude::*;
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, TAU};
use std::fmt;
use std::sync::Arc;

const PALETTE: [&str; 5] = [
    "hsl(var(--chart-1))",
    "hsl(var(--chart-2))",
    "hsl(var(--chart-3))",
    "hsl(var(--chart-4))",
    "hsl(var(--chart-5))",
];

const PAD_LEFT: f64 = 40.0;
const PAD_RIGHT: f64 = 16.0;
const PAD_TOP: f64 = 16.0;
const PAD_BOTTOM: f64 = 32.0;
const TICKS: usize = 4;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    #[default]
    Line,
    Bar,
    Area,
    Pie,
    Donut,
}

impl ChartKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChartKind::Line => "line",
            ChartKind::Bar => "bar",
            ChartKind::Area => "area",
            ChartKind::Pie => "pie",
            ChartKind::Donut => "donut",
        }
    }

    fn is_radial(&self) -> bool {
        matches!(self, ChartKind::Pie | ChartKind::Donut)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    pub name: String,
    pub color: Option<String>,
    pub values: Vec<f64>,
}

impl ChartSeries {
    pub fn new(series_name: impl Into<String>, values: impl IntoIterator<Item = f64>) -> Self {
        Self {
            name: series_name.into(),
            color: None,
            values: values.into_iter().collect(),
        }
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub series: Vec<ChartSeries>,
}

impl ChartData {
    pub fn new<S: Into<String>>(labels: impl IntoIterator<Item = S>) -> Self {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
            series: Vec::new(),
        }
    }

    pub fn series(mut self, series: ChartSeries) -> Self {
        self.series.push(series);
        self
    }

    fn is_empty(&self) -> bool {
        self.labels.is_empty() || self.series.iter().all(|s| s.values.is_empty())
    }

    /// `(low, high)` of the value axis; always includes zero.
    fn bounds(&self) -> (f64, f64) {
        let finite = self
            .series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .filter(|v| v.is_finite());
        let (lo, hi) = finite.fold((0.0_f64, 0.0_f64), |(lo, hi), v| (lo.min(v), hi.max(v)));
        if hi - lo <= f64::EPSILON {
            (lo, lo + 1.0)
        } else {
            (lo, nice_ceiling(hi))
        }
    }
}

/// Fresh data for a chart's refresh route.
pub trait ChartSource: Send + Sync {
    fn load(&self) -> ChartData;
}

impl<F> ChartSource for F
where
    F: Fn() -> ChartData + Send + Sync,
{
    fn load(&self) -> ChartData {
        self()
    }
}

/// Round up to 1, 2, 2.5, 5 or 10 times a power of ten.
fn nice_ceiling(v: f64) -> f64 {
    if v <= 0.0 {
        return v;
    }
    let magnitude = 10f64.powf(v.log10().floor());
    let scaled = v / magnitude;
    let step = [1.0, 2.0, 2.5, 5.0, 10.0]
        .into_iter()
        .find(|s| scaled <= *s)
        .unwrap_or(10.0);
    step * magnitude
}

/// SVG coordinate: two decimals, trailing zeros trimmed.
fn coord(v: f64) -> String {
    let fixed = format!("{v:.2}");
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Axis label: integers plain, otherwise one decimal.
pub fn tick_label(v: f64) -> String {
    if (v - v.round()).abs() < 1e-9 {
        format!("{}", v.round() as i64)
    } else {
        format!("{v:.1}")
    }
}

#[derive(Clone)]
pub struct Chart {
    pub kind: ChartKind,
    pub title: String,
    pub width: f64,
    pub height: f64,
    pub data: ChartData,
    pub source: Option<Arc<dyn ChartSource>>,
    /// Poll `{base}/data` at this interval
    pub refresh_ms: Option<u64>,
    pub show_grid: bool,
    pub show_legend: bool,
    pub class: String,
}

impl fmt::Debug for Chart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chart")
            .field("kind", &self.kind)
            .field("title", &self.title)
            .field("data", &self.data)
            .field("source", &self.source.is_some())
            .field("refresh_ms", &self.refresh_ms)
            .finish()
    }
}

impl Chart {
    pub fn new(kind: ChartKind, data: ChartData) -> Self {
        Self {
            kind,
            title: String::new(),
            width: 600.0,
            height: 300.0,
            data,
            source: None,
            refresh_ms: None,
            show_grid: true,
            show_legend: true,
            class: String::new(),
        }
    }

    pub fn title(mut self, chart_title: impl Into<String>) -> Self {
        self.title = chart_title.into();
        self
    }

    pub fn size(mut self, w: f64, h: f64) -> Self {
        self.width = w.max(PAD_LEFT + PAD_RIGHT + 1.0);
        self.height = h.max(PAD_TOP + PAD_BOTTOM + 1.0);
        self
    }

    pub fn source(mut self, source: impl ChartSource + 'static) -> Self {
        self.source = Some(Arc::new(source));
        self
    }

    pub fn refresh_ms(mut self, ms: u64) -> Self {
        self.refresh_ms = Some(ms.max(250));
        self
    }

    pub fn show_grid(mut self, on: bool) -> Self {
        self.show_grid = on;
        self
    }

    pub fn show_legend(mut self, on: bool) -> Self {
        self.show_legend = on;
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    /// Data from the source when one is set, otherwise the static data.
    pub fn current_data(&self) -> ChartData {
        match &self.source {
            Some(source) => source.load(),
            None => self.data.clone(),
        }
    }

    fn color(series: &ChartSeries, index: usize) -> String {
        series
            .color
            .clone()
            .unwrap_or_else(|| PALETTE[index % PALETTE.len()].to_string())
    }

    fn plot_box(&self) -> (f64, f64, f64, f64) {
        (
            PAD_LEFT,
            PAD_TOP,
            self.width - PAD_LEFT - PAD_RIGHT,
            self.height - PAD_TOP - PAD_BOTTOM,
        )
    }

    fn frame(&self, chart_data: &ChartData, lo: f64, hi: f64) -> Node {
        let (left, top, plot_w, plot_h) = self.plot_box();
        let bottom = top + plot_h;
        let n = chart_data.labels.len();
        let ticks = (0..=TICKS).map(|i| {
            let v = lo + (hi - lo) * i as f64 / TICKS as f64;
            let y = bottom - plot_h * i as f64 / TICKS as f64;
            g([
                if_with(self.show_grid, || {
                    line([
                        attr("x1", coord(left)),
                        attr("x2", coord(left + plot_w)),
                        attr("y1", coord(y)),
                        attr("y2", coord(y)),
                        stroke("currentColor"),
                        attr("stroke-opacity", "0.1"),
                    ])
                }),
                text_el([
                    attr("x", coord(left - 8.0)),
                    attr("y", coord(y)),
                    attr("text-anchor", "end"),
                    attr("dominant-baseline", "middle"),
                    class("fill-muted-foreground text-[10px]"),
                    text(tick_label(v)),
                ]),
            ])
        });
        let labels = chart_data.labels.iter().enumerate().map(|(i, label_text)| {
            text_el([
                attr("x", coord(self.x_center(i, n))),
                attr("y", coord(bottom + 18.0)),
                attr("text-anchor", "middle"),
                class("fill-muted-foreground text-[10px]"),
                text(label_text.clone()),
            ])
        });
        g([
            class("chart-axes"),
            group(ticks.collect::<Vec<_>>()),
            line([
                attr("x1", coord(left)),
                attr("x2", coord(left + plot_w)),
                attr("y1", coord(bottom)),
                attr("y2", coord(bottom)),
                stroke("currentColor"),
                attr("stroke-opacity", "0.3"),
            ]),
            group(labels.collect::<Vec<_>>()),
        ])
    }

    /// Horizontal center of category `i` of `n`.
    fn x_center(&self, i: usize, n: usize) -> f64 {
        let (left, _, plot_w, _) = self.plot_box();
        match (self.kind, n) {
            (_, 0) => left,
            (ChartKind::Bar, _) => left + plot_w * (i as f64 + 0.5) / n as f64,
            (_, 1) => left + plot_w / 2.0,
            _ => left + plot_w * i as f64 / (n - 1) as f64,
        }
    }

    fn y_at(&self, v: f64, lo: f64, hi: f64) -> f64 {
        let (_, top, _, plot_h) = self.plot_box();
        let clamped = v.clamp(lo, hi);
        top + plot_h * (1.0 - (clamped - lo) / (hi - lo))
    }

    fn points(&self, series: &ChartSeries, n: usize, lo: f64, hi: f64) -> Vec<(f64, f64)> {
        series
            .values
            .iter()
            .take(n)
            .enumerate()
            .filter(|(_, v)| v.is_finite())
            .map(|(i, v)| (self.x_center(i, n), self.y_at(*v, lo, hi)))
            .collect()
    }

    fn cartesian(&self, chart_data: &ChartData) -> Node {
        let (lo, hi) = chart_data.bounds();
        let n = chart_data.labels.len();
        let (_, _, plot_w, _) = self.plot_box();
        let baseline = self.y_at(0.0, lo, hi);

        let marks = chart_data.series.iter().enumerate().map(|(si, series)| {
            let color = Self::color(series, si);
            match self.kind {
                ChartKind::Bar => {
                    let band = plot_w / n.max(1) as f64;
                    let gap = band * 0.2;
                    let bar_w = (band - gap) / chart_data.series.len().max(1) as f64;
                    g([
                        data("series", series.name.clone()),
                        fill(color),
                        map(series.values.iter().take(n).enumerate(), |(i, v)| {
                            if !v.is_finite() {
                                return Node::empty();
                            }
                            let x = PAD_LEFT + band * i as f64 + gap / 2.0 + bar_w * si as f64;
                            let y = self.y_at(*v, lo, hi);
                            rect([
                                attr("x", coord(x)),
                                attr("y", coord(y.min(baseline))),
                                width(coord(bar_w)),
                                height(coord((baseline - y).abs())),
                                attr("rx", "2"),
                                title_el([text(format!(
                                    "{}: {}",
                                    chart_data.labels[i],
                                    tick_label(*v)
                                ))]),
                            ])
                        }),
                    ])
                }
                ChartKind::Area => {
                    let pts = self.points(series, n, lo, hi);
                    let Some((first, last)) = pts.first().zip(pts.last()) else {
                        return Node::empty();
                    };
                    let mut outline = format!("M{},{}", coord(first.0), coord(baseline));
                    for (x, y) in &pts {
                        outline.push_str(&format!(" L{},{}", coord(*x), coord(*y)));
                    }
                    outline.push_str(&format!(" L{},{} Z", coord(last.0), coord(baseline)));
                    g([
                        data("series", series.name.clone()),
                        path([d(outline), fill(color.clone()), attr("fill-opacity", "0.3")]),
                        polyline([
                            attr("points", polyline_points(&pts)),
                            fill("none"),
                            stroke(color),
                            attr("stroke-width", "2"),
                        ]),
                    ])
                }
                _ => {
                    let pts = self.points(series, n, lo, hi);
                    g([
                        data("series", series.name.clone()),
                        polyline([
                            attr("points", polyline_points(&pts)),
                            fill("none"),
                            stroke(color.clone()),
                            attr("stroke-width", "2"),
                        ]),
                        map(&pts, |(x, y)| {
                            circle([
                                attr("cx", coord(*x)),
                                attr("cy", coord(*y)),
                                attr("r", "3"),
                                fill(color.clone()),
                            ])
                        }),
                    ])
                }
            }
        });

        g([
            self.frame(chart_data, lo, hi),
            group(marks.collect::<Vec<_>>()),
        ])
    }

    fn radial(&self, chart_data: &ChartData) -> Node {
        let Some(series) = chart_data.series.first() else {
            return Node::empty();
        };
        let slices: Vec<(usize, f64)> = series
            .values
            .iter()
            .take(chart_data.labels.len())
            .copied()
            .enumerate()
            .filter(|(_, v)| v.is_finite() && *v > 0.0)
            .collect();
        let total: f64 = slices.iter().map(|(_, v)| v).sum();
        if total <= 0.0 {
            return Node::empty();
        }

        let cx = self.width / 2.0;
        let cy = self.height / 2.0;
        let outer = (self.width.min(self.height) / 2.0 - 8.0).max(1.0);
        let inner = if self.kind == ChartKind::Donut {
            outer * 0.6
        } else {
            0.0
        };
        let at = |angle: f64, r: f64| (cx + r * angle.cos(), cy + r * angle.sin());

        let mut start = -FRAC_PI_2;
        let wedges = slices.iter().map(|(i, v)| {
            let sweep = v / total * TAU;
            let end = start + sweep;
            let color = PALETTE[i % PALETTE.len()];
            let tooltip = title_el([text(format!("{}: {}", chart_data.labels[*i], tick_label(*v)))]);
            let shape = if slices.len() == 1 {
                // A full turn cannot be drawn as a single arc.
                if inner > 0.0 {
                    circle([
                        attr("cx", coord(cx)),
                        attr("cy", coord(cy)),
                        attr("r", coord((outer + inner) / 2.0)),
                        fill("none"),
                        stroke(color),
                        attr("stroke-width", coord(outer - inner)),
                        tooltip,
                    ])
                } else {
                    circle([
                        attr("cx", coord(cx)),
                        attr("cy", coord(cy)),
                        attr("r", coord(outer)),
                        fill(color),
                        tooltip,
                    ])
                }
            } else {
                let large = if sweep > std::f64::consts::PI { 1 } else { 0 };
                let (ox1, oy1) = at(start, outer);
                let (ox2, oy2) = at(end, outer);
                let outline = if inner > 0.0 {
                    let (ix1, iy1) = at(end, inner);
                    let (ix2, iy2) = at(start, inner);
                    format!(
                        "M{},{} A{},{} 0 {} 1 {},{} L{},{} A{},{} 0 {} 0 {},{} Z",
                        coord(ox1), coord(oy1), coord(outer), coord(outer), large, coord(ox2), coord(oy2),
                        coord(ix1), coord(iy1), coord(inner), coord(inner), large, coord(ix2), coord(iy2),
                    )
                } else {
                    format!(
                        "M{},{} L{},{} A{},{} 0 {} 1 {},{} Z",
                        coord(cx), coord(cy), coord(ox1), coord(oy1), coord(outer), coord(outer), large,
                        coord(ox2), coord(oy2),
                    )
                };
                path([
                    d(outline),
                    fill(color),
                    stroke("hsl(var(--background))"),
                    attr("stroke-width", "1"),
                    tooltip,
                ])
            };
            start = end;
            g([data("slice", chart_data.labels[*i].clone()), shape])
        });
        g([group(wedges.collect::<Vec<_>>())])
    }

    fn legend(&self, chart_data: &ChartData) -> Node {
        let entries: Vec<(String, String)> = if self.kind.is_radial() {
            chart_data
                .labels
                .iter()
                .enumerate()
                .map(|(i, l)| (l.clone(), PALETTE[i % PALETTE.len()].to_string()))
                .collect()
        } else {
            chart_data
                .series
                .iter()
                .enumerate()
                .map(|(i, s)| (s.name.clone(), Self::color(s, i)))
                .collect()
        };
        div([
            class("flex flex-wrap items-center justify-center gap-4 pt-3 text-xs"),
            map(entries, |(entry_label, color)| {
                div([
                    class("flex items-center gap-1.5"),
                    span([
                        class("h-2 w-2 shrink-0 rounded-[2px]"),
                        style(format!("background-color: {color};")),
                    ]),
                    span([text(entry_label)]),
                ])
            }),
        ])
    }

    /// The chart body for `chart_data`, without the region wrapper.
    pub fn figure(&self, chart_data: &ChartData) -> Node {
        if chart_data.is_empty() {
            return div([
                class("flex h-[200px] items-center justify-center text-sm text-muted-foreground"),
                text("No data"),
            ]);
        }
        let body = if self.kind.is_radial() {
            self.radial(chart_data)
        } else {
            self.cartesian(chart_data)
        };
        group([
            svg([
                attr("xmlns", "http://www.w3.org/2000/svg"),
                view_box(format!("0 0 {} {}", coord(self.width), coord(self.height))),
                role("img"),
                aria("label", self.title.clone()),
                class("h-auto w-full"),
                if_with(!self.title.is_empty(), || title_el([text(self.title.clone())])),
                body,
            ]),
            if_with(self.show_legend, || self.legend(chart_data)),
        ])
    }

    /// The region for `chart_data`.
    pub fn render_data(&self, region: &Region, chart_data: &ChartData) -> Node {
        region.container([
            class(cn!("w-full", self.class)),
            data("chart", self.kind.as_str()),
            match self.refresh_ms {
                Some(ms) => group([region.get("data"), hx_trigger(format!("every {ms}ms"))]),
                None => Node::empty(),
            },
            self.figure(chart_data),
        ])
    }
}

fn polyline_points(pts: &[(f64, f64)]) -> String {
    pts.iter()
        .map(|(x, y)| format!("{},{}", coord(*x), coord(*y)))
        .collect::<Vec<_>>()
        .join(" ")
}

impl SwapWidget for Chart {
    type State = ();
    const KIND: &'static str = "chart";

    fn initial_state(&self) {}

    fn render(&self, region: &Region, _state: &()) -> Node {
        self.render_data(region, &self.current_data())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn visitors() -> ChartData {
        ChartData::new(["Jan", "Feb", "Mar"])
            .series(ChartSeries::new("Desktop", [186.0, 305.0, 237.0]))
            .series(ChartSeries::new("Mobile", [80.0, 200.0, 120.0]).color("#2563eb"))
    }

    #[test_case(0.7 => 1.0)]
    #[test_case(3.0 => 5.0)]
    #[test_case(305.0 => 500.0)]
    #[test_case(240.0 => 250.0)]
    #[test_case(1000.0 => 1000.0)]
    fn nice_ceilings(v: f64) -> f64 {
        nice_ceiling(v)
    }

    #[test]
    fn coords_trim_trailing_zeros() {
        assert_eq!(coord(40.0), "40");
        assert_eq!(coord(12.5), "12.5");
        assert_eq!(coord(1.0 / 3.0), "0.33");
    }

    #[test]
    fn line_chart_has_one_polyline_per_series() {
        let chart = Chart::new(ChartKind::Line, visitors()).title("Visitors");
        let html = chart.figure(&chart.data).to_string();
        assert_eq!(html.matches("<polyline").count(), 2);
        assert!(html.contains(r#"role="img" aria-label="Visitors""#));
        assert!(html.contains("<title>Visitors</title>"));
        assert!(html.contains(r##"stroke="#2563eb""##));
        assert!(html.contains(">500</text>"));
    }

    #[test]
    fn bar_chart_draws_a_rect_per_value() {
        let chart = Chart::new(ChartKind::Bar, visitors());
        let html = chart.figure(&chart.data).to_string();
        assert_eq!(html.matches("<rect").count(), 6);
        assert!(html.contains("<title>Feb: 305</title>"));
    }

    #[test]
    fn area_chart_closes_path_at_baseline() {
        let chart = Chart::new(ChartKind::Area, visitors());
        let html = chart.figure(&chart.data).to_string();
        assert_eq!(html.matches(r#"fill-opacity="0.3""#).count(), 2);
        assert!(html.contains(" Z\""));
    }

    #[test]
    fn pie_and_donut_draw_one_wedge_per_positive_value() {
        let data = ChartData::new(["chrome", "safari", "firefox", "edge"])
            .series(ChartSeries::new("Browsers", [275.0, 200.0, 0.0, 90.0]));
        let pie = Chart::new(ChartKind::Pie, data.clone());
        let html = pie.figure(&data).to_string();
        assert_eq!(html.matches("data-slice=").count(), 3);
        assert!(!html.contains(r#"data-slice="firefox""#));

        let donut = Chart::new(ChartKind::Donut, data.clone());
        let html = donut.figure(&data).to_string();
        assert_eq!(html.matches("<path").count(), 3);
        assert!(html.contains(" 0 0 "));
    }

    #[test]
    fn single_slice_is_a_circle() {
        let data = ChartData::new(["only"]).series(ChartSeries::new("s", [5.0]));
        let html = Chart::new(ChartKind::Pie, data.clone()).figure(&data).to_string();
        assert!(html.contains("<circle"));
        assert!(!html.contains("<path"));
    }

    #[test]
    fn empty_data_renders_placeholder() {
        let chart = Chart::new(ChartKind::Line, ChartData::default());
        let html = chart.figure(&chart.data).to_string();
        assert!(html.contains("No data"));
        assert!(!html.contains("<svg"));
    }

    #[test]
    fn source_feeds_refresh_and_region_polls() {
        let chart = Chart::new(ChartKind::Bar, ChartData::default())
            .source(|| ChartData::new(["a"]).series(ChartSeries::new("s", [1.0])))
            .refresh_ms(5000);
        let html = chart.render(&Region::new("sales", "/chart/sales"), &()).to_string();
        assert!(html.contains(r##"hx-get="/chart/sales/data" hx-target="#sales" hx-swap="outerHTML" hx-trigger="every 5000ms""##));
        assert_eq!(html.matches("<rect").count(), 1);
    }
}
