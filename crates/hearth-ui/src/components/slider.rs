//! Single-value and range slider
//!
//! All arithmetic happens on [`SliderState`], which carries its bounds so
//! every update can quantise and clamp on its own. Values always stay in
//! `[min, max]`, on the step grid measured from `min` (or at `max` when the
//! grid overshoots it), and ordered for ranges.

use crate::region::{Region, SwapWidget};
use hearth_html::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliderState {
    pub values: Vec<i64>,
    pub min: i64,
    pub max: i64,
    pub step: i64,
}

impl SliderState {
    /// Normalise bounds (swap `min > max`, non-positive step becomes 1) and
    /// quantise, clamp and sort the initial values. An empty list starts at
    /// `min`; anything past two values is dropped.
    pub fn new(min: i64, max: i64, step: i64, values: &[i64]) -> Self {
        let (min, max) = if min > max { (max, min) } else { (min, max) };
        let mut state = Self {
            values: Vec::new(),
            min,
            max,
            step: if step <= 0 { 1 } else { step },
        };
        let mut values: Vec<i64> = values
            .iter()
            .take(2)
            .map(|&v| state.quantize(v as f64))
            .collect();
        if values.is_empty() {
            values.push(min);
        }
        values.sort_unstable();
        state.values = values;
        state
    }

    pub fn is_range(&self) -> bool {
        self.values.len() == 2
    }

    /// Snap `raw` to the step grid from `min`, rounding half away from zero,
    /// then clamp into `[min, max]`.
    pub fn quantize(&self, raw: f64) -> i64 {
        if raw.is_nan() {
            return self.min;
        }
        let steps = ((raw - self.min as f64) / self.step as f64).round();
        let snapped = self.min as f64 + steps * self.step as f64;
        // `as` saturates, so the integer clamp is exact even at the i64 extremes.
        (snapped as i64).clamp(self.min, self.max)
    }

    /// Click on the track at `percent` of its length. Range sliders move the
    /// nearest thumb, the lower one on ties. Non-finite input is ignored.
    pub fn track(&mut self, percent: f64) -> bool {
        if !percent.is_finite() || self.values.is_empty() {
            return false;
        }
        let percent = percent.clamp(0.0, 1.0);
        let raw = self.min as f64 + percent * self.span();
        let target = self.quantize(raw);

        let index = if self.is_range() {
            let d0 = self.values[0].abs_diff(target);
            let d1 = self.values[1].abs_diff(target);
            if d1 < d0 {
                1
            } else {
                0
            }
        } else {
            0
        };
        self.values[index] = target;
        self.values.sort_unstable();
        true
    }

    /// Move thumb `index` to `raw`, clamped against its neighbour.
    pub fn set(&mut self, index: usize, raw: f64) -> bool {
        if index >= self.values.len() || !raw.is_finite() {
            return false;
        }
        let mut v = self.quantize(raw);
        if self.is_range() {
            if index == 0 {
                v = v.min(self.values[1]);
            } else {
                v = v.max(self.values[0]);
            }
        }
        self.values[index] = v;
        true
    }

    /// Keyboard step for thumb `index`. Unknown keys are ignored.
    pub fn key(&mut self, index: usize, key: &str) -> bool {
        let Some(&current) = self.values.get(index) else {
            return false;
        };
        let target = match key {
            "ArrowRight" | "ArrowUp" => current.saturating_add(self.step),
            "ArrowLeft" | "ArrowDown" => current.saturating_sub(self.step),
            "PageUp" => current.saturating_add(self.step.saturating_mul(10)),
            "PageDown" => current.saturating_sub(self.step.saturating_mul(10)),
            "Home" => self.min,
            "End" => self.max,
            _ => return false,
        };
        self.set(index, target as f64)
    }

    /// Position of `v` along the track, 0–100.
    pub fn percent_of(&self, v: i64) -> f64 {
        if self.max == self.min {
            return 0.0;
        }
        (i128::from(v) - i128::from(self.min)) as f64 * 100.0 / self.span()
    }

    /// `max - min`, widened so full-range bounds cannot overflow.
    fn span(&self) -> f64 {
        (i128::from(self.max) - i128::from(self.min)) as f64
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Slider {
    /// Form field name for the hidden inputs
    pub name: String,
    pub min: i64,
    pub max: i64,
    pub step: i64,
    pub default_values: Vec<i64>,
    pub orientation: Orientation,
    pub disabled: bool,
    pub class: String,
}

impl Slider {
    pub fn new(field_name: impl Into<String>) -> Self {
        Self {
            name: field_name.into(),
            min: 0,
            max: 100,
            step: 1,
            default_values: vec![50],
            orientation: Orientation::Horizontal,
            disabled: false,
            class: String::new(),
        }
    }

    pub fn bounds(mut self, lo: i64, hi: i64) -> Self {
        self.min = lo;
        self.max = hi;
        self
    }

    pub fn step(mut self, step: i64) -> Self {
        self.step = step;
        self
    }

    pub fn values(mut self, values: impl IntoIterator<Item = i64>) -> Self {
        self.default_values = values.into_iter().collect();
        self
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    fn input_name(&self, index: usize, range: bool) -> String {
        if range {
            format!("{}[{}]", self.name, index)
        } else {
            self.name.clone()
        }
    }
}

const KEY_FILTER: &str = "keydown[key=='ArrowLeft'||key=='ArrowRight'||key=='ArrowUp'||key=='ArrowDown'||key=='PageUp'||key=='PageDown'||key=='Home'||key=='End']";

impl SwapWidget for Slider {
    type State = SliderState;
    const KIND: &'static str = "slider";

    fn initial_state(&self) -> SliderState {
        SliderState::new(self.min, self.max, self.step, &self.default_values)
    }

    fn render(&self, region: &Region, state: &SliderState) -> Node {
        let vertical = self.orientation == Orientation::Vertical;
        let range = state.is_range();
        let first = state.values.first().copied().unwrap_or(state.min);
        let last = state.values.last().copied().unwrap_or(state.min);
        let (lo, hi) = if range {
            (state.percent_of(first), state.percent_of(last))
        } else {
            (0.0, state.percent_of(last))
        };
        let fill_style = if vertical {
            format!("bottom: {lo:.2}%; top: {:.2}%;", 100.0 - hi)
        } else {
            format!("left: {lo:.2}%; right: {:.2}%;", 100.0 - hi)
        };
        let percent_expr = if vertical {
            "{percent: 1 - (event.clientY - this.getBoundingClientRect().top) / this.offsetHeight}"
        } else {
            "{percent: (event.clientX - this.getBoundingClientRect().left) / this.offsetWidth}"
        };

        region.container([
            class(cn!(
                "relative flex touch-none select-none items-center",
                cn_if(vertical, "h-full min-h-44 w-auto flex-col", "w-full"),
                self.class
            )),
            data("orientation", self.orientation.as_str()),
            if_(self.disabled, data("disabled", "")),
            span([
                class(cn!(
                    "relative grow overflow-hidden rounded-full bg-primary/20",
                    cn_if(vertical, "h-full w-1.5", "h-1.5 w-full")
                )),
                data("orientation", self.orientation.as_str()),
                if_with(!self.disabled, || {
                    group([
                        region.post("track"),
                        hx_trigger("click"),
                        hx_vals_js(percent_expr),
                    ])
                }),
                span([
                    class(cn!("absolute bg-primary", cn_if(vertical, "w-full", "h-full"))),
                    style(fill_style),
                ]),
            ]),
            map(state.values.iter().enumerate(), |(index, &current)| {
                let pos = state.percent_of(current);
                let thumb_style = if vertical {
                    format!("bottom: calc({pos:.2}% - 0.5rem);")
                } else {
                    format!("left: calc({pos:.2}% - 0.5rem);")
                };
                group([
                    span([
                        role("slider"),
                        tab_index(if self.disabled { -1 } else { 0 }),
                        class("absolute block h-4 w-4 rounded-full border border-primary/50 bg-background shadow transition-colors focus-visible:outline-none focus-visible:ring-1 focus-visible:ring-ring disabled:pointer-events-none disabled:opacity-50"),
                        style(thumb_style),
                        aria("valuemin", state.min.to_string()),
                        aria("valuemax", state.max.to_string()),
                        aria("valuenow", current.to_string()),
                        aria("orientation", self.orientation.as_str()),
                        if_(self.disabled, aria("disabled", "true")),
                        if_with(!self.disabled, || {
                            group([
                                region.post("key"),
                                hx_trigger(KEY_FILTER),
                                hx_vals_js(format!("{{index: {index}, key: event.key}}")),
                            ])
                        }),
                    ]),
                    input([
                        type_("hidden"),
                        name(self.input_name(index, range)),
                        value(current.to_string()),
                    ]),
                ])
            }),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn range_clamp_scenario() {
        let mut state = SliderState::new(0, 100, 10, &[20, 80]);
        state.set(0, 95.0);
        assert_eq!(state.values, vec![80, 80]);
        state.set(1, 5.0);
        assert_eq!(state.values, vec![80, 80]);
    }

    #[test]
    fn keys_saturate_at_the_i64_ceiling() {
        let mut state = SliderState::new(0, i64::MAX, 1, &[i64::MAX]);
        assert!(state.key(0, "ArrowRight"));
        assert_eq!(state.values, vec![i64::MAX]);
        assert!(state.key(0, "PageUp"));
        assert_eq!(state.values, vec![i64::MAX]);
        state.key(0, "Home");
        assert!(state.key(0, "PageDown"));
        assert_eq!(state.values, vec![0]);
    }

    #[test]
    fn full_i64_range_tracks_without_overflow() {
        let mut state = SliderState::new(i64::MIN, i64::MAX, 1, &[0]);
        assert!(state.track(0.5));
        assert_eq!(state.values, vec![0]);
        state.track(1.0);
        assert_eq!(state.values, vec![i64::MAX]);
        assert_eq!(state.percent_of(i64::MAX), 100.0);
        state.track(0.0);
        assert_eq!(state.values, vec![i64::MIN]);
        state.key(0, "ArrowLeft");
        assert_eq!(state.values, vec![i64::MIN]);

        let mut range = SliderState::new(i64::MIN, i64::MAX, 1, &[i64::MIN, i64::MAX]);
        range.track(0.5);
        assert_eq!(range.values, vec![i64::MIN, 0]);
    }

    #[test]
    fn new_normalises_bounds_step_and_values() {
        let state = SliderState::new(100, 0, 0, &[70, 3]);
        assert_eq!((state.min, state.max, state.step), (0, 100, 1));
        assert_eq!(state.values, vec![3, 70]);

        let state = SliderState::new(0, 100, 10, &[140, 14]);
        assert_eq!(state.values, vec![10, 100]);
    }

    #[test_case(0.0, 0)]
    #[test_case(0.5, 60 ; "half step rounds away from zero")]
    #[test_case(0.24, 20)]
    #[test_case(1.0, 100)]
    #[test_case(7.0, 100 ; "percent above one clamps")]
    fn track_quantises(percent: f64, expected: i64) {
        let mut state = SliderState::new(0, 100, 20, &[0]);
        assert!(state.track(percent));
        assert_eq!(state.values, vec![expected]);
    }

    #[test]
    fn track_moves_nearest_thumb_lower_on_tie() {
        let mut state = SliderState::new(0, 100, 1, &[40, 60]);
        state.track(0.5);
        assert_eq!(state.values, vec![50, 60]);

        state.track(0.9);
        assert_eq!(state.values, vec![50, 90]);
    }

    #[test]
    fn non_finite_percent_is_ignored() {
        let mut state = SliderState::new(0, 10, 1, &[5]);
        assert!(!state.track(f64::NAN));
        assert!(!state.track(f64::INFINITY));
        assert_eq!(state.values, vec![5]);
    }

    #[test]
    fn bad_index_is_ignored() {
        let mut state = SliderState::new(0, 10, 1, &[5]);
        assert!(!state.set(1, 3.0));
        assert!(!state.key(4, "Home"));
        assert_eq!(state.values, vec![5]);
    }

    #[test_case("ArrowRight", 55)]
    #[test_case("ArrowUp", 55)]
    #[test_case("ArrowLeft", 45)]
    #[test_case("ArrowDown", 45)]
    #[test_case("PageUp", 100)]
    #[test_case("PageDown", 0)]
    #[test_case("Home", 0)]
    #[test_case("End", 100)]
    fn keyboard_moves(key: &str, expected: i64) {
        let mut state = SliderState::new(0, 100, 5, &[50]);
        assert!(state.key(0, key));
        assert_eq!(state.values, vec![expected]);
    }

    #[test]
    fn unknown_key_is_ignored() {
        let mut state = SliderState::new(0, 100, 5, &[50]);
        assert!(!state.key(0, "Tab"));
        assert_eq!(state.values, vec![50]);
    }

    #[test]
    fn grid_measured_from_min() {
        let state = SliderState::new(3, 20, 5, &[10]);
        assert_eq!(state.values, vec![8]);
        assert_eq!(state.quantize(19.0), 18);
        assert_eq!(state.quantize(21.0), 20);
    }

    #[test]
    fn thumbs_expose_aria_and_hidden_inputs() {
        let slider = Slider::new("price").bounds(0, 100).step(10).values([20, 80]);
        let html = slider
            .render(&Region::new("sl", "/sl"), &slider.initial_state())
            .to_string();
        assert!(html.contains(r#"role="slider""#));
        assert!(html.contains(r#"aria-valuemin="0" aria-valuemax="100" aria-valuenow="20" aria-orientation="horizontal""#));
        assert!(html.contains(r#"<input type="hidden" name="price[0]" value="20">"#));
        assert!(html.contains(r#"<input type="hidden" name="price[1]" value="80">"#));
        assert!(html.contains(r#"hx-vals="js:{index: 1, key: event.key}""#));
        assert!(html.contains("left: 20.00%; right: 20.00%;"));
    }

    #[test]
    fn single_slider_uses_plain_name() {
        let slider = Slider::new("volume");
        let html = slider
            .render(&Region::new("v", "/v"), &slider.initial_state())
            .to_string();
        assert!(html.contains(r#"name="volume" value="50""#));
    }
}
