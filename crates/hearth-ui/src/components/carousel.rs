//! Slide carousel with optional looping and autoplay

use super::button::{button_classes, ButtonSize, ButtonVariant};
use super::slider::Orientation;
use crate::region::{Region, SwapWidget};
use hearth_html::prelude::*;
use serde_json::json;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CarouselState {
    pub index: usize,
    pub playing: bool,
}

#[derive(Debug, Clone, Default)]
pub struct Carousel {
    pub slides: Vec<Vec<Node>>,
    pub looping: bool,
    /// Autoplay interval; `None` disables autoplay and its control
    pub autoplay_ms: Option<u64>,
    pub orientation: Orientation,
    pub class: String,
}

impl Carousel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slide(mut self, content: impl IntoIterator<Item = Node>) -> Self {
        self.slides.push(content.into_iter().collect());
        self
    }

    pub fn looping(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    pub fn autoplay_ms(mut self, ms: u64) -> Self {
        self.autoplay_ms = Some(ms.max(100));
        self
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    fn last(&self) -> usize {
        self.slides.len().saturating_sub(1)
    }

    pub fn can_prev(&self, state: &CarouselState) -> bool {
        self.slides.len() > 1 && (self.looping || state.index > 0)
    }

    pub fn can_next(&self, state: &CarouselState) -> bool {
        self.slides.len() > 1 && (self.looping || state.index < self.last())
    }

    pub fn prev(&self, state: &mut CarouselState) -> bool {
        if !self.can_prev(state) {
            return false;
        }
        state.index = if state.index == 0 {
            self.last()
        } else {
            state.index - 1
        };
        true
    }

    /// Advance one slide. Autoplay stops at the last slide of a
    /// non-looping carousel.
    pub fn next(&self, state: &mut CarouselState) -> bool {
        if !self.can_next(state) {
            state.playing = false;
            return false;
        }
        state.index = if state.index >= self.last() {
            0
        } else {
            state.index + 1
        };
        if !self.looping && state.index == self.last() {
            state.playing = false;
        }
        true
    }

    pub fn go_to(&self, state: &mut CarouselState, index: usize) -> bool {
        if index >= self.slides.len() {
            return false;
        }
        state.index = index;
        true
    }

    pub fn toggle_play(&self, state: &mut CarouselState) -> bool {
        if self.autoplay_ms.is_none() {
            return false;
        }
        state.playing = !state.playing;
        true
    }

    fn arrow(&self, region: &Region, forward: bool, enabled: bool) -> Node {
        let vertical = self.orientation == Orientation::Vertical;
        let placement = match (vertical, forward) {
            (false, false) => "-left-12 top-1/2 -translate-y-1/2",
            (false, true) => "-right-12 top-1/2 -translate-y-1/2",
            (true, false) => "-top-12 left-1/2 -translate-x-1/2 rotate-90",
            (true, true) => "-bottom-12 left-1/2 -translate-x-1/2 rotate-90",
        };
        button([
            type_("button"),
            class(button_classes(
                ButtonVariant::Outline,
                ButtonSize::Icon,
                &cn!("absolute h-8 w-8 rounded-full", placement),
            )),
            if_(!enabled, disabled()),
            region.post(if forward { "next" } else { "prev" }),
            if forward {
                crate::icons::chevron_right("h-4 w-4")
            } else {
                crate::icons::chevron_left("h-4 w-4")
            },
            span([
                class("sr-only"),
                text(if forward { "Next slide" } else { "Previous slide" }),
            ]),
        ])
    }
}

impl SwapWidget for Carousel {
    type State = CarouselState;
    const KIND: &'static str = "carousel";

    fn initial_state(&self) -> CarouselState {
        CarouselState::default()
    }

    fn render(&self, region: &Region, state: &CarouselState) -> Node {
        let vertical = self.orientation == Orientation::Vertical;
        let count = self.slides.len();
        let shift = state.index * 100;
        let transform = if vertical {
            format!("transform: translateY(-{shift}%);")
        } else {
            format!("transform: translateX(-{shift}%);")
        };

        region.container([
            role("region"),
            aria("roledescription", "carousel"),
            data("orientation", self.orientation.as_str()),
            class(cn!("relative w-full max-w-xs", self.class)),
            if_with(state.playing, || match self.autoplay_ms {
                Some(ms) => div([
                    class("hidden"),
                    region.post("next"),
                    hx_trigger(format!("every {ms}ms")),
                ]),
                None => Node::empty(),
            }),
            div([
                class("overflow-hidden"),
                aria("live", if state.playing { "off" } else { "polite" }),
                div([
                    class(cn!(
                        "flex transition-transform duration-300",
                        cn_if(vertical, "-mt-4 flex-col", "-ml-4")
                    )),
                    style(transform),
                    map(self.slides.iter().enumerate(), |(i, slide)| {
                        div([
                            role("group"),
                            aria("roledescription", "slide"),
                            aria("label", format!("{} of {}", i + 1, count)),
                            if_(i != state.index, aria("hidden", "true")),
                            data("active", (i == state.index).to_string()),
                            class(cn!(
                                "min-w-0 shrink-0 grow-0 basis-full",
                                cn_if(vertical, "pt-4", "pl-4")
                            )),
                            group(slide.clone()),
                        ])
                    }),
                ]),
            ]),
            self.arrow(region, false, self.can_prev(state)),
            self.arrow(region, true, self.can_next(state)),
            div([
                class("mt-4 flex items-center justify-center gap-2"),
                map(0..count, |i| {
                    button([
                        type_("button"),
                        class(cn!(
                            "h-2 w-2 rounded-full",
                            cn_if(i == state.index, "bg-primary", "bg-muted")
                        )),
                        aria("label", format!("Go to slide {}", i + 1)),
                        if_(i == state.index, aria("current", "true")),
                        region.post("goto"),
                        hx_vals(json!({ "index": i })),
                    ])
                }),
                if_with(self.autoplay_ms.is_some(), || {
                    button([
                        type_("button"),
                        class(button_classes(ButtonVariant::Ghost, ButtonSize::Icon, "ml-2 h-6 w-6")),
                        aria("label", if state.playing { "Pause" } else { "Play" }),
                        region.post("toggle-play"),
                        if state.playing {
                            crate::icons::pause("h-3 w-3")
                        } else {
                            crate::icons::play("h-3 w-3")
                        },
                    ])
                }),
            ]),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carousel(looping: bool) -> Carousel {
        (1..=3)
            .fold(Carousel::new(), |c, n| c.slide([text(n.to_string())]))
            .looping(looping)
    }

    #[test]
    fn ends_are_no_ops_without_looping() {
        let carousel = carousel(false);
        let mut state = carousel.initial_state();
        assert!(!carousel.prev(&mut state));
        assert_eq!(state.index, 0);

        carousel.go_to(&mut state, 2);
        assert!(!carousel.next(&mut state));
        assert_eq!(state.index, 2);
    }

    #[test]
    fn looping_wraps_both_ways() {
        let carousel = carousel(true);
        let mut state = carousel.initial_state();
        carousel.prev(&mut state);
        assert_eq!(state.index, 2);
        carousel.next(&mut state);
        assert_eq!(state.index, 0);
    }

    #[test]
    fn goto_rejects_out_of_range() {
        let carousel = carousel(false);
        let mut state = carousel.initial_state();
        assert!(!carousel.go_to(&mut state, 3));
        assert_eq!(state.index, 0);
    }

    #[test]
    fn autoplay_polls_next_and_stops_at_end() {
        let carousel = carousel(false).autoplay_ms(2000);
        let region = Region::new("car", "/car");
        let mut state = carousel.initial_state();
        assert!(carousel.toggle_play(&mut state));

        let html = carousel.render(&region, &state).to_string();
        assert!(html.contains(r##"hx-post="/car/next" hx-target="#car" hx-swap="outerHTML" hx-trigger="every 2000ms""##));

        carousel.next(&mut state);
        assert!(state.playing);
        carousel.next(&mut state);
        assert_eq!(state.index, 2);
        assert!(!state.playing);
    }

    #[test]
    fn toggle_play_needs_autoplay() {
        let carousel = carousel(true);
        let mut state = carousel.initial_state();
        assert!(!carousel.toggle_play(&mut state));
    }

    #[test]
    fn render_shifts_track_and_marks_active() {
        let carousel = carousel(false);
        let state = CarouselState {
            index: 1,
            playing: false,
        };
        let html = carousel.render(&Region::new("car", "/car"), &state).to_string();
        assert!(html.contains("transform: translateX(-100%);"));
        assert!(html.contains(r#"aria-label="2 of 3" data-active="true""#));
        assert!(html.contains(r#"aria-label="Go to slide 2" aria-current="true""#));
    }
}
