//! Month-view date picker
//!
//! Weeks start on Sunday. `today` is a prop so rendering is deterministic.

use super::button::{button_classes, ButtonSize, ButtonVariant};
use crate::region::{Region, SwapWidget};
use chrono::{Datelike, Days, Months, NaiveDate};
use hearth_html::prelude::*;
use serde_json::json;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

const WEEKDAYS: [(&str, &str); 7] = [
    ("Su", "Sunday"),
    ("Mo", "Monday"),
    ("Tu", "Tuesday"),
    ("We", "Wednesday"),
    ("Th", "Thursday"),
    ("Fr", "Friday"),
    ("Sa", "Saturday"),
];

/// Parse `YYYY-MM-DD`.
pub fn parse_date(raw_date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw_date.trim(), DATE_FORMAT).ok()
}

/// First day of `date`'s month.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.day0()))
}

fn month_end(first: NaiveDate) -> NaiveDate {
    first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(first)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarState {
    /// Always the first day of the shown month
    pub month: NaiveDate,
    pub selected: Option<NaiveDate>,
}

#[derive(Debug, Clone)]
pub struct Calendar {
    pub today: NaiveDate,
    pub min: Option<NaiveDate>,
    pub max: Option<NaiveDate>,
    pub default_selected: Option<NaiveDate>,
    pub class: String,
}

impl Calendar {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            min: None,
            max: None,
            default_selected: None,
            class: String::new(),
        }
    }

    pub fn min(mut self, date: NaiveDate) -> Self {
        self.min = Some(date);
        self
    }

    pub fn max(mut self, date: NaiveDate) -> Self {
        self.max = Some(date);
        self
    }

    pub fn selected(mut self, date: NaiveDate) -> Self {
        self.default_selected = Some(date);
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    pub fn in_range(&self, date: NaiveDate) -> bool {
        self.min.map_or(true, |lo| date >= lo) && self.max.map_or(true, |hi| date <= hi)
    }

    /// Show the previous month unless it lies wholly before `min`.
    pub fn prev(&self, state: &mut CalendarState) -> bool {
        let Some(target) = state.month.checked_sub_months(Months::new(1)) else {
            return false;
        };
        if self.min.is_some_and(|lo| month_end(target) < lo) {
            return false;
        }
        state.month = target;
        true
    }

    /// Show the next month unless it lies wholly after `max`.
    pub fn next(&self, state: &mut CalendarState) -> bool {
        let Some(target) = state.month.checked_add_months(Months::new(1)) else {
            return false;
        };
        if self.max.is_some_and(|hi| target > hi) {
            return false;
        }
        state.month = target;
        true
    }

    /// Select `date` and show its month. Out-of-range dates are ignored.
    pub fn select(&self, state: &mut CalendarState, date: NaiveDate) -> bool {
        if !self.in_range(date) {
            return false;
        }
        state.selected = Some(date);
        state.month = month_start(date);
        true
    }

    fn weeks(&self, first: NaiveDate) -> Vec<Vec<NaiveDate>> {
        let lead = u64::from(first.weekday().num_days_from_sunday());
        let grid_start = first - Days::new(lead);
        let cells = lead + u64::from(month_end(first).day());
        let rows = cells.div_ceil(7);
        (0..rows)
            .map(|week| {
                (0..7)
                    .map(|day| grid_start + Days::new(week * 7 + day))
                    .collect()
            })
            .collect()
    }

    fn day(&self, region: &Region, state: &CalendarState, date: NaiveDate) -> Node {
        let outside = date.month() != state.month.month();
        let chosen = state.selected == Some(date);
        let is_today = date == self.today;
        let enabled = self.in_range(date);
        td([
            role("gridcell"),
            class("relative p-0 text-center text-sm"),
            aria_bool("selected", chosen),
            button([
                type_("button"),
                name("day"),
                class(button_classes(
                    ButtonVariant::Ghost,
                    ButtonSize::Icon,
                    &cn!(
                        "h-8 w-8 p-0 font-normal",
                        cn_if(chosen, "bg-primary text-primary-foreground hover:bg-primary hover:text-primary-foreground", ""),
                        cn_if(is_today && !chosen, "bg-accent text-accent-foreground", ""),
                        cn_if(outside, "text-muted-foreground opacity-50", "")
                    ),
                )),
                data("date", date.format(DATE_FORMAT).to_string()),
                if_(is_today, data("today", "true")),
                if_(outside, data("outside", "true")),
                if_(is_today, aria("current", "date")),
                aria("label", date.format("%A, %B %-d, %Y").to_string()),
                if_(!enabled, disabled()),
                region.post("select"),
                hx_vals(json!({ "date": date.format(DATE_FORMAT).to_string() })),
                text(date.day().to_string()),
            ]),
        ])
    }
}

impl SwapWidget for Calendar {
    type State = CalendarState;
    const KIND: &'static str = "calendar";

    fn initial_state(&self) -> CalendarState {
        let selected = self.default_selected.filter(|d| self.in_range(*d));
        CalendarState {
            month: month_start(selected.unwrap_or(self.today)),
            selected,
        }
    }

    fn render(&self, region: &Region, state: &CalendarState) -> Node {
        let first = month_start(state.month);
        let caption_id = region.child_id("caption");
        let before_min = first
            .checked_sub_months(Months::new(1))
            .is_some_and(|p| self.min.is_some_and(|lo| month_end(p) < lo));
        let after_max = first
            .checked_add_months(Months::new(1))
            .is_some_and(|n| self.max.is_some_and(|hi| n > hi));
        let nav_button = |action_name: &str, label_text: &str, enabled: bool, icon: Node, side: &str| {
            button([
                type_("button"),
                class(button_classes(
                    ButtonVariant::Outline,
                    ButtonSize::Icon,
                    &cn!("absolute h-7 w-7 bg-transparent p-0 opacity-50 hover:opacity-100", side),
                )),
                aria("label", label_text),
                if_(!enabled, disabled()),
                region.post(action_name),
                icon,
            ])
        };

        region.container([
            class(cn!("rounded-md border p-3", self.class)),
            div([
                class("relative flex items-center justify-center pt-1"),
                div([
                    id(caption_id.clone()),
                    class("text-sm font-medium"),
                    aria("live", "polite"),
                    role("presentation"),
                    text(first.format("%B %Y").to_string()),
                ]),
                nav_button("prev", "Go to previous month", !before_min, crate::icons::chevron_left("h-4 w-4"), "left-1"),
                nav_button("next", "Go to next month", !after_max, crate::icons::chevron_right("h-4 w-4"), "right-1"),
            ]),
            table([
                role("grid"),
                aria("labelledby", caption_id),
                class("mt-4 w-full border-collapse space-y-1"),
                thead([tr([
                    class("flex"),
                    map(WEEKDAYS, |(short, long)| {
                        th([
                            attr("scope", "col"),
                            aria("label", long),
                            class("w-8 rounded-md text-[0.8rem] font-normal text-muted-foreground"),
                            text(short),
                        ])
                    }),
                ])]),
                tbody([map(self.weeks(first), |week| {
                    tr([
                        class("mt-2 flex w-full"),
                        map(week, |date| self.day(region, state, date)),
                    ])
                })]),
            ]),
        ])
    }
}
