//! Property tests for the widget state machines.

use hearth_ui::components::table::TableState;
use hearth_ui::components::{
    Accordion, AccordionItem, AccordionType, SliderState, SortDir, Table, TableColumn, TableRow,
};
use hearth_ui::SwapWidget;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum SliderOp {
    Track(f64),
    Set(usize, f64),
    Key(usize, &'static str),
}

fn arb_op() -> impl Strategy<Value = SliderOp> {
    let keys = prop::sample::select(vec![
        "ArrowLeft", "ArrowRight", "ArrowUp", "ArrowDown", "PageUp", "PageDown", "Home", "End", "Tab",
    ]);
    prop_oneof![
        prop_oneof![-0.5f64..1.5, Just(f64::NAN), Just(f64::INFINITY)].prop_map(SliderOp::Track),
        (0usize..3, -500f64..500.0).prop_map(|(i, v)| SliderOp::Set(i, v)),
        (0usize..3, keys).prop_map(|(i, k)| SliderOp::Key(i, k)),
    ]
}

proptest! {
    /// Values stay inside the bounds and range thumbs never cross.
    #[test]
    fn slider_values_stay_clamped_and_ordered(
        lo in -100i64..100,
        hi in -100i64..100,
        step in -5i64..20,
        initial in prop::collection::vec(-300i64..300, 0..3),
        ops in prop::collection::vec(arb_op(), 0..40),
    ) {
        let mut state = SliderState::new(lo, hi, step, &initial);
        for op in ops {
            match op {
                SliderOp::Track(p) => { state.track(p); }
                SliderOp::Set(i, v) => { state.set(i, v); }
                SliderOp::Key(i, k) => { state.key(i, k); }
            }
            prop_assert!(state.min <= state.max);
            for v in &state.values {
                prop_assert!(state.min <= *v && *v <= state.max, "{v} outside [{}, {}]", state.min, state.max);
            }
            if state.is_range() {
                prop_assert!(state.values[0] <= state.values[1]);
            }
        }
    }

    /// Bounds at the ends of `i64` neither overflow nor escape the clamp.
    #[test]
    fn slider_extreme_bounds_stay_clamped(
        (lo, hi) in prop_oneof![Just((0, i64::MAX)), Just((i64::MIN, i64::MAX)), Just((i64::MIN, 0))],
        step in prop_oneof![Just(1i64), Just(1_000_000i64), Just(i64::MAX)],
        range in any::<bool>(),
        ops in prop::collection::vec(arb_op(), 0..40),
    ) {
        let initial = if range { vec![lo, hi] } else { vec![hi] };
        let mut state = SliderState::new(lo, hi, step, &initial);
        for op in ops {
            match op {
                SliderOp::Track(p) => { state.track(p); }
                SliderOp::Set(i, v) => { state.set(i, v); }
                SliderOp::Key(i, k) => { state.key(i, k); }
            }
            for v in &state.values {
                prop_assert!(lo <= *v && *v <= hi);
            }
            if state.is_range() {
                prop_assert!(state.values[0] <= state.values[1]);
            }
        }
    }

    /// Every click on a sortable column advances asc, desc, none, asc.
    #[test]
    fn table_sort_cycles_three_states(clicks in 1usize..12) {
        let table = Table::new([
            TableColumn::new("email", "Email").sortable(),
            TableColumn::new("amount", "Amount").sortable(),
        ])
        .rows([
            TableRow::new("r1", [("email", "b@example.com"), ("amount", "20")]),
            TableRow::new("r2", [("email", "a@example.com"), ("amount", "3")]),
        ]);
        let mut state: TableState = table.initial_state();
        let cycle = [SortDir::Asc, SortDir::Desc, SortDir::None];
        for n in 0..clicks {
            prop_assert!(table.sort(&mut state, "amount"));
            prop_assert_eq!(state.sort_dir, cycle[n % 3]);
            prop_assert_eq!(state.sort_column.is_some(), state.sort_dir != SortDir::None);
        }
    }

    /// Sorting a column yields the same cell order whatever order the rows
    /// arrived in, even when numbers and text are mixed.
    #[test]
    fn table_sort_ignores_row_order(
        (cells, shuffled) in prop::collection::vec("[0-9aB.]{1,3}", 1..10)
            .prop_flat_map(|cells| (Just(cells.clone()), Just(cells).prop_shuffle())),
    ) {
        let sorted_cells = |values: &[String]| {
            let table = Table::new([TableColumn::new("v", "Value").sortable()]).rows(
                values
                    .iter()
                    .enumerate()
                    .map(|(i, v)| TableRow::new(format!("r{i}"), [("v", v.as_str())])),
            );
            let mut state: TableState = table.initial_state();
            table.sort(&mut state, "v");
            state
                .filtered()
                .iter()
                .map(|row| row.cell("v").to_string())
                .collect::<Vec<_>>()
        };
        prop_assert_eq!(sorted_cells(&cells), sorted_cells(&shuffled));
    }

    /// A single, non-collapsible accordion never ends up with more than one
    /// open item, and never closes its last open item.
    #[test]
    fn single_accordion_keeps_at_most_one_open(
        clicks in prop::collection::vec(prop::sample::select(vec!["a", "b", "c", "zzz"]), 0..30),
    ) {
        let accordion = Accordion::new(AccordionType::Single).items([
            AccordionItem::new("a", "A"),
            AccordionItem::new("b", "B"),
            AccordionItem::new("c", "C"),
        ]);
        let mut state = accordion.initial_state();
        let mut ever_opened = false;
        for item in clicks {
            accordion.toggle(&mut state, item);
            ever_opened |= !state.open.is_empty();
            prop_assert!(state.open.len() <= 1);
            if ever_opened {
                prop_assert_eq!(state.open.len(), 1);
            }
        }
    }
}
