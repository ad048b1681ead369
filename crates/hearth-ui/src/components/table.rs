//! Data table with sorting, filtering, pagination and row selection
//!
//! Rows are supplied by the caller and shared between states through an
//! `Arc`, so per-request snapshots only copy the view settings.

use super::button::{button_classes, ButtonSize, ButtonVariant};
use crate::region::{Region, SwapWidget};
use hearth_html::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableColumn {
    pub key: String,
    pub header: String,
    pub sortable: bool,
    pub filterable: bool,
}

impl TableColumn {
    pub fn new(key: impl Into<String>, header_text: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            header: header_text.into(),
            sortable: false,
            filterable: false,
        }
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn filterable(mut self) -> Self {
        self.filterable = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub id: String,
    pub cells: BTreeMap<String, String>,
}

impl TableRow {
    pub fn new<K, V>(row_id: impl Into<String>, cells: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            id: row_id.into(),
            cells: cells
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn cell(&self, key: &str) -> &str {
        self.cells.get(key).map(String::as_str).unwrap_or("")
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDir {
    Asc,
    Desc,
    #[default]
    None,
}

impl SortDir {
    pub fn as_aria(&self) -> &'static str {
        match self {
            SortDir::Asc => "ascending",
            SortDir::Desc => "descending",
            SortDir::None => "none",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableState {
    pub rows: Arc<Vec<TableRow>>,
    pub sort_column: Option<String>,
    pub sort_dir: SortDir,
    pub filters: BTreeMap<String, String>,
    pub page: usize,
    pub page_size: usize,
    pub selected: BTreeSet<String>,
}

impl TableState {
    pub fn new(rows: Arc<Vec<TableRow>>, page_size: usize) -> Self {
        Self {
            rows,
            sort_column: None,
            sort_dir: SortDir::None,
            filters: BTreeMap::new(),
            page: 1,
            page_size: page_size.max(1),
            selected: BTreeSet::new(),
        }
    }

    /// Rows passing every filter, in sort order.
    pub fn filtered(&self) -> Vec<&TableRow> {
        let needles: Vec<(&str, String)> = self
            .filters
            .iter()
            .filter(|(_, needle)| !needle.is_empty())
            .map(|(key, needle)| (key.as_str(), needle.to_lowercase()))
            .collect();

        let mut out: Vec<&TableRow> = self
            .rows
            .iter()
            .filter(|row| {
                needles
                    .iter()
                    .all(|(key, needle)| row.cell(key).to_lowercase().contains(needle.as_str()))
            })
            .collect();

        if let (Some(column), dir) = (&self.sort_column, self.sort_dir) {
            match dir {
                SortDir::Asc => out.sort_by(|l, r| compare_cells(l.cell(column), r.cell(column))),
                SortDir::Desc => out.sort_by(|l, r| compare_cells(r.cell(column), l.cell(column))),
                SortDir::None => {}
            }
        }
        out
    }

    pub fn page_count(&self) -> usize {
        page_count(self.filtered().len(), self.page_size)
    }

    /// Rows on the current page.
    pub fn page_rows(&self) -> Vec<&TableRow> {
        let start = (self.page - 1).saturating_mul(self.page_size);
        self.filtered()
            .into_iter()
            .skip(start)
            .take(self.page_size)
            .collect()
    }

    fn clamp_page(&mut self) {
        self.page = self.page.clamp(1, self.page_count());
    }
}

/// `max(1, ceil(len / page_size))`
pub fn page_count(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1)).max(1)
}

/// Total order over cells: numbers first, compared numerically, then text
/// compared case-insensitively. Ties fall back to the raw strings.
pub fn compare_cells(l: &str, r: &str) -> Ordering {
    let primary = match (l.trim().parse::<f64>(), r.trim().parse::<f64>()) {
        (Ok(a), Ok(b)) => a.total_cmp(&b),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => l.to_lowercase().cmp(&r.to_lowercase()),
    };
    primary.then_with(|| l.cmp(r))
}

#[derive(Debug, Clone)]
pub struct Table {
    pub columns: Vec<TableColumn>,
    pub rows: Arc<Vec<TableRow>>,
    pub page_size: usize,
    pub page_sizes: Vec<usize>,
    pub selectable: bool,
    pub caption: Option<String>,
    pub class: String,
}

impl Table {
    pub fn new(columns: impl IntoIterator<Item = TableColumn>) -> Self {
        Self {
            columns: columns.into_iter().collect(),
            rows: Arc::new(Vec::new()),
            page_size: 10,
            page_sizes: vec![5, 10, 20, 50],
            selectable: true,
            caption: None,
            class: String::new(),
        }
    }

    pub fn rows(mut self, rows: impl IntoIterator<Item = TableRow>) -> Self {
        self.rows = Arc::new(rows.into_iter().collect());
        self
    }

    pub fn page_size(mut self, size: usize) -> Self {
        self.page_size = size.max(1);
        self
    }

    pub fn page_sizes(mut self, sizes: impl IntoIterator<Item = usize>) -> Self {
        self.page_sizes = sizes.into_iter().filter(|s| *s > 0).collect();
        self
    }

    pub fn selectable(mut self, selectable: bool) -> Self {
        self.selectable = selectable;
        self
    }

    pub fn caption(mut self, caption_text: impl Into<String>) -> Self {
        self.caption = Some(caption_text.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    fn column(&self, key: &str) -> Option<&TableColumn> {
        self.columns.iter().find(|c| c.key == key)
    }

    /// Cycle `column` through asc → desc → none; a new column starts at asc.
    pub fn sort(&self, state: &mut TableState, column_key: &str) -> bool {
        if !self.column(column_key).is_some_and(|c| c.sortable) {
            return false;
        }
        let same = state.sort_column.as_deref() == Some(column_key);
        let next = if same {
            match state.sort_dir {
                SortDir::Asc => SortDir::Desc,
                SortDir::Desc => SortDir::None,
                SortDir::None => SortDir::Asc,
            }
        } else {
            SortDir::Asc
        };
        state.sort_dir = next;
        state.sort_column = match next {
            SortDir::None => None,
            _ => Some(column_key.to_string()),
        };
        true
    }

    /// Set the filter text for `column_key`; an empty needle clears it.
    /// Returns to page 1.
    pub fn filter(&self, state: &mut TableState, column_key: &str, needle: &str) -> bool {
        if !self.column(column_key).is_some_and(|c| c.filterable) {
            return false;
        }
        if needle.is_empty() {
            state.filters.remove(column_key);
        } else {
            state
                .filters
                .insert(column_key.to_string(), needle.to_string());
        }
        state.page = 1;
        true
    }

    /// Jump to `page`, clamped to the available pages.
    pub fn go_to_page(&self, state: &mut TableState, page: usize) {
        state.page = page;
        state.clamp_page();
    }

    pub fn set_page_size(&self, state: &mut TableState, size: usize) -> bool {
        if size == 0 {
            return false;
        }
        state.page_size = size;
        state.page = 1;
        true
    }

    /// Toggle selection of one row. Unknown rows are ignored.
    pub fn select(&self, state: &mut TableState, row_id: &str) -> bool {
        if !state.rows.iter().any(|r| r.id == row_id) {
            return false;
        }
        if !state.selected.remove(row_id) {
            state.selected.insert(row_id.to_string());
        }
        true
    }

    /// Select every row on the current page, or clear them if all already are.
    pub fn select_page(&self, state: &mut TableState) {
        let ids: Vec<String> = state.page_rows().iter().map(|r| r.id.clone()).collect();
        let all = !ids.is_empty() && ids.iter().all(|i| state.selected.contains(i));
        for row_id in ids {
            if all {
                state.selected.remove(&row_id);
            } else {
                state.selected.insert(row_id);
            }
        }
    }

    fn filter_bar(&self, region: &Region, state: &TableState) -> Node {
        map(self.columns.iter().filter(|c| c.filterable), |c| {
            input([
                type_("search"),
                name("value"),
                placeholder(format!("Filter {}...", c.header.to_lowercase())),
                value(state.filters.get(&c.key).cloned().unwrap_or_default()),
                aria("label", format!("Filter {}", c.header)),
                class("flex h-9 w-full max-w-sm rounded-md border border-input bg-transparent px-3 py-1 text-sm shadow-sm focus-visible:outline-none focus-visible:ring-1 focus-visible:ring-ring"),
                region.post("filter"),
                hx_trigger("input changed delay:300ms, search"),
                hx_vals(json!({ "column": c.key })),
            ])
        })
    }

    fn header_cell(&self, region: &Region, state: &TableState, c: &TableColumn) -> Node {
        let dir = if state.sort_column.as_deref() == Some(c.key.as_str()) {
            state.sort_dir
        } else {
            SortDir::None
        };
        th([
            class("h-10 px-2 text-left align-middle font-medium text-muted-foreground"),
            if_(c.sortable, aria("sort", dir.as_aria())),
            if c.sortable {
                button([
                    type_("button"),
                    class(button_classes(ButtonVariant::Ghost, ButtonSize::Sm, "-ml-3 h-8")),
                    region.post("sort"),
                    hx_vals(json!({ "column": c.key })),
                    text(c.header.clone()),
                    match dir {
                        SortDir::Asc => crate::icons::arrow_up("ml-2 h-4 w-4"),
                        SortDir::Desc => crate::icons::arrow_down("ml-2 h-4 w-4"),
                        SortDir::None => crate::icons::arrow_up_down("ml-2 h-4 w-4"),
                    },
                ])
            } else {
                text(c.header.clone())
            },
        ])
    }

    fn checkbox(&self, region: &Region, on: bool, label_text: &str, action_name: &str, row_id: Option<&str>) -> Node {
        input([
            type_("checkbox"),
            class("h-4 w-4 rounded border-primary align-middle"),
            aria("label", label_text),
            if_(on, checked()),
            region.post(action_name),
            hx_trigger("change"),
            match row_id {
                Some(r) => hx_vals(json!({ "row": r })),
                None => Node::empty(),
            },
        ])
    }

    fn footer_bar(&self, region: &Region, state: &TableState) -> Node {
        let total = state.filtered().len();
        let pages = page_count(total, state.page_size);
        let page_button = |label_text: &str, target_page: usize, enabled: bool| {
            button([
                type_("button"),
                class(button_classes(ButtonVariant::Outline, ButtonSize::Sm, "")),
                if_(!enabled, disabled()),
                region.post("page"),
                hx_vals(json!({ "page": target_page })),
                text(label_text),
            ])
        };

        div([
            class("flex items-center justify-between space-x-2 py-4"),
            div([
                class("flex-1 text-sm text-muted-foreground"),
                if_with(self.selectable, || {
                    text(format!("{} of {} row(s) selected.", state.selected.len(), total))
                }),
            ]),
            div([
                class("flex items-center space-x-2"),
                p([class("text-sm font-medium"), text("Rows per page")]),
                select([
                    name("size"),
                    class("h-8 rounded-md border border-input bg-transparent px-2 text-sm"),
                    region.post("page-size"),
                    hx_trigger("change"),
                    map(&self.page_sizes, |size| {
                        option([
                            value(size.to_string()),
                            if_(*size == state.page_size, selected()),
                            text(size.to_string()),
                        ])
                    }),
                ]),
            ]),
            div([
                class("flex w-[100px] items-center justify-center text-sm font-medium"),
                text(format!("Page {} of {}", state.page, pages)),
            ]),
            div([
                class("space-x-2"),
                page_button("Previous", state.page.saturating_sub(1).max(1), state.page > 1),
                page_button("Next", (state.page + 1).min(pages), state.page < pages),
            ]),
        ])
    }
}

impl SwapWidget for Table {
    type State = TableState;
    const KIND: &'static str = "table";

    fn initial_state(&self) -> TableState {
        TableState::new(Arc::clone(&self.rows), self.page_size)
    }

    fn render(&self, region: &Region, state: &TableState) -> Node {
        let page_rows = state.page_rows();
        let all_on_page = !page_rows.is_empty() && page_rows.iter().all(|r| state.selected.contains(&r.id));
        let span_cols = self.columns.len() + usize::from(self.selectable);

        region.container([
            class(cn!("w-full", self.class)),
            div([class("flex items-center gap-2 py-4"), self.filter_bar(region, state)]),
            div([
                class("rounded-md border"),
                table([
                    class("w-full caption-bottom text-sm"),
                    match &self.caption {
                        Some(c) => caption([class("mt-4 text-sm text-muted-foreground"), text(c.clone())]),
                        None => Node::empty(),
                    },
                    thead([tr([
                        class("border-b"),
                        if_with(self.selectable, || {
                            th([
                                class("w-10 px-2"),
                                self.checkbox(region, all_on_page, "Select all", "select-page", None),
                            ])
                        }),
                        map(&self.columns, |c| self.header_cell(region, state, c)),
                    ])]),
                    tbody([if page_rows.is_empty() {
                        tr([td([
                            attr("colspan", span_cols.to_string()),
                            class("h-24 text-center"),
                            text("No results."),
                        ])])
                    } else {
                        map(&page_rows, |row| {
                            let on = state.selected.contains(&row.id);
                            tr([
                                class("border-b transition-colors hover:bg-muted/50 data-[state=selected]:bg-muted"),
                                data("row-id", row.id.clone()),
                                if_(on, data_state("selected")),
                                if_with(self.selectable, || {
                                    td([
                                        class("px-2"),
                                        self.checkbox(region, on, "Select row", "select", Some(row.id.as_str())),
                                    ])
                                }),
                                map(&self.columns, |c| {
                                    td([class("p-2 align-middle"), text(row.cell(&c.key))])
                                }),
                            ])
                        })
                    }]),
                ]),
            ]),
            self.footer_bar(region, state),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Table {
        Table::new([
            TableColumn::new("email", "Email").sortable().filterable(),
            TableColumn::new("amount", "Amount").sortable(),
            TableColumn::new("status", "Status"),
        ])
        .rows([
            TableRow::new("r1", [("email", "ken99@yahoo.com"), ("amount", "316"), ("status", "success")]),
            TableRow::new("r2", [("email", "Abe45@gmail.com"), ("amount", "242"), ("status", "success")]),
            TableRow::new("r3", [("email", "monserrat44@gmail.com"), ("amount", "837"), ("status", "processing")]),
            TableRow::new("r4", [("email", "silas22@gmail.com"), ("amount", "874"), ("status", "success")]),
            TableRow::new("r5", [("email", "carmella@hotmail.com"), ("amount", "21"), ("status", "failed")]),
        ])
        .page_size(2)
    }

    fn ids(rows: &[&TableRow]) -> Vec<String> {
        rows.iter().map(|r| r.id.clone()).collect()
    }

    #[test]
    fn sort_cycles_asc_desc_none() {
        let table = table();
        let mut state = table.initial_state();

        table.sort(&mut state, "amount");
        assert_eq!((state.sort_column.as_deref(), state.sort_dir), (Some("amount"), SortDir::Asc));
        table.sort(&mut state, "amount");
        assert_eq!(state.sort_dir, SortDir::Desc);
        table.sort(&mut state, "amount");
        assert_eq!((state.sort_column.as_deref(), state.sort_dir), (None, SortDir::None));
        table.sort(&mut state, "amount");
        assert_eq!(state.sort_dir, SortDir::Asc);
    }

    #[test]
    fn new_column_starts_ascending() {
        let table = table();
        let mut state = table.initial_state();
        table.sort(&mut state, "amount");
        table.sort(&mut state, "amount");
        table.sort(&mut state, "email");
        assert_eq!((state.sort_column.as_deref(), state.sort_dir), (Some("email"), SortDir::Asc));
    }

    #[test]
    fn numeric_sort_is_numeric() {
        let table = table();
        let mut state = table.initial_state();
        table.sort(&mut state, "amount");
        assert_eq!(ids(&state.filtered()), ["r5", "r2", "r1", "r3", "r4"]);
    }

    #[test]
    fn text_sort_ignores_case() {
        let table = table();
        let mut state = table.initial_state();
        table.sort(&mut state, "email");
        assert_eq!(ids(&state.filtered())[0], "r2");
    }

    #[test]
    fn mixed_cells_sort_the_same_from_any_order() {
        let orders = [
            ["2", "10", "1a", "NaN", "b"],
            ["1a", "b", "2", "NaN", "10"],
            ["NaN", "10", "b", "1a", "2"],
        ];
        for cells in orders {
            let mut sorted = cells.to_vec();
            sorted.sort_by(|l, r| compare_cells(l, r));
            assert_eq!(sorted, ["2", "10", "NaN", "1a", "b"]);
        }
    }

    #[test]
    fn compare_cells_breaks_case_ties_on_raw_text() {
        assert_eq!(compare_cells("Abc", "abc"), Ordering::Less);
        assert_eq!(compare_cells("1.0", "1"), Ordering::Greater);
        assert_eq!(compare_cells("x", "x"), Ordering::Equal);
    }

    #[test]
    fn unsortable_or_unknown_columns_are_ignored() {
        let table = table();
        let mut state = table.initial_state();
        assert!(!table.sort(&mut state, "status"));
        assert!(!table.sort(&mut state, "nope"));
        assert_eq!(state.sort_dir, SortDir::None);
    }

    #[test]
    fn filter_is_case_insensitive_and_resets_page() {
        let table = table();
        let mut state = table.initial_state();
        table.go_to_page(&mut state, 3);
        assert_eq!(state.page, 3);

        assert!(table.filter(&mut state, "email", "GMAIL"));
        assert_eq!(state.page, 1);
        assert_eq!(ids(&state.filtered()), ["r2", "r3", "r4"]);

        table.filter(&mut state, "email", "");
        assert_eq!(state.filtered().len(), 5);
    }

    #[test]
    fn page_is_clamped() {
        let table = table();
        let mut state = table.initial_state();
        table.go_to_page(&mut state, 99);
        assert_eq!(state.page, 3);
        table.go_to_page(&mut state, 0);
        assert_eq!(state.page, 1);

        table.filter(&mut state, "email", "no-such-row");
        assert_eq!(state.page_count(), 1);
        table.go_to_page(&mut state, 2);
        assert_eq!(state.page, 1);
    }

    #[test]
    fn page_size_resets_page() {
        let table = table();
        let mut state = table.initial_state();
        table.go_to_page(&mut state, 2);
        assert!(table.set_page_size(&mut state, 5));
        assert_eq!(state.page, 1);
        assert!(!table.set_page_size(&mut state, 0));
        assert_eq!(state.page_size, 5);
    }

    #[test]
    fn select_toggles_known_rows() {
        let table = table();
        let mut state = table.initial_state();
        assert!(table.select(&mut state, "r1"));
        assert!(state.selected.contains("r1"));
        assert!(table.select(&mut state, "r1"));
        assert!(state.selected.is_empty());
        assert!(!table.select(&mut state, "ghost"));
    }

    #[test]
    fn select_page_selects_then_clears_current_page() {
        let table = table();
        let mut state = table.initial_state();
        table.select_page(&mut state);
        let expected: BTreeSet<String> = ["r1", "r2"].iter().map(|s| s.to_string()).collect();
        assert_eq!(state.selected, expected);
        table.select_page(&mut state);
        assert!(state.selected.is_empty());
    }

    #[test]
    fn page_count_has_floor_of_one() {
        assert_eq!(page_count(0, 10), 1);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
    }

    #[test]
    fn render_shows_page_and_sort_state() {
        let table = table();
        let mut state = table.initial_state();
        table.sort(&mut state, "amount");
        let html = table.render(&Region::new("tbl", "/tbl"), &state).to_string();
        assert!(html.contains(r#"aria-sort="ascending""#));
        assert!(html.contains("Page 1 of 3"));
        assert!(html.contains("0 of 5 row(s) selected."));
        assert!(html.contains(r#"data-row-id="r5""#));
        assert!(!html.contains(r#"data-row-id="r4""#));
    }

    #[test]
    fn empty_result_renders_placeholder_row() {
        let table = table();
        let mut state = table.initial_state();
        table.filter(&mut state, "email", "zzz");
        let html = table.render(&Region::new("tbl", "/tbl"), &state).to_string();
        assert!(html.contains(r#"<td colspan="4" class="h-24 text-center">No results.</td>"#));
    }
}
