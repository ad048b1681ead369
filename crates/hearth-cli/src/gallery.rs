//! The demo page: every interactive widget mounted on its conventional
//! routes under the configured prefix, plus a few presentation widgets.

use axum::extract::State;
use axum::routing::get;
use axum::Router;
use chrono::{NaiveDate, Timelike, Utc};
use hearth_config::UiConfig;
use hearth_html::prelude::*;
use hearth_ui::components::button::button_classes;
use hearth_ui::components::overlay::overlay_trigger;
use hearth_ui::components::*;
use hearth_ui::{Region, SwapWidget};
use hearth_web::widgets::*;
use hearth_web::{Fragment, Hub, Store};
use std::sync::Arc;
use std::time::Duration;

const HTMX_SRC: &str = "https://unpkg.com/htmx.org@2.0.4";
const HTMX_SSE_SRC: &str = "https://unpkg.com/htmx-ext-sse@2.2.2/sse.js";
const TAILWIND_SRC: &str = "https://cdn.tailwindcss.com";

type View = Box<dyn Fn() -> Node + Send + Sync>;

struct Section {
    heading: &'static str,
    view: View,
}

#[derive(Clone)]
struct Page {
    sections: Arc<Vec<Section>>,
}

/// Mounts widgets one at a time, collecting their routers and page views.
struct Builder {
    prefix: String,
    router: Router,
    sections: Vec<Section>,
}

impl Builder {
    fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            router: Router::new(),
            sections: Vec::new(),
        }
    }

    fn region<W: SwapWidget>(&self, widget_id: &str) -> Region {
        Region::conventional(&self.prefix, W::KIND, widget_id)
    }

    fn routes(&mut self, routes: Router) {
        self.router = std::mem::take(&mut self.router).merge(routes);
    }

    fn section(&mut self, heading: &'static str, view: View) {
        self.sections.push(Section { heading, view });
    }

    /// A view that renders the stored state of a stateful widget.
    fn live<W: SwapWidget + Clone>(store: &Store<W::State>, widget: &W, region: &Region) -> View {
        let (store, widget, region) = (store.clone(), widget.clone(), region.clone());
        Box::new(move || {
            let state = store.snapshot(region.id(), || widget.initial_state());
            widget.render(&region, &state)
        })
    }

    fn overlay<W: Overlay + Clone>(&mut self, heading: &'static str, widget: W, label_text: &'static str) {
        let region = self.region::<W>(W::KIND);
        let store = Store::new();
        let live = Self::live(&store, &widget, &region);
        let trigger = overlay_trigger(&region, label_text, ButtonVariant::Outline);
        self.routes(overlay_routes(store, widget, region));
        self.section(heading, Box::new(move || group([trigger.clone(), live()])));
    }

    fn floating<W>(&mut self, heading: &'static str, widget: W)
    where
        W: SwapWidget<State = FloatingState> + Clone,
    {
        let region = self.region::<W>(W::KIND);
        let store = Store::new();
        self.section(heading, Self::live(&store, &widget, &region));
        self.routes(floating_routes(store, widget, region));
    }

    fn menu<W: MenuWidget + Clone>(&mut self, heading: &'static str, widget: W) {
        let region = self.region::<W>(W::KIND);
        let store = Store::new();
        self.section(heading, Self::live(&store, &widget, &region));
        self.routes(menu_routes(store, widget, region));
    }

    /// Stateful widgets whose router takes `(store, widget, region)`.
    fn stateful<W, F>(&mut self, heading: &'static str, widget: W, routes: F)
    where
        W: SwapWidget + Clone,
        F: FnOnce(Store<W::State>, W, Region) -> Router,
    {
        let region = self.region::<W>(W::KIND);
        let store = Store::new();
        self.section(heading, Self::live(&store, &widget, &region));
        self.routes(routes(store, widget, region));
    }

    fn finish(self) -> Router {
        let page = Page {
            sections: Arc::new(self.sections),
        };
        Router::new()
            .route("/", get(index))
            .with_state(page)
            .merge(self.router)
    }
}

fn account_menu() -> Vec<MenuItem> {
    vec![
        MenuItem::label("My Account"),
        MenuItem::separator(),
        MenuItem::item("Profile", "profile").shortcut("⇧⌘P"),
        MenuItem::item("Billing", "billing"),
        MenuItem::checkbox("status-bar", "Status Bar", true),
        MenuItem::radio_group(
            "position",
            [("top", "Top"), ("bottom", "Bottom")],
            Some("bottom"),
        ),
        MenuItem::sub(
            "invite",
            "Invite users",
            [MenuItem::item("Email", "email"), MenuItem::item("Message", "message")],
        ),
        MenuItem::separator(),
        MenuItem::item("Log out", "logout").destructive(),
    ]
}

fn sales_data() -> ChartData {
    let minute = f64::from(Utc::now().minute());
    ChartData::new(["Jan", "Feb", "Mar", "Apr", "May", "Jun"])
        .series(ChartSeries::new(
            "Desktop",
            [186.0, 305.0, 237.0, 73.0, 209.0, 214.0 + minute],
        ))
        .series(ChartSeries::new(
            "Mobile",
            [80.0, 200.0, 120.0, 190.0, 130.0, 140.0 + minute / 2.0],
        ))
}

fn payments() -> Table {
    let rows = [
        ("m5gr84i9", "success", "ken99@example.com", "316"),
        ("3u1reuv4", "success", "abe45@example.com", "242"),
        ("derv1ws0", "processing", "monserrat44@example.com", "837"),
        ("5kma53ae", "success", "silas22@example.com", "874"),
        ("bhqecj4p", "failed", "carmella@example.com", "721"),
        ("p0r8x1kq", "pending", "noah@example.com", "95"),
    ];
    Table::new([
        TableColumn::new("status", "Status").sortable(),
        TableColumn::new("email", "Email").sortable().filterable(),
        TableColumn::new("amount", "Amount").sortable(),
    ])
    .rows(rows.into_iter().map(|(row_id, status, email, amount)| {
        TableRow::new(row_id, [("status", status), ("email", email), ("amount", amount)])
    }))
    .page_size(5)
    .selectable(true)
    .caption("Recent payments")
}

/// Build the gallery router. `today` drives the calendar.
pub fn gallery(ui: &UiConfig, today: NaiveDate) -> Router {
    let mut b = Builder::new(&ui.route_prefix);

    b.overlay(
        "Dialog",
        Dialog::new("Edit profile")
            .description("Make changes to your profile here.")
            .confirm_event("profile-saved"),
        "Edit Profile",
    );
    b.overlay(
        "Sheet",
        Sheet::new("Settings").side(SheetSide::Right),
        "Open Sheet",
    );
    b.overlay(
        "Drawer",
        Drawer::new("Move Goal").description("Set your daily activity goal."),
        "Open Drawer",
    );

    let alert_region = b.region::<AlertDialog>("alert-dialog");
    let alert = AlertDialog::new("Delete project")
        .description("This action cannot be undone.")
        .destructive(true)
        .confirm_token("DELETE")
        .confirm_event("project-deleted");
    let alert_store = Store::new();
    let alert_view = Builder::live(&alert_store, &alert, &alert_region);
    let alert_trigger = overlay_trigger(&alert_region, "Delete Project", ButtonVariant::Destructive);
    b.routes(alert_dialog_routes(alert_store, alert, alert_region));
    b.section(
        "Alert Dialog",
        Box::new(move || group([alert_trigger.clone(), alert_view()])),
    );

    b.floating("Popover", Popover::new("Open popover").content([text("Place content here.")]));
    b.floating(
        "Tooltip",
        Tooltip::new("Add to library").trigger([text("Hover me")]),
    );
    b.floating(
        "Hover Card",
        HoverCard::new()
            .trigger([text("@hearth")])
            .content([text("Server-rendered components.")]),
    );

    b.menu("Dropdown Menu", DropdownMenu::new("Account").items(account_menu()));
    b.menu(
        "Context Menu",
        ContextMenu::new()
            .area([text("Right click here")])
            .items(account_menu()),
    );
    b.stateful(
        "Menubar",
        Menubar::new([
            MenubarMenu::new(
                "file",
                "File",
                [
                    MenuItem::item("New Tab", "new-tab").shortcut("⌘T"),
                    MenuItem::item("Print", "print").shortcut("⌘P"),
                ],
            ),
            MenubarMenu::new(
                "view",
                "View",
                [MenuItem::checkbox("bookmarks", "Show Bookmarks", false)],
            ),
        ]),
        menubar_routes,
    );

    b.stateful(
        "Accordion",
        Accordion::new(AccordionType::Single).collapsible(true).items([
            AccordionItem::new("item-1", "Is it accessible?")
                .content([text("Yes. Triggers carry aria-expanded and aria-controls.")]),
            AccordionItem::new("item-2", "Is it styled?")
                .content([text("Yes. It uses utility classes.")]),
        ]),
        accordion_routes,
    );
    b.stateful(
        "Collapsible",
        Collapsible::new("3 starred repositories").content([text("hearth/hearth-ui")]),
        collapsible_routes,
    );
    b.stateful(
        "Tabs",
        Tabs::new([
            Tab::new("account", "Account").content([text("Make changes to your account here.")]),
            Tab::new("password", "Password").content([text("Change your password here.")]),
        ]),
        tabs_routes,
    );
    b.stateful(
        "Slider",
        Slider::new("price").values([20, 80]),
        slider_routes,
    );
    b.stateful("Table", payments(), table_routes);
    b.stateful(
        "Carousel",
        (1..=5)
            .fold(Carousel::new(), |c, n| c.slide([text(n.to_string())]))
            .autoplay_ms(3000),
        carousel_routes,
    );
    b.stateful("Calendar", Calendar::new(today), calendar_routes);

    let sidebar_region = b.region::<Sidebar>("sidebar");
    let sidebar = Sidebar::new().collapsible(Collapse::Icon).groups([SidebarGroup::new(
        "Platform",
        [
            SidebarItem::new("Home", "/").active(true),
            SidebarItem::new("Inbox", "#inbox"),
        ],
    )]);
    let sidebar_store = Store::new();
    let sidebar_view: View = {
        let (store, widget, region) = (sidebar_store.clone(), sidebar.clone(), sidebar_region.clone());
        Box::new(move || {
            let state = store.snapshot(region.id(), || widget.initial_state());
            widget.render_initial(&region, &state)
        })
    };
    b.routes(sidebar_routes(sidebar_store, sidebar, sidebar_region));
    b.section("Sidebar", sidebar_view);

    let otp_region = b.region::<InputOtp>("otp");
    let otp_view = {
        let region = otp_region.clone();
        move || InputOtp::new("otp", 6).groups([3, 3]).render(&region, &())
    };
    b.routes(input_otp_routes(
        InputOtp::new("otp", 6)
            .groups([3, 3])
            .verifier(|code: &str| code == "123456"),
        otp_region,
    ));
    b.section("Input OTP", Box::new(otp_view));

    let chart_region = b.region::<Chart>("sales");
    let chart_view = {
        let region = chart_region.clone();
        move || {
            Chart::new(ChartKind::Bar, sales_data())
                .title("Visitors")
                .refresh_ms(5000)
                .render(&region, &())
        }
    };
    b.routes(chart_routes(
        Chart::new(ChartKind::Bar, sales_data())
            .title("Visitors")
            .refresh_ms(5000)
            .source(sales_data),
        chart_region,
    ));
    b.section("Chart", Box::new(chart_view));

    let command = Command::new([
        CommandGroup::new(
            "Suggestions",
            [
                CommandItem::new("Calendar", "calendar"),
                CommandItem::new("Search Emoji", "emoji").keywords(["smiley"]),
            ],
        ),
        CommandGroup::new(
            "Settings",
            [CommandItem::new("Profile", "profile").shortcut("⌘P")],
        ),
    ]);
    let command_region = b.region::<Command>("command");
    let command_view = {
        let (widget, region) = (command.clone(), command_region.clone());
        move || widget.render(&region, &())
    };
    b.routes(command_routes(command, command_region));
    b.section("Command", Box::new(command_view));

    let toast_region = b.region::<Sonner>("toasts");
    let toast_add = toast_region.path("add");
    let toasts = ToastMount::new(
        Store::new(),
        Sonner::new()
            .visible(ui.toast_visible)
            .default_duration_ms(ui.toast_default_duration_ms),
        toast_region,
        Hub::new(),
        Duration::from_secs(ui.sse_keepalive_secs),
    );
    let toast_view = {
        let toasts = toasts.clone();
        move || toasts.page()
    };
    b.routes(toast_routes(toasts));
    b.section(
        "Sonner",
        Box::new(move || {
            group([
                button([
                    type_("button"),
                    class(button_classes(ButtonVariant::Outline, ButtonSize::Default, "")),
                    hx_post(toast_add.clone()),
                    hx_vals(serde_json::json!({
                        "title": "Event has been created",
                        "description": "Sunday, December 03, 2023 at 9:00 AM",
                        "kind": "success",
                        "action_label": "Undo",
                        "action_event": "undo-event",
                    })),
                    hx_swap(Swap::None),
                    text("Show Toast"),
                ]),
                toast_view(),
            ])
        }),
    );

    b.section("Presentation", Box::new(presentation));
    b.finish()
}

fn presentation() -> Node {
    div([
        class("flex flex-col gap-4"),
        Breadcrumb::new()
            .link("Home", "/")
            .link("Components", "#components")
            .page("Breadcrumb")
            .view(),
        div([
            class("flex gap-2"),
            Button::new().label("Default").view(),
            Button::new()
                .variant(ButtonVariant::Secondary)
                .label("Secondary")
                .view(),
            Badge::new("Badge").view(),
        ]),
        Alert::new("Heads up!")
            .description([text("You can add components with one import.")])
            .view(),
        Pagination::new(5, 10, "?page={page}").view(),
        Progress::new(60.0).view(),
    ])
}

async fn index(State(page): State<Page>) -> Fragment {
    Fragment::new(group([
        doctype(),
        html([
            lang("en"),
            head([
                meta([charset("utf-8")]),
                meta([
                    name("viewport"),
                    content("width=device-width, initial-scale=1"),
                ]),
                title_el([text("hearth gallery")]),
                script([src(TAILWIND_SRC)]),
                script([src(HTMX_SRC)]),
                script([src(HTMX_SSE_SRC)]),
            ]),
            body([
                class("min-h-screen bg-background p-8 font-sans text-foreground antialiased"),
                main_([
                    class("mx-auto flex max-w-4xl flex-col gap-12"),
                    h1([class("text-3xl font-bold tracking-tight"), text("hearth")]),
                    map(page.sections.iter(), section_el),
                ]),
            ]),
        ]),
    ]))
}

fn section_el(entry: &Section) -> Node {
    section([
        class("flex flex-col gap-4"),
        h2([
            class("border-b pb-2 text-xl font-semibold tracking-tight"),
            text(entry.heading),
        ]),
        (entry.view)(),
    ])
}
