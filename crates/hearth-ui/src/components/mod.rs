//! Widget catalog
//!
//! Interactive widgets implement [`SwapWidget`](crate::SwapWidget); the rest
//! are plain [`Component`](hearth_html::Component) builders.

// Interactive
pub mod accordion;
pub mod alert_dialog;
pub mod calendar;
pub mod carousel;
pub mod chart;
pub mod collapsible;
pub mod command;
pub mod context_menu;
pub mod dialog;
pub mod drawer;
pub mod dropdown_menu;
pub mod floating;
pub mod hover_card;
pub mod input_otp;
pub mod menu;
pub mod menubar;
pub mod overlay;
pub mod popover;
pub mod sheet;
pub mod sidebar;
pub mod slider;
pub mod table;
pub mod tabs;
pub mod toast;
pub mod tooltip;

// Presentation
pub mod alert;
pub mod aspect_ratio;
pub mod avatar;
pub mod badge;
pub mod breadcrumb;
pub mod button;
pub mod card;
pub mod checkbox;
pub mod form;
pub mod input;
pub mod label;
pub mod navigation_menu;
pub mod pagination;
pub mod progress;
pub mod radio_group;
pub mod resizable;
pub mod scroll_area;
pub mod select;
pub mod separator;
pub mod skeleton;
pub mod toggle;

pub use accordion::{Accordion, AccordionItem, AccordionState, AccordionType};
pub use alert::{Alert, AlertVariant};
pub use alert_dialog::{AlertDialog, AlertDialogState, ConfirmOutcome};
pub use aspect_ratio::AspectRatio;
pub use avatar::Avatar;
pub use badge::{Badge, BadgeVariant};
pub use breadcrumb::Breadcrumb;
pub use button::{Button, ButtonSize, ButtonVariant};
pub use calendar::{Calendar, CalendarState};
pub use card::Card;
pub use carousel::{Carousel, CarouselState};
pub use chart::{Chart, ChartData, ChartKind, ChartSeries, ChartSource};
pub use checkbox::{Checkbox, Switch};
pub use collapsible::{Collapsible, CollapsibleState};
pub use command::{Command, CommandGroup, CommandItem};
pub use context_menu::ContextMenu;
pub use dialog::Dialog;
pub use drawer::Drawer;
pub use dropdown_menu::DropdownMenu;
pub use floating::{Align, FloatingState, Placement, Side};
pub use form::FormField;
pub use hover_card::HoverCard;
pub use input::{Input, Textarea};
pub use input_otp::{InputOtp, OtpPattern};
pub use label::Label;
pub use menu::{MenuItem, MenuOutcome, MenuSelections, MenuState, MenuWidget};
pub use menubar::{Menubar, MenubarMenu, MenubarState};
pub use navigation_menu::{NavLink, NavigationMenu};
pub use overlay::{Overlay, OverlayState};
pub use pagination::{page_window, PageSlot, Pagination};
pub use popover::Popover;
pub use progress::Progress;
pub use radio_group::{RadioGroup, RadioOption};
pub use resizable::{Resizable, ResizablePanel};
pub use scroll_area::{ScrollArea, ScrollAxis};
pub use select::{Select, SelectOption};
pub use separator::Separator;
pub use sheet::{Sheet, SheetSide};
pub use sidebar::{Collapse, Sidebar, SidebarGroup, SidebarItem, SidebarState};
pub use skeleton::Skeleton;
pub use slider::{Orientation, Slider, SliderState};
pub use table::{SortDir, Table, TableColumn, TableRow, TableState};
pub use tabs::{Tab, Tabs, TabsState};
pub use toast::{Sonner, Toast, ToastKind, ToastList, ToastPosition};
pub use toggle::{Toggle, ToggleGroup, ToggleGroupItem, ToggleGroupType};
pub use tooltip::Tooltip;
