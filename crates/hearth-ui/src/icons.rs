//! Inline SVG icons
//!
//! Stroke icons on a 24×24 grid, emitted as raw markup with the caller's
//! classes spliced into the root element.

use hearth_html::escape::escape_attr;
use hearth_html::{raw, Node};

fn icon(class: &str, body: &str) -> Node {
    raw(format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class="{}" aria-hidden="true">{}</svg>"#,
        escape_attr(class),
        body
    ))
}

pub fn chevron_down(class: &str) -> Node {
    icon(class, r#"<path d="m6 9 6 6 6-6"/>"#)
}

pub fn chevron_up(class: &str) -> Node {
    icon(class, r#"<path d="m18 15-6-6-6 6"/>"#)
}

pub fn chevron_left(class: &str) -> Node {
    icon(class, r#"<path d="m15 18-6-6 6-6"/>"#)
}

pub fn chevron_right(class: &str) -> Node {
    icon(class, r#"<path d="m9 18 6-6-6-6"/>"#)
}

pub fn chevrons_up_down(class: &str) -> Node {
    icon(class, r#"<path d="m7 15 5 5 5-5"/><path d="m7 9 5-5 5 5"/>"#)
}

pub fn arrow_up_down(class: &str) -> Node {
    icon(
        class,
        r#"<path d="m21 16-4 4-4-4"/><path d="M17 20V4"/><path d="m3 8 4-4 4 4"/><path d="M7 4v16"/>"#,
    )
}

pub fn arrow_up(class: &str) -> Node {
    icon(class, r#"<path d="m5 12 7-7 7 7"/><path d="M12 19V5"/>"#)
}

pub fn arrow_down(class: &str) -> Node {
    icon(class, r#"<path d="M12 5v14"/><path d="m19 12-7 7-7-7"/>"#)
}

pub fn x(class: &str) -> Node {
    icon(class, r#"<path d="M18 6 6 18"/><path d="m6 6 12 12"/>"#)
}

pub fn check(class: &str) -> Node {
    icon(class, r#"<path d="M20 6 9 17l-5-5"/>"#)
}

pub fn dot(class: &str) -> Node {
    icon(class, r#"<circle cx="12" cy="12" r="4" fill="currentColor"/>"#)
}

pub fn more_horizontal(class: &str) -> Node {
    icon(
        class,
        r#"<circle cx="12" cy="12" r="1"/><circle cx="19" cy="12" r="1"/><circle cx="5" cy="12" r="1"/>"#,
    )
}

pub fn panel_left(class: &str) -> Node {
    icon(
        class,
        r#"<rect width="18" height="18" x="3" y="3" rx="2"/><path d="M9 3v18"/>"#,
    )
}

pub fn search(class: &str) -> Node {
    icon(class, r#"<circle cx="11" cy="11" r="8"/><path d="m21 21-4.3-4.3"/>"#)
}

pub fn grip_vertical(class: &str) -> Node {
    icon(
        class,
        r#"<circle cx="9" cy="12" r="1"/><circle cx="9" cy="5" r="1"/><circle cx="9" cy="19" r="1"/><circle cx="15" cy="12" r="1"/><circle cx="15" cy="5" r="1"/><circle cx="15" cy="19" r="1"/>"#,
    )
}

pub fn loader(class: &str) -> Node {
    icon(class, r#"<path d="M21 12a9 9 0 1 1-6.219-8.56"/>"#)
}

pub fn info(class: &str) -> Node {
    icon(
        class,
        r#"<circle cx="12" cy="12" r="10"/><path d="M12 16v-4"/><path d="M12 8h.01"/>"#,
    )
}

pub fn alert_triangle(class: &str) -> Node {
    icon(
        class,
        r#"<path d="m21.73 18-8-14a2 2 0 0 0-3.48 0l-8 14A2 2 0 0 0 4 21h16a2 2 0 0 0 1.73-3"/><path d="M12 9v4"/><path d="M12 17h.01"/>"#,
    )
}

pub fn circle_check(class: &str) -> Node {
    icon(
        class,
        r#"<circle cx="12" cy="12" r="10"/><path d="m9 12 2 2 4-4"/>"#,
    )
}

pub fn circle_x(class: &str) -> Node {
    icon(
        class,
        r#"<circle cx="12" cy="12" r="10"/><path d="m15 9-6 6"/><path d="m9 9 6 6"/>"#,
    )
}

pub fn pause(class: &str) -> Node {
    icon(
        class,
        r#"<rect x="14" y="4" width="4" height="16" rx="1"/><rect x="6" y="4" width="4" height="16" rx="1"/>"#,
    )
}

pub fn play(class: &str) -> Node {
    icon(class, r#"<polygon points="6 3 20 12 6 21 6 3"/>"#)
}

pub fn slash(class: &str) -> Node {
    icon(class, r#"<path d="M22 2 2 22"/>"#)
}
