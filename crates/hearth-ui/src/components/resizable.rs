//! Resizable panel group
//!
//! Panel sizes are percentages held in inline `flex-basis`; dragging a handle
//! is client side. A handle may post the new layout to `persist` so the
//! server can restore it on the next render.

use super::slider::Orientation;
use hearth_html::prelude::*;

#[derive(Debug, Clone)]
pub struct ResizablePanel {
    pub content: Vec<Node>,
    /// Initial size in percent; unset panels share what remains
    pub default_size: Option<f64>,
    pub min_size: f64,
    pub max_size: f64,
}

impl ResizablePanel {
    pub fn new(content: impl IntoIterator<Item = Node>) -> Self {
        Self {
            content: content.into_iter().collect(),
            default_size: None,
            min_size: 0.0,
            max_size: 100.0,
        }
    }

    pub fn default_size(mut self, percent: f64) -> Self {
        self.default_size = Some(percent);
        self
    }

    pub fn min_size(mut self, percent: f64) -> Self {
        self.min_size = percent.clamp(0.0, 100.0);
        self
    }

    pub fn max_size(mut self, percent: f64) -> Self {
        self.max_size = percent.clamp(0.0, 100.0);
        self
    }
}

#[derive(Debug, Clone, Default)]
pub struct Resizable {
    pub group_id: String,
    pub direction: Orientation,
    pub panels: Vec<ResizablePanel>,
    pub with_handle: bool,
    /// Restored sizes, one per panel; ignored when the count differs
    pub layout: Vec<f64>,
    pub persist_url: Option<String>,
    pub class: String,
}

impl Resizable {
    pub fn new(group_id: impl Into<String>, direction: Orientation) -> Self {
        Self {
            group_id: group_id.into(),
            direction,
            ..Self::default()
        }
    }

    pub fn panel(mut self, panel: ResizablePanel) -> Self {
        self.panels.push(panel);
        self
    }

    pub fn with_handle(mut self, on: bool) -> Self {
        self.with_handle = on;
        self
    }

    pub fn layout(mut self, sizes: impl IntoIterator<Item = f64>) -> Self {
        self.layout = sizes.into_iter().collect();
        self
    }

    pub fn persist_url(mut self, url: impl Into<String>) -> Self {
        self.persist_url = Some(url.into());
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = class.into();
        self
    }

    /// Panel sizes that sum to 100 and respect each panel's bounds where
    /// possible.
    pub fn sizes(&self) -> Vec<f64> {
        if self.panels.is_empty() {
            return Vec::new();
        }
        if self.layout.len() == self.panels.len() && self.layout.iter().all(|s| s.is_finite()) {
            return normalize(
                self.layout
                    .iter()
                    .zip(&self.panels)
                    .map(|(s, panel)| s.clamp(panel.min_size, panel.max_size.max(panel.min_size)))
                    .collect(),
            );
        }
        let fixed: f64 = self.panels.iter().filter_map(|p| p.default_size).sum();
        let open = self.panels.iter().filter(|p| p.default_size.is_none()).count();
        let share = if open == 0 {
            0.0
        } else {
            (100.0 - fixed).max(0.0) / open as f64
        };
        normalize(
            self.panels
                .iter()
                .map(|p| {
                    p.default_size
                        .unwrap_or(share)
                        .clamp(p.min_size, p.max_size.max(p.min_size))
                })
                .collect(),
        )
    }

    fn handle(&self) -> Node {
        let vertical = self.direction == Orientation::Vertical;
        div([
            role("separator"),
            tab_index(0),
            aria("orientation", if vertical { "horizontal" } else { "vertical" }),
            data("resize-handle", ""),
            class(cn!(
                "relative flex items-center justify-center bg-border focus-visible:outline-none focus-visible:ring-1 focus-visible:ring-ring",
                cn_if(vertical, "h-px w-full cursor-row-resize", "w-px cursor-col-resize")
            )),
            if_with(self.with_handle, || {
                div([
                    class(cn!(
                        "z-10 flex h-4 w-3 items-center justify-center rounded-sm border bg-border",
                        cn_if(vertical, "rotate-90", "")
                    )),
                    crate::icons::grip_vertical("h-2.5 w-2.5"),
                ])
            }),
        ])
    }

    fn script(&self) -> Node {
        script([raw(format!(
            "(function(){{var root=document.getElementById('{id}');if(!root)return;\
var vertical=root.dataset.panelGroupDirection==='vertical';\
var panels=root.querySelectorAll(':scope>[data-panel]');\
root.querySelectorAll(':scope>[data-resize-handle]').forEach(function(h,i){{\
var a=panels[i],b=panels[i+1];\
h.addEventListener('pointerdown',function(e){{e.preventDefault();h.setPointerCapture(e.pointerId);\
var total=vertical?root.clientHeight:root.clientWidth;var start=vertical?e.clientY:e.clientX;\
var sa=parseFloat(a.style.flexBasis),sb=parseFloat(b.style.flexBasis);\
function move(ev){{var d=((vertical?ev.clientY:ev.clientX)-start)/total*100;\
var na=Math.min(Math.max(sa+d,+a.dataset.min),+a.dataset.max);var nb=sa+sb-na;\
if(nb<+b.dataset.min||nb>+b.dataset.max)return;a.style.flexBasis=na+'%';b.style.flexBasis=nb+'%';}}\
function up(){{h.removeEventListener('pointermove',move);h.removeEventListener('pointerup',up);\
if(root.dataset.persist&&window.htmx){{var sizes=Array.prototype.map.call(panels,function(p){{return parseFloat(p.style.flexBasis);}});\
htmx.ajax('POST',root.dataset.persist,{{values:{{layout:sizes.join(',')}},swap:'none'}});}}}}\
h.addEventListener('pointermove',move);h.addEventListener('pointerup',up);}});}});}})();",
            id = self.group_id
        ))])
    }
}

fn normalize(sizes: Vec<f64>) -> Vec<f64> {
    let total: f64 = sizes.iter().sum();
    if total <= 0.0 {
        let even = 100.0 / sizes.len() as f64;
        return vec![even; sizes.len()];
    }
    sizes.into_iter().map(|s| s * 100.0 / total).collect()
}

/// Parse a persisted `layout` value such as `"30,70"`.
pub fn parse_layout(raw_layout: &str) -> Option<Vec<f64>> {
    raw_layout
        .split(',')
        .map(|part| part.trim().parse::<f64>().ok().filter(|v| v.is_finite() && *v >= 0.0))
        .collect()
}

impl Component for Resizable {
    fn view(&self) -> Node {
        let vertical = self.direction == Orientation::Vertical;
        let sizes = self.sizes();
        let count = self.panels.len();
        div([
            id(self.group_id.clone()),
            data("panel-group-direction", self.direction.as_str()),
            match &self.persist_url {
                Some(url) => data("persist", url.clone()),
                None => Node::empty(),
            },
            class(cn!(
                "flex h-full w-full",
                cn_if(vertical, "flex-col", ""),
                self.class
            )),
            map(self.panels.iter().zip(sizes).enumerate(), |(i, (panel, size))| {
                group([
                    div([
                        data("panel", ""),
                        data("min", panel.min_size.to_string()),
                        data("max", panel.max_size.to_string()),
                        class("overflow-hidden"),
                        style(format!("flex: 0 1 {size:.2}%; flex-basis: {size:.2}%;")),
                        group(panel.content.clone()),
                    ]),
                    if_with(i + 1 < count, || self.handle()),
                ])
            }),
            if_with(count > 1, || self.script()),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group_of(panels: Vec<ResizablePanel>) -> Resizable {
        panels
            .into_iter()
            .fold(Resizable::new("rz", Orientation::Horizontal), |g, p| g.panel(p))
    }

    #[test]
    fn unsized_panels_share_remainder() {
        let group_of_three = group_of(vec![
            ResizablePanel::new([text("a")]).default_size(50.0),
            ResizablePanel::new([text("b")]),
            ResizablePanel::new([text("c")]),
        ]);
        assert_eq!(group_of_three.sizes(), vec![50.0, 25.0, 25.0]);
    }

    #[test]
    fn restored_layout_wins_when_counts_match() {
        let panels = group_of(vec![
            ResizablePanel::new([]).default_size(50.0),
            ResizablePanel::new([]).default_size(50.0),
        ]);
        assert_eq!(panels.clone().layout([30.0, 70.0]).sizes(), vec![30.0, 70.0]);
        assert_eq!(panels.layout([30.0]).sizes(), vec![50.0, 50.0]);
    }

    #[test]
    fn layout_parsing_rejects_garbage() {
        assert_eq!(parse_layout("30, 70"), Some(vec![30.0, 70.0]));
        assert_eq!(parse_layout("30,x"), None);
        assert_eq!(parse_layout("-5,105"), None);
    }

    #[test]
    fn handles_sit_between_panels() {
        let html = group_of(vec![ResizablePanel::new([text("one")]), ResizablePanel::new([text("two")])])
            .with_handle(true)
            .view()
            .to_string();
        assert_eq!(html.matches(r#"role="separator""#).count(), 1);
        assert!(html.contains(r#"style="flex: 0 1 50.00%; flex-basis: 50.00%;""#));
        assert!(html.contains(r#"aria-orientation="vertical""#));
        assert!(html.contains("<script>"));
    }
}
