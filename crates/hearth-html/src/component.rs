use crate::node::Node;

/// Anything that can describe itself as a node tree.
pub trait Component {
    fn view(&self) -> Node;
}

impl<F> Component for F
where
    F: Fn() -> Node,
{
    fn view(&self) -> Node {
        (self)()
    }
}

impl Component for Node {
    fn view(&self) -> Node {
        self.clone()
    }
}

/// Render a component to an HTML string.
pub fn render_to_string(component: &impl Component) -> String {
    component.view().to_string()
}
