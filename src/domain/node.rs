use ratatui::text::Text;

/// Output of rendering an element, layout or view.
///
/// The tree is inert: it is built during render and painted afterwards by
/// [`crate::presentation::widgets::node::NodeWidget`].
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Node {
    #[default]
    Empty,
    Text(Text<'static>),
    /// Children laid out top to bottom.
    Stack(Vec<Node>),
    /// Rows of cells on a 12 column grid. `nested` is set when the grid sits
    /// inside another grid cell.
    Grid { nested: bool, rows: Vec<Vec<Cell>> },
    /// Identity wrapper around an element's output, keyed `kind:id`.
    Keyed { key: String, child: Box<Node> },
    /// Bordered region with a title.
    Panel { title: String, child: Box<Node> },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    pub key: String,
    pub span: f64,
    pub child: Node,
}

impl Cell {
    pub fn new(key: impl Into<String>, span: f64, child: Node) -> Self {
        Self {
            key: key.into(),
            span,
            child,
        }
    }
}

impl Node {
    pub fn text(text: impl Into<Text<'static>>) -> Self {
        Node::Text(text.into())
    }

    pub fn keyed(key: impl Into<String>, child: Node) -> Self {
        Node::Keyed {
            key: key.into(),
            child: Box::new(child),
        }
    }

    pub fn panel(title: impl Into<String>, child: Node) -> Self {
        Node::Panel {
            title: title.into(),
            child: Box::new(child),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Node::Empty)
    }

    /// Natural height in terminal rows.
    pub fn height(&self) -> u16 {
        match self {
            Node::Empty => 0,
            Node::Text(text) => u16::try_from(text.height()).unwrap_or(u16::MAX),
            Node::Stack(children) => children
                .iter()
                .fold(0u16, |acc, child| acc.saturating_add(child.height())),
            Node::Grid { rows, .. } => rows.iter().fold(0u16, |acc, row| {
                let tallest = row.iter().map(|cell| cell.child.height()).max();
                acc.saturating_add(tallest.unwrap_or(0))
            }),
            Node::Keyed { child, .. } => child.height(),
            Node::Panel { child, .. } => child.height().saturating_add(2),
        }
    }

    /// Keys of every `Keyed` node, depth first.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys = Vec::new();
        self.collect_keys(&mut keys);
        keys
    }

    fn collect_keys<'a>(&'a self, keys: &mut Vec<&'a str>) {
        match self {
            Node::Empty | Node::Text(_) => {}
            Node::Stack(children) => children.iter().for_each(|c| c.collect_keys(keys)),
            Node::Grid { rows, .. } => rows
                .iter()
                .flatten()
                .for_each(|cell| cell.child.collect_keys(keys)),
            Node::Keyed { key, child } => {
                keys.push(key);
                child.collect_keys(keys);
            }
            Node::Panel { child, .. } => child.collect_keys(keys),
        }
    }

    /// Plain text of every `Text` node, one entry per line, depth first.
    pub fn lines(&self) -> Vec<String> {
        match self {
            Node::Empty => vec![],
            Node::Text(text) => text.lines.iter().map(ToString::to_string).collect(),
            Node::Stack(children) => children.iter().flat_map(Node::lines).collect(),
            Node::Grid { rows, .. } => rows
                .iter()
                .flatten()
                .flat_map(|cell| cell.child.lines())
                .collect(),
            Node::Keyed { child, .. } => child.lines(),
            Node::Panel { title, child } => std::iter::once(title.clone())
                .chain(child.lines())
                .collect(),
        }
    }
}
