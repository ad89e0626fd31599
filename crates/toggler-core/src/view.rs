use crate::semantics::{Role, Semantics};
use std::rc::Rc;

pub type ViewId = u64;

/// Argument-less event handler (clicks).
pub type Callback = Rc<dyn Fn()>;
/// Event handler receiving a payload by reference.
pub type Handler<A> = Rc<dyn Fn(&A)>;

#[derive(Clone)]
pub enum ViewKind {
    Column,
    Row,
    Box,
    Text {
        text: String,
    },
    Button {
        text: String,
        on_click: Option<Callback>,
    },
    Switch {
        on: bool,
        on_click: Option<Callback>,
    },
}

impl ViewKind {
    pub fn on_click(&self) -> Option<&Callback> {
        match self {
            ViewKind::Button { on_click, .. } | ViewKind::Switch { on_click, .. } => {
                on_click.as_ref()
            }
            _ => None,
        }
    }
}

impl std::fmt::Debug for ViewKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewKind::Column => write!(f, "Column"),
            ViewKind::Row => write!(f, "Row"),
            ViewKind::Box => write!(f, "Box"),
            ViewKind::Text { text } => f.debug_struct("Text").field("text", text).finish(),
            ViewKind::Button { text, on_click } => f
                .debug_struct("Button")
                .field("text", text)
                .field("on_click", &on_click.as_ref().map(|_| "<callback>"))
                .finish(),
            ViewKind::Switch { on, on_click } => f
                .debug_struct("Switch")
                .field("on", on)
                .field("on_click", &on_click.as_ref().map(|_| "<callback>"))
                .finish(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct View {
    pub id: ViewId,
    pub kind: ViewKind,
    pub children: Vec<View>,
    pub semantics: Option<Semantics>,
    /// Stable tag for locating a view from tests and drivers (element id).
    pub test_tag: Option<String>,
}

impl View {
    pub fn new(id: ViewId, kind: ViewKind) -> Self {
        View {
            id,
            kind,
            children: vec![],
            semantics: None,
            test_tag: None,
        }
    }
    pub fn with_children(mut self, kids: Vec<View>) -> Self {
        self.children = kids;
        self
    }
    pub fn semantics(mut self, s: Semantics) -> Self {
        self.semantics = Some(s);
        self
    }
    pub fn test_tag(mut self, tag: impl Into<String>) -> Self {
        self.test_tag = Some(tag.into());
        self
    }

    pub fn role(&self) -> Role {
        self.semantics
            .as_ref()
            .map(|s| s.role)
            .unwrap_or(match self.kind {
                ViewKind::Text { .. } => Role::Text,
                ViewKind::Button { .. } => Role::Button,
                ViewKind::Switch { .. } => Role::Switch,
                _ => Role::Container,
            })
    }

    /// Depth-first search by test tag.
    pub fn find_by_tag(&self, tag: &str) -> Option<&View> {
        if self.test_tag.as_deref() == Some(tag) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find_by_tag(tag))
    }

    /// All text content in pre-order, for quick assertions.
    pub fn texts(&self) -> Vec<String> {
        let mut out = Vec::new();
        self.collect_texts(&mut out);
        out
    }

    fn collect_texts(&self, out: &mut Vec<String>) {
        if let ViewKind::Text { text } = &self.kind {
            out.push(text.clone());
        }
        for c in &self.children {
            c.collect_texts(out);
        }
    }
}
