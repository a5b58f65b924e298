//! Toast record types
//!
//! A [`Toast`] is the only entity tracked by the store. Callers describe a new
//! toast with [`ToastProps`] and change an existing one with [`ToastUpdate`].

use ratatui::text::Line;
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

/// Opaque toast identifier, unique among tracked toasts
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(String);

impl ToastId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ToastId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ToastId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ToastId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Visual variant - determines the color scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastVariant {
    #[default]
    Default,
    /// Red, for failures the user should notice
    Destructive,
}

/// Callback the presentation layer invokes when the user opens or closes a toast
#[derive(Clone)]
pub struct OpenChangeHandler(Rc<dyn Fn(bool)>);

impl OpenChangeHandler {
    pub fn new(f: impl Fn(bool) + 'static) -> Self {
        Self(Rc::new(f))
    }

    pub fn call(&self, open: bool) {
        (self.0)(open)
    }
}

impl fmt::Debug for OpenChangeHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OpenChangeHandler")
    }
}

impl PartialEq for OpenChangeHandler {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// A tracked notification
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: ToastId,
    pub title: Option<String>,
    pub description: Option<String>,
    /// Rendered below the description, passed through untouched
    pub action: Option<Line<'static>>,
    pub variant: ToastVariant,
    /// `false` once dismissed; the toast stays tracked until removed
    pub open: bool,
    pub on_open_change: Option<OpenChangeHandler>,
    /// Caller-specific fields the store never interprets
    pub extra: BTreeMap<String, Value>,
}

impl Toast {
    /// Create an open toast from caller props
    pub fn new(id: ToastId, props: ToastProps) -> Self {
        Self {
            id,
            title: props.title,
            description: props.description,
            action: props.action,
            variant: props.variant,
            open: true,
            on_open_change: None,
            extra: props.extra,
        }
    }

    pub fn with_on_open_change(mut self, handler: OpenChangeHandler) -> Self {
        self.on_open_change = Some(handler);
        self
    }

    /// Shallow merge: fields present in `update` overwrite, others are kept
    pub fn apply(&mut self, update: ToastUpdate) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(action) = update.action {
            self.action = action;
        }
        if let Some(variant) = update.variant {
            self.variant = variant;
        }
        self.extra.extend(update.extra);
    }

    /// Notify the toast's handler that the user changed its open state
    pub fn set_open_from_ui(&self, open: bool) {
        if let Some(handler) = &self.on_open_change {
            handler.call(open);
        }
    }
}

/// Display payload for a new toast
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastProps {
    pub title: Option<String>,
    pub description: Option<String>,
    pub action: Option<Line<'static>>,
    pub variant: ToastVariant,
    pub extra: BTreeMap<String, Value>,
}

impl ToastProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn action(mut self, action: impl Into<Line<'static>>) -> Self {
        self.action = Some(action.into());
        self
    }

    pub fn variant(mut self, variant: ToastVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Partial toast used by update; `open` is deliberately absent so an update
/// can never reopen a dismissed toast.
///
/// `None` leaves a field untouched; `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastUpdate {
    pub title: Option<Option<String>>,
    pub description: Option<Option<String>>,
    pub action: Option<Option<Line<'static>>>,
    pub variant: Option<ToastVariant>,
    pub extra: BTreeMap<String, Value>,
}

impl ToastUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(Some(title.into()));
        self
    }

    pub fn clear_title(mut self) -> Self {
        self.title = Some(None);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(Some(description.into()));
        self
    }

    pub fn clear_description(mut self) -> Self {
        self.description = Some(None);
        self
    }

    pub fn action(mut self, action: impl Into<Line<'static>>) -> Self {
        self.action = Some(Some(action.into()));
        self
    }

    pub fn clear_action(mut self) -> Self {
        self.action = Some(None);
        self
    }

    pub fn variant(mut self, variant: ToastVariant) -> Self {
        self.variant = Some(variant);
        self
    }

    pub fn extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Everything the store tracks, newest toast first
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
}

impl ToastState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &ToastId) -> Option<&Toast> {
        self.toasts.iter().find(|t| &t.id == id)
    }

    pub fn contains(&self, id: &ToastId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Toasts that have not been dismissed yet
    pub fn open_toasts(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter().filter(|t| t.open)
    }
}
