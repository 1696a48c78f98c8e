//! Page widgets
//!
//! Finds the elements a page flags with `data-bs-toggle="tooltip"` or
//! `data-bs-toggle="popover"` and creates one widget per element. Also holds
//! the confirm-then-act helper used by destructive page actions.

use scraper::{Html, Selector};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Attribute that marks an element for widget enhancement.
pub const TOGGLE_ATTRIBUTE: &str = "data-bs-toggle";

/// Widget kinds that can be attached to an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetKind {
    Tooltip,
    Popover,
}

impl WidgetKind {
    /// Value of the toggle attribute selecting this kind.
    pub fn toggle_value(&self) -> &'static str {
        match self {
            WidgetKind::Tooltip => "tooltip",
            WidgetKind::Popover => "popover",
        }
    }

    /// CSS selector matching elements flagged for this kind.
    pub fn selector(&self) -> String {
        format!("[{}=\"{}\"]", TOGGLE_ATTRIBUTE, self.toggle_value())
    }
}

/// The parts of a flagged element a widget is built from.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct TriggerElement {
    pub tag: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement: Option<String>,
}

/// A page that can be searched for flagged elements.
pub trait Page {
    /// Elements flagged for `kind`, in document order.
    fn elements_with_toggle(&self, kind: WidgetKind) -> Vec<TriggerElement>;
}

/// Creates a widget for one element.
pub trait WidgetFactory {
    type Widget;

    fn create(&mut self, kind: WidgetKind, element: &TriggerElement) -> Self::Widget;
}

/// Creates every tooltip, then every popover, declared on `page`.
///
/// A page with no flagged elements yields no widgets.
pub fn init_widgets<P, F>(page: &P, factory: &mut F) -> Vec<F::Widget>
where
    P: Page + ?Sized,
    F: WidgetFactory,
{
    let mut widgets = Vec::new();
    let mut counts = [0usize; 2];

    for (slot, kind) in [WidgetKind::Tooltip, WidgetKind::Popover].into_iter().enumerate() {
        for element in page.elements_with_toggle(kind) {
            widgets.push(factory.create(kind, &element));
            counts[slot] += 1;
        }
    }

    info!(tooltips = counts[0], popovers = counts[1], "widgets initialized");
    widgets
}

// == HTML Page ==
/// A parsed HTML document.
pub struct HtmlPage {
    document: Html,
}

impl HtmlPage {
    pub fn parse(html: &str) -> Self {
        Self {
            document: Html::parse_document(html),
        }
    }
}

impl Page for HtmlPage {
    fn elements_with_toggle(&self, kind: WidgetKind) -> Vec<TriggerElement> {
        let selector = match Selector::parse(&kind.selector()) {
            Ok(selector) => selector,
            Err(_) => return Vec::new(),
        };

        self.document
            .select(&selector)
            .map(|element| {
                let attr = |name: &str| element.value().attr(name).map(str::to_string);
                TriggerElement {
                    tag: element.value().name().to_string(),
                    id: attr("id"),
                    title: attr("title").or_else(|| attr("data-bs-title")),
                    content: attr("data-bs-content"),
                    placement: attr("data-bs-placement"),
                }
            })
            .collect()
    }
}

// == Widget Plan ==
/// A widget to be created on the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WidgetDescriptor {
    pub kind: WidgetKind,
    #[serde(flatten)]
    pub element: TriggerElement,
}

/// Factory that only describes the widgets it is asked for.
#[derive(Debug, Clone, Copy, Default)]
pub struct WidgetPlan;

impl WidgetFactory for WidgetPlan {
    type Widget = WidgetDescriptor;

    fn create(&mut self, kind: WidgetKind, element: &TriggerElement) -> WidgetDescriptor {
        WidgetDescriptor {
            kind,
            element: element.clone(),
        }
    }
}

// == Confirm ==
/// Asks the user a yes/no question.
pub trait Confirm {
    fn confirm(&self, message: &str) -> bool;
}

impl<F: Fn(&str) -> bool> Confirm for F {
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}

/// Runs `action` only if the user confirms `message`. Returns whether it ran.
pub fn confirm_action<C, A>(confirmer: &C, message: &str, action: A) -> bool
where
    C: Confirm + ?Sized,
    A: FnOnce(),
{
    if confirmer.confirm(message) {
        action();
        true
    } else {
        false
    }
}
