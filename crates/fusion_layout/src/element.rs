//! Element tree builder with tailwind-style methods
//!
//! Sections describe their markup as a tree of [`Element`]s:
//!
//! ```rust
//! use fusion_layout::element::{div, heading, paragraph};
//!
//! let card = div()
//!     .key("about/feature/0")
//!     .class("feature-card")
//!     .flex_col()
//!     .gap(2.0)
//!     .p(6.0)
//!     .child(heading(3, "Lightning Fast"))
//!     .child(paragraph("Sub-second finality on Base."));
//!
//! assert_eq!(card.children().len(), 2);
//! ```
//!
//! Each element carries a Taffy style for page layout, HTML attributes for
//! rendering, and optionally a stable key and a reveal animation.

use fusion_animation::RevealAnimation;
use fusion_core::{ElementKey, SectionId};
use smallvec::SmallVec;
use taffy::prelude::*;

/// Tags rendered without a closing tag
const VOID_TAGS: &[&str] = &["img", "input", "br", "hr", "meta"];

/// Default font size for text leaves (px)
pub const BASE_FONT_SIZE: f32 = 16.0;

/// A node in the page tree
#[derive(Clone, Debug)]
pub struct Element {
    tag: &'static str,
    key: Option<ElementKey>,
    classes: SmallVec<[String; 4]>,
    attrs: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<Element>,
    style: Style,
    font_size: f32,
    reveal: Option<RevealAnimation>,
}

impl Element {
    /// Create an element with the given tag name
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            key: None,
            classes: SmallVec::new(),
            attrs: Vec::new(),
            text: None,
            children: Vec::new(),
            style: Style {
                display: Display::Flex,
                flex_direction: FlexDirection::Column,
                ..Style::default()
            },
            font_size: BASE_FONT_SIZE,
            reveal: None,
        }
    }

    // =========================================================================
    // Identity & Attributes
    // =========================================================================

    /// Stable key used for layout lookups, reveal tracking and click routing
    pub fn key(mut self, key: impl Into<ElementKey>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn id(self, id: impl Into<String>) -> Self {
        self.attr("id", id)
    }

    /// Add one or more space-separated classes
    pub fn class(mut self, class: impl AsRef<str>) -> Self {
        self.classes
            .extend(class.as_ref().split_whitespace().map(str::to_string));
        self
    }

    /// Set an attribute, replacing any previous value
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
        self
    }

    /// Set an attribute only when `condition` holds
    pub fn attr_if(self, condition: bool, name: impl Into<String>, value: impl Into<String>) -> Self {
        if condition {
            self.attr(name, value)
        } else {
            self
        }
    }

    /// Mark this element as scrolling to a section when clicked
    pub fn scroll_target(self, section: SectionId) -> Self {
        self.attr("data-scroll-to", section.as_str())
    }

    /// Open the link in a new tab
    pub fn external(self) -> Self {
        self.attr("target", "_blank")
            .attr("rel", "noopener noreferrer")
    }

    /// Text content rendered before any children
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Animate this element in when it first becomes visible
    pub fn reveal(mut self, animation: RevealAnimation) -> Self {
        self.reveal = Some(animation);
        self
    }

    pub fn font_size(mut self, px: f32) -> Self {
        self.font_size = px;
        self
    }

    // =========================================================================
    // Children
    // =========================================================================

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = Element>,
    {
        self.children.extend(children);
        self
    }

    /// Add a child only if present
    pub fn child_opt(self, child: Option<Element>) -> Self {
        match child {
            Some(child) => self.child(child),
            None => self,
        }
    }

    // =========================================================================
    // Flex Direction & Properties
    // =========================================================================

    pub fn flex_row(mut self) -> Self {
        self.style.display = Display::Flex;
        self.style.flex_direction = FlexDirection::Row;
        self
    }

    pub fn flex_col(mut self) -> Self {
        self.style.display = Display::Flex;
        self.style.flex_direction = FlexDirection::Column;
        self
    }

    /// Excluded from layout and rendered with the `hidden` attribute
    pub fn hidden(mut self) -> Self {
        self.style.display = Display::None;
        self.attr("hidden", "")
    }

    pub fn flex_wrap(mut self) -> Self {
        self.style.flex_wrap = FlexWrap::Wrap;
        self
    }

    /// Set flex: 1 1 0% (grow, shrink, basis 0)
    pub fn flex_1(mut self) -> Self {
        self.style.flex_grow = 1.0;
        self.style.flex_shrink = 1.0;
        self.style.flex_basis = Dimension::Length(0.0);
        self
    }

    /// Take a fraction of the parent's main axis (grid-like columns)
    pub fn basis_fraction(mut self, fraction: f32) -> Self {
        self.style.flex_basis = Dimension::Percent(fraction.clamp(0.0, 1.0));
        self.style.flex_grow = 0.0;
        self.style.flex_shrink = 1.0;
        self
    }

    pub fn items_center(mut self) -> Self {
        self.style.align_items = Some(AlignItems::Center);
        self
    }

    pub fn justify_between(mut self) -> Self {
        self.style.justify_content = Some(JustifyContent::SpaceBetween);
        self
    }

    /// Pin to the top of the parent, out of the normal flow
    pub fn fixed_top(mut self) -> Self {
        self.style.position = Position::Absolute;
        self.style.inset = taffy::Rect {
            left: LengthPercentageAuto::Length(0.0),
            right: LengthPercentageAuto::Length(0.0),
            top: LengthPercentageAuto::Length(0.0),
            bottom: LengthPercentageAuto::Auto,
        };
        self.attr("data-fixed", "top")
    }

    // =========================================================================
    // Sizing
    // =========================================================================

    pub fn w_full(mut self) -> Self {
        self.style.size.width = Dimension::Percent(1.0);
        self
    }

    pub fn h(mut self, px: f32) -> Self {
        self.style.size.height = Dimension::Length(px);
        self
    }

    pub fn w(mut self, px: f32) -> Self {
        self.style.size.width = Dimension::Length(px);
        self
    }

    pub fn min_h(mut self, px: f32) -> Self {
        self.style.min_size.height = Dimension::Length(px);
        self
    }

    pub fn max_w(mut self, px: f32) -> Self {
        self.style.max_size.width = Dimension::Length(px);
        self
    }

    // =========================================================================
    // Spacing (4px base unit like Tailwind)
    // =========================================================================

    /// Set gap between children (in 4px units)
    pub fn gap(mut self, units: f32) -> Self {
        let px = LengthPercentage::Length(units * 4.0);
        self.style.gap = taffy::Size {
            width: px,
            height: px,
        };
        self
    }

    /// Set padding on all sides (in 4px units)
    pub fn p(mut self, units: f32) -> Self {
        let px = LengthPercentage::Length(units * 4.0);
        self.style.padding = taffy::Rect {
            left: px,
            right: px,
            top: px,
            bottom: px,
        };
        self
    }

    /// Set horizontal padding (in 4px units)
    pub fn px(mut self, units: f32) -> Self {
        let px = LengthPercentage::Length(units * 4.0);
        self.style.padding.left = px;
        self.style.padding.right = px;
        self
    }

    /// Set vertical padding (in 4px units)
    pub fn py(mut self, units: f32) -> Self {
        let px = LengthPercentage::Length(units * 4.0);
        self.style.padding.top = px;
        self.style.padding.bottom = px;
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn tag(&self) -> &'static str {
        self.tag
    }

    pub fn element_key(&self) -> Option<&ElementKey> {
        self.key.as_ref()
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn attrs(&self) -> &[(String, String)] {
        &self.attrs
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn text_content(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn font_size_px(&self) -> f32 {
        self.font_size
    }

    pub fn reveal_animation(&self) -> Option<&RevealAnimation> {
        self.reveal.as_ref()
    }

    pub fn is_void(&self) -> bool {
        VOID_TAGS.contains(&self.tag)
    }

    /// Section this element scrolls to when clicked, if any
    pub fn scroll_target_section(&self) -> Option<SectionId> {
        self.get_attr("data-scroll-to").and_then(SectionId::parse)
    }

    // =========================================================================
    // Traversal
    // =========================================================================

    /// Visit this element and its descendants depth-first, in document order
    pub fn walk<'a>(&'a self, f: &mut impl FnMut(&'a Element)) {
        f(self);
        for child in &self.children {
            child.walk(f);
        }
    }

    /// Find a descendant (or self) by key
    pub fn find(&self, key: &ElementKey) -> Option<&Element> {
        if self.key.as_ref() == Some(key) {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(key))
    }

    /// Keyed elements with a reveal animation, in document order
    pub fn revealables(&self) -> Vec<(&ElementKey, &RevealAnimation)> {
        let mut out = Vec::new();
        self.walk(&mut |el| {
            if let (Some(key), Some(anim)) = (el.key.as_ref(), el.reveal.as_ref()) {
                out.push((key, anim));
            }
        });
        out
    }

    /// Concatenated text of this element and its descendants
    pub fn inner_text(&self) -> String {
        let mut out = String::new();
        self.walk(&mut |el| {
            if let Some(text) = &el.text {
                if !out.is_empty() {
                    out.push(' ');
                }
                out.push_str(text);
            }
        });
        out
    }
}

// ============================================================================
// Constructors
// ============================================================================

pub fn div() -> Element {
    Element::new("div")
}

/// A page section anchored at `#<id>`, keyed by its id
pub fn section(id: SectionId) -> Element {
    Element::new("section").key(id.as_str()).id(id.as_str())
}

/// `h1`..`h6`; levels outside that range clamp
pub fn heading(level: u8, text: impl Into<String>) -> Element {
    let (tag, size) = match level {
        0 | 1 => ("h1", 56.0),
        2 => ("h2", 40.0),
        3 => ("h3", 24.0),
        4 => ("h4", 20.0),
        5 => ("h5", 18.0),
        _ => ("h6", 16.0),
    };
    Element::new(tag).text(text).font_size(size)
}

pub fn paragraph(text: impl Into<String>) -> Element {
    Element::new("p").text(text)
}

/// Inline text
pub fn span(text: impl Into<String>) -> Element {
    Element::new("span").text(text)
}

pub fn link(href: impl Into<String>, label: impl Into<String>) -> Element {
    Element::new("a").attr("href", href).text(label)
}

pub fn button(label: impl Into<String>) -> Element {
    Element::new("button").attr("type", "button").text(label)
}

pub fn image(src: impl Into<String>, alt: impl Into<String>) -> Element {
    Element::new("img").attr("src", src).attr("alt", alt)
}

pub fn list() -> Element {
    Element::new("ul")
}

pub fn list_item(text: impl Into<String>) -> Element {
    Element::new("li").text(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attr_replaces_existing_value() {
        let el = div().attr("title", "a").attr("title", "b");
        assert_eq!(el.attrs().len(), 1);
        assert_eq!(el.get_attr("title"), Some("b"));
    }

    #[test]
    fn test_class_splits_on_whitespace() {
        let el = div().class("btn  btn-primary").class("wide");
        assert_eq!(el.classes(), &["btn", "btn-primary", "wide"]);
    }

    #[test]
    fn test_section_is_keyed_and_anchored() {
        let el = section(SectionId::Buy);
        assert_eq!(el.tag(), "section");
        assert_eq!(el.element_key().map(|k| k.as_str()), Some("buy"));
        assert_eq!(el.get_attr("id"), Some("buy"));
    }

    #[test]
    fn test_revealables_in_document_order() {
        let tree = div()
            .child(div().key("a").reveal(RevealAnimation::fade_in(100)))
            .child(
                div()
                    .key("b")
                    .child(div().key("b/0").reveal(RevealAnimation::fade_in(100))),
            )
            .child(div().key("c").reveal(RevealAnimation::fade_in(100)));

        let keys: Vec<&str> = tree
            .revealables()
            .into_iter()
            .map(|(k, _)| k.as_str())
            .collect();
        assert_eq!(keys, vec!["a", "b/0", "c"]);
    }

    #[test]
    fn test_find_and_scroll_target() {
        let tree = div().child(
            button("Learn More")
                .key("hero/learn-more")
                .scroll_target(SectionId::About),
        );
        let found = tree
            .find(&ElementKey::new("hero/learn-more"))
            .expect("button present");
        assert_eq!(found.scroll_target_section(), Some(SectionId::About));
        assert!(tree.find(&ElementKey::new("missing")).is_none());
    }

    #[test]
    fn test_inner_text_joins_descendants() {
        let el = div().child(heading(2, "Roadmap")).child(paragraph("Our journey"));
        assert_eq!(el.inner_text(), "Roadmap Our journey");
    }
}
