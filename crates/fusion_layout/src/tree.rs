//! Page layout via Taffy
//!
//! The element tree is mirrored into a Taffy tree, laid out at the viewport
//! width with unbounded height, and flattened into absolute page-space
//! bounds for every keyed element. Text leaves are measured with a simple
//! fixed-advance model so layout stays deterministic without font files.

use indexmap::IndexMap;
use taffy::prelude::*;

use fusion_core::{ElementKey, Rect as PageRect};

use crate::element::Element;
use crate::error::{LayoutError, Result};

/// Average glyph advance as a fraction of the font size
const GLYPH_ADVANCE: f32 = 0.55;

/// Line height multiplier for text leaves
const LINE_HEIGHT: f32 = 1.5;

/// Context stored with text nodes for measurement during layout
#[derive(Clone, Debug)]
pub struct TextMeasureContext {
    pub content: String,
    pub font_size: f32,
}

impl TextMeasureContext {
    /// Width of the text on a single line
    fn single_line_width(&self) -> f32 {
        self.content.chars().count() as f32 * self.font_size * GLYPH_ADVANCE
    }

    fn line_height(&self) -> f32 {
        self.font_size * LINE_HEIGHT
    }
}

/// Measure function for text nodes during Taffy layout
fn text_measure_function(
    known_dimensions: Size<Option<f32>>,
    available_space: Size<AvailableSpace>,
    _node_id: NodeId,
    node_context: Option<&mut TextMeasureContext>,
    _style: &Style,
) -> Size<f32> {
    if let (Some(width), Some(height)) = (known_dimensions.width, known_dimensions.height) {
        return Size { width, height };
    }

    let Some(ctx) = node_context else {
        return Size::ZERO;
    };

    let natural = ctx.single_line_width();
    let max_width = known_dimensions.width.or(match available_space.width {
        AvailableSpace::Definite(w) => Some(w),
        AvailableSpace::MaxContent => None,
        AvailableSpace::MinContent => Some(ctx.font_size * GLYPH_ADVANCE * 8.0),
    });

    let (width, lines) = match max_width {
        Some(max) if max > 0.0 && natural > max => (max, (natural / max).ceil()),
        _ => (natural, 1.0),
    };

    Size {
        width: known_dimensions.width.unwrap_or(width),
        height: known_dimensions
            .height
            .unwrap_or(lines * ctx.line_height()),
    }
}

/// Computed page layout
#[derive(Clone, Debug, Default)]
pub struct PageLayout {
    bounds: IndexMap<ElementKey, PageRect>,
    content_width: f32,
    content_height: f32,
}

impl PageLayout {
    /// Lay out `root` at the given viewport width
    pub fn compute(root: &Element, viewport_width: f32) -> Result<Self> {
        if !(viewport_width.is_finite() && viewport_width > 0.0) {
            return Err(LayoutError::InvalidViewport(viewport_width));
        }

        let mut tree = LayoutTree::new();
        let root_node = tree.build(root)?;

        let available = Size {
            width: AvailableSpace::Definite(viewport_width),
            height: AvailableSpace::MaxContent,
        };
        tree.taffy
            .compute_layout_with_measure(root_node, available, text_measure_function)?;

        let mut layout = PageLayout::default();
        tree.collect(root, root_node, 0.0, 0.0, &mut layout)?;

        let root_layout = tree.taffy.layout(root_node)?;
        layout.content_width = root_layout.size.width;
        layout.content_height = root_layout.size.height;

        tracing::debug!(
            keyed = layout.bounds.len(),
            height = layout.content_height,
            "page layout computed"
        );
        Ok(layout)
    }

    /// Absolute page-space bounds of a keyed element
    pub fn bounds(&self, key: &ElementKey) -> Option<PageRect> {
        self.bounds.get(key).copied()
    }

    /// Bounds by key string
    pub fn bounds_of(&self, key: &str) -> Option<PageRect> {
        self.bounds.get(&ElementKey::new(key)).copied()
    }

    /// All keyed bounds in document order
    pub fn iter(&self) -> impl Iterator<Item = (&ElementKey, &PageRect)> {
        self.bounds.iter()
    }

    pub fn len(&self) -> usize {
        self.bounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }

    pub fn content_width(&self) -> f32 {
        self.content_width
    }

    pub fn content_height(&self) -> f32 {
        self.content_height
    }
}

/// Taffy tree mirroring one element tree
struct LayoutTree {
    taffy: TaffyTree<TextMeasureContext>,
}

impl LayoutTree {
    fn new() -> Self {
        Self {
            taffy: TaffyTree::new(),
        }
    }

    fn build(&mut self, element: &Element) -> Result<NodeId> {
        let style = element.style().clone();

        if element.children().is_empty() {
            let node = match element.text_content() {
                Some(text) if !text.is_empty() => self.taffy.new_leaf_with_context(
                    style,
                    TextMeasureContext {
                        content: text.to_string(),
                        font_size: element.font_size_px(),
                    },
                )?,
                _ => self.taffy.new_leaf(style)?,
            };
            return Ok(node);
        }

        let mut children = Vec::with_capacity(element.children().len() + 1);
        if let Some(text) = element.text_content().filter(|t| !t.is_empty()) {
            // Leading text of a container becomes an anonymous text leaf
            children.push(self.taffy.new_leaf_with_context(
                Style::default(),
                TextMeasureContext {
                    content: text.to_string(),
                    font_size: element.font_size_px(),
                },
            )?);
        }
        for child in element.children() {
            children.push(self.build(child)?);
        }
        Ok(self.taffy.new_with_children(style, &children)?)
    }

    fn collect(
        &self,
        element: &Element,
        node: NodeId,
        parent_x: f32,
        parent_y: f32,
        out: &mut PageLayout,
    ) -> Result<()> {
        let layout = self.taffy.layout(node)?;
        let x = parent_x + layout.location.x;
        let y = parent_y + layout.location.y;

        if let Some(key) = element.element_key() {
            let rect = PageRect::new(x, y, layout.size.width, layout.size.height);
            if out.bounds.insert(key.clone(), rect).is_some() {
                tracing::warn!(%key, "duplicate element key; keeping the last bounds");
            }
        }

        let child_nodes = self.taffy.children(node)?;
        // Skip the anonymous text leaf if present
        let offset = child_nodes.len() - element.children().len();
        for (child, &child_node) in element.children().iter().zip(&child_nodes[offset..]) {
            self.collect(child, child_node, x, y, out)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{div, paragraph};

    #[test]
    fn test_fixed_heights_stack_vertically() {
        let root = div()
            .w_full()
            .child(div().key("a").h(100.0))
            .child(div().key("b").h(250.0))
            .child(div().key("c").h(50.0));

        let layout = PageLayout::compute(&root, 800.0).expect("layout");
        assert_eq!(layout.bounds_of("a"), Some(PageRect::new(0.0, 0.0, 800.0, 100.0)));
        assert_eq!(layout.bounds_of("b"), Some(PageRect::new(0.0, 100.0, 800.0, 250.0)));
        assert_eq!(layout.bounds_of("c"), Some(PageRect::new(0.0, 350.0, 800.0, 50.0)));
        assert_eq!(layout.content_height(), 400.0);
    }

    #[test]
    fn test_nested_positions_are_absolute() {
        let root = div()
            .w_full()
            .child(div().h(100.0))
            .child(div().key("outer").p(4.0).child(div().key("inner").h(20.0)));

        let layout = PageLayout::compute(&root, 400.0).expect("layout");
        let inner = layout.bounds_of("inner").expect("inner bounds");
        assert_eq!(inner.y(), 116.0);
        assert_eq!(inner.x(), 16.0);
        assert_eq!(inner.width(), 368.0);
    }

    #[test]
    fn test_fixed_top_is_out_of_flow() {
        let root = div()
            .w_full()
            .child(div().key("nav").h(64.0).fixed_top())
            .child(div().key("home").h(800.0));

        let layout = PageLayout::compute(&root, 1024.0).expect("layout");
        assert_eq!(layout.bounds_of("nav"), Some(PageRect::new(0.0, 0.0, 1024.0, 64.0)));
        assert_eq!(layout.bounds_of("home").map(|r| r.y()), Some(0.0));
        assert_eq!(layout.content_height(), 800.0);
    }

    #[test]
    fn test_long_text_wraps_to_more_lines() {
        let short = div().w_full().child(paragraph("Short").key("p"));
        let long = div()
            .w_full()
            .child(paragraph("word ".repeat(200)).key("p"));

        let short_h = PageLayout::compute(&short, 320.0)
            .expect("layout")
            .bounds_of("p")
            .expect("bounds")
            .height();
        let long_h = PageLayout::compute(&long, 320.0)
            .expect("layout")
            .bounds_of("p")
            .expect("bounds")
            .height();

        assert_eq!(short_h, 24.0);
        assert!(long_h > short_h * 5.0);
    }

    #[test]
    fn test_invalid_viewport_is_rejected() {
        let root = div();
        assert!(matches!(
            PageLayout::compute(&root, 0.0),
            Err(LayoutError::InvalidViewport(_))
        ));
    }
}
