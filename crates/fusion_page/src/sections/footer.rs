//! Site footer

use fusion_content::{Brand, FooterContent, FooterLink};
use fusion_core::ElementKey;
use fusion_layout::element::{button, div, heading, link, paragraph, span, Element};

fn footer_link(key: ElementKey, item: &FooterLink) -> Element {
    match item.section() {
        // In-page anchors scroll like the navbar does
        Some(section) if !item.external => button(&item.label)
            .key(key)
            .class("footer-link")
            .scroll_target(section),
        _ => {
            let el = link(&item.href, &item.label).key(key).class("footer-link");
            if item.external {
                el.external()
            } else {
                el
            }
        }
    }
}

pub fn footer(content: &FooterContent, brand: &Brand) -> Element {
    let root = ElementKey::new("footer");

    let about = div()
        .class("footer-brand")
        .flex_1()
        .gap(4.0)
        .child(heading(4, &brand.name))
        .child(paragraph(&brand.blurb))
        .child(
            div()
                .class("footer-socials")
                .flex_row()
                .gap(4.0)
                .children(content.socials.iter().enumerate().map(|(i, social)| {
                    link(&social.href, &social.name)
                        .key(root.derive("social").index(i))
                        .external()
                })),
        );

    let columns = content.columns.iter().enumerate().map(|(c, column)| {
        let base = root.derive("column").index(c);
        div()
            .class("footer-column")
            .flex_1()
            .gap(2.0)
            .child(heading(5, &column.title))
            .children(
                column
                    .links
                    .iter()
                    .enumerate()
                    .map(|(i, item)| footer_link(base.index(i), item)),
            )
    });

    let legal = div()
        .class("footer-legal")
        .flex_row()
        .flex_wrap()
        .justify_between()
        .gap(4.0)
        .child(span(&brand.copyright))
        .child(
            div()
                .flex_row()
                .gap(4.0)
                .children(
                    content
                        .legal
                        .iter()
                        .enumerate()
                        .map(|(i, item)| footer_link(root.derive("legal").index(i), item)),
                ),
        )
        .child_opt(brand.credits.as_deref().map(|credits| span(credits).class("credits")));

    Element::new("footer")
        .class("footer")
        .px(4.0)
        .py(12.0)
        .gap(8.0)
        .child(
            div()
                .flex_row()
                .flex_wrap()
                .gap(8.0)
                .child(about)
                .children(columns),
        )
        .child(legal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fusion_content::SiteContent;
    use fusion_core::SectionId;

    #[test]
    fn test_quick_links_scroll_and_resources_open_externally() {
        let content = SiteContent::embedded().expect("content");
        let el = footer(&content.footer, &content.brand);

        let about = el.find(&ElementKey::new("footer/column/0/0")).expect("about");
        assert_eq!(about.scroll_target_section(), Some(SectionId::About));

        let base = el.find(&ElementKey::new("footer/column/1/0")).expect("base");
        assert_eq!(base.get_attr("href"), Some("https://base.org"));
        assert_eq!(base.get_attr("target"), Some("_blank"));

        let terms = el.find(&ElementKey::new("footer/legal/0")).expect("terms");
        assert_eq!(terms.get_attr("href"), Some("/terms"));
        assert_eq!(terms.get_attr("target"), None);
    }
}
