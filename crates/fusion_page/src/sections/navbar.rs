//! Fixed navigation bar with a mobile sheet

use fusion_content::{Brand, NavItem};
use fusion_core::ElementKey;
use fusion_layout::element::{button, div, span, Element};

use crate::navigation::MenuState;
use crate::wallet::{wallet_widget, WalletConnector};

pub const NAV_HEIGHT: f32 = 64.0;

/// Nav entry; items whose anchor names no section render inert
fn nav_button(parent: &ElementKey, index: usize, item: &NavItem) -> Element {
    let el = button(&item.label).class("nav-link");
    match item.section() {
        Some(section) => el
            .key(parent.derive(section.as_str()))
            .scroll_target(section),
        None => el.key(parent.index(index)),
    }
}

pub fn navbar(
    brand: &Brand,
    items: &[NavItem],
    menu: MenuState,
    wallet: &dyn WalletConnector,
) -> Element {
    let nav = ElementKey::new("nav");
    let desktop = nav.derive("item");
    let mobile = nav.derive("sheet");
    let open = menu == MenuState::Open;

    let logo = div()
        .class("nav-brand")
        .flex_row()
        .items_center()
        .gap(2.0)
        .child(span(&brand.short_name).class("logo-mark"))
        .child(
            div()
                .child(span(&brand.name).class("brand-name"))
                .child(span(&brand.tagline).class("brand-tagline")),
        );

    let links = div()
        .class("nav-links")
        .flex_row()
        .gap(6.0)
        .children(
            items
                .iter()
                .enumerate()
                .map(|(i, item)| nav_button(&desktop, i, item)),
        );

    let toggle = button(if open { "Close" } else { "Menu" })
        .key(nav.derive("menu-toggle"))
        .class("menu-toggle")
        .attr("data-action", "toggle-menu")
        .attr("aria-expanded", open.to_string());

    let mut sheet = div()
        .key(mobile.clone())
        .class("mobile-sheet glass-card")
        .p(4.0)
        .gap(2.0)
        .children(
            items
                .iter()
                .enumerate()
                .map(|(i, item)| nav_button(&mobile, i, item)),
        )
        .child(wallet_widget(wallet));
    if !open {
        sheet = sheet.hidden();
    }

    div()
        .class("navbar")
        .fixed_top()
        .child(
            Element::new("nav")
                .class("nav-inner")
                .flex_row()
                .items_center()
                .justify_between()
                .h(NAV_HEIGHT)
                .px(4.0)
                .child(logo)
                .child(links)
                .child(div().class("nav-wallet").child(wallet_widget(wallet)))
                .child(toggle),
        )
        .child(sheet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wallet::StaticWallet;
    use fusion_content::SiteContent;
    use fusion_core::SectionId;

    #[test]
    fn test_every_nav_item_targets_its_section() {
        let content = SiteContent::embedded().expect("content");
        let el = navbar(
            &content.brand,
            &content.nav,
            MenuState::Closed,
            &StaticWallet::disconnected(),
        );
        for section in SectionId::ALL {
            let key = ElementKey::new("nav/item").derive(section.as_str());
            let item = el.find(&key).expect("nav item");
            assert_eq!(item.scroll_target_section(), Some(section));
        }
    }

    #[test]
    fn test_sheet_hidden_until_opened() {
        let content = SiteContent::embedded().expect("content");
        let wallet = StaticWallet::disconnected();
        let closed = navbar(&content.brand, &content.nav, MenuState::Closed, &wallet);
        let sheet = closed.find(&ElementKey::new("nav/sheet")).expect("sheet");
        assert_eq!(sheet.get_attr("hidden"), Some(""));

        let open = navbar(&content.brand, &content.nav, MenuState::Open, &wallet);
        let sheet = open.find(&ElementKey::new("nav/sheet")).expect("sheet");
        assert_eq!(sheet.get_attr("hidden"), None);
        assert!(open.find(&ElementKey::new("nav/sheet/buy")).is_some());
    }

    #[test]
    fn test_unresolvable_item_is_inert() {
        let items = vec![NavItem {
            label: "Docs".into(),
            href: "#docs".into(),
        }];
        let content = SiteContent::embedded().expect("content");
        let el = navbar(
            &content.brand,
            &items,
            MenuState::Closed,
            &StaticWallet::disconnected(),
        );
        let item = el.find(&ElementKey::new("nav/item/0")).expect("item");
        assert_eq!(item.scroll_target_section(), None);
    }
}
