//! Community section: stats, social channels and the newsletter form

use fusion_animation::RevealAnimation;
use fusion_content::CommunityContent;
use fusion_core::{ElementKey, SectionId};
use fusion_layout::element::{button, div, heading, link, paragraph, section, span, Element};

use crate::newsletter::NewsletterForm;

use super::{section_header, staggered_keys};

const CARD_STAGGER_MS: u32 = 100;

fn newsletter(content: &CommunityContent, form: &NewsletterForm) -> Element {
    let root = ElementKey::new(SectionId::Community.as_str()).derive("newsletter");
    let copy = &content.newsletter;
    let email = form.email();

    let input = Element::new("input")
        .key(root.derive("email"))
        .class("newsletter-input")
        .attr("type", "email")
        .attr("placeholder", &copy.placeholder)
        .attr("value", email)
        .attr_if(form.is_subscribing(), "disabled", "")
        .flex_1()
        .h(48.0);

    let submit = button(form.button_label())
        .key(root.derive("submit"))
        .class("btn btn-primary")
        .attr("type", "submit")
        .attr("data-action", "subscribe")
        .attr_if(!form.can_submit(), "disabled", "");

    let message = form
        .message()
        .map(|message| paragraph(message).key(root.derive("message")).class("newsletter-success"));

    div()
        .key(root.clone())
        .class("newsletter glass-card")
        .p(8.0)
        .gap(4.0)
        .items_center()
        .reveal(RevealAnimation::fade_up(30.0, 800).with_delay(200))
        .child(heading(3, &copy.title))
        .child(paragraph(&copy.intro))
        .child(
            Element::new("form")
                .class("newsletter-form")
                .flex_row()
                .gap(2.0)
                .w_full()
                .max_w(512.0)
                .child(input)
                .child(submit),
        )
        .child_opt(message)
}

pub fn community(content: &CommunityContent, form: &NewsletterForm) -> Element {
    let root = ElementKey::new(SectionId::Community.as_str());

    let stats = div()
        .class("community-stats")
        .flex_row()
        .flex_wrap()
        .gap(6.0)
        .children(
            staggered_keys(&root, "stat", content.stats.len(), CARD_STAGGER_MS)
                .into_iter()
                .zip(&content.stats)
                .map(|((key, delay), stat)| {
                    div()
                        .key(key)
                        .class("stat glass-card")
                        .basis_fraction(1.0 / 3.0)
                        .p(6.0)
                        .items_center()
                        .reveal(RevealAnimation::pop_in(600).with_delay(delay))
                        .child(div().class("stat-value").text(&stat.value).font_size(30.0))
                        .child(span(&stat.label).class("stat-label"))
                }),
        );

    let socials = div()
        .class("social-grid")
        .flex_row()
        .flex_wrap()
        .gap(6.0)
        .children(
            staggered_keys(&root, "social", content.socials.len(), CARD_STAGGER_MS)
                .into_iter()
                .zip(&content.socials)
                .map(|((key, delay), social)| {
                    div()
                        .key(key.clone())
                        .class("social-card glass-card")
                        .basis_fraction(1.0 / 3.0)
                        .p(6.0)
                        .gap(2.0)
                        .reveal(RevealAnimation::fade_up(50.0, 600).with_delay(delay))
                        .child(heading(4, &social.name))
                        .child(paragraph(&social.description))
                        .child(
                            link(&social.href, "Join Now")
                                .key(key.derive("join"))
                                .class("btn btn-outline")
                                .external(),
                        )
                }),
        );

    section(SectionId::Community)
        .class("community")
        .py(24.0)
        .px(4.0)
        .gap(12.0)
        .child(section_header(SectionId::Community, &content.title, &content.intro))
        .child(stats)
        .child(socials)
        .child(newsletter(content, form))
}

#[cfg(test)]
mod tests {
    use super::*;
    use fusion_animation::AnimationScheduler;
    use fusion_content::SiteContent;

    #[test]
    fn test_submit_disabled_until_email_entered() {
        let content = SiteContent::embedded().expect("content");
        let scheduler = AnimationScheduler::new();
        let mut form = NewsletterForm::new(scheduler.handle(), 1000, "done");

        let el = community(&content.community, &form);
        let submit = el
            .find(&ElementKey::new("community/newsletter/submit"))
            .expect("submit");
        assert_eq!(submit.get_attr("disabled"), Some(""));
        assert_eq!(submit.text_content(), Some("Subscribe"));

        form.set_email("holder@example.com");
        let el = community(&content.community, &form);
        let submit = el
            .find(&ElementKey::new("community/newsletter/submit"))
            .expect("submit");
        assert_eq!(submit.get_attr("disabled"), None);
        let input = el
            .find(&ElementKey::new("community/newsletter/email"))
            .expect("input");
        assert_eq!(input.get_attr("value"), Some("holder@example.com"));
    }

    #[test]
    fn test_success_message_shown_after_completion() {
        let content = SiteContent::embedded().expect("content");
        let scheduler = AnimationScheduler::new();
        let mut form = NewsletterForm::new(scheduler.handle(), 1000, "Subscribed!");
        form.set_email("holder@example.com");
        form.submit();

        let el = community(&content.community, &form);
        assert!(el.find(&ElementKey::new("community/newsletter/message")).is_none());
        let submit = el
            .find(&ElementKey::new("community/newsletter/submit"))
            .expect("submit");
        assert_eq!(submit.text_content(), Some("Subscribing..."));

        scheduler.advance(1000.0);
        let el = community(&content.community, &form);
        let message = el
            .find(&ElementKey::new("community/newsletter/message"))
            .expect("message");
        assert_eq!(message.text_content(), Some("Subscribed!"));
    }

    #[test]
    fn test_social_links_open_externally() {
        let content = SiteContent::embedded().expect("content");
        let scheduler = AnimationScheduler::new();
        let form = NewsletterForm::new(scheduler.handle(), 1000, "done");
        let el = community(&content.community, &form);
        let discord = el
            .find(&ElementKey::new("community/social/1/join"))
            .expect("discord");
        assert_eq!(discord.get_attr("href"), Some("https://discord.gg/quantumfusion"));
        assert_eq!(discord.get_attr("target"), Some("_blank"));
    }
}
