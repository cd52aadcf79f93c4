use entity::{content::Category, prelude::*};
use maud::{html, Markup};
use strum::IntoEnumIterator as _;

use crate::{
    card::card,
    layout::{base_document, SITE_NAME},
};

/// Renders the public home page: one section per [`Category`], in a fixed
/// order, each holding the cards of its records in the given order.
pub fn home_document(contents: &[ContentEntity]) -> Markup {
    let content = html! {
        header.main-header {
            div.container {
                h1 { (SITE_NAME) }
                nav.main-nav {
                    a.nav-link href="/" { "Home" }
                    @for category in Category::iter() {
                        a.nav-link href={ "/#" (category.anchor()) } {
                            (category.plural())
                        }
                    }
                }
            }
        }
        main.main-content {
            div.container {
                section.hero-section {
                    h2 { "Welcome to " (SITE_NAME) }
                    p { "Discover amazing stories, articles, news, and poems" }
                }
                @for category in Category::iter() {
                    (section(category, contents))
                }
            }
        }
        footer.main-footer {
            div.container {
                p { "© " (SITE_NAME) ". All rights reserved." }
            }
        }
    };

    base_document(
        SITE_NAME,
        "/static/style.css",
        Some("/static/script.js"),
        content,
    )
}

fn section(category: Category, contents: &[ContentEntity]) -> Markup {
    html! {
        section.content-section id=(category.anchor()) {
            h2 { (category.heading()) }
            div.content-grid {
                @for content in contents
                    .iter()
                    .filter(|c| c.category == category.as_str())
                {
                    (card(content))
                }
            }
        }
    }
}
