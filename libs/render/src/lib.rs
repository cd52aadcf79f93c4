//! HTML pages for the public site and the admin panel.
//!
//! Markup is built with [maud](https://maud.lambda.xyz/). User supplied text
//! is spliced only through the `Escaped` wrapper, which escapes it exactly
//! once.

use maud::Markup;
use repository::{content::ContentRepository, Response};
use tracing::debug;

mod admin;
mod card;
mod escape;
mod home;
mod layout;

pub use admin::login_page;

use admin::admin_document;
use home::home_document;

/// Reads records through the store and renders the pages that list them.
#[derive(Clone, Debug)]
pub struct Renderer {
    repo: ContentRepository,
}

impl Renderer {
    pub fn new(repo: ContentRepository) -> Self {
        Self { repo }
    }

    pub async fn home_page(&self) -> Response<Markup> {
        let contents = self.repo.find_all().await?;
        debug!(task = "render home page", count = contents.len());

        Ok(home_document(&contents))
    }

    pub async fn admin_page(&self) -> Response<Markup> {
        let contents = self.repo.find_all().await?;
        debug!(task = "render admin page", count = contents.len());

        Ok(admin_document(&contents))
    }
}
