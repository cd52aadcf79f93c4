use maud::{html, Markup, DOCTYPE};

pub const SITE_NAME: &str = "RB Publication";

/// Renders the base HTML document structure
pub(crate) fn base_document(
    title: &str,
    stylesheet: &str,
    script: Option<&str>,
    content: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                link rel="stylesheet" href=(stylesheet);
            }
            body {
                (content)
                @if let Some(script) = script {
                    script src=(script) {}
                }
            }
        }
    }
}
