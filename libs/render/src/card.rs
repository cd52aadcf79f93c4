use entity::prelude::*;
use maud::{html, Markup};

use crate::escape::Escaped;

/// Number of body characters shown on a card.
const EXCERPT_CHARS: usize = 200;

/// Escaped fields of one record, ready to splice into markup.
struct CardView {
    title: Escaped,
    category: Escaped,
    excerpt: Escaped,
    truncated: bool,
    created_at: Escaped,
}

impl From<&ContentEntity> for CardView {
    fn from(content: &ContentEntity) -> Self {
        // truncate on characters first, then escape
        let mut chars = content.body.chars();
        let head: String = chars.by_ref().take(EXCERPT_CHARS).collect();
        let truncated = chars.next().is_some();

        Self {
            title: Escaped::new(&content.title),
            category: Escaped::new(&content.category),
            excerpt: Escaped::new(&head),
            truncated,
            created_at: Escaped::new(&content.created_at),
        }
    }
}

/// Renders the summary card of one record.
pub(crate) fn card(content: &ContentEntity) -> Markup {
    let view = CardView::from(content);

    html! {
        article.content-card data-id=(content.id) {
            div.content-header {
                h3 { (view.title) }
                span class={ "category-badge " (view.category) "-badge" } {
                    (view.category)
                }
            }
            div.content-body {
                p {
                    (view.excerpt)
                    @if view.truncated { "..." }
                }
            }
            div.content-footer {
                span.date { (view.created_at) }
                button.read-more-btn type="button" data-id=(content.id) {
                    "Read More"
                }
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn content_with_body(body: String) -> ContentEntity {
        ContentEntity {
            id: 1,
            title: "Title".to_string(),
            body,
            category: "story".to_string(),
            created_at: "2024-05-01 10:00:00".to_string(),
        }
    }

    fn paragraph(html: &str) -> &str {
        let start = html.find("<p>").unwrap() + "<p>".len();
        let end = html.find("</p>").unwrap();
        &html[start..end]
    }

    #[test]
    fn test_long_body_is_truncated() {
        // Arrange
        let content = content_with_body("a".repeat(250));

        // Act
        let html = card(&content).into_string();

        // Assert
        assert_eq!(paragraph(&html), format!("{}...", "a".repeat(200)));
    }

    #[test]
    fn test_short_body_is_kept() {
        // Arrange
        let content = content_with_body("b".repeat(199));

        // Act
        let html = card(&content).into_string();

        // Assert
        assert_eq!(paragraph(&html), "b".repeat(199));
    }

    #[test]
    fn test_body_of_exact_length_has_no_ellipsis() {
        // Arrange
        let content = content_with_body("c".repeat(200));

        // Act
        let html = card(&content).into_string();

        // Assert
        assert_eq!(paragraph(&html), "c".repeat(200));
    }

    #[test]
    fn test_truncation_counts_characters_before_escaping() {
        // Arrange
        let content = content_with_body(format!("{}<tail", "é".repeat(199)));

        // Act
        let html = card(&content).into_string();

        // Assert
        assert_eq!(paragraph(&html), format!("{}&lt;...", "é".repeat(199)));
    }

    #[test]
    fn test_all_fields_are_escaped() {
        // Arrange
        let content = ContentEntity {
            id: 3,
            title: "<script>&\"'".to_string(),
            body: "<script>&\"'".to_string(),
            category: "\"><script>".to_string(),
            created_at: "<b>now</b>".to_string(),
        };

        // Act
        let html = card(&content).into_string();

        // Assert
        assert!(html.contains("<h3>&lt;script&gt;&amp;&quot;&#39;</h3>"));
        assert!(html.contains("<p>&lt;script&gt;&amp;&quot;&#39;</p>"));
        assert!(html.contains(
            "class=\"category-badge &quot;&gt;&lt;script&gt;-badge\""
        ));
        assert!(html.contains("&lt;b&gt;now&lt;/b&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_card_layout() {
        // Arrange
        let content = content_with_body("Once upon a time".to_string());

        // Act
        let html = card(&content).into_string();

        // Assert
        assert!(html.starts_with("<article class=\"content-card\" data-id=\"1\">"));
        assert!(html.contains(
            "<span class=\"category-badge story-badge\">story</span>"
        ));
        assert!(html.contains("<span class=\"date\">2024-05-01 10:00:00</span>"));
    }
}
