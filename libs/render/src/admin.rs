use entity::{content::Category, prelude::*};
use maud::{html, Markup};
use strum::IntoEnumIterator as _;

use crate::{
    escape::Escaped,
    layout::{base_document, SITE_NAME},
};

pub fn login_page(error: Option<&str>) -> Markup {
    let content = html! {
        div.login-container {
            div.login-box {
                h1 { (SITE_NAME) }
                h2 { "Admin Login" }
                @if let Some(error) = error {
                    p.error-message { (Escaped::new(error)) }
                }
                form action="/admin/login" method="POST" {
                    div.form-group {
                        label for="username" { "Username:" }
                        input type="text" id="username" name="username" required;
                    }
                    div.form-group {
                        label for="password" { "Password:" }
                        input type="password" id="password" name="password" required;
                    }
                    button type="submit" { "Login" }
                }
            }
        }
    };

    base_document(
        &format!("{SITE_NAME} - Admin Login"),
        "/static/admin.css",
        None,
        content,
    )
}

/// Dashboard with the creation form and every stored record.
pub fn admin_document(contents: &[ContentEntity]) -> Markup {
    let content = html! {
        div.admin-container {
            header.admin-header {
                h1 { (SITE_NAME) " - Admin Panel" }
                a.view-site-btn href="/" { "View Site" }
                form.logout-form action="/admin/logout" method="POST" {
                    button type="submit" { "Logout" }
                }
            }
            div.admin-content {
                div.add-content-section {
                    h2 { "Add New Content" }
                    form action="/admin/add-content" method="POST" {
                        div.form-group {
                            label for="title" { "Title:" }
                            input type="text" id="title" name="title" required;
                        }
                        div.form-group {
                            label for="category" { "Category:" }
                            (category_select("category", None))
                        }
                        div.form-group {
                            label for="content" { "Content:" }
                            textarea id="content" name="content" rows="10" required {}
                        }
                        button type="submit" { "Add Content" }
                    }
                }
                div.manage-content-section {
                    h2 { "Manage Existing Content" }
                    div id="content-list" {
                        @if contents.is_empty() {
                            p.empty { "No content yet." }
                        }
                        @for content in contents {
                            (manage_item(content))
                        }
                    }
                }
            }
        }
    };

    base_document(
        &format!("{SITE_NAME} - Admin Panel"),
        "/static/admin.css",
        None,
        content,
    )
}

fn manage_item(content: &ContentEntity) -> Markup {
    let title = Escaped::new(&content.title);
    let body = Escaped::new(&content.body);
    let category = Escaped::new(&content.category);
    let created_at = Escaped::new(&content.created_at);
    let select_id = format!("category-{}", content.id);

    html! {
        div.content-item data-id=(content.id) {
            div.content-item-header {
                h3 { (title) }
                span.category-badge { (category) }
                span.date { (created_at) }
            }
            details.edit-content {
                summary { "Edit" }
                form action="/admin/update-content" method="POST" {
                    input type="hidden" name="id" value=(content.id);
                    div.form-group {
                        input type="text" name="title" value=(title) required;
                    }
                    div.form-group {
                        (category_select(&select_id, Some(content.category.as_str())))
                    }
                    div.form-group {
                        textarea name="content" rows="6" required { (body) }
                    }
                    button type="submit" { "Save" }
                }
            }
            form.delete-form action="/admin/delete-content" method="POST" {
                input type="hidden" name="id" value=(content.id);
                button.delete-btn type="submit" { "Delete" }
            }
        }
    }
}

fn category_select(id: &str, selected: Option<&str>) -> Markup {
    html! {
        select id=(id) name="category" required {
            @for category in Category::iter() {
                option
                    value=(category.as_str())
                    selected[selected == Some(category.as_str())]
                {
                    (category.label())
                }
            }
        }
    }
}
