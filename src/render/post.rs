//! Single post page.

use maud::{html, Markup, PreEscaped};

use crate::models::Post;

/// Render one post. The stored content is trusted-author HTML and is
/// injected without escaping.
pub fn post_page(post: &Post) -> Markup {
    let body = html! {
        article {
            @if let Some(category) = &post.category {
                span class="post-category" { (category) }
            }
            h1 class="post-title" { (post.title) }
            p class="post-meta" {
                (post.author) " · " (post.created_at.format("%B %e, %Y"))
            }
            div class="post-body" {
                (PreEscaped(&post.content))
            }
        }
    };

    super::page(&post.title, body)
}
