//! Public home page: the listing of published posts.

use maud::{html, Markup};

use crate::models::Post;

/// Render the home listing. `posts` arrives newest first.
pub fn home_page(posts: &[Post]) -> Markup {
    let body = html! {
        @if posts.is_empty() {
            p class="empty" { "Nothing published yet." }
        } @else {
            ul class="post-list" {
                @for post in posts {
                    li class="post-card" {
                        @if let Some(category) = &post.category {
                            span class="post-category" { (category) }
                        }
                        h2 {
                            a href={ "/" (post.slug) } { (post.title) }
                        }
                        p class="post-meta" {
                            (post.author) " · " (post.created_at.format("%B %e, %Y"))
                        }
                    }
                }
            }
        }
    };

    super::page("minipress", body)
}
