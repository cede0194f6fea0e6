//! Uniform 404 page, used for unknown slugs and unmatched paths alike.

use maud::{html, Markup};

pub fn not_found_page() -> Markup {
    let body = html! {
        div class="error-page" {
            h1 { "404" }
            p { "That page doesn't exist." }
            a href="/" { "Back home" }
        }
    };

    super::page("Not Found", body)
}
