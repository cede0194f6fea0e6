//! Admin page: one view doubling as login form and new-post form,
//! switched on the session admin flag.

use maud::{html, Markup};

pub fn admin_page(is_admin: bool) -> Markup {
    let body = if is_admin {
        new_post_form()
    } else {
        login_form()
    };

    super::page("Admin", body)
}

fn login_form() -> Markup {
    html! {
        h1 class="post-title" { "Admin login" }
        form class="admin-form" method="post" action="/admin/login" {
            label for="username" { "Username" }
            input type="text" id="username" name="username" autocomplete="username";
            label for="password" { "Password" }
            input type="password" id="password" name="password" autocomplete="current-password";
            button type="submit" { "Log in" }
        }
    }
}

fn new_post_form() -> Markup {
    html! {
        div class="admin-bar" {
            h1 class="post-title" { "New post" }
            a href="/admin/logout" { "Log out" }
        }
        form class="admin-form" method="post" action="/admin/create" {
            label for="title" { "Title" }
            input type="text" id="title" name="title";
            label for="category" { "Category" }
            input type="text" id="category" name="category";
            label for="content" { "Content (HTML)" }
            textarea id="content" name="content" {}
            button type="submit" { "Publish" }
        }
    }
}
