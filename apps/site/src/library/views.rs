use maud::{html, Markup};

use super::shelf::search;
use crate::config::Config;
use crate::models::library::Book;
use crate::render::{page, Notice};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Register,
}

/// Values echoed back into the login/register form after a failed attempt.
/// The password is never echoed.
#[derive(Debug, Default)]
pub struct AuthFormValues<'a> {
    pub name: &'a str,
    pub email: &'a str,
}

pub fn login_page(
    config: &Config,
    mode: AuthMode,
    values: &AuthFormValues<'_>,
    notices: &[Notice],
) -> Markup {
    let (action, submit) = match mode {
        AuthMode::Login => ("/library/login", "Login"),
        AuthMode::Register => ("/library/register", "Register"),
    };

    let content = html! {
        section class="card library-auth" {
            h1 { "Smart Library" }
            form method="post" action=(action) onsubmit="this.querySelector('button').disabled=true" {
                @if mode == AuthMode::Register {
                    label { "Full name " input name="name" value=(values.name); }
                }
                label { "Email address " input type="email" name="email" value=(values.email); }
                label { "Password " input type="password" name="password"; }
                button type="submit" { (submit) }
            }
            p {
                @match mode {
                    AuthMode::Login => {
                        a href="/library?mode=register" { "Create an account" }
                    },
                    AuthMode::Register => {
                        a href="/library" { "Already registered? Log in" }
                    },
                }
            }
        }
    };

    page(config, "Library", notices, content)
}

fn book_card(book: &Book, term: &str) -> Markup {
    let available = book.is_available();
    html! {
        article class="card book" {
            img src=(book.image) alt=(book.title);
            h3 { (book.title) }
            p { "by " (book.author) }
            p {
                span { "Qty: " (book.quantity) }
                " "
                @if available {
                    span class="badge" { "Available" }
                } @else {
                    span class="badge badge-out" { "Out" }
                }
            }
            form method="post" action={ "/library/borrow/" (book.id) } {
                input type="hidden" name="q" value=(term);
                button type="submit" disabled[!available] { "Borrow" }
            }
            form method="post" action={ "/library/return/" (book.id) } {
                input type="hidden" name="q" value=(term);
                button type="submit" { "Return" }
            }
        }
    }
}

pub fn dashboard_page(config: &Config, books: &[Book], term: &str, notices: &[Notice]) -> Markup {
    let visible = search(books, term);

    let content = html! {
        header class="dashboard-header" {
            h1 { "Library Dashboard" }
            form method="post" action="/library/logout" {
                button type="submit" { "Logout" }
            }
        }
        form method="get" action="/library" class="search" {
            input name="q" placeholder="Search books..." value=(term);
            button type="submit" { "Search" }
        }
        @if visible.is_empty() {
            div class="empty" { h2 { "No books found" } }
        } @else {
            div class="grid" {
                @for book in &visible { (book_card(book, term)) }
            }
        }
    };

    page(config, "Library Dashboard", notices, content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api_client::mock::book;

    #[test]
    fn test_out_of_stock_disables_borrow() {
        let html = book_card(&book("b1", "Dune", "Herbert", 0), "").into_string();
        assert!(html.contains("Out"));
        assert!(html.contains("<button type=\"submit\" disabled>Borrow</button>"));
    }

    #[test]
    fn test_available_book_can_be_borrowed() {
        let html = book_card(&book("b1", "Dune", "Herbert", 3), "dune").into_string();
        assert!(html.contains("Qty: 3"));
        assert!(html.contains("Available"));
        assert!(html.contains("<button type=\"submit\">Borrow</button>"));
        assert!(html.contains(r#"value="dune""#));
    }

    #[test]
    fn test_dashboard_without_matches_says_so() {
        let html = dashboard_page(
            &Config::for_tests(),
            &[book("b1", "Dune", "Herbert", 1)],
            "cobol",
            &[],
        )
        .into_string();
        assert!(html.contains("No books found"));
        assert!(!html.contains("Dune"));
    }

    #[test]
    fn test_book_id_is_escaped_in_action() {
        let html = book_card(&book("a\"b", "Dune", "Herbert", 1), "").into_string();
        assert!(html.contains(r#"action="/library/borrow/a&quot;b""#));
    }

    #[test]
    fn test_register_form_asks_for_name() {
        let html = login_page(
            &Config::for_tests(),
            AuthMode::Register,
            &AuthFormValues {
                name: "Asha",
                email: "asha@example.com",
            },
            &[],
        )
        .into_string();
        assert!(html.contains(r#"action="/library/register""#));
        assert!(html.contains(r#"name="name" value="Asha""#));
        assert!(html.contains(r#"value="asha@example.com""#));
    }
}
