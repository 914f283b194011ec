// HTML rendering shared by every page. Markup is built with maud's `html!`,
// which escapes every spliced value.

pub mod format;
pub mod layout;

use maud::{html, Markup, Render};

pub use format::format_inr;
pub use layout::page;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A dismissible message shown above page content after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub description: Option<String>,
}

impl Notice {
    pub fn success(title: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            title: title.into(),
            description: None,
        }
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            title: title.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: Option<&str>) -> Self {
        self.description = description
            .filter(|d| !d.trim().is_empty())
            .map(str::to_string);
        self
    }
}

impl Render for Notice {
    fn render(&self) -> Markup {
        let class = match self.kind {
            NoticeKind::Success => "notice notice-success",
            NoticeKind::Error => "notice notice-error",
        };
        html! {
            div class=(class) role="status" {
                strong { (self.title) }
                @if let Some(description) = &self.description {
                    p { (description) }
                }
                button type="button" class="dismiss" aria-label="Dismiss" onclick="this.parentElement.remove()" { "×" }
            }
        }
    }
}
