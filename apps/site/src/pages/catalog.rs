//! Course and faculty listings. Each view issues exactly one backend GET and
//! renders the returned records verbatim, in the order received.

use axum::extract::State;
use maud::{html, Markup};
use tracing::error;

use crate::models::catalog::{Course, FacultyMember};
use crate::render::{format_inr, page, Notice};
use crate::state::AppState;

fn course_card(course: &Course) -> Markup {
    html! {
        article class="card course" {
            img src=(course.image) alt=(course.title);
            h3 { (course.title) }
            p { (course.description) }
            p { "Duration: " span { (course.duration) } }
            p class="price" { (format_inr(course.price)) }
        }
    }
}

fn faculty_card(member: &FacultyMember) -> Markup {
    html! {
        article class="card faculty" {
            img src=(member.image) alt=(member.name);
            h3 { (member.name) }
            p { (member.designation) }
            p { "Subject: " (member.subject) }
            p { "Experience: " (member.experience) }
        }
    }
}

/// GET /courses
pub async fn handle_courses(State(state): State<AppState>) -> Markup {
    let content = match state.api.list_courses().await {
        Ok(courses) => html! {
            h1 { "Our Courses" }
            div class="grid" {
                @for course in &courses { (course_card(course)) }
            }
        },
        Err(e) => {
            error!("Courses API error: {e}");
            html! {
                h1 { "Our Courses" }
                p class="error" { "Failed to load courses" }
            }
        }
    };

    page(&state.config, "Courses", &[], content)
}

/// GET /faculty
pub async fn handle_faculty(State(state): State<AppState>) -> Markup {
    let (members, notices) = match state.api.list_faculty().await {
        Ok(members) => (members, Vec::new()),
        Err(e) => {
            error!("Faculty API error: {e}");
            (Vec::new(), vec![Notice::error("Failed to load faculty")])
        }
    };

    let content = html! {
        h1 { "Our Faculty Members" }
        div class="grid" {
            @for member in &members { (faculty_card(member)) }
        }
    };

    page(&state.config, "Faculty", &notices, content)
}
