use axum::extract::State;
use maud::{html, Markup};

use crate::render::page;
use crate::state::AppState;

struct Feature {
    title: &'static str,
    description: &'static str,
}

struct NoticeBoardItem {
    program: &'static str,
    title: &'static str,
    date: &'static str,
}

const FEATURES: &[Feature] = &[
    Feature {
        title: "Quality Education",
        description: "World-class curriculum.",
    },
    Feature {
        title: "Expert Faculty",
        description: "Industry professionals.",
    },
    Feature {
        title: "Modern Facilities",
        description: "Smart campus & labs.",
    },
    Feature {
        title: "Career Support",
        description: "Placement guidance.",
    },
];

const NOTICE_BOARD: &[NoticeBoardItem] = &[
    NoticeBoardItem {
        program: "BCA",
        title: "BCA Mid-Term Exams",
        date: "May 25, 2025",
    },
    NoticeBoardItem {
        program: "BBA",
        title: "BBA Industry Visit",
        date: "June 5, 2025",
    },
    NoticeBoardItem {
        program: "MCA",
        title: "MCA Project Deadline",
        date: "June 15, 2025",
    },
];

/// GET /
pub async fn handle_home(State(state): State<AppState>) -> Markup {
    let content = html! {
        section class="hero" {
            h1 { "Edu Aura Institute" }
            p {
                a href="/admissions" { "Apply Now" }
                " "
                a href="/courses" { "Explore Courses" }
            }
        }
        section {
            h2 { "Notice Board" }
            ul {
                @for item in NOTICE_BOARD {
                    li {
                        span class="badge" { (item.program) }
                        " "
                        strong { (item.title) }
                        " "
                        time { (item.date) }
                    }
                }
            }
        }
        section {
            h2 { "Why Choose Us" }
            div class="grid" {
                @for feature in FEATURES {
                    div class="card" {
                        h3 { (feature.title) }
                        p { (feature.description) }
                    }
                }
            }
        }
    };

    page(&state.config, "Home", &[], content)
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use crate::api_client::mock::RecordingApi;
    use crate::testing::{get, test_app};

    #[tokio::test]
    async fn test_home_is_static() {
        let (app, api) = test_app(RecordingApi::default());
        let (status, body) = get(&app, "/", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Smart campus &amp; labs."));
        assert!(body.contains("MCA Project Deadline"));
        assert!(api.calls().is_empty());
    }
}
