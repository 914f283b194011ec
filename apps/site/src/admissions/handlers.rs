//! Axum route handlers for the admission form.

use axum::{extract::State, Form};
use maud::{html, Markup};
use serde::Deserialize;
use tracing::{info, warn};

use super::catalog::{find_program, Department, Program, PROGRAMS};
use super::whatsapp::{application_message, deep_link};
use crate::config::{AdmissionsDelivery, Config};
use crate::models::enquiry::AdmissionApplication;
use crate::render::layout::contact_links;
use crate::render::{page, Notice};
use crate::state::AppState;
use crate::validation::require_fields;

#[derive(Debug, Default, Deserialize)]
pub struct AdmissionFormInput {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub course: String,
    #[serde(default)]
    pub message: String,
}

impl AdmissionFormInput {
    fn to_application(&self, program: &Program) -> AdmissionApplication {
        AdmissionApplication {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            course: program.id.to_string(),
            level: program.level.code().to_string(),
            message: self.message.trim().to_string(),
        }
    }
}

fn course_options(selected: &str) -> Markup {
    html! {
        @for department in Department::ALL {
            optgroup label=(department.label()) {
                @for program in PROGRAMS.iter().filter(|p| p.department == department) {
                    @let id = program.id.to_string();
                    option value=(id) selected[id == selected.trim()] {
                        (program.title) " (" (program.level.code()) ", " (program.duration) ")"
                    }
                }
            }
        }
    }
}

fn admissions_page(
    config: &Config,
    input: &AdmissionFormInput,
    notices: &[Notice],
    whatsapp_link: Option<&str>,
) -> Markup {
    let content = html! {
        h1 { "Apply Now" }
        p { "Fill out the form below to start your application process." }
        @if let Some(link) = whatsapp_link {
            p class="handoff" {
                a href=(link) target="_blank" rel="noopener noreferrer" { "Continue on WhatsApp" }
            }
            script data-href=(link) {
                "window.open(document.currentScript.dataset.href, '_blank');"
            }
        }
        (contact_links(config))
        section class="card" {
            h2 { "Application Form" }
            form method="post" action="/admissions" onsubmit="this.querySelector('button').disabled=true" {
                label { "First Name " input name="first_name" required value=(input.first_name); }
                label { "Last Name " input name="last_name" required value=(input.last_name); }
                label { "Email " input type="email" name="email" required value=(input.email); }
                label { "Phone " input type="tel" name="phone" required value=(input.phone); }
                label {
                    "Select Course "
                    select name="course" required {
                        option value="" { "Select a course" }
                        (course_options(&input.course))
                    }
                }
                @if let Some(program) = find_program(&input.course) {
                    label { "Course Level " input disabled value=(program.level.code()); }
                }
                label {
                    "Personal Statement "
                    textarea name="message" rows="4" placeholder="Tell us why you're applying..." { (input.message) }
                }
                button type="submit" { "Submit Application" }
            }
        }
    };

    page(config, "Admissions", notices, content)
}

fn submitted_notice() -> Notice {
    Notice::success("Application Submitted!")
        .with_description(Some("Thank you for applying. We'll contact you shortly."))
}

/// GET /admissions
pub async fn handle_admissions_form(State(state): State<AppState>) -> Markup {
    admissions_page(&state.config, &AdmissionFormInput::default(), &[], None)
}

/// POST /admissions
///
/// Validates the form, then either forwards it to `/admissions/apply` or
/// hands it to the admissions desk as a WhatsApp deep link, per configuration.
/// A successful submission resets the form.
pub async fn handle_admissions_submit(
    State(state): State<AppState>,
    Form(input): Form<AdmissionFormInput>,
) -> Markup {
    let check = require_fields(&[
        ("First Name", &input.first_name),
        ("Last Name", &input.last_name),
        ("Email", &input.email),
        ("Phone", &input.phone),
        ("Course", &input.course),
    ]);
    if !check.passed {
        let notice = Notice::error("Missing fields")
            .with_description(Some(&format!("Please fill in: {}", check.missing_list())));
        return admissions_page(&state.config, &input, &[notice], None);
    }

    let Some(program) = find_program(&input.course) else {
        let notice = Notice::error("Invalid course")
            .with_description(Some("Please select a course from the list"));
        return admissions_page(&state.config, &input, &[notice], None);
    };

    let application = input.to_application(program);

    match state.config.admissions_delivery {
        AdmissionsDelivery::WhatsApp => {
            let link = deep_link(
                &state.config.whatsapp_number,
                &application_message(&application, program.title),
            );
            info!("Admission for {} handed off via WhatsApp", program.title);
            admissions_page(
                &state.config,
                &AdmissionFormInput::default(),
                &[submitted_notice()],
                Some(&link),
            )
        }
        AdmissionsDelivery::Api => match state.api.apply_admission(&application).await {
            Ok(()) => {
                info!("Admission for {} submitted", program.title);
                admissions_page(
                    &state.config,
                    &AdmissionFormInput::default(),
                    &[submitted_notice()],
                    None,
                )
            }
            Err(e) => {
                warn!("Admission submission failed: {e}");
                let notice = Notice::error("Submission failed").with_description(Some(
                    e.user_message()
                        .unwrap_or("Failed to submit application. Please try again."),
                ));
                admissions_page(&state.config, &input, &[notice], None)
            }
        },
    }
}
