//! Axum route handlers for the resume builder.

use axum::{
    extract::{Path, State},
    Form,
};
use maud::{html, Markup};
use tracing::{debug, info};

use super::document::{render_document, ResumeFields};
use super::templates::{find_template, ResumeTemplate, FORMATS, TEMPLATES};
use crate::config::Config;
use crate::errors::AppError;
use crate::render::{page, Notice};
use crate::state::AppState;

fn lookup(slug: &str) -> Result<&'static ResumeTemplate, AppError> {
    find_template(slug)
        .ok_or_else(|| AppError::NotFound(format!("Unknown resume template: {slug}")))
}

/// The fields as hidden inputs, so preview can post them on to print or
/// back to the form.
fn hidden_fields(fields: &ResumeFields) -> Markup {
    let values = [
        ("full_name", &fields.full_name),
        ("email", &fields.email),
        ("phone", &fields.phone),
        ("location", &fields.location),
        ("summary", &fields.summary),
        ("education", &fields.education),
        ("experience", &fields.experience),
        ("skills", &fields.skills),
        ("projects", &fields.projects),
        ("achievements", &fields.achievements),
    ];
    html! {
        @for (name, value) in values {
            input type="hidden" name=(name) value=(value);
        }
    }
}

fn browse_page(config: &Config) -> Markup {
    let content = html! {
        h1 { "Resume Builder" }
        p { "Pick a template, fill in your details, preview, then print or save as PDF." }
        div class="grid" {
            @for template in TEMPLATES {
                article class="card template" style={ "border-top:4px solid " (template.accent) } {
                    h3 style={ "font-family:" (template.font_stack) } { (template.name) }
                    p { (template.description) }
                    a class="button" href={ "/resume-builder/" (template.slug) } { "Use this template" }
                }
            }
        }
        section class="card" {
            h2 { "Choose the Right Resume Format" }
            table {
                thead {
                    tr { th { "Format" } th { "Description" } th { "Best For" } }
                }
                tbody {
                    @for format in FORMATS {
                        tr {
                            td { (format.title) }
                            td { (format.description) }
                            td { (format.best_for) }
                        }
                    }
                }
            }
        }
    };

    page(config, "Resume Builder", &[], content)
}

fn section_input(name: &str, label: &str, value: &str) -> Markup {
    html! {
        label {
            (label) " "
            textarea name=(name) rows="4" placeholder="One entry per line" { (value) }
        }
    }
}

fn fill_page(
    config: &Config,
    template: &ResumeTemplate,
    fields: &ResumeFields,
    notices: &[Notice],
) -> Markup {
    let content = html! {
        h1 { (template.name) " Resume" }
        p { a href="/resume-builder" { "Change template" } }
        section class="card" {
            form method="post" action={ "/resume-builder/" (template.slug) "/preview" } {
                label { "Full Name " input name="full_name" required value=(fields.full_name); }
                label { "Email " input type="email" name="email" required value=(fields.email); }
                label { "Phone " input type="tel" name="phone" value=(fields.phone); }
                label { "Location " input name="location" value=(fields.location); }
                label {
                    "Professional Summary "
                    textarea name="summary" rows="3" { (fields.summary) }
                }
                (section_input("education", "Education", &fields.education))
                (section_input("experience", "Experience", &fields.experience))
                (section_input("projects", "Projects", &fields.projects))
                (section_input("skills", "Skills", &fields.skills))
                (section_input("achievements", "Achievements", &fields.achievements))
                button type="submit" { "Preview" }
            }
        }
    };

    page(config, "Resume Builder", notices, content)
}

fn missing_fields_notice(fields: &ResumeFields) -> Option<Notice> {
    let check = fields.validate();
    if check.passed {
        return None;
    }
    Some(
        Notice::error("Missing fields")
            .with_description(Some(&format!("Please fill in: {}", check.missing_list()))),
    )
}

/// GET /resume-builder
pub async fn handle_browse(State(state): State<AppState>) -> Markup {
    browse_page(&state.config)
}

/// GET /resume-builder/:template
pub async fn handle_fill(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Markup, AppError> {
    let template = lookup(&slug)?;
    Ok(fill_page(&state.config, template, &ResumeFields::default(), &[]))
}

/// POST /resume-builder/:template
///
/// Back from preview to the form, keeping what was entered.
pub async fn handle_edit(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Form(fields): Form<ResumeFields>,
) -> Result<Markup, AppError> {
    let template = lookup(&slug)?;
    Ok(fill_page(&state.config, template, &fields, &[]))
}

/// POST /resume-builder/:template/preview
pub async fn handle_preview(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Form(fields): Form<ResumeFields>,
) -> Result<Markup, AppError> {
    let template = lookup(&slug)?;

    if let Some(notice) = missing_fields_notice(&fields) {
        debug!("Resume preview rejected: missing required fields");
        return Ok(fill_page(&state.config, template, &fields, &[notice]));
    }

    let document = render_document(template, &fields, false).into_string();
    let hidden = hidden_fields(&fields);

    let content = html! {
        h1 { "Preview" }
        div class="actions" {
            form method="post" action={ "/resume-builder/" (template.slug) } {
                (hidden)
                button type="submit" { "Edit" }
            }
            form method="post" action={ "/resume-builder/" (template.slug) "/print" } target="_blank" {
                (hidden)
                button type="submit" { "Print / Save as PDF" }
            }
        }
        iframe class="resume-preview" title="Resume preview" srcdoc=(document)
            style="width:100%;min-height:900px;border:1px solid #e5e7eb;background:#fff" {}
    };

    Ok(page(&state.config, "Resume Preview", &[], content))
}

/// POST /resume-builder/:template/print
///
/// Returns the bare document; it opens the print dialog on load.
pub async fn handle_print(
    Path(slug): Path<String>,
    Form(fields): Form<ResumeFields>,
) -> Result<Markup, AppError> {
    let template = lookup(&slug)?;

    let check = fields.validate();
    if !check.passed {
        return Err(AppError::Validation(format!(
            "Please fill in: {}",
            check.missing_list()
        )));
    }

    info!("Resume printed with {} template", template.slug);
    Ok(render_document(template, &fields, true))
}
