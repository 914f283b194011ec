//! Axum route handlers for the contact form.

use axum::{extract::State, Form};
use maud::{html, Markup};
use serde::Deserialize;
use tracing::{info, warn};

use crate::config::Config;
use crate::models::enquiry::ContactMessage;
use crate::render::layout::contact_links;
use crate::render::{page, Notice};
use crate::state::AppState;
use crate::validation::is_blank;

const DEFAULT_SUCCESS: &str = "Message sent successfully";
const DEFAULT_FAILURE: &str = "Failed to send message. Please try again.";

#[derive(Debug, Default, Deserialize)]
pub struct ContactFormInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

impl From<&ContactFormInput> for ContactMessage {
    fn from(input: &ContactFormInput) -> Self {
        ContactMessage {
            name: input.name.trim().to_string(),
            email: input.email.trim().to_string(),
            phone: input.phone.trim().to_string(),
            subject: input.subject.trim().to_string(),
            message: input.message.trim().to_string(),
        }
    }
}

fn contact_page(config: &Config, input: &ContactFormInput, notices: &[Notice]) -> Markup {
    let content = html! {
        h1 { "Contact Us" }
        (contact_links(config))
        section class="card" {
            h2 { "Send Us a Message" }
            form method="post" action="/contact" onsubmit="this.querySelector('button').disabled=true" {
                input name="name" placeholder="Your Name" value=(input.name);
                input type="email" name="email" placeholder="Your Email" value=(input.email);
                input type="tel" name="phone" placeholder="Your Phone Number" value=(input.phone);
                input name="subject" placeholder="Subject" value=(input.subject);
                textarea name="message" rows="5" placeholder="Your Message" { (input.message) }
                button type="submit" { "Send Message" }
            }
        }
    };

    page(config, "Contact", notices, content)
}

/// GET /contact
pub async fn handle_contact_form(State(state): State<AppState>) -> Markup {
    contact_page(&state.config, &ContactFormInput::default(), &[])
}

/// POST /contact
///
/// Only the message is required. Success resets the form; failure keeps
/// what the visitor typed.
pub async fn handle_contact_submit(
    State(state): State<AppState>,
    Form(input): Form<ContactFormInput>,
) -> Markup {
    if is_blank(&input.message) {
        return contact_page(
            &state.config,
            &input,
            &[Notice::error("Please enter a message")],
        );
    }

    match state.api.send_contact(&ContactMessage::from(&input)).await {
        Ok(ack) => {
            info!("Contact message sent");
            let title = ack
                .as_deref()
                .filter(|m| !m.trim().is_empty())
                .unwrap_or(DEFAULT_SUCCESS);
            contact_page(
                &state.config,
                &ContactFormInput::default(),
                &[Notice::success(title)],
            )
        }
        Err(e) => {
            warn!("Contact API error: {e}");
            let title = e.user_message().unwrap_or(DEFAULT_FAILURE);
            contact_page(&state.config, &input, &[Notice::error(title)])
        }
    }
}
