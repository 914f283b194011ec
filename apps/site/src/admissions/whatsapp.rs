use reqwest::Url;

use crate::models::enquiry::AdmissionApplication;

/// Text of the WhatsApp message handed to the admissions desk.
pub fn application_message(application: &AdmissionApplication, course_title: &str) -> String {
    format!(
        "*New Application Submission*\n\n\
         *Name:* {} {}\n\
         *Email:* {}\n\
         *Phone:* {}\n\
         *Course:* {}\n\
         *Level:* {}\n\n\
         *Personal Statement:*\n{}",
        application.first_name.trim(),
        application.last_name.trim(),
        application.email.trim(),
        application.phone.trim(),
        course_title,
        application.level,
        application.message.trim(),
    )
}

/// `https://wa.me/<number>?text=<message>` with the text query-encoded.
pub fn deep_link(number: &str, text: &str) -> String {
    let digits: String = number.chars().filter(char::is_ascii_digit).collect();
    let base = format!("https://wa.me/{digits}");
    match Url::parse_with_params(&base, &[("text", text)]) {
        Ok(url) => url.to_string(),
        // Only reachable with a malformed base; fall back to the bare chat link.
        Err(_) => base,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn application() -> AdmissionApplication {
        AdmissionApplication {
            first_name: "Asha".into(),
            last_name: "Patil".into(),
            email: "asha@example.com".into(),
            phone: "9876543210".into(),
            course: "3".into(),
            level: "UG".into(),
            message: "I love programming & maths".into(),
        }
    }

    #[test]
    fn test_message_lists_every_field() {
        let text = application_message(&application(), "BCA (Computer Applications)");
        assert!(text.starts_with("*New Application Submission*"));
        assert!(text.contains("*Name:* Asha Patil"));
        assert!(text.contains("*Course:* BCA (Computer Applications)"));
        assert!(text.contains("*Level:* UG"));
        assert!(text.ends_with("I love programming & maths"));
    }

    #[test]
    fn test_deep_link_encodes_text() {
        let link = deep_link("+91 88307 72432", "a & b\nc");
        assert!(link.starts_with("https://wa.me/918830772432?text="));
        assert!(!link.contains(' '));
        assert!(!link.contains('\n'));
        assert!(link.contains("%26"));
        assert!(link.contains("%0A"));
    }

    #[test]
    fn test_deep_link_round_trips_through_url_parser() {
        let text = application_message(&application(), "BCA");
        let link = deep_link("918830772432", &text);
        let url = Url::parse(&link).unwrap();
        let decoded = url
            .query_pairs()
            .find(|(k, _)| k == "text")
            .map(|(_, v)| v.into_owned())
            .unwrap();
        assert_eq!(decoded, text);
    }
}
