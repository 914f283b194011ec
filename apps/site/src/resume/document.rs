use maud::{html, Markup, PreEscaped, DOCTYPE};
use serde::Deserialize;

use super::templates::ResumeTemplate;
use crate::validation::{require_fields, RequiredFieldsResult};

/// Everything a visitor types into the resume form. Multi-line sections
/// hold one entry per line.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResumeFields {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub education: String,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub skills: String,
    #[serde(default)]
    pub projects: String,
    #[serde(default)]
    pub achievements: String,
}

impl ResumeFields {
    pub fn validate(&self) -> RequiredFieldsResult {
        require_fields(&[("Full Name", &self.full_name), ("Email", &self.email)])
    }

    /// Multi-line sections in document order, as `(heading, raw text)`.
    pub fn list_sections(&self) -> [(&'static str, &str); 5] {
        [
            ("Education", &self.education),
            ("Experience", &self.experience),
            ("Projects", &self.projects),
            ("Skills", &self.skills),
            ("Achievements", &self.achievements),
        ]
    }
}

/// Splits a multi-line field into trimmed, non-empty entries.
pub fn list_items(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

fn contact_line(fields: &ResumeFields) -> Markup {
    let email = fields.email.trim();
    let extras = [fields.phone.trim(), fields.location.trim()];
    html! {
        a href={ "mailto:" (email) } { (email) }
        @for extra in extras.iter().filter(|e| !e.is_empty()) {
            " · " (extra)
        }
    }
}

fn body(fields: &ResumeFields) -> Markup {
    let summary = fields.summary.trim();
    html! {
        header {
            h1 { (fields.full_name.trim()) }
            p { (contact_line(fields)) }
        }
        @if !summary.is_empty() {
            section {
                h2 { "Summary" }
                p { (summary) }
            }
        }
        @for (heading, text) in fields.list_sections() {
            @let items = list_items(text);
            @if !items.is_empty() {
                section {
                    h2 { (heading) }
                    ul {
                        @for item in &items { li { (item) } }
                    }
                }
            }
        }
    }
}

/// Standalone HTML document for one resume. When `print` is set the
/// document opens the browser print dialog as soon as it loads.
pub fn render_document(template: &ResumeTemplate, fields: &ResumeFields, print: bool) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { (fields.full_name.trim()) " - Resume" }
                style { (PreEscaped(template.stylesheet())) }
            }
            body class={ "resume resume-" (template.slug) } {
                (body(fields))
                @if print {
                    script { (PreEscaped("window.addEventListener('load',function(){window.print();});")) }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::templates::find_template;

    fn fields() -> ResumeFields {
        ResumeFields {
            full_name: "Asha Patil".into(),
            email: "asha@example.com".into(),
            phone: "9876543210".into(),
            education: "B.Tech CSE, 2024\n\n  MCA, 2026  \n".into(),
            skills: "Rust\nSQL".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_requires_name_and_email() {
        let check = ResumeFields::default().validate();
        assert_eq!(check.missing, vec!["Full Name", "Email"]);
        assert!(fields().validate().passed);
    }

    #[test]
    fn test_list_items_drop_blank_lines() {
        assert_eq!(list_items("a\n\n  b \n\t\n"), vec!["a", "b"]);
        assert!(list_items(" \n ").is_empty());
    }

    #[test]
    fn test_document_omits_empty_sections() {
        let template = find_template("classic").unwrap();
        let html = render_document(template, &fields(), false).into_string();
        assert!(html.contains(
            "<h2>Education</h2><ul><li>B.Tech CSE, 2024</li><li>MCA, 2026</li></ul>"
        ));
        assert!(html.contains("<h2>Skills</h2>"));
        assert!(!html.contains("<h2>Experience</h2>"));
        assert!(!html.contains("<h2>Summary</h2>"));
        assert!(!html.contains("window.print()"));
    }

    #[test]
    fn test_document_sections_in_order() {
        let mut f = fields();
        f.summary = "Backend developer".into();
        f.experience = "Intern at Acme".into();
        let template = find_template("modern").unwrap();
        let html = render_document(template, &f, false).into_string();
        let summary = html.find("<h2>Summary</h2>").unwrap();
        let education = html.find("<h2>Education</h2>").unwrap();
        let experience = html.find("<h2>Experience</h2>").unwrap();
        let skills = html.find("<h2>Skills</h2>").unwrap();
        assert!(summary < education && education < experience && experience < skills);
    }

    #[test]
    fn test_document_escapes_fields() {
        let mut f = fields();
        f.full_name = "<img src=x onerror=alert(1)>".into();
        let template = find_template("minimal").unwrap();
        let html = render_document(template, &f, true).into_string();
        assert!(!html.contains("<img src=x"));
        assert!(html.contains("&lt;img src=x onerror=alert(1)&gt;"));
        assert!(html.contains("window.print()"));
    }

    #[test]
    fn test_contact_line_skips_blank_parts() {
        let html = contact_line(&fields()).into_string();
        assert_eq!(
            html,
            r#"<a href="mailto:asha@example.com">asha@example.com</a> · 9876543210"#
        );
    }
}
