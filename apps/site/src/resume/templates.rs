/// A visual preset for the generated resume. Every field is a CSS fragment
/// spliced into the document stylesheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResumeTemplate {
    pub slug: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub font_stack: &'static str,
    pub accent: &'static str,
    pub heading_style: &'static str,
    pub header_style: &'static str,
}

pub const TEMPLATES: &[ResumeTemplate] = &[
    ResumeTemplate {
        slug: "classic",
        name: "Classic",
        description: "Serif type and ruled section headings. Safe for traditional industries.",
        font_stack: "Georgia, 'Times New Roman', serif",
        accent: "#1f2937",
        heading_style: "text-transform:uppercase;letter-spacing:.08em;border-bottom:1px solid #1f2937;padding-bottom:2px",
        header_style: "text-align:center",
    },
    ResumeTemplate {
        slug: "modern",
        name: "Modern",
        description: "Sans-serif with a coloured accent bar. Good for tech roles.",
        font_stack: "'Segoe UI', Roboto, Helvetica, Arial, sans-serif",
        accent: "#0e7490",
        heading_style: "color:#0e7490;border-left:4px solid #0e7490;padding-left:8px",
        header_style: "text-align:left;border-bottom:3px solid #0e7490;padding-bottom:8px",
    },
    ResumeTemplate {
        slug: "minimal",
        name: "Minimal",
        description: "Lots of white space, no rules. Reads cleanly through ATS parsers.",
        font_stack: "Helvetica, Arial, sans-serif",
        accent: "#111827",
        heading_style: "font-weight:600;font-size:1rem",
        header_style: "text-align:left",
    },
    ResumeTemplate {
        slug: "professional",
        name: "Professional",
        description: "Navy headings with small caps. Suits management and finance.",
        font_stack: "Cambria, Georgia, serif",
        accent: "#1e3a8a",
        heading_style: "font-variant:small-caps;color:#1e3a8a;border-bottom:2px solid #1e3a8a",
        header_style: "text-align:center;background:#eff6ff;padding:12px",
    },
];

pub fn find_template(slug: &str) -> Option<&'static ResumeTemplate> {
    TEMPLATES.iter().find(|t| t.slug == slug)
}

impl ResumeTemplate {
    /// Stylesheet for a generated document.
    pub fn stylesheet(&self) -> String {
        format!(
            "@page{{margin:18mm}}\
             body{{font-family:{font};color:#111827;max-width:800px;margin:0 auto;padding:24px;line-height:1.45}}\
             header{{{header}}}\
             header h1{{margin:0;color:{accent}}}\
             header p{{margin:4px 0}}\
             section h2{{{heading};margin:18px 0 6px}}\
             ul{{margin:0;padding-left:20px}}\
             a{{color:{accent}}}",
            font = self.font_stack,
            header = self.header_style,
            accent = self.accent,
            heading = self.heading_style,
        )
    }
}

/// A resume layout and who it suits.
pub struct ResumeFormat {
    pub title: &'static str,
    pub description: &'static str,
    pub best_for: &'static str,
}

pub const FORMATS: &[ResumeFormat] = &[
    ResumeFormat {
        title: "Chronological",
        description: "Best for traditional industries. Show your steady career growth",
        best_for: "Experienced professionals",
    },
    ResumeFormat {
        title: "Functional",
        description: "Focus on skills over experience. Fresher's secret weapon",
        best_for: "Career changers & freshers",
    },
    ResumeFormat {
        title: "Combination",
        description: "Mix of both worlds. Show skills AND progression",
        best_for: "Most modern industries",
    },
];
