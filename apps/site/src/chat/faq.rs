pub const GREETING: &str =
    "Hello! I'm EduBot, your AI assistant at Edu Aura Institute. How can I help you today?";

const FALLBACK: &str =
    "I can help with courses, fees, placements, admissions, hostel, faculty, or contact info.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Match {
    /// A word of the message equals the keyword.
    Word,
    /// A word of the message starts with the keyword ("fees" for "fee").
    Prefix,
}

struct FaqRule {
    topic: &'static str,
    matching: Match,
    keywords: &'static [&'static str],
    reply: &'static str,
}

/// Checked top to bottom; the first rule with a matching keyword answers.
const RULES: &[FaqRule] = &[
    FaqRule {
        topic: "greeting",
        matching: Match::Word,
        keywords: &["hello", "hi", "hey"],
        reply: "Hello! How can I assist you today?",
    },
    FaqRule {
        topic: "fees",
        matching: Match::Prefix,
        keywords: &["fee", "cost", "price"],
        reply: "Fees:\n• BCA / BBA / B.Com: ₹45,000 per year\n• MCA / MBA: ₹60,000 per year",
    },
    FaqRule {
        topic: "placement",
        matching: Match::Prefix,
        keywords: &["placement", "job", "career", "package"],
        reply: "95% placement rate. Top recruiters include TCS, Infosys, Wipro. Avg package: 4.5 LPA.",
    },
    FaqRule {
        topic: "admission",
        matching: Match::Prefix,
        keywords: &["admission", "apply", "enroll", "join"],
        reply: "Admissions are open! Apply online or contact us at +91 88307 72432.",
    },
    FaqRule {
        topic: "faculty",
        matching: Match::Prefix,
        keywords: &["faculty", "teacher", "professor"],
        reply: "Our faculty includes 200+ experienced professors, most with PhDs.",
    },
    FaqRule {
        topic: "library",
        matching: Match::Prefix,
        keywords: &["library", "book", "study"],
        reply: "Our smart library has 50,000+ books, digital journals, and 24/7 access.",
    },
    FaqRule {
        topic: "hostel",
        matching: Match::Prefix,
        keywords: &["hostel", "stay", "accommodation"],
        reply: "Separate boys & girls hostels with Wi-Fi, mess, AC/Non-AC rooms.",
    },
    FaqRule {
        topic: "contact",
        matching: Match::Prefix,
        keywords: &["contact", "phone", "email"],
        reply: "📞 +91 88307 72432\n📧 principal@ssbesitm.org\n📍 Maharashtra, India",
    },
    FaqRule {
        topic: "courses",
        matching: Match::Prefix,
        keywords: &["course", "program", "bca", "bba", "bcom", "mca", "mba"],
        reply: "We offer BCA, BBA, B.Com, MCA, and MBA programs with industry-focused curriculum.",
    },
    FaqRule {
        topic: "thanks",
        matching: Match::Prefix,
        keywords: &["thank"],
        reply: "You’re welcome 😊",
    },
];

fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
}

impl FaqRule {
    fn matches(&self, message: &str) -> bool {
        words(message).any(|word| {
            self.keywords.iter().any(|kw| match self.matching {
                Match::Word => word == *kw,
                Match::Prefix => word.starts_with(kw),
            })
        })
    }
}

/// Picks the canned answer for a visitor message. Returns the topic name too,
/// for logging.
pub fn reply_for(message: &str) -> (&'static str, &'static str) {
    let message = message.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.matches(&message))
        .map(|rule| (rule.topic, rule.reply))
        .unwrap_or(("fallback", FALLBACK))
}
