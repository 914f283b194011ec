use maud::{html, Markup, PreEscaped, DOCTYPE};

use super::Notice;
use crate::chat::faq::GREETING;
use crate::config::Config;

const NAV_LINKS: &[(&str, &str)] = &[
    ("/", "Home"),
    ("/courses", "Courses"),
    ("/faculty", "Faculty"),
    ("/admissions", "Admissions"),
    ("/library", "Library"),
    ("/resume-builder", "Resume Builder"),
    ("/contact", "Contact"),
];

const STYLE: &str = "\
body{font-family:system-ui,sans-serif;margin:0;color:#1f2937;background:#f9fafb}\
header nav{display:flex;gap:1rem;padding:1rem 2rem;background:#1e3a8a}\
header nav a{color:#fff;text-decoration:none}\
main{max-width:72rem;margin:0 auto;padding:2rem}\
.grid{display:grid;gap:1.5rem;grid-template-columns:repeat(auto-fill,minmax(16rem,1fr))}\
.card{background:#fff;border-radius:.75rem;box-shadow:0 1px 3px rgba(0,0,0,.1);overflow:hidden;padding:1rem}\
.card img{width:100%;height:11rem;object-fit:cover}\
.notice{position:relative;padding:.75rem 2.5rem .75rem 1rem;border-radius:.5rem;margin-bottom:1rem}\
.notice-success{background:#dcfce7}.notice-error{background:#fee2e2}\
.notice .dismiss{position:absolute;right:.5rem;top:.5rem;border:0;background:none;cursor:pointer}\
form label{display:block;margin-top:.75rem}\
form input,form select,form textarea{width:100%;padding:.5rem;box-sizing:border-box}\
footer{padding:2rem;text-align:center;background:#111827;color:#d1d5db}\
#edubot{position:fixed;bottom:1.5rem;right:1.5rem;width:22rem}\
#edubot-log{max-height:20rem;overflow-y:auto;background:#fff;padding:.5rem}\
#edubot-log .user{text-align:right}";

/// Posts each EduBot message to `/api/chat` and redraws the log from the
/// transcript it gets back. Message text is only ever set via `textContent`.
const CHAT_SCRIPT: &str = r#"
(function(){
  var conversation = null;
  var log = document.getElementById('edubot-log');
  var input = document.getElementById('edubot-input');
  var button = document.querySelector('#edubot-form button');
  function show(messages){
    log.textContent = '';
    messages.forEach(function(m){
      var p = document.createElement('p');
      p.className = m.role;
      p.textContent = m.content;
      log.appendChild(p);
    });
    log.scrollTop = log.scrollHeight;
  }
  document.getElementById('edubot-form').addEventListener('submit', function(e){
    e.preventDefault();
    var text = input.value;
    if (!text.trim()) return;
    input.value = '';
    button.disabled = true;
    fetch('/api/chat', {method:'POST', headers:{'content-type':'application/json'},
      body: JSON.stringify({conversation_id: conversation, message: text})})
      .then(function(r){ return r.json(); })
      .then(function(body){ if (body.conversation_id) { conversation = body.conversation_id; show(body.messages); } })
      .finally(function(){ button.disabled = false; });
  });
})();
"#;

fn chat_widget() -> Markup {
    html! {
        aside id="edubot" {
            details {
                summary { "Ask EduBot" }
                div id="edubot-log" {
                    p class="assistant" { (GREETING) }
                }
                form id="edubot-form" {
                    input id="edubot-input" placeholder="Type your message..." autocomplete="off";
                    button type="submit" { "Send" }
                }
            }
            script { (PreEscaped(CHAT_SCRIPT)) }
        }
    }
}

/// Wraps page content with the shared navbar, notices, footer and chat widget.
pub fn page(config: &Config, title: &str, notices: &[Notice], content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " | Edu Aura Institute" }
                style { (PreEscaped(STYLE)) }
            }
            body {
                header {
                    nav {
                        @for (href, label) in NAV_LINKS {
                            a href=(href) { (label) }
                        }
                    }
                }
                main {
                    section id="notices" {
                        @for notice in notices { (notice) }
                    }
                    (content)
                }
                (footer(config))
                (chat_widget())
            }
        }
    }
}

/// Quick contact links (WhatsApp, mail, phone) shown on the contact-heavy pages.
pub fn contact_links(config: &Config) -> Markup {
    html! {
        ul class="quick-contact" {
            li {
                a href={ "https://wa.me/" (config.whatsapp_number) } target="_blank" rel="noopener noreferrer" { "WhatsApp" }
            }
            li {
                a href={ "mailto:" (config.contact_email) } { (config.contact_email) }
            }
            li {
                a href=(config.phone_href()) { (config.contact_phone) }
            }
        }
    }
}

fn footer(config: &Config) -> Markup {
    html! {
        footer {
            p { "Edu Aura Institute, Maharashtra, India" }
            p {
                a href=(config.phone_href()) { (config.contact_phone) }
                " · "
                a href={ "mailto:" (config.contact_email) } { (config.contact_email) }
            }
        }
    }
}
