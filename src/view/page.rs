// src/view/page.rs
use std::collections::BTreeMap;

use minijinja::{AutoEscape, Environment, UndefinedBehavior};
use serde::Serialize;

use crate::view::content::Portfolio;
use crate::view::motion::MotionConfig;

const PAGE_TEMPLATE: &str = include_str!("../../templates/index.html");
const INTRO_GREETING: &str = "Welcome to";
const INTRO_STEP_MS: u32 = 50;

const SECTION_TITLES: [(&str, &str); 6] = [
    ("synergy", "AI Synergy Check"),
    ("experience", "Work Experience"),
    ("projects", "My Projects"),
    ("tools", "My Toolkit"),
    ("education", "Education"),
    ("contact", "Get In Touch"),
];

/// Everything needed to render the page once.
pub struct PageContext<'a> {
    pub portfolio: &'a Portfolio,
    pub motion: &'a MotionConfig,
    pub year: i32,
}

/// A section heading with its second word highlighted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionTitle {
    pub lead: String,
    pub accent: Option<String>,
    pub rest: Option<String>,
}

pub fn section_title(title: &str) -> SectionTitle {
    let mut words = title.split(' ');
    let lead = words.next().unwrap_or_default().to_string();
    let accent = words.next().map(str::to_string);
    let rest: Vec<&str> = words.collect();
    SectionTitle {
        lead,
        accent,
        rest: (!rest.is_empty()).then(|| rest.join(" ")),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct Glyph {
    glyph: String,
    delay_ms: u32,
}

/// Staggered letters of the intro overlay, continuing the delay from `start`.
fn glyphs(text: &str, start: u32) -> Vec<Glyph> {
    text.chars()
        .zip((0..).map(|i| start + i * INTRO_STEP_MS))
        .map(|(ch, delay_ms)| Glyph {
            glyph: ch.to_string(),
            delay_ms,
        })
        .collect()
}

#[derive(Serialize)]
struct PageView<'a> {
    portfolio: &'a Portfolio,
    motion_json: String,
    titles_json: String,
    first_title: &'a str,
    intro_welcome: Vec<Glyph>,
    intro_initials: Vec<Glyph>,
    sections: BTreeMap<&'static str, SectionTitle>,
    year: i32,
}

/// Renders the page template. Every interpolated value is HTML-escaped.
#[derive(Debug, Clone)]
pub struct PageRenderer {
    env: Environment<'static>,
}

impl Default for PageRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl PageRenderer {
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_auto_escape_callback(|_| AutoEscape::Html);
        Self { env }
    }

    pub fn render(&self, ctx: &PageContext<'_>) -> Result<String, minijinja::Error> {
        let p = ctx.portfolio;
        let welcome = glyphs(INTRO_GREETING, 0);
        let initials = glyphs(
            &format!("{}.", p.initials),
            welcome.len() as u32 * INTRO_STEP_MS,
        );

        let view = PageView {
            portfolio: p,
            motion_json: serde_json::to_string(ctx.motion).unwrap_or_else(|_| "{}".to_string()),
            titles_json: serde_json::to_string(p.titles).unwrap_or_else(|_| "[]".to_string()),
            first_title: p.titles.first().copied().unwrap_or_default(),
            intro_welcome: welcome,
            intro_initials: initials,
            sections: SECTION_TITLES
                .iter()
                .map(|(id, title)| (*id, section_title(title)))
                .collect(),
            year: ctx.year,
        };

        self.env.render_str(PAGE_TEMPLATE, &view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::content::PORTFOLIO;

    fn render(portfolio: &Portfolio) -> String {
        PageRenderer::new()
            .render(&PageContext {
                portfolio,
                motion: &MotionConfig::default(),
                year: 2026,
            })
            .unwrap()
    }

    #[test]
    fn test_section_title_highlights_second_word() {
        assert_eq!(
            section_title("AI Synergy Check"),
            SectionTitle {
                lead: "AI".to_string(),
                accent: Some("Synergy".to_string()),
                rest: Some("Check".to_string()),
            }
        );
        assert_eq!(
            section_title("Education"),
            SectionTitle {
                lead: "Education".to_string(),
                accent: None,
                rest: None,
            }
        );

        let html = render(&PORTFOLIO);
        assert!(html.contains(
            r#"<h2 class="section-title">Work <span class="accent">Experience</span></h2>"#
        ));
        assert!(html.contains(
            r#"<h2 class="section-title">AI <span class="accent">Synergy</span> Check</h2>"#
        ));
        assert!(html.contains(r#"<h2 class="section-title">Education</h2>"#));
    }

    #[test]
    fn test_intro_letters_are_staggered() {
        let welcome = glyphs("Welcome to", 0);
        assert_eq!(welcome.len(), 10);
        assert_eq!(welcome[9].delay_ms, 450);

        let html = render(&PORTFOLIO);
        assert!(html.contains(r#"style="animation-delay:350ms">&nbsp;</span>"#));
        assert!(html.contains(
            r#"<span class="fade-in-up accent" style="animation-delay:500ms">H</span>"#
        ));
    }

    #[test]
    fn test_page_has_every_anchor() {
        let html = render(&PORTFOLIO);
        for id in ["hero", "synergy", "experience", "projects", "tools", "education", "contact"] {
            assert!(html.contains(&format!(r#"id="{}""#, id)), "missing section {}", id);
        }
        for link in PORTFOLIO.nav {
            assert!(html.contains(&format!("href=\"#{}\"", link.anchor)));
        }
    }

    #[test]
    fn test_page_links_resume_and_footer_year() {
        let html = render(&PORTFOLIO);
        assert!(html.contains("infosys.docx\" download=\"Harshit_Govindarajan_Resume.docx\""));
        assert!(html.contains("&copy; 2026 Harshit Govindarajan"));
    }

    #[test]
    fn test_motion_config_and_content_are_embedded() {
        let html = render(&PORTFOLIO);
        assert!(html.contains("data-motion=\"{&quot;introMs&quot;:2500"));
        assert!(html.contains("Product Strategist"));
        assert!(html.contains(r#"class="invert""#));
        assert!(html.contains("<strong>Go-to-Market Strategy:</strong>"));
    }

    #[test]
    fn test_content_is_escaped() {
        let hostile = Portfolio {
            name: "<b>Tom & Jerry</b>",
            ..PORTFOLIO
        };
        let html = render(&hostile);
        assert!(html.contains("&lt;b&gt;Tom &amp; Jerry&lt;"));
        assert!(!html.contains("<b>Tom"));
    }
}
