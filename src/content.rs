use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

pub const PORTFOLIO_FILE: &str = "portfolio.json";

/// Year the crate was built, stamped by `build.rs`.
pub const BUILD_YEAR: &str = env!("BUILD_YEAR");

static PORTFOLIO: LazyLock<Portfolio> = LazyLock::new(|| match load() {
    Ok(p) => p,
    Err(e) => {
        log::error!("{e}");
        Portfolio::default()
    }
});

#[derive(Embed)]
#[folder = "content"]
pub struct ContentAssets;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Content document not found: {0}")]
    NotFound(String),
    #[error("Couldn't parse content document")]
    ParseError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    pub stats: Vec<Stat>,
    pub hero_links: Vec<Link>,
    pub skill_groups: Vec<SkillGroup>,
    pub achievements: Vec<Achievement>,
    pub projects: Vec<Project>,
    pub career: Vec<CareerEntry>,
    pub contact: Vec<ContactEntry>,
    pub socials: Vec<Link>,
    pub form: ContactForm,
    pub availability: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub greeting: String,
    /// Opening words of the hero introduction, followed by `focus`.
    pub lead: String,
    /// Highlighted specialities in the hero introduction.
    pub focus: Vec<String>,
    pub mission: String,
    /// Numbered lines of the about-me window.
    pub intro: Vec<String>,
    pub resume_url: String,
    pub resume_file: String,
    pub location: String,
}

impl Profile {
    pub fn copyright(&self) -> String {
        format!("© {BUILD_YEAR} {}. All rights reserved.", self.name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stat {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub href: String,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillGroup {
    pub title: String,
    /// Tailwind color suffix, e.g. `green-500`.
    pub accent: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Achievement {
    pub icon: String,
    pub accent: String,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub year: String,
    pub tech: Vec<String>,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerEntry {
    pub title: String,
    pub period: String,
    pub organization: String,
    pub location: String,
    pub accent: String,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub detail: Option<Detail>,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Detail {
    pub label: String,
    pub value: String,
}

/// A direct contact line. Entries without `href` render as plain text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactEntry {
    pub label: String,
    #[serde(default)]
    pub href: Option<String>,
    pub icon: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactForm {
    pub fields: Vec<FormField>,
    pub submit_label: String,
    pub response_note: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormField {
    pub id: String,
    pub label: String,
    pub kind: FieldKind,
    pub placeholder: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Email,
    Textarea,
}

impl FieldKind {
    /// `type` attribute for single-line inputs.
    pub fn input_type(self) -> &'static str {
        match self {
            FieldKind::Email => "email",
            FieldKind::Text | FieldKind::Textarea => "text",
        }
    }
}

pub fn parse(data: &[u8]) -> Result<Portfolio, ContentError> {
    Ok(serde_json::from_slice(data)?)
}

pub fn load() -> Result<Portfolio, ContentError> {
    let file = ContentAssets::get(PORTFOLIO_FILE)
        .ok_or_else(|| ContentError::NotFound(PORTFOLIO_FILE.to_string()))?;
    parse(&file.data)
}

/// The embedded content document, parsed on first use.
pub fn portfolio() -> &'static Portfolio {
    &PORTFOLIO
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::Section;

    #[test]
    fn test_embedded_content_parses() {
        let p = load().expect("embedded content should parse");
        assert_eq!(p.profile.name, "Sandeep Makwana");
        assert_eq!(p.profile.intro.len(), 5);
        assert_eq!(p.stats.len(), 3);
        assert_eq!(p.skill_groups.len(), 3);
        assert_eq!(p.projects.len(), 3);
        assert_eq!(p.career.len(), 3);
        assert_eq!(p.form.fields.len(), 3);
    }

    #[test]
    fn test_projects_keep_document_order() {
        let ids = portfolio()
            .projects
            .iter()
            .map(|p| p.id.as_str())
            .collect::<Vec<_>>();
        assert_eq!(ids, vec!["01", "02", "03"]);
    }

    #[test]
    fn test_optional_fields() {
        let p = portfolio();
        let education = p.career.last().expect("career should not be empty");
        assert!(education.highlights.is_empty());
        let detail = education.detail.as_ref().expect("education has a detail line");
        assert_eq!(detail.value, "8.6/10.0");
        assert!(p.career[0].detail.is_none());

        let plain = p
            .contact
            .iter()
            .filter(|c| c.href.is_none())
            .collect::<Vec<_>>();
        assert_eq!(plain.len(), 1);
        assert_eq!(plain[0].label, p.profile.location);
    }

    #[test]
    fn test_form_fields() {
        let kinds = portfolio()
            .form
            .fields
            .iter()
            .map(|f| (f.id.as_str(), f.kind))
            .collect::<Vec<_>>();
        assert_eq!(
            kinds,
            vec![
                ("name", FieldKind::Text),
                ("email", FieldKind::Email),
                ("message", FieldKind::Textarea),
            ]
        );
        assert_eq!(FieldKind::Email.input_type(), "email");
    }

    #[test]
    fn test_in_page_links_resolve_to_sections() {
        let p = portfolio();
        let hrefs = p
            .hero_links
            .iter()
            .chain(p.socials.iter())
            .map(|l| l.href.as_str())
            .chain(p.contact.iter().filter_map(|c| c.href.as_deref()));
        for href in hrefs.filter(|h| h.starts_with('#') && *h != "#") {
            assert!(href.parse::<Section>().is_ok(), "dangling anchor {href}");
        }
    }

    #[test]
    fn test_copyright_uses_build_year() {
        let profile = &portfolio().profile;
        let year = BUILD_YEAR.parse::<i32>().expect("BUILD_YEAR is a year");
        assert!(year >= 2024);
        assert_eq!(
            profile.copyright(),
            format!("© {year} Sandeep Makwana. All rights reserved.")
        );
    }

    #[test]
    fn test_hero_lead_comes_from_content() {
        let profile = &portfolio().profile;
        assert_eq!(profile.lead, "I'm a Software Engineer specializing in");
        assert_eq!(profile.focus.len(), 2);
    }

    #[test]
    fn test_extra_icons_have_glyphs() {
        let css = include_str!("../input.css");
        let p = portfolio();
        // icons used directly by the components
        let fixed = ["extra-terminal", "extra-file", "extra-clock", "extra-email"];
        let icons = p
            .hero_links
            .iter()
            .chain(p.socials.iter())
            .map(|l| l.icon.as_str())
            .chain(p.contact.iter().map(|c| c.icon.as_str()))
            .filter(|icon| icon.starts_with("extra-"))
            .chain(fixed);
        for icon in icons {
            assert!(
                css.contains(&format!(".{icon}::before")),
                "no glyph rule for {icon}"
            );
        }
    }

    #[test]
    fn test_malformed_content_is_an_error() {
        let err = parse(b"{\"profile\": 3}").unwrap_err();
        assert!(matches!(err, ContentError::ParseError(_)));
        assert_eq!(err.to_string(), "Couldn't parse content document");
    }
}
