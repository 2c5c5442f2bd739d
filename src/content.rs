//! Static site content.  Each section of the page is backed by a JSON file
//! embedded at build time; records are parsed once and cached for the
//! lifetime of the process.
//!
//! Records that carry certificate images name them with a primary field
//! plus a numbered continuation series (`certificateUrl`, `certificateUrl2`,
//! ...).  The series is modeled as explicit optional fields so the set of
//! possible references is enumerable, and resolved with [`certificate_refs`].

use std::sync::LazyLock;

use rust_embed::Embed;
use serde::{de::DeserializeOwned, Deserialize, Deserializer};
use thiserror::Error;

#[derive(Embed)]
#[folder = "content"]
pub struct Content;

#[derive(Error, Debug, Clone)]
pub enum ContentError {
    #[error("content file not found")]
    NotFound,
    #[error("couldn't parse content file")]
    ParseError,
}

/// Upper bound of the reference series.  Keeping the fields explicit means
/// a record can never smuggle in references past the enumerated set.
pub const MAX_CERTIFICATE_REFS: usize = 5;

/// A record whose card can open the certificate gallery.
pub trait CertificateSource {
    fn title(&self) -> &str;

    /// The ordered reference series, starting at the unnumbered field.
    fn certificate_series(&self) -> [Option<&str>; MAX_CERTIFICATE_REFS];

    /// Whether the card offers a gallery at all.
    fn has_gallery(&self) -> bool;

    fn certificate_refs(&self) -> Vec<String> {
        certificate_refs(self.certificate_series())
    }
}

/// Collects the reference series into the ordered list of asset ids.
///
/// The scan is strictly sequential and stops at the first absent entry, so
/// a gap hides everything after it; a record with `certificateUrl2` but no
/// `certificateUrl` resolves to nothing at all.
pub fn certificate_refs(series: [Option<&str>; MAX_CERTIFICATE_REFS]) -> Vec<String> {
    series
        .into_iter()
        .map_while(|entry| entry.map(str::to_owned))
        .collect()
}

// A reference slot holds a string or nothing.  Anything else in the JSON
// (the data files are hand-edited) counts as absent and ends the series.
fn string_or_skip<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        serde_json::Value::String(s) => Some(s),
        _ => None,
    }))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub title: String,
    pub institution: String,
    pub degree: String,
    #[serde(default)]
    pub field: Option<String>,
    #[serde(default)]
    pub marks: Option<String>,
}

impl Education {
    pub fn detail(&self) -> Option<&str> {
        self.field.as_deref().or(self.marks.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub certificate: bool,
    #[serde(default, deserialize_with = "string_or_skip")]
    pub certificate_url: Option<String>,
    #[serde(default, deserialize_with = "string_or_skip")]
    pub certificate_url2: Option<String>,
    #[serde(default, deserialize_with = "string_or_skip")]
    pub certificate_url3: Option<String>,
    #[serde(default, deserialize_with = "string_or_skip")]
    pub certificate_url4: Option<String>,
    #[serde(default, deserialize_with = "string_or_skip")]
    pub certificate_url5: Option<String>,
}

impl CertificateSource for Experience {
    fn title(&self) -> &str {
        &self.title
    }

    fn certificate_series(&self) -> [Option<&str>; MAX_CERTIFICATE_REFS] {
        [
            self.certificate_url.as_deref(),
            self.certificate_url2.as_deref(),
            self.certificate_url3.as_deref(),
            self.certificate_url4.as_deref(),
            self.certificate_url5.as_deref(),
        ]
    }

    fn has_gallery(&self) -> bool {
        self.certificate
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub title: String,
    pub description: String,
    #[serde(default, deserialize_with = "string_or_skip")]
    pub certificate_link: Option<String>,
    #[serde(default, deserialize_with = "string_or_skip")]
    pub certificate_link2: Option<String>,
    #[serde(default, deserialize_with = "string_or_skip")]
    pub certificate_link3: Option<String>,
    #[serde(default, deserialize_with = "string_or_skip")]
    pub certificate_link4: Option<String>,
    #[serde(default, deserialize_with = "string_or_skip")]
    pub certificate_link5: Option<String>,
}

impl CertificateSource for Event {
    fn title(&self) -> &str {
        &self.title
    }

    fn certificate_series(&self) -> [Option<&str>; MAX_CERTIFICATE_REFS] {
        [
            self.certificate_link.as_deref(),
            self.certificate_link2.as_deref(),
            self.certificate_link3.as_deref(),
            self.certificate_link4.as_deref(),
            self.certificate_link5.as_deref(),
        ]
    }

    fn has_gallery(&self) -> bool {
        self.certificate_link.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub title: String,
    pub instructor: String,
    #[serde(default)]
    pub certificate: bool,
    #[serde(default, deserialize_with = "string_or_skip")]
    pub certificate_url: Option<String>,
    #[serde(default, deserialize_with = "string_or_skip")]
    pub certificate_url2: Option<String>,
    #[serde(default, deserialize_with = "string_or_skip")]
    pub certificate_url3: Option<String>,
    #[serde(default, deserialize_with = "string_or_skip")]
    pub certificate_url4: Option<String>,
    #[serde(default, deserialize_with = "string_or_skip")]
    pub certificate_url5: Option<String>,
}

impl CertificateSource for Course {
    fn title(&self) -> &str {
        &self.title
    }

    fn certificate_series(&self) -> [Option<&str>; MAX_CERTIFICATE_REFS] {
        [
            self.certificate_url.as_deref(),
            self.certificate_url2.as_deref(),
            self.certificate_url3.as_deref(),
            self.certificate_url4.as_deref(),
            self.certificate_url5.as_deref(),
        ]
    }

    fn has_gallery(&self) -> bool {
        self.certificate
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub demo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub name: String,
    pub level: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillCategory {
    pub title: String,
    pub icon: String,
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillsData {
    #[serde(default)]
    pub skill_categories: Vec<SkillCategory>,
    #[serde(default)]
    pub circle_skills: Vec<Skill>,
    #[serde(default)]
    pub tools_and_technologies: Vec<String>,
}

fn load<T: DeserializeOwned>(file: &'static str) -> Result<T, ContentError> {
    let raw = Content::get(file).ok_or_else(|| {
        log::error!("content file {file} is missing");
        ContentError::NotFound
    })?;
    serde_json::from_slice(&raw.data).map_err(|e| {
        log::error!("couldn't parse {file}: {e}");
        ContentError::ParseError
    })
}

// A broken content file renders as an empty section rather than taking the
// page down with it.
fn section<T: DeserializeOwned>(file: &'static str) -> Vec<T> {
    load(file).unwrap_or_default()
}

static EDUCATION: LazyLock<Vec<Education>> = LazyLock::new(|| section("education.json"));
static EXPERIENCE: LazyLock<Vec<Experience>> = LazyLock::new(|| section("experience.json"));
static EVENTS: LazyLock<Vec<Event>> = LazyLock::new(|| section("events.json"));
static COURSES: LazyLock<Vec<Course>> = LazyLock::new(|| section("courses.json"));
static PROJECTS: LazyLock<Vec<Project>> = LazyLock::new(|| section("projects.json"));
static SKILLS: LazyLock<SkillsData> = LazyLock::new(|| load("skills.json").unwrap_or_default());

pub fn education() -> &'static [Education] {
    &EDUCATION
}

pub fn experience() -> &'static [Experience] {
    &EXPERIENCE
}

pub fn events() -> &'static [Event] {
    &EVENTS
}

pub fn courses() -> &'static [Course] {
    &COURSES
}

pub fn projects() -> &'static [Project] {
    &PROJECTS
}

pub fn skills() -> &'static SkillsData {
    &SKILLS
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(json: &str) -> Course {
        serde_json::from_str(json).expect("course should parse")
    }

    #[test]
    fn test_no_references_resolve_to_empty() {
        let c = course(r#"{"title": "Soft Skills", "instructor": "IIT Kanpur"}"#);
        assert!(c.certificate_refs().is_empty());
    }

    #[test]
    fn test_primary_reference_only() {
        let c = course(
            r#"{"title": "t", "instructor": "i", "certificateUrl": "a.jpg"}"#,
        );
        assert_eq!(c.certificate_refs(), vec!["a.jpg"]);
    }

    #[test]
    fn test_full_series_keeps_order() {
        let c = course(
            r#"{"title": "t", "instructor": "i",
                "certificateUrl": "a.jpg",
                "certificateUrl2": "b.jpg",
                "certificateUrl3": "c.jpg"}"#,
        );
        assert_eq!(c.certificate_refs(), vec!["a.jpg", "b.jpg", "c.jpg"]);
    }

    #[test]
    fn test_gap_terminates_series() {
        let c = course(
            r#"{"title": "t", "instructor": "i",
                "certificateUrl": "a.jpg",
                "certificateUrl3": "c.jpg"}"#,
        );
        assert_eq!(c.certificate_refs(), vec!["a.jpg"]);
    }

    #[test]
    fn test_missing_primary_hides_numbered_fields() {
        let c = course(
            r#"{"title": "t", "instructor": "i", "certificateUrl2": "b.jpg"}"#,
        );
        assert!(c.certificate_refs().is_empty());
    }

    #[test]
    fn test_non_string_entry_terminates_series() {
        let c = course(
            r#"{"title": "t", "instructor": "i",
                "certificateUrl": "a.jpg",
                "certificateUrl2": 42,
                "certificateUrl3": "c.jpg"}"#,
        );
        assert_eq!(c.certificate_refs(), vec!["a.jpg"]);
    }

    #[test]
    fn test_event_series_uses_link_fields() {
        let e: Event = serde_json::from_str(
            r#"{"title": "t", "description": "d",
                "certificateLink": "one.jpg",
                "certificateLink2": "two.jpg"}"#,
        )
        .expect("event should parse");
        assert!(e.has_gallery());
        assert_eq!(e.certificate_refs(), vec!["one.jpg", "two.jpg"]);
    }

    #[test]
    fn test_event_without_primary_link_has_no_gallery() {
        let e: Event = serde_json::from_str(r#"{"title": "t", "description": "d"}"#)
            .expect("event should parse");
        assert!(!e.has_gallery());
    }

    #[test]
    fn test_shipped_content_parses() {
        assert!(!education().is_empty());
        assert!(!experience().is_empty());
        assert!(!events().is_empty());
        assert!(!courses().is_empty());
        assert!(!projects().is_empty());
        assert!(!skills().skill_categories.is_empty());
        assert!(!skills().circle_skills.is_empty());
    }

    #[test]
    fn test_shipped_galleries_have_sequential_series() {
        // records flagged as having a gallery must carry at least one
        // reference, and references never hide behind a gap
        for c in courses().iter().filter(|c| c.has_gallery()) {
            assert!(!c.certificate_refs().is_empty(), "{}", c.title);
        }
        for e in events().iter().filter(|e| e.has_gallery()) {
            assert!(!e.certificate_refs().is_empty(), "{}", e.title);
        }
        for x in experience().iter().filter(|x| x.has_gallery()) {
            assert!(!x.certificate_refs().is_empty(), "{}", x.title);
        }
    }
}
