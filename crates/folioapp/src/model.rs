//! # Content Model
//!
//! The whole site is one [`ContentDocument`], serialized as the `portfolio.json`
//! file the site renders from. Field names on the wire follow that file
//! (camelCase, with the historical `aboutpara` key), so documents written by
//! older tooling load unchanged.
//!
//! Keys the model does not know about are kept in [`ContentDocument::extra`]
//! and written back verbatim: saves overwrite the file wholesale, so dropping
//! them would lose data.
//!
//! ## Identity
//!
//! Entries of the four collections (projects, services, socials, resume
//! experiences) carry an [`EntryId`]. Ids are opaque: new ones are UUID v4
//! text, but whatever a loaded document already contains is accepted, including
//! bare numbers. An entry stored without an id gets a UUID v5 derived from its
//! collection and position, so loading the same file twice yields the same ids. The flat string lists (languages, frameworks, others) have no
//! identity and are addressed by position.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Opaque identity token of a collection entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// A freshly generated token.
    pub fn fresh() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// The token an id-less stored entry receives at `position` in `collection`.
    pub fn derived(collection: &str, position: usize) -> Self {
        let name = format!("folio/{}/{}", collection, position);
        Self(Uuid::new_v5(&Uuid::NAMESPACE_OID, name.as_bytes()).to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntryId {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl<'de> Deserialize<'de> for EntryId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(serde_json::Number),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(text) => EntryId(text),
            Raw::Number(n) => EntryId(n.to_string()),
        })
    }
}

/// Collection entries as stored, for filling in missing ids.
trait Stored {
    const COLLECTION: &'static str;

    fn id_slot(&mut self) -> &mut EntryId;
}

fn with_stable_ids<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Stored,
{
    let mut items = Vec::<T>::deserialize(deserializer)?;
    for (position, item) in items.iter_mut().enumerate() {
        let slot = item.id_slot();
        if slot.is_empty() {
            *slot = EntryId::derived(T::COLLECTION, position);
        }
    }
    Ok(items)
}

macro_rules! stored {
    ($ty:ty, $collection:literal) => {
        impl Stored for $ty {
            const COLLECTION: &'static str = $collection;

            fn id_slot(&mut self) -> &mut EntryId {
                &mut self.id
            }
        }
    };
}

stored!(Project, "projects");
stored!(Service, "services");
stored!(Social, "socials");
stored!(ResumeExperience, "experiences");

const PLACEHOLDER_IMAGE: &str = "https://images.unsplash.com/photo-1517479149777-5f3b1511d5ad?auto=format&fit=crop&w=400&q=60";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    #[serde(default)]
    pub id: EntryId,
    pub title: String,
    pub description: String,
    /// URL or data URI.
    pub image_src: String,
    pub url: String,
}

impl Project {
    pub fn template() -> Self {
        Self {
            id: EntryId::fresh(),
            title: "New Project".to_string(),
            description: "Web Design & Development".to_string(),
            image_src: PLACEHOLDER_IMAGE.to_string(),
            url: "https://example.com/".to_string(),
        }
    }
}

impl Default for Project {
    fn default() -> Self {
        Self {
            id: EntryId::fresh(),
            title: String::new(),
            description: String::new(),
            image_src: String::new(),
            url: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Service {
    #[serde(default)]
    pub id: EntryId,
    pub title: String,
    pub description: String,
}

impl Service {
    pub fn template() -> Self {
        Self {
            id: EntryId::fresh(),
            title: "New Service".to_string(),
            description:
                "Lorem Ipsum is simply dummy text of the printing and typesetting industry."
                    .to_string(),
        }
    }
}

impl Default for Service {
    fn default() -> Self {
        Self {
            id: EntryId::fresh(),
            title: String::new(),
            description: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Social {
    #[serde(default)]
    pub id: EntryId,
    pub title: String,
    pub link: String,
}

impl Social {
    pub fn template() -> Self {
        Self {
            id: EntryId::fresh(),
            title: "New Link".to_string(),
            link: "https://example.com".to_string(),
        }
    }
}

impl Default for Social {
    fn default() -> Self {
        Self {
            id: EntryId::fresh(),
            title: String::new(),
            link: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeExperience {
    #[serde(default)]
    pub id: EntryId,
    pub dates: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub position: String,
    pub bullets: Vec<String>,
}

impl ResumeExperience {
    pub fn template() -> Self {
        Self {
            id: EntryId::fresh(),
            dates: "Enter Dates".to_string(),
            kind: "Full Time".to_string(),
            position: "Frontend Engineer at X".to_string(),
            bullets: vec!["Worked on the frontend of a React application".to_string()],
        }
    }
}

impl Default for ResumeExperience {
    fn default() -> Self {
        Self {
            id: EntryId::fresh(),
            dates: String::new(),
            kind: String::new(),
            position: String::new(),
            bullets: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationRecord {
    pub university_name: String,
    pub university_date: String,
    pub university_para: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Resume {
    pub tagline: String,
    pub description: String,
    #[serde(deserialize_with = "with_stable_ids")]
    pub experiences: Vec<ResumeExperience>,
    pub education: EducationRecord,
    pub languages: Vec<String>,
    pub frameworks: Vec<String>,
    pub others: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContentDocument {
    pub name: String,
    pub logo: String,
    pub header_tagline_one: String,
    pub header_tagline_two: String,
    pub header_tagline_three: String,
    pub header_tagline_four: String,
    #[serde(rename = "aboutpara")]
    pub about_para: String,

    pub show_blog: bool,
    pub show_resume: bool,
    pub dark_mode: bool,
    pub show_cursor: bool,

    #[serde(deserialize_with = "with_stable_ids")]
    pub projects: Vec<Project>,
    #[serde(deserialize_with = "with_stable_ids")]
    pub services: Vec<Service>,
    #[serde(deserialize_with = "with_stable_ids")]
    pub socials: Vec<Social>,
    pub resume: Resume,

    /// Unmodelled top-level keys, written back untouched.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ContentDocument {
    pub fn text(&self, field: TextField) -> &str {
        match field {
            TextField::Name => &self.name,
            TextField::Logo => &self.logo,
            TextField::TaglineOne => &self.header_tagline_one,
            TextField::TaglineTwo => &self.header_tagline_two,
            TextField::TaglineThree => &self.header_tagline_three,
            TextField::TaglineFour => &self.header_tagline_four,
            TextField::About => &self.about_para,
            TextField::ResumeTagline => &self.resume.tagline,
            TextField::ResumeDescription => &self.resume.description,
            TextField::UniversityName => &self.resume.education.university_name,
            TextField::UniversityDate => &self.resume.education.university_date,
            TextField::UniversityPara => &self.resume.education.university_para,
        }
    }

    pub(crate) fn text_mut(&mut self, field: TextField) -> &mut String {
        match field {
            TextField::Name => &mut self.name,
            TextField::Logo => &mut self.logo,
            TextField::TaglineOne => &mut self.header_tagline_one,
            TextField::TaglineTwo => &mut self.header_tagline_two,
            TextField::TaglineThree => &mut self.header_tagline_three,
            TextField::TaglineFour => &mut self.header_tagline_four,
            TextField::About => &mut self.about_para,
            TextField::ResumeTagline => &mut self.resume.tagline,
            TextField::ResumeDescription => &mut self.resume.description,
            TextField::UniversityName => &mut self.resume.education.university_name,
            TextField::UniversityDate => &mut self.resume.education.university_date,
            TextField::UniversityPara => &mut self.resume.education.university_para,
        }
    }

    pub fn flag(&self, flag: Flag) -> bool {
        match flag {
            Flag::ShowBlog => self.show_blog,
            Flag::ShowResume => self.show_resume,
            Flag::DarkMode => self.dark_mode,
            Flag::ShowCursor => self.show_cursor,
        }
    }

    pub(crate) fn flag_mut(&mut self, flag: Flag) -> &mut bool {
        match flag {
            Flag::ShowBlog => &mut self.show_blog,
            Flag::ShowResume => &mut self.show_resume,
            Flag::DarkMode => &mut self.dark_mode,
            Flag::ShowCursor => &mut self.show_cursor,
        }
    }

    /// Starter content written by `init`.
    pub fn starter() -> Self {
        Self {
            name: "Your Name".to_string(),
            header_tagline_one: "Hello, I'm".to_string(),
            header_tagline_two: "a designer and developer".to_string(),
            header_tagline_three: "building for the web".to_string(),
            header_tagline_four: "from anywhere.".to_string(),
            about_para: "A few words about you.".to_string(),
            show_resume: true,
            projects: vec![Project::template()],
            services: vec![Service::template()],
            socials: vec![Social::template()],
            resume: Resume {
                tagline: "Work history".to_string(),
                experiences: vec![ResumeExperience::template()],
                languages: vec!["Rust".to_string()],
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Single-valued text fields that can be set directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextField {
    Name,
    Logo,
    TaglineOne,
    TaglineTwo,
    TaglineThree,
    TaglineFour,
    About,
    ResumeTagline,
    ResumeDescription,
    UniversityName,
    UniversityDate,
    UniversityPara,
}

impl TextField {
    pub const ALL: [TextField; 12] = [
        TextField::Name,
        TextField::Logo,
        TextField::TaglineOne,
        TextField::TaglineTwo,
        TextField::TaglineThree,
        TextField::TaglineFour,
        TextField::About,
        TextField::ResumeTagline,
        TextField::ResumeDescription,
        TextField::UniversityName,
        TextField::UniversityDate,
        TextField::UniversityPara,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TextField::Name => "name",
            TextField::Logo => "logo",
            TextField::TaglineOne => "tagline-one",
            TextField::TaglineTwo => "tagline-two",
            TextField::TaglineThree => "tagline-three",
            TextField::TaglineFour => "tagline-four",
            TextField::About => "about",
            TextField::ResumeTagline => "resume-tagline",
            TextField::ResumeDescription => "resume-description",
            TextField::UniversityName => "university-name",
            TextField::UniversityDate => "university-date",
            TextField::UniversityPara => "university-para",
        }
    }
}

impl fmt::Display for TextField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TextField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TextField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| {
                let known: Vec<&str> = TextField::ALL.iter().map(|f| f.as_str()).collect();
                format!("unknown field '{}' (expected one of: {})", s, known.join(", "))
            })
    }
}

/// Boolean feature switches of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flag {
    ShowBlog,
    ShowResume,
    DarkMode,
    ShowCursor,
}

impl Flag {
    pub const ALL: [Flag; 4] = [
        Flag::ShowBlog,
        Flag::ShowResume,
        Flag::DarkMode,
        Flag::ShowCursor,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Flag::ShowBlog => "show-blog",
            Flag::ShowResume => "show-resume",
            Flag::DarkMode => "dark-mode",
            Flag::ShowCursor => "show-cursor",
        }
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Flag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Flag::ALL
            .into_iter()
            .find(|flag| flag.as_str() == s)
            .ok_or_else(|| {
                let known: Vec<&str> = Flag::ALL.iter().map(|f| f.as_str()).collect();
                format!("unknown flag '{}' (expected one of: {})", s, known.join(", "))
            })
    }
}
