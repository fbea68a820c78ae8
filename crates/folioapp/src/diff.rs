//! Change detection between the working document and its baseline.
//!
//! Dirty state is plain structural inequality of the two documents, computed
//! fresh on every call. Order matters: a reordered collection is a change.

use crate::model::{ContentDocument, Flag, TextField};
use serde::Serialize;
use std::fmt;

pub fn is_dirty(current: &ContentDocument, baseline: &ContentDocument) -> bool {
    current != baseline
}

/// Top-level areas of the document, as grouped by the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Header,
    About,
    Flags,
    Projects,
    Services,
    Socials,
    Resume,
    Other,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Section::Header => "header",
            Section::About => "about",
            Section::Flags => "flags",
            Section::Projects => "projects",
            Section::Services => "services",
            Section::Socials => "socials",
            Section::Resume => "resume",
            Section::Other => "other",
        };
        f.write_str(name)
    }
}

const HEADER_FIELDS: [TextField; 6] = [
    TextField::Name,
    TextField::Logo,
    TextField::TaglineOne,
    TextField::TaglineTwo,
    TextField::TaglineThree,
    TextField::TaglineFour,
];

/// Sections that differ, in display order. Empty iff not dirty.
pub fn changed_sections(current: &ContentDocument, baseline: &ContentDocument) -> Vec<Section> {
    let mut sections = Vec::new();
    if HEADER_FIELDS
        .iter()
        .any(|f| current.text(*f) != baseline.text(*f))
    {
        sections.push(Section::Header);
    }
    if current.about_para != baseline.about_para {
        sections.push(Section::About);
    }
    if Flag::ALL.iter().any(|f| current.flag(*f) != baseline.flag(*f)) {
        sections.push(Section::Flags);
    }
    if current.projects != baseline.projects {
        sections.push(Section::Projects);
    }
    if current.services != baseline.services {
        sections.push(Section::Services);
    }
    if current.socials != baseline.socials {
        sections.push(Section::Socials);
    }
    if current.resume != baseline.resume {
        sections.push(Section::Resume);
    }
    if current.extra != baseline.extra {
        sections.push(Section::Other);
    }
    sections
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EntryId, Service};

    fn service(id: &str) -> Service {
        Service {
            id: EntryId::from(id),
            title: id.to_uppercase(),
            description: String::new(),
        }
    }

    #[test]
    fn equal_documents_are_clean() {
        let doc = ContentDocument::starter();
        assert!(!is_dirty(&doc, &doc.clone()));
        assert!(changed_sections(&doc, &doc.clone()).is_empty());
    }

    #[test]
    fn reorder_counts_as_change() {
        let a = ContentDocument {
            services: vec![service("a"), service("b")],
            ..Default::default()
        };
        let mut b = a.clone();
        b.services.reverse();
        assert!(is_dirty(&b, &a));
        assert_eq!(changed_sections(&b, &a), vec![Section::Services]);
    }

    #[test]
    fn reports_each_touched_section() {
        let base = ContentDocument::starter();
        let mut cur = base.clone();
        cur.header_tagline_three = "changed".into();
        cur.dark_mode = !cur.dark_mode;
        cur.resume.others.push("Figma".into());

        assert_eq!(
            changed_sections(&cur, &base),
            vec![Section::Header, Section::Flags, Section::Resume]
        );
    }
}
