//! # Collection Editors
//!
//! Every content change is expressed as a function from the current
//! [`ContentDocument`] to a new one. Nothing here mutates a document other
//! readers can see: each operation clones, edits the clone, and hands it back
//! for the store to install in one step.
//!
//! Operations report an [`Outcome`]. Referring to an id that is not in the
//! collection, or an index past the end of a flat list, is not an error: the
//! document is left as it was and the caller gets [`Outcome::NoOp`], so a
//! stale reference never aborts an editing session but is still visible.
//!
//! ## Identity-keyed collections
//!
//! Projects, services, socials and resume experiences implement [`Entry`].
//! `add` appends the kind's template (with caller overrides) under a fresh id;
//! `edit` merges a patch into the entry in place; `delete` drops exactly one
//! entry. Relative order of the others never changes.
//!
//! ## Flat string lists
//!
//! Languages, frameworks and others are plain strings addressed by position.

use crate::model::{
    ContentDocument, EntryId, Flag, Project, ResumeExperience, Service, Social, TextField,
};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Whether an editor operation changed anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    NoOp,
}

/// A collection entry with a stable identity and a matching patch type.
pub trait Entry: Clone + PartialEq {
    type Patch;

    fn id(&self) -> &EntryId;
    fn set_id(&mut self, id: EntryId);
    fn apply(&mut self, patch: &Self::Patch);
    fn label(&self) -> &str;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image_src: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServicePatch {
    pub title: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SocialPatch {
    pub title: Option<String>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExperiencePatch {
    pub dates: Option<String>,
    pub kind: Option<String>,
    pub position: Option<String>,
    pub bullets: Option<Vec<String>>,
}

fn merge(target: &mut String, value: &Option<String>) {
    if let Some(v) = value {
        target.clone_from(v);
    }
}

impl Entry for Project {
    type Patch = ProjectPatch;

    fn id(&self) -> &EntryId {
        &self.id
    }

    fn set_id(&mut self, id: EntryId) {
        self.id = id;
    }

    fn apply(&mut self, patch: &ProjectPatch) {
        merge(&mut self.title, &patch.title);
        merge(&mut self.description, &patch.description);
        merge(&mut self.image_src, &patch.image_src);
        merge(&mut self.url, &patch.url);
    }

    fn label(&self) -> &str {
        &self.title
    }
}

impl Entry for Service {
    type Patch = ServicePatch;

    fn id(&self) -> &EntryId {
        &self.id
    }

    fn set_id(&mut self, id: EntryId) {
        self.id = id;
    }

    fn apply(&mut self, patch: &ServicePatch) {
        merge(&mut self.title, &patch.title);
        merge(&mut self.description, &patch.description);
    }

    fn label(&self) -> &str {
        &self.title
    }
}

impl Entry for Social {
    type Patch = SocialPatch;

    fn id(&self) -> &EntryId {
        &self.id
    }

    fn set_id(&mut self, id: EntryId) {
        self.id = id;
    }

    fn apply(&mut self, patch: &SocialPatch) {
        merge(&mut self.title, &patch.title);
        merge(&mut self.link, &patch.link);
    }

    fn label(&self) -> &str {
        &self.title
    }
}

impl Entry for ResumeExperience {
    type Patch = ExperiencePatch;

    fn id(&self) -> &EntryId {
        &self.id
    }

    fn set_id(&mut self, id: EntryId) {
        self.id = id;
    }

    fn apply(&mut self, patch: &ExperiencePatch) {
        merge(&mut self.dates, &patch.dates);
        merge(&mut self.kind, &patch.kind);
        merge(&mut self.position, &patch.position);
        if let Some(bullets) = &patch.bullets {
            self.bullets.clone_from(bullets);
        }
    }

    fn label(&self) -> &str {
        &self.position
    }
}

/// Generates an id not present in `items`.
fn unused_id<T: Entry>(items: &[T]) -> EntryId {
    let taken: HashSet<&EntryId> = items.iter().map(|e| e.id()).collect();
    loop {
        let id = EntryId::fresh();
        if !taken.contains(&id) {
            return id;
        }
    }
}

/// Appends `entry` under a fresh id.
pub fn add_entry<T: Entry>(items: &[T], mut entry: T) -> (Vec<T>, EntryId) {
    let id = unused_id(items);
    entry.set_id(id.clone());
    let mut next = items.to_vec();
    next.push(entry);
    (next, id)
}

/// Merges `patch` into the entry with `id`, keeping its position.
///
/// `None` when no entry has `id` or the patch leaves the entry as it was.
pub fn edit_entry<T: Entry>(items: &[T], id: &EntryId, patch: &T::Patch) -> Option<Vec<T>> {
    let pos = items.iter().position(|e| e.id() == id)?;
    let mut entry = items[pos].clone();
    entry.apply(patch);
    if entry == items[pos] {
        return None;
    }
    let mut next = items.to_vec();
    next[pos] = entry;
    Some(next)
}

/// Removes the entry with `id`.
pub fn delete_entry<T: Entry>(items: &[T], id: &EntryId) -> Option<Vec<T>> {
    let pos = items.iter().position(|e| e.id() == id)?;
    let mut next = items.to_vec();
    next.remove(pos);
    Some(next)
}

/// Default value appended to flat lists.
pub const LIST_PLACEHOLDER: &str = "Added";

pub fn add_item(items: &[String], value: &str) -> Vec<String> {
    let mut next = items.to_vec();
    next.push(value.to_string());
    next
}

pub fn edit_item(items: &[String], index: usize, value: &str) -> Option<Vec<String>> {
    if items.get(index)? == value {
        return None;
    }
    let mut next = items.to_vec();
    next[index] = value.to_string();
    Some(next)
}

pub fn remove_item(items: &[String], index: usize) -> Option<Vec<String>> {
    if index >= items.len() {
        return None;
    }
    let mut next = items.to_vec();
    next.remove(index);
    Some(next)
}

/// The four identity-keyed collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionKind {
    Projects,
    Services,
    Socials,
    Experiences,
}

impl CollectionKind {
    pub fn singular(&self) -> &'static str {
        match self {
            CollectionKind::Projects => "project",
            CollectionKind::Services => "service",
            CollectionKind::Socials => "social",
            CollectionKind::Experiences => "experience",
        }
    }

    /// Ids currently in this collection, in order.
    pub fn ids(&self, doc: &ContentDocument) -> Vec<EntryId> {
        fn collect<T: Entry>(items: &[T]) -> Vec<EntryId> {
            items.iter().map(|e| e.id().clone()).collect()
        }
        match self {
            CollectionKind::Projects => collect(&doc.projects),
            CollectionKind::Services => collect(&doc.services),
            CollectionKind::Socials => collect(&doc.socials),
            CollectionKind::Experiences => collect(&doc.resume.experiences),
        }
    }

    /// Removes the entry with `id` from this collection.
    pub fn delete(&self, doc: &ContentDocument, id: &EntryId) -> Option<ContentDocument> {
        let mut next = doc.clone();
        match self {
            CollectionKind::Projects => next.projects = delete_entry(&doc.projects, id)?,
            CollectionKind::Services => next.services = delete_entry(&doc.services, id)?,
            CollectionKind::Socials => next.socials = delete_entry(&doc.socials, id)?,
            CollectionKind::Experiences => {
                next.resume.experiences = delete_entry(&doc.resume.experiences, id)?
            }
        }
        Some(next)
    }
}

impl fmt::Display for CollectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.singular())
    }
}

/// A typed collection edit, one variant per kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryEdit {
    Project(ProjectPatch),
    Service(ServicePatch),
    Social(SocialPatch),
    Experience(ExperiencePatch),
}

impl EntryEdit {
    pub fn kind(&self) -> CollectionKind {
        match self {
            EntryEdit::Project(_) => CollectionKind::Projects,
            EntryEdit::Service(_) => CollectionKind::Services,
            EntryEdit::Social(_) => CollectionKind::Socials,
            EntryEdit::Experience(_) => CollectionKind::Experiences,
        }
    }

    /// Appends the kind's template with this edit's fields applied.
    pub fn add_to(&self, doc: &ContentDocument) -> (ContentDocument, EntryId) {
        let mut next = doc.clone();
        let id = match self {
            EntryEdit::Project(patch) => {
                let mut entry = Project::template();
                entry.apply(patch);
                let (items, id) = add_entry(&doc.projects, entry);
                next.projects = items;
                id
            }
            EntryEdit::Service(patch) => {
                let mut entry = Service::template();
                entry.apply(patch);
                let (items, id) = add_entry(&doc.services, entry);
                next.services = items;
                id
            }
            EntryEdit::Social(patch) => {
                let mut entry = Social::template();
                entry.apply(patch);
                let (items, id) = add_entry(&doc.socials, entry);
                next.socials = items;
                id
            }
            EntryEdit::Experience(patch) => {
                let mut entry = ResumeExperience::template();
                entry.apply(patch);
                let (items, id) = add_entry(&doc.resume.experiences, entry);
                next.resume.experiences = items;
                id
            }
        };
        (next, id)
    }

    /// Applies this edit to the entry with `id`.
    pub fn apply_to(&self, doc: &ContentDocument, id: &EntryId) -> Option<ContentDocument> {
        let mut next = doc.clone();
        match self {
            EntryEdit::Project(p) => next.projects = edit_entry(&doc.projects, id, p)?,
            EntryEdit::Service(p) => next.services = edit_entry(&doc.services, id, p)?,
            EntryEdit::Social(p) => next.socials = edit_entry(&doc.socials, id, p)?,
            EntryEdit::Experience(p) => {
                next.resume.experiences = edit_entry(&doc.resume.experiences, id, p)?
            }
        }
        Some(next)
    }
}

/// The three flat string lists of the resume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    Languages,
    Frameworks,
    Others,
}

impl ListKind {
    pub fn singular(&self) -> &'static str {
        match self {
            ListKind::Languages => "language",
            ListKind::Frameworks => "framework",
            ListKind::Others => "other",
        }
    }

    pub fn items<'a>(&self, doc: &'a ContentDocument) -> &'a [String] {
        match self {
            ListKind::Languages => &doc.resume.languages,
            ListKind::Frameworks => &doc.resume.frameworks,
            ListKind::Others => &doc.resume.others,
        }
    }

    fn with_items(&self, doc: &ContentDocument, items: Vec<String>) -> ContentDocument {
        let mut next = doc.clone();
        match self {
            ListKind::Languages => next.resume.languages = items,
            ListKind::Frameworks => next.resume.frameworks = items,
            ListKind::Others => next.resume.others = items,
        }
        next
    }

    pub fn add(&self, doc: &ContentDocument, value: Option<&str>) -> ContentDocument {
        let items = add_item(self.items(doc), value.unwrap_or(LIST_PLACEHOLDER));
        self.with_items(doc, items)
    }

    pub fn edit(&self, doc: &ContentDocument, index: usize, value: &str) -> Option<ContentDocument> {
        let items = edit_item(self.items(doc), index, value)?;
        Some(self.with_items(doc, items))
    }

    pub fn remove(&self, doc: &ContentDocument, index: usize) -> Option<ContentDocument> {
        let items = remove_item(self.items(doc), index)?;
        Some(self.with_items(doc, items))
    }
}

impl fmt::Display for ListKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.singular())
    }
}

impl FromStr for ListKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "language" | "languages" => Ok(ListKind::Languages),
            "framework" | "frameworks" => Ok(ListKind::Frameworks),
            "other" | "others" => Ok(ListKind::Others),
            _ => Err(format!("unknown list '{}'", s)),
        }
    }
}

/// Sets a text field; `None` when it already holds `value`.
pub fn set_text(doc: &ContentDocument, field: TextField, value: &str) -> Option<ContentDocument> {
    if doc.text(field) == value {
        return None;
    }
    let mut next = doc.clone();
    *next.text_mut(field) = value.to_string();
    Some(next)
}

/// Sets a feature flag; `None` when unchanged.
pub fn set_flag(doc: &ContentDocument, flag: Flag, value: bool) -> Option<ContentDocument> {
    if doc.flag(flag) == value {
        return None;
    }
    let mut next = doc.clone();
    *next.flag_mut(flag) = value;
    Some(next)
}
