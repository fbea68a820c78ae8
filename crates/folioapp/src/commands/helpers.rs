use crate::collection::CollectionKind;
use crate::error::{FolioError, Result};
use crate::model::{ContentDocument, EntryId};
use std::fmt;
use std::str::FromStr;

/// How a user points at a collection entry: `#2` for the second entry, or
/// an id as stored in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntrySelector {
    Position(usize),
    Id(EntryId),
}

impl FromStr for EntrySelector {
    type Err = FolioError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(FolioError::Validation("empty selector".to_string()));
        }
        match s.strip_prefix('#') {
            Some(pos) => {
                let n: usize = pos.parse().map_err(|_| {
                    FolioError::Validation(format!("'{}' is not a valid position", s))
                })?;
                if n == 0 {
                    return Err(FolioError::Validation(
                        "positions start at #1".to_string(),
                    ));
                }
                Ok(EntrySelector::Position(n))
            }
            None => Ok(EntrySelector::Id(EntryId::new(s))),
        }
    }
}

impl fmt::Display for EntrySelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntrySelector::Position(n) => write!(f, "#{}", n),
            EntrySelector::Id(id) => write!(f, "{}", id),
        }
    }
}

/// Resolves a selector to an id present in `kind`, if any.
pub fn resolve_entry(
    doc: &ContentDocument,
    kind: CollectionKind,
    selector: &EntrySelector,
) -> Option<EntryId> {
    let ids = kind.ids(doc);
    match selector {
        EntrySelector::Position(n) => ids.get(n - 1).cloned(),
        EntrySelector::Id(id) => ids.into_iter().find(|candidate| candidate == id),
    }
}

/// Converts a 1-based list position to an index.
pub fn list_index(position: usize) -> Result<usize> {
    position
        .checked_sub(1)
        .ok_or_else(|| FolioError::Validation("positions start at 1".to_string()))
}

pub fn not_found(kind: CollectionKind, selector: &EntrySelector) -> String {
    format!("No {} matches {}; nothing changed", kind, selector)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Project;

    fn doc() -> ContentDocument {
        ContentDocument {
            projects: ["a", "b", "c"]
                .iter()
                .map(|id| Project {
                    id: EntryId::from(*id),
                    ..Default::default()
                })
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_parse_selectors() {
        assert_eq!(
            "#2".parse::<EntrySelector>().unwrap(),
            EntrySelector::Position(2)
        );
        assert_eq!(
            "abc".parse::<EntrySelector>().unwrap(),
            EntrySelector::Id(EntryId::from("abc"))
        );
        assert!("#0".parse::<EntrySelector>().is_err());
        assert!("#x".parse::<EntrySelector>().is_err());
        assert!("".parse::<EntrySelector>().is_err());
    }

    #[test]
    fn test_resolve_by_position_and_id() {
        let doc = doc();
        let kind = CollectionKind::Projects;
        assert_eq!(
            resolve_entry(&doc, kind, &EntrySelector::Position(2)),
            Some(EntryId::from("b"))
        );
        assert_eq!(
            resolve_entry(&doc, kind, &EntrySelector::Id(EntryId::from("c"))),
            Some(EntryId::from("c"))
        );
        assert_eq!(resolve_entry(&doc, kind, &EntrySelector::Position(4)), None);
        assert_eq!(
            resolve_entry(&doc, CollectionKind::Services, &EntrySelector::Position(1)),
            None
        );
    }

    #[test]
    fn test_list_index() {
        assert_eq!(list_index(1).unwrap(), 0);
        assert!(list_index(0).is_err());
    }
}
