use crate::gateway::{Environment, PersistenceGateway};
use crate::model::{ContentDocument, EntryId, Project, ResumeExperience, Service, Social};
use crate::session::{SessionGate, SessionState};
use crate::store::mem_backend::MemBackend;
use crate::workflow::EditorWorkflow;

pub const TEST_PASSWORD: &str = "letmein";

/// A small document with one entry in each collection.
pub fn sample_document() -> ContentDocument {
    let mut doc = ContentDocument {
        name: "Alice".to_string(),
        about_para: "Builds things.".to_string(),
        show_resume: true,
        projects: vec![
            Project {
                id: EntryId::from("p1"),
                title: "First".to_string(),
                ..Project::template()
            },
            Project {
                id: EntryId::from("p2"),
                title: "Second".to_string(),
                ..Project::template()
            },
        ],
        services: vec![Service {
            id: EntryId::from("s1"),
            ..Service::template()
        }],
        socials: vec![Social {
            id: EntryId::from("l1"),
            title: "GitHub".to_string(),
            link: "https://github.com/alice".to_string(),
        }],
        ..Default::default()
    };
    doc.resume.experiences = vec![ResumeExperience {
        id: EntryId::from("e1"),
        ..ResumeExperience::template()
    }];
    doc.resume.languages = vec!["Rust".to_string(), "Go".to_string()];
    doc
}

/// Workflow over an in-memory sink holding [`sample_document`].
pub fn mem_workflow(environment: Environment) -> EditorWorkflow<MemBackend> {
    let backend = MemBackend::with_document(&sample_document());
    let gateway = PersistenceGateway::new(backend, environment);
    EditorWorkflow::with_document(gateway, sample_document(), chrono::Duration::seconds(3))
}

pub fn open_gate() -> SessionGate {
    let mut gate = SessionGate::new(TEST_PASSWORD, SessionState::default());
    gate.login(TEST_PASSWORD);
    gate
}
