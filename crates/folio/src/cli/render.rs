use colored::Colorize;
use folioapp::commands::{CmdMessage, MessageLevel, StatusReport};
use folioapp::model::{ContentDocument, Flag};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const INDENT: &str = "    ";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn render_status(report: &StatusReport) -> String {
    let mut out = String::new();
    let session = if report.authenticated {
        "logged in".green()
    } else {
        "logged out".dimmed()
    };
    out.push_str(&format!("Session:  {}\n", session));
    out.push_str(&format!("Mode:     {}\n", report.environment));

    let state = report.state.to_string();
    let state = if report.dirty {
        state.yellow()
    } else {
        state.normal()
    };
    out.push_str(&format!("State:    {}\n", state));

    if !report.changed_sections.is_empty() {
        let names: Vec<String> = report
            .changed_sections
            .iter()
            .map(|s| s.to_string())
            .collect();
        out.push_str(&format!("Changed:  {}\n", names.join(", ")));
    }
    out
}

pub(super) fn render_document(doc: &ContentDocument) -> String {
    let mut out = String::new();

    let title = if doc.logo.is_empty() {
        doc.name.bold().to_string()
    } else {
        format!("{} [{}]", doc.name.bold(), doc.logo)
    };
    out.push_str(&format!("{}\n", title));
    for line in [
        &doc.header_tagline_one,
        &doc.header_tagline_two,
        &doc.header_tagline_three,
        &doc.header_tagline_four,
    ] {
        if !line.is_empty() {
            out.push_str(&format!("{}{}\n", INDENT, line));
        }
    }

    section(&mut out, "About");
    let about = truncate_to_width(&doc.about_para, LINE_WIDTH - INDENT.len());
    out.push_str(&format!("{}{}\n", INDENT, about));

    section(&mut out, "Flags");
    let flags: Vec<String> = Flag::ALL
        .iter()
        .map(|f| {
            let state = if doc.flag(*f) { "on".green() } else { "off".dimmed() };
            format!("{} {}", f, state)
        })
        .collect();
    out.push_str(&format!("{}{}\n", INDENT, flags.join("  ")));

    section(&mut out, "Projects");
    for (i, p) in doc.projects.iter().enumerate() {
        entry_line(&mut out, i, &p.title, &p.description, p.id.as_str());
    }

    section(&mut out, "Services");
    for (i, s) in doc.services.iter().enumerate() {
        entry_line(&mut out, i, &s.title, &s.description, s.id.as_str());
    }

    section(&mut out, "Socials");
    for (i, s) in doc.socials.iter().enumerate() {
        entry_line(&mut out, i, &s.title, &s.link, s.id.as_str());
    }

    section(&mut out, "Resume");
    if !doc.resume.tagline.is_empty() {
        out.push_str(&format!("{}{}\n", INDENT, doc.resume.tagline));
    }
    for (i, e) in doc.resume.experiences.iter().enumerate() {
        let detail = format!("{}, {}", e.dates, e.kind);
        entry_line(&mut out, i, &e.position, &detail, e.id.as_str());
        for bullet in &e.bullets {
            out.push_str(&format!("{}{}- {}\n", INDENT, INDENT, bullet));
        }
    }
    let edu = &doc.resume.education;
    if !edu.university_name.is_empty() {
        out.push_str(&format!(
            "{}{} {}\n",
            INDENT,
            edu.university_name,
            edu.university_date.dimmed()
        ));
    }
    list_line(&mut out, "Languages", &doc.resume.languages);
    list_line(&mut out, "Frameworks", &doc.resume.frameworks);
    list_line(&mut out, "Others", &doc.resume.others);

    out
}

fn section(out: &mut String, name: &str) {
    out.push_str(&format!("\n{}\n", name.bold()));
}

fn entry_line(out: &mut String, index: usize, label: &str, detail: &str, id: &str) {
    let idx = format!("{:<4}", format!("#{}", index + 1));
    let id_suffix = format!("  ({})", id);

    let used = INDENT.width() + idx.width() + label.width() + id_suffix.width();
    let available = LINE_WIDTH.saturating_sub(used + 3);
    let detail = if detail.is_empty() || available == 0 {
        String::new()
    } else {
        format!(" - {}", truncate_to_width(detail, available))
    };

    out.push_str(&format!(
        "{}{}{}{}{}\n",
        INDENT,
        idx.yellow(),
        label,
        detail.dimmed(),
        id_suffix.dimmed()
    ));
}

fn list_line(out: &mut String, name: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    let numbered: Vec<String> = items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {}", i + 1, item))
        .collect();
    out.push_str(&format!("{}{}: {}\n", INDENT, name, numbered.join("  ")));
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use folioapp::diff::Section;
    use folioapp::gateway::Environment;
    use folioapp::workflow::EditorState;

    #[test]
    fn test_truncate_keeps_short_strings() {
        assert_eq!(truncate_to_width("short", 10), "short");
    }

    #[test]
    fn test_truncate_adds_ellipsis() {
        let out = truncate_to_width("abcdefghij", 5);
        assert_eq!(out, "abcd…");
        assert!(out.width() <= 5);
    }

    #[test]
    fn test_truncate_wide_chars() {
        let out = truncate_to_width("日本語のテキスト", 6);
        assert!(out.width() <= 6);
        assert!(out.ends_with('…'));
    }

    #[test]
    fn test_render_document_lists_entries() {
        colored::control::set_override(false);
        let doc = ContentDocument::starter();
        let out = render_document(&doc);

        assert!(out.starts_with("Your Name"));
        assert!(out.contains("#1  New Project"));
        assert!(out.contains("Languages: 1. Rust"));
        assert!(out.contains("show-resume on"));
    }

    #[test]
    fn test_render_status() {
        colored::control::set_override(false);
        let report = StatusReport {
            state: EditorState::Dirty,
            dirty: true,
            authenticated: true,
            environment: Environment::Development,
            changed_sections: vec![Section::Header, Section::Projects],
        };
        let out = render_status(&report);
        assert!(out.contains("State:    dirty"));
        assert!(out.contains("Changed:  header, projects"));
        assert!(out.contains("Mode:     development"));
    }
}
