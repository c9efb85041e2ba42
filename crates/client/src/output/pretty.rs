//! Pretty output formatting.

use labdesk_core::area::{Area, Section};

/// Human-readable rendering used by `--format pretty`.
pub trait Pretty {
    fn pretty(&self) -> String;
}

impl Pretty for Area {
    fn pretty(&self) -> String {
        format_area(self)
    }
}

impl Pretty for [Area] {
    fn pretty(&self) -> String {
        format_areas(self)
    }
}

impl Pretty for Section {
    fn pretty(&self) -> String {
        format_section(self)
    }
}

impl Pretty for [Section] {
    fn pretty(&self) -> String {
        format_sections(self)
    }
}

impl<T> Pretty for Vec<T>
where
    [T]: Pretty,
{
    fn pretty(&self) -> String {
        self.as_slice().pretty()
    }
}

fn status(is_active: bool) -> &'static str {
    if is_active {
        "active"
    } else {
        "inactive"
    }
}

/// Format an area for display.
pub fn format_area(area: &Area) -> String {
    let mut output = format!(
        "{} [{}]\n  ID: {}\n  Type: {}\n  Branch: {}",
        area.name,
        status(area.is_active),
        area.id,
        area.kind,
        area.branch_id
    );
    if area.is_external {
        output.push_str("\n  External: yes");
    }
    output
}

/// Format areas for display.
pub fn format_areas(areas: &[Area]) -> String {
    if areas.is_empty() {
        return "No areas found.".to_string();
    }
    let mut output = format!("AREAS ({})\n", areas.len());
    output.push_str(&"-".repeat(40));
    for area in areas {
        output.push_str(&format!("\n{}", format_area(area)));
        output.push('\n');
    }
    output
}

/// Format a section for display.
pub fn format_section(section: &Section) -> String {
    format!(
        "{} [{}]\n  ID: {}",
        section.name,
        status(section.is_active),
        section.id
    )
}

/// Format sections for display.
pub fn format_sections(sections: &[Section]) -> String {
    if sections.is_empty() {
        return "No sections found.".to_string();
    }
    let mut output = format!("SECTIONS ({})\n", sections.len());
    output.push_str(&"-".repeat(40));
    for section in sections {
        output.push_str(&format!("\n{}", format_section(section)));
        output.push('\n');
    }
    output
}
