//! The fixed synopsis content.
//!
//! Everything here is literal text. Bullet lists are kept as single
//! paragraphs whose lines start with [`BULLET`], not as numbering
//! definitions, so the output matches the established layout.

use crate::error::Result;
use crate::model::{Alignment, Document, Metadata};

/// File name the synopsis is written to.
pub const OUTPUT_FILE_NAME: &str = "College_Event_Placement_Management_System_Synopsis.docx";

/// Bullet marker prefixed to each list line.
pub const BULLET: char = '•';

/// Centered title block.
pub const TITLE: &str = "SYNOPSIS\nCollege Event & Placement Management System";

/// Level-2 section headings, in document order.
pub const SECTION_HEADINGS: [&str; 4] = [
    "1. Project / Problem Definition",
    "2. Background Study / Coursework Done So Far",
    "3. Tentative Work Plan",
    "4. Tools and Technology Required",
];

/// Level-3 headings nested under the work-plan section.
pub const WORK_PLAN_HEADINGS: [&str; 2] = ["A. Completed Work", "B. Work To Be Done"];

const PROJECT_DEFINITION: [&str; 2] = [
    concat!(
        "The College Event & Placement Management System is a comprehensive web-based platform ",
        "designed to manage college events such as cultural fests, technical competitions, sports events, ",
        "and campus placement drives in a centralized and efficient manner. Currently, many colleges ",
        "handle event registrations, announcements, results, and placement processes manually or through ",
        "multiple disconnected systems. This leads to data duplication, lack of transparency, difficulty ",
        "in tracking participation, and inefficient communication between students and administration."
    ),
    concat!(
        "The proposed system aims to solve these problems by providing a unified platform with ",
        "role-based access for Students, Event Admins, Placement Cell members, and Super Admins. ",
        "The system will allow students to register for events and placement drives, track their ",
        "applications, and manage their profiles. Event admins can manage events, sub-events, ",
        "registrations, results, and galleries, while the placement cell can manage companies, ",
        "job postings, applications, and final results. Super admins will have complete control ",
        "over users, roles, and system settings."
    ),
];

const BACKGROUND_STUDY: [&str; 2] = [
    concat!(
        "The development of this project is based on prior coursework and practical knowledge in ",
        "web development, database management systems, and software engineering principles. ",
        "Concepts such as relational database design, Entity-Relationship (ER) modeling, ",
        "normalization, and secure authentication mechanisms have been studied and applied ",
        "in planning the database schema."
    ),
    concat!(
        "The system architecture follows modern web application practices including frontend-backend ",
        "integration, REST-based communication, and role-based access control (RBAC). The use of ",
        "Supabase as a Backend-as-a-Service platform supports authentication, database management, ",
        "and storage. Knowledge of React (TypeScript), component-based architecture, hooks, and ",
        "context APIs has been applied in designing dashboards and reusable UI components. ",
        "Security concepts such as Row Level Security (RLS), protected routes, and secure file storage ",
        "policies have also been incorporated into the design."
    ),
];

const COMPLETED_WORK: [&str; 7] = [
    "Prepared detailed implementation plan and system architecture.",
    "Designed database schema including tables for users, events, sub-events, companies, job postings, and applications.",
    "Defined role-based access structure (Student, Event Admin, Placement Cell, Super Admin).",
    "Planned authentication flow with profile creation and default role assignment.",
    "Designed file structure for frontend components, pages, hooks, and layouts.",
    "Identified security measures such as Row Level Security (RLS) and protected routes.",
    "Planned storage buckets for profile images, event banners, job documents, and company logos.",
];

const WORK_TO_BE_DONE: [&str; 9] = [
    "Set up Supabase project and create database tables with proper relationships and constraints.",
    "Implement authentication system with login and signup functionality.",
    "Develop role-based dashboards for students, event admins, placement cell, and super admins.",
    "Implement event browsing, registration, and result management features.",
    "Develop placement module including company management, job postings, and application tracking.",
    "Integrate file upload functionality for banners, galleries, and job documents.",
    "Implement analytics and statistics dashboards.",
    "Test the complete system for security, performance, and usability.",
    "Deploy the application and perform final documentation.",
];

const TOOLS_INTRO: &str =
    "The following tools and technologies will be used for the development of the project:";

/// Grouped bullet lists of section 4: (group label, items).
const TOOL_GROUPS: [(&str, &[&str]); 4] = [
    (
        "Frontend Technologies:",
        &[
            "React with TypeScript for building user interfaces.",
            "Component-based architecture for modular development.",
            "Modern UI libraries for consistent design.",
        ],
    ),
    (
        "Backend & Database:",
        &[
            "Supabase for authentication, PostgreSQL database, and storage management.",
            "Structured relational database with defined foreign key relationships.",
        ],
    ),
    (
        "Security & Validation:",
        &[
            "Row Level Security (RLS) policies.",
            "Protected routes for role-based access.",
            "Input validation for forms.",
        ],
    ),
    (
        "Other Tools:",
        &[
            "Version control using Git.",
            "Deployment platform for hosting the web application.",
            "Testing tools for debugging and performance analysis.",
        ],
    ),
];

const TOOLS_CLOSING: &str = concat!(
    "The combination of these tools ensures that the system will be scalable, secure, and ",
    "maintainable. The modular structure allows future expansion, such as adding new events, ",
    "departments, or placement features without major code changes."
);

/// Join items into one paragraph text, one bullet-prefixed line per item.
pub fn bullet_lines(items: &[&str]) -> String {
    items
        .iter()
        .map(|item| format!("{} {}", BULLET, item))
        .collect::<Vec<_>>()
        .join("\n")
}

fn tool_groups_text() -> String {
    TOOL_GROUPS
        .iter()
        .map(|(label, items)| format!("{}\n{}", label, bullet_lines(items)))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Build the synopsis document.
///
/// Blocks are appended in a fixed order: centered title, spacer, then the
/// four sections. Only heading levels 1-3 and centered alignment are used.
pub fn synopsis() -> Result<Document> {
    let mut doc = Document::new();
    doc.metadata = Metadata {
        title: Some("College Event & Placement Management System - Synopsis".to_string()),
        subject: Some("Project synopsis".to_string()),
        creator: Some("synopsis".to_string()),
        revision: Some(1),
        ..Metadata::default()
    };

    doc.add_heading(TITLE, 1)?.set_alignment(Alignment::Center);
    doc.add_empty_paragraph();

    doc.add_heading(SECTION_HEADINGS[0], 2)?;
    for text in PROJECT_DEFINITION {
        doc.add_paragraph(text);
    }

    doc.add_heading(SECTION_HEADINGS[1], 2)?;
    for text in BACKGROUND_STUDY {
        doc.add_paragraph(text);
    }

    doc.add_heading(SECTION_HEADINGS[2], 2)?;
    doc.add_heading(WORK_PLAN_HEADINGS[0], 3)?;
    doc.add_paragraph(bullet_lines(&COMPLETED_WORK));
    doc.add_heading(WORK_PLAN_HEADINGS[1], 3)?;
    doc.add_paragraph(bullet_lines(&WORK_TO_BE_DONE));

    doc.add_heading(SECTION_HEADINGS[3], 2)?;
    doc.add_paragraph(TOOLS_INTRO);
    doc.add_paragraph(tool_groups_text());
    doc.add_paragraph(TOOLS_CLOSING);

    log::debug!("built synopsis with {} blocks", doc.len());
    Ok(doc)
}
