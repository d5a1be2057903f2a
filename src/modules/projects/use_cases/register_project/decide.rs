use crate::modules::projects::use_cases::register_project::{
    command::RegisterProject,
    decision::{DecideError, Decision},
};
use crate::shared::core::dictionary::Dictionaries;
use crate::shared::core::project::Project;

pub fn decide_register_project(dictionaries: &Dictionaries, command: RegisterProject) -> Decision {
    let project = Project {
        id: String::new(),
        name: command.name,
        level: command.level,
        details: command.details,
        project_type: command.project_type,
        sub_type: command.sub_type,
        stage: command.stage,
        platform: command.platform,
        start_time: command.start_time,
        attribute: command.attribute,
        department: command.department,
        owner: command.owner,
        contact: command.contact,
        created_by: command.created_by,
    };
    validate_project(dictionaries, project)
}

/// Checks a complete project record before it is written.
///
/// Text fields are trimmed. A sub type is required when the project's type has sub types in
/// `dictionaries`, and a blank one is dropped otherwise. Blank owners are ignored.
pub fn validate_project(dictionaries: &Dictionaries, mut project: Project) -> Decision {
    let required: [(&'static str, &mut String); 9] = [
        ("name", &mut project.name),
        ("department", &mut project.department),
        ("type", &mut project.project_type),
        ("attribute", &mut project.attribute),
        ("platform", &mut project.platform),
        ("level", &mut project.level),
        ("stage", &mut project.stage),
        ("startTime", &mut project.start_time),
        ("details", &mut project.details),
    ];
    for (field, value) in required {
        *value = value.trim().to_string();
        if value.is_empty() {
            return Decision::Rejected {
                reason: DecideError::MissingField(field),
            };
        }
    }

    project.sub_type = project
        .sub_type
        .map(|sub_type| sub_type.trim().to_string())
        .filter(|sub_type| !sub_type.is_empty());
    let needs_sub_type = dictionaries
        .types
        .iter()
        .find(|major| major.key == project.project_type || major.label == project.project_type)
        .is_some_and(|major| !major.sub_types.is_empty());
    if needs_sub_type && project.sub_type.is_none() {
        return Decision::Rejected {
            reason: DecideError::MissingSubType(project.project_type),
        };
    }

    project.owner = project
        .owner
        .into_iter()
        .map(|owner| owner.trim().to_string())
        .filter(|owner| !owner.is_empty())
        .collect();
    if project.owner.is_empty() {
        return Decision::Rejected {
            reason: DecideError::MissingOwner,
        };
    }
    project.contact = project.contact.trim().to_string();

    Decision::Accepted { project }
}
