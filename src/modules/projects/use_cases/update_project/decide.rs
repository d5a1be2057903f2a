use crate::modules::projects::use_cases::register_project::decide::validate_project;
use crate::modules::projects::use_cases::register_project::decision::Decision;
use crate::modules::projects::use_cases::update_project::command::UpdateProject;
use crate::shared::core::dictionary::Dictionaries;
use crate::shared::core::project::Project;

pub fn decide_update_project(
    dictionaries: &Dictionaries,
    stored: Project,
    command: UpdateProject,
) -> Decision {
    validate_project(dictionaries, command.apply(stored))
}

#[cfg(test)]
mod update_project_decide_tests {
    use super::*;
    use crate::modules::projects::use_cases::register_project::decision::DecideError;
    use crate::tests::fixtures::projects::ProjectBuilder;
    use rstest::{fixture, rstest};

    #[fixture]
    fn stored() -> Project {
        ProjectBuilder::new()
            .id("p_002")
            .name("Shopping festival UI refresh")
            .department("brand")
            .project_type("ui_design")
            .sub_type("iterative")
            .level("A")
            .attribute("routine")
            .platform("web")
            .details("Campaign pages")
            .build()
    }

    #[rstest]
    fn it_should_accept_a_reclassification(stored: Project) {
        let command = UpdateProject {
            id: "p_002".into(),
            project_type: Some("3d_modeling".into()),
            sub_type: Some(String::new()),
            ..UpdateProject::default()
        };
        match decide_update_project(&Dictionaries::default(), stored, command) {
            Decision::Accepted { project } => {
                assert_eq!(project.id, "p_002");
                assert_eq!(project.project_type, "3d_modeling");
                assert_eq!(project.sub_type, None);
            }
            Decision::Rejected { reason } => panic!("expected Accepted, got {reason}"),
        }
    }

    #[rstest]
    fn it_should_reject_clearing_a_required_sub_type(stored: Project) {
        let command = UpdateProject {
            id: "p_002".into(),
            sub_type: Some(String::new()),
            ..UpdateProject::default()
        };
        match decide_update_project(&Dictionaries::default(), stored, command) {
            Decision::Rejected { reason } => {
                assert_eq!(reason, DecideError::MissingSubType("ui_design".into()))
            }
            Decision::Accepted { .. } => panic!("expected Rejected"),
        }
    }
}
