//! One transition function per session stage.

use crate::domain::{
    AppError, DevContainerDocument, EditableField, ResolvedConfiguration, Stage, Template,
    catalog, parse_warnings, template_at,
};
use crate::ports::Prompter;

/// Advance a non-terminal stage by one step.
pub(super) fn advance<P: Prompter>(
    prompter: &P,
    stage: Stage,
    default_name: &str,
) -> Result<Stage, AppError> {
    match stage {
        Stage::CollectingName => collect_name(prompter, default_name),
        Stage::SelectingTemplate { name } => select_template(prompter, name),
        Stage::EnteringCustomImage { name, template } => {
            enter_custom_image(prompter, &name, template)
        }
        Stage::ReviewingFields { config, prefilled } => review_fields(prompter, config, prefilled),
        Stage::ConfirmingWrite(config) => confirm_write(prompter, config),
        terminal @ (Stage::Completed { .. } | Stage::Cancelled) => Ok(terminal),
    }
}

fn collect_name<P: Prompter>(prompter: &P, default_name: &str) -> Result<Stage, AppError> {
    let name = prompter.project_name(default_name)?;
    Ok(Stage::SelectingTemplate { name })
}

fn select_template<P: Prompter>(prompter: &P, name: String) -> Result<Stage, AppError> {
    let index = prompter.select_template(catalog())?;
    let template = template_at(index)?;

    if template.is_custom() {
        return Ok(Stage::EnteringCustomImage { name, template });
    }

    let config = ResolvedConfiguration::from_selection(&name, template, None)?;
    Ok(Stage::ReviewingFields { config, prefilled: true })
}

fn enter_custom_image<P: Prompter>(
    prompter: &P,
    name: &str,
    template: &Template,
) -> Result<Stage, AppError> {
    let image = prompter.custom_image()?;
    let config = ResolvedConfiguration::from_selection(name, template, Some(&image))?;
    Ok(Stage::ReviewingFields { config, prefilled: false })
}

fn review_fields<P: Prompter>(
    prompter: &P,
    mut config: ResolvedConfiguration,
    prefilled: bool,
) -> Result<Stage, AppError> {
    prompter.begin_review(prefilled);
    for field in EditableField::ALL {
        let value = prompter.edit_field(field, config.field(field))?;
        config.set_field(field, value);
    }
    Ok(Stage::ConfirmingWrite(config))
}

fn confirm_write<P: Prompter>(
    prompter: &P,
    mut config: ResolvedConfiguration,
) -> Result<Stage, AppError> {
    config.confirmed = prompter.confirm_write(&config)?;
    if !config.confirmed {
        return Ok(Stage::Cancelled);
    }

    Ok(Stage::Completed {
        document: DevContainerDocument::build(&config),
        warnings: parse_warnings(&config),
    })
}
