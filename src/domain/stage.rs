use super::{DevContainerDocument, ResolvedConfiguration, Template};

/// Position of a generation session in its linear prompt sequence.
///
/// Sessions only move forward. `Completed` is the only state carrying a
/// document, so persistence cannot run from any other state. Its `warnings`
/// list optional fields that were dropped while parsing.
#[derive(Debug, Clone, PartialEq)]
pub enum Stage {
    CollectingName,
    SelectingTemplate { name: String },
    EnteringCustomImage { name: String, template: &'static Template },
    ReviewingFields { config: ResolvedConfiguration, prefilled: bool },
    ConfirmingWrite(ResolvedConfiguration),
    Completed { document: DevContainerDocument, warnings: Vec<String> },
    Cancelled,
}

