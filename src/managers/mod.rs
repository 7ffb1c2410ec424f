// Domain Vault managers
// Validation and store dispatch for the two entity types, plus the modal
// form state machine.

pub mod domain_manager;
pub mod form_controller;
pub mod provider_manager;
