use thiserror::Error;

/// Errors returned by singleton registry operations.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum RegistryError {
    #[error("Failed to acquire registry lock")]
    RegistryLock,

    #[error("Type mismatch in registry for type: {type_name}")]
    TypeMismatch { type_name: &'static str },

    #[error("Type not found in registry: {type_name}")]
    TypeNotFound { type_name: &'static str },

    /// A strict construction was attempted for a type that already has an instance.
    #[error("{type_name} is already instantiated, use get_or_create() instead")]
    AlreadyInstantiated { type_name: &'static str },
}
