/// Events emitted by a singleton registry during operations.
///
/// These events are passed to the tracing callback set via `set_trace_callback`.
/// The `Clone` derive allows callbacks to store or forward events if needed.
///
/// # Examples
///
/// ```rust
/// use slepy::RegistryEvent;
///
/// let event = RegistryEvent::Create { type_name: "i32" };
/// assert_eq!(event.to_string(), "create { type_name: i32 }");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryEvent {
    /// A new instance was created and stored.
    Create {
        /// The type name of the created instance (e.g., "i32", "alloc::string::String")
        type_name: &'static str,
    },

    /// `get_or_create` returned an instance that already existed.
    Reuse {
        /// The type name of the reused instance
        type_name: &'static str,
    },

    /// A strict construction was refused because the type already had an instance.
    Rejected {
        /// The type name that was already instantiated
        type_name: &'static str,
    },

    /// An instance was requested without creating it.
    Get {
        /// The type name that was requested
        type_name: &'static str,
        /// Whether the instance existed
        found: bool,
    },

    /// A type existence check was performed.
    Contains {
        /// The type name that was checked
        type_name: &'static str,
        /// Whether an instance exists
        found: bool,
    },

    /// The registry was cleared.
    Clear {},
}

impl std::fmt::Display for RegistryEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryEvent::Create { type_name } => {
                write!(f, "create {{ type_name: {type_name} }}")
            }
            RegistryEvent::Reuse { type_name } => {
                write!(f, "reuse {{ type_name: {type_name} }}")
            }
            RegistryEvent::Rejected { type_name } => {
                write!(f, "rejected {{ type_name: {type_name} }}")
            }
            RegistryEvent::Get { type_name, found } => {
                write!(f, "get {{ type_name: {type_name}, found: {found} }}")
            }
            RegistryEvent::Contains { type_name, found } => {
                write!(f, "contains {{ type_name: {type_name}, found: {found} }}")
            }
            RegistryEvent::Clear {} => write!(f, "Clearing the Registry"),
        }
    }
}
