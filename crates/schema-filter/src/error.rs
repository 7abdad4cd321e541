use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FilterError {
    /// A destination property has no counterpart on the generated schema.
    #[error("property {property:?} not found on generated schema")]
    MissingSourceProperty { property: String },

    #[error("property {property:?} rejected value: {reason}")]
    InvalidPropertyValue { property: String, reason: String },

    #[error("property {property:?} is not writable")]
    ReadOnlyProperty { property: String },

    #[error("{type_id} is already registered with underlying type {existing}, not {requested}")]
    ConflictingRegistration {
        type_id: String,
        existing: String,
        requested: String,
    },
}
