use super::Error;

/// Error when a relation field names a target model that is not part of the
/// schema.
#[derive(Debug)]
pub(super) struct RelationTargetNotFound {
    model: Box<str>,
    field: Box<str>,
    target: Box<str>,
}

impl std::error::Error for RelationTargetNotFound {}

impl core::fmt::Display for RelationTargetNotFound {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "field `{}.{}` references model `{}`, which does not exist in the schema",
            self.model, self.field, self.target
        )
    }
}

impl Error {
    /// Creates a relation-target-not-found error.
    pub fn relation_target_not_found(
        model: impl Into<String>,
        field: impl Into<String>,
        target: impl Into<String>,
    ) -> Error {
        Error::from(super::ErrorKind::RelationTargetNotFound(
            RelationTargetNotFound {
                model: model.into().into(),
                field: field.into().into(),
                target: target.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is a relation-target-not-found error.
    pub fn is_relation_target_not_found(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::RelationTargetNotFound(_)))
    }
}
