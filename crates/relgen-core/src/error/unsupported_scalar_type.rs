use super::Error;

/// Error when a field declares a scalar type name that has no mapping.
#[derive(Debug)]
pub(super) struct UnsupportedScalarType {
    model: Box<str>,
    field: Box<str>,
    ty: Box<str>,
}

impl std::error::Error for UnsupportedScalarType {}

impl core::fmt::Display for UnsupportedScalarType {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "unsupported scalar type `{}` on field `{}.{}`",
            self.ty, self.model, self.field
        )
    }
}

impl Error {
    /// Creates an unsupported scalar type error.
    pub fn unsupported_scalar_type(
        model: impl Into<String>,
        field: impl Into<String>,
        ty: impl Into<String>,
    ) -> Error {
        Error::from(super::ErrorKind::UnsupportedScalarType(
            UnsupportedScalarType {
                model: model.into().into(),
                field: field.into().into(),
                ty: ty.into().into(),
            },
        ))
    }

    /// Returns `true` if this error is an unsupported scalar type error.
    pub fn is_unsupported_scalar_type(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::UnsupportedScalarType(_)))
    }
}
