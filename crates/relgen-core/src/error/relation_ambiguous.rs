use super::Error;

/// Error when no side of an association can be chosen as the foreign-key
/// owner.
///
/// Raised when both sides are singular and neither declares foreign-key
/// columns, when both sides declare them, or when more than two fields
/// share one relation name.
#[derive(Debug)]
pub(super) struct RelationAmbiguous {
    conflict: Conflict,
}

#[derive(Debug)]
enum Conflict {
    /// The two sides of a pair cannot be told apart
    Owner {
        model: Box<str>,
        field: Box<str>,
        other: Box<str>,
    },

    /// The relation name groups more fields than a pair
    Participants {
        relation: Box<str>,
        fields: Box<[Box<str>]>,
    },
}

impl std::error::Error for RelationAmbiguous {}

impl core::fmt::Display for RelationAmbiguous {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match &self.conflict {
            Conflict::Owner {
                model,
                field,
                other,
            } => write!(
                f,
                "ambiguous relation: neither `{model}.{field}` nor `{other}` can be resolved as \
                 the foreign-key owner"
            ),
            Conflict::Participants { relation, fields } => {
                write!(
                    f,
                    "ambiguous relation: relation `{relation}` has more than two participants ("
                )?;

                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "`{field}`")?;
                }

                f.write_str(")")
            }
        }
    }
}

impl Error {
    /// Creates an ambiguous relation error.
    ///
    /// `other` is the fully qualified name (`Model.field`) of the
    /// conflicting sibling field.
    pub fn relation_ambiguous(
        model: impl Into<String>,
        field: impl Into<String>,
        other: impl Into<String>,
    ) -> Error {
        Error::from(super::ErrorKind::RelationAmbiguous(RelationAmbiguous {
            conflict: Conflict::Owner {
                model: model.into().into(),
                field: field.into().into(),
                other: other.into().into(),
            },
        }))
    }

    /// Creates an ambiguous relation error for a relation name shared by
    /// more than two fields.
    ///
    /// `fields` are the fully qualified names (`Model.field`) of every field
    /// using the name, in declaration order.
    pub fn relation_participants(
        relation: impl Into<String>,
        fields: impl IntoIterator<Item = impl Into<String>>,
    ) -> Error {
        Error::from(super::ErrorKind::RelationAmbiguous(RelationAmbiguous {
            conflict: Conflict::Participants {
                relation: relation.into().into(),
                fields: fields.into_iter().map(|field| field.into().into()).collect(),
            },
        }))
    }

    /// Returns `true` if this error is an ambiguous relation error.
    pub fn is_relation_ambiguous(&self) -> bool {
        self.any_kind(|kind| matches!(kind, super::ErrorKind::RelationAmbiguous(_)))
    }
}
