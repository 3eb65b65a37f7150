/// One side of a declared association.
#[derive(Debug, Clone)]
pub struct Relation {
    /// Name of the model this field points at, as declared. It is only
    /// resolved against the schema when relations are resolved.
    pub target: String,

    /// Name shared by the two fields describing the same association
    pub name: String,

    /// Set only on the side that owns the foreign key
    pub foreign_key: Option<ForeignKey>,

    /// Action taken when the referenced row is deleted
    pub on_delete: Option<ReferentialAction>,

    /// Action taken when the referenced key is updated
    pub on_update: Option<ReferentialAction>,
}

/// Local columns and the target columns they point at, position by position.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ForeignKey {
    pub columns: Vec<String>,
    pub references: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReferentialAction {
    Cascade,
    Restrict,
    NoAction,
    SetNull,
    SetDefault,
}

impl ForeignKey {
    pub fn new<C, R>(columns: C, references: R) -> ForeignKey
    where
        C: IntoIterator,
        C::Item: Into<String>,
        R: IntoIterator,
        R::Item: Into<String>,
    {
        ForeignKey {
            columns: columns.into_iter().map(Into::into).collect(),
            references: references.into_iter().map(Into::into).collect(),
        }
    }
}
