use super::ReferentialAction;

/// The normalized schema description handed over by the schema-loading
/// step, before validation.
#[derive(Debug, Clone, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct Definition {
    pub models: Vec<ModelDef>,

    #[cfg_attr(feature = "serde", serde(default))]
    pub enums: Vec<EnumDef>,
}

#[derive(Debug, Clone)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct ModelDef {
    pub name: String,

    #[cfg_attr(feature = "serde", serde(default))]
    pub table_name: Option<String>,

    pub fields: Vec<FieldDef>,
}

#[derive(Debug, Clone)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct FieldDef {
    pub name: String,

    /// Scalar type name, enum name, or target model name
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub ty: String,

    #[cfg_attr(feature = "serde", serde(default))]
    pub list: bool,

    #[cfg_attr(feature = "serde", serde(default = "required_by_default"))]
    pub required: bool,

    /// Explicit association attributes. A field whose type names a model is
    /// a relation even without them.
    #[cfg_attr(feature = "serde", serde(default))]
    pub relation: Option<RelationDef>,
}

#[derive(Debug, Clone, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct RelationDef {
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: Option<String>,

    /// Local foreign-key columns
    #[cfg_attr(feature = "serde", serde(default))]
    pub fields: Vec<String>,

    /// Columns on the target model the foreign key points at
    #[cfg_attr(feature = "serde", serde(default))]
    pub references: Vec<String>,

    #[cfg_attr(feature = "serde", serde(default))]
    pub on_delete: Option<ReferentialAction>,

    #[cfg_attr(feature = "serde", serde(default))]
    pub on_update: Option<ReferentialAction>,
}

#[derive(Debug, Clone)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct EnumDef {
    pub name: String,
    pub values: Vec<String>,
}

#[cfg(feature = "serde")]
fn required_by_default() -> bool {
    true
}
