use serde::{Deserialize, Serialize};

/// Describes one entity type exposed by the remote service.
///
/// Field order is the remote's declared order and is preserved exactly —
/// it drives both form presentation and deterministic query emission.
/// The whole value is replaced on re-fetch, never partially mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityMeta {
    pub name: String,
    pub fields: Vec<FieldMeta>,
}

impl EntityMeta {
    /// Looks up a field by name.
    pub fn field(&self, name: &str) -> Option<&FieldMeta> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// The fields eligible for filter-based search, in declared order.
    pub fn searchable_fields(&self) -> impl Iterator<Item = &FieldMeta> {
        self.fields.iter().filter(|f| f.searchable)
    }
}

/// Schema description of one entity attribute.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldMeta {
    /// Field name, unique within an entity.
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Whether the field is eligible for filter-based queries.
    /// The remote emits this as `search`.
    #[serde(rename = "search", alias = "searchable", default)]
    pub searchable: bool,
}

impl FieldMeta {
    pub fn new(name: &str, field_type: FieldType, searchable: bool) -> Self {
        Self {
            name: name.into(),
            field_type,
            searchable,
        }
    }

    /// Shorthand for a string field.
    pub fn string(name: &str, searchable: bool) -> Self {
        Self::new(name, FieldType::String, searchable)
    }

    /// Shorthand for an integer field.
    pub fn integer(name: &str, searchable: bool) -> Self {
        Self::new(name, FieldType::Integer, searchable)
    }

    /// Shorthand for a float field.
    pub fn float(name: &str, searchable: bool) -> Self {
        Self::new(name, FieldType::Float, searchable)
    }

    /// Shorthand for a boolean field.
    pub fn boolean(name: &str, searchable: bool) -> Self {
        Self::new(name, FieldType::Boolean, searchable)
    }

    /// Shorthand for a date field.
    pub fn date(name: &str, searchable: bool) -> Self {
        Self::new(name, FieldType::Date, searchable)
    }
}

/// The data type of an entity field.
///
/// Matches the remote schema's type names (`"string"`, `"integer"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    String,
    Integer,
    Float,
    Boolean,
    Date,
}

/// The full metadata payload: every entity type the remote exposes.
///
/// Wire shape: `{"entities": [{"name": ..., "fields": [...]}, ...]}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EntityCatalog {
    pub entities: Vec<EntityMeta>,
}

impl EntityCatalog {
    /// Looks up one entity type by name.
    pub fn entity(&self, name: &str) -> Option<&EntityMeta> {
        self.entities.iter().find(|e| e.name == name)
    }

    /// Names of all exposed entity types, in declared order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entities.iter().map(|e| e.name.as_str())
    }
}
