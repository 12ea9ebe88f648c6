//! The search query builder — derives searchable fields from entity
//! metadata, holds current filter values, and emits the query string.

use crate::error::{QueryError, QueryResult};
use crate::format::{literal, FormatError};
use entpick_model::{EntityMeta, FieldType, FieldValue};
use tracing::debug;

/// One searchable field derived from metadata, with its current value.
///
/// Lifecycle: created when metadata loads, value mutated by user input,
/// replaced wholesale when metadata reloads.
#[derive(Debug, Clone)]
pub struct SearchField {
    name: String,
    field_type: FieldType,
    value: Option<FieldValue>,
}

impl SearchField {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn field_type(&self) -> FieldType {
        self.field_type
    }

    /// The current value, `None` until set.
    pub fn value(&self) -> Option<&FieldValue> {
        self.value.as_ref()
    }
}

/// Builds search queries for one entity type.
///
/// The builder starts uninitialized; [`initialize`](SearchQuery::initialize)
/// derives one [`SearchField`] per searchable metadata field and moves the
/// builder to the ready state. It stays reusable for the life of the
/// session — re-initializing replaces the whole field set.
///
/// Values are validated against the declared field type when set, so
/// [`build`](SearchQuery::build) cannot fail on a ready builder.
#[derive(Debug, Default)]
pub struct SearchQuery {
    meta: Option<EntityMeta>,
    fields: Vec<SearchField>,
}

impl SearchQuery {
    /// Creates an uninitialized builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Derives the searchable field set from entity metadata.
    ///
    /// Replaces any previous state: one field per metadata entry with
    /// `searchable == true`, in declared order, all values unset.
    pub fn initialize(&mut self, meta: EntityMeta) -> QueryResult<()> {
        if meta.name.is_empty() {
            return Err(QueryError::Metadata("entity has no name".to_string()));
        }
        self.fields = meta
            .searchable_fields()
            .map(|f| SearchField {
                name: f.name.clone(),
                field_type: f.field_type,
                value: None,
            })
            .collect();
        debug!(
            entity = %meta.name,
            fields = self.fields.len(),
            "derived searchable field set"
        );
        self.meta = Some(meta);
        Ok(())
    }

    /// Whether `initialize` has been called.
    pub fn is_initialized(&self) -> bool {
        self.meta.is_some()
    }

    /// The metadata under search, once initialized.
    pub fn meta(&self) -> Option<&EntityMeta> {
        self.meta.as_ref()
    }

    /// The entity name under search, once initialized.
    pub fn entity_name(&self) -> Option<&str> {
        self.meta.as_ref().map(|m| m.name.as_str())
    }

    /// The derived searchable fields, in metadata order.
    pub fn fields(&self) -> &[SearchField] {
        &self.fields
    }

    /// The current value of one field, `None` if unset or unknown.
    pub fn value(&self, field: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|f| f.name == field)
            .and_then(|f| f.value.as_ref())
    }

    /// Sets a field's filter value, overwriting any previous value.
    ///
    /// The value's shape is validated against the field's declared type
    /// here — not deferred to `build`.
    pub fn set_value(&mut self, field: &str, value: FieldValue) -> QueryResult<()> {
        let slot = self.field_mut(field)?;
        if !value.matches(slot.field_type) {
            return Err(FormatError::TypeMismatch {
                expected: slot.field_type,
                value,
            }
            .into());
        }
        slot.value = Some(value);
        Ok(())
    }

    /// Clears one field's filter value.
    pub fn clear(&mut self, field: &str) -> QueryResult<()> {
        self.field_mut(field)?.value = None;
        Ok(())
    }

    /// Clears every value without altering the field set.
    pub fn reset(&mut self) -> QueryResult<()> {
        if self.meta.is_none() {
            return Err(QueryError::NotInitialized);
        }
        for field in &mut self.fields {
            field.value = None;
        }
        Ok(())
    }

    /// Assembles the query string from the current state.
    ///
    /// Fields with unset or empty values are omitted; the `where` clause
    /// appears only when at least one filter survives. Iteration follows
    /// metadata order, so identical state yields byte-identical output.
    pub fn build(&self) -> QueryResult<String> {
        let meta = self.meta.as_ref().ok_or(QueryError::NotInitialized)?;
        let mut clauses = Vec::new();
        for field in &self.fields {
            let Some(value) = &field.value else { continue };
            if value.is_empty() {
                continue;
            }
            // values were validated at set_value time
            clauses.push(format!("{}={}", field.name, literal(value, field.field_type)?));
        }
        let mut query = format!("select * from {}", meta.name);
        if !clauses.is_empty() {
            query.push_str(" where ");
            query.push_str(&clauses.join(" and "));
        }
        query.push(';');
        debug!(entity = %meta.name, clauses = clauses.len(), "built search query");
        Ok(query)
    }

    fn field_mut(&mut self, name: &str) -> QueryResult<&mut SearchField> {
        if self.meta.is_none() {
            return Err(QueryError::NotInitialized);
        }
        self.fields
            .iter_mut()
            .find(|f| f.name == name)
            .ok_or_else(|| QueryError::UnknownField(name.to_string()))
    }
}
