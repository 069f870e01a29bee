//! Mapping execution

use serde::Serialize;
use serde_json::{Map, Value};

use crate::{Entity, FieldRule, MappingError, MappingResult, MappingSpec};

/// What to do when a rule's source field is missing
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MissingField {
    /// Write `null` to the target field
    #[default]
    Null,
    /// Leave the target field out
    Skip,
    /// Fail with [`MappingError::MissingField`]
    Error,
}

/// Mapper configuration
#[derive(Clone, Debug)]
pub struct MapperConfig {
    /// Policy for missing source fields
    pub missing: MissingField,
    /// Whether a later rule may overwrite a target written by an earlier one
    pub allow_overwrite: bool,
}

impl Default for MapperConfig {
    fn default() -> Self {
        MapperConfig {
            missing: MissingField::Null,
            allow_overwrite: true,
        }
    }
}

/// Where a mapping reads its fields from
trait FieldSource {
    fn lookup(&self, name: &str) -> MappingResult<Option<Value>>;
}

impl FieldSource for Map<String, Value> {
    fn lookup(&self, name: &str) -> MappingResult<Option<Value>> {
        Ok(self.get(name).cloned())
    }
}

// Entity fields render through their JSON capability rather than a raw copy
impl<'e> FieldSource for dyn Entity + 'e {
    fn lookup(&self, name: &str) -> MappingResult<Option<Value>> {
        if !self.field_names().iter().any(|&listed| listed == name) {
            return Ok(None);
        }
        match self.field(name) {
            Some(field) => Ok(Some(field.to_json(name)?)),
            None => Ok(Some(Value::Null)),
        }
    }
}

/// Runs [`MappingSpec`]s against source records
#[derive(Clone, Debug, Default)]
pub struct Mapper {
    config: MapperConfig,
}

impl Mapper {
    /// Mapper running under `config`
    pub fn new(config: MapperConfig) -> Self {
        Mapper { config }
    }

    pub fn config(&self) -> &MapperConfig {
        &self.config
    }

    /// Map a JSON object
    pub fn map(&self, spec: &MappingSpec, source: &Map<String, Value>) -> MappingResult<Map<String, Value>> {
        self.run(spec, source)
    }

    /// Map a JSON value, which must be an object
    pub fn map_value(&self, spec: &MappingSpec, source: &Value) -> MappingResult<Value> {
        match source {
            Value::Object(fields) => self.run(spec, fields).map(Value::Object),
            other => Err(MappingError::NotAnObject {
                field: "<root>".to_string(),
                found: kind(other),
            }),
        }
    }

    /// Map an entity through its field list
    pub fn map_entity(&self, spec: &MappingSpec, entity: &dyn Entity) -> MappingResult<Map<String, Value>> {
        self.run(spec, entity)
    }

    /// Map any serializable record
    pub fn map_serializable<S: Serialize>(&self, spec: &MappingSpec, source: &S) -> MappingResult<Value> {
        let value = serde_json::to_value(source)?;
        self.map_value(spec, &value)
    }

    fn run<S>(&self, spec: &MappingSpec, source: &S) -> MappingResult<Map<String, Value>>
    where
        S: FieldSource + ?Sized,
    {
        let mut out = Map::new();

        for rule in spec.rules() {
            let target = rule.target();
            if !self.config.allow_overwrite && out.contains_key(target) {
                return Err(MappingError::DuplicateTarget(target.to_string()));
            }

            let Some(value) = source.lookup(rule.source())? else {
                match self.config.missing {
                    MissingField::Null => {
                        out.insert(target.to_string(), Value::Null);
                    }
                    MissingField::Skip => {
                        tracing::debug!(field = rule.source(), "skipping missing source field");
                    }
                    MissingField::Error => {
                        return Err(MappingError::MissingField(rule.source().to_string()));
                    }
                }
                continue;
            };

            let mapped = match rule {
                FieldRule::Copy(_) | FieldRule::Rename { .. } => value,
                FieldRule::Transform { f, .. } => f(&value),
                FieldRule::Nested { from, spec, .. } => match value {
                    Value::Object(fields) => Value::Object(self.run(spec, &fields)?),
                    // An absent nested record stays absent
                    Value::Null => Value::Null,
                    other => {
                        tracing::warn!(field = %from, "nested mapping source is not an object");
                        return Err(MappingError::NotAnObject {
                            field: from.clone(),
                            found: kind(&other),
                        });
                    }
                },
            };

            out.insert(target.to_string(), mapped);
        }

        Ok(out)
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
