use std::collections::{HashMap, HashSet};

/// C# value types that are non-nullable unless written with `?`.
pub const DOTNET_VALUE_TYPES: &[&str] = &["bool", "int", "decimal", "double", "Guid", "DateTime"];

/// Decides nullability and the emitted TypeScript name for a C# base type.
#[derive(Debug, Clone)]
pub struct TypeMapper {
    value_types: HashSet<String>,
    mappings: HashMap<String, String>,
}

impl Default for TypeMapper {
    fn default() -> Self {
        Self::with_value_types(DOTNET_VALUE_TYPES.iter().map(|t| t.to_string()))
    }
}

impl TypeMapper {
    pub fn new(extra_value_types: &[String], custom_mappings: &HashMap<String, String>) -> Self {
        let mut mapper = Self::default();
        mapper.value_types.extend(extra_value_types.iter().cloned());
        mapper.mappings = custom_mappings.clone();
        mapper
    }

    /// Replaces the builtin value type set entirely.
    pub fn with_value_types<I>(value_types: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self {
            value_types: value_types.into_iter().collect(),
            mappings: HashMap::new(),
        }
    }

    pub fn is_value_type(&self, base_type: &str) -> bool {
        self.value_types.contains(base_type)
    }

    pub fn is_nullable(&self, base_type: &str, explicit_marker: bool) -> bool {
        explicit_marker || !self.is_value_type(base_type)
    }

    /// Name to emit for `base_type`. Unmapped types pass through verbatim.
    pub fn map<'a>(&'a self, base_type: &'a str) -> &'a str {
        self.mappings
            .get(base_type)
            .map(String::as_str)
            .unwrap_or(base_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_types_not_nullable_without_marker() {
        let mapper = TypeMapper::default();
        for name in DOTNET_VALUE_TYPES {
            assert!(!mapper.is_nullable(name, false), "{name} should not be nullable");
            assert!(mapper.is_nullable(name, true), "{name}? should be nullable");
        }
    }

    #[test]
    fn test_other_types_nullable() {
        let mapper = TypeMapper::default();
        assert!(mapper.is_nullable("string", false));
        assert!(mapper.is_nullable("CustomerAddress", false));
        assert!(mapper.is_nullable("List<int>", false));
        assert!(mapper.is_nullable("CustomerAddress", true));
    }

    #[test]
    fn test_case_sensitive() {
        let mapper = TypeMapper::default();
        assert!(mapper.is_nullable("Int", false));
        assert!(mapper.is_nullable("guid", false));
    }

    #[test]
    fn test_extra_value_types() {
        let mapper = TypeMapper::new(&["long".to_string()], &HashMap::new());
        assert!(!mapper.is_nullable("long", false));
        assert!(!mapper.is_nullable("int", false));
    }

    #[test]
    fn test_substituted_value_types() {
        let mapper = TypeMapper::with_value_types(["long".to_string()]);
        assert!(!mapper.is_nullable("long", false));
        assert!(mapper.is_nullable("int", false));
    }

    #[test]
    fn test_custom_type_mapping() {
        let mut custom = HashMap::new();
        custom.insert("Guid".to_string(), "string".to_string());
        let mapper = TypeMapper::new(&[], &custom);
        assert_eq!(mapper.map("Guid"), "string");
        assert_eq!(mapper.map("int"), "int");
        // renames do not affect nullability
        assert!(!mapper.is_nullable("Guid", false));
    }
}
