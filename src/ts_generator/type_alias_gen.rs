use crate::parser::{ClassInfo, FieldInfo};
use crate::type_mapper::TypeMapper;

/// Renders a class as `export type Name = { ... }`.
pub struct TypeAliasGenerator<'a> {
    type_mapper: &'a TypeMapper,
}

impl<'a> TypeAliasGenerator<'a> {
    pub fn new(type_mapper: &'a TypeMapper) -> Self {
        Self { type_mapper }
    }

    pub fn generate(&self, class: &ClassInfo) -> String {
        let mut lines = Vec::with_capacity(class.fields.len() + 2);
        lines.push(format!("export type {} = {{", class.name));
        for field in &class.fields {
            lines.push(self.generate_field(field));
        }
        lines.push("}".to_string());
        lines.join("\n")
    }

    fn generate_field(&self, field: &FieldInfo) -> String {
        format!(
            "  {}{}: {}",
            field.name,
            if field.nullable { "?" } else { "" },
            self.type_mapper.map(&field.base_type)
        )
    }
}
