pub mod class_info;
pub mod field_info;
pub mod patterns;

pub use class_info::ClassInfo;
pub use field_info::FieldInfo;

use anyhow::{Context, Result};
use log::{debug, trace};
use std::path::Path;

use crate::type_mapper::TypeMapper;
use self::patterns::{match_class_name, match_field_name, match_field_type, TypeToken};

/// Line cursor with one line of lookahead.
struct LineCursor<'a> {
    lines: Vec<&'a str>,
    pos: usize,
}

impl<'a> LineCursor<'a> {
    fn new(content: &'a str) -> Self {
        Self {
            lines: content.lines().collect(),
            pos: 0,
        }
    }

    fn next_line(&mut self) -> Option<(usize, &'a str)> {
        let line = *self.lines.get(self.pos)?;
        self.pos += 1;
        Some((self.pos, line))
    }

    fn peek(&self) -> Option<&'a str> {
        self.lines.get(self.pos).copied()
    }

    /// Consumes the peeked line.
    fn advance(&mut self) {
        self.pos += 1;
    }
}

#[derive(Debug, Default)]
enum AssemblerState {
    #[default]
    Idle,
    InClass { name: String, fields: Vec<FieldInfo> },
}

/// Accumulates fields into the current class and hands out finished classes.
///
/// Only classes with a name and at least one field are ever returned.
#[derive(Debug, Default)]
pub struct ClassAssembler {
    state: AssemblerState,
}

impl ClassAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new class, returning the previous one if it had fields.
    pub fn start_class(&mut self, name: &str) -> Option<ClassInfo> {
        let previous = self.finish();
        self.state = AssemblerState::InClass {
            name: name.to_string(),
            fields: Vec::new(),
        };
        previous
    }

    pub fn add_field(&mut self, field: FieldInfo) {
        match &mut self.state {
            AssemblerState::InClass { fields, .. } => fields.push(field),
            AssemblerState::Idle => debug!("Dropping field '{}' outside of any class", field.name),
        }
    }

    pub fn finish(&mut self) -> Option<ClassInfo> {
        match std::mem::take(&mut self.state) {
            AssemblerState::InClass { name, fields } if !name.is_empty() && !fields.is_empty() => {
                Some(ClassInfo { name, fields })
            }
            AssemblerState::InClass { name, .. } => {
                debug!("Dropping class '{}' without fields", name);
                None
            }
            AssemblerState::Idle => None,
        }
    }
}

/// Line-oriented extractor for `[JsonProperty]` data classes.
pub struct CsParser<'a> {
    type_mapper: &'a TypeMapper,
}

impl<'a> CsParser<'a> {
    pub fn new(type_mapper: &'a TypeMapper) -> Self {
        Self { type_mapper }
    }

    pub fn parse_file(&self, path: &Path) -> Result<Vec<ClassInfo>> {
        let bytes = std::fs::read(path).with_context(|| format!("Failed to read {:?}", path))?;
        // Windows-1252 sources decode lossily instead of failing
        let content = String::from_utf8_lossy(&bytes);
        Ok(self.parse_str(&content))
    }

    /// Never fails; lines that match nothing are skipped.
    pub fn parse_str(&self, content: &str) -> Vec<ClassInfo> {
        let mut cursor = LineCursor::new(content);
        let mut assembler = ClassAssembler::new();
        let mut classes = Vec::new();

        while let Some((line_no, line)) = cursor.next_line() {
            if let Some(class_name) = match_class_name(line) {
                trace!("line {}: class {}", line_no, class_name);
                classes.extend(assembler.start_class(class_name));
                continue;
            }

            let Some(field_name) = match_field_name(line) else {
                continue;
            };

            // An unmatched next line is left for the next iteration.
            match cursor.peek().and_then(match_field_type) {
                Some(token) => {
                    cursor.advance();
                    assembler.add_field(self.build_field(field_name, &token));
                }
                None => debug!(
                    "line {}: [JsonProperty(\"{}\")] is not followed by a property",
                    line_no, field_name
                ),
            }
        }

        classes.extend(assembler.finish());
        classes
    }

    fn build_field(&self, name: &str, token: &TypeToken<'_>) -> FieldInfo {
        FieldInfo {
            name: name.to_string(),
            source_type: token.source.to_string(),
            base_type: token.base.to_string(),
            nullable: self.type_mapper.is_nullable(token.base, token.explicit_nullable),
        }
    }
}
