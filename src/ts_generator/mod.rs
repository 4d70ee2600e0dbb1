mod type_alias_gen;

pub use type_alias_gen::TypeAliasGenerator;

use anyhow::Context;
use crate::parser::ClassInfo;
use crate::type_mapper::TypeMapper;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Written,
    Unchanged,
}

/// Writes one `<ClassName>.<extension>` file per class into `output_dir`.
pub struct TsCodeGenerator<'a> {
    output_dir: PathBuf,
    extension: String,
    trailing_newline: bool,
    type_alias_gen: TypeAliasGenerator<'a>,
}

impl<'a> TsCodeGenerator<'a> {
    pub fn new(output_dir: &Path, type_mapper: &'a TypeMapper) -> Self {
        Self {
            output_dir: output_dir.to_path_buf(),
            extension: "ts".to_string(),
            trailing_newline: false,
            type_alias_gen: TypeAliasGenerator::new(type_mapper),
        }
    }

    pub fn with_extension(mut self, extension: &str) -> Self {
        self.extension = extension.trim_start_matches('.').to_string();
        self
    }

    pub fn with_trailing_newline(mut self, trailing_newline: bool) -> Self {
        self.trailing_newline = trailing_newline;
        self
    }

    pub fn output_path(&self, class: &ClassInfo) -> PathBuf {
        self.output_dir.join(format!("{}.{}", class.name, self.extension))
    }

    pub fn render(&self, class: &ClassInfo) -> String {
        let mut content = self.type_alias_gen.generate(class);
        if self.trailing_newline {
            content.push('\n');
        }
        content
    }

    /// Overwrites any existing file; identical content is left untouched.
    pub fn generate(&self, class: &ClassInfo) -> anyhow::Result<WriteOutcome> {
        let content = self.render(class);
        let path = self.output_path(class);

        let should_write = match std::fs::read_to_string(&path) {
            Ok(existing) => existing != content,
            Err(_) => true,
        };

        if !should_write {
            return Ok(WriteOutcome::Unchanged);
        }

        std::fs::write(&path, &content).with_context(|| format!("Failed to write {:?}", path))?;
        Ok(WriteOutcome::Written)
    }
}
