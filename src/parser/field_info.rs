/// One `[JsonProperty]` field of a C# class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldInfo {
    /// JSON name from the attribute, not the C# property name.
    pub name: String,
    /// Type token as written, e.g. `string?`.
    pub source_type: String,
    /// `source_type` without the trailing `?`.
    pub base_type: String,
    pub nullable: bool,
}
