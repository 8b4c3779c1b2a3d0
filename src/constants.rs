/// Constants governing randomized document shape.
pub mod document {
    /// Inclusive lower bound for the `level` field.
    pub const LEVEL_MIN: u32 = 1;
    /// Inclusive upper bound for the `level` field.
    pub const LEVEL_MAX: u32 = 100;
    /// Inclusive lower bound for the number of nested objects.
    pub const OBJECTS_MIN: usize = 1;
    /// Inclusive upper bound for the number of nested objects.
    pub const OBJECTS_MAX: usize = 10;
}

/// Constants for the XML wire shape of a serialized document.
pub mod xml {
    /// Root element wrapping one document.
    pub const TAG_ROOT: &str = "root";
    /// Scalar field element (`name`/`value` attribute pair).
    pub const TAG_VAR: &str = "var";
    /// Container element holding the nested objects.
    pub const TAG_OBJECTS: &str = "objects";
    /// One nested object element.
    pub const TAG_OBJECT: &str = "object";
    /// Attribute carrying a field or object name.
    pub const ATTR_NAME: &str = "name";
    /// Attribute carrying a scalar field value.
    pub const ATTR_VALUE: &str = "value";
    /// `var` name for the document identifier field.
    pub const FIELD_ID: &str = "id";
    /// `var` name for the document level field.
    pub const FIELD_LEVEL: &str = "level";
}

/// Constants for archive container layout and discovery.
pub mod archive {
    /// File extension for archive containers (without the dot).
    pub const ARCHIVE_EXTENSION: &str = "zip";
    /// File extension for document entries inside an archive (without the dot).
    pub const ENTRY_EXTENSION: &str = "xml";
}

/// Constants for flattened table output.
pub mod tables {
    /// Default filename for the summary table (one row per document).
    pub const SUMMARY_FILENAME: &str = "summary.csv";
    /// Default filename for the detail table (one row per object).
    pub const DETAIL_FILENAME: &str = "details.csv";
}
