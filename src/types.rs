/// Unique document identifier (UUIDv4-formatted random token).
/// Example: `6e0c4d38-9f3a-4e6f-9d1c-2b8f0a6f3e71`
pub type DocumentId = String;
/// Name attached to one nested object within a document.
/// Example: `1d9f5a02-7c44-4b1b-8d6e-0f3a9c21e5b7`
pub type ObjectName = String;
/// Filename of one entry inside an archive container.
/// Example: `6e0c4d38-9f3a-4e6f-9d1c-2b8f0a6f3e71.xml`
pub type EntryName = String;
