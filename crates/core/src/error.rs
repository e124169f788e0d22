/// Domain-level error type.
///
/// Variants stay precise even where the HTTP wire contract collapses them:
/// a malformed id and a missing row render identically to the caller, but the
/// api crate decides that, not this enum.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// One of the required issue fields is absent or blank.
    #[error("required field(s) missing")]
    MissingRequiredField,

    /// A client-supplied id is not a well-formed issue id.
    #[error("malformed issue id: {0}")]
    MalformedId(String),
}
