//! Diagnostic message table.
//!
//! Keep `diagnostic_codes`, `diagnostic_messages` and `DIAGNOSTIC_MESSAGES`
//! in sync: every code has exactly one template.

use super::{DiagnosticCategory, DiagnosticMessage};

pub mod diagnostic_codes {
    pub const MARKER_VALUE_MUST_BE_AN_INTERFACE: u32 = 9001;
    pub const TYPE_MUST_IMPLEMENT_INTERFACE: u32 = 9002;
    pub const INTERFACE_DOES_NOT_HAVE_METHOD: u32 = 9003;
    pub const CIRCULAR_BASE_REFERENCE: u32 = 9004;
    pub const CANNOT_FIND_NAME: u32 = 9005;
    pub const IS_DECLARED_HERE: u32 = 9006;
}

pub mod diagnostic_messages {
    pub const MARKER_VALUE_MUST_BE_AN_INTERFACE: &str = "Value of @{0} must be an interface.";
    pub const TYPE_MUST_IMPLEMENT_INTERFACE: &str = "{0} must implement {1}.";
    pub const INTERFACE_DOES_NOT_HAVE_METHOD: &str = "{0} doesn't have \"{1}\" method.";
    pub const CIRCULAR_BASE_REFERENCE: &str =
        "Type '{0}' recursively references itself as a base type.";
    pub const CANNOT_FIND_NAME: &str = "Cannot find name '{0}'.";
    pub const IS_DECLARED_HERE: &str = "'{0}' is declared here.";
}

pub static DIAGNOSTIC_MESSAGES: &[DiagnosticMessage] = &[
    DiagnosticMessage {
        code: diagnostic_codes::MARKER_VALUE_MUST_BE_AN_INTERFACE,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::MARKER_VALUE_MUST_BE_AN_INTERFACE,
    },
    DiagnosticMessage {
        code: diagnostic_codes::TYPE_MUST_IMPLEMENT_INTERFACE,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::TYPE_MUST_IMPLEMENT_INTERFACE,
    },
    DiagnosticMessage {
        code: diagnostic_codes::INTERFACE_DOES_NOT_HAVE_METHOD,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::INTERFACE_DOES_NOT_HAVE_METHOD,
    },
    DiagnosticMessage {
        code: diagnostic_codes::CIRCULAR_BASE_REFERENCE,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::CIRCULAR_BASE_REFERENCE,
    },
    DiagnosticMessage {
        code: diagnostic_codes::CANNOT_FIND_NAME,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::CANNOT_FIND_NAME,
    },
    DiagnosticMessage {
        code: diagnostic_codes::IS_DECLARED_HERE,
        category: DiagnosticCategory::Message,
        message: diagnostic_messages::IS_DECLARED_HERE,
    },
];
