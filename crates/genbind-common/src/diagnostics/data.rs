use super::{DiagnosticCategory, DiagnosticMessage};

pub mod diagnostic_messages {
    pub const NOT_A_DIRECT_ANCESTOR: &str = "'{0}' does not directly extend or implement '{1}'. Either declare '{1}' directly on '{0}' or supply the binding for '{0}' explicitly.";
    pub const RESOLUTION_MUST_START_AT_INTERMEDIATE: &str = "'{1}' sits between '{0}' and '{2}'. Resolve the binding starting from '{1}', supply it explicitly for '{0}', or declare '{2}' directly on '{0}'.";
    pub const TYPE_ARGUMENT_IS_NOT_CONCRETE: &str = "Type argument {1} of '{2}' declared by '{0}' is '{3}', which is not a concrete type. Automatic inference is not possible; supply the binding for '{0}' explicitly.";
    pub const PARAMETER_INDEX_OUT_OF_RANGE: &str = "Parameter index {2} is out of range for '{1}' as declared by '{0}', which has {3} type argument(s).";
}

pub mod diagnostic_codes {
    pub const NOT_A_DIRECT_ANCESTOR: u32 = 9001;
    pub const RESOLUTION_MUST_START_AT_INTERMEDIATE: u32 = 9002;
    pub const TYPE_ARGUMENT_IS_NOT_CONCRETE: u32 = 9003;
    pub const PARAMETER_INDEX_OUT_OF_RANGE: u32 = 9004;
}

pub static DIAGNOSTIC_MESSAGES: &[DiagnosticMessage] = &[
    DiagnosticMessage {
        code: diagnostic_codes::NOT_A_DIRECT_ANCESTOR,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::NOT_A_DIRECT_ANCESTOR,
    },
    DiagnosticMessage {
        code: diagnostic_codes::RESOLUTION_MUST_START_AT_INTERMEDIATE,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::RESOLUTION_MUST_START_AT_INTERMEDIATE,
    },
    DiagnosticMessage {
        code: diagnostic_codes::TYPE_ARGUMENT_IS_NOT_CONCRETE,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::TYPE_ARGUMENT_IS_NOT_CONCRETE,
    },
    DiagnosticMessage {
        code: diagnostic_codes::PARAMETER_INDEX_OUT_OF_RANGE,
        category: DiagnosticCategory::Error,
        message: diagnostic_messages::PARAMETER_INDEX_OUT_OF_RANGE,
    },
];
