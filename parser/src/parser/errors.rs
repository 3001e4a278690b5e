use super::*;

/// Provides details on why a parse operation failed
#[derive(PartialEq, Debug, Clone)]
pub struct ParseError {
    pub reason: ParseErrorReason,

    /// Location of the token which caused the failure
    pub location: SourceLocation,

    /// Number of bytes of source to highlight
    pub width: u32,
}

impl ParseError {
    /// Make an error attached to a token
    pub fn at(reason: ParseErrorReason, token: &LexToken) -> Self {
        ParseError {
            reason,
            location: token.location,
            width: token.width(),
        }
    }

    /// Make an error which reports raw root signature text verbatim
    ///
    /// Used by hosts that have a root signature string but did not attempt to parse it.
    pub fn from_unparsed_text(text: &str, location: SourceLocation) -> Self {
        ParseError {
            reason: ParseErrorReason::Unparsed(text.to_string()),
            location,
            width: text.len() as u32,
        }
    }

    /// Make an error for a token that can not appear at the current position
    pub(crate) fn unexpected_token(token: &LexToken) -> Self {
        ParseError::at(
            ParseErrorReason::UnexpectedToken(token.text.to_string()),
            token,
        )
    }
}

impl CompileError for ParseError {
    fn print(&self, w: &mut MessagePrinter) -> std::fmt::Result {
        w.write_message(
            &|f| write!(f, "{}", self.reason),
            self.location,
            self.width,
            Severity::Error,
        )
    }
}

/// The family a list of flags belongs to
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum FlagFamily {
    RootSignature,
    RootDescriptor,
    DescriptorRange,
}

impl FlagFamily {
    fn name(&self) -> &'static str {
        match self {
            FlagFamily::RootSignature => "root signature",
            FlagFamily::RootDescriptor => "root descriptor",
            FlagFamily::DescriptorRange => "descriptor range",
        }
    }

    fn capitalized_name(&self) -> &'static str {
        match self {
            FlagFamily::RootSignature => "Root signature",
            FlagFamily::RootDescriptor => "Root descriptor",
            FlagFamily::DescriptorRange => "Descriptor range",
        }
    }
}

/// The kind of enumerated value being parsed
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum ValueKind {
    Visibility,
    Filter,
    TextureAddressMode,
    ComparisonFunction,
    BorderColor,
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ValueKind::Visibility => write!(f, "visibility"),
            ValueKind::Filter => write!(f, "filter"),
            ValueKind::TextureAddressMode => write!(f, "texture address mode"),
            ValueKind::ComparisonFunction => write!(f, "comparison function"),
            ValueKind::BorderColor => write!(f, "border color"),
        }
    }
}

/// A sub-parameter which must be present in a declaration
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum RequiredParameter {
    Num32BitConstants,
    ConstantBufferRegister,
    ShaderRegister,
    SamplerRegister,
}

/// The basic reason for a parse failure
#[derive(PartialEq, Debug, Clone)]
pub enum ParseErrorReason {
    /// Token is not valid at the current position
    UnexpectedToken(String),

    /// Token does not start a declaration
    UnexpectedDeclaration(String),

    /// Token after a declaration is not a comma or the end of the string
    ExpectedComma(String),

    /// `RootFlags` was declared twice
    RootFlagsRedefined,

    /// Sub-parameter was given more than once in a declaration
    DuplicateParameter(&'static str),

    /// Declaration was closed without a required sub-parameter
    MissingParameter(RequiredParameter),

    /// Numeric flag value other than 0
    InvalidFlagNumber(FlagFamily, String),

    /// Token is not a flag of the expected family
    ExpectedFlag(FlagFamily, String),

    /// Flags were given which the target version can not represent
    FlagsNotSupported(FlagFamily, RootSignatureVersion),

    /// `LOCAL_ROOT_SIGNATURE` was used while compiling a global root signature
    LocalFlagInGlobalRootSignature,

    /// Token is not a register
    ExpectedRegister(String),

    /// Register class does not match the declaration
    IncorrectRegisterType(String, RegisterType),

    /// Token is not a numeric literal
    ExpectedFloat(String),

    /// Keyword is not a value of the expected enumeration
    UnexpectedValue(ValueKind, String),

    /// Parsed descriptor could not be converted to the requested version
    ConversionFailed(ConversionError),

    /// Source text reported without parsing
    Unparsed(String),
}

impl std::fmt::Display for ParseErrorReason {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ParseErrorReason::UnexpectedToken(found) => write!(f, "Unexpected token '{}'", found),
            ParseErrorReason::UnexpectedDeclaration(found) => write!(
                f,
                "Unexpected token '{}' when parsing root signature",
                found
            ),
            ParseErrorReason::ExpectedComma(found) => write!(f, "Expected ',', found: '{}'", found),
            ParseErrorReason::RootFlagsRedefined => {
                write!(f, "RootFlags cannot be specified more than once")
            }
            ParseErrorReason::DuplicateParameter(name) => {
                write!(f, "Parameter '{}' can be specified only once", name)
            }
            ParseErrorReason::MissingParameter(RequiredParameter::Num32BitConstants) => {
                write!(f, "num32BitConstants must be defined for each RootConstants")
            }
            ParseErrorReason::MissingParameter(RequiredParameter::ConstantBufferRegister) => write!(
                f,
                "Constant buffer register b# must be defined for each RootConstants"
            ),
            ParseErrorReason::MissingParameter(RequiredParameter::ShaderRegister) => {
                write!(f, "shader register must be defined for each CBV/SRV/UAV")
            }
            ParseErrorReason::MissingParameter(RequiredParameter::SamplerRegister) => write!(
                f,
                "Sampler register s# must be defined for each static sampler"
            ),
            ParseErrorReason::InvalidFlagNumber(family, found) => write!(
                f,
                "{} flag values can only be 0 or flag enum values, found: '{}'",
                family.capitalized_name(),
                found
            ),
            ParseErrorReason::ExpectedFlag(family, found) => write!(
                f,
                "Expected a {} flag value, found: '{}'",
                family.name(),
                found
            ),
            ParseErrorReason::FlagsNotSupported(family, version) => write!(
                f,
                "{} flags cannot be specified for {}",
                family.capitalized_name(),
                version
            ),
            ParseErrorReason::LocalFlagInGlobalRootSignature => {
                write!(f, "LOCAL_ROOT_SIGNATURE flag used in global root signature")
            }
            ParseErrorReason::ExpectedRegister(found) => write!(
                f,
                "Expected a register token (CBV, SRV, UAV, Sampler), found: '{}'",
                found
            ),
            ParseErrorReason::IncorrectRegisterType(found, expected) => {
                let declaration = match expected {
                    RegisterType::B => "CBV",
                    RegisterType::T => "SRV",
                    RegisterType::U => "UAV",
                    RegisterType::S => "Sampler/StaticSampler",
                };
                write!(
                    f,
                    "Incorrect register type '{}' in {} (expected {}#)",
                    found, declaration, expected
                )
            }
            ParseErrorReason::ExpectedFloat(found) => {
                write!(f, "Expected float, found token '{}'", found)
            }
            ParseErrorReason::UnexpectedValue(kind, found) => {
                write!(f, "Unexpected {} value: '{}'.", kind, found)
            }
            ParseErrorReason::ConversionFailed(err) => write!(f, "{}", err),
            ParseErrorReason::Unparsed(text) => write!(f, "{}", text),
        }
    }
}

/// Result type for internal parse functions
pub type ParseResult<T> = Result<T, ParseError>;

#[test]
fn test_reason_messages() {
    let check = |reason: ParseErrorReason, expected: &str| assert_eq!(reason.to_string(), expected);

    check(
        ParseErrorReason::DuplicateParameter("space"),
        "Parameter 'space' can be specified only once",
    );
    check(
        ParseErrorReason::InvalidFlagNumber(FlagFamily::DescriptorRange, "2".to_string()),
        "Descriptor range flag values can only be 0 or flag enum values, found: '2'",
    );
    check(
        ParseErrorReason::ExpectedFlag(FlagFamily::RootDescriptor, "x".to_string()),
        "Expected a root descriptor flag value, found: 'x'",
    );
    check(
        ParseErrorReason::FlagsNotSupported(FlagFamily::RootDescriptor, RootSignatureVersion::V1_0),
        "Root descriptor flags cannot be specified for root_sig_1_0",
    );
    check(
        ParseErrorReason::IncorrectRegisterType("t0".to_string(), RegisterType::B),
        "Incorrect register type 't0' in CBV (expected b#)",
    );
    check(
        ParseErrorReason::IncorrectRegisterType("b0".to_string(), RegisterType::S),
        "Incorrect register type 'b0' in Sampler/StaticSampler (expected s#)",
    );
    check(
        ParseErrorReason::UnexpectedValue(ValueKind::TextureAddressMode, "X".to_string()),
        "Unexpected texture address mode value: 'X'.",
    );
}
