use super::*;

/// Flag sets which are written as a `|` separated list of keywords
trait FlagList: Copy + Default + std::ops::BitOrAssign {
    const FAMILY: FlagFamily;

    /// Get the flag a keyword names in this family
    fn from_keyword(keyword: Keyword) -> Option<Self>;
}

impl FlagList for RootSignatureFlags {
    const FAMILY: FlagFamily = FlagFamily::RootSignature;

    fn from_keyword(keyword: Keyword) -> Option<Self> {
        Some(match keyword {
            Keyword::AllowInputAssemblerInputLayout => {
                RootSignatureFlags::ALLOW_INPUT_ASSEMBLER_INPUT_LAYOUT
            }
            Keyword::DenyVertexShaderRootAccess => {
                RootSignatureFlags::DENY_VERTEX_SHADER_ROOT_ACCESS
            }
            Keyword::DenyHullShaderRootAccess => RootSignatureFlags::DENY_HULL_SHADER_ROOT_ACCESS,
            Keyword::DenyDomainShaderRootAccess => {
                RootSignatureFlags::DENY_DOMAIN_SHADER_ROOT_ACCESS
            }
            Keyword::DenyGeometryShaderRootAccess => {
                RootSignatureFlags::DENY_GEOMETRY_SHADER_ROOT_ACCESS
            }
            Keyword::DenyPixelShaderRootAccess => {
                RootSignatureFlags::DENY_PIXEL_SHADER_ROOT_ACCESS
            }
            Keyword::DenyAmplificationShaderRootAccess => {
                RootSignatureFlags::DENY_AMPLIFICATION_SHADER_ROOT_ACCESS
            }
            Keyword::DenyMeshShaderRootAccess => RootSignatureFlags::DENY_MESH_SHADER_ROOT_ACCESS,
            Keyword::AllowStreamOutput => RootSignatureFlags::ALLOW_STREAM_OUTPUT,
            Keyword::LocalRootSignature => RootSignatureFlags::LOCAL_ROOT_SIGNATURE,
            Keyword::CbvSrvUavHeapDirectlyIndexed => {
                RootSignatureFlags::CBV_SRV_UAV_HEAP_DIRECTLY_INDEXED
            }
            Keyword::SamplerHeapDirectlyIndexed => {
                RootSignatureFlags::SAMPLER_HEAP_DIRECTLY_INDEXED
            }
            _ => return None,
        })
    }
}

impl FlagList for RootDescriptorFlags {
    const FAMILY: FlagFamily = FlagFamily::RootDescriptor;

    fn from_keyword(keyword: Keyword) -> Option<Self> {
        Some(match keyword {
            Keyword::DataVolatile => RootDescriptorFlags::DATA_VOLATILE,
            Keyword::DataStatic => RootDescriptorFlags::DATA_STATIC,
            Keyword::DataStaticWhileSetAtExecute => {
                RootDescriptorFlags::DATA_STATIC_WHILE_SET_AT_EXECUTE
            }
            _ => return None,
        })
    }
}

impl FlagList for DescriptorRangeFlags {
    const FAMILY: FlagFamily = FlagFamily::DescriptorRange;

    fn from_keyword(keyword: Keyword) -> Option<Self> {
        Some(match keyword {
            Keyword::DescriptorsVolatile => DescriptorRangeFlags::DESCRIPTORS_VOLATILE,
            Keyword::DataVolatile => DescriptorRangeFlags::DATA_VOLATILE,
            Keyword::DataStatic => DescriptorRangeFlags::DATA_STATIC,
            Keyword::DataStaticWhileSetAtExecute => {
                DescriptorRangeFlags::DATA_STATIC_WHILE_SET_AT_EXECUTE
            }
            Keyword::DescriptorsStaticKeepingBufferBoundsChecks => {
                DescriptorRangeFlags::DESCRIPTORS_STATIC_KEEPING_BUFFER_BOUNDS_CHECKS
            }
            _ => return None,
        })
    }
}

/// Tokens which end a `flags=` sub-parameter
const PARAMETER_FLAGS_END: &[Token] = &[Token::RightParen, Token::Comma, Token::Eof];

impl<'s> Parser<'s> {
    /// Parse either a literal 0 or a list of flags
    ///
    /// The list ends before the first token in `terminators`.
    fn parse_flag_values<F: FlagList>(&mut self, terminators: &[Token]) -> ParseResult<F> {
        let mut flags = F::default();

        let token = self.peek();
        if let Token::LiteralUInt(value) = token.token {
            self.next();
            if value != 0 {
                return Err(ParseError::at(
                    ParseErrorReason::InvalidFlagNumber(F::FAMILY, token.text.to_string()),
                    &token,
                ));
            }
            return Ok(flags);
        }

        loop {
            let token = self.next();
            let flag = match token.token {
                Token::Keyword(keyword) => F::from_keyword(keyword),
                _ => None,
            };
            match flag {
                Some(_)
                    if token.token == Token::Keyword(Keyword::LocalRootSignature)
                        && self.is_global() =>
                {
                    return Err(ParseError::at(
                        ParseErrorReason::LocalFlagInGlobalRootSignature,
                        &token,
                    ))
                }
                Some(flag) => flags |= flag,
                None => {
                    return Err(ParseError::at(
                        ParseErrorReason::ExpectedFlag(F::FAMILY, token.text.to_string()),
                        &token,
                    ))
                }
            }

            if terminators.contains(&self.peek().token) {
                break;
            }
            self.expect(Token::VerticalBar)?;
        }

        Ok(flags)
    }

    /// Parse a `RootFlags(...)` declaration
    pub(crate) fn parse_root_flags(&mut self) -> ParseResult<RootSignatureFlags> {
        self.expect_keyword(Keyword::RootFlags)?;
        self.expect(Token::LeftParen)?;
        let flags = self.parse_flag_values(&[Token::RightParen])?;
        self.expect(Token::RightParen)?;
        Ok(flags)
    }

    /// Reject `flags=` if the target version has no flags of the given family
    fn check_flags_supported(&mut self, family: FlagFamily) -> ParseResult<()> {
        if self.version == RootSignatureVersion::V1_0 {
            let token = self.peek();
            return Err(ParseError::at(
                ParseErrorReason::FlagsNotSupported(family, self.version),
                &token,
            ));
        }
        Ok(())
    }

    /// Parse a `flags=` sub-parameter of a root descriptor
    pub(crate) fn parse_root_descriptor_flags(&mut self) -> ParseResult<RootDescriptorFlags> {
        self.check_flags_supported(FlagFamily::RootDescriptor)?;
        self.expect_assignment(Keyword::Flags)?;
        self.parse_flag_values(PARAMETER_FLAGS_END)
    }

    /// Parse a `flags=` sub-parameter of a descriptor range
    pub(crate) fn parse_descriptor_range_flags(&mut self) -> ParseResult<DescriptorRangeFlags> {
        self.check_flags_supported(FlagFamily::DescriptorRange)?;
        self.expect_assignment(Keyword::Flags)?;
        self.parse_flag_values(PARAMETER_FLAGS_END)
    }
}

#[test]
fn test_root_flags() {
    use test_support::*;
    let root_flags = ParserTester::new(|p| p.parse_root_flags());

    root_flags.check("RootFlags(0)", RootSignatureFlags::empty());
    root_flags.check(
        "RootFlags(ALLOW_INPUT_ASSEMBLER_INPUT_LAYOUT)",
        RootSignatureFlags::ALLOW_INPUT_ASSEMBLER_INPUT_LAYOUT,
    );
    root_flags.check(
        "rootflags( deny_vertex_shader_root_access|DENY_PIXEL_SHADER_ROOT_ACCESS | SAMPLER_HEAP_DIRECTLY_INDEXED )",
        RootSignatureFlags::DENY_VERTEX_SHADER_ROOT_ACCESS
            | RootSignatureFlags::DENY_PIXEL_SHADER_ROOT_ACCESS
            | RootSignatureFlags::SAMPLER_HEAP_DIRECTLY_INDEXED,
    );
    root_flags.check(
        "RootFlags(LOCAL_ROOT_SIGNATURE)",
        RootSignatureFlags::LOCAL_ROOT_SIGNATURE,
    );

    root_flags.expect_fail(
        "RootFlags(1)",
        ParseErrorReason::InvalidFlagNumber(FlagFamily::RootSignature, "1".to_string()),
        10,
    );
    root_flags.expect_fail(
        "RootFlags(DATA_STATIC)",
        ParseErrorReason::ExpectedFlag(FlagFamily::RootSignature, "DATA_STATIC".to_string()),
        10,
    );
    root_flags.expect_fail(
        "RootFlags()",
        ParseErrorReason::ExpectedFlag(FlagFamily::RootSignature, ")".to_string()),
        10,
    );
    root_flags.expect_fail(
        "RootFlags(ALLOW_STREAM_OUTPUT ALLOW_STREAM_OUTPUT)",
        ParseErrorReason::UnexpectedToken("ALLOW_STREAM_OUTPUT".to_string()),
        30,
    );
    root_flags.expect_fail(
        "RootFlags(0 | ALLOW_STREAM_OUTPUT)",
        ParseErrorReason::UnexpectedToken("|".to_string()),
        12,
    );

    let global_root_flags = ParserTester::new(|p| p.parse_root_flags())
        .compilation_flags(CompilationFlags::GLOBAL_ROOT_SIGNATURE);
    global_root_flags.check(
        "RootFlags(ALLOW_STREAM_OUTPUT)",
        RootSignatureFlags::ALLOW_STREAM_OUTPUT,
    );
    global_root_flags.expect_fail(
        "RootFlags(ALLOW_STREAM_OUTPUT | LOCAL_ROOT_SIGNATURE)",
        ParseErrorReason::LocalFlagInGlobalRootSignature,
        32,
    );
}

#[test]
fn test_root_descriptor_flags() {
    use test_support::*;
    let flags = ParserTester::new(|p| p.parse_root_descriptor_flags());

    flags.check("flags=0", RootDescriptorFlags::empty());
    flags.check("FLAGS = DATA_STATIC", RootDescriptorFlags::DATA_STATIC);
    flags.check(
        "flags=DATA_VOLATILE|DATA_STATIC_WHILE_SET_AT_EXECUTE",
        RootDescriptorFlags::DATA_VOLATILE | RootDescriptorFlags::DATA_STATIC_WHILE_SET_AT_EXECUTE,
    );

    flags.expect_fail(
        "flags=DESCRIPTORS_VOLATILE",
        ParseErrorReason::ExpectedFlag(
            FlagFamily::RootDescriptor,
            "DESCRIPTORS_VOLATILE".to_string(),
        ),
        6,
    );
    flags.expect_fail(
        "flags=8",
        ParseErrorReason::InvalidFlagNumber(FlagFamily::RootDescriptor, "8".to_string()),
        6,
    );
    flags.expect_fail(
        "flags=DATA_STATIC DATA_VOLATILE",
        ParseErrorReason::UnexpectedToken("DATA_VOLATILE".to_string()),
        18,
    );
    flags.expect_fail(
        "flags DATA_STATIC",
        ParseErrorReason::UnexpectedToken("DATA_STATIC".to_string()),
        6,
    );

    ParserTester::new(|p| p.parse_root_descriptor_flags())
        .version(RootSignatureVersion::V1_0)
        .expect_fail(
            "flags=0",
            ParseErrorReason::FlagsNotSupported(
                FlagFamily::RootDescriptor,
                RootSignatureVersion::V1_0,
            ),
            0,
        );
}

#[test]
fn test_descriptor_range_flags() {
    use test_support::*;
    let flags = ParserTester::new(|p| p.parse_descriptor_range_flags());

    flags.check("flags=0", DescriptorRangeFlags::empty());
    flags.check(
        "flags=DESCRIPTORS_VOLATILE | DATA_VOLATILE",
        DescriptorRangeFlags::DESCRIPTORS_VOLATILE | DescriptorRangeFlags::DATA_VOLATILE,
    );
    flags.check(
        "flags=DESCRIPTORS_STATIC_KEEPING_BUFFER_BOUNDS_CHECKS",
        DescriptorRangeFlags::DESCRIPTORS_STATIC_KEEPING_BUFFER_BOUNDS_CHECKS,
    );

    flags.expect_fail(
        "flags=ALLOW_STREAM_OUTPUT",
        ParseErrorReason::ExpectedFlag(
            FlagFamily::DescriptorRange,
            "ALLOW_STREAM_OUTPUT".to_string(),
        ),
        6,
    );

    ParserTester::new(|p| p.parse_descriptor_range_flags())
        .version(RootSignatureVersion::V1_0)
        .expect_fail(
            "flags=DATA_STATIC",
            ParseErrorReason::FlagsNotSupported(
                FlagFamily::DescriptorRange,
                RootSignatureVersion::V1_0,
            ),
            0,
        );
}
