use rootsig_desc::*;
use rootsig_lexer::Lexer;
use rootsig_text::tokens::*;
use rootsig_text::*;
use tracing::{debug, debug_span, trace};

/// Failure cases
mod errors;
pub use errors::{FlagFamily, ParseError, ParseErrorReason, RequiredParameter, ValueKind};
use errors::ParseResult;

/// Recursive descent parser over a single root signature string
///
/// The parser always builds a version 1.1 descriptor. The requested version only controls which syntax is accepted.
pub struct Parser<'s> {
    lexer: Lexer<'s>,
    version: RootSignatureVersion,
    compilation_flags: CompilationFlags,
}

impl<'s> Parser<'s> {
    /// Create a parser for a root signature string
    pub fn new(
        source: &'s str,
        base_location: SourceLocation,
        version: RootSignatureVersion,
        compilation_flags: CompilationFlags,
    ) -> Self {
        Parser {
            lexer: Lexer::new(source, base_location),
            version,
            compilation_flags,
        }
    }

    /// Consume the next token
    fn next(&mut self) -> LexToken<'s> {
        self.lexer.next_token()
    }

    /// Look at the next token without consuming it
    fn peek(&mut self) -> LexToken<'s> {
        self.lexer.peek_token()
    }

    /// Consume an exact token
    fn expect(&mut self, token: Token) -> ParseResult<LexToken<'s>> {
        let next = self.next();
        if next.token == token {
            Ok(next)
        } else {
            Err(ParseError::unexpected_token(&next))
        }
    }

    /// Consume an exact keyword
    fn expect_keyword(&mut self, keyword: Keyword) -> ParseResult<LexToken<'s>> {
        self.expect(Token::Keyword(keyword))
    }

    /// Consume a `name =` prefix of a sub-parameter
    fn expect_assignment(&mut self, keyword: Keyword) -> ParseResult<()> {
        self.expect_keyword(keyword)?;
        self.expect(Token::Equals)?;
        Ok(())
    }

    /// Consume the separator after a sub-parameter
    ///
    /// Returns the closing parenthesis if the sub-parameter list has ended.
    fn parameter_separator(&mut self) -> ParseResult<Option<LexToken<'s>>> {
        let token = self.next();
        match token.token {
            Token::RightParen => Ok(Some(token)),
            Token::Comma => Ok(None),
            _ => Err(ParseError::unexpected_token(&token)),
        }
    }

    /// Check if the parser is building a global root signature
    fn is_global(&self) -> bool {
        self.compilation_flags
            .contains(CompilationFlags::GLOBAL_ROOT_SIGNATURE)
    }

    /// Check if there is any remaining input
    pub fn at_end(&self) -> bool {
        self.lexer.at_end()
    }

    /// Parse the full comma separated list of declarations
    pub fn parse_declarations(&mut self) -> ParseResult<v1_1::RootSignatureDesc> {
        let mut desc = v1_1::RootSignatureDesc::default();
        let mut seen_flags = false;

        loop {
            let token = self.peek();
            match token.token {
                Token::Eof => break,
                Token::Keyword(Keyword::RootFlags) => {
                    if seen_flags {
                        return Err(ParseError::at(
                            ParseErrorReason::RootFlagsRedefined,
                            &token,
                        ));
                    }
                    desc.flags = self.parse_root_flags()?;
                    seen_flags = true;
                    trace!(flags = ?desc.flags, "root flags");
                }
                Token::Keyword(Keyword::RootConstants) => {
                    let parameter = self.parse_root_constants()?;
                    trace!(?parameter, "root constants");
                    desc.parameters.push(parameter);
                }
                Token::Keyword(Keyword::Cbv) => {
                    let parameter = self.parse_root_descriptor(RootDescriptorType::Cbv)?;
                    trace!(?parameter, "root descriptor");
                    desc.parameters.push(parameter);
                }
                Token::Keyword(Keyword::Srv) => {
                    let parameter = self.parse_root_descriptor(RootDescriptorType::Srv)?;
                    trace!(?parameter, "root descriptor");
                    desc.parameters.push(parameter);
                }
                Token::Keyword(Keyword::Uav) => {
                    let parameter = self.parse_root_descriptor(RootDescriptorType::Uav)?;
                    trace!(?parameter, "root descriptor");
                    desc.parameters.push(parameter);
                }
                Token::Keyword(Keyword::DescriptorTable) => {
                    let parameter = self.parse_descriptor_table()?;
                    trace!(?parameter, "descriptor table");
                    desc.parameters.push(parameter);
                }
                Token::Keyword(Keyword::StaticSampler) => {
                    let sampler = self.parse_static_sampler()?;
                    trace!(?sampler, "static sampler");
                    desc.static_samplers.push(sampler);
                }
                _ => {
                    return Err(ParseError::at(
                        ParseErrorReason::UnexpectedDeclaration(token.text.to_string()),
                        &token,
                    ))
                }
            }

            let separator = self.next();
            match separator.token {
                Token::Eof => break,
                Token::Comma => {}
                _ => {
                    return Err(ParseError::at(
                        ParseErrorReason::ExpectedComma(separator.text.to_string()),
                        &separator,
                    ))
                }
            }
        }

        Ok(desc)
    }
}

/// Record that a sub-parameter was seen, failing if it was already given
fn mark_parameter(seen: &mut bool, name: &'static str, token: &LexToken) -> ParseResult<()> {
    if *seen {
        return Err(ParseError::at(
            ParseErrorReason::DuplicateParameter(name),
            token,
        ));
    }
    *seen = true;
    Ok(())
}

/// Fail at the closing parenthesis of a declaration if a required sub-parameter was not seen
fn require_parameter(
    seen: bool,
    parameter: RequiredParameter,
    close: &LexToken,
) -> ParseResult<()> {
    if seen {
        Ok(())
    } else {
        Err(ParseError::at(
            ParseErrorReason::MissingParameter(parameter),
            close,
        ))
    }
}

// Implement parsing for flag lists
mod flags;

// Implement parsing for single values
mod values;

// Implement parsing for inline root constants
mod root_constants;

// Implement parsing for root descriptors and registers
mod descriptors;

// Implement parsing for descriptor tables and their ranges
mod tables;

// Implement parsing for static samplers
mod static_samplers;

#[cfg(test)]
mod test_support;

/// Parse a root signature string into a descriptor of the requested version
///
/// `base_location` is the location of the first byte of `source` and is used for error locations.
///
/// Panics if both the global and local compilation flags are set.
pub fn parse_root_signature(
    source: &str,
    base_location: SourceLocation,
    version: RootSignatureVersion,
    compilation_flags: CompilationFlags,
) -> Result<VersionedRootSignatureDesc, ParseError> {
    assert!(
        !compilation_flags.is_conflicting(),
        "global and local root signature modes can not both be set"
    );

    let span = debug_span!("parse_root_signature", %version, len = source.len());
    let _enter = span.enter();

    let mut parser = Parser::new(source, base_location, version, compilation_flags);
    let mut desc = match parser.parse_declarations() {
        Ok(desc) => desc,
        Err(err) => {
            debug!(error = %err.reason, "root signature failed to parse");
            return Err(err);
        }
    };

    if compilation_flags.contains(CompilationFlags::LOCAL_ROOT_SIGNATURE) {
        desc.flags |= RootSignatureFlags::LOCAL_ROOT_SIGNATURE;
    }

    debug!(
        parameters = desc.parameters.len(),
        static_samplers = desc.static_samplers.len(),
        "parsed root signature"
    );

    let desc = VersionedRootSignatureDesc::V1_1(desc);
    if version == desc.version() {
        return Ok(desc);
    }

    desc.convert(version).map_err(|err| {
        debug!(error = %err, "root signature failed to convert");
        ParseError {
            reason: ParseErrorReason::ConversionFailed(err),
            location: base_location,
            width: 0,
        }
    })
}

#[test]
fn test_declarations() {
    use test_support::*;
    let declarations = ParserTester::new(|p| p.parse_declarations());

    declarations.check("", v1_1::RootSignatureDesc::default());
    declarations.check("   ", v1_1::RootSignatureDesc::default());

    declarations.check(
        "RootFlags(ALLOW_STREAM_OUTPUT), CBV(b0), StaticSampler(s1),",
        v1_1::RootSignatureDesc {
            flags: RootSignatureFlags::ALLOW_STREAM_OUTPUT,
            parameters: vec![v1_1::RootParameter {
                kind: v1_1::RootParameterKind::Descriptor(
                    RootDescriptorType::Cbv,
                    v1_1::RootDescriptor {
                        shader_register: 0,
                        register_space: 0,
                        flags: RootDescriptorFlags::empty(),
                    },
                ),
                shader_visibility: ShaderVisibility::All,
            }],
            static_samplers: vec![StaticSampler::new(1)],
        },
    );

    declarations.expect_fail(
        "CBV(b0) SRV(t0)",
        ParseErrorReason::ExpectedComma("SRV".to_string()),
        8,
    );
    declarations.expect_fail(
        "CBV(b0), Buffer(t0)",
        ParseErrorReason::UnexpectedDeclaration("Buffer".to_string()),
        9,
    );
    declarations.expect_fail(
        "CBV(b0),,",
        ParseErrorReason::UnexpectedDeclaration(",".to_string()),
        8,
    );
    declarations.expect_fail(
        "RootFlags(0), RootFlags(0)",
        ParseErrorReason::RootFlagsRedefined,
        14,
    );
    declarations.expect_fail(
        "SRV(t0)\n",
        ParseErrorReason::ExpectedComma("\n".to_string()),
        7,
    );
}

#[test]
fn test_parse_root_signature() {
    let parse = |source: &str, version, flags| {
        parse_root_signature(source, SourceLocation::first(), version, flags)
    };

    let desc = parse(
        "UAV(u1, flags=DATA_VOLATILE)",
        RootSignatureVersion::V1_1,
        CompilationFlags::empty(),
    )
    .unwrap();
    assert_eq!(desc.version(), RootSignatureVersion::V1_1);
    assert_eq!(desc.parameter_count(), 1);

    // Version 1.0 output has no flags on descriptors
    let desc = parse(
        "UAV(u1), DescriptorTable(Sampler(s0))",
        RootSignatureVersion::V1_0,
        CompilationFlags::empty(),
    )
    .unwrap();
    match desc {
        VersionedRootSignatureDesc::V1_0(desc) => {
            assert_eq!(desc.parameters.len(), 2);
            assert_eq!(
                desc.parameters[0].kind,
                v1_0::RootParameterKind::Descriptor(
                    RootDescriptorType::Uav,
                    v1_0::RootDescriptor {
                        shader_register: 1,
                        register_space: 0,
                    }
                )
            );
        }
        other => panic!("expected 1.0 descriptor: {:?}", other),
    }

    // Local mode always sets the local flag
    let desc = parse(
        "",
        RootSignatureVersion::V1_1,
        CompilationFlags::LOCAL_ROOT_SIGNATURE,
    )
    .unwrap();
    assert_eq!(desc.flags(), RootSignatureFlags::LOCAL_ROOT_SIGNATURE);

    let err = parse(
        "CBV(b0, flags=DATA_STATIC)",
        RootSignatureVersion::V1_0,
        CompilationFlags::empty(),
    )
    .unwrap_err();
    assert_eq!(
        err.reason,
        ParseErrorReason::FlagsNotSupported(FlagFamily::RootDescriptor, RootSignatureVersion::V1_0)
    );
    assert_eq!(err.location, SourceLocation::first().offset(8));
    assert_eq!(err.width, 5);
}

#[test]
#[should_panic]
fn test_parse_root_signature_conflicting_modes() {
    let _ = parse_root_signature(
        "",
        SourceLocation::first(),
        RootSignatureVersion::V1_1,
        CompilationFlags::GLOBAL_ROOT_SIGNATURE | CompilationFlags::LOCAL_ROOT_SIGNATURE,
    );
}
