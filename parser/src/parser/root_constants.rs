use super::*;

impl<'s> Parser<'s> {
    /// Parse a `RootConstants(...)` declaration
    pub(crate) fn parse_root_constants(&mut self) -> ParseResult<v1_1::RootParameter> {
        self.expect_keyword(Keyword::RootConstants)?;
        self.expect(Token::LeftParen)?;

        let mut constants = RootConstants {
            shader_register: 0,
            register_space: 0,
            num_32bit_values: 0,
        };
        let mut shader_visibility = ShaderVisibility::default();

        let mut seen_num_constants = false;
        let mut seen_register = false;
        let mut seen_space = false;
        let mut seen_visibility = false;

        let close = loop {
            let token = self.peek();
            match token.token {
                Token::Keyword(Keyword::Num32BitConstants) => {
                    mark_parameter(&mut seen_num_constants, "num32BitConstants", &token)?;
                    constants.num_32bit_values =
                        self.parse_uint_parameter(Keyword::Num32BitConstants)?;
                }
                Token::Register(RegisterSlot::B(_)) => {
                    mark_parameter(&mut seen_register, "cbuffer register b#", &token)?;
                    constants.shader_register = self.parse_register(RegisterType::B)?;
                }
                Token::Keyword(Keyword::Space) => {
                    mark_parameter(&mut seen_space, "space", &token)?;
                    constants.register_space = self.parse_space()?;
                }
                Token::Keyword(Keyword::Visibility) => {
                    mark_parameter(&mut seen_visibility, "visibility", &token)?;
                    shader_visibility = self.parse_visibility()?;
                }
                _ => return Err(ParseError::unexpected_token(&token)),
            }

            if let Some(close) = self.parameter_separator()? {
                break close;
            }
        };

        require_parameter(
            seen_num_constants,
            RequiredParameter::Num32BitConstants,
            &close,
        )?;
        require_parameter(
            seen_register,
            RequiredParameter::ConstantBufferRegister,
            &close,
        )?;

        Ok(v1_1::RootParameter {
            kind: v1_1::RootParameterKind::Constants(constants),
            shader_visibility,
        })
    }
}

#[test]
fn test_root_constants() {
    use test_support::*;
    let root_constants = ParserTester::new(|p| p.parse_root_constants());

    root_constants.check(
        "RootConstants(num32BitConstants=3, b2)",
        v1_1::RootParameter {
            kind: v1_1::RootParameterKind::Constants(RootConstants {
                shader_register: 2,
                register_space: 0,
                num_32bit_values: 3,
            }),
            shader_visibility: ShaderVisibility::All,
        },
    );

    root_constants.check(
        "RootConstants(visibility=SHADER_VISIBILITY_HULL, space=7, b0, num32BitConstants=16)",
        v1_1::RootParameter {
            kind: v1_1::RootParameterKind::Constants(RootConstants {
                shader_register: 0,
                register_space: 7,
                num_32bit_values: 16,
            }),
            shader_visibility: ShaderVisibility::Hull,
        },
    );

    root_constants.expect_fail(
        "RootConstants(b0)",
        ParseErrorReason::MissingParameter(RequiredParameter::Num32BitConstants),
        16,
    );
    root_constants.expect_fail(
        "RootConstants(num32BitConstants=1)",
        ParseErrorReason::MissingParameter(RequiredParameter::ConstantBufferRegister),
        33,
    );
    root_constants.expect_fail(
        "RootConstants(num32BitConstants=1, b0, b1)",
        ParseErrorReason::DuplicateParameter("cbuffer register b#"),
        39,
    );
    root_constants.expect_fail(
        "RootConstants(num32BitConstants=1, t0)",
        ParseErrorReason::UnexpectedToken("t0".to_string()),
        35,
    );
    root_constants.expect_fail(
        "RootConstants()",
        ParseErrorReason::UnexpectedToken(")".to_string()),
        14,
    );
    root_constants.expect_fail(
        "RootConstants(num32BitConstants=1, b0,)",
        ParseErrorReason::UnexpectedToken(")".to_string()),
        38,
    );
    root_constants.expect_fail(
        "RootConstants(num32BitConstants=1 b0)",
        ParseErrorReason::UnexpectedToken("b0".to_string()),
        34,
    );
    root_constants.expect_fail(
        "RootConstants(num32BitConstants=1, b0",
        ParseErrorReason::UnexpectedToken("".to_string()),
        37,
    );
}
