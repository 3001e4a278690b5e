use super::*;

impl<'s> Parser<'s> {
    /// Parse a register and check it has the class the declaration requires
    pub(crate) fn parse_register(&mut self, expected: RegisterType) -> ParseResult<u32> {
        let token = self.next();
        let slot = match token.token {
            Token::Register(slot) => slot,
            _ => {
                return Err(ParseError::at(
                    ParseErrorReason::ExpectedRegister(token.text.to_string()),
                    &token,
                ))
            }
        };

        if slot.register_type() != expected {
            return Err(ParseError::at(
                ParseErrorReason::IncorrectRegisterType(token.text.to_string(), expected),
                &token,
            ));
        }

        Ok(slot.index())
    }

    /// Parse a `CBV(...)`, `SRV(...)`, or `UAV(...)` root descriptor declaration
    pub(crate) fn parse_root_descriptor(
        &mut self,
        descriptor_type: RootDescriptorType,
    ) -> ParseResult<v1_1::RootParameter> {
        let (keyword, register_type) = match descriptor_type {
            RootDescriptorType::Cbv => (Keyword::Cbv, RegisterType::B),
            RootDescriptorType::Srv => (Keyword::Srv, RegisterType::T),
            RootDescriptorType::Uav => (Keyword::Uav, RegisterType::U),
        };

        self.expect_keyword(keyword)?;
        self.expect(Token::LeftParen)?;

        let mut descriptor = v1_1::RootDescriptor {
            shader_register: 0,
            register_space: 0,
            flags: RootDescriptorFlags::empty(),
        };
        let mut shader_visibility = ShaderVisibility::default();

        let mut seen_register = false;
        let mut seen_flags = false;
        let mut seen_space = false;
        let mut seen_visibility = false;

        let close = loop {
            let token = self.peek();
            match token.token {
                Token::Register(RegisterSlot::B(_) | RegisterSlot::T(_) | RegisterSlot::U(_)) => {
                    mark_parameter(&mut seen_register, "shader register", &token)?;
                    descriptor.shader_register = self.parse_register(register_type)?;
                }
                Token::Keyword(Keyword::Flags) => {
                    mark_parameter(&mut seen_flags, "flags", &token)?;
                    descriptor.flags = self.parse_root_descriptor_flags()?;
                }
                Token::Keyword(Keyword::Space) => {
                    mark_parameter(&mut seen_space, "space", &token)?;
                    descriptor.register_space = self.parse_space()?;
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

        require_parameter(seen_register, RequiredParameter::ShaderRegister, &close)?;

        Ok(v1_1::RootParameter {
            kind: v1_1::RootParameterKind::Descriptor(descriptor_type, descriptor),
            shader_visibility,
        })
    }
}

#[test]
fn test_register() {
    use test_support::*;
    let b_register = ParserTester::new(|p| p.parse_register(RegisterType::B));
    b_register.check("b0", 0);
    b_register.check("b4294967295", u32::MAX);
    b_register.expect_fail(
        "t0",
        ParseErrorReason::IncorrectRegisterType("t0".to_string(), RegisterType::B),
        0,
    );
    b_register.expect_fail(
        "B0",
        ParseErrorReason::ExpectedRegister("B0".to_string()),
        0,
    );
    b_register.expect_fail(
        "b0x",
        ParseErrorReason::ExpectedRegister("b0x".to_string()),
        0,
    );
    b_register.expect_fail(
        "0",
        ParseErrorReason::ExpectedRegister("0".to_string()),
        0,
    );

    let s_register = ParserTester::new(|p| p.parse_register(RegisterType::S));
    s_register.check("s15", 15);
    s_register.expect_fail(
        "u1",
        ParseErrorReason::IncorrectRegisterType("u1".to_string(), RegisterType::S),
        0,
    );
}

#[test]
fn test_root_descriptor() {
    use test_support::*;
    let cbv = ParserTester::new(|p| p.parse_root_descriptor(RootDescriptorType::Cbv));
    let srv = ParserTester::new(|p| p.parse_root_descriptor(RootDescriptorType::Srv));
    let uav = ParserTester::new(|p| p.parse_root_descriptor(RootDescriptorType::Uav));

    let descriptor = |ty, shader_register, register_space, flags, shader_visibility| {
        v1_1::RootParameter {
            kind: v1_1::RootParameterKind::Descriptor(
                ty,
                v1_1::RootDescriptor {
                    shader_register,
                    register_space,
                    flags,
                },
            ),
            shader_visibility,
        }
    };

    cbv.check(
        "CBV(b0)",
        descriptor(
            RootDescriptorType::Cbv,
            0,
            0,
            RootDescriptorFlags::empty(),
            ShaderVisibility::All,
        ),
    );
    srv.check(
        "SRV(t3, space=1, flags=DATA_STATIC, visibility=SHADER_VISIBILITY_GEOMETRY)",
        descriptor(
            RootDescriptorType::Srv,
            3,
            1,
            RootDescriptorFlags::DATA_STATIC,
            ShaderVisibility::Geometry,
        ),
    );
    uav.check(
        "uav(flags = DATA_VOLATILE | DATA_STATIC_WHILE_SET_AT_EXECUTE, u9)",
        descriptor(
            RootDescriptorType::Uav,
            9,
            0,
            RootDescriptorFlags::DATA_VOLATILE
                | RootDescriptorFlags::DATA_STATIC_WHILE_SET_AT_EXECUTE,
            ShaderVisibility::All,
        ),
    );

    cbv.expect_fail(
        "CBV(b0, space=0, space=1)",
        ParseErrorReason::DuplicateParameter("space"),
        17,
    );
    cbv.expect_fail(
        "CBV(b0, b1)",
        ParseErrorReason::DuplicateParameter("shader register"),
        8,
    );
    cbv.expect_fail(
        "CBV(t0)",
        ParseErrorReason::IncorrectRegisterType("t0".to_string(), RegisterType::B),
        4,
    );
    srv.expect_fail(
        "SRV(b0)",
        ParseErrorReason::IncorrectRegisterType("b0".to_string(), RegisterType::T),
        4,
    );
    uav.expect_fail(
        "UAV(t0)",
        ParseErrorReason::IncorrectRegisterType("t0".to_string(), RegisterType::U),
        4,
    );
    // Register suffixes must be all digits
    cbv.expect_fail(
        "CBV(b0x)",
        ParseErrorReason::UnexpectedToken("b0x".to_string()),
        4,
    );
    cbv.expect_fail(
        "CBV(s0)",
        ParseErrorReason::UnexpectedToken("s0".to_string()),
        4,
    );
    cbv.expect_fail(
        "CBV(space=2)",
        ParseErrorReason::MissingParameter(RequiredParameter::ShaderRegister),
        11,
    );
    cbv.expect_fail(
        "CBV(b0, flags=DATA_STATIC, flags=0)",
        ParseErrorReason::DuplicateParameter("flags"),
        27,
    );
    cbv.expect_fail(
        "CBV(b0, flags=DATA_STATIC",
        ParseErrorReason::UnexpectedToken("".to_string()),
        25,
    );
    cbv.expect_fail(
        "CBV(b0, numDescriptors=1)",
        ParseErrorReason::UnexpectedToken("numDescriptors".to_string()),
        8,
    );

    ParserTester::new(|p| p.parse_root_descriptor(RootDescriptorType::Cbv))
        .version(RootSignatureVersion::V1_0)
        .expect_fail(
            "CBV(b0, flags=DATA_STATIC)",
            ParseErrorReason::FlagsNotSupported(
                FlagFamily::RootDescriptor,
                RootSignatureVersion::V1_0,
            ),
            8,
        );
}
