use super::*;

impl<'s> Parser<'s> {
    /// Parse a `DescriptorTable(...)` declaration
    pub(crate) fn parse_descriptor_table(&mut self) -> ParseResult<v1_1::RootParameter> {
        self.expect_keyword(Keyword::DescriptorTable)?;
        self.expect(Token::LeftParen)?;

        let mut table = v1_1::DescriptorTable::default();
        let mut shader_visibility = ShaderVisibility::default();
        let mut seen_visibility = false;

        loop {
            let token = self.peek();
            match token.token {
                Token::Keyword(Keyword::Cbv) => {
                    let range = self.parse_descriptor_range(DescriptorRangeType::Cbv)?;
                    table.ranges.push(range);
                }
                Token::Keyword(Keyword::Srv) => {
                    let range = self.parse_descriptor_range(DescriptorRangeType::Srv)?;
                    table.ranges.push(range);
                }
                Token::Keyword(Keyword::Uav) => {
                    let range = self.parse_descriptor_range(DescriptorRangeType::Uav)?;
                    table.ranges.push(range);
                }
                Token::Keyword(Keyword::Sampler) => {
                    let range = self.parse_descriptor_range(DescriptorRangeType::Sampler)?;
                    table.ranges.push(range);
                }
                Token::Keyword(Keyword::Visibility) => {
                    mark_parameter(&mut seen_visibility, "visibility", &token)?;
                    shader_visibility = self.parse_visibility()?;
                }
                _ => return Err(ParseError::unexpected_token(&token)),
            }

            if self.parameter_separator()?.is_some() {
                break;
            }
        }

        Ok(v1_1::RootParameter {
            kind: v1_1::RootParameterKind::DescriptorTable(table),
            shader_visibility,
        })
    }

    /// Parse a single range inside a descriptor table
    pub(crate) fn parse_descriptor_range(
        &mut self,
        range_type: DescriptorRangeType,
    ) -> ParseResult<v1_1::DescriptorRange> {
        let (keyword, register_type) = match range_type {
            DescriptorRangeType::Cbv => (Keyword::Cbv, RegisterType::B),
            DescriptorRangeType::Srv => (Keyword::Srv, RegisterType::T),
            DescriptorRangeType::Uav => (Keyword::Uav, RegisterType::U),
            DescriptorRangeType::Sampler => (Keyword::Sampler, RegisterType::S),
        };

        self.expect_keyword(keyword)?;
        self.expect(Token::LeftParen)?;

        let mut range = v1_1::DescriptorRange::new(range_type, 0);

        let mut seen_register = false;
        let mut seen_num_descriptors = false;
        let mut seen_space = false;
        let mut seen_flags = false;
        let mut seen_offset = false;

        let close = loop {
            let token = self.peek();
            match token.token {
                Token::Register(_) => {
                    mark_parameter(&mut seen_register, "shader register", &token)?;
                    range.base_shader_register = self.parse_register(register_type)?;
                }
                Token::Keyword(Keyword::NumDescriptors) => {
                    mark_parameter(&mut seen_num_descriptors, "numDescriptors", &token)?;
                    range.num_descriptors = self.parse_num_descriptors()?;
                }
                Token::Keyword(Keyword::Space) => {
                    mark_parameter(&mut seen_space, "space", &token)?;
                    range.register_space = self.parse_space()?;
                }
                Token::Keyword(Keyword::Flags) => {
                    mark_parameter(&mut seen_flags, "flags", &token)?;
                    range.flags = self.parse_descriptor_range_flags()?;
                }
                Token::Keyword(Keyword::Offset) => {
                    mark_parameter(&mut seen_offset, "offset", &token)?;
                    range.offset = self.parse_offset()?;
                }
                _ => return Err(ParseError::unexpected_token(&token)),
            }

            if let Some(close) = self.parameter_separator()? {
                break close;
            }
        };

        require_parameter(seen_register, RequiredParameter::ShaderRegister, &close)?;

        Ok(range)
    }
}

#[test]
fn test_descriptor_range() {
    use test_support::*;
    let srv = ParserTester::new(|p| p.parse_descriptor_range(DescriptorRangeType::Srv));
    let sampler = ParserTester::new(|p| p.parse_descriptor_range(DescriptorRangeType::Sampler));

    srv.check(
        "SRV(t2)",
        v1_1::DescriptorRange {
            range_type: DescriptorRangeType::Srv,
            num_descriptors: DescriptorCount::Bounded(1),
            base_shader_register: 2,
            register_space: 0,
            flags: DescriptorRangeFlags::empty(),
            offset: RangeOffset::Append,
        },
    );
    srv.check(
        "SRV(offset=4, numDescriptors=unbounded, t0, flags=DESCRIPTORS_VOLATILE, space=3)",
        v1_1::DescriptorRange {
            range_type: DescriptorRangeType::Srv,
            num_descriptors: DescriptorCount::Unbounded,
            base_shader_register: 0,
            register_space: 3,
            flags: DescriptorRangeFlags::DESCRIPTORS_VOLATILE,
            offset: RangeOffset::Explicit(4),
        },
    );
    sampler.check(
        "Sampler(s1, numDescriptors=8)",
        v1_1::DescriptorRange {
            range_type: DescriptorRangeType::Sampler,
            num_descriptors: DescriptorCount::Bounded(8),
            base_shader_register: 1,
            register_space: 0,
            flags: DescriptorRangeFlags::empty(),
            offset: RangeOffset::Append,
        },
    );

    srv.expect_fail(
        "SRV(s0)",
        ParseErrorReason::IncorrectRegisterType("s0".to_string(), RegisterType::T),
        4,
    );
    sampler.expect_fail(
        "Sampler(b0)",
        ParseErrorReason::IncorrectRegisterType("b0".to_string(), RegisterType::S),
        8,
    );
    srv.expect_fail(
        "SRV(numDescriptors=2)",
        ParseErrorReason::MissingParameter(RequiredParameter::ShaderRegister),
        20,
    );
    srv.expect_fail(
        "SRV(t0, numDescriptors=1, numDescriptors=2)",
        ParseErrorReason::DuplicateParameter("numDescriptors"),
        26,
    );
    srv.expect_fail(
        "SRV(t0, visibility=SHADER_VISIBILITY_ALL)",
        ParseErrorReason::UnexpectedToken("visibility".to_string()),
        8,
    );

    ParserTester::new(|p| p.parse_descriptor_range(DescriptorRangeType::Cbv))
        .version(RootSignatureVersion::V1_0)
        .expect_fail(
            "CBV(b0, flags=0)",
            ParseErrorReason::FlagsNotSupported(
                FlagFamily::DescriptorRange,
                RootSignatureVersion::V1_0,
            ),
            8,
        );
}

#[test]
fn test_descriptor_table() {
    use test_support::*;
    let table = ParserTester::new(|p| p.parse_descriptor_table());

    table.check(
        "DescriptorTable(CBV(b0), UAV(u1, numDescriptors=2), visibility=SHADER_VISIBILITY_PIXEL, Sampler(s0))",
        v1_1::RootParameter {
            kind: v1_1::RootParameterKind::DescriptorTable(v1_1::DescriptorTable {
                ranges: vec![
                    v1_1::DescriptorRange::new(DescriptorRangeType::Cbv, 0),
                    v1_1::DescriptorRange {
                        num_descriptors: DescriptorCount::Bounded(2),
                        ..v1_1::DescriptorRange::new(DescriptorRangeType::Uav, 1)
                    },
                    v1_1::DescriptorRange::new(DescriptorRangeType::Sampler, 0),
                ],
            }),
            shader_visibility: ShaderVisibility::Pixel,
        },
    );

    table.check(
        "DescriptorTable(visibility=SHADER_VISIBILITY_VERTEX)",
        v1_1::RootParameter {
            kind: v1_1::RootParameterKind::DescriptorTable(v1_1::DescriptorTable::default()),
            shader_visibility: ShaderVisibility::Vertex,
        },
    );

    table.expect_fail(
        "DescriptorTable()",
        ParseErrorReason::UnexpectedToken(")".to_string()),
        16,
    );
    table.expect_fail(
        "DescriptorTable(CBV(b0), StaticSampler(s0))",
        ParseErrorReason::UnexpectedToken("StaticSampler".to_string()),
        25,
    );
    table.expect_fail(
        "DescriptorTable(visibility=SHADER_VISIBILITY_ALL, visibility=SHADER_VISIBILITY_ALL)",
        ParseErrorReason::DuplicateParameter("visibility"),
        50,
    );
}
