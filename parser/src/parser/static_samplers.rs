use super::*;

impl<'s> Parser<'s> {
    /// Parse a `StaticSampler(...)` declaration
    pub(crate) fn parse_static_sampler(&mut self) -> ParseResult<StaticSampler> {
        self.expect_keyword(Keyword::StaticSampler)?;
        self.expect(Token::LeftParen)?;

        let mut sampler = StaticSampler::new(0);

        let mut seen_filter = false;
        let mut seen_address_u = false;
        let mut seen_address_v = false;
        let mut seen_address_w = false;
        let mut seen_mip_lod_bias = false;
        let mut seen_max_anisotropy = false;
        let mut seen_comparison_func = false;
        let mut seen_border_color = false;
        let mut seen_min_lod = false;
        let mut seen_max_lod = false;
        let mut seen_register = false;
        let mut seen_space = false;
        let mut seen_visibility = false;

        let close = loop {
            let token = self.peek();
            match token.token {
                Token::Keyword(Keyword::Filter) => {
                    mark_parameter(&mut seen_filter, "filter", &token)?;
                    sampler.filter = self.parse_filter()?;
                }
                Token::Keyword(Keyword::AddressU) => {
                    mark_parameter(&mut seen_address_u, "addressU", &token)?;
                    sampler.address_u = self.parse_texture_address_mode(Keyword::AddressU)?;
                }
                Token::Keyword(Keyword::AddressV) => {
                    mark_parameter(&mut seen_address_v, "addressV", &token)?;
                    sampler.address_v = self.parse_texture_address_mode(Keyword::AddressV)?;
                }
                Token::Keyword(Keyword::AddressW) => {
                    mark_parameter(&mut seen_address_w, "addressW", &token)?;
                    sampler.address_w = self.parse_texture_address_mode(Keyword::AddressW)?;
                }
                Token::Keyword(Keyword::MipLodBias) => {
                    mark_parameter(&mut seen_mip_lod_bias, "mipLODBias", &token)?;
                    sampler.mip_lod_bias = self.parse_float_parameter(Keyword::MipLodBias)?;
                }
                Token::Keyword(Keyword::MaxAnisotropy) => {
                    mark_parameter(&mut seen_max_anisotropy, "maxAnisotropy", &token)?;
                    sampler.max_anisotropy = self.parse_uint_parameter(Keyword::MaxAnisotropy)?;
                }
                Token::Keyword(Keyword::ComparisonFunc) => {
                    mark_parameter(&mut seen_comparison_func, "comparisonFunc", &token)?;
                    sampler.comparison_func = self.parse_comparison_func()?;
                }
                Token::Keyword(Keyword::BorderColor) => {
                    mark_parameter(&mut seen_border_color, "borderColor", &token)?;
                    sampler.border_color = self.parse_border_color()?;
                }
                Token::Keyword(Keyword::MinLod) => {
                    mark_parameter(&mut seen_min_lod, "minLOD", &token)?;
                    sampler.min_lod = self.parse_float_parameter(Keyword::MinLod)?;
                }
                Token::Keyword(Keyword::MaxLod) => {
                    mark_parameter(&mut seen_max_lod, "maxLOD", &token)?;
                    sampler.max_lod = self.parse_float_parameter(Keyword::MaxLod)?;
                }
                Token::Register(RegisterSlot::S(_)) => {
                    mark_parameter(&mut seen_register, "sampler register s#", &token)?;
                    sampler.shader_register = self.parse_register(RegisterType::S)?;
                }
                Token::Keyword(Keyword::Space) => {
                    mark_parameter(&mut seen_space, "space", &token)?;
                    sampler.register_space = self.parse_space()?;
                }
                Token::Keyword(Keyword::Visibility) => {
                    mark_parameter(&mut seen_visibility, "visibility", &token)?;
                    sampler.shader_visibility = self.parse_visibility()?;
                }
                _ => return Err(ParseError::unexpected_token(&token)),
            }

            if let Some(close) = self.parameter_separator()? {
                break close;
            }
        };

        require_parameter(seen_register, RequiredParameter::SamplerRegister, &close)?;

        Ok(sampler)
    }
}

#[test]
fn test_static_sampler() {
    use test_support::*;
    let static_sampler = ParserTester::new(|p| p.parse_static_sampler());

    static_sampler.check("StaticSampler(s0)", StaticSampler::new(0));

    static_sampler.check(
        "StaticSampler(s3, filter=FILTER_MIN_MAG_MIP_LINEAR, addressU=TEXTURE_ADDRESS_CLAMP, \
        addressV=TEXTURE_ADDRESS_MIRROR, addressW=TEXTURE_ADDRESS_BORDER, mipLODBias=-1.5, \
        maxAnisotropy=8, comparisonFunc=COMPARISON_ALWAYS, \
        borderColor=STATIC_BORDER_COLOR_TRANSPARENT_BLACK, minLOD=1, maxLOD=10.0f, space=2, \
        visibility=SHADER_VISIBILITY_DOMAIN)",
        StaticSampler {
            filter: Filter::MinMagMipLinear,
            address_u: TextureAddressMode::Clamp,
            address_v: TextureAddressMode::Mirror,
            address_w: TextureAddressMode::Border,
            mip_lod_bias: -1.5,
            max_anisotropy: 8,
            comparison_func: ComparisonFunc::Always,
            border_color: StaticBorderColor::TransparentBlack,
            min_lod: 1.0,
            max_lod: 10.0,
            shader_register: 3,
            register_space: 2,
            shader_visibility: ShaderVisibility::Domain,
        },
    );

    static_sampler.check(
        "StaticSampler(mipLODBias=1.5e1, s0)",
        StaticSampler {
            mip_lod_bias: 15.0,
            ..StaticSampler::new(0)
        },
    );

    static_sampler.expect_fail(
        "StaticSampler(filter=FILTER_ANISOTROPIC)",
        ParseErrorReason::MissingParameter(RequiredParameter::SamplerRegister),
        39,
    );
    static_sampler.expect_fail(
        "StaticSampler(s0, s1)",
        ParseErrorReason::DuplicateParameter("sampler register s#"),
        18,
    );
    static_sampler.expect_fail(
        "StaticSampler(t0)",
        ParseErrorReason::UnexpectedToken("t0".to_string()),
        14,
    );
    static_sampler.expect_fail(
        "StaticSampler(s0, maxLOD=1, maxLOD=2)",
        ParseErrorReason::DuplicateParameter("maxLOD"),
        28,
    );
    static_sampler.expect_fail(
        "StaticSampler(s0, maxAnisotropy=1.0)",
        ParseErrorReason::UnexpectedToken("1.0".to_string()),
        32,
    );
    static_sampler.expect_fail(
        "StaticSampler(s0, minLOD=1e39)",
        ParseErrorReason::ExpectedFloat("1e39".to_string()),
        25,
    );
    static_sampler.expect_fail(
        "StaticSampler(s0, minLOD=1e-400)",
        ParseErrorReason::ExpectedFloat("1e-400".to_string()),
        25,
    );
    static_sampler.expect_fail(
        "StaticSampler(s0, flags=0)",
        ParseErrorReason::UnexpectedToken("flags".to_string()),
        18,
    );
}
