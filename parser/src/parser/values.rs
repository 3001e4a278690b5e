use super::*;

fn shader_visibility(keyword: Keyword) -> Option<ShaderVisibility> {
    Some(match keyword {
        Keyword::ShaderVisibilityAll => ShaderVisibility::All,
        Keyword::ShaderVisibilityVertex => ShaderVisibility::Vertex,
        Keyword::ShaderVisibilityHull => ShaderVisibility::Hull,
        Keyword::ShaderVisibilityDomain => ShaderVisibility::Domain,
        Keyword::ShaderVisibilityGeometry => ShaderVisibility::Geometry,
        Keyword::ShaderVisibilityPixel => ShaderVisibility::Pixel,
        Keyword::ShaderVisibilityAmplification => ShaderVisibility::Amplification,
        Keyword::ShaderVisibilityMesh => ShaderVisibility::Mesh,
        _ => return None,
    })
}

fn filter(keyword: Keyword) -> Option<Filter> {
    Some(match keyword {
        Keyword::FilterMinMagMipPoint => Filter::MinMagMipPoint,
        Keyword::FilterMinMagPointMipLinear => Filter::MinMagPointMipLinear,
        Keyword::FilterMinPointMagLinearMipPoint => Filter::MinPointMagLinearMipPoint,
        Keyword::FilterMinPointMagMipLinear => Filter::MinPointMagMipLinear,
        Keyword::FilterMinLinearMagMipPoint => Filter::MinLinearMagMipPoint,
        Keyword::FilterMinLinearMagPointMipLinear => Filter::MinLinearMagPointMipLinear,
        Keyword::FilterMinMagLinearMipPoint => Filter::MinMagLinearMipPoint,
        Keyword::FilterMinMagMipLinear => Filter::MinMagMipLinear,
        Keyword::FilterAnisotropic => Filter::Anisotropic,
        Keyword::FilterComparisonMinMagMipPoint => Filter::ComparisonMinMagMipPoint,
        Keyword::FilterComparisonMinMagPointMipLinear => Filter::ComparisonMinMagPointMipLinear,
        Keyword::FilterComparisonMinPointMagLinearMipPoint => {
            Filter::ComparisonMinPointMagLinearMipPoint
        }
        Keyword::FilterComparisonMinPointMagMipLinear => Filter::ComparisonMinPointMagMipLinear,
        Keyword::FilterComparisonMinLinearMagMipPoint => Filter::ComparisonMinLinearMagMipPoint,
        Keyword::FilterComparisonMinLinearMagPointMipLinear => {
            Filter::ComparisonMinLinearMagPointMipLinear
        }
        Keyword::FilterComparisonMinMagLinearMipPoint => Filter::ComparisonMinMagLinearMipPoint,
        Keyword::FilterComparisonMinMagMipLinear => Filter::ComparisonMinMagMipLinear,
        Keyword::FilterComparisonAnisotropic => Filter::ComparisonAnisotropic,
        Keyword::FilterMinimumMinMagMipPoint => Filter::MinimumMinMagMipPoint,
        Keyword::FilterMinimumMinMagPointMipLinear => Filter::MinimumMinMagPointMipLinear,
        Keyword::FilterMinimumMinPointMagLinearMipPoint => {
            Filter::MinimumMinPointMagLinearMipPoint
        }
        Keyword::FilterMinimumMinPointMagMipLinear => Filter::MinimumMinPointMagMipLinear,
        Keyword::FilterMinimumMinLinearMagMipPoint => Filter::MinimumMinLinearMagMipPoint,
        Keyword::FilterMinimumMinLinearMagPointMipLinear => {
            Filter::MinimumMinLinearMagPointMipLinear
        }
        Keyword::FilterMinimumMinMagLinearMipPoint => Filter::MinimumMinMagLinearMipPoint,
        Keyword::FilterMinimumMinMagMipLinear => Filter::MinimumMinMagMipLinear,
        Keyword::FilterMinimumAnisotropic => Filter::MinimumAnisotropic,
        Keyword::FilterMaximumMinMagMipPoint => Filter::MaximumMinMagMipPoint,
        Keyword::FilterMaximumMinMagPointMipLinear => Filter::MaximumMinMagPointMipLinear,
        Keyword::FilterMaximumMinPointMagLinearMipPoint => {
            Filter::MaximumMinPointMagLinearMipPoint
        }
        Keyword::FilterMaximumMinPointMagMipLinear => Filter::MaximumMinPointMagMipLinear,
        Keyword::FilterMaximumMinLinearMagMipPoint => Filter::MaximumMinLinearMagMipPoint,
        Keyword::FilterMaximumMinLinearMagPointMipLinear => {
            Filter::MaximumMinLinearMagPointMipLinear
        }
        Keyword::FilterMaximumMinMagLinearMipPoint => Filter::MaximumMinMagLinearMipPoint,
        Keyword::FilterMaximumMinMagMipLinear => Filter::MaximumMinMagMipLinear,
        Keyword::FilterMaximumAnisotropic => Filter::MaximumAnisotropic,
        _ => return None,
    })
}

fn texture_address_mode(keyword: Keyword) -> Option<TextureAddressMode> {
    Some(match keyword {
        Keyword::TextureAddressWrap => TextureAddressMode::Wrap,
        Keyword::TextureAddressMirror => TextureAddressMode::Mirror,
        Keyword::TextureAddressClamp => TextureAddressMode::Clamp,
        Keyword::TextureAddressBorder => TextureAddressMode::Border,
        Keyword::TextureAddressMirrorOnce => TextureAddressMode::MirrorOnce,
        _ => return None,
    })
}

fn comparison_func(keyword: Keyword) -> Option<ComparisonFunc> {
    Some(match keyword {
        Keyword::ComparisonNever => ComparisonFunc::Never,
        Keyword::ComparisonLess => ComparisonFunc::Less,
        Keyword::ComparisonEqual => ComparisonFunc::Equal,
        Keyword::ComparisonLessEqual => ComparisonFunc::LessEqual,
        Keyword::ComparisonGreater => ComparisonFunc::Greater,
        Keyword::ComparisonNotEqual => ComparisonFunc::NotEqual,
        Keyword::ComparisonGreaterEqual => ComparisonFunc::GreaterEqual,
        Keyword::ComparisonAlways => ComparisonFunc::Always,
        _ => return None,
    })
}

fn border_color(keyword: Keyword) -> Option<StaticBorderColor> {
    Some(match keyword {
        Keyword::StaticBorderColorTransparentBlack => StaticBorderColor::TransparentBlack,
        Keyword::StaticBorderColorOpaqueBlack => StaticBorderColor::OpaqueBlack,
        Keyword::StaticBorderColorOpaqueWhite => StaticBorderColor::OpaqueWhite,
        Keyword::StaticBorderColorOpaqueBlackUint => StaticBorderColor::OpaqueBlackUint,
        Keyword::StaticBorderColorOpaqueWhiteUint => StaticBorderColor::OpaqueWhiteUint,
        _ => return None,
    })
}

impl<'s> Parser<'s> {
    /// Parse an unsigned integer literal
    fn parse_uint(&mut self) -> ParseResult<u32> {
        let token = self.next();
        match token.token {
            Token::LiteralUInt(value) => Ok(value),
            _ => Err(ParseError::unexpected_token(&token)),
        }
    }

    /// Parse any numeric literal as a float
    pub(crate) fn parse_float(&mut self) -> ParseResult<f32> {
        let token = self.next();
        match token.token {
            Token::LiteralUInt(value) => Ok(value as f32),
            Token::LiteralInt(value) => Ok(value as f32),
            Token::LiteralFloat(value) => Ok(value),
            _ => Err(ParseError::at(
                ParseErrorReason::ExpectedFloat(token.text.to_string()),
                &token,
            )),
        }
    }

    /// Parse a keyword from an enumeration
    fn parse_enum_value<T>(
        &mut self,
        kind: ValueKind,
        value_fn: fn(Keyword) -> Option<T>,
    ) -> ParseResult<T> {
        let token = self.next();
        let value = match token.token {
            Token::Keyword(keyword) => value_fn(keyword),
            _ => None,
        };
        match value {
            Some(value) => Ok(value),
            None => Err(ParseError::at(
                ParseErrorReason::UnexpectedValue(kind, token.text.to_string()),
                &token,
            )),
        }
    }

    /// Parse a `name = <uint>` sub-parameter
    pub(crate) fn parse_uint_parameter(&mut self, keyword: Keyword) -> ParseResult<u32> {
        self.expect_assignment(keyword)?;
        self.parse_uint()
    }

    /// Parse a `name = <float>` sub-parameter
    pub(crate) fn parse_float_parameter(&mut self, keyword: Keyword) -> ParseResult<f32> {
        self.expect_assignment(keyword)?;
        self.parse_float()
    }

    /// Parse a `space = <uint>` sub-parameter
    pub(crate) fn parse_space(&mut self) -> ParseResult<u32> {
        self.parse_uint_parameter(Keyword::Space)
    }

    /// Parse a `visibility = <visibility>` sub-parameter
    pub(crate) fn parse_visibility(&mut self) -> ParseResult<ShaderVisibility> {
        self.expect_assignment(Keyword::Visibility)?;
        self.parse_enum_value(ValueKind::Visibility, shader_visibility)
    }

    /// Parse a `numDescriptors = <uint|unbounded>` sub-parameter
    pub(crate) fn parse_num_descriptors(&mut self) -> ParseResult<DescriptorCount> {
        self.expect_assignment(Keyword::NumDescriptors)?;
        if self.peek().token == Token::Keyword(Keyword::Unbounded) {
            self.next();
            Ok(DescriptorCount::Unbounded)
        } else {
            Ok(DescriptorCount::Bounded(self.parse_uint()?))
        }
    }

    /// Parse an `offset = <uint|DESCRIPTOR_RANGE_OFFSET_APPEND>` sub-parameter
    pub(crate) fn parse_offset(&mut self) -> ParseResult<RangeOffset> {
        self.expect_assignment(Keyword::Offset)?;
        if self.peek().token == Token::Keyword(Keyword::DescriptorRangeOffsetAppend) {
            self.next();
            Ok(RangeOffset::Append)
        } else {
            Ok(RangeOffset::Explicit(self.parse_uint()?))
        }
    }

    /// Parse a `filter = <filter>` sub-parameter
    pub(crate) fn parse_filter(&mut self) -> ParseResult<Filter> {
        self.expect_assignment(Keyword::Filter)?;
        self.parse_enum_value(ValueKind::Filter, filter)
    }

    /// Parse an `addressU`, `addressV`, or `addressW` sub-parameter
    pub(crate) fn parse_texture_address_mode(
        &mut self,
        keyword: Keyword,
    ) -> ParseResult<TextureAddressMode> {
        self.expect_assignment(keyword)?;
        self.parse_enum_value(ValueKind::TextureAddressMode, texture_address_mode)
    }

    /// Parse a `comparisonFunc = <comparison>` sub-parameter
    pub(crate) fn parse_comparison_func(&mut self) -> ParseResult<ComparisonFunc> {
        self.expect_assignment(Keyword::ComparisonFunc)?;
        self.parse_enum_value(ValueKind::ComparisonFunction, comparison_func)
    }

    /// Parse a `borderColor = <color>` sub-parameter
    pub(crate) fn parse_border_color(&mut self) -> ParseResult<StaticBorderColor> {
        self.expect_assignment(Keyword::BorderColor)?;
        self.parse_enum_value(ValueKind::BorderColor, border_color)
    }
}

#[test]
fn test_float() {
    use test_support::*;
    let float = ParserTester::new(|p| p.parse_float());

    float.check("0", 0.0);
    float.check("3", 3.0);
    float.check("-3", -3.0);
    float.check("+3", 3.0);
    float.check("1.5", 1.5);
    float.check("1.5e1", 15.0);
    float.check("15.0f", 15.0);
    float.check("-.25", -0.25);
    float.check("3.402823466e+38f", f32::MAX);

    float.expect_fail(
        "1e39",
        ParseErrorReason::ExpectedFloat("1e39".to_string()),
        0,
    );
    float.expect_fail(
        "99999999999",
        ParseErrorReason::ExpectedFloat("99999999999".to_string()),
        0,
    );
    float.expect_fail(
        "DATA_STATIC",
        ParseErrorReason::ExpectedFloat("DATA_STATIC".to_string()),
        0,
    );
    float.expect_fail("", ParseErrorReason::ExpectedFloat("".to_string()), 0);
}

#[test]
fn test_space() {
    use test_support::*;
    let space = ParserTester::new(|p| p.parse_space());

    space.check("space=0", 0);
    space.check("SPACE = 4294967295", u32::MAX);

    space.expect_fail(
        "space=-1",
        ParseErrorReason::UnexpectedToken("-1".to_string()),
        6,
    );
    space.expect_fail(
        "space=4294967296",
        ParseErrorReason::UnexpectedToken("4294967296".to_string()),
        6,
    );
    space.expect_fail(
        "space=1.0",
        ParseErrorReason::UnexpectedToken("1.0".to_string()),
        6,
    );
    space.expect_fail(
        "space 1",
        ParseErrorReason::UnexpectedToken("1".to_string()),
        6,
    );
}

#[test]
fn test_visibility() {
    use test_support::*;
    let visibility = ParserTester::new(|p| p.parse_visibility());

    visibility.check("visibility=SHADER_VISIBILITY_ALL", ShaderVisibility::All);
    visibility.check(
        "Visibility = shader_visibility_pixel",
        ShaderVisibility::Pixel,
    );
    visibility.check(
        "visibility=SHADER_VISIBILITY_AMPLIFICATION",
        ShaderVisibility::Amplification,
    );
    visibility.check("visibility=SHADER_VISIBILITY_MESH", ShaderVisibility::Mesh);

    visibility.expect_fail(
        "visibility=SHADER_VISIBILITY_COMPUTE",
        ParseErrorReason::UnexpectedValue(
            ValueKind::Visibility,
            "SHADER_VISIBILITY_COMPUTE".to_string(),
        ),
        11,
    );
    visibility.expect_fail(
        "visibility=0",
        ParseErrorReason::UnexpectedValue(ValueKind::Visibility, "0".to_string()),
        11,
    );
}

#[test]
fn test_num_descriptors() {
    use test_support::*;
    let num_descriptors = ParserTester::new(|p| p.parse_num_descriptors());

    num_descriptors.check("numDescriptors=4", DescriptorCount::Bounded(4));
    num_descriptors.check("numDescriptors = unbounded", DescriptorCount::Unbounded);
    num_descriptors.check("NUMDESCRIPTORS=UNBOUNDED", DescriptorCount::Unbounded);

    num_descriptors.expect_fail(
        "numDescriptors=-1",
        ParseErrorReason::UnexpectedToken("-1".to_string()),
        15,
    );
}

#[test]
fn test_offset() {
    use test_support::*;
    let offset = ParserTester::new(|p| p.parse_offset());

    offset.check("offset=12", RangeOffset::Explicit(12));
    offset.check(
        "offset=DESCRIPTOR_RANGE_OFFSET_APPEND",
        RangeOffset::Append,
    );

    offset.expect_fail(
        "offset=unbounded",
        ParseErrorReason::UnexpectedToken("unbounded".to_string()),
        7,
    );
}

#[test]
fn test_sampler_values() {
    use test_support::*;

    let filter = ParserTester::new(|p| p.parse_filter());
    filter.check("filter=FILTER_MIN_MAG_MIP_POINT", Filter::MinMagMipPoint);
    filter.check(
        "filter = FILTER_COMPARISON_MIN_LINEAR_MAG_POINT_MIP_LINEAR",
        Filter::ComparisonMinLinearMagPointMipLinear,
    );
    filter.check(
        "filter=FILTER_MAXIMUM_ANISOTROPIC",
        Filter::MaximumAnisotropic,
    );
    filter.expect_fail(
        "filter=TEXTURE_ADDRESS_WRAP",
        ParseErrorReason::UnexpectedValue(ValueKind::Filter, "TEXTURE_ADDRESS_WRAP".to_string()),
        7,
    );

    let address = ParserTester::new(|p| p.parse_texture_address_mode(Keyword::AddressV));
    address.check("addressV=TEXTURE_ADDRESS_MIRROR_ONCE", TextureAddressMode::MirrorOnce);
    address.check("AddressV = texture_address_border", TextureAddressMode::Border);
    address.expect_fail(
        "addressU=TEXTURE_ADDRESS_CLAMP",
        ParseErrorReason::UnexpectedToken("addressU".to_string()),
        0,
    );
    address.expect_fail(
        "addressV=FILTER_ANISOTROPIC",
        ParseErrorReason::UnexpectedValue(
            ValueKind::TextureAddressMode,
            "FILTER_ANISOTROPIC".to_string(),
        ),
        9,
    );

    let comparison = ParserTester::new(|p| p.parse_comparison_func());
    comparison.check("comparisonFunc=COMPARISON_NOT_EQUAL", ComparisonFunc::NotEqual);
    comparison.expect_fail(
        "comparisonFunc=LESS",
        ParseErrorReason::UnexpectedValue(ValueKind::ComparisonFunction, "LESS".to_string()),
        15,
    );

    let border = ParserTester::new(|p| p.parse_border_color());
    border.check(
        "borderColor=STATIC_BORDER_COLOR_OPAQUE_BLACK_UINT",
        StaticBorderColor::OpaqueBlackUint,
    );
    border.expect_fail(
        "borderColor=STATIC_BORDER_COLOR_RED",
        ParseErrorReason::UnexpectedValue(
            ValueKind::BorderColor,
            "STATIC_BORDER_COLOR_RED".to_string(),
        ),
        12,
    );
}
