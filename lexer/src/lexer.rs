use rootsig_text::tokens::*;
use rootsig_text::*;

/// Longest run of digits or identifier characters which can form a single token
///
/// Longer runs are split: the remaining characters begin the next token.
pub const MAX_TOKEN_LENGTH: usize = 63;

/// Internal error data when a lexer fails to match a class of token
#[derive(PartialEq, Debug, Clone)]
struct LexErrorContext<'b>(&'b [u8]);

/// Internal result type
type LexResult<'b, O> = Result<(&'b [u8], O), LexErrorContext<'b>>;

/// Make an error for when the wrong characters were encountered to lex a certain token
fn wrong_chars<T>(input: &[u8]) -> LexResult<'_, T> {
    Err(LexErrorContext(input))
}

type DynLexFn<'f> = &'f dyn Fn(&[u8]) -> LexResult<'_, Token>;

/// Lex a token from the first lexer in a set which accepts the input
fn choose<'b>(lex_fns: &[DynLexFn], input: &'b [u8]) -> LexResult<'b, Token> {
    for lex_fn in lex_fns {
        if let Ok(ok) = lex_fn(input) {
            return Ok(ok);
        }
    }
    wrong_chars(input)
}

/// Skip space characters
///
/// Only ' ' counts as whitespace. Tabs and line breaks are lexed as unknown tokens.
fn skip_spaces(input: &[u8]) -> &[u8] {
    let count = input.iter().take_while(|c| **c == b' ').count();
    &input[count..]
}

/// Consume a run of decimal digits
///
/// `consumed` is the number of bytes already in the token, the run stops when the token reaches [MAX_TOKEN_LENGTH].
/// Returns if any digits were found.
fn digits(input: &[u8], consumed: usize) -> (&[u8], bool) {
    let mut len = 0;
    while len < input.len() && input[len].is_ascii_digit() && consumed + len < MAX_TOKEN_LENGTH {
        len += 1;
    }
    (&input[len..], len > 0)
}

#[test]
fn test_digits() {
    assert_eq!(digits(b"086", 0), (&b""[..], true));
    assert_eq!(digits(b"086)", 0), (&b")"[..], true));
    assert_eq!(digits(b")", 0), (&b")"[..], false));
    assert_eq!(digits(b"086", MAX_TOKEN_LENGTH - 1), (&b"86"[..], true));
}

/// Parse the value of a float literal
///
/// Values which overflow, or which underflow to zero from a non-zero significand, are rejected.
fn float_value(text: &str) -> Token {
    let significand = text.split(['e', 'E']).next().unwrap_or(text);
    let nonzero_significand = significand.bytes().any(|c| matches!(c, b'1'..=b'9'));
    match text.parse::<f64>() {
        Ok(value) if value == 0.0 && nonzero_significand => Token::Unknown,
        Ok(value) if value.is_finite() && value.abs() <= f32::MAX as f64 => {
            Token::LiteralFloat(value as f32)
        }
        _ => Token::Unknown,
    }
}

/// Parse the value of an integer literal with an explicit negative sign
fn signed_value(text: &str) -> Token {
    match text.parse::<i64>().ok().and_then(|v| i32::try_from(v).ok()) {
        Some(value) => Token::LiteralInt(value),
        None => Token::Unknown,
    }
}

/// Parse the value of an integer literal without a negative sign
fn unsigned_value(text: &str) -> Token {
    match text.parse::<i64>().ok().and_then(|v| u32::try_from(v).ok()) {
        Some(value) => Token::LiteralUInt(value),
        None => Token::Unknown,
    }
}

/// Lex a numeric literal
///
/// Anything starting with a digit, a sign, or a period is lexed as a number.
/// Malformed or out of range numbers become [Token::Unknown] covering the characters consumed so far.
fn literal_number(input: &[u8]) -> LexResult<'_, Token> {
    let start = input;
    let consumed = |rest: &[u8]| start.len() - rest.len();

    let input = match input {
        [b'+' | b'-', rest @ ..] => rest,
        [b'0'..=b'9' | b'.', ..] => input,
        _ => return wrong_chars(input),
    };

    let (input, has_whole) = digits(input, consumed(input));
    let mut is_float = false;

    // A fractional part must have digits on at least one side of the period
    let input = match input {
        [b'.', rest @ ..] => {
            is_float = true;
            let (rest, has_fraction) = digits(rest, consumed(rest));
            if !has_whole && !has_fraction {
                return Ok((rest, Token::Unknown));
            }
            rest
        }
        _ if !has_whole => return Ok((input, Token::Unknown)),
        _ => input,
    };

    let input = match input {
        [b'e' | b'E', rest @ ..] => {
            is_float = true;
            let rest = match rest {
                [b'+' | b'-', rest @ ..] => rest,
                _ => rest,
            };
            let (rest, has_exponent) = digits(rest, consumed(rest));
            if !has_exponent {
                return Ok((rest, Token::Unknown));
            }
            rest
        }
        _ => input,
    };

    let (input, has_suffix) = match input {
        [b'f' | b'F', rest @ ..] => (rest, true),
        _ => (input, false),
    };

    let text = &start[..consumed(input)];
    let text = if has_suffix {
        &text[..text.len() - 1]
    } else {
        text
    };

    // Numbers are made only of ASCII characters
    let text = match std::str::from_utf8(text) {
        Ok(text) => text,
        Err(_) => return Ok((input, Token::Unknown)),
    };

    let token = if is_float || has_suffix {
        float_value(text)
    } else if start[0] == b'-' {
        signed_value(text)
    } else {
        unsigned_value(text)
    };

    Ok((input, token))
}

#[test]
fn test_literal_number() {
    let p = literal_number;
    assert_eq!(p(b"0"), Ok((&b""[..], Token::LiteralUInt(0))));
    assert_eq!(p(b"12)"), Ok((&b")"[..], Token::LiteralUInt(12))));
    assert_eq!(p(b"+12"), Ok((&b""[..], Token::LiteralUInt(12))));
    assert_eq!(p(b"-12,"), Ok((&b","[..], Token::LiteralInt(-12))));
    assert_eq!(
        p(b"4294967295"),
        Ok((&b""[..], Token::LiteralUInt(u32::MAX)))
    );
    assert_eq!(
        p(b"-2147483648"),
        Ok((&b""[..], Token::LiteralInt(i32::MIN)))
    );

    assert_eq!(p(b"1.5"), Ok((&b""[..], Token::LiteralFloat(1.5))));
    assert_eq!(p(b"1.5e1"), Ok((&b""[..], Token::LiteralFloat(15.0))));
    assert_eq!(p(b"15.0f"), Ok((&b""[..], Token::LiteralFloat(15.0))));
    assert_eq!(p(b"2f"), Ok((&b""[..], Token::LiteralFloat(2.0))));
    assert_eq!(p(b".5"), Ok((&b""[..], Token::LiteralFloat(0.5))));
    assert_eq!(p(b"5."), Ok((&b""[..], Token::LiteralFloat(5.0))));
    assert_eq!(p(b"-.5)"), Ok((&b")"[..], Token::LiteralFloat(-0.5))));
    assert_eq!(p(b"1E-1"), Ok((&b""[..], Token::LiteralFloat(0.1))));
    assert_eq!(p(b"25e+1F"), Ok((&b""[..], Token::LiteralFloat(250.0))));
    assert_eq!(
        p(b"3.402823466e+38f"),
        Ok((&b""[..], Token::LiteralFloat(f32::MAX)))
    );

    // Out of range values
    assert_eq!(p(b"4294967296"), Ok((&b""[..], Token::Unknown)));
    assert_eq!(p(b"-2147483649"), Ok((&b""[..], Token::Unknown)));
    assert_eq!(p(b"99999999999999999999"), Ok((&b""[..], Token::Unknown)));
    assert_eq!(p(b"1e39"), Ok((&b""[..], Token::Unknown)));
    assert_eq!(p(b"-1e39"), Ok((&b""[..], Token::Unknown)));
    assert_eq!(p(b"1e-400"), Ok((&b""[..], Token::Unknown)));
    assert_eq!(p(b"-2.5e-400f"), Ok((&b""[..], Token::Unknown)));
    assert_eq!(p(b"0e-400"), Ok((&b""[..], Token::LiteralFloat(0.0))));
    assert_eq!(p(b"0.0e-5"), Ok((&b""[..], Token::LiteralFloat(0.0))));

    // Malformed heads stop where the missing digit was expected
    assert_eq!(p(b"."), Ok((&b""[..], Token::Unknown)));
    assert_eq!(p(b"-"), Ok((&b""[..], Token::Unknown)));
    assert_eq!(p(b"+x"), Ok((&b"x"[..], Token::Unknown)));
    assert_eq!(p(b".e"), Ok((&b"e"[..], Token::Unknown)));
    assert_eq!(p(b"1e"), Ok((&b""[..], Token::Unknown)));
    assert_eq!(p(b"1e+)"), Ok((&b")"[..], Token::Unknown)));

    assert!(p(b"x").is_err());
    assert!(p(b"").is_err());
}

/// Lex an identifier made of letters, digits, and underscores
fn identifier(input: &[u8]) -> LexResult<'_, &[u8]> {
    match input.first() {
        Some(c) if c.is_ascii_alphabetic() || *c == b'_' => {}
        _ => return wrong_chars(input),
    }
    let mut len = 1;
    while len < input.len()
        && len < MAX_TOKEN_LENGTH
        && (input[len].is_ascii_alphanumeric() || input[len] == b'_')
    {
        len += 1;
    }
    Ok((&input[len..], &input[..len]))
}

/// Match an identifier that names a register like `t0`
///
/// The register class is case-sensitive and every character after it must be a digit.
fn register(word: &[u8]) -> Option<RegisterSlot> {
    let (class, index) = word.split_first()?;
    if index.is_empty() || !index.iter().all(u8::is_ascii_digit) {
        return None;
    }
    let index = std::str::from_utf8(index).ok()?.parse::<u32>().ok()?;
    match class {
        b't' => Some(RegisterSlot::T(index)),
        b'u' => Some(RegisterSlot::U(index)),
        b'b' => Some(RegisterSlot::B(index)),
        b's' => Some(RegisterSlot::S(index)),
        _ => None,
    }
}

#[test]
fn test_register() {
    assert_eq!(register(b"t0"), Some(RegisterSlot::T(0)));
    assert_eq!(register(b"u12"), Some(RegisterSlot::U(12)));
    assert_eq!(register(b"b007"), Some(RegisterSlot::B(7)));
    assert_eq!(register(b"s4294967295"), Some(RegisterSlot::S(u32::MAX)));
    assert_eq!(register(b"s4294967296"), None);
    assert_eq!(register(b"t"), None);
    assert_eq!(register(b"T0"), None);
    assert_eq!(register(b"x0"), None);
    assert_eq!(register(b"t0a"), None);
}

/// Match a keyword
///
/// Keywords are case-insensitive.
fn keyword(word: &[u8]) -> Option<Keyword> {
    let word = std::str::from_utf8(word).ok()?.to_ascii_lowercase();
    let keyword = match word.as_str() {
        "rootflags" => Keyword::RootFlags,
        "rootconstants" => Keyword::RootConstants,
        "cbv" => Keyword::Cbv,
        "srv" => Keyword::Srv,
        "uav" => Keyword::Uav,
        "sampler" => Keyword::Sampler,
        "descriptortable" => Keyword::DescriptorTable,
        "staticsampler" => Keyword::StaticSampler,

        "num32bitconstants" => Keyword::Num32BitConstants,
        "space" => Keyword::Space,
        "visibility" => Keyword::Visibility,
        "flags" => Keyword::Flags,
        "numdescriptors" => Keyword::NumDescriptors,
        "offset" => Keyword::Offset,
        "filter" => Keyword::Filter,
        "addressu" => Keyword::AddressU,
        "addressv" => Keyword::AddressV,
        "addressw" => Keyword::AddressW,
        "miplodbias" => Keyword::MipLodBias,
        "maxanisotropy" => Keyword::MaxAnisotropy,
        "comparisonfunc" => Keyword::ComparisonFunc,
        "bordercolor" => Keyword::BorderColor,
        "minlod" => Keyword::MinLod,
        "maxlod" => Keyword::MaxLod,

        "unbounded" => Keyword::Unbounded,
        "descriptor_range_offset_append" => Keyword::DescriptorRangeOffsetAppend,

        "allow_input_assembler_input_layout" => Keyword::AllowInputAssemblerInputLayout,
        "deny_vertex_shader_root_access" => Keyword::DenyVertexShaderRootAccess,
        "deny_hull_shader_root_access" => Keyword::DenyHullShaderRootAccess,
        "deny_domain_shader_root_access" => Keyword::DenyDomainShaderRootAccess,
        "deny_geometry_shader_root_access" => Keyword::DenyGeometryShaderRootAccess,
        "deny_pixel_shader_root_access" => Keyword::DenyPixelShaderRootAccess,
        "deny_amplification_shader_root_access" => Keyword::DenyAmplificationShaderRootAccess,
        "deny_mesh_shader_root_access" => Keyword::DenyMeshShaderRootAccess,
        "allow_stream_output" => Keyword::AllowStreamOutput,
        "local_root_signature" => Keyword::LocalRootSignature,
        "cbv_srv_uav_heap_directly_indexed" => Keyword::CbvSrvUavHeapDirectlyIndexed,
        "sampler_heap_directly_indexed" => Keyword::SamplerHeapDirectlyIndexed,

        "descriptors_volatile" => Keyword::DescriptorsVolatile,
        "data_volatile" => Keyword::DataVolatile,
        "data_static" => Keyword::DataStatic,
        "data_static_while_set_at_execute" => Keyword::DataStaticWhileSetAtExecute,
        "descriptors_static_keeping_buffer_bounds_checks" => {
            Keyword::DescriptorsStaticKeepingBufferBoundsChecks
        }

        "shader_visibility_all" => Keyword::ShaderVisibilityAll,
        "shader_visibility_vertex" => Keyword::ShaderVisibilityVertex,
        "shader_visibility_hull" => Keyword::ShaderVisibilityHull,
        "shader_visibility_domain" => Keyword::ShaderVisibilityDomain,
        "shader_visibility_geometry" => Keyword::ShaderVisibilityGeometry,
        "shader_visibility_pixel" => Keyword::ShaderVisibilityPixel,
        "shader_visibility_amplification" => Keyword::ShaderVisibilityAmplification,
        "shader_visibility_mesh" => Keyword::ShaderVisibilityMesh,

        "filter_min_mag_mip_point" => Keyword::FilterMinMagMipPoint,
        "filter_min_mag_point_mip_linear" => Keyword::FilterMinMagPointMipLinear,
        "filter_min_point_mag_linear_mip_point" => Keyword::FilterMinPointMagLinearMipPoint,
        "filter_min_point_mag_mip_linear" => Keyword::FilterMinPointMagMipLinear,
        "filter_min_linear_mag_mip_point" => Keyword::FilterMinLinearMagMipPoint,
        "filter_min_linear_mag_point_mip_linear" => Keyword::FilterMinLinearMagPointMipLinear,
        "filter_min_mag_linear_mip_point" => Keyword::FilterMinMagLinearMipPoint,
        "filter_min_mag_mip_linear" => Keyword::FilterMinMagMipLinear,
        "filter_anisotropic" => Keyword::FilterAnisotropic,
        "filter_comparison_min_mag_mip_point" => Keyword::FilterComparisonMinMagMipPoint,
        "filter_comparison_min_mag_point_mip_linear" => {
            Keyword::FilterComparisonMinMagPointMipLinear
        }
        "filter_comparison_min_point_mag_linear_mip_point" => {
            Keyword::FilterComparisonMinPointMagLinearMipPoint
        }
        "filter_comparison_min_point_mag_mip_linear" => {
            Keyword::FilterComparisonMinPointMagMipLinear
        }
        "filter_comparison_min_linear_mag_mip_point" => {
            Keyword::FilterComparisonMinLinearMagMipPoint
        }
        "filter_comparison_min_linear_mag_point_mip_linear" => {
            Keyword::FilterComparisonMinLinearMagPointMipLinear
        }
        "filter_comparison_min_mag_linear_mip_point" => {
            Keyword::FilterComparisonMinMagLinearMipPoint
        }
        "filter_comparison_min_mag_mip_linear" => Keyword::FilterComparisonMinMagMipLinear,
        "filter_comparison_anisotropic" => Keyword::FilterComparisonAnisotropic,
        "filter_minimum_min_mag_mip_point" => Keyword::FilterMinimumMinMagMipPoint,
        "filter_minimum_min_mag_point_mip_linear" => Keyword::FilterMinimumMinMagPointMipLinear,
        "filter_minimum_min_point_mag_linear_mip_point" => {
            Keyword::FilterMinimumMinPointMagLinearMipPoint
        }
        "filter_minimum_min_point_mag_mip_linear" => Keyword::FilterMinimumMinPointMagMipLinear,
        "filter_minimum_min_linear_mag_mip_point" => Keyword::FilterMinimumMinLinearMagMipPoint,
        "filter_minimum_min_linear_mag_point_mip_linear" => {
            Keyword::FilterMinimumMinLinearMagPointMipLinear
        }
        "filter_minimum_min_mag_linear_mip_point" => Keyword::FilterMinimumMinMagLinearMipPoint,
        "filter_minimum_min_mag_mip_linear" => Keyword::FilterMinimumMinMagMipLinear,
        "filter_minimum_anisotropic" => Keyword::FilterMinimumAnisotropic,
        "filter_maximum_min_mag_mip_point" => Keyword::FilterMaximumMinMagMipPoint,
        "filter_maximum_min_mag_point_mip_linear" => Keyword::FilterMaximumMinMagPointMipLinear,
        "filter_maximum_min_point_mag_linear_mip_point" => {
            Keyword::FilterMaximumMinPointMagLinearMipPoint
        }
        "filter_maximum_min_point_mag_mip_linear" => Keyword::FilterMaximumMinPointMagMipLinear,
        "filter_maximum_min_linear_mag_mip_point" => Keyword::FilterMaximumMinLinearMagMipPoint,
        "filter_maximum_min_linear_mag_point_mip_linear" => {
            Keyword::FilterMaximumMinLinearMagPointMipLinear
        }
        "filter_maximum_min_mag_linear_mip_point" => Keyword::FilterMaximumMinMagLinearMipPoint,
        "filter_maximum_min_mag_mip_linear" => Keyword::FilterMaximumMinMagMipLinear,
        "filter_maximum_anisotropic" => Keyword::FilterMaximumAnisotropic,

        "texture_address_wrap" => Keyword::TextureAddressWrap,
        "texture_address_mirror" => Keyword::TextureAddressMirror,
        "texture_address_clamp" => Keyword::TextureAddressClamp,
        "texture_address_border" => Keyword::TextureAddressBorder,
        "texture_address_mirror_once" => Keyword::TextureAddressMirrorOnce,

        "comparison_never" => Keyword::ComparisonNever,
        "comparison_less" => Keyword::ComparisonLess,
        "comparison_equal" => Keyword::ComparisonEqual,
        "comparison_less_equal" => Keyword::ComparisonLessEqual,
        "comparison_greater" => Keyword::ComparisonGreater,
        "comparison_not_equal" => Keyword::ComparisonNotEqual,
        "comparison_greater_equal" => Keyword::ComparisonGreaterEqual,
        "comparison_always" => Keyword::ComparisonAlways,

        "static_border_color_transparent_black" => Keyword::StaticBorderColorTransparentBlack,
        "static_border_color_opaque_black" => Keyword::StaticBorderColorOpaqueBlack,
        "static_border_color_opaque_white" => Keyword::StaticBorderColorOpaqueWhite,
        "static_border_color_opaque_black_uint" => Keyword::StaticBorderColorOpaqueBlackUint,
        "static_border_color_opaque_white_uint" => Keyword::StaticBorderColorOpaqueWhiteUint,

        _ => return None,
    };
    Some(keyword)
}

/// Lex an identifier shaped token: a register, a keyword, or an unknown word
fn any_word(input: &[u8]) -> LexResult<'_, Token> {
    let (rest, word) = identifier(input)?;
    let token = if let Some(slot) = register(word) {
        Token::Register(slot)
    } else if let Some(keyword) = keyword(word) {
        Token::Keyword(keyword)
    } else {
        Token::Unknown
    };
    Ok((rest, token))
}

#[test]
fn test_any_word() {
    let p = any_word;
    assert_eq!(p(b"CBV("), Ok((&b"("[..], Token::Keyword(Keyword::Cbv))));
    assert_eq!(p(b"cbv"), Ok((&b""[..], Token::Keyword(Keyword::Cbv))));
    assert_eq!(
        p(b"MipLODBias="),
        Ok((&b"="[..], Token::Keyword(Keyword::MipLodBias)))
    );
    assert_eq!(
        p(b"Shader_Visibility_Pixel"),
        Ok((&b""[..], Token::Keyword(Keyword::ShaderVisibilityPixel)))
    );
    assert_eq!(
        p(b"b12,"),
        Ok((&b","[..], Token::Register(RegisterSlot::B(12))))
    );
    assert_eq!(p(b"space1"), Ok((&b""[..], Token::Unknown)));
    assert_eq!(p(b"_"), Ok((&b""[..], Token::Unknown)));
    assert!(p(b"0t").is_err());
}

/// Lex a single character symbol into a token
fn symbol_single(op_char: u8, op_token: Token) -> impl Fn(&[u8]) -> LexResult<'_, Token> {
    move |input: &[u8]| match input {
        [c, rest @ ..] if *c == op_char => Ok((rest, op_token)),
        _ => wrong_chars(input),
    }
}

/// Lex any single character as an unknown token
///
/// Consumes a whole UTF-8 sequence so token text always splits on character boundaries.
fn any_char(input: &[u8]) -> LexResult<'_, Token> {
    let width = match input.first() {
        None => return wrong_chars(input),
        Some(c) if *c < 0x80 => 1,
        Some(c) if *c >= 0xF0 => 4,
        Some(c) if *c >= 0xE0 => 3,
        Some(_) => 2,
    };
    Ok((&input[width.min(input.len())..], Token::Unknown))
}

/// Lex any single non-space token
fn token(input: &[u8]) -> LexResult<'_, Token> {
    choose(
        &[
            &symbol_single(b',', Token::Comma),
            &symbol_single(b'(', Token::LeftParen),
            &symbol_single(b')', Token::RightParen),
            &symbol_single(b'=', Token::Equals),
            &symbol_single(b'|', Token::VerticalBar),
            &literal_number,
            &any_word,
            &any_char,
        ],
        input,
    )
}

/// Pull based tokenizer over a root signature string
///
/// Holds at most one token of lookahead.
pub struct Lexer<'s> {
    source: &'s str,
    position: usize,
    base_location: SourceLocation,
    lookahead: Option<LexToken<'s>>,
}

impl<'s> Lexer<'s> {
    /// Create a lexer over a source string
    ///
    /// `base_location` is the location of the first byte of the string.
    pub fn new(source: &'s str, base_location: SourceLocation) -> Self {
        // An embedded nul terminates the string
        let source = match source.find('\0') {
            Some(end) => &source[..end],
            None => source,
        };
        Lexer {
            source,
            position: 0,
            base_location,
            lookahead: None,
        }
    }

    /// Consume and return the next token
    pub fn next_token(&mut self) -> LexToken<'s> {
        match self.lookahead.take() {
            Some(token) => token,
            None => self.read_token(),
        }
    }

    /// Return the next token without consuming it
    pub fn peek_token(&mut self) -> LexToken<'s> {
        match self.lookahead {
            Some(token) => token,
            None => {
                let token = self.read_token();
                self.lookahead = Some(token);
                token
            }
        }
    }

    /// Check if there are no more tokens before the end of the string
    pub fn at_end(&self) -> bool {
        match &self.lookahead {
            Some(token) => token.token == Token::Eof,
            None => skip_spaces(&self.source.as_bytes()[self.position..]).is_empty(),
        }
    }

    /// Read the next token from the string
    fn read_token(&mut self) -> LexToken<'s> {
        let bytes = self.source.as_bytes();
        let input = skip_spaces(&bytes[self.position..]);
        let start = bytes.len() - input.len();

        let (rest, token) = if input.is_empty() {
            (input, Token::Eof)
        } else {
            // Every non-empty input forms at least an unknown token
            token(input).unwrap_or((&input[input.len()..], Token::Unknown))
        };

        let end = bytes.len() - rest.len();
        self.position = end;

        LexToken {
            token,
            text: &self.source[start..end],
            location: self.base_location.offset(start as u32),
        }
    }
}

/// Run the lexer on input text to turn it into tokens without location information
///
/// The end of input token is not included.
pub fn minilex(text: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(text, SourceLocation::UNKNOWN);
    let mut tokens = Vec::new();
    loop {
        match lexer.next_token().token {
            Token::Eof => break,
            token => tokens.push(token),
        }
    }
    tokens
}

#[test]
fn test_minilex() {
    assert_eq!(minilex(""), Vec::new());
    assert_eq!(minilex("   "), Vec::new());
    assert_eq!(
        minilex("CBV(b0, space = 1)"),
        vec![
            Token::Keyword(Keyword::Cbv),
            Token::LeftParen,
            Token::Register(RegisterSlot::B(0)),
            Token::Comma,
            Token::Keyword(Keyword::Space),
            Token::Equals,
            Token::LiteralUInt(1),
            Token::RightParen,
        ]
    );
    assert_eq!(
        minilex("RootFlags(ALLOW_STREAM_OUTPUT|LOCAL_ROOT_SIGNATURE)"),
        vec![
            Token::Keyword(Keyword::RootFlags),
            Token::LeftParen,
            Token::Keyword(Keyword::AllowStreamOutput),
            Token::VerticalBar,
            Token::Keyword(Keyword::LocalRootSignature),
            Token::RightParen,
        ]
    );

    // Numbers take priority over words
    assert_eq!(
        minilex("1t0 -5"),
        vec![
            Token::LiteralUInt(1),
            Token::Register(RegisterSlot::T(0)),
            Token::LiteralInt(-5),
        ]
    );

    // Tabs and line breaks are not skipped
    assert_eq!(
        minilex("a\tb\n"),
        vec![Token::Unknown, Token::Unknown, Token::Unknown, Token::Unknown]
    );

    // Input ends at an embedded nul
    assert_eq!(minilex("CBV\0(b0)"), vec![Token::Keyword(Keyword::Cbv)]);
}

#[test]
fn test_truncation() {
    let long_word = "a".repeat(MAX_TOKEN_LENGTH + 7);
    let mut lexer = Lexer::new(&long_word, SourceLocation::first());
    let first = lexer.next_token();
    assert_eq!(first.token, Token::Unknown);
    assert_eq!(first.text.len(), MAX_TOKEN_LENGTH);
    let second = lexer.next_token();
    assert_eq!(second.text.len(), 7);
    assert_eq!(
        second.location,
        SourceLocation::first().offset(MAX_TOKEN_LENGTH as u32)
    );
    assert_eq!(lexer.next_token().token, Token::Eof);

    let long_number = format!("{}1234", "0".repeat(MAX_TOKEN_LENGTH));
    assert_eq!(
        minilex(&long_number),
        vec![Token::LiteralUInt(0), Token::LiteralUInt(1234)]
    );
}

#[test]
fn test_lexer() {
    let mut lexer = Lexer::new("  SRV(t3) ⚠", SourceLocation::first().offset(10));
    assert!(!lexer.at_end());

    let peeked = lexer.peek_token();
    assert_eq!(peeked.token, Token::Keyword(Keyword::Srv));
    assert_eq!(peeked.text, "SRV");
    assert_eq!(peeked.location, SourceLocation::first().offset(12));
    assert_eq!(lexer.peek_token(), peeked);
    assert_eq!(lexer.next_token(), peeked);

    assert_eq!(lexer.next_token().token, Token::LeftParen);
    let reg = lexer.next_token();
    assert_eq!(reg.token, Token::Register(RegisterSlot::T(3)));
    assert_eq!(reg.text, "t3");
    assert_eq!(lexer.next_token().token, Token::RightParen);
    assert!(!lexer.at_end());

    let unknown = lexer.next_token();
    assert_eq!(unknown.token, Token::Unknown);
    assert_eq!(unknown.text, "⚠");
    assert!(lexer.at_end());

    let eof = lexer.next_token();
    assert_eq!(eof.token, Token::Eof);
    assert_eq!(eof.text, "");
    assert_eq!(lexer.next_token().token, Token::Eof);
}
