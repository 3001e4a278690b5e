//! Tokens
//!
//! The tokens module contains all the definitions for tokens produced by the root signature lexer.

use crate::*;

/// A register reference with its slot index
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum RegisterSlot {
    /// Shader resource view register
    T(u32),
    /// Unordered access view register
    U(u32),
    /// Constant buffer register
    B(u32),
    /// Sampler register
    S(u32),
}

impl RegisterSlot {
    /// Get the slot index without the register class
    pub fn index(&self) -> u32 {
        match *self {
            RegisterSlot::T(i) | RegisterSlot::U(i) | RegisterSlot::B(i) | RegisterSlot::S(i) => {
                i
            }
        }
    }

    /// Get the register class
    pub fn register_type(&self) -> RegisterType {
        match self {
            RegisterSlot::T(_) => RegisterType::T,
            RegisterSlot::U(_) => RegisterType::U,
            RegisterSlot::B(_) => RegisterType::B,
            RegisterSlot::S(_) => RegisterType::S,
        }
    }
}

/// The class of a register without its index
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum RegisterType {
    T,
    U,
    B,
    S,
}

impl std::fmt::Display for RegisterType {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            RegisterType::T => write!(f, "t"),
            RegisterType::U => write!(f, "u"),
            RegisterType::B => write!(f, "b"),
            RegisterType::S => write!(f, "s"),
        }
    }
}

/// Any token that may appear in a root signature string
#[derive(PartialEq, Debug, Copy, Clone)]
pub enum Token {
    /// Marks the end of the string
    Eof,

    Comma,
    LeftParen,
    RightParen,
    Equals,
    VerticalBar,

    /// Literal integer without a sign or with an explicit +
    LiteralUInt(u32),

    /// Literal integer with an explicit -
    LiteralInt(i32),

    /// Literal with a decimal point, exponent, or float suffix
    LiteralFloat(f32),

    /// Register reference like `t0` or `b12`
    Register(RegisterSlot),

    Keyword(Keyword),

    /// Text which does not form any valid token
    Unknown,
}

/// Case-insensitive words with meaning in a root signature
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum Keyword {
    // Declarations
    RootFlags,
    RootConstants,
    Cbv,
    Srv,
    Uav,
    Sampler,
    DescriptorTable,
    StaticSampler,

    // Named parameters
    Num32BitConstants,
    Space,
    Visibility,
    Flags,
    NumDescriptors,
    Offset,
    Filter,
    AddressU,
    AddressV,
    AddressW,
    MipLodBias,
    MaxAnisotropy,
    ComparisonFunc,
    BorderColor,
    MinLod,
    MaxLod,

    // Special values
    Unbounded,
    DescriptorRangeOffsetAppend,

    // Root signature flags
    AllowInputAssemblerInputLayout,
    DenyVertexShaderRootAccess,
    DenyHullShaderRootAccess,
    DenyDomainShaderRootAccess,
    DenyGeometryShaderRootAccess,
    DenyPixelShaderRootAccess,
    DenyAmplificationShaderRootAccess,
    DenyMeshShaderRootAccess,
    AllowStreamOutput,
    LocalRootSignature,
    CbvSrvUavHeapDirectlyIndexed,
    SamplerHeapDirectlyIndexed,

    // Root descriptor and descriptor range flags
    DescriptorsVolatile,
    DataVolatile,
    DataStatic,
    DataStaticWhileSetAtExecute,
    DescriptorsStaticKeepingBufferBoundsChecks,

    // Shader visibility
    ShaderVisibilityAll,
    ShaderVisibilityVertex,
    ShaderVisibilityHull,
    ShaderVisibilityDomain,
    ShaderVisibilityGeometry,
    ShaderVisibilityPixel,
    ShaderVisibilityAmplification,
    ShaderVisibilityMesh,

    // Filters
    FilterMinMagMipPoint,
    FilterMinMagPointMipLinear,
    FilterMinPointMagLinearMipPoint,
    FilterMinPointMagMipLinear,
    FilterMinLinearMagMipPoint,
    FilterMinLinearMagPointMipLinear,
    FilterMinMagLinearMipPoint,
    FilterMinMagMipLinear,
    FilterAnisotropic,
    FilterComparisonMinMagMipPoint,
    FilterComparisonMinMagPointMipLinear,
    FilterComparisonMinPointMagLinearMipPoint,
    FilterComparisonMinPointMagMipLinear,
    FilterComparisonMinLinearMagMipPoint,
    FilterComparisonMinLinearMagPointMipLinear,
    FilterComparisonMinMagLinearMipPoint,
    FilterComparisonMinMagMipLinear,
    FilterComparisonAnisotropic,
    FilterMinimumMinMagMipPoint,
    FilterMinimumMinMagPointMipLinear,
    FilterMinimumMinPointMagLinearMipPoint,
    FilterMinimumMinPointMagMipLinear,
    FilterMinimumMinLinearMagMipPoint,
    FilterMinimumMinLinearMagPointMipLinear,
    FilterMinimumMinMagLinearMipPoint,
    FilterMinimumMinMagMipLinear,
    FilterMinimumAnisotropic,
    FilterMaximumMinMagMipPoint,
    FilterMaximumMinMagPointMipLinear,
    FilterMaximumMinPointMagLinearMipPoint,
    FilterMaximumMinPointMagMipLinear,
    FilterMaximumMinLinearMagMipPoint,
    FilterMaximumMinLinearMagPointMipLinear,
    FilterMaximumMinMagLinearMipPoint,
    FilterMaximumMinMagMipLinear,
    FilterMaximumAnisotropic,

    // Texture address modes
    TextureAddressWrap,
    TextureAddressMirror,
    TextureAddressClamp,
    TextureAddressBorder,
    TextureAddressMirrorOnce,

    // Comparison functions
    ComparisonNever,
    ComparisonLess,
    ComparisonEqual,
    ComparisonLessEqual,
    ComparisonGreater,
    ComparisonNotEqual,
    ComparisonGreaterEqual,
    ComparisonAlways,

    // Static border colors
    StaticBorderColorTransparentBlack,
    StaticBorderColorOpaqueBlack,
    StaticBorderColorOpaqueWhite,
    StaticBorderColorOpaqueBlackUint,
    StaticBorderColorOpaqueWhiteUint,
}

/// A [Token] with the text it was lexed from and source location information attached
#[derive(PartialEq, Clone, Copy)]
pub struct LexToken<'s> {
    pub token: Token,

    /// Exact source text for the token
    /// May be shorter than the source run if the token was truncated
    pub text: &'s str,

    pub location: SourceLocation,
}

impl<'s> LexToken<'s> {
    /// Get the number of bytes of source the token covers
    pub fn width(&self) -> u32 {
        self.text.len() as u32
    }
}

impl<'s> std::fmt::Debug for LexToken<'s> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{:?} \"{}\" @ {}",
            self.token,
            self.text,
            self.location.get_raw()
        )
    }
}
