/// Shader stages that can see a root parameter or static sampler
#[derive(PartialEq, Eq, Debug, Copy, Clone, Hash, Default)]
#[repr(u32)]
pub enum ShaderVisibility {
    #[default]
    All = 0,
    Vertex = 1,
    Hull = 2,
    Domain = 3,
    Geometry = 4,
    Pixel = 5,
    Amplification = 6,
    Mesh = 7,
}

/// Texture sampling filter
#[derive(PartialEq, Eq, Debug, Copy, Clone, Hash, Default)]
#[repr(u32)]
pub enum Filter {
    MinMagMipPoint = 0x0,
    MinMagPointMipLinear = 0x1,
    MinPointMagLinearMipPoint = 0x4,
    MinPointMagMipLinear = 0x5,
    MinLinearMagMipPoint = 0x10,
    MinLinearMagPointMipLinear = 0x11,
    MinMagLinearMipPoint = 0x14,
    MinMagMipLinear = 0x15,
    #[default]
    Anisotropic = 0x55,
    ComparisonMinMagMipPoint = 0x80,
    ComparisonMinMagPointMipLinear = 0x81,
    ComparisonMinPointMagLinearMipPoint = 0x84,
    ComparisonMinPointMagMipLinear = 0x85,
    ComparisonMinLinearMagMipPoint = 0x90,
    ComparisonMinLinearMagPointMipLinear = 0x91,
    ComparisonMinMagLinearMipPoint = 0x94,
    ComparisonMinMagMipLinear = 0x95,
    ComparisonAnisotropic = 0xd5,
    MinimumMinMagMipPoint = 0x100,
    MinimumMinMagPointMipLinear = 0x101,
    MinimumMinPointMagLinearMipPoint = 0x104,
    MinimumMinPointMagMipLinear = 0x105,
    MinimumMinLinearMagMipPoint = 0x110,
    MinimumMinLinearMagPointMipLinear = 0x111,
    MinimumMinMagLinearMipPoint = 0x114,
    MinimumMinMagMipLinear = 0x115,
    MinimumAnisotropic = 0x155,
    MaximumMinMagMipPoint = 0x180,
    MaximumMinMagPointMipLinear = 0x181,
    MaximumMinPointMagLinearMipPoint = 0x184,
    MaximumMinPointMagMipLinear = 0x185,
    MaximumMinLinearMagMipPoint = 0x190,
    MaximumMinLinearMagPointMipLinear = 0x191,
    MaximumMinMagLinearMipPoint = 0x194,
    MaximumMinMagMipLinear = 0x195,
    MaximumAnisotropic = 0x1d5,
}

/// How texture coordinates outside of [0, 1] are resolved
#[derive(PartialEq, Eq, Debug, Copy, Clone, Hash, Default)]
#[repr(u32)]
pub enum TextureAddressMode {
    #[default]
    Wrap = 1,
    Mirror = 2,
    Clamp = 3,
    Border = 4,
    MirrorOnce = 5,
}

/// Comparison used by comparison samplers
#[derive(PartialEq, Eq, Debug, Copy, Clone, Hash, Default)]
#[repr(u32)]
pub enum ComparisonFunc {
    Never = 1,
    Less = 2,
    Equal = 3,
    #[default]
    LessEqual = 4,
    Greater = 5,
    NotEqual = 6,
    GreaterEqual = 7,
    Always = 8,
}

/// Border color for static samplers using [TextureAddressMode::Border]
#[derive(PartialEq, Eq, Debug, Copy, Clone, Hash, Default)]
#[repr(u32)]
pub enum StaticBorderColor {
    TransparentBlack = 0,
    OpaqueBlack = 1,
    #[default]
    OpaqueWhite = 2,
    OpaqueBlackUint = 3,
    OpaqueWhiteUint = 4,
}

/// Type of descriptor in a descriptor table range
#[derive(PartialEq, Eq, Debug, Copy, Clone, Hash)]
#[repr(u32)]
pub enum DescriptorRangeType {
    Srv = 0,
    Uav = 1,
    Cbv = 2,
    Sampler = 3,
}

/// Type of descriptor bound directly in the root signature
#[derive(PartialEq, Eq, Debug, Copy, Clone, Hash)]
#[repr(u32)]
pub enum RootDescriptorType {
    Cbv = 2,
    Srv = 3,
    Uav = 4,
}

/// Number of descriptors in a descriptor table range
#[derive(PartialEq, Eq, Debug, Copy, Clone, Hash)]
pub enum DescriptorCount {
    Bounded(u32),

    /// The range extends to the end of the descriptor heap
    Unbounded,
}

impl DescriptorCount {
    /// Get the value as stored in a serialized descriptor, where unbounded is `u32::MAX`
    pub fn raw(&self) -> u32 {
        match *self {
            DescriptorCount::Bounded(count) => count,
            DescriptorCount::Unbounded => u32::MAX,
        }
    }
}

impl Default for DescriptorCount {
    fn default() -> Self {
        DescriptorCount::Bounded(1)
    }
}

/// Offset of a descriptor table range from the start of the table
#[derive(PartialEq, Eq, Debug, Copy, Clone, Hash, Default)]
pub enum RangeOffset {
    Explicit(u32),

    /// The range starts directly after the previous range
    #[default]
    Append,
}

impl RangeOffset {
    /// Get the value as stored in a serialized descriptor, where append is `u32::MAX`
    pub fn raw(&self) -> u32 {
        match *self {
            RangeOffset::Explicit(offset) => offset,
            RangeOffset::Append => u32::MAX,
        }
    }
}

#[test]
fn test_sentinels() {
    assert_eq!(DescriptorCount::default(), DescriptorCount::Bounded(1));
    assert_eq!(DescriptorCount::Bounded(7).raw(), 7);
    assert_eq!(DescriptorCount::Unbounded.raw(), 0xFFFFFFFF);
    assert_eq!(RangeOffset::default(), RangeOffset::Append);
    assert_eq!(RangeOffset::Explicit(3).raw(), 3);
    assert_eq!(RangeOffset::Append.raw(), 0xFFFFFFFF);
}

#[test]
fn test_enum_values() {
    assert_eq!(ShaderVisibility::default(), ShaderVisibility::All);
    assert_eq!(ShaderVisibility::Mesh as u32, 7);
    assert_eq!(Filter::default() as u32, 0x55);
    assert_eq!(Filter::ComparisonAnisotropic as u32, 0xd5);
    assert_eq!(Filter::MaximumMinMagMipLinear as u32, 0x195);
    assert_eq!(TextureAddressMode::default() as u32, 1);
    assert_eq!(ComparisonFunc::default() as u32, 4);
    assert_eq!(StaticBorderColor::default() as u32, 2);
    assert_eq!(DescriptorRangeType::Sampler as u32, 3);
    assert_eq!(RootDescriptorType::Uav as u32, 4);
}
