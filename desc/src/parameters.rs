use crate::*;

/// Inline 32-bit constants bound to a constant buffer register
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub struct RootConstants {
    pub shader_register: u32,
    pub register_space: u32,
    pub num_32bit_values: u32,
}

/// A sampler baked into the root signature
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct StaticSampler {
    pub filter: Filter,
    pub address_u: TextureAddressMode,
    pub address_v: TextureAddressMode,
    pub address_w: TextureAddressMode,
    pub mip_lod_bias: f32,
    pub max_anisotropy: u32,
    pub comparison_func: ComparisonFunc,
    pub border_color: StaticBorderColor,
    pub min_lod: f32,
    pub max_lod: f32,
    pub shader_register: u32,
    pub register_space: u32,
    pub shader_visibility: ShaderVisibility,
}

impl StaticSampler {
    /// Create a static sampler for a register with every other property at its default
    pub fn new(shader_register: u32) -> Self {
        StaticSampler {
            filter: Filter::default(),
            address_u: TextureAddressMode::default(),
            address_v: TextureAddressMode::default(),
            address_w: TextureAddressMode::default(),
            mip_lod_bias: 0.0,
            max_anisotropy: 16,
            comparison_func: ComparisonFunc::default(),
            border_color: StaticBorderColor::default(),
            min_lod: 0.0,
            max_lod: f32::MAX,
            shader_register,
            register_space: 0,
            shader_visibility: ShaderVisibility::default(),
        }
    }
}
