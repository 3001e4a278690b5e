//! Descriptor types for root signature version 1.1
//!
//! Version 1.1 adds volatility flags to root descriptors and descriptor ranges.
//! This is the version the parser builds before converting to the requested version.

use crate::*;

/// A descriptor bound directly in the root signature
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub struct RootDescriptor {
    pub shader_register: u32,
    pub register_space: u32,
    pub flags: RootDescriptorFlags,
}

/// A contiguous run of descriptors in a descriptor table
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub struct DescriptorRange {
    pub range_type: DescriptorRangeType,
    pub num_descriptors: DescriptorCount,
    pub base_shader_register: u32,
    pub register_space: u32,
    pub flags: DescriptorRangeFlags,
    pub offset: RangeOffset,
}

impl DescriptorRange {
    /// Create a range with a single descriptor appended after the previous range
    pub fn new(range_type: DescriptorRangeType, base_shader_register: u32) -> Self {
        DescriptorRange {
            range_type,
            num_descriptors: DescriptorCount::default(),
            base_shader_register,
            register_space: 0,
            flags: DescriptorRangeFlags::empty(),
            offset: RangeOffset::default(),
        }
    }
}

#[derive(PartialEq, Eq, Debug, Clone, Default)]
pub struct DescriptorTable {
    pub ranges: Vec<DescriptorRange>,
}

#[derive(PartialEq, Eq, Debug, Clone)]
pub enum RootParameterKind {
    Constants(RootConstants),
    Descriptor(RootDescriptorType, RootDescriptor),
    DescriptorTable(DescriptorTable),
}

#[derive(PartialEq, Eq, Debug, Clone)]
pub struct RootParameter {
    pub kind: RootParameterKind,
    pub shader_visibility: ShaderVisibility,
}

#[derive(PartialEq, Debug, Clone, Default)]
pub struct RootSignatureDesc {
    pub flags: RootSignatureFlags,
    pub parameters: Vec<RootParameter>,
    pub static_samplers: Vec<StaticSampler>,
}
