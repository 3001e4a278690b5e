//! Descriptor types for root signature version 1.0
//!
//! Version 1.0 has no volatility flags. Every descriptor is treated as volatile.

use crate::*;

/// A descriptor bound directly in the root signature
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub struct RootDescriptor {
    pub shader_register: u32,
    pub register_space: u32,
}

/// A contiguous run of descriptors in a descriptor table
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub struct DescriptorRange {
    pub range_type: DescriptorRangeType,
    pub num_descriptors: DescriptorCount,
    pub base_shader_register: u32,
    pub register_space: u32,
    pub offset: RangeOffset,
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
