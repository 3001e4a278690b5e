use crate::*;
use tracing::debug;

/// Failure to represent a descriptor in an older schema version
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum ConversionError {
    /// A root descriptor uses flags that do not exist in the target version
    RootDescriptorFlags { parameter: usize },

    /// A descriptor range uses flags that do not exist in the target version
    DescriptorRangeFlags { parameter: usize, range: usize },
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ConversionError::RootDescriptorFlags { parameter } => write!(
                f,
                "root descriptor flags on parameter {} can not be represented in {}",
                parameter,
                RootSignatureVersion::V1_0
            ),
            ConversionError::DescriptorRangeFlags { parameter, range } => write!(
                f,
                "descriptor range flags on range {} of parameter {} can not be represented in {}",
                range,
                parameter,
                RootSignatureVersion::V1_0
            ),
        }
    }
}

impl VersionedRootSignatureDesc {
    /// Convert the descriptor to another schema version
    ///
    /// Converting to the same version returns a copy.
    /// Upgrading from 1.0 applies the 1.0 volatility rules as explicit flags.
    /// Downgrading to 1.0 fails if any root descriptor or range has flags set.
    pub fn convert(
        &self,
        target: RootSignatureVersion,
    ) -> Result<VersionedRootSignatureDesc, ConversionError> {
        debug!(from = %self.version(), to = %target, "converting root signature");
        match (self, target) {
            (VersionedRootSignatureDesc::V1_0(_), RootSignatureVersion::V1_0)
            | (VersionedRootSignatureDesc::V1_1(_), RootSignatureVersion::V1_1) => Ok(self.clone()),
            (VersionedRootSignatureDesc::V1_0(desc), RootSignatureVersion::V1_1) => {
                Ok(VersionedRootSignatureDesc::V1_1(upgrade(desc)))
            }
            (VersionedRootSignatureDesc::V1_1(desc), RootSignatureVersion::V1_0) => {
                Ok(VersionedRootSignatureDesc::V1_0(downgrade(desc)?))
            }
        }
    }
}

/// Build a 1.1 descriptor which binds the same way as a 1.0 descriptor
fn upgrade(desc: &v1_0::RootSignatureDesc) -> v1_1::RootSignatureDesc {
    let parameters = desc
        .parameters
        .iter()
        .map(|parameter| {
            let kind = match &parameter.kind {
                v1_0::RootParameterKind::Constants(constants) => {
                    v1_1::RootParameterKind::Constants(*constants)
                }
                v1_0::RootParameterKind::Descriptor(ty, descriptor) => {
                    v1_1::RootParameterKind::Descriptor(
                        *ty,
                        v1_1::RootDescriptor {
                            shader_register: descriptor.shader_register,
                            register_space: descriptor.register_space,
                            flags: RootDescriptorFlags::DATA_VOLATILE,
                        },
                    )
                }
                v1_0::RootParameterKind::DescriptorTable(table) => {
                    v1_1::RootParameterKind::DescriptorTable(v1_1::DescriptorTable {
                        ranges: table.ranges.iter().map(upgrade_range).collect(),
                    })
                }
            };
            v1_1::RootParameter {
                kind,
                shader_visibility: parameter.shader_visibility,
            }
        })
        .collect();

    v1_1::RootSignatureDesc {
        flags: desc.flags,
        parameters,
        static_samplers: desc.static_samplers.clone(),
    }
}

fn upgrade_range(range: &v1_0::DescriptorRange) -> v1_1::DescriptorRange {
    // Sampler descriptors have no data to be volatile
    let flags = match range.range_type {
        DescriptorRangeType::Sampler => DescriptorRangeFlags::DESCRIPTORS_VOLATILE,
        _ => DescriptorRangeFlags::DESCRIPTORS_VOLATILE | DescriptorRangeFlags::DATA_VOLATILE,
    };
    v1_1::DescriptorRange {
        range_type: range.range_type,
        num_descriptors: range.num_descriptors,
        base_shader_register: range.base_shader_register,
        register_space: range.register_space,
        flags,
        offset: range.offset,
    }
}

/// Build a 1.0 descriptor from a 1.1 descriptor which does not use any volatility flags
fn downgrade(desc: &v1_1::RootSignatureDesc) -> Result<v1_0::RootSignatureDesc, ConversionError> {
    let mut parameters = Vec::with_capacity(desc.parameters.len());
    for (parameter_index, parameter) in desc.parameters.iter().enumerate() {
        let kind = match &parameter.kind {
            v1_1::RootParameterKind::Constants(constants) => {
                v1_0::RootParameterKind::Constants(*constants)
            }
            v1_1::RootParameterKind::Descriptor(ty, descriptor) => {
                if !descriptor.flags.is_empty() {
                    return Err(ConversionError::RootDescriptorFlags {
                        parameter: parameter_index,
                    });
                }
                v1_0::RootParameterKind::Descriptor(
                    *ty,
                    v1_0::RootDescriptor {
                        shader_register: descriptor.shader_register,
                        register_space: descriptor.register_space,
                    },
                )
            }
            v1_1::RootParameterKind::DescriptorTable(table) => {
                let mut ranges = Vec::with_capacity(table.ranges.len());
                for (range_index, range) in table.ranges.iter().enumerate() {
                    if !range.flags.is_empty() {
                        return Err(ConversionError::DescriptorRangeFlags {
                            parameter: parameter_index,
                            range: range_index,
                        });
                    }
                    ranges.push(v1_0::DescriptorRange {
                        range_type: range.range_type,
                        num_descriptors: range.num_descriptors,
                        base_shader_register: range.base_shader_register,
                        register_space: range.register_space,
                        offset: range.offset,
                    });
                }
                v1_0::RootParameterKind::DescriptorTable(v1_0::DescriptorTable { ranges })
            }
        };
        parameters.push(v1_0::RootParameter {
            kind,
            shader_visibility: parameter.shader_visibility,
        });
    }

    Ok(v1_0::RootSignatureDesc {
        flags: desc.flags,
        parameters,
        static_samplers: desc.static_samplers.clone(),
    })
}

#[cfg(test)]
fn sample_v1_0() -> v1_0::RootSignatureDesc {
    v1_0::RootSignatureDesc {
        flags: RootSignatureFlags::ALLOW_INPUT_ASSEMBLER_INPUT_LAYOUT,
        parameters: vec![
            v1_0::RootParameter {
                kind: v1_0::RootParameterKind::Descriptor(
                    RootDescriptorType::Cbv,
                    v1_0::RootDescriptor {
                        shader_register: 0,
                        register_space: 1,
                    },
                ),
                shader_visibility: ShaderVisibility::Pixel,
            },
            v1_0::RootParameter {
                kind: v1_0::RootParameterKind::DescriptorTable(v1_0::DescriptorTable {
                    ranges: vec![
                        v1_0::DescriptorRange {
                            range_type: DescriptorRangeType::Srv,
                            num_descriptors: DescriptorCount::Unbounded,
                            base_shader_register: 2,
                            register_space: 0,
                            offset: RangeOffset::Append,
                        },
                        v1_0::DescriptorRange {
                            range_type: DescriptorRangeType::Sampler,
                            num_descriptors: DescriptorCount::Bounded(4),
                            base_shader_register: 0,
                            register_space: 0,
                            offset: RangeOffset::Explicit(8),
                        },
                    ],
                }),
                shader_visibility: ShaderVisibility::All,
            },
            v1_0::RootParameter {
                kind: v1_0::RootParameterKind::Constants(RootConstants {
                    shader_register: 3,
                    register_space: 0,
                    num_32bit_values: 4,
                }),
                shader_visibility: ShaderVisibility::Vertex,
            },
        ],
        static_samplers: vec![StaticSampler::new(1)],
    }
}

#[test]
fn test_convert_same_version() {
    let desc = VersionedRootSignatureDesc::V1_0(sample_v1_0());
    assert_eq!(desc.convert(RootSignatureVersion::V1_0), Ok(desc.clone()));

    let desc = VersionedRootSignatureDesc::V1_1(v1_1::RootSignatureDesc::default());
    assert_eq!(desc.convert(RootSignatureVersion::V1_1), Ok(desc.clone()));
}

#[test]
fn test_convert_upgrade() {
    let upgraded = match VersionedRootSignatureDesc::V1_0(sample_v1_0())
        .convert(RootSignatureVersion::V1_1)
    {
        Ok(VersionedRootSignatureDesc::V1_1(desc)) => desc,
        other => panic!("unexpected conversion result: {:?}", other),
    };

    assert_eq!(
        upgraded.flags,
        RootSignatureFlags::ALLOW_INPUT_ASSEMBLER_INPUT_LAYOUT
    );
    assert_eq!(upgraded.static_samplers, vec![StaticSampler::new(1)]);

    pretty_assertions::assert_eq!(
        upgraded.parameters[0],
        v1_1::RootParameter {
            kind: v1_1::RootParameterKind::Descriptor(
                RootDescriptorType::Cbv,
                v1_1::RootDescriptor {
                    shader_register: 0,
                    register_space: 1,
                    flags: RootDescriptorFlags::DATA_VOLATILE,
                },
            ),
            shader_visibility: ShaderVisibility::Pixel,
        }
    );

    let ranges = match &upgraded.parameters[1].kind {
        v1_1::RootParameterKind::DescriptorTable(table) => &table.ranges,
        other => panic!("expected descriptor table: {:?}", other),
    };
    assert_eq!(
        ranges[0].flags,
        DescriptorRangeFlags::DESCRIPTORS_VOLATILE | DescriptorRangeFlags::DATA_VOLATILE
    );
    assert_eq!(ranges[0].num_descriptors, DescriptorCount::Unbounded);
    assert_eq!(ranges[1].flags, DescriptorRangeFlags::DESCRIPTORS_VOLATILE);
    assert_eq!(ranges[1].offset, RangeOffset::Explicit(8));

    assert_eq!(
        upgraded.parameters[2].kind,
        v1_1::RootParameterKind::Constants(RootConstants {
            shader_register: 3,
            register_space: 0,
            num_32bit_values: 4,
        })
    );
}

#[test]
fn test_convert_downgrade() {
    let mut desc = v1_1::RootSignatureDesc::default();
    desc.parameters.push(v1_1::RootParameter {
        kind: v1_1::RootParameterKind::Descriptor(
            RootDescriptorType::Srv,
            v1_1::RootDescriptor {
                shader_register: 5,
                register_space: 2,
                flags: RootDescriptorFlags::empty(),
            },
        ),
        shader_visibility: ShaderVisibility::All,
    });
    desc.parameters.push(v1_1::RootParameter {
        kind: v1_1::RootParameterKind::DescriptorTable(v1_1::DescriptorTable {
            ranges: vec![v1_1::DescriptorRange::new(DescriptorRangeType::Uav, 1)],
        }),
        shader_visibility: ShaderVisibility::Hull,
    });

    let expected = v1_0::RootSignatureDesc {
        flags: RootSignatureFlags::empty(),
        parameters: vec![
            v1_0::RootParameter {
                kind: v1_0::RootParameterKind::Descriptor(
                    RootDescriptorType::Srv,
                    v1_0::RootDescriptor {
                        shader_register: 5,
                        register_space: 2,
                    },
                ),
                shader_visibility: ShaderVisibility::All,
            },
            v1_0::RootParameter {
                kind: v1_0::RootParameterKind::DescriptorTable(v1_0::DescriptorTable {
                    ranges: vec![v1_0::DescriptorRange {
                        range_type: DescriptorRangeType::Uav,
                        num_descriptors: DescriptorCount::Bounded(1),
                        base_shader_register: 1,
                        register_space: 0,
                        offset: RangeOffset::Append,
                    }],
                }),
                shader_visibility: ShaderVisibility::Hull,
            },
        ],
        static_samplers: Vec::new(),
    };
    pretty_assertions::assert_eq!(
        VersionedRootSignatureDesc::V1_1(desc).convert(RootSignatureVersion::V1_0),
        Ok(VersionedRootSignatureDesc::V1_0(expected))
    );
}

#[test]
fn test_convert_downgrade_flags() {
    let descriptor = v1_1::RootParameter {
        kind: v1_1::RootParameterKind::Descriptor(
            RootDescriptorType::Cbv,
            v1_1::RootDescriptor {
                shader_register: 0,
                register_space: 0,
                flags: RootDescriptorFlags::DATA_STATIC,
            },
        ),
        shader_visibility: ShaderVisibility::All,
    };
    let desc = v1_1::RootSignatureDesc {
        parameters: vec![descriptor],
        ..Default::default()
    };
    assert_eq!(
        VersionedRootSignatureDesc::V1_1(desc).convert(RootSignatureVersion::V1_0),
        Err(ConversionError::RootDescriptorFlags { parameter: 0 })
    );

    let mut volatile_range = v1_1::DescriptorRange::new(DescriptorRangeType::Cbv, 0);
    volatile_range.flags = DescriptorRangeFlags::DATA_VOLATILE;
    let table = v1_1::RootParameter {
        kind: v1_1::RootParameterKind::DescriptorTable(v1_1::DescriptorTable {
            ranges: vec![
                v1_1::DescriptorRange::new(DescriptorRangeType::Srv, 0),
                volatile_range,
            ],
        }),
        shader_visibility: ShaderVisibility::All,
    };
    let desc = v1_1::RootSignatureDesc {
        parameters: vec![
            v1_1::RootParameter {
                kind: v1_1::RootParameterKind::Constants(RootConstants {
                    shader_register: 0,
                    register_space: 0,
                    num_32bit_values: 1,
                }),
                shader_visibility: ShaderVisibility::All,
            },
            table,
        ],
        ..Default::default()
    };
    let err = VersionedRootSignatureDesc::V1_1(desc)
        .convert(RootSignatureVersion::V1_0)
        .unwrap_err();
    assert_eq!(
        err,
        ConversionError::DescriptorRangeFlags {
            parameter: 1,
            range: 1
        }
    );
    assert_eq!(
        err.to_string(),
        "descriptor range flags on range 1 of parameter 1 can not be represented in root_sig_1_0"
    );
}
