mod shared;
use rootsig::desc::*;
use rootsig::CompileArgs;
use shared::*;

#[test]
fn check_single_cbv() {
    let desc = compile_latest("CBV(b0)");
    pretty_assertions::assert_eq!(
        desc,
        v1_1::RootSignatureDesc {
            flags: RootSignatureFlags::empty(),
            parameters: vec![v1_1::RootParameter {
                kind: v1_1::RootParameterKind::Descriptor(
                    RootDescriptorType::Cbv,
                    v1_1::RootDescriptor {
                        shader_register: 0,
                        register_space: 0,
                        flags: RootDescriptorFlags::empty(),
                    },
                ),
                shader_visibility: ShaderVisibility::All,
            }],
            static_samplers: Vec::new(),
        }
    );
}

#[test]
fn check_duplicate_parameter() {
    check_fail(
        CompileArgs::new("test.hlsl", "CBV(b0, space=0, space=1)"),
        "test.hlsl:1:18: error: Parameter 'space' can be specified only once\n\
         CBV(b0, space=0, space=1)\n                 ^~~~~\n",
    );
}

#[test]
fn check_root_flags() {
    assert_eq!(
        compile_latest("RootFlags(0)").flags,
        RootSignatureFlags::empty()
    );

    let source = "RootFlags(ALLOW_STREAM_OUTPUT | LOCAL_ROOT_SIGNATURE)";
    let both = RootSignatureFlags::ALLOW_STREAM_OUTPUT | RootSignatureFlags::LOCAL_ROOT_SIGNATURE;

    assert_eq!(compile_latest(source).flags, both);
    assert_eq!(
        compile_ok(CompileArgs::new("test.hlsl", source).local()).flags(),
        both
    );

    check_fail(
        CompileArgs::new("test.hlsl", source).global(),
        "test.hlsl:1:33: error: LOCAL_ROOT_SIGNATURE flag used in global root signature\n\
         RootFlags(ALLOW_STREAM_OUTPUT | LOCAL_ROOT_SIGNATURE)\n                                \
         ^~~~~~~~~~~~~~~~~~~~\n",
    );
}

#[test]
fn check_local_mode_sets_flag() {
    let desc = compile_ok(CompileArgs::new("test.hlsl", "CBV(b0)").local());
    assert_eq!(desc.flags(), RootSignatureFlags::LOCAL_ROOT_SIGNATURE);
}

#[test]
fn check_root_flags_twice() {
    check_fail_message(
        "RootFlags(0), CBV(b0), RootFlags(ALLOW_STREAM_OUTPUT)",
        "test.hlsl:1:24: error: RootFlags cannot be specified more than once",
    );
}

#[test]
fn check_unbounded_table() {
    let desc = compile_latest("DescriptorTable(SRV(t0, numDescriptors=unbounded))");
    match &desc.parameters[0].kind {
        v1_1::RootParameterKind::DescriptorTable(table) => {
            assert_eq!(table.ranges.len(), 1);
            assert_eq!(table.ranges[0].num_descriptors, DescriptorCount::Unbounded);
            assert_eq!(table.ranges[0].num_descriptors.raw(), u32::MAX);
            assert_eq!(table.ranges[0].offset, RangeOffset::Append);
        }
        other => panic!("expected descriptor table: {:?}", other),
    }
}

#[test]
fn check_static_sampler_defaults() {
    let desc = compile_latest("StaticSampler(s0)");
    assert_eq!(desc.static_samplers.len(), 1);

    let sampler = desc.static_samplers[0];
    assert_eq!(sampler.shader_register, 0);
    assert_eq!(sampler.register_space, 0);
    assert_eq!(sampler.shader_visibility, ShaderVisibility::All);
    assert_eq!(sampler.filter, Filter::Anisotropic);
    assert_eq!(sampler.address_u, TextureAddressMode::Wrap);
    assert_eq!(sampler.address_v, TextureAddressMode::Wrap);
    assert_eq!(sampler.address_w, TextureAddressMode::Wrap);
    assert_eq!(sampler.mip_lod_bias, 0.0);
    assert_eq!(sampler.max_anisotropy, 16);
    assert_eq!(sampler.comparison_func, ComparisonFunc::LessEqual);
    assert_eq!(sampler.border_color, StaticBorderColor::OpaqueWhite);
    assert_eq!(sampler.min_lod, 0.0);
    assert_eq!(sampler.max_lod, f32::MAX);

    // Samplers are shared between versions unchanged
    let desc = compile_ok(
        CompileArgs::new("test.hlsl", "StaticSampler(s0, space=2)")
            .version(RootSignatureVersion::V1_0),
    );
    assert_eq!(desc.version(), RootSignatureVersion::V1_0);
    assert_eq!(desc.parameter_count(), 0);
    assert_eq!(
        desc.static_samplers(),
        &[StaticSampler {
            register_space: 2,
            ..StaticSampler::new(0)
        }]
    );
}

#[test]
fn check_float_values() {
    for (source, expected) in [
        ("StaticSampler(s0, mipLODBias=1.5)", 1.5),
        ("StaticSampler(s0, mipLODBias=1.5e1)", 15.0),
        ("StaticSampler(s0, mipLODBias=15.0f)", 15.0),
        ("StaticSampler(s0, mipLODBias=-2)", -2.0),
        ("StaticSampler(s0, mipLODBias=7)", 7.0),
    ] {
        assert_eq!(
            compile_latest(source).static_samplers[0].mip_lod_bias,
            expected,
            "{}",
            source
        );
    }

    check_fail_message(
        "StaticSampler(s0, mipLODBias=99999999999999999999)",
        "test.hlsl:1:30: error: Expected float, found token '99999999999999999999'",
    );
    check_fail_message(
        "StaticSampler(s0, minLOD=1e-400)",
        "test.hlsl:1:26: error: Expected float, found token '1e-400'",
    );
    check_fail_message(
        "CBV(b0, space=4294967296)",
        "test.hlsl:1:15: error: Unexpected token '4294967296'",
    );
}

#[test]
fn check_descriptor_flags_by_version() {
    let source = "CBV(b0, flags=DATA_STATIC)";

    check_fail(
        CompileArgs::new("test.hlsl", source).version(RootSignatureVersion::V1_0),
        "test.hlsl:1:9: error: Root descriptor flags cannot be specified for root_sig_1_0\n\
         CBV(b0, flags=DATA_STATIC)\n        ^~~~~\n",
    );

    let desc = compile_latest(source);
    match &desc.parameters[0].kind {
        v1_1::RootParameterKind::Descriptor(RootDescriptorType::Cbv, descriptor) => {
            assert_eq!(descriptor.flags, RootDescriptorFlags::DATA_STATIC)
        }
        other => panic!("expected CBV: {:?}", other),
    }

    check_fail(
        CompileArgs::new("test.hlsl", "DescriptorTable(UAV(u0, flags=DATA_VOLATILE))")
            .version(RootSignatureVersion::V1_0),
        "test.hlsl:1:25: error: Descriptor range flags cannot be specified for root_sig_1_0\n\
         DescriptorTable(UAV(u0, flags=DATA_VOLATILE))\n                        ^~~~~\n",
    );
}

#[test]
fn check_version_1_0_output() {
    let desc = compile_ok(
        CompileArgs::new(
            "test.hlsl",
            "RootConstants(num32BitConstants=4, b1), DescriptorTable(CBV(b0, numDescriptors=2), Sampler(s0, offset=3))",
        )
        .version(RootSignatureVersion::V1_0),
    );

    let expected = v1_0::RootSignatureDesc {
        flags: RootSignatureFlags::empty(),
        parameters: vec![
            v1_0::RootParameter {
                kind: v1_0::RootParameterKind::Constants(RootConstants {
                    shader_register: 1,
                    register_space: 0,
                    num_32bit_values: 4,
                }),
                shader_visibility: ShaderVisibility::All,
            },
            v1_0::RootParameter {
                kind: v1_0::RootParameterKind::DescriptorTable(v1_0::DescriptorTable {
                    ranges: vec![
                        v1_0::DescriptorRange {
                            range_type: DescriptorRangeType::Cbv,
                            num_descriptors: DescriptorCount::Bounded(2),
                            base_shader_register: 0,
                            register_space: 0,
                            offset: RangeOffset::Append,
                        },
                        v1_0::DescriptorRange {
                            range_type: DescriptorRangeType::Sampler,
                            num_descriptors: DescriptorCount::Bounded(1),
                            base_shader_register: 0,
                            register_space: 0,
                            offset: RangeOffset::Explicit(3),
                        },
                    ],
                }),
                shader_visibility: ShaderVisibility::All,
            },
        ],
        static_samplers: Vec::new(),
    };
    pretty_assertions::assert_eq!(desc, VersionedRootSignatureDesc::V1_0(expected));
}

#[test]
fn check_full_root_signature() {
    let source = "RootFlags(ALLOW_INPUT_ASSEMBLER_INPUT_LAYOUT | DENY_HULL_SHADER_ROOT_ACCESS), \
        RootConstants(num32BitConstants=2, b3, space=1, visibility=SHADER_VISIBILITY_VERTEX), \
        SRV(t4, visibility=SHADER_VISIBILITY_PIXEL), \
        DescriptorTable(UAV(u0, numDescriptors=unbounded, flags=DESCRIPTORS_VOLATILE), visibility=SHADER_VISIBILITY_ALL), \
        StaticSampler(s2, filter=FILTER_MIN_MAG_MIP_POINT, addressU=TEXTURE_ADDRESS_CLAMP)";

    let desc = compile_latest(source);
    assert_eq!(
        desc.flags,
        RootSignatureFlags::ALLOW_INPUT_ASSEMBLER_INPUT_LAYOUT
            | RootSignatureFlags::DENY_HULL_SHADER_ROOT_ACCESS
    );
    assert_eq!(desc.parameters.len(), 3);
    assert_eq!(
        desc.parameters[0].shader_visibility,
        ShaderVisibility::Vertex
    );
    assert_eq!(
        desc.parameters[1].shader_visibility,
        ShaderVisibility::Pixel
    );
    assert_eq!(desc.parameters[2].shader_visibility, ShaderVisibility::All);
    assert_eq!(
        desc.static_samplers,
        vec![StaticSampler {
            filter: Filter::MinMagMipPoint,
            address_u: TextureAddressMode::Clamp,
            ..StaticSampler::new(2)
        }]
    );

    // Declarations keep their source order
    match &desc.parameters[2].kind {
        v1_1::RootParameterKind::DescriptorTable(table) => {
            assert_eq!(
                table.ranges,
                vec![v1_1::DescriptorRange {
                    num_descriptors: DescriptorCount::Unbounded,
                    flags: DescriptorRangeFlags::DESCRIPTORS_VOLATILE,
                    ..v1_1::DescriptorRange::new(DescriptorRangeType::Uav, 0)
                }]
            );
        }
        other => panic!("expected descriptor table: {:?}", other),
    }
}

#[test]
fn check_error_messages() {
    check_fail_message(
        "CBV(b0), Texture(t0)",
        "test.hlsl:1:10: error: Unexpected token 'Texture' when parsing root signature",
    );
    check_fail_message(
        "CBV(b0) CBV(b1)",
        "test.hlsl:1:9: error: Expected ',', found: 'CBV'",
    );
    check_fail_message(
        "SRV(b0)",
        "test.hlsl:1:5: error: Incorrect register type 'b0' in SRV (expected t#)",
    );
    check_fail_message(
        "DescriptorTable(Sampler(space=1))",
        "test.hlsl:1:32: error: shader register must be defined for each CBV/SRV/UAV",
    );
    check_fail_message(
        "RootConstants(b0)",
        "test.hlsl:1:17: error: num32BitConstants must be defined for each RootConstants",
    );
    check_fail_message(
        "StaticSampler(s0, comparisonFunc=COMPARISON_LESSER)",
        "test.hlsl:1:34: error: Unexpected comparison function value: 'COMPARISON_LESSER'.",
    );
    check_fail_message("CBV(b0x)", "test.hlsl:1:5: error: Unexpected token 'b0x'");
    check_fail_message(
        "CBV(b0, space=1 ~)",
        "test.hlsl:1:17: error: Unexpected token '~'",
    );
}

#[test]
fn check_conflicting_modes() {
    let args = CompileArgs::new("test.hlsl", "CBV(b0)").global().local();
    match rootsig::compile(args) {
        Err(rootsig::CompileError::InvalidArgs) => {}
        Err(err) => panic!("unexpected error: {}", err),
        Ok(desc) => panic!("compile succeeded: {:?}", desc),
    }
}

#[test]
fn check_report_unparsed() {
    let err = rootsig::report_unparsed("shader.hlsl", "CBV(b0), SRV(t0)");
    assert_eq!(
        err.to_string(),
        "shader.hlsl:1:1: error: CBV(b0), SRV(t0)\nCBV(b0), SRV(t0)\n^~~~~~~~~~~~~~~~\n"
    );
}
