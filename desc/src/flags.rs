use bitflags::bitflags;

bitflags! {
    /// Flags that apply to a whole root signature
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
    pub struct RootSignatureFlags: u32 {
        const ALLOW_INPUT_ASSEMBLER_INPUT_LAYOUT = 0x1;
        const DENY_VERTEX_SHADER_ROOT_ACCESS = 0x2;
        const DENY_HULL_SHADER_ROOT_ACCESS = 0x4;
        const DENY_DOMAIN_SHADER_ROOT_ACCESS = 0x8;
        const DENY_GEOMETRY_SHADER_ROOT_ACCESS = 0x10;
        const DENY_PIXEL_SHADER_ROOT_ACCESS = 0x20;
        const ALLOW_STREAM_OUTPUT = 0x40;
        const LOCAL_ROOT_SIGNATURE = 0x80;
        const DENY_AMPLIFICATION_SHADER_ROOT_ACCESS = 0x100;
        const DENY_MESH_SHADER_ROOT_ACCESS = 0x200;
        const CBV_SRV_UAV_HEAP_DIRECTLY_INDEXED = 0x400;
        const SAMPLER_HEAP_DIRECTLY_INDEXED = 0x800;
    }
}

bitflags! {
    /// Volatility flags for a root descriptor
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
    pub struct RootDescriptorFlags: u32 {
        const DATA_VOLATILE = 0x2;
        const DATA_STATIC_WHILE_SET_AT_EXECUTE = 0x4;
        const DATA_STATIC = 0x8;
    }
}

bitflags! {
    /// Volatility flags for a descriptor table range
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
    pub struct DescriptorRangeFlags: u32 {
        const DESCRIPTORS_VOLATILE = 0x1;
        const DATA_VOLATILE = 0x2;
        const DATA_STATIC_WHILE_SET_AT_EXECUTE = 0x4;
        const DATA_STATIC = 0x8;
        const DESCRIPTORS_STATIC_KEEPING_BUFFER_BOUNDS_CHECKS = 0x10000;
    }
}

bitflags! {
    /// How the root signature will be bound
    ///
    /// At most one of the flags may be set. With neither set the root signature is global.
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
    pub struct CompilationFlags: u32 {
        const GLOBAL_ROOT_SIGNATURE = 1 << 0;
        const LOCAL_ROOT_SIGNATURE = 1 << 1;
    }
}

impl CompilationFlags {
    /// Check if the global and local modes were both requested
    pub fn is_conflicting(&self) -> bool {
        self.contains(
            CompilationFlags::GLOBAL_ROOT_SIGNATURE | CompilationFlags::LOCAL_ROOT_SIGNATURE,
        )
    }
}

#[test]
fn test_compilation_flags() {
    assert!(!CompilationFlags::empty().is_conflicting());
    assert!(!CompilationFlags::GLOBAL_ROOT_SIGNATURE.is_conflicting());
    assert!(!CompilationFlags::LOCAL_ROOT_SIGNATURE.is_conflicting());
    assert!(CompilationFlags::all().is_conflicting());
}
