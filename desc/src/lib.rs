//! # Root Signature - Descriptor Model
//!
//! The desc library contains the typed descriptor produced by parsing a root signature.
//! * [v1_0] and [v1_1] hold the parameter and table types for each schema version.
//! * [VersionedRootSignatureDesc] is the result of a parse and can be converted between versions with [VersionedRootSignatureDesc::convert].
//! * Types shared by both versions, like [StaticSampler] and the flag sets, live at the crate root.

mod convert;
mod enums;
mod flags;
mod parameters;

pub mod v1_0;
pub mod v1_1;

pub use convert::*;
pub use enums::*;
pub use flags::*;
pub use parameters::*;

/// Schema version of a root signature descriptor
#[derive(PartialEq, Eq, Debug, Copy, Clone, Hash)]
pub enum RootSignatureVersion {
    V1_0,
    V1_1,
}

impl RootSignatureVersion {
    /// The newest schema version, which is the one the parser builds natively
    pub const LATEST: RootSignatureVersion = RootSignatureVersion::V1_1;
}

impl Default for RootSignatureVersion {
    fn default() -> Self {
        RootSignatureVersion::LATEST
    }
}

impl std::fmt::Display for RootSignatureVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            RootSignatureVersion::V1_0 => write!(f, "root_sig_1_0"),
            RootSignatureVersion::V1_1 => write!(f, "root_sig_1_1"),
        }
    }
}

/// A root signature descriptor tagged with its schema version
#[derive(PartialEq, Debug, Clone)]
pub enum VersionedRootSignatureDesc {
    V1_0(v1_0::RootSignatureDesc),
    V1_1(v1_1::RootSignatureDesc),
}

impl VersionedRootSignatureDesc {
    /// Get the schema version of the descriptor
    pub fn version(&self) -> RootSignatureVersion {
        match self {
            VersionedRootSignatureDesc::V1_0(_) => RootSignatureVersion::V1_0,
            VersionedRootSignatureDesc::V1_1(_) => RootSignatureVersion::V1_1,
        }
    }

    /// Get the root signature flags
    pub fn flags(&self) -> RootSignatureFlags {
        match self {
            VersionedRootSignatureDesc::V1_0(desc) => desc.flags,
            VersionedRootSignatureDesc::V1_1(desc) => desc.flags,
        }
    }

    /// Get the static samplers
    pub fn static_samplers(&self) -> &[StaticSampler] {
        match self {
            VersionedRootSignatureDesc::V1_0(desc) => &desc.static_samplers,
            VersionedRootSignatureDesc::V1_1(desc) => &desc.static_samplers,
        }
    }

    /// Get the number of root parameters
    pub fn parameter_count(&self) -> usize {
        match self {
            VersionedRootSignatureDesc::V1_0(desc) => desc.parameters.len(),
            VersionedRootSignatureDesc::V1_1(desc) => desc.parameters.len(),
        }
    }
}
