use crate::*;
use text::CompileErrorExt;

/// Parse a root signature string into a descriptor
///
/// Parse failures are formatted with the file name and a view of the failing source.
pub fn compile(args: CompileArgs) -> Result<VersionedRootSignatureDesc, CompileError> {
    if args.compilation_flags.is_conflicting() {
        return Err(CompileError::InvalidArgs);
    }

    // Make a source manager to own the input and resolve error locations
    let mut source_manager = text::SourceManager::new();
    let file_id = source_manager.add_file(
        text::FileName(args.file_name.to_string()),
        args.source.to_string(),
    );

    match parser::parse_root_signature(
        source_manager.get_contents(file_id),
        source_manager.get_base_location(file_id),
        args.version,
        args.compilation_flags,
    ) {
        Ok(desc) => Ok(desc),
        Err(err) => Err(CompileError::Text(format!(
            "{}",
            err.display(&source_manager)
        ))),
    }
}

/// Make an error that reports a root signature string verbatim
///
/// Used when a root signature was found but could not be handed to the parser.
pub fn report_unparsed(file_name: &str, text: &str) -> CompileError {
    let mut source_manager = text::SourceManager::new();
    let file_id = source_manager.add_file(text::FileName(file_name.to_string()), text.to_string());
    let err = parser::ParseError::from_unparsed_text(
        source_manager.get_contents(file_id),
        source_manager.get_base_location(file_id),
    );
    CompileError::Text(format!("{}", err.display(&source_manager)))
}

/// Error for [compile()]
#[derive(Debug)]
pub enum CompileError {
    Text(String),
    InvalidArgs,
}

/// Arguments for [compile()]
pub struct CompileArgs<'a> {
    file_name: &'a str,
    source: &'a str,
    version: RootSignatureVersion,
    compilation_flags: CompilationFlags,
}

impl<'a> CompileArgs<'a> {
    /// Create new args with required arguments
    pub fn new(file_name: &'a str, source: &'a str) -> Self {
        CompileArgs {
            file_name,
            source,
            version: RootSignatureVersion::LATEST,
            compilation_flags: CompilationFlags::empty(),
        }
    }

    /// Set the version of the descriptor to produce
    pub fn version(mut self, version: RootSignatureVersion) -> Self {
        self.version = version;
        self
    }

    /// Set the compilation mode flags
    pub fn compilation_flags(mut self, compilation_flags: CompilationFlags) -> Self {
        self.compilation_flags = compilation_flags;
        self
    }

    /// Compile as a global root signature, which may not use `LOCAL_ROOT_SIGNATURE`
    pub fn global(self) -> Self {
        let flags = self.compilation_flags | CompilationFlags::GLOBAL_ROOT_SIGNATURE;
        self.compilation_flags(flags)
    }

    /// Compile as a local root signature
    pub fn local(self) -> Self {
        let flags = self.compilation_flags | CompilationFlags::LOCAL_ROOT_SIGNATURE;
        self.compilation_flags(flags)
    }
}

impl std::fmt::Display for CompileError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            CompileError::Text(s) => write!(f, "{}", s),
            CompileError::InvalidArgs => write!(
                f,
                "global and local root signature modes can not both be set"
            ),
        }
    }
}
