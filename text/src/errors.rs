use crate::*;

/// Trait to be implemented by error types in each compilation step
pub trait CompileError {
    fn print(&self, w: &mut MessagePrinter) -> std::fmt::Result;
}

/// Formatter for printing compile errors with source references
pub struct MessagePrinter<'s, 'f> {
    source_manager: &'s SourceManager,
    formatter: &'s mut std::fmt::Formatter<'f>,
}

/// Error severity
#[derive(PartialEq, Eq, Debug, Copy, Clone)]
pub enum Severity {
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
        }
    }
}

impl<'s, 'f> MessagePrinter<'s, 'f> {
    /// Print a message attached to a source range
    ///
    /// `width` is the number of bytes to underline starting at `loc`.
    pub fn write_message(
        &mut self,
        write: &dyn Fn(&mut std::fmt::Formatter) -> std::fmt::Result,
        loc: SourceLocation,
        width: u32,
        sev: Severity,
    ) -> std::fmt::Result {
        if loc != SourceLocation::UNKNOWN {
            let file_location = self.source_manager.get_file_location(loc);

            // Print basic failure reason
            write!(self.formatter, "{}: {}: ", file_location, sev)?;
            write(self.formatter)?;
            writeln!(self.formatter)?;

            // Print source that caused the error
            self.source_manager
                .write_source_for_error(self.formatter, loc, width)
        } else {
            write!(self.formatter, "{}: ", sev)?;
            write(self.formatter)?;
            writeln!(self.formatter)
        }
    }
}

/// Extension trait for [CompileError]
pub trait CompileErrorExt {
    /// Return a type that can be used with [Display][std::fmt::Display]
    fn display<'p>(&'p self, source_manager: &'p SourceManager) -> CompileErrorPrinter<'p>;
}

impl<T: CompileError + Sized> CompileErrorExt for T {
    fn display<'p>(&'p self, source_manager: &'p SourceManager) -> CompileErrorPrinter<'p> {
        CompileErrorPrinter {
            error: self,
            source_manager,
        }
    }
}

/// Helper type that allows errors to be printed with [Display][std::fmt::Display]
pub struct CompileErrorPrinter<'p> {
    error: &'p dyn CompileError,
    source_manager: &'p SourceManager,
}

impl<'a> std::fmt::Display for CompileErrorPrinter<'a> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut message_printer = MessagePrinter {
            source_manager: self.source_manager,
            formatter: f,
        };
        self.error.print(&mut message_printer)
    }
}

#[test]
fn test_message_printer() {
    struct TestError(SourceLocation);

    impl CompileError for TestError {
        fn print(&self, w: &mut MessagePrinter) -> std::fmt::Result {
            w.write_message(&|f| write!(f, "bad value"), self.0, 3, Severity::Error)
        }
    }

    let mut source_manager = SourceManager::new();
    let file_id = source_manager.add_file(
        FileName("shader.hlsl".to_string()),
        "CBV(b0, space=abc)".to_string(),
    );
    let loc = source_manager
        .get_source_location_from_file_offset(file_id, StreamLocation(14));

    assert_eq!(
        TestError(loc).display(&source_manager).to_string(),
        "shader.hlsl:1:15: error: bad value\nCBV(b0, space=abc)\n              ^~~\n"
    );
    assert_eq!(
        TestError(SourceLocation::UNKNOWN)
            .display(&source_manager)
            .to_string(),
        "error: bad value\n"
    );
}
