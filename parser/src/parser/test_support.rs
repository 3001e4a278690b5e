use super::*;

/// Helper type to invoke parsing on fragments of text
pub struct ParserTester<T> {
    parse_fn: fn(&mut Parser) -> ParseResult<T>,
    version: RootSignatureVersion,
    compilation_flags: CompilationFlags,
}

impl<T: std::cmp::PartialEq + std::fmt::Debug> ParserTester<T> {
    /// Create a new tester object from a parse function
    pub fn new(parse_fn: fn(&mut Parser) -> ParseResult<T>) -> Self {
        ParserTester {
            parse_fn,
            version: RootSignatureVersion::LATEST,
            compilation_flags: CompilationFlags::empty(),
        }
    }

    /// Set the root signature version the parser accepts
    pub fn version(mut self, version: RootSignatureVersion) -> Self {
        self.version = version;
        self
    }

    /// Set the compilation mode for the parser
    pub fn compilation_flags(mut self, compilation_flags: CompilationFlags) -> Self {
        self.compilation_flags = compilation_flags;
        self
    }

    /// Run the parse function over a string
    fn run<'s>(&self, input: &'s str) -> (ParseResult<T>, Parser<'s>) {
        let mut parser = Parser::new(
            input,
            SourceLocation::first(),
            self.version,
            self.compilation_flags,
        );
        let result = (self.parse_fn)(&mut parser);
        (result, parser)
    }

    /// Check that a source string parses into the given value
    #[track_caller]
    pub fn check(&self, input: &str, value: T) {
        match self.run(input) {
            (Ok(exp), mut parser) => {
                if parser.at_end() {
                    pretty_assertions::assert_eq!(exp, value);
                } else {
                    panic!("Tokens remaining after parsing: {:?}", parser.next());
                }
            }
            (Err(err), _) => panic!("{}: {:?}", err.reason, err),
        }
    }

    /// Check that parsing will fail for the given string
    #[track_caller]
    pub fn expect_fail(&self, input: &str, error_reason: ParseErrorReason, offset: u32) {
        match self.run(input) {
            (Ok(exp), _) => panic!("Parse succeeded: {:?}", exp),
            (Err(err), _) => {
                assert_eq!(
                    (err.reason, err.location),
                    (error_reason, SourceLocation::first().offset(offset))
                );
            }
        }
    }
}
