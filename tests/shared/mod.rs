use rootsig::desc::*;

/// Compile a root signature and fail the test with the formatted error if it does not parse
#[track_caller]
#[allow(unused)]
pub fn compile_ok(args: rootsig::CompileArgs) -> VersionedRootSignatureDesc {
    match rootsig::compile(args) {
        Ok(desc) => desc,
        Err(err) => panic!("{}", err),
    }
}

/// Compile a version 1.1 root signature with default options
#[track_caller]
#[allow(unused)]
pub fn compile_latest(source: &str) -> v1_1::RootSignatureDesc {
    match compile_ok(rootsig::CompileArgs::new("test.hlsl", source)) {
        VersionedRootSignatureDesc::V1_1(desc) => desc,
        other => panic!("expected a 1.1 descriptor: {:?}", other),
    }
}

/// Check that a root signature fails to compile with the given formatted error
#[track_caller]
#[allow(unused)]
pub fn check_fail(args: rootsig::CompileArgs, expected: &str) {
    match rootsig::compile(args) {
        Ok(desc) => panic!("compile succeeded: {:?}", desc),
        Err(err) => pretty_assertions::assert_eq!(err.to_string(), expected),
    }
}

/// Check that a version 1.1 root signature fails with an error message
///
/// Only the first line of the error is compared.
#[track_caller]
#[allow(unused)]
pub fn check_fail_message(source: &str, expected: &str) {
    match rootsig::compile(rootsig::CompileArgs::new("test.hlsl", source)) {
        Ok(desc) => panic!("compile succeeded: {:?}", desc),
        Err(err) => {
            let text = err.to_string();
            let first_line = text.lines().next().unwrap_or("");
            assert_eq!(first_line, expected);
        }
    }
}
