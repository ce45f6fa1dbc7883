//! Discovery plus extraction over a Go test fixture

use doctrace_parser::{FunctionSource, PathSource, TraceExtractor};
use std::path::PathBuf;

fn fixtures() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures")
}

#[test]
fn test_fixture_directory() {
    let functions = PathSource::new(fixtures()).functions().unwrap();
    let names: Vec<_> = functions.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["TestPayAnyone", "TestTransfer", "TestNoTraces"]);

    let found = TraceExtractor::default().collect(functions);
    assert_eq!(found.len(), 2);

    let pay = &found[0];
    assert_eq!(pay.function.package, "payments");
    assert_eq!(pay.function.file, "payments_test.go");
    assert_eq!(pay.function.line, 31);
    let epics: Vec<_> = pay.traces.iter().map(|t| t.epic()).collect();
    assert_eq!(epics, vec!["ABT-123", "ABT-334", "ABT-9282", "ABT-1930"]);
    assert_eq!(
        pay.traces[0].description(),
        "Create a payment with the downstream services and verify the payment has been \
         created correctly and payment status is returned via Command Centre."
    );

    let transfer = &found[1];
    assert_eq!(transfer.traces.len(), 1);
    assert_eq!(
        transfer.traces[0].description(),
        "Create a payment between two accounts owned by the same entity."
    );
}

#[test]
fn test_json_shape() {
    let functions = PathSource::new(fixtures()).functions().unwrap();
    let found = TraceExtractor::default().collect(functions);
    let value = serde_json::to_value(&found).unwrap();

    assert_eq!(value[1]["function"]["name"], "TestTransfer");
    assert_eq!(value[1]["traces"][0]["category"], "FEATURE");
    assert_eq!(value[1]["traces"][0]["epic"], "ABT-909");
}
