#[test]
fn chub_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/chub_error_pass.rs");
}
