use matroid_core::errors::{ErrorInfo, MatroidError};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("axiom", "bases")
        .with_context("ground_set_size", "3")
}

#[test]
fn axiom_violation_surface() {
    let err = MatroidError::AxiomViolation(sample_info("axiom-violation", "basis exchange fails"));
    assert_eq!(err.code(), "axiom-violation");
    assert!(err.info().context.contains_key("axiom"));
    assert!(err.to_string().starts_with("axiom violation: basis exchange fails"));
}

#[test]
fn domain_violation_surface() {
    let err = MatroidError::DomainViolation(sample_info("not-a-subset", "set escapes ground set"));
    assert_eq!(err.info().code, "not-a-subset");
}

#[test]
fn precondition_violation_surface() {
    let err = MatroidError::PreconditionViolation(
        sample_info("not-a-basis", "argument is not a basis").with_hint("pass a member of bases()"),
    );
    assert_eq!(err.info().hint.as_deref(), Some("pass a member of bases()"));
    assert!(err.to_string().contains("hint: pass a member of bases()"));
}

#[test]
fn format_violation_surface() {
    let err = MatroidError::FormatViolation(sample_info("code-length", "wrong length"));
    assert_eq!(err.code(), "code-length");
}

#[test]
fn errors_round_trip_through_json() {
    let err = MatroidError::FormatViolation(sample_info("unknown-symbol", "unexpected '#'"));
    let json = serde_json::to_string(&err).expect("serialize");
    assert!(json.contains("\"family\":\"FormatViolation\""));
    let decoded: MatroidError = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, err);
}
