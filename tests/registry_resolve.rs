//! Name resolution through the public registry surface.

use blockdeck::registry::{self, ResolveError, TemplateKind};
use blockdeck::templates::Template;

#[test]
fn resolution_is_case_sensitive_exact_match() {
    assert_eq!(registry::resolve("CardGrid"), Ok(TemplateKind::CardGrid));
    assert!(registry::resolve("cardGrid").is_err());
    assert!(registry::resolve("CardGrid ").is_err());
}

#[test]
fn cta_banner_registers_under_its_display_name() {
    assert_eq!(registry::resolve("CTABanner"), Ok(TemplateKind::CtaBanner));
    assert!(registry::resolve("CtaBanner").is_err());
}

#[test]
fn near_misses_carry_a_suggestion() {
    let err = registry::resolve("CardGird").unwrap_err();
    assert_eq!(err.suggestion(), Some("CardGrid"));
    assert!(matches!(err, ResolveError::UnknownWithSuggestion { .. }));
}

#[test]
fn unrelated_names_carry_none() {
    let err = registry::resolve("SpinningCube").unwrap_err();
    assert_eq!(err.suggestion(), None);
}

#[test]
fn every_name_builds_a_template_of_the_same_kind() {
    for kind in TemplateKind::ALL {
        let template = registry::build(kind, &serde_json::json!({}));
        assert_eq!(template.kind(), kind);
        // Empty payloads mount with nothing clickable.
        assert_eq!(
            template.target_count(),
            usize::from(kind == TemplateKind::ExpandableSection),
            "{}",
            kind.name()
        );
    }
}
