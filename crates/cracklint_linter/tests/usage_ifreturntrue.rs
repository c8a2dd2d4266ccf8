//! IfReturnTrue (CC0007) end-to-end tests through `lint_source`.

mod test_harness;

use cracklint_config::{CracklintConfig, MergedConfig, Ruleset};
use cracklint_diagnostics::Severity;
use cracklint_linter::RuleRegistry;
use test_harness::{LineComparison, default_rules, lint, marked_lines, reported_lines};

const FIXTURE: &str = include_str!("fixtures/usage/InputIfReturnTrue.java");

const FLAGGED: &str = "class T { boolean f(boolean c) { if (c) return true; else return false; } }";

#[test]
fn test_fixture() {
    let result = lint(FIXTURE, &default_rules());

    for diagnostic in &result.diagnostics {
        assert_eq!(diagnostic.code(), "CC0007");
        assert_eq!(diagnostic.message(), "You should return directly.");
        assert_eq!(diagnostic.severity, Severity::Warning);
        assert_eq!(&FIXTURE[diagnostic.range], "if");
    }

    let comparison = LineComparison::new(marked_lines(FIXTURE), reported_lines(FIXTURE, &result));
    comparison.assert_exact("InputIfReturnTrue.java");
    assert_eq!(result.suppressed, 2, "annotation and comment regions should suppress");
}

#[test]
fn test_no_false_positives() {
    let source = r#"
class Test {
    boolean a(boolean cond) {
        if (cond) { return true; }
        return false;
    }

    boolean b(boolean cond) {
        if (cond) { return false; } else { return false; }
    }

    boolean c(boolean cond, boolean other) {
        if (cond) return other; else return !other;
    }

    boolean d(boolean cond) {
        if (cond) { } else { return false; }
        return true;
    }
}
"#;
    let result = lint(source, &default_rules());
    assert!(
        result.diagnostics.is_empty(),
        "Should have no violations for valid code, got: {:?}",
        result.diagnostics
    );
}

#[test]
fn test_recovered_tree_still_reports_well_formed_if() {
    let source = r#"
class Test {
    void broken() {
        int x = ;
    }

    boolean ok(boolean cond) {
        if (cond) return true; else return false;
    }
}
"#;
    let result = lint(source, &default_rules());

    assert_eq!(result.diagnostics.len(), 1, "got: {:?}", result.diagnostics);
    let expected = source.find("if (cond)").unwrap();
    assert_eq!(usize::from(result.diagnostics[0].range.start()), expected);
    assert_eq!(&source[result.diagnostics[0].range], "if");
}

#[test]
fn test_syntax_error_inside_branch_is_not_reported() {
    let source = r#"
class Test {
    boolean broken(boolean cond) {
        if (cond) {
            return true;
        } else {
            ### return false;
        }
    }
}
"#;
    let result = lint(source, &default_rules());
    assert!(
        result.diagnostics.is_empty(),
        "Should not match a branch with skipped tokens, got: {:?}",
        result.diagnostics
    );
}

#[test]
fn test_ruleset_severity_override() {
    let ruleset = Ruleset::parse(
        r#"<?xml version="1.0" encoding="utf-8"?>
<RuleSet Name="Project" Description="" ToolsVersion="14.0">
  <Rules AnalyzerId="CodeCracker.CSharp" RuleNamespace="CodeCracker.CSharp">
    <Rule Id="CC0007" Action="Error" />
  </Rules>
</RuleSet>"#,
    )
    .unwrap();
    let config = MergedConfig::new(Some(&ruleset), None);
    let rules = RuleRegistry::builtin().enabled_rules(&config);

    let result = lint(FLAGGED, &rules);
    assert_eq!(result.diagnostics.len(), 1);
    assert_eq!(result.diagnostics[0].severity, Severity::Error);
    assert_eq!(result.failures().count(), 1);
}

#[test]
fn test_disabled_by_toml() {
    let cracklint = CracklintConfig::parse("[rules]\nCC0007 = \"none\"\n").unwrap();
    let config = MergedConfig::new(None, Some(&cracklint));
    let rules = RuleRegistry::builtin().enabled_rules(&config);
    assert!(rules.is_empty());

    let result = lint(FLAGGED, &rules);
    assert!(result.diagnostics.is_empty());
}

#[test]
fn test_hidden_diagnostics_are_not_visible() {
    let cracklint = CracklintConfig::parse("[rules]\nCC0007 = \"hidden\"\n").unwrap();
    let config = MergedConfig::new(None, Some(&cracklint));
    let rules = RuleRegistry::builtin().enabled_rules(&config);

    let result = lint(FLAGGED, &rules);
    assert_eq!(result.diagnostics.len(), 1);
    assert_eq!(result.visible().count(), 0);
    assert_eq!(result.failures().count(), 0);
}
