//! Runs every Java fixture under `tests/fixtures` and checks that the
//! reported lines are exactly the ones marked `// violation`.

mod test_harness;

use std::path::Path;

use test_harness::{LineComparison, default_rules, lint, marked_lines, reported_lines};
use walkdir::WalkDir;

#[test]
fn test_all_fixtures() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    let rules = default_rules();
    let mut checked = 0;

    for entry in WalkDir::new(&root).sort_by_file_name() {
        let entry = entry.unwrap();
        if entry.path().extension().is_none_or(|ext| ext != "java") {
            continue;
        }
        let source = std::fs::read_to_string(entry.path()).unwrap();
        let result = lint(&source, &rules);
        let name = entry.path().strip_prefix(&root).unwrap().display().to_string();
        LineComparison::new(marked_lines(&source), reported_lines(&source, &result))
            .assert_exact(&name);
        checked += 1;
    }

    assert!(checked > 0, "no fixtures found under {}", root.display());
}

#[test]
fn test_line_comparison_exact_match() {
    let comparison = LineComparison::new([3, 7], [7, 3]);
    assert!(comparison.is_exact());
    assert!(comparison.missing().is_empty());
}

#[test]
fn test_line_comparison_missing_and_false_positive() {
    let comparison = LineComparison::new([1, 2, 3], [2, 3, 4]);
    assert_eq!(comparison.missing(), vec![1]);
    assert_eq!(comparison.false_positives(), vec![4]);
    assert!(!comparison.is_exact());
}

#[test]
fn test_marked_lines() {
    let source = "class A {\n  int x; // violation\n}\n// violation\n";
    assert_eq!(marked_lines(source), vec![2, 4]);
}
