use super::*;
use crate::domain::{DiffKind, DiffLine, DiffMode};

fn side(lines: &[DiffLine], keep: DiffKind) -> Vec<&str> {
    lines
        .iter()
        .filter(|l| l.kind == DiffKind::Same || l.kind == keep)
        .map(|l| l.content.as_str())
        .collect()
}

#[test]
fn test_identical_texts_are_all_same() {
    let text = "fn main() {\n    println!(\"hi\");\n}";
    let out = line_diff(text, text);

    assert_eq!(out.len(), 3);
    assert!(out.iter().all(|l| l.kind == DiffKind::Same));
    assert_eq!(side(&out, DiffKind::Same), vec!["fn main() {", "    println!(\"hi\");", "}"]);
}

#[test]
fn test_empty_inputs_yield_one_empty_same_line() {
    assert_eq!(line_diff("", ""), vec![DiffLine::same("")]);
}

#[test]
fn test_pure_append() {
    assert_eq!(
        line_diff("a\nb", "a\nb\nc"),
        vec![DiffLine::same("a"), DiffLine::same("b"), DiffLine::add("c")]
    );
}

#[test]
fn test_removal_is_reported_positionally() {
    assert_eq!(
        line_diff("a\nb\nc", "a\nc"),
        vec![
            DiffLine::same("a"),
            DiffLine::remove("b"),
            DiffLine::add("c"),
            DiffLine::remove("c"),
        ]
    );
}

#[test]
fn test_total_replacement() {
    assert_eq!(
        line_diff("x", "y"),
        vec![DiffLine::remove("x"), DiffLine::add("y")]
    );
}

#[test]
fn test_insertion_at_top_does_not_realign() {
    let out = line_diff("b\nc", "a\nb\nc");
    assert_eq!(
        out,
        vec![
            DiffLine::remove("b"),
            DiffLine::add("a"),
            DiffLine::remove("c"),
            DiffLine::add("b"),
            DiffLine::add("c"),
        ]
    );
}

#[test]
fn test_trailing_newline_is_its_own_line() {
    assert_eq!(
        line_diff("a", "a\n"),
        vec![DiffLine::same("a"), DiffLine::add("")]
    );
}

#[test]
fn test_sides_reconstruct_inputs_and_length_is_bounded() {
    let original = "function calculateTotal(items) {\n  var total = 0;\n  for (var i = 0; i < items.length; i++) {\n    total = total + items[i].price;\n  }\n  return total;\n}";
    let modified = "const calculateTotal = (items) => {\n  return items.reduce((sum, item) => sum + item.price, 0);\n};";

    let out = line_diff(original, modified);

    assert_eq!(side(&out, DiffKind::Remove), original.split('\n').collect::<Vec<_>>());
    assert_eq!(side(&out, DiffKind::Add), modified.split('\n').collect::<Vec<_>>());
    assert!(out.len() <= original.split('\n').count() + modified.split('\n').count());
}

#[test]
fn test_sides_reconstruct_edge_inputs() {
    let inputs = ["", "\n", "a\n", "a\na\na", "a\r\nb", "b\na", "a"];

    for original in inputs {
        for modified in inputs {
            let out = line_diff(original, modified);
            let old: Vec<_> = original.split('\n').collect();
            let new: Vec<_> = modified.split('\n').collect();

            assert_eq!(side(&out, DiffKind::Remove), old, "{original:?} -> {modified:?}");
            assert_eq!(side(&out, DiffKind::Add), new, "{original:?} -> {modified:?}");
            assert!(out.len() <= old.len() + new.len(), "{original:?} -> {modified:?}");
        }
    }
}

#[test]
fn test_positional_is_the_default_mode() {
    assert_eq!(DiffMode::default(), DiffMode::Positional);
    assert_eq!(diff("a\nb\nc", "a\nc", DiffMode::default()), line_diff("a\nb\nc", "a\nc"));
}

#[test]
fn test_minimal_mode_realigns() {
    assert_eq!(
        diff("a\nb\nc", "a\nc", DiffMode::Minimal),
        vec![DiffLine::same("a"), DiffLine::remove("b"), DiffLine::same("c")]
    );
}

#[test]
fn test_numbering_tracks_each_side() {
    let numbered = number_lines(&line_diff("a\nb\nc", "a\nc"));
    let numbers: Vec<_> = numbered.iter().map(|l| (l.old_line, l.new_line)).collect();
    assert_eq!(
        numbers,
        vec![
            (Some(1), Some(1)),
            (Some(2), None),
            (None, Some(2)),
            (Some(3), None),
        ]
    );
}

#[test]
fn test_stats_and_unified_rendering() {
    let out = line_diff("a\nb", "a\nc\nd");
    let s = stats(&out);
    assert_eq!(
        s,
        DiffStats {
            additions: 2,
            deletions: 1,
            unchanged: 1
        }
    );
    assert!(!s.is_identical());
    assert_eq!(render_unified(&out), "  a\n- b\n+ c\n+ d");
}

#[test]
fn test_numbered_rendering_pads_gutter() {
    let original = (1..=10).map(|n| n.to_string()).collect::<Vec<_>>().join("\n");
    let modified = original.replace("10", "ten");
    let rendered = render_numbered(&number_lines(&line_diff(&original, &modified)));
    let last_lines: Vec<_> = rendered.lines().rev().take(2).collect();

    assert_eq!(last_lines, vec!["   10 + ten", "10    - 10"]);
    assert!(rendered.starts_with(" 1  1   1"));
}
