use crate::domain::{DiffKind, DiffLine};

/// A diff line with the 1-based line numbers it occupies on each side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberedLine {
    pub old_line: Option<usize>,
    pub new_line: Option<usize>,
    pub kind: DiffKind,
    pub content: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffStats {
    pub additions: usize,
    pub deletions: usize,
    pub unchanged: usize,
}

impl DiffStats {
    pub fn is_identical(&self) -> bool {
        self.additions == 0 && self.deletions == 0
    }
}

pub fn number_lines(lines: &[DiffLine]) -> Vec<NumberedLine> {
    let mut old_no = 0usize;
    let mut new_no = 0usize;

    lines
        .iter()
        .map(|line| {
            let (old_line, new_line) = match line.kind {
                DiffKind::Same => {
                    old_no += 1;
                    new_no += 1;
                    (Some(old_no), Some(new_no))
                }
                DiffKind::Remove => {
                    old_no += 1;
                    (Some(old_no), None)
                }
                DiffKind::Add => {
                    new_no += 1;
                    (None, Some(new_no))
                }
            };
            NumberedLine {
                old_line,
                new_line,
                kind: line.kind,
                content: line.content.clone(),
            }
        })
        .collect()
}

pub fn stats(lines: &[DiffLine]) -> DiffStats {
    lines
        .iter()
        .fold(DiffStats::default(), |mut acc, line| {
            match line.kind {
                DiffKind::Same => acc.unchanged += 1,
                DiffKind::Add => acc.additions += 1,
                DiffKind::Remove => acc.deletions += 1,
            }
            acc
        })
}

/// Render as unified text: `+ `, `- ` or two spaces before each line.
pub fn render_unified(lines: &[DiffLine]) -> String {
    lines
        .iter()
        .map(|line| format!("{} {}", line.kind.marker(), line.content))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render with a gutter of old/new line numbers, as the CLI prints it.
pub fn render_numbered(lines: &[NumberedLine]) -> String {
    let width = lines
        .iter()
        .filter_map(|l| l.old_line.max(l.new_line))
        .max()
        .unwrap_or(0)
        .to_string()
        .len();

    let gutter = |n: Option<usize>| match n {
        Some(n) => format!("{n:>width$}"),
        None => " ".repeat(width),
    };

    lines
        .iter()
        .map(|l| {
            format!(
                "{} {} {} {}",
                gutter(l.old_line),
                gutter(l.new_line),
                l.kind.marker(),
                l.content
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
