//! Line-level comparison of two snapshot files.
//!
//! Snapshots are treated as opaque text compared line by line in file order.
//! Trailing whitespace is trimmed before comparing. A line that moves to a
//! different position (for example a member moving from one class block to
//! another) is reported as removed at its old place and added at its new one.

use serde::Serialize;

/// Lines removed from and added to a snapshot relative to its baseline.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SnapshotDiff {
    /// Lines in the baseline that the fresh snapshot lacks, in baseline order.
    pub removed: Vec<String>,
    /// Lines in the fresh snapshot that the baseline lacks, in snapshot order.
    pub added: Vec<String>,
}

impl SnapshotDiff {
    pub fn between(baseline: &str, actual: &str) -> Self {
        let old: Vec<&str> = normalized_lines(baseline).collect();
        let new: Vec<&str> = normalized_lines(actual).collect();

        // Common head and tail never take part in the edit script
        let prefix = old.iter().zip(&new).take_while(|(a, b)| a == b).count();
        let (old, new) = (&old[prefix..], &new[prefix..]);
        let suffix = old
            .iter()
            .rev()
            .zip(new.iter().rev())
            .take_while(|(a, b)| a == b)
            .count();

        edit_script(&old[..old.len() - suffix], &new[..new.len() - suffix])
    }

    /// True when both snapshots contain the same lines in the same order.
    pub fn is_empty(&self) -> bool {
        self.removed.is_empty() && self.added.is_empty()
    }
}

/// Removals and additions along a longest common subsequence of `old` and `new`.
fn edit_script(old: &[&str], new: &[&str]) -> SnapshotDiff {
    let width = new.len() + 1;
    // lcs[i * width + j]: length of the LCS of old[i..] and new[j..]
    let mut lcs = vec![0usize; (old.len() + 1) * width];
    for i in (0..old.len()).rev() {
        for j in (0..new.len()).rev() {
            lcs[i * width + j] = if old[i] == new[j] {
                lcs[(i + 1) * width + j + 1] + 1
            } else {
                lcs[(i + 1) * width + j].max(lcs[i * width + j + 1])
            };
        }
    }

    let mut diff = SnapshotDiff::default();
    let (mut i, mut j) = (0, 0);
    while i < old.len() && j < new.len() {
        if old[i] == new[j] {
            i += 1;
            j += 1;
        } else if lcs[(i + 1) * width + j] >= lcs[i * width + j + 1] {
            diff.removed.push(old[i].to_string());
            i += 1;
        } else {
            diff.added.push(new[j].to_string());
            j += 1;
        }
    }
    diff.removed.extend(old[i..].iter().map(|line| line.to_string()));
    diff.added.extend(new[j..].iter().map(|line| line.to_string()));
    diff
}

fn normalized_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(str::trim_end)
}
