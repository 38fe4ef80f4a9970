// src/predicate.rs
//! Search predicates and their left-to-right evaluation.

#![deny(missing_docs)]

use crate::pattern;

/// How a predicate's result folds with the next predicate's result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    /// Logical AND.
    And,
    /// Logical OR.
    Or,
}

/// The entry type a predicate can require.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    /// A regular file: not a directory, not a symbolic link.
    File,
    /// A directory. The listing hint never follows symlinks, so a symlink
    /// to a directory does not count.
    Dir,
    /// A symbolic link.
    Symlink,
    /// An entry with an executable bit.
    Executable,
}

/// Attribute flags probed per entry when the predicate set needs them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttrFlags {
    /// The entry is a symbolic link.
    pub symlink: bool,
    /// The entry carries an executable bit.
    pub executable: bool,
}

/// One atomic test, plus the combinator joining it to the next predicate.
#[derive(Debug, Clone)]
pub struct Predicate {
    /// Wildcard pattern for the bare file name; `None` always passes.
    pub pattern: Option<String>,
    /// Required entry type; `None` always passes.
    pub file_type: Option<FileType>,
    /// Case-insensitive matching for `pattern`.
    pub ignore_case: bool,
    /// How this result combines with the next predicate's result.
    pub combinator: Combinator,
}

/// One directory child during a single listing pass.
#[derive(Debug, Clone)]
pub struct Entry {
    /// Bare file-name component, not a path.
    pub name: String,
    /// Directory flag from the listing; never follows symlinks.
    pub is_dir: bool,
    /// Attribute flags; cleared unless the predicate set required a probe.
    pub attrs: AttrFlags,
}

/// Whether evaluating `predicates` requires per-entry attribute flags.
///
/// A static property of the whole set, computed once per run. The `File`
/// test consults the symlink flag; `Symlink`/`Executable` are the flags
/// themselves. A plain `Dir` test is answered by the listing hint alone.
pub fn needs_attr_flags(predicates: &[Predicate]) -> bool {
    predicates.iter().any(|p| {
        matches!(
            p.file_type,
            Some(FileType::File | FileType::Symlink | FileType::Executable)
        )
    })
}

fn test_predicate(pred: &Predicate, entry: &Entry, fs_ignore_case: bool) -> bool {
    if let Some(ty) = pred.file_type {
        let ok = match ty {
            FileType::File => !entry.is_dir && !entry.attrs.symlink,
            FileType::Dir => entry.is_dir,
            FileType::Symlink => entry.attrs.symlink,
            FileType::Executable => entry.attrs.executable,
        };
        if !ok {
            return false;
        }
    }
    if let Some(pat) = pred.pattern.as_deref()
        && !pattern::matches(pat, &entry.name, pred.ignore_case, fs_ignore_case)
    {
        return false;
    }
    true
}

/// Evaluate `entry` against the whole predicate sequence.
///
/// An empty sequence matches everything. Otherwise the results fold left
/// to right through each predicate's trailing combinator: `A -o B C` is
/// `(A OR B) AND C`. No precedence, no grouping; every predicate in the
/// sequence is tested.
pub fn evaluate(entry: &Entry, predicates: &[Predicate], fs_ignore_case: bool) -> bool {
    if predicates.is_empty() {
        return true;
    }

    let mut result = false;
    let mut current_op = Combinator::And;

    for (i, pred) in predicates.iter().enumerate() {
        let matched = test_predicate(pred, entry, fs_ignore_case);
        if i == 0 {
            result = matched;
        } else {
            result = match current_op {
                Combinator::And => result && matched,
                Combinator::Or => result || matched,
            };
        }
        current_op = pred.combinator;
    }

    result
}
