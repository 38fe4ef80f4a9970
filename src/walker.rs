// src/walker.rs
//! Recursive directory traversal driving the evaluator.

#![deny(missing_docs)]

use crate::error::SeekError;
use crate::fsutil::{self, FsProvider};
use crate::predicate::{self, AttrFlags, Entry, Predicate};
use once_cell::sync::OnceCell;
use std::io::Write;

/// Everything one search run needs, built once from user input and
/// read-only during traversal.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Starting paths, in argument order.
    pub paths: Vec<String>,
    /// Inclusive recursion bound; negative means unlimited. Depth 0 is
    /// the starting path itself.
    pub max_depth: i32,
    /// Predicates in configuration order.
    pub predicates: Vec<Predicate>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            paths: vec![".".to_string()],
            max_depth: -1,
            predicates: Vec::new(),
        }
    }
}

/// Depth-first walker over one `SearchConfig`.
///
/// Matches are written to `out` one per line in listing order; unopenable
/// directories are reported to `err` and their subtrees contribute
/// nothing. The starting paths are seeds, not match candidates — except a
/// regular file named directly, which is evaluated once as a one-entry
/// pseudo-listing.
pub struct Walker<'a, F: FsProvider> {
    config: &'a SearchConfig,
    fs: &'a F,
    needs_attrs: bool,
    has_pattern: bool,
    fs_fold: OnceCell<bool>,
}

impl<'a, F: FsProvider> Walker<'a, F> {
    /// Build a walker. The attribute and pattern needs of the predicate
    /// set are fixed here, once, not per entry.
    pub fn new(config: &'a SearchConfig, fs: &'a F) -> Self {
        Self {
            config,
            fs,
            needs_attrs: predicate::needs_attr_flags(&config.predicates),
            has_pattern: config.predicates.iter().any(|p| p.pattern.is_some()),
            fs_fold: OnceCell::new(),
        }
    }

    /// Walk every starting path in order. Returns false when any starting
    /// path could not be opened; nested failures never fail the run.
    pub fn run(&self, out: &mut dyn Write, err: &mut dyn Write) -> SeekError<bool> {
        let mut ok = true;
        for start in &self.config.paths {
            if self.fs.is_directory_like(start) {
                if !self.walk_dir(start, 0, out, err)? {
                    ok = false;
                }
            } else if !self.eval_file_start(start, out, err)? {
                ok = false;
            }
        }
        Ok(ok)
    }

    /// Case policy for matcher calls: computed at most once per run, and
    /// only when some predicate actually carries a pattern.
    fn fold(&self) -> bool {
        if !self.has_pattern {
            return false;
        }
        *self
            .fs_fold
            .get_or_init(|| self.fs.filesystem_ignores_case())
    }

    fn attrs_for(&self, full_path: &str) -> AttrFlags {
        if self.needs_attrs {
            self.fs.probe_attributes(full_path)
        } else {
            AttrFlags::default()
        }
    }

    /// A regular file named directly as a starting path: a one-entry
    /// pseudo-listing, evaluated like any discovered entry, no recursion.
    fn eval_file_start(
        &self,
        path: &str,
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> SeekError<bool> {
        if !self.fs.path_exists(path) {
            writeln!(err, "treeseek: cannot open '{path}': no such file or directory")?;
            return Ok(false);
        }
        let entry = Entry {
            name: fsutil::base_name(path).to_string(),
            is_dir: false,
            attrs: self.attrs_for(path),
        };
        if predicate::evaluate(&entry, &self.config.predicates, self.fold()) {
            writeln!(out, "{path}")?;
        }
        Ok(true)
    }

    /// One activation per directory: list, filter and emit in listing
    /// order, then recurse into child directories.
    fn walk_dir(
        &self,
        dir: &str,
        depth: i32,
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> SeekError<bool> {
        // Children of this activation sit one level below `depth`; stop
        // before listing once the bound is reached.
        if self.config.max_depth >= 0 && depth > self.config.max_depth - 1 {
            return Ok(true);
        }

        let children = match self.fs.list_directory(dir) {
            Ok(children) => children,
            Err(e) => {
                writeln!(err, "treeseek: cannot open directory '{dir}': {e}")?;
                // Only a top-level failure fails the run; a nested one
                // leaves this subtree empty and the walk continues.
                return Ok(depth > 0);
            }
        };

        for child in &children {
            let full = fsutil::join_path(dir, &child.name);
            let entry = Entry {
                name: child.name.clone(),
                is_dir: child.is_dir,
                attrs: self.attrs_for(&full),
            };
            if predicate::evaluate(&entry, &self.config.predicates, self.fold()) {
                writeln!(out, "{full}")?;
            }
            if child.is_dir {
                self.walk_dir(&full, depth + 1, out, err)?;
            }
        }

        Ok(true)
    }
}
