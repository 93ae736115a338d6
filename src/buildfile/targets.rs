//! Example target edits.
//!
//! Adding an example touches four regions independently: the target
//! variables, the default target's dependency list, the summary echo block,
//! and the recipe blocks. A missing anchor only stops the edit that needs it.

use super::layout::LEGACY_RECIPE_BODY_LINES;
use super::{BuildFile, BuildFileLayout, Region};
use regex::Regex;
use tracing::{debug, warn};

/// Result of an example target edit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditReport {
    /// Whether any line was changed.
    pub changed: bool,
    /// Regions whose anchor line could not be found.
    pub missing: Vec<Region>,
    /// Regions left untouched because they have no insertion point.
    pub skipped: Vec<Region>,
}

impl BuildFile {
    /// Register example `name` as a build target.
    ///
    /// The target variables are overwritten to point at `name`, so they always
    /// describe the most recently added example. The summary line is inserted
    /// directly below the summary header, which lists examples newest first.
    /// The recipe block goes before the first existing example recipe, or before
    /// the layout's placeholder line when there is none.
    pub fn add_example_target(&mut self, layout: &BuildFileLayout, name: &str) -> EditReport {
        let mut report = EditReport::default();

        self.point_target_vars_at(layout, name, &mut report);
        self.add_dependency(layout, name, &mut report);
        self.add_summary_line(layout, name, &mut report);
        self.add_recipe_block(layout, name, &mut report);

        report
    }

    /// Undo [`BuildFile::add_example_target`] for `name`.
    ///
    /// Target variables that point at `name` revert to the layout's fallback
    /// example rather than to another registered example. Returns whether
    /// anything changed.
    pub fn remove_example_target(&mut self, layout: &BuildFileLayout, name: &str) -> bool {
        let mut changed = false;

        for (var, ext) in layout.target_vars() {
            let Some(index) = self.find_assignment(var) else {
                continue;
            };
            let line = &self.lines()[index];
            let value = line.split_once('=').map_or("", |(_, value)| value.trim());
            if value == format!("{}.{}", name, ext) && name != layout.fallback_example {
                let fallback = layout.target_var_line(var, ext, &layout.fallback_example);
                self.replace_line(index, fallback);
                changed = true;
            }
        }

        let dependencies = self.remove_exact(&layout.dependency_line(name));
        let summaries = self.remove_exact(&layout.summary_line(name));
        let recipes = self.remove_recipe_blocks(layout, name);
        debug!(name, dependencies, summaries, recipes, "removed example target");

        changed || dependencies > 0 || summaries > 0 || recipes > 0
    }

    fn point_target_vars_at(&mut self, layout: &BuildFileLayout, name: &str, report: &mut EditReport) {
        let mut missing = false;
        for (var, ext) in layout.target_vars() {
            let Some(index) = self.find_assignment(var) else {
                missing = true;
                continue;
            };
            let line = layout.target_var_line(var, ext, name);
            if self.lines()[index].trim() != line {
                self.replace_line(index, line);
                report.changed = true;
            }
        }
        if missing {
            warn!(name, "target variable assignment not found");
            report.missing.push(Region::TargetVars);
        }
    }

    fn add_dependency(&mut self, layout: &BuildFileLayout, name: &str, report: &mut EditReport) {
        let Some(header) = self.find_prefix(layout.default_target_header.trim(), 0) else {
            warn!(name, "default target rule not found");
            report.missing.push(Region::DependencyList);
            return;
        };

        if self.dependency_listed(header, &layout.dependency_token(name)) {
            debug!(name, "dependency already listed");
            return;
        }

        self.insert_after(header, vec![layout.dependency_line(name)]);
        report.changed = true;
    }

    fn add_summary_line(&mut self, layout: &BuildFileLayout, name: &str, report: &mut EditReport) {
        let Some(header) = self.find_prefix(layout.summary_header_prefix.trim(), 0) else {
            warn!(name, "build summary header not found");
            report.missing.push(Region::SummaryBlock);
            return;
        };

        let line = layout.summary_line(name);
        if self.find_exact(&line).is_some() {
            return;
        }

        self.insert_after(header, vec![line]);
        report.changed = true;
    }

    fn add_recipe_block(&mut self, layout: &BuildFileLayout, name: &str, report: &mut EditReport) {
        if self.find_exact(&layout.recipe_header(name)).is_some() {
            debug!(name, "recipe block already present");
            return;
        }

        let anchor = self
            .find_prefix(&layout.recipe_header_prefix, 0)
            .or_else(|| self.find_exact(&layout.recipe_placeholder));
        let Some(anchor) = anchor else {
            warn!(name, "no example recipe or placeholder line, recipe not written");
            report.skipped.push(Region::RecipeBlock);
            return;
        };

        self.insert_before(anchor, layout.recipe_block(name));
        report.changed = true;
    }

    /// Index of the line assigning `var` (`=`, `:=`, `?=` or `+=`).
    fn find_assignment(&self, var: &str) -> Option<usize> {
        let pattern = format!(r"^\s*{}\s*[:?+]?=", regex::escape(var));
        let re = Regex::new(&pattern).ok()?;
        self.lines().iter().position(|line| re.is_match(line))
    }

    /// Whether `token` appears in the rule starting at `header` or its continuation lines.
    fn dependency_listed(&self, header: usize, token: &str) -> bool {
        let pattern = format!(r"(?:^|[\s:]){}(?:\s|\\|$)", regex::escape(token));
        let Ok(re) = Regex::new(&pattern) else {
            return false;
        };

        for line in &self.lines()[header..] {
            if re.is_match(line.trim()) {
                return true;
            }
            if !line.trim_end().ends_with('\\') {
                break;
            }
        }
        false
    }

    /// Delete every recipe block for `name`. Returns the number of blocks removed.
    fn remove_recipe_blocks(&mut self, layout: &BuildFileLayout, name: &str) -> usize {
        let header = layout.recipe_header(name);
        let end_marker = layout.recipe_end(name);
        let mut removed = 0;

        while let Some(start) = self.find_exact(&header) {
            let limit = self
                .find_prefix(&layout.recipe_header_prefix, start + 1)
                .unwrap_or(self.lines().len());
            let end = self.lines()[start + 1..limit]
                .iter()
                .position(|line| line.trim() == end_marker.trim())
                .map(|offset| start + 1 + offset);

            let stop = match end {
                Some(end) => {
                    let after = end + 1;
                    let blank_follows = self.lines().get(after).is_some_and(|l| l.trim().is_empty());
                    if blank_follows { after + 1 } else { after }
                }
                None => {
                    warn!(name, "recipe block has no end marker, removing fixed-size block");
                    (start + 1 + LEGACY_RECIPE_BODY_LINES).min(limit)
                }
            };

            self.remove_range(start..stop);
            removed += 1;
        }

        removed
    }
}
