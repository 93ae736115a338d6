//! Object list edits (drivers and BSPs).

use super::{BuildFile, BuildFileLayout, Region};
use crate::error::{Result, ScaffoldError};
use regex::Regex;
use tracing::debug;

impl BuildFile {
    /// Add `name`'s object file right after the object list header.
    ///
    /// Returns `Ok(false)` when the object is already listed anywhere in the
    /// list, including as its final unterminated entry.
    pub fn add_object_entry(&mut self, layout: &BuildFileLayout, name: &str) -> Result<bool> {
        let anchor = self
            .find_prefix(layout.object_list_prefix.trim(), 0)
            .ok_or_else(|| ScaffoldError::missing(Region::ObjectList))?;

        let token = layout.object_token(name);
        let end = self.continuation_end(anchor);
        if self.lines()[anchor..=end].iter().any(|line| contains_token(line, &token)) {
            debug!(name, "object entry already present");
            return Ok(false);
        }

        self.insert_after(anchor, vec![layout.object_entry(name)]);
        debug!(name, line = anchor + 1, "inserted object entry");
        Ok(true)
    }

    /// Remove `name`'s entry from every object list. Absent entries are a no-op.
    ///
    /// When the removed entry closed its list, the new last entry loses its
    /// trailing `\` so the list does not swallow the following line.
    pub fn remove_object_entry(&mut self, layout: &BuildFileLayout, name: &str) -> usize {
        let token = layout.object_token(name);
        let mut removed = 0;
        let mut from = 0;

        while let Some(anchor) = self.find_prefix(layout.object_list_prefix.trim(), from) {
            let end = self.continuation_end(anchor);
            let matches: Vec<usize> = (anchor + 1..=end)
                .filter(|&i| entry_text(&self.lines()[i]) == token)
                .collect();

            for &index in matches.iter().rev() {
                self.remove_range(index..index + 1);
            }
            let new_end = end - matches.len();
            if matches.last() == Some(&end) {
                self.close_continuation(new_end);
            }

            removed += matches.len();
            from = new_end + 1;
        }

        debug!(name, removed, "removed object entries");
        removed
    }

    /// Index of the last line of the `\`-continued statement starting at `start`.
    fn continuation_end(&self, start: usize) -> usize {
        let lines = self.lines();
        let mut end = start;
        while end + 1 < lines.len() && lines[end].trim_end().ends_with('\\') {
            end += 1;
        }
        end
    }

    /// Drop the trailing `\` from the line at `index`, keeping any `\r`.
    fn close_continuation(&mut self, index: usize) {
        let Some(line) = self.lines().get(index) else {
            return;
        };
        let cr = line.ends_with('\r');
        let body = line.trim_end_matches('\r');
        let Some(stripped) = body.trim_end().strip_suffix('\\') else {
            return;
        };
        let closed = stripped.trim_end().to_string();
        self.replace_line(index, if cr { format!("{}\r", closed) } else { closed });
    }
}

/// Line content without indentation, line ending or continuation marker.
fn entry_text(line: &str) -> &str {
    let trimmed = line.trim();
    trimmed.strip_suffix('\\').unwrap_or(trimmed).trim_end()
}

fn contains_token(line: &str, token: &str) -> bool {
    let pattern = format!(r"(?:^|[\s=]){}(?:\s|\\|$)", regex::escape(token));
    Regex::new(&pattern).is_ok_and(|re| re.is_match(line.trim()))
}
