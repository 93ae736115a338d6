//! Anchor patterns and generated line shapes for the build file.

use crate::error::{Result, ScaffoldError};
use serde::Deserialize;

/// Body lines that follow a recipe header in blocks written without an end marker.
pub const LEGACY_RECIPE_BODY_LINES: usize = 6;

/// Describes how each build-file region is recognized and what prjmgr writes into it.
///
/// Every field has a default matching the project Makefile, so an empty
/// `layout:` section (or none at all) in `prjmgr.yaml` is valid.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BuildFileLayout {
    /// Trimmed prefix of the line opening the compiled-object list.
    pub object_list_prefix: String,

    /// Directory expression prepended to object file names.
    pub object_dir: String,

    /// Variable holding the default target's listing file name.
    pub listing_var: String,

    /// Variable holding the default target's hex image name.
    pub hex_var: String,

    /// Variable holding the default target's ELF image name.
    pub elf_var: String,

    /// Trimmed prefix of the default target's rule header.
    pub default_target_header: String,

    /// Trimmed prefix of the first line of the summary echo block.
    pub summary_header_prefix: String,

    /// Comment prefix opening an example recipe block.
    pub recipe_header_prefix: String,

    /// Comment prefix closing an example recipe block.
    pub recipe_end_prefix: String,

    /// Line used as the recipe insertion point when no example block exists yet.
    pub recipe_placeholder: String,

    /// Example the target variables revert to when the active one is removed.
    pub fallback_example: String,
}

impl Default for BuildFileLayout {
    fn default() -> Self {
        Self {
            object_list_prefix: "OBJS =".to_string(),
            object_dir: "$(OBJDIR)".to_string(),
            listing_var: "TARGET_LST".to_string(),
            hex_var: "TARGET_HEX".to_string(),
            elf_var: "TARGET_ELF".to_string(),
            default_target_header: "all:".to_string(),
            summary_header_prefix: "@echo \"Build complete".to_string(),
            recipe_header_prefix: "# Example: ".to_string(),
            recipe_end_prefix: "# End example: ".to_string(),
            recipe_placeholder: "# Example recipes".to_string(),
            fallback_example: "000pilot_example".to_string(),
        }
    }
}

impl BuildFileLayout {
    /// Reject layouts whose anchors could match every line.
    pub fn validate(&self) -> Result<()> {
        let anchors = [
            ("object_list_prefix", &self.object_list_prefix),
            ("listing_var", &self.listing_var),
            ("hex_var", &self.hex_var),
            ("elf_var", &self.elf_var),
            ("default_target_header", &self.default_target_header),
            ("summary_header_prefix", &self.summary_header_prefix),
            ("recipe_header_prefix", &self.recipe_header_prefix),
            ("recipe_end_prefix", &self.recipe_end_prefix),
            ("recipe_placeholder", &self.recipe_placeholder),
        ];
        for (field, value) in anchors {
            if value.trim().is_empty() {
                return Err(ScaffoldError::Config(format!(
                    "layout.{} must not be empty",
                    field
                )));
            }
        }

        if self.recipe_end_prefix.trim().starts_with(self.recipe_header_prefix.trim()) {
            return Err(ScaffoldError::Config(
                "layout.recipe_end_prefix must not start with layout.recipe_header_prefix"
                    .to_string(),
            ));
        }

        crate::artifact::validate_name(&self.fallback_example)
            .map_err(|e| ScaffoldError::Config(format!("layout.fallback_example: {}", e)))
    }

    /// Object file path for `name` as it appears in the object list.
    pub fn object_token(&self, name: &str) -> String {
        format!("{}/{}.o", self.object_dir, name)
    }

    /// Object list continuation line for `name`.
    pub fn object_entry(&self, name: &str) -> String {
        format!("\t{} \\", self.object_token(name))
    }

    /// The three target variables paired with the extension each one names.
    pub fn target_vars(&self) -> [(&str, &str); 3] {
        [
            (self.listing_var.as_str(), "lst"),
            (self.hex_var.as_str(), "hex"),
            (self.elf_var.as_str(), "elf"),
        ]
    }

    /// Assignment line pointing `var` at `name`.
    pub fn target_var_line(&self, var: &str, ext: &str, name: &str) -> String {
        format!("{} = {}.{}", var, name, ext)
    }

    /// Dependency token for `name` on the default target.
    pub fn dependency_token(&self, name: &str) -> String {
        format!("{}.elf", name)
    }

    /// Dependency continuation line for `name`.
    pub fn dependency_line(&self, name: &str) -> String {
        format!("\t{} \\", self.dependency_token(name))
    }

    /// Summary echo line for `name`.
    pub fn summary_line(&self, name: &str) -> String {
        format!("\t@echo \"  {}.elf\"", name)
    }

    pub fn recipe_header(&self, name: &str) -> String {
        format!("{}{}", self.recipe_header_prefix, name)
    }

    pub fn recipe_end(&self, name: &str) -> String {
        format!("{}{}", self.recipe_end_prefix, name)
    }

    /// Full recipe block for `name`, closed by its end marker and a blank separator.
    pub fn recipe_block(&self, name: &str) -> Vec<String> {
        vec![
            self.recipe_header(name),
            format!("{}.elf: $(OBJS) {}/{}.o", name, self.object_dir, name),
            "\t$(CC) $(LDFLAGS) $^ -o $@".to_string(),
            format!("\t$(OBJCOPY) -O ihex -R .eeprom $@ {}.hex", name),
            format!("\t$(OBJDUMP) -h -S $@ > {}.lst", name),
            format!("\t@echo \"Linked {}.elf\"", name),
            format!("\t@echo \"Generated {}.hex and {}.lst\"", name, name),
            self.recipe_end(name),
            String::new(),
        ]
    }
}
