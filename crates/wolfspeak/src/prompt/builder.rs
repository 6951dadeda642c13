//! Labeled section builder.
//!
//! [`PromptBuilder`] assembles a prompt out of blocks separated by a blank
//! line. A labeled section is its label on one line followed by its body;
//! unlike raw blocks, a labeled section with an empty body still renders its
//! label so that "nothing observed" stays visible to the model.

/// Builder for blank-line separated prompt sections.
///
/// # Example
///
/// ```
/// use wolfspeak::prompt::builder::PromptBuilder;
///
/// let prompt = PromptBuilder::new()
///     .section("【Context】", "- Day 2")
///     .section("【Capabilities】", "")
///     .section_if(false, "【Examples】", || "- hidden".into())
///     .raw("Now speak.")
///     .build();
///
/// assert_eq!(prompt, "【Context】\n- Day 2\n\n【Capabilities】\n\nNow speak.");
/// ```
#[derive(Debug, Default)]
pub struct PromptBuilder {
    blocks: Vec<String>,
}

impl PromptBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a labeled section. An empty body renders the label alone.
    pub fn section(mut self, label: &str, body: impl Into<String>) -> Self {
        let body = body.into();
        if body.is_empty() {
            self.blocks.push(label.to_string());
        } else {
            self.blocks.push(format!("{label}\n{body}"));
        }
        self
    }

    /// Conditionally append a labeled section.
    ///
    /// The `body_fn` is only called when `condition` is true; a false
    /// condition omits the label too.
    pub fn section_if(
        self,
        condition: bool,
        label: &str,
        body_fn: impl FnOnce() -> String,
    ) -> Self {
        if condition {
            self.section(label, body_fn())
        } else {
            self
        }
    }

    /// Append raw text without a label.
    ///
    /// Skipped if `content` is empty.
    pub fn raw(mut self, content: impl Into<String>) -> Self {
        let content = content.into();
        if !content.is_empty() {
            self.blocks.push(content);
        }
        self
    }

    /// Number of blocks appended so far.
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Join all blocks with blank lines and trim the outer whitespace.
    pub fn build(self) -> String {
        self.blocks.join("\n\n").trim().to_string()
    }
}

/// Render `items` as `- item` lines.
pub fn bullets<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .map(|item| format!("- {}", item.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render a `- label:` line followed by `  - item` lines, one per item.
pub fn nested_bullets<I, S>(label: &str, items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = format!("- {label}:");
    for item in items {
        out.push_str("\n  - ");
        out.push_str(item.as_ref());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_builder_is_empty_string() {
        let builder = PromptBuilder::new();
        assert!(builder.is_empty());
        assert_eq!(builder.build(), "");
    }

    #[test]
    fn section_puts_body_under_label() {
        let prompt = PromptBuilder::new().section("【A】", "- one").build();
        assert_eq!(prompt, "【A】\n- one");
    }

    #[test]
    fn empty_section_keeps_label() {
        let prompt = PromptBuilder::new()
            .section("【Empty】", "")
            .section("【Present】", "content")
            .build();
        assert_eq!(prompt, "【Empty】\n\n【Present】\ncontent");
    }

    #[test]
    fn section_if_false_omits_label() {
        let builder = PromptBuilder::new()
            .section("【A】", "a")
            .section_if(false, "【Hidden】", || "should not appear".into());
        assert_eq!(builder.len(), 1);
        assert!(!builder.build().contains("Hidden"));
    }

    #[test]
    fn section_if_true_included() {
        let prompt = PromptBuilder::new()
            .section_if(true, "【Active】", || "active".into())
            .build();
        assert_eq!(prompt, "【Active】\nactive");
    }

    #[test]
    fn empty_raw_skipped() {
        let prompt = PromptBuilder::new().section("【A】", "a").raw("").build();
        assert_eq!(prompt, "【A】\na");
    }

    #[test]
    fn build_trims_outer_whitespace() {
        let prompt = PromptBuilder::new().raw("\n  padded  \n").build();
        assert_eq!(prompt, "padded");
    }

    #[test]
    fn bullet_helpers() {
        assert_eq!(bullets(["a", "b"]), "- a\n- b");
        assert_eq!(bullets(Vec::<String>::new()), "");
        assert_eq!(nested_bullets("Events", ["x", "y"]), "- Events:\n  - x\n  - y");
        assert_eq!(nested_bullets("Events", Vec::<&str>::new()), "- Events:");
    }
}
