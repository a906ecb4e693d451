//! Plain-text changelog rendering.

use std::fmt::Write;

use crate::VersionGroup;

/// Renders version groups as a plain-text changelog.
///
/// ```text
/// ## v2.0 (2024/3/7):
///  ADDED:
///   * Add exporter (1a2b3c4d)
/// ```
///
/// Every non-empty category gets a header, `UNCATEGORIZED` included.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChangelogWriter {
    detailed: bool,
}

impl ChangelogWriter {
    /// Creates a writer.
    ///
    /// When `detailed` is set, each entry is followed by its short hash.
    #[must_use]
    pub fn new(detailed: bool) -> Self {
        Self { detailed }
    }

    /// Renders the groups in the given order.
    #[must_use]
    pub fn render(&self, groups: &[VersionGroup]) -> String {
        let mut output = String::new();

        for (index, group) in groups.iter().enumerate() {
            if index > 0 {
                output.push('\n');
            }
            _ = writeln!(output, "## {} ({}):", group.version, group.date);

            for (category, entries) in group.buckets() {
                _ = writeln!(output, " {category}:");
                for entry in entries {
                    if self.detailed {
                        _ = writeln!(output, "  * {} ({})", entry.message, entry.short_hash);
                    } else {
                        _ = writeln!(output, "  * {}", entry.message);
                    }
                }
            }
        }

        output
    }

    /// Renders the groups above an existing changelog.
    #[must_use]
    pub fn render_before(&self, groups: &[VersionGroup], existing: &str) -> String {
        let mut output = self.render(groups);
        if !existing.trim().is_empty() {
            output.push('\n');
            output.push_str(existing);
        }
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Grouper;
    use chrono::{TimeZone, Utc};
    use taglog_commit::{Category, ClassifiedEntry};

    fn groups() -> Vec<VersionGroup> {
        let date = Utc.with_ymd_and_hms(2024, 3, 7, 10, 0, 0).unwrap();
        let older = Utc.with_ymd_and_hms(2023, 11, 20, 10, 0, 0).unwrap();
        let mut grouper = Grouper::new();
        grouper.push(ClassifiedEntry::new(
            Category::Added,
            "Add exporter",
            "v2.0",
            "1a2b3c4d",
            date,
        ));
        grouper.push(ClassifiedEntry::new(
            Category::Changed,
            "Update docs",
            "v2.0",
            "5e6f7a8b",
            date,
        ));
        grouper.push(ClassifiedEntry::new(
            Category::Added,
            "Add importer",
            "v2.0",
            "9c0d1e2f",
            date,
        ));
        grouper.push(ClassifiedEntry::new(
            Category::Uncategorized,
            "Initial commit",
            "v1.0",
            "33445566",
            older,
        ));
        grouper.into_groups()
    }

    #[test]
    fn test_render() {
        let output = ChangelogWriter::new(false).render(&groups());
        let expected = "\
## v2.0 (2024/3/7):
 ADDED:
  * Add exporter
  * Add importer
 CHANGED:
  * Update docs

## v1.0 (2023/11/20):
 UNCATEGORIZED:
  * Initial commit
";
        assert_eq!(output, expected);
    }

    #[test]
    fn test_render_detailed() {
        let output = ChangelogWriter::new(true).render(&groups());
        assert!(output.contains("  * Add exporter (1a2b3c4d)\n"));
        assert!(output.contains("  * Initial commit (33445566)\n"));
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(ChangelogWriter::default().render(&[]), "");
    }

    #[test]
    fn test_render_before_existing() {
        let groups = groups();
        let output = ChangelogWriter::new(false).render_before(&groups[..1], "## v1.0 (2023/11/20):\n");
        assert!(output.starts_with("## v2.0 (2024/3/7):\n"));
        assert!(output.ends_with("  * Update docs\n\n## v1.0 (2023/11/20):\n"));
    }

    #[test]
    fn test_render_before_blank_existing() {
        let groups = groups();
        let writer = ChangelogWriter::new(false);
        assert_eq!(writer.render_before(&groups, "\n"), writer.render(&groups));
    }
}
