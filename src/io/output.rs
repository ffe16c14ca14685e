//! File-list rendering for downstream consumers.
//!
//! Discovery produces one artifact, the file list. The renderers here turn
//! it into the encodings consumed by humans, scripts, and the CI output
//! mechanism without transforming the paths themselves.

use std::path::PathBuf;

use crate::core::errors::Result;

/// Key used for the CI output line (`filelist=<paths>`).
pub const FILELIST_OUTPUT_KEY: &str = "filelist";

/// Output encodings for the discovered file list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileListFormat {
    /// One path per line
    Lines,
    /// Space-separated paths on a single line
    Space,
    /// JSON array of paths
    Json,
    /// `filelist=<space-separated>` line for a GitHub Actions output file
    GithubOutput,
}

/// Render the discovered file list in the requested format.
pub fn render_file_list(files: &[PathBuf], format: FileListFormat) -> Result<String> {
    let paths: Vec<String> = files.iter().map(|path| path.display().to_string()).collect();

    Ok(match format {
        FileListFormat::Lines => paths.join("\n"),
        FileListFormat::Space => paths.join(" "),
        FileListFormat::Json => serde_json::to_string_pretty(&paths)?,
        FileListFormat::GithubOutput => {
            format!("{FILELIST_OUTPUT_KEY}={}", paths.join(" "))
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn files() -> Vec<PathBuf> {
        vec![PathBuf::from("group_fixup.py"), PathBuf::from("scripts/usermap")]
    }

    #[test]
    fn lines_format_is_one_path_per_line() {
        let rendered = render_file_list(&files(), FileListFormat::Lines).unwrap();
        assert_eq!(rendered, "group_fixup.py\nscripts/usermap");
    }

    #[test]
    fn space_format_joins_on_a_single_line() {
        let rendered = render_file_list(&files(), FileListFormat::Space).unwrap();
        assert_eq!(rendered, "group_fixup.py scripts/usermap");
    }

    #[test]
    fn github_output_format_prefixes_the_filelist_key() {
        let rendered = render_file_list(&files(), FileListFormat::GithubOutput).unwrap();
        assert_eq!(rendered, "filelist=group_fixup.py scripts/usermap");
    }

    #[test]
    fn json_format_round_trips() {
        let rendered = render_file_list(&files(), FileListFormat::Json).unwrap();
        let parsed: Vec<String> = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed, vec!["group_fixup.py", "scripts/usermap"]);
    }

    #[test]
    fn empty_list_renders_cleanly() {
        assert_eq!(
            render_file_list(&[], FileListFormat::Lines).unwrap(),
            ""
        );
        assert_eq!(
            render_file_list(&[], FileListFormat::GithubOutput).unwrap(),
            "filelist="
        );
        let parsed: Vec<String> =
            serde_json::from_str(&render_file_list(&[], FileListFormat::Json).unwrap()).unwrap();
        assert!(parsed.is_empty());
    }
}
