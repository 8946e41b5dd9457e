//! Shared test helpers: a stub formatter standing in for pandoc.
//!
//! The stub is a shell script that emits canned formatter output keyed on
//! the entry's citation key, so the pipeline can be exercised end to end
//! without a pandoc installation.

/// Canned formatter output for `smith2020`: a journal article whose target
/// author (Stephens) is listed second of two, with a DOI.
pub const SMITH_OUTPUT: &str = r#"---
nocite: "[@smith2020]"
references:
- author:
  - family: Smith
    given: John
  - family: Stephens
    given: Kay
  container-title: Journal of Testing
  doi: 10.1234/jt.1
  id: smith2020
  issued: 2020-03
  title: A Paper
  type: article-journal
---

"#;

/// Canned formatter output for `lead2021`: a journal article whose target
/// author (Stephens) is first-listed, with an explicit link and no DOI.
pub const LEAD_OUTPUT: &str = r#"---
nocite: "[@lead2021]"
references:
- author:
  - family: Stephens
    given: Kay
  - family: Lee
    given: Ada
  container-title: Methods Review
  id: lead2021
  issued: 2021-11
  title: Another Paper
  type: article-journal
  url: https://example.com/lead
---

"#;

/// Writes an executable stub formatter into `dir` and returns its path.
///
/// The stub answers `--version`, fails with a diagnostic on entries
/// containing `broken`, and otherwise emits the canned output matching the
/// entry's citation key (`lead2021`, or `smith2020` as the fallback).
#[cfg(unix)]
pub fn write_stub_formatter(dir: &std::path::Path) -> std::path::PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let script = format!(
        "#!/bin/sh\n\
         if [ \"$1\" = \"--version\" ]; then\n\
           echo 'pandoc 3.0 (stub)'\n\
           exit 0\n\
         fi\n\
         if grep -q broken \"$1\"; then\n\
           echo 'Error reading bibliography' >&2\n\
           exit 64\n\
         fi\n\
         if grep -q lead2021 \"$1\"; then\n\
           cat <<'EOF'\n{lead}EOF\n\
           exit 0\n\
         fi\n\
         cat <<'EOF'\n{smith}EOF\n",
        lead = LEAD_OUTPUT,
        smith = SMITH_OUTPUT,
    );

    let path = dir.join("fake-pandoc");
    std::fs::write(&path, script).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}
