// tests/integration_tests/errors_test.rs
use super::common::create_test_file;
use anyhow::Result;
use obsidian_to_quartz::{ConvertConfig, Patterns, convert};
use tempfile::TempDir;

#[test]
fn test_content_path_blocked_by_file_is_setup_error() -> Result<()> {
    let vault = TempDir::new()?;
    create_test_file(vault.path(), "note.md", "text")?;
    let site = TempDir::new()?;
    create_test_file(site.path(), "content", "not a folder")?;

    let err = convert(&ConvertConfig::new(vault.path(), site.path(), Patterns::new()))
        .expect_err("content folder cannot be created");

    assert!(format!("{err}").contains("Failed to create content folder"));
    Ok(())
}

#[test]
fn test_missing_source_is_reported() -> Result<()> {
    let site = TempDir::new()?;
    let missing = site.path().join("no-vault");

    let err = convert(&ConvertConfig::new(&missing, site.path(), Patterns::new()))
        .expect_err("walking a missing folder fails");

    assert!(format!("{err:#}").contains("no-vault"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_first_error_aborts_without_rollback() -> Result<()> {
    let vault = TempDir::new()?;
    create_test_file(vault.path(), "a.md", "written before the failure")?;
    create_test_file(vault.path(), "target/inner.md", "text")?;
    // Symlinks are not followed; copying a link to a folder fails.
    std::os::unix::fs::symlink(vault.path().join("target"), vault.path().join("b-link"))?;
    create_test_file(vault.path(), "c.md", "never reached")?;

    let site = TempDir::new()?;
    let result = convert(&ConvertConfig::new(vault.path(), site.path(), Patterns::new()));

    let err = result.expect_err("copying a folder symlink fails");
    assert!(format!("{err}").contains("b-link"));
    assert!(site.path().join("content/a.md").is_file());
    assert!(!site.path().join("content/c.md").exists());
    Ok(())
}
