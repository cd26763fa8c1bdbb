// tests/integration_tests/common.rs
use anyhow::Result;
use obsidian_to_quartz::IGNORE_FILE_NAME;
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use walkdir::WalkDir;

pub const PHOTO_BYTES: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a, 0x00, 0xff];

pub fn create_test_file(dir: &Path, name: &str, content: impl AsRef<[u8]>) -> Result<()> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

pub fn create_ignore_file(dir: &Path, patterns: &[&str]) -> Result<()> {
    let content = patterns.join("\n");
    create_test_file(dir, IGNORE_FILE_NAME, content)
}

/// Files under `dir`, as sorted `/`-separated relative paths.
pub fn list_files(dir: &Path) -> Result<Vec<String>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir) {
        let entry = entry?;
        if entry.file_type().is_file() {
            let rel = entry.path().strip_prefix(dir)?;
            files.push(obsidian_to_quartz::utils::to_slash(rel));
        }
    }
    files.sort();
    Ok(files)
}

pub fn setup_vault() -> Result<TempDir> {
    let vault = TempDir::new()?;
    let root = vault.path();

    create_test_file(
        root,
        "notes/index.md",
        "# Index\nSee [[Architecture.excalidraw]] and [this flowchart](Workflow.excalidraw.md).\n",
    )?;
    create_test_file(root, "notes/plain.txt", "plain [[Architecture.excalidraw]]")?;
    create_test_file(root, "attachments/photo.png", PHOTO_BYTES)?;

    create_test_file(root, "Excalidraw/Architecture.excalidraw.md", "drawing json")?;
    create_test_file(root, "Excalidraw/Architecture.excalidraw.svg", "<svg/>")?;
    create_test_file(root, "Excalidraw/nested/Workflow.excalidraw.svg", "<svg/>")?;
    create_test_file(root, "Excalidraw/nested/readme.md", "not exported")?;

    create_test_file(root, "Templates/daily.md", "template")?;
    create_test_file(root, "Private/secret.md", "secret")?;
    create_test_file(root, "scratch.tmp", "scratch")?;
    create_test_file(root, "sub/dir/notes.tmp", "scratch")?;
    create_test_file(root, "notes.tmp.bak", "backup")?;

    create_test_file(root, ".trash/deleted.md", "deleted")?;
    create_test_file(root, ".obsidian/app.json", "{}")?;
    create_test_file(root, "notes/.cache/x.md", "cached")?;

    Ok(vault)
}
