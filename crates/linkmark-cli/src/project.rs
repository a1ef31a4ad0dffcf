use linkmark_engine::{
    DocumentRef, ProjectContext,
    rendering::blocks::{HeadingLevel, SegmentHandler, segment},
};
use relative_path::RelativePathBuf;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ProjectError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid notes directory: {0}")]
    InvalidNotesDir(PathBuf),
    #[error("Cannot express {0} relative to the notes directory")]
    NotRelative(PathBuf),
}

/// Build the link-resolution context from every markdown file under `notes_root`.
pub fn load_project(notes_root: &Path) -> Result<ProjectContext, ProjectError> {
    if !notes_root.is_dir() {
        return Err(ProjectError::InvalidNotesDir(notes_root.to_path_buf()));
    }

    let mut files = Vec::new();
    scan_directory_recursive(notes_root, &mut files)?;
    files.sort();

    let documents = files
        .iter()
        .map(|file| document_ref(notes_root, file))
        .collect::<Result<Vec<_>, _>>()?;

    let name = notes_root
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    log::info!("Loaded {} documents from {}", documents.len(), notes_root.display());
    Ok(ProjectContext::new(name, documents))
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), ProjectError> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == "md"
        {
            files.push(path);
        }
    }

    Ok(())
}

fn document_ref(notes_root: &Path, file: &Path) -> Result<DocumentRef, ProjectError> {
    let relative = file
        .strip_prefix(notes_root)
        .ok()
        .and_then(|p| RelativePathBuf::from_path(p).ok())
        .ok_or_else(|| ProjectError::NotRelative(file.to_path_buf()))?;

    let content = fs::read_to_string(file)?;
    let title = first_heading(&content)
        .or_else(|| relative.file_stem().map(str::to_string))
        .unwrap_or_else(|| relative.to_string());

    Ok(DocumentRef::new(relative, title))
}

/// Keeps the first non-empty level-one heading outside code fences.
#[derive(Default)]
struct FirstHeading(Option<String>);

impl SegmentHandler for FirstHeading {
    fn heading(&mut self, level: HeadingLevel, text: &str) {
        let text = text.trim();
        if self.0.is_none() && level == HeadingLevel::H1 && !text.is_empty() {
            self.0 = Some(text.to_string());
        }
    }

    fn list_item(&mut self, _text: &str) {}

    fn paragraph(&mut self, _text: &str) {}

    fn blank(&mut self) {}

    fn code_block(&mut self, _info: Option<&str>, _content: &str) {}
}

fn first_heading(content: &str) -> Option<String> {
    let mut found = FirstHeading::default();
    segment(content, &mut found);
    found.0
}
