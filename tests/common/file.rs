use derive_new::new;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Eq, PartialEq, new)]
pub struct FileSpec {
    pub path: PathBuf,
    pub content: String,
}

pub fn write_file(file_spec: FileSpec) {
    // make sure the parent directory exists
    if let Some(parent) = file_spec.path.parent() {
        std::fs::create_dir_all(parent)
            .unwrap_or_else(|e| panic!("Failed to create directory {:?}: {}", parent, e));
    }

    std::fs::write(&file_spec.path, &file_spec.content)
        .unwrap_or_else(|e| panic!("Failed to write file {:?}: {}", file_spec.path, e));
}

pub fn write_version(dir: &Path, name: &str, content: &str) -> FileSpec {
    let file_spec = FileSpec::new(dir.join(name), content.to_string());
    write_file(file_spec.clone());
    file_spec
}

/// Writes a statement selecting randomly named columns, one per line.
pub fn write_generated_statement(dir: &Path, name: &str, columns_count: usize) -> FileSpec {
    use fake::{Fake, faker::lorem::en::Word};

    let columns = (0..columns_count)
        .map(|n| format!("  {}_{n},", Word().fake::<String>()))
        .collect::<Vec<_>>();
    let content = format!("SELECT\n{}\nFROM generated", columns.join("\n"));

    write_version(dir, name, &content)
}

pub fn read_file(path: &Path) -> String {
    std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read file {:?}: {}", path, e))
}
