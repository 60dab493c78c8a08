//! Staged file list.

use formdom::FileRef;

/// Identity of a staged file: `name__size__lastModified`.
pub fn file_key(file: &FileRef) -> String {
    format!("{}__{}__{}", file.name, file.size, file.last_modified)
}

/// Human-readable size: whole bytes, otherwise one decimal in KB/MB/GB.
pub fn size_label(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} {}", bytes, UNITS[0])
    } else {
        format!("{:.1} {}", value, UNITS[unit])
    }
}

/// Files staged for upload, in the order they were first added.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StagedFiles {
    entries: Vec<(String, FileRef)>,
}

impl StagedFiles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage `files`; a file already staged under the same key is
    /// replaced where it stands.
    pub fn add(&mut self, files: impl IntoIterator<Item = FileRef>) {
        for file in files {
            let key = file_key(&file);
            match self.entries.iter_mut().find(|(k, _)| *k == key) {
                Some(entry) => entry.1 = file,
                None => self.entries.push((key, file)),
            }
        }
    }

    pub fn remove(&mut self, key: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(k, _)| k != key);
        self.entries.len() != before
    }

    /// Remove every key in `keys`, returning how many were staged.
    pub fn remove_all<'a>(&mut self, keys: impl IntoIterator<Item = &'a str>) -> usize {
        keys.into_iter().filter(|key| self.remove(key)).count()
    }

    pub fn get(&self, key: &str) -> Option<&FileRef> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, f)| f)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FileRef)> {
        self.entries.iter().map(|(k, f)| (k.as_str(), f))
    }

    pub fn files(&self) -> Vec<FileRef> {
        self.entries.iter().map(|(_, f)| f.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
