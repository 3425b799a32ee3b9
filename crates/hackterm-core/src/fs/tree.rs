//! Arena-backed folder tree.

use std::collections::BTreeMap;

use super::node::{EntryKind, File, Folder, FolderId, Removed};
use crate::authority::{is_authorized, Authority};
use crate::error::{FsError, FsResult};

/// One computer's folder tree.
#[derive(Clone, Debug)]
pub struct FileSystem {
    folders: BTreeMap<FolderId, Folder>,
    root: FolderId,
    next_id: u32,
}

impl FileSystem {
    /// Create a tree holding a single root folder.
    pub fn new(root_name: impl Into<String>, access: Authority) -> Self {
        let root = FolderId(0);
        let mut folders = BTreeMap::new();
        folders.insert(root, Folder::new(root_name.into(), access, None));
        Self {
            folders,
            root,
            next_id: 1,
        }
    }

    pub fn root(&self) -> FolderId {
        self.root
    }

    /// Number of folders in the tree, root included.
    pub fn folder_count(&self) -> usize {
        self.folders.len()
    }

    // ========== Lookup ==========

    pub fn folder(&self, id: FolderId) -> FsResult<&Folder> {
        self.folders.get(&id).ok_or(FsError::UnknownFolder(id))
    }

    pub fn folder_mut(&mut self, id: FolderId) -> FsResult<&mut Folder> {
        self.folders.get_mut(&id).ok_or(FsError::UnknownFolder(id))
    }

    pub fn parent(&self, id: FolderId) -> FsResult<Option<FolderId>> {
        Ok(self.folder(id)?.parent)
    }

    /// Child folder with exactly this name. Authority is not checked.
    pub fn find_child(&self, id: FolderId, name: &str) -> FsResult<Option<(FolderId, &Folder)>> {
        let folder = self.folder(id)?;
        for child_id in &folder.children {
            let child = self.folder(*child_id)?;
            if child.name == name {
                return Ok(Some((*child_id, child)));
            }
        }
        Ok(None)
    }

    /// File with exactly this name. Authority is not checked.
    pub fn find_file(&self, id: FolderId, name: &str) -> FsResult<Option<&File>> {
        Ok(self.folder(id)?.files.iter().find(|f| f.name() == name))
    }

    pub fn find_file_mut(&mut self, id: FolderId, name: &str) -> FsResult<Option<&mut File>> {
        Ok(self.folder_mut(id)?.files.iter_mut().find(|f| f.name() == name))
    }

    /// Files of `id` readable with `have`, in insertion order.
    pub fn visible_files(&self, id: FolderId, have: Authority) -> FsResult<Vec<&File>> {
        Ok(self
            .folder(id)?
            .files
            .iter()
            .filter(|f| is_authorized(have, f.access()))
            .collect())
    }

    /// Child folders of `id` enterable with `have`, in insertion order.
    pub fn visible_folders(&self, id: FolderId, have: Authority) -> FsResult<Vec<(FolderId, &Folder)>> {
        let mut visible = Vec::new();
        for child_id in &self.folder(id)?.children {
            let child = self.folder(*child_id)?;
            if is_authorized(have, child.access) {
                visible.push((*child_id, child));
            }
        }
        Ok(visible)
    }

    /// Names shown by `ls`: files first, then folders.
    pub fn visible_names(&self, id: FolderId, have: Authority) -> FsResult<Vec<&str>> {
        let mut names: Vec<&str> = self.visible_files(id, have)?.into_iter().map(File::name).collect();
        names.extend(self.visible_folders(id, have)?.into_iter().map(|(_, f)| f.name()));
        Ok(names)
    }

    /// `/`-joined folder names from the root down to `id`.
    pub fn full_path(&self, id: FolderId) -> FsResult<String> {
        let mut names = Vec::new();
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            let folder = self.folder(current)?;
            names.push(folder.name.as_str());
            cursor = folder.parent;
        }
        names.reverse();
        Ok(names.join("/"))
    }

    // ========== Mutation ==========

    /// Attach a new empty folder under `parent`.
    pub fn add_folder(&mut self, parent: FolderId, name: impl Into<String>, access: Authority) -> FsResult<FolderId> {
        let name = name.into();
        if self.find_child(parent, &name)?.is_some() {
            return Err(FsError::AlreadyExists(name));
        }

        let id = FolderId(self.next_id);
        self.next_id += 1;
        self.folders.insert(id, Folder::new(name, access, Some(parent)));
        self.folder_mut(parent)?.children.push(id);
        Ok(id)
    }

    /// Existing child folder named `name`, or a new one with `access`.
    pub fn ensure_folder(&mut self, parent: FolderId, name: &str, access: Authority) -> FsResult<FolderId> {
        match self.find_child(parent, name)? {
            Some((id, _)) => Ok(id),
            None => self.add_folder(parent, name, access),
        }
    }

    pub fn add_file(&mut self, id: FolderId, file: File) -> FsResult<()> {
        let folder = self.folder_mut(id)?;
        if folder.files.iter().any(|f| f.name() == file.name()) {
            return Err(FsError::AlreadyExists(file.name().to_string()));
        }
        folder.files.push(file);
        Ok(())
    }

    /// Remove the file or folder `name` from `id`.
    ///
    /// Files are matched before folders. A folder is removable only when
    /// it has no child folders; its files are dropped with it.
    pub fn remove(&mut self, id: FolderId, name: &str, have: Authority) -> FsResult<Removed> {
        let folder = self.folder(id)?;

        if let Some(index) = folder.files.iter().position(|f| f.name() == name) {
            if !is_authorized(have, folder.files[index].access()) {
                return Err(FsError::PermissionDenied {
                    kind: EntryKind::File,
                    name: name.to_string(),
                });
            }
            let file = self.folder_mut(id)?.files.remove(index);
            return Ok(Removed::File(file));
        }

        let (child_id, child) = self
            .find_child(id, name)?
            .ok_or_else(|| FsError::NotFound(name.to_string()))?;
        if !is_authorized(have, child.access) {
            return Err(FsError::PermissionDenied {
                kind: EntryKind::Folder,
                name: name.to_string(),
            });
        }
        if child.has_subfolders() {
            return Err(FsError::HasSubfolders(name.to_string()));
        }

        self.folder_mut(id)?.children.retain(|c| *c != child_id);
        self.folders.remove(&child_id);
        Ok(Removed::Folder(name.to_string()))
    }
}

#[cfg(test)]
#[path = "tree_tests.rs"]
mod tree_tests;
