//! Filesystem boundary
//!
//! Everything the browser does to the disk goes through here: listing a
//! directory, searching a tree, discovering drives, batch copy/move,
//! creating files and folders, opening paths and previewing text. All
//! functions are blocking; the effects executor runs them off the event
//! thread.

mod drives;
mod entry;
mod error;
mod ops;
mod preview;
mod traversal;

pub use drives::{list_drives, Drive};
pub use entry::{compare_names, sort_entries, EntryKind, FileEntry, SortBy, SortOrder};
pub use error::FsError;
pub use ops::{
    containing_folder, copy_files, create_directory, create_file, move_files, open_in_explorer,
    open_path, BatchOutcome,
};
pub use preview::{is_likely_binary, preview_file, validate_for_preview, MAX_PREVIEW_SIZE};
pub use traversal::{
    default_search_root, is_hidden, list_directory, search, search_with_cancel, CancelToken,
    ListOptions,
};
