//! Building blocks shared by the `hydectl` binary and its terminal browser.
//!
//! The registry model describes which configuration files belong to which
//! application, [`paths`] resolves the `~` and `${VAR}` references stored in
//! it, [`scripts`] finds and runs user scripts, and [`editor`] launches an
//! editor on a chosen file with its pre- and post-edit hooks.

pub mod editor;
pub mod paths;
pub mod registry;
pub mod scripts;

pub use editor::{
	EditReport, EditSession, EditStep, EditorCommand, EditorError, HookOutcome, resolve_editor,
};
pub use paths::expand;
pub use registry::{AppEntry, FileEntry, Registry, RegistryError};
pub use scripts::{ScriptError, ScriptIndex};
