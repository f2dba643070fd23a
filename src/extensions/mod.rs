//! Host-facing hooks that observe the editor without mutating it.

pub mod listeners;

pub use listeners::{EditorContext, EditorNotification, PeriodEditorListener};
