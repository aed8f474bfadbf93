pub mod document_actions;
pub mod document_fields;
pub mod show_sidebar;
