//! Constants shared by the catalog server and UI.

pub const DEFAULT_PER_PAGE: u64 = 10;
pub const MAX_PER_PAGE: u64 = 100;
pub const DEFAULT_FACET_LIMIT: u64 = 10;
pub const MORE_LIKE_THIS_COUNT: u64 = 5;

pub const DEFAULT_TITLE_FIELD: &str = "title_tsim";
pub const DEFAULT_DISPLAY_TYPE_FIELD: &str = "format";

/// DOM id of the dialog element used by the document action modal.
pub const MODAL_DIALOG_ID: &str = "blacklight-modal";
