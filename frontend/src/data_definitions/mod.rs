pub mod url_param;
pub mod modal_state;
