pub mod search_input_top_bar;
pub mod facet_sidebar;
pub mod search_result_item_card;
pub mod pagination_controls;
