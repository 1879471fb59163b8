pub mod order_item_row;
pub mod picker_modal;
pub mod quantity_input;
