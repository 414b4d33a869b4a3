// Facade module for the control-panel building blocks.
pub mod mode_switch;
pub mod search_box;
pub mod segmented_panel;
