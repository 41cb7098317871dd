pub mod input_panel;
pub mod results_panel;
