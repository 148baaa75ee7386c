//! UIコンポーネント

pub mod decision_badge;
pub mod header;
pub mod input_panel;
pub mod result_card;
pub mod results_panel;
pub mod score_ring;
pub mod settings_modal;
pub mod skill_badge;
