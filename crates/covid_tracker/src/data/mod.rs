pub mod keybindings_data;
pub mod settings_data;
pub mod storage;
