pub mod crash_report;
pub mod discovery;
pub mod keymap;
pub mod paths;
pub mod window_system;

pub use discovery::{app_dir, discover_executable};
pub use keymap::{normalize_key_name, virtual_key_code, Modifiers};
pub use paths::{config_dir, crash_report_dir, data_dir, ensure_dirs, log_dir};
pub use window_system::{
    create_window_system, ExtendedTrait, NativeMessage, StylePatch, WindowHandle, WindowSystem,
    WindowTrait,
};
