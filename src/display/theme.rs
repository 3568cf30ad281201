pub const ACCENT: (u8, u8, u8) = (156, 39, 176);
pub const CYAN: (u8, u8, u8) = (0, 188, 212);
pub const SUCCESS: (u8, u8, u8) = (0, 200, 83);
pub const WARNING: (u8, u8, u8) = (255, 193, 7);
pub const ERROR: (u8, u8, u8) = (244, 67, 54);

pub mod icons {
    pub const MONITOR: &str = "🔍";
    pub const TRANSACTION: &str = "⇄";
    pub const WARNING: &str = "⚠";
    pub const ERROR: &str = "✖";
    pub const STOP: &str = "■";
}
