pub mod errors;
pub mod id;
pub mod notifications;
pub mod types;

pub use errors::{BoardhostError, ConfigError, EmbedError, LaunchError, PlatformError};
pub use id::{new_id, SessionId, TabId};
pub use notifications::{Notice, NoticeLevel, NoticeQueue};
pub use types::{PixelRect, Rect};

pub type Result<T> = std::result::Result<T, BoardhostError>;
