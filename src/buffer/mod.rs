pub mod time_window;
pub mod windowed;

pub use time_window::window_start;
pub use windowed::WindowedBuffer;
