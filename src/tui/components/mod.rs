//! # TUI Components
//!
//! Host-level components. Feature views live with their features
//! (`features::*::ui`) and are rendered through the navigation host.
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! └── title_bar.rs     (Top status bar)
//! ```

mod title_bar;
pub use title_bar::TitleBar;
