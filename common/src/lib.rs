//! Portfolio UI Common Library
//!
//! ページ上の各コントローラが持つ状態とルール。DOMには依存しない。

pub mod carousel;
pub mod config;
pub mod error;
pub mod expandable;
pub mod filter;
pub mod form;
pub mod labels;
pub mod modal;
pub mod navigation;
pub mod progress;
pub mod reveal;
pub mod theme;

pub use carousel::{Carousel, CarouselInput};
pub use config::UiConfig;
pub use error::{Error, Result};
pub use expandable::ExpandState;
pub use filter::{FilterState, FILTER_ALL};
pub use form::{ContactForm, Field, FieldEvent, FieldState, SubmitOutcome, SubmitPhase};
pub use modal::{ImageRef, ModalState};
pub use navigation::{MenuState, SectionBounds};
pub use reveal::RevealTracker;
pub use theme::{Theme, ThemeState, ThemeView};
