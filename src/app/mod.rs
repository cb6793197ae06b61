pub mod accordion;
pub mod carousel;
pub mod form;
pub mod layout;
pub mod menu;
pub mod navigation;
pub mod reveal;
pub mod state;
pub mod update;

pub use accordion::{AccordionState, OpenPolicy};
pub use carousel::CarouselState;
pub use form::{ContactForm, FormField, FormPhase};
pub use layout::{PageLayout, RowKind};
pub use menu::MenuState;
pub use navigation::handle_key;
pub use reveal::RevealState;
pub use state::{AppState, Focus, PendingAnchor, ScrollState, Viewport, FOOTER_ROWS, HEADER_ROWS};
pub use update::update;
