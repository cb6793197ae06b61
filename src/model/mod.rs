pub mod content;
pub mod theme;

pub use content::{
    Attorney, AttorneyGroup, FaqEntry, NavEntry, NavTarget, PracticeArea, SectionId, SiteContent,
    Testimonial, ValueItem,
};
pub use theme::Theme;
