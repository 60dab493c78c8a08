pub mod document;
pub mod element;
pub mod error;
pub mod event;
pub mod file;
pub mod focus;
pub mod hit;
pub mod layout;

pub use document::Document;
pub use element::{Content, Element, Selector};
pub use error::DomError;
pub use event::{Event, Key, Modifiers};
pub use file::FileRef;
pub use focus::{collect_focusable, FocusState};
pub use hit::{hit_test, hit_test_any};
pub use layout::{LayoutResult, Rect, Viewport};
