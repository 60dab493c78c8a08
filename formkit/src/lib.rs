pub mod clock;
pub mod config;
pub mod context;
pub mod page;
pub mod widget;
pub mod widgets;

pub use config::{Config, ConfigError};
pub use page::Page;

pub mod prelude {
    pub use crate::clock::{Clock, FixedClock, SystemClock};
    pub use crate::config::{Config, ConfigError};
    pub use crate::context::Context;
    pub use crate::page::Page;
    pub use crate::widget::{EventResult, Widget};
    pub use crate::widgets::date_picker::{CalendarDate, DatePicker, Mode, SelectionState};
    pub use crate::widgets::{ChatAutosize, FileUploader, PasswordToggle, UserLookup};

    pub use formdom::{Document, Element, Event, FileRef, Key, Rect, Selector, Viewport};
}
