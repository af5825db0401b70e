mod media;
mod record;

pub use media::{MediaKind, MediaPost};
pub use record::{
    DateValue, ExternalFile, FileAttachment, HostedFile, PageProperties, PageRecord,
    PropertyValue, RichTextItem,
};
