use id3::Tag;
use id3::frame::Content;

/// Bytes of the first embedded picture (APIC/PIC), if any.
pub(super) fn art_from_tag(tag: &Tag) -> Option<Vec<u8>> {
    tag.frames()
        .filter(|f| f.id() == "APIC" || f.id() == "PIC")
        .find_map(|f| match f.content() {
            Content::Picture(p) if !p.data.is_empty() => Some(p.data.clone()),
            _ => None,
        })
}
