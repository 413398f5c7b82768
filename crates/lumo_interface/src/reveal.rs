use derive_more::Display;

/// Identifies a UI element whose visibility the sequencer controls. Chrome
/// and section targets carry the element id they match in the document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
pub enum RevealTarget {
    #[display("body")]
    Body,

    #[display("chrome #{_0}")]
    Chrome(String),

    #[display("section #{_0}")]
    Section(String),
}

/// A `RevealSurface` is the environment adapter that performs the actual
/// visibility mutation, for instance by toggling a class on a DOM node.
/// The sequencer decides what to reveal and when; the surface mutates.
pub trait RevealSurface {
    /// Makes the target visible. Returns false if no such element exists,
    /// in which case the caller skips it and continues.
    fn reveal(&self, target: &RevealTarget) -> bool;
}
