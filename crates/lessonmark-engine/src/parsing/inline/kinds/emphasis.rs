/// Double-asterisk bold. Must expand before [`Italic`] so its asterisks are
/// not read as two empty italics.
pub struct Bold;

impl Bold {
    pub const DELIM: &'static str = "**";
    pub const TAG: &'static str = "strong";
}

/// Single-asterisk italic.
pub struct Italic;

impl Italic {
    pub const DELIM: &'static str = "*";
    pub const TAG: &'static str = "em";
}
