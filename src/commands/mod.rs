pub type CmdResult<T> = filetidy::Result<(T, i32)>;

pub(crate) struct GlobalArgs {
    /// Emit a JSON envelope instead of text lines.
    pub json: bool,
}

pub mod rename;
