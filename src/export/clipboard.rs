use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use crate::error::ExportError;

pub trait ClipboardSink {
    fn copy(&mut self, text: &str) -> Result<(), ExportError>;
}

/// The desktop clipboard.
pub struct SystemClipboard {
    ctx: ClipboardContext,
}

impl SystemClipboard {
    pub fn new() -> Result<Self, ExportError> {
        let ctx = ClipboardContext::new().map_err(|e| ExportError::Clipboard(e.to_string()))?;
        Ok(Self { ctx })
    }
}

impl ClipboardSink for SystemClipboard {
    fn copy(&mut self, text: &str) -> Result<(), ExportError> {
        // copypasta takes an owned String and never hands it back, so this
        // copy can't be zeroized.
        self.ctx
            .set_contents(text.to_owned())
            .map_err(|e| ExportError::Clipboard(e.to_string()))?;
        // Some backends only hand the contents over once they are read back.
        if let Ok(mut retrieved) = self.ctx.get_contents() {
            retrieved.zeroize();
        }
        Ok(())
    }
}

/// Copy the current password, if there is one.
pub fn copy_password<C>(sink: &mut C, password: Option<&str>) -> Result<(), ExportError>
where
    C: ClipboardSink + ?Sized,
{
    let password = password.ok_or(ExportError::NothingToExport)?;
    sink.copy(password)
}
