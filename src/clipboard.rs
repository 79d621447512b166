use copypasta_ext::prelude::*;
use tracing::info;

use crate::errors::AppError;
use crate::password::GeneratedPassword;

pub fn copy_to_clipboard(password: &GeneratedPassword) -> Result<(), AppError> {
    let mut ctx = copypasta_ext::try_context()
        .ok_or_else(|| AppError::Clipboard(String::from("no clipboard available")))?;

    ctx.set_contents(password.as_str().to_string())
        .map_err(|e| AppError::Clipboard(e.to_string()))?;

    info!("password copied to clipboard");
    Ok(())
}
