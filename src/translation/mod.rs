// Translation module - request validation, provider call, response shaping

pub mod request;
pub mod response;

pub use request::TranslationRequest;
pub use response::TranslationResponse;

use crate::deepl::TranslatorHandle;
use crate::error::Result;
use tracing::debug;

/// Validate `request`, resolve the translator and translate the whole batch
/// in a single provider call.
pub async fn translate(
    handle: &TranslatorHandle,
    request: TranslationRequest,
) -> Result<TranslationResponse> {
    request.validate()?;

    let translator = handle.get()?;
    let target_lang = request.normalized_target_lang();

    debug!(
        "Translating {} text(s) into {}",
        request.texts.len(),
        target_lang
    );

    let results = translator
        .translate_text(&request.texts, &target_lang)
        .await?;

    Ok(TranslationResponse::from(results))
}
