//! Single question from the command line (`--ask`)

use super::transcript::render_message;
use crate::progress::ThinkingSpinner;
use concierge_application::{Storefront, StorefrontError};

/// Ask one question, optionally about one product, and return the rendered
/// reply. `None` when the question is blank.
pub async fn ask_once(
    storefront: &mut Storefront,
    question: &str,
    product: Option<&str>,
    show_progress: bool,
) -> Result<Option<String>, StorefrontError> {
    let chat = match product {
        Some(reference) => storefront.ask_about_pairing_by_ref(reference)?,
        None => storefront.ask_the_chef(),
    };

    chat.update_input(question);
    if chat.submit().is_none() {
        return Ok(None);
    }

    let spinner = if show_progress {
        ThinkingSpinner::start(true)
    } else {
        ThinkingSpinner::hidden()
    };
    let reply = chat.resolve().await.map(render_message);
    spinner.finish();
    Ok(reply)
}
