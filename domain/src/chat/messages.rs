//! Fixed concierge lines shown in the transcript.

/// Seeded as the first BOT message of every session
pub const WELCOME_MESSAGE: &str = "Olá! I am Miss Can's Culinary Concierge. Whether you need a recipe for our sardines or a wine pairing for our mackerel, I am here to help. What shall we prepare today?";

/// Contextual greeting; `{name}` is replaced with the product name
pub const CONTEXT_GREETING_TEMPLATE: &str =
    "I see you are interested in the **{name}**. Would you like a traditional recipe or a modern twist?";

/// Build the contextual greeting for a product name
pub fn context_greeting(product_name: &str) -> String {
    CONTEXT_GREETING_TEMPLATE.replace("{name}", product_name)
}
