//! Storefront use case: the composition root of the shop.
//!
//! [`Storefront`] wires the catalog and the chat together. It tracks whether
//! the chat is visible and which product (if any) the shopper last asked
//! about, and it creates the [`ChatController`] lazily the first time the chat
//! is opened. Closing the chat only hides it; the transcript lives as long as
//! the storefront does.

use crate::ports::conversation_logger::{ConversationLogger, NoConversationLogger};
use crate::use_cases::advise::Advisor;
use crate::use_cases::chat_session::ChatController;
use concierge_domain::{Catalog, DomainError, Product};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Errors surfaced by storefront actions
#[derive(Error, Debug)]
pub enum StorefrontError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("The chef is still answering; ask about {0} once the reply arrives")]
    ReplyPending(String),
}

/// Shop state: catalog, chat visibility, chat context and the chat itself.
pub struct Storefront {
    catalog: Catalog,
    advisor: Arc<dyn Advisor>,
    conversation_logger: Arc<dyn ConversationLogger>,
    chat: Option<ChatController>,
    chat_visible: bool,
    chat_context: Option<Product>,
}

impl Storefront {
    pub fn new(catalog: Catalog, advisor: Arc<dyn Advisor>) -> Self {
        Self {
            catalog,
            advisor,
            conversation_logger: Arc::new(NoConversationLogger),
            chat: None,
            chat_visible: false,
            chat_context: None,
        }
    }

    /// Create with a conversation logger (handed to the chat when it is created).
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn is_chat_visible(&self) -> bool {
        self.chat_visible
    }

    /// The product the shopper last asked about
    pub fn chat_context(&self) -> Option<&Product> {
        self.chat_context.as_ref()
    }

    pub fn chat(&self) -> Option<&ChatController> {
        self.chat.as_ref()
    }

    pub fn chat_mut(&mut self) -> Option<&mut ChatController> {
        self.chat.as_mut()
    }

    /// "Ask the Chef": show the chat without a product.
    pub fn ask_the_chef(&mut self) -> &mut ChatController {
        self.chat_visible = true;
        let chat = self.ensure_chat();
        chat.open(None);
        chat
    }

    /// "Pairing?" on a card: show the chat about one product.
    ///
    /// If the running session is about a different product it is restarted
    /// for the new one, unless a reply is still pending.
    pub fn ask_about_pairing(
        &mut self,
        product: &Product,
    ) -> Result<&mut ChatController, StorefrontError> {
        let switching = self
            .chat
            .as_ref()
            .and_then(|chat| chat.active_context())
            .is_some_and(|active| active.id() != product.id());

        if switching && self.chat.as_ref().is_some_and(|c| c.is_awaiting_response()) {
            warn!(product = product.name(), "Pairing request ignored: reply pending");
            return Err(StorefrontError::ReplyPending(product.name().to_string()));
        }

        self.chat_context = Some(product.clone());
        self.chat_visible = true;

        let chat = self.ensure_chat();
        if switching {
            info!(product = product.name(), "Restarting chat for a new product");
            chat.restart(Some(product));
        } else {
            chat.open(Some(product));
        }
        Ok(chat)
    }

    /// "Pairing?" by shopper reference (display position or product id).
    pub fn ask_about_pairing_by_ref(
        &mut self,
        reference: &str,
    ) -> Result<&mut ChatController, StorefrontError> {
        let product = self.catalog.resolve(reference)?.clone();
        self.ask_about_pairing(&product)
    }

    /// Hide the chat; the transcript is kept.
    pub fn close_chat(&mut self) {
        self.chat_visible = false;
        if let Some(chat) = self.chat.as_mut() {
            chat.close();
        }
    }

    /// "Add" on a card. The cart is not part of this shop yet.
    pub fn add_to_cart(&self, reference: &str) -> Result<&Product, StorefrontError> {
        let product = self.catalog.resolve(reference)?;
        info!(product = product.name(), "Add to cart requested (no cart available)");
        Ok(product)
    }

    fn ensure_chat(&mut self) -> &mut ChatController {
        let advisor = &self.advisor;
        let logger = &self.conversation_logger;
        self.chat.get_or_insert_with(|| {
            ChatController::new(Arc::clone(advisor)).with_conversation_logger(Arc::clone(logger))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct EchoAdvisor;

    #[async_trait]
    impl Advisor for EchoAdvisor {
        async fn advise(&self, query: &str, context_name: Option<&str>) -> String {
            format!("{} / {}", query, context_name.unwrap_or("none"))
        }
    }

    fn storefront() -> Storefront {
        Storefront::new(Catalog::miss_can(), Arc::new(EchoAdvisor))
    }

    #[test]
    fn test_initial_state() {
        let shop = storefront();
        assert!(!shop.is_chat_visible());
        assert!(shop.chat_context().is_none());
        assert!(shop.chat().is_none());
        assert_eq!(shop.catalog().len(), 4);
    }

    #[test]
    fn test_ask_the_chef_opens_without_context() {
        let mut shop = storefront();
        let chat = shop.ask_the_chef();
        assert_eq!(chat.transcript().len(), 1);
        assert!(chat.active_context().is_none());
        assert!(shop.is_chat_visible());
        assert!(shop.chat_context().is_none());
    }

    #[test]
    fn test_pairing_sets_context_and_visibility() {
        let mut shop = storefront();
        let chat = shop.ask_about_pairing_by_ref("1").unwrap();
        assert_eq!(chat.transcript().len(), 2);
        assert!(shop.is_chat_visible());
        assert_eq!(shop.chat_context().unwrap().name(), "Sardines in Olive Oil");
    }

    #[test]
    fn test_close_only_hides() {
        let mut shop = storefront();
        shop.ask_about_pairing_by_ref("2").unwrap();
        shop.close_chat();
        assert!(!shop.is_chat_visible());
        assert_eq!(shop.chat().unwrap().transcript().len(), 2);
        assert!(!shop.chat().unwrap().is_open());

        shop.ask_the_chef();
        assert_eq!(shop.chat().unwrap().transcript().len(), 2);
    }

    #[test]
    fn test_unknown_product_reference() {
        let mut shop = storefront();
        assert!(matches!(
            shop.ask_about_pairing_by_ref("nope"),
            Err(StorefrontError::Domain(DomainError::UnknownProduct(_)))
        ));
        assert!(!shop.is_chat_visible());
    }

    #[tokio::test]
    async fn test_new_product_restarts_idle_session() {
        let mut shop = storefront();
        shop.ask_about_pairing_by_ref("1").unwrap();
        let chat = shop.ask_about_pairing_by_ref("2").unwrap();
        assert_eq!(
            chat.active_context().unwrap().name(),
            "Mackerel Fillets in Spicy Oil"
        );
        assert_eq!(chat.transcript().len(), 2);

        chat.update_input("wine?");
        let reply = chat.submit_and_wait().await.unwrap();
        assert_eq!(reply.text(), "wine? / Mackerel Fillets in Spicy Oil");
    }

    #[tokio::test]
    async fn test_new_product_refused_while_reply_pending() {
        let mut shop = storefront();
        let chat = shop.ask_about_pairing_by_ref("1").unwrap();
        chat.update_input("recipe?");
        chat.submit().unwrap();

        assert!(matches!(
            shop.ask_about_pairing_by_ref("3"),
            Err(StorefrontError::ReplyPending(_))
        ));
        assert_eq!(shop.chat_context().unwrap().name(), "Sardines in Olive Oil");

        let chat = shop.chat_mut().unwrap();
        assert!(chat.resolve().await.is_some());
    }

    #[test]
    fn test_add_to_cart_is_noop() {
        let mut shop = storefront();
        let product = shop.add_to_cart("4").unwrap().name().to_string();
        assert_eq!(product, "Codfish in Garlic and Oil");
        assert!(shop.chat().is_none());
        assert!(!shop.is_chat_visible());
        shop.close_chat();
    }
}
