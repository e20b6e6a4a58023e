use crate::core::{BackgroundMessage, BackgroundMessageHandler, ProviderConfig};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use std::sync::Arc;

impl<F> BackgroundMessageHandler for F
where
    F: Fn(BackgroundMessage) + Send + Sync,
{
    fn on_background_message(&self, payload: BackgroundMessage) {
        self(payload)
    }
}

/// An initialized provider identity. Cheap to clone.
#[derive(Debug, Clone)]
pub struct App {
    config: Arc<ProviderConfig>,
}

pub fn initialize_app(config: ProviderConfig) -> Result<App> {
    config.validate()?;
    tracing::debug!(
        "Initialized messaging app for project {} (sender {})",
        config.project_id,
        config.messaging_sender_id
    );
    Ok(App {
        config: Arc::new(config),
    })
}

impl App {
    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    pub fn messaging(&self) -> Messaging {
        Messaging {
            app: self.clone(),
            background_handler: None,
        }
    }
}

/// Whether the page that owns the registration is focused when a message
/// arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Foreground,
    Background,
}

/// What happened to a delivered message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// Passed to the background handler.
    Handled,
    /// Arrived in the background with no handler registered.
    Unhandled,
    /// Page was focused; left to the provider's foreground behavior.
    Foreground,
}

pub struct Messaging {
    app: App,
    background_handler: Option<Arc<dyn BackgroundMessageHandler>>,
}

impl Messaging {
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Registers the background handler, replacing any previous one.
    pub fn on_background_message<H>(&mut self, handler: H)
    where
        H: BackgroundMessageHandler + 'static,
    {
        if self.background_handler.is_some() {
            tracing::debug!("Replacing background message handler");
        }
        self.background_handler = Some(Arc::new(handler));
    }

    pub fn has_background_handler(&self) -> bool {
        self.background_handler.is_some()
    }

    /// Entry point for the provider runtime.
    pub fn deliver(&self, payload: BackgroundMessage, visibility: Visibility) -> Delivery {
        if visibility == Visibility::Foreground {
            return Delivery::Foreground;
        }
        match &self.background_handler {
            Some(handler) => {
                handler.on_background_message(payload);
                Delivery::Handled
            }
            None => {
                tracing::debug!("Background message dropped, no handler registered");
                Delivery::Unhandled
            }
        }
    }
}

impl std::fmt::Debug for Messaging {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Messaging")
            .field("app", &self.app)
            .field("has_background_handler", &self.has_background_handler())
            .finish()
    }
}
